mod stack_file;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;

use berth_core::{AttributeSchema, BlockSchema, ResourceKind, ResourceSchema, Settings};
use stack_file::StackFile;

#[derive(Parser)]
#[command(name = "berth")]
#[command(about = "Typed Terraform bindings for Amazon ECS", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available types, or show the schema of one
    Schema {
        /// Terraform type, e.g. aws_ecs_service
        type_name: Option<String>,

        /// Look up the data source instead of the resource
        #[arg(long)]
        data: bool,
    },
    /// Validate a stack description
    Validate {
        /// Path to the stack file
        #[arg(default_value = "stack.json")]
        file: PathBuf,
    },
    /// Write the Terraform JSON configuration of a stack description
    Synth {
        /// Path to the stack file
        #[arg(default_value = "stack.json")]
        file: PathBuf,

        /// Output file, `-` for stdout
        #[arg(long, short, default_value = "cdk.tf.json")]
        output: PathBuf,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schema { type_name, data } => run_schema(type_name.as_deref(), data),
        Commands::Validate { file } => run_validate(&file),
        Commands::Synth { file, output } => run_synth(&file, &output),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "berth", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn kind_of(data: bool) -> ResourceKind {
    if data {
        ResourceKind::DataSource
    } else {
        ResourceKind::Resource
    }
}

fn run_schema(type_name: Option<&str>, data: bool) -> Result<(), String> {
    let Some(type_name) = type_name else {
        for (title, kind) in [
            ("Resources:", ResourceKind::Resource),
            ("Data sources:", ResourceKind::DataSource),
        ] {
            println!("{}", title.cyan().bold());
            for schema in berth_provider_aws::schemas(kind) {
                println!("  • {}", schema.resource_type);
            }
        }
        return Ok(());
    };

    let kind = kind_of(data);
    let schema = berth_provider_aws::schema_for(kind, type_name)
        .ok_or_else(|| format!("Unknown {} type '{}'", kind, type_name))?;
    print!("{}", format_schema(schema));
    Ok(())
}

/// Human-readable outline of a schema
fn format_schema(schema: &ResourceSchema) -> String {
    let mut out = format!("{} ({})\n", schema.resource_type.bold(), schema.kind);
    if let Some(desc) = &schema.description {
        out.push_str(&format!("  {}\n", desc));
    }
    format_body(&mut out, &schema.attributes, &schema.blocks, 1);
    out
}

fn format_body(
    out: &mut String,
    attributes: &BTreeMap<String, AttributeSchema>,
    blocks: &BTreeMap<String, BlockSchema>,
    depth: usize,
) {
    let indent = "  ".repeat(depth);
    for attr in attributes.values() {
        let role = if attr.required {
            "required".red().to_string()
        } else if attr.optional && attr.computed {
            "optional, computed".yellow().to_string()
        } else if attr.optional {
            "optional".green().to_string()
        } else {
            "computed".dimmed().to_string()
        };
        let mut line = format!("{}{}: {} ({})", indent, attr.name, attr.attr_type, role);
        if attr.sensitive {
            line.push_str(" [sensitive]");
        }
        if attr.deprecated {
            line.push_str(" [deprecated]");
        }
        out.push_str(&line);
        out.push('\n');
    }
    for block in blocks.values() {
        let mut limits = String::new();
        if block.min_items > 0 {
            limits.push_str(&format!(", min {}", block.min_items));
        }
        if block.max_items > 0 {
            limits.push_str(&format!(", max {}", block.max_items));
        }
        out.push_str(&format!(
            "{}{} {{{}{}}}\n",
            indent,
            block.name.cyan(),
            block.nesting,
            limits
        ));
        format_body(out, &block.attributes, &block.blocks, depth + 1);
    }
}

fn run_validate(file: &Path) -> Result<(), String> {
    let stack_file = StackFile::load(file)?;

    println!("{}", "Validating...".cyan());
    let stack = stack_file.build(Settings::from_env().type_check(true))?;

    println!(
        "{}",
        format!("✓ {} elements validated successfully.", stack.len())
            .green()
            .bold()
    );
    for handle in stack.resources() {
        println!("  • {}", handle.address());
    }
    Ok(())
}

fn run_synth(file: &Path, output: &Path) -> Result<(), String> {
    let stack_file = StackFile::load(file)?;
    let stack = stack_file.build(Settings::from_env().type_check(true))?;
    let json = stack
        .to_json()
        .map_err(|e| format!("Failed to render {}: {}", file.display(), e))?;

    if output == Path::new("-") {
        println!("{}", json);
        return Ok(());
    }

    fs::write(output, format!("{}\n", json))
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    println!(
        "{}",
        format!(
            "✓ Synthesized {} elements to {}",
            stack.len(),
            output.display()
        )
        .green()
        .bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STACK: &str = r#"{
        "stack": "app",
        "resources": [
            {"type": "aws_ecs_cluster", "id": "main", "config": {"name": "demo"}},
            {"type": "aws_ecs_service", "id": "web",
             "config": {
                "name": "web",
                "cluster": "${aws_ecs_cluster.main.id}",
                "desired_count": 2,
                "load_balancer": [
                    {"container_name": "web", "container_port": 80}
                ]
             },
             "meta": {"depends_on": ["aws_ecs_cluster.main"]}}
        ]
    }"#;

    fn write_stack(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("stack.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn validate_accepts_a_good_stack() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_stack(dir.path(), STACK);
        assert!(run_validate(&file).is_ok());
    }

    #[test]
    fn validate_reports_bad_elements() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_stack(
            dir.path(),
            r#"{"stack": "app", "resources": [
                {"type": "aws_ecs_service", "id": "web", "config": {}}
            ]}"#,
        );
        let err = run_validate(&file).unwrap_err();
        assert_eq!(err, "aws_ecs_service.web: Required property 'name' is missing");
    }

    #[test]
    fn validate_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_validate(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn synth_writes_terraform_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_stack(dir.path(), STACK);
        let output = dir.path().join("cdk.tf.json");
        run_synth(&file, &output).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let web = &doc["resource"]["aws_ecs_service"]["web"];
        assert_eq!(web["cluster"], "${aws_ecs_cluster.main.id}");
        assert_eq!(web["desired_count"], 2);
        assert_eq!(web["load_balancer"][0]["container_port"], 80);
        assert_eq!(web["depends_on"][0], "aws_ecs_cluster.main");
        assert_eq!(
            doc["terraform"]["required_providers"]["aws"]["source"],
            "hashicorp/aws"
        );
    }

    #[test]
    fn schema_outline_lists_blocks() {
        colored::control::set_override(false);
        let schema =
            berth_provider_aws::schema_for(ResourceKind::Resource, "aws_ecs_service").unwrap();
        let text = format_schema(schema);
        assert!(text.starts_with("aws_ecs_service (resource)\n"));
        assert!(text.contains("  name: string (required)\n"));
        assert!(text.contains("  network_configuration {list, max 1}\n"));
        assert!(text.contains("    subnets: set(string) (required)\n"));
    }

    #[test]
    fn schema_rejects_unknown_types() {
        let err = run_schema(Some("aws_ecs_queue"), false).unwrap_err();
        assert_eq!(err, "Unknown resource type 'aws_ecs_queue'");
    }
}
