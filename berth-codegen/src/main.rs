//! Terraform Provider Schema to Berth Bindings Code Generator
//!
//! This tool generates the typed resource and data source modules of a
//! berth provider crate from the output of `terraform providers schema -json`.
//!
//! Usage:
//!   # Regenerate the ECS bindings
//!   terraform providers schema -json > schema.json
//!   berth-codegen --file schema.json --output berth-provider-aws/src
//!
//!   # Fail when the checked-in bindings are out of date
//!   berth-codegen --file schema.json --output berth-provider-aws/src --check
//!
//!   # Print one module to stdout
//!   berth-codegen --file schema.json --type-name aws_ecs_cluster

mod emit;
mod schema;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use similar::TextDiff;

use emit::{Kind, TypeSpec};
use schema::{ProviderSchema, ProviderSchemas};

#[derive(Parser, Debug)]
#[command(name = "berth-codegen")]
#[command(about = "Generate berth provider bindings from Terraform provider schemas")]
struct Args {
    /// Schema document (reads from stdin if not specified)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Provider address inside the schema document
    #[arg(long, default_value = "registry.terraform.io/hashicorp/aws")]
    provider: String,

    /// Only generate types whose name starts with this prefix
    #[arg(long, default_value = "aws_ecs_")]
    prefix: String,

    /// Provider crate `src` directory receiving `resources/` and `data_sources/`
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Generate a single resource type and print it to stdout
    #[arg(long, conflicts_with = "output")]
    type_name: Option<String>,

    /// With --type-name, generate the data source instead of the resource
    #[arg(long, requires = "type_name")]
    data: bool,

    /// Compare existing files with fresh output instead of writing
    #[arg(long, requires = "output")]
    check: bool,
}

/// One file of generated output, relative to the output directory
#[derive(Debug)]
struct GeneratedFile {
    path: PathBuf,
    contents: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let document: ProviderSchemas =
        serde_json::from_str(&schema_json).context("Failed to parse provider schema")?;
    log::debug!("schema format version {}", document.format_version);

    let provider = document
        .provider_schemas
        .get(&args.provider)
        .with_context(|| format!("Provider '{}' not found in schema", args.provider))?;

    if let Some(type_name) = &args.type_name {
        let (kind, types) = if args.data {
            (Kind::DataSource, &provider.data_source_schemas)
        } else {
            (Kind::Resource, &provider.resource_schemas)
        };
        let schema = types
            .get(type_name)
            .with_context(|| format!("Type '{}' not found", type_name))?;
        let code = emit::generate_type(&TypeSpec {
            tf_type: type_name,
            kind,
            body: &schema.block,
        })?;
        print!("{}", code);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(output) = &args.output else {
        bail!("either --output or --type-name is required");
    };

    let files = generate_all(provider, &args.prefix)?;
    if args.check {
        let drifted = check_files(output, &files)?;
        if drifted > 0 {
            eprintln!("{} generated file(s) are out of date", drifted);
            return Ok(ExitCode::FAILURE);
        }
        eprintln!("All {} generated files are up to date", files.len());
    } else {
        write_files(output, &files)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Every module and `mod.rs` for the types matching `prefix`
fn generate_all(provider: &ProviderSchema, prefix: &str) -> Result<Vec<GeneratedFile>> {
    let mut files = Vec::new();
    for (kind, dir, types) in [
        (Kind::Resource, "resources", &provider.resource_schemas),
        (Kind::DataSource, "data_sources", &provider.data_source_schemas),
    ] {
        let specs: Vec<TypeSpec<'_>> = types
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, schema)| TypeSpec {
                tf_type: name,
                kind,
                body: &schema.block,
            })
            .collect();
        if specs.is_empty() {
            log::warn!("no {} matches prefix '{}'", dir, prefix);
            continue;
        }

        for spec in &specs {
            let contents = emit::generate_type(spec)
                .with_context(|| format!("Failed to generate {}", spec.tf_type))?;
            files.push(GeneratedFile {
                path: Path::new(dir).join(format!("{}.rs", spec.module_name())),
                contents,
            });
        }
        files.push(GeneratedFile {
            path: Path::new(dir).join("mod.rs"),
            contents: emit::generate_mod(kind, &specs)?,
        });
    }
    Ok(files)
}

fn write_files(output: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = output.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, &file.contents)
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
        eprintln!("Generated: {}", path.display());
    }
    Ok(())
}

/// Print a unified diff for every file that differs; returns how many did
fn check_files(output: &Path, files: &[GeneratedFile]) -> Result<usize> {
    let mut drifted = 0;
    for file in files {
        let path = output.join(&file.path);
        let existing = match std::fs::read_to_string(&path) {
            Ok(existing) => existing,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        if existing == file.contents {
            continue;
        }

        drifted += 1;
        let name = path.display().to_string();
        let diff = TextDiff::from_lines(&existing, &file.contents);
        print!(
            "{}",
            diff.unified_diff()
                .context_radius(3)
                .header(&name, &format!("{} (generated)", name))
        );
    }
    Ok(drifted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> ProviderSchema {
        serde_json::from_value(json!({
            "resource_schemas": {
                "aws_ecs_tag": {
                    "version": 0,
                    "block": {
                        "attributes": {
                            "id": {"type": "string", "optional": true, "computed": true},
                            "key": {"type": "string", "required": true},
                            "resource_arn": {"type": "string", "required": true},
                            "value": {"type": "string", "required": true}
                        }
                    }
                },
                "aws_s3_bucket": {
                    "version": 0,
                    "block": {"attributes": {"bucket": {"type": "string", "optional": true}}}
                }
            },
            "data_source_schemas": {}
        }))
        .unwrap()
    }

    #[test]
    fn generates_only_matching_types() {
        let files = generate_all(&provider(), "aws_ecs_").unwrap();
        let paths: Vec<String> = files
            .iter()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(paths, vec!["resources/ecs_tag.rs", "resources/mod.rs"]);
    }

    #[test]
    fn write_then_check_reports_no_drift() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate_all(&provider(), "aws_ecs_").unwrap();
        write_files(dir.path(), &files).unwrap();
        assert_eq!(check_files(dir.path(), &files).unwrap(), 0);

        std::fs::write(dir.path().join("resources/ecs_tag.rs"), "// edited\n").unwrap();
        assert_eq!(check_files(dir.path(), &files).unwrap(), 1);
    }

    #[test]
    fn checked_in_ecs_bindings_are_current() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../berth-provider-aws");
        let json = std::fs::read_to_string(root.join("schemas/aws_ecs.json")).unwrap();
        let document: ProviderSchemas = serde_json::from_str(&json).unwrap();
        let provider = &document.provider_schemas["registry.terraform.io/hashicorp/aws"];

        let files = generate_all(provider, "aws_ecs_").unwrap();
        assert_eq!(files.len(), 14);
        assert_eq!(check_files(&root.join("src"), &files).unwrap(), 0);
    }

    #[test]
    fn missing_files_count_as_drift() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate_all(&provider(), "aws_ecs_").unwrap();
        assert_eq!(check_files(dir.path(), &files).unwrap(), files.len());
    }
}
