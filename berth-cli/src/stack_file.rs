//! Stack description files
//!
//! A stack file lists the elements of one stack as JSON:
//!
//! ```json
//! {
//!   "stack": "app",
//!   "resources": [
//!     {"type": "aws_ecs_cluster", "id": "main", "config": {"name": "demo"}},
//!     {"type": "aws_ecs_cluster", "id": "shared", "data": true,
//!      "config": {"cluster_name": "shared"}},
//!     {"type": "aws_ecs_service", "id": "web",
//!      "config": {"name": "web", "cluster": "${aws_ecs_cluster.main.id}"},
//!      "meta": {"depends_on": ["aws_ecs_cluster.main"]}}
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use berth_core::{Fields, MetaArguments, ResourceKind, Settings, Stack, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackFile {
    pub stack: String,
    #[serde(default)]
    pub resources: Vec<ElementSpec>,
}

/// One resource or data source entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub data: bool,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub meta: MetaArguments,
}

impl ElementSpec {
    pub fn kind(&self) -> ResourceKind {
        if self.data {
            ResourceKind::DataSource
        } else {
            ResourceKind::Resource
        }
    }

    pub fn address(&self) -> String {
        match self.kind() {
            ResourceKind::Resource => format!("{}.{}", self.resource_type, self.id),
            ResourceKind::DataSource => format!("data.{}.{}", self.resource_type, self.id),
        }
    }

    fn fields(&self) -> Result<Fields, String> {
        let map = self
            .config
            .iter()
            .map(|(name, json)| {
                Value::from_json(json)
                    .map(|value| (name.clone(), value))
                    .map_err(|e| format!("{}: {}", name, e))
            })
            .collect::<Result<_, String>>()?;
        Ok(Fields::from_map(map))
    }
}

impl StackFile {
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::parse(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Build every element through the typed bindings
    ///
    /// All failing elements are reported together, one per line.
    pub fn build(&self, settings: Settings) -> Result<Stack, String> {
        let mut stack = Stack::with_settings(&self.stack, settings);
        berth_provider_aws::configure(&mut stack);

        let mut errors = Vec::new();
        for spec in &self.resources {
            let fields = match spec.fields() {
                Ok(fields) => fields,
                Err(e) => {
                    errors.push(format!("{}: {}", spec.address(), e));
                    continue;
                }
            };
            if let Err(e) = berth_provider_aws::build(
                &mut stack,
                spec.kind(),
                &spec.resource_type,
                &spec.id,
                &fields,
                spec.meta.clone(),
            ) {
                errors.push(format!("{}: {}", spec.address(), e));
            }
        }

        if errors.is_empty() {
            Ok(stack)
        } else {
            Err(errors.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(json: &str) -> Result<Stack, String> {
        StackFile::parse(json)
            .unwrap()
            .build(Settings::default().type_check(true))
    }

    #[test]
    fn builds_resources_and_data_sources() {
        let stack = build(
            r#"{
                "stack": "app",
                "resources": [
                    {"type": "aws_ecs_cluster", "id": "main", "config": {"name": "demo"}},
                    {"type": "aws_ecs_cluster", "id": "shared", "data": true,
                     "config": {"cluster_name": "shared"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(stack.name(), "app");
        assert_eq!(stack.len(), 2);
        assert!(stack
            .find(ResourceKind::DataSource, "aws_ecs_cluster", "shared")
            .is_some());
    }

    #[test]
    fn meta_arguments_are_carried() {
        let stack = build(
            r#"{
                "stack": "app",
                "resources": [
                    {"type": "aws_ecs_service", "id": "web",
                     "config": {"name": "web", "desired_count": 2},
                     "meta": {"depends_on": ["aws_ecs_cluster.main"], "provider": "aws.west"}}
                ]
            }"#,
        )
        .unwrap();
        let meta = stack.resources()[0].meta();
        assert_eq!(meta.depends_on, vec!["aws_ecs_cluster.main"]);
        assert_eq!(meta.provider.as_deref(), Some("aws.west"));
    }

    #[test]
    fn all_errors_are_reported() {
        let err = build(
            r#"{
                "stack": "app",
                "resources": [
                    {"type": "aws_ecs_service", "id": "web", "config": {"desired_count": 1}},
                    {"type": "aws_ecs_queue", "id": "q", "config": {}},
                    {"type": "aws_ecs_cluster", "id": "main", "config": {"name": null}}
                ]
            }"#,
        )
        .unwrap_err();
        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "aws_ecs_service.web: Required property 'name' is missing"
        );
        assert_eq!(
            lines[1],
            "aws_ecs_queue.q: Unknown resource type 'aws_ecs_queue'"
        );
        assert!(lines[2].starts_with("aws_ecs_cluster.main: name:"));
    }

    #[test]
    fn arguments_outside_the_schema_fail_validation() {
        let err = build(
            r#"{
                "stack": "app",
                "resources": [
                    {"type": "aws_ecs_cluster", "id": "main",
                     "config": {"name": "demo", "bogus": true, "arn": "arn:x",
                                "configuration": [{}, {}]}}
                ]
            }"#,
        )
        .unwrap_err();
        assert!(err.starts_with("aws_ecs_cluster.main: Validation failed for aws_ecs_cluster.main:"));
        assert!(err.contains("Unknown attribute 'bogus'"));
        assert!(err.contains("Attribute 'arn' is computed and cannot be set"));
        assert!(err.contains("Block 'configuration' allows at most 1 item(s), got 2"));
    }

    #[test]
    fn references_inside_collections_are_kept() {
        let stack = build(
            r#"{
                "stack": "app",
                "resources": [
                    {"type": "aws_ecs_cluster", "id": "main",
                     "config": {"name": "demo", "tags": {"owner": "${var.owner}"}}},
                    {"type": "aws_ecs_service", "id": "web",
                     "config": {"name": "web",
                                "network_configuration": [
                                    {"subnets": ["${aws_subnet.a.id}", "subnet-b"]}
                                ]}}
                ]
            }"#,
        )
        .unwrap();
        let doc = stack.synth().unwrap();
        assert_eq!(
            doc["resource"]["aws_ecs_cluster"]["main"]["tags"]["owner"],
            "${var.owner}"
        );
        assert_eq!(
            doc["resource"]["aws_ecs_service"]["web"]["network_configuration"][0]["subnets"],
            serde_json::json!(["${aws_subnet.a.id}", "subnet-b"])
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(StackFile::parse(r#"{"stack": "app", "outputs": {}}"#).is_err());
    }
}
