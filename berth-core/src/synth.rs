//! Synth - Render a stack as Terraform JSON configuration

use serde_json::{Map, Value as Json, json};

use crate::resource::ResourceKind;
use crate::stack::{ResourceHandle, Stack};

impl Stack {
    /// Terraform JSON document for every registered element
    pub fn synth(&self) -> Result<Json, serde_json::Error> {
        let mut root = Map::new();

        if self.settings().emit_metadata {
            root.insert(
                "//".to_string(),
                json!({
                    "metadata": {
                        "backend": "local",
                        "stackName": self.name(),
                        "version": env!("CARGO_PKG_VERSION"),
                    }
                }),
            );
        }

        if !self.required_providers().is_empty() {
            root.insert(
                "terraform".to_string(),
                json!({ "required_providers": serde_json::to_value(self.required_providers())? }),
            );
        }

        let mut resources = Map::new();
        let mut data = Map::new();
        for handle in self.resources() {
            let kind = handle.kind();
            let id = handle.id();
            let body = self.element_body(handle)?;

            let section = match kind {
                ResourceKind::Resource => &mut resources,
                ResourceKind::DataSource => &mut data,
            };
            if let Json::Object(by_name) = section
                .entry(id.resource_type.clone())
                .or_insert_with(|| Json::Object(Map::new()))
            {
                by_name.insert(id.name.clone(), body);
            }
        }

        if !resources.is_empty() {
            root.insert("resource".to_string(), Json::Object(resources));
        }
        if !data.is_empty() {
            root.insert("data".to_string(), Json::Object(data));
        }

        log::debug!(
            "synthesized stack '{}' with {} element(s)",
            self.name(),
            self.len()
        );
        Ok(Json::Object(root))
    }

    /// [`Stack::synth`] rendered as text, pretty-printed per [`crate::Settings::pretty`]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let document = self.synth()?;
        if self.settings().pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
    }

    fn element_body(&self, handle: &ResourceHandle) -> Result<Json, serde_json::Error> {
        let resource = handle.snapshot();

        let mut body: Map<String, Json> = resource
            .attributes
            .fields()
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        body.extend(resource.meta.to_json(resource.kind)?);

        if self.settings().emit_metadata {
            body.insert(
                "//".to_string(),
                json!({
                    "metadata": {
                        "path": format!("{}/{}", self.name(), resource.id.name),
                        "uniqueId": resource.id.name,
                    }
                }),
            );
        }

        Ok(Json::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::meta::{Connection, MetaArguments};
    use crate::path::AttributePath;
    use crate::resource::{Reference, Value};
    use crate::schema::ResourceSchema;
    use crate::settings::Settings;

    fn fields(json: Json) -> BTreeMap<String, Value> {
        match Value::from_json(&json).unwrap() {
            Value::Map(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn stack_with_cluster(settings: Settings) -> (Stack, ResourceHandle) {
        let mut stack = Stack::with_settings("app", settings);
        stack.required_provider("aws", "hashicorp/aws", Some("~> 4.0"));
        let cluster = stack
            .register(
                ResourceKind::Resource,
                "aws_ecs_cluster",
                "main",
                fields(json!({"name": "demo"})),
                MetaArguments::default(),
                &ResourceSchema::new("aws_ecs_cluster"),
            )
            .unwrap();
        (stack, cluster)
    }

    #[test]
    fn synthesizes_resources_and_providers() {
        let (stack, _) = stack_with_cluster(Settings::default().emit_metadata(false));
        assert_eq!(
            stack.synth().unwrap(),
            json!({
                "terraform": {
                    "required_providers": {
                        "aws": {"source": "hashicorp/aws", "version": "~> 4.0"}
                    }
                },
                "resource": {
                    "aws_ecs_cluster": {"main": {"name": "demo"}}
                }
            })
        );
    }

    #[test]
    fn metadata_is_attached() {
        let (stack, _) = stack_with_cluster(Settings::default());
        let doc = stack.synth().unwrap();
        assert_eq!(doc["//"]["metadata"]["stackName"], json!("app"));
        assert_eq!(
            doc["resource"]["aws_ecs_cluster"]["main"]["//"]["metadata"],
            json!({"path": "app/main", "uniqueId": "main"})
        );
    }

    #[test]
    fn references_and_meta_arguments_render() {
        let (mut stack, cluster) = stack_with_cluster(Settings::default().emit_metadata(false));
        let mut service_fields = fields(json!({"name": "web", "desired_count": 2}));
        service_fields.insert(
            "cluster".to_string(),
            Value::Ref(cluster.reference(AttributePath::attr("id"))),
        );
        let service = stack
            .register(
                ResourceKind::Resource,
                "aws_ecs_service",
                "web",
                service_fields,
                MetaArguments::new().count(Reference::raw("var.enabled ? 1 : 0")),
                &ResourceSchema::new("aws_ecs_service"),
            )
            .unwrap();
        service.add_depends_on(&cluster);

        let doc = stack.synth().unwrap();
        assert_eq!(
            doc["resource"]["aws_ecs_service"]["web"],
            json!({
                "name": "web",
                "desired_count": 2,
                "cluster": "${aws_ecs_cluster.main.id}",
                "count": "${var.enabled ? 1 : 0}",
                "depends_on": ["aws_ecs_cluster.main"]
            })
        );
    }

    #[test]
    fn data_sources_go_under_data() {
        let mut stack = Stack::with_settings("app", Settings::default().emit_metadata(false));
        stack
            .register(
                ResourceKind::DataSource,
                "aws_ecs_cluster",
                "existing",
                fields(json!({"cluster_name": "shared"})),
                MetaArguments::new().connection(Connection::ssh("host")),
                &ResourceSchema::data_source("aws_ecs_cluster"),
            )
            .unwrap();

        let doc = stack.synth().unwrap();
        assert!(doc.get("resource").is_none());
        assert_eq!(
            doc["data"]["aws_ecs_cluster"]["existing"],
            json!({"cluster_name": "shared"})
        );
    }

    #[test]
    fn to_json_honours_pretty_setting() {
        let (stack, _) = stack_with_cluster(Settings::default().pretty(false));
        assert!(!stack.to_json().unwrap().contains('\n'));

        let (stack, _) = stack_with_cluster(Settings::default());
        assert!(stack.to_json().unwrap().contains('\n'));
    }
}
