//! Registry - Look up and construct bindings by Terraform type string

use berth_core::{Fields, MetaArguments, ResourceHandle, ResourceKind, ResourceSchema, Stack};

use crate::{data_sources, resources};

/// Schemas of every binding of `kind`, sorted by type string
pub fn schemas(kind: ResourceKind) -> Vec<&'static ResourceSchema> {
    match kind {
        ResourceKind::Resource => resources::schemas(),
        ResourceKind::DataSource => data_sources::schemas(),
    }
}

/// Schema of the `kind` binding named `resource_type`
pub fn schema_for(kind: ResourceKind, resource_type: &str) -> Option<&'static ResourceSchema> {
    schemas(kind)
        .into_iter()
        .find(|schema| schema.resource_type == resource_type)
}

/// Construct a `kind` binding from a field map and register it in `stack`
///
/// The fields go through the typed config of the binding, so missing
/// required arguments fail here exactly as they do for the typed builders.
/// With type checking enabled the raw fields are also validated against the
/// schema, so arguments the typed config would drop are reported instead.
pub fn build(
    stack: &mut Stack,
    kind: ResourceKind,
    resource_type: &str,
    id: &str,
    fields: &Fields,
    meta: MetaArguments,
) -> berth_core::Result<ResourceHandle> {
    log::debug!("building {} {}.{}", kind, resource_type, id);
    match kind {
        ResourceKind::Resource => resources::build(stack, resource_type, id, fields, meta),
        ResourceKind::DataSource => data_sources::build(stack, resource_type, id, fields, meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_core::{Error, Settings, StackError, TypeError, Value};

    #[test]
    fn every_type_is_listed() {
        let names: Vec<&str> = schemas(ResourceKind::Resource)
            .iter()
            .map(|s| s.resource_type.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "aws_ecs_account_setting_default",
                "aws_ecs_capacity_provider",
                "aws_ecs_cluster",
                "aws_ecs_cluster_capacity_providers",
                "aws_ecs_service",
                "aws_ecs_tag",
                "aws_ecs_task_definition",
                "aws_ecs_task_set",
            ]
        );
        assert_eq!(schemas(ResourceKind::DataSource).len(), 4);
    }

    #[test]
    fn schema_lookup_respects_kind() {
        let resource = schema_for(ResourceKind::Resource, "aws_ecs_service").unwrap();
        assert!(resource.attributes.contains_key("desired_count"));
        assert!(resource.blocks.contains_key("load_balancer"));

        let data = schema_for(ResourceKind::DataSource, "aws_ecs_service").unwrap();
        assert_eq!(data.kind, ResourceKind::DataSource);
        assert!(data.blocks.is_empty());

        assert!(schema_for(ResourceKind::DataSource, "aws_ecs_tag").is_none());
    }

    #[test]
    fn build_from_fields() {
        let mut stack = Stack::new("app");
        let mut fields = Fields::new();
        fields.put("name", &"demo".to_string());
        let handle = build(
            &mut stack,
            ResourceKind::Resource,
            "aws_ecs_cluster",
            "main",
            &fields,
            MetaArguments::default(),
        )
        .unwrap();
        assert_eq!(handle.address(), "aws_ecs_cluster.main");
        assert_eq!(
            handle.fields().get("name"),
            Some(&Value::String("demo".to_string()))
        );
    }

    fn cluster_fields() -> Fields {
        let mut fields = Fields::new();
        fields.put("name", &"demo".to_string());
        fields.put("bogus", &true);
        fields.put("arn", &"arn:x".to_string());
        fields
    }

    #[test]
    fn build_rejects_fields_the_config_would_drop() {
        let mut stack = Stack::with_settings("app", Settings::default().type_check(true));
        let err = build(
            &mut stack,
            ResourceKind::Resource,
            "aws_ecs_cluster",
            "main",
            &cluster_fields(),
            MetaArguments::default(),
        )
        .unwrap_err();
        let Error::Stack(StackError::Validation { address, errors }) = err else {
            panic!("expected validation error, got {err}");
        };
        assert_eq!(address, "aws_ecs_cluster.main");
        assert!(errors.contains(&TypeError::ComputedAttribute {
            name: "arn".to_string()
        }));
        assert!(errors.contains(&TypeError::UnknownAttribute {
            name: "bogus".to_string()
        }));
        assert!(stack.is_empty());
    }

    #[test]
    fn build_without_type_check_keeps_known_fields() {
        let mut stack = Stack::new("app");
        let handle = build(
            &mut stack,
            ResourceKind::Resource,
            "aws_ecs_cluster",
            "main",
            &cluster_fields(),
            MetaArguments::default(),
        )
        .unwrap();
        let fields = handle.fields();
        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("bogus"));
        assert!(!fields.contains_key("arn"));
    }

    #[test]
    fn build_reports_missing_required() {
        let mut stack = Stack::new("app");
        let err = build(
            &mut stack,
            ResourceKind::Resource,
            "aws_ecs_service",
            "web",
            &Fields::new(),
            MetaArguments::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Required property 'name' is missing");
        assert!(stack.is_empty());
    }

    #[test]
    fn build_rejects_unknown_types() {
        let mut stack = Stack::new("app");
        let err = build(
            &mut stack,
            ResourceKind::DataSource,
            "aws_ecs_tag",
            "x",
            &Fields::new(),
            MetaArguments::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownType { .. }));
        assert_eq!(err.to_string(), "Unknown data source type 'aws_ecs_tag'");
    }
}
