//! Generated resource bindings
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

pub mod ecs_account_setting_default;
pub mod ecs_capacity_provider;
pub mod ecs_cluster;
pub mod ecs_cluster_capacity_providers;
pub mod ecs_service;
pub mod ecs_tag;
pub mod ecs_task_definition;
pub mod ecs_task_set;

use berth_core::{
    Block, Fields, MetaArguments, ResourceHandle, ResourceKind, ResourceSchema, Stack,
    TerraformElement,
};

/// Schemas of every generated resource
pub fn schemas() -> Vec<&'static ResourceSchema> {
    vec![
        ecs_account_setting_default::schema(),
        ecs_capacity_provider::schema(),
        ecs_cluster::schema(),
        ecs_cluster_capacity_providers::schema(),
        ecs_service::schema(),
        ecs_tag::schema(),
        ecs_task_definition::schema(),
        ecs_task_set::schema(),
    ]
}

/// Register one of the resources from its field map
pub fn build(
    stack: &mut Stack,
    resource_type: &str,
    id: &str,
    fields: &Fields,
    meta: MetaArguments,
) -> berth_core::Result<ResourceHandle> {
    match resource_type {
        ecs_account_setting_default::EcsAccountSettingDefault::TF_RESOURCE_TYPE => {
            let mut config = ecs_account_setting_default::EcsAccountSettingDefaultConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_account_setting_default::schema())?;
            config.meta = meta;
            Ok(ecs_account_setting_default::EcsAccountSettingDefault::new(stack, id, config)?.element().clone())
        }
        ecs_capacity_provider::EcsCapacityProvider::TF_RESOURCE_TYPE => {
            let mut config = ecs_capacity_provider::EcsCapacityProviderConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_capacity_provider::schema())?;
            config.meta = meta;
            Ok(ecs_capacity_provider::EcsCapacityProvider::new(stack, id, config)?.element().clone())
        }
        ecs_cluster::EcsCluster::TF_RESOURCE_TYPE => {
            let mut config = ecs_cluster::EcsClusterConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_cluster::schema())?;
            config.meta = meta;
            Ok(ecs_cluster::EcsCluster::new(stack, id, config)?.element().clone())
        }
        ecs_cluster_capacity_providers::EcsClusterCapacityProviders::TF_RESOURCE_TYPE => {
            let mut config = ecs_cluster_capacity_providers::EcsClusterCapacityProvidersConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_cluster_capacity_providers::schema())?;
            config.meta = meta;
            Ok(ecs_cluster_capacity_providers::EcsClusterCapacityProviders::new(stack, id, config)?.element().clone())
        }
        ecs_service::EcsService::TF_RESOURCE_TYPE => {
            let mut config = ecs_service::EcsServiceConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_service::schema())?;
            config.meta = meta;
            Ok(ecs_service::EcsService::new(stack, id, config)?.element().clone())
        }
        ecs_tag::EcsTag::TF_RESOURCE_TYPE => {
            let mut config = ecs_tag::EcsTagConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_tag::schema())?;
            config.meta = meta;
            Ok(ecs_tag::EcsTag::new(stack, id, config)?.element().clone())
        }
        ecs_task_definition::EcsTaskDefinition::TF_RESOURCE_TYPE => {
            let mut config = ecs_task_definition::EcsTaskDefinitionConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_task_definition::schema())?;
            config.meta = meta;
            Ok(ecs_task_definition::EcsTaskDefinition::new(stack, id, config)?.element().clone())
        }
        ecs_task_set::EcsTaskSet::TF_RESOURCE_TYPE => {
            let mut config = ecs_task_set::EcsTaskSetConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), ecs_task_set::schema())?;
            config.meta = meta;
            Ok(ecs_task_set::EcsTaskSet::new(stack, id, config)?.element().clone())
        }
        other => Err(berth_core::Error::UnknownType {
            kind: ResourceKind::Resource,
            resource_type: other.to_string(),
        }),
    }
}
