//! Generated data source bindings
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

pub mod data_aws_ecs_cluster;
pub mod data_aws_ecs_container_definition;
pub mod data_aws_ecs_service;
pub mod data_aws_ecs_task_definition;

use berth_core::{
    Block, Fields, MetaArguments, ResourceHandle, ResourceKind, ResourceSchema, Stack,
    TerraformElement,
};

/// Schemas of every generated data source
pub fn schemas() -> Vec<&'static ResourceSchema> {
    vec![
        data_aws_ecs_cluster::schema(),
        data_aws_ecs_container_definition::schema(),
        data_aws_ecs_service::schema(),
        data_aws_ecs_task_definition::schema(),
    ]
}

/// Register one of the data sources from its field map
pub fn build(
    stack: &mut Stack,
    resource_type: &str,
    id: &str,
    fields: &Fields,
    meta: MetaArguments,
) -> berth_core::Result<ResourceHandle> {
    match resource_type {
        data_aws_ecs_cluster::DataAwsEcsCluster::TF_RESOURCE_TYPE => {
            let mut config = data_aws_ecs_cluster::DataAwsEcsClusterConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), data_aws_ecs_cluster::schema())?;
            config.meta = meta;
            Ok(data_aws_ecs_cluster::DataAwsEcsCluster::new(stack, id, config)?.element().clone())
        }
        data_aws_ecs_container_definition::DataAwsEcsContainerDefinition::TF_RESOURCE_TYPE => {
            let mut config = data_aws_ecs_container_definition::DataAwsEcsContainerDefinitionConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), data_aws_ecs_container_definition::schema())?;
            config.meta = meta;
            Ok(data_aws_ecs_container_definition::DataAwsEcsContainerDefinition::new(stack, id, config)?.element().clone())
        }
        data_aws_ecs_service::DataAwsEcsService::TF_RESOURCE_TYPE => {
            let mut config = data_aws_ecs_service::DataAwsEcsServiceConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), data_aws_ecs_service::schema())?;
            config.meta = meta;
            Ok(data_aws_ecs_service::DataAwsEcsService::new(stack, id, config)?.element().clone())
        }
        data_aws_ecs_task_definition::DataAwsEcsTaskDefinition::TF_RESOURCE_TYPE => {
            let mut config = data_aws_ecs_task_definition::DataAwsEcsTaskDefinitionConfig::from_fields(fields)?;
            stack.check_fields(id, fields.as_map(), data_aws_ecs_task_definition::schema())?;
            config.meta = meta;
            Ok(data_aws_ecs_task_definition::DataAwsEcsTaskDefinition::new(stack, id, config)?.element().clone())
        }
        other => Err(berth_core::Error::UnknownType {
            kind: ResourceKind::DataSource,
            resource_type: other.to_string(),
        }),
    }
}
