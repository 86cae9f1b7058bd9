//! `aws_ecs_service` data source
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, ConfigError, Fields, Input, MetaArguments,
    Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_service`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::data_source("aws_ecs_service")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("cluster_arn", AttributeType::String).required())
            .attribute(AttributeSchema::new("desired_count", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("launch_type", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("scheduling_strategy", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("service_name", AttributeType::String).required())
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))).read_only())
            .attribute(AttributeSchema::new("task_definition", AttributeType::String).read_only())
    })
}

/// Arguments of [`DataAwsEcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsEcsServiceConfig {
    pub cluster_arn: Input<String>,
    pub id: Option<Input<String>>,
    pub service_name: Input<String>,
    pub meta: MetaArguments,
}

impl DataAwsEcsServiceConfig {
    pub fn builder() -> DataAwsEcsServiceConfigBuilder {
        DataAwsEcsServiceConfigBuilder::default()
    }
}

/// Builder for [`DataAwsEcsServiceConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsEcsServiceConfigBuilder {
    cluster_arn: Option<Input<String>>,
    id: Option<Input<String>>,
    service_name: Option<Input<String>>,
    meta: MetaArguments,
}

impl DataAwsEcsServiceConfigBuilder {
    pub fn cluster_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.cluster_arn = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn service_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.service_name = Some(value.into());
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<DataAwsEcsServiceConfig, ConfigError> {
        Ok(DataAwsEcsServiceConfig {
            cluster_arn: self.cluster_arn.ok_or_else(|| ConfigError::missing("cluster_arn"))?,
            id: self.id,
            service_name: self.service_name.ok_or_else(|| ConfigError::missing("service_name"))?,
            meta: self.meta,
        })
    }
}

impl Block for DataAwsEcsServiceConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("cluster_arn", &self.cluster_arn);
        fields.put_opt("id", &self.id);
        fields.put("service_name", &self.service_name);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            cluster_arn: fields.required("cluster_arn")?,
            id: fields.optional("id")?,
            service_name: fields.required("service_name")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_service` data source
#[derive(Debug, Clone)]
pub struct DataAwsEcsService {
    element: ResourceHandle,
}

impl DataAwsEcsService {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_service";

    /// Register a new `aws_ecs_service` data source named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: DataAwsEcsServiceConfig) -> Result<Self, StackError> {
        let element = stack.register(
            ResourceKind::DataSource,
            Self::TF_RESOURCE_TYPE,
            id,
            config.to_fields().into_map(),
            config.meta,
            schema(),
        )?;
        Ok(Self { element })
    }

    /// Wrap an element already registered with this type
    pub fn from_handle(element: ResourceHandle) -> Self {
        Self { element }
    }

    fn root(&self) -> BlockRef {
        BlockRef::root(self.element.clone())
    }

    pub fn arn(&self) -> Reference {
        self.root().reference("arn")
    }

    pub fn cluster_arn(&self) -> Reference {
        self.root().reference("cluster_arn")
    }

    pub fn cluster_arn_input(&self) -> Option<Input<String>> {
        self.root().input("cluster_arn")
    }

    pub fn set_cluster_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("cluster_arn", value);
    }

    pub fn desired_count(&self) -> Reference {
        self.root().reference("desired_count")
    }

    pub fn id(&self) -> Reference {
        self.root().reference("id")
    }

    pub fn id_input(&self) -> Option<Input<String>> {
        self.root().input("id")
    }

    pub fn set_id(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("id", value);
    }

    pub fn reset_id(&self) {
        self.root().reset("id");
    }

    pub fn launch_type(&self) -> Reference {
        self.root().reference("launch_type")
    }

    pub fn scheduling_strategy(&self) -> Reference {
        self.root().reference("scheduling_strategy")
    }

    pub fn service_name(&self) -> Reference {
        self.root().reference("service_name")
    }

    pub fn service_name_input(&self) -> Option<Input<String>> {
        self.root().input("service_name")
    }

    pub fn set_service_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("service_name", value);
    }

    pub fn tags(&self) -> Reference {
        self.root().reference("tags")
    }

    pub fn task_definition(&self) -> Reference {
        self.root().reference("task_definition")
    }
}

impl TerraformElement for DataAwsEcsService {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}
