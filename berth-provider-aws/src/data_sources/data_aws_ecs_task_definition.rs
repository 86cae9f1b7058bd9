//! `aws_ecs_task_definition` data source
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, ConfigError, Fields, Input, MetaArguments,
    Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_task_definition`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::data_source("aws_ecs_task_definition")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("arn_without_revision", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("execution_role_arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("family", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("network_mode", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("revision", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("status", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("task_definition", AttributeType::String).required())
            .attribute(AttributeSchema::new("task_role_arn", AttributeType::String).read_only())
    })
}

/// Arguments of [`DataAwsEcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsEcsTaskDefinitionConfig {
    pub id: Option<Input<String>>,
    pub task_definition: Input<String>,
    pub meta: MetaArguments,
}

impl DataAwsEcsTaskDefinitionConfig {
    pub fn builder() -> DataAwsEcsTaskDefinitionConfigBuilder {
        DataAwsEcsTaskDefinitionConfigBuilder::default()
    }
}

/// Builder for [`DataAwsEcsTaskDefinitionConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsEcsTaskDefinitionConfigBuilder {
    id: Option<Input<String>>,
    task_definition: Option<Input<String>>,
    meta: MetaArguments,
}

impl DataAwsEcsTaskDefinitionConfigBuilder {
    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn task_definition(mut self, value: impl Into<Input<String>>) -> Self {
        self.task_definition = Some(value.into());
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<DataAwsEcsTaskDefinitionConfig, ConfigError> {
        Ok(DataAwsEcsTaskDefinitionConfig {
            id: self.id,
            task_definition: self.task_definition.ok_or_else(|| ConfigError::missing("task_definition"))?,
            meta: self.meta,
        })
    }
}

impl Block for DataAwsEcsTaskDefinitionConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("id", &self.id);
        fields.put("task_definition", &self.task_definition);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            id: fields.optional("id")?,
            task_definition: fields.required("task_definition")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_task_definition` data source
#[derive(Debug, Clone)]
pub struct DataAwsEcsTaskDefinition {
    element: ResourceHandle,
}

impl DataAwsEcsTaskDefinition {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_task_definition";

    /// Register a new `aws_ecs_task_definition` data source named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: DataAwsEcsTaskDefinitionConfig) -> Result<Self, StackError> {
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

    pub fn arn_without_revision(&self) -> Reference {
        self.root().reference("arn_without_revision")
    }

    pub fn execution_role_arn(&self) -> Reference {
        self.root().reference("execution_role_arn")
    }

    pub fn family(&self) -> Reference {
        self.root().reference("family")
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

    pub fn network_mode(&self) -> Reference {
        self.root().reference("network_mode")
    }

    pub fn revision(&self) -> Reference {
        self.root().reference("revision")
    }

    pub fn status(&self) -> Reference {
        self.root().reference("status")
    }

    pub fn task_definition(&self) -> Reference {
        self.root().reference("task_definition")
    }

    pub fn task_definition_input(&self) -> Option<Input<String>> {
        self.root().input("task_definition")
    }

    pub fn set_task_definition(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("task_definition", value);
    }

    pub fn task_role_arn(&self) -> Reference {
        self.root().reference("task_role_arn")
    }
}

impl TerraformElement for DataAwsEcsTaskDefinition {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}
