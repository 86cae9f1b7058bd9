//! `aws_ecs_container_definition` data source
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, ConfigError, Fields, Input, MetaArguments,
    Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_container_definition`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::data_source("aws_ecs_container_definition")
            .attribute(AttributeSchema::new("container_name", AttributeType::String).required())
            .attribute(AttributeSchema::new("cpu", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("disable_networking", AttributeType::Bool).read_only())
            .attribute(AttributeSchema::new("docker_labels", AttributeType::Map(Box::new(AttributeType::String))).read_only())
            .attribute(AttributeSchema::new("environment", AttributeType::Map(Box::new(AttributeType::String))).read_only())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("image", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("image_digest", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("memory", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("memory_reservation", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("task_definition", AttributeType::String).required())
    })
}

/// Arguments of [`DataAwsEcsContainerDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsEcsContainerDefinitionConfig {
    pub container_name: Input<String>,
    pub id: Option<Input<String>>,
    pub task_definition: Input<String>,
    pub meta: MetaArguments,
}

impl DataAwsEcsContainerDefinitionConfig {
    pub fn builder() -> DataAwsEcsContainerDefinitionConfigBuilder {
        DataAwsEcsContainerDefinitionConfigBuilder::default()
    }
}

/// Builder for [`DataAwsEcsContainerDefinitionConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsEcsContainerDefinitionConfigBuilder {
    container_name: Option<Input<String>>,
    id: Option<Input<String>>,
    task_definition: Option<Input<String>>,
    meta: MetaArguments,
}

impl DataAwsEcsContainerDefinitionConfigBuilder {
    pub fn container_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.container_name = Some(value.into());
        self
    }

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

    pub fn build(self) -> Result<DataAwsEcsContainerDefinitionConfig, ConfigError> {
        Ok(DataAwsEcsContainerDefinitionConfig {
            container_name: self.container_name.ok_or_else(|| ConfigError::missing("container_name"))?,
            id: self.id,
            task_definition: self.task_definition.ok_or_else(|| ConfigError::missing("task_definition"))?,
            meta: self.meta,
        })
    }
}

impl Block for DataAwsEcsContainerDefinitionConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("container_name", &self.container_name);
        fields.put_opt("id", &self.id);
        fields.put("task_definition", &self.task_definition);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            container_name: fields.required("container_name")?,
            id: fields.optional("id")?,
            task_definition: fields.required("task_definition")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_container_definition` data source
#[derive(Debug, Clone)]
pub struct DataAwsEcsContainerDefinition {
    element: ResourceHandle,
}

impl DataAwsEcsContainerDefinition {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_container_definition";

    /// Register a new `aws_ecs_container_definition` data source named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: DataAwsEcsContainerDefinitionConfig) -> Result<Self, StackError> {
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

    pub fn container_name(&self) -> Reference {
        self.root().reference("container_name")
    }

    pub fn container_name_input(&self) -> Option<Input<String>> {
        self.root().input("container_name")
    }

    pub fn set_container_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("container_name", value);
    }

    pub fn cpu(&self) -> Reference {
        self.root().reference("cpu")
    }

    pub fn disable_networking(&self) -> Reference {
        self.root().reference("disable_networking")
    }

    pub fn docker_labels(&self) -> Reference {
        self.root().reference("docker_labels")
    }

    pub fn environment(&self) -> Reference {
        self.root().reference("environment")
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

    pub fn image(&self) -> Reference {
        self.root().reference("image")
    }

    pub fn image_digest(&self) -> Reference {
        self.root().reference("image_digest")
    }

    pub fn memory(&self) -> Reference {
        self.root().reference("memory")
    }

    pub fn memory_reservation(&self) -> Reference {
        self.root().reference("memory_reservation")
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
}

impl TerraformElement for DataAwsEcsContainerDefinition {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}
