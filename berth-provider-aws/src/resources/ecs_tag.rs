//! `aws_ecs_tag` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, ConfigError, Fields, Input, MetaArguments,
    Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_tag`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_tag")
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("key", AttributeType::String).required())
            .attribute(AttributeSchema::new("resource_arn", AttributeType::String).required())
            .attribute(AttributeSchema::new("value", AttributeType::String).required())
    })
}

/// Arguments of [`EcsTag`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTagConfig {
    pub id: Option<Input<String>>,
    pub key: Input<String>,
    pub resource_arn: Input<String>,
    pub value: Input<String>,
    pub meta: MetaArguments,
}

impl EcsTagConfig {
    pub fn builder() -> EcsTagConfigBuilder {
        EcsTagConfigBuilder::default()
    }
}

/// Builder for [`EcsTagConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsTagConfigBuilder {
    id: Option<Input<String>>,
    key: Option<Input<String>>,
    resource_arn: Option<Input<String>>,
    value: Option<Input<String>>,
    meta: MetaArguments,
}

impl EcsTagConfigBuilder {
    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn key(mut self, value: impl Into<Input<String>>) -> Self {
        self.key = Some(value.into());
        self
    }

    pub fn resource_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.resource_arn = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<Input<String>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsTagConfig, ConfigError> {
        Ok(EcsTagConfig {
            id: self.id,
            key: self.key.ok_or_else(|| ConfigError::missing("key"))?,
            resource_arn: self.resource_arn.ok_or_else(|| ConfigError::missing("resource_arn"))?,
            value: self.value.ok_or_else(|| ConfigError::missing("value"))?,
            meta: self.meta,
        })
    }
}

impl Block for EcsTagConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("id", &self.id);
        fields.put("key", &self.key);
        fields.put("resource_arn", &self.resource_arn);
        fields.put("value", &self.value);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            id: fields.optional("id")?,
            key: fields.required("key")?,
            resource_arn: fields.required("resource_arn")?,
            value: fields.required("value")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_tag` resource
#[derive(Debug, Clone)]
pub struct EcsTag {
    element: ResourceHandle,
}

impl EcsTag {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_tag";

    /// Register a new `aws_ecs_tag` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsTagConfig) -> Result<Self, StackError> {
        let element = stack.register(
            ResourceKind::Resource,
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

    pub fn key(&self) -> Reference {
        self.root().reference("key")
    }

    pub fn key_input(&self) -> Option<Input<String>> {
        self.root().input("key")
    }

    pub fn set_key(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("key", value);
    }

    pub fn resource_arn(&self) -> Reference {
        self.root().reference("resource_arn")
    }

    pub fn resource_arn_input(&self) -> Option<Input<String>> {
        self.root().input("resource_arn")
    }

    pub fn set_resource_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("resource_arn", value);
    }

    pub fn value(&self) -> Reference {
        self.root().reference("value")
    }

    pub fn value_input(&self) -> Option<Input<String>> {
        self.root().input("value")
    }

    pub fn set_value(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("value", value);
    }
}

impl TerraformElement for EcsTag {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}
