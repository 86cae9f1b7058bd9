//! `aws_ecs_account_setting_default` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, ConfigError, Fields, Input, MetaArguments,
    Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_account_setting_default`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_account_setting_default")
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("principal_arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("value", AttributeType::String).required())
    })
}

/// Arguments of [`EcsAccountSettingDefault`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsAccountSettingDefaultConfig {
    pub id: Option<Input<String>>,
    pub name: Input<String>,
    pub value: Input<String>,
    pub meta: MetaArguments,
}

impl EcsAccountSettingDefaultConfig {
    pub fn builder() -> EcsAccountSettingDefaultConfigBuilder {
        EcsAccountSettingDefaultConfigBuilder::default()
    }
}

/// Builder for [`EcsAccountSettingDefaultConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsAccountSettingDefaultConfigBuilder {
    id: Option<Input<String>>,
    name: Option<Input<String>>,
    value: Option<Input<String>>,
    meta: MetaArguments,
}

impl EcsAccountSettingDefaultConfigBuilder {
    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<Input<String>>) -> Self {
        self.name = Some(value.into());
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

    pub fn build(self) -> Result<EcsAccountSettingDefaultConfig, ConfigError> {
        Ok(EcsAccountSettingDefaultConfig {
            id: self.id,
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            value: self.value.ok_or_else(|| ConfigError::missing("value"))?,
            meta: self.meta,
        })
    }
}

impl Block for EcsAccountSettingDefaultConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("id", &self.id);
        fields.put("name", &self.name);
        fields.put("value", &self.value);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            id: fields.optional("id")?,
            name: fields.required("name")?,
            value: fields.required("value")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_account_setting_default` resource
#[derive(Debug, Clone)]
pub struct EcsAccountSettingDefault {
    element: ResourceHandle,
}

impl EcsAccountSettingDefault {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_account_setting_default";

    /// Register a new `aws_ecs_account_setting_default` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsAccountSettingDefaultConfig) -> Result<Self, StackError> {
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

    pub fn name(&self) -> Reference {
        self.root().reference("name")
    }

    pub fn name_input(&self) -> Option<Input<String>> {
        self.root().input("name")
    }

    pub fn set_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("name", value);
    }

    pub fn principal_arn(&self) -> Reference {
        self.root().reference("principal_arn")
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

impl TerraformElement for EcsAccountSettingDefault {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}
