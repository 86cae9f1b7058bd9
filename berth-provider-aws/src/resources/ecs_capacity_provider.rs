//! `aws_ecs_capacity_provider` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::collections::BTreeMap;
use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack,
    StackError, TerraformElement,
};

/// Schema of `aws_ecs_capacity_provider`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_capacity_provider")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String))).computed())
            .block(
                BlockSchema::new("auto_scaling_group_provider", NestingMode::List)
                    .min_items(1)
                    .max_items(1)
                    .attribute(AttributeSchema::new("auto_scaling_group_arn", AttributeType::String).required())
                    .attribute(AttributeSchema::new("managed_termination_protection", AttributeType::String).computed())
                    .block(
                        BlockSchema::new("managed_scaling", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("instance_warmup_period", AttributeType::Number).computed())
                            .attribute(AttributeSchema::new("maximum_scaling_step_size", AttributeType::Number).computed())
                            .attribute(AttributeSchema::new("minimum_scaling_step_size", AttributeType::Number).computed())
                            .attribute(AttributeSchema::new("status", AttributeType::String).computed())
                            .attribute(AttributeSchema::new("target_capacity", AttributeType::Number).computed()),
                    ),
            )
    })
}

/// Arguments of [`EcsCapacityProvider`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsCapacityProviderConfig {
    pub id: Option<Input<String>>,
    pub name: Input<String>,
    pub tags: Option<Input<BTreeMap<String, String>>>,
    pub tags_all: Option<Input<BTreeMap<String, String>>>,
    pub auto_scaling_group_provider: EcsCapacityProviderAutoScalingGroupProvider,
    pub meta: MetaArguments,
}

impl EcsCapacityProviderConfig {
    pub fn builder() -> EcsCapacityProviderConfigBuilder {
        EcsCapacityProviderConfigBuilder::default()
    }
}

/// Builder for [`EcsCapacityProviderConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsCapacityProviderConfigBuilder {
    id: Option<Input<String>>,
    name: Option<Input<String>>,
    tags: Option<Input<BTreeMap<String, String>>>,
    tags_all: Option<Input<BTreeMap<String, String>>>,
    auto_scaling_group_provider: Option<EcsCapacityProviderAutoScalingGroupProvider>,
    meta: MetaArguments,
}

impl EcsCapacityProviderConfigBuilder {
    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<Input<String>>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn tags(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.tags = Some(value.into());
        self
    }

    pub fn tags_all(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.tags_all = Some(value.into());
        self
    }

    pub fn auto_scaling_group_provider(mut self, value: EcsCapacityProviderAutoScalingGroupProvider) -> Self {
        self.auto_scaling_group_provider = Some(value);
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsCapacityProviderConfig, ConfigError> {
        Ok(EcsCapacityProviderConfig {
            id: self.id,
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            tags: self.tags,
            tags_all: self.tags_all,
            auto_scaling_group_provider: self.auto_scaling_group_provider.ok_or_else(|| ConfigError::missing("auto_scaling_group_provider"))?,
            meta: self.meta,
        })
    }
}

impl Block for EcsCapacityProviderConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("id", &self.id);
        fields.put("name", &self.name);
        fields.put_opt("tags", &self.tags);
        fields.put_opt("tags_all", &self.tags_all);
        fields.put_block("auto_scaling_group_provider", Some(&self.auto_scaling_group_provider));
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            id: fields.optional("id")?,
            name: fields.required("name")?,
            tags: fields.optional("tags")?,
            tags_all: fields.optional("tags_all")?,
            auto_scaling_group_provider: fields.required_block("auto_scaling_group_provider")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_capacity_provider` resource
#[derive(Debug, Clone)]
pub struct EcsCapacityProvider {
    element: ResourceHandle,
}

impl EcsCapacityProvider {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_capacity_provider";

    /// Register a new `aws_ecs_capacity_provider` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsCapacityProviderConfig) -> Result<Self, StackError> {
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

    pub fn arn(&self) -> Reference {
        self.root().reference("arn")
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

    pub fn tags(&self) -> Reference {
        self.root().reference("tags")
    }

    pub fn tags_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.root().input("tags")
    }

    pub fn set_tags(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.root().set("tags", value);
    }

    pub fn reset_tags(&self) {
        self.root().reset("tags");
    }

    pub fn tags_all(&self) -> Reference {
        self.root().reference("tags_all")
    }

    pub fn tags_all_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.root().input("tags_all")
    }

    pub fn set_tags_all(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.root().set("tags_all", value);
    }

    pub fn reset_tags_all(&self) {
        self.root().reset("tags_all");
    }

    pub fn auto_scaling_group_provider(&self) -> EcsCapacityProviderAutoScalingGroupProviderOutputReference {
        EcsCapacityProviderAutoScalingGroupProviderOutputReference::new(self.root().block("auto_scaling_group_provider", false))
    }

    pub fn put_auto_scaling_group_provider(&self, value: &EcsCapacityProviderAutoScalingGroupProvider) {
        self.root().put("auto_scaling_group_provider", value);
    }

    pub fn auto_scaling_group_provider_input(&self) -> Option<EcsCapacityProviderAutoScalingGroupProvider> {
        self.root().block_input("auto_scaling_group_provider")
    }
}

impl TerraformElement for EcsCapacityProvider {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// `auto_scaling_group_provider` block of [`EcsCapacityProvider`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsCapacityProviderAutoScalingGroupProvider {
    pub auto_scaling_group_arn: Input<String>,
    pub managed_termination_protection: Option<Input<String>>,
    pub managed_scaling: Option<EcsCapacityProviderAutoScalingGroupProviderManagedScaling>,
}

impl EcsCapacityProviderAutoScalingGroupProvider {
    pub fn builder() -> EcsCapacityProviderAutoScalingGroupProviderBuilder {
        EcsCapacityProviderAutoScalingGroupProviderBuilder::default()
    }
}

/// Builder for [`EcsCapacityProviderAutoScalingGroupProvider`]
#[derive(Debug, Clone, Default)]
pub struct EcsCapacityProviderAutoScalingGroupProviderBuilder {
    auto_scaling_group_arn: Option<Input<String>>,
    managed_termination_protection: Option<Input<String>>,
    managed_scaling: Option<EcsCapacityProviderAutoScalingGroupProviderManagedScaling>,
}

impl EcsCapacityProviderAutoScalingGroupProviderBuilder {
    pub fn auto_scaling_group_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.auto_scaling_group_arn = Some(value.into());
        self
    }

    pub fn managed_termination_protection(mut self, value: impl Into<Input<String>>) -> Self {
        self.managed_termination_protection = Some(value.into());
        self
    }

    pub fn managed_scaling(mut self, value: EcsCapacityProviderAutoScalingGroupProviderManagedScaling) -> Self {
        self.managed_scaling = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsCapacityProviderAutoScalingGroupProvider, ConfigError> {
        Ok(EcsCapacityProviderAutoScalingGroupProvider {
            auto_scaling_group_arn: self.auto_scaling_group_arn.ok_or_else(|| ConfigError::missing("auto_scaling_group_arn"))?,
            managed_termination_protection: self.managed_termination_protection,
            managed_scaling: self.managed_scaling,
        })
    }
}

impl Block for EcsCapacityProviderAutoScalingGroupProvider {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("auto_scaling_group_arn", &self.auto_scaling_group_arn);
        fields.put_opt("managed_termination_protection", &self.managed_termination_protection);
        fields.put_block("managed_scaling", self.managed_scaling.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            auto_scaling_group_arn: fields.required("auto_scaling_group_arn")?,
            managed_termination_protection: fields.optional("managed_termination_protection")?,
            managed_scaling: fields.block("managed_scaling")?,
        })
    }
}

/// Output reference to one `auto_scaling_group_provider` block
#[derive(Debug, Clone)]
pub struct EcsCapacityProviderAutoScalingGroupProviderOutputReference {
    inner: BlockRef,
}

impl EcsCapacityProviderAutoScalingGroupProviderOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsCapacityProviderAutoScalingGroupProvider> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsCapacityProviderAutoScalingGroupProvider>) {
        self.inner.set_internal_value(value);
    }

    pub fn auto_scaling_group_arn(&self) -> Reference {
        self.inner.reference("auto_scaling_group_arn")
    }

    pub fn auto_scaling_group_arn_input(&self) -> Option<Input<String>> {
        self.inner.input("auto_scaling_group_arn")
    }

    pub fn set_auto_scaling_group_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("auto_scaling_group_arn", value);
    }

    pub fn managed_termination_protection(&self) -> Reference {
        self.inner.reference("managed_termination_protection")
    }

    pub fn managed_termination_protection_input(&self) -> Option<Input<String>> {
        self.inner.input("managed_termination_protection")
    }

    pub fn set_managed_termination_protection(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("managed_termination_protection", value);
    }

    pub fn reset_managed_termination_protection(&self) {
        self.inner.reset("managed_termination_protection");
    }

    pub fn managed_scaling(&self) -> EcsCapacityProviderAutoScalingGroupProviderManagedScalingOutputReference {
        EcsCapacityProviderAutoScalingGroupProviderManagedScalingOutputReference::new(self.inner.block("managed_scaling", false))
    }

    pub fn put_managed_scaling(&self, value: &EcsCapacityProviderAutoScalingGroupProviderManagedScaling) {
        self.inner.put("managed_scaling", value);
    }

    pub fn managed_scaling_input(&self) -> Option<EcsCapacityProviderAutoScalingGroupProviderManagedScaling> {
        self.inner.block_input("managed_scaling")
    }

    pub fn reset_managed_scaling(&self) {
        self.inner.reset("managed_scaling");
    }
}

/// `managed_scaling` block of [`EcsCapacityProviderAutoScalingGroupProvider`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsCapacityProviderAutoScalingGroupProviderManagedScaling {
    pub instance_warmup_period: Option<Input<f64>>,
    pub maximum_scaling_step_size: Option<Input<f64>>,
    pub minimum_scaling_step_size: Option<Input<f64>>,
    pub status: Option<Input<String>>,
    pub target_capacity: Option<Input<f64>>,
}

impl EcsCapacityProviderAutoScalingGroupProviderManagedScaling {
    pub fn builder() -> EcsCapacityProviderAutoScalingGroupProviderManagedScalingBuilder {
        EcsCapacityProviderAutoScalingGroupProviderManagedScalingBuilder::default()
    }
}

/// Builder for [`EcsCapacityProviderAutoScalingGroupProviderManagedScaling`]
#[derive(Debug, Clone, Default)]
pub struct EcsCapacityProviderAutoScalingGroupProviderManagedScalingBuilder {
    instance_warmup_period: Option<Input<f64>>,
    maximum_scaling_step_size: Option<Input<f64>>,
    minimum_scaling_step_size: Option<Input<f64>>,
    status: Option<Input<String>>,
    target_capacity: Option<Input<f64>>,
}

impl EcsCapacityProviderAutoScalingGroupProviderManagedScalingBuilder {
    pub fn instance_warmup_period(mut self, value: impl Into<Input<f64>>) -> Self {
        self.instance_warmup_period = Some(value.into());
        self
    }

    pub fn maximum_scaling_step_size(mut self, value: impl Into<Input<f64>>) -> Self {
        self.maximum_scaling_step_size = Some(value.into());
        self
    }

    pub fn minimum_scaling_step_size(mut self, value: impl Into<Input<f64>>) -> Self {
        self.minimum_scaling_step_size = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<Input<String>>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn target_capacity(mut self, value: impl Into<Input<f64>>) -> Self {
        self.target_capacity = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsCapacityProviderAutoScalingGroupProviderManagedScaling, ConfigError> {
        Ok(EcsCapacityProviderAutoScalingGroupProviderManagedScaling {
            instance_warmup_period: self.instance_warmup_period,
            maximum_scaling_step_size: self.maximum_scaling_step_size,
            minimum_scaling_step_size: self.minimum_scaling_step_size,
            status: self.status,
            target_capacity: self.target_capacity,
        })
    }
}

impl Block for EcsCapacityProviderAutoScalingGroupProviderManagedScaling {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("instance_warmup_period", &self.instance_warmup_period);
        fields.put_opt("maximum_scaling_step_size", &self.maximum_scaling_step_size);
        fields.put_opt("minimum_scaling_step_size", &self.minimum_scaling_step_size);
        fields.put_opt("status", &self.status);
        fields.put_opt("target_capacity", &self.target_capacity);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            instance_warmup_period: fields.optional("instance_warmup_period")?,
            maximum_scaling_step_size: fields.optional("maximum_scaling_step_size")?,
            minimum_scaling_step_size: fields.optional("minimum_scaling_step_size")?,
            status: fields.optional("status")?,
            target_capacity: fields.optional("target_capacity")?,
        })
    }
}

/// Output reference to one `managed_scaling` block
#[derive(Debug, Clone)]
pub struct EcsCapacityProviderAutoScalingGroupProviderManagedScalingOutputReference {
    inner: BlockRef,
}

impl EcsCapacityProviderAutoScalingGroupProviderManagedScalingOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsCapacityProviderAutoScalingGroupProviderManagedScaling> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsCapacityProviderAutoScalingGroupProviderManagedScaling>) {
        self.inner.set_internal_value(value);
    }

    pub fn instance_warmup_period(&self) -> Reference {
        self.inner.reference("instance_warmup_period")
    }

    pub fn instance_warmup_period_input(&self) -> Option<Input<f64>> {
        self.inner.input("instance_warmup_period")
    }

    pub fn set_instance_warmup_period(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("instance_warmup_period", value);
    }

    pub fn reset_instance_warmup_period(&self) {
        self.inner.reset("instance_warmup_period");
    }

    pub fn maximum_scaling_step_size(&self) -> Reference {
        self.inner.reference("maximum_scaling_step_size")
    }

    pub fn maximum_scaling_step_size_input(&self) -> Option<Input<f64>> {
        self.inner.input("maximum_scaling_step_size")
    }

    pub fn set_maximum_scaling_step_size(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("maximum_scaling_step_size", value);
    }

    pub fn reset_maximum_scaling_step_size(&self) {
        self.inner.reset("maximum_scaling_step_size");
    }

    pub fn minimum_scaling_step_size(&self) -> Reference {
        self.inner.reference("minimum_scaling_step_size")
    }

    pub fn minimum_scaling_step_size_input(&self) -> Option<Input<f64>> {
        self.inner.input("minimum_scaling_step_size")
    }

    pub fn set_minimum_scaling_step_size(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("minimum_scaling_step_size", value);
    }

    pub fn reset_minimum_scaling_step_size(&self) {
        self.inner.reset("minimum_scaling_step_size");
    }

    pub fn status(&self) -> Reference {
        self.inner.reference("status")
    }

    pub fn status_input(&self) -> Option<Input<String>> {
        self.inner.input("status")
    }

    pub fn set_status(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("status", value);
    }

    pub fn reset_status(&self) {
        self.inner.reset("status");
    }

    pub fn target_capacity(&self) -> Reference {
        self.inner.reference("target_capacity")
    }

    pub fn target_capacity_input(&self) -> Option<Input<f64>> {
        self.inner.input("target_capacity")
    }

    pub fn set_target_capacity(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("target_capacity", value);
    }

    pub fn reset_target_capacity(&self) {
        self.inner.reset("target_capacity");
    }
}
