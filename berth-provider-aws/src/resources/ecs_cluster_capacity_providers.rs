//! `aws_ecs_cluster_capacity_providers` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    ListRef, MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema,
    Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_cluster_capacity_providers`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_cluster_capacity_providers")
            .attribute(AttributeSchema::new("capacity_providers", AttributeType::Set(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("cluster_name", AttributeType::String).required())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .block(
                BlockSchema::new("default_capacity_provider_strategy", NestingMode::Set)
                    .attribute(AttributeSchema::new("base", AttributeType::Number))
                    .attribute(AttributeSchema::new("capacity_provider", AttributeType::String).required())
                    .attribute(AttributeSchema::new("weight", AttributeType::Number)),
            )
    })
}

/// Arguments of [`EcsClusterCapacityProviders`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterCapacityProvidersConfig {
    pub capacity_providers: Option<Input<Vec<String>>>,
    pub cluster_name: Input<String>,
    pub id: Option<Input<String>>,
    pub default_capacity_provider_strategy: Vec<EcsClusterCapacityProvidersDefaultCapacityProviderStrategy>,
    pub meta: MetaArguments,
}

impl EcsClusterCapacityProvidersConfig {
    pub fn builder() -> EcsClusterCapacityProvidersConfigBuilder {
        EcsClusterCapacityProvidersConfigBuilder::default()
    }
}

/// Builder for [`EcsClusterCapacityProvidersConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterCapacityProvidersConfigBuilder {
    capacity_providers: Option<Input<Vec<String>>>,
    cluster_name: Option<Input<String>>,
    id: Option<Input<String>>,
    default_capacity_provider_strategy: Vec<EcsClusterCapacityProvidersDefaultCapacityProviderStrategy>,
    meta: MetaArguments,
}

impl EcsClusterCapacityProvidersConfigBuilder {
    pub fn capacity_providers(mut self, value: impl Into<Input<Vec<String>>>) -> Self {
        self.capacity_providers = Some(value.into());
        self
    }

    pub fn cluster_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.cluster_name = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn default_capacity_provider_strategy(mut self, value: impl IntoIterator<Item = EcsClusterCapacityProvidersDefaultCapacityProviderStrategy>) -> Self {
        self.default_capacity_provider_strategy = value.into_iter().collect();
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsClusterCapacityProvidersConfig, ConfigError> {
        Ok(EcsClusterCapacityProvidersConfig {
            capacity_providers: self.capacity_providers,
            cluster_name: self.cluster_name.ok_or_else(|| ConfigError::missing("cluster_name"))?,
            id: self.id,
            default_capacity_provider_strategy: self.default_capacity_provider_strategy,
            meta: self.meta,
        })
    }
}

impl Block for EcsClusterCapacityProvidersConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("capacity_providers", &self.capacity_providers);
        fields.put("cluster_name", &self.cluster_name);
        fields.put_opt("id", &self.id);
        fields.put_blocks("default_capacity_provider_strategy", &self.default_capacity_provider_strategy);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            capacity_providers: fields.optional("capacity_providers")?,
            cluster_name: fields.required("cluster_name")?,
            id: fields.optional("id")?,
            default_capacity_provider_strategy: fields.blocks("default_capacity_provider_strategy")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_cluster_capacity_providers` resource
#[derive(Debug, Clone)]
pub struct EcsClusterCapacityProviders {
    element: ResourceHandle,
}

impl EcsClusterCapacityProviders {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_cluster_capacity_providers";

    /// Register a new `aws_ecs_cluster_capacity_providers` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsClusterCapacityProvidersConfig) -> Result<Self, StackError> {
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

    pub fn capacity_providers(&self) -> Reference {
        self.root().reference("capacity_providers")
    }

    pub fn capacity_providers_input(&self) -> Option<Input<Vec<String>>> {
        self.root().input("capacity_providers")
    }

    pub fn set_capacity_providers(&self, value: impl Into<Input<Vec<String>>>) {
        let value: Input<Vec<String>> = value.into();
        self.root().set("capacity_providers", value);
    }

    pub fn reset_capacity_providers(&self) {
        self.root().reset("capacity_providers");
    }

    pub fn cluster_name(&self) -> Reference {
        self.root().reference("cluster_name")
    }

    pub fn cluster_name_input(&self) -> Option<Input<String>> {
        self.root().input("cluster_name")
    }

    pub fn set_cluster_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("cluster_name", value);
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

    pub fn default_capacity_provider_strategy(&self) -> EcsClusterCapacityProvidersDefaultCapacityProviderStrategyList {
        EcsClusterCapacityProvidersDefaultCapacityProviderStrategyList::new(self.root().list("default_capacity_provider_strategy", true))
    }

    pub fn put_default_capacity_provider_strategy(&self, value: &[EcsClusterCapacityProvidersDefaultCapacityProviderStrategy]) {
        self.root().put_all("default_capacity_provider_strategy", value);
    }

    pub fn default_capacity_provider_strategy_input(&self) -> Option<Vec<EcsClusterCapacityProvidersDefaultCapacityProviderStrategy>> {
        self.root().blocks_input("default_capacity_provider_strategy")
    }

    pub fn reset_default_capacity_provider_strategy(&self) {
        self.root().reset("default_capacity_provider_strategy");
    }
}

impl TerraformElement for EcsClusterCapacityProviders {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// `default_capacity_provider_strategy` block of [`EcsClusterCapacityProviders`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterCapacityProvidersDefaultCapacityProviderStrategy {
    pub base: Option<Input<f64>>,
    pub capacity_provider: Input<String>,
    pub weight: Option<Input<f64>>,
}

impl EcsClusterCapacityProvidersDefaultCapacityProviderStrategy {
    pub fn builder() -> EcsClusterCapacityProvidersDefaultCapacityProviderStrategyBuilder {
        EcsClusterCapacityProvidersDefaultCapacityProviderStrategyBuilder::default()
    }
}

/// Builder for [`EcsClusterCapacityProvidersDefaultCapacityProviderStrategy`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterCapacityProvidersDefaultCapacityProviderStrategyBuilder {
    base: Option<Input<f64>>,
    capacity_provider: Option<Input<String>>,
    weight: Option<Input<f64>>,
}

impl EcsClusterCapacityProvidersDefaultCapacityProviderStrategyBuilder {
    pub fn base(mut self, value: impl Into<Input<f64>>) -> Self {
        self.base = Some(value.into());
        self
    }

    pub fn capacity_provider(mut self, value: impl Into<Input<String>>) -> Self {
        self.capacity_provider = Some(value.into());
        self
    }

    pub fn weight(mut self, value: impl Into<Input<f64>>) -> Self {
        self.weight = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsClusterCapacityProvidersDefaultCapacityProviderStrategy, ConfigError> {
        Ok(EcsClusterCapacityProvidersDefaultCapacityProviderStrategy {
            base: self.base,
            capacity_provider: self.capacity_provider.ok_or_else(|| ConfigError::missing("capacity_provider"))?,
            weight: self.weight,
        })
    }
}

impl Block for EcsClusterCapacityProvidersDefaultCapacityProviderStrategy {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("base", &self.base);
        fields.put("capacity_provider", &self.capacity_provider);
        fields.put_opt("weight", &self.weight);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            base: fields.optional("base")?,
            capacity_provider: fields.required("capacity_provider")?,
            weight: fields.optional("weight")?,
        })
    }
}

/// Output reference to one `default_capacity_provider_strategy` block
#[derive(Debug, Clone)]
pub struct EcsClusterCapacityProvidersDefaultCapacityProviderStrategyOutputReference {
    inner: BlockRef,
}

impl EcsClusterCapacityProvidersDefaultCapacityProviderStrategyOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterCapacityProvidersDefaultCapacityProviderStrategy> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterCapacityProvidersDefaultCapacityProviderStrategy>) {
        self.inner.set_internal_value(value);
    }

    pub fn base(&self) -> Reference {
        self.inner.reference("base")
    }

    pub fn base_input(&self) -> Option<Input<f64>> {
        self.inner.input("base")
    }

    pub fn set_base(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("base", value);
    }

    pub fn reset_base(&self) {
        self.inner.reset("base");
    }

    pub fn capacity_provider(&self) -> Reference {
        self.inner.reference("capacity_provider")
    }

    pub fn capacity_provider_input(&self) -> Option<Input<String>> {
        self.inner.input("capacity_provider")
    }

    pub fn set_capacity_provider(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("capacity_provider", value);
    }

    pub fn weight(&self) -> Reference {
        self.inner.reference("weight")
    }

    pub fn weight_input(&self) -> Option<Input<f64>> {
        self.inner.input("weight")
    }

    pub fn set_weight(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("weight", value);
    }

    pub fn reset_weight(&self) {
        self.inner.reset("weight");
    }
}

/// Instances of the `default_capacity_provider_strategy` block
#[derive(Debug, Clone)]
pub struct EcsClusterCapacityProvidersDefaultCapacityProviderStrategyList {
    inner: ListRef,
}

impl EcsClusterCapacityProvidersDefaultCapacityProviderStrategyList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsClusterCapacityProvidersDefaultCapacityProviderStrategyOutputReference {
        EcsClusterCapacityProvidersDefaultCapacityProviderStrategyOutputReference::new(self.inner.get(index))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn wraps_set(&self) -> bool {
        self.inner.wraps_set()
    }

    pub fn reference(&self) -> Reference {
        self.inner.reference()
    }
}
