//! `aws_ecs_task_set` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::collections::BTreeMap;
use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    ListRef, MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema,
    Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_task_set`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_task_set")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("cluster", AttributeType::String).required())
            .attribute(AttributeSchema::new("external_id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("force_delete", AttributeType::Bool))
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("launch_type", AttributeType::String).computed())
            .attribute(AttributeSchema::new("platform_version", AttributeType::String).computed())
            .attribute(AttributeSchema::new("service", AttributeType::String).required())
            .attribute(AttributeSchema::new("stability_status", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("status", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String))).computed())
            .attribute(AttributeSchema::new("task_definition", AttributeType::String).required())
            .attribute(AttributeSchema::new("task_set_id", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("wait_until_stable", AttributeType::Bool))
            .attribute(AttributeSchema::new("wait_until_stable_timeout", AttributeType::String))
            .block(
                BlockSchema::new("capacity_provider_strategy", NestingMode::Set)
                    .attribute(AttributeSchema::new("base", AttributeType::Number))
                    .attribute(AttributeSchema::new("capacity_provider", AttributeType::String).required())
                    .attribute(AttributeSchema::new("weight", AttributeType::Number).required()),
            )
            .block(
                BlockSchema::new("load_balancer", NestingMode::Set)
                    .attribute(AttributeSchema::new("container_name", AttributeType::String).required())
                    .attribute(AttributeSchema::new("container_port", AttributeType::Number))
                    .attribute(AttributeSchema::new("load_balancer_name", AttributeType::String))
                    .attribute(AttributeSchema::new("target_group_arn", AttributeType::String)),
            )
            .block(
                BlockSchema::new("network_configuration", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("assign_public_ip", AttributeType::Bool))
                    .attribute(AttributeSchema::new("security_groups", AttributeType::Set(Box::new(AttributeType::String))))
                    .attribute(AttributeSchema::new("subnets", AttributeType::Set(Box::new(AttributeType::String))).required()),
            )
            .block(
                BlockSchema::new("scale", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("unit", AttributeType::String))
                    .attribute(AttributeSchema::new("value", AttributeType::Number)),
            )
            .block(
                BlockSchema::new("service_registries", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("container_name", AttributeType::String))
                    .attribute(AttributeSchema::new("container_port", AttributeType::Number))
                    .attribute(AttributeSchema::new("port", AttributeType::Number))
                    .attribute(AttributeSchema::new("registry_arn", AttributeType::String).required()),
            )
    })
}

/// Arguments of [`EcsTaskSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskSetConfig {
    pub cluster: Input<String>,
    pub external_id: Option<Input<String>>,
    pub force_delete: Option<Input<bool>>,
    pub id: Option<Input<String>>,
    pub launch_type: Option<Input<String>>,
    pub platform_version: Option<Input<String>>,
    pub service: Input<String>,
    pub tags: Option<Input<BTreeMap<String, String>>>,
    pub tags_all: Option<Input<BTreeMap<String, String>>>,
    pub task_definition: Input<String>,
    pub wait_until_stable: Option<Input<bool>>,
    pub wait_until_stable_timeout: Option<Input<String>>,
    pub capacity_provider_strategy: Vec<EcsTaskSetCapacityProviderStrategy>,
    pub load_balancer: Vec<EcsTaskSetLoadBalancer>,
    pub network_configuration: Option<EcsTaskSetNetworkConfiguration>,
    pub scale: Option<EcsTaskSetScale>,
    pub service_registries: Option<EcsTaskSetServiceRegistries>,
    pub meta: MetaArguments,
}

impl EcsTaskSetConfig {
    pub fn builder() -> EcsTaskSetConfigBuilder {
        EcsTaskSetConfigBuilder::default()
    }
}

/// Builder for [`EcsTaskSetConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskSetConfigBuilder {
    cluster: Option<Input<String>>,
    external_id: Option<Input<String>>,
    force_delete: Option<Input<bool>>,
    id: Option<Input<String>>,
    launch_type: Option<Input<String>>,
    platform_version: Option<Input<String>>,
    service: Option<Input<String>>,
    tags: Option<Input<BTreeMap<String, String>>>,
    tags_all: Option<Input<BTreeMap<String, String>>>,
    task_definition: Option<Input<String>>,
    wait_until_stable: Option<Input<bool>>,
    wait_until_stable_timeout: Option<Input<String>>,
    capacity_provider_strategy: Vec<EcsTaskSetCapacityProviderStrategy>,
    load_balancer: Vec<EcsTaskSetLoadBalancer>,
    network_configuration: Option<EcsTaskSetNetworkConfiguration>,
    scale: Option<EcsTaskSetScale>,
    service_registries: Option<EcsTaskSetServiceRegistries>,
    meta: MetaArguments,
}

impl EcsTaskSetConfigBuilder {
    pub fn cluster(mut self, value: impl Into<Input<String>>) -> Self {
        self.cluster = Some(value.into());
        self
    }

    pub fn external_id(mut self, value: impl Into<Input<String>>) -> Self {
        self.external_id = Some(value.into());
        self
    }

    pub fn force_delete(mut self, value: impl Into<Input<bool>>) -> Self {
        self.force_delete = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn launch_type(mut self, value: impl Into<Input<String>>) -> Self {
        self.launch_type = Some(value.into());
        self
    }

    pub fn platform_version(mut self, value: impl Into<Input<String>>) -> Self {
        self.platform_version = Some(value.into());
        self
    }

    pub fn service(mut self, value: impl Into<Input<String>>) -> Self {
        self.service = Some(value.into());
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

    pub fn task_definition(mut self, value: impl Into<Input<String>>) -> Self {
        self.task_definition = Some(value.into());
        self
    }

    pub fn wait_until_stable(mut self, value: impl Into<Input<bool>>) -> Self {
        self.wait_until_stable = Some(value.into());
        self
    }

    pub fn wait_until_stable_timeout(mut self, value: impl Into<Input<String>>) -> Self {
        self.wait_until_stable_timeout = Some(value.into());
        self
    }

    pub fn capacity_provider_strategy(mut self, value: impl IntoIterator<Item = EcsTaskSetCapacityProviderStrategy>) -> Self {
        self.capacity_provider_strategy = value.into_iter().collect();
        self
    }

    pub fn load_balancer(mut self, value: impl IntoIterator<Item = EcsTaskSetLoadBalancer>) -> Self {
        self.load_balancer = value.into_iter().collect();
        self
    }

    pub fn network_configuration(mut self, value: EcsTaskSetNetworkConfiguration) -> Self {
        self.network_configuration = Some(value);
        self
    }

    pub fn scale(mut self, value: EcsTaskSetScale) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn service_registries(mut self, value: EcsTaskSetServiceRegistries) -> Self {
        self.service_registries = Some(value);
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsTaskSetConfig, ConfigError> {
        Ok(EcsTaskSetConfig {
            cluster: self.cluster.ok_or_else(|| ConfigError::missing("cluster"))?,
            external_id: self.external_id,
            force_delete: self.force_delete,
            id: self.id,
            launch_type: self.launch_type,
            platform_version: self.platform_version,
            service: self.service.ok_or_else(|| ConfigError::missing("service"))?,
            tags: self.tags,
            tags_all: self.tags_all,
            task_definition: self.task_definition.ok_or_else(|| ConfigError::missing("task_definition"))?,
            wait_until_stable: self.wait_until_stable,
            wait_until_stable_timeout: self.wait_until_stable_timeout,
            capacity_provider_strategy: self.capacity_provider_strategy,
            load_balancer: self.load_balancer,
            network_configuration: self.network_configuration,
            scale: self.scale,
            service_registries: self.service_registries,
            meta: self.meta,
        })
    }
}

impl Block for EcsTaskSetConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("cluster", &self.cluster);
        fields.put_opt("external_id", &self.external_id);
        fields.put_opt("force_delete", &self.force_delete);
        fields.put_opt("id", &self.id);
        fields.put_opt("launch_type", &self.launch_type);
        fields.put_opt("platform_version", &self.platform_version);
        fields.put("service", &self.service);
        fields.put_opt("tags", &self.tags);
        fields.put_opt("tags_all", &self.tags_all);
        fields.put("task_definition", &self.task_definition);
        fields.put_opt("wait_until_stable", &self.wait_until_stable);
        fields.put_opt("wait_until_stable_timeout", &self.wait_until_stable_timeout);
        fields.put_blocks("capacity_provider_strategy", &self.capacity_provider_strategy);
        fields.put_blocks("load_balancer", &self.load_balancer);
        fields.put_block("network_configuration", self.network_configuration.as_ref());
        fields.put_block("scale", self.scale.as_ref());
        fields.put_block("service_registries", self.service_registries.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            cluster: fields.required("cluster")?,
            external_id: fields.optional("external_id")?,
            force_delete: fields.optional("force_delete")?,
            id: fields.optional("id")?,
            launch_type: fields.optional("launch_type")?,
            platform_version: fields.optional("platform_version")?,
            service: fields.required("service")?,
            tags: fields.optional("tags")?,
            tags_all: fields.optional("tags_all")?,
            task_definition: fields.required("task_definition")?,
            wait_until_stable: fields.optional("wait_until_stable")?,
            wait_until_stable_timeout: fields.optional("wait_until_stable_timeout")?,
            capacity_provider_strategy: fields.blocks("capacity_provider_strategy")?,
            load_balancer: fields.blocks("load_balancer")?,
            network_configuration: fields.block("network_configuration")?,
            scale: fields.block("scale")?,
            service_registries: fields.block("service_registries")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_task_set` resource
#[derive(Debug, Clone)]
pub struct EcsTaskSet {
    element: ResourceHandle,
}

impl EcsTaskSet {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_task_set";

    /// Register a new `aws_ecs_task_set` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsTaskSetConfig) -> Result<Self, StackError> {
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

    pub fn cluster(&self) -> Reference {
        self.root().reference("cluster")
    }

    pub fn cluster_input(&self) -> Option<Input<String>> {
        self.root().input("cluster")
    }

    pub fn set_cluster(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("cluster", value);
    }

    pub fn external_id(&self) -> Reference {
        self.root().reference("external_id")
    }

    pub fn external_id_input(&self) -> Option<Input<String>> {
        self.root().input("external_id")
    }

    pub fn set_external_id(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("external_id", value);
    }

    pub fn reset_external_id(&self) {
        self.root().reset("external_id");
    }

    pub fn force_delete(&self) -> Reference {
        self.root().reference("force_delete")
    }

    pub fn force_delete_input(&self) -> Option<Input<bool>> {
        self.root().input("force_delete")
    }

    pub fn set_force_delete(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("force_delete", value);
    }

    pub fn reset_force_delete(&self) {
        self.root().reset("force_delete");
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

    pub fn launch_type_input(&self) -> Option<Input<String>> {
        self.root().input("launch_type")
    }

    pub fn set_launch_type(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("launch_type", value);
    }

    pub fn reset_launch_type(&self) {
        self.root().reset("launch_type");
    }

    pub fn platform_version(&self) -> Reference {
        self.root().reference("platform_version")
    }

    pub fn platform_version_input(&self) -> Option<Input<String>> {
        self.root().input("platform_version")
    }

    pub fn set_platform_version(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("platform_version", value);
    }

    pub fn reset_platform_version(&self) {
        self.root().reset("platform_version");
    }

    pub fn service(&self) -> Reference {
        self.root().reference("service")
    }

    pub fn service_input(&self) -> Option<Input<String>> {
        self.root().input("service")
    }

    pub fn set_service(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("service", value);
    }

    pub fn stability_status(&self) -> Reference {
        self.root().reference("stability_status")
    }

    pub fn status(&self) -> Reference {
        self.root().reference("status")
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

    pub fn task_set_id(&self) -> Reference {
        self.root().reference("task_set_id")
    }

    pub fn wait_until_stable(&self) -> Reference {
        self.root().reference("wait_until_stable")
    }

    pub fn wait_until_stable_input(&self) -> Option<Input<bool>> {
        self.root().input("wait_until_stable")
    }

    pub fn set_wait_until_stable(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("wait_until_stable", value);
    }

    pub fn reset_wait_until_stable(&self) {
        self.root().reset("wait_until_stable");
    }

    pub fn wait_until_stable_timeout(&self) -> Reference {
        self.root().reference("wait_until_stable_timeout")
    }

    pub fn wait_until_stable_timeout_input(&self) -> Option<Input<String>> {
        self.root().input("wait_until_stable_timeout")
    }

    pub fn set_wait_until_stable_timeout(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("wait_until_stable_timeout", value);
    }

    pub fn reset_wait_until_stable_timeout(&self) {
        self.root().reset("wait_until_stable_timeout");
    }

    pub fn capacity_provider_strategy(&self) -> EcsTaskSetCapacityProviderStrategyList {
        EcsTaskSetCapacityProviderStrategyList::new(self.root().list("capacity_provider_strategy", true))
    }

    pub fn put_capacity_provider_strategy(&self, value: &[EcsTaskSetCapacityProviderStrategy]) {
        self.root().put_all("capacity_provider_strategy", value);
    }

    pub fn capacity_provider_strategy_input(&self) -> Option<Vec<EcsTaskSetCapacityProviderStrategy>> {
        self.root().blocks_input("capacity_provider_strategy")
    }

    pub fn reset_capacity_provider_strategy(&self) {
        self.root().reset("capacity_provider_strategy");
    }

    pub fn load_balancer(&self) -> EcsTaskSetLoadBalancerList {
        EcsTaskSetLoadBalancerList::new(self.root().list("load_balancer", true))
    }

    pub fn put_load_balancer(&self, value: &[EcsTaskSetLoadBalancer]) {
        self.root().put_all("load_balancer", value);
    }

    pub fn load_balancer_input(&self) -> Option<Vec<EcsTaskSetLoadBalancer>> {
        self.root().blocks_input("load_balancer")
    }

    pub fn reset_load_balancer(&self) {
        self.root().reset("load_balancer");
    }

    pub fn network_configuration(&self) -> EcsTaskSetNetworkConfigurationOutputReference {
        EcsTaskSetNetworkConfigurationOutputReference::new(self.root().block("network_configuration", false))
    }

    pub fn put_network_configuration(&self, value: &EcsTaskSetNetworkConfiguration) {
        self.root().put("network_configuration", value);
    }

    pub fn network_configuration_input(&self) -> Option<EcsTaskSetNetworkConfiguration> {
        self.root().block_input("network_configuration")
    }

    pub fn reset_network_configuration(&self) {
        self.root().reset("network_configuration");
    }

    pub fn scale(&self) -> EcsTaskSetScaleOutputReference {
        EcsTaskSetScaleOutputReference::new(self.root().block("scale", false))
    }

    pub fn put_scale(&self, value: &EcsTaskSetScale) {
        self.root().put("scale", value);
    }

    pub fn scale_input(&self) -> Option<EcsTaskSetScale> {
        self.root().block_input("scale")
    }

    pub fn reset_scale(&self) {
        self.root().reset("scale");
    }

    pub fn service_registries(&self) -> EcsTaskSetServiceRegistriesOutputReference {
        EcsTaskSetServiceRegistriesOutputReference::new(self.root().block("service_registries", false))
    }

    pub fn put_service_registries(&self, value: &EcsTaskSetServiceRegistries) {
        self.root().put("service_registries", value);
    }

    pub fn service_registries_input(&self) -> Option<EcsTaskSetServiceRegistries> {
        self.root().block_input("service_registries")
    }

    pub fn reset_service_registries(&self) {
        self.root().reset("service_registries");
    }
}

impl TerraformElement for EcsTaskSet {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// `capacity_provider_strategy` block of [`EcsTaskSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskSetCapacityProviderStrategy {
    pub base: Option<Input<f64>>,
    pub capacity_provider: Input<String>,
    pub weight: Input<f64>,
}

impl EcsTaskSetCapacityProviderStrategy {
    pub fn builder() -> EcsTaskSetCapacityProviderStrategyBuilder {
        EcsTaskSetCapacityProviderStrategyBuilder::default()
    }
}

/// Builder for [`EcsTaskSetCapacityProviderStrategy`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskSetCapacityProviderStrategyBuilder {
    base: Option<Input<f64>>,
    capacity_provider: Option<Input<String>>,
    weight: Option<Input<f64>>,
}

impl EcsTaskSetCapacityProviderStrategyBuilder {
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

    pub fn build(self) -> Result<EcsTaskSetCapacityProviderStrategy, ConfigError> {
        Ok(EcsTaskSetCapacityProviderStrategy {
            base: self.base,
            capacity_provider: self.capacity_provider.ok_or_else(|| ConfigError::missing("capacity_provider"))?,
            weight: self.weight.ok_or_else(|| ConfigError::missing("weight"))?,
        })
    }
}

impl Block for EcsTaskSetCapacityProviderStrategy {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("base", &self.base);
        fields.put("capacity_provider", &self.capacity_provider);
        fields.put("weight", &self.weight);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            base: fields.optional("base")?,
            capacity_provider: fields.required("capacity_provider")?,
            weight: fields.required("weight")?,
        })
    }
}

/// Output reference to one `capacity_provider_strategy` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetCapacityProviderStrategyOutputReference {
    inner: BlockRef,
}

impl EcsTaskSetCapacityProviderStrategyOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskSetCapacityProviderStrategy> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskSetCapacityProviderStrategy>) {
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
}

/// Instances of the `capacity_provider_strategy` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetCapacityProviderStrategyList {
    inner: ListRef,
}

impl EcsTaskSetCapacityProviderStrategyList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsTaskSetCapacityProviderStrategyOutputReference {
        EcsTaskSetCapacityProviderStrategyOutputReference::new(self.inner.get(index))
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

/// `load_balancer` block of [`EcsTaskSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskSetLoadBalancer {
    pub container_name: Input<String>,
    pub container_port: Option<Input<f64>>,
    pub load_balancer_name: Option<Input<String>>,
    pub target_group_arn: Option<Input<String>>,
}

impl EcsTaskSetLoadBalancer {
    pub fn builder() -> EcsTaskSetLoadBalancerBuilder {
        EcsTaskSetLoadBalancerBuilder::default()
    }
}

/// Builder for [`EcsTaskSetLoadBalancer`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskSetLoadBalancerBuilder {
    container_name: Option<Input<String>>,
    container_port: Option<Input<f64>>,
    load_balancer_name: Option<Input<String>>,
    target_group_arn: Option<Input<String>>,
}

impl EcsTaskSetLoadBalancerBuilder {
    pub fn container_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.container_name = Some(value.into());
        self
    }

    pub fn container_port(mut self, value: impl Into<Input<f64>>) -> Self {
        self.container_port = Some(value.into());
        self
    }

    pub fn load_balancer_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.load_balancer_name = Some(value.into());
        self
    }

    pub fn target_group_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.target_group_arn = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskSetLoadBalancer, ConfigError> {
        Ok(EcsTaskSetLoadBalancer {
            container_name: self.container_name.ok_or_else(|| ConfigError::missing("container_name"))?,
            container_port: self.container_port,
            load_balancer_name: self.load_balancer_name,
            target_group_arn: self.target_group_arn,
        })
    }
}

impl Block for EcsTaskSetLoadBalancer {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("container_name", &self.container_name);
        fields.put_opt("container_port", &self.container_port);
        fields.put_opt("load_balancer_name", &self.load_balancer_name);
        fields.put_opt("target_group_arn", &self.target_group_arn);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            container_name: fields.required("container_name")?,
            container_port: fields.optional("container_port")?,
            load_balancer_name: fields.optional("load_balancer_name")?,
            target_group_arn: fields.optional("target_group_arn")?,
        })
    }
}

/// Output reference to one `load_balancer` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetLoadBalancerOutputReference {
    inner: BlockRef,
}

impl EcsTaskSetLoadBalancerOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskSetLoadBalancer> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskSetLoadBalancer>) {
        self.inner.set_internal_value(value);
    }

    pub fn container_name(&self) -> Reference {
        self.inner.reference("container_name")
    }

    pub fn container_name_input(&self) -> Option<Input<String>> {
        self.inner.input("container_name")
    }

    pub fn set_container_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("container_name", value);
    }

    pub fn container_port(&self) -> Reference {
        self.inner.reference("container_port")
    }

    pub fn container_port_input(&self) -> Option<Input<f64>> {
        self.inner.input("container_port")
    }

    pub fn set_container_port(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("container_port", value);
    }

    pub fn reset_container_port(&self) {
        self.inner.reset("container_port");
    }

    pub fn load_balancer_name(&self) -> Reference {
        self.inner.reference("load_balancer_name")
    }

    pub fn load_balancer_name_input(&self) -> Option<Input<String>> {
        self.inner.input("load_balancer_name")
    }

    pub fn set_load_balancer_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("load_balancer_name", value);
    }

    pub fn reset_load_balancer_name(&self) {
        self.inner.reset("load_balancer_name");
    }

    pub fn target_group_arn(&self) -> Reference {
        self.inner.reference("target_group_arn")
    }

    pub fn target_group_arn_input(&self) -> Option<Input<String>> {
        self.inner.input("target_group_arn")
    }

    pub fn set_target_group_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("target_group_arn", value);
    }

    pub fn reset_target_group_arn(&self) {
        self.inner.reset("target_group_arn");
    }
}

/// Instances of the `load_balancer` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetLoadBalancerList {
    inner: ListRef,
}

impl EcsTaskSetLoadBalancerList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsTaskSetLoadBalancerOutputReference {
        EcsTaskSetLoadBalancerOutputReference::new(self.inner.get(index))
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

/// `network_configuration` block of [`EcsTaskSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskSetNetworkConfiguration {
    pub assign_public_ip: Option<Input<bool>>,
    pub security_groups: Option<Input<Vec<String>>>,
    pub subnets: Input<Vec<String>>,
}

impl EcsTaskSetNetworkConfiguration {
    pub fn builder() -> EcsTaskSetNetworkConfigurationBuilder {
        EcsTaskSetNetworkConfigurationBuilder::default()
    }
}

/// Builder for [`EcsTaskSetNetworkConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskSetNetworkConfigurationBuilder {
    assign_public_ip: Option<Input<bool>>,
    security_groups: Option<Input<Vec<String>>>,
    subnets: Option<Input<Vec<String>>>,
}

impl EcsTaskSetNetworkConfigurationBuilder {
    pub fn assign_public_ip(mut self, value: impl Into<Input<bool>>) -> Self {
        self.assign_public_ip = Some(value.into());
        self
    }

    pub fn security_groups(mut self, value: impl Into<Input<Vec<String>>>) -> Self {
        self.security_groups = Some(value.into());
        self
    }

    pub fn subnets(mut self, value: impl Into<Input<Vec<String>>>) -> Self {
        self.subnets = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskSetNetworkConfiguration, ConfigError> {
        Ok(EcsTaskSetNetworkConfiguration {
            assign_public_ip: self.assign_public_ip,
            security_groups: self.security_groups,
            subnets: self.subnets.ok_or_else(|| ConfigError::missing("subnets"))?,
        })
    }
}

impl Block for EcsTaskSetNetworkConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("assign_public_ip", &self.assign_public_ip);
        fields.put_opt("security_groups", &self.security_groups);
        fields.put("subnets", &self.subnets);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            assign_public_ip: fields.optional("assign_public_ip")?,
            security_groups: fields.optional("security_groups")?,
            subnets: fields.required("subnets")?,
        })
    }
}

/// Output reference to one `network_configuration` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetNetworkConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsTaskSetNetworkConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskSetNetworkConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskSetNetworkConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn assign_public_ip(&self) -> Reference {
        self.inner.reference("assign_public_ip")
    }

    pub fn assign_public_ip_input(&self) -> Option<Input<bool>> {
        self.inner.input("assign_public_ip")
    }

    pub fn set_assign_public_ip(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("assign_public_ip", value);
    }

    pub fn reset_assign_public_ip(&self) {
        self.inner.reset("assign_public_ip");
    }

    pub fn security_groups(&self) -> Reference {
        self.inner.reference("security_groups")
    }

    pub fn security_groups_input(&self) -> Option<Input<Vec<String>>> {
        self.inner.input("security_groups")
    }

    pub fn set_security_groups(&self, value: impl Into<Input<Vec<String>>>) {
        let value: Input<Vec<String>> = value.into();
        self.inner.set("security_groups", value);
    }

    pub fn reset_security_groups(&self) {
        self.inner.reset("security_groups");
    }

    pub fn subnets(&self) -> Reference {
        self.inner.reference("subnets")
    }

    pub fn subnets_input(&self) -> Option<Input<Vec<String>>> {
        self.inner.input("subnets")
    }

    pub fn set_subnets(&self, value: impl Into<Input<Vec<String>>>) {
        let value: Input<Vec<String>> = value.into();
        self.inner.set("subnets", value);
    }
}

/// `scale` block of [`EcsTaskSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskSetScale {
    pub unit: Option<Input<String>>,
    pub value: Option<Input<f64>>,
}

impl EcsTaskSetScale {
    pub fn builder() -> EcsTaskSetScaleBuilder {
        EcsTaskSetScaleBuilder::default()
    }
}

/// Builder for [`EcsTaskSetScale`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskSetScaleBuilder {
    unit: Option<Input<String>>,
    value: Option<Input<f64>>,
}

impl EcsTaskSetScaleBuilder {
    pub fn unit(mut self, value: impl Into<Input<String>>) -> Self {
        self.unit = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<Input<f64>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskSetScale, ConfigError> {
        Ok(EcsTaskSetScale {
            unit: self.unit,
            value: self.value,
        })
    }
}

impl Block for EcsTaskSetScale {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("unit", &self.unit);
        fields.put_opt("value", &self.value);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            unit: fields.optional("unit")?,
            value: fields.optional("value")?,
        })
    }
}

/// Output reference to one `scale` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetScaleOutputReference {
    inner: BlockRef,
}

impl EcsTaskSetScaleOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskSetScale> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskSetScale>) {
        self.inner.set_internal_value(value);
    }

    pub fn unit(&self) -> Reference {
        self.inner.reference("unit")
    }

    pub fn unit_input(&self) -> Option<Input<String>> {
        self.inner.input("unit")
    }

    pub fn set_unit(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("unit", value);
    }

    pub fn reset_unit(&self) {
        self.inner.reset("unit");
    }

    pub fn value(&self) -> Reference {
        self.inner.reference("value")
    }

    pub fn value_input(&self) -> Option<Input<f64>> {
        self.inner.input("value")
    }

    pub fn set_value(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("value", value);
    }

    pub fn reset_value(&self) {
        self.inner.reset("value");
    }
}

/// `service_registries` block of [`EcsTaskSet`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskSetServiceRegistries {
    pub container_name: Option<Input<String>>,
    pub container_port: Option<Input<f64>>,
    pub port: Option<Input<f64>>,
    pub registry_arn: Input<String>,
}

impl EcsTaskSetServiceRegistries {
    pub fn builder() -> EcsTaskSetServiceRegistriesBuilder {
        EcsTaskSetServiceRegistriesBuilder::default()
    }
}

/// Builder for [`EcsTaskSetServiceRegistries`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskSetServiceRegistriesBuilder {
    container_name: Option<Input<String>>,
    container_port: Option<Input<f64>>,
    port: Option<Input<f64>>,
    registry_arn: Option<Input<String>>,
}

impl EcsTaskSetServiceRegistriesBuilder {
    pub fn container_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.container_name = Some(value.into());
        self
    }

    pub fn container_port(mut self, value: impl Into<Input<f64>>) -> Self {
        self.container_port = Some(value.into());
        self
    }

    pub fn port(mut self, value: impl Into<Input<f64>>) -> Self {
        self.port = Some(value.into());
        self
    }

    pub fn registry_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.registry_arn = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskSetServiceRegistries, ConfigError> {
        Ok(EcsTaskSetServiceRegistries {
            container_name: self.container_name,
            container_port: self.container_port,
            port: self.port,
            registry_arn: self.registry_arn.ok_or_else(|| ConfigError::missing("registry_arn"))?,
        })
    }
}

impl Block for EcsTaskSetServiceRegistries {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("container_name", &self.container_name);
        fields.put_opt("container_port", &self.container_port);
        fields.put_opt("port", &self.port);
        fields.put("registry_arn", &self.registry_arn);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            container_name: fields.optional("container_name")?,
            container_port: fields.optional("container_port")?,
            port: fields.optional("port")?,
            registry_arn: fields.required("registry_arn")?,
        })
    }
}

/// Output reference to one `service_registries` block
#[derive(Debug, Clone)]
pub struct EcsTaskSetServiceRegistriesOutputReference {
    inner: BlockRef,
}

impl EcsTaskSetServiceRegistriesOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskSetServiceRegistries> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskSetServiceRegistries>) {
        self.inner.set_internal_value(value);
    }

    pub fn container_name(&self) -> Reference {
        self.inner.reference("container_name")
    }

    pub fn container_name_input(&self) -> Option<Input<String>> {
        self.inner.input("container_name")
    }

    pub fn set_container_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("container_name", value);
    }

    pub fn reset_container_name(&self) {
        self.inner.reset("container_name");
    }

    pub fn container_port(&self) -> Reference {
        self.inner.reference("container_port")
    }

    pub fn container_port_input(&self) -> Option<Input<f64>> {
        self.inner.input("container_port")
    }

    pub fn set_container_port(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("container_port", value);
    }

    pub fn reset_container_port(&self) {
        self.inner.reset("container_port");
    }

    pub fn port(&self) -> Reference {
        self.inner.reference("port")
    }

    pub fn port_input(&self) -> Option<Input<f64>> {
        self.inner.input("port")
    }

    pub fn set_port(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("port", value);
    }

    pub fn reset_port(&self) {
        self.inner.reset("port");
    }

    pub fn registry_arn(&self) -> Reference {
        self.inner.reference("registry_arn")
    }

    pub fn registry_arn_input(&self) -> Option<Input<String>> {
        self.inner.input("registry_arn")
    }

    pub fn set_registry_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("registry_arn", value);
    }
}
