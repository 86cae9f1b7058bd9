//! `aws_ecs_task_definition` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::collections::BTreeMap;
use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    ListRef, MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema,
    Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_task_definition`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_task_definition")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("arn_without_revision", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("container_definitions", AttributeType::String).required())
            .attribute(AttributeSchema::new("cpu", AttributeType::String))
            .attribute(AttributeSchema::new("execution_role_arn", AttributeType::String))
            .attribute(AttributeSchema::new("family", AttributeType::String).required())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("ipc_mode", AttributeType::String))
            .attribute(AttributeSchema::new("memory", AttributeType::String))
            .attribute(AttributeSchema::new("network_mode", AttributeType::String).computed())
            .attribute(AttributeSchema::new("pid_mode", AttributeType::String))
            .attribute(AttributeSchema::new("requires_compatibilities", AttributeType::Set(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("revision", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("skip_destroy", AttributeType::Bool))
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String))).computed())
            .attribute(AttributeSchema::new("task_role_arn", AttributeType::String))
            .block(
                BlockSchema::new("ephemeral_storage", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("size_in_gib", AttributeType::Number).required()),
            )
            .block(
                BlockSchema::new("inference_accelerator", NestingMode::Set)
                    .attribute(AttributeSchema::new("device_name", AttributeType::String).required())
                    .attribute(AttributeSchema::new("device_type", AttributeType::String).required()),
            )
            .block(
                BlockSchema::new("placement_constraints", NestingMode::Set)
                    .max_items(10)
                    .attribute(AttributeSchema::new("expression", AttributeType::String))
                    .attribute(AttributeSchema::new("type", AttributeType::String).required()),
            )
            .block(
                BlockSchema::new("proxy_configuration", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("container_name", AttributeType::String).required())
                    .attribute(AttributeSchema::new("properties", AttributeType::Map(Box::new(AttributeType::String))))
                    .attribute(AttributeSchema::new("type", AttributeType::String)),
            )
            .block(
                BlockSchema::new("runtime_platform", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("cpu_architecture", AttributeType::String))
                    .attribute(AttributeSchema::new("operating_system_family", AttributeType::String)),
            )
            .block(
                BlockSchema::new("volume", NestingMode::Set)
                    .attribute(AttributeSchema::new("host_path", AttributeType::String))
                    .attribute(AttributeSchema::new("name", AttributeType::String).required())
                    .block(
                        BlockSchema::new("docker_volume_configuration", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("autoprovision", AttributeType::Bool))
                            .attribute(AttributeSchema::new("driver", AttributeType::String))
                            .attribute(AttributeSchema::new("driver_opts", AttributeType::Map(Box::new(AttributeType::String))))
                            .attribute(AttributeSchema::new("labels", AttributeType::Map(Box::new(AttributeType::String))))
                            .attribute(AttributeSchema::new("scope", AttributeType::String).computed()),
                    )
                    .block(
                        BlockSchema::new("efs_volume_configuration", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("file_system_id", AttributeType::String).required())
                            .attribute(AttributeSchema::new("root_directory", AttributeType::String))
                            .attribute(AttributeSchema::new("transit_encryption", AttributeType::String))
                            .attribute(AttributeSchema::new("transit_encryption_port", AttributeType::Number))
                            .block(
                                BlockSchema::new("authorization_config", NestingMode::List)
                                    .max_items(1)
                                    .attribute(AttributeSchema::new("access_point_id", AttributeType::String))
                                    .attribute(AttributeSchema::new("iam", AttributeType::String)),
                            ),
                    )
                    .block(
                        BlockSchema::new("fsx_windows_file_server_volume_configuration", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("file_system_id", AttributeType::String).required())
                            .attribute(AttributeSchema::new("root_directory", AttributeType::String).required())
                            .block(
                                BlockSchema::new("authorization_config", NestingMode::List)
                                    .min_items(1)
                                    .max_items(1)
                                    .attribute(AttributeSchema::new("credentials_parameter", AttributeType::String).required())
                                    .attribute(AttributeSchema::new("domain", AttributeType::String).required()),
                            ),
                    ),
            )
    })
}

/// Arguments of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionConfig {
    pub container_definitions: Input<String>,
    pub cpu: Option<Input<String>>,
    pub execution_role_arn: Option<Input<String>>,
    pub family: Input<String>,
    pub id: Option<Input<String>>,
    pub ipc_mode: Option<Input<String>>,
    pub memory: Option<Input<String>>,
    pub network_mode: Option<Input<String>>,
    pub pid_mode: Option<Input<String>>,
    pub requires_compatibilities: Option<Input<Vec<String>>>,
    pub skip_destroy: Option<Input<bool>>,
    pub tags: Option<Input<BTreeMap<String, String>>>,
    pub tags_all: Option<Input<BTreeMap<String, String>>>,
    pub task_role_arn: Option<Input<String>>,
    pub ephemeral_storage: Option<EcsTaskDefinitionEphemeralStorage>,
    pub inference_accelerator: Vec<EcsTaskDefinitionInferenceAccelerator>,
    pub placement_constraints: Vec<EcsTaskDefinitionPlacementConstraints>,
    pub proxy_configuration: Option<EcsTaskDefinitionProxyConfiguration>,
    pub runtime_platform: Option<EcsTaskDefinitionRuntimePlatform>,
    pub volume: Vec<EcsTaskDefinitionVolume>,
    pub meta: MetaArguments,
}

impl EcsTaskDefinitionConfig {
    pub fn builder() -> EcsTaskDefinitionConfigBuilder {
        EcsTaskDefinitionConfigBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionConfigBuilder {
    container_definitions: Option<Input<String>>,
    cpu: Option<Input<String>>,
    execution_role_arn: Option<Input<String>>,
    family: Option<Input<String>>,
    id: Option<Input<String>>,
    ipc_mode: Option<Input<String>>,
    memory: Option<Input<String>>,
    network_mode: Option<Input<String>>,
    pid_mode: Option<Input<String>>,
    requires_compatibilities: Option<Input<Vec<String>>>,
    skip_destroy: Option<Input<bool>>,
    tags: Option<Input<BTreeMap<String, String>>>,
    tags_all: Option<Input<BTreeMap<String, String>>>,
    task_role_arn: Option<Input<String>>,
    ephemeral_storage: Option<EcsTaskDefinitionEphemeralStorage>,
    inference_accelerator: Vec<EcsTaskDefinitionInferenceAccelerator>,
    placement_constraints: Vec<EcsTaskDefinitionPlacementConstraints>,
    proxy_configuration: Option<EcsTaskDefinitionProxyConfiguration>,
    runtime_platform: Option<EcsTaskDefinitionRuntimePlatform>,
    volume: Vec<EcsTaskDefinitionVolume>,
    meta: MetaArguments,
}

impl EcsTaskDefinitionConfigBuilder {
    pub fn container_definitions(mut self, value: impl Into<Input<String>>) -> Self {
        self.container_definitions = Some(value.into());
        self
    }

    pub fn cpu(mut self, value: impl Into<Input<String>>) -> Self {
        self.cpu = Some(value.into());
        self
    }

    pub fn execution_role_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.execution_role_arn = Some(value.into());
        self
    }

    pub fn family(mut self, value: impl Into<Input<String>>) -> Self {
        self.family = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn ipc_mode(mut self, value: impl Into<Input<String>>) -> Self {
        self.ipc_mode = Some(value.into());
        self
    }

    pub fn memory(mut self, value: impl Into<Input<String>>) -> Self {
        self.memory = Some(value.into());
        self
    }

    pub fn network_mode(mut self, value: impl Into<Input<String>>) -> Self {
        self.network_mode = Some(value.into());
        self
    }

    pub fn pid_mode(mut self, value: impl Into<Input<String>>) -> Self {
        self.pid_mode = Some(value.into());
        self
    }

    pub fn requires_compatibilities(mut self, value: impl Into<Input<Vec<String>>>) -> Self {
        self.requires_compatibilities = Some(value.into());
        self
    }

    pub fn skip_destroy(mut self, value: impl Into<Input<bool>>) -> Self {
        self.skip_destroy = Some(value.into());
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

    pub fn task_role_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.task_role_arn = Some(value.into());
        self
    }

    pub fn ephemeral_storage(mut self, value: EcsTaskDefinitionEphemeralStorage) -> Self {
        self.ephemeral_storage = Some(value);
        self
    }

    pub fn inference_accelerator(mut self, value: impl IntoIterator<Item = EcsTaskDefinitionInferenceAccelerator>) -> Self {
        self.inference_accelerator = value.into_iter().collect();
        self
    }

    pub fn placement_constraints(mut self, value: impl IntoIterator<Item = EcsTaskDefinitionPlacementConstraints>) -> Self {
        self.placement_constraints = value.into_iter().collect();
        self
    }

    pub fn proxy_configuration(mut self, value: EcsTaskDefinitionProxyConfiguration) -> Self {
        self.proxy_configuration = Some(value);
        self
    }

    pub fn runtime_platform(mut self, value: EcsTaskDefinitionRuntimePlatform) -> Self {
        self.runtime_platform = Some(value);
        self
    }

    pub fn volume(mut self, value: impl IntoIterator<Item = EcsTaskDefinitionVolume>) -> Self {
        self.volume = value.into_iter().collect();
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionConfig, ConfigError> {
        Ok(EcsTaskDefinitionConfig {
            container_definitions: self.container_definitions.ok_or_else(|| ConfigError::missing("container_definitions"))?,
            cpu: self.cpu,
            execution_role_arn: self.execution_role_arn,
            family: self.family.ok_or_else(|| ConfigError::missing("family"))?,
            id: self.id,
            ipc_mode: self.ipc_mode,
            memory: self.memory,
            network_mode: self.network_mode,
            pid_mode: self.pid_mode,
            requires_compatibilities: self.requires_compatibilities,
            skip_destroy: self.skip_destroy,
            tags: self.tags,
            tags_all: self.tags_all,
            task_role_arn: self.task_role_arn,
            ephemeral_storage: self.ephemeral_storage,
            inference_accelerator: self.inference_accelerator,
            placement_constraints: self.placement_constraints,
            proxy_configuration: self.proxy_configuration,
            runtime_platform: self.runtime_platform,
            volume: self.volume,
            meta: self.meta,
        })
    }
}

impl Block for EcsTaskDefinitionConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("container_definitions", &self.container_definitions);
        fields.put_opt("cpu", &self.cpu);
        fields.put_opt("execution_role_arn", &self.execution_role_arn);
        fields.put("family", &self.family);
        fields.put_opt("id", &self.id);
        fields.put_opt("ipc_mode", &self.ipc_mode);
        fields.put_opt("memory", &self.memory);
        fields.put_opt("network_mode", &self.network_mode);
        fields.put_opt("pid_mode", &self.pid_mode);
        fields.put_opt("requires_compatibilities", &self.requires_compatibilities);
        fields.put_opt("skip_destroy", &self.skip_destroy);
        fields.put_opt("tags", &self.tags);
        fields.put_opt("tags_all", &self.tags_all);
        fields.put_opt("task_role_arn", &self.task_role_arn);
        fields.put_block("ephemeral_storage", self.ephemeral_storage.as_ref());
        fields.put_blocks("inference_accelerator", &self.inference_accelerator);
        fields.put_blocks("placement_constraints", &self.placement_constraints);
        fields.put_block("proxy_configuration", self.proxy_configuration.as_ref());
        fields.put_block("runtime_platform", self.runtime_platform.as_ref());
        fields.put_blocks("volume", &self.volume);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            container_definitions: fields.required("container_definitions")?,
            cpu: fields.optional("cpu")?,
            execution_role_arn: fields.optional("execution_role_arn")?,
            family: fields.required("family")?,
            id: fields.optional("id")?,
            ipc_mode: fields.optional("ipc_mode")?,
            memory: fields.optional("memory")?,
            network_mode: fields.optional("network_mode")?,
            pid_mode: fields.optional("pid_mode")?,
            requires_compatibilities: fields.optional("requires_compatibilities")?,
            skip_destroy: fields.optional("skip_destroy")?,
            tags: fields.optional("tags")?,
            tags_all: fields.optional("tags_all")?,
            task_role_arn: fields.optional("task_role_arn")?,
            ephemeral_storage: fields.block("ephemeral_storage")?,
            inference_accelerator: fields.blocks("inference_accelerator")?,
            placement_constraints: fields.blocks("placement_constraints")?,
            proxy_configuration: fields.block("proxy_configuration")?,
            runtime_platform: fields.block("runtime_platform")?,
            volume: fields.blocks("volume")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_task_definition` resource
#[derive(Debug, Clone)]
pub struct EcsTaskDefinition {
    element: ResourceHandle,
}

impl EcsTaskDefinition {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_task_definition";

    /// Register a new `aws_ecs_task_definition` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsTaskDefinitionConfig) -> Result<Self, StackError> {
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

    pub fn arn_without_revision(&self) -> Reference {
        self.root().reference("arn_without_revision")
    }

    pub fn container_definitions(&self) -> Reference {
        self.root().reference("container_definitions")
    }

    pub fn container_definitions_input(&self) -> Option<Input<String>> {
        self.root().input("container_definitions")
    }

    pub fn set_container_definitions(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("container_definitions", value);
    }

    pub fn cpu(&self) -> Reference {
        self.root().reference("cpu")
    }

    pub fn cpu_input(&self) -> Option<Input<String>> {
        self.root().input("cpu")
    }

    pub fn set_cpu(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("cpu", value);
    }

    pub fn reset_cpu(&self) {
        self.root().reset("cpu");
    }

    pub fn execution_role_arn(&self) -> Reference {
        self.root().reference("execution_role_arn")
    }

    pub fn execution_role_arn_input(&self) -> Option<Input<String>> {
        self.root().input("execution_role_arn")
    }

    pub fn set_execution_role_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("execution_role_arn", value);
    }

    pub fn reset_execution_role_arn(&self) {
        self.root().reset("execution_role_arn");
    }

    pub fn family(&self) -> Reference {
        self.root().reference("family")
    }

    pub fn family_input(&self) -> Option<Input<String>> {
        self.root().input("family")
    }

    pub fn set_family(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("family", value);
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

    pub fn ipc_mode(&self) -> Reference {
        self.root().reference("ipc_mode")
    }

    pub fn ipc_mode_input(&self) -> Option<Input<String>> {
        self.root().input("ipc_mode")
    }

    pub fn set_ipc_mode(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("ipc_mode", value);
    }

    pub fn reset_ipc_mode(&self) {
        self.root().reset("ipc_mode");
    }

    pub fn memory(&self) -> Reference {
        self.root().reference("memory")
    }

    pub fn memory_input(&self) -> Option<Input<String>> {
        self.root().input("memory")
    }

    pub fn set_memory(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("memory", value);
    }

    pub fn reset_memory(&self) {
        self.root().reset("memory");
    }

    pub fn network_mode(&self) -> Reference {
        self.root().reference("network_mode")
    }

    pub fn network_mode_input(&self) -> Option<Input<String>> {
        self.root().input("network_mode")
    }

    pub fn set_network_mode(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("network_mode", value);
    }

    pub fn reset_network_mode(&self) {
        self.root().reset("network_mode");
    }

    pub fn pid_mode(&self) -> Reference {
        self.root().reference("pid_mode")
    }

    pub fn pid_mode_input(&self) -> Option<Input<String>> {
        self.root().input("pid_mode")
    }

    pub fn set_pid_mode(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("pid_mode", value);
    }

    pub fn reset_pid_mode(&self) {
        self.root().reset("pid_mode");
    }

    pub fn requires_compatibilities(&self) -> Reference {
        self.root().reference("requires_compatibilities")
    }

    pub fn requires_compatibilities_input(&self) -> Option<Input<Vec<String>>> {
        self.root().input("requires_compatibilities")
    }

    pub fn set_requires_compatibilities(&self, value: impl Into<Input<Vec<String>>>) {
        let value: Input<Vec<String>> = value.into();
        self.root().set("requires_compatibilities", value);
    }

    pub fn reset_requires_compatibilities(&self) {
        self.root().reset("requires_compatibilities");
    }

    pub fn revision(&self) -> Reference {
        self.root().reference("revision")
    }

    pub fn skip_destroy(&self) -> Reference {
        self.root().reference("skip_destroy")
    }

    pub fn skip_destroy_input(&self) -> Option<Input<bool>> {
        self.root().input("skip_destroy")
    }

    pub fn set_skip_destroy(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("skip_destroy", value);
    }

    pub fn reset_skip_destroy(&self) {
        self.root().reset("skip_destroy");
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

    pub fn task_role_arn(&self) -> Reference {
        self.root().reference("task_role_arn")
    }

    pub fn task_role_arn_input(&self) -> Option<Input<String>> {
        self.root().input("task_role_arn")
    }

    pub fn set_task_role_arn(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("task_role_arn", value);
    }

    pub fn reset_task_role_arn(&self) {
        self.root().reset("task_role_arn");
    }

    pub fn ephemeral_storage(&self) -> EcsTaskDefinitionEphemeralStorageOutputReference {
        EcsTaskDefinitionEphemeralStorageOutputReference::new(self.root().block("ephemeral_storage", false))
    }

    pub fn put_ephemeral_storage(&self, value: &EcsTaskDefinitionEphemeralStorage) {
        self.root().put("ephemeral_storage", value);
    }

    pub fn ephemeral_storage_input(&self) -> Option<EcsTaskDefinitionEphemeralStorage> {
        self.root().block_input("ephemeral_storage")
    }

    pub fn reset_ephemeral_storage(&self) {
        self.root().reset("ephemeral_storage");
    }

    pub fn inference_accelerator(&self) -> EcsTaskDefinitionInferenceAcceleratorList {
        EcsTaskDefinitionInferenceAcceleratorList::new(self.root().list("inference_accelerator", true))
    }

    pub fn put_inference_accelerator(&self, value: &[EcsTaskDefinitionInferenceAccelerator]) {
        self.root().put_all("inference_accelerator", value);
    }

    pub fn inference_accelerator_input(&self) -> Option<Vec<EcsTaskDefinitionInferenceAccelerator>> {
        self.root().blocks_input("inference_accelerator")
    }

    pub fn reset_inference_accelerator(&self) {
        self.root().reset("inference_accelerator");
    }

    pub fn placement_constraints(&self) -> EcsTaskDefinitionPlacementConstraintsList {
        EcsTaskDefinitionPlacementConstraintsList::new(self.root().list("placement_constraints", true))
    }

    pub fn put_placement_constraints(&self, value: &[EcsTaskDefinitionPlacementConstraints]) {
        self.root().put_all("placement_constraints", value);
    }

    pub fn placement_constraints_input(&self) -> Option<Vec<EcsTaskDefinitionPlacementConstraints>> {
        self.root().blocks_input("placement_constraints")
    }

    pub fn reset_placement_constraints(&self) {
        self.root().reset("placement_constraints");
    }

    pub fn proxy_configuration(&self) -> EcsTaskDefinitionProxyConfigurationOutputReference {
        EcsTaskDefinitionProxyConfigurationOutputReference::new(self.root().block("proxy_configuration", false))
    }

    pub fn put_proxy_configuration(&self, value: &EcsTaskDefinitionProxyConfiguration) {
        self.root().put("proxy_configuration", value);
    }

    pub fn proxy_configuration_input(&self) -> Option<EcsTaskDefinitionProxyConfiguration> {
        self.root().block_input("proxy_configuration")
    }

    pub fn reset_proxy_configuration(&self) {
        self.root().reset("proxy_configuration");
    }

    pub fn runtime_platform(&self) -> EcsTaskDefinitionRuntimePlatformOutputReference {
        EcsTaskDefinitionRuntimePlatformOutputReference::new(self.root().block("runtime_platform", false))
    }

    pub fn put_runtime_platform(&self, value: &EcsTaskDefinitionRuntimePlatform) {
        self.root().put("runtime_platform", value);
    }

    pub fn runtime_platform_input(&self) -> Option<EcsTaskDefinitionRuntimePlatform> {
        self.root().block_input("runtime_platform")
    }

    pub fn reset_runtime_platform(&self) {
        self.root().reset("runtime_platform");
    }

    pub fn volume(&self) -> EcsTaskDefinitionVolumeList {
        EcsTaskDefinitionVolumeList::new(self.root().list("volume", true))
    }

    pub fn put_volume(&self, value: &[EcsTaskDefinitionVolume]) {
        self.root().put_all("volume", value);
    }

    pub fn volume_input(&self) -> Option<Vec<EcsTaskDefinitionVolume>> {
        self.root().blocks_input("volume")
    }

    pub fn reset_volume(&self) {
        self.root().reset("volume");
    }
}

impl TerraformElement for EcsTaskDefinition {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// `ephemeral_storage` block of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionEphemeralStorage {
    pub size_in_gib: Input<f64>,
}

impl EcsTaskDefinitionEphemeralStorage {
    pub fn builder() -> EcsTaskDefinitionEphemeralStorageBuilder {
        EcsTaskDefinitionEphemeralStorageBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionEphemeralStorage`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionEphemeralStorageBuilder {
    size_in_gib: Option<Input<f64>>,
}

impl EcsTaskDefinitionEphemeralStorageBuilder {
    pub fn size_in_gib(mut self, value: impl Into<Input<f64>>) -> Self {
        self.size_in_gib = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionEphemeralStorage, ConfigError> {
        Ok(EcsTaskDefinitionEphemeralStorage {
            size_in_gib: self.size_in_gib.ok_or_else(|| ConfigError::missing("size_in_gib"))?,
        })
    }
}

impl Block for EcsTaskDefinitionEphemeralStorage {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("size_in_gib", &self.size_in_gib);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            size_in_gib: fields.required("size_in_gib")?,
        })
    }
}

/// Output reference to one `ephemeral_storage` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionEphemeralStorageOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionEphemeralStorageOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionEphemeralStorage> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionEphemeralStorage>) {
        self.inner.set_internal_value(value);
    }

    pub fn size_in_gib(&self) -> Reference {
        self.inner.reference("size_in_gib")
    }

    pub fn size_in_gib_input(&self) -> Option<Input<f64>> {
        self.inner.input("size_in_gib")
    }

    pub fn set_size_in_gib(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("size_in_gib", value);
    }
}

/// `inference_accelerator` block of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionInferenceAccelerator {
    pub device_name: Input<String>,
    pub device_type: Input<String>,
}

impl EcsTaskDefinitionInferenceAccelerator {
    pub fn builder() -> EcsTaskDefinitionInferenceAcceleratorBuilder {
        EcsTaskDefinitionInferenceAcceleratorBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionInferenceAccelerator`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionInferenceAcceleratorBuilder {
    device_name: Option<Input<String>>,
    device_type: Option<Input<String>>,
}

impl EcsTaskDefinitionInferenceAcceleratorBuilder {
    pub fn device_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.device_name = Some(value.into());
        self
    }

    pub fn device_type(mut self, value: impl Into<Input<String>>) -> Self {
        self.device_type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionInferenceAccelerator, ConfigError> {
        Ok(EcsTaskDefinitionInferenceAccelerator {
            device_name: self.device_name.ok_or_else(|| ConfigError::missing("device_name"))?,
            device_type: self.device_type.ok_or_else(|| ConfigError::missing("device_type"))?,
        })
    }
}

impl Block for EcsTaskDefinitionInferenceAccelerator {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("device_name", &self.device_name);
        fields.put("device_type", &self.device_type);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            device_name: fields.required("device_name")?,
            device_type: fields.required("device_type")?,
        })
    }
}

/// Output reference to one `inference_accelerator` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionInferenceAcceleratorOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionInferenceAcceleratorOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionInferenceAccelerator> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionInferenceAccelerator>) {
        self.inner.set_internal_value(value);
    }

    pub fn device_name(&self) -> Reference {
        self.inner.reference("device_name")
    }

    pub fn device_name_input(&self) -> Option<Input<String>> {
        self.inner.input("device_name")
    }

    pub fn set_device_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("device_name", value);
    }

    pub fn device_type(&self) -> Reference {
        self.inner.reference("device_type")
    }

    pub fn device_type_input(&self) -> Option<Input<String>> {
        self.inner.input("device_type")
    }

    pub fn set_device_type(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("device_type", value);
    }
}

/// Instances of the `inference_accelerator` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionInferenceAcceleratorList {
    inner: ListRef,
}

impl EcsTaskDefinitionInferenceAcceleratorList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsTaskDefinitionInferenceAcceleratorOutputReference {
        EcsTaskDefinitionInferenceAcceleratorOutputReference::new(self.inner.get(index))
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

/// `placement_constraints` block of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionPlacementConstraints {
    pub expression: Option<Input<String>>,
    pub r#type: Input<String>,
}

impl EcsTaskDefinitionPlacementConstraints {
    pub fn builder() -> EcsTaskDefinitionPlacementConstraintsBuilder {
        EcsTaskDefinitionPlacementConstraintsBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionPlacementConstraints`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionPlacementConstraintsBuilder {
    expression: Option<Input<String>>,
    r#type: Option<Input<String>>,
}

impl EcsTaskDefinitionPlacementConstraintsBuilder {
    pub fn expression(mut self, value: impl Into<Input<String>>) -> Self {
        self.expression = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<Input<String>>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionPlacementConstraints, ConfigError> {
        Ok(EcsTaskDefinitionPlacementConstraints {
            expression: self.expression,
            r#type: self.r#type.ok_or_else(|| ConfigError::missing("type"))?,
        })
    }
}

impl Block for EcsTaskDefinitionPlacementConstraints {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("expression", &self.expression);
        fields.put("type", &self.r#type);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            expression: fields.optional("expression")?,
            r#type: fields.required("type")?,
        })
    }
}

/// Output reference to one `placement_constraints` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionPlacementConstraintsOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionPlacementConstraintsOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionPlacementConstraints> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionPlacementConstraints>) {
        self.inner.set_internal_value(value);
    }

    pub fn expression(&self) -> Reference {
        self.inner.reference("expression")
    }

    pub fn expression_input(&self) -> Option<Input<String>> {
        self.inner.input("expression")
    }

    pub fn set_expression(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("expression", value);
    }

    pub fn reset_expression(&self) {
        self.inner.reset("expression");
    }

    pub fn r#type(&self) -> Reference {
        self.inner.reference("type")
    }

    pub fn type_input(&self) -> Option<Input<String>> {
        self.inner.input("type")
    }

    pub fn set_type(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("type", value);
    }
}

/// Instances of the `placement_constraints` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionPlacementConstraintsList {
    inner: ListRef,
}

impl EcsTaskDefinitionPlacementConstraintsList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsTaskDefinitionPlacementConstraintsOutputReference {
        EcsTaskDefinitionPlacementConstraintsOutputReference::new(self.inner.get(index))
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

/// `proxy_configuration` block of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionProxyConfiguration {
    pub container_name: Input<String>,
    pub properties: Option<Input<BTreeMap<String, String>>>,
    pub r#type: Option<Input<String>>,
}

impl EcsTaskDefinitionProxyConfiguration {
    pub fn builder() -> EcsTaskDefinitionProxyConfigurationBuilder {
        EcsTaskDefinitionProxyConfigurationBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionProxyConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionProxyConfigurationBuilder {
    container_name: Option<Input<String>>,
    properties: Option<Input<BTreeMap<String, String>>>,
    r#type: Option<Input<String>>,
}

impl EcsTaskDefinitionProxyConfigurationBuilder {
    pub fn container_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.container_name = Some(value.into());
        self
    }

    pub fn properties(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.properties = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<Input<String>>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionProxyConfiguration, ConfigError> {
        Ok(EcsTaskDefinitionProxyConfiguration {
            container_name: self.container_name.ok_or_else(|| ConfigError::missing("container_name"))?,
            properties: self.properties,
            r#type: self.r#type,
        })
    }
}

impl Block for EcsTaskDefinitionProxyConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("container_name", &self.container_name);
        fields.put_opt("properties", &self.properties);
        fields.put_opt("type", &self.r#type);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            container_name: fields.required("container_name")?,
            properties: fields.optional("properties")?,
            r#type: fields.optional("type")?,
        })
    }
}

/// Output reference to one `proxy_configuration` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionProxyConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionProxyConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionProxyConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionProxyConfiguration>) {
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

    pub fn properties(&self) -> Reference {
        self.inner.reference("properties")
    }

    pub fn properties_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.inner.input("properties")
    }

    pub fn set_properties(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.inner.set("properties", value);
    }

    pub fn reset_properties(&self) {
        self.inner.reset("properties");
    }

    pub fn r#type(&self) -> Reference {
        self.inner.reference("type")
    }

    pub fn type_input(&self) -> Option<Input<String>> {
        self.inner.input("type")
    }

    pub fn set_type(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("type", value);
    }

    pub fn reset_type(&self) {
        self.inner.reset("type");
    }
}

/// `runtime_platform` block of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionRuntimePlatform {
    pub cpu_architecture: Option<Input<String>>,
    pub operating_system_family: Option<Input<String>>,
}

impl EcsTaskDefinitionRuntimePlatform {
    pub fn builder() -> EcsTaskDefinitionRuntimePlatformBuilder {
        EcsTaskDefinitionRuntimePlatformBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionRuntimePlatform`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionRuntimePlatformBuilder {
    cpu_architecture: Option<Input<String>>,
    operating_system_family: Option<Input<String>>,
}

impl EcsTaskDefinitionRuntimePlatformBuilder {
    pub fn cpu_architecture(mut self, value: impl Into<Input<String>>) -> Self {
        self.cpu_architecture = Some(value.into());
        self
    }

    pub fn operating_system_family(mut self, value: impl Into<Input<String>>) -> Self {
        self.operating_system_family = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionRuntimePlatform, ConfigError> {
        Ok(EcsTaskDefinitionRuntimePlatform {
            cpu_architecture: self.cpu_architecture,
            operating_system_family: self.operating_system_family,
        })
    }
}

impl Block for EcsTaskDefinitionRuntimePlatform {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("cpu_architecture", &self.cpu_architecture);
        fields.put_opt("operating_system_family", &self.operating_system_family);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            cpu_architecture: fields.optional("cpu_architecture")?,
            operating_system_family: fields.optional("operating_system_family")?,
        })
    }
}

/// Output reference to one `runtime_platform` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionRuntimePlatformOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionRuntimePlatformOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionRuntimePlatform> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionRuntimePlatform>) {
        self.inner.set_internal_value(value);
    }

    pub fn cpu_architecture(&self) -> Reference {
        self.inner.reference("cpu_architecture")
    }

    pub fn cpu_architecture_input(&self) -> Option<Input<String>> {
        self.inner.input("cpu_architecture")
    }

    pub fn set_cpu_architecture(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("cpu_architecture", value);
    }

    pub fn reset_cpu_architecture(&self) {
        self.inner.reset("cpu_architecture");
    }

    pub fn operating_system_family(&self) -> Reference {
        self.inner.reference("operating_system_family")
    }

    pub fn operating_system_family_input(&self) -> Option<Input<String>> {
        self.inner.input("operating_system_family")
    }

    pub fn set_operating_system_family(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("operating_system_family", value);
    }

    pub fn reset_operating_system_family(&self) {
        self.inner.reset("operating_system_family");
    }
}

/// `volume` block of [`EcsTaskDefinition`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionVolume {
    pub host_path: Option<Input<String>>,
    pub name: Input<String>,
    pub docker_volume_configuration: Option<EcsTaskDefinitionVolumeDockerVolumeConfiguration>,
    pub efs_volume_configuration: Option<EcsTaskDefinitionVolumeEfsVolumeConfiguration>,
    pub fsx_windows_file_server_volume_configuration: Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration>,
}

impl EcsTaskDefinitionVolume {
    pub fn builder() -> EcsTaskDefinitionVolumeBuilder {
        EcsTaskDefinitionVolumeBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionVolume`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionVolumeBuilder {
    host_path: Option<Input<String>>,
    name: Option<Input<String>>,
    docker_volume_configuration: Option<EcsTaskDefinitionVolumeDockerVolumeConfiguration>,
    efs_volume_configuration: Option<EcsTaskDefinitionVolumeEfsVolumeConfiguration>,
    fsx_windows_file_server_volume_configuration: Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration>,
}

impl EcsTaskDefinitionVolumeBuilder {
    pub fn host_path(mut self, value: impl Into<Input<String>>) -> Self {
        self.host_path = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<Input<String>>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn docker_volume_configuration(mut self, value: EcsTaskDefinitionVolumeDockerVolumeConfiguration) -> Self {
        self.docker_volume_configuration = Some(value);
        self
    }

    pub fn efs_volume_configuration(mut self, value: EcsTaskDefinitionVolumeEfsVolumeConfiguration) -> Self {
        self.efs_volume_configuration = Some(value);
        self
    }

    pub fn fsx_windows_file_server_volume_configuration(mut self, value: EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration) -> Self {
        self.fsx_windows_file_server_volume_configuration = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionVolume, ConfigError> {
        Ok(EcsTaskDefinitionVolume {
            host_path: self.host_path,
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            docker_volume_configuration: self.docker_volume_configuration,
            efs_volume_configuration: self.efs_volume_configuration,
            fsx_windows_file_server_volume_configuration: self.fsx_windows_file_server_volume_configuration,
        })
    }
}

impl Block for EcsTaskDefinitionVolume {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("host_path", &self.host_path);
        fields.put("name", &self.name);
        fields.put_block("docker_volume_configuration", self.docker_volume_configuration.as_ref());
        fields.put_block("efs_volume_configuration", self.efs_volume_configuration.as_ref());
        fields.put_block("fsx_windows_file_server_volume_configuration", self.fsx_windows_file_server_volume_configuration.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            host_path: fields.optional("host_path")?,
            name: fields.required("name")?,
            docker_volume_configuration: fields.block("docker_volume_configuration")?,
            efs_volume_configuration: fields.block("efs_volume_configuration")?,
            fsx_windows_file_server_volume_configuration: fields.block("fsx_windows_file_server_volume_configuration")?,
        })
    }
}

/// Output reference to one `volume` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionVolumeOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionVolume> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionVolume>) {
        self.inner.set_internal_value(value);
    }

    pub fn host_path(&self) -> Reference {
        self.inner.reference("host_path")
    }

    pub fn host_path_input(&self) -> Option<Input<String>> {
        self.inner.input("host_path")
    }

    pub fn set_host_path(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("host_path", value);
    }

    pub fn reset_host_path(&self) {
        self.inner.reset("host_path");
    }

    pub fn name(&self) -> Reference {
        self.inner.reference("name")
    }

    pub fn name_input(&self) -> Option<Input<String>> {
        self.inner.input("name")
    }

    pub fn set_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("name", value);
    }

    pub fn docker_volume_configuration(&self) -> EcsTaskDefinitionVolumeDockerVolumeConfigurationOutputReference {
        EcsTaskDefinitionVolumeDockerVolumeConfigurationOutputReference::new(self.inner.block("docker_volume_configuration", false))
    }

    pub fn put_docker_volume_configuration(&self, value: &EcsTaskDefinitionVolumeDockerVolumeConfiguration) {
        self.inner.put("docker_volume_configuration", value);
    }

    pub fn docker_volume_configuration_input(&self) -> Option<EcsTaskDefinitionVolumeDockerVolumeConfiguration> {
        self.inner.block_input("docker_volume_configuration")
    }

    pub fn reset_docker_volume_configuration(&self) {
        self.inner.reset("docker_volume_configuration");
    }

    pub fn efs_volume_configuration(&self) -> EcsTaskDefinitionVolumeEfsVolumeConfigurationOutputReference {
        EcsTaskDefinitionVolumeEfsVolumeConfigurationOutputReference::new(self.inner.block("efs_volume_configuration", false))
    }

    pub fn put_efs_volume_configuration(&self, value: &EcsTaskDefinitionVolumeEfsVolumeConfiguration) {
        self.inner.put("efs_volume_configuration", value);
    }

    pub fn efs_volume_configuration_input(&self) -> Option<EcsTaskDefinitionVolumeEfsVolumeConfiguration> {
        self.inner.block_input("efs_volume_configuration")
    }

    pub fn reset_efs_volume_configuration(&self) {
        self.inner.reset("efs_volume_configuration");
    }

    pub fn fsx_windows_file_server_volume_configuration(&self) -> EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationOutputReference {
        EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationOutputReference::new(self.inner.block("fsx_windows_file_server_volume_configuration", false))
    }

    pub fn put_fsx_windows_file_server_volume_configuration(&self, value: &EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration) {
        self.inner.put("fsx_windows_file_server_volume_configuration", value);
    }

    pub fn fsx_windows_file_server_volume_configuration_input(&self) -> Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration> {
        self.inner.block_input("fsx_windows_file_server_volume_configuration")
    }

    pub fn reset_fsx_windows_file_server_volume_configuration(&self) {
        self.inner.reset("fsx_windows_file_server_volume_configuration");
    }
}

/// Instances of the `volume` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeList {
    inner: ListRef,
}

impl EcsTaskDefinitionVolumeList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsTaskDefinitionVolumeOutputReference {
        EcsTaskDefinitionVolumeOutputReference::new(self.inner.get(index))
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

/// `docker_volume_configuration` block of [`EcsTaskDefinitionVolume`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionVolumeDockerVolumeConfiguration {
    pub autoprovision: Option<Input<bool>>,
    pub driver: Option<Input<String>>,
    pub driver_opts: Option<Input<BTreeMap<String, String>>>,
    pub labels: Option<Input<BTreeMap<String, String>>>,
    pub scope: Option<Input<String>>,
}

impl EcsTaskDefinitionVolumeDockerVolumeConfiguration {
    pub fn builder() -> EcsTaskDefinitionVolumeDockerVolumeConfigurationBuilder {
        EcsTaskDefinitionVolumeDockerVolumeConfigurationBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionVolumeDockerVolumeConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionVolumeDockerVolumeConfigurationBuilder {
    autoprovision: Option<Input<bool>>,
    driver: Option<Input<String>>,
    driver_opts: Option<Input<BTreeMap<String, String>>>,
    labels: Option<Input<BTreeMap<String, String>>>,
    scope: Option<Input<String>>,
}

impl EcsTaskDefinitionVolumeDockerVolumeConfigurationBuilder {
    pub fn autoprovision(mut self, value: impl Into<Input<bool>>) -> Self {
        self.autoprovision = Some(value.into());
        self
    }

    pub fn driver(mut self, value: impl Into<Input<String>>) -> Self {
        self.driver = Some(value.into());
        self
    }

    pub fn driver_opts(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.driver_opts = Some(value.into());
        self
    }

    pub fn labels(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.labels = Some(value.into());
        self
    }

    pub fn scope(mut self, value: impl Into<Input<String>>) -> Self {
        self.scope = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionVolumeDockerVolumeConfiguration, ConfigError> {
        Ok(EcsTaskDefinitionVolumeDockerVolumeConfiguration {
            autoprovision: self.autoprovision,
            driver: self.driver,
            driver_opts: self.driver_opts,
            labels: self.labels,
            scope: self.scope,
        })
    }
}

impl Block for EcsTaskDefinitionVolumeDockerVolumeConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("autoprovision", &self.autoprovision);
        fields.put_opt("driver", &self.driver);
        fields.put_opt("driver_opts", &self.driver_opts);
        fields.put_opt("labels", &self.labels);
        fields.put_opt("scope", &self.scope);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            autoprovision: fields.optional("autoprovision")?,
            driver: fields.optional("driver")?,
            driver_opts: fields.optional("driver_opts")?,
            labels: fields.optional("labels")?,
            scope: fields.optional("scope")?,
        })
    }
}

/// Output reference to one `docker_volume_configuration` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeDockerVolumeConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionVolumeDockerVolumeConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionVolumeDockerVolumeConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionVolumeDockerVolumeConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn autoprovision(&self) -> Reference {
        self.inner.reference("autoprovision")
    }

    pub fn autoprovision_input(&self) -> Option<Input<bool>> {
        self.inner.input("autoprovision")
    }

    pub fn set_autoprovision(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("autoprovision", value);
    }

    pub fn reset_autoprovision(&self) {
        self.inner.reset("autoprovision");
    }

    pub fn driver(&self) -> Reference {
        self.inner.reference("driver")
    }

    pub fn driver_input(&self) -> Option<Input<String>> {
        self.inner.input("driver")
    }

    pub fn set_driver(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("driver", value);
    }

    pub fn reset_driver(&self) {
        self.inner.reset("driver");
    }

    pub fn driver_opts(&self) -> Reference {
        self.inner.reference("driver_opts")
    }

    pub fn driver_opts_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.inner.input("driver_opts")
    }

    pub fn set_driver_opts(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.inner.set("driver_opts", value);
    }

    pub fn reset_driver_opts(&self) {
        self.inner.reset("driver_opts");
    }

    pub fn labels(&self) -> Reference {
        self.inner.reference("labels")
    }

    pub fn labels_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.inner.input("labels")
    }

    pub fn set_labels(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.inner.set("labels", value);
    }

    pub fn reset_labels(&self) {
        self.inner.reset("labels");
    }

    pub fn scope(&self) -> Reference {
        self.inner.reference("scope")
    }

    pub fn scope_input(&self) -> Option<Input<String>> {
        self.inner.input("scope")
    }

    pub fn set_scope(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("scope", value);
    }

    pub fn reset_scope(&self) {
        self.inner.reset("scope");
    }
}

/// `efs_volume_configuration` block of [`EcsTaskDefinitionVolume`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionVolumeEfsVolumeConfiguration {
    pub file_system_id: Input<String>,
    pub root_directory: Option<Input<String>>,
    pub transit_encryption: Option<Input<String>>,
    pub transit_encryption_port: Option<Input<f64>>,
    pub authorization_config: Option<EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig>,
}

impl EcsTaskDefinitionVolumeEfsVolumeConfiguration {
    pub fn builder() -> EcsTaskDefinitionVolumeEfsVolumeConfigurationBuilder {
        EcsTaskDefinitionVolumeEfsVolumeConfigurationBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionVolumeEfsVolumeConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionVolumeEfsVolumeConfigurationBuilder {
    file_system_id: Option<Input<String>>,
    root_directory: Option<Input<String>>,
    transit_encryption: Option<Input<String>>,
    transit_encryption_port: Option<Input<f64>>,
    authorization_config: Option<EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig>,
}

impl EcsTaskDefinitionVolumeEfsVolumeConfigurationBuilder {
    pub fn file_system_id(mut self, value: impl Into<Input<String>>) -> Self {
        self.file_system_id = Some(value.into());
        self
    }

    pub fn root_directory(mut self, value: impl Into<Input<String>>) -> Self {
        self.root_directory = Some(value.into());
        self
    }

    pub fn transit_encryption(mut self, value: impl Into<Input<String>>) -> Self {
        self.transit_encryption = Some(value.into());
        self
    }

    pub fn transit_encryption_port(mut self, value: impl Into<Input<f64>>) -> Self {
        self.transit_encryption_port = Some(value.into());
        self
    }

    pub fn authorization_config(mut self, value: EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig) -> Self {
        self.authorization_config = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionVolumeEfsVolumeConfiguration, ConfigError> {
        Ok(EcsTaskDefinitionVolumeEfsVolumeConfiguration {
            file_system_id: self.file_system_id.ok_or_else(|| ConfigError::missing("file_system_id"))?,
            root_directory: self.root_directory,
            transit_encryption: self.transit_encryption,
            transit_encryption_port: self.transit_encryption_port,
            authorization_config: self.authorization_config,
        })
    }
}

impl Block for EcsTaskDefinitionVolumeEfsVolumeConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("file_system_id", &self.file_system_id);
        fields.put_opt("root_directory", &self.root_directory);
        fields.put_opt("transit_encryption", &self.transit_encryption);
        fields.put_opt("transit_encryption_port", &self.transit_encryption_port);
        fields.put_block("authorization_config", self.authorization_config.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            file_system_id: fields.required("file_system_id")?,
            root_directory: fields.optional("root_directory")?,
            transit_encryption: fields.optional("transit_encryption")?,
            transit_encryption_port: fields.optional("transit_encryption_port")?,
            authorization_config: fields.block("authorization_config")?,
        })
    }
}

/// Output reference to one `efs_volume_configuration` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeEfsVolumeConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionVolumeEfsVolumeConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionVolumeEfsVolumeConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionVolumeEfsVolumeConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn file_system_id(&self) -> Reference {
        self.inner.reference("file_system_id")
    }

    pub fn file_system_id_input(&self) -> Option<Input<String>> {
        self.inner.input("file_system_id")
    }

    pub fn set_file_system_id(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("file_system_id", value);
    }

    pub fn root_directory(&self) -> Reference {
        self.inner.reference("root_directory")
    }

    pub fn root_directory_input(&self) -> Option<Input<String>> {
        self.inner.input("root_directory")
    }

    pub fn set_root_directory(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("root_directory", value);
    }

    pub fn reset_root_directory(&self) {
        self.inner.reset("root_directory");
    }

    pub fn transit_encryption(&self) -> Reference {
        self.inner.reference("transit_encryption")
    }

    pub fn transit_encryption_input(&self) -> Option<Input<String>> {
        self.inner.input("transit_encryption")
    }

    pub fn set_transit_encryption(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("transit_encryption", value);
    }

    pub fn reset_transit_encryption(&self) {
        self.inner.reset("transit_encryption");
    }

    pub fn transit_encryption_port(&self) -> Reference {
        self.inner.reference("transit_encryption_port")
    }

    pub fn transit_encryption_port_input(&self) -> Option<Input<f64>> {
        self.inner.input("transit_encryption_port")
    }

    pub fn set_transit_encryption_port(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("transit_encryption_port", value);
    }

    pub fn reset_transit_encryption_port(&self) {
        self.inner.reset("transit_encryption_port");
    }

    pub fn authorization_config(&self) -> EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigOutputReference {
        EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigOutputReference::new(self.inner.block("authorization_config", false))
    }

    pub fn put_authorization_config(&self, value: &EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig) {
        self.inner.put("authorization_config", value);
    }

    pub fn authorization_config_input(&self) -> Option<EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig> {
        self.inner.block_input("authorization_config")
    }

    pub fn reset_authorization_config(&self) {
        self.inner.reset("authorization_config");
    }
}

/// `authorization_config` block of [`EcsTaskDefinitionVolumeEfsVolumeConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig {
    pub access_point_id: Option<Input<String>>,
    pub iam: Option<Input<String>>,
}

impl EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig {
    pub fn builder() -> EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigBuilder {
        EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigBuilder {
    access_point_id: Option<Input<String>>,
    iam: Option<Input<String>>,
}

impl EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigBuilder {
    pub fn access_point_id(mut self, value: impl Into<Input<String>>) -> Self {
        self.access_point_id = Some(value.into());
        self
    }

    pub fn iam(mut self, value: impl Into<Input<String>>) -> Self {
        self.iam = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig, ConfigError> {
        Ok(EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig {
            access_point_id: self.access_point_id,
            iam: self.iam,
        })
    }
}

impl Block for EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("access_point_id", &self.access_point_id);
        fields.put_opt("iam", &self.iam);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            access_point_id: fields.optional("access_point_id")?,
            iam: fields.optional("iam")?,
        })
    }
}

/// Output reference to one `authorization_config` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfigOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionVolumeEfsVolumeConfigurationAuthorizationConfig>) {
        self.inner.set_internal_value(value);
    }

    pub fn access_point_id(&self) -> Reference {
        self.inner.reference("access_point_id")
    }

    pub fn access_point_id_input(&self) -> Option<Input<String>> {
        self.inner.input("access_point_id")
    }

    pub fn set_access_point_id(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("access_point_id", value);
    }

    pub fn reset_access_point_id(&self) {
        self.inner.reset("access_point_id");
    }

    pub fn iam(&self) -> Reference {
        self.inner.reference("iam")
    }

    pub fn iam_input(&self) -> Option<Input<String>> {
        self.inner.input("iam")
    }

    pub fn set_iam(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("iam", value);
    }

    pub fn reset_iam(&self) {
        self.inner.reset("iam");
    }
}

/// `fsx_windows_file_server_volume_configuration` block of [`EcsTaskDefinitionVolume`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration {
    pub file_system_id: Input<String>,
    pub root_directory: Input<String>,
    pub authorization_config: EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig,
}

impl EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration {
    pub fn builder() -> EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationBuilder {
        EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationBuilder {
    file_system_id: Option<Input<String>>,
    root_directory: Option<Input<String>>,
    authorization_config: Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig>,
}

impl EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationBuilder {
    pub fn file_system_id(mut self, value: impl Into<Input<String>>) -> Self {
        self.file_system_id = Some(value.into());
        self
    }

    pub fn root_directory(mut self, value: impl Into<Input<String>>) -> Self {
        self.root_directory = Some(value.into());
        self
    }

    pub fn authorization_config(mut self, value: EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig) -> Self {
        self.authorization_config = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration, ConfigError> {
        Ok(EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration {
            file_system_id: self.file_system_id.ok_or_else(|| ConfigError::missing("file_system_id"))?,
            root_directory: self.root_directory.ok_or_else(|| ConfigError::missing("root_directory"))?,
            authorization_config: self.authorization_config.ok_or_else(|| ConfigError::missing("authorization_config"))?,
        })
    }
}

impl Block for EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("file_system_id", &self.file_system_id);
        fields.put("root_directory", &self.root_directory);
        fields.put_block("authorization_config", Some(&self.authorization_config));
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            file_system_id: fields.required("file_system_id")?,
            root_directory: fields.required("root_directory")?,
            authorization_config: fields.required_block("authorization_config")?,
        })
    }
}

/// Output reference to one `fsx_windows_file_server_volume_configuration` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn file_system_id(&self) -> Reference {
        self.inner.reference("file_system_id")
    }

    pub fn file_system_id_input(&self) -> Option<Input<String>> {
        self.inner.input("file_system_id")
    }

    pub fn set_file_system_id(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("file_system_id", value);
    }

    pub fn root_directory(&self) -> Reference {
        self.inner.reference("root_directory")
    }

    pub fn root_directory_input(&self) -> Option<Input<String>> {
        self.inner.input("root_directory")
    }

    pub fn set_root_directory(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("root_directory", value);
    }

    pub fn authorization_config(&self) -> EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigOutputReference {
        EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigOutputReference::new(self.inner.block("authorization_config", false))
    }

    pub fn put_authorization_config(&self, value: &EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig) {
        self.inner.put("authorization_config", value);
    }

    pub fn authorization_config_input(&self) -> Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig> {
        self.inner.block_input("authorization_config")
    }
}

/// `authorization_config` block of [`EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig {
    pub credentials_parameter: Input<String>,
    pub domain: Input<String>,
}

impl EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig {
    pub fn builder() -> EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigBuilder {
        EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigBuilder::default()
    }
}

/// Builder for [`EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigBuilder {
    credentials_parameter: Option<Input<String>>,
    domain: Option<Input<String>>,
}

impl EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigBuilder {
    pub fn credentials_parameter(mut self, value: impl Into<Input<String>>) -> Self {
        self.credentials_parameter = Some(value.into());
        self
    }

    pub fn domain(mut self, value: impl Into<Input<String>>) -> Self {
        self.domain = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig, ConfigError> {
        Ok(EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig {
            credentials_parameter: self.credentials_parameter.ok_or_else(|| ConfigError::missing("credentials_parameter"))?,
            domain: self.domain.ok_or_else(|| ConfigError::missing("domain"))?,
        })
    }
}

impl Block for EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("credentials_parameter", &self.credentials_parameter);
        fields.put("domain", &self.domain);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            credentials_parameter: fields.required("credentials_parameter")?,
            domain: fields.required("domain")?,
        })
    }
}

/// Output reference to one `authorization_config` block
#[derive(Debug, Clone)]
pub struct EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigOutputReference {
    inner: BlockRef,
}

impl EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfigOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfigurationAuthorizationConfig>) {
        self.inner.set_internal_value(value);
    }

    pub fn credentials_parameter(&self) -> Reference {
        self.inner.reference("credentials_parameter")
    }

    pub fn credentials_parameter_input(&self) -> Option<Input<String>> {
        self.inner.input("credentials_parameter")
    }

    pub fn set_credentials_parameter(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("credentials_parameter", value);
    }

    pub fn domain(&self) -> Reference {
        self.inner.reference("domain")
    }

    pub fn domain_input(&self) -> Option<Input<String>> {
        self.inner.input("domain")
    }

    pub fn set_domain(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("domain", value);
    }
}
