//! `aws_ecs_cluster` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::collections::BTreeMap;
use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    ListRef, MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema,
    Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_cluster`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_cluster")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("capacity_providers", AttributeType::Set(Box::new(AttributeType::String))).computed().deprecated())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String))).computed())
            .block(
                BlockSchema::new("configuration", NestingMode::List)
                    .max_items(1)
                    .block(
                        BlockSchema::new("execute_command_configuration", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("kms_key_id", AttributeType::String))
                            .attribute(AttributeSchema::new("logging", AttributeType::String))
                            .block(
                                BlockSchema::new("log_configuration", NestingMode::List)
                                    .max_items(1)
                                    .attribute(AttributeSchema::new("cloud_watch_encryption_enabled", AttributeType::Bool))
                                    .attribute(AttributeSchema::new("cloud_watch_log_group_name", AttributeType::String))
                                    .attribute(AttributeSchema::new("s3_bucket_encryption_enabled", AttributeType::Bool))
                                    .attribute(AttributeSchema::new("s3_bucket_name", AttributeType::String))
                                    .attribute(AttributeSchema::new("s3_key_prefix", AttributeType::String)),
                            ),
                    ),
            )
            .block(
                BlockSchema::new("default_capacity_provider_strategy", NestingMode::Set)
                    .deprecated()
                    .attribute(AttributeSchema::new("base", AttributeType::Number))
                    .attribute(AttributeSchema::new("capacity_provider", AttributeType::String).required())
                    .attribute(AttributeSchema::new("weight", AttributeType::Number)),
            )
            .block(
                BlockSchema::new("service_connect_defaults", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("namespace", AttributeType::String).required()),
            )
            .block(
                BlockSchema::new("setting", NestingMode::Set)
                    .attribute(AttributeSchema::new("name", AttributeType::String).required())
                    .attribute(AttributeSchema::new("value", AttributeType::String).required()),
            )
    })
}

/// Arguments of [`EcsCluster`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterConfig {
    pub capacity_providers: Option<Input<Vec<String>>>,
    pub id: Option<Input<String>>,
    pub name: Input<String>,
    pub tags: Option<Input<BTreeMap<String, String>>>,
    pub tags_all: Option<Input<BTreeMap<String, String>>>,
    pub configuration: Option<EcsClusterConfiguration>,
    pub default_capacity_provider_strategy: Vec<EcsClusterDefaultCapacityProviderStrategy>,
    pub service_connect_defaults: Option<EcsClusterServiceConnectDefaults>,
    pub setting: Vec<EcsClusterSetting>,
    pub meta: MetaArguments,
}

impl EcsClusterConfig {
    pub fn builder() -> EcsClusterConfigBuilder {
        EcsClusterConfigBuilder::default()
    }
}

/// Builder for [`EcsClusterConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterConfigBuilder {
    capacity_providers: Option<Input<Vec<String>>>,
    id: Option<Input<String>>,
    name: Option<Input<String>>,
    tags: Option<Input<BTreeMap<String, String>>>,
    tags_all: Option<Input<BTreeMap<String, String>>>,
    configuration: Option<EcsClusterConfiguration>,
    default_capacity_provider_strategy: Vec<EcsClusterDefaultCapacityProviderStrategy>,
    service_connect_defaults: Option<EcsClusterServiceConnectDefaults>,
    setting: Vec<EcsClusterSetting>,
    meta: MetaArguments,
}

impl EcsClusterConfigBuilder {
    pub fn capacity_providers(mut self, value: impl Into<Input<Vec<String>>>) -> Self {
        self.capacity_providers = Some(value.into());
        self
    }

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

    pub fn configuration(mut self, value: EcsClusterConfiguration) -> Self {
        self.configuration = Some(value);
        self
    }

    pub fn default_capacity_provider_strategy(mut self, value: impl IntoIterator<Item = EcsClusterDefaultCapacityProviderStrategy>) -> Self {
        self.default_capacity_provider_strategy = value.into_iter().collect();
        self
    }

    pub fn service_connect_defaults(mut self, value: EcsClusterServiceConnectDefaults) -> Self {
        self.service_connect_defaults = Some(value);
        self
    }

    pub fn setting(mut self, value: impl IntoIterator<Item = EcsClusterSetting>) -> Self {
        self.setting = value.into_iter().collect();
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsClusterConfig, ConfigError> {
        Ok(EcsClusterConfig {
            capacity_providers: self.capacity_providers,
            id: self.id,
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            tags: self.tags,
            tags_all: self.tags_all,
            configuration: self.configuration,
            default_capacity_provider_strategy: self.default_capacity_provider_strategy,
            service_connect_defaults: self.service_connect_defaults,
            setting: self.setting,
            meta: self.meta,
        })
    }
}

impl Block for EcsClusterConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("capacity_providers", &self.capacity_providers);
        fields.put_opt("id", &self.id);
        fields.put("name", &self.name);
        fields.put_opt("tags", &self.tags);
        fields.put_opt("tags_all", &self.tags_all);
        fields.put_block("configuration", self.configuration.as_ref());
        fields.put_blocks("default_capacity_provider_strategy", &self.default_capacity_provider_strategy);
        fields.put_block("service_connect_defaults", self.service_connect_defaults.as_ref());
        fields.put_blocks("setting", &self.setting);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            capacity_providers: fields.optional("capacity_providers")?,
            id: fields.optional("id")?,
            name: fields.required("name")?,
            tags: fields.optional("tags")?,
            tags_all: fields.optional("tags_all")?,
            configuration: fields.block("configuration")?,
            default_capacity_provider_strategy: fields.blocks("default_capacity_provider_strategy")?,
            service_connect_defaults: fields.block("service_connect_defaults")?,
            setting: fields.blocks("setting")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_cluster` resource
#[derive(Debug, Clone)]
pub struct EcsCluster {
    element: ResourceHandle,
}

impl EcsCluster {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_cluster";

    /// Register a new `aws_ecs_cluster` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsClusterConfig) -> Result<Self, StackError> {
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

    pub fn configuration(&self) -> EcsClusterConfigurationOutputReference {
        EcsClusterConfigurationOutputReference::new(self.root().block("configuration", false))
    }

    pub fn put_configuration(&self, value: &EcsClusterConfiguration) {
        self.root().put("configuration", value);
    }

    pub fn configuration_input(&self) -> Option<EcsClusterConfiguration> {
        self.root().block_input("configuration")
    }

    pub fn reset_configuration(&self) {
        self.root().reset("configuration");
    }

    pub fn default_capacity_provider_strategy(&self) -> EcsClusterDefaultCapacityProviderStrategyList {
        EcsClusterDefaultCapacityProviderStrategyList::new(self.root().list("default_capacity_provider_strategy", true))
    }

    pub fn put_default_capacity_provider_strategy(&self, value: &[EcsClusterDefaultCapacityProviderStrategy]) {
        self.root().put_all("default_capacity_provider_strategy", value);
    }

    pub fn default_capacity_provider_strategy_input(&self) -> Option<Vec<EcsClusterDefaultCapacityProviderStrategy>> {
        self.root().blocks_input("default_capacity_provider_strategy")
    }

    pub fn reset_default_capacity_provider_strategy(&self) {
        self.root().reset("default_capacity_provider_strategy");
    }

    pub fn service_connect_defaults(&self) -> EcsClusterServiceConnectDefaultsOutputReference {
        EcsClusterServiceConnectDefaultsOutputReference::new(self.root().block("service_connect_defaults", false))
    }

    pub fn put_service_connect_defaults(&self, value: &EcsClusterServiceConnectDefaults) {
        self.root().put("service_connect_defaults", value);
    }

    pub fn service_connect_defaults_input(&self) -> Option<EcsClusterServiceConnectDefaults> {
        self.root().block_input("service_connect_defaults")
    }

    pub fn reset_service_connect_defaults(&self) {
        self.root().reset("service_connect_defaults");
    }

    pub fn setting(&self) -> EcsClusterSettingList {
        EcsClusterSettingList::new(self.root().list("setting", true))
    }

    pub fn put_setting(&self, value: &[EcsClusterSetting]) {
        self.root().put_all("setting", value);
    }

    pub fn setting_input(&self) -> Option<Vec<EcsClusterSetting>> {
        self.root().blocks_input("setting")
    }

    pub fn reset_setting(&self) {
        self.root().reset("setting");
    }
}

impl TerraformElement for EcsCluster {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// `configuration` block of [`EcsCluster`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterConfiguration {
    pub execute_command_configuration: Option<EcsClusterConfigurationExecuteCommandConfiguration>,
}

impl EcsClusterConfiguration {
    pub fn builder() -> EcsClusterConfigurationBuilder {
        EcsClusterConfigurationBuilder::default()
    }
}

/// Builder for [`EcsClusterConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterConfigurationBuilder {
    execute_command_configuration: Option<EcsClusterConfigurationExecuteCommandConfiguration>,
}

impl EcsClusterConfigurationBuilder {
    pub fn execute_command_configuration(mut self, value: EcsClusterConfigurationExecuteCommandConfiguration) -> Self {
        self.execute_command_configuration = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsClusterConfiguration, ConfigError> {
        Ok(EcsClusterConfiguration {
            execute_command_configuration: self.execute_command_configuration,
        })
    }
}

impl Block for EcsClusterConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_block("execute_command_configuration", self.execute_command_configuration.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            execute_command_configuration: fields.block("execute_command_configuration")?,
        })
    }
}

/// Output reference to one `configuration` block
#[derive(Debug, Clone)]
pub struct EcsClusterConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsClusterConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn execute_command_configuration(&self) -> EcsClusterConfigurationExecuteCommandConfigurationOutputReference {
        EcsClusterConfigurationExecuteCommandConfigurationOutputReference::new(self.inner.block("execute_command_configuration", false))
    }

    pub fn put_execute_command_configuration(&self, value: &EcsClusterConfigurationExecuteCommandConfiguration) {
        self.inner.put("execute_command_configuration", value);
    }

    pub fn execute_command_configuration_input(&self) -> Option<EcsClusterConfigurationExecuteCommandConfiguration> {
        self.inner.block_input("execute_command_configuration")
    }

    pub fn reset_execute_command_configuration(&self) {
        self.inner.reset("execute_command_configuration");
    }
}

/// `execute_command_configuration` block of [`EcsClusterConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterConfigurationExecuteCommandConfiguration {
    pub kms_key_id: Option<Input<String>>,
    pub logging: Option<Input<String>>,
    pub log_configuration: Option<EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration>,
}

impl EcsClusterConfigurationExecuteCommandConfiguration {
    pub fn builder() -> EcsClusterConfigurationExecuteCommandConfigurationBuilder {
        EcsClusterConfigurationExecuteCommandConfigurationBuilder::default()
    }
}

/// Builder for [`EcsClusterConfigurationExecuteCommandConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterConfigurationExecuteCommandConfigurationBuilder {
    kms_key_id: Option<Input<String>>,
    logging: Option<Input<String>>,
    log_configuration: Option<EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration>,
}

impl EcsClusterConfigurationExecuteCommandConfigurationBuilder {
    pub fn kms_key_id(mut self, value: impl Into<Input<String>>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    pub fn logging(mut self, value: impl Into<Input<String>>) -> Self {
        self.logging = Some(value.into());
        self
    }

    pub fn log_configuration(mut self, value: EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration) -> Self {
        self.log_configuration = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsClusterConfigurationExecuteCommandConfiguration, ConfigError> {
        Ok(EcsClusterConfigurationExecuteCommandConfiguration {
            kms_key_id: self.kms_key_id,
            logging: self.logging,
            log_configuration: self.log_configuration,
        })
    }
}

impl Block for EcsClusterConfigurationExecuteCommandConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("kms_key_id", &self.kms_key_id);
        fields.put_opt("logging", &self.logging);
        fields.put_block("log_configuration", self.log_configuration.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            kms_key_id: fields.optional("kms_key_id")?,
            logging: fields.optional("logging")?,
            log_configuration: fields.block("log_configuration")?,
        })
    }
}

/// Output reference to one `execute_command_configuration` block
#[derive(Debug, Clone)]
pub struct EcsClusterConfigurationExecuteCommandConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsClusterConfigurationExecuteCommandConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterConfigurationExecuteCommandConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterConfigurationExecuteCommandConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn kms_key_id(&self) -> Reference {
        self.inner.reference("kms_key_id")
    }

    pub fn kms_key_id_input(&self) -> Option<Input<String>> {
        self.inner.input("kms_key_id")
    }

    pub fn set_kms_key_id(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("kms_key_id", value);
    }

    pub fn reset_kms_key_id(&self) {
        self.inner.reset("kms_key_id");
    }

    pub fn logging(&self) -> Reference {
        self.inner.reference("logging")
    }

    pub fn logging_input(&self) -> Option<Input<String>> {
        self.inner.input("logging")
    }

    pub fn set_logging(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("logging", value);
    }

    pub fn reset_logging(&self) {
        self.inner.reset("logging");
    }

    pub fn log_configuration(&self) -> EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationOutputReference {
        EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationOutputReference::new(self.inner.block("log_configuration", false))
    }

    pub fn put_log_configuration(&self, value: &EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration) {
        self.inner.put("log_configuration", value);
    }

    pub fn log_configuration_input(&self) -> Option<EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration> {
        self.inner.block_input("log_configuration")
    }

    pub fn reset_log_configuration(&self) {
        self.inner.reset("log_configuration");
    }
}

/// `log_configuration` block of [`EcsClusterConfigurationExecuteCommandConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration {
    pub cloud_watch_encryption_enabled: Option<Input<bool>>,
    pub cloud_watch_log_group_name: Option<Input<String>>,
    pub s3_bucket_encryption_enabled: Option<Input<bool>>,
    pub s3_bucket_name: Option<Input<String>>,
    pub s3_key_prefix: Option<Input<String>>,
}

impl EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration {
    pub fn builder() -> EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationBuilder {
        EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationBuilder::default()
    }
}

/// Builder for [`EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationBuilder {
    cloud_watch_encryption_enabled: Option<Input<bool>>,
    cloud_watch_log_group_name: Option<Input<String>>,
    s3_bucket_encryption_enabled: Option<Input<bool>>,
    s3_bucket_name: Option<Input<String>>,
    s3_key_prefix: Option<Input<String>>,
}

impl EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationBuilder {
    pub fn cloud_watch_encryption_enabled(mut self, value: impl Into<Input<bool>>) -> Self {
        self.cloud_watch_encryption_enabled = Some(value.into());
        self
    }

    pub fn cloud_watch_log_group_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.cloud_watch_log_group_name = Some(value.into());
        self
    }

    pub fn s3_bucket_encryption_enabled(mut self, value: impl Into<Input<bool>>) -> Self {
        self.s3_bucket_encryption_enabled = Some(value.into());
        self
    }

    pub fn s3_bucket_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.s3_bucket_name = Some(value.into());
        self
    }

    pub fn s3_key_prefix(mut self, value: impl Into<Input<String>>) -> Self {
        self.s3_key_prefix = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration, ConfigError> {
        Ok(EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration {
            cloud_watch_encryption_enabled: self.cloud_watch_encryption_enabled,
            cloud_watch_log_group_name: self.cloud_watch_log_group_name,
            s3_bucket_encryption_enabled: self.s3_bucket_encryption_enabled,
            s3_bucket_name: self.s3_bucket_name,
            s3_key_prefix: self.s3_key_prefix,
        })
    }
}

impl Block for EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("cloud_watch_encryption_enabled", &self.cloud_watch_encryption_enabled);
        fields.put_opt("cloud_watch_log_group_name", &self.cloud_watch_log_group_name);
        fields.put_opt("s3_bucket_encryption_enabled", &self.s3_bucket_encryption_enabled);
        fields.put_opt("s3_bucket_name", &self.s3_bucket_name);
        fields.put_opt("s3_key_prefix", &self.s3_key_prefix);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_watch_encryption_enabled: fields.optional("cloud_watch_encryption_enabled")?,
            cloud_watch_log_group_name: fields.optional("cloud_watch_log_group_name")?,
            s3_bucket_encryption_enabled: fields.optional("s3_bucket_encryption_enabled")?,
            s3_bucket_name: fields.optional("s3_bucket_name")?,
            s3_key_prefix: fields.optional("s3_key_prefix")?,
        })
    }
}

/// Output reference to one `log_configuration` block
#[derive(Debug, Clone)]
pub struct EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsClusterConfigurationExecuteCommandConfigurationLogConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterConfigurationExecuteCommandConfigurationLogConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn cloud_watch_encryption_enabled(&self) -> Reference {
        self.inner.reference("cloud_watch_encryption_enabled")
    }

    pub fn cloud_watch_encryption_enabled_input(&self) -> Option<Input<bool>> {
        self.inner.input("cloud_watch_encryption_enabled")
    }

    pub fn set_cloud_watch_encryption_enabled(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("cloud_watch_encryption_enabled", value);
    }

    pub fn reset_cloud_watch_encryption_enabled(&self) {
        self.inner.reset("cloud_watch_encryption_enabled");
    }

    pub fn cloud_watch_log_group_name(&self) -> Reference {
        self.inner.reference("cloud_watch_log_group_name")
    }

    pub fn cloud_watch_log_group_name_input(&self) -> Option<Input<String>> {
        self.inner.input("cloud_watch_log_group_name")
    }

    pub fn set_cloud_watch_log_group_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("cloud_watch_log_group_name", value);
    }

    pub fn reset_cloud_watch_log_group_name(&self) {
        self.inner.reset("cloud_watch_log_group_name");
    }

    pub fn s3_bucket_encryption_enabled(&self) -> Reference {
        self.inner.reference("s3_bucket_encryption_enabled")
    }

    pub fn s3_bucket_encryption_enabled_input(&self) -> Option<Input<bool>> {
        self.inner.input("s3_bucket_encryption_enabled")
    }

    pub fn set_s3_bucket_encryption_enabled(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("s3_bucket_encryption_enabled", value);
    }

    pub fn reset_s3_bucket_encryption_enabled(&self) {
        self.inner.reset("s3_bucket_encryption_enabled");
    }

    pub fn s3_bucket_name(&self) -> Reference {
        self.inner.reference("s3_bucket_name")
    }

    pub fn s3_bucket_name_input(&self) -> Option<Input<String>> {
        self.inner.input("s3_bucket_name")
    }

    pub fn set_s3_bucket_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("s3_bucket_name", value);
    }

    pub fn reset_s3_bucket_name(&self) {
        self.inner.reset("s3_bucket_name");
    }

    pub fn s3_key_prefix(&self) -> Reference {
        self.inner.reference("s3_key_prefix")
    }

    pub fn s3_key_prefix_input(&self) -> Option<Input<String>> {
        self.inner.input("s3_key_prefix")
    }

    pub fn set_s3_key_prefix(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("s3_key_prefix", value);
    }

    pub fn reset_s3_key_prefix(&self) {
        self.inner.reset("s3_key_prefix");
    }
}

/// `default_capacity_provider_strategy` block of [`EcsCluster`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterDefaultCapacityProviderStrategy {
    pub base: Option<Input<f64>>,
    pub capacity_provider: Input<String>,
    pub weight: Option<Input<f64>>,
}

impl EcsClusterDefaultCapacityProviderStrategy {
    pub fn builder() -> EcsClusterDefaultCapacityProviderStrategyBuilder {
        EcsClusterDefaultCapacityProviderStrategyBuilder::default()
    }
}

/// Builder for [`EcsClusterDefaultCapacityProviderStrategy`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterDefaultCapacityProviderStrategyBuilder {
    base: Option<Input<f64>>,
    capacity_provider: Option<Input<String>>,
    weight: Option<Input<f64>>,
}

impl EcsClusterDefaultCapacityProviderStrategyBuilder {
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

    pub fn build(self) -> Result<EcsClusterDefaultCapacityProviderStrategy, ConfigError> {
        Ok(EcsClusterDefaultCapacityProviderStrategy {
            base: self.base,
            capacity_provider: self.capacity_provider.ok_or_else(|| ConfigError::missing("capacity_provider"))?,
            weight: self.weight,
        })
    }
}

impl Block for EcsClusterDefaultCapacityProviderStrategy {
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
pub struct EcsClusterDefaultCapacityProviderStrategyOutputReference {
    inner: BlockRef,
}

impl EcsClusterDefaultCapacityProviderStrategyOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterDefaultCapacityProviderStrategy> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterDefaultCapacityProviderStrategy>) {
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
pub struct EcsClusterDefaultCapacityProviderStrategyList {
    inner: ListRef,
}

impl EcsClusterDefaultCapacityProviderStrategyList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsClusterDefaultCapacityProviderStrategyOutputReference {
        EcsClusterDefaultCapacityProviderStrategyOutputReference::new(self.inner.get(index))
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

/// `service_connect_defaults` block of [`EcsCluster`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterServiceConnectDefaults {
    pub namespace: Input<String>,
}

impl EcsClusterServiceConnectDefaults {
    pub fn builder() -> EcsClusterServiceConnectDefaultsBuilder {
        EcsClusterServiceConnectDefaultsBuilder::default()
    }
}

/// Builder for [`EcsClusterServiceConnectDefaults`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterServiceConnectDefaultsBuilder {
    namespace: Option<Input<String>>,
}

impl EcsClusterServiceConnectDefaultsBuilder {
    pub fn namespace(mut self, value: impl Into<Input<String>>) -> Self {
        self.namespace = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsClusterServiceConnectDefaults, ConfigError> {
        Ok(EcsClusterServiceConnectDefaults {
            namespace: self.namespace.ok_or_else(|| ConfigError::missing("namespace"))?,
        })
    }
}

impl Block for EcsClusterServiceConnectDefaults {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("namespace", &self.namespace);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            namespace: fields.required("namespace")?,
        })
    }
}

/// Output reference to one `service_connect_defaults` block
#[derive(Debug, Clone)]
pub struct EcsClusterServiceConnectDefaultsOutputReference {
    inner: BlockRef,
}

impl EcsClusterServiceConnectDefaultsOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterServiceConnectDefaults> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterServiceConnectDefaults>) {
        self.inner.set_internal_value(value);
    }

    pub fn namespace(&self) -> Reference {
        self.inner.reference("namespace")
    }

    pub fn namespace_input(&self) -> Option<Input<String>> {
        self.inner.input("namespace")
    }

    pub fn set_namespace(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("namespace", value);
    }
}

/// `setting` block of [`EcsCluster`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsClusterSetting {
    pub name: Input<String>,
    pub value: Input<String>,
}

impl EcsClusterSetting {
    pub fn builder() -> EcsClusterSettingBuilder {
        EcsClusterSettingBuilder::default()
    }
}

/// Builder for [`EcsClusterSetting`]
#[derive(Debug, Clone, Default)]
pub struct EcsClusterSettingBuilder {
    name: Option<Input<String>>,
    value: Option<Input<String>>,
}

impl EcsClusterSettingBuilder {
    pub fn name(mut self, value: impl Into<Input<String>>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<Input<String>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsClusterSetting, ConfigError> {
        Ok(EcsClusterSetting {
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            value: self.value.ok_or_else(|| ConfigError::missing("value"))?,
        })
    }
}

impl Block for EcsClusterSetting {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("name", &self.name);
        fields.put("value", &self.value);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            name: fields.required("name")?,
            value: fields.required("value")?,
        })
    }
}

/// Output reference to one `setting` block
#[derive(Debug, Clone)]
pub struct EcsClusterSettingOutputReference {
    inner: BlockRef,
}

impl EcsClusterSettingOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsClusterSetting> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsClusterSetting>) {
        self.inner.set_internal_value(value);
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

    pub fn value(&self) -> Reference {
        self.inner.reference("value")
    }

    pub fn value_input(&self) -> Option<Input<String>> {
        self.inner.input("value")
    }

    pub fn set_value(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("value", value);
    }
}

/// Instances of the `setting` block
#[derive(Debug, Clone)]
pub struct EcsClusterSettingList {
    inner: ListRef,
}

impl EcsClusterSettingList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsClusterSettingOutputReference {
        EcsClusterSettingOutputReference::new(self.inner.get(index))
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
