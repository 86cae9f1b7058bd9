//! `aws_ecs_cluster` data source
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, ConfigError, Fields, Input, ListRef,
    MetaArguments, Reference, ResourceHandle, ResourceKind, ResourceSchema, Stack, StackError,
    TerraformElement,
};

/// Schema of `aws_ecs_cluster`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::data_source("aws_ecs_cluster")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("cluster_name", AttributeType::String).required())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("pending_tasks_count", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("registered_container_instances_count", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("running_tasks_count", AttributeType::Number).read_only())
            .attribute(AttributeSchema::new("service_connect_defaults", AttributeType::List(Box::new(AttributeType::object([("namespace", AttributeType::String)])))).read_only())
            .attribute(AttributeSchema::new("setting", AttributeType::Set(Box::new(AttributeType::object([("name", AttributeType::String), ("value", AttributeType::String)])))).read_only())
            .attribute(AttributeSchema::new("status", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))).read_only())
    })
}

/// Arguments of [`DataAwsEcsCluster`]
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsEcsClusterConfig {
    pub cluster_name: Input<String>,
    pub id: Option<Input<String>>,
    pub meta: MetaArguments,
}

impl DataAwsEcsClusterConfig {
    pub fn builder() -> DataAwsEcsClusterConfigBuilder {
        DataAwsEcsClusterConfigBuilder::default()
    }
}

/// Builder for [`DataAwsEcsClusterConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsEcsClusterConfigBuilder {
    cluster_name: Option<Input<String>>,
    id: Option<Input<String>>,
    meta: MetaArguments,
}

impl DataAwsEcsClusterConfigBuilder {
    pub fn cluster_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.cluster_name = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<Input<String>>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<DataAwsEcsClusterConfig, ConfigError> {
        Ok(DataAwsEcsClusterConfig {
            cluster_name: self.cluster_name.ok_or_else(|| ConfigError::missing("cluster_name"))?,
            id: self.id,
            meta: self.meta,
        })
    }
}

impl Block for DataAwsEcsClusterConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("cluster_name", &self.cluster_name);
        fields.put_opt("id", &self.id);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            cluster_name: fields.required("cluster_name")?,
            id: fields.optional("id")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_cluster` data source
#[derive(Debug, Clone)]
pub struct DataAwsEcsCluster {
    element: ResourceHandle,
}

impl DataAwsEcsCluster {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_cluster";

    /// Register a new `aws_ecs_cluster` data source named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: DataAwsEcsClusterConfig) -> Result<Self, StackError> {
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

    pub fn pending_tasks_count(&self) -> Reference {
        self.root().reference("pending_tasks_count")
    }

    pub fn registered_container_instances_count(&self) -> Reference {
        self.root().reference("registered_container_instances_count")
    }

    pub fn running_tasks_count(&self) -> Reference {
        self.root().reference("running_tasks_count")
    }

    pub fn service_connect_defaults(&self) -> DataAwsEcsClusterServiceConnectDefaultsList {
        DataAwsEcsClusterServiceConnectDefaultsList::new(self.root().list("service_connect_defaults", false))
    }

    pub fn setting(&self) -> DataAwsEcsClusterSettingList {
        DataAwsEcsClusterSettingList::new(self.root().list("setting", true))
    }

    pub fn status(&self) -> Reference {
        self.root().reference("status")
    }

    pub fn tags(&self) -> Reference {
        self.root().reference("tags")
    }
}

impl TerraformElement for DataAwsEcsCluster {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// Output reference to one `service_connect_defaults` entry of [`DataAwsEcsCluster`]
#[derive(Debug, Clone)]
pub struct DataAwsEcsClusterServiceConnectDefaultsOutputReference {
    inner: BlockRef,
}

impl DataAwsEcsClusterServiceConnectDefaultsOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn namespace(&self) -> Reference {
        self.inner.reference("namespace")
    }
}

/// Entries of the computed `service_connect_defaults` attribute
#[derive(Debug, Clone)]
pub struct DataAwsEcsClusterServiceConnectDefaultsList {
    inner: ListRef,
}

impl DataAwsEcsClusterServiceConnectDefaultsList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> DataAwsEcsClusterServiceConnectDefaultsOutputReference {
        DataAwsEcsClusterServiceConnectDefaultsOutputReference::new(self.inner.get(index))
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

/// Output reference to one `setting` entry of [`DataAwsEcsCluster`]
#[derive(Debug, Clone)]
pub struct DataAwsEcsClusterSettingOutputReference {
    inner: BlockRef,
}

impl DataAwsEcsClusterSettingOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn name(&self) -> Reference {
        self.inner.reference("name")
    }

    pub fn value(&self) -> Reference {
        self.inner.reference("value")
    }
}

/// Entries of the computed `setting` attribute
#[derive(Debug, Clone)]
pub struct DataAwsEcsClusterSettingList {
    inner: ListRef,
}

impl DataAwsEcsClusterSettingList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> DataAwsEcsClusterSettingOutputReference {
        DataAwsEcsClusterSettingOutputReference::new(self.inner.get(index))
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
