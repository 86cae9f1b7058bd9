//! `aws_ecs_service` resource
//!
//! DO NOT EDIT MANUALLY - regenerate with berth-codegen

use std::collections::BTreeMap;
use std::sync::OnceLock;

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    ListRef, MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema,
    Stack, StackError, TerraformElement,
};

/// Schema of `aws_ecs_service`
pub fn schema() -> &'static ResourceSchema {
    static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ResourceSchema::new("aws_ecs_service")
            .attribute(AttributeSchema::new("cluster", AttributeType::String).computed())
            .attribute(AttributeSchema::new("deployment_maximum_percent", AttributeType::Number))
            .attribute(AttributeSchema::new("deployment_minimum_healthy_percent", AttributeType::Number))
            .attribute(AttributeSchema::new("desired_count", AttributeType::Number))
            .attribute(AttributeSchema::new("enable_ecs_managed_tags", AttributeType::Bool))
            .attribute(AttributeSchema::new("enable_execute_command", AttributeType::Bool))
            .attribute(AttributeSchema::new("force_new_deployment", AttributeType::Bool))
            .attribute(AttributeSchema::new("health_check_grace_period_seconds", AttributeType::Number))
            .attribute(AttributeSchema::new("iam_role", AttributeType::String).computed())
            .attribute(AttributeSchema::new("id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("launch_type", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("platform_version", AttributeType::String).computed())
            .attribute(AttributeSchema::new("propagate_tags", AttributeType::String))
            .attribute(AttributeSchema::new("scheduling_strategy", AttributeType::String))
            .attribute(AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))))
            .attribute(AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String))).computed())
            .attribute(AttributeSchema::new("task_definition", AttributeType::String))
            .attribute(AttributeSchema::new("triggers", AttributeType::Map(Box::new(AttributeType::String))).computed())
            .attribute(AttributeSchema::new("wait_for_steady_state", AttributeType::Bool))
            .block(
                BlockSchema::new("alarms", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("alarm_names", AttributeType::Set(Box::new(AttributeType::String))).required())
                    .attribute(AttributeSchema::new("enable", AttributeType::Bool).required())
                    .attribute(AttributeSchema::new("rollback", AttributeType::Bool).required()),
            )
            .block(
                BlockSchema::new("capacity_provider_strategy", NestingMode::Set)
                    .attribute(AttributeSchema::new("base", AttributeType::Number))
                    .attribute(AttributeSchema::new("capacity_provider", AttributeType::String).required())
                    .attribute(AttributeSchema::new("weight", AttributeType::Number)),
            )
            .block(
                BlockSchema::new("deployment_circuit_breaker", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("enable", AttributeType::Bool).required())
                    .attribute(AttributeSchema::new("rollback", AttributeType::Bool).required()),
            )
            .block(
                BlockSchema::new("deployment_controller", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("type", AttributeType::String)),
            )
            .block(
                BlockSchema::new("load_balancer", NestingMode::Set)
                    .attribute(AttributeSchema::new("container_name", AttributeType::String).required())
                    .attribute(AttributeSchema::new("container_port", AttributeType::Number).required())
                    .attribute(AttributeSchema::new("elb_name", AttributeType::String))
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
                BlockSchema::new("ordered_placement_strategy", NestingMode::List)
                    .max_items(5)
                    .attribute(AttributeSchema::new("field", AttributeType::String))
                    .attribute(AttributeSchema::new("type", AttributeType::String).required()),
            )
            .block(
                BlockSchema::new("placement_constraints", NestingMode::Set)
                    .max_items(10)
                    .attribute(AttributeSchema::new("expression", AttributeType::String))
                    .attribute(AttributeSchema::new("type", AttributeType::String).required()),
            )
            .block(
                BlockSchema::new("service_connect_configuration", NestingMode::List)
                    .max_items(1)
                    .attribute(AttributeSchema::new("enabled", AttributeType::Bool).required())
                    .attribute(AttributeSchema::new("namespace", AttributeType::String))
                    .block(
                        BlockSchema::new("log_configuration", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("log_driver", AttributeType::String).required())
                            .attribute(AttributeSchema::new("options", AttributeType::Map(Box::new(AttributeType::String))))
                            .block(
                                BlockSchema::new("secret_option", NestingMode::List)
                                    .attribute(AttributeSchema::new("name", AttributeType::String).required())
                                    .attribute(AttributeSchema::new("value_from", AttributeType::String).required()),
                            ),
                    )
                    .block(
                        BlockSchema::new("service", NestingMode::List)
                            .attribute(AttributeSchema::new("discovery_name", AttributeType::String))
                            .attribute(AttributeSchema::new("ingress_port_override", AttributeType::Number))
                            .attribute(AttributeSchema::new("port_name", AttributeType::String).required())
                            .block(
                                BlockSchema::new("client_alias", NestingMode::List)
                                    .max_items(1)
                                    .attribute(AttributeSchema::new("dns_name", AttributeType::String))
                                    .attribute(AttributeSchema::new("port", AttributeType::Number).required()),
                            ),
                    ),
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

/// Arguments of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceConfig {
    pub cluster: Option<Input<String>>,
    pub deployment_maximum_percent: Option<Input<f64>>,
    pub deployment_minimum_healthy_percent: Option<Input<f64>>,
    pub desired_count: Option<Input<f64>>,
    pub enable_ecs_managed_tags: Option<Input<bool>>,
    pub enable_execute_command: Option<Input<bool>>,
    pub force_new_deployment: Option<Input<bool>>,
    pub health_check_grace_period_seconds: Option<Input<f64>>,
    pub iam_role: Option<Input<String>>,
    pub id: Option<Input<String>>,
    pub launch_type: Option<Input<String>>,
    pub name: Input<String>,
    pub platform_version: Option<Input<String>>,
    pub propagate_tags: Option<Input<String>>,
    pub scheduling_strategy: Option<Input<String>>,
    pub tags: Option<Input<BTreeMap<String, String>>>,
    pub tags_all: Option<Input<BTreeMap<String, String>>>,
    pub task_definition: Option<Input<String>>,
    pub triggers: Option<Input<BTreeMap<String, String>>>,
    pub wait_for_steady_state: Option<Input<bool>>,
    pub alarms: Option<EcsServiceAlarms>,
    pub capacity_provider_strategy: Vec<EcsServiceCapacityProviderStrategy>,
    pub deployment_circuit_breaker: Option<EcsServiceDeploymentCircuitBreaker>,
    pub deployment_controller: Option<EcsServiceDeploymentController>,
    pub load_balancer: Vec<EcsServiceLoadBalancer>,
    pub network_configuration: Option<EcsServiceNetworkConfiguration>,
    pub ordered_placement_strategy: Vec<EcsServiceOrderedPlacementStrategy>,
    pub placement_constraints: Vec<EcsServicePlacementConstraints>,
    pub service_connect_configuration: Option<EcsServiceServiceConnectConfiguration>,
    pub service_registries: Option<EcsServiceServiceRegistries>,
    pub meta: MetaArguments,
}

impl EcsServiceConfig {
    pub fn builder() -> EcsServiceConfigBuilder {
        EcsServiceConfigBuilder::default()
    }
}

/// Builder for [`EcsServiceConfig`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceConfigBuilder {
    cluster: Option<Input<String>>,
    deployment_maximum_percent: Option<Input<f64>>,
    deployment_minimum_healthy_percent: Option<Input<f64>>,
    desired_count: Option<Input<f64>>,
    enable_ecs_managed_tags: Option<Input<bool>>,
    enable_execute_command: Option<Input<bool>>,
    force_new_deployment: Option<Input<bool>>,
    health_check_grace_period_seconds: Option<Input<f64>>,
    iam_role: Option<Input<String>>,
    id: Option<Input<String>>,
    launch_type: Option<Input<String>>,
    name: Option<Input<String>>,
    platform_version: Option<Input<String>>,
    propagate_tags: Option<Input<String>>,
    scheduling_strategy: Option<Input<String>>,
    tags: Option<Input<BTreeMap<String, String>>>,
    tags_all: Option<Input<BTreeMap<String, String>>>,
    task_definition: Option<Input<String>>,
    triggers: Option<Input<BTreeMap<String, String>>>,
    wait_for_steady_state: Option<Input<bool>>,
    alarms: Option<EcsServiceAlarms>,
    capacity_provider_strategy: Vec<EcsServiceCapacityProviderStrategy>,
    deployment_circuit_breaker: Option<EcsServiceDeploymentCircuitBreaker>,
    deployment_controller: Option<EcsServiceDeploymentController>,
    load_balancer: Vec<EcsServiceLoadBalancer>,
    network_configuration: Option<EcsServiceNetworkConfiguration>,
    ordered_placement_strategy: Vec<EcsServiceOrderedPlacementStrategy>,
    placement_constraints: Vec<EcsServicePlacementConstraints>,
    service_connect_configuration: Option<EcsServiceServiceConnectConfiguration>,
    service_registries: Option<EcsServiceServiceRegistries>,
    meta: MetaArguments,
}

impl EcsServiceConfigBuilder {
    pub fn cluster(mut self, value: impl Into<Input<String>>) -> Self {
        self.cluster = Some(value.into());
        self
    }

    pub fn deployment_maximum_percent(mut self, value: impl Into<Input<f64>>) -> Self {
        self.deployment_maximum_percent = Some(value.into());
        self
    }

    pub fn deployment_minimum_healthy_percent(mut self, value: impl Into<Input<f64>>) -> Self {
        self.deployment_minimum_healthy_percent = Some(value.into());
        self
    }

    pub fn desired_count(mut self, value: impl Into<Input<f64>>) -> Self {
        self.desired_count = Some(value.into());
        self
    }

    pub fn enable_ecs_managed_tags(mut self, value: impl Into<Input<bool>>) -> Self {
        self.enable_ecs_managed_tags = Some(value.into());
        self
    }

    pub fn enable_execute_command(mut self, value: impl Into<Input<bool>>) -> Self {
        self.enable_execute_command = Some(value.into());
        self
    }

    pub fn force_new_deployment(mut self, value: impl Into<Input<bool>>) -> Self {
        self.force_new_deployment = Some(value.into());
        self
    }

    pub fn health_check_grace_period_seconds(mut self, value: impl Into<Input<f64>>) -> Self {
        self.health_check_grace_period_seconds = Some(value.into());
        self
    }

    pub fn iam_role(mut self, value: impl Into<Input<String>>) -> Self {
        self.iam_role = Some(value.into());
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

    pub fn name(mut self, value: impl Into<Input<String>>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn platform_version(mut self, value: impl Into<Input<String>>) -> Self {
        self.platform_version = Some(value.into());
        self
    }

    pub fn propagate_tags(mut self, value: impl Into<Input<String>>) -> Self {
        self.propagate_tags = Some(value.into());
        self
    }

    pub fn scheduling_strategy(mut self, value: impl Into<Input<String>>) -> Self {
        self.scheduling_strategy = Some(value.into());
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

    pub fn triggers(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.triggers = Some(value.into());
        self
    }

    pub fn wait_for_steady_state(mut self, value: impl Into<Input<bool>>) -> Self {
        self.wait_for_steady_state = Some(value.into());
        self
    }

    pub fn alarms(mut self, value: EcsServiceAlarms) -> Self {
        self.alarms = Some(value);
        self
    }

    pub fn capacity_provider_strategy(mut self, value: impl IntoIterator<Item = EcsServiceCapacityProviderStrategy>) -> Self {
        self.capacity_provider_strategy = value.into_iter().collect();
        self
    }

    pub fn deployment_circuit_breaker(mut self, value: EcsServiceDeploymentCircuitBreaker) -> Self {
        self.deployment_circuit_breaker = Some(value);
        self
    }

    pub fn deployment_controller(mut self, value: EcsServiceDeploymentController) -> Self {
        self.deployment_controller = Some(value);
        self
    }

    pub fn load_balancer(mut self, value: impl IntoIterator<Item = EcsServiceLoadBalancer>) -> Self {
        self.load_balancer = value.into_iter().collect();
        self
    }

    pub fn network_configuration(mut self, value: EcsServiceNetworkConfiguration) -> Self {
        self.network_configuration = Some(value);
        self
    }

    pub fn ordered_placement_strategy(mut self, value: impl IntoIterator<Item = EcsServiceOrderedPlacementStrategy>) -> Self {
        self.ordered_placement_strategy = value.into_iter().collect();
        self
    }

    pub fn placement_constraints(mut self, value: impl IntoIterator<Item = EcsServicePlacementConstraints>) -> Self {
        self.placement_constraints = value.into_iter().collect();
        self
    }

    pub fn service_connect_configuration(mut self, value: EcsServiceServiceConnectConfiguration) -> Self {
        self.service_connect_configuration = Some(value);
        self
    }

    pub fn service_registries(mut self, value: EcsServiceServiceRegistries) -> Self {
        self.service_registries = Some(value);
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<EcsServiceConfig, ConfigError> {
        Ok(EcsServiceConfig {
            cluster: self.cluster,
            deployment_maximum_percent: self.deployment_maximum_percent,
            deployment_minimum_healthy_percent: self.deployment_minimum_healthy_percent,
            desired_count: self.desired_count,
            enable_ecs_managed_tags: self.enable_ecs_managed_tags,
            enable_execute_command: self.enable_execute_command,
            force_new_deployment: self.force_new_deployment,
            health_check_grace_period_seconds: self.health_check_grace_period_seconds,
            iam_role: self.iam_role,
            id: self.id,
            launch_type: self.launch_type,
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            platform_version: self.platform_version,
            propagate_tags: self.propagate_tags,
            scheduling_strategy: self.scheduling_strategy,
            tags: self.tags,
            tags_all: self.tags_all,
            task_definition: self.task_definition,
            triggers: self.triggers,
            wait_for_steady_state: self.wait_for_steady_state,
            alarms: self.alarms,
            capacity_provider_strategy: self.capacity_provider_strategy,
            deployment_circuit_breaker: self.deployment_circuit_breaker,
            deployment_controller: self.deployment_controller,
            load_balancer: self.load_balancer,
            network_configuration: self.network_configuration,
            ordered_placement_strategy: self.ordered_placement_strategy,
            placement_constraints: self.placement_constraints,
            service_connect_configuration: self.service_connect_configuration,
            service_registries: self.service_registries,
            meta: self.meta,
        })
    }
}

impl Block for EcsServiceConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("cluster", &self.cluster);
        fields.put_opt("deployment_maximum_percent", &self.deployment_maximum_percent);
        fields.put_opt("deployment_minimum_healthy_percent", &self.deployment_minimum_healthy_percent);
        fields.put_opt("desired_count", &self.desired_count);
        fields.put_opt("enable_ecs_managed_tags", &self.enable_ecs_managed_tags);
        fields.put_opt("enable_execute_command", &self.enable_execute_command);
        fields.put_opt("force_new_deployment", &self.force_new_deployment);
        fields.put_opt("health_check_grace_period_seconds", &self.health_check_grace_period_seconds);
        fields.put_opt("iam_role", &self.iam_role);
        fields.put_opt("id", &self.id);
        fields.put_opt("launch_type", &self.launch_type);
        fields.put("name", &self.name);
        fields.put_opt("platform_version", &self.platform_version);
        fields.put_opt("propagate_tags", &self.propagate_tags);
        fields.put_opt("scheduling_strategy", &self.scheduling_strategy);
        fields.put_opt("tags", &self.tags);
        fields.put_opt("tags_all", &self.tags_all);
        fields.put_opt("task_definition", &self.task_definition);
        fields.put_opt("triggers", &self.triggers);
        fields.put_opt("wait_for_steady_state", &self.wait_for_steady_state);
        fields.put_block("alarms", self.alarms.as_ref());
        fields.put_blocks("capacity_provider_strategy", &self.capacity_provider_strategy);
        fields.put_block("deployment_circuit_breaker", self.deployment_circuit_breaker.as_ref());
        fields.put_block("deployment_controller", self.deployment_controller.as_ref());
        fields.put_blocks("load_balancer", &self.load_balancer);
        fields.put_block("network_configuration", self.network_configuration.as_ref());
        fields.put_blocks("ordered_placement_strategy", &self.ordered_placement_strategy);
        fields.put_blocks("placement_constraints", &self.placement_constraints);
        fields.put_block("service_connect_configuration", self.service_connect_configuration.as_ref());
        fields.put_block("service_registries", self.service_registries.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            cluster: fields.optional("cluster")?,
            deployment_maximum_percent: fields.optional("deployment_maximum_percent")?,
            deployment_minimum_healthy_percent: fields.optional("deployment_minimum_healthy_percent")?,
            desired_count: fields.optional("desired_count")?,
            enable_ecs_managed_tags: fields.optional("enable_ecs_managed_tags")?,
            enable_execute_command: fields.optional("enable_execute_command")?,
            force_new_deployment: fields.optional("force_new_deployment")?,
            health_check_grace_period_seconds: fields.optional("health_check_grace_period_seconds")?,
            iam_role: fields.optional("iam_role")?,
            id: fields.optional("id")?,
            launch_type: fields.optional("launch_type")?,
            name: fields.required("name")?,
            platform_version: fields.optional("platform_version")?,
            propagate_tags: fields.optional("propagate_tags")?,
            scheduling_strategy: fields.optional("scheduling_strategy")?,
            tags: fields.optional("tags")?,
            tags_all: fields.optional("tags_all")?,
            task_definition: fields.optional("task_definition")?,
            triggers: fields.optional("triggers")?,
            wait_for_steady_state: fields.optional("wait_for_steady_state")?,
            alarms: fields.block("alarms")?,
            capacity_provider_strategy: fields.blocks("capacity_provider_strategy")?,
            deployment_circuit_breaker: fields.block("deployment_circuit_breaker")?,
            deployment_controller: fields.block("deployment_controller")?,
            load_balancer: fields.blocks("load_balancer")?,
            network_configuration: fields.block("network_configuration")?,
            ordered_placement_strategy: fields.blocks("ordered_placement_strategy")?,
            placement_constraints: fields.blocks("placement_constraints")?,
            service_connect_configuration: fields.block("service_connect_configuration")?,
            service_registries: fields.block("service_registries")?,
            meta: MetaArguments::default(),
        })
    }
}

/// `aws_ecs_service` resource
#[derive(Debug, Clone)]
pub struct EcsService {
    element: ResourceHandle,
}

impl EcsService {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_ecs_service";

    /// Register a new `aws_ecs_service` resource named `id` in `stack`
    pub fn new(stack: &mut Stack, id: &str, config: EcsServiceConfig) -> Result<Self, StackError> {
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

    pub fn reset_cluster(&self) {
        self.root().reset("cluster");
    }

    pub fn deployment_maximum_percent(&self) -> Reference {
        self.root().reference("deployment_maximum_percent")
    }

    pub fn deployment_maximum_percent_input(&self) -> Option<Input<f64>> {
        self.root().input("deployment_maximum_percent")
    }

    pub fn set_deployment_maximum_percent(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.root().set("deployment_maximum_percent", value);
    }

    pub fn reset_deployment_maximum_percent(&self) {
        self.root().reset("deployment_maximum_percent");
    }

    pub fn deployment_minimum_healthy_percent(&self) -> Reference {
        self.root().reference("deployment_minimum_healthy_percent")
    }

    pub fn deployment_minimum_healthy_percent_input(&self) -> Option<Input<f64>> {
        self.root().input("deployment_minimum_healthy_percent")
    }

    pub fn set_deployment_minimum_healthy_percent(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.root().set("deployment_minimum_healthy_percent", value);
    }

    pub fn reset_deployment_minimum_healthy_percent(&self) {
        self.root().reset("deployment_minimum_healthy_percent");
    }

    pub fn desired_count(&self) -> Reference {
        self.root().reference("desired_count")
    }

    pub fn desired_count_input(&self) -> Option<Input<f64>> {
        self.root().input("desired_count")
    }

    pub fn set_desired_count(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.root().set("desired_count", value);
    }

    pub fn reset_desired_count(&self) {
        self.root().reset("desired_count");
    }

    pub fn enable_ecs_managed_tags(&self) -> Reference {
        self.root().reference("enable_ecs_managed_tags")
    }

    pub fn enable_ecs_managed_tags_input(&self) -> Option<Input<bool>> {
        self.root().input("enable_ecs_managed_tags")
    }

    pub fn set_enable_ecs_managed_tags(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("enable_ecs_managed_tags", value);
    }

    pub fn reset_enable_ecs_managed_tags(&self) {
        self.root().reset("enable_ecs_managed_tags");
    }

    pub fn enable_execute_command(&self) -> Reference {
        self.root().reference("enable_execute_command")
    }

    pub fn enable_execute_command_input(&self) -> Option<Input<bool>> {
        self.root().input("enable_execute_command")
    }

    pub fn set_enable_execute_command(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("enable_execute_command", value);
    }

    pub fn reset_enable_execute_command(&self) {
        self.root().reset("enable_execute_command");
    }

    pub fn force_new_deployment(&self) -> Reference {
        self.root().reference("force_new_deployment")
    }

    pub fn force_new_deployment_input(&self) -> Option<Input<bool>> {
        self.root().input("force_new_deployment")
    }

    pub fn set_force_new_deployment(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("force_new_deployment", value);
    }

    pub fn reset_force_new_deployment(&self) {
        self.root().reset("force_new_deployment");
    }

    pub fn health_check_grace_period_seconds(&self) -> Reference {
        self.root().reference("health_check_grace_period_seconds")
    }

    pub fn health_check_grace_period_seconds_input(&self) -> Option<Input<f64>> {
        self.root().input("health_check_grace_period_seconds")
    }

    pub fn set_health_check_grace_period_seconds(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.root().set("health_check_grace_period_seconds", value);
    }

    pub fn reset_health_check_grace_period_seconds(&self) {
        self.root().reset("health_check_grace_period_seconds");
    }

    pub fn iam_role(&self) -> Reference {
        self.root().reference("iam_role")
    }

    pub fn iam_role_input(&self) -> Option<Input<String>> {
        self.root().input("iam_role")
    }

    pub fn set_iam_role(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("iam_role", value);
    }

    pub fn reset_iam_role(&self) {
        self.root().reset("iam_role");
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

    pub fn propagate_tags(&self) -> Reference {
        self.root().reference("propagate_tags")
    }

    pub fn propagate_tags_input(&self) -> Option<Input<String>> {
        self.root().input("propagate_tags")
    }

    pub fn set_propagate_tags(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("propagate_tags", value);
    }

    pub fn reset_propagate_tags(&self) {
        self.root().reset("propagate_tags");
    }

    pub fn scheduling_strategy(&self) -> Reference {
        self.root().reference("scheduling_strategy")
    }

    pub fn scheduling_strategy_input(&self) -> Option<Input<String>> {
        self.root().input("scheduling_strategy")
    }

    pub fn set_scheduling_strategy(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("scheduling_strategy", value);
    }

    pub fn reset_scheduling_strategy(&self) {
        self.root().reset("scheduling_strategy");
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

    pub fn reset_task_definition(&self) {
        self.root().reset("task_definition");
    }

    pub fn triggers(&self) -> Reference {
        self.root().reference("triggers")
    }

    pub fn triggers_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.root().input("triggers")
    }

    pub fn set_triggers(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.root().set("triggers", value);
    }

    pub fn reset_triggers(&self) {
        self.root().reset("triggers");
    }

    pub fn wait_for_steady_state(&self) -> Reference {
        self.root().reference("wait_for_steady_state")
    }

    pub fn wait_for_steady_state_input(&self) -> Option<Input<bool>> {
        self.root().input("wait_for_steady_state")
    }

    pub fn set_wait_for_steady_state(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.root().set("wait_for_steady_state", value);
    }

    pub fn reset_wait_for_steady_state(&self) {
        self.root().reset("wait_for_steady_state");
    }

    pub fn alarms(&self) -> EcsServiceAlarmsOutputReference {
        EcsServiceAlarmsOutputReference::new(self.root().block("alarms", false))
    }

    pub fn put_alarms(&self, value: &EcsServiceAlarms) {
        self.root().put("alarms", value);
    }

    pub fn alarms_input(&self) -> Option<EcsServiceAlarms> {
        self.root().block_input("alarms")
    }

    pub fn reset_alarms(&self) {
        self.root().reset("alarms");
    }

    pub fn capacity_provider_strategy(&self) -> EcsServiceCapacityProviderStrategyList {
        EcsServiceCapacityProviderStrategyList::new(self.root().list("capacity_provider_strategy", true))
    }

    pub fn put_capacity_provider_strategy(&self, value: &[EcsServiceCapacityProviderStrategy]) {
        self.root().put_all("capacity_provider_strategy", value);
    }

    pub fn capacity_provider_strategy_input(&self) -> Option<Vec<EcsServiceCapacityProviderStrategy>> {
        self.root().blocks_input("capacity_provider_strategy")
    }

    pub fn reset_capacity_provider_strategy(&self) {
        self.root().reset("capacity_provider_strategy");
    }

    pub fn deployment_circuit_breaker(&self) -> EcsServiceDeploymentCircuitBreakerOutputReference {
        EcsServiceDeploymentCircuitBreakerOutputReference::new(self.root().block("deployment_circuit_breaker", false))
    }

    pub fn put_deployment_circuit_breaker(&self, value: &EcsServiceDeploymentCircuitBreaker) {
        self.root().put("deployment_circuit_breaker", value);
    }

    pub fn deployment_circuit_breaker_input(&self) -> Option<EcsServiceDeploymentCircuitBreaker> {
        self.root().block_input("deployment_circuit_breaker")
    }

    pub fn reset_deployment_circuit_breaker(&self) {
        self.root().reset("deployment_circuit_breaker");
    }

    pub fn deployment_controller(&self) -> EcsServiceDeploymentControllerOutputReference {
        EcsServiceDeploymentControllerOutputReference::new(self.root().block("deployment_controller", false))
    }

    pub fn put_deployment_controller(&self, value: &EcsServiceDeploymentController) {
        self.root().put("deployment_controller", value);
    }

    pub fn deployment_controller_input(&self) -> Option<EcsServiceDeploymentController> {
        self.root().block_input("deployment_controller")
    }

    pub fn reset_deployment_controller(&self) {
        self.root().reset("deployment_controller");
    }

    pub fn load_balancer(&self) -> EcsServiceLoadBalancerList {
        EcsServiceLoadBalancerList::new(self.root().list("load_balancer", true))
    }

    pub fn put_load_balancer(&self, value: &[EcsServiceLoadBalancer]) {
        self.root().put_all("load_balancer", value);
    }

    pub fn load_balancer_input(&self) -> Option<Vec<EcsServiceLoadBalancer>> {
        self.root().blocks_input("load_balancer")
    }

    pub fn reset_load_balancer(&self) {
        self.root().reset("load_balancer");
    }

    pub fn network_configuration(&self) -> EcsServiceNetworkConfigurationOutputReference {
        EcsServiceNetworkConfigurationOutputReference::new(self.root().block("network_configuration", false))
    }

    pub fn put_network_configuration(&self, value: &EcsServiceNetworkConfiguration) {
        self.root().put("network_configuration", value);
    }

    pub fn network_configuration_input(&self) -> Option<EcsServiceNetworkConfiguration> {
        self.root().block_input("network_configuration")
    }

    pub fn reset_network_configuration(&self) {
        self.root().reset("network_configuration");
    }

    pub fn ordered_placement_strategy(&self) -> EcsServiceOrderedPlacementStrategyList {
        EcsServiceOrderedPlacementStrategyList::new(self.root().list("ordered_placement_strategy", false))
    }

    pub fn put_ordered_placement_strategy(&self, value: &[EcsServiceOrderedPlacementStrategy]) {
        self.root().put_all("ordered_placement_strategy", value);
    }

    pub fn ordered_placement_strategy_input(&self) -> Option<Vec<EcsServiceOrderedPlacementStrategy>> {
        self.root().blocks_input("ordered_placement_strategy")
    }

    pub fn reset_ordered_placement_strategy(&self) {
        self.root().reset("ordered_placement_strategy");
    }

    pub fn placement_constraints(&self) -> EcsServicePlacementConstraintsList {
        EcsServicePlacementConstraintsList::new(self.root().list("placement_constraints", true))
    }

    pub fn put_placement_constraints(&self, value: &[EcsServicePlacementConstraints]) {
        self.root().put_all("placement_constraints", value);
    }

    pub fn placement_constraints_input(&self) -> Option<Vec<EcsServicePlacementConstraints>> {
        self.root().blocks_input("placement_constraints")
    }

    pub fn reset_placement_constraints(&self) {
        self.root().reset("placement_constraints");
    }

    pub fn service_connect_configuration(&self) -> EcsServiceServiceConnectConfigurationOutputReference {
        EcsServiceServiceConnectConfigurationOutputReference::new(self.root().block("service_connect_configuration", false))
    }

    pub fn put_service_connect_configuration(&self, value: &EcsServiceServiceConnectConfiguration) {
        self.root().put("service_connect_configuration", value);
    }

    pub fn service_connect_configuration_input(&self) -> Option<EcsServiceServiceConnectConfiguration> {
        self.root().block_input("service_connect_configuration")
    }

    pub fn reset_service_connect_configuration(&self) {
        self.root().reset("service_connect_configuration");
    }

    pub fn service_registries(&self) -> EcsServiceServiceRegistriesOutputReference {
        EcsServiceServiceRegistriesOutputReference::new(self.root().block("service_registries", false))
    }

    pub fn put_service_registries(&self, value: &EcsServiceServiceRegistries) {
        self.root().put("service_registries", value);
    }

    pub fn service_registries_input(&self) -> Option<EcsServiceServiceRegistries> {
        self.root().block_input("service_registries")
    }

    pub fn reset_service_registries(&self) {
        self.root().reset("service_registries");
    }
}

impl TerraformElement for EcsService {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

/// `alarms` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceAlarms {
    pub alarm_names: Input<Vec<String>>,
    pub enable: Input<bool>,
    pub rollback: Input<bool>,
}

impl EcsServiceAlarms {
    pub fn builder() -> EcsServiceAlarmsBuilder {
        EcsServiceAlarmsBuilder::default()
    }
}

/// Builder for [`EcsServiceAlarms`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceAlarmsBuilder {
    alarm_names: Option<Input<Vec<String>>>,
    enable: Option<Input<bool>>,
    rollback: Option<Input<bool>>,
}

impl EcsServiceAlarmsBuilder {
    pub fn alarm_names(mut self, value: impl Into<Input<Vec<String>>>) -> Self {
        self.alarm_names = Some(value.into());
        self
    }

    pub fn enable(mut self, value: impl Into<Input<bool>>) -> Self {
        self.enable = Some(value.into());
        self
    }

    pub fn rollback(mut self, value: impl Into<Input<bool>>) -> Self {
        self.rollback = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceAlarms, ConfigError> {
        Ok(EcsServiceAlarms {
            alarm_names: self.alarm_names.ok_or_else(|| ConfigError::missing("alarm_names"))?,
            enable: self.enable.ok_or_else(|| ConfigError::missing("enable"))?,
            rollback: self.rollback.ok_or_else(|| ConfigError::missing("rollback"))?,
        })
    }
}

impl Block for EcsServiceAlarms {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("alarm_names", &self.alarm_names);
        fields.put("enable", &self.enable);
        fields.put("rollback", &self.rollback);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            alarm_names: fields.required("alarm_names")?,
            enable: fields.required("enable")?,
            rollback: fields.required("rollback")?,
        })
    }
}

/// Output reference to one `alarms` block
#[derive(Debug, Clone)]
pub struct EcsServiceAlarmsOutputReference {
    inner: BlockRef,
}

impl EcsServiceAlarmsOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceAlarms> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceAlarms>) {
        self.inner.set_internal_value(value);
    }

    pub fn alarm_names(&self) -> Reference {
        self.inner.reference("alarm_names")
    }

    pub fn alarm_names_input(&self) -> Option<Input<Vec<String>>> {
        self.inner.input("alarm_names")
    }

    pub fn set_alarm_names(&self, value: impl Into<Input<Vec<String>>>) {
        let value: Input<Vec<String>> = value.into();
        self.inner.set("alarm_names", value);
    }

    pub fn enable(&self) -> Reference {
        self.inner.reference("enable")
    }

    pub fn enable_input(&self) -> Option<Input<bool>> {
        self.inner.input("enable")
    }

    pub fn set_enable(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("enable", value);
    }

    pub fn rollback(&self) -> Reference {
        self.inner.reference("rollback")
    }

    pub fn rollback_input(&self) -> Option<Input<bool>> {
        self.inner.input("rollback")
    }

    pub fn set_rollback(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("rollback", value);
    }
}

/// `capacity_provider_strategy` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceCapacityProviderStrategy {
    pub base: Option<Input<f64>>,
    pub capacity_provider: Input<String>,
    pub weight: Option<Input<f64>>,
}

impl EcsServiceCapacityProviderStrategy {
    pub fn builder() -> EcsServiceCapacityProviderStrategyBuilder {
        EcsServiceCapacityProviderStrategyBuilder::default()
    }
}

/// Builder for [`EcsServiceCapacityProviderStrategy`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceCapacityProviderStrategyBuilder {
    base: Option<Input<f64>>,
    capacity_provider: Option<Input<String>>,
    weight: Option<Input<f64>>,
}

impl EcsServiceCapacityProviderStrategyBuilder {
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

    pub fn build(self) -> Result<EcsServiceCapacityProviderStrategy, ConfigError> {
        Ok(EcsServiceCapacityProviderStrategy {
            base: self.base,
            capacity_provider: self.capacity_provider.ok_or_else(|| ConfigError::missing("capacity_provider"))?,
            weight: self.weight,
        })
    }
}

impl Block for EcsServiceCapacityProviderStrategy {
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

/// Output reference to one `capacity_provider_strategy` block
#[derive(Debug, Clone)]
pub struct EcsServiceCapacityProviderStrategyOutputReference {
    inner: BlockRef,
}

impl EcsServiceCapacityProviderStrategyOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceCapacityProviderStrategy> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceCapacityProviderStrategy>) {
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

/// Instances of the `capacity_provider_strategy` block
#[derive(Debug, Clone)]
pub struct EcsServiceCapacityProviderStrategyList {
    inner: ListRef,
}

impl EcsServiceCapacityProviderStrategyList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsServiceCapacityProviderStrategyOutputReference {
        EcsServiceCapacityProviderStrategyOutputReference::new(self.inner.get(index))
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

/// `deployment_circuit_breaker` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceDeploymentCircuitBreaker {
    pub enable: Input<bool>,
    pub rollback: Input<bool>,
}

impl EcsServiceDeploymentCircuitBreaker {
    pub fn builder() -> EcsServiceDeploymentCircuitBreakerBuilder {
        EcsServiceDeploymentCircuitBreakerBuilder::default()
    }
}

/// Builder for [`EcsServiceDeploymentCircuitBreaker`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceDeploymentCircuitBreakerBuilder {
    enable: Option<Input<bool>>,
    rollback: Option<Input<bool>>,
}

impl EcsServiceDeploymentCircuitBreakerBuilder {
    pub fn enable(mut self, value: impl Into<Input<bool>>) -> Self {
        self.enable = Some(value.into());
        self
    }

    pub fn rollback(mut self, value: impl Into<Input<bool>>) -> Self {
        self.rollback = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceDeploymentCircuitBreaker, ConfigError> {
        Ok(EcsServiceDeploymentCircuitBreaker {
            enable: self.enable.ok_or_else(|| ConfigError::missing("enable"))?,
            rollback: self.rollback.ok_or_else(|| ConfigError::missing("rollback"))?,
        })
    }
}

impl Block for EcsServiceDeploymentCircuitBreaker {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("enable", &self.enable);
        fields.put("rollback", &self.rollback);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            enable: fields.required("enable")?,
            rollback: fields.required("rollback")?,
        })
    }
}

/// Output reference to one `deployment_circuit_breaker` block
#[derive(Debug, Clone)]
pub struct EcsServiceDeploymentCircuitBreakerOutputReference {
    inner: BlockRef,
}

impl EcsServiceDeploymentCircuitBreakerOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceDeploymentCircuitBreaker> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceDeploymentCircuitBreaker>) {
        self.inner.set_internal_value(value);
    }

    pub fn enable(&self) -> Reference {
        self.inner.reference("enable")
    }

    pub fn enable_input(&self) -> Option<Input<bool>> {
        self.inner.input("enable")
    }

    pub fn set_enable(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("enable", value);
    }

    pub fn rollback(&self) -> Reference {
        self.inner.reference("rollback")
    }

    pub fn rollback_input(&self) -> Option<Input<bool>> {
        self.inner.input("rollback")
    }

    pub fn set_rollback(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("rollback", value);
    }
}

/// `deployment_controller` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceDeploymentController {
    pub r#type: Option<Input<String>>,
}

impl EcsServiceDeploymentController {
    pub fn builder() -> EcsServiceDeploymentControllerBuilder {
        EcsServiceDeploymentControllerBuilder::default()
    }
}

/// Builder for [`EcsServiceDeploymentController`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceDeploymentControllerBuilder {
    r#type: Option<Input<String>>,
}

impl EcsServiceDeploymentControllerBuilder {
    pub fn r#type(mut self, value: impl Into<Input<String>>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceDeploymentController, ConfigError> {
        Ok(EcsServiceDeploymentController {
            r#type: self.r#type,
        })
    }
}

impl Block for EcsServiceDeploymentController {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("type", &self.r#type);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            r#type: fields.optional("type")?,
        })
    }
}

/// Output reference to one `deployment_controller` block
#[derive(Debug, Clone)]
pub struct EcsServiceDeploymentControllerOutputReference {
    inner: BlockRef,
}

impl EcsServiceDeploymentControllerOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceDeploymentController> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceDeploymentController>) {
        self.inner.set_internal_value(value);
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

/// `load_balancer` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceLoadBalancer {
    pub container_name: Input<String>,
    pub container_port: Input<f64>,
    pub elb_name: Option<Input<String>>,
    pub target_group_arn: Option<Input<String>>,
}

impl EcsServiceLoadBalancer {
    pub fn builder() -> EcsServiceLoadBalancerBuilder {
        EcsServiceLoadBalancerBuilder::default()
    }
}

/// Builder for [`EcsServiceLoadBalancer`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceLoadBalancerBuilder {
    container_name: Option<Input<String>>,
    container_port: Option<Input<f64>>,
    elb_name: Option<Input<String>>,
    target_group_arn: Option<Input<String>>,
}

impl EcsServiceLoadBalancerBuilder {
    pub fn container_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.container_name = Some(value.into());
        self
    }

    pub fn container_port(mut self, value: impl Into<Input<f64>>) -> Self {
        self.container_port = Some(value.into());
        self
    }

    pub fn elb_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.elb_name = Some(value.into());
        self
    }

    pub fn target_group_arn(mut self, value: impl Into<Input<String>>) -> Self {
        self.target_group_arn = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceLoadBalancer, ConfigError> {
        Ok(EcsServiceLoadBalancer {
            container_name: self.container_name.ok_or_else(|| ConfigError::missing("container_name"))?,
            container_port: self.container_port.ok_or_else(|| ConfigError::missing("container_port"))?,
            elb_name: self.elb_name,
            target_group_arn: self.target_group_arn,
        })
    }
}

impl Block for EcsServiceLoadBalancer {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("container_name", &self.container_name);
        fields.put("container_port", &self.container_port);
        fields.put_opt("elb_name", &self.elb_name);
        fields.put_opt("target_group_arn", &self.target_group_arn);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            container_name: fields.required("container_name")?,
            container_port: fields.required("container_port")?,
            elb_name: fields.optional("elb_name")?,
            target_group_arn: fields.optional("target_group_arn")?,
        })
    }
}

/// Output reference to one `load_balancer` block
#[derive(Debug, Clone)]
pub struct EcsServiceLoadBalancerOutputReference {
    inner: BlockRef,
}

impl EcsServiceLoadBalancerOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceLoadBalancer> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceLoadBalancer>) {
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

    pub fn elb_name(&self) -> Reference {
        self.inner.reference("elb_name")
    }

    pub fn elb_name_input(&self) -> Option<Input<String>> {
        self.inner.input("elb_name")
    }

    pub fn set_elb_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("elb_name", value);
    }

    pub fn reset_elb_name(&self) {
        self.inner.reset("elb_name");
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
pub struct EcsServiceLoadBalancerList {
    inner: ListRef,
}

impl EcsServiceLoadBalancerList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsServiceLoadBalancerOutputReference {
        EcsServiceLoadBalancerOutputReference::new(self.inner.get(index))
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

/// `network_configuration` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceNetworkConfiguration {
    pub assign_public_ip: Option<Input<bool>>,
    pub security_groups: Option<Input<Vec<String>>>,
    pub subnets: Input<Vec<String>>,
}

impl EcsServiceNetworkConfiguration {
    pub fn builder() -> EcsServiceNetworkConfigurationBuilder {
        EcsServiceNetworkConfigurationBuilder::default()
    }
}

/// Builder for [`EcsServiceNetworkConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceNetworkConfigurationBuilder {
    assign_public_ip: Option<Input<bool>>,
    security_groups: Option<Input<Vec<String>>>,
    subnets: Option<Input<Vec<String>>>,
}

impl EcsServiceNetworkConfigurationBuilder {
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

    pub fn build(self) -> Result<EcsServiceNetworkConfiguration, ConfigError> {
        Ok(EcsServiceNetworkConfiguration {
            assign_public_ip: self.assign_public_ip,
            security_groups: self.security_groups,
            subnets: self.subnets.ok_or_else(|| ConfigError::missing("subnets"))?,
        })
    }
}

impl Block for EcsServiceNetworkConfiguration {
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
pub struct EcsServiceNetworkConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsServiceNetworkConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceNetworkConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceNetworkConfiguration>) {
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

/// `ordered_placement_strategy` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceOrderedPlacementStrategy {
    pub field: Option<Input<String>>,
    pub r#type: Input<String>,
}

impl EcsServiceOrderedPlacementStrategy {
    pub fn builder() -> EcsServiceOrderedPlacementStrategyBuilder {
        EcsServiceOrderedPlacementStrategyBuilder::default()
    }
}

/// Builder for [`EcsServiceOrderedPlacementStrategy`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceOrderedPlacementStrategyBuilder {
    field: Option<Input<String>>,
    r#type: Option<Input<String>>,
}

impl EcsServiceOrderedPlacementStrategyBuilder {
    pub fn field(mut self, value: impl Into<Input<String>>) -> Self {
        self.field = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<Input<String>>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceOrderedPlacementStrategy, ConfigError> {
        Ok(EcsServiceOrderedPlacementStrategy {
            field: self.field,
            r#type: self.r#type.ok_or_else(|| ConfigError::missing("type"))?,
        })
    }
}

impl Block for EcsServiceOrderedPlacementStrategy {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("field", &self.field);
        fields.put("type", &self.r#type);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            field: fields.optional("field")?,
            r#type: fields.required("type")?,
        })
    }
}

/// Output reference to one `ordered_placement_strategy` block
#[derive(Debug, Clone)]
pub struct EcsServiceOrderedPlacementStrategyOutputReference {
    inner: BlockRef,
}

impl EcsServiceOrderedPlacementStrategyOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceOrderedPlacementStrategy> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceOrderedPlacementStrategy>) {
        self.inner.set_internal_value(value);
    }

    pub fn field(&self) -> Reference {
        self.inner.reference("field")
    }

    pub fn field_input(&self) -> Option<Input<String>> {
        self.inner.input("field")
    }

    pub fn set_field(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("field", value);
    }

    pub fn reset_field(&self) {
        self.inner.reset("field");
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

/// Instances of the `ordered_placement_strategy` block
#[derive(Debug, Clone)]
pub struct EcsServiceOrderedPlacementStrategyList {
    inner: ListRef,
}

impl EcsServiceOrderedPlacementStrategyList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsServiceOrderedPlacementStrategyOutputReference {
        EcsServiceOrderedPlacementStrategyOutputReference::new(self.inner.get(index))
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

/// `placement_constraints` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServicePlacementConstraints {
    pub expression: Option<Input<String>>,
    pub r#type: Input<String>,
}

impl EcsServicePlacementConstraints {
    pub fn builder() -> EcsServicePlacementConstraintsBuilder {
        EcsServicePlacementConstraintsBuilder::default()
    }
}

/// Builder for [`EcsServicePlacementConstraints`]
#[derive(Debug, Clone, Default)]
pub struct EcsServicePlacementConstraintsBuilder {
    expression: Option<Input<String>>,
    r#type: Option<Input<String>>,
}

impl EcsServicePlacementConstraintsBuilder {
    pub fn expression(mut self, value: impl Into<Input<String>>) -> Self {
        self.expression = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<Input<String>>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServicePlacementConstraints, ConfigError> {
        Ok(EcsServicePlacementConstraints {
            expression: self.expression,
            r#type: self.r#type.ok_or_else(|| ConfigError::missing("type"))?,
        })
    }
}

impl Block for EcsServicePlacementConstraints {
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
pub struct EcsServicePlacementConstraintsOutputReference {
    inner: BlockRef,
}

impl EcsServicePlacementConstraintsOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServicePlacementConstraints> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServicePlacementConstraints>) {
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
pub struct EcsServicePlacementConstraintsList {
    inner: ListRef,
}

impl EcsServicePlacementConstraintsList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsServicePlacementConstraintsOutputReference {
        EcsServicePlacementConstraintsOutputReference::new(self.inner.get(index))
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

/// `service_connect_configuration` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceServiceConnectConfiguration {
    pub enabled: Input<bool>,
    pub namespace: Option<Input<String>>,
    pub log_configuration: Option<EcsServiceServiceConnectConfigurationLogConfiguration>,
    pub service: Vec<EcsServiceServiceConnectConfigurationService>,
}

impl EcsServiceServiceConnectConfiguration {
    pub fn builder() -> EcsServiceServiceConnectConfigurationBuilder {
        EcsServiceServiceConnectConfigurationBuilder::default()
    }
}

/// Builder for [`EcsServiceServiceConnectConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceServiceConnectConfigurationBuilder {
    enabled: Option<Input<bool>>,
    namespace: Option<Input<String>>,
    log_configuration: Option<EcsServiceServiceConnectConfigurationLogConfiguration>,
    service: Vec<EcsServiceServiceConnectConfigurationService>,
}

impl EcsServiceServiceConnectConfigurationBuilder {
    pub fn enabled(mut self, value: impl Into<Input<bool>>) -> Self {
        self.enabled = Some(value.into());
        self
    }

    pub fn namespace(mut self, value: impl Into<Input<String>>) -> Self {
        self.namespace = Some(value.into());
        self
    }

    pub fn log_configuration(mut self, value: EcsServiceServiceConnectConfigurationLogConfiguration) -> Self {
        self.log_configuration = Some(value);
        self
    }

    pub fn service(mut self, value: impl IntoIterator<Item = EcsServiceServiceConnectConfigurationService>) -> Self {
        self.service = value.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<EcsServiceServiceConnectConfiguration, ConfigError> {
        Ok(EcsServiceServiceConnectConfiguration {
            enabled: self.enabled.ok_or_else(|| ConfigError::missing("enabled"))?,
            namespace: self.namespace,
            log_configuration: self.log_configuration,
            service: self.service,
        })
    }
}

impl Block for EcsServiceServiceConnectConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("enabled", &self.enabled);
        fields.put_opt("namespace", &self.namespace);
        fields.put_block("log_configuration", self.log_configuration.as_ref());
        fields.put_blocks("service", &self.service);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: fields.required("enabled")?,
            namespace: fields.optional("namespace")?,
            log_configuration: fields.block("log_configuration")?,
            service: fields.blocks("service")?,
        })
    }
}

/// Output reference to one `service_connect_configuration` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsServiceServiceConnectConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceServiceConnectConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceServiceConnectConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn enabled(&self) -> Reference {
        self.inner.reference("enabled")
    }

    pub fn enabled_input(&self) -> Option<Input<bool>> {
        self.inner.input("enabled")
    }

    pub fn set_enabled(&self, value: impl Into<Input<bool>>) {
        let value: Input<bool> = value.into();
        self.inner.set("enabled", value);
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

    pub fn reset_namespace(&self) {
        self.inner.reset("namespace");
    }

    pub fn log_configuration(&self) -> EcsServiceServiceConnectConfigurationLogConfigurationOutputReference {
        EcsServiceServiceConnectConfigurationLogConfigurationOutputReference::new(self.inner.block("log_configuration", false))
    }

    pub fn put_log_configuration(&self, value: &EcsServiceServiceConnectConfigurationLogConfiguration) {
        self.inner.put("log_configuration", value);
    }

    pub fn log_configuration_input(&self) -> Option<EcsServiceServiceConnectConfigurationLogConfiguration> {
        self.inner.block_input("log_configuration")
    }

    pub fn reset_log_configuration(&self) {
        self.inner.reset("log_configuration");
    }

    pub fn service(&self) -> EcsServiceServiceConnectConfigurationServiceList {
        EcsServiceServiceConnectConfigurationServiceList::new(self.inner.list("service", false))
    }

    pub fn put_service(&self, value: &[EcsServiceServiceConnectConfigurationService]) {
        self.inner.put_all("service", value);
    }

    pub fn service_input(&self) -> Option<Vec<EcsServiceServiceConnectConfigurationService>> {
        self.inner.blocks_input("service")
    }

    pub fn reset_service(&self) {
        self.inner.reset("service");
    }
}

/// `log_configuration` block of [`EcsServiceServiceConnectConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceServiceConnectConfigurationLogConfiguration {
    pub log_driver: Input<String>,
    pub options: Option<Input<BTreeMap<String, String>>>,
    pub secret_option: Vec<EcsServiceServiceConnectConfigurationLogConfigurationSecretOption>,
}

impl EcsServiceServiceConnectConfigurationLogConfiguration {
    pub fn builder() -> EcsServiceServiceConnectConfigurationLogConfigurationBuilder {
        EcsServiceServiceConnectConfigurationLogConfigurationBuilder::default()
    }
}

/// Builder for [`EcsServiceServiceConnectConfigurationLogConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceServiceConnectConfigurationLogConfigurationBuilder {
    log_driver: Option<Input<String>>,
    options: Option<Input<BTreeMap<String, String>>>,
    secret_option: Vec<EcsServiceServiceConnectConfigurationLogConfigurationSecretOption>,
}

impl EcsServiceServiceConnectConfigurationLogConfigurationBuilder {
    pub fn log_driver(mut self, value: impl Into<Input<String>>) -> Self {
        self.log_driver = Some(value.into());
        self
    }

    pub fn options(mut self, value: impl Into<Input<BTreeMap<String, String>>>) -> Self {
        self.options = Some(value.into());
        self
    }

    pub fn secret_option(mut self, value: impl IntoIterator<Item = EcsServiceServiceConnectConfigurationLogConfigurationSecretOption>) -> Self {
        self.secret_option = value.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<EcsServiceServiceConnectConfigurationLogConfiguration, ConfigError> {
        Ok(EcsServiceServiceConnectConfigurationLogConfiguration {
            log_driver: self.log_driver.ok_or_else(|| ConfigError::missing("log_driver"))?,
            options: self.options,
            secret_option: self.secret_option,
        })
    }
}

impl Block for EcsServiceServiceConnectConfigurationLogConfiguration {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("log_driver", &self.log_driver);
        fields.put_opt("options", &self.options);
        fields.put_blocks("secret_option", &self.secret_option);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            log_driver: fields.required("log_driver")?,
            options: fields.optional("options")?,
            secret_option: fields.blocks("secret_option")?,
        })
    }
}

/// Output reference to one `log_configuration` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationLogConfigurationOutputReference {
    inner: BlockRef,
}

impl EcsServiceServiceConnectConfigurationLogConfigurationOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceServiceConnectConfigurationLogConfiguration> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceServiceConnectConfigurationLogConfiguration>) {
        self.inner.set_internal_value(value);
    }

    pub fn log_driver(&self) -> Reference {
        self.inner.reference("log_driver")
    }

    pub fn log_driver_input(&self) -> Option<Input<String>> {
        self.inner.input("log_driver")
    }

    pub fn set_log_driver(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("log_driver", value);
    }

    pub fn options(&self) -> Reference {
        self.inner.reference("options")
    }

    pub fn options_input(&self) -> Option<Input<BTreeMap<String, String>>> {
        self.inner.input("options")
    }

    pub fn set_options(&self, value: impl Into<Input<BTreeMap<String, String>>>) {
        let value: Input<BTreeMap<String, String>> = value.into();
        self.inner.set("options", value);
    }

    pub fn reset_options(&self) {
        self.inner.reset("options");
    }

    pub fn secret_option(&self) -> EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionList {
        EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionList::new(self.inner.list("secret_option", false))
    }

    pub fn put_secret_option(&self, value: &[EcsServiceServiceConnectConfigurationLogConfigurationSecretOption]) {
        self.inner.put_all("secret_option", value);
    }

    pub fn secret_option_input(&self) -> Option<Vec<EcsServiceServiceConnectConfigurationLogConfigurationSecretOption>> {
        self.inner.blocks_input("secret_option")
    }

    pub fn reset_secret_option(&self) {
        self.inner.reset("secret_option");
    }
}

/// `secret_option` block of [`EcsServiceServiceConnectConfigurationLogConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceServiceConnectConfigurationLogConfigurationSecretOption {
    pub name: Input<String>,
    pub value_from: Input<String>,
}

impl EcsServiceServiceConnectConfigurationLogConfigurationSecretOption {
    pub fn builder() -> EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionBuilder {
        EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionBuilder::default()
    }
}

/// Builder for [`EcsServiceServiceConnectConfigurationLogConfigurationSecretOption`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionBuilder {
    name: Option<Input<String>>,
    value_from: Option<Input<String>>,
}

impl EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionBuilder {
    pub fn name(mut self, value: impl Into<Input<String>>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn value_from(mut self, value: impl Into<Input<String>>) -> Self {
        self.value_from = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceServiceConnectConfigurationLogConfigurationSecretOption, ConfigError> {
        Ok(EcsServiceServiceConnectConfigurationLogConfigurationSecretOption {
            name: self.name.ok_or_else(|| ConfigError::missing("name"))?,
            value_from: self.value_from.ok_or_else(|| ConfigError::missing("value_from"))?,
        })
    }
}

impl Block for EcsServiceServiceConnectConfigurationLogConfigurationSecretOption {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("name", &self.name);
        fields.put("value_from", &self.value_from);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            name: fields.required("name")?,
            value_from: fields.required("value_from")?,
        })
    }
}

/// Output reference to one `secret_option` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionOutputReference {
    inner: BlockRef,
}

impl EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceServiceConnectConfigurationLogConfigurationSecretOption> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceServiceConnectConfigurationLogConfigurationSecretOption>) {
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

    pub fn value_from(&self) -> Reference {
        self.inner.reference("value_from")
    }

    pub fn value_from_input(&self) -> Option<Input<String>> {
        self.inner.input("value_from")
    }

    pub fn set_value_from(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("value_from", value);
    }
}

/// Instances of the `secret_option` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionList {
    inner: ListRef,
}

impl EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionOutputReference {
        EcsServiceServiceConnectConfigurationLogConfigurationSecretOptionOutputReference::new(self.inner.get(index))
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

/// `service` block of [`EcsServiceServiceConnectConfiguration`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceServiceConnectConfigurationService {
    pub discovery_name: Option<Input<String>>,
    pub ingress_port_override: Option<Input<f64>>,
    pub port_name: Input<String>,
    pub client_alias: Option<EcsServiceServiceConnectConfigurationServiceClientAlias>,
}

impl EcsServiceServiceConnectConfigurationService {
    pub fn builder() -> EcsServiceServiceConnectConfigurationServiceBuilder {
        EcsServiceServiceConnectConfigurationServiceBuilder::default()
    }
}

/// Builder for [`EcsServiceServiceConnectConfigurationService`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceServiceConnectConfigurationServiceBuilder {
    discovery_name: Option<Input<String>>,
    ingress_port_override: Option<Input<f64>>,
    port_name: Option<Input<String>>,
    client_alias: Option<EcsServiceServiceConnectConfigurationServiceClientAlias>,
}

impl EcsServiceServiceConnectConfigurationServiceBuilder {
    pub fn discovery_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.discovery_name = Some(value.into());
        self
    }

    pub fn ingress_port_override(mut self, value: impl Into<Input<f64>>) -> Self {
        self.ingress_port_override = Some(value.into());
        self
    }

    pub fn port_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.port_name = Some(value.into());
        self
    }

    pub fn client_alias(mut self, value: EcsServiceServiceConnectConfigurationServiceClientAlias) -> Self {
        self.client_alias = Some(value);
        self
    }

    pub fn build(self) -> Result<EcsServiceServiceConnectConfigurationService, ConfigError> {
        Ok(EcsServiceServiceConnectConfigurationService {
            discovery_name: self.discovery_name,
            ingress_port_override: self.ingress_port_override,
            port_name: self.port_name.ok_or_else(|| ConfigError::missing("port_name"))?,
            client_alias: self.client_alias,
        })
    }
}

impl Block for EcsServiceServiceConnectConfigurationService {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("discovery_name", &self.discovery_name);
        fields.put_opt("ingress_port_override", &self.ingress_port_override);
        fields.put("port_name", &self.port_name);
        fields.put_block("client_alias", self.client_alias.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            discovery_name: fields.optional("discovery_name")?,
            ingress_port_override: fields.optional("ingress_port_override")?,
            port_name: fields.required("port_name")?,
            client_alias: fields.block("client_alias")?,
        })
    }
}

/// Output reference to one `service` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationServiceOutputReference {
    inner: BlockRef,
}

impl EcsServiceServiceConnectConfigurationServiceOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceServiceConnectConfigurationService> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceServiceConnectConfigurationService>) {
        self.inner.set_internal_value(value);
    }

    pub fn discovery_name(&self) -> Reference {
        self.inner.reference("discovery_name")
    }

    pub fn discovery_name_input(&self) -> Option<Input<String>> {
        self.inner.input("discovery_name")
    }

    pub fn set_discovery_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("discovery_name", value);
    }

    pub fn reset_discovery_name(&self) {
        self.inner.reset("discovery_name");
    }

    pub fn ingress_port_override(&self) -> Reference {
        self.inner.reference("ingress_port_override")
    }

    pub fn ingress_port_override_input(&self) -> Option<Input<f64>> {
        self.inner.input("ingress_port_override")
    }

    pub fn set_ingress_port_override(&self, value: impl Into<Input<f64>>) {
        let value: Input<f64> = value.into();
        self.inner.set("ingress_port_override", value);
    }

    pub fn reset_ingress_port_override(&self) {
        self.inner.reset("ingress_port_override");
    }

    pub fn port_name(&self) -> Reference {
        self.inner.reference("port_name")
    }

    pub fn port_name_input(&self) -> Option<Input<String>> {
        self.inner.input("port_name")
    }

    pub fn set_port_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("port_name", value);
    }

    pub fn client_alias(&self) -> EcsServiceServiceConnectConfigurationServiceClientAliasOutputReference {
        EcsServiceServiceConnectConfigurationServiceClientAliasOutputReference::new(self.inner.block("client_alias", false))
    }

    pub fn put_client_alias(&self, value: &EcsServiceServiceConnectConfigurationServiceClientAlias) {
        self.inner.put("client_alias", value);
    }

    pub fn client_alias_input(&self) -> Option<EcsServiceServiceConnectConfigurationServiceClientAlias> {
        self.inner.block_input("client_alias")
    }

    pub fn reset_client_alias(&self) {
        self.inner.reset("client_alias");
    }
}

/// Instances of the `service` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationServiceList {
    inner: ListRef,
}

impl EcsServiceServiceConnectConfigurationServiceList {
    pub fn new(inner: ListRef) -> Self {
        Self { inner }
    }

    /// View of the instance at `index`
    pub fn get(&self, index: usize) -> EcsServiceServiceConnectConfigurationServiceOutputReference {
        EcsServiceServiceConnectConfigurationServiceOutputReference::new(self.inner.get(index))
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

/// `client_alias` block of [`EcsServiceServiceConnectConfigurationService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceServiceConnectConfigurationServiceClientAlias {
    pub dns_name: Option<Input<String>>,
    pub port: Input<f64>,
}

impl EcsServiceServiceConnectConfigurationServiceClientAlias {
    pub fn builder() -> EcsServiceServiceConnectConfigurationServiceClientAliasBuilder {
        EcsServiceServiceConnectConfigurationServiceClientAliasBuilder::default()
    }
}

/// Builder for [`EcsServiceServiceConnectConfigurationServiceClientAlias`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceServiceConnectConfigurationServiceClientAliasBuilder {
    dns_name: Option<Input<String>>,
    port: Option<Input<f64>>,
}

impl EcsServiceServiceConnectConfigurationServiceClientAliasBuilder {
    pub fn dns_name(mut self, value: impl Into<Input<String>>) -> Self {
        self.dns_name = Some(value.into());
        self
    }

    pub fn port(mut self, value: impl Into<Input<f64>>) -> Self {
        self.port = Some(value.into());
        self
    }

    pub fn build(self) -> Result<EcsServiceServiceConnectConfigurationServiceClientAlias, ConfigError> {
        Ok(EcsServiceServiceConnectConfigurationServiceClientAlias {
            dns_name: self.dns_name,
            port: self.port.ok_or_else(|| ConfigError::missing("port"))?,
        })
    }
}

impl Block for EcsServiceServiceConnectConfigurationServiceClientAlias {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("dns_name", &self.dns_name);
        fields.put("port", &self.port);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            dns_name: fields.optional("dns_name")?,
            port: fields.required("port")?,
        })
    }
}

/// Output reference to one `client_alias` block
#[derive(Debug, Clone)]
pub struct EcsServiceServiceConnectConfigurationServiceClientAliasOutputReference {
    inner: BlockRef,
}

impl EcsServiceServiceConnectConfigurationServiceClientAliasOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceServiceConnectConfigurationServiceClientAlias> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceServiceConnectConfigurationServiceClientAlias>) {
        self.inner.set_internal_value(value);
    }

    pub fn dns_name(&self) -> Reference {
        self.inner.reference("dns_name")
    }

    pub fn dns_name_input(&self) -> Option<Input<String>> {
        self.inner.input("dns_name")
    }

    pub fn set_dns_name(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.inner.set("dns_name", value);
    }

    pub fn reset_dns_name(&self) {
        self.inner.reset("dns_name");
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
}

/// `service_registries` block of [`EcsService`]
#[derive(Debug, Clone, PartialEq)]
pub struct EcsServiceServiceRegistries {
    pub container_name: Option<Input<String>>,
    pub container_port: Option<Input<f64>>,
    pub port: Option<Input<f64>>,
    pub registry_arn: Input<String>,
}

impl EcsServiceServiceRegistries {
    pub fn builder() -> EcsServiceServiceRegistriesBuilder {
        EcsServiceServiceRegistriesBuilder::default()
    }
}

/// Builder for [`EcsServiceServiceRegistries`]
#[derive(Debug, Clone, Default)]
pub struct EcsServiceServiceRegistriesBuilder {
    container_name: Option<Input<String>>,
    container_port: Option<Input<f64>>,
    port: Option<Input<f64>>,
    registry_arn: Option<Input<String>>,
}

impl EcsServiceServiceRegistriesBuilder {
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

    pub fn build(self) -> Result<EcsServiceServiceRegistries, ConfigError> {
        Ok(EcsServiceServiceRegistries {
            container_name: self.container_name,
            container_port: self.container_port,
            port: self.port,
            registry_arn: self.registry_arn.ok_or_else(|| ConfigError::missing("registry_arn"))?,
        })
    }
}

impl Block for EcsServiceServiceRegistries {
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
pub struct EcsServiceServiceRegistriesOutputReference {
    inner: BlockRef,
}

impl EcsServiceServiceRegistriesOutputReference {
    pub fn new(inner: BlockRef) -> Self {
        Self { inner }
    }

    pub fn internal_value(&self) -> Option<EcsServiceServiceRegistries> {
        self.inner.internal_value()
    }

    pub fn set_internal_value(&self, value: Option<&EcsServiceServiceRegistries>) {
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
