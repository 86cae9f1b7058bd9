use berth_core::{
    Block, ConfigError, Fields, Input, Lifecycle, MetaArguments, ResourceKind, Settings, Stack,
    StackError, TerraformElement, Value,
};
use berth_provider_aws::data_sources::data_aws_ecs_cluster::{
    DataAwsEcsCluster, DataAwsEcsClusterConfig,
};
use berth_provider_aws::resources::ecs_cluster::{
    EcsCluster, EcsClusterConfig, EcsClusterConfiguration,
    EcsClusterConfigurationExecuteCommandConfiguration, EcsClusterSetting,
};
use berth_provider_aws::resources::ecs_service::{
    EcsServiceConfig, EcsServiceDeploymentCircuitBreaker, EcsServiceLoadBalancer,
    EcsServiceNetworkConfiguration, EcsServiceOrderedPlacementStrategy,
    EcsServiceServiceConnectConfiguration, EcsServiceServiceConnectConfigurationService,
    EcsServiceServiceConnectConfigurationServiceClientAlias, EcsService,
};
use berth_provider_aws::resources::ecs_task_definition::{
    EcsTaskDefinition, EcsTaskDefinitionConfig, EcsTaskDefinitionVolume,
    EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration,
};
use serde_json::json;

fn stack() -> Stack {
    let mut stack = Stack::with_settings("app", Settings::default().emit_metadata(false));
    berth_provider_aws::configure(&mut stack);
    stack
}

fn load_balancer(container: &str, port: i32) -> EcsServiceLoadBalancer {
    EcsServiceLoadBalancer::builder()
        .container_name(container)
        .container_port(port)
        .target_group_arn("arn:aws:elasticloadbalancing:tg/web")
        .build()
        .unwrap()
}

fn service_config(cluster: &EcsCluster) -> EcsServiceConfig {
    EcsServiceConfig::builder()
        .name("web")
        .cluster(cluster.id())
        .desired_count(2)
        .launch_type("FARGATE")
        .load_balancer([load_balancer("web", 80), load_balancer("admin", 8080)])
        .network_configuration(
            EcsServiceNetworkConfiguration::builder()
                .subnets(["subnet-a", "subnet-b"])
                .assign_public_ip(false)
                .build()
                .unwrap(),
        )
        .ordered_placement_strategy([EcsServiceOrderedPlacementStrategy::builder()
            .r#type("spread")
            .field("attribute:ecs.availability-zone")
            .build()
            .unwrap()])
        .build()
        .unwrap()
}

fn cluster(stack: &mut Stack) -> EcsCluster {
    let config = EcsClusterConfig::builder().name("demo").build().unwrap();
    EcsCluster::new(stack, "main", config).unwrap()
}

#[test]
fn cluster_with_only_name_leaves_optionals_unset() {
    let config = EcsClusterConfig::builder().name("demo").build().unwrap();
    let fields = config.to_fields();
    assert_eq!(fields.as_map().keys().collect::<Vec<_>>(), vec!["name"]);
    assert!(config.capacity_providers.is_none());
    assert!(config.tags.is_none());
    assert!(config.setting.is_empty());

    let mut stack = stack();
    let cluster = EcsCluster::new(&mut stack, "main", config).unwrap();
    assert_eq!(cluster.name_input(), Some(Input::Literal("demo".to_string())));
    assert_eq!(cluster.capacity_providers_input(), None);
    assert_eq!(cluster.tags_input(), None);
    assert_eq!(cluster.configuration_input(), None);
}

#[test]
fn service_without_name_is_rejected() {
    let err = EcsServiceConfig::builder()
        .desired_count(1)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::missing("name"));
    assert_eq!(err.to_string(), "Required property 'name' is missing");
}

#[test]
fn nested_required_fields_are_checked() {
    let err = EcsServiceNetworkConfiguration::builder()
        .assign_public_ip(true)
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Required property 'subnets' is missing");

    let err = EcsTaskDefinitionVolumeFsxWindowsFileServerVolumeConfiguration::builder()
        .file_system_id("fs-1")
        .root_directory("\\data")
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Required property 'authorization_config' is missing"
    );
}

#[test]
fn configs_compare_by_value() {
    let a = EcsClusterConfig::builder()
        .name("demo")
        .tags([("env", "prod")])
        .build()
        .unwrap();
    let b = EcsClusterConfig::builder()
        .name("demo")
        .tags([("env", "prod")])
        .build()
        .unwrap();
    assert_eq!(a, b);

    let c = EcsClusterConfig::builder()
        .name("demo")
        .tags([("env", "dev")])
        .build()
        .unwrap();
    assert_ne!(a, c);

    let d = EcsClusterConfig::builder().name("other").build().unwrap();
    assert_ne!(a, d);
}

#[test]
fn reset_returns_inputs_to_unset() {
    let mut stack = stack();
    let cluster = cluster(&mut stack);

    cluster.set_tags([("team", "platform")]);
    assert!(cluster.tags_input().is_some());
    cluster.reset_tags();
    assert_eq!(cluster.tags_input(), None);
    assert!(!cluster.element().fields().contains_key("tags"));

    cluster.put_configuration(
        &EcsClusterConfiguration::builder()
            .execute_command_configuration(
                EcsClusterConfigurationExecuteCommandConfiguration::builder()
                    .logging("DEFAULT")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap(),
    );
    assert!(cluster.configuration_input().is_some());
    cluster.reset_configuration();
    assert_eq!(cluster.configuration_input(), None);

    cluster.put_setting(&[EcsClusterSetting::builder()
        .name("containerInsights")
        .value("enabled")
        .build()
        .unwrap()]);
    assert_eq!(cluster.setting().len(), 1);
    cluster.reset_setting();
    assert!(cluster.setting().is_empty());
}

#[test]
fn list_get_reads_each_instance() {
    let mut stack = stack();
    let cluster = cluster(&mut stack);
    let service = EcsService::new(&mut stack, "web", service_config(&cluster)).unwrap();

    let balancers = service.load_balancer();
    assert!(balancers.wraps_set());
    assert_eq!(balancers.len(), 2);
    assert_eq!(
        balancers.get(0).container_name_input(),
        Some(Input::Literal("web".to_string()))
    );
    assert_eq!(
        balancers.get(1).container_port_input(),
        Some(Input::Literal(8080.0))
    );
    assert_eq!(
        balancers.get(1).container_port().to_string(),
        "${tolist(aws_ecs_service.web.load_balancer)[1].container_port}"
    );

    let strategies = service.ordered_placement_strategy();
    assert!(!strategies.wraps_set());
    assert_eq!(
        strategies.get(0).r#type().to_string(),
        "${aws_ecs_service.web.ordered_placement_strategy[0].type}"
    );
    assert_eq!(
        strategies.get(0).type_input(),
        Some(Input::Literal("spread".to_string()))
    );

    // past the end: unset input, reference still renders
    assert_eq!(strategies.get(3).field_input(), None);
    assert_eq!(
        strategies.get(3).field().to_string(),
        "${aws_ecs_service.web.ordered_placement_strategy[3].field}"
    );
}

#[test]
fn output_reference_setters_write_into_the_block() {
    let mut stack = stack();
    let cluster = cluster(&mut stack);
    let service = EcsService::new(&mut stack, "web", service_config(&cluster)).unwrap();

    let network = service.network_configuration();
    network.set_security_groups(["sg-1"]);
    assert_eq!(
        network.security_groups_input(),
        Some(Input::Literal(vec!["sg-1".to_string()]))
    );
    network.reset_assign_public_ip();
    assert_eq!(network.assign_public_ip_input(), None);

    let value = network.internal_value().unwrap();
    assert_eq!(
        value.subnets,
        Input::Literal(vec!["subnet-a".to_string(), "subnet-b".to_string()])
    );
    assert_eq!(
        service.network_configuration_input(),
        Some(value.clone())
    );

    service.load_balancer().get(0).set_container_port(443);
    assert_eq!(
        service.load_balancer().get(0).container_port_input(),
        Some(Input::Literal(443.0))
    );
}

#[test]
fn nested_references_follow_block_paths() {
    let mut stack = stack();
    let cluster = cluster(&mut stack);
    let reference = cluster
        .configuration()
        .execute_command_configuration()
        .log_configuration()
        .s3_bucket_name();
    assert_eq!(
        reference.to_string(),
        "${aws_ecs_cluster.main.configuration[0].execute_command_configuration[0].log_configuration[0].s3_bucket_name}"
    );

    let setting = cluster.setting().get(0).value();
    assert_eq!(
        setting.to_string(),
        "${tolist(aws_ecs_cluster.main.setting)[0].value}"
    );
    assert_eq!(cluster.arn().to_string(), "${aws_ecs_cluster.main.arn}");
}

#[test]
fn configs_round_trip_through_json() {
    let mut stack = stack();
    let cluster = cluster(&mut stack);
    let config = EcsServiceConfig::builder()
        .name("web")
        .cluster(cluster.id())
        .desired_count(3)
        .deployment_circuit_breaker(
            EcsServiceDeploymentCircuitBreaker::builder()
                .enable(true)
                .rollback(true)
                .build()
                .unwrap(),
        )
        .service_connect_configuration(
            EcsServiceServiceConnectConfiguration::builder()
                .enabled(true)
                .namespace("internal")
                .service([EcsServiceServiceConnectConfigurationService::builder()
                    .port_name("http")
                    .client_alias(
                        EcsServiceServiceConnectConfigurationServiceClientAlias::builder()
                            .port(8080)
                            .dns_name("web.internal")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap()])
                .build()
                .unwrap(),
        )
        .network_configuration(
            EcsServiceNetworkConfiguration::builder()
                .subnets(vec![cluster.id().to_string(), "subnet-b".to_string()])
                .build()
                .unwrap(),
        )
        .tags([("env", "prod")])
        .build()
        .unwrap();

    let json = config.to_value().to_json();
    assert_eq!(
        json["network_configuration"][0]["subnets"],
        json!(["${aws_ecs_cluster.main.id}", "subnet-b"])
    );
    assert_eq!(json["cluster"], "${aws_ecs_cluster.main.id}");

    let Value::Map(map) = Value::from_json(&json).unwrap() else {
        panic!("config serializes to an object");
    };
    let restored = EcsServiceConfig::from_fields(&Fields::from_map(map)).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn from_fields_reports_type_mismatches() {
    let mut fields = Fields::new();
    fields.put("name", &"web".to_string());
    fields.put("desired_count", &"two".to_string());
    let err = EcsServiceConfig::from_fields(&fields).unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { .. }));
}

#[test]
fn task_definition_with_volumes() {
    let mut stack = stack();
    let config = EcsTaskDefinitionConfig::builder()
        .family("web")
        .container_definitions(r#"[{"name":"web","image":"nginx"}]"#)
        .requires_compatibilities(["FARGATE"])
        .cpu("256")
        .memory("512")
        .volume([EcsTaskDefinitionVolume::builder()
            .name("scratch")
            .build()
            .unwrap()])
        .build()
        .unwrap();
    let task = EcsTaskDefinition::new(&mut stack, "web", config).unwrap();
    assert_eq!(task.revision().to_string(), "${aws_ecs_task_definition.web.revision}");
    assert_eq!(
        task.volume().get(0).name_input(),
        Some(Input::Literal("scratch".to_string()))
    );
    assert_eq!(task.volume().get(0).efs_volume_configuration_input(), None);
}

#[test]
fn type_check_enforces_block_limits() {
    let strategies: Vec<EcsServiceOrderedPlacementStrategy> = (0..6)
        .map(|_| {
            EcsServiceOrderedPlacementStrategy::builder()
                .r#type("binpack")
                .build()
                .unwrap()
        })
        .collect();
    let config = EcsServiceConfig::builder()
        .name("web")
        .ordered_placement_strategy(strategies)
        .build()
        .unwrap();

    let mut unchecked = stack();
    assert!(EcsService::new(&mut unchecked, "web", config.clone()).is_ok());

    let mut checked = Stack::with_settings("app", Settings::default().type_check(true));
    let err = EcsService::new(&mut checked, "web", config).unwrap_err();
    assert!(matches!(err, StackError::Validation { .. }));
    assert!(checked.is_empty());
}

#[test]
fn data_source_exposes_computed_views() {
    let mut stack = stack();
    let config = DataAwsEcsClusterConfig::builder()
        .cluster_name("shared")
        .build()
        .unwrap();
    let shared = DataAwsEcsCluster::new(&mut stack, "shared", config).unwrap();

    assert_eq!(shared.element().kind(), ResourceKind::DataSource);
    assert_eq!(
        shared.status().to_string(),
        "${data.aws_ecs_cluster.shared.status}"
    );
    assert_eq!(
        shared.setting().get(0).name().to_string(),
        "${tolist(data.aws_ecs_cluster.shared.setting)[0].name}"
    );
    assert_eq!(
        shared.service_connect_defaults().get(0).namespace().to_string(),
        "${data.aws_ecs_cluster.shared.service_connect_defaults[0].namespace}"
    );
    assert!(shared.setting().is_empty());
}

#[test]
fn synthesizes_a_small_stack() {
    let mut stack = stack();
    let shared = DataAwsEcsCluster::new(
        &mut stack,
        "shared",
        DataAwsEcsClusterConfig::builder()
            .cluster_name("shared")
            .build()
            .unwrap(),
    )
    .unwrap();

    let cluster = cluster(&mut stack);
    cluster.set_lifecycle(Lifecycle {
        prevent_destroy: Some(true),
        ..Lifecycle::default()
    });

    let service = EcsService::new(
        &mut stack,
        "web",
        EcsServiceConfig::builder()
            .name("web")
            .cluster(shared.arn())
            .desired_count(1)
            .meta(MetaArguments::new().provider("aws.west"))
            .build()
            .unwrap(),
    )
    .unwrap();
    service.depends_on(&cluster);
    service.set_count(2);

    let doc = stack.synth().unwrap();
    assert_eq!(
        doc["terraform"]["required_providers"]["aws"],
        json!({"source": "hashicorp/aws", "version": "~> 4.0"})
    );
    assert_eq!(
        doc["data"]["aws_ecs_cluster"]["shared"],
        json!({"cluster_name": "shared"})
    );
    assert_eq!(
        doc["resource"]["aws_ecs_cluster"]["main"],
        json!({"name": "demo", "lifecycle": {"prevent_destroy": true}})
    );
    assert_eq!(
        doc["resource"]["aws_ecs_service"]["web"],
        json!({
            "name": "web",
            "cluster": "${data.aws_ecs_cluster.shared.arn}",
            "desired_count": 1,
            "count": 2,
            "depends_on": ["aws_ecs_cluster.main"],
            "provider": "aws.west"
        })
    );
}
