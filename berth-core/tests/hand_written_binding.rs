//! A binding written by hand against the core API, the way generated ones are

use berth_core::{
    AttributeSchema, AttributeType, Block, BlockRef, BlockSchema, ConfigError, Fields, Input,
    MetaArguments, NestingMode, Reference, ResourceHandle, ResourceKind, ResourceSchema, Settings,
    Stack, StackError, TerraformElement, Value,
};
use serde_json::json;

fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_ecs_tag")
        .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
        .attribute(AttributeSchema::new("id", AttributeType::String).computed())
        .attribute(AttributeSchema::new("key", AttributeType::String).required())
        .attribute(AttributeSchema::new("resource_arn", AttributeType::String).required())
        .attribute(AttributeSchema::new("value", AttributeType::String))
        .block(
            BlockSchema::new("timeouts", NestingMode::List)
                .max_items(1)
                .attribute(AttributeSchema::new("create", AttributeType::String)),
        )
}

#[derive(Debug, Clone, PartialEq)]
struct Timeouts {
    create: Option<Input<String>>,
}

impl Block for Timeouts {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put_opt("create", &self.create);
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            create: fields.optional("create")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TagConfig {
    key: Input<String>,
    resource_arn: Input<String>,
    value: Option<Input<String>>,
    timeouts: Option<Timeouts>,
}

impl Block for TagConfig {
    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.put("key", &self.key);
        fields.put("resource_arn", &self.resource_arn);
        fields.put_opt("value", &self.value);
        fields.put_block("timeouts", self.timeouts.as_ref());
        fields
    }

    fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
        Ok(Self {
            key: fields.required("key")?,
            resource_arn: fields.required("resource_arn")?,
            value: fields.optional("value")?,
            timeouts: fields.block("timeouts")?,
        })
    }
}

struct Tag {
    element: ResourceHandle,
}

impl Tag {
    fn new(stack: &mut Stack, id: &str, config: TagConfig) -> Result<Self, StackError> {
        let element = stack.register(
            ResourceKind::Resource,
            "aws_ecs_tag",
            id,
            config.to_fields().into_map(),
            MetaArguments::default(),
            &schema(),
        )?;
        Ok(Self { element })
    }

    fn root(&self) -> BlockRef {
        BlockRef::root(self.element.clone())
    }

    fn id(&self) -> Reference {
        self.root().reference("id")
    }

    fn value_input(&self) -> Option<Input<String>> {
        self.root().input("value")
    }

    fn set_value(&self, value: impl Into<Input<String>>) {
        let value: Input<String> = value.into();
        self.root().set("value", value);
    }

    fn reset_value(&self) {
        self.root().reset("value");
    }

    fn timeouts_input(&self) -> Option<Timeouts> {
        self.root().block_input("timeouts")
    }
}

impl TerraformElement for Tag {
    fn element(&self) -> &ResourceHandle {
        &self.element
    }
}

fn config(key: &str) -> TagConfig {
    TagConfig {
        key: key.into(),
        resource_arn: Reference::raw("aws_ecs_cluster.main.arn").into(),
        value: Some("platform".into()),
        timeouts: None,
    }
}

#[test]
fn register_read_and_reset() {
    let mut stack = Stack::new("app");
    let tag = Tag::new(&mut stack, "team", config("team")).unwrap();

    assert_eq!(tag.value_input(), Some(Input::Literal("platform".to_string())));
    tag.set_value("infra");
    assert_eq!(tag.value_input(), Some(Input::Literal("infra".to_string())));
    tag.reset_value();
    assert_eq!(tag.value_input(), None);
    assert_eq!(tag.id().to_string(), "${aws_ecs_tag.team.id}");
    assert_eq!(tag.timeouts_input(), None);

    tag.root().put(
        "timeouts",
        &Timeouts {
            create: Some("5m".into()),
        },
    );
    assert_eq!(
        tag.timeouts_input().and_then(|t| t.create),
        Some(Input::Literal("5m".to_string()))
    );
}

#[test]
fn duplicate_and_invalid_ids_are_rejected() {
    let mut stack = Stack::new("app");
    Tag::new(&mut stack, "team", config("team")).unwrap();

    let err = Tag::new(&mut stack, "team", config("team")).err().unwrap();
    assert!(matches!(err, StackError::DuplicateId { .. }));

    let err = Tag::new(&mut stack, "9lives", config("x")).err().unwrap();
    assert!(matches!(err, StackError::InvalidId { .. }));
    assert_eq!(stack.len(), 1);
}

#[test]
fn type_check_rejects_computed_and_unknown_fields() {
    let mut stack = Stack::with_settings("app", Settings::default().type_check(true));
    let mut fields = config("team").to_fields().into_map();
    fields.insert("arn".to_string(), Value::String("x".to_string()));
    fields.insert("colour".to_string(), Value::Bool(true));

    let err = stack
        .register(
            ResourceKind::Resource,
            "aws_ecs_tag",
            "team",
            fields,
            MetaArguments::default(),
            &schema(),
        )
        .unwrap_err();
    let StackError::Validation { errors, .. } = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 2);
}

#[test]
fn synthesized_document_round_trips_through_serde() {
    let mut stack = Stack::with_settings("app", Settings::default().emit_metadata(false));
    stack.required_provider("aws", "hashicorp/aws", Some("~> 4.0"));
    let tag = Tag::new(&mut stack, "team", config("team")).unwrap();
    tag.set_count(Reference::raw("length(var.teams)"));

    let text = stack.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed["resource"]["aws_ecs_tag"]["team"],
        json!({
            "key": "team",
            "resource_arn": "${aws_ecs_cluster.main.arn}",
            "value": "platform",
            "count": "${length(var.teams)}"
        })
    );
}
