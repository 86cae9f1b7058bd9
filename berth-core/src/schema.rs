//! Schema - Define type schemas for resources and data sources
//!
//! Generated bindings describe every element type with a [`ResourceSchema`]
//! mirroring the provider's published schema: attributes, nested blocks
//! and their nesting modes.

use std::collections::BTreeMap;
use std::fmt;

use crate::resource::{ResourceKind, Value};

/// Attribute type
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Number,
    Bool,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>),
    /// Object with a fixed set of typed fields
    Object(BTreeMap<String, AttributeType>),
    /// Any value; checked by the engine only
    Dynamic,
}

impl AttributeType {
    /// Build an object type from `(field, type)` pairs
    pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, AttributeType)>) -> Self {
        AttributeType::Object(
            fields
                .into_iter()
                .map(|(name, t)| (name.to_string(), t))
                .collect(),
        )
    }

    /// Check if a value conforms to this type
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        match (self, value) {
            // References are resolved by the engine, so they fit any type
            (_, Value::Ref(_)) => Ok(()),
            (AttributeType::Dynamic, _) => Ok(()),
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Number, Value::Number(_)) => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::List(inner) | AttributeType::Set(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Object(fields), Value::Map(map)) => {
                for (k, v) in map {
                    let Some(field_type) = fields.get(k) else {
                        return Err(TypeError::UnknownAttribute { name: k.clone() });
                    };
                    field_type.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "string".to_string(),
            AttributeType::Number => "number".to_string(),
            AttributeType::Bool => "bool".to_string(),
            AttributeType::List(inner) => format!("list({})", inner.type_name()),
            AttributeType::Set(inner) => format!("set({})", inner.type_name()),
            AttributeType::Map(inner) => format!("map({})", inner.type_name()),
            AttributeType::Object(fields) => format!(
                "object({{{}}})",
                fields
                    .iter()
                    .map(|(k, t)| format!("{}={}", k, t.type_name()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            AttributeType::Dynamic => "dynamic".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Attribute '{name}' is computed and cannot be set")]
    ComputedAttribute { name: String },

    #[error("Block '{block}' needs at least {min} item(s), got {got}")]
    TooFewItems { block: String, min: usize, got: usize },

    #[error("Block '{block}' allows at most {max} item(s), got {got}")]
    TooManyItems { block: String, max: usize, got: usize },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },

    #[error("{path}: {inner}")]
    InPath { path: String, inner: Box<TypeError> },
}

impl TypeError {
    fn in_path(self, path: impl Into<String>) -> Self {
        TypeError::InPath {
            path: path.into(),
            inner: Box::new(self),
        }
    }
}

/// Attribute schema
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub deprecated: bool,
    pub description: Option<String>,
}

impl AttributeSchema {
    /// A new optional attribute
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            deprecated: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Optional attribute whose value the engine fills in when left unset
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Attribute produced by the engine only
    pub fn read_only(mut self) -> Self {
        self.computed = true;
        self.optional = false;
        self.required = false;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Whether callers may supply a value
    pub fn is_settable(&self) -> bool {
        self.required || self.optional
    }
}

/// How instances of a nested block are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingMode {
    /// Exactly one object, stored without a list wrapper
    Single,
    /// Ordered collection
    List,
    /// Unordered collection
    Set,
}

impl fmt::Display for NestingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestingMode::Single => write!(f, "single"),
            NestingMode::List => write!(f, "list"),
            NestingMode::Set => write!(f, "set"),
        }
    }
}

/// Nested block schema
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSchema {
    pub name: String,
    pub nesting: NestingMode,
    pub min_items: usize,
    /// Zero means unbounded
    pub max_items: usize,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub blocks: BTreeMap<String, BlockSchema>,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl BlockSchema {
    pub fn new(name: impl Into<String>, nesting: NestingMode) -> Self {
        Self {
            name: name.into(),
            nesting,
            min_items: 0,
            max_items: 0,
            attributes: BTreeMap::new(),
            blocks: BTreeMap::new(),
            description: None,
            deprecated: false,
        }
    }

    pub fn min_items(mut self, n: usize) -> Self {
        self.min_items = n;
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn block(mut self, schema: BlockSchema) -> Self {
        self.blocks.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// At most one instance, exposed through a single output reference
    pub fn is_singleton(&self) -> bool {
        self.nesting == NestingMode::Single || self.max_items == 1
    }
}

/// Resource schema
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    pub resource_type: String,
    pub kind: ResourceKind,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub blocks: BTreeMap<String, BlockSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            kind: ResourceKind::Resource,
            attributes: BTreeMap::new(),
            blocks: BTreeMap::new(),
            description: None,
        }
    }

    pub fn data_source(resource_type: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::DataSource,
            ..Self::new(resource_type)
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn block(mut self, schema: BlockSchema) -> Self {
        self.blocks.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Validate resource attributes
    ///
    /// Reports missing required attributes (also inside every nested block
    /// instance), block item counts, type mismatches, unknown attributes and
    /// attempts to set computed-only attributes.
    pub fn validate(&self, attributes: &BTreeMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        validate_body(&self.attributes, &self.blocks, attributes, false, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check only that required attributes and blocks are present
    pub fn check_required(&self, attributes: &BTreeMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        validate_body(&self.attributes, &self.blocks, attributes, true, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Instances of a block as stored in an attribute tree
fn block_instances(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::List(items) => Some(items.iter().collect()),
        Value::Map(_) => Some(vec![value]),
        _ => None,
    }
}

fn validate_body(
    attributes: &BTreeMap<String, AttributeSchema>,
    blocks: &BTreeMap<String, BlockSchema>,
    fields: &BTreeMap<String, Value>,
    required_only: bool,
    errors: &mut Vec<TypeError>,
) {
    for (name, schema) in attributes {
        if schema.required && !fields.contains_key(name) {
            errors.push(TypeError::MissingRequired { name: name.clone() });
        }
    }

    for (name, block) in blocks {
        let value = fields.get(name);
        // A deferred block is resolved by the engine
        if let Some(Value::Ref(_)) = value {
            continue;
        }

        let instances = match value {
            None => Vec::new(),
            Some(v) => match block_instances(v) {
                Some(instances) => instances,
                None => {
                    if !required_only {
                        errors.push(
                            TypeError::TypeMismatch {
                                expected: format!("{} block", block.nesting),
                                got: v.type_name(),
                            }
                            .in_path(name.clone()),
                        );
                    }
                    continue;
                }
            },
        };

        if instances.len() < block.min_items {
            errors.push(TypeError::TooFewItems {
                block: name.clone(),
                min: block.min_items,
                got: instances.len(),
            });
        }
        if !required_only && block.max_items > 0 && instances.len() > block.max_items {
            errors.push(TypeError::TooManyItems {
                block: name.clone(),
                max: block.max_items,
                got: instances.len(),
            });
        }

        for (i, instance) in instances.iter().enumerate() {
            let path = format!("{}[{}]", name, i);
            match instance {
                Value::Map(body) => {
                    let mut nested = Vec::new();
                    validate_body(
                        &block.attributes,
                        &block.blocks,
                        body,
                        required_only,
                        &mut nested,
                    );
                    errors.extend(nested.into_iter().map(|e| e.in_path(path.clone())));
                }
                Value::Ref(_) => {}
                other if !required_only => errors.push(
                    TypeError::TypeMismatch {
                        expected: "block".to_string(),
                        got: other.type_name(),
                    }
                    .in_path(path),
                ),
                _ => {}
            }
        }
    }

    if required_only {
        return;
    }

    for (name, value) in fields {
        if let Some(schema) = attributes.get(name) {
            if !schema.is_settable() {
                errors.push(TypeError::ComputedAttribute { name: name.clone() });
            } else if let Err(e) = schema.attr_type.validate(value) {
                errors.push(e.in_path(name.clone()));
            }
        } else if !blocks.contains_key(name) {
            errors.push(TypeError::UnknownAttribute { name: name.clone() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Reference;

    fn cluster_schema() -> ResourceSchema {
        ResourceSchema::new("aws_ecs_cluster")
            .attribute(AttributeSchema::new("arn", AttributeType::String).read_only())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new(
                "tags",
                AttributeType::Map(Box::new(AttributeType::String)),
            ))
            .block(
                BlockSchema::new("setting", NestingMode::Set)
                    .attribute(AttributeSchema::new("name", AttributeType::String).required())
                    .attribute(AttributeSchema::new("value", AttributeType::String).required()),
            )
            .block(
                BlockSchema::new("configuration", NestingMode::List)
                    .max_items(1)
                    .block(
                        BlockSchema::new("execute_command_configuration", NestingMode::List)
                            .max_items(1)
                            .attribute(AttributeSchema::new("logging", AttributeType::String)),
                    ),
            )
    }

    fn fields(json: serde_json::Value) -> BTreeMap<String, Value> {
        match Value::from_json(&json).unwrap() {
            Value::Map(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn validate_primitive_types() {
        assert!(AttributeType::String.validate(&Value::String("x".into())).is_ok());
        assert!(AttributeType::String.validate(&Value::Number(1.0)).is_err());
        assert!(AttributeType::Number.validate(&Value::Number(1.0)).is_ok());
        assert!(AttributeType::Bool.validate(&Value::Bool(true)).is_ok());
    }

    #[test]
    fn references_fit_any_type() {
        let r = Value::Ref(Reference::raw("var.x"));
        assert!(AttributeType::Number.validate(&r).is_ok());
        assert!(AttributeType::List(Box::new(AttributeType::String)).validate(&r).is_ok());
    }

    #[test]
    fn validate_collection_items() {
        let t = AttributeType::Set(Box::new(AttributeType::String));
        assert!(t.validate(&Value::List(vec![Value::String("a".into())])).is_ok());
        let err = t
            .validate(&Value::List(vec![Value::Bool(true)]))
            .unwrap_err();
        assert!(matches!(err, TypeError::ListItemError { index: 0, .. }));
    }

    #[test]
    fn validate_object_fields() {
        let t = AttributeType::object([("name", AttributeType::String)]);
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), Value::String("a".into()));
        assert!(t.validate(&Value::Map(map.clone())).is_ok());
        map.insert("other".to_string(), Value::String("b".into()));
        assert!(t.validate(&Value::Map(map)).is_err());
    }

    #[test]
    fn valid_resource_passes() {
        let attrs = fields(serde_json::json!({
            "name": "demo",
            "tags": {"env": "prod"},
            "setting": [{"name": "containerInsights", "value": "enabled"}],
            "configuration": [{"execute_command_configuration": [{"logging": "DEFAULT"}]}]
        }));
        assert!(cluster_schema().validate(&attrs).is_ok());
    }

    #[test]
    fn missing_required_attribute() {
        let errors = cluster_schema().validate(&BTreeMap::new()).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::MissingRequired {
                name: "name".to_string()
            }]
        );
    }

    #[test]
    fn missing_required_inside_block_reports_path() {
        let attrs = fields(serde_json::json!({
            "name": "demo",
            "setting": [{"name": "containerInsights"}]
        }));
        let errors = cluster_schema().check_required(&attrs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "setting[0]: Required attribute 'value' is missing"
        );
    }

    #[test]
    fn too_many_items_in_singleton_block() {
        let attrs = fields(serde_json::json!({
            "name": "demo",
            "configuration": [{}, {}]
        }));
        let errors = cluster_schema().validate(&attrs).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, TypeError::TooManyItems { max: 1, got: 2, .. })));
    }

    #[test]
    fn computed_and_unknown_attributes_rejected() {
        let attrs = fields(serde_json::json!({
            "name": "demo",
            "arn": "arn:aws:ecs:...",
            "bogus": true
        }));
        let errors = cluster_schema().validate(&attrs).unwrap_err();
        assert!(errors.contains(&TypeError::ComputedAttribute {
            name: "arn".to_string()
        }));
        assert!(errors.contains(&TypeError::UnknownAttribute {
            name: "bogus".to_string()
        }));
    }

    #[test]
    fn check_required_ignores_types() {
        let attrs = fields(serde_json::json!({"name": 42, "bogus": true}));
        assert!(cluster_schema().check_required(&attrs).is_ok());
        assert!(cluster_schema().validate(&attrs).is_err());
    }

    #[test]
    fn singleton_detection() {
        assert!(BlockSchema::new("c", NestingMode::List).max_items(1).is_singleton());
        assert!(BlockSchema::new("t", NestingMode::Single).is_singleton());
        assert!(!BlockSchema::new("s", NestingMode::Set).is_singleton());
    }
}
