//! Resource - Representing elements, their attribute values and references between them

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::meta::MetaArguments;
use crate::path::AttributePath;
use crate::store::AttributeTree;

/// Whether an element is a managed resource or a read-only data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Resource,
    DataSource,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Resource => write!(f, "resource"),
            ResourceKind::DataSource => write!(f, "data source"),
        }
    }
}

/// Unique identifier for an element within a stack
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    /// Terraform type string (e.g., "aws_ecs_cluster")
    pub resource_type: String,
    /// Logical id given at construction
    pub name: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Terraform address of this element (`aws_ecs_cluster.main`, `data.aws_ecs_cluster.main`)
    pub fn address(&self, kind: ResourceKind) -> String {
        match kind {
            ResourceKind::Resource => format!("{}.{}", self.resource_type, self.name),
            ResourceKind::DataSource => format!("data.{}.{}", self.resource_type, self.name),
        }
    }
}

/// Deferred value resolved by the engine at plan/apply time
///
/// Two references are equal when they render the same expression.
#[derive(Debug, Clone)]
pub enum Reference {
    /// An attribute of another element
    Attribute {
        kind: ResourceKind,
        id: ResourceId,
        path: AttributePath,
    },
    /// Arbitrary Terraform expression (e.g. `var.cluster_name`)
    Raw(String),
}

impl Reference {
    pub fn attribute(kind: ResourceKind, id: ResourceId, path: AttributePath) -> Self {
        Self::Attribute { kind, id, path }
    }

    pub fn raw(expression: impl Into<String>) -> Self {
        Self::Raw(expression.into())
    }

    /// The bare expression, without `${}`
    pub fn expression(&self) -> String {
        match self {
            Reference::Attribute { kind, id, path } => path.expression(&id.address(*kind)),
            Reference::Raw(expr) => expr.clone(),
        }
    }

    /// The expression wrapped as a Terraform string interpolation
    pub fn to_interpolation(&self) -> String {
        format!("${{{}}}", self.expression())
    }

    /// Parse a string of the form `${expr}` back into a raw reference
    pub fn from_interpolation(s: &str) -> Option<Self> {
        let inner = s.strip_prefix("${")?.strip_suffix('}')?;
        if inner.is_empty() || inner.contains("${") {
            return None;
        }
        Some(Self::Raw(inner.to_string()))
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.expression() == other.expression()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_interpolation())
    }
}

/// Attribute value of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// Value only known once the engine resolves it
    Ref(Reference),
}

impl Value {
    pub fn type_name(&self) -> String {
        match self {
            Value::String(_) => "string".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::List(items) => match element_type(items.iter()) {
                Some(inner) => format!("list({})", inner),
                None => format!(
                    "tuple([{}])",
                    items.iter().map(Value::type_name).collect::<Vec<_>>().join(", ")
                ),
            },
            Value::Map(map) => match element_type(map.values()) {
                Some(inner) => format!("map({})", inner),
                None => format!(
                    "object({{{}}})",
                    map.iter()
                        .map(|(k, v)| format!("{}={}", k, v.type_name()))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            },
            Value::Ref(r) => format!("reference({})", r.expression()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert to the JSON shape Terraform expects
    ///
    /// References become interpolation strings and integral numbers are
    /// written without a fractional part.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => number_to_json(*n),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Ref(r) => serde_json::Value::String(r.to_interpolation()),
        }
    }

    /// Build a value from JSON
    ///
    /// Strings shaped like `${expr}` become references. `null` has no
    /// counterpart and is rejected.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, String> {
        match json {
            serde_json::Value::Null => Err("null is not a valid attribute value".to_string()),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or_else(|| format!("number {} is out of range", n)),
            serde_json::Value::String(s) => Ok(Reference::from_interpolation(s)
                .map(Value::Ref)
                .unwrap_or_else(|| Value::String(s.clone()))),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Value::Map),
        }
    }
}

/// Shared type of all elements, `None` when they differ
///
/// An empty collection reports `dynamic`.
fn element_type<'a>(mut values: impl Iterator<Item = &'a Value>) -> Option<String> {
    let Some(first) = values.next() else {
        return Some("dynamic".to_string());
    };
    let name = first.type_name();
    values.all(|v| v.type_name() == name).then_some(name)
}

fn number_to_json(n: f64) -> serde_json::Value {
    // Beyond 2^53 f64 can no longer represent every integer
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&json).map_err(serde::de::Error::custom)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Value::Ref(r)
    }
}

/// One element registered in a stack: its identity, attribute tree and meta-arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub kind: ResourceKind,
    pub attributes: AttributeTree,
    pub meta: MetaArguments,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(resource_type, name),
            kind: ResourceKind::Resource,
            attributes: AttributeTree::new(),
            meta: MetaArguments::default(),
        }
    }

    pub fn data_source(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(resource_type, name).with_kind(ResourceKind::DataSource)
    }

    pub fn with_kind(mut self, kind: ResourceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, Value>) -> Self {
        self.attributes = AttributeTree::from_fields(attributes);
        self
    }

    pub fn with_meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    /// Returns true if this element is a data source (read-only)
    pub fn is_data_source(&self) -> bool {
        self.kind == ResourceKind::DataSource
    }

    pub fn address(&self) -> String {
        self.id.address(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_distinguishes_data_sources() {
        let id = ResourceId::new("aws_ecs_cluster", "main");
        assert_eq!(id.address(ResourceKind::Resource), "aws_ecs_cluster.main");
        assert_eq!(id.address(ResourceKind::DataSource), "data.aws_ecs_cluster.main");
    }

    #[test]
    fn reference_renders_interpolation() {
        let r = Reference::attribute(
            ResourceKind::Resource,
            ResourceId::new("aws_ecs_cluster", "main"),
            AttributePath::attr("arn"),
        );
        assert_eq!(r.to_interpolation(), "${aws_ecs_cluster.main.arn}");
        assert_eq!(r.to_string(), "${aws_ecs_cluster.main.arn}");
    }

    #[test]
    fn interpolation_strings_parse_as_references() {
        assert_eq!(
            Reference::from_interpolation("${var.name}"),
            Some(Reference::raw("var.name"))
        );
        assert_eq!(Reference::from_interpolation("plain"), None);
        assert_eq!(Reference::from_interpolation("${}"), None);
        assert_eq!(Reference::from_interpolation("${a}-${b}"), None);
    }

    #[test]
    fn parsed_interpolation_equals_attribute_reference() {
        let r = Reference::attribute(
            ResourceKind::Resource,
            ResourceId::new("aws_ecs_cluster", "main"),
            AttributePath::attr("id"),
        );
        assert_eq!(Reference::from_interpolation(&r.to_interpolation()), Some(r));
        assert_ne!(Reference::raw("var.a"), Reference::raw("var.b"));
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        assert_eq!(Value::Number(3.0).to_json(), serde_json::json!(3));
        assert_eq!(Value::Number(0.5).to_json(), serde_json::json!(0.5));
    }

    #[test]
    fn json_conversion_keeps_structure() {
        let json = serde_json::json!({
            "name": "demo",
            "count": 2,
            "enabled": true,
            "subnets": ["a", "b"],
            "cluster": "${aws_ecs_cluster.main.arn}"
        });
        let value = Value::from_json(&json).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["name"], Value::String("demo".to_string()));
        assert_eq!(map["count"], Value::Number(2.0));
        assert_eq!(
            map["cluster"],
            Value::Ref(Reference::raw("aws_ecs_cluster.main.arn"))
        );
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn collection_type_names_describe_elements() {
        let numbers = Value::List(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(numbers.type_name(), "list(number)");

        let mixed = Value::List(vec![Value::Number(1.0), Value::Bool(true)]);
        assert_eq!(mixed.type_name(), "tuple([number, bool])");

        let map = Value::from_json(&serde_json::json!({"a": 1, "b": "x"})).unwrap();
        assert_eq!(map.type_name(), "object({a=number, b=string})");

        assert_eq!(Value::List(Vec::new()).type_name(), "list(dynamic)");
    }

    #[test]
    fn null_is_rejected() {
        assert!(Value::from_json(&serde_json::Value::Null).is_err());
    }

    #[test]
    fn data_source_constructor_sets_kind() {
        let r = Resource::data_source("aws_ecs_cluster", "existing");
        assert!(r.is_data_source());
        assert_eq!(r.address(), "data.aws_ecs_cluster.existing");
    }
}
