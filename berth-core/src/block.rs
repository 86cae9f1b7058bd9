//! Block - Config value-objects and views over nested blocks
//!
//! Generated configs and nested blocks implement [`Block`], converting to
//! and from a [`Fields`] map. [`BlockRef`] and [`ListRef`] bind one block
//! instance (or a collection of them) to its location in a registered
//! element's attribute tree.

use std::collections::BTreeMap;

use crate::input::AttributeValue;
use crate::path::AttributePath;
use crate::resource::{Reference, Value};
use crate::stack::ResourceHandle;

/// Error raised while building a config or block from its fields
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Required property '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Property '{name}' expected {expected}, got {got}")]
    TypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    #[error("In block '{block}': {inner}")]
    InBlock {
        block: String,
        inner: Box<ConfigError>,
    },
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::MissingRequired { name: name.into() }
    }

    fn in_block(self, block: &str) -> Self {
        ConfigError::InBlock {
            block: block.to_string(),
            inner: Box::new(self),
        }
    }
}

/// Field map of one config or nested block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    map: BTreeMap<String, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: BTreeMap<String, Value>) -> Self {
        Self { map }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.map
    }

    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.map
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn put<V: AttributeValue + Clone>(&mut self, name: &str, value: &V) {
        self.map.insert(name.to_string(), value.clone().into_value());
    }

    /// Write an optional field; `None` leaves it absent
    pub fn put_opt<V: AttributeValue + Clone>(&mut self, name: &str, value: &Option<V>) {
        if let Some(value) = value {
            self.put(name, value);
        }
    }

    /// Write a singleton block as a one-element list
    pub fn put_block<B: Block>(&mut self, name: &str, block: Option<&B>) {
        if let Some(block) = block {
            self.map
                .insert(name.to_string(), Value::List(vec![block.to_value()]));
        }
    }

    /// Write a repeated block; an empty slice leaves it absent
    pub fn put_blocks<B: Block>(&mut self, name: &str, blocks: &[B]) {
        if !blocks.is_empty() {
            self.map.insert(
                name.to_string(),
                Value::List(blocks.iter().map(Block::to_value).collect()),
            );
        }
    }

    pub fn required<V: AttributeValue>(&self, name: &str) -> Result<V, ConfigError> {
        self.optional(name)?.ok_or_else(|| ConfigError::missing(name))
    }

    pub fn optional<V: AttributeValue>(&self, name: &str) -> Result<Option<V>, ConfigError> {
        match self.map.get(name) {
            None => Ok(None),
            Some(value) => V::from_value(value)
                .map(Some)
                .ok_or_else(|| ConfigError::TypeMismatch {
                    name: name.to_string(),
                    expected: V::type_name(),
                    got: value.type_name(),
                }),
        }
    }

    /// Read a singleton block stored either as an object or a one-element list
    pub fn block<B: Block>(&self, name: &str) -> Result<Option<B>, ConfigError> {
        let Some(value) = self.map.get(name) else {
            return Ok(None);
        };
        let instance = match value {
            Value::List(items) => match items.first() {
                Some(first) => first,
                None => return Ok(None),
            },
            other => other,
        };
        block_from_value(name, instance).map(Some)
    }

    pub fn required_block<B: Block>(&self, name: &str) -> Result<B, ConfigError> {
        self.block(name)?.ok_or_else(|| ConfigError::missing(name))
    }

    /// Read a repeated block that needs at least one instance
    pub fn required_blocks<B: Block>(&self, name: &str) -> Result<Vec<B>, ConfigError> {
        let blocks = self.blocks(name)?;
        if blocks.is_empty() {
            return Err(ConfigError::missing(name));
        }
        Ok(blocks)
    }

    pub fn blocks<B: Block>(&self, name: &str) -> Result<Vec<B>, ConfigError> {
        match self.map.get(name) {
            None => Ok(Vec::new()),
            Some(Value::List(items)) => items
                .iter()
                .map(|item| block_from_value(name, item))
                .collect(),
            Some(single @ Value::Map(_)) => Ok(vec![block_from_value(name, single)?]),
            Some(other) => Err(ConfigError::TypeMismatch {
                name: name.to_string(),
                expected: "list of blocks".to_string(),
                got: other.type_name(),
            }),
        }
    }
}

fn block_from_value<B: Block>(name: &str, value: &Value) -> Result<B, ConfigError> {
    match value {
        Value::Map(map) => {
            B::from_fields(&Fields::from_map(map.clone())).map_err(|e| e.in_block(name))
        }
        other => Err(ConfigError::TypeMismatch {
            name: name.to_string(),
            expected: "block".to_string(),
            got: other.type_name(),
        }),
    }
}

impl From<Fields> for BTreeMap<String, Value> {
    fn from(fields: Fields) -> Self {
        fields.map
    }
}

/// A config or nested block convertible to and from its field map
pub trait Block: Sized {
    fn to_fields(&self) -> Fields;

    /// Rebuild from a field map, failing on missing required properties
    fn from_fields(fields: &Fields) -> Result<Self, ConfigError>;

    fn to_value(&self) -> Value {
        Value::Map(self.to_fields().into_map())
    }
}

/// View of one block instance inside a registered element
///
/// Every accessor reads or writes the element's attribute tree below
/// [`BlockRef::path`]; nothing is cached locally.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRef {
    element: ResourceHandle,
    path: AttributePath,
    from_set: bool,
}

impl BlockRef {
    pub fn new(element: ResourceHandle, path: AttributePath, from_set: bool) -> Self {
        Self {
            element,
            path,
            from_set,
        }
    }

    /// The element body itself
    pub fn root(element: ResourceHandle) -> Self {
        Self::new(element, AttributePath::root(), false)
    }

    pub fn element(&self) -> &ResourceHandle {
        &self.element
    }

    pub fn path(&self) -> &AttributePath {
        &self.path
    }

    /// Whether this instance was reached through a set-backed collection
    pub fn wraps_set(&self) -> bool {
        self.from_set
    }

    /// Reference to `field` of this block
    pub fn reference(&self, field: &str) -> Reference {
        self.element.reference(self.path.child(field))
    }

    /// Reference to the whole block
    pub fn self_reference(&self) -> Reference {
        self.element.reference(self.path.clone())
    }

    /// Currently configured value of `field`, or `None` when unset
    pub fn input<V: AttributeValue>(&self, field: &str) -> Option<V> {
        let value = self.element.get(&self.path.child(field))?;
        let typed = V::from_value(&value);
        if typed.is_none() {
            log::warn!(
                "{}: {} holds a {}, expected {}",
                self.element.address(),
                self.path.child(field),
                value.type_name(),
                V::type_name()
            );
        }
        typed
    }

    pub fn set<V: AttributeValue>(&self, field: &str, value: V) {
        self.element.set(&self.path.child(field), value.into_value());
    }

    /// Return `field` to the unset state
    pub fn reset(&self, field: &str) {
        self.element.unset(&self.path.child(field));
    }

    /// Replace singleton block `field` with `block`
    pub fn put<B: Block>(&self, field: &str, block: &B) {
        self.element
            .set(&self.path.child(field), Value::List(vec![block.to_value()]));
    }

    /// Replace repeated block `field` with `blocks`
    pub fn put_all<B: Block>(&self, field: &str, blocks: &[B]) {
        self.element.set(
            &self.path.child(field),
            Value::List(blocks.iter().map(Block::to_value).collect()),
        );
    }

    /// Configured value of singleton block `field`
    pub fn block_input<B: Block>(&self, field: &str) -> Option<B> {
        self.fields()
            .block(field)
            .unwrap_or_else(|e| {
                self.warn_malformed(field, &e);
                None
            })
    }

    /// Configured instances of repeated block `field`
    pub fn blocks_input<B: Block>(&self, field: &str) -> Option<Vec<B>> {
        let fields = self.fields();
        if !fields.contains(field) {
            return None;
        }
        fields
            .blocks(field)
            .map_err(|e| self.warn_malformed(field, &e))
            .ok()
    }

    fn warn_malformed(&self, field: &str, error: &ConfigError) {
        log::warn!(
            "{}: {} does not hold a valid block: {}",
            self.element.address(),
            self.path.child(field),
            error
        );
    }

    /// The whole block as currently configured
    pub fn internal_value<B: Block>(&self) -> Option<B> {
        match self.element.get(&self.path)? {
            Value::Map(map) => B::from_fields(&Fields::from_map(map)).ok(),
            _ => None,
        }
    }

    /// Replace the whole block, or remove it with `None`
    pub fn set_internal_value<B: Block>(&self, value: Option<&B>) {
        match value {
            Some(block) => self.element.set(&self.path, block.to_value()),
            None => {
                self.element.unset(&self.path);
            }
        }
    }

    /// View of singleton block `field`
    pub fn block(&self, field: &str, wraps_set: bool) -> BlockRef {
        let path = self.path.child(field);
        let path = if wraps_set {
            path.set_index(0)
        } else {
            path.index(0)
        };
        BlockRef::new(self.element.clone(), path, wraps_set)
    }

    /// View of object-typed attribute `field`, which has no list wrapper
    pub fn object(&self, field: &str) -> BlockRef {
        BlockRef::new(self.element.clone(), self.path.child(field), false)
    }

    /// View of repeated block `field`
    pub fn list(&self, field: &str, wraps_set: bool) -> ListRef {
        ListRef::new(self.element.clone(), self.path.child(field), wraps_set)
    }

    fn fields(&self) -> Fields {
        let map = if self.path.is_root() {
            self.element.fields()
        } else {
            match self.element.get(&self.path) {
                Some(Value::Map(map)) => map,
                _ => BTreeMap::new(),
            }
        };
        Fields::from_map(map)
    }
}

/// Index-addressable view of a repeated block
#[derive(Debug, Clone, PartialEq)]
pub struct ListRef {
    element: ResourceHandle,
    path: AttributePath,
    wraps_set: bool,
}

impl ListRef {
    pub fn new(element: ResourceHandle, path: AttributePath, wraps_set: bool) -> Self {
        Self {
            element,
            path,
            wraps_set,
        }
    }

    pub fn path(&self) -> &AttributePath {
        &self.path
    }

    pub fn wraps_set(&self) -> bool {
        self.wraps_set
    }

    /// View of the instance at `index`
    ///
    /// No bounds check happens here; an index past the end yields a view
    /// whose inputs read as unset and whose references the engine rejects.
    pub fn get(&self, index: usize) -> BlockRef {
        let path = if self.wraps_set {
            self.path.set_index(index)
        } else {
            self.path.index(index)
        };
        BlockRef::new(self.element.clone(), path, self.wraps_set)
    }

    /// Number of locally configured instances
    pub fn len(&self) -> usize {
        match self.element.get(&self.path) {
            Some(Value::List(items)) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reference to the whole collection
    pub fn reference(&self) -> Reference {
        self.element.reference(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;
    use crate::meta::MetaArguments;
    use crate::resource::ResourceKind;
    use crate::schema::ResourceSchema;
    use crate::stack::Stack;

    #[derive(Debug, Clone, PartialEq)]
    struct Setting {
        name: Input<String>,
        value: Option<Input<String>>,
    }

    impl Block for Setting {
        fn to_fields(&self) -> Fields {
            let mut fields = Fields::new();
            fields.put("name", &self.name);
            fields.put_opt("value", &self.value);
            fields
        }

        fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
            Ok(Self {
                name: fields.required("name")?,
                value: fields.optional("value")?,
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Config {
        setting: Vec<Setting>,
        primary: Option<Setting>,
    }

    impl Block for Config {
        fn to_fields(&self) -> Fields {
            let mut fields = Fields::new();
            fields.put_blocks("setting", &self.setting);
            fields.put_block("primary", self.primary.as_ref());
            fields
        }

        fn from_fields(fields: &Fields) -> Result<Self, ConfigError> {
            Ok(Self {
                setting: fields.blocks("setting")?,
                primary: fields.block("primary")?,
            })
        }
    }

    fn setting(name: &str, value: Option<&str>) -> Setting {
        Setting {
            name: name.into(),
            value: value.map(Input::from),
        }
    }

    fn registered(config: &Config) -> BlockRef {
        let mut stack = Stack::new("test");
        let handle = stack
            .register(
                ResourceKind::Resource,
                "aws_ecs_cluster",
                "main",
                config.to_fields().into_map(),
                MetaArguments::default(),
                &ResourceSchema::new("aws_ecs_cluster"),
            )
            .unwrap();
        BlockRef::root(handle)
    }

    #[test]
    fn optional_fields_are_left_out() {
        let fields = setting("a", None).to_fields();
        assert!(fields.contains("name"));
        assert!(!fields.contains("value"));
    }

    #[test]
    fn missing_required_field_is_reported() {
        let err = Setting::from_fields(&Fields::new()).unwrap_err();
        assert_eq!(err.to_string(), "Required property 'name' is missing");
    }

    #[test]
    fn nested_errors_name_the_block() {
        let mut fields = Fields::new();
        fields.put_blocks("setting", &[setting("a", None)]);
        let mut map = fields.into_map();
        map.insert(
            "setting".to_string(),
            Value::List(vec![Value::Map(BTreeMap::new())]),
        );
        let err = Config::from_fields(&Fields::from_map(map)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InBlock {
                block: "setting".to_string(),
                inner: Box::new(ConfigError::missing("name")),
            }
        );
    }

    #[test]
    fn malformed_stored_blocks_read_as_unset() {
        let root = registered(&Config {
            setting: vec![setting("a", None)],
            primary: Some(setting("p", None)),
        });
        root.set("primary", Value::String("oops".to_string()));
        root.set("setting", Value::List(vec![Value::Bool(true)]));

        assert_eq!(root.block_input::<Setting>("primary"), None);
        assert_eq!(root.blocks_input::<Setting>("setting"), None);
    }

    #[test]
    fn type_mismatch_is_reported() {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), Value::Bool(true));
        let err = Setting::from_fields(&Fields::from_map(map)).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn round_trip_through_fields() {
        let config = Config {
            setting: vec![setting("a", Some("1")), setting("b", None)],
            primary: Some(setting("p", Some("x"))),
        };
        assert_eq!(Config::from_fields(&config.to_fields()).unwrap(), config);
    }

    #[test]
    fn list_get_reads_each_instance() {
        let config = Config {
            setting: vec![setting("a", Some("1")), setting("b", Some("2"))],
            primary: None,
        };
        let root = registered(&config);
        let list = root.list("setting", true);
        assert_eq!(list.len(), 2);
        for (i, expected) in config.setting.iter().enumerate() {
            let item = list.get(i);
            assert_eq!(item.input::<Input<String>>("name"), Some(expected.name.clone()));
            assert_eq!(item.internal_value::<Setting>(), Some(expected.clone()));
        }
        assert_eq!(list.get(5).input::<Input<String>>("name"), None);
    }

    #[test]
    fn set_backed_references_use_tolist() {
        let root = registered(&Config {
            setting: vec![setting("a", None)],
            primary: None,
        });
        assert_eq!(
            root.list("setting", true).get(0).reference("name").to_string(),
            "${tolist(aws_ecs_cluster.main.setting)[0].name}"
        );
        assert_eq!(
            root.block("primary", false).reference("name").to_string(),
            "${aws_ecs_cluster.main.primary[0].name}"
        );
    }

    #[test]
    fn set_and_reset_through_views() {
        let root = registered(&Config {
            setting: Vec::new(),
            primary: Some(setting("p", None)),
        });
        let primary = root.block("primary", false);
        primary.set("value", Input::<String>::from("on"));
        assert_eq!(
            primary.input::<Input<String>>("value"),
            Some(Input::Literal("on".to_string()))
        );
        primary.reset("value");
        assert_eq!(primary.input::<Input<String>>("value"), None);
    }

    #[test]
    fn put_replaces_whole_block() {
        let root = registered(&Config {
            setting: Vec::new(),
            primary: None,
        });
        assert_eq!(root.block_input::<Setting>("primary"), None);
        root.put("primary", &setting("new", Some("v")));
        assert_eq!(
            root.block_input::<Setting>("primary"),
            Some(setting("new", Some("v")))
        );

        root.put_all("setting", &[setting("x", None)]);
        assert_eq!(
            root.blocks_input::<Setting>("setting"),
            Some(vec![setting("x", None)])
        );
        root.reset("setting");
        assert_eq!(root.blocks_input::<Setting>("setting"), None);
    }

    #[test]
    fn internal_value_can_be_cleared() {
        let root = registered(&Config {
            setting: Vec::new(),
            primary: Some(setting("p", None)),
        });
        let primary = root.block("primary", false);
        primary.set_internal_value::<Setting>(None);
        assert_eq!(primary.internal_value::<Setting>(), None);
    }
}
