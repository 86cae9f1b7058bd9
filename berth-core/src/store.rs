//! Store - The string-keyed attribute tree behind every typed binding
//!
//! Typed wrappers never hold attribute values themselves. Each getter,
//! setter and reset translates into a path-addressed operation on an
//! [`AttributeStore`].

use std::collections::BTreeMap;

use crate::path::{AttributePath, Segment};
use crate::resource::Value;

/// Generic read/write access to an attribute tree
pub trait AttributeStore {
    /// Read the value at `path`
    ///
    /// Returns `None` when nothing is stored there, which is the "unset" state.
    fn get(&self, path: &AttributePath) -> Option<&Value>;

    /// Write `value` at `path`, creating intermediate maps and list entries
    fn set(&mut self, path: &AttributePath, value: Value);

    /// Remove the value at `path`, returning what was stored
    fn unset(&mut self, path: &AttributePath) -> Option<Value>;
}

/// In-memory attribute tree rooted at a map of top-level arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeTree {
    root: BTreeMap<String, Value>,
}

impl AttributeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self { root: fields }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.root.insert(key.into(), value);
    }

    /// Top-level arguments
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.root
    }

    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl AttributeStore for AttributeTree {
    fn get(&self, path: &AttributePath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let Segment::Attr(name) = first else {
            return None;
        };

        let mut current = self.root.get(name)?;
        for segment in rest {
            current = match (segment, current) {
                (Segment::Attr(name), Value::Map(map)) => map.get(name)?,
                (Segment::Index(i) | Segment::SetIndex(i), Value::List(items)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    fn set(&mut self, path: &AttributePath, value: Value) {
        let Some((Segment::Attr(name), rest)) = path.segments().split_first() else {
            log::warn!("ignoring write to non-attribute path '{}'", path);
            return;
        };

        let slot = self
            .root
            .entry(name.clone())
            .or_insert_with(|| placeholder(rest));
        set_in(slot, rest, value);
    }

    fn unset(&mut self, path: &AttributePath) -> Option<Value> {
        let (last, parents) = path.segments().split_last()?;
        if parents.is_empty() {
            return match last {
                Segment::Attr(name) => self.root.remove(name),
                _ => None,
            };
        }

        match (get_mut(&mut self.root, parents)?, last) {
            (Value::Map(map), Segment::Attr(name)) => map.remove(name),
            (Value::List(items), Segment::Index(i) | Segment::SetIndex(i)) if *i < items.len() => {
                Some(items.remove(*i))
            }
            _ => None,
        }
    }
}

fn get_mut<'a>(root: &'a mut BTreeMap<String, Value>, segments: &[Segment]) -> Option<&'a mut Value> {
    let (first, rest) = segments.split_first()?;
    let Segment::Attr(name) = first else {
        return None;
    };

    let mut current = root.get_mut(name)?;
    for segment in rest {
        current = match (segment, current) {
            (Segment::Attr(name), Value::Map(map)) => map.get_mut(name)?,
            (Segment::Index(i) | Segment::SetIndex(i), Value::List(items)) => items.get_mut(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Empty container matching the kind of the next segment
fn placeholder(rest: &[Segment]) -> Value {
    match rest.first() {
        Some(Segment::Index(_) | Segment::SetIndex(_)) => Value::List(Vec::new()),
        _ => Value::Map(BTreeMap::new()),
    }
}

fn set_in(slot: &mut Value, segments: &[Segment], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        *slot = value;
        return;
    };

    match segment {
        Segment::Attr(name) => {
            if !matches!(slot, Value::Map(_)) {
                *slot = Value::Map(BTreeMap::new());
            }
            if let Value::Map(map) = slot {
                let child = map.entry(name.clone()).or_insert_with(|| placeholder(rest));
                set_in(child, rest, value);
            }
        }
        Segment::Index(index) | Segment::SetIndex(index) => {
            if !matches!(slot, Value::List(_)) {
                *slot = Value::List(Vec::new());
            }
            if let Value::List(items) = slot {
                // Gaps are filled with empty blocks; the engine rejects them if they stay empty
                while items.len() <= *index {
                    items.push(Value::Map(BTreeMap::new()));
                }
                set_in(&mut items[*index], rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> AttributePath {
        AttributePath::parse(s).unwrap()
    }

    #[test]
    fn set_and_get_top_level() {
        let mut tree = AttributeTree::new();
        tree.set(&path("name"), Value::String("demo".to_string()));
        assert_eq!(
            tree.get(&path("name")),
            Some(&Value::String("demo".to_string()))
        );
        assert_eq!(tree.get(&path("missing")), None);
    }

    #[test]
    fn set_creates_intermediate_blocks() {
        let mut tree = AttributeTree::new();
        tree.set(
            &path("configuration[0].execute_command_configuration[0].logging"),
            Value::String("DEFAULT".to_string()),
        );

        let configuration = tree.get(&path("configuration")).unwrap();
        assert_eq!(configuration.as_list().unwrap().len(), 1);
        assert_eq!(
            tree.get(&path("configuration[0].execute_command_configuration[0].logging")),
            Some(&Value::String("DEFAULT".to_string()))
        );
    }

    #[test]
    fn set_pads_lists_with_empty_blocks() {
        let mut tree = AttributeTree::new();
        tree.set(&path("setting[2].name"), Value::String("x".to_string()));
        let items = tree.get(&path("setting")).unwrap().as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Value::Map(BTreeMap::new()));
    }

    #[test]
    fn get_through_scalar_is_none() {
        let mut tree = AttributeTree::new();
        tree.set(&path("name"), Value::String("demo".to_string()));
        assert_eq!(tree.get(&path("name.inner")), None);
        assert_eq!(tree.get(&path("name[0]")), None);
    }

    #[test]
    fn unset_removes_leaf() {
        let mut tree = AttributeTree::new();
        tree.set(&path("tags"), Value::Map(BTreeMap::new()));
        tree.set(&path("configuration[0].logging"), Value::String("NONE".to_string()));

        assert!(tree.unset(&path("tags")).is_some());
        assert_eq!(tree.get(&path("tags")), None);

        assert_eq!(
            tree.unset(&path("configuration[0].logging")),
            Some(Value::String("NONE".to_string()))
        );
        assert_eq!(tree.get(&path("configuration[0].logging")), None);
        assert!(tree.get(&path("configuration[0]")).is_some());
    }

    #[test]
    fn unset_list_entry_shifts_followers() {
        let mut tree = AttributeTree::new();
        tree.set(&path("setting[0].name"), Value::String("a".to_string()));
        tree.set(&path("setting[1].name"), Value::String("b".to_string()));

        tree.unset(&path("setting[0]"));
        assert_eq!(
            tree.get(&path("setting[0].name")),
            Some(&Value::String("b".to_string()))
        );
        assert_eq!(tree.unset(&path("setting[5]")), None);
    }

    #[test]
    fn set_replaces_scalar_with_container() {
        let mut tree = AttributeTree::new();
        tree.set(&path("block"), Value::String("scalar".to_string()));
        tree.set(&path("block[0].field"), Value::Bool(true));
        assert_eq!(tree.get(&path("block[0].field")), Some(&Value::Bool(true)));
    }
}
