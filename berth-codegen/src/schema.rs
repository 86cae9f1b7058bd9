//! Terraform provider schema document (`terraform providers schema -json`)

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProviderSchemas {
    pub format_version: String,
    #[serde(default)]
    pub provider_schemas: BTreeMap<String, ProviderSchema>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resource_schemas: BTreeMap<String, TypeSchema>,
    #[serde(default)]
    pub data_source_schemas: BTreeMap<String, TypeSchema>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct TypeSchema {
    #[serde(default)]
    pub version: u64,
    pub block: SchemaBlock,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemaBlock {
    #[serde(default)]
    pub attributes: BTreeMap<String, SchemaAttribute>,
    #[serde(default)]
    pub block_types: BTreeMap<String, SchemaBlockType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Deserialize)]
pub struct SchemaAttribute {
    /// cty type expression, e.g. `"string"` or `["set", "string"]`
    #[serde(rename = "type", default)]
    pub cty: serde_json::Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Deserialize)]
pub struct SchemaBlockType {
    pub nesting_mode: String,
    pub block: SchemaBlock,
    #[serde(default)]
    pub min_items: usize,
    #[serde(default)]
    pub max_items: usize,
}

/// How a caller may use an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Required,
    /// Optional, possibly filled in by the engine when unset
    Optional,
    /// Produced by the engine only
    Computed,
}

impl SchemaAttribute {
    pub fn role(&self) -> Role {
        if self.required {
            Role::Required
        } else if self.optional {
            Role::Optional
        } else {
            Role::Computed
        }
    }

    pub fn cty_type(&self) -> Result<CtyType> {
        CtyType::parse(&self.cty)
    }
}

/// Nesting of a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Single,
    List,
    Set,
}

impl SchemaBlockType {
    /// `None` for nesting modes the bindings cannot express (`map`)
    pub fn nesting(&self) -> Option<Nesting> {
        match self.nesting_mode.as_str() {
            "single" | "group" => Some(Nesting::Single),
            "list" => Some(Nesting::List),
            "set" => Some(Nesting::Set),
            _ => None,
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.nesting() == Some(Nesting::Single) || self.max_items == 1
    }

    pub fn is_required(&self) -> bool {
        self.min_items > 0
    }
}

/// Terraform value type
#[derive(Debug, Clone, PartialEq)]
pub enum CtyType {
    String,
    Number,
    Bool,
    List(Box<CtyType>),
    Set(Box<CtyType>),
    Map(Box<CtyType>),
    Object(BTreeMap<String, CtyType>),
    Dynamic,
}

impl CtyType {
    pub fn parse(json: &serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match json {
            Json::String(s) => match s.as_str() {
                "string" => Ok(CtyType::String),
                "number" => Ok(CtyType::Number),
                "bool" => Ok(CtyType::Bool),
                "dynamic" => Ok(CtyType::Dynamic),
                other => bail!("unknown primitive type '{}'", other),
            },
            Json::Array(parts) => match parts.as_slice() {
                [Json::String(kind), inner] => match kind.as_str() {
                    "list" => Ok(CtyType::List(Box::new(Self::parse(inner)?))),
                    "set" => Ok(CtyType::Set(Box::new(Self::parse(inner)?))),
                    "map" => Ok(CtyType::Map(Box::new(Self::parse(inner)?))),
                    "object" => {
                        let Json::Object(fields) = inner else {
                            bail!("object type needs a field map");
                        };
                        let fields = fields
                            .iter()
                            .map(|(k, v)| Ok((k.clone(), Self::parse(v)?)))
                            .collect::<Result<BTreeMap<_, _>>>()?;
                        Ok(CtyType::Object(fields))
                    }
                    other => bail!("unsupported type constructor '{}'", other),
                },
                _ => bail!("malformed type expression {}", json),
            },
            _ => bail!("malformed type expression {}", json),
        }
    }

    /// Field types when this is an object, or a collection of objects
    pub fn object_fields(&self) -> Option<&BTreeMap<String, CtyType>> {
        match self {
            CtyType::Object(fields) => Some(fields),
            CtyType::List(inner) | CtyType::Set(inner) => match inner.as_ref() {
                CtyType::Object(fields) => Some(fields),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_primitive_and_collection_types() {
        assert_eq!(CtyType::parse(&json!("string")).unwrap(), CtyType::String);
        assert_eq!(
            CtyType::parse(&json!(["set", "string"])).unwrap(),
            CtyType::Set(Box::new(CtyType::String))
        );
        assert_eq!(
            CtyType::parse(&json!(["map", "number"])).unwrap(),
            CtyType::Map(Box::new(CtyType::Number))
        );
    }

    #[test]
    fn parse_object_collections() {
        let t = CtyType::parse(&json!(["list", ["object", {"namespace": "string"}]])).unwrap();
        let fields = t.object_fields().unwrap();
        assert_eq!(fields["namespace"], CtyType::String);
    }

    #[test]
    fn reject_unknown_types() {
        assert!(CtyType::parse(&json!("tuple")).is_err());
        assert!(CtyType::parse(&json!(["tuple", ["string"]])).is_err());
        assert!(CtyType::parse(&json!(42)).is_err());
    }

    #[test]
    fn attribute_roles() {
        let attr: SchemaAttribute =
            serde_json::from_value(json!({"type": "string", "optional": true, "computed": true}))
                .unwrap();
        assert_eq!(attr.role(), Role::Optional);

        let attr: SchemaAttribute =
            serde_json::from_value(json!({"type": "string", "computed": true})).unwrap();
        assert_eq!(attr.role(), Role::Computed);
    }

    #[test]
    fn block_nesting() {
        let block: SchemaBlockType = serde_json::from_value(json!({
            "nesting_mode": "list",
            "block": {},
            "max_items": 1
        }))
        .unwrap();
        assert_eq!(block.nesting(), Some(Nesting::List));
        assert!(block.is_singleton());
        assert!(!block.is_required());

        let block: SchemaBlockType =
            serde_json::from_value(json!({"nesting_mode": "map", "block": {}})).unwrap();
        assert_eq!(block.nesting(), None);
    }
}
