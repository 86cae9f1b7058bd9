//! Input - Typed argument values that may be deferred to the engine
//!
//! Every argument accepts either a literal or a [`Reference`] to a value
//! only known at apply time. [`Input`] keeps that choice explicit instead
//! of collapsing both into an untyped string.

use std::collections::BTreeMap;

use crate::resource::{Reference, Value};

/// Lossless conversion between a typed Rust value and an attribute [`Value`]
pub trait AttributeValue: Sized {
    fn into_value(self) -> Value;

    /// Returns `None` when `value` has a different shape
    fn from_value(value: &Value) -> Option<Self>;

    /// Terraform spelling of the type, used in error messages
    fn type_name() -> String;
}

impl AttributeValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }

    /// A reference inside a collection reads back as its interpolation
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Ref(r) => Some(r.to_interpolation()),
            _ => None,
        }
    }

    fn type_name() -> String {
        "string".to_string()
    }
}

impl AttributeValue for f64 {
    fn into_value(self) -> Value {
        Value::Number(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn type_name() -> String {
        "number".to_string()
    }
}

impl AttributeValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn type_name() -> String {
        "bool".to_string()
    }
}

impl<T: AttributeValue> AttributeValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(T::into_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::from_value).collect()
    }

    fn type_name() -> String {
        format!("list({})", T::type_name())
    }
}

impl<T: AttributeValue> AttributeValue for BTreeMap<String, T> {
    fn into_value(self) -> Value {
        Value::Map(self.into_iter().map(|(k, v)| (k, v.into_value())).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_map()?
            .iter()
            .map(|(k, v)| T::from_value(v).map(|v| (k.clone(), v)))
            .collect()
    }

    fn type_name() -> String {
        format!("map({})", T::type_name())
    }
}

/// Untyped passthrough for attributes whose schema type is dynamic
impl AttributeValue for Value {
    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn type_name() -> String {
        "dynamic".to_string()
    }
}

/// Either a literal value or a reference resolved by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    Literal(T),
    Deferred(Reference),
}

impl<T> Input<T> {
    pub fn literal(&self) -> Option<&T> {
        match self {
            Input::Literal(v) => Some(v),
            Input::Deferred(_) => None,
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Input::Literal(_) => None,
            Input::Deferred(r) => Some(r),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Input::Deferred(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Input<U> {
        match self {
            Input::Literal(v) => Input::Literal(f(v)),
            Input::Deferred(r) => Input::Deferred(r),
        }
    }
}

impl<T: AttributeValue> AttributeValue for Input<T> {
    fn into_value(self) -> Value {
        match self {
            Input::Literal(v) => v.into_value(),
            Input::Deferred(r) => Value::Ref(r),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Ref(r) => Some(Input::Deferred(r.clone())),
            other => T::from_value(other).map(Input::Literal),
        }
    }

    fn type_name() -> String {
        T::type_name()
    }
}

macro_rules! input_from_literal {
    ($target:ty: $($source:ty => $convert:expr),+ $(,)?) => {
        $(
            impl From<$source> for Input<$target> {
                fn from(value: $source) -> Self {
                    let convert: fn($source) -> $target = $convert;
                    Input::Literal(convert(value))
                }
            }
        )+

        impl From<Reference> for Input<$target> {
            fn from(r: Reference) -> Self {
                Input::Deferred(r)
            }
        }

        impl From<&Reference> for Input<$target> {
            fn from(r: &Reference) -> Self {
                Input::Deferred(r.clone())
            }
        }
    };
}

input_from_literal!(String:
    String => |v| v,
    &str => |v| v.to_string(),
    &String => |v| v.clone(),
);

input_from_literal!(f64:
    f64 => |v| v,
    i32 => f64::from,
);

input_from_literal!(bool:
    bool => |v| v,
);

input_from_literal!(Vec<String>:
    Vec<String> => |v| v,
    Vec<&str> => |v| v.into_iter().map(str::to_string).collect(),
);

input_from_literal!(Vec<f64>:
    Vec<f64> => |v| v,
);

input_from_literal!(Vec<bool>:
    Vec<bool> => |v| v,
);

input_from_literal!(BTreeMap<String, String>:
    BTreeMap<String, String> => |v| v,
    Vec<(&str, &str)> => |v| v.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
);

input_from_literal!(Value:
    Value => |v| v,
);

impl<const N: usize> From<[(&str, &str); N]> for Input<BTreeMap<String, String>> {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Input::Literal(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[&str; N]> for Input<Vec<String>> {
    fn from(items: [&str; N]) -> Self {
        Input::Literal(items.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::AttributePath;
    use crate::resource::{ResourceId, ResourceKind};

    #[test]
    fn literals_convert_from_plain_values() {
        let name: Input<String> = "demo".into();
        assert_eq!(name, Input::Literal("demo".to_string()));

        let count: Input<f64> = 3.into();
        assert_eq!(count, Input::Literal(3.0));

        let tags: Input<BTreeMap<String, String>> = [("env", "prod")].into();
        assert_eq!(
            tags.literal().unwrap().get("env"),
            Some(&"prod".to_string())
        );

        let subnets: Input<Vec<String>> = ["subnet-a", "subnet-b"].into();
        assert_eq!(subnets.literal().unwrap().len(), 2);
    }

    #[test]
    fn references_convert_to_deferred() {
        let r = Reference::attribute(
            ResourceKind::Resource,
            ResourceId::new("aws_ecs_cluster", "main"),
            AttributePath::attr("arn"),
        );
        let input: Input<String> = r.clone().into();
        assert!(input.is_deferred());
        assert_eq!(input.reference(), Some(&r));
        assert_eq!(input.into_value(), Value::Ref(r));
    }

    #[test]
    fn from_value_rejects_wrong_shape() {
        assert_eq!(String::from_value(&Value::Bool(true)), None);
        assert_eq!(
            Vec::<String>::from_value(&Value::List(vec![Value::Number(1.0)])),
            None
        );
        assert_eq!(
            Input::<bool>::from_value(&Value::Bool(false)),
            Some(Input::Literal(false))
        );
    }

    #[test]
    fn references_inside_collections_read_as_interpolations() {
        let list = Value::List(vec![
            Value::Ref(Reference::raw("aws_subnet.a.id")),
            Value::String("subnet-b".to_string()),
        ]);
        assert_eq!(
            Vec::<String>::from_value(&list),
            Some(vec!["${aws_subnet.a.id}".to_string(), "subnet-b".to_string()])
        );

        let tags = Value::Map(BTreeMap::from([(
            "owner".to_string(),
            Value::Ref(Reference::raw("var.owner")),
        )]));
        let tags = Input::<BTreeMap<String, String>>::from_value(&tags).unwrap();
        assert_eq!(
            tags.literal().unwrap().get("owner"),
            Some(&"${var.owner}".to_string())
        );

        // a whole-value reference stays deferred
        let whole = Value::Ref(Reference::raw("var.subnets"));
        assert!(Input::<Vec<String>>::from_value(&whole).unwrap().is_deferred());
    }

    #[test]
    fn deferred_values_survive_round_trip() {
        let input: Input<f64> = Input::Deferred(Reference::raw("var.count"));
        let value = input.clone().into_value();
        assert_eq!(Input::<f64>::from_value(&value), Some(input));
    }

    #[test]
    fn type_names_nest() {
        assert_eq!(Vec::<String>::type_name(), "list(string)");
        assert_eq!(BTreeMap::<String, f64>::type_name(), "map(number)");
        assert_eq!(Input::<bool>::type_name(), "bool");
    }
}
