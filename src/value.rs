//! Dynamically typed values for heterogeneous collections.
//!
//! [`Value`] lets a single [`Collection`] hold mixed data -- numbers next to
//! strings next to nested records -- the way raw JSON does. Nested arrays and
//! objects are both represented as [`Value::Collection`]: arrays become
//! list-like collections, objects become name-keyed collections in document
//! order.
//!
//! Values are totally ordered and hashable so they can be sorted, grouped and
//! de-duplicated like any other element type:
//! `Null < Bool < numbers < Str < Collection`. Integers and floats compare
//! numerically; when numerically equal, the integer sorts first. Floats
//! compare by total order, so `NaN == NaN`.
//!
//! ```
//! use ironcollect::{Collection, Value};
//! use serde_json::json;
//!
//! let people = Collection::from_json(json!([
//!     {"name": "al", "age": 30},
//!     {"name": "cuy", "age": 25},
//! ]));
//! let first = people.first().unwrap();
//! assert_eq!(first.get("name"), Some(&Value::from("al")));
//! ```

use crate::collection::Collection;
use crate::key::Key;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Collection(Collection<Value>),
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float` values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_collection(&self) -> Option<&Collection<Value>> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Field lookup on a nested collection; `None` for scalars.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.as_collection()?.get(key)
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Collection(_) => "collection",
        }
    }

    /// Convert into a `serde_json::Value`. Non-finite floats become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as J;
        match self {
            Self::Null => J::Null,
            Self::Bool(b) => J::Bool(*b),
            Self::Int(i) => J::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(J::Null, J::Number),
            Self::Str(s) => J::String(s.clone()),
            Self::Collection(c) if c.is_list() => {
                J::Array(c.values_iter().map(Value::to_json).collect())
            }
            Self::Collection(c) => J::Object(
                c.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Str(_) => 3,
            Self::Collection(_) => 4,
        }
    }
}

impl Ord for Value {
    #[allow(clippy::cast_precision_loss)]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Self::Int(a), Self::Float(b)) => OrderedFloat(*a as f64)
                .cmp(&OrderedFloat(*b))
                .then(Ordering::Less),
            (Self::Float(a), Self::Int(b)) => OrderedFloat(*a)
                .cmp(&OrderedFloat(*b as f64))
                .then(Ordering::Greater),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Collection(a), Self::Collection(b)) => a.iter().cmp(b.iter()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Self::Float(f) => {
                1u8.hash(state);
                OrderedFloat(*f).hash(state);
            }
            Self::Str(s) => s.hash(state),
            Self::Collection(c) => c.hash(state),
        }
    }
}

/// Strings render raw, nulls as the empty string, collections as JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Collection(_) => write!(f, "{}", self.to_json()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Collection(c) => c.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match json {
            J::Null => Self::Null,
            J::Bool(b) => Self::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            J::String(s) => Self::Str(s),
            J::Array(items) => Self::Collection(items.into_iter().map(Value::from).collect()),
            J::Object(map) => Self::Collection(Collection::from_pairs(
                map.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

impl Collection<Value> {
    /// Build a collection from raw JSON data.
    ///
    /// Arrays become list-like collections, objects become keyed
    /// collections in document order, and a scalar becomes a one-element
    /// list.
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        match Value::from(json) {
            Value::Collection(c) => c,
            scalar => Collection::from(vec![scalar]),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}
value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Collection(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Collection<T>> for Value {
    fn from(c: Collection<T>) -> Self {
        Self::Collection(Collection::from_unique_entries(
            c.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ordering_ranks_types_then_values() {
        let mut v = vec![
            Value::from("b"),
            Value::from(2.5),
            Value::Null,
            Value::from(2),
            Value::from(true),
            Value::from("a"),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Value::Null,
                Value::from(true),
                Value::from(2),
                Value::from(2.5),
                Value::from("a"),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn int_and_float_are_distinct_but_adjacent() {
        assert_ne!(Value::from(3), Value::from(3.0));
        assert!(Value::from(3) < Value::from(3.0));
        assert!(Value::from(3.0) < Value::from(4));
    }

    #[test]
    fn nan_equals_itself() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn json_objects_keep_document_order() {
        let v = Value::from(json!({"z": 1, "a": [1, 2]}));
        let c = v.as_collection().unwrap();
        assert_eq!(c.keys().map(ToString::to_string).collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(v.to_json(), json!({"z": 1, "a": [1, 2]}));
    }

    #[test]
    fn display_renders_scalars_raw() {
        assert_eq!(Value::from("al").to_string(), "al");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
    }

    #[test]
    fn scalar_json_wraps_into_single_element_list() {
        let c = Collection::from_json(json!(5));
        assert_eq!(c.all(), vec![Value::from(5)]);
    }
}
