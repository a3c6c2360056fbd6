//! Keys of a [`Collection`](crate::Collection).
//!
//! Every entry of a collection is addressed by a [`Key`]: either a sequential
//! integer index (list-like use) or an explicit name (map-like use). String
//! keys that spell a canonical decimal integer are normalized to
//! [`Key::Index`], so `"3"` and `3` address the same entry.
//!
//! [`AsKey`] is the fallible counterpart of `Into<Key>`: it is implemented by
//! value types that can *sometimes* serve as keys (notably [`Value`]) and is
//! used by operations that turn values into keys, such as
//! [`combine`](crate::Collection::combine) and
//! [`group_by_field`](crate::Collection::group_by_field).

use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Key of a single collection entry.
///
/// Ordering puts every `Index` before every `Name`; indexes compare
/// numerically and names lexicographically.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Return the integer index, if this is an `Index` key.
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// Return the name, if this is a `Name` key.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(s) => Some(s),
        }
    }

    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    fn parse(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(i) if is_canonical_int(s) => Self::Index(i),
            _ => Self::Name(s.to_string()),
        }
    }
}

// "0", "42", "-7"; not "007", "-0", "+1" or " 1".
fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    !(digits == "0" && s.starts_with('-'))
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        if is_canonical_int(&value) {
            Self::parse(&value)
        } else {
            Self::Name(value)
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Index(i64::from(value))
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Self::parse(value.encode_utf8(&mut [0; 4]))
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(value: $t) -> Self {
                    Self::Index(i64::from(value))
                }
            }
        )*
    };
}
key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Key {
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: usize) -> Self {
        Self::Index(value as i64)
    }
}

impl From<u64> for Key {
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: u64) -> Self {
        Self::Index(value as i64)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Index(i) => serializer.serialize_i64(*i),
            Self::Name(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(i64),
            Name(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Index(i) => Self::Index(i),
            Raw::Name(s) => Self::from(s),
        })
    }
}

/// Fallible conversion of a value into a [`Key`].
///
/// Returns `None` when the value has no key representation (floats, nulls,
/// nested collections).
pub trait AsKey {
    fn as_key(&self) -> Option<Key>;
}

impl AsKey for Key {
    fn as_key(&self) -> Option<Key> {
        Some(self.clone())
    }
}

impl AsKey for String {
    fn as_key(&self) -> Option<Key> {
        Some(Key::from(self))
    }
}

impl AsKey for &str {
    fn as_key(&self) -> Option<Key> {
        Some(Key::from(*self))
    }
}

impl AsKey for bool {
    fn as_key(&self) -> Option<Key> {
        Some(Key::from(*self))
    }
}

impl AsKey for char {
    fn as_key(&self) -> Option<Key> {
        Some(Key::from(*self))
    }
}

macro_rules! as_key_via_from {
    ($($t:ty),*) => {
        $(
            impl AsKey for $t {
                fn as_key(&self) -> Option<Key> {
                    Some(Key::from(*self))
                }
            }
        )*
    };
}
as_key_via_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl AsKey for Value {
    fn as_key(&self) -> Option<Key> {
        match self {
            Value::Bool(b) => Some(Key::from(*b)),
            Value::Int(i) => Some(Key::Index(*i)),
            Value::Str(s) => Some(Key::from(s)),
            Value::Null | Value::Float(_) | Value::Collection(_) => None,
        }
    }
}
