//! Attribute values.
//!
//! Values are the plain data a resource carries next to its relations. They
//! mirror JSON: whatever a caller can put in an action's `data` object
//! deserializes into a [`Value`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One attribute value.
///
/// `Null` is stored like any other value; an edit with `Null` keeps the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

/// Attribute map of a resource, keyed by attribute name.
///
/// Ordered so resources compare and serialize deterministically.
pub type Attributes = BTreeMap<String, Value>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders as JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T>(
            f: &mut fmt::Formatter<'_>,
            open: char,
            close: char,
            items: impl Iterator<Item = T>,
            mut each: impl FnMut(&mut fmt::Formatter<'_>, T) -> fmt::Result,
        ) -> fmt::Result {
            write!(f, "{open}")?;
            for (n, item) in items.enumerate() {
                if n > 0 {
                    f.write_str(",")?;
                }
                each(f, item)?;
            }
            write!(f, "{close}")
        }

        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::List(items) => join(f, '[', ']', items.iter(), |f, item| write!(f, "{item}")),
            Value::Map(entries) => join(f, '{', '}', entries.iter(), |f, (key, value)| {
                write!(f, "{key:?}:{value}")
            }),
        }
    }
}

macro_rules! value_from {
    ($($source:ty => |$v:ident| $make:expr),+ $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from($v: $source) -> Self {
                    $make
                }
            }
        )+
    };
}

value_from! {
    bool => |v| Value::Bool(v),
    i32 => |v| Value::Int(i64::from(v)),
    i64 => |v| Value::Int(v),
    f64 => |v| Value::Float(v),
    String => |v| Value::String(v),
    &str => |v| Value::String(v.to_owned()),
    Vec<Value> => |v| Value::List(v),
    Attributes => |v| Value::Map(v),
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Build an [`Attributes`] map: `attrs! { "title" => "Hello", "views" => 3i64 }`.
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::Attributes::new();
        $(attributes.insert(($key).to_string(), $crate::Value::from($value));)+
        attributes
    }};
}
