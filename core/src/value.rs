//! value.rs
//! Native value model: what codecs encode from and decode into.
//!
//! Decode is structural, not nominal: a record value's `name` is whatever the
//! descriptor it was decoded against declares. Two descriptors with identical
//! field shape are interchangeable (duck-typed serialization).

use std::fmt;

use crate::descriptor::Origin;

/// Universal JSON-like interchange tree produced and consumed by every codec.
pub type WireValue = serde_json::Value;

/// Container for a value that is encrypted on the wire.
///
/// `value` is `None` when initially unset, or after decoding an envelope
/// whose `key_id` is not present in the local key ring (partial-key readers
/// keep the ciphertext's `key_id` for observability, never the plaintext).
#[derive(Clone, PartialEq)]
pub struct Encrypted {
    pub key_id: String,
    pub value: Option<Box<Value>>,
}

impl Encrypted {
    pub fn new(key_id: &str, value: Value) -> Encrypted {
        Encrypted {
            key_id: key_id.to_string(),
            value: Some(Box::new(value)),
        }
    }

    /// An envelope with no recovered plaintext (missing-key decode result).
    pub fn opaque(key_id: &str) -> Encrypted {
        Encrypted {
            key_id: key_id.to_string(),
            value: None,
        }
    }
}

// Plaintext must not leak through logs or assertion output.
impl fmt::Debug for Encrypted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encrypted")
            .field("key_id", &self.key_id)
            .field("value", &"***")
            .finish()
    }
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Record {
        name: String,
        fields: Vec<(String, Value)>,
    },
    Enum {
        name: String,
        symbol: String,
    },
    Encrypted(Encrypted),
}

impl Value {
    /// Generic origin of this value's kind, for runtime-type registry lookup.
    pub fn origin(&self) -> Origin {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                Origin::Primitive
            }
            Value::List(_) => Origin::List,
            Value::Record { .. } => Origin::Record,
            Value::Enum { .. } => Origin::Enum,
            Value::Encrypted(_) => Origin::Encrypted,
        }
    }

    /// Look up a record field by name. `None` for non-record values.
    pub fn field(&self, field_name: &str) -> Option<&Value> {
        match self {
            Value::Record { fields, .. } => fields
                .iter()
                .find(|(f, _)| f == field_name)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Short kind tag for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Record { .. } => "record",
            Value::Enum { .. } => "enum",
            Value::Encrypted(_) => "encrypted",
        }
    }

    pub fn record<I, S>(name: &str, fields: I) -> Value
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Value::Record {
            name: name.to_string(),
            fields: fields.into_iter().map(|(f, v)| (f.into(), v)).collect(),
        }
    }

    pub fn symbol(enum_name: &str, symbol: &str) -> Value {
        Value::Enum {
            name: enum_name.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl From<Encrypted> for Value {
    fn from(v: Encrypted) -> Value {
        Value::Encrypted(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}
