//! codecs/passthrough.rs
//! Identity codec for scalars: strings, numbers, booleans, null.
//!
//! A null value encodes to null under any declared primitive kind; decode
//! accepts null only under the null kind (or with no declared kind at all),
//! so an absent record field surfaces as missing instead of silently null.
//! Declared `Float` accepts an integer value (lossless widening); every other
//! kind mismatch is an error rather than a coercion.

use serde_json::Number;

use crate::codecs::{wire_kind_name, Cerealizer};
use crate::descriptor::{PrimitiveKind, TypeDescriptor};
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

pub struct PassthroughCerealizer;

impl PassthroughCerealizer {
    fn declared_kind(ty: &TypeDescriptor) -> PrimitiveKind {
        match ty {
            TypeDescriptor::Primitive(kind) => *kind,
            // Tier-3 (value-driven) hits land here with `Any`; behave like the
            // value's own kind by accepting whatever scalar arrives.
            _ => PrimitiveKind::Null,
        }
    }

    fn is_any(ty: &TypeDescriptor) -> bool {
        !matches!(ty, TypeDescriptor::Primitive(_))
    }
}

impl Cerealizer for PassthroughCerealizer {
    fn encode(
        &self,
        _registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError> {
        if let Value::Null = value {
            return Ok(WireValue::Null);
        }
        if Self::is_any(ty) {
            return match value {
                Value::Bool(b) => Ok(WireValue::Bool(*b)),
                Value::Int(n) => Ok(WireValue::Number((*n).into())),
                Value::Float(n) => float_wire(*n),
                Value::Str(s) => Ok(WireValue::String(s.clone())),
                other => Err(CerealError::TypeMismatch {
                    expected: "primitive",
                    found: other.kind_name().to_string(),
                }),
            };
        }
        match (Self::declared_kind(ty), value) {
            (PrimitiveKind::Bool, Value::Bool(b)) => Ok(WireValue::Bool(*b)),
            (PrimitiveKind::Int, Value::Int(n)) => Ok(WireValue::Number((*n).into())),
            (PrimitiveKind::Float, Value::Float(n)) => float_wire(*n),
            (PrimitiveKind::Float, Value::Int(n)) => float_wire(*n as f64),
            (PrimitiveKind::Str, Value::Str(s)) => Ok(WireValue::String(s.clone())),
            (kind, other) => Err(CerealError::TypeMismatch {
                expected: kind_name(kind),
                found: other.kind_name().to_string(),
            }),
        }
    }

    fn decode(
        &self,
        _registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError> {
        if Self::is_any(ty) {
            return match wire {
                WireValue::Null => Ok(Value::Null),
                WireValue::Bool(b) => Ok(Value::Bool(*b)),
                WireValue::Number(n) if n.is_i64() => Ok(Value::Int(n.as_i64().unwrap_or(0))),
                WireValue::Number(n) => Ok(Value::Float(n.as_f64().unwrap_or(0.0))),
                WireValue::String(s) => Ok(Value::Str(s.clone())),
                other => Err(CerealError::TypeMismatch {
                    expected: "primitive",
                    found: wire_kind_name(other),
                }),
            };
        }
        let kind = Self::declared_kind(ty);
        match (kind, wire) {
            // Null decodes as null only under the null kind; a record field
            // declared e.g. string must not silently swallow an absent entry.
            (PrimitiveKind::Null, WireValue::Null) => Ok(Value::Null),
            (PrimitiveKind::Bool, WireValue::Bool(b)) => Ok(Value::Bool(*b)),
            (PrimitiveKind::Int, WireValue::Number(n)) if n.is_i64() => {
                Ok(Value::Int(n.as_i64().unwrap_or(0)))
            }
            (PrimitiveKind::Float, WireValue::Number(n)) => {
                Ok(Value::Float(n.as_f64().unwrap_or(0.0)))
            }
            (PrimitiveKind::Str, WireValue::String(s)) => Ok(Value::Str(s.clone())),
            (_, other) => Err(CerealError::TypeMismatch {
                expected: kind_name(kind),
                found: wire_kind_name(other),
            }),
        }
    }
}

fn kind_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Null => "null",
        PrimitiveKind::Bool => "bool",
        PrimitiveKind::Int => "int",
        PrimitiveKind::Float => "float",
        PrimitiveKind::Str => "string",
    }
}

fn float_wire(n: f64) -> Result<WireValue, CerealError> {
    // JSON has no encoding for NaN or infinities.
    Number::from_f64(n)
        .map(WireValue::Number)
        .ok_or(CerealError::TypeMismatch {
            expected: "finite float",
            found: n.to_string(),
        })
}
