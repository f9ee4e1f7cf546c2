//! codecs/union.rs
//! Member resolution for `Union(members)`, in declared order.
//!
//! Encode match rule, per member m:
//!   (a) the value's kind equals m exactly (primitive kind equality; enums
//!       and records compare by name), or
//!   (b) the value's origin equals m's origin, for the container members
//!       List and Encrypted.
//! Decode match rule, per member m:
//!   (a) m is a primitive whose kind equals the wire value's own kind, or
//!   (b) m's origin matches the wire value's structural kind: a List member
//!       matches any sequence; a Record or Encrypted member matches a
//!       mapping.
//!
//! A decoded wire value carries no type tag, so mapping-shaped members cannot
//! be told apart by shape. Policy: the FIRST Record or Encrypted member in
//! declared order claims a mapping. Unions should therefore carry at most one
//! mapping-shaped member; with more than one, the first always wins. Enum
//! members are never matched from a bare wire string for the same reason.
//!
//! First match wins on both paths; no match is fatal.

use crate::codecs::Cerealizer;
use crate::descriptor::{PrimitiveKind, TypeDescriptor};
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

pub struct UnionCerealizer;

fn matches_value(member: &TypeDescriptor, value: &Value) -> bool {
    match (member, value) {
        // (a) exact kind / name equality.
        (TypeDescriptor::Primitive(PrimitiveKind::Null), Value::Null) => true,
        (TypeDescriptor::Primitive(PrimitiveKind::Bool), Value::Bool(_)) => true,
        (TypeDescriptor::Primitive(PrimitiveKind::Int), Value::Int(_)) => true,
        (TypeDescriptor::Primitive(PrimitiveKind::Float), Value::Float(_)) => true,
        (TypeDescriptor::Primitive(PrimitiveKind::Str), Value::Str(_)) => true,
        (TypeDescriptor::Enum { name, .. }, Value::Enum { name: vn, .. }) => name == vn,
        (TypeDescriptor::Record { name, .. }, Value::Record { name: vn, .. }) => name == vn,
        // (b) origin match for containers.
        (TypeDescriptor::List(_), Value::List(_)) => true,
        (TypeDescriptor::Encrypted(_), Value::Encrypted(_)) => true,
        _ => false,
    }
}

fn matches_wire(member: &TypeDescriptor, wire: &WireValue) -> bool {
    match member {
        // (a) primitive members match the wire value's own kind.
        TypeDescriptor::Primitive(PrimitiveKind::Null) => wire.is_null(),
        TypeDescriptor::Primitive(PrimitiveKind::Bool) => wire.is_boolean(),
        TypeDescriptor::Primitive(PrimitiveKind::Int) => wire.is_i64(),
        TypeDescriptor::Primitive(PrimitiveKind::Float) => wire.is_f64(),
        TypeDescriptor::Primitive(PrimitiveKind::Str) => wire.is_string(),
        // (b) structural kind for containers; first mapping-shaped member
        // claims a mapping (see module docs).
        TypeDescriptor::List(_) => wire.is_array(),
        TypeDescriptor::Record { .. } | TypeDescriptor::Encrypted(_) => wire.is_object(),
        _ => false,
    }
}

impl Cerealizer for UnionCerealizer {
    fn encode(
        &self,
        registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError> {
        let members = match ty {
            TypeDescriptor::Union(members) => members,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "union descriptor",
                    found: format!("{other:?}"),
                })
            }
        };
        for member in members {
            if matches_value(member, value) {
                return registry.resolve(member).encode(registry, value, member);
            }
        }
        Err(CerealError::UnresolvedUnionMember { op: "encode" })
    }

    fn decode(
        &self,
        registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError> {
        let members = match ty {
            TypeDescriptor::Union(members) => members,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "union descriptor",
                    found: format!("{other:?}"),
                })
            }
        };
        for member in members {
            if matches_wire(member, wire) {
                return registry.resolve(member).decode(registry, wire, member);
            }
        }
        Err(CerealError::UnresolvedUnionMember { op: "decode" })
    }
}
