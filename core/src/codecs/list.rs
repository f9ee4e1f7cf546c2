//! codecs/list.rs
//! Element-wise delegation for `List(T)`, order preserving.
//!
//! The element codec is resolved once per call, not once per item.

use crate::codecs::{wire_kind_name, Cerealizer};
use crate::descriptor::TypeDescriptor;
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

pub struct ListCerealizer;

impl ListCerealizer {
    fn element_descriptor(ty: &TypeDescriptor) -> Result<&TypeDescriptor, CerealError> {
        match ty {
            TypeDescriptor::List(elem) => Ok(elem),
            other => Err(CerealError::TypeMismatch {
                expected: "list descriptor",
                found: format!("{other:?}"),
            }),
        }
    }
}

impl Cerealizer for ListCerealizer {
    fn encode(
        &self,
        registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError> {
        let items = match value {
            Value::List(items) => items,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "list",
                    found: other.kind_name().to_string(),
                })
            }
        };
        let elem_ty = Self::element_descriptor(ty)?;
        let codec = registry.resolve(elem_ty);
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(codec.encode(registry, item, elem_ty)?);
        }
        Ok(WireValue::Array(out))
    }

    fn decode(
        &self,
        registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError> {
        let items = match wire {
            WireValue::Array(items) => items,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "sequence",
                    found: wire_kind_name(other),
                })
            }
        };
        let elem_ty = Self::element_descriptor(ty)?;
        let codec = registry.resolve(elem_ty);
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(codec.decode(registry, item, elem_ty)?);
        }
        Ok(Value::List(out))
    }
}
