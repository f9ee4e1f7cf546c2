//! codecs/record.rs
//! Structural record codec, the registry default.
//!
//! Typing is structural, not nominal: decode always builds an instance of the
//! descriptor's declared record, whatever record the mapping originated from.
//! Encoding against a narrower descriptor drops fields absent from it
//! (projection, by design); decoding the projection back against the wide
//! descriptor then fails on the dropped fields.
//!
//! Annotation discipline: every declared field must carry a real descriptor.
//! Fields declared `Any` fail before any partial encoding or decoding of the
//! record is attempted, naming the record and field.

use serde_json::Map;

use crate::codecs::{wire_kind_name, Cerealizer};
use crate::descriptor::TypeDescriptor;
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

pub struct RecordCerealizer;

type FieldList = [(String, TypeDescriptor)];

impl RecordCerealizer {
    fn declared_shape(ty: &TypeDescriptor) -> Result<(&str, &FieldList), CerealError> {
        match ty {
            TypeDescriptor::Record { name, fields } => Ok((name, fields)),
            other => Err(CerealError::TypeMismatch {
                expected: "record descriptor",
                found: format!("{other:?}"),
            }),
        }
    }
}

impl Cerealizer for RecordCerealizer {
    fn encode(
        &self,
        registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError> {
        let (name, fields) = Self::declared_shape(ty)?;

        // All annotations are checked up front so a bad field cannot leave a
        // half-encoded record behind.
        for (field, field_ty) in fields {
            if matches!(field_ty, TypeDescriptor::Any) {
                return Err(CerealError::no_annotation_ser(name, field));
            }
        }

        let mut out = Map::with_capacity(fields.len());
        for (field, field_ty) in fields {
            let field_value =
                value
                    .field(field)
                    .ok_or_else(|| CerealError::Serialization {
                        record: name.to_string(),
                        field: field.clone(),
                        msg: "is not present on the value.".to_string(),
                    })?;
            let codec = registry.resolve(field_ty);
            out.insert(field.clone(), codec.encode(registry, field_value, field_ty)?);
        }
        Ok(WireValue::Object(out))
    }

    fn decode(
        &self,
        registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError> {
        let (name, fields) = Self::declared_shape(ty)?;

        let map = match wire {
            WireValue::Object(map) => map,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "mapping",
                    found: wire_kind_name(other),
                })
            }
        };

        for (field, field_ty) in fields {
            if matches!(field_ty, TypeDescriptor::Any) {
                return Err(CerealError::no_annotation_de(name, field));
            }
        }

        let mut out = Vec::with_capacity(fields.len());
        for (field, field_ty) in fields {
            let codec = registry.resolve(field_ty);
            let decoded = match map.get(field) {
                Some(entry) => codec.decode(registry, entry, field_ty)?,
                // Absent entries are offered to the field's own codec as
                // null; only codecs that tolerate null (optionals) accept.
                None => codec
                    .decode(registry, &WireValue::Null, field_ty)
                    .map_err(|_| CerealError::missing_field(name, field))?,
            };
            out.push((field.clone(), decoded));
        }

        Ok(Value::Record {
            name: name.to_string(),
            fields: out,
        })
    }
}
