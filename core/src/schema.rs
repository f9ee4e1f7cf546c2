//! schema.rs
//! Schema-document generation for the external binary-container adapter.
//!
//! The adapter pairs one of these schema documents with the wire tree the
//! driver produces, and hands both to a third-party container reader/writer.
//! Value shape stays the driver's sole authority; nothing here re-walks
//! values.
//!
//! Fixed mapping:
//! - primitives → string / int / double / boolean / null
//! - list       → {"type": "array", "items": …}
//! - enum       → {"type": "enum", "name", "symbols"}
//! - union      → ordered list of member schemas
//! - Encrypted(T) → the 4-field envelope record; its `value` slot is the
//!   union [schema(T), "string"], string standing for the ciphertext form
//! - record     → {"namespace", "type": "record", "name", "fields"}, with
//!   primitive and union field types written in their short form

use serde_json::{json, Map};

use crate::descriptor::{PrimitiveKind, TypeDescriptor};
use crate::types::CerealError;
use crate::value::WireValue;

fn alias(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Null => "null",
        PrimitiveKind::Bool => "boolean",
        PrimitiveKind::Int => "int",
        PrimitiveKind::Float => "double",
        PrimitiveKind::Str => "string",
    }
}

/// Build the schema document for a descriptor. `namespace` qualifies nested
/// record names, threaded as `{namespace}.{Record}.{field}` on recursion.
pub fn container_schema(ty: &TypeDescriptor, namespace: &str) -> Result<WireValue, CerealError> {
    schema(ty, namespace)
}

fn schema(ty: &TypeDescriptor, namespace: &str) -> Result<WireValue, CerealError> {
    match ty {
        TypeDescriptor::Any => Err(CerealError::Serialization {
            record: namespace.to_string(),
            field: "<unannotated>".to_string(),
            msg: "has no annotation.".to_string(),
        }),
        TypeDescriptor::Primitive(kind) => Ok(json!({ "type": alias(*kind) })),
        TypeDescriptor::List(elem) => Ok(json!({
            "type": "array",
            "items": short_form(elem, namespace)?,
        })),
        TypeDescriptor::Enum { name, symbols } => Ok(json!({
            "type": "enum",
            "name": name,
            "symbols": symbols,
        })),
        TypeDescriptor::Union(members) => {
            let mut out = Vec::with_capacity(members.len());
            for member in members {
                out.push(short_form(member, namespace)?);
            }
            Ok(WireValue::Array(out))
        }
        TypeDescriptor::Encrypted(inner) => {
            let inner_ns = format!("{namespace}.Encrypted.value");
            let mut value_schemas = match short_form(inner, &inner_ns)? {
                WireValue::Array(members) => members,
                one => vec![one],
            };
            let string_schema = json!("string");
            if !value_schemas.contains(&string_schema) {
                value_schemas.push(string_schema);
            }
            Ok(json!({
                "namespace": namespace,
                "type": "record",
                "name": "Encrypted",
                "fields": [
                    { "name": "key_id", "type": "string" },
                    { "name": "value", "type": value_schemas },
                    { "name": "tag", "type": "string" },
                    { "name": "nonce", "type": "string" },
                ],
            }))
        }
        TypeDescriptor::Record { name, fields } => {
            let mut out = Vec::with_capacity(fields.len());
            for (field, field_ty) in fields {
                if matches!(field_ty, TypeDescriptor::Any) {
                    return Err(CerealError::no_annotation_ser(name, field));
                }
                let field_ns = format!("{namespace}.{name}.{field}");
                out.push(json!({
                    "name": field,
                    "type": short_form(field_ty, &field_ns)?,
                }));
            }
            let mut record = Map::new();
            record.insert("namespace".to_string(), json!(namespace));
            record.insert("type".to_string(), json!("record"));
            record.insert("name".to_string(), json!(name));
            record.insert("fields".to_string(), WireValue::Array(out));
            Ok(WireValue::Object(record))
        }
    }
}

/// Short schema form used inside arrays, unions, and record fields:
/// primitives collapse to their alias; unions stay bare member lists; all
/// other shapes keep the full schema object.
fn short_form(ty: &TypeDescriptor, namespace: &str) -> Result<WireValue, CerealError> {
    match ty {
        TypeDescriptor::Primitive(kind) => Ok(json!(alias(*kind))),
        _ => schema(ty, namespace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor as T;

    #[test]
    fn primitive_schema_uses_fixed_aliases() {
        let s = container_schema(&T::float(), "ns").unwrap();
        assert_eq!(s, json!({ "type": "double" }));
    }

    #[test]
    fn unannotated_field_is_rejected() {
        let ty = T::record("ns.Widget", [("mystery", T::Any)]);
        let err = container_schema(&ty, "ns").unwrap_err();
        assert_eq!(err.to_string(), "\"ns.Widget\": \"mystery\" has no annotation.");
    }
}
