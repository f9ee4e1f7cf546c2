//! descriptor.rs
//! Closed type descriptors driving codec dispatch.
//!
//! Design notes:
//! - A descriptor is a passive key: it names a value's shape, never how to
//!   encode it. The registry maps descriptors to codecs.
//! - Union member order is significant: it defines encode/decode tie-break
//!   priority. Record field order is significant for iteration only; encoded
//!   maps are accessed by field name.
//! - `Any` means "no type information". The record codec refuses to touch a
//!   field declared `Any` (see `codecs/record.rs`), the static counterpart of
//!   an unannotated constructor parameter.

use crate::value::Value;

/// The scalar kinds of the wire model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
}

/// Generic origin of a descriptor or runtime value.
///
/// The registry falls back to origin lookup when no exact descriptor entry
/// exists, so a single "list" registration covers every `List(_)` descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    Primitive,
    List,
    Union,
    Enum,
    Record,
    Encrypted,
}

/// Descriptor of a value's shape.
///
/// Descriptors are cheap to clone and hashable; the registry keys its exact
/// table with them directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// No type information available.
    Any,
    Primitive(PrimitiveKind),
    List(Box<TypeDescriptor>),
    /// Members in declared order; first match wins on both paths.
    Union(Vec<TypeDescriptor>),
    Enum {
        name: String,
        symbols: Vec<String>,
    },
    Record {
        /// Fully-qualified record name, used verbatim in error messages.
        name: String,
        /// Declared fields in order.
        fields: Vec<(String, TypeDescriptor)>,
    },
    Encrypted(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn origin(&self) -> Origin {
        match self {
            TypeDescriptor::Any | TypeDescriptor::Primitive(_) => Origin::Primitive,
            TypeDescriptor::List(_) => Origin::List,
            TypeDescriptor::Union(_) => Origin::Union,
            TypeDescriptor::Enum { .. } => Origin::Enum,
            TypeDescriptor::Record { .. } => Origin::Record,
            TypeDescriptor::Encrypted(_) => Origin::Encrypted,
        }
    }

    /// Infer a descriptor from a runtime value.
    ///
    /// This is the entry path for `encode` calls that carry no declared type:
    /// the value's own shape stands in for the annotation. An empty list
    /// infers `List(Any)`, which is harmless because the list codec never
    /// consults the element codec for zero elements.
    pub fn of_value(value: &Value) -> TypeDescriptor {
        match value {
            Value::Null => TypeDescriptor::Primitive(PrimitiveKind::Null),
            Value::Bool(_) => TypeDescriptor::Primitive(PrimitiveKind::Bool),
            Value::Int(_) => TypeDescriptor::Primitive(PrimitiveKind::Int),
            Value::Float(_) => TypeDescriptor::Primitive(PrimitiveKind::Float),
            Value::Str(_) => TypeDescriptor::Primitive(PrimitiveKind::Str),
            Value::List(items) => {
                let elem = items
                    .first()
                    .map(TypeDescriptor::of_value)
                    .unwrap_or(TypeDescriptor::Any);
                TypeDescriptor::List(Box::new(elem))
            }
            Value::Record { name, fields } => TypeDescriptor::Record {
                name: name.clone(),
                fields: fields
                    .iter()
                    .map(|(f, v)| (f.clone(), TypeDescriptor::of_value(v)))
                    .collect(),
            },
            Value::Enum { name, symbol } => TypeDescriptor::Enum {
                name: name.clone(),
                symbols: vec![symbol.clone()],
            },
            Value::Encrypted(env) => {
                let inner = env
                    .value
                    .as_deref()
                    .map(TypeDescriptor::of_value)
                    .unwrap_or(TypeDescriptor::Primitive(PrimitiveKind::Null));
                TypeDescriptor::Encrypted(Box::new(inner))
            }
        }
    }

    // --- builders -----------------------------------------------------------

    pub fn null() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Null)
    }

    pub fn boolean() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Bool)
    }

    pub fn int() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Int)
    }

    pub fn float() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Float)
    }

    pub fn string() -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Str)
    }

    pub fn list(elem: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::List(Box::new(elem))
    }

    pub fn union<I: IntoIterator<Item = TypeDescriptor>>(members: I) -> TypeDescriptor {
        TypeDescriptor::Union(members.into_iter().collect())
    }

    /// `Optional[T]`: union of T and null, T first.
    pub fn optional(inner: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::Union(vec![inner, TypeDescriptor::null()])
    }

    pub fn enumeration<I, S>(name: &str, symbols: I) -> TypeDescriptor
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeDescriptor::Enum {
            name: name.to_string(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn record<I, S>(name: &str, fields: I) -> TypeDescriptor
    where
        I: IntoIterator<Item = (S, TypeDescriptor)>,
        S: Into<String>,
    {
        TypeDescriptor::Record {
            name: name.to_string(),
            fields: fields.into_iter().map(|(f, t)| (f.into(), t)).collect(),
        }
    }

    pub fn encrypted(inner: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::Encrypted(Box::new(inner))
    }
}
