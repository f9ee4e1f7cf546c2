//! codecs/mod.rs
//! The codec family: one `Cerealizer` per descriptor shape.
//!
//! Notes:
//! - Codecs recurse only through the registry passed into each call, never by
//!   naming a concrete codec. That indirection is what lets the encrypted
//!   wrapper, union, and list compose at arbitrary nesting depth.
//! - Codecs are stateless apart from the envelope codec's key ring, and are
//!   `Send + Sync` so one frozen registry serves concurrent callers.

pub mod encrypted;
pub mod enumeration;
pub mod list;
pub mod passthrough;
pub mod record;
pub mod union;

pub use encrypted::*;
pub use enumeration::*;
pub use list::*;
pub use passthrough::*;
pub use record::*;
pub use union::*;

use crate::descriptor::TypeDescriptor;
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

/// Bidirectional encode/decode unit for one descriptor shape.
pub trait Cerealizer: Send + Sync {
    fn encode(
        &self,
        registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError>;

    fn decode(
        &self,
        registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError>;
}

/// Short kind tag of a wire value for error messages.
pub(crate) fn wire_kind_name(wire: &WireValue) -> String {
    match wire {
        WireValue::Null => "null".to_string(),
        WireValue::Bool(_) => "bool".to_string(),
        WireValue::Number(_) => "number".to_string(),
        WireValue::String(_) => "string".to_string(),
        WireValue::Array(_) => "sequence".to_string(),
        WireValue::Object(_) => "mapping".to_string(),
    }
}
