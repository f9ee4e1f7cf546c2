//! cereal-core
//!
//! Type-directed codec engine: converts between native structured values and
//! a JSON-like wire tree, with authenticated-encryption envelopes that
//! compose at any nesting depth.
//!
//! The engine is a registry of codecs keyed by type descriptor. Codecs never
//! call each other directly; every nested field, list element, or encrypted
//! inner value recurses back through the registry, which is what lets the
//! union, list, and envelope codecs compose transparently.

#![forbid(unsafe_code)]

// Shared and top level
pub mod descriptor;
pub mod types;
pub mod value;

// Dispatch engine
pub mod codecs;
pub mod registry;

// Crypto envelope
pub mod crypto;

// Entry points
pub mod driver;
pub mod schema;

pub use codecs::Cerealizer;
pub use crypto::KeyRing;
pub use descriptor::{Origin, PrimitiveKind, TypeDescriptor};
pub use driver::JsonCerealizer;
pub use registry::Registry;
pub use types::CerealError;
pub use value::{Encrypted, Value, WireValue};
