//! registry.rs
//! Descriptor-to-codec resolution with a guaranteed default.
//!
//! Resolution order, first match wins:
//! 1. Exact descriptor match.
//! 2. Generic-origin match (one "list" entry covers every `List(_)`).
//! 3. For value-driven lookups, the runtime value's origin.
//! 4. The default codec.
//!
//! `resolve` is total: there is no "no codec found" error at this boundary.
//! Errors surface only inside a chosen codec.
//!
//! The registry is passed into every encode/decode call as a context
//! parameter; codecs never store a reference back to it. That keeps recursive
//! lookups (list elements, record fields, encrypted inner values) working
//! without an ownership cycle, and makes a frozen registry freely shareable
//! across threads.

use std::collections::HashMap;

use crate::codecs::Cerealizer;
use crate::descriptor::{Origin, TypeDescriptor};
use crate::value::Value;

pub struct Registry {
    exact: HashMap<TypeDescriptor, Box<dyn Cerealizer>>,
    origin: HashMap<Origin, Box<dyn Cerealizer>>,
    default: Box<dyn Cerealizer>,
}

impl Registry {
    pub fn new(default: Box<dyn Cerealizer>) -> Registry {
        Registry {
            exact: HashMap::new(),
            origin: HashMap::new(),
            default,
        }
    }

    /// Register a codec for an exact descriptor. Construction phase only;
    /// the registry must be frozen before concurrent use.
    pub fn register(&mut self, descriptor: TypeDescriptor, codec: Box<dyn Cerealizer>) {
        self.exact.insert(descriptor, codec);
    }

    /// Register a codec for a whole generic origin.
    pub fn register_origin(&mut self, origin: Origin, codec: Box<dyn Cerealizer>) {
        self.origin.insert(origin, codec);
    }

    pub fn set_default(&mut self, codec: Box<dyn Cerealizer>) {
        self.default = codec;
    }

    /// Resolve a declared descriptor to a codec. Total.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> &dyn Cerealizer {
        if let Some(codec) = self.exact.get(descriptor) {
            return codec.as_ref();
        }
        if let Some(codec) = self.origin.get(&descriptor.origin()) {
            return codec.as_ref();
        }
        self.default.as_ref()
    }

    /// Resolve by a runtime value's kind, for callers that hold a value but
    /// no declared type (the envelope codec's inner-value path). Total.
    pub fn resolve_value(&self, value: &Value) -> &dyn Cerealizer {
        if let Some(codec) = self.origin.get(&value.origin()) {
            return codec.as_ref();
        }
        self.default.as_ref()
    }
}
