//! driver.rs
//! Top-level value-tree driver: one pre-populated registry behind a
//! two-method API, plus a UTF-8 JSON byte variant.
//!
//! Composition root only; every algorithm lives in the codecs. Configure the
//! registry before first use and treat the driver as read-only afterwards
//! (configure-then-freeze); key rotation means building a new driver.

use crate::codecs::{
    EncryptedCerealizer, EnumCerealizer, ListCerealizer, PassthroughCerealizer, RecordCerealizer,
    UnionCerealizer,
};
use crate::crypto::KeyRing;
use crate::descriptor::{Origin, PrimitiveKind, TypeDescriptor};
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

pub struct JsonCerealizer {
    registry: Registry,
}

impl JsonCerealizer {
    /// Driver with an empty key ring: encrypting any envelope fails with
    /// `KeyNotFound`, decrypting degrades gracefully to an opaque value.
    pub fn new() -> JsonCerealizer {
        JsonCerealizer::with_keys(KeyRing::new())
    }

    pub fn with_keys(keys: KeyRing) -> JsonCerealizer {
        // The structural record codec is the default: anything unmapped is
        // treated as a record shape.
        let mut registry = Registry::new(Box::new(RecordCerealizer));

        for kind in [
            PrimitiveKind::Null,
            PrimitiveKind::Bool,
            PrimitiveKind::Int,
            PrimitiveKind::Float,
            PrimitiveKind::Str,
        ] {
            registry.register(
                TypeDescriptor::Primitive(kind),
                Box::new(PassthroughCerealizer),
            );
        }
        registry.register_origin(Origin::Primitive, Box::new(PassthroughCerealizer));
        registry.register_origin(Origin::List, Box::new(ListCerealizer));
        registry.register_origin(Origin::Union, Box::new(UnionCerealizer));
        registry.register_origin(Origin::Enum, Box::new(EnumCerealizer));
        registry.register_origin(Origin::Encrypted, Box::new(EncryptedCerealizer::new(keys)));

        JsonCerealizer { registry }
    }

    /// Construction-phase access for custom registrations. Must not be used
    /// once the driver is shared.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encode a value to the wire tree. With no declared type the value's
    /// own shape is used.
    pub fn encode(
        &self,
        value: &Value,
        declared: Option<&TypeDescriptor>,
    ) -> Result<WireValue, CerealError> {
        match declared {
            Some(ty) => self.registry.resolve(ty).encode(&self.registry, value, ty),
            None => {
                let ty = TypeDescriptor::of_value(value);
                self.registry.resolve(&ty).encode(&self.registry, value, &ty)
            }
        }
    }

    /// Decode a wire tree against a declared type.
    pub fn decode(&self, wire: &WireValue, ty: &TypeDescriptor) -> Result<Value, CerealError> {
        self.registry.resolve(ty).decode(&self.registry, wire, ty)
    }

    /// Byte variant: encode straight to UTF-8 JSON text.
    pub fn encode_bytes(
        &self,
        value: &Value,
        declared: Option<&TypeDescriptor>,
    ) -> Result<Vec<u8>, CerealError> {
        let tree = self.encode(value, declared)?;
        Ok(serde_json::to_vec(&tree)?)
    }

    /// Byte variant: decode UTF-8 JSON text against a declared type.
    pub fn decode_bytes(&self, bytes: &[u8], ty: &TypeDescriptor) -> Result<Value, CerealError> {
        let tree: WireValue = serde_json::from_slice(bytes)?;
        self.decode(&tree, ty)
    }
}

impl Default for JsonCerealizer {
    fn default() -> JsonCerealizer {
        JsonCerealizer::new()
    }
}
