//! codecs/encrypted.rs
//! Authenticated envelope codec for `Encrypted(T)`.
//!
//! Registered under the `Encrypted` origin, so a field declared
//! encrypted-of-T anywhere in a record graph is intercepted by the registry
//! without the enclosing record codec special-casing it.
//!
//! Key lookup is asymmetric by design:
//! - encrypt: missing key is fatal; encryption never degrades to plaintext.
//! - decrypt: missing key is recoverable; the result keeps the envelope's
//!   `key_id` with no value, so a payload can carry ciphertext for readers
//!   holding only a subset of keys.

use crate::codecs::Cerealizer;
use crate::crypto::{self, Envelope, KeyRing};
use crate::descriptor::TypeDescriptor;
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Encrypted, Value, WireValue};

pub struct EncryptedCerealizer {
    keys: KeyRing,
}

impl EncryptedCerealizer {
    pub fn new(keys: KeyRing) -> EncryptedCerealizer {
        EncryptedCerealizer { keys }
    }

    fn inner_descriptor(ty: &TypeDescriptor) -> Result<&TypeDescriptor, CerealError> {
        match ty {
            TypeDescriptor::Encrypted(inner) => Ok(inner),
            other => Err(CerealError::TypeMismatch {
                expected: "encrypted descriptor",
                found: format!("{other:?}"),
            }),
        }
    }
}

impl Cerealizer for EncryptedCerealizer {
    fn encode(
        &self,
        registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError> {
        let env = match value {
            Value::Encrypted(env) => env,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "encrypted",
                    found: other.kind_name().to_string(),
                })
            }
        };

        let key = self
            .keys
            .get(&env.key_id)
            .ok_or_else(|| CerealError::KeyNotFound {
                key_id: env.key_id.clone(),
            })?;

        // An unset value seals as null.
        let null = Value::Null;
        let inner_value = env.value.as_deref().unwrap_or(&null);

        // Fall back to the runtime value's shape when the declared inner
        // type carries no information.
        let declared = Self::inner_descriptor(ty)?;
        let inferred;
        let (codec, inner_ty) = if matches!(declared, TypeDescriptor::Any) {
            inferred = TypeDescriptor::of_value(inner_value);
            (registry.resolve_value(inner_value), &inferred)
        } else {
            (registry.resolve(declared), declared)
        };

        let tree = codec.encode(registry, inner_value, inner_ty)?;
        let plaintext = serde_json::to_vec(&tree)?;

        let (ciphertext, tag, nonce) = crypto::seal(key, &plaintext)?;

        let envelope = Envelope {
            key_id: env.key_id.clone(),
            value: crypto::b64_encode(&ciphertext),
            tag: crypto::b64_encode(&tag),
            nonce: crypto::b64_encode(&nonce),
        };
        Ok(serde_json::to_value(envelope)?)
    }

    fn decode(
        &self,
        registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError> {
        let envelope: Envelope = serde_json::from_value(wire.clone())
            .map_err(|e| CerealError::Envelope(e.to_string()))?;

        // Graceful path: this reader does not hold the key. Keep the key_id,
        // drop the ciphertext.
        let key = match self.keys.get(&envelope.key_id) {
            Some(key) => key,
            None => return Ok(Value::Encrypted(Encrypted::opaque(&envelope.key_id))),
        };

        let ciphertext = crypto::b64_decode("value", &envelope.value)?;
        let tag = crypto::b64_decode("tag", &envelope.tag)?;
        let nonce = crypto::b64_decode("nonce", &envelope.nonce)?;

        let plaintext = crypto::open(key, &nonce, &tag, &ciphertext)?;
        let tree: WireValue = serde_json::from_slice(&plaintext)?;

        // A null plaintext is the seal of an unset value; keep the symmetry
        // with encode, which seals `None` as null.
        let inner = if tree.is_null() {
            None
        } else {
            let inner_ty = Self::inner_descriptor(ty)?;
            let decoded = registry.resolve(inner_ty).decode(registry, &tree, inner_ty)?;
            Some(Box::new(decoded))
        };

        Ok(Value::Encrypted(Encrypted {
            key_id: envelope.key_id,
            value: inner,
        }))
    }
}
