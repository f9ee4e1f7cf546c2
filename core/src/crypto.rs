//! crypto.rs
//! AES-128-GCM seal/open helpers and the envelope wire layout.
//!
//! Design notes:
//! - Detached-tag API: ciphertext and tag travel as separate envelope fields.
//! - A fresh random 12-byte nonce is drawn from the OS RNG per seal. Nonces
//!   must never repeat under the same key; random generation with a
//!   per-instance key ring keeps collision odds negligible.
//! - Tag verification fails closed: no partial plaintext on mismatch.

use std::collections::HashMap;

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::{AeadInPlace, Aes128Gcm, KeyInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::types::CerealError;

/// AES-128-GCM key length (bytes).
pub const KEY_LEN_16: usize = 16;

/// Standard 12-byte nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Persisted envelope layout. Field set and names are wire contract:
/// exactly `key_id`, `value` (base64 ciphertext), `tag`, `nonce`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    pub key_id: String,
    pub value: String,
    pub tag: String,
    pub nonce: String,
}

/// Symmetric key material, keyed by opaque identifier.
///
/// Keys are supplied at construction and read-only afterwards; rotation means
/// building a new ring (and codec) rather than mutating one in flight.
#[derive(Clone, Default)]
pub struct KeyRing {
    keys: HashMap<String, [u8; KEY_LEN_16]>,
}

impl KeyRing {
    pub fn new() -> KeyRing {
        KeyRing::default()
    }

    /// Add a key, validating its length for the AEAD suite.
    pub fn insert(&mut self, key_id: &str, key: &[u8]) -> Result<(), CerealError> {
        let key: [u8; KEY_LEN_16] =
            key.try_into()
                .map_err(|_| CerealError::InvalidKeyLength {
                    key_id: key_id.to_string(),
                    expected: KEY_LEN_16,
                    actual: key.len(),
                })?;
        self.keys.insert(key_id.to_string(), key);
        Ok(())
    }

    pub fn get(&self, key_id: &str) -> Option<&[u8; KEY_LEN_16]> {
        self.keys.get(key_id)
    }
}

/// Encrypt `plaintext`, returning `(ciphertext, tag, nonce)`.
pub fn seal(
    key: &[u8; KEY_LEN_16],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN], [u8; NONCE_LEN_12]), CerealError> {
    let cipher = Aes128Gcm::new(GenericArray::from_slice(key));

    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng.fill_bytes(&mut nonce);

    let mut buf = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut buf)
        .map_err(|_| CerealError::Crypto("AES-GCM seal failed".to_string()))?;

    Ok((buf, tag.into(), nonce))
}

/// Verify and decrypt. Tag mismatch is `AuthenticationFailure`.
pub fn open(
    key: &[u8; KEY_LEN_16],
    nonce: &[u8],
    tag: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CerealError> {
    if nonce.len() != NONCE_LEN_12 || tag.len() != TAG_LEN {
        return Err(CerealError::Envelope(format!(
            "bad nonce/tag length: nonce={}, tag={}",
            nonce.len(),
            tag.len()
        )));
    }
    let cipher = Aes128Gcm::new(GenericArray::from_slice(key));
    let mut buf = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            b"",
            &mut buf,
            GenericArray::from_slice(tag),
        )
        .map_err(|_| CerealError::AuthenticationFailure)?;
    Ok(buf)
}

pub fn b64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn b64_decode(field: &str, text: &str) -> Result<Vec<u8>, CerealError> {
    STANDARD
        .decode(text)
        .map_err(|e| CerealError::Envelope(format!("field \"{field}\" is not valid base64: {e}")))
}
