//! types.rs
//! Unified codec error covering structural, union, enum, and crypto failures.
//!
//! - Every error propagates synchronously to the caller of encode/decode;
//!   there is no internal retry.
//! - Structural errors always identify the fully-qualified record name and
//!   the offending field.
//! - `AuthenticationFailure` is surfaced verbatim and never remapped to a
//!   missing-key result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CerealError {
    /// Encode-side structural error (missing field type information or
    /// missing attribute on the value).
    #[error("\"{record}\": \"{field}\" {msg}")]
    Serialization {
        record: String,
        field: String,
        msg: String,
    },

    /// Decode-side structural error (missing field type information or
    /// required field absent from wire data).
    #[error("\"{record}\": \"{field}\" {msg}")]
    Deserialization {
        record: String,
        field: String,
        msg: String,
    },

    /// A value or wire value did not have the kind a descriptor demands.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// No union member's match rule fired.
    #[error("no union member matched during {op}")]
    UnresolvedUnionMember { op: &'static str },

    /// A symbol with no matching enumeration member.
    #[error("unknown symbol \"{symbol}\" for enum \"{name}\"")]
    UnknownEnumSymbol { name: String, symbol: String },

    /// Encrypt-side key lookup failure. Encryption never silently degrades
    /// to plaintext. (Decrypt-side misses take the graceful path instead and
    /// never surface this.)
    #[error("encryption key \"{key_id}\" not found")]
    KeyNotFound { key_id: String },

    /// Key material of the wrong size for the AEAD suite.
    #[error("key \"{key_id}\": invalid length, expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        key_id: String,
        expected: usize,
        actual: usize,
    },

    /// AEAD tag verification failed: tampered ciphertext/tag or wrong key.
    #[error("envelope authentication failed: tag verification error")]
    AuthenticationFailure,

    /// Seal-side cipher failure.
    #[error("crypto failure: {0}")]
    Crypto(String),

    /// Malformed envelope mapping or undecodable base64 field.
    #[error("invalid envelope: {0}")]
    Envelope(String),

    /// Canonical JSON byte form could not be produced or parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CerealError {
    /// Encode-side "no annotation" error, message layout shared with the
    /// decode-side twin so tooling can match on either direction.
    pub(crate) fn no_annotation_ser(record: &str, field: &str) -> CerealError {
        CerealError::Serialization {
            record: record.to_string(),
            field: field.to_string(),
            msg: "has no annotation.".to_string(),
        }
    }

    pub(crate) fn no_annotation_de(record: &str, field: &str) -> CerealError {
        CerealError::Deserialization {
            record: record.to_string(),
            field: field.to_string(),
            msg: "has no annotation.".to_string(),
        }
    }

    pub(crate) fn missing_field(record: &str, field: &str) -> CerealError {
        CerealError::Deserialization {
            record: record.to_string(),
            field: field.to_string(),
            msg: "is required but absent from wire data.".to_string(),
        }
    }
}
