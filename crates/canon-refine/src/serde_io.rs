//! Serialization helpers for canonical forms and results.
//!
//! Persisting a form is an implementation choice of the caller; these
//! helpers only fix one stable representation, they do no I/O.

use canon_core::{CanonError, ErrorInfo};

use crate::{CanonicalForm, CanonicalResult};

/// Serializes a canonicalization result into indented JSON.
pub fn result_to_json(result: &CanonicalResult) -> Result<String, CanonError> {
    serde_json::to_string_pretty(result)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("result-serialize", err.to_string())))
}

/// Deserializes a canonicalization result from JSON text.
pub fn result_from_json(json: &str) -> Result<CanonicalResult, CanonError> {
    serde_json::from_str(json)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("result-deserialize", err.to_string())))
}

/// Serializes a canonical form into a compact binary representation.
pub fn form_to_bytes(form: &CanonicalForm) -> Result<Vec<u8>, CanonError> {
    bincode::serialize(form)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("form-serialize-bytes", err.to_string())))
}

/// Restores a canonical form from its binary representation.
pub fn form_from_bytes(bytes: &[u8]) -> Result<CanonicalForm, CanonError> {
    bincode::deserialize(bytes)
        .map_err(|err| CanonError::Serde(ErrorInfo::new("form-deserialize-bytes", err.to_string())))
}
