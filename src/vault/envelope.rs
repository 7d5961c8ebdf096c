//! Response envelope returned by the KV read endpoint.
//!
//! Vault wraps every read in an object with lease information and the
//! secret itself under `data`. Only `data` is kept; everything else is
//! ignored during decoding.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{Result, V2FileError};

/// The fields of a secret, keyed by name.
///
/// `serde_json::Map` keeps keys sorted, so iterating it (and serializing
/// it) always yields the same order for the same secret.
pub type SecretData = Map<String, Value>;

/// Top-level JSON object returned by the secret store.
#[derive(Debug, Deserialize)]
pub struct SecretEnvelope {
    /// The secret payload. For a KV v2 mount this holds both the secret
    /// fields (under a nested `data`) and the version `metadata`.
    pub data: SecretData,
}

impl SecretEnvelope {
    /// Decode an envelope from a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| V2FileError::Decode(e.to_string()))
    }
}

/// Short human-readable kind of a JSON value, used in the fields summary.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
