//! Decode entry points for raw API payloads.
//!
//! The transport layer delivers response bodies as raw bytes; these helpers
//! turn them into typed resources and sort failures into the crate's error
//! taxonomy: [`Error::Syntax`] for bytes that were never JSON,
//! [`Error::Shape`] for JSON that violated a resource's field shapes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Error, Result};

/// Decode a resource from a raw JSON payload.
pub fn from_json<T: DeserializeOwned>(payload: &[u8]) -> Result<T> {
    let decoded: Result<T> = serde_json::from_slice(payload).map_err(Error::from_json);
    #[cfg(feature = "tracing")]
    if let Err(err) = &decoded {
        tracing::debug!(error = %err, "payload decode failed");
    }
    decoded
}

/// Decode a resource from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(payload: &str) -> Result<T> {
    from_json(payload.as_bytes())
}

/// Decode a resource from an already-parsed JSON value.
///
/// Failures are always [`Error::Shape`]: a [`Value`] is well-formed JSON by
/// construction.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    let decoded: Result<T> = serde_json::from_value(value).map_err(Error::from_json);
    #[cfg(feature = "tracing")]
    if let Err(err) = &decoded {
        tracing::debug!(error = %err, "value decode failed");
    }
    decoded
}
