//! The storefront API response envelope.
//!
//! Lookups answer with a JSON body of the form `{"data": <record>}`. A body
//! without an object under `data` means the record does not exist.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull the record out of an envelope body.
///
/// Returns `Ok(None)` when the body is not JSON, has no `data` field, or
/// `data` is not an object. Returns an error only when `data` is an object
/// that `T` itself rejects.
pub fn unwrap_data<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, FetchError> {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return Ok(None);
    };
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Object(_)) => Ok(Some(serde_json::from_value(data)?)),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}
