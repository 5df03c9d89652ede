//! JSON response decoding.
//!
//! [`decode`] is strict: an empty payload is an argument error, never a
//! default value. The two wrappers resolve the "successful but empty body"
//! case per endpoint kind: list endpoints yield an empty `Vec`, single-object
//! endpoints yield [`Error::NoContent`].

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Decode a JSON payload into `T`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `json` is empty or only whitespace
/// - [`Error::Json`] if `json` does not match the shape of `T`
///
/// # Example
///
/// ```
/// use strava_rs::client::decode;
/// use strava_rs::models::ActivityMeta;
///
/// let meta: ActivityMeta = decode(r#"{"id": 42, "resource_state": 1}"#).unwrap();
/// assert_eq!(meta.id.get(), 42);
///
/// assert!(decode::<ActivityMeta>("").is_err());
/// ```
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    if json.trim().is_empty() {
        return Err(Error::InvalidInput(
            "the json payload is empty".to_string(),
        ));
    }

    Ok(serde_json::from_str(json)?)
}

/// Decode a list endpoint's payload; an empty body is an empty list.
pub fn decode_list<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    decode(json)
}

/// Decode a single-object endpoint's payload; an empty body means the
/// object does not exist and is reported as [`Error::NoContent`].
pub fn decode_object<T: DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    if json.trim().is_empty() {
        return Err(Error::NoContent(what.to_string()));
    }
    decode(json)
}
