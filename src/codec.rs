//! Segment codec: JSON serialization glued to Base64URL
//!
//! A token segment is `base64url(JSON(value))` with no padding. Signatures
//! are computed over the encoded byte sequence actually produced here, so
//! verification must always run against the literal segments from the wire,
//! never a re-serialization (see [`ParsedToken`](crate::token::ParsedToken)).

use crate::error::{Error, Result};
use crate::utils::base64url;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a value to JSON and Base64URL-encode it
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|e| Error::InvalidJson(e.to_string()))?;
    Ok(base64url::encode(&json))
}

/// Base64URL-decode a segment and parse the contained JSON
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T> {
    let json = base64url::decode(segment)?;
    serde_json::from_str(&json).map_err(|e| Error::InvalidJson(e.to_string()))
}
