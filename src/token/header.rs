use crate::algorithm::AlgorithmId;
use crate::error::Result;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT header structure
///
/// Encode always sets `alg` and `typ` = "JWT"; any caller-supplied custom
/// fields ride along in `extra` and survive a round trip. A string-valued
/// `kid` is surfaced through its own field so callers can select a
/// verification key before deciding to trust anything else in the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Key ID (for key selection)
    #[serde(rename = "kid", skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Custom header fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenHeader {
    /// Create the standard header for an algorithm
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm: algorithm.as_str().to_string(),
            token_type: Some("JWT".to_string()),
            key_id: None,
            extra: Map::new(),
        }
    }

    /// Parse algorithm from header
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_name(&self.algorithm)
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
