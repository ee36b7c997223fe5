use crate::algorithm::AlgorithmId;
use crate::codec;
use crate::error::{Error, Result};
use crate::token::TokenHeader;

use serde_json::{Map, Value};

/// A JWT token that has been parsed but not yet verified
///
/// This is the first stage of the decode pipeline: the token is split into
/// its three segments and the header and claim set are decoded. Nothing in
/// it should be trusted until signature verification has run.
///
/// The literal Base64URL segments are retained: the signature was computed
/// over the exact byte sequence the issuer produced, so verification runs
/// over `header_b64.payload_b64` as received from the wire, never over a
/// re-serialization of the parsed maps.
pub struct ParsedToken {
    header: TokenHeader,
    claims: Map<String, Value>,
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
}

impl ParsedToken {
    /// Parse a JWT token from a string
    ///
    /// # Arguments
    /// * `token` - The JWT string in format "header.payload.signature"
    ///
    /// # Example
    /// ```ignore
    /// let token = ParsedToken::from_string("eyJ...")?;
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        // Split into three parts
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidFormat);
        }

        let header_b64 = parts[0].to_string();
        let payload_b64 = parts[1].to_string();
        let signature_b64 = parts[2].to_string();

        let header: TokenHeader = codec::decode_segment(&header_b64)?;
        let claims: Map<String, Value> = codec::decode_segment(&payload_b64)?;

        Ok(Self {
            header,
            claims,
            header_b64,
            payload_b64,
            signature_b64,
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the claim set
    ///
    /// Note: this data is not trustworthy until signature verification!
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Get the algorithm from the header
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        self.header.parse_algorithm()
    }

    /// Get the signing input (header.payload), exactly as received
    pub(crate) fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// Get the signature segment
    pub(crate) fn signature(&self) -> &str {
        &self.signature_b64
    }

    /// Consume the token, yielding header and claims
    pub(crate) fn into_parts(self) -> (TokenHeader, Map<String, Value>) {
        (self.header, self.claims)
    }
}
