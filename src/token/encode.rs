use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::codec;
use crate::error::Result;
use crate::keys::Key;
use crate::token::TokenHeader;
use crate::utils::base64url;

use serde_json::{Map, Value};

/// Encode and sign a token
///
/// The payload map is serialized as the claim set, the standard header
/// `{"typ":"JWT","alg":<name>}` is attached, and the signature is computed
/// over `base64url(header).base64url(payload)`. The caller's map is
/// borrowed, never mutated.
///
/// # Example
/// ```ignore
/// let mut claims = Map::new();
/// claims.insert("sub".to_string(), json!("user123"));
/// let token = encode(&claims, &Key::symmetric(b"secret"), AlgorithmId::HS256)?;
/// ```
pub fn encode(payload: &Map<String, Value>, key: &Key, algorithm: AlgorithmId) -> Result<String> {
    encode_with_header(payload, key, algorithm, &Map::new())
}

/// Encode and sign a token with custom header fields
///
/// Extra headers are merged into the standard header. `alg` and `typ` are
/// reserved and cannot be displaced; a string-valued `kid` lands in the
/// header's key ID field.
pub fn encode_with_header(
    payload: &Map<String, Value>,
    key: &Key,
    algorithm: AlgorithmId,
    extra_headers: &Map<String, Value>,
) -> Result<String> {
    let header = build_header(algorithm, extra_headers);

    let header_b64 = codec::encode_segment(&header)?;
    let payload_b64 = codec::encode_segment(payload)?;
    let signing_input = format!("{header_b64}.{payload_b64}");

    let scheme = get_algorithm(&algorithm);
    let signature = scheme.sign(&signing_input, key)?;
    let signature_b64 = base64url::encode_bytes(&signature);

    Ok(format!("{signing_input}.{signature_b64}"))
}

/// Merge caller headers into the standard header for the algorithm
fn build_header(algorithm: AlgorithmId, extra_headers: &Map<String, Value>) -> TokenHeader {
    let mut header = TokenHeader::new(algorithm);

    for (name, value) in extra_headers {
        match name.as_str() {
            // Reserved: the algorithm parameter and token type always win
            "alg" | "typ" => {}
            "kid" => match value {
                Value::String(kid) => header.key_id = Some(kid.clone()),
                other => {
                    header.extra.insert(name.clone(), other.clone());
                }
            },
            _ => {
                header.extra.insert(name.clone(), value.clone());
            }
        }
    }

    header
}
