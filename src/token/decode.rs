use crate::algorithm::{get_algorithm, AlgorithmPolicy};
use crate::claims::{ClaimsValidator, ValidationOptions};
use crate::error::Result;
use crate::keys::Key;
use crate::token::{ParsedToken, TokenHeader};

use serde_json::{Map, Value};

/// A decoded and validated token
#[derive(Debug, Clone)]
pub struct DecodedToken {
    /// The token header
    pub header: TokenHeader,
    /// The claim set
    pub claims: Map<String, Value>,
}

/// Decode a token, verifying its signature and reserved claims
///
/// Stages run in order and the first failure short-circuits: parse, check
/// the header's algorithm against the caller's pinned policy, verify the
/// signature over the literal signing input, validate time-based claims.
///
/// The token's own `alg` header is used only to select an implementation;
/// `policy` decides whether that algorithm is acceptable at all. An
/// unsigned token is therefore rejected here unless the policy names the
/// unsigned algorithm explicitly, no matter what the token claims.
///
/// # Example
/// ```ignore
/// let decoded = decode(
///     &token,
///     &Key::symmetric(b"secret"),
///     &AlgorithmPolicy::hs256_only(),
///     &ValidationOptions::default(),
/// )?;
/// println!("sub: {:?}", decoded.claims.get("sub"));
/// ```
pub fn decode(
    token: &str,
    key: &Key,
    policy: &AlgorithmPolicy,
    options: &ValidationOptions,
) -> Result<DecodedToken> {
    let parsed = ParsedToken::from_string(token)?;

    if options.verify_signature {
        let algorithm = parsed.algorithm()?;
        policy.validate(&algorithm)?;

        let scheme = get_algorithm(&algorithm);
        scheme.verify(&parsed.signing_input(), parsed.signature(), key)?;
    }

    ClaimsValidator::validate(parsed.claims(), options)?;

    let (header, claims) = parsed.into_parts();
    Ok(DecodedToken { header, claims })
}

/// Decode a token without any verification (use with extreme caution!)
///
/// No signature check and no claim validation: the returned data is exactly
/// what the token asserts about itself and nothing more. Useful for reading
/// a `kid` or issuer hint before selecting a key for a real [`decode`]
/// call, never as a substitute for one.
pub fn dangerous_decode_unverified(token: &str) -> Result<DecodedToken> {
    let parsed = ParsedToken::from_string(token)?;
    let (header, claims) = parsed.into_parts();
    Ok(DecodedToken { header, claims })
}
