use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;

/// The unsigned `"none"` algorithm
///
/// Signing produces an empty signature; the token still ends with a trailing
/// `.` and an empty third segment. Verification accepts only an empty
/// signature segment — anything else fails as an invalid signature.
///
/// Acceptance on decode is additionally gated by the caller's
/// [`AlgorithmPolicy`](crate::algorithm::AlgorithmPolicy): unsigned tokens
/// are rejected unless the policy names
/// [`AlgorithmId::None`](crate::algorithm::AlgorithmId) explicitly, so a
/// token can never downgrade itself past a caller that expects signatures.
pub struct Unsigned;

impl Algorithm for Unsigned {
    fn name(&self) -> &'static str {
        "none"
    }

    fn sign(&self, _signing_input: &str, _key: &Key) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn verify(&self, _signing_input: &str, signature: &str, _key: &Key) -> Result<()> {
        if signature.is_empty() {
            Ok(())
        } else {
            Err(Error::SignatureInvalid)
        }
    }
}
