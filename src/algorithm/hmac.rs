use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let symmetric_key = key.as_symmetric()?;
        compute_tag::<Hmac<Sha256>>(signing_input, symmetric_key.as_bytes())
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        let symmetric_key = key.as_symmetric()?;
        verify_tag::<Hmac<Sha256>>(signing_input, signature, symmetric_key.as_bytes())
    }
}

impl Algorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let symmetric_key = key.as_symmetric()?;
        compute_tag::<Hmac<Sha384>>(signing_input, symmetric_key.as_bytes())
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        let symmetric_key = key.as_symmetric()?;
        verify_tag::<Hmac<Sha384>>(signing_input, signature, symmetric_key.as_bytes())
    }
}

impl Algorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let symmetric_key = key.as_symmetric()?;
        compute_tag::<Hmac<Sha512>>(signing_input, symmetric_key.as_bytes())
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        let symmetric_key = key.as_symmetric()?;
        verify_tag::<Hmac<Sha512>>(signing_input, signature, symmetric_key.as_bytes())
    }
}

/// Compute the HMAC tag over the signing input
fn compute_tag<M: Mac + KeyInit>(signing_input: &str, secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|_| Error::SigningFailed("HMAC key rejected".to_string()))?;
    mac.update(signing_input.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HMAC signature with constant-time comparison
fn verify_tag<M: Mac + KeyInit>(signing_input: &str, signature: &str, secret: &[u8]) -> Result<()> {
    let provided_signature = base64url::decode_bytes(signature)?;
    let expected_signature =
        compute_tag::<M>(signing_input, secret).map_err(|_| Error::SignatureInvalid)?;

    if provided_signature.len() != expected_signature.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(&provided_signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
