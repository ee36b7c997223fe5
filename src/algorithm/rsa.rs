use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::utils::base64url;

use ring::rand::SystemRandom;
use ring::signature::{self, RsaKeyPair, UnparsedPublicKey};

/// RS256 algorithm (RSA PKCS#1 v1.5 with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA PKCS#1 v1.5 with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA PKCS#1 v1.5 with SHA-512)
pub struct RS512;

impl Algorithm for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let rsa_key = key.as_rsa_private()?;
        sign_rsa(
            signing_input,
            rsa_key.as_pkcs8_der(),
            &signature::RSA_PKCS1_SHA256,
        )
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        let rsa_key = key.as_rsa_public()?;
        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Algorithm for RS384 {
    fn name(&self) -> &'static str {
        "RS384"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let rsa_key = key.as_rsa_private()?;
        sign_rsa(
            signing_input,
            rsa_key.as_pkcs8_der(),
            &signature::RSA_PKCS1_SHA384,
        )
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        let rsa_key = key.as_rsa_public()?;
        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Algorithm for RS512 {
    fn name(&self) -> &'static str {
        "RS512"
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        let rsa_key = key.as_rsa_private()?;
        sign_rsa(
            signing_input,
            rsa_key.as_pkcs8_der(),
            &signature::RSA_PKCS1_SHA512,
        )
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()> {
        let rsa_key = key.as_rsa_public()?;
        verify_rsa(
            signing_input,
            signature,
            rsa_key.as_der(),
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

/// Generic RSA PKCS#1 v1.5 signing
///
/// The PKCS#8 document is parsed on every call; key objects are caller-owned
/// bytes and this crate holds no key state between operations.
fn sign_rsa(
    signing_input: &str,
    private_key_pkcs8: &[u8],
    padding: &'static dyn signature::RsaEncoding,
) -> Result<Vec<u8>> {
    let key_pair = RsaKeyPair::from_pkcs8(private_key_pkcs8)
        .map_err(|e| Error::SigningFailed(format!("invalid PKCS#8 RSA key: {e}")))?;

    let rng = SystemRandom::new();
    let mut signature_bytes = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(padding, &rng, signing_input.as_bytes(), &mut signature_bytes)
        .map_err(|_| Error::SigningFailed("RSA signing failed".to_string()))?;

    Ok(signature_bytes)
}

/// Generic RSA signature verification
fn verify_rsa(
    signing_input: &str,
    signature: &str,
    public_key_der: &[u8],
    algorithm: &'static dyn signature::VerificationAlgorithm,
) -> Result<()> {
    // Decode the signature from Base64URL
    let signature_bytes = base64url::decode_bytes(signature)?;

    // Create an unparsed public key from DER
    let public_key = UnparsedPublicKey::new(algorithm, public_key_der);

    // Verify the signature
    public_key
        .verify(signing_input.as_bytes(), &signature_bytes)
        .map_err(|_| Error::SignatureInvalid)
}
