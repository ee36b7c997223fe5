use crate::error::Result;
use crate::keys::Key;

/// Core trait implemented by every JWT signature algorithm
///
/// Both directions of the signature contract live here: `sign` produces the
/// raw signature bytes for a signing input, `verify` checks a Base64URL
/// signature segment against it. Different algorithm families (HMAC, RSA,
/// unsigned) implement this trait.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256", "RS256")
    fn name(&self) -> &'static str;

    /// Produce the raw signature bytes for a signing input
    ///
    /// # Arguments
    /// * `signing_input` - The data to sign (`header.payload`)
    /// * `key` - The key to sign with
    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>>;

    /// Verify a signature
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (`header.payload`)
    /// * `signature` - The Base64URL-encoded signature segment
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &str, signature: &str, key: &Key) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureScheme = Box<dyn Algorithm + Send + Sync>;

/// Look up the implementation for the given algorithm ID
pub fn get_algorithm(algorithm: &super::AlgorithmId) -> SignatureScheme {
    match algorithm {
        super::AlgorithmId::HS256 => Box::new(super::hmac::HS256),
        super::AlgorithmId::HS384 => Box::new(super::hmac::HS384),
        super::AlgorithmId::HS512 => Box::new(super::hmac::HS512),

        super::AlgorithmId::RS256 => Box::new(super::rsa::RS256),
        super::AlgorithmId::RS384 => Box::new(super::rsa::RS384),
        super::AlgorithmId::RS512 => Box::new(super::rsa::RS512),

        super::AlgorithmId::None => Box::new(super::unsigned::Unsigned),
    }
}
