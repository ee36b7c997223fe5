/// Key types for JWT signing and verification
///
/// This module provides a type-safe abstraction over the key material the
/// algorithms consume:
/// - Symmetric secrets (HMAC algorithms, both directions)
/// - RSA private keys (signing) and public keys (verification)
/// - The explicit no-key marker for unsigned tokens
///
/// Key bytes are opaque to this crate; the RSA documents are parsed by the
/// crypto backend at the point of use.
use crate::error::{Error, Result};

/// A key usable for JWT signing or verification
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric secret for HMAC algorithms
    Symmetric(SymmetricKey),

    /// RSA private key for signing (PKCS#8 DER)
    RsaPrivate(RsaPrivateKey),

    /// RSA public key for verification (PKCS#1 `RSAPublicKey` DER)
    RsaPublic(RsaPublicKey),

    /// No key material; only valid with the unsigned algorithm
    None,
}

impl Key {
    /// Create a symmetric key from secret bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA private key from a DER-encoded PKCS#8 document
    pub fn rsa_private(pkcs8_der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPrivate(RsaPrivateKey::new(pkcs8_der.into()))
    }

    /// Create an RSA public key from DER-encoded PKCS#1 `RSAPublicKey` bytes
    ///
    /// This is the format `ring`'s `RsaKeyPair::public()` exposes. Keys of at
    /// least 2048 bits are recommended; verification rejects smaller moduli.
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::RsaPublic(RsaPublicKey::new(der.into()))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            Key::RsaPrivate(_) => "RSA private",
            Key::RsaPublic(_) => "RSA public",
            Key::None => "None",
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "HMAC".to_string(),
                expected_key_type: "Symmetric".to_string(),
                actual_key_type: self.key_type().to_string(),
            }),
        }
    }

    /// Get as RSA private key or return error
    pub fn as_rsa_private(&self) -> Result<&RsaPrivateKey> {
        match self {
            Key::RsaPrivate(key) => Ok(key),
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "RSA".to_string(),
                expected_key_type: "RSA private".to_string(),
                actual_key_type: self.key_type().to_string(),
            }),
        }
    }

    /// Get as RSA public key or return error
    pub fn as_rsa_public(&self) -> Result<&RsaPublicKey> {
        match self {
            Key::RsaPublic(key) => Ok(key),
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "RSA".to_string(),
                expected_key_type: "RSA public".to_string(),
                actual_key_type: self.key_type().to_string(),
            }),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Debug, Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SymmetricKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// RSA private key (DER-encoded PKCS#8 document)
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    pkcs8: Vec<u8>,
}

impl RsaPrivateKey {
    /// Create a new RSA private key from PKCS#8 DER bytes
    pub fn new(pkcs8: Vec<u8>) -> Self {
        Self { pkcs8 }
    }

    /// Get the DER-encoded PKCS#8 bytes
    pub fn as_pkcs8_der(&self) -> &[u8] {
        &self.pkcs8
    }
}

/// RSA public key (DER-encoded PKCS#1 `RSAPublicKey`)
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    /// Create a new RSA public key from DER bytes
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}
