//! Error types for JWT processing
//!
//! This module defines error types that can occur during token encoding,
//! decoding, signature verification, and claim validation. All errors
//! implement `std::error::Error` and provide descriptive messages.

/// Errors that can occur during JWT processing
///
/// This enum covers all error cases in the encode and decode pipelines:
/// - Parsing errors (format, Base64URL, JSON)
/// - Algorithm errors (unsupported name, not allowed by policy)
/// - Key errors (wrong key kind for the selected algorithm, rejected key)
/// - Signature errors (verification failure, signing failure)
/// - Claim validation errors (expired, not yet valid, audience/issuer
///   mismatch, malformed claim value)
///
/// Each variant includes relevant context for error handling and debugging.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid JWT format (not three Base64URL parts)
    InvalidFormat,

    /// Base64URL decoding failed
    InvalidBase64(String),

    /// JSON serialization or parsing failed
    InvalidJson(String),

    /// Algorithm name is not in the supported set
    UnsupportedAlgorithm(String),

    /// Algorithm in the token header doesn't match the caller's pinned policy
    AlgorithmNotAllowed { found: String, allowed: Vec<String> },

    /// Signature verification failed
    SignatureInvalid,

    /// Key kind doesn't match algorithm requirements
    KeyTypeMismatch {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    /// The signing primitive rejected the key or failed to produce a signature
    SigningFailed(String),

    /// Claim validation error
    ClaimValidationFailed(ClaimError),
}

/// Specific claim validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimError {
    /// Token has expired (exp claim)
    Expired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },

    /// Token not yet valid (nbf claim)
    NotYetValid {
        not_before: i64,
        now: i64,
        leeway: u64,
    },

    /// Audience doesn't match the expected value
    AudienceMismatch {
        expected: String,
        found: Vec<String>,
    },

    /// Issuer doesn't match the expected value
    IssuerMismatch { expected: String, found: String },

    /// A claim an expectation was configured for is missing
    MissingClaim(String),

    /// A reserved claim is present but has the wrong JSON type
    InvalidClaimType { claim: String, expected: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFormat => write!(
                f,
                "Invalid JWT format: expected three Base64URL parts separated by '.'"
            ),
            Error::InvalidBase64(msg) => write!(f, "Base64URL decoding failed: {msg}"),
            Error::InvalidJson(msg) => write!(f, "JSON processing failed: {msg}"),
            Error::UnsupportedAlgorithm(alg) => {
                write!(f, "Algorithm '{alg}' is not supported")
            }
            Error::AlgorithmNotAllowed { found, allowed } => {
                write!(f, "Algorithm '{found}' not allowed. Allowed: {allowed:?}")
            }
            Error::SignatureInvalid => write!(f, "Signature verification failed"),
            Error::KeyTypeMismatch {
                algorithm,
                expected_key_type,
                actual_key_type,
            } => {
                write!(
                    f,
                    "Key type mismatch for algorithm '{algorithm}': expected {expected_key_type}, got {actual_key_type}"
                )
            }
            Error::SigningFailed(msg) => write!(f, "Signing failed: {msg}"),
            Error::ClaimValidationFailed(claim_err) => {
                write!(f, "Claim validation failed: {claim_err}")
            }
        }
    }
}

impl std::fmt::Display for ClaimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimError::Expired {
                expired_at,
                now,
                leeway,
            } => {
                write!(
                    f,
                    "Token expired at {expired_at} (now: {now}, leeway: {leeway}s)"
                )
            }
            ClaimError::NotYetValid {
                not_before,
                now,
                leeway,
            } => {
                write!(
                    f,
                    "Token not valid until {not_before} (now: {now}, leeway: {leeway}s)"
                )
            }
            ClaimError::AudienceMismatch { expected, found } => {
                write!(
                    f,
                    "Audience mismatch: expected '{expected}', found {found:?}"
                )
            }
            ClaimError::IssuerMismatch { expected, found } => {
                write!(f, "Issuer mismatch: expected '{expected}', found '{found}'")
            }
            ClaimError::MissingClaim(claim) => {
                write!(f, "Required claim '{claim}' is missing")
            }
            ClaimError::InvalidClaimType { claim, expected } => {
                write!(f, "Claim '{claim}' has invalid type: expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ClaimError {}

/// Result type alias for jwtkit operations
pub type Result<T> = std::result::Result<T, Error>;
