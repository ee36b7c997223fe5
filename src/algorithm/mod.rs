mod traits;

pub mod hmac;
pub mod rsa;
pub mod unsigned;

pub use traits::{get_algorithm, Algorithm, SignatureScheme};

use crate::error::{Error, Result};

/// Algorithm identifier from the JWT header
///
/// The supported set is closed: the HMAC family, the RSA PKCS#1 v1.5 family,
/// and the unsigned `"none"` algorithm. Unsigned tokens are never accepted
/// unless the caller's [`AlgorithmPolicy`] names [`AlgorithmId::None`]
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA PKCS#1 v1.5 with SHA-256
    RS256,

    /// RSA PKCS#1 v1.5 with SHA-384
    RS384,

    /// RSA PKCS#1 v1.5 with SHA-512
    RS512,

    /// Unsigned ("none"): empty signature segment
    None,
}

impl AlgorithmId {
    /// Parse an algorithm name as it appears in a JWT header
    pub fn from_name(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            "RS256" => Ok(AlgorithmId::RS256),
            "RS384" => Ok(AlgorithmId::RS384),
            "RS512" => Ok(AlgorithmId::RS512),

            "none" => Ok(AlgorithmId::None),

            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }

    /// Convert to the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",

            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",

            AlgorithmId::None => "none",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512
        )
    }

    /// Check if algorithm is RSA-based (asymmetric)
    pub fn is_asymmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512
        )
    }

    /// Check if this is the unsigned algorithm
    pub fn is_unsigned(&self) -> bool {
        matches!(self, AlgorithmId::None)
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The caller's pinned set of acceptable algorithms for decoding
///
/// Decode reads the token's own `alg` header only to pick an implementation;
/// whether that algorithm is acceptable is decided here, out-of-band. This
/// prevents algorithm-substitution attacks where a token downgrades itself
/// to `"none"` or flips between the HMAC and RSA families.
#[derive(Debug, Clone)]
pub struct AlgorithmPolicy {
    allowed: Vec<AlgorithmId>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<AlgorithmId>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Create a policy that allows every signing algorithm
    ///
    /// The unsigned algorithm is NOT included; accepting unsigned tokens
    /// requires naming [`AlgorithmId::None`] via [`allow_only`](Self::allow_only)
    /// or [`unsigned_only`](Self::unsigned_only).
    pub fn allow_all() -> Self {
        Self::allow_only(vec![
            AlgorithmId::HS256,
            AlgorithmId::HS384,
            AlgorithmId::HS512,
            AlgorithmId::RS256,
            AlgorithmId::RS384,
            AlgorithmId::RS512,
        ])
    }

    /// Policy that allows only HS256
    ///
    /// This is the recommended policy for HMAC-based validation when you
    /// control the signing key and algorithm.
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS256])
    }

    /// Policy that allows only HS384
    pub fn hs384_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS384])
    }

    /// Policy that allows only HS512
    pub fn hs512_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS512])
    }

    /// Policy that allows any HMAC algorithm (HS256, HS384, HS512)
    ///
    /// # Security Warning
    ///
    /// Using multiple HMAC variants with the same key is not recommended.
    /// Prefer algorithm-specific policies like [`hs256_only()`](Self::hs256_only).
    pub fn hmac_any() -> Self {
        Self::allow_only(vec![
            AlgorithmId::HS256,
            AlgorithmId::HS384,
            AlgorithmId::HS512,
        ])
    }

    /// Policy that allows only RS256
    ///
    /// This is the recommended policy for RSA-based validation.
    pub fn rs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::RS256])
    }

    /// Policy that allows only RS384
    pub fn rs384_only() -> Self {
        Self::allow_only(vec![AlgorithmId::RS384])
    }

    /// Policy that allows only RS512
    pub fn rs512_only() -> Self {
        Self::allow_only(vec![AlgorithmId::RS512])
    }

    /// Policy that allows any RSA algorithm (RS256, RS384, RS512)
    pub fn rsa_any() -> Self {
        Self::allow_only(vec![
            AlgorithmId::RS256,
            AlgorithmId::RS384,
            AlgorithmId::RS512,
        ])
    }

    /// Policy that accepts only unsigned tokens
    ///
    /// This is the explicit opt-in for `"none"`. A token with an empty
    /// signature is accepted under this policy and no other.
    pub fn unsigned_only() -> Self {
        Self::allow_only(vec![AlgorithmId::None])
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: &AlgorithmId) -> bool {
        self.allowed.contains(algorithm)
    }

    /// Validate algorithm against policy
    pub fn validate(&self, algorithm: &AlgorithmId) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::AlgorithmNotAllowed {
                found: algorithm.to_string(),
                allowed: self.allowed.iter().map(|a| a.to_string()).collect(),
            })
        }
    }

    /// Get list of allowed algorithms
    pub fn allowed_algorithms(&self) -> &[AlgorithmId] {
        &self.allowed
    }
}

impl Default for AlgorithmPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_name() {
        assert_eq!(AlgorithmId::from_name("HS256").unwrap(), AlgorithmId::HS256);
        assert_eq!(AlgorithmId::from_name("HS384").unwrap(), AlgorithmId::HS384);
        assert_eq!(AlgorithmId::from_name("HS512").unwrap(), AlgorithmId::HS512);
        assert_eq!(AlgorithmId::from_name("RS256").unwrap(), AlgorithmId::RS256);
        assert_eq!(AlgorithmId::from_name("RS384").unwrap(), AlgorithmId::RS384);
        assert_eq!(AlgorithmId::from_name("RS512").unwrap(), AlgorithmId::RS512);
        assert_eq!(AlgorithmId::from_name("none").unwrap(), AlgorithmId::None);

        assert!(matches!(
            AlgorithmId::from_name("HS999"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            AlgorithmId::from_name("ES256"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        // Names are case-sensitive
        assert!(AlgorithmId::from_name("hs256").is_err());
        assert!(AlgorithmId::from_name("NONE").is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for alg in [
            AlgorithmId::HS256,
            AlgorithmId::HS384,
            AlgorithmId::HS512,
            AlgorithmId::RS256,
            AlgorithmId::RS384,
            AlgorithmId::RS512,
            AlgorithmId::None,
        ] {
            assert_eq!(AlgorithmId::from_name(alg.as_str()).unwrap(), alg);
        }
    }

    #[test]
    fn test_family_predicates() {
        assert!(AlgorithmId::HS384.is_symmetric());
        assert!(!AlgorithmId::HS384.is_asymmetric());
        assert!(AlgorithmId::RS512.is_asymmetric());
        assert!(!AlgorithmId::None.is_symmetric());
        assert!(!AlgorithmId::None.is_asymmetric());
        assert!(AlgorithmId::None.is_unsigned());
    }

    #[test]
    fn test_algorithm_policy() {
        let policy = AlgorithmPolicy::allow_only(vec![AlgorithmId::HS256]);
        assert!(policy.is_allowed(&AlgorithmId::HS256));
        assert!(!policy.is_allowed(&AlgorithmId::HS384));
        assert!(policy.validate(&AlgorithmId::HS256).is_ok());
        assert!(policy.validate(&AlgorithmId::HS384).is_err());
    }

    #[test]
    fn test_allow_all_excludes_unsigned() {
        let policy = AlgorithmPolicy::allow_all();
        assert!(!policy.is_allowed(&AlgorithmId::None));
        assert!(matches!(
            policy.validate(&AlgorithmId::None),
            Err(Error::AlgorithmNotAllowed { .. })
        ));

        let opt_in = AlgorithmPolicy::unsigned_only();
        assert!(opt_in.is_allowed(&AlgorithmId::None));
        assert!(!opt_in.is_allowed(&AlgorithmId::HS256));
    }

    #[test]
    fn test_not_allowed_error_lists_policy() {
        let policy = AlgorithmPolicy::hmac_any();
        match policy.validate(&AlgorithmId::RS256) {
            Err(Error::AlgorithmNotAllowed { found, allowed }) => {
                assert_eq!(found, "RS256");
                assert_eq!(allowed, vec!["HS256", "HS384", "HS512"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
