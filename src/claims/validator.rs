use crate::claims::reserved;
use crate::error::{ClaimError, Error, Result};

use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Options controlling decode-time validation
///
/// Signature verification and each time-based claim check can be disabled
/// independently; skipping a check is always the result of an explicit flag,
/// never inferred from a missing key or claim. All checks share one leeway
/// value to absorb clock skew between issuer and verifier.
pub struct ValidationOptions {
    /// Verify the token signature (default: true)
    pub verify_signature: bool,

    /// Validate expiration time (exp claim, default: true)
    pub verify_exp: bool,

    /// Validate not-before time (nbf claim, default: true)
    pub verify_nbf: bool,

    /// Leeway in seconds applied to time-based claim checks (default: 0)
    pub leeway_seconds: u64,

    /// Expected audience value; `aud` is not checked when unset
    pub expected_audience: Option<String>,

    /// Expected issuer value; `iss` is not checked when unset
    pub expected_issuer: Option<String>,

    /// Override for "now" in seconds since Unix epoch; wall clock when unset
    pub current_time: Option<i64>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            verify_signature: true,
            verify_exp: true,
            verify_nbf: true,
            leeway_seconds: 0,
            expected_audience: None,
            expected_issuer: None,
            current_time: None,
        }
    }
}

impl ValidationOptions {
    /// Create validation options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set leeway for time-based claim checks
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.verify_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.verify_nbf = false;
        self
    }

    /// Disable signature verification (use with extreme caution!)
    ///
    /// The claim checks still run according to their own flags. Only use
    /// this when the token's authenticity is established elsewhere.
    pub fn no_signature_verification(mut self) -> Self {
        self.verify_signature = false;
        self
    }

    /// Require a specific audience
    pub fn expect_audience(mut self, audience: impl Into<String>) -> Self {
        self.expected_audience = Some(audience.into());
        self
    }

    /// Require a specific issuer
    pub fn expect_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.expected_issuer = Some(issuer.into());
        self
    }

    /// Pin "now" to a fixed timestamp instead of the wall clock
    pub fn at_time(mut self, epoch_seconds: i64) -> Self {
        self.current_time = Some(epoch_seconds);
        self
    }

    /// Resolve "now" for this validation run
    pub(crate) fn now(&self) -> i64 {
        self.current_time.unwrap_or_else(current_timestamp)
    }
}

/// Claims validator
///
/// A short-circuiting pipeline of pure checks over the decoded claim map,
/// run after signature verification succeeds or is explicitly skipped.
pub struct ClaimsValidator;

impl ClaimsValidator {
    /// Validate the claim map according to the options
    pub fn validate(claims: &Map<String, Value>, options: &ValidationOptions) -> Result<()> {
        let now = options.now();
        let leeway = options.leeway_seconds;

        // Validate expiration
        if options.verify_exp {
            if let Some(exp) = numeric_claim(claims, reserved::EXP)? {
                if now > exp + leeway as i64 {
                    return Err(Error::ClaimValidationFailed(ClaimError::Expired {
                        expired_at: exp,
                        now,
                        leeway,
                    }));
                }
            }
        }

        // Validate not-before
        if options.verify_nbf {
            if let Some(nbf) = numeric_claim(claims, reserved::NBF)? {
                if now + (leeway as i64) < nbf {
                    return Err(Error::ClaimValidationFailed(ClaimError::NotYetValid {
                        not_before: nbf,
                        now,
                        leeway,
                    }));
                }
            }
        }

        // Validate audience
        if let Some(expected_aud) = &options.expected_audience {
            let found = audiences(claims)?.ok_or_else(|| {
                Error::ClaimValidationFailed(ClaimError::MissingClaim(reserved::AUD.to_string()))
            })?;
            if !found.iter().any(|aud| aud == expected_aud) {
                return Err(Error::ClaimValidationFailed(ClaimError::AudienceMismatch {
                    expected: expected_aud.clone(),
                    found,
                }));
            }
        }

        // Validate issuer
        if let Some(expected_iss) = &options.expected_issuer {
            let found = string_claim(claims, reserved::ISS)?.ok_or_else(|| {
                Error::ClaimValidationFailed(ClaimError::MissingClaim(reserved::ISS.to_string()))
            })?;
            if &found != expected_iss {
                return Err(Error::ClaimValidationFailed(ClaimError::IssuerMismatch {
                    expected: expected_iss.clone(),
                    found,
                }));
            }
        }

        Ok(())
    }
}

/// Read a numeric claim, or None if absent
///
/// Fractional values truncate toward zero; any non-numeric JSON value is a
/// malformed claim, not an absent one.
fn numeric_claim(claims: &Map<String, Value>, name: &str) -> Result<Option<i64>> {
    match claims.get(name) {
        None => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_i64() {
                Ok(Some(v))
            } else if let Some(f) = n.as_f64() {
                Ok(Some(f as i64))
            } else {
                Err(invalid_type(name, "numeric value"))
            }
        }
        Some(_) => Err(invalid_type(name, "numeric value")),
    }
}

/// Read a string claim, or None if absent
fn string_claim(claims: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match claims.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid_type(name, "string value")),
    }
}

/// Read the `aud` claim, which may be a single string or an array of strings
fn audiences(claims: &Map<String, Value>) -> Result<Option<Vec<String>>> {
    match claims.get(reserved::AUD) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(vec![s.clone()])),
        Some(Value::Array(values)) => {
            let mut found = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Value::String(s) => found.push(s.clone()),
                    _ => return Err(invalid_type(reserved::AUD, "string or array of strings")),
                }
            }
            Ok(Some(found))
        }
        Some(_) => Err(invalid_type(reserved::AUD, "string or array of strings")),
    }
}

fn invalid_type(claim: &str, expected: &str) -> Error {
    Error::ClaimValidationFailed(ClaimError::InvalidClaimType {
        claim: claim.to_string(),
        expected: expected.to_string(),
    })
}

/// Get current Unix timestamp
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as i64
}
