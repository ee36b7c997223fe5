mod validator;

pub use validator::{ClaimsValidator, ValidationOptions};

/// Reserved claim names as defined in RFC 7519 Section 4.1
///
/// The library validates `exp` and `nbf` by default and can check `aud` and
/// `iss` against caller-supplied expected values. The remaining reserved
/// claims are passed through untouched for the caller to interpret.
pub mod reserved {
    /// Issuer
    pub const ISS: &str = "iss";
    /// Subject
    pub const SUB: &str = "sub";
    /// Audience
    pub const AUD: &str = "aud";
    /// Expiration time (seconds since Unix epoch)
    pub const EXP: &str = "exp";
    /// Not before (seconds since Unix epoch)
    pub const NBF: &str = "nbf";
    /// Issued at (seconds since Unix epoch)
    pub const IAT: &str = "iat";
    /// JWT ID
    pub const JTI: &str = "jti";
}
