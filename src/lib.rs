//! # jwtkit - Minimal JWT Issuing and Verification
//!
//! > Minimal JSON Web Token encoding, decoding, and validation for Rust.
//!
//! **jwtkit** issues and verifies JWTs: compact, URL-safe tokens made of a
//! Base64URL-encoded header, claim set, and signature. The encode path
//! serializes and signs a claim map; the decode path splits the token,
//! verifies the signature over the literal signing input, and validates the
//! time-based reserved claims.
//!
//! ## Overview
//!
//! JWTs encode claims as JSON objects secured by digital signatures or
//! message authentication codes. Producing and validating them requires
//! canonical serialization, Base64URL handling, signature primitives across
//! symmetric and asymmetric families, and temporal claim checks. Common
//! pitfalls include algorithm confusion attacks (trusting the token's own
//! `alg` header), unsigned tokens slipping past a verifier that expected a
//! key, and timing vulnerabilities in signature comparison.
//!
//! **jwtkit** addresses these with a fixed algorithm set dispatched behind
//! one trait, a caller-pinned [`AlgorithmPolicy`] that decode checks the
//! token against before any key material is touched, and constant-time HMAC
//! comparison.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtkit::*;
//! use serde_json::{json, Map};
//!
//! let mut claims = Map::new();
//! claims.insert("sub".to_string(), json!("user123"));
//! claims.insert("exp".to_string(), json!(1700000000));
//!
//! let key = Key::symmetric(b"secret");
//! let token = encode(&claims, &key, AlgorithmId::HS256)?;
//!
//! let decoded = decode(
//!     &token,
//!     &key,
//!     &AlgorithmPolicy::hs256_only(),
//!     &ValidationOptions::default(),
//! )?;
//! println!("Subject: {:?}", decoded.claims.get("sub"));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! encode:  Build header ──► Serialize segments ──► Sign ──► Assemble
//! decode:  Split ──► Decode segments ──► Verify signature ──► Validate claims
//! ```
//!
//! Decode stages short-circuit on the first failure; signature verification
//! and each claim check can be disabled independently through
//! [`ValidationOptions`], and only through it — a missing key is an error,
//! not an implicit downgrade.
//!
//! ## Algorithm Support
//!
//! All algorithms implement a common `Algorithm` trait:
//!
//! - **HMAC**: HS256, HS384, HS512
//! - **RSA** (PKCS#1 v1.5): RS256, RS384, RS512
//! - **Unsigned**: `"none"`, behind an explicit policy opt-in
//!
//! RSA keys of at least 2048 bits are recommended; no minimum is enforced on
//! the signing side, but verification rejects moduli below 2048 bits.
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! The token's `alg` header is read only to select an implementation. Which
//! algorithms are acceptable is pinned out-of-band by the caller's
//! [`AlgorithmPolicy`]; a token declaring anything outside the policy fails
//! with [`Error::AlgorithmNotAllowed`] before any cryptography runs. A token
//! switching between the HMAC and RSA families additionally fails the
//! key-type check.
//!
//! ### Unsigned Tokens
//!
//! The `"none"` algorithm is supported for contexts that genuinely need
//! unsigned tokens, but it is excluded from [`AlgorithmPolicy::allow_all`]
//! and every other stock policy. Accepting an unsigned token requires
//! naming [`AlgorithmId::None`] in the policy explicitly, and the signature
//! segment must be empty.
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate,
//! preventing timing-based key recovery attacks.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) — JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) — JSON Web Signature Best Practices

// Core modules
pub mod codec;
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and validation
pub mod claims;

// Token encode/decode facade
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

// Facade operations
pub use token::{dangerous_decode_unverified, decode, encode, encode_with_header};

// Token types
pub use token::{DecodedToken, ParsedToken, TokenHeader};

// Configuration types
pub use algorithm::{AlgorithmId, AlgorithmPolicy};
pub use claims::ValidationOptions;

// Supporting types
pub use claims::ClaimsValidator;
pub use error::{ClaimError, Error, Result};
pub use keys::Key;
