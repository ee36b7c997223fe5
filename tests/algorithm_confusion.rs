//! Algorithm-confusion protection tests
//!
//! A verifier must never let the token choose its own trust level. These
//! tests cover the classic downgrade and substitution attacks: tokens
//! declaring `"none"`, tokens flipping between the HMAC and RSA families,
//! and headers naming algorithms outside the supported set.

use jwtkit::utils::base64url;
use jwtkit::*;
use serde_json::{json, Map, Value};

fn claims(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Build a token by hand so the header can say anything
fn forge_token(header_json: &str, payload_json: &str, signature: &str) -> String {
    format!(
        "{}.{}.{}",
        base64url::encode(header_json),
        base64url::encode(payload_json),
        signature
    )
}

#[test]
fn unsigned_token_rejected_by_hs256_verifier() {
    // Attacker strips the signature and declares alg=none
    let token = forge_token(
        r#"{"alg":"none","typ":"JWT"}"#,
        r#"{"sub":"admin"}"#,
        "",
    );

    let result = decode(
        &token,
        &Key::symmetric(b"secret"),
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::AlgorithmNotAllowed { .. })));
}

#[test]
fn unsigned_token_rejected_by_default_policy() {
    let token = encode(&claims(&[("sub", json!("admin"))]), &Key::None, AlgorithmId::None).unwrap();

    // allow_all() still excludes "none"
    let result = decode(
        &token,
        &Key::symmetric(b"secret"),
        &AlgorithmPolicy::default(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::AlgorithmNotAllowed { .. })));
}

#[test]
fn unsigned_token_with_signature_rejected_even_under_opt_in() {
    // An unsigned token must have an EMPTY signature segment
    let token = forge_token(
        r#"{"alg":"none","typ":"JWT"}"#,
        r#"{"sub":"admin"}"#,
        &base64url::encode("unexpected-signature"),
    );

    let result = decode(
        &token,
        &Key::None,
        &AlgorithmPolicy::unsigned_only(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::SignatureInvalid)));
}

#[test]
fn rs_token_rejected_by_hmac_policy() {
    // Token declares RS256; verifier pinned HMAC. Rejected by policy before
    // any key material is consulted.
    let token = forge_token(
        r#"{"alg":"RS256","typ":"JWT"}"#,
        r#"{"sub":"admin"}"#,
        &base64url::encode("fake-rsa-signature"),
    );

    let result = decode(
        &token,
        &Key::symmetric(b"secret"),
        &AlgorithmPolicy::hmac_any(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::AlgorithmNotAllowed { .. })));
}

#[test]
fn hs_token_rejected_by_rsa_policy() {
    // The inverse confusion: an HMAC token signed with the public key bytes
    // as the secret must not reach the HMAC verifier at all when the caller
    // pinned RSA.
    let key = Key::symmetric(b"rsa-public-key-bytes-as-hmac-secret");
    let token = encode(&claims(&[("sub", json!("admin"))]), &key, AlgorithmId::HS256).unwrap();

    let result = decode(
        &token,
        &key,
        &AlgorithmPolicy::rsa_any(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::AlgorithmNotAllowed { .. })));
}

#[test]
fn policy_mismatch_reported_with_context() {
    let key = Key::symmetric(b"secret");
    let token = encode(&claims(&[("sub", json!("u"))]), &key, AlgorithmId::HS384).unwrap();

    match decode(
        &token,
        &key,
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    ) {
        Err(Error::AlgorithmNotAllowed { found, allowed }) => {
            assert_eq!(found, "HS384");
            assert_eq!(allowed, vec!["HS256"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn header_with_unknown_algorithm_rejected() {
    let token = forge_token(
        r#"{"alg":"ES256","typ":"JWT"}"#,
        r#"{"sub":"admin"}"#,
        &base64url::encode("sig"),
    );

    let result = decode(
        &token,
        &Key::symmetric(b"secret"),
        &AlgorithmPolicy::allow_all(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::UnsupportedAlgorithm(_))));
}

#[test]
fn header_alg_case_is_significant() {
    // "HS256" != "hs256"; lookalike names must not dispatch
    let token = forge_token(
        r#"{"alg":"hs256","typ":"JWT"}"#,
        r#"{"sub":"admin"}"#,
        &base64url::encode("sig"),
    );

    let result = decode(
        &token,
        &Key::symmetric(b"secret"),
        &AlgorithmPolicy::allow_all(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::UnsupportedAlgorithm(_))));
}

#[test]
fn missing_alg_field_rejected() {
    let token = forge_token(r#"{"typ":"JWT"}"#, r#"{"sub":"admin"}"#, "");

    // Header without "alg" doesn't even parse
    let result = decode(
        &token,
        &Key::None,
        &AlgorithmPolicy::unsigned_only(),
        &ValidationOptions::default(),
    );
    assert!(matches!(result, Err(Error::InvalidJson(_))));
}
