//! Custom header field handling
//!
//! Callers can attach extra header fields (key IDs, content types, private
//! fields) at encode time; they must survive the round trip and never
//! displace the reserved `alg`/`typ` fields.

use jwtkit::utils::base64url;
use jwtkit::*;
use serde_json::{json, Map, Value};

fn payload() -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert("sub".to_string(), json!("user123"));
    payload
}

fn headers(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn kid_round_trip() {
    let key = Key::symmetric(b"secret");
    let token = encode_with_header(
        &payload(),
        &key,
        AlgorithmId::HS256,
        &headers(&[("kid", json!("2024-signing-key"))]),
    )
    .unwrap();

    let decoded = decode(
        &token,
        &key,
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    )
    .unwrap();

    assert_eq!(decoded.header.key_id(), Some("2024-signing-key"));
}

#[test]
fn custom_fields_round_trip() {
    let key = Key::symmetric(b"secret");
    let token = encode_with_header(
        &payload(),
        &key,
        AlgorithmId::HS256,
        &headers(&[
            ("cty", json!("JWT")),
            ("x5t", json!("thumbprint")),
            ("internal", json!({"shard": 3})),
        ]),
    )
    .unwrap();

    let decoded = decode(
        &token,
        &key,
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    )
    .unwrap();

    assert_eq!(decoded.header.extra.get("cty"), Some(&json!("JWT")));
    assert_eq!(decoded.header.extra.get("x5t"), Some(&json!("thumbprint")));
    assert_eq!(
        decoded.header.extra.get("internal"),
        Some(&json!({"shard": 3}))
    );
}

#[test]
fn reserved_fields_cannot_be_displaced() {
    let key = Key::symmetric(b"secret");
    let token = encode_with_header(
        &payload(),
        &key,
        AlgorithmId::HS256,
        &headers(&[("alg", json!("none")), ("typ", json!("NOT-JWT"))]),
    )
    .unwrap();

    // The wire header carries the real algorithm, once
    let header_b64 = token.split('.').next().unwrap();
    let header_json = base64url::decode(header_b64).unwrap();
    assert_eq!(header_json.matches("alg").count(), 1);
    assert!(header_json.contains(r#""alg":"HS256""#));
    assert!(header_json.contains(r#""typ":"JWT""#));

    let decoded = decode(
        &token,
        &key,
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(decoded.header.algorithm_str(), "HS256");
    assert_eq!(decoded.header.token_type.as_deref(), Some("JWT"));
}

#[test]
fn kid_readable_before_verification() {
    // The intended flow for key selection: peek at the unverified header,
    // pick a key, then decode for real.
    let key = Key::symmetric(b"keyring-entry-7");
    let token = encode_with_header(
        &payload(),
        &key,
        AlgorithmId::HS256,
        &headers(&[("kid", json!("keyring-entry-7"))]),
    )
    .unwrap();

    let peek = ParsedToken::from_string(&token).unwrap();
    assert_eq!(peek.header().key_id(), Some("keyring-entry-7"));

    let decoded = decode(
        &token,
        &key,
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    )
    .unwrap();
    assert_eq!(decoded.header.key_id(), Some("keyring-entry-7"));
}

#[test]
fn foreign_header_with_unknown_fields_parses() {
    // Tokens minted elsewhere may carry fields we don't know about
    let key = Key::symmetric(b"secret");
    let header_json = r#"{"alg":"HS256","typ":"JWT","jku":"https://example.com/keys","nonce":"abc123"}"#;
    let payload_json = r#"{"sub":"user123"}"#;

    let signing_input = format!(
        "{}.{}",
        base64url::encode(header_json),
        base64url::encode(payload_json)
    );
    // Sign the foreign header with our own key so verification passes
    let tag = {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;
        let mut mac = Hmac::<Sha256>::new_from_slice(b"secret").unwrap();
        mac.update(signing_input.as_bytes());
        mac.finalize().into_bytes()
    };
    let token = format!("{}.{}", signing_input, base64url::encode_bytes(&tag));

    let decoded = decode(
        &token,
        &key,
        &AlgorithmPolicy::hs256_only(),
        &ValidationOptions::default(),
    )
    .unwrap();

    assert_eq!(
        decoded.header.extra.get("jku"),
        Some(&json!("https://example.com/keys"))
    );
    assert_eq!(decoded.header.extra.get("nonce"), Some(&json!("abc123")));
}
