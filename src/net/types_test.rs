use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

// =============================================================
// Role normalization
// =============================================================

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("Staff"), Role::Staff);
    assert_eq!(Role::parse("  user "), Role::User);
}

#[test]
fn unknown_role_degrades_to_user() {
    assert_eq!(Role::parse("superuser"), Role::User);
    assert_eq!(Role::parse(""), Role::User);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_deserializes_mixed_case() {
    let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, Role::Admin);
}

// =============================================================
// User record
// =============================================================

#[test]
fn user_with_missing_optional_fields_parses() {
    let user: User =
        serde_json::from_str(r#"{"id":"u-1","email":"a@b.c"}"#).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.name, None);
    assert!(!user.is_verified);
}

#[test]
fn user_role_normalized_on_deserialize() {
    let user: User =
        serde_json::from_str(r#"{"id":"u-1","email":"a@b.c","role":"ADMIN"}"#)
            .unwrap();
    assert_eq!(user.role, Role::Admin);
}

// =============================================================
// OAuth payload decoding
// =============================================================

#[test]
fn oauth_payload_decodes_base64_json() {
    let json = r#"{"access_token":"tok","user":{"id":"u-1","email":"a@b.c","role":"staff"}}"#;
    let data = STANDARD.encode(json);
    let payload = decode_oauth_payload(&data).expect("payload");
    assert_eq!(payload.access_token, "tok");
    assert_eq!(payload.user.role, Role::Staff);
}

#[test]
fn oauth_payload_rejects_bad_base64() {
    assert_eq!(decode_oauth_payload("%%%not-base64%%%"), None);
}

#[test]
fn oauth_payload_rejects_non_payload_json() {
    let data = STANDARD.encode(r#"{"hello":"world"}"#);
    assert_eq!(decode_oauth_payload(&data), None);
}
