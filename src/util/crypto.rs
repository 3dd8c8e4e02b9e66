//! Reversible obfuscation for the admin sub-session blob.
//!
//! This is *not* a security boundary: the key is hard-coded and anyone with
//! access to the browser can reverse it. It exists so the persisted admin
//! session is not plainly readable in devtools, matching the behavior of
//! the storage format it replaces. Do not put confidential data through it.
//!
//! `decrypt` of a tampered or garbage blob returns `None`, never panics;
//! callers treat that as an invalid session.

#[cfg(test)]
#[path = "crypto_test.rs"]
mod crypto_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const SESSION_KEY: &[u8] = b"medstock-session-key-2024";

fn keystream_byte(index: usize) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    let position = index as u8;
    SESSION_KEY[index % SESSION_KEY.len()] ^ position.wrapping_mul(31)
}

/// Serialize `value` to JSON, mix it with the keystream, and base64-armor it.
#[must_use]
pub fn encrypt<T: serde::Serialize>(value: &T) -> String {
    let Ok(plain) = serde_json::to_vec(value) else {
        return String::new();
    };
    let mixed: Vec<u8> = plain
        .iter()
        .enumerate()
        .map(|(i, byte)| byte ^ keystream_byte(i))
        .collect();
    STANDARD.encode(mixed)
}

/// Reverse [`encrypt`]. `None` on any decode, unmix, or parse failure.
#[must_use]
pub fn decrypt<T: serde::de::DeserializeOwned>(blob: &str) -> Option<T> {
    let mixed = STANDARD.decode(blob).ok()?;
    let plain: Vec<u8> = mixed
        .iter()
        .enumerate()
        .map(|(i, byte)| byte ^ keystream_byte(i))
        .collect();
    serde_json::from_slice(&plain).ok()
}

/// Generate an opaque session token: 64 hex characters of random material.
#[must_use]
pub fn generate_token() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}
