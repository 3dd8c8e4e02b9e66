//! Wire types shared between the auth/inventory endpoints and the UI.
//!
//! ROLE NORMALIZATION
//! ==================
//! The server has historically emitted role strings in mixed case
//! (`"admin"`, `"ADMIN"`). Every role string entering the client passes
//! through [`Role::parse`] at the serde boundary, so comparisons elsewhere
//! never see a raw string. Unknown roles degrade to the lowest privilege.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Access level controlling which views a user can reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Staff,
    Admin,
}

impl Role {
    /// Case-insensitive parse; anything unrecognized is a plain user.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "staff" => Self::Staff,
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }

    /// Canonical lowercase form, as persisted and sent over the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    /// All roles, the default allowed set for a gated route.
    pub const ALL: [Self; 3] = [Self::User, Self::Staff, Self::Admin];
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// The authenticated user record, persisted alongside the bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub platform: String,
}

/// `POST /api/auth/login` response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// `POST /api/auth/register` request body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` response; verification continues over OTP.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// `GET /api/auth/check` response.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckAuthResponse {
    pub authenticated: bool,
}

/// `POST /api/auth/verify-otp` request body.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyOtpRequest {
    pub otp: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub timestamp: String,
}

/// `POST /api/auth/verify-otp` response.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyOtpResponse {
    pub token: String,
    pub user: User,
}

/// Payload carried back from the OAuth provider via
/// `/oauth/callback?data=<base64 JSON>`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OauthPayload {
    pub access_token: String,
    pub user: User,
}

/// Decode the base64 JSON blob from the OAuth callback query string.
#[must_use]
pub fn decode_oauth_payload(data: &str) -> Option<OauthPayload> {
    let bytes = STANDARD.decode(data).ok()?;
    serde_json::from_slice(&bytes).ok()
}
