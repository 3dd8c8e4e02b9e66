//! Typed auth endpoints, all routed through the [`Gateway`].
//!
//! Client-side (hydrate): real HTTP calls. Server-side (SSR): stubs
//! returning errors/`false`, since these endpoints are only meaningful in
//! the browser.
//!
//! The one deliberate exception is [`verify_admin_credentials`], which
//! bypasses the gateway: the admin sub-session is a separate realm, and a
//! rejected admin credential check must not trip the gateway's
//! forced-logout reaction for the main session.

#![allow(clippy::unused_async)]

use super::gateway::{ApiError, Gateway};
use super::types::{
    CheckAuthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    VerifyOtpRequest, VerifyOtpResponse,
};

/// Where the Google OAuth redirect flow starts. The provider returns to
/// `/oauth/callback?data=<base64 JSON>`.
pub const GOOGLE_AUTH_PATH: &str = "/auth/google";

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`]; the gateway has already surfaced
/// any shared notice by the time this returns.
pub async fn login(gateway: &Gateway, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    gateway.post_json("/api/auth/login", request).await
}

/// `POST /api/auth/register`. Verification continues via OTP.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`].
pub async fn register(
    gateway: &Gateway,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    gateway.post_json("/api/auth/register", request).await
}

/// `GET /api/auth/check` — validate the persisted token.
///
/// Transport failures and rejections both read as `false`: the startup
/// validation fails closed.
pub async fn check_auth(gateway: &Gateway) -> bool {
    gateway
        .get_json::<CheckAuthResponse>("/api/auth/check")
        .await
        .map_or(false, |r| r.authenticated)
}

/// `POST /api/auth/verify-otp`.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`].
pub async fn verify_otp(
    gateway: &Gateway,
    request: &VerifyOtpRequest,
) -> Result<VerifyOtpResponse, ApiError> {
    gateway.post_json("/api/auth/verify-otp", request).await
}

/// `POST /api/auth/resend-otp`.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`].
pub async fn resend_otp(gateway: &Gateway, user_id: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "userId": user_id });
    gateway
        .post_json::<_, serde_json::Value>("/api/auth/resend-otp", &body)
        .await
        .map(|_| ())
}

/// `POST /api/auth/forgot-password` — ask the server to email reset
/// instructions. The reset itself completes out of band.
///
/// # Errors
///
/// Propagates the gateway's [`ApiError`].
pub async fn forgot_password(gateway: &Gateway, email: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "email": email });
    gateway
        .post_json::<_, serde_json::Value>("/api/auth/forgot-password", &body)
        .await
        .map(|_| ())
}

/// Check admin credentials against the auth endpoint with a bare request,
/// outside the gateway. Any failure reads as invalid credentials.
pub async fn verify_admin_credentials(username: &str, password: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": username, "password": password });
        let Ok(request) = gloo_net::http::Request::post("/api/auth/login").json(&body) else {
            return false;
        };
        match request.send().await {
            Ok(response) => response.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        false
    }
}
