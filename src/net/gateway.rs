//! Token gateway: the single path every API request goes through.
//!
//! Outbound, it attaches `Authorization: Bearer <token>` whenever a token
//! is persisted. Inbound, it centralizes error reactions:
//!
//! - 401: clear the credential store, surface a session-expired notice,
//!   and force navigation to the login view. Concurrent in-flight requests
//!   can all observe 401 at once; a latch makes the forced logout fire
//!   exactly once.
//! - 403 / 404 / 429: surface the matching notice, no state mutation.
//! - anything else: surface the server's `detail` message verbatim if
//!   present, otherwise a generic failure notice.
//!
//! Notices are fire-and-forget; the typed error still propagates to the
//! caller for local handling (resetting a loading flag, clearing a form).
//! Double notification (gateway + caller) is acceptable for caller-local
//! messages. The forced-logout branch belongs to the gateway alone.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};
use thiserror::Error;

use crate::state::notices::NoticeState;
use crate::util::storage::CredentialStore;

/// Where a forced logout lands.
pub const LOGIN_PATH: &str = "/login";

/// Failure of a request routed through the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not parse as the expected shape.
    #[error("invalid response body")]
    Decode,
    /// Requests are only available in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Notice the gateway surfaces for a failed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureNotice {
    SessionExpired,
    PermissionDenied,
    NotFound,
    RateLimited,
    Server(String),
    Generic,
}

impl FailureNotice {
    /// Map a status code and optional server-supplied detail to a notice.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<&str>) -> Self {
        match status {
            401 => Self::SessionExpired,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            _ => detail.map_or(Self::Generic, |d| Self::Server(d.to_owned())),
        }
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::SessionExpired => "Session expired. Please login again",
            Self::PermissionDenied => "Access denied",
            Self::NotFound => "Resource not found",
            Self::RateLimited => "Too many requests. Please try again later",
            Self::Server(detail) => detail,
            Self::Generic => "An error occurred. Please try again",
        }
    }
}

/// HTTP client wrapper owning the credential store handle, the notice
/// queue, and the forced-logout latch. Cheap to clone; constructed once in
/// `App` and provided through context.
#[derive(Clone, Copy)]
pub struct Gateway {
    store: CredentialStore,
    notices: RwSignal<NoticeState>,
    session_expired: RwSignal<bool>,
}

impl Gateway {
    #[must_use]
    pub fn new(store: CredentialStore, notices: RwSignal<NoticeState>) -> Self {
        Self {
            store,
            notices,
            session_expired: RwSignal::new(false),
        }
    }

    #[must_use]
    pub const fn store(&self) -> CredentialStore {
        self.store
    }

    /// Perform the forced-logout side effects for a 401 response.
    ///
    /// Idempotent: returns `true` only for the first 401 observed; later
    /// concurrent observers find the latch set and do nothing, so the
    /// store is cleared and the redirect issued exactly once.
    pub fn handle_unauthorized(&self) -> bool {
        if self.session_expired.get_untracked() {
            return false;
        }
        self.session_expired.set(true);
        self.store.clear();
        self.notices.update(|n| {
            n.push_error(FailureNotice::SessionExpired.message());
        });
        true
    }

    /// Centralized reaction to a failed response; returns the typed error
    /// that propagates to the caller.
    fn dispatch_failure(&self, status: u16, detail: Option<String>) -> ApiError {
        let notice = FailureNotice::from_status(status, detail.as_deref());
        if notice == FailureNotice::SessionExpired {
            if self.handle_unauthorized() {
                redirect_to_login();
            }
        } else {
            self.notices.update(|n| {
                n.push_error(notice.message());
            });
        }
        ApiError::Status {
            status,
            message: notice.message().to_owned(),
        }
    }

    /// Transport-level failure: no response, generic notice.
    fn dispatch_transport(&self, detail: String) -> ApiError {
        self.notices.update(|n| {
            n.push_error(FailureNotice::Generic.message());
        });
        ApiError::Transport(detail)
    }

    /// `GET` a JSON resource.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(path);
            if let Some(token) = self.store.token() {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let response = request
                .send()
                .await
                .map_err(|e| self.dispatch_transport(e.to_string()))?;
            self.decode(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body, expecting a JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::post(path);
            if let Some(token) = self.store.token() {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let response = request
                .json(body)
                .map_err(|e| self.dispatch_transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| self.dispatch_transport(e.to_string()))?;
            self.decode(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn decode<T>(&self, response: gloo_net::http::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.ok() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| {
                    v.get("detail")
                        .and_then(serde_json::Value::as_str)
                        .map(ToOwned::to_owned)
                });
            return Err(self.dispatch_failure(response.status(), detail));
        }
        response.json::<T>().await.map_err(|_| ApiError::Decode)
    }
}

/// Hard-navigate to the login view. Full page load, which also resets all
/// in-memory session state.
fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}
