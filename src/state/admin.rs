//! Admin sub-session: a second session scheme gating the administrative
//! inventory tools, independent of the main token session.
//!
//! The two schemes are deliberately not unified. An admin can hold a live
//! sub-session blob while the main token is gone, and vice versa; that is
//! observable behavior this module preserves. Candidate consolidation
//! (one session abstraction with a scope field) is noted in DESIGN.md.
//!
//! Entry requires the attempt counter to be under [`MAX_LOGIN_ATTEMPTS`]
//! and a credential check to pass. The persisted blob is obfuscated with
//! [`crate::util::crypto`]; an undecryptable blob is an invalid session,
//! not an error. There is no time-based unlock for the attempt counter.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::{Deserialize, Serialize};

use crate::util::crypto;
use crate::util::storage::{
    ADMIN_SESSION_KEY, CredentialStore, LOGIN_ATTEMPTS_KEY, WAS_IN_ADMIN_VIEW_KEY,
};

/// Failed admin logins allowed before the form locks.
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;

/// Sub-session lifetime without "remember me": 24 hours.
pub const REGULAR_SESSION_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Sub-session lifetime with "remember me": 30 days.
pub const EXTENDED_SESSION_MS: f64 = 30.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// How often a mounted admin view re-checks the persisted session.
pub const SESSION_CHECK_INTERVAL_MS: u64 = 60_000;

/// The persisted admin sub-session, stored encrypted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: f64,
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

impl AdminSession {
    /// Validity window implied by the remember-me flag.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        if self.remember_me {
            EXTENDED_SESSION_MS
        } else {
            REGULAR_SESSION_MS
        }
    }

    /// Whether the session is still inside its window at `now_ms`.
    #[must_use]
    pub fn is_live(&self, now_ms: f64) -> bool {
        now_ms - self.timestamp < self.duration_ms()
    }
}

/// Whether the login form is locked. Locked means non-submittable
/// regardless of credential correctness, with no countdown to re-enable.
#[must_use]
pub const fn is_locked_out(attempts: u32) -> bool {
    attempts >= MAX_LOGIN_ATTEMPTS
}

/// Attempts left before lockout.
#[must_use]
pub const fn remaining_attempts(attempts: u32) -> u32 {
    MAX_LOGIN_ATTEMPTS.saturating_sub(attempts)
}

/// Record a failed credential check; returns the new persisted count.
pub fn record_failed_login(store: CredentialStore) -> u32 {
    let count = store.login_attempts() + 1;
    store.set_login_attempts(count);
    count
}

/// Open a fresh sub-session: generate a token, persist the encrypted blob,
/// and reset the attempt counter.
pub fn open_session(store: CredentialStore, remember_me: bool, now_ms: f64) -> AdminSession {
    let session = AdminSession {
        token: crypto::generate_token(),
        timestamp: now_ms,
        remember_me,
    };
    store.set(ADMIN_SESSION_KEY, &crypto::encrypt(&session));
    store.remove(LOGIN_ATTEMPTS_KEY);
    session
}

/// Decrypt the persisted blob and check its window. An absent, expired, or
/// undecryptable blob reads as no session, and a dead blob is removed.
pub fn validate_session(store: CredentialStore, now_ms: f64) -> bool {
    let Some(blob) = store.get(ADMIN_SESSION_KEY) else {
        return false;
    };
    match crypto::decrypt::<AdminSession>(&blob) {
        Some(session) if session.is_live(now_ms) => true,
        _ => {
            store.remove(ADMIN_SESSION_KEY);
            false
        }
    }
}

/// Exit the admin view back to the dashboard, keeping any live blob.
/// Clears the continuity flag so the dashboard does not bounce straight
/// back; expiry exits go through here too, after [`validate_session`] has
/// already removed the dead blob.
pub fn leave_admin_view(store: CredentialStore) {
    store.set_was_in_admin_view(false);
}

/// Manual logout: drop the blob and the admin-view continuity flag.
pub fn close_session(store: CredentialStore) {
    store.remove(ADMIN_SESSION_KEY);
    store.remove(WAS_IN_ADMIN_VIEW_KEY);
}
