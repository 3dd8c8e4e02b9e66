//! Credential store backed by browser `localStorage`.
//!
//! Client-side (hydrate): real `localStorage` reads and writes.
//! Off-browser (SSR, native tests): a thread-local in-memory map with the
//! same contract, so session logic can be exercised without a browser.
//!
//! There is no atomicity across keys. A reload between writing `token` and
//! `user` is possible; readers treat partial or corrupt state as absent
//! rather than failing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::{Role, User};

/// Storage key for the bearer token of the main session.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized current-user record.
pub const USER_KEY: &str = "user";
/// Storage key mirroring the user's role string (set at login, legacy).
pub const USER_ROLE_KEY: &str = "userRole";
/// Storage key for the encrypted admin sub-session blob.
pub const ADMIN_SESSION_KEY: &str = "adminSession";
/// Storage key for the admin login attempt counter.
pub const LOGIN_ATTEMPTS_KEY: &str = "loginAttempts";
/// Storage key for the "was in admin view" UI-continuity flag.
pub const WAS_IN_ADMIN_VIEW_KEY: &str = "wasInAdminView";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Handle over the browser's persisted key-value storage.
///
/// Copyable so it can be held by the gateway and passed into pages without
/// ceremony; all instances address the same underlying storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct CredentialStore;

impl CredentialStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read a raw value. `None` if absent or storage is unavailable.
    #[must_use]
    pub fn get(self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            MEMORY.with(|m| m.borrow().get(key).cloned())
        }
    }

    /// Write a raw value. Silently a no-op if storage is unavailable.
    pub fn set(self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            MEMORY.with(|m| {
                m.borrow_mut().insert(key.to_owned(), value.to_owned());
            });
        }
    }

    /// Remove a single key.
    pub fn remove(self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            MEMORY.with(|m| {
                m.borrow_mut().remove(key);
            });
        }
    }

    /// Remove everything. Used by the forced-logout path.
    pub fn clear(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.clear();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            MEMORY.with(|m| m.borrow_mut().clear());
        }
    }

    // ---- typed accessors -------------------------------------------------

    /// The persisted bearer token, if any.
    #[must_use]
    pub fn token(self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    pub fn set_token(self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    /// The persisted user record. Corrupt or partial JSON reads as `None`.
    #[must_use]
    pub fn user(self) -> Option<User> {
        let raw = self.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist the user record along with the legacy `userRole` mirror.
    pub fn set_user(self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            self.set(USER_KEY, &json);
        }
        self.set(USER_ROLE_KEY, user.role.as_str());
    }

    /// Role of the persisted user, defaulting to the lowest privilege.
    #[must_use]
    pub fn role(self) -> Role {
        self.user().map_or(Role::User, |u| u.role)
    }

    /// Current admin login attempt count. Unparseable values read as zero.
    #[must_use]
    pub fn login_attempts(self) -> u32 {
        self.get(LOGIN_ATTEMPTS_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    pub fn set_login_attempts(self, count: u32) {
        self.set(LOGIN_ATTEMPTS_KEY, &count.to_string());
    }

    /// Whether the user was last looking at the admin tools view.
    #[must_use]
    pub fn was_in_admin_view(self) -> bool {
        self.get(WAS_IN_ADMIN_VIEW_KEY).as_deref() == Some("true")
    }

    pub fn set_was_in_admin_view(self, value: bool) {
        self.set(WAS_IN_ADMIN_VIEW_KEY, if value { "true" } else { "false" });
    }
}
