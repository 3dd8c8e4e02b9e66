//! Canonical authentication state for the whole application.
//!
//! Three observable states: loading (startup validation pending),
//! authenticated with a user record, and unauthenticated. The persisted
//! token is validated against the server exactly once per application
//! load; after that, only the login/logout/OAuth/OTP flows mutate the
//! state through [`AuthState::set_auth`]. Consumers must not render
//! role-gated content while `loading` is true.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::gateway::Gateway;
use crate::net::types::User;

/// Session state held in a context signal and shared across the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    /// True only during the startup validation window; once resolved it
    /// never returns to true for the lifetime of this app instance.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// The single state-transition function. Everything that changes the
    /// session (login, logout, OAuth callback, OTP verification) goes
    /// through here.
    pub fn set_auth(&mut self, status: bool, user: Option<User>) {
        self.is_authenticated = status;
        self.user = user;
    }
}

/// Result of the one-time startup validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartupOutcome {
    Authenticated(User),
    Unauthenticated { clear_store: bool },
}

/// Decide the post-startup session state.
///
/// No token: straight to unauthenticated, and the auth-check endpoint is
/// never called (`check_passed` is ignored). A token whose check failed,
/// or a token without a readable user record (partial write), fails closed
/// and asks for the store to be cleared.
#[must_use]
pub fn resolve_startup(
    has_token: bool,
    check_passed: bool,
    persisted_user: Option<User>,
) -> StartupOutcome {
    if !has_token {
        return StartupOutcome::Unauthenticated { clear_store: false };
    }
    match persisted_user {
        Some(user) if check_passed => StartupOutcome::Authenticated(user),
        _ => StartupOutcome::Unauthenticated { clear_store: true },
    }
}

/// Validate any persisted token and resolve the loading state.
///
/// Spawned once from `App` on the client; never re-run afterwards.
pub async fn validate_persisted_session(gateway: Gateway, auth: RwSignal<AuthState>) {
    let store = gateway.store();
    let has_token = store.token().is_some();
    let check_passed = if has_token {
        crate::net::api::check_auth(&gateway).await
    } else {
        false
    };

    match resolve_startup(has_token, check_passed, store.user()) {
        StartupOutcome::Authenticated(user) => auth.update(|state| {
            state.set_auth(true, Some(user));
            state.loading = false;
        }),
        StartupOutcome::Unauthenticated { clear_store } => {
            if clear_store {
                store.clear();
            }
            auth.update(|state| {
                state.set_auth(false, None);
                state.loading = false;
            });
        }
    }
}
