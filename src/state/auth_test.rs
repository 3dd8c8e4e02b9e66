use super::*;
use crate::net::types::Role;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "nurse@example.com".to_owned(),
        name: None,
        role: Role::Staff,
        is_verified: true,
    }
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn auth_state_starts_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn set_auth_true_records_the_user() {
    let mut state = AuthState::default();
    state.set_auth(true, Some(user()));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(user()));
}

#[test]
fn set_auth_false_drops_the_user() {
    let mut state = AuthState::default();
    state.set_auth(true, Some(user()));
    state.set_auth(false, None);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

// =============================================================
// Startup validation
// =============================================================

#[test]
fn no_token_resolves_without_consulting_the_check() {
    // check_passed=true must be irrelevant: the endpoint is never called
    // when no token is persisted.
    assert_eq!(
        resolve_startup(false, true, Some(user())),
        StartupOutcome::Unauthenticated { clear_store: false }
    );
}

#[test]
fn valid_token_with_persisted_user_authenticates() {
    assert_eq!(
        resolve_startup(true, true, Some(user())),
        StartupOutcome::Authenticated(user())
    );
}

#[test]
fn failed_check_clears_the_store() {
    assert_eq!(
        resolve_startup(true, false, Some(user())),
        StartupOutcome::Unauthenticated { clear_store: true }
    );
}

#[test]
fn token_without_user_record_fails_closed() {
    // A reload between writing `token` and `user` leaves partial state;
    // it must read as unauthenticated.
    assert_eq!(
        resolve_startup(true, true, None),
        StartupOutcome::Unauthenticated { clear_store: true }
    );
}
