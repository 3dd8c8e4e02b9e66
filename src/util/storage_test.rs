use super::*;
use crate::net::types::{Role, User};

fn fresh() -> CredentialStore {
    let store = CredentialStore::new();
    store.clear();
    store
}

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "nurse@example.com".to_owned(),
        name: Some("Nurse".to_owned()),
        role,
        is_verified: true,
    }
}

// =============================================================
// Raw key-value contract
// =============================================================

#[test]
fn get_missing_key_is_none() {
    let store = fresh();
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = fresh();
    store.set(TOKEN_KEY, "abc123");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn remove_deletes_only_that_key() {
    let store = fresh();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_ROLE_KEY, "staff");
    store.remove(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_ROLE_KEY).as_deref(), Some("staff"));
}

#[test]
fn clear_removes_every_key() {
    let store = fresh();
    store.set(TOKEN_KEY, "abc");
    store.set(ADMIN_SESSION_KEY, "blob");
    store.set(LOGIN_ATTEMPTS_KEY, "3");
    store.clear();
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(ADMIN_SESSION_KEY), None);
    assert_eq!(store.get(LOGIN_ATTEMPTS_KEY), None);
}

// =============================================================
// Typed accessors
// =============================================================

#[test]
fn user_round_trips_through_json() {
    let store = fresh();
    let u = user(Role::Staff);
    store.set_user(&u);
    assert_eq!(store.user(), Some(u));
    assert_eq!(store.get(USER_ROLE_KEY).as_deref(), Some("staff"));
}

#[test]
fn corrupt_user_record_reads_as_none() {
    let store = fresh();
    store.set(USER_KEY, "{not json");
    assert_eq!(store.user(), None);
    assert_eq!(store.role(), Role::User);
}

#[test]
fn role_defaults_to_user_without_a_record() {
    let store = fresh();
    assert_eq!(store.role(), Role::User);
}

#[test]
fn role_reads_from_persisted_user() {
    let store = fresh();
    store.set_user(&user(Role::Admin));
    assert_eq!(store.role(), Role::Admin);
}

#[test]
fn login_attempts_default_to_zero() {
    let store = fresh();
    assert_eq!(store.login_attempts(), 0);
}

#[test]
fn unparseable_login_attempts_read_as_zero() {
    let store = fresh();
    store.set(LOGIN_ATTEMPTS_KEY, "many");
    assert_eq!(store.login_attempts(), 0);
}

#[test]
fn login_attempts_round_trip() {
    let store = fresh();
    store.set_login_attempts(4);
    assert_eq!(store.login_attempts(), 4);
}

#[test]
fn admin_view_flag_round_trips() {
    let store = fresh();
    assert!(!store.was_in_admin_view());
    store.set_was_in_admin_view(true);
    assert!(store.was_in_admin_view());
    store.set_was_in_admin_view(false);
    assert!(!store.was_in_admin_view());
}
