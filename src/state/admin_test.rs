use super::*;
use crate::util::crypto;

const HOUR_MS: f64 = 60.0 * 60.0 * 1000.0;
const MINUTE_MS: f64 = 60.0 * 1000.0;
const DAY_MS: f64 = 24.0 * HOUR_MS;

fn fresh() -> CredentialStore {
    let store = CredentialStore::new();
    store.clear();
    store
}

fn session_at(timestamp: f64, remember_me: bool) -> AdminSession {
    AdminSession {
        token: "tok".to_owned(),
        timestamp,
        remember_me,
    }
}

// =============================================================
// Session windows
// =============================================================

#[test]
fn regular_session_live_just_before_24h() {
    let session = session_at(0.0, false);
    assert!(session.is_live(23.0 * HOUR_MS + 59.0 * MINUTE_MS));
}

#[test]
fn regular_session_dead_just_after_24h() {
    let session = session_at(0.0, false);
    assert!(!session.is_live(24.0 * HOUR_MS + MINUTE_MS));
}

#[test]
fn extended_session_live_just_before_30d() {
    let session = session_at(0.0, true);
    assert!(session.is_live(30.0 * DAY_MS - MINUTE_MS));
}

#[test]
fn extended_session_dead_just_after_30d() {
    let session = session_at(0.0, true);
    assert!(!session.is_live(30.0 * DAY_MS + MINUTE_MS));
}

#[test]
fn windows_are_relative_to_creation_time() {
    let session = session_at(1_000_000.0, false);
    assert!(session.is_live(1_000_000.0 + DAY_MS - 1.0));
    assert!(!session.is_live(1_000_000.0 + DAY_MS));
}

// =============================================================
// Attempt counter
// =============================================================

#[test]
fn each_failure_increments_by_exactly_one() {
    let store = fresh();
    for expected in 1..MAX_LOGIN_ATTEMPTS {
        let count = record_failed_login(store);
        assert_eq!(count, expected);
        assert_eq!(remaining_attempts(count), MAX_LOGIN_ATTEMPTS - expected);
        assert!(!is_locked_out(count));
    }
}

#[test]
fn fifth_failure_locks_the_form() {
    let store = fresh();
    let mut count = 0;
    for _ in 0..MAX_LOGIN_ATTEMPTS {
        count = record_failed_login(store);
    }
    assert_eq!(count, MAX_LOGIN_ATTEMPTS);
    assert_eq!(remaining_attempts(count), 0);
    assert!(is_locked_out(count));
}

#[test]
fn counter_persists_across_store_handles() {
    let store = fresh();
    record_failed_login(store);
    record_failed_login(store);
    assert_eq!(CredentialStore::new().login_attempts(), 2);
}

// =============================================================
// Open / validate / close
// =============================================================

#[test]
fn open_session_persists_an_encrypted_blob_and_resets_attempts() {
    let store = fresh();
    record_failed_login(store);
    record_failed_login(store);

    let session = open_session(store, true, 5_000.0);
    assert!(session.remember_me);
    assert_eq!(session.timestamp, 5_000.0);
    assert_eq!(store.login_attempts(), 0);

    let blob = store.get(ADMIN_SESSION_KEY).expect("blob persisted");
    assert!(!blob.contains(&session.token));
    assert_eq!(crypto::decrypt::<AdminSession>(&blob), Some(session));
}

#[test]
fn validate_accepts_a_live_session() {
    let store = fresh();
    open_session(store, false, 1_000.0);
    assert!(validate_session(store, 1_000.0 + HOUR_MS));
}

#[test]
fn validate_rejects_and_clears_an_expired_session() {
    let store = fresh();
    open_session(store, false, 1_000.0);
    assert!(!validate_session(store, 1_000.0 + DAY_MS + MINUTE_MS));
    assert_eq!(store.get(ADMIN_SESSION_KEY), None);
}

#[test]
fn validate_rejects_and_clears_an_undecryptable_blob() {
    let store = fresh();
    store.set(ADMIN_SESSION_KEY, "corrupted garbage");
    assert!(!validate_session(store, 0.0));
    assert_eq!(store.get(ADMIN_SESSION_KEY), None);
}

#[test]
fn validate_without_a_blob_is_false() {
    let store = fresh();
    assert!(!validate_session(store, 0.0));
}

#[test]
fn close_session_clears_blob_and_continuity_flag() {
    let store = fresh();
    open_session(store, false, 0.0);
    store.set_was_in_admin_view(true);

    close_session(store);
    assert_eq!(store.get(ADMIN_SESSION_KEY), None);
    assert!(!store.was_in_admin_view());
}

#[test]
fn expiry_exit_clears_the_continuity_flag() {
    let store = fresh();
    open_session(store, false, 1_000.0);
    store.set_was_in_admin_view(true);

    // The recurring check finds the session dead and exits the view.
    assert!(!validate_session(store, 1_000.0 + DAY_MS + MINUTE_MS));
    leave_admin_view(store);

    assert_eq!(store.get(ADMIN_SESSION_KEY), None);
    assert!(!store.was_in_admin_view());
}

#[test]
fn main_session_and_sub_session_are_independent() {
    let store = fresh();
    open_session(store, false, 0.0);
    // Main token gone, admin blob still client-side valid.
    store.remove(crate::util::storage::TOKEN_KEY);
    assert!(validate_session(store, HOUR_MS));
}
