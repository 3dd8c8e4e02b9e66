use super::*;
use crate::util::storage::{ADMIN_SESSION_KEY, TOKEN_KEY, USER_KEY};

fn gateway() -> Gateway {
    let store = CredentialStore::new();
    store.clear();
    Gateway::new(store, RwSignal::new(NoticeState::default()))
}

// =============================================================
// Failure classification
// =============================================================

#[test]
fn status_401_is_session_expired() {
    assert_eq!(
        FailureNotice::from_status(401, None),
        FailureNotice::SessionExpired
    );
}

#[test]
fn status_403_is_permission_denied() {
    assert_eq!(
        FailureNotice::from_status(403, Some("ignored")),
        FailureNotice::PermissionDenied
    );
}

#[test]
fn status_404_and_429_have_fixed_notices() {
    assert_eq!(FailureNotice::from_status(404, None), FailureNotice::NotFound);
    assert_eq!(
        FailureNotice::from_status(429, None),
        FailureNotice::RateLimited
    );
}

#[test]
fn other_statuses_surface_server_detail_verbatim() {
    assert_eq!(
        FailureNotice::from_status(422, Some("Email already registered")),
        FailureNotice::Server("Email already registered".to_owned())
    );
    assert_eq!(
        FailureNotice::from_status(422, Some("Email already registered")).message(),
        "Email already registered"
    );
}

#[test]
fn other_statuses_without_detail_are_generic() {
    assert_eq!(FailureNotice::from_status(500, None), FailureNotice::Generic);
}

// =============================================================
// Forced logout idempotency
// =============================================================

#[test]
fn first_unauthorized_clears_store_and_latches() {
    let gw = gateway();
    gw.store().set(TOKEN_KEY, "tok");
    gw.store().set(USER_KEY, "{}");
    gw.store().set(ADMIN_SESSION_KEY, "blob");

    assert!(gw.handle_unauthorized());
    assert_eq!(gw.store().get(TOKEN_KEY), None);
    assert_eq!(gw.store().get(USER_KEY), None);
    assert_eq!(gw.store().get(ADMIN_SESSION_KEY), None);
}

#[test]
fn concurrent_unauthorized_fires_exactly_once() {
    let gw = gateway();
    gw.store().set(TOKEN_KEY, "tok");

    // Three panels observing 401 from simultaneous refetches.
    let performed: Vec<bool> = (0..3).map(|_| gw.handle_unauthorized()).collect();
    assert_eq!(performed, vec![true, false, false]);
}

#[test]
fn unauthorized_pushes_a_single_session_expired_notice() {
    let store = CredentialStore::new();
    store.clear();
    let notices = RwSignal::new(NoticeState::default());
    let gw = Gateway::new(store, notices);

    gw.handle_unauthorized();
    gw.handle_unauthorized();

    let items = notices.get_untracked().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].message, "Session expired. Please login again");
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn dispatch_failure_returns_status_error_with_notice_message() {
    let gw = gateway();
    let err = gw.dispatch_failure(403, None);
    assert_eq!(
        err,
        ApiError::Status {
            status: 403,
            message: "Access denied".to_owned()
        }
    );
}

#[test]
fn dispatch_failure_on_401_does_not_mutate_state_twice() {
    let gw = gateway();
    gw.store().set(TOKEN_KEY, "tok");
    let _ = gw.dispatch_failure(401, None);
    // Second 401 from a concurrent request: still an error for the caller,
    // but no further side effects.
    let err = gw.dispatch_failure(401, None);
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
}

#[test]
fn dispatch_transport_is_generic_notice_plus_transport_error() {
    let store = CredentialStore::new();
    store.clear();
    let notices = RwSignal::new(NoticeState::default());
    let gw = Gateway::new(store, notices);

    let err = gw.dispatch_transport("connection refused".to_owned());
    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
    let items = notices.get_untracked().items;
    assert_eq!(items[0].message, "An error occurred. Please try again");
}
