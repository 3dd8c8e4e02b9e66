use super::*;
use crate::net::types::Role;

const ALL: [Role; 3] = Role::ALL;

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn loading_defers_the_decision() {
    assert_eq!(
        route_decision(true, true, Role::Admin, &ALL),
        RouteDecision::Loading
    );
    // Even an obviously denied request stays undecided while loading.
    assert_eq!(
        route_decision(false, true, Role::User, &[Role::Admin]),
        RouteDecision::Loading
    );
}

#[test]
fn authenticated_with_allowed_role_passes() {
    assert_eq!(
        route_decision(true, false, Role::Staff, &[Role::Staff]),
        RouteDecision::Allow
    );
}

#[test]
fn unauthenticated_is_denied_regardless_of_role() {
    assert_eq!(
        route_decision(false, false, Role::Admin, &ALL),
        RouteDecision::Deny
    );
}

#[test]
fn staff_never_reaches_an_admin_only_route() {
    assert_eq!(
        route_decision(true, false, Role::Staff, &[Role::Admin]),
        RouteDecision::Deny
    );
}

#[test]
fn default_allowed_set_admits_any_authenticated_role() {
    for role in ALL {
        assert_eq!(route_decision(true, false, role, &ALL), RouteDecision::Allow);
    }
}

#[test]
fn mixed_case_role_strings_compare_through_normalization() {
    // 'ADMIN' from the server and 'admin' in the allowed set meet at the
    // same variant because parsing is the single normalization point.
    let role = Role::parse("ADMIN");
    assert_eq!(
        route_decision(true, false, role, &[Role::Admin]),
        RouteDecision::Allow
    );
}
