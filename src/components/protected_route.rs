//! Role-gated route wrapper.
//!
//! Renders its children iff the session is authenticated and the persisted
//! user's role is in the allowed set; otherwise redirects to the login
//! view, carrying the originally requested path in the `from` query
//! parameter so login can return the user there. While the startup
//! validation is pending, renders a neutral spinner and makes no
//! authorization decision.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::loading_screen::LoadingScreen;
use crate::net::gateway::Gateway;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;

/// What the guard does for a given session and role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup validation pending; render a spinner, decide nothing.
    Loading,
    Allow,
    /// Redirect to login with a permission-denied notice.
    Deny,
}

/// Pure authorization check behind [`ProtectedRoute`].
#[must_use]
pub fn route_decision(
    is_authenticated: bool,
    loading: bool,
    role: Role,
    allowed: &[Role],
) -> RouteDecision {
    if loading {
        RouteDecision::Loading
    } else if is_authenticated && allowed.contains(&role) {
        RouteDecision::Allow
    } else {
        RouteDecision::Deny
    }
}

/// Gate a view by required roles. Without an explicit restriction any
/// authenticated role passes.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] allowed_roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let location = use_location();

    let allowed = StoredValue::new(allowed_roles.unwrap_or_else(|| Role::ALL.to_vec()));

    let decision = move || {
        let state = auth.get();
        // Role comes from the persisted record, like every other reader.
        let role = gateway.store().role();
        allowed.with_value(|roles| {
            route_decision(state.is_authenticated, state.loading, role, roles)
        })
    };

    // The permission notice is a side effect, kept out of the render path.
    Effect::new(move || {
        if decision() == RouteDecision::Deny {
            notices.update(|n| {
                n.push_error("You do not have permission to access this page");
            });
        }
    });

    view! {
        {move || match decision() {
            RouteDecision::Loading => view! { <LoadingScreen/> }.into_any(),
            RouteDecision::Allow => children().into_any(),
            RouteDecision::Deny => {
                let from = location.pathname.get();
                view! { <Redirect path=format!("/login?from={from}")/> }.into_any()
            }
        }}
    }
}
