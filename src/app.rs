//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::notice_tray::NoticeTray;
use crate::components::protected_route::ProtectedRoute;
use crate::net::gateway::Gateway;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    landing::LandingPage, login::LoginPage, oauth_callback::OauthCallbackPage,
    register::RegisterPage, staff::StaffPage, verify_otp::VerifyOtpPage,
};
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;
use crate::util::storage::CredentialStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session store, notice queue, and token gateway once,
/// provides them through context, and kicks off the one-time startup
/// token validation on the client.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = CredentialStore::new();
    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    let gateway = Gateway::new(store, notices);

    provide_context(auth);
    provide_context(notices);
    provide_context(gateway);

    // Validate any persisted token exactly once per application load.
    // Never re-run; later transitions go through `AuthState::set_auth`.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::validate_persisted_session(
        gateway, auth,
    ));

    view! {
        <Stylesheet id="leptos" href="/pkg/medstock.css"/>
        <Title text="MedStock"/>

        <Router>
            <Navbar/>
            <NoticeTray/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("verify-otp") view=VerifyOtpPage/>
                    <Route
                        path=(StaticSegment("oauth"), StaticSegment("callback"))
                        view=OauthCallbackPage
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <DashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("staff")
                        view=|| {
                            view! {
                                <ProtectedRoute allowed_roles=vec![Role::Staff]>
                                    <StaffPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| {
                            view! {
                                <ProtectedRoute allowed_roles=vec![Role::Admin]>
                                    <AdminPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
