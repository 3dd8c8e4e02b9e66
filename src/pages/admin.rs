//! Administrative inventory tools, gated by the admin sub-session.
//!
//! This page sits behind the route guard's `admin` role check *and* its
//! own login: a separate session realm with client-side-encrypted
//! persistence, a five-attempt lockout, and a one-minute liveness poll.
//! The poll and the page share a liveness signal so a dismounted view
//! stops checking and never acts on stale state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::inventory_table::InventoryTable;
use crate::net::api::verify_admin_credentials;
use crate::net::gateway::Gateway;
use crate::net::inventory::fetch_inventory;
use crate::state::admin::{
    close_session, is_locked_out, leave_admin_view, open_session, record_failed_login,
    remaining_attempts, validate_session,
};
#[cfg(feature = "hydrate")]
use crate::state::admin::SESSION_CHECK_INTERVAL_MS;
use crate::util::time::now_ms;

#[component]
pub fn AdminPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let store = gateway.store();
    let logged_in = RwSignal::new(validate_session(store, now_ms()));
    let alive = RwSignal::new(true);

    on_cleanup(move || alive.set(false));

    // Record that the admin tools were the last view, for continuity.
    Effect::new(move || {
        if logged_in.get() {
            store.set_was_in_admin_view(true);
        }
    });

    // Recurring sub-session check while the view is mounted. Expiry (or an
    // undecryptable blob) forces the exit path.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    SESSION_CHECK_INTERVAL_MS,
                ))
                .await;
                if !alive.get_untracked() {
                    break;
                }
                if logged_in.get_untracked() && !validate_session(store, now_ms()) {
                    leave_admin_view(store);
                    logged_in.set(false);
                    navigate("/dashboard", NavigateOptions::default());
                }
            }
        });
    }

    let on_back = {
        let navigate = navigate.clone();
        Callback::new(move |()| {
            leave_admin_view(store);
            navigate("/dashboard", NavigateOptions::default());
        })
    };

    let on_logout = Callback::new(move |()| {
        close_session(store);
        logged_in.set(false);
        navigate("/dashboard", NavigateOptions::default());
    });

    let on_login = Callback::new(move |()| logged_in.set(true));

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || view! { <AdminLogin on_login=on_login/> }
        >
            <AdminTools on_back=on_back on_logout=on_logout/>
        </Show>
    }
}

/// Admin-realm login form with the persisted attempt counter.
///
/// At five failed attempts the form locks entirely; there is no countdown
/// to re-enable, only an external counter reset.
#[component]
fn AdminLogin(on_login: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let store = gateway.store();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);
    let attempts = RwSignal::new(store.login_attempts());

    let locked = move || is_locked_out(attempts.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked() {
            error.set(Some(
                "Too many login attempts. Please try again later.".to_owned(),
            ));
            return;
        }
        if submitting.get() {
            return;
        }
        submitting.set(true);

        let user = username.get();
        let pass = password.get();
        leptos::task::spawn_local(async move {
            if verify_admin_credentials(&user, &pass).await {
                open_session(store, remember_me.get_untracked(), now_ms());
                attempts.set(0);
                error.set(None);
                on_login.run(());
            } else {
                let count = record_failed_login(store);
                attempts.set(count);
                error.set(Some(if is_locked_out(count) {
                    "Too many login attempts. Please try again later.".to_owned()
                } else {
                    format!(
                        "Invalid credentials. {} attempts remaining.",
                        remaining_attempts(count)
                    )
                }));
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="admin-login">
            <h2>"Admin Login"</h2>

            <Show when=move || error.get().is_some()>
                <p class="admin-login__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    required
                    disabled=locked
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    disabled=locked
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="auth-form__remember">
                    <input
                        type="checkbox"
                        disabled=locked
                        prop:checked=move || remember_me.get()
                        on:change=move |ev| remember_me.set(event_target_checked(&ev))
                    />
                    "Remember me for 30 days"
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || locked() || submitting.get()
                >
                    "Login"
                </button>
            </form>
        </div>
    }
}

/// The tools themselves: bulk upload entry point and the full inventory
/// table with export links.
#[component]
fn AdminTools(on_back: Callback<()>, on_logout: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let items = LocalResource::new(move || async move {
        fetch_inventory(&gateway, None).await.unwrap_or_default()
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Medical Inventory Management"</h1>
                <div class="admin-page__actions">
                    <button class="btn" on:click=move |_| on_back.run(())>
                        "Back to Main View"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </header>

            <section class="admin-page__upload">
                <h2>"Bulk Upload"</h2>
                <p>"Upload a CSV or XLSX spreadsheet to add or update stock."</p>
                <form action="/api/inventory/upload" method="post" enctype="multipart/form-data">
                    <input type="file" name="file" accept=".csv,.xlsx"/>
                    <button class="btn" type="submit">"Upload"</button>
                </form>
            </section>

            <Suspense fallback=move || view! { <p>"Loading inventory..."</p> }>
                {move || items.get().map(|list| view! { <InventoryTable items=list/> })}
            </Suspense>
        </div>
    }
}
