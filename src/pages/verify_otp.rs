//! OTP email-verification page.
//!
//! A 6-digit code, a 300-second resend countdown, and a resend action.
//! The countdown timer is scoped to this view: a liveness signal flipped
//! in `on_cleanup` stops the tick loop, so a navigated-away page never
//! mutates stale state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::VerifyOtpRequest;
use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;
use crate::util::time::iso_timestamp;

/// Seconds before the resend action unlocks.
const RESEND_COOLDOWN_SECS: u32 = 300;

/// Digits expected in the code.
const OTP_LEN: usize = 6;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let user_id = query.get_untracked().get("userId");
    let email = query.get_untracked().get("email");

    // Arriving without registration context: back to login.
    let (Some(user_id), Some(_email)) = (user_id, email) else {
        return view! { <Redirect path="/login"/> }.into_any();
    };

    let otp = RwSignal::new(String::new());
    let time_left = RwSignal::new(RESEND_COOLDOWN_SECS);
    let submitting = RwSignal::new(false);
    let alive = RwSignal::new(true);

    on_cleanup(move || alive.set(false));

    // One-second countdown tick, stopped by the liveness signal.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if !alive.get_untracked() {
                break;
            }
            time_left.update(|t| *t = t.saturating_sub(1));
        }
    });

    let request_user_id = user_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = otp.get();
        if submitting.get() || code.len() != OTP_LEN {
            return;
        }
        submitting.set(true);

        let request = VerifyOtpRequest {
            otp: code,
            user_id: request_user_id.clone(),
            timestamp: iso_timestamp(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::verify_otp(&gateway, &request).await {
                Ok(response) => {
                    let store = gateway.store();
                    store.set_token(&response.token);
                    store.set_user(&response.user);
                    auth.update(|state| state.set_auth(true, Some(response.user)));
                    notices.update(|n| {
                        n.push_success("Email verified successfully");
                    });
                    if alive.get_untracked() {
                        navigate("/", NavigateOptions { replace: true, ..Default::default() });
                    }
                }
                Err(_) => {
                    // Gateway surfaced the notice; clear the code for retry.
                    if alive.get_untracked() {
                        otp.set(String::new());
                        submitting.set(false);
                    }
                }
            }
        });
    };

    let resend_user_id = user_id;
    let on_resend = move |_| {
        let user_id = resend_user_id.clone();
        leptos::task::spawn_local(async move {
            match api::resend_otp(&gateway, &user_id).await {
                Ok(()) => {
                    if alive.get_untracked() {
                        time_left.set(RESEND_COOLDOWN_SECS);
                    }
                    notices.update(|n| {
                        n.push_success("New OTP sent successfully");
                    });
                }
                Err(_) => {
                    notices.update(|n| {
                        n.push_error("Failed to resend OTP");
                    });
                }
            }
        });
    };

    let countdown = move || {
        let t = time_left.get();
        format!("Time remaining: {}:{:02}", t / 60, t % 60)
    };

    view! {
        <div class="auth-page">
            <h2>"Verify your email"</h2>
            <p>"Enter the 6-digit code sent to your email"</p>

            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__otp"
                    type="text"
                    inputmode="numeric"
                    maxlength=OTP_LEN.to_string()
                    placeholder="000000"
                    required
                    prop:value=move || otp.get()
                    on:input=move |ev| {
                        let digits: String = event_target_value(&ev)
                            .chars()
                            .filter(char::is_ascii_digit)
                            .take(OTP_LEN)
                            .collect();
                        otp.set(digits);
                    }
                />

                <div class="auth-form__countdown">
                    <Show
                        when=move || (time_left.get() > 0)
                        fallback=move || {
                            view! {
                                <button type="button" on:click=on_resend.clone()>
                                    "Resend OTP"
                                </button>
                            }
                        }
                    >
                        <p>{countdown}</p>
                    </Show>
                </div>

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || submitting.get() || otp.get().len() != OTP_LEN
                >
                    {move || if submitting.get() { "Verifying..." } else { "Verify Email" }}
                </button>
            </form>
        </div>
    }
    .into_any()
}
