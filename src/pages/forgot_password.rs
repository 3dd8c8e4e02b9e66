//! Forgot-password page: request reset instructions by email.
//!
//! On success the form flips to a confirmation view; the reset itself
//! completes out of band through the emailed link.

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::state::notices::NoticeState;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let email = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);

        let address = email.get();
        leptos::task::spawn_local(async move {
            match api::forgot_password(&gateway, &address).await {
                Ok(()) => {
                    submitted.set(true);
                    notices.update(|n| {
                        n.push_success("Reset instructions sent to your email");
                    });
                }
                Err(_) => {
                    // Gateway already surfaced the failure notice.
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || submitted.get()
                fallback=move || {
                    view! {
                        <h2>"Reset your password"</h2>
                        <p>
                            "Enter your email address and we'll send you instructions to reset your password."
                        </p>
                        <form class="auth-form" on:submit=on_submit>
                            <input
                                type="email"
                                placeholder="Email address"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || {
                                    if submitting.get() { "Sending..." } else { "Send Reset Instructions" }
                                }}
                            </button>
                        </form>
                        <a href="/login">"Back to login"</a>
                    }
                }
            >
                <h2>"Check your email"</h2>
                <p>
                    {move || format!("We've sent password reset instructions to {}", email.get())}
                </p>
                <a href="/login">"Return to login"</a>
            </Show>
        </div>
    }
}
