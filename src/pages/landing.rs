//! Public landing page with sign-in and registration entry points.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"MedStock"</h1>
            <p>"Inventory management for medical-supply distribution"</p>
            <div class="landing-page__actions">
                <A href="/login" attr:class="btn btn--primary">"Sign in"</A>
                <A href="/register" attr:class="btn">"Create account"</A>
            </div>
        </div>
    }
}
