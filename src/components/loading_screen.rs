use leptos::prelude::*;

/// Full-screen neutral spinner, shown while the startup validation runs
/// and by the route guard before a decision exists.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-label="Loading"></div>
        </div>
    }
}
