//! Toast-style notice tray.
//!
//! Renders the shared [`NoticeState`] queue in a fixed corner. Each notice
//! auto-dismisses after a few seconds and can be dismissed early by
//! clicking it. Notices are fire-and-forget; nothing waits on them.

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeLevel, NoticeState};
#[cfg(feature = "hydrate")]
use crate::state::notices::NOTICE_TTL_MS;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            NOTICE_TTL_MS,
                        ))
                        .await;
                        notices.update(|state| state.dismiss(id));
                    });

                    let class = match notice.level {
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class on:click=move |_| {
                            notices.update(|state| state.dismiss(id));
                        }>
                            {notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
