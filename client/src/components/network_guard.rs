//! Connectivity guard wrapping the whole page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-reads `navigator.onLine` after mount, on every `online`/`offline`
//! event, and whenever the tab becomes visible again (events can be missed
//! while backgrounded). While offline the children are replaced by the
//! offline screen; they come back as soon as connectivity returns.

use leptos::prelude::*;

use crate::components::offline_screen::OfflineScreen;
use crate::state::site::SiteStatus;

/// Render `children` while online, the offline screen otherwise.
#[component]
pub fn NetworkGuard(children: ChildrenFn) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteStatus>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser::{document_visible, navigator_online};

        let recheck = move || {
            let online = navigator_online();
            site.try_maybe_update(|status| {
                let changed = status.set_online(online);
                if changed {
                    log::debug!("network guard: online={online}");
                }
                (changed, ())
            });
        };

        // Initial check runs after hydration so server markup still matches.
        Effect::new(recheck);

        let on_online = window_event_listener(leptos::ev::online, move |_| recheck());
        let on_offline = window_event_listener(leptos::ev::offline, move |_| recheck());
        let on_visibility = window_event_listener_untyped("visibilitychange", move |_| {
            if document_visible() {
                recheck();
            }
        });

        on_cleanup(move || {
            on_online.remove();
            on_offline.remove();
            on_visibility.remove();
        });
    }

    view! {
        <Show when=move || site.with(SiteStatus::is_online) fallback=|| view! { <OfflineScreen/> }>
            {children()}
        </Show>
    }
}
