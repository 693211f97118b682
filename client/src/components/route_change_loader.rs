//! Loading placeholder shown for a fixed window after every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feeds each new pathname into `SiteStatus::navigate` and owns the single
//! browser timeout that ends the transition. A newer navigation replaces the
//! pending timeout; unmounting clears it and drops the transition.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::loading_screen::LoadingScreen;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::site::TransitionTicket;
use crate::state::site::SiteStatus;

#[cfg(test)]
#[path = "route_change_loader_test.rs"]
mod route_change_loader_test;

/// Feed `path` to the site status and, when a transition starts, put the
/// timer built by `schedule` in the slot. Dropping the previous timer cancels
/// it, so at most one transition timer is ever live.
#[cfg(any(test, feature = "hydrate"))]
fn rearm<T: 'static>(
    site: RwSignal<SiteStatus>,
    pending: StoredValue<Option<T>, LocalStorage>,
    path: &str,
    schedule: impl FnOnce(TransitionTicket) -> T,
) {
    if let Some(ticket) = site.try_update(|status| status.navigate(path)).flatten() {
        pending.try_set_value(Some(schedule(ticket)));
    }
}

/// Drop the pending timer and abandon any transition in progress.
#[cfg(any(test, feature = "hydrate"))]
fn disarm<T: 'static>(site: RwSignal<SiteStatus>, pending: StoredValue<Option<T>, LocalStorage>) {
    pending.try_set_value(None);
    site.try_update(SiteStatus::cancel_transition);
}

#[component]
pub fn RouteChangeLoader(children: ChildrenFn) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteStatus>>();
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::state::site::TRANSITION_DELAY_MS;

        let pending = StoredValue::new_local(None::<Timeout>);

        Effect::new(move || {
            let path = pathname.get();
            rearm(site, pending, &path, |ticket| {
                log::debug!("route loader: transition to {path}");
                Timeout::new(TRANSITION_DELAY_MS, move || {
                    site.try_update(|status| status.finish_transition(ticket));
                })
            });
        });

        on_cleanup(move || disarm(site, pending));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = pathname;

    let loading_page = move || site.with(|status| status.loading_page().to_owned());

    view! {
        <Show
            when=move || !site.with(SiteStatus::is_transitioning)
            fallback=move || view! { <LoadingScreen page=loading_page()/> }
        >
            {children()}
        </Show>
    }
}
