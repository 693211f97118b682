//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders content from the static catalog; only the contact and
//! waitlist pages keep local form state. Shared chrome lives in `components`.

use leptos::prelude::*;

use crate::content::Stat;

pub mod about;
pub mod ai_waitlist;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod services;

/// Highlighted figures row used by several pages.
pub(crate) fn stat_grid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stats">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stats__item">
                            <div class="display-medium stats__value">{stat.value}</div>
                            <p class="body-medium">{stat.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
