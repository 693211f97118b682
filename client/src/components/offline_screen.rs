//! Full-page placeholder shown while the browser reports no connectivity.

use leptos::prelude::*;

use crate::util::browser::reload_page;

#[component]
pub fn OfflineScreen() -> impl IntoView {
    view! {
        <div class="offline-screen" role="alert">
            <div class="offline-screen__card">
                <div class="offline-screen__icon">"📡"</div>
                <h2 class="offline-screen__title">"No Internet Connection"</h2>
                <p class="offline-screen__message">
                    "Please check your connection and try again."
                </p>
                <button class="btn btn--primary" on:click=move |_| reload_page()>
                    "Retry"
                </button>
            </div>
        </div>
    }
}
