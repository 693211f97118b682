//! Confirmation modal shown after a form posts successfully.

use leptos::prelude::*;

#[component]
pub fn SuccessPopup(title: &'static str, message: &'static str, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="success-popup__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="success-popup"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="success-popup__icon">"✓"</div>
                <h2 class="success-popup__title">{title}</h2>
                <p class="success-popup__message">{message}</p>
                <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
