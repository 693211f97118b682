//! Placeholder rendered during the post-navigation loading window.

use leptos::prelude::*;

use crate::components::scene::{Scene, SceneRef};

/// Scene shown behind the spinner. Disabled: the spinner renders alone.
const LOADING_SCENE: Option<SceneRef> = None;

/// Spinner labelled with the target page key (`home`, `services`, ...).
#[component]
pub fn LoadingScreen(#[prop(into)] page: String) -> impl IntoView {
    view! {
        <div class="loading-screen" data-page=page>
            {LOADING_SCENE.map(|scene| view! { <Scene scene=scene/> })}
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
