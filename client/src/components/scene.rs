//! Embedded 3D scene widget.
//!
//! DESIGN
//! ======
//! Scenes are opaque third-party widgets. Pages only name a `SceneRef`; the
//! `SceneRenderer` found in context decides how it becomes markup. The
//! default renderer emits the `<spline-viewer>` custom element whose module
//! script is loaded by the app shell.

use std::sync::Arc;

use leptos::prelude::*;

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

/// Hero scene on the home page, reused hue-shifted on the waitlist page.
pub const HERO_SCENE: SceneRef = SceneRef {
    url: "https://prod.spline.design/NbVmy6DPLhY-5Lvg/scene.splinecode",
    hue_rotate: 0,
};

/// A scene to embed plus its color treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneRef {
    pub url: &'static str,
    /// CSS `hue-rotate` in degrees; `0` leaves colors untouched.
    pub hue_rotate: u16,
}

impl SceneRef {
    #[must_use]
    pub const fn with_hue_rotate(self, degrees: u16) -> Self {
        Self { url: self.url, hue_rotate: degrees }
    }

    /// Inline style for the scene element.
    #[must_use]
    pub fn style(&self) -> String {
        let mut style = String::from("width: 100%; height: 100%;");
        if self.hue_rotate != 0 {
            style.push_str(&format!(" filter: hue-rotate({}deg);", self.hue_rotate));
        }
        style
    }
}

/// Turns a `SceneRef` into markup.
pub trait SceneRenderer: Send + Sync {
    fn render(&self, scene: SceneRef) -> AnyView;
}

/// Renders scenes with the Spline web component.
pub struct SplineViewer;

impl SceneRenderer for SplineViewer {
    fn render(&self, scene: SceneRef) -> AnyView {
        view! { <spline-viewer url=scene.url style=scene.style()></spline-viewer> }.into_any()
    }
}

/// Context handle for the active scene renderer.
#[derive(Clone)]
pub struct SceneHost(pub Arc<dyn SceneRenderer>);

impl Default for SceneHost {
    fn default() -> Self {
        Self(Arc::new(SplineViewer))
    }
}

#[component]
pub fn Scene(scene: SceneRef) -> impl IntoView {
    let host = use_context::<SceneHost>().unwrap_or_default();
    view! { <div class="scene">{host.0.render(scene)}</div> }
}
