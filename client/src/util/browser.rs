//! Browser environment checks used by the site chrome.
//!
//! Each helper reads or pokes the `window`/`document` when compiled with the
//! `hydrate` feature and falls back to a fixed answer otherwise.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders as "online and visible" so server markup matches the
//! common hydration path; the guard re-checks for real on mount.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// `navigator.onLine`, or `true` outside the browser.
pub fn navigator_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Whether the document is currently visible.
pub fn document_visible() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .map_or(true, |doc| doc.visibility_state() == web_sys::VisibilityState::Visible)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Full page reload, the offline screen's only recovery action.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Smooth-scroll the element with `id` into view, if it exists.
pub fn scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id));
        if let Some(el) = target {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Current calendar year for the footer copyright.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
