//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    floating_hire_button::FloatingHireButton, footer::Footer, header::Header, network_guard::NetworkGuard,
    route_change_loader::RouteChangeLoader, scene::SceneHost,
};
use crate::routes::SiteRoute;
use crate::state::site::SiteStatus;

/// Module script that defines the `<spline-viewer>` element.
const SPLINE_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="module" src=SPLINE_VIEWER_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site status and scene renderer contexts and sets up routing
/// inside the connectivity guard and the route-transition loader.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts online; the guard re-checks the browser after hydration.
    provide_context(RwSignal::new(SiteStatus::default()));
    provide_context(SceneHost::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/cashcue.css"/>
        <Title text="CashCue | Modern Web Design Studio"/>

        <Router>
            <NetworkGuard>
                <div class="app">
                    <Header/>
                    <main class="app__main">
                        <RouteChangeLoader>
                            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                                <Route path=StaticSegment(SiteRoute::Home.segment()) view=|| SiteRoute::Home.view()/>
                                <Route path=StaticSegment(SiteRoute::Services.segment()) view=|| SiteRoute::Services.view()/>
                                <Route path=StaticSegment(SiteRoute::Portfolio.segment()) view=|| SiteRoute::Portfolio.view()/>
                                <Route path=StaticSegment(SiteRoute::About.segment()) view=|| SiteRoute::About.view()/>
                                <Route path=StaticSegment(SiteRoute::Contact.segment()) view=|| SiteRoute::Contact.view()/>
                                <Route path=StaticSegment(SiteRoute::AiWaitlist.segment()) view=|| SiteRoute::AiWaitlist.view()/>
                            </Routes>
                        </RouteChangeLoader>
                    </main>
                    <Footer/>
                    <FloatingHireButton/>
                </div>
            </NetworkGuard>
        </Router>
    }
}
