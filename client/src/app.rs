//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::snackbar::Snackbar;
use crate::pages::{
    franchise_fields::FRANCHISE_ROUTES,
    franchise_form::{FranchiseCreatePage, FranchiseEditPage},
    franchise_list::FranchiseListPage,
    franchise_view::FranchiseViewPage,
    location_create::LocationCreatePage,
    location_fields::LOCATION_ROUTES,
    location_view::LocationViewPage,
};
use crate::state::notify::NotifyState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the UI configuration and notification state, renders the
/// navigation chrome and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(crate::config::load());
    provide_context(RwSignal::new(NotifyState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-ui.css"/>
        <Title text="Admin Dashboard"/>

        <Router>
            <div class="app-shell">
                <nav class="app-shell__nav">
                    <a class="app-shell__link" href=FRANCHISE_ROUTES>"Franchises"</a>
                    <a class="app-shell__link" href=format!("{LOCATION_ROUTES}/create")>"New Location"</a>
                </nav>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=FRANCHISE_ROUTES/> }/>
                        <Route path=StaticSegment("franchises") view=FranchiseListPage/>
                        <Route path=(StaticSegment("franchises"), StaticSegment("create")) view=FranchiseCreatePage/>
                        <Route
                            path=(StaticSegment("franchises"), StaticSegment("edit"), ParamSegment("id"))
                            view=FranchiseEditPage
                        />
                        <Route
                            path=(StaticSegment("franchises"), StaticSegment("view"), ParamSegment("id"))
                            view=FranchiseViewPage
                        />
                        <Route path=(StaticSegment("locations"), StaticSegment("create")) view=LocationCreatePage/>
                        <Route
                            path=(StaticSegment("locations"), StaticSegment("view"), ParamSegment("id"))
                            view=LocationViewPage
                        />
                    </Routes>
                </main>
            </div>
            <Snackbar/>
        </Router>
    }
}
