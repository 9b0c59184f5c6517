//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, history::HistoryPage, login::LoginPage};
use crate::state::auth::{self, AuthState, ExpiryWatch};
use crate::state::entries::EntriesState;

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
/// Owns the session lifecycle: creates the shared state contexts,
/// restores any persisted session, and runs the expiry watch for as
/// long as the app lives.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        loading: true,
        ..AuthState::default()
    });
    let entries = RwSignal::new(EntriesState::default());

    provide_context(auth);
    provide_context(entries);

    auth::init_session(auth);
    let watch = ExpiryWatch::start(auth);
    on_cleanup(move || watch.stop());

    view! {
        <Stylesheet id="leptos" href="/pkg/sadqa-tracker.css"/>
        <Title text="Sadqa Tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
            </Routes>
        </Router>
    }
}
