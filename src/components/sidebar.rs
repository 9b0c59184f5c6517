//! Navigation sidebar with the signed-in identity and logout.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

/// App navigation. `active` marks the current page's link.
#[component]
pub fn Sidebar(active: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let link_class = move |name: &str| {
        if name == active {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Sadqa Tracker"</div>
            <a class=link_class("dashboard") href="/">
                "Dashboard"
            </a>
            <a class=link_class("history") href="/history">
                "History"
            </a>
            <div class="sidebar__spacer"></div>
            <div class="sidebar__user">{move || auth.get().display_name()}</div>
            <button class="sidebar__logout" on:click=move |_| auth::logout(auth)>
                "Sign Out"
            </button>
        </nav>
    }
}
