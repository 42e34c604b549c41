//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
#[cfg(target_arch = "wasm32")]
mod dom_events;
pub mod drawer_gestures;
pub mod drawer_sync;
pub mod layout_mode;
pub mod legacy_view;
pub mod pages;
pub mod ui_context;

use components::MainLayout;
use pages::{Dashboard, DisplayPreferences, Home, LegacyPage};
use ui_context::{use_shell_config, use_ui_provider};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    let config = use_shell_config();

    // One store for the whole app (rehydrates layout, applies root class)
    use_ui_provider(&config);

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/mypreferencesdisplay")]
        DisplayPreferences {},
        #[route("/dashboard/:..segments")]
        Dashboard { segments: Vec<String> },
        #[route("/:..segments")]
        LegacyPage { segments: Vec<String> },
}
