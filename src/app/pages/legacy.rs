//! Catch-all route for server-rendered legacy pages.

use dioxus::prelude::*;

use crate::app::legacy_view::LegacyView;

#[component]
pub fn LegacyPage(segments: Vec<String>) -> Element {
    let url = format!("/{}", segments.join("/"));
    rsx! {
        LegacyView { url }
    }
}
