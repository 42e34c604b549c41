//! Home page.

use dioxus::prelude::*;

use crate::app::layout_mode::use_layout_mode;
use crate::app::legacy_view::LegacyView;
use crate::app::Route;

/// Modern home in the experimental shell, the legacy home page otherwise.
#[component]
pub fn Home() -> Element {
    let resolution = use_layout_mode();

    if resolution.is_legacy_header_mode() {
        return rsx! {
            LegacyView { url: "/home".to_string() }
        };
    }

    rsx! {
        section { class: "homePage",
            h1 { "Home" }
            p { "Continue where you left off, or browse your libraries." }
            ul {
                li { Link { to: Route::LegacyPage { segments: vec!["movies".into()] }, "Movies" } }
                li { Link { to: Route::LegacyPage { segments: vec!["music".into()] }, "Music" } }
            }
        }
    }
}
