//! Admin dashboard.
//!
//! Renders under the isolated shell branch and brings its own chrome.

use dioxus::prelude::*;

use crate::app::Route;
use crate::{GIT_SHA, VERSION};

#[component]
pub fn Dashboard(segments: Vec<String>) -> Element {
    let section = segments.first().cloned().unwrap_or_else(|| "overview".to_string());
    let trail = segments.get(1..).map(|rest| rest.join(" / ")).unwrap_or_default();

    rsx! {
        div { class: "dashboardApp",
            header { class: "dashboardHeader",
                Link { to: Route::Home {}, "← Back" }
                h1 { "Dashboard" }
            }
            main { class: "dashboardContent",
                h2 { "{section}" }
                if !trail.is_empty() {
                    p { class: "text-muted", "{trail}" }
                }
            }
            footer { class: "dashboardFooter text-muted",
                "Media Shell {VERSION} ({GIT_SHA})"
            }
        }
    }
}
