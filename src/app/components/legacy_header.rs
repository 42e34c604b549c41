//! Legacy header and navigation drawer markup.
//!
//! Dioxus renders the static structure only. The drawer's `drawer-open` class
//! belongs to the legacy toggle and is never part of the virtual DOM, so
//! re-renders do not clobber it.

use dioxus::prelude::*;

use crate::drawer::{DRAWER_SELECTOR, OPEN_CLASS};

#[component]
pub fn LegacyHeader(hidden: bool) -> Element {
    rsx! {
        div { class: "skinHeader legacyHeader", hidden,
            button {
                class: "mainDrawerButton",
                r#type: "button",
                title: "Menu",
                onclick: move |_| toggle_legacy_drawer(),
                "☰"
            }
            h3 { class: "pageTitle" }
        }
        div { class: "mainDrawer", hidden,
            div { class: "mainDrawer-scrollContainer" }
        }
    }
}

/// Same effect as the legacy drawer script's button handler
fn toggle_legacy_drawer() {
    #[cfg(target_arch = "wasm32")]
    {
        let drawer = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(DRAWER_SELECTOR).ok().flatten());
        if let Some(drawer) = drawer {
            let _ = drawer.class_list().toggle(OPEN_CLASS);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("Ignoring {} toggle ({}) outside the browser", DRAWER_SELECTOR, OPEN_CLASS);
}
