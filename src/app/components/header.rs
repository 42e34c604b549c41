//! App bar for the experimental shell.

use dioxus::prelude::*;

use crate::app::ui_context::use_ui;

#[component]
pub fn Header() -> Element {
    let ui = use_ui();
    let state = ui.state();
    let drawer_label = if state.is_drawer_open {
        "Close menu"
    } else {
        "Open menu"
    };

    rsx! {
        header { class: "appBar",
            button {
                class: "appBarMenu",
                r#type: "button",
                "aria-label": drawer_label,
                "aria-expanded": state.is_drawer_open,
                onclick: move |_| ui.toggle_drawer(None),
                "☰"
            }
            strong { class: "appBarTitle", "Media" }
            button {
                class: "appBarSearch",
                r#type: "button",
                "aria-pressed": state.is_search_open,
                onclick: move |_| ui.toggle_search(None),
                "Search"
            }
            if state.is_loading {
                progress { class: "appBarLoading" }
            }
        }
        if state.is_search_open {
            div { class: "searchPanel",
                input { r#type: "search", placeholder: "Search", autofocus: true }
            }
        }
    }
}
