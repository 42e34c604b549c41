//! Navigation sidebar shown in the drawer.

use dioxus::prelude::*;

use crate::app::ui_context::use_ui;
use crate::app::Route;
use crate::layout::SidebarMode;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    pub mode: SidebarMode,
    /// Drawer width in px
    pub width: f64,
}

/// Sidebar with the main navigation links.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let ui = use_ui();
    let current = use_route::<Route>();
    let temporary = props.mode == SidebarMode::Temporary;

    // Overlay drawers close once a destination is picked
    let close_if_temporary = move |_: MouseEvent| {
        if temporary {
            ui.toggle_drawer(Some(false));
        }
    };

    let class = if temporary {
        "sidebar sidebar-temporary"
    } else {
        "sidebar sidebar-persistent"
    };

    rsx! {
        if temporary {
            div {
                class: "drawerBackdrop",
                onclick: move |_| ui.toggle_drawer(Some(false)),
            }
        }
        nav { class: "{class}", style: "width: {props.width}px;",
            ul {
                for (label, route) in nav_items() {
                    li { class: if route == current { "active" } else { "" },
                        Link { to: route.clone(), onclick: close_if_temporary, "{label}" }
                    }
                }
            }
        }
    }
}

fn nav_items() -> Vec<(&'static str, Route)> {
    vec![
        ("Home", Route::Home {}),
        ("Movies", Route::LegacyPage { segments: vec!["movies".into()] }),
        ("Music", Route::LegacyPage { segments: vec!["music".into()] }),
        ("Display", Route::DisplayPreferences {}),
        ("Dashboard", Route::Dashboard { segments: Vec::new() }),
    ]
}
