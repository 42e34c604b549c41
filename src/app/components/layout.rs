//! Main layout: picks one of the three shells for every route.

use dioxus::prelude::*;

use super::header::Header;
use super::legacy_header::LegacyHeader;
use super::sidebar::Sidebar;
use crate::app::drawer_gestures::use_drawer_gestures;
use crate::app::drawer_sync::use_legacy_drawer_sync;
use crate::app::layout_mode::use_layout_mode;
use crate::app::legacy_view::{use_legacy_views, use_legacy_views_provider};
use crate::app::ui_context::{use_shell_config, use_ui};
use crate::app::Route;
use crate::layout::{plan_shell, ShellBranch, ShellPlan, SidebarMode};

/// Layout wrapping every route.
///
/// The legacy header is always mounted, only hidden: legacy scripts bind to it
/// once and expect it to stay in the DOM.
#[component]
pub fn MainLayout() -> Element {
    let ui = use_ui();
    let config = use_shell_config();
    let resolution = use_layout_mode();
    let state = ui.state();
    let plan = plan_shell(
        &resolution,
        state.effective_layout,
        state.is_drawer_open,
        config.drawer_width,
    );

    use_legacy_drawer_sync(resolution);
    use_legacy_views_provider();

    rsx! {
        document::Title { "Media Shell" }
        LegacyHeader { hidden: plan.legacy_header_hidden }
        {match plan.branch {
            ShellBranch::Isolated => rsx! {
                Outlet::<Route> {}
            },
            ShellBranch::Experimental => rsx! {
                ExperimentalShell { plan,
                    Outlet::<Route> {}
                }
            },
            ShellBranch::Legacy => rsx! {
                AppBody {
                    Outlet::<Route> {}
                }
            },
        }}
    }
}

/// Modern shell: header, sidebar drawer, offset content.
#[component]
fn ExperimentalShell(plan: ShellPlan, children: Element) -> Element {
    let ui = use_ui();
    let config = use_shell_config();
    use_drawer_gestures(config.gesture);

    // Wide screens start with the drawer docked open
    let open_on_mount = plan.open_drawer_on_mount;
    use_effect(move || {
        if open_on_mount {
            ui.toggle_drawer(Some(true));
        }
    });

    rsx! {
        Header {}
        if plan.sidebar != SidebarMode::Hidden {
            Sidebar { mode: plan.sidebar, width: config.drawer_width }
        }
        div {
            class: "mainContent",
            style: "margin-left: {plan.content_margin_left}px;",
            AppBody { {children} }
        }
    }
}

/// Body wrapper hosting the legacy pages container.
///
/// Each shell branch mounts its own `AppBody`, so the pages container is a new
/// element after every branch switch. Resident pages die with the old one.
#[component]
pub fn AppBody(children: Element) -> Element {
    let views = use_legacy_views();
    use_drop(move || {
        tracing::debug!("Pages container unmounted, dropping resident pages");
        views.reset();
    });

    rsx! {
        div { class: "skinBody",
            div { class: "mainAnimatedPages skinBody" }
            {children}
        }
    }
}
