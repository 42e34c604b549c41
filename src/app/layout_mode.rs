//! Layout mode hook.

use dioxus::prelude::*;

use super::ui_context::{use_shell_config, use_ui};
use super::Route;
use crate::layout::{resolve_layout, LayoutInputs, LayoutResolution};

/// Resolve the active layout for the current route. Re-runs on every render.
pub fn use_layout_mode() -> LayoutResolution {
    let ui = use_ui();
    let config = use_shell_config();
    let route = use_route::<Route>();
    let pathname = route.to_string();

    resolve_layout(&LayoutInputs {
        store_layout: ui.state().layout,
        legacy_layout: ui.legacy_layout(),
        device_is_tv: ui.device().is_tv,
        pathname: &pathname,
        new_layout_paths: &config.new_layout_paths,
    })
}
