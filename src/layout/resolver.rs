//! Layout mode resolution.
//!
//! Single source of truth for which of the three shell branches is active.
//! Cheap and pure, so components call it on every render.

use super::mode::LayoutMode;

/// Path segments owned by self-contained sub-applications (admin dashboard,
/// metadata manager, plugin configuration pages).
pub const DEFAULT_NEW_LAYOUT_PATHS: &[&str] = &["dashboard", "metadata", "configurationpage"];

#[derive(Clone, Copy, Debug)]
pub struct LayoutInputs<'a> {
    /// Layout stored in the UI store
    pub store_layout: LayoutMode,
    /// Value found under the legacy top-level storage key, if any
    pub legacy_layout: Option<LayoutMode>,
    pub device_is_tv: bool,
    pub pathname: &'a str,
    pub new_layout_paths: &'a [String],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutResolution {
    /// `None` means no preference anywhere, which counts as experimental
    pub layout_mode: Option<LayoutMode>,
    pub is_experimental_layout: bool,
    pub is_new_layout_path: bool,
    pub should_hide_legacy_header: bool,
}

impl LayoutResolution {
    /// Whether the legacy header and drawer are live on this render
    pub fn is_legacy_header_mode(&self) -> bool {
        !self.should_hide_legacy_header
    }
}

pub fn resolve_layout(inputs: &LayoutInputs<'_>) -> LayoutResolution {
    let layout_mode = if inputs.device_is_tv {
        Some(LayoutMode::Tv)
    } else if inputs.store_layout != LayoutMode::Auto {
        Some(inputs.store_layout)
    } else {
        inputs.legacy_layout
    };

    let is_experimental_layout = matches!(layout_mode, None | Some(LayoutMode::Experimental));
    let is_new_layout_path = is_new_layout_path(inputs.pathname, inputs.new_layout_paths);

    LayoutResolution {
        layout_mode,
        is_experimental_layout,
        is_new_layout_path,
        should_hide_legacy_header: is_experimental_layout || is_new_layout_path,
    }
}

/// Prefix match against `/<segment>`, the same way the router mounts sub-apps.
pub fn is_new_layout_path(pathname: &str, segments: &[String]) -> bool {
    segments.iter().any(|segment| {
        pathname
            .strip_prefix('/')
            .is_some_and(|rest| rest.starts_with(segment.as_str()))
    })
}

pub fn default_new_layout_paths() -> Vec<String> {
    DEFAULT_NEW_LAYOUT_PATHS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
