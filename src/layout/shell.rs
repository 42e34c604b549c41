//! Shell branch selection for the main layout.

use super::mode::EffectiveLayout;
use super::resolver::LayoutResolution;

/// Default drawer width in CSS pixels
pub const DEFAULT_DRAWER_WIDTH: f64 = 240.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellBranch {
    /// Sub-application managing its own layout; children render bare
    Isolated,
    /// Modern header + drawer + sidebar
    Experimental,
    /// Legacy body wrapper with the legacy header visible
    Legacy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMode {
    /// Not mounted
    Hidden,
    /// Overlay drawer, mounted while open (mobile)
    Temporary,
    /// Docked drawer, mounted while open (desktop)
    Persistent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellPlan {
    pub branch: ShellBranch,
    /// The legacy header is mounted in every branch; this only hides it
    pub legacy_header_hidden: bool,
    pub sidebar: SidebarMode,
    pub content_margin_left: f64,
    /// Open the drawer when the experimental shell mounts on a wide screen
    pub open_drawer_on_mount: bool,
}

pub fn plan_shell(
    resolution: &LayoutResolution,
    effective: EffectiveLayout,
    drawer_open: bool,
    drawer_width: f64,
) -> ShellPlan {
    let branch = if resolution.is_new_layout_path {
        ShellBranch::Isolated
    } else if resolution.is_experimental_layout {
        ShellBranch::Experimental
    } else {
        ShellBranch::Legacy
    };

    let is_mobile = effective.is_mobile();
    let experimental = branch == ShellBranch::Experimental;

    let sidebar = match (experimental, drawer_open, is_mobile) {
        (true, true, false) => SidebarMode::Persistent,
        (true, true, true) => SidebarMode::Temporary,
        _ => SidebarMode::Hidden,
    };

    let content_margin_left = if experimental && !is_mobile && drawer_open {
        drawer_width
    } else {
        0.0
    };

    ShellPlan {
        branch,
        legacy_header_hidden: resolution.should_hide_legacy_header,
        sidebar,
        content_margin_left,
        open_drawer_on_mount: experimental && !is_mobile && !drawer_open,
    }
}
