//! Layout mode resolution and shell branch selection.

use media_shell::layout::resolver::default_new_layout_paths;
use media_shell::layout::{
    plan_shell, resolve_layout, EffectiveLayout, LayoutInputs, LayoutMode, ShellBranch,
    SidebarMode,
};

fn inputs<'a>(
    store_layout: LayoutMode,
    legacy_layout: Option<LayoutMode>,
    device_is_tv: bool,
    pathname: &'a str,
    paths: &'a [String],
) -> LayoutInputs<'a> {
    LayoutInputs {
        store_layout,
        legacy_layout,
        device_is_tv,
        pathname,
        new_layout_paths: paths,
    }
}

#[test]
fn resolution_is_deterministic() {
    let paths = default_new_layout_paths();
    for layout in LayoutMode::ALL {
        for legacy in [None, Some(LayoutMode::Desktop), Some(LayoutMode::Experimental)] {
            for tv in [false, true] {
                for path in ["/", "/movies", "/dashboard/users"] {
                    let i = inputs(layout, legacy, tv, path, &paths);
                    assert_eq!(resolve_layout(&i), resolve_layout(&i));
                }
            }
        }
    }
}

#[test]
fn tv_device_overrides_stored_preference() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(
        LayoutMode::Experimental,
        None,
        true,
        "/home",
        &paths,
    ));
    assert_eq!(r.layout_mode, Some(LayoutMode::Tv));
    assert!(!r.is_experimental_layout);
    assert!(!r.should_hide_legacy_header);
}

#[test]
fn unset_layout_defaults_to_experimental() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(LayoutMode::Auto, None, false, "/home", &paths));
    assert_eq!(r.layout_mode, None);
    assert!(r.is_experimental_layout);
    assert!(r.should_hide_legacy_header);
}

#[test]
fn legacy_value_is_used_for_auto_store() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(
        LayoutMode::Auto,
        Some(LayoutMode::Desktop),
        false,
        "/home",
        &paths,
    ));
    assert_eq!(r.layout_mode, Some(LayoutMode::Desktop));
    assert!(!r.is_experimental_layout);

    // An explicit store value wins over the legacy one
    let r = resolve_layout(&inputs(
        LayoutMode::Experimental,
        Some(LayoutMode::Desktop),
        false,
        "/home",
        &paths,
    ));
    assert!(r.is_experimental_layout);
}

#[test]
fn dashboard_path_hides_legacy_header() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(
        LayoutMode::Desktop,
        None,
        false,
        "/dashboard/users",
        &paths,
    ));
    assert!(!r.is_experimental_layout);
    assert!(r.is_new_layout_path);
    assert!(r.should_hide_legacy_header);

    let plan = plan_shell(&r, EffectiveLayout::Desktop, false, 240.0);
    assert_eq!(plan.branch, ShellBranch::Isolated);
    assert!(plan.legacy_header_hidden);
    assert_eq!(plan.sidebar, SidebarMode::Hidden);
}

#[test]
fn custom_paths_replace_defaults() {
    let paths = vec!["admin".to_string()];
    let r = resolve_layout(&inputs(LayoutMode::Desktop, None, false, "/admin/logs", &paths));
    assert!(r.is_new_layout_path);
    let r = resolve_layout(&inputs(LayoutMode::Desktop, None, false, "/dashboard", &paths));
    assert!(!r.is_new_layout_path);
}

#[test]
fn experimental_shell_on_desktop_docks_drawer_only_while_open() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(LayoutMode::Experimental, None, false, "/home", &paths));

    let closed = plan_shell(&r, EffectiveLayout::Experimental, false, 240.0);
    assert_eq!(closed.branch, ShellBranch::Experimental);
    assert!(closed.open_drawer_on_mount);
    assert_eq!(closed.sidebar, SidebarMode::Hidden);
    assert_eq!(closed.content_margin_left, 0.0);

    let open = plan_shell(&r, EffectiveLayout::Experimental, true, 240.0);
    assert!(!open.open_drawer_on_mount);
    assert_eq!(open.sidebar, SidebarMode::Persistent);
    assert_eq!(open.content_margin_left, 240.0);
}

#[test]
fn experimental_shell_on_mobile_uses_overlay() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(LayoutMode::Auto, None, false, "/home", &paths));

    let plan = plan_shell(&r, EffectiveLayout::Mobile, true, 240.0);
    assert_eq!(plan.sidebar, SidebarMode::Temporary);
    assert_eq!(plan.content_margin_left, 0.0);
    assert!(!plan_shell(&r, EffectiveLayout::Mobile, false, 240.0).open_drawer_on_mount);
}

#[test]
fn legacy_shell_shows_legacy_header() {
    let paths = default_new_layout_paths();
    let r = resolve_layout(&inputs(LayoutMode::Desktop, None, false, "/movies", &paths));
    let plan = plan_shell(&r, EffectiveLayout::Desktop, true, 240.0);
    assert_eq!(plan.branch, ShellBranch::Legacy);
    assert!(!plan.legacy_header_hidden);
    assert_eq!(plan.sidebar, SidebarMode::Hidden);
    assert_eq!(plan.content_margin_left, 0.0);
}
