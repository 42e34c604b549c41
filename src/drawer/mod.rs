//! Navigation drawer: legacy DOM sync and edge-swipe gestures.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod gesture;
pub mod sync;

/// Legacy drawer node
pub const DRAWER_SELECTOR: &str = ".mainDrawer";
/// Class the legacy script puts on the drawer while it is open
pub const OPEN_CLASS: &str = "drawer-open";
/// Legacy hamburger button; clicking it runs the legacy open/close animation
pub const TOGGLE_SELECTOR: &str = ".mainDrawerButton";

pub use gesture::{DrawerGestureRecognizer, GestureConfig, GestureOutcome, TouchPoint};
pub use sync::{LegacyDrawerDom, LegacyDrawerSync, SyncOutcome};
