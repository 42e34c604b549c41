//! Media Shell
//!
//! Layout and view-routing core of a media-server web client, with the Dioxus
//! shell that renders it.
//!
//! This library provides:
//! - A UI state store with persisted layout preference and device detection
//! - Layout mode resolution and shell branch planning
//! - A three-page legacy view container with back/forward restoration
//! - Legacy navigation drawer sync and edge-swipe gestures
//! - The Dioxus fullstack app (router, main layout, legacy page host)

pub mod app;
pub mod bus;
pub mod config;
pub mod drawer;
pub mod layout;
pub mod view;

/// Release version stamped by the build script
pub const VERSION: &str = env!("MEDIA_SHELL_VERSION");

/// Short git revision of the build, or "unknown"
pub const GIT_SHA: &str = env!("MEDIA_SHELL_GIT_SHA");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_stamped() {
        assert!(!VERSION.is_empty());
        assert!(!VERSION.starts_with('v'));
        assert!(!GIT_SHA.is_empty());
    }
}
