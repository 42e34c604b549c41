//! Shell components for the Dioxus fullstack web UI.

pub mod header;
pub mod layout;
pub mod legacy_header;
pub mod sidebar;

pub use layout::{AppBody, MainLayout};
