//! Route components.

mod dashboard;
mod display;
mod home;
mod legacy;

pub use dashboard::Dashboard;
pub use display::DisplayPreferences;
pub use home::Home;
pub use legacy::LegacyPage;
