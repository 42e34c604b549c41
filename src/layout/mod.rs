//! UI state store, layout resolution and shell planning.

pub mod device;
pub mod mode;
pub mod resolver;
pub mod root;
pub mod shell;
pub mod storage;
pub mod store;

pub use device::DeviceCapabilities;
pub use mode::{EffectiveLayout, LayoutMode, Orientation, Viewport};
pub use resolver::{resolve_layout, LayoutInputs, LayoutResolution};
pub use shell::{plan_shell, ShellBranch, ShellPlan, SidebarMode};
pub use store::{UiState, UiStore};
