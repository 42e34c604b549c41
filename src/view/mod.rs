//! Legacy view container: page ring, fragment parsing, hosts and controllers.

pub mod container;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod host;
pub mod html;
pub mod memory;

pub use container::{
    settle, PendingView, ViewContainer, ViewError, ViewOptions, PAGE_CONTAINER_COUNT,
};
pub use controller::{controller_url, Controller, ControllerResolver, NoopControllerResolver};
pub use host::{PageEvent, PageHost};
pub use html::{parse_view, FragmentKind, PageFragment};
pub use memory::{MemoryPageHost, PageId};
