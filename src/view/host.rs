//! DOM operations the view container needs from its host.

use super::html::PageFragment;

/// Class stamped on every page node
pub const PAGE_CLASS: &str = "mainAnimatedPage";

/// Selector of the element hosting all page nodes
pub const PAGES_CONTAINER_SELECTOR: &str = ".mainAnimatedPages";

/// Lifecycle events dispatched to legacy page scripts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// Fired right before a page is evicted; scripts release timers and listeners
    ViewDestroy,
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::ViewDestroy => "viewdestroy",
        }
    }
}

/// The slice of the DOM owned by the view container.
pub trait PageHost {
    type Node: Clone;

    /// Whether the pages container element exists
    fn has_container(&self) -> bool;

    /// Build a detached page node from a parsed fragment. `None` when the
    /// host cannot create elements.
    fn create_page(&mut self, fragment: &PageFragment) -> Option<Self::Node>;

    /// Whether `node` still sits inside the pages container. False once the
    /// container element has been re-rendered.
    fn is_attached(&self, node: &Self::Node) -> bool;

    fn append(&mut self, node: &Self::Node);

    fn replace(&mut self, old: &Self::Node, new: &Self::Node);

    /// Remove every child of the pages container
    fn clear(&mut self);

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_hidden(&mut self, node: &Self::Node, hidden: bool);

    fn dispatch(&mut self, node: &Self::Node, event: PageEvent);
}
