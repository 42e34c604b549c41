//! In-memory page host.
//!
//! Used by non-browser builds and tests. Records every DOM operation in order
//! so callers can assert on sequencing.

use std::collections::{BTreeMap, BTreeSet};

use super::host::{PageEvent, PageHost};
use super::html::PageFragment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    pub html: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub hidden: bool,
    pub events: Vec<PageEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostOp {
    Created(PageId),
    Appended(PageId),
    Replaced { old: PageId, new: PageId },
    Cleared,
    Dispatched(PageId, PageEvent),
}

#[derive(Debug)]
pub struct MemoryPageHost {
    container_present: bool,
    fail_create: bool,
    pages: Vec<MemoryPage>,
    children: Vec<PageId>,
    ops: Vec<HostOp>,
}

impl Default for MemoryPageHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPageHost {
    pub fn new() -> Self {
        Self {
            container_present: true,
            fail_create: false,
            pages: Vec::new(),
            children: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Host whose pages container was never rendered
    pub fn without_container() -> Self {
        Self {
            container_present: false,
            ..Self::new()
        }
    }

    /// Make `create_page` fail until reset with `false`
    pub fn set_fail_create(&mut self, fail: bool) {
        self.fail_create = fail;
    }

    pub fn page(&self, id: PageId) -> &MemoryPage {
        &self.pages[id.0]
    }

    /// Nodes currently attached to the container, in DOM order
    pub fn children(&self) -> &[PageId] {
        &self.children
    }

    pub fn visible_children(&self) -> Vec<PageId> {
        self.children
            .iter()
            .copied()
            .filter(|id| !self.page(*id).hidden)
            .collect()
    }

    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Number of fragments turned into nodes so far
    pub fn created_count(&self) -> usize {
        self.pages.len()
    }

    pub fn position(&self, op: &HostOp) -> Option<usize> {
        self.ops.iter().position(|o| o == op)
    }
}

impl PageHost for MemoryPageHost {
    type Node = PageId;

    fn has_container(&self) -> bool {
        self.container_present
    }

    fn create_page(&mut self, fragment: &PageFragment) -> Option<PageId> {
        if self.fail_create {
            return None;
        }
        let id = PageId(self.pages.len());
        self.pages.push(MemoryPage {
            html: fragment.html.clone(),
            attributes: fragment.attributes(),
            ..MemoryPage::default()
        });
        self.ops.push(HostOp::Created(id));
        Some(id)
    }

    fn is_attached(&self, node: &PageId) -> bool {
        self.children.contains(node)
    }

    fn append(&mut self, node: &PageId) {
        self.children.push(*node);
        self.ops.push(HostOp::Appended(*node));
    }

    fn replace(&mut self, old: &PageId, new: &PageId) {
        match self.children.iter().position(|c| c == old) {
            Some(idx) => self.children[idx] = *new,
            None => self.children.push(*new),
        }
        self.ops.push(HostOp::Replaced {
            old: *old,
            new: *new,
        });
    }

    fn clear(&mut self) {
        self.children.clear();
        self.ops.push(HostOp::Cleared);
    }

    fn add_class(&mut self, node: &PageId, class: &str) {
        self.pages[node.0].classes.insert(class.to_string());
    }

    fn set_attribute(&mut self, node: &PageId, name: &str, value: &str) {
        self.pages[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, node: &PageId, name: &str) -> Option<String> {
        self.pages[node.0].attributes.get(name).cloned()
    }

    fn set_hidden(&mut self, node: &PageId, hidden: bool) {
        self.pages[node.0].hidden = hidden;
    }

    fn dispatch(&mut self, node: &PageId, event: PageEvent) {
        self.pages[node.0].events.push(event);
        self.ops.push(HostOp::Dispatched(*node, event));
    }
}
