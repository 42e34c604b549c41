//! Class list of the document root element.
//!
//! Global stylesheets key off `layout-*` classes on `<html>`; the store keeps
//! exactly one of them present.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::mode::EffectiveLayout;

pub trait RootClassList {
    fn contains(&self, class: &str) -> bool;
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
}

/// Remove every `layout-*` class and add the one for `effective`.
pub fn apply_layout_class(root: &dyn RootClassList, effective: EffectiveLayout) {
    for layout in EffectiveLayout::ALL {
        if layout != effective {
            root.remove(layout.css_class());
        }
    }
    root.add(effective.css_class());
}

/// In-memory class list; clones share state.
#[derive(Clone, Default)]
pub struct MemoryClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl RootClassList for MemoryClassList {
    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

/// `document.documentElement.classList`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct DocumentClassList;

#[cfg(target_arch = "wasm32")]
impl DocumentClassList {
    fn root() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

#[cfg(target_arch = "wasm32")]
impl RootClassList for DocumentClassList {
    fn contains(&self, class: &str) -> bool {
        Self::root().is_some_and(|root| root.class_list().contains(class))
    }

    fn add(&self, class: &str) {
        if let Some(root) = Self::root() {
            let _ = root.class_list().add_1(class);
        }
    }

    fn remove(&self, class: &str) {
        if let Some(root) = Self::root() {
            let _ = root.class_list().remove_1(class);
        }
    }
}
