//! Browser page host backed by `.mainAnimatedPages`.

use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement, Node};

use super::host::{PageEvent, PageHost, PAGES_CONTAINER_SELECTOR};
use super::html::{FragmentKind, PageFragment};

const HIDDEN_CLASS: &str = "hide";

pub struct DomPageHost {
    document: Option<Document>,
}

impl Default for DomPageHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DomPageHost {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    /// Looked up on every call: the legacy shell may re-render the container
    fn container(&self) -> Option<Element> {
        self.document
            .as_ref()?
            .query_selector(PAGES_CONTAINER_SELECTOR)
            .ok()
            .flatten()
    }

    fn create_div(&self) -> Option<HtmlElement> {
        self.document
            .as_ref()?
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl PageHost for DomPageHost {
    type Node = HtmlElement;

    fn has_container(&self) -> bool {
        self.container().is_some()
    }

    fn create_page(&mut self, fragment: &PageFragment) -> Option<HtmlElement> {
        let wrapper = self.create_div()?;
        wrapper.set_inner_html(&fragment.html);

        if fragment.kind == FragmentKind::Page {
            if let Some(page) = wrapper
                .first_element_child()
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                return Some(page);
            }
        }
        Some(wrapper)
    }

    fn is_attached(&self, node: &HtmlElement) -> bool {
        let node: &Node = node;
        self.container()
            .is_some_and(|container| container.contains(Some(node)))
    }

    fn append(&mut self, node: &HtmlElement) {
        if let Some(container) = self.container() {
            let _ = container.append_child(node);
        }
    }

    fn replace(&mut self, old: &HtmlElement, new: &HtmlElement) {
        match old.parent_node() {
            Some(parent) => {
                let _ = parent.replace_child(new, old);
            }
            None => self.append(new),
        }
    }

    fn clear(&mut self) {
        if let Some(container) = self.container() {
            container.set_inner_html("");
        }
    }

    fn add_class(&mut self, node: &HtmlElement, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn set_attribute(&mut self, node: &HtmlElement, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn attribute(&self, node: &HtmlElement, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_hidden(&mut self, node: &HtmlElement, hidden: bool) {
        let classes = node.class_list();
        let _ = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
    }

    fn dispatch(&mut self, node: &HtmlElement, event: PageEvent) {
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(false);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(event.name(), &init) {
            let _ = node.dispatch_event(&event);
        }
    }
}
