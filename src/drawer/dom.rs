//! Browser side of the legacy drawer.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MutationObserver, MutationObserverInit};

use super::sync::LegacyDrawerDom;
use super::{DRAWER_SELECTOR, OPEN_CLASS, TOGGLE_SELECTOR};

pub struct DomLegacyDrawer {
    document: Option<Document>,
}

impl Default for DomLegacyDrawer {
    fn default() -> Self {
        Self::new()
    }
}

impl DomLegacyDrawer {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.as_ref()?.query_selector(selector).ok().flatten()
    }

    pub fn drawer(&self) -> Option<Element> {
        self.query(DRAWER_SELECTOR)
    }
}

impl LegacyDrawerDom for DomLegacyDrawer {
    fn drawer_open(&self) -> Option<bool> {
        self.drawer()
            .map(|drawer| drawer.class_list().contains(OPEN_CLASS))
    }

    fn click_toggle(&mut self) -> bool {
        match self
            .query(TOGGLE_SELECTOR)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            Some(button) => {
                button.click();
                true
            }
            None => false,
        }
    }
}

/// Watches the drawer's `class` attribute. Disconnects on drop.
pub struct DrawerClassObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl DrawerClassObserver {
    /// Call `on_change(open)` whenever the open class may have changed.
    /// `None` when the drawer is not rendered.
    pub fn attach(drawer: &Element, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let target = drawer.clone();
        let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _: MutationObserver| {
            on_change(target.class_list().contains(OPEN_CLASS));
        }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
        if let Err(e) = observer.observe_with_options(drawer, &init) {
            tracing::warn!("Failed to observe legacy drawer: {:?}", e);
            return None;
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for DrawerClassObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
