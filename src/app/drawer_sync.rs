//! Legacy drawer sync hook.
//!
//! Wires `LegacyDrawerSync` to the store and, in the browser, to a
//! `MutationObserver` on `.mainDrawer`. The observer exists only while the
//! legacy header is live and is disconnected when the owner unmounts.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use super::ui_context::use_ui;
use crate::drawer::LegacyDrawerSync;
use crate::layout::LayoutResolution;

pub fn use_legacy_drawer_sync(resolution: LayoutResolution) {
    let ui = use_ui();
    let sync = use_hook(|| CopyValue::new(LegacyDrawerSync::new()));

    #[cfg(target_arch = "wasm32")]
    let observer: Rc<RefCell<Option<crate::drawer::dom::DrawerClassObserver>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    // Attach / detach as legacy header mode comes and goes
    #[cfg(target_arch = "wasm32")]
    let attached = observer.clone();
    use_effect(use_reactive!(|resolution| {
        let mut sync = sync;
        if !sync.write().set_active(&resolution) {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            use crate::drawer::dom::{DomLegacyDrawer, DrawerClassObserver};

            if !sync.read().is_active() {
                attached.borrow_mut().take();
                return;
            }
            let Some(drawer) = DomLegacyDrawer::new().drawer() else {
                tracing::debug!("Legacy drawer not rendered, nothing to observe");
                return;
            };
            // DOM -> store
            *attached.borrow_mut() = DrawerClassObserver::attach(&drawer, move |open| {
                ui.update(|store| sync.read().observe_dom(open, store));
            });
        }
    }));

    // Store -> DOM
    use_effect(move || {
        let open = ui.state().is_drawer_open;

        #[cfg(target_arch = "wasm32")]
        {
            let mut dom = crate::drawer::dom::DomLegacyDrawer::new();
            sync.read().apply_store(open, &mut dom);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = open;
    });
}
