//! DOM event listener registration.

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// RAII guard removing the listener on drop
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    // Owned so the closure lives exactly as long as the registration
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListenerGuard {
    /// Passive listener: the browser never waits on it before scrolling
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        Self::register(target, event, callback, true)
    }

    fn register(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
        passive: bool,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::warn!("Failed to add {} listener: {:?}", event, e);
            return None;
        }

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
