//! Edge-swipe hook for the experimental shell.

use crate::drawer::GestureConfig;

/// Open the drawer on a left-edge swipe. No-op without touch support.
pub fn use_drawer_gestures(config: GestureConfig) {
    #[cfg(target_arch = "wasm32")]
    {
        use super::dom_events::EventListenerGuard;
        use super::ui_context::use_ui;
        use dioxus::prelude::*;
        use crate::drawer::{DrawerGestureRecognizer, GestureOutcome, TouchPoint};
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;

        let ui = use_ui();
        let guards: Rc<RefCell<Vec<EventListenerGuard>>> =
            use_hook(|| Rc::new(RefCell::new(Vec::new())));

        use_effect(move || {
            if !guards.borrow().is_empty() {
                return;
            }
            let recognizer = DrawerGestureRecognizer::new(config, ui.device().supports_touch);
            if !recognizer.is_enabled() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let recognizer = Rc::new(RefCell::new(recognizer));

            // `changedTouches` carries the lifted finger on touchend
            let point = |event: &web_sys::Event| -> Option<TouchPoint> {
                let event = event.dyn_ref::<web_sys::TouchEvent>()?;
                let touch = event.changed_touches().get(0)?;
                Some(TouchPoint::new(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                    event.time_stamp(),
                ))
            };

            let start = recognizer.clone();
            let on_start = move |event: web_sys::Event| {
                if let Some(p) = point(&event) {
                    start.borrow_mut().touch_start(p, ui.peek_state().is_drawer_open);
                }
            };
            let moving = recognizer.clone();
            let on_move = move |event: web_sys::Event| {
                if let Some(p) = point(&event) {
                    moving.borrow_mut().touch_move(p);
                }
            };
            let end = recognizer;
            let on_end = move |event: web_sys::Event| {
                let Some(p) = point(&event) else {
                    return;
                };
                let outcome = end.borrow_mut().touch_end(p, ui.peek_state().is_drawer_open);
                if outcome == GestureOutcome::OpenDrawer {
                    ui.toggle_drawer(Some(true));
                }
            };

            let mut guards = guards.borrow_mut();
            guards.extend(EventListenerGuard::passive(&document, "touchstart", on_start));
            guards.extend(EventListenerGuard::passive(&document, "touchmove", on_move));
            guards.extend(EventListenerGuard::passive(&document, "touchend", on_end));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;
}
