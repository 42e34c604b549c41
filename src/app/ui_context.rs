//! UI store context.
//!
//! The store lives in a non-reactive `CopyValue`; a `Signal<UiState>` mirrors
//! its state so components re-render only when an action actually changed
//! something.

use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::layout::{DeviceCapabilities, LayoutMode, UiState, UiStore, Viewport};

/// Global UI state shared via context
#[derive(Clone, Copy)]
pub struct UiContext {
    store: CopyValue<UiStore>,
    state: Signal<UiState>,
}

impl UiContext {
    /// Current state (subscribes the caller)
    pub fn state(&self) -> UiState {
        (self.state)()
    }

    /// Current state without subscribing; for DOM callbacks and effects
    /// that write back to the store.
    pub fn peek_state(&self) -> UiState {
        *self.state.peek()
    }

    pub fn device(&self) -> DeviceCapabilities {
        *self.store.read().device()
    }

    pub fn legacy_layout(&self) -> Option<LayoutMode> {
        self.store.read().legacy_layout()
    }

    /// Run store actions, then publish the new state if it differs.
    pub fn update<R>(&self, action: impl FnOnce(&mut UiStore) -> R) -> R {
        let mut store = self.store;
        let result = action(&mut store.write());
        let next = *store.read().state();

        let mut state = self.state;
        if *state.peek() != next {
            state.set(next);
        }
        result
    }

    pub fn set_layout(&self, layout: LayoutMode) {
        self.update(|store| store.set_layout(layout));
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.update(|store| store.set_viewport(viewport));
    }

    pub fn toggle_drawer(&self, open: Option<bool>) {
        self.update(|store| store.toggle_drawer(open));
    }

    pub fn toggle_search(&self, open: Option<bool>) {
        self.update(|store| store.toggle_search(open));
    }

    pub fn set_is_loading(&self, loading: bool) {
        self.update(|store| store.set_is_loading(loading));
    }
}

/// Server-provided config, or defaults in the browser
pub fn use_shell_config() -> ShellConfig {
    try_use_context::<ShellConfig>().unwrap_or_default()
}

/// Initialize UI context provider - call once at app root
pub fn use_ui_provider(config: &ShellConfig) -> UiContext {
    let storage_key = config.storage_key.clone();
    let store = use_hook(move || CopyValue::new(create_store(&storage_key)));
    let state = use_signal(|| *store.read().state());

    let ctx = use_context_provider(|| UiContext { store, state });

    // Client-side only: track the window size
    #[cfg(target_arch = "wasm32")]
    {
        use super::dom_events::EventListenerGuard;
        use std::cell::RefCell;
        use std::rc::Rc;

        let guard: Rc<RefCell<Option<EventListenerGuard>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };

            ctx.set_viewport(window_viewport(&window));
            let target = window.clone();
            *guard.borrow_mut() = EventListenerGuard::passive(&window, "resize", move |_| {
                ctx.set_viewport(window_viewport(&target));
            });
        });
    }

    ctx
}

/// Get UI context - use in any component
pub fn use_ui() -> UiContext {
    use_context::<UiContext>()
}

#[cfg(target_arch = "wasm32")]
fn create_store(storage_key: &str) -> UiStore {
    use crate::layout::root::DocumentClassList;
    use crate::layout::storage::LocalStorage;

    UiStore::init(
        DeviceCapabilities::detect(),
        Box::new(LocalStorage),
        Box::new(DocumentClassList),
        storage_key,
    )
}

/// Server render: nothing persists between requests
#[cfg(not(target_arch = "wasm32"))]
fn create_store(storage_key: &str) -> UiStore {
    use crate::layout::root::MemoryClassList;
    use crate::layout::storage::MemoryStorage;

    UiStore::init(
        DeviceCapabilities::detect(),
        Box::new(MemoryStorage::new()),
        Box::new(MemoryClassList::new()),
        storage_key,
    )
}

#[cfg(target_arch = "wasm32")]
fn window_viewport(window: &web_sys::Window) -> Viewport {
    let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}
