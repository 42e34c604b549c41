//! UI state store.
//!
//! Owns the process-wide `UiState`. Every mutation goes through one of the
//! actions below; each action applies its side effects (root class, storage,
//! bus) before returning.

use tokio::sync::broadcast;

use super::device::DeviceCapabilities;
use super::mode::{EffectiveLayout, LayoutMode, Orientation, Viewport};
use super::root::{apply_layout_class, RootClassList};
use super::storage::{self, PersistedUi, StateStorage, DEFAULT_STORAGE_KEY};
use crate::bus::{UiBus, UiEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    pub layout: LayoutMode,
    pub effective_layout: EffectiveLayout,
    pub viewport: Viewport,
    pub orientation: Orientation,
    pub is_drawer_open: bool,
    pub is_search_open: bool,
    pub is_loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Auto,
            effective_layout: EffectiveLayout::Experimental,
            viewport: Viewport::default(),
            orientation: Orientation::Landscape,
            is_drawer_open: false,
            is_search_open: false,
            is_loading: false,
        }
    }
}

/// Resolve the effective layout for a stored preference.
///
/// A TV device always renders the TV layout. Otherwise an explicit preference
/// is mirrored and `Auto` falls through mobile detection to experimental.
pub fn effective_layout_for(layout: LayoutMode, device: &DeviceCapabilities) -> EffectiveLayout {
    if device.is_tv {
        return EffectiveLayout::Tv;
    }
    match layout {
        LayoutMode::Auto if device.is_mobile => EffectiveLayout::Mobile,
        LayoutMode::Auto => EffectiveLayout::Experimental,
        LayoutMode::Desktop => EffectiveLayout::Desktop,
        LayoutMode::Experimental => EffectiveLayout::Experimental,
        LayoutMode::Mobile => EffectiveLayout::Mobile,
        LayoutMode::Tv => EffectiveLayout::Tv,
    }
}

pub struct UiStore {
    state: UiState,
    device: DeviceCapabilities,
    storage: Box<dyn StateStorage>,
    storage_key: String,
    root: Box<dyn RootClassList>,
    bus: UiBus,
}

impl UiStore {
    /// Fresh store with default state (no rehydration).
    pub fn new(
        device: DeviceCapabilities,
        storage: Box<dyn StateStorage>,
        root: Box<dyn RootClassList>,
    ) -> Self {
        let mut state = UiState::default();
        state.effective_layout = effective_layout_for(state.layout, &device);
        apply_layout_class(root.as_ref(), state.effective_layout);

        Self {
            state,
            device,
            storage,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            root,
            bus: UiBus::default(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Create and rehydrate from storage. Call once at app bootstrap.
    pub fn init(
        device: DeviceCapabilities,
        storage: Box<dyn StateStorage>,
        root: Box<dyn RootClassList>,
        storage_key: &str,
    ) -> Self {
        let mut store = Self::new(device, storage, root).with_storage_key(storage_key);
        store.rehydrate();
        store
    }

    /// Restore `layout` from storage, then re-resolve against current device
    /// signals. The effective layout is never read from storage.
    pub fn rehydrate(&mut self) {
        if let Some(persisted) = storage::load_persisted(self.storage.as_ref(), &self.storage_key) {
            tracing::debug!("Rehydrated layout preference: {}", persisted.layout.as_str());
            self.state.layout = persisted.layout;
            let effective = effective_layout_for(persisted.layout, &self.device);
            self.apply_effective(effective);
        }
        self.auto_detect_layout();
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Read a derived value from the current state
    pub fn select<T>(&self, selector: impl FnOnce(&UiState) -> T) -> T {
        selector(&self.state)
    }

    pub fn device(&self) -> &DeviceCapabilities {
        &self.device
    }

    /// Transitions for embedders outside the Dioxus shell
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.bus.subscribe()
    }

    /// Legacy top-level layout value, used by the resolver for migration
    pub fn legacy_layout(&self) -> Option<LayoutMode> {
        storage::load_legacy_layout(self.storage.as_ref())
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        if self.state.layout == layout {
            return;
        }

        let previous = self.state.layout;
        self.state.layout = layout;
        let effective = effective_layout_for(layout, &self.device);
        tracing::info!(
            "Layout changed: {} -> {} (effective: {})",
            previous.as_str(),
            layout.as_str(),
            effective.as_str()
        );
        self.apply_effective(effective);
        self.persist();
        self.bus.publish(UiEvent::LayoutChanged { layout, effective });
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.state.viewport == viewport {
            return;
        }
        self.state.viewport = viewport;
        self.state.orientation = viewport.orientation();
        self.bus.publish(UiEvent::viewport(viewport));
    }

    /// Set the drawer to `open`, or flip it when `None`
    pub fn toggle_drawer(&mut self, open: Option<bool>) {
        let next = open.unwrap_or(!self.state.is_drawer_open);
        if next != self.state.is_drawer_open {
            self.state.is_drawer_open = next;
            self.bus.publish(UiEvent::DrawerToggled { open: next });
        }
    }

    pub fn toggle_search(&mut self, open: Option<bool>) {
        let next = open.unwrap_or(!self.state.is_search_open);
        if next != self.state.is_search_open {
            self.state.is_search_open = next;
            self.bus.publish(UiEvent::SearchToggled { open: next });
        }
    }

    pub fn set_is_loading(&mut self, loading: bool) {
        if loading != self.state.is_loading {
            self.state.is_loading = loading;
            self.bus.publish(UiEvent::LoadingChanged { loading });
        }
    }

    /// Re-run `Auto` resolution against the current device signals.
    pub fn auto_detect_layout(&mut self) {
        if self.state.layout != LayoutMode::Auto {
            return;
        }
        let effective = effective_layout_for(LayoutMode::Auto, &self.device);
        if effective != self.state.effective_layout {
            tracing::info!("Auto-detected layout: {}", effective.as_str());
            self.apply_effective(effective);
            self.bus.publish(UiEvent::LayoutChanged {
                layout: LayoutMode::Auto,
                effective,
            });
        }
    }

    /// Replace device signals (e.g. late TV detection) and re-detect.
    pub fn set_device(&mut self, device: DeviceCapabilities) {
        if self.device == device {
            return;
        }
        self.device = device;
        self.auto_detect_layout();
    }

    fn apply_effective(&mut self, effective: EffectiveLayout) {
        self.state.effective_layout = effective;
        apply_layout_class(self.root.as_ref(), effective);
    }

    fn persist(&self) {
        let persisted = PersistedUi {
            layout: self.state.layout,
        };
        if let Err(e) = storage::save_persisted(self.storage.as_ref(), &self.storage_key, persisted)
        {
            tracing::warn!("Failed to persist layout preference: {}", e);
        }
    }
}
