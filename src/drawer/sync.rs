//! Two-way sync between `UiState::is_drawer_open` and the legacy drawer.
//!
//! Both directions compare before writing. A store change clicks the legacy
//! toggle only when the DOM disagrees, and the resulting class mutation is
//! only written back when the store disagrees, so one change never echoes.

use crate::layout::{LayoutResolution, UiStore};

/// What the sync needs from the legacy drawer markup
pub trait LegacyDrawerDom {
    /// Whether the drawer carries its open class. `None` when the drawer is
    /// not rendered.
    fn drawer_open(&self) -> Option<bool>;

    /// Click the legacy toggle button. Returns false when the button is absent.
    fn click_toggle(&mut self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Not in legacy header mode
    Inactive,
    /// Drawer node absent
    Unavailable,
    InSync,
    /// Legacy toggle clicked to follow the store
    Clicked,
    /// Store and DOM disagree but the toggle button is absent
    NoToggle,
    /// Store updated to follow the DOM
    StoreUpdated,
}

#[derive(Debug, Default)]
pub struct LegacyDrawerSync {
    active: bool,
}

impl LegacyDrawerSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Track whether the legacy header is showing. Returns true when this
    /// flips, so the caller can attach or tear down its DOM observer.
    pub fn set_active(&mut self, resolution: &LayoutResolution) -> bool {
        let active = resolution.is_legacy_header_mode();
        if active == self.active {
            return false;
        }
        self.active = active;
        tracing::debug!(
            "Legacy drawer sync {}",
            if active { "attached" } else { "detached" }
        );
        true
    }

    /// Store → DOM
    pub fn apply_store(&self, store_open: bool, dom: &mut dyn LegacyDrawerDom) -> SyncOutcome {
        if !self.active {
            return SyncOutcome::Inactive;
        }
        let Some(dom_open) = dom.drawer_open() else {
            return SyncOutcome::Unavailable;
        };
        if dom_open == store_open {
            return SyncOutcome::InSync;
        }
        if dom.click_toggle() {
            tracing::debug!("Toggling legacy drawer to match store (open: {})", store_open);
            SyncOutcome::Clicked
        } else {
            SyncOutcome::NoToggle
        }
    }

    /// DOM → store, fed from the drawer's class mutations
    pub fn observe_dom(&self, dom_open: bool, store: &mut UiStore) -> SyncOutcome {
        if !self.active {
            return SyncOutcome::Inactive;
        }
        if store.state().is_drawer_open == dom_open {
            return SyncOutcome::InSync;
        }
        tracing::debug!("Legacy drawer changed outside the store (open: {})", dom_open);
        store.toggle_drawer(Some(dom_open));
        SyncOutcome::StoreUpdated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::root::MemoryClassList;
    use crate::layout::storage::MemoryStorage;
    use crate::layout::DeviceCapabilities;

    fn legacy() -> LayoutResolution {
        LayoutResolution {
            layout_mode: Some(crate::layout::LayoutMode::Desktop),
            is_experimental_layout: false,
            is_new_layout_path: false,
            should_hide_legacy_header: false,
        }
    }

    fn experimental() -> LayoutResolution {
        LayoutResolution {
            layout_mode: None,
            is_experimental_layout: true,
            is_new_layout_path: false,
            should_hide_legacy_header: true,
        }
    }

    struct StaticDom {
        open: Option<bool>,
        has_button: bool,
        clicks: usize,
    }

    impl LegacyDrawerDom for StaticDom {
        fn drawer_open(&self) -> Option<bool> {
            self.open
        }

        fn click_toggle(&mut self) -> bool {
            self.clicks += 1;
            self.has_button
        }
    }

    fn store() -> UiStore {
        UiStore::new(
            DeviceCapabilities::desktop(),
            Box::new(MemoryStorage::new()),
            Box::new(MemoryClassList::new()),
        )
    }

    #[test]
    fn activation_follows_header_mode() {
        let mut sync = LegacyDrawerSync::new();
        assert!(!sync.set_active(&experimental()));
        assert!(sync.set_active(&legacy()));
        assert!(!sync.set_active(&legacy()));
        assert!(sync.is_active());
        assert!(sync.set_active(&experimental()));
        assert!(!sync.is_active());
    }

    #[test]
    fn inactive_sync_does_nothing() {
        let sync = LegacyDrawerSync::new();
        let mut dom = StaticDom {
            open: Some(false),
            has_button: true,
            clicks: 0,
        };
        let mut store = store();

        assert_eq!(sync.apply_store(true, &mut dom), SyncOutcome::Inactive);
        assert_eq!(sync.observe_dom(true, &mut store), SyncOutcome::Inactive);
        assert_eq!(dom.clicks, 0);
        assert!(!store.state().is_drawer_open);
    }

    #[test]
    fn missing_markup_is_silent() {
        let mut sync = LegacyDrawerSync::new();
        sync.set_active(&legacy());

        let mut no_drawer = StaticDom {
            open: None,
            has_button: true,
            clicks: 0,
        };
        assert_eq!(sync.apply_store(true, &mut no_drawer), SyncOutcome::Unavailable);
        assert_eq!(no_drawer.clicks, 0);

        let mut no_button = StaticDom {
            open: Some(false),
            has_button: false,
            clicks: 0,
        };
        assert_eq!(sync.apply_store(true, &mut no_button), SyncOutcome::NoToggle);
    }

    #[test]
    fn agreeing_states_do_not_click() {
        let mut sync = LegacyDrawerSync::new();
        sync.set_active(&legacy());
        let mut dom = StaticDom {
            open: Some(true),
            has_button: true,
            clicks: 0,
        };
        assert_eq!(sync.apply_store(true, &mut dom), SyncOutcome::InSync);
        assert_eq!(dom.clicks, 0);
    }

    #[test]
    fn dom_change_updates_store_once() {
        let mut sync = LegacyDrawerSync::new();
        sync.set_active(&legacy());
        let mut store = store();
        let mut events = store.subscribe();

        assert_eq!(sync.observe_dom(true, &mut store), SyncOutcome::StoreUpdated);
        assert!(store.state().is_drawer_open);
        assert_eq!(sync.observe_dom(true, &mut store), SyncOutcome::InSync);

        assert!(events.try_recv().is_ok());
        assert!(events.try_recv().is_err());
    }
}
