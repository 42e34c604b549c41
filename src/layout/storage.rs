//! Key/value persistence for the UI store.
//!
//! The store persists a single entry holding `{ layout }` in the same envelope
//! the web client has always written (`{"state":{...},"version":0}`), so
//! existing browser profiles rehydrate without migration.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::mode::LayoutMode;

/// Default key for the persisted UI entry
pub const DEFAULT_STORAGE_KEY: &str = "ui-store";

/// Top-level key older clients stored the bare layout string under
pub const LEGACY_LAYOUT_KEY: &str = "layout";

/// Minimal string key/value storage (mirrors `localStorage`)
pub trait StateStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// The persisted subset of `UiState`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedUi {
    #[serde(default)]
    pub layout: LayoutMode,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    state: PersistedUi,
    #[serde(default)]
    version: u32,
}

pub fn load_persisted(storage: &dyn StateStorage, key: &str) -> Option<PersistedUi> {
    let raw = storage.read(key)?;
    match serde_json::from_str::<Envelope>(&raw) {
        Ok(envelope) => Some(envelope.state),
        Err(e) => {
            tracing::warn!("Ignoring unreadable persisted UI state under {}: {}", key, e);
            None
        }
    }
}

pub fn save_persisted(storage: &dyn StateStorage, key: &str, state: PersistedUi) -> Result<()> {
    let json = serde_json::to_string(&Envelope { state, version: 0 })?;
    storage.write(key, &json)
}

/// Layout written by older clients under the bare `layout` key
pub fn load_legacy_layout(storage: &dyn StateStorage) -> Option<LayoutMode> {
    storage
        .read(LEGACY_LAYOUT_KEY)
        .and_then(|value| LayoutMode::parse(&value))
}

// ============ In-memory storage ============

/// Shared in-memory storage; clones see the same entries.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

// ============ Browser storage ============

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl StateStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("localStorage write failed: {:?}", e))
    }
}
