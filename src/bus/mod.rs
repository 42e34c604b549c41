//! UI event bus
//!
//! Uses tokio::sync::broadcast to publish UI store transitions to code that
//! embeds the store outside the Dioxus shell (native hosts, tests). The shell
//! itself re-renders from the `UiContext` signal and does not subscribe.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::layout::{EffectiveLayout, LayoutMode, Orientation, Viewport};

/// Transitions published by the UI store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum UiEvent {
    LayoutChanged {
        layout: LayoutMode,
        #[serde(serialize_with = "serialize_effective")]
        effective: EffectiveLayout,
    },
    ViewportChanged {
        width: f64,
        height: f64,
        #[serde(serialize_with = "serialize_orientation")]
        orientation: Orientation,
    },
    DrawerToggled { open: bool },
    SearchToggled { open: bool },
    LoadingChanged { loading: bool },
}

impl UiEvent {
    pub fn viewport(viewport: Viewport) -> Self {
        UiEvent::ViewportChanged {
            width: viewport.width,
            height: viewport.height,
            orientation: viewport.orientation(),
        }
    }
}

fn serialize_effective<S: serde::Serializer>(
    value: &EffectiveLayout,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_str())
}

fn serialize_orientation<S: serde::Serializer>(
    value: &Orientation,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_str())
}

/// Event bus handle for publishing and subscribing
#[derive(Clone)]
pub struct UiBus {
    sender: broadcast::Sender<UiEvent>,
}

impl UiBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: UiEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for UiBus {
    /// Default capacity (64 events)
    fn default() -> Self {
        Self::new(64)
    }
}
