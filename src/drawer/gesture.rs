//! Left-edge swipe to open the drawer.
//!
//! Only opens; closing is left to the drawer itself. Listeners are passive, so
//! `touch_move` never blocks native scrolling.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Touches starting further right than this (px) are not edge swipes
    pub edge_threshold: f64,
    /// Horizontal travel (px) that opens regardless of speed
    pub distance_threshold: f64,
    /// Minimum travel (px) for a fast flick
    pub min_distance: f64,
    /// Flick speed (px/ms)
    pub velocity_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            edge_threshold: 20.0,
            distance_threshold: 70.0,
            min_distance: 20.0,
            velocity_threshold: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    /// Event timestamp in milliseconds
    pub time_ms: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    OpenDrawer,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Tracking(TouchPoint),
}

#[derive(Debug)]
pub struct DrawerGestureRecognizer {
    config: GestureConfig,
    enabled: bool,
    state: State,
}

impl DrawerGestureRecognizer {
    /// Disabled outright on devices without touch input
    pub fn new(config: GestureConfig, supports_touch: bool) -> Self {
        Self {
            config,
            enabled: supports_touch,
            state: State::Idle,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, State::Tracking(_))
    }

    /// Returns true if this touch started tracking
    pub fn touch_start(&mut self, point: TouchPoint, drawer_open: bool) -> bool {
        if !self.enabled || drawer_open || point.x > self.config.edge_threshold {
            return false;
        }
        self.state = State::Tracking(point);
        true
    }

    pub fn touch_move(&mut self, _point: TouchPoint) {}

    pub fn touch_end(&mut self, point: TouchPoint, drawer_open: bool) -> GestureOutcome {
        let State::Tracking(start) = std::mem::replace(&mut self.state, State::Idle) else {
            return GestureOutcome::Ignored;
        };
        if drawer_open {
            return GestureOutcome::Ignored;
        }

        let dx = point.x - start.x;
        let dy = point.y - start.y;
        let elapsed = point.time_ms - start.time_ms;
        // A zero-length gesture counts as infinitely fast
        let velocity = if elapsed > 0.0 {
            dx.abs() / elapsed
        } else {
            f64::INFINITY
        };

        let far_enough = dx > self.config.distance_threshold
            || (dx > self.config.min_distance && velocity > self.config.velocity_threshold);
        let horizontal = dy.abs() < dx.abs();

        if far_enough && horizontal {
            tracing::debug!("Edge swipe opened drawer (dx {:.0}, {:.2} px/ms)", dx, velocity);
            GestureOutcome::OpenDrawer
        } else {
            GestureOutcome::Ignored
        }
    }
}
