//! Layout preference and derived layout values.

use serde::{Deserialize, Serialize};

/// Layout preference chosen by the user (or forced by the device).
///
/// This is the only piece of UI state that survives a reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Auto,
    Desktop,
    Experimental,
    Mobile,
    Tv,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 5] = [
        LayoutMode::Auto,
        LayoutMode::Desktop,
        LayoutMode::Experimental,
        LayoutMode::Mobile,
        LayoutMode::Tv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Auto => "auto",
            LayoutMode::Desktop => "desktop",
            LayoutMode::Experimental => "experimental",
            LayoutMode::Mobile => "mobile",
            LayoutMode::Tv => "tv",
        }
    }

    /// Parse a stored value. Unknown or empty strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "auto" => Some(LayoutMode::Auto),
            "desktop" => Some(LayoutMode::Desktop),
            "experimental" => Some(LayoutMode::Experimental),
            "mobile" => Some(LayoutMode::Mobile),
            "tv" => Some(LayoutMode::Tv),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Auto => "Auto",
            LayoutMode::Desktop => "Desktop",
            LayoutMode::Experimental => "Experimental",
            LayoutMode::Mobile => "Mobile",
            LayoutMode::Tv => "TV",
        }
    }
}

/// The layout actually driving rendering after device overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EffectiveLayout {
    Mobile,
    Tv,
    Desktop,
    #[default]
    Experimental,
}

impl EffectiveLayout {
    pub const ALL: [EffectiveLayout; 4] = [
        EffectiveLayout::Mobile,
        EffectiveLayout::Tv,
        EffectiveLayout::Desktop,
        EffectiveLayout::Experimental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveLayout::Mobile => "mobile",
            EffectiveLayout::Tv => "tv",
            EffectiveLayout::Desktop => "desktop",
            EffectiveLayout::Experimental => "experimental",
        }
    }

    /// CSS class applied to the document root
    pub fn css_class(&self) -> &'static str {
        match self {
            EffectiveLayout::Mobile => "layout-mobile",
            EffectiveLayout::Tv => "layout-tv",
            EffectiveLayout::Desktop => "layout-desktop",
            EffectiveLayout::Experimental => "layout-experimental",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, EffectiveLayout::Mobile)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Portrait only when strictly taller than wide
    pub fn orientation(&self) -> Orientation {
        if self.height > self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}
