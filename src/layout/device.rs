//! Device capability signals used by layout resolution and gestures.

/// User agent fragments identifying TV platforms
const TV_MARKERS: &[&str] = &[
    "smarttv",
    "smart-tv",
    "tizen",
    "web0s",
    "webos",
    "netcast",
    "hbbtv",
    "crkey",
    "googletv",
    "android tv",
    "appletv",
    "aftb",
    "afts",
    "aftm",
    "aftt",
    "roku",
];

/// User agent fragments identifying phones and tablets
const MOBILE_MARKERS: &[&str] = &["mobi", "android", "iphone", "ipad", "ipod", "silk"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DeviceCapabilities {
    pub is_tv: bool,
    pub is_mobile: bool,
    pub supports_touch: bool,
}

impl DeviceCapabilities {
    /// Plain desktop browser: no TV, no mobile, no touch
    pub fn desktop() -> Self {
        Self::default()
    }

    pub fn tv() -> Self {
        Self {
            is_tv: true,
            ..Self::default()
        }
    }

    pub fn mobile() -> Self {
        Self {
            is_mobile: true,
            supports_touch: true,
            ..Self::default()
        }
    }

    /// Derive capabilities from a user agent string and the reported touch point count.
    ///
    /// TV detection wins over mobile detection: Android TV user agents also
    /// contain "android".
    pub fn from_user_agent(user_agent: &str, max_touch_points: u32) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let is_tv = TV_MARKERS.iter().any(|m| ua.contains(m));
        let is_mobile = !is_tv && MOBILE_MARKERS.iter().any(|m| ua.contains(m));
        Self {
            is_tv,
            is_mobile,
            supports_touch: max_touch_points > 0,
        }
    }

    /// Probe the current browser
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let navigator = window.navigator();
        let ua = navigator.user_agent().unwrap_or_default();
        let touch_points = navigator.max_touch_points().max(0) as u32;
        Self::from_user_agent(&ua, touch_points)
    }

    /// Non-browser targets have no device to probe
    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::default()
    }
}
