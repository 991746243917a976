//! Game settings and preferences
//!
//! Persisted separately from the game in LocalStorage. Nothing in here
//! tunes the physics; it only decides which viewport a session gets.

use serde::{Deserialize, Serialize};

use crate::sim::Viewport;

/// How the canvas is sized for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceClass {
    /// Canvas fills the whole window
    Mobile,
    /// Fixed-size canvas
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "Mobile",
            DeviceClass::Desktop => "Desktop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mobile" | "phone" => Some(DeviceClass::Mobile),
            "desktop" => Some(DeviceClass::Desktop),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    /// Canvas width on desktop
    pub desktop_width: u32,
    /// Canvas height on desktop
    pub desktop_height: u32,
    /// Windows at most this wide are treated as mobile
    pub mobile_breakpoint: u32,
    /// Force a device class instead of detecting it from the window
    pub device_override: Option<DeviceClass>,

    // === Session ===
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,

    // === Debug ===
    /// Log every spawn and score at debug level
    pub verbose_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            desktop_width: 400,
            desktop_height: 600,
            mobile_breakpoint: 768,
            device_override: None,
            seed: None,
            verbose_log: false,
        }
    }
}

impl Settings {
    /// Device class for a window of the given width
    pub fn device_class(&self, window_width: i32) -> DeviceClass {
        if let Some(device) = self.device_override {
            return device;
        }
        if window_width <= self.mobile_breakpoint as i32 {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Viewport to use for a window of the given size
    pub fn viewport_for_window(&self, window_width: i32, window_height: i32) -> Viewport {
        match self.device_class(window_width) {
            DeviceClass::Mobile => Viewport::new(window_width, window_height),
            DeviceClass::Desktop => Viewport::new(
                self.desktop_width.min(i32::MAX as u32) as i32,
                self.desktop_height.min(i32::MAX as u32) as i32,
            ),
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "gate_flap_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
