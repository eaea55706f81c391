//! Game settings and preferences
//!
//! Read from LocalStorage at start-up as JSON. The game never writes them
//! back; missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::platform::KeyBindings;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `KeyboardEvent.code` -> game key
    pub bindings: KeyBindings,

    // === HUD ===
    /// Start with the debug overlay on
    pub debug_overlay: bool,
    /// Include an FPS readout in the debug overlay
    pub show_fps: bool,

    // === Accessibility ===
    /// Blink the START prompt on the title screen (off = solid)
    pub blink_prompt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            debug_overlay: false,
            show_fps: true,
            blink_prompt: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "quad_pong_settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.bindings.is_empty() {
            log::warn!("Settings define no key bindings; the game will not respond to keys");
        }
        Ok(settings)
    }

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
                    Err(e) => log::warn!("Ignoring invalid settings: {}", e),
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
