//! User preferences
//!
//! Persisted in LocalStorage, separate from the engine's `GameConfig`.

use serde::{Deserialize, Serialize};

use crate::config::{BoardVariant, GameConfig};
use crate::consts::*;

/// Site settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Global mute (the speaker toggle)
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Background chiptune loop
    pub music_enabled: bool,
    /// Mute when the tab loses focus
    pub mute_on_blur: bool,

    // === Game ===
    pub board_variant: BoardVariant,
    /// Snake speed (ms per cell)
    pub tick_interval_ms: u32,

    // === Accessibility ===
    /// Skip splash animation and blinking overlays
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            music_enabled: true,
            mute_on_blur: true,

            board_variant: BoardVariant::Square,
            tick_interval_ms: TICK_INTERVAL_MS,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective sound effect gain (0 when muted)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music gain (0 when muted or music is off)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted || !self.music_enabled {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Engine config for the classic board at the preferred speed
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            // Zero would stall the timer; keep the default instead
            tick_interval_ms: if self.tick_interval_ms == 0 {
                TICK_INTERVAL_MS
            } else {
                self.tick_interval_ms
            },
            ..GameConfig::classic()
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "arcade_portfolio_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
