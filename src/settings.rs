//! Player preferences
//!
//! Persisted in LocalStorage on the web. Gameplay numbers live in `Tuning`,
//! not here.

use serde::{Deserialize, Serialize};

use crate::audio::Volume;
use crate::platform::Action;

/// Volume change per key press
pub const VOLUME_STEP: f32 = 0.1;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show the score lines
    pub show_hud: bool,
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all cues
    pub muted: bool,
    /// Pause when window loses focus
    pub pause_on_blur: bool,

    // === Camera ===
    /// Starting field of view in degrees
    pub zoom: f32,

    /// Start with the plate steering itself
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hud: true,
            show_fps: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pause_on_blur: true,

            zoom: 45.0,

            autopilot: false,
        }
    }
}

impl Settings {
    /// Volume handed to the audio sink
    pub fn volume(&self) -> Volume {
        Volume {
            master: self.master_volume.clamp(0.0, 1.0),
            sfx: self.sfx_volume.clamp(0.0, 1.0),
            muted: self.muted,
        }
    }

    /// Apply a preference key. Returns true if anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::ToggleMute => self.muted = !self.muted,
            Action::ToggleFps => self.show_fps = !self.show_fps,
            Action::ToggleHud => self.show_hud = !self.show_hud,
            Action::VolumeUp | Action::VolumeDown => {
                let step = if action == Action::VolumeUp {
                    VOLUME_STEP
                } else {
                    -VOLUME_STEP
                };
                let volume = (self.master_volume + step).clamp(0.0, 1.0);
                if volume == self.master_volume {
                    return false;
                }
                self.master_volume = volume;
            }
            _ => return false,
        }
        log::info!(
            "Settings: muted {}, volume {:.1}, fps {}, hud {}",
            self.muted,
            self.master_volume,
            self.show_fps,
            self.show_hud
        );
        true
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "collect_it_settings";

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
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
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
