//! User-adjustable settings, persisted between sessions.

use serde::{Deserialize, Serialize};

use crate::consts::MUSIC_VOLUME;
use crate::persistence::ScoreStore;

const SETTINGS_KEY: &str = "hovercat_settings";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether music should play at all.
    pub music_enabled: bool,
    /// Set when the user pressed the music toggle to turn music off.
    /// Sticky across crashes and restarts until toggled back on.
    pub music_manually_disabled: bool,
    // Mix levels (prep for later); only music_volume is applied today.
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub music_volume: f32,
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            music_manually_disabled: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: MUSIC_VOLUME,
            fullscreen: false,
        }
    }
}

impl Settings {
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.read(SETTINGS_KEY) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("corrupt settings, using defaults: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("no saved settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn ScoreStore) {
        match serde_json::to_string(self) {
            Ok(json) => store.write(SETTINGS_KEY, &json),
            Err(e) => log::warn!("failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn defaults_when_nothing_saved() {
        let store = MemoryStore::new();
        let settings = Settings::load(&store);
        assert!(settings.music_enabled);
        assert!(!settings.music_manually_disabled);
        assert_eq!(settings.music_volume, MUSIC_VOLUME);
    }

    #[test]
    fn save_and_reload() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::default();
        settings.music_manually_disabled = true;
        settings.fullscreen = true;
        settings.save(&mut store);

        let reloaded = Settings::load(&store);
        assert!(reloaded.music_manually_disabled);
        assert!(reloaded.fullscreen);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.write(SETTINGS_KEY, "}{");
        let settings = Settings::load(&store);
        assert!(settings.music_enabled);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let mut store = MemoryStore::new();
        store.write(SETTINGS_KEY, r#"{"fullscreen":true}"#);
        let settings = Settings::load(&store);
        assert!(settings.fullscreen);
        assert!(settings.music_enabled);
    }
}
