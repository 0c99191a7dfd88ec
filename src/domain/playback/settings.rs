use super::state::RepeatMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed namespace for persisted playback settings
pub const SETTINGS_NAMESPACE: &str = "voicetape.playback";

/// The only playback state that survives across sessions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSettings {
    pub volume: f32,
    pub rate: f32,
    pub shuffle: bool,
    pub repeat: RepeatMode,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            rate: 1.0,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

/// Local key-value persistence for playback settings
pub trait SettingsStore: Send + Sync {
    /// Read settings back, or None if nothing was ever saved
    fn load(&self) -> Option<PlaybackSettings>;
    /// Persist settings; failures are logged, never fatal to playback
    fn save(&self, settings: &PlaybackSettings);
}

/// JSON file store writing `<dir>/<namespace>.json`
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(format!("{SETTINGS_NAMESPACE}.json"));
        Self { path }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Option<PlaybackSettings> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring corrupt playback settings"
                );
                None
            }
        }
    }

    fn save(&self, settings: &PlaybackSettings) {
        let raw = match serde_json::to_string_pretty(settings) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize playback settings");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist playback settings"
            );
        }
    }
}

/// In-memory store for tests and hosts without local storage
#[derive(Default)]
pub struct NullSettingsStore;

impl SettingsStore for NullSettingsStore {
    fn load(&self) -> Option<PlaybackSettings> {
        None
    }

    fn save(&self, _settings: &PlaybackSettings) {}
}
