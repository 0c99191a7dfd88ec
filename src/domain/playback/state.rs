use super::track::AudioTrack;
use crate::domain::shared::ClassifiedError;
use serde::{Deserialize, Serialize};

/// Repeat behavior once the end of a track is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    Off,
    One,
    All,
}

/// Where the engine is in its lifecycle. Error is reachable from every
/// other phase and leaves the engine usable for the next play() call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackPhase {
    Idle,
    Loading,
    Playing,
    Paused,
    Ended,
    Error,
}

/// The engine's complete observable state. Single-writer: only the
/// engine mutates this, everyone else reads snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackState {
    pub queue: Vec<AudioTrack>,
    pub current_index: Option<usize>,
    pub phase: PlaybackPhase,
    pub position: f64,
    pub volume: f32,
    pub rate: f32,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub error: Option<ClassifiedError>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            current_index: None,
            phase: PlaybackPhase::Idle,
            position: 0.0,
            volume: 1.0,
            rate: 1.0,
            shuffle: false,
            repeat: RepeatMode::Off,
            error: None,
        }
    }

    pub fn current(&self) -> Option<&AudioTrack> {
        self.current_index.and_then(|i| self.queue.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
