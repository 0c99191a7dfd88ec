pub mod engine;
pub mod settings;
pub mod sink;
pub mod state;
pub mod track;

pub use engine::PlaybackEngine;
pub use settings::{JsonSettingsStore, NullSettingsStore, PlaybackSettings, SettingsStore};
pub use sink::{AudioSink, SinkEvent};
pub use state::{PlaybackPhase, PlaybackState, RepeatMode};
pub use track::{AudioTrack, TrackMetadata};
