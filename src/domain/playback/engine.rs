use super::settings::{PlaybackSettings, SettingsStore};
use super::sink::{AudioSink, SinkEvent};
use super::state::{PlaybackPhase, PlaybackState, RepeatMode};
use super::track::AudioTrack;
use crate::domain::shared::{classify, FailureSignal};
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use std::sync::Arc;
use uuid::Uuid;

/// previous() restarts the current track instead of moving the queue
/// pointer once this many seconds have elapsed
const RESTART_THRESHOLD_SECS: f64 = 3.0;

const MIN_RATE: f32 = 0.5;
const MAX_RATE: f32 = 2.0;

struct Inner {
    state: PlaybackState,
    sink: Box<dyn AudioSink>,
}

/// Client-side playback engine: one active track, an ordered queue,
/// transport controls, and typed error surfacing.
///
/// Single-writer over its state; every operation and every sink event
/// runs under one mutex, so a play() racing a pause() resolves to one
/// deterministic final state.
pub struct PlaybackEngine {
    inner: Mutex<Inner>,
    settings_store: Arc<dyn SettingsStore>,
}

impl PlaybackEngine {
    /// Build an engine around an audio sink, restoring persisted
    /// volume/rate/shuffle/repeat from the settings store
    pub fn new(mut sink: Box<dyn AudioSink>, settings_store: Arc<dyn SettingsStore>) -> Self {
        let mut state = PlaybackState::new();
        if let Some(settings) = settings_store.load() {
            state.volume = settings.volume.clamp(0.0, 1.0);
            state.rate = settings.rate.clamp(MIN_RATE, MAX_RATE);
            state.shuffle = settings.shuffle;
            state.repeat = settings.repeat;
        }
        sink.set_volume(state.volume);
        sink.set_rate(state.rate);

        Self {
            inner: Mutex::new(Inner { state, sink }),
            settings_store,
        }
    }

    /// Snapshot of the observable state for UI binding
    pub fn state(&self) -> PlaybackState {
        self.inner.lock().state.clone()
    }

    /// Start a new track, or resume the current one when `track` is None.
    ///
    /// A new track replaces whatever was playing: prior playback stops and
    /// the position resets to zero. Structurally invalid locators fail
    /// before any network or codec work.
    pub fn play(&self, track: Option<AudioTrack>) {
        let mut inner = self.inner.lock();
        match track {
            Some(track) => {
                if !track.has_valid_locator() {
                    Self::fail(
                        &mut inner,
                        &FailureSignal::Validation {
                            detail: format!("invalid audio locator: {:?}", track.audio_url),
                        },
                    );
                    return;
                }
                let index = match inner.state.queue.iter().position(|t| t.id == track.id) {
                    Some(index) => index,
                    None => {
                        inner.state.queue.push(track);
                        inner.state.queue.len() - 1
                    }
                };
                Self::start_index(&mut inner, index);
            }
            None => Self::resume(&mut inner),
        }
    }

    /// Halt playback, preserving position. No-op when already paused or idle.
    pub fn pause(&self) {
        let mut inner = self.inner.lock();
        match inner.state.phase {
            PlaybackPhase::Playing | PlaybackPhase::Loading => {
                inner.sink.pause();
                inner.state.phase = PlaybackPhase::Paused;
            }
            _ => {}
        }
    }

    /// Clamp into [0, duration] and seek. No-op without a loaded track;
    /// never changes the play/pause state.
    pub fn seek(&self, position: f64) {
        let mut inner = self.inner.lock();
        if inner.state.phase == PlaybackPhase::Idle {
            return;
        }
        let Some(track) = inner.state.current() else {
            return;
        };
        let clamped = match track.duration {
            Some(duration) => position.clamp(0.0, duration),
            None => position.max(0.0),
        };
        inner.state.position = clamped;
        inner.sink.seek(clamped);
    }

    /// Advance through the queue, honoring the repeat mode
    pub fn next(&self) {
        let mut inner = self.inner.lock();
        if inner.state.repeat == RepeatMode::One {
            Self::restart_current(&mut inner);
            return;
        }
        let Some(index) = inner.state.current_index else {
            return;
        };
        if index + 1 < inner.state.queue.len() {
            Self::start_index(&mut inner, index + 1);
        } else if inner.state.repeat == RepeatMode::All && !inner.state.queue.is_empty() {
            Self::start_index(&mut inner, 0);
        }
        // RepeatMode::Off past the last track: no-op
    }

    /// Go back in the queue, or restart the current track when more than
    /// three seconds have elapsed
    pub fn previous(&self) {
        let mut inner = self.inner.lock();
        let Some(index) = inner.state.current_index else {
            return;
        };
        if inner.state.position > RESTART_THRESHOLD_SECS {
            Self::restart_current(&mut inner);
            return;
        }
        let target = if index == 0 {
            inner.state.queue.len() - 1
        } else {
            index - 1
        };
        Self::start_index(&mut inner, target);
    }

    /// Out-of-range volume is corrected to [0, 1], never an error
    pub fn set_volume(&self, volume: f32) {
        let mut inner = self.inner.lock();
        let clamped = volume.clamp(0.0, 1.0);
        inner.state.volume = clamped;
        inner.sink.set_volume(clamped);
        self.persist(&inner.state);
    }

    /// Out-of-range rate is corrected to the supported range
    pub fn set_rate(&self, rate: f32) {
        let mut inner = self.inner.lock();
        let clamped = rate.clamp(MIN_RATE, MAX_RATE);
        inner.state.rate = clamped;
        inner.sink.set_rate(clamped);
        self.persist(&inner.state);
    }

    pub fn set_repeat(&self, mode: RepeatMode) {
        let mut inner = self.inner.lock();
        inner.state.repeat = mode;
        self.persist(&inner.state);
    }

    /// Never implicitly changes the currently playing track
    pub fn add_to_queue(&self, track: AudioTrack) {
        let mut inner = self.inner.lock();
        inner.state.queue.push(track);
    }

    /// Remove a queued track. Removing the currently playing track is
    /// ignored: queue mutation never interrupts playback.
    pub fn remove_from_queue(&self, track_id: Uuid) {
        let mut inner = self.inner.lock();
        let Some(position) = inner.state.queue.iter().position(|t| t.id == track_id) else {
            return;
        };
        if inner.state.current_index == Some(position) {
            return;
        }
        inner.state.queue.remove(position);
        if let Some(current) = inner.state.current_index {
            if position < current {
                inner.state.current_index = Some(current - 1);
            }
        }
    }

    /// Drop everything except the currently playing track
    pub fn clear_queue(&self) {
        let mut inner = self.inner.lock();
        match inner.state.current_index {
            Some(index) => {
                let current = inner.state.queue.swap_remove(index);
                inner.state.queue.clear();
                inner.state.queue.push(current);
                inner.state.current_index = Some(0);
            }
            None => inner.state.queue.clear(),
        }
    }

    /// Toggle shuffle. When enabling, the currently playing track is
    /// pinned to the front and the rest of the queue is shuffled, so
    /// playback continues uninterrupted.
    pub fn toggle_shuffle(&self) {
        let mut inner = self.inner.lock();
        inner.state.shuffle = !inner.state.shuffle;
        if inner.state.shuffle && inner.state.queue.len() > 1 {
            if let Some(index) = inner.state.current_index {
                let current = inner.state.queue.remove(index);
                inner.state.queue.insert(0, current);
                inner.state.current_index = Some(0);
                inner.state.queue[1..].shuffle(&mut rand::thread_rng());
            } else {
                inner.state.queue.shuffle(&mut rand::thread_rng());
            }
        }
        self.persist(&inner.state);
    }

    /// Single integration point for asynchronous sink callbacks
    pub fn handle_sink_event(&self, event: SinkEvent) {
        let mut inner = self.inner.lock();
        match event {
            SinkEvent::LoadStarted => {
                // A pause issued during load wins over the load itself
                if inner.state.phase != PlaybackPhase::Paused {
                    inner.state.phase = PlaybackPhase::Loading;
                }
            }
            SinkEvent::CanPlay { duration } => {
                if let Some(index) = inner.state.current_index {
                    if let Some(track) = inner.state.queue.get_mut(index) {
                        // Duration is set once, first report wins
                        track.duration.get_or_insert(duration);
                    }
                }
                if inner.state.phase == PlaybackPhase::Loading {
                    inner.sink.play();
                    inner.state.phase = PlaybackPhase::Playing;
                }
            }
            SinkEvent::TimeUpdate { position } => {
                if inner.state.phase == PlaybackPhase::Playing {
                    inner.state.position = position;
                }
            }
            SinkEvent::Ended => {
                inner.state.phase = PlaybackPhase::Ended;
                Self::advance_after_end(&mut inner);
            }
            SinkEvent::Failed(signal) => {
                Self::fail(&mut inner, &signal);
            }
        }
    }
}

impl PlaybackEngine {
    fn resume(inner: &mut Inner) {
        if inner.state.current_index.is_none() {
            return;
        }
        match inner.state.phase {
            PlaybackPhase::Paused | PlaybackPhase::Ended => {
                inner.sink.play();
                inner.state.phase = PlaybackPhase::Playing;
            }
            PlaybackPhase::Error => {
                // A fresh attempt at the same track: reload from scratch
                inner.state.error = None;
                let Some(url) = inner.state.current().map(|t| t.audio_url.clone()) else {
                    return;
                };
                inner.state.phase = PlaybackPhase::Loading;
                inner.sink.load(&url);
            }
            _ => {}
        }
    }

    fn start_index(inner: &mut Inner, index: usize) {
        let Some(track) = inner.state.queue.get(index) else {
            return;
        };
        if !track.has_valid_locator() {
            let detail = format!("invalid audio locator: {:?}", track.audio_url);
            inner.state.current_index = Some(index);
            Self::fail(inner, &FailureSignal::Validation { detail });
            return;
        }
        let url = track.audio_url.clone();
        inner.sink.stop();
        inner.state.current_index = Some(index);
        inner.state.position = 0.0;
        inner.state.error = None;
        inner.state.phase = PlaybackPhase::Loading;
        inner.sink.load(&url);
    }

    fn restart_current(inner: &mut Inner) {
        if inner.state.current_index.is_none() {
            return;
        }
        inner.state.position = 0.0;
        inner.sink.seek(0.0);
        if inner.state.phase != PlaybackPhase::Playing {
            inner.sink.play();
            inner.state.phase = PlaybackPhase::Playing;
        }
    }

    fn advance_after_end(inner: &mut Inner) {
        match inner.state.repeat {
            RepeatMode::One => Self::restart_current(inner),
            _ => {
                let Some(index) = inner.state.current_index else {
                    return;
                };
                if index + 1 < inner.state.queue.len() {
                    Self::start_index(inner, index + 1);
                } else if inner.state.repeat == RepeatMode::All && !inner.state.queue.is_empty() {
                    Self::start_index(inner, 0);
                }
                // RepeatMode::Off at the end of the queue: stay Ended
            }
        }
    }

    fn fail(inner: &mut Inner, signal: &FailureSignal) {
        let classified = classify(signal);
        tracing::warn!(
            kind = %classified.kind,
            message = %classified.message,
            recoverable = classified.recoverable,
            "Playback error"
        );
        inner.sink.stop();
        inner.state.error = Some(classified);
        inner.state.phase = PlaybackPhase::Error;
    }

    fn persist(&self, state: &PlaybackState) {
        self.settings_store.save(&PlaybackSettings {
            volume: state.volume,
            rate: state.rate,
            shuffle: state.shuffle,
            repeat: state.repeat,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::playback::settings::NullSettingsStore;
    use crate::domain::playback::track::TrackMetadata;
    use crate::domain::shared::ErrorKind;

    /// Sink that records every command it receives
    #[derive(Clone, Default)]
    struct RecordingSink {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSink {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    impl AudioSink for RecordingSink {
        fn load(&mut self, url: &str) {
            self.calls.lock().push(format!("load {url}"));
        }
        fn play(&mut self) {
            self.calls.lock().push("play".to_string());
        }
        fn pause(&mut self) {
            self.calls.lock().push("pause".to_string());
        }
        fn seek(&mut self, position: f64) {
            self.calls.lock().push(format!("seek {position}"));
        }
        fn set_volume(&mut self, volume: f32) {
            self.calls.lock().push(format!("volume {volume}"));
        }
        fn set_rate(&mut self, rate: f32) {
            self.calls.lock().push(format!("rate {rate}"));
        }
        fn stop(&mut self) {
            self.calls.lock().push("stop".to_string());
        }
    }

    fn track(title: &str) -> AudioTrack {
        AudioTrack::new(
            format!("https://cdn.example.com/{title}.mp3"),
            title,
            "azra",
            TrackMetadata {
                source_text: String::new(),
                emotion: "calm".to_string(),
                language: "tr-TR".to_string(),
                character_count: 0,
            },
        )
    }

    fn engine() -> (PlaybackEngine, RecordingSink) {
        let sink = RecordingSink::default();
        let engine = PlaybackEngine::new(Box::new(sink.clone()), Arc::new(NullSettingsStore));
        (engine, sink)
    }

    /// Drive the engine to Playing for the current track
    fn settle_playing(engine: &PlaybackEngine, duration: f64) {
        engine.handle_sink_event(SinkEvent::CanPlay { duration });
    }

    #[test]
    fn test_play_b_after_a_discards_a() {
        let (engine, sink) = engine();
        let a = track("a");
        let b = track("b");

        engine.play(Some(a));
        engine.play(Some(b.clone()));

        let state = engine.state();
        assert_eq!(state.current().unwrap().id, b.id);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.phase, PlaybackPhase::Loading);
        // The sink was told to abandon a before loading b
        let calls = sink.calls();
        assert!(calls.contains(&"stop".to_string()));
        assert!(calls.iter().any(|c| c.contains("b.mp3")));
    }

    #[test]
    fn test_invalid_locator_fails_before_sink_work() {
        let (engine, sink) = engine();
        let mut bad = track("bad");
        bad.audio_url = "ftp://nope".to_string();

        engine.play(Some(bad));

        let state = engine.state();
        assert_eq!(state.phase, PlaybackPhase::Error);
        assert_eq!(state.error.as_ref().unwrap().kind, ErrorKind::ValidationError);
        assert!(!sink.calls().iter().any(|c| c.starts_with("load")));
    }

    #[test]
    fn test_engine_usable_after_error() {
        let (engine, _sink) = engine();
        let mut bad = track("bad");
        bad.audio_url = String::new();
        engine.play(Some(bad));
        assert_eq!(engine.state().phase, PlaybackPhase::Error);

        engine.play(Some(track("good")));
        let state = engine.state();
        assert_eq!(state.phase, PlaybackPhase::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_pause_is_noop_when_idle() {
        let (engine, sink) = engine();
        engine.pause();
        assert_eq!(engine.state().phase, PlaybackPhase::Idle);
        assert!(!sink.calls().contains(&"pause".to_string()));
    }

    #[test]
    fn test_pause_preserves_position() {
        let (engine, _sink) = engine();
        engine.play(Some(track("a")));
        settle_playing(&engine, 120.0);
        engine.handle_sink_event(SinkEvent::TimeUpdate { position: 42.5 });

        engine.pause();

        let state = engine.state();
        assert_eq!(state.phase, PlaybackPhase::Paused);
        assert_eq!(state.position, 42.5);
    }

    #[test]
    fn test_pause_during_load_wins_over_can_play() {
        let (engine, _sink) = engine();
        engine.play(Some(track("a")));
        engine.pause();
        // The late can-play callback must not flip the engine to Playing
        settle_playing(&engine, 120.0);

        let state = engine.state();
        assert_eq!(state.phase, PlaybackPhase::Paused);
        // but the duration still lands on the track
        assert_eq!(state.current().unwrap().duration, Some(120.0));
    }

    #[test]
    fn test_resume_from_pause() {
        let (engine, _sink) = engine();
        engine.play(Some(track("a")));
        settle_playing(&engine, 120.0);
        engine.handle_sink_event(SinkEvent::TimeUpdate { position: 10.0 });
        engine.pause();

        engine.play(None);

        let state = engine.state();
        assert_eq!(state.phase, PlaybackPhase::Playing);
        assert_eq!(state.position, 10.0);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let (engine, _sink) = engine();
        engine.play(Some(track("a")));
        settle_playing(&engine, 100.0);

        engine.seek(500.0);
        assert_eq!(engine.state().position, 100.0);

        engine.seek(-3.0);
        assert_eq!(engine.state().position, 0.0);
    }

    #[test]
    fn test_seek_is_noop_without_track() {
        let (engine, sink) = engine();
        engine.seek(10.0);
        assert!(!sink.calls().iter().any(|c| c.starts_with("seek")));
    }

    #[test]
    fn test_seek_does_not_change_pause_state() {
        let (engine, _sink) = engine();
        engine.play(Some(track("a")));
        settle_playing(&engine, 100.0);
        engine.pause();

        engine.seek(50.0);

        assert_eq!(engine.state().phase, PlaybackPhase::Paused);
    }

    #[test]
    fn test_repeat_all_wraps_three_track_queue() {
        let (engine, _sink) = engine();
        let first = track("one");
        let first_id = first.id;
        engine.play(Some(first));
        engine.add_to_queue(track("two"));
        engine.add_to_queue(track("three"));
        engine.set_repeat(RepeatMode::All);

        engine.next();
        engine.next();
        engine.next();

        let state = engine.state();
        assert_eq!(state.current_index, Some(0));
        assert_eq!(state.current().unwrap().id, first_id);
    }

    #[test]
    fn test_repeat_one_replays_current() {
        let (engine, _sink) = engine();
        let current = track("one");
        let current_id = current.id;
        engine.play(Some(current));
        engine.add_to_queue(track("two"));
        engine.set_repeat(RepeatMode::One);
        settle_playing(&engine, 60.0);

        engine.next();

        let state = engine.state();
        assert_eq!(state.current().unwrap().id, current_id);
        assert_eq!(state.position, 0.0);
    }

    #[test]
    fn test_repeat_off_is_noop_past_last_track() {
        let (engine, _sink) = engine();
        let only = track("only");
        let only_id = only.id;
        engine.play(Some(only));
        settle_playing(&engine, 60.0);

        engine.next();

        assert_eq!(engine.state().current().unwrap().id, only_id);
    }

    #[test]
    fn test_previous_restarts_after_three_seconds() {
        let (engine, _sink) = engine();
        engine.play(Some(track("one")));
        engine.add_to_queue(track("two"));
        settle_playing(&engine, 60.0);
        engine.next();
        settle_playing(&engine, 60.0);
        engine.handle_sink_event(SinkEvent::TimeUpdate { position: 5.0 });

        engine.previous();

        // More than 3s elapsed: restart, not a queue move
        let state = engine.state();
        assert_eq!(state.current_index, Some(1));
        assert_eq!(state.position, 0.0);
    }

    #[test]
    fn test_previous_moves_back_within_three_seconds() {
        let (engine, _sink) = engine();
        engine.play(Some(track("one")));
        engine.add_to_queue(track("two"));
        settle_playing(&engine, 60.0);
        engine.next();
        settle_playing(&engine, 60.0);
        engine.handle_sink_event(SinkEvent::TimeUpdate { position: 1.0 });

        engine.previous();

        assert_eq!(engine.state().current_index, Some(0));
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let (engine, _sink) = engine();
        engine.play(Some(track("one")));
        engine.add_to_queue(track("two"));
        engine.add_to_queue(track("three"));
        settle_playing(&engine, 60.0);

        engine.previous();

        assert_eq!(engine.state().current_index, Some(2));
    }

    #[test]
    fn test_volume_and_rate_are_clamped_not_rejected() {
        let (engine, _sink) = engine();
        engine.set_volume(3.5);
        assert_eq!(engine.state().volume, 1.0);
        engine.set_volume(-1.0);
        assert_eq!(engine.state().volume, 0.0);

        engine.set_rate(9.0);
        assert_eq!(engine.state().rate, MAX_RATE);
        engine.set_rate(0.01);
        assert_eq!(engine.state().rate, MIN_RATE);
    }

    #[test]
    fn test_queue_mutation_never_changes_current_track() {
        let (engine, _sink) = engine();
        let current = track("current");
        let current_id = current.id;
        engine.play(Some(current));
        let other = track("other");
        let other_id = other.id;
        engine.add_to_queue(other);
        engine.add_to_queue(track("third"));

        engine.remove_from_queue(other_id);
        assert_eq!(engine.state().current().unwrap().id, current_id);

        // Removing the playing track itself is ignored
        engine.remove_from_queue(current_id);
        assert_eq!(engine.state().current().unwrap().id, current_id);

        engine.clear_queue();
        let state = engine.state();
        assert_eq!(state.queue.len(), 1);
        assert_eq!(state.current().unwrap().id, current_id);
    }

    #[test]
    fn test_remove_before_current_keeps_pointer_on_same_track() {
        let (engine, _sink) = engine();
        let first = track("one");
        let first_id = first.id;
        engine.play(Some(first));
        let second = track("two");
        let second_id = second.id;
        engine.add_to_queue(second);
        engine.add_to_queue(track("three"));
        settle_playing(&engine, 60.0);
        engine.next();

        engine.remove_from_queue(first_id);

        let state = engine.state();
        assert_eq!(state.current_index, Some(0));
        assert_eq!(state.current().unwrap().id, second_id);
    }

    #[test]
    fn test_shuffle_pins_current_track_to_front() {
        let (engine, _sink) = engine();
        engine.play(Some(track("one")));
        engine.add_to_queue(track("two"));
        engine.add_to_queue(track("three"));
        engine.add_to_queue(track("four"));
        settle_playing(&engine, 60.0);
        engine.next();
        let playing_id = engine.state().current().unwrap().id;

        engine.toggle_shuffle();

        let state = engine.state();
        assert!(state.shuffle);
        assert_eq!(state.current_index, Some(0));
        assert_eq!(state.queue[0].id, playing_id);
        assert_eq!(state.queue.len(), 4);
    }

    #[test]
    fn test_sink_failure_is_classified_and_survivable() {
        let (engine, _sink) = engine();
        engine.play(Some(track("a")));
        settle_playing(&engine, 60.0);

        engine.handle_sink_event(SinkEvent::Failed(FailureSignal::Decode {
            detail: "bad frame".to_string(),
        }));

        let state = engine.state();
        assert_eq!(state.phase, PlaybackPhase::Error);
        let error = state.error.unwrap();
        assert_eq!(error.kind, ErrorKind::DecodeError);
        assert!(!error.recoverable);

        // Still usable afterwards
        engine.play(Some(track("b")));
        assert_eq!(engine.state().phase, PlaybackPhase::Loading);
    }

    #[test]
    fn test_ended_advances_to_next_track() {
        let (engine, _sink) = engine();
        engine.play(Some(track("one")));
        engine.add_to_queue(track("two"));
        settle_playing(&engine, 60.0);

        engine.handle_sink_event(SinkEvent::Ended);

        let state = engine.state();
        assert_eq!(state.current_index, Some(1));
        assert_eq!(state.phase, PlaybackPhase::Loading);
    }

    #[test]
    fn test_ended_with_repeat_off_stays_ended_at_queue_end() {
        let (engine, _sink) = engine();
        engine.play(Some(track("only")));
        settle_playing(&engine, 60.0);

        engine.handle_sink_event(SinkEvent::Ended);

        assert_eq!(engine.state().phase, PlaybackPhase::Ended);
    }

    #[test]
    fn test_settings_restored_on_construction() {
        struct FixedStore;
        impl SettingsStore for FixedStore {
            fn load(&self) -> Option<PlaybackSettings> {
                Some(PlaybackSettings {
                    volume: 0.3,
                    rate: 1.5,
                    shuffle: true,
                    repeat: RepeatMode::All,
                })
            }
            fn save(&self, _settings: &PlaybackSettings) {}
        }

        let sink = RecordingSink::default();
        let engine = PlaybackEngine::new(Box::new(sink.clone()), Arc::new(FixedStore));

        let state = engine.state();
        assert_eq!(state.volume, 0.3);
        assert_eq!(state.rate, 1.5);
        assert!(state.shuffle);
        assert_eq!(state.repeat, RepeatMode::All);
        assert!(sink.calls().contains(&"volume 0.3".to_string()));
    }

    #[test]
    fn test_settings_persisted_on_change() {
        struct CapturingStore {
            saved: Mutex<Option<PlaybackSettings>>,
        }
        impl SettingsStore for CapturingStore {
            fn load(&self) -> Option<PlaybackSettings> {
                None
            }
            fn save(&self, settings: &PlaybackSettings) {
                *self.saved.lock() = Some(*settings);
            }
        }

        let store = Arc::new(CapturingStore {
            saved: Mutex::new(None),
        });
        let engine = PlaybackEngine::new(Box::new(RecordingSink::default()), store.clone());

        engine.set_volume(0.7);

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.volume, 0.7);
    }
}
