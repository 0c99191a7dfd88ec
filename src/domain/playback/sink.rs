use crate::domain::shared::FailureSignal;

/// The underlying audio resource the engine drives.
///
/// The real implementation wraps whatever the host platform gives us
/// (a media element, a decoder + output device). Commands here are
/// fire-and-forget; the resource answers asynchronously with SinkEvents
/// delivered to `PlaybackEngine::handle_sink_event`.
pub trait AudioSink: Send {
    /// Begin fetching/decoding the given locator
    fn load(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, position: f64);
    fn set_volume(&mut self, volume: f32);
    fn set_rate(&mut self, rate: f32);
    /// Abandon the current resource entirely
    fn stop(&mut self);
}

/// Asynchronous callbacks from the audio resource, each mapped to one
/// engine transition. One integration point per external event keeps
/// the state machine explicit instead of scattering mutable flags.
#[derive(Debug, Clone)]
pub enum SinkEvent {
    LoadStarted,
    CanPlay { duration: f64 },
    TimeUpdate { position: f64 },
    Ended,
    Failed(FailureSignal),
}
