pub mod playback;
pub mod shared;
pub mod speech;
