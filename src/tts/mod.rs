//! Text-to-speech module.
//!
//! * [`SpeechSynthesizer`] — async trait implemented by TTS backends.
//! * [`GoogleTranslateTts`] — the Google Translate TTS endpoint (English).
//! * [`AudioArtifact`] — an in-memory MP3 buffer plus its source text.
//! * [`AudioPlayer`] — rodio-based playback that no-ops on headless hosts.

pub mod playback;
pub mod synthesizer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use playback::AudioPlayer;
pub use synthesizer::{AudioArtifact, GoogleTranslateTts, SpeechSynthesizer};
