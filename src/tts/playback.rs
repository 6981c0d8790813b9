//! In-memory MP3 playback via rodio.
//!
//! [`AudioPlayer`] owns a `rodio::Sink` and decodes [`AudioArtifact`]
//! buffers straight from a cursor — no temp files. Construction failure
//! (no output device, headless CI) degrades to a silent no-op player so
//! the text side of the conversation keeps working.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::tts::AudioArtifact;

// ---------------------------------------------------------------------------
// AudioPlayer
// ---------------------------------------------------------------------------

/// Plays synthesized speech on the default output device.
pub struct AudioPlayer {
    // Both handles must stay alive for the sink to keep producing sound.
    inner: Option<(OutputStream, OutputStreamHandle, Sink)>,
}

impl AudioPlayer {
    /// Open the default output device.
    ///
    /// When no device is available the player is created in no-op mode and
    /// every call to [`play`](Self::play) silently does nothing.
    pub fn new() -> Self {
        let inner = match OutputStream::try_default() {
            Ok((stream, handle)) => match Sink::try_new(&handle) {
                Ok(sink) => Some((stream, handle, sink)),
                Err(e) => {
                    log::warn!("playback: no sink available, audio disabled: {e}");
                    None
                }
            },
            Err(e) => {
                log::warn!("playback: no output device, audio disabled: {e}");
                None
            }
        };

        Self { inner }
    }

    /// True when a real output device was opened.
    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    /// Queue an artifact's MP3 bytes for playback and block until finished.
    ///
    /// Decode failures are logged and swallowed; a corrupt buffer never
    /// interrupts the conversation.
    pub fn play(&self, artifact: &AudioArtifact) {
        let Some((_, _, sink)) = &self.inner else {
            return;
        };

        match Decoder::new(Cursor::new(artifact.mp3.clone())) {
            Ok(source) => {
                sink.append(source);
                sink.sleep_until_end();
            }
            Err(e) => {
                log::warn!("playback: could not decode audio buffer: {e}");
            }
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
