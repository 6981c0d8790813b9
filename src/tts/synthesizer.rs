//! Core `SpeechSynthesizer` trait and `GoogleTranslateTts` implementation.
//!
//! Speech is a best-effort enhancement: the contract is `Option`, not
//! `Result`. Empty input short-circuits to `None` without touching the
//! network, and every transport failure degrades to `None` after a `warn`
//! log — the turn's text content must still render when audio is
//! unavailable.

use async_trait::async_trait;

use crate::config::TtsConfig;

// ---------------------------------------------------------------------------
// AudioArtifact
// ---------------------------------------------------------------------------

/// In-memory synthesized speech: the MP3 bytes plus the text they were
/// generated from. Never written to disk by the core; playback decodes the
/// buffer directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    /// The text that was synthesized.
    pub text: String,
    /// Complete MP3 audio, buffered and ready for playback.
    pub mp3: Vec<u8>,
}

impl AudioArtifact {
    pub fn new(text: impl Into<String>, mp3: Vec<u8>) -> Self {
        Self {
            text: text.into(),
            mp3,
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer trait
// ---------------------------------------------------------------------------

/// Async trait for text-to-speech backends.
///
/// The enumerated non-fatal outcomes (all map to `None`):
/// * empty / whitespace-only input — no request is made at all;
/// * transport or connection failure;
/// * request timeout;
/// * non-success HTTP status;
/// * empty response body.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Option<AudioArtifact>;
}

// ---------------------------------------------------------------------------
// GoogleTranslateTts
// ---------------------------------------------------------------------------

/// Calls the Google Translate TTS endpoint for English audio.
///
/// Connection details (`base_url`, `language`, `timeout_secs`) come from
/// the [`TtsConfig`] passed to [`GoogleTranslateTts::from_config`]. The
/// endpoint requires no credential. Each call issues at most one GET and
/// buffers the full MP3 body in memory; nothing is cached between calls.
pub struct GoogleTranslateTts {
    client: reqwest::Client,
    config: TtsConfig,
}

impl GoogleTranslateTts {
    /// Build a synthesizer from application config.
    pub fn from_config(config: &TtsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    async fn fetch(&self, text: &str) -> Result<Vec<u8>, reqwest::Error> {
        let url = format!("{}/translate_tts", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.config.language.as_str()),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(&self, text: &str) -> Option<AudioArtifact> {
        if text.trim().is_empty() {
            return None;
        }

        match self.fetch(text).await {
            Ok(mp3) if mp3.is_empty() => {
                log::warn!("tts: service returned an empty body (text len={})", text.len());
                None
            }
            Ok(mp3) => Some(AudioArtifact::new(text, mp3)),
            Err(e) => {
                log::warn!("tts: synthesis failed, turn continues without audio: {e}");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TtsConfig;

    #[test]
    fn from_config_builds_without_panic() {
        let _tts = GoogleTranslateTts::from_config(&TtsConfig::default());
    }

    /// Verify that `GoogleTranslateTts` is object-safe.
    #[test]
    fn synthesizer_is_object_safe() {
        let tts: Box<dyn SpeechSynthesizer> =
            Box::new(GoogleTranslateTts::from_config(&TtsConfig::default()));
        drop(tts);
    }

    #[tokio::test]
    async fn empty_text_returns_none_without_network() {
        // base_url is unroutable on purpose: if the implementation ever made
        // a request for empty input, this test would hang or error instead
        // of returning instantly.
        let config = TtsConfig {
            base_url: "http://192.0.2.1:1".into(),
            ..TtsConfig::default()
        };
        let tts = GoogleTranslateTts::from_config(&config);

        assert!(tts.synthesize("").await.is_none());
        assert!(tts.synthesize("   ").await.is_none());
        assert!(tts.synthesize("\n\t").await.is_none());
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_none() {
        // Connection to an invalid local port must fail fast and yield None.
        let config = TtsConfig {
            base_url: "http://127.0.0.1:1".into(),
            timeout_secs: 2,
            ..TtsConfig::default()
        };
        let tts = GoogleTranslateTts::from_config(&config);

        assert!(tts.synthesize("hello").await.is_none());
    }

    #[test]
    fn artifact_keeps_source_text_with_bytes() {
        let artifact = AudioArtifact::new("Sure!", vec![0xff, 0xf3]);
        assert_eq!(artifact.text, "Sure!");
        assert_eq!(artifact.mp3, vec![0xff, 0xf3]);
    }
}
