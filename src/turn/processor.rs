//! Turn processor — orchestrates one utterance through oracle and TTS.
//!
//! # Pipeline flow
//!
//! ```text
//! process(utterance, api_key)
//!   └─▶ oracle.query(utterance, api_key)
//!         ├─ Err → TurnResult::Failed { cause }      (no synthesis)
//!         └─ Ok  → tokio::join!(
//!                      tts.synthesize(reply),
//!                      tts.synthesize(correction),
//!                  )
//!                  → render block + MistakeRecord
//!                  → TurnResult::Success
//! ```
//!
//! The processor is stateless: every per-call input (utterance, credential)
//! arrives as an argument, and the caller owns both the empty-input
//! precondition and the one-turn-in-flight discipline. `process` always
//! returns exactly one [`TurnResult`] — failures are values, never panics.

use std::sync::Arc;

use crate::oracle::OracleClient;
use crate::tts::SpeechSynthesizer;

use super::result::{render_block, MistakeRecord, TurnOutcome, TurnResult};

// ---------------------------------------------------------------------------
// TurnProcessor
// ---------------------------------------------------------------------------

/// Drives one user turn: oracle query, then two independent synthesis
/// attempts, joined into a single immutable [`TurnResult`].
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use english_coach::config::{OracleConfig, TtsConfig};
/// use english_coach::oracle::GeminiClient;
/// use english_coach::tts::GoogleTranslateTts;
/// use english_coach::turn::TurnProcessor;
///
/// # async fn example() {
/// let processor = TurnProcessor::new(
///     Arc::new(GeminiClient::from_config(&OracleConfig::default())),
///     Arc::new(GoogleTranslateTts::from_config(&TtsConfig::default())),
/// );
/// let result = processor.process("我想要 book 一個 table", "my-api-key").await;
/// println!("{}", result.is_success());
/// # }
/// ```
pub struct TurnProcessor {
    oracle: Arc<dyn OracleClient>,
    tts: Arc<dyn SpeechSynthesizer>,
}

impl TurnProcessor {
    /// Create a processor over the given oracle and synthesizer backends.
    pub fn new(oracle: Arc<dyn OracleClient>, tts: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { oracle, tts }
    }

    /// Process one non-empty utterance into a [`TurnResult`].
    ///
    /// Exactly one oracle request is made; on success, `reply` and
    /// `correction` are synthesized concurrently, and a failure (or empty
    /// input) on either side simply leaves that artifact absent. The
    /// result is returned unconditionally so the caller always has a value
    /// to append to the session ledger.
    pub async fn process(&self, utterance: &str, api_key: &str) -> TurnResult {
        let reply = match self.oracle.query(utterance, api_key).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("turn: oracle query failed: {e}");
                return TurnResult {
                    utterance: utterance.to_string(),
                    outcome: TurnOutcome::Failed {
                        cause: e.to_string(),
                    },
                };
            }
        };

        log::debug!("turn: oracle reply = {reply:?}");

        // The two synthesis attempts are independent; neither failure domain
        // touches the other, and both resolve before the result is built.
        let (audio_reply, audio_correction) = tokio::join!(
            self.tts.synthesize(&reply.reply),
            self.tts.synthesize(&reply.correction),
        );

        let rendered = render_block(&reply);
        let mistake = MistakeRecord::derive(utterance, &reply);

        TurnResult {
            utterance: utterance.to_string(),
            outcome: TurnOutcome::Success {
                reply,
                audio_reply,
                audio_correction,
                rendered,
                mistake,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
