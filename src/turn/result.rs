//! Per-turn result types: [`TurnResult`], [`TurnOutcome`] and
//! [`MistakeRecord`].
//!
//! A `TurnResult` is the atomic unit produced once per user submission.
//! It is immutable after construction; the session ledger appends it as-is.

use crate::oracle::CoachReply;
use crate::tts::AudioArtifact;

// ---------------------------------------------------------------------------
// MistakeRecord
// ---------------------------------------------------------------------------

/// The exportable tuple derived from one successful turn: what the user
/// said, how it should have been said, why, and what the coach replied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MistakeRecord {
    /// The user's original mixed Chinese/English sentence.
    pub original: String,
    /// The corrected English sentence (may be empty).
    pub correction: String,
    /// Explanation of the correction, in Traditional Chinese.
    pub explanation: String,
    /// The coach's English roleplay reply.
    pub reply: String,
}

impl MistakeRecord {
    /// Derive a record from an utterance and the oracle's reply.
    pub fn derive(utterance: &str, reply: &CoachReply) -> Self {
        Self {
            original: utterance.to_string(),
            correction: reply.correction.clone(),
            explanation: reply.explanation.clone(),
            reply: reply.reply.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// TurnOutcome
// ---------------------------------------------------------------------------

/// What happened to one turn: a full coaching reply, or a typed failure
/// reduced to a display string.
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The oracle answered; audio is optional per field.
    Success {
        /// The validated structured reply.
        reply: CoachReply,
        /// Synthesized audio for `reply`, when available.
        audio_reply: Option<AudioArtifact>,
        /// Synthesized audio for `correction`, when available.
        audio_correction: Option<AudioArtifact>,
        /// Pre-rendered display block (fixed presentation order).
        rendered: String,
        /// The export-log entry derived from this turn.
        mistake: MistakeRecord,
    },
    /// The oracle call failed; only the cause is displayable.
    Failed {
        /// Human-readable cause for the UI.
        cause: String,
    },
}

// ---------------------------------------------------------------------------
// TurnResult
// ---------------------------------------------------------------------------

/// One user utterance and its complete processing result.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// The raw text the user submitted.
    pub utterance: String,
    /// Success or failure payload.
    pub outcome: TurnOutcome,
}

impl TurnResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Success { .. })
    }

    /// The mistake record, when this turn succeeded.
    pub fn mistake(&self) -> Option<&MistakeRecord> {
        match &self.outcome {
            TurnOutcome::Success { mistake, .. } => Some(mistake),
            TurnOutcome::Failed { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Build the display block for a successful turn.
///
/// Fixed presentation order: coach reply, its Chinese translation, then the
/// correction, then the explanation — the same order the user reads a chat
/// bubble in.
pub fn render_block(reply: &CoachReply) -> String {
    format!(
        "🤖 回應: {}\n   ({})\n✨ 修正: {}\n💡 點評: {}",
        reply.reply, reply.reply_zh, reply.correction, reply.explanation
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
