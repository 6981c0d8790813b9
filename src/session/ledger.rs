//! Append-only session ledger.
//!
//! The ledger is the only state that survives across turns within one
//! session: the ordered conversation history plus the parallel mistake log
//! derived from successful turns. Both sequences are append-only and
//! insertion-ordered; nothing is ever removed, reordered or deduplicated.
//! The ledger is a plain owned value — the caller upholds the sequential
//! one-turn-in-flight discipline, so no locking lives here.

use crate::turn::{MistakeRecord, TurnResult};

// ---------------------------------------------------------------------------
// SessionLedger
// ---------------------------------------------------------------------------

/// Process-lifetime record of all turns in one session.
///
/// # Example
/// ```rust
/// use english_coach::session::SessionLedger;
/// use english_coach::turn::{TurnOutcome, TurnResult};
///
/// let mut ledger = SessionLedger::new();
/// ledger.append(TurnResult {
///     utterance: "hi".into(),
///     outcome: TurnOutcome::Failed { cause: "timeout".into() },
/// });
/// assert_eq!(ledger.history().len(), 1);
/// assert_eq!(ledger.mistakes().len(), 0);
/// ```
#[derive(Debug, Default)]
pub struct SessionLedger {
    history: Vec<TurnResult>,
    mistakes: Vec<MistakeRecord>,
}

impl SessionLedger {
    /// Create an empty ledger for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn result — the sole mutator.
    ///
    /// A successful result extends both the history and the mistake log in
    /// this single call; a failed result extends the history only (so the
    /// error stays visible in the conversation) and leaves the mistake log
    /// untouched.
    pub fn append(&mut self, result: TurnResult) {
        if let Some(mistake) = result.mistake() {
            self.mistakes.push(mistake.clone());
        }
        self.history.push(result);
    }

    /// All turns so far, in submission order.
    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    /// All mistake records so far, in submission order among successes.
    pub fn mistakes(&self) -> &[MistakeRecord] {
        &self.mistakes
    }

    /// True when no turn has been processed yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::CoachReply;
    use crate::turn::{render_block, TurnOutcome};

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn success(utterance: &str, correction: &str) -> TurnResult {
        let reply = CoachReply {
            correction: correction.into(),
            explanation: "說明".into(),
            reply: "Got it!".into(),
            reply_zh: "知道了！".into(),
        };
        let mistake = MistakeRecord::derive(utterance, &reply);
        let rendered = render_block(&reply);

        TurnResult {
            utterance: utterance.into(),
            outcome: TurnOutcome::Success {
                reply,
                audio_reply: None,
                audio_correction: None,
                rendered,
                mistake,
            },
        }
    }

    fn failure(utterance: &str) -> TurnResult {
        TurnResult {
            utterance: utterance.into(),
            outcome: TurnOutcome::Failed {
                cause: "oracle request timed out".into(),
            },
        }
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[test]
    fn new_ledger_is_empty() {
        let ledger = SessionLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.history().is_empty());
        assert!(ledger.mistakes().is_empty());
    }

    /// Scenario D — two successes extend both sequences in the same order.
    #[test]
    fn two_successes_extend_both_sequences_in_order() {
        let mut ledger = SessionLedger::new();
        ledger.append(success("第一句", "First sentence."));
        ledger.append(success("第二句", "Second sentence."));

        assert_eq!(ledger.history().len(), 2);
        assert_eq!(ledger.mistakes().len(), 2);
        assert_eq!(ledger.history()[0].utterance, "第一句");
        assert_eq!(ledger.history()[1].utterance, "第二句");
        assert_eq!(ledger.mistakes()[0].correction, "First sentence.");
        assert_eq!(ledger.mistakes()[1].correction, "Second sentence.");
    }

    /// Scenario B — a failure extends the history but never the mistake log.
    #[test]
    fn failure_extends_history_only() {
        let mut ledger = SessionLedger::new();
        ledger.append(failure("打不通"));

        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.mistakes().len(), 0);
    }

    /// Mixed appends keep the relative order among successes.
    #[test]
    fn mixed_appends_preserve_relative_order() {
        let mut ledger = SessionLedger::new();
        ledger.append(success("一", "One."));
        ledger.append(failure("二"));
        ledger.append(success("三", "Three."));
        ledger.append(failure("四"));

        assert_eq!(ledger.history().len(), 4);
        assert_eq!(ledger.mistakes().len(), 2);
        assert_eq!(ledger.mistakes()[0].original, "一");
        assert_eq!(ledger.mistakes()[1].original, "三");
        // History keeps everything in submission order.
        let utterances: Vec<_> = ledger.history().iter().map(|t| t.utterance.as_str()).collect();
        assert_eq!(utterances, ["一", "二", "三", "四"]);
    }

    /// N appends always yield history of length N.
    #[test]
    fn append_count_matches_history_length() {
        let mut ledger = SessionLedger::new();
        for i in 0..10 {
            if i % 3 == 0 {
                ledger.append(failure("x"));
            } else {
                ledger.append(success("y", "Y."));
            }
        }
        assert_eq!(ledger.history().len(), 10);
        assert_eq!(ledger.mistakes().len(), 6);
    }
}
