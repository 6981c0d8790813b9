//! Structured reply schema returned by the coaching oracle.
//!
//! The oracle is asked for a JSON object with exactly four string fields.
//! Missing fields are normalized to the empty string on deserialization —
//! a partially-filled reply must still render, so absence is never fatal
//! here. Structurally broken payloads (not a JSON object at all) are a
//! parse failure at the client layer instead.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CoachReply
// ---------------------------------------------------------------------------

/// One structured coaching reply: corrected sentence, explanation, roleplay
/// response and its Chinese translation.
///
/// Immutable after creation; plain data with no behaviour beyond parsing.
///
/// # Example
/// ```rust
/// use english_coach::oracle::CoachReply;
///
/// let reply = CoachReply::from_json(r#"{"correction": "I would like a table."}"#).unwrap();
/// assert_eq!(reply.correction, "I would like a table.");
/// assert_eq!(reply.explanation, ""); // missing key → empty string
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachReply {
    /// The user's sentence rewritten as natural English.
    #[serde(default)]
    pub correction: String,
    /// Why the correction was made, in Traditional Chinese.
    #[serde(default)]
    pub explanation: String,
    /// The coach's roleplay response, in English.
    #[serde(default)]
    pub reply: String,
    /// Chinese translation of `reply`.
    #[serde(default)]
    pub reply_zh: String,
}

impl CoachReply {
    /// Parse a reply from the JSON text the oracle returned.
    ///
    /// Missing keys default to `""`; extra keys are ignored. Returns `Err`
    /// only when `text` is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// True when every field is empty — the oracle answered with an empty
    /// object or all-blank values.
    pub fn is_empty(&self) -> bool {
        self.correction.is_empty()
            && self.explanation.is_empty()
            && self.reply.is_empty()
            && self.reply_zh.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
