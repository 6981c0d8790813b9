//! Fixed system instruction for the coaching oracle.
//!
//! The persona and the output contract live here, not inline in the HTTP
//! client, so the client stays a pure transport concern. The instruction
//! tells the model to read mixed Chinese/English input and answer with a
//! JSON object carrying exactly the four [`CoachReply`](crate::oracle::CoachReply)
//! fields.

/// System instruction sent with every oracle request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an enthusiastic English conversation coach.
User speaks mixed Chinese/English.
Output JSON:
{
    \"correction\": \"Correct English sentence\",
    \"explanation\": \"Explanation in Traditional Chinese\",
    \"reply\": \"Roleplay response in English\",
    \"reply_zh\": \"Chinese translation of reply\"
}";

/// Build the `generateContent` request body for one utterance.
///
/// The body pins the decoding configuration the coach relies on:
/// JSON-mode output (`response_mime_type`) and a fixed `temperature`.
pub fn build_request_body(utterance: &str, temperature: f32) -> serde_json::Value {
    serde_json::json!({
        "system_instruction": {
            "parts": [ { "text": SYSTEM_INSTRUCTION } ]
        },
        "contents": [
            {
                "role": "user",
                "parts": [ { "text": utterance } ]
            }
        ],
        "generationConfig": {
            "response_mime_type": "application/json",
            "temperature": temperature
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_names_all_four_fields() {
        for field in ["correction", "explanation", "reply", "reply_zh"] {
            assert!(
                SYSTEM_INSTRUCTION.contains(field),
                "system instruction must name the {field} field"
            );
        }
    }

    #[test]
    fn instruction_sets_the_coach_persona() {
        assert!(SYSTEM_INSTRUCTION.contains("English conversation coach"));
        assert!(SYSTEM_INSTRUCTION.contains("mixed Chinese/English"));
    }

    #[test]
    fn body_carries_utterance_and_decoding_config() {
        let body = build_request_body("我想要 book 一個 table", 0.7);

        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "我想要 book 一個 table"
        );
        assert_eq!(
            body["generationConfig"]["response_mime_type"],
            "application/json"
        );
        let temp = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 1e-6);
    }

    #[test]
    fn body_embeds_the_system_instruction() {
        let body = build_request_body("hi", 0.7);
        let text = body["system_instruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert_eq!(text, SYSTEM_INSTRUCTION);
    }
}
