//! Oracle module — the external LLM the coach treats as an opaque judge.
//!
//! This module provides:
//! * [`OracleClient`] — async trait implemented by all oracle backends.
//! * [`GeminiClient`] — Gemini `generateContent` REST client (JSON mode).
//! * [`CoachReply`] — the four-field structured reply schema.
//! * [`OracleError`] — error variants for oracle operations.
//! * [`prompt`] — the fixed coach persona and request-body builder.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use english_coach::config::OracleConfig;
//! use english_coach::oracle::{GeminiClient, OracleClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = GeminiClient::from_config(&OracleConfig::default());
//!     let reply = client
//!         .query("我想要 book 一個 table", "my-api-key")
//!         .await
//!         .unwrap();
//!     println!("{}", reply.correction);
//! }
//! ```

pub mod client;
pub mod prompt;
pub mod schema;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{GeminiClient, OracleClient, OracleError};
pub use schema::CoachReply;
