//! AI English conversation coach — turn-processing pipeline.
//!
//! The user types a mixed Chinese/English sentence; the Gemini oracle
//! returns a structured correction/roleplay reply; the pipeline renders it
//! as text plus best-effort synthesized speech and accumulates an exportable
//! mistake log for the session.
//!
//! # Module map
//!
//! | Module      | Responsibility                                        |
//! |-------------|-------------------------------------------------------|
//! | [`oracle`]  | Gemini client + the four-field [`oracle::CoachReply`] |
//! | [`tts`]     | Speech synthesis, artifacts and playback              |
//! | [`turn`]    | Per-turn orchestration into a [`turn::TurnResult`]    |
//! | [`session`] | Append-only ledger + CSV export                       |
//! | [`config`]  | Settings (TOML) and platform paths                    |
//! | [`app`]     | Terminal REPL (thin presentation layer)               |

pub mod app;
pub mod config;
pub mod oracle;
pub mod session;
pub mod tts;
pub mod turn;
