//! Turn module — one utterance in, one immutable result out.
//!
//! * [`TurnProcessor`] — orchestrates oracle query + dual TTS synthesis.
//! * [`TurnResult`] / [`TurnOutcome`] — the atomic per-turn unit.
//! * [`MistakeRecord`] — the exportable correction tuple.

pub mod processor;
pub mod result;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use processor::TurnProcessor;
pub use result::{render_block, MistakeRecord, TurnOutcome, TurnResult};
