//! Session module — per-session state and its export surface.
//!
//! * [`SessionLedger`] — append-only conversation history + mistake log.
//! * [`export`] — BOM-prefixed CSV encoding with a date-stamped filename.

pub mod export;
pub mod ledger;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use export::{export_filename, to_csv, write_csv_file};
pub use ledger::SessionLedger;
