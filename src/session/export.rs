//! CSV export of the mistake log.
//!
//! Output is UTF-8 prefixed with a BOM so Chinese text opens cleanly in
//! common spreadsheet tools (the `utf-8-sig` convention), with RFC-4180
//! quoting. Column headers are the user-facing Chinese labels; rows appear
//! in ledger order with every field carried verbatim.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::turn::MistakeRecord;

/// UTF-8 byte-order mark, prepended so spreadsheet tools detect encoding.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Header row — the original column names of the practice notebook.
const HEADER: &str = "原句,修正,解析,AI回應";

// ---------------------------------------------------------------------------
// CSV encoding
// ---------------------------------------------------------------------------

/// Quote one CSV field per RFC 4180: fields containing a comma, quote, CR
/// or LF are wrapped in quotes with inner quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Encode the mistake log as CSV bytes (BOM + header + one row per record).
pub fn to_csv(records: &[MistakeRecord]) -> Vec<u8> {
    let mut out = String::with_capacity(records.len() * 128 + 64);
    out.push_str(HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&escape_field(&record.original));
        out.push(',');
        out.push_str(&escape_field(&record.correction));
        out.push(',');
        out.push_str(&escape_field(&record.explanation));
        out.push(',');
        out.push_str(&escape_field(&record.reply));
        out.push('\n');
    }

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + out.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(out.as_bytes());
    bytes
}

/// Date-stamped export filename, so repeated exports on different days stay
/// distinguishable.
pub fn export_filename(date: NaiveDate) -> String {
    format!("english-mistakes-{}.csv", date.format("%Y-%m-%d"))
}

/// Write the mistake log to `path`.
pub fn write_csv_file(records: &[MistakeRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating export directory {}", parent.display()))?;
    }
    std::fs::write(path, to_csv(records))
        .with_context(|| format!("writing export file {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
