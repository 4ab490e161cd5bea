//! `dict-cli` — core logic behind the `make-dictionary` binary.
//!
//! Builds the merged dictionary document: parse the symbol table (or an
//! already-built tree), overlay the patch tree, and render the result as the
//! JSON document the converter loads at startup.

use serde_json::Value;

use crate::codec::json::{from_json, to_json_string, DecodeError};
use crate::codec::table::{from_table, TableError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Table(TableError),
    Decode(DecodeError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Table(e) => write!(f, "{e}"),
            CliError::Decode(e) => write!(f, "{e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<TableError> for CliError {
    fn from(e: TableError) -> Self {
        CliError::Table(e)
    }
}

impl From<DecodeError> for CliError {
    fn from(e: DecodeError) -> Self {
        CliError::Decode(e)
    }
}

// ── make-dictionary ───────────────────────────────────────────────────────

/// Build the merged dictionary document from a symbol table.
///
/// `table_text`: the flat four-line-per-record symbol table.
/// `patch_json`: a dictionary tree in the interchange format, overlaid on
/// top of the table entries (patch wins on collision).
///
/// Returns the merged dictionary as a pretty-printed JSON string.
pub fn build_dictionary(table_text: &str, patch_json: &str) -> Result<String, CliError> {
    let mut dict = from_table(table_text)?;
    let patch_value: Value = serde_json::from_str(patch_json)?;
    let patch = from_json(&patch_value)?;
    dict.patch(&patch);
    Ok(to_json_string(&dict)?)
}

/// Build the merged dictionary document from an already-built tree.
///
/// Same as [`build_dictionary`], but the base is a dictionary document in
/// the interchange format instead of a symbol table.
pub fn patch_dictionary(base_json: &str, patch_json: &str) -> Result<String, CliError> {
    let base_value: Value = serde_json::from_str(base_json)?;
    let mut dict = from_json(&base_value)?;
    let patch_value: Value = serde_json::from_str(patch_json)?;
    let patch = from_json(&patch_value)?;
    dict.patch(&patch);
    Ok(to_json_string(&dict)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
