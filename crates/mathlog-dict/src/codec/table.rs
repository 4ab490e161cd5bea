//! Flat-table codec — the four-line-per-record symbol table.
//!
//! Each record is four consecutive lines: dotted name, decimal code point,
//! the output symbol itself, and the typst command. Only the name and the
//! symbol feed the dictionary; the code point and command ride along on the
//! parsed record for tooling that wants them.

use thiserror::Error;

use crate::dictionary::{DictError, Dictionary};

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    /// The code-point line of a record is not a decimal integer.
    #[error("BAD_CODE_POINT: line {line}: {text:?}")]
    BadCodePoint { line: usize, text: String },
    #[error(transparent)]
    Dict(#[from] DictError),
}

/// One parsed table record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub code_point: u32,
    pub symbol: String,
    pub command: String,
}

/// Parse table text into records.
///
/// Lines are grouped into fours; a trailing group of fewer than four lines
/// is dropped without error. Every line is trimmed of surrounding
/// whitespace.
pub fn parse_records(text: &str) -> Result<Vec<Record>, TableError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut records = Vec::with_capacity(lines.len() / 4);
    for (i, chunk) in lines.chunks_exact(4).enumerate() {
        let raw = chunk[1].trim();
        let code_point = raw.parse::<u32>().map_err(|_| TableError::BadCodePoint {
            line: i * 4 + 2,
            text: raw.to_string(),
        })?;
        records.push(Record {
            name: chunk[0].trim().to_string(),
            code_point,
            symbol: chunk[2].trim().to_string(),
            command: chunk[3].trim().to_string(),
        });
    }
    Ok(records)
}

/// Build a dictionary from table text.
///
/// Each record's dotted name is split on `.` and its symbol inserted at that
/// path; a later record for the same name overwrites an earlier one.
pub fn from_table(text: &str) -> Result<Dictionary, TableError> {
    let mut dict = Dictionary::new();
    for record in parse_records(text)? {
        let path: Vec<&str> = record.name.split('.').collect();
        dict.insert(&path, &record.symbol)?;
    }
    Ok(dict)
}
