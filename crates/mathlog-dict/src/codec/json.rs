//! JSON codec for dictionaries.
//!
//! The interchange shape is a nested object with exactly two fields per
//! level: `"idents"` (name → symbol) and `"modules"` (name → nested
//! dictionary of the same shape). Both fields are required at every level,
//! even when empty — a missing field is a decode error, not a default.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use thiserror::Error;

use crate::dictionary::Dictionary;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// A tree level, or one of its two fields, is not a JSON object.
    #[error("NOT_AN_OBJECT: {0}")]
    NotAnObject(&'static str),
    /// A required field is absent from a tree level.
    #[error("MISSING_FIELD: {0}")]
    MissingField(&'static str),
    /// An ident entry maps to something other than a string.
    #[error("NOT_A_STRING: {0}")]
    NotAString(String),
}

/// Serialize a dictionary to a `serde_json::Value` in the interchange shape.
///
/// Map entries are emitted in insertion order.
pub fn to_json(dict: &Dictionary) -> Value {
    let mut idents = Map::new();
    for (name, symbol) in &dict.idents {
        idents.insert(name.clone(), Value::String(symbol.clone()));
    }
    let mut modules = Map::new();
    for (name, sub) in &dict.modules {
        modules.insert(name.clone(), to_json(sub));
    }
    let mut level = Map::new();
    level.insert("idents".to_string(), Value::Object(idents));
    level.insert("modules".to_string(), Value::Object(modules));
    Value::Object(level)
}

/// Reconstruct a dictionary from a `serde_json::Value`.
///
/// Fails on the first missing `"idents"`/`"modules"` field, non-object
/// level, or non-string symbol; nothing of the tree survives a failure.
pub fn from_json(v: &Value) -> Result<Dictionary, DecodeError> {
    let level = v.as_object().ok_or(DecodeError::NotAnObject("dictionary"))?;
    let idents = level
        .get("idents")
        .ok_or(DecodeError::MissingField("idents"))?
        .as_object()
        .ok_or(DecodeError::NotAnObject("idents"))?;
    let modules = level
        .get("modules")
        .ok_or(DecodeError::MissingField("modules"))?
        .as_object()
        .ok_or(DecodeError::NotAnObject("modules"))?;

    let mut dict = Dictionary::new();
    for (name, symbol) in idents {
        let symbol = symbol
            .as_str()
            .ok_or_else(|| DecodeError::NotAString(name.clone()))?;
        dict.idents.insert(name.clone(), symbol.to_string());
    }
    for (name, sub) in modules {
        dict.modules.insert(name.clone(), from_json(sub)?);
    }
    Ok(dict)
}

/// Render a dictionary as the on-disk JSON document.
///
/// Four-space indentation, keys in insertion order, non-ASCII symbols
/// written literally. The output parses back through [`from_json`].
pub fn to_json_string(dict: &Dictionary) -> Result<String, serde_json::Error> {
    let value = to_json(dict);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}
