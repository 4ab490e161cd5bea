//! mathlog-dict — builds the symbol dictionary for the typst → mathlog converter.
//!
//! A dictionary is a nested namespace tree mapping dotted typst identifier
//! paths (`greek.alpha`) to the symbol the converter emits (`α`). The tree is
//! assembled from a flat four-line-per-record symbol table and/or an existing
//! JSON tree, a patch tree is merged on top (patch wins on collision), and the
//! merged result is rendered as a nested JSON document the converter loads at
//! startup — a document this crate can itself re-ingest.
//!
//! # Example
//!
//! ```
//! use mathlog_dict::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.insert(&["greek", "alpha"], "α")?;
//! dict.insert(&["infinity"], "∞")?;
//!
//! assert_eq!(dict.get(["greek", "alpha"]), Some("α"));
//! assert_eq!(dict.get(["infinity"]), Some("∞"));
//! # Ok::<(), mathlog_dict::DictError>(())
//! ```

pub mod codec;
pub mod dict_cli;
pub mod dictionary;

pub use dictionary::{DictError, Dictionary};
