//! The nested symbol dictionary.
//!
//! One `Dictionary` value is one level of the dotted-name namespace: `idents`
//! maps leaf names to their output symbol, `modules` maps a namespace segment
//! to the nested dictionary for that segment. A name may appear in both maps
//! at once — `greek` can name an identifier and a module without conflict.
//!
//! Both maps keep insertion order so the serialized document diffs stably
//! between builds.

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DictError {
    #[error("EMPTY_PATH")]
    EmptyPath,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pub idents: IndexMap<String, String>,
    pub modules: IndexMap<String, Dictionary>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `symbol` at the dotted path `path`.
    ///
    /// A one-segment path writes straight into `idents`, overwriting any
    /// previous symbol for that name. Longer paths descend through `modules`,
    /// creating empty intermediate modules on demand.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::EmptyPath`] if `path` has no segments.
    pub fn insert(&mut self, path: &[&str], symbol: &str) -> Result<(), DictError> {
        let (head, rest) = path.split_first().ok_or(DictError::EmptyPath)?;
        if rest.is_empty() {
            self.idents.insert((*head).to_string(), symbol.to_string());
            Ok(())
        } else {
            self.modules
                .entry((*head).to_string())
                .or_insert_with(Dictionary::new)
                .insert(rest, symbol)
        }
    }

    /// Merge `source` into `self`, recursively, in place.
    ///
    /// Identifiers from `source` overwrite same-named entries here; modules
    /// present on both sides merge level by level, and modules missing here
    /// are created empty first. Entries present only on this side are never
    /// removed.
    ///
    /// # Example
    ///
    /// ```
    /// use mathlog_dict::Dictionary;
    ///
    /// let mut base = Dictionary::new();
    /// base.insert(&["greek", "alpha"], "a")?;
    ///
    /// let mut patch = Dictionary::new();
    /// patch.insert(&["greek", "alpha"], "α")?;
    /// patch.insert(&["greek", "beta"], "β")?;
    ///
    /// base.patch(&patch);
    /// assert_eq!(base.get(["greek", "alpha"]), Some("α"));
    /// assert_eq!(base.get(["greek", "beta"]), Some("β"));
    /// # Ok::<(), mathlog_dict::DictError>(())
    /// ```
    pub fn patch(&mut self, source: &Dictionary) {
        for (name, symbol) in &source.idents {
            self.idents.insert(name.clone(), symbol.clone());
        }
        for (name, sub) in &source.modules {
            self.modules
                .entry(name.clone())
                .or_insert_with(Dictionary::new)
                .patch(sub);
        }
    }

    /// Resolve a dotted path to its output symbol.
    ///
    /// All but the last segment walk `modules`; the final segment reads
    /// `idents`. Returns `None` wherever the walk falls off the tree.
    pub fn get<I>(&self, path: I) -> Option<&str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut path = path.into_iter();
        let mut dict = self;
        let mut name = path.next()?;
        for next in path {
            dict = dict.modules.get(name.as_ref())?;
            name = next;
        }
        dict.idents.get(name.as_ref()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_single_segment_writes_ident() {
        let mut d = Dictionary::new();
        d.insert(&["infinity"], "∞").unwrap();
        assert_eq!(d.idents["infinity"], "∞");
        assert!(d.modules.is_empty());
    }

    #[test]
    fn insert_nested_path_vivifies_modules() {
        let mut d = Dictionary::new();
        d.insert(&["a", "b", "c"], "X").unwrap();
        assert_eq!(d.modules["a"].modules["b"].idents["c"], "X");
    }

    #[test]
    fn insert_empty_path_is_rejected() {
        let mut d = Dictionary::new();
        assert_eq!(d.insert(&[], "X"), Err(DictError::EmptyPath));
        assert_eq!(d, Dictionary::new());
    }

    #[test]
    fn insert_last_write_wins() {
        let mut d = Dictionary::new();
        d.insert(&["greek", "alpha"], "a").unwrap();
        d.insert(&["greek", "alpha"], "α").unwrap();
        assert_eq!(d.get(["greek", "alpha"]), Some("α"));
    }

    #[test]
    fn name_can_be_both_ident_and_module() {
        let mut d = Dictionary::new();
        d.insert(&["greek"], "γ").unwrap();
        d.insert(&["greek", "alpha"], "α").unwrap();
        assert_eq!(d.get(["greek"]), Some("γ"));
        assert_eq!(d.get(["greek", "alpha"]), Some("α"));
    }

    #[test]
    fn get_misses_return_none() {
        let mut d = Dictionary::new();
        d.insert(&["greek", "alpha"], "α").unwrap();
        assert_eq!(d.get(["greek", "beta"]), None);
        assert_eq!(d.get(["latin", "a"]), None);
        // "greek" is a module, not an ident
        assert_eq!(d.get(["greek"]), None);
        assert_eq!(d.get(Vec::<&str>::new()), None);
    }

    #[test]
    fn patch_overwrites_ident() {
        let mut base = Dictionary::new();
        base.insert(&["x"], "1").unwrap();
        let mut patch = Dictionary::new();
        patch.insert(&["x"], "2").unwrap();

        base.patch(&patch);
        assert_eq!(base.idents["x"], "2");
    }

    #[test]
    fn patch_leaves_unmentioned_module_untouched() {
        let mut base = Dictionary::new();
        base.insert(&["m", "y"], "9").unwrap();
        let mut patch = Dictionary::new();
        patch.insert(&["other"], "0").unwrap();

        base.patch(&patch);
        assert_eq!(base.modules["m"].idents["y"], "9");
    }

    #[test]
    fn patch_deep_merges_shared_module() {
        let mut base = Dictionary::new();
        base.insert(&["m", "a"], "1").unwrap();
        let mut patch = Dictionary::new();
        patch.insert(&["m", "b"], "2").unwrap();

        base.patch(&patch);
        assert_eq!(base.modules["m"].idents["a"], "1");
        assert_eq!(base.modules["m"].idents["b"], "2");
        assert_eq!(base.modules["m"].idents.len(), 2);
    }

    #[test]
    fn patch_creates_missing_module() {
        let mut base = Dictionary::new();
        let mut patch = Dictionary::new();
        patch.insert(&["deep", "nested", "z"], "ζ").unwrap();

        base.patch(&patch);
        assert_eq!(base.get(["deep", "nested", "z"]), Some("ζ"));
    }

    #[test]
    fn patch_never_deletes() {
        let mut base = Dictionary::new();
        base.insert(&["keep"], "k").unwrap();
        base.insert(&["m", "keep"], "k").unwrap();

        base.patch(&Dictionary::new());
        assert_eq!(base.get(["keep"]), Some("k"));
        assert_eq!(base.get(["m", "keep"]), Some("k"));
    }
}
