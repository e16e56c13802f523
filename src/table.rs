//! Grapheme correspondence tables.
//!
//! Mapping data arrives as rows of `(source, romanization hint, target)`,
//! grouped by linguistic [`Role`]. A [`MappingTable`] keeps insertion order
//! and unique keys: inserting an existing key rewrites its value in place,
//! so later-loaded rows supplement or override earlier ones.
//!
//! Inversion walks the entries in insertion order, so when several sources
//! share one target the *last* source wins. Linguistically wrong winners are
//! corrected afterwards with [`MappingTable::apply_overrides`].
use crate::stage::normalization::nfc;
use std::collections::HashMap;
use thiserror::Error;

/// One positional row of mapping data: source form, romanization hint
/// (informational only), target form.
pub type Row = (&'static str, &'static str, &'static str);

/// A forced `(target, source)` entry for a reverse table.
pub type Override = (&'static str, &'static str);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("row {index} of {role:?} table has an empty source form")]
    EmptySource { role: Role, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Consonant,
    VowelInitial,
    VowelMedial,
    VowelFinal,
    Numeral,
    Punctuation,
    DiacriticCombo,
    IsolatedWord,
    Misc,
}

impl Role {
    #[inline(always)]
    const fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rows positionally. Surrounding whitespace is trimmed from both
    /// forms; the hint column is ignored.
    pub fn from_rows(role: Role, rows: &[Row]) -> Result<Self, TableError> {
        let mut table = Self::new();
        table.load_rows(role, rows)?;
        Ok(table)
    }

    /// Both forms are stored in NFC so keys line up with normalized input.
    pub fn load_rows(&mut self, role: Role, rows: &[Row]) -> Result<(), TableError> {
        for (index, &(source, _hint, target)) in rows.iter().enumerate() {
            let source = source.trim();
            if source.is_empty() {
                return Err(TableError::EmptySource { role, index });
            }
            self.insert(nfc(source).into_owned(), nfc(target.trim()).into_owned());
        }
        Ok(())
    }

    /// Insert or override. Returns the previous target for `source`.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) -> Option<String> {
        let source = source.into();
        let target = target.into();
        match self.index.get(&source) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, target)),
            None => {
                self.index.insert(source.clone(), self.entries.len());
                self.entries.push((source, target));
                None
            }
        }
    }

    pub fn extend_from(&mut self, other: &MappingTable) {
        for (source, target) in other.iter() {
            self.insert(source, target);
        }
    }

    #[inline]
    pub fn get(&self, source: &str) -> Option<&str> {
        self.index.get(source).map(|&slot| self.entries[slot].1.as_str())
    }

    #[inline]
    pub fn contains(&self, source: &str) -> bool {
        self.index.contains_key(source)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    /// Entries ordered by descending key length (in chars); ties keep
    /// insertion order.
    pub fn sorted_by_descending_key_length(&self) -> Vec<(&str, &str)> {
        let mut sorted: Vec<(&str, &str)> = self.iter().collect();
        sorted.sort_by_key(|(k, _)| std::cmp::Reverse(k.chars().count()));
        sorted
    }

    /// Target → source. Empty targets cannot be matched and are skipped;
    /// for shared targets the last inserted source wins.
    pub fn inverted(&self) -> MappingTable {
        let mut reverse = MappingTable::new();
        for (source, target) in self.iter() {
            if target.is_empty() {
                continue;
            }
            reverse.insert(target, source);
        }
        reverse
    }

    /// Force specific entries. Returns how many entries changed.
    pub fn apply_overrides(&mut self, overrides: &[(&str, &str)]) -> usize {
        let mut changed = 0;
        for &(key, value) in overrides {
            if self.get(key) != Some(value) {
                self.insert(key, value);
                changed += 1;
            }
        }
        changed
    }

    /// Like [`apply_overrides`](Self::apply_overrides), but only rewrites keys
    /// that are already present.
    pub fn rewrite_existing<K, V>(&mut self, overrides: &[(K, V)]) -> usize
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut changed = 0;
        for (key, value) in overrides {
            let (key, value) = (key.as_ref(), value.as_ref());
            match self.get(key) {
                Some(current) if current != value => {
                    self.insert(key, value);
                    changed += 1;
                }
                _ => {}
            }
        }
        changed
    }
}

/// Per-role dictionaries assembled from ordered row sources.
#[derive(Debug, Clone, Default)]
pub struct RoleTables {
    tables: [MappingTable; 9],
}

impl RoleTables {
    /// Load `(role, rows)` sources in order; a later source for the same role
    /// supplements and overrides the earlier ones.
    pub fn load(sources: &[(Role, &[Row])]) -> Result<Self, TableError> {
        let mut out = Self::default();
        for &(role, rows) in sources {
            out.tables[role.slot()].load_rows(role, rows)?;
        }
        Ok(out)
    }

    #[inline]
    pub fn get(&self, role: Role) -> &MappingTable {
        &self.tables[role.slot()]
    }

    pub fn total_len(&self) -> usize {
        self.tables.iter().map(MappingTable::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_rows_override_in_place() {
        let mut t = MappingTable::from_rows(Role::Consonant, &[("a", "", "1"), ("b", "", "2")]).unwrap();
        assert_eq!(t.insert("a", "9"), Some("1".to_owned()));
        assert_eq!(t.get("a"), Some("9"));
        let keys: Vec<_> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn rows_are_trimmed_and_hint_ignored() {
        let t = MappingTable::from_rows(Role::Numeral, &[(" ۱ ", "one", " १")]).unwrap();
        assert_eq!(t.get("۱"), Some("१"));
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = MappingTable::from_rows(Role::Misc, &[("x", "", "y"), ("  ", "", "z")]).unwrap_err();
        assert_eq!(err, TableError::EmptySource { role: Role::Misc, index: 1 });
    }

    #[test]
    fn inversion_keeps_last_source_then_overrides() {
        let mut t = MappingTable::new();
        t.insert("س", "स");
        t.insert("ث", "स");
        t.insert("ص", "स");
        t.insert("ن", "");
        let mut rev = t.inverted();
        assert_eq!(rev.get("स"), Some("ص"));
        assert!(!rev.contains(""));
        assert_eq!(rev.apply_overrides(&[("स", "س")]), 1);
        assert_eq!(rev.get("स"), Some("س"));
        assert_eq!(rev.apply_overrides(&[("स", "س")]), 0);
    }

    #[test]
    fn rewrite_existing_never_adds_keys() {
        let mut t = MappingTable::new();
        t.insert("ह", "ح");
        let overrides = [("ह", "ہ"), ("स", "س")];
        assert_eq!(t.rewrite_existing(&overrides), 1);
        assert_eq!(t.get("ह"), Some("ہ"));
        assert!(!t.contains("स"));
    }

    #[test]
    fn rows_are_stored_in_nfc() {
        // U+0958 is a composition exclusion and decomposes under NFC.
        let t = MappingTable::from_rows(Role::Consonant, &[("ق", "q", "\u{0958}")]).unwrap();
        assert_eq!(t.get("ق"), Some("\u{0915}\u{093C}"));
    }

    #[test]
    fn descending_length_order() {
        let mut t = MappingTable::new();
        t.insert("a", "Y");
        t.insert("abc", "Z");
        t.insert("ab", "X");
        let keys: Vec<_> = t.sorted_by_descending_key_length().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["abc", "ab", "a"]);
    }

    #[test]
    fn role_tables_supplement_per_role() {
        static BASE: &[Row] = &[("ک", "k", "क"), ("گ", "g", "ग")];
        static EXTRA: &[Row] = &[("ݨ", "ṇ", "ण"), ("گ", "g", "ग़")];
        let tables = RoleTables::load(&[(Role::Consonant, BASE), (Role::Consonant, EXTRA)]).unwrap();
        let c = tables.get(Role::Consonant);
        assert_eq!(c.len(), 3);
        assert_eq!(c.get("گ"), Some("ग़"));
        assert!(tables.get(Role::Numeral).is_empty());
        assert_eq!(tables.total_len(), 3);
    }
}
