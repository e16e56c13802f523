//! Bidirectional longest-match substitution.
//!
//! A [`Translator`] compiles one [`MappingTable`] into a scanner that replaces
//! every leftmost, non-overlapping occurrence of a key in a single pass. At
//! each position the longest key wins, so `"ab" → X` always beats `"a" → Y`.
//! Unmatched text is copied through untouched, and when nothing matches the
//! borrowed input is returned without allocating.
//!
//! The reverse direction is compiled from the inverted table, after any
//! overrides have been applied to it. Both directions are immutable once
//! built and can be shared freely between threads.
use crate::{
    table::MappingTable,
    unicode::{char_len, is_word_char},
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::HashSet;

/// Where a key may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Anywhere.
    Free,
    /// Only at the start of the text or right after a non-word character.
    Initial,
    /// Only at the end of the text or right before a non-word character.
    Final,
    /// Both anchors at once: the key must be a whole word.
    Isolated,
}

impl MatchMode {
    #[inline(always)]
    const fn anchors_start(self) -> bool {
        matches!(self, MatchMode::Initial | MatchMode::Isolated)
    }

    #[inline(always)]
    const fn anchors_end(self) -> bool {
        matches!(self, MatchMode::Final | MatchMode::Isolated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
struct Compiled {
    table: MappingTable,
    /// Distinct key lengths in chars, longest first.
    lengths: SmallVec<[usize; 8]>,
    first_chars: HashSet<char>,
}

impl Compiled {
    fn new(table: MappingTable) -> Self {
        let mut lengths: SmallVec<[usize; 8]> = SmallVec::new();
        let mut first_chars = HashSet::new();
        for (key, _) in table.sorted_by_descending_key_length() {
            let len = char_len(key);
            if len == 0 {
                continue;
            }
            if lengths.last() != Some(&len) {
                lengths.push(len);
            }
            if let Some(c) = key.chars().next() {
                first_chars.insert(c);
            }
        }
        Self {
            table,
            lengths,
            first_chars,
        }
    }

    #[inline]
    fn could_match(&self, text: &str) -> bool {
        !self.first_chars.is_empty() && text.chars().any(|c| self.first_chars.contains(&c))
    }

    fn substitute<'a>(&self, text: &'a str, mode: MatchMode) -> Cow<'a, str> {
        if !self.could_match(text) {
            return Cow::Borrowed(text);
        }

        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let n = chars.len();
        let byte_at = |i: usize| if i < n { chars[i].0 } else { text.len() };

        let mut out: Option<String> = None;
        let mut copied = 0;
        let mut i = 0;
        while i < n {
            let c = chars[i].1;
            if !self.first_chars.contains(&c)
                || (mode.anchors_start() && i > 0 && is_word_char(chars[i - 1].1))
            {
                i += 1;
                continue;
            }

            let mut hit = None;
            for &len in &self.lengths {
                let end = i + len;
                if end > n {
                    continue;
                }
                if mode.anchors_end() && end < n && is_word_char(chars[end].1) {
                    continue;
                }
                if let Some(target) = self.table.get(&text[byte_at(i)..byte_at(end)]) {
                    hit = Some((end, target));
                    break;
                }
            }

            match hit {
                Some((end, target)) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
                    buf.push_str(&text[copied..byte_at(i)]);
                    buf.push_str(target);
                    copied = byte_at(end);
                    i = end;
                }
                None => i += 1,
            }
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[copied..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    mode: MatchMode,
    forward: Compiled,
    backward: Option<Compiled>,
}

impl Translator {
    /// Compile `table` in both directions.
    pub fn new(table: MappingTable, mode: MatchMode) -> Self {
        Self::with_overrides(table, mode, &[])
    }

    /// Compile `table` in both directions, forcing `(target, source)` entries
    /// into the inverted table before it is frozen.
    pub fn with_overrides(table: MappingTable, mode: MatchMode, overrides: &[(&str, &str)]) -> Self {
        Self::build(table, mode, |reverse| {
            reverse.apply_overrides(overrides);
        })
    }

    /// Compile `table` in both directions, handing the freshly inverted table
    /// to `fix_reverse` once before it is frozen.
    pub fn build(table: MappingTable, mode: MatchMode, fix_reverse: impl FnOnce(&mut MappingTable)) -> Self {
        let mut reverse = table.inverted();
        fix_reverse(&mut reverse);
        Self {
            mode,
            forward: Compiled::new(table),
            backward: Some(Compiled::new(reverse)),
        }
    }

    /// Compile `table` without back-translation support.
    pub fn forward_only(table: MappingTable, mode: MatchMode) -> Self {
        Self {
            mode,
            forward: Compiled::new(table),
            backward: None,
        }
    }

    pub fn reverse_table(&self) -> Option<&MappingTable> {
        self.backward.as_ref().map(|c| &c.table)
    }

    #[inline]
    pub fn apply_forward<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.forward.substitute(text, self.mode)
    }

    /// Without back-translation support this is the identity.
    #[inline]
    pub fn apply_backward<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.backward {
            Some(compiled) => compiled.substitute(text, self.mode),
            None => Cow::Borrowed(text),
        }
    }

    #[inline]
    pub fn apply<'a>(&self, text: &'a str, direction: Direction) -> Cow<'a, str> {
        match direction {
            Direction::Forward => self.apply_forward(text),
            Direction::Backward => self.apply_backward(text),
        }
    }

    /// Cheap pre-check: can any key of this direction start inside `text`?
    #[inline]
    pub fn could_match(&self, text: &str, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward.could_match(text),
            Direction::Backward => self.backward.as_ref().is_some_and(|c| c.could_match(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> MappingTable {
        let mut t = MappingTable::new();
        for &(k, v) in pairs {
            t.insert(k, v);
        }
        t
    }

    #[test]
    fn longest_key_wins() {
        let tr = Translator::new(table(&[("a", "Y"), ("ab", "X")]), MatchMode::Free);
        assert_eq!(tr.apply_forward("ab"), "X");
        assert_eq!(tr.apply_forward("aab"), "YX");
        assert_eq!(tr.apply_forward("ba"), "bY");
    }

    #[test]
    fn non_overlapping_left_to_right() {
        let tr = Translator::new(table(&[("aa", "Z")]), MatchMode::Free);
        assert_eq!(tr.apply_forward("aaa"), "Za");
    }

    #[test]
    fn unmatched_text_is_borrowed() {
        let tr = Translator::new(table(&[("ک", "क")]), MatchMode::Free);
        let input = "hello 123";
        let out = tr.apply_forward(input);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn substitution_is_single_pass() {
        // Output of one key is never re-scanned by another.
        let tr = Translator::new(table(&[("a", "b"), ("b", "c")]), MatchMode::Free);
        assert_eq!(tr.apply_forward("ab"), "bc");
    }

    #[test]
    fn initial_anchor_does_not_fire_mid_word() {
        let tr = Translator::new(table(&[("ا", "अ")]), MatchMode::Initial);
        assert_eq!(tr.apply_forward("اب"), "अب");
        assert_eq!(tr.apply_forward("با"), "با");
        assert_eq!(tr.apply_forward("ب ا"), "ب अ");
        assert_eq!(tr.apply_forward("(ا"), "(अ");
    }

    #[test]
    fn combining_marks_are_not_boundaries() {
        // A vowel sign before the key keeps it inside the word.
        let tr = Translator::new(table(&[("ا", "अ")]), MatchMode::Initial);
        assert_eq!(tr.apply_forward("काا"), "काا");
        let tr = Translator::new(table(&[("ی", "ी")]), MatchMode::Final);
        assert_eq!(tr.apply_forward("یّ"), "یّ");
    }

    #[test]
    fn final_anchor_checks_after_the_match() {
        let tr = Translator::new(table(&[("ی", "ी"), ("یں", "ीं")]), MatchMode::Final);
        assert_eq!(tr.apply_forward("کی"), "کी");
        assert_eq!(tr.apply_forward("کیں"), "کीं");
        assert_eq!(tr.apply_forward("کیا"), "کیا");
        assert_eq!(tr.apply_forward("کی۔"), "کी۔");
    }

    #[test]
    fn final_anchor_falls_back_to_shorter_key() {
        // Only a key that ends on a boundary may fire.
        let tr = Translator::new(table(&[("ab", "X"), ("a", "Y")]), MatchMode::Final);
        assert_eq!(tr.apply_forward("ab"), "X");
        assert_eq!(tr.apply_forward("a b"), "Y b");
        assert_eq!(tr.apply_forward("abc"), "abc");
    }

    #[test]
    fn isolated_needs_whole_word() {
        let tr = Translator::new(table(&[("میں", "में")]), MatchMode::Isolated);
        assert_eq!(tr.apply_forward("میں"), "में");
        assert_eq!(tr.apply_forward("گھر میں ہے"), "گھر में ہے");
        assert_eq!(tr.apply_forward("میںنے"), "میںنے");
    }

    #[test]
    fn backward_uses_inverted_table() {
        let tr = Translator::with_overrides(
            table(&[("س", "स"), ("ص", "स"), ("ک", "क")]),
            MatchMode::Free,
            &[("स", "س")],
        );
        assert_eq!(tr.apply_backward("कस"), "کس");
        assert_eq!(tr.reverse_table().unwrap().get("स"), Some("س"));
    }

    #[test]
    fn forward_only_backward_is_identity() {
        let tr = Translator::forward_only(table(&[("इ", "अ")]), MatchMode::Initial);
        assert!(tr.reverse_table().is_none());
        assert_eq!(tr.apply_backward("अ"), "अ");
        assert!(!tr.could_match("अ", Direction::Backward));
        assert!(tr.could_match("इस", Direction::Forward));
    }

    #[test]
    fn empty_table_is_a_no_op() {
        let tr = Translator::new(MappingTable::new(), MatchMode::Free);
        assert_eq!(tr.apply_forward("anything"), "anything");
    }
}
