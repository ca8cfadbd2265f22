//! Found-word collection
//!
//! Insertion-ordered, duplicate-suppressed set of the words the user has
//! already discovered in the external game. Words are normalized to ASCII
//! uppercase on the way in.
//!
//! There are two ingestion paths on purpose: bulk entry filters against the
//! puzzle alphabet (out-of-alphabet lines are dropped without comment), while
//! single-word entry does not, acting as a manual override. The override only
//! holds until the next bulk pass, which re-filters the whole set.

use crate::core::Alphabet;
use rustc_hash::FxHashSet;

/// Ordered set of discovered words, uppercase, duplicates suppressed
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl FoundWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from previously saved words, re-applying normalization
    #[must_use]
    pub fn from_saved<I, S>(saved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found = Self::new();
        for word in saved {
            found.insert(word.as_ref());
        }
        found
    }

    /// Add a single word, unfiltered
    ///
    /// Trims and uppercases; empty input and duplicates are no-ops. This is
    /// the manual-override path: the word is NOT checked against the puzzle
    /// alphabet.
    ///
    /// Returns true when the word was actually added.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Bulk entry: add every line that the alphabet can spell
    ///
    /// Lines are trimmed; empties, duplicates, and words containing any
    /// character outside `alphabet` are silently dropped. Returns the number
    /// of words added.
    pub fn extend_filtered<'a, I>(&mut self, lines: I, alphabet: &Alphabet) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = 0;
        for line in lines {
            let word = line.trim();
            if word.is_empty() || !alphabet.spells(word) {
                continue;
            }
            if self.insert(word) {
                added += 1;
            }
        }
        added
    }

    /// Drop every word the alphabet cannot spell
    ///
    /// Bulk ingestion runs this over the whole set, not just the new lines,
    /// so a word force-added through [`FoundWords::insert`] survives only
    /// until the next bulk paste. Order of the survivors is unchanged.
    /// Returns the number of words removed.
    pub fn retain_spelled(&mut self, alphabet: &Alphabet) -> usize {
        let before = self.words.len();
        self.words.retain(|word| alphabet.spells(word));
        if self.words.len() != before {
            self.index = self.words.iter().cloned().collect();
        }
        before - self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_ascii_uppercase())
    }

    /// Words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Snapshot for persistence
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.words.clone()
    }
}

impl<'a> IntoIterator for &'a FoundWords {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::from_tokens(["m", "o", "t", "h", "e", "r", "x"])
    }

    #[test]
    fn insert_normalizes_and_dedupes() {
        let mut found = FoundWords::new();
        assert!(found.insert("mother"));
        assert!(!found.insert("MOTHER"));
        assert!(!found.insert("  mother  "));
        assert_eq!(found.len(), 1);
        assert!(found.contains("Mother"));
    }

    #[test]
    fn insert_rejects_empty() {
        let mut found = FoundWords::new();
        assert!(!found.insert(""));
        assert!(!found.insert("   "));
        assert!(found.is_empty());
    }

    #[test]
    fn insert_is_unfiltered_manual_override() {
        // The single-word path accepts words outside the alphabet on purpose.
        let mut found = FoundWords::new();
        assert!(found.insert("zigzag"));
        assert!(found.contains("ZIGZAG"));
    }

    #[test]
    fn bulk_drops_out_of_alphabet_words() {
        let mut found = FoundWords::new();
        let added = found.extend_filtered(["moth", "zebra", "term", "home"], &alphabet());
        assert_eq!(added, 3);
        assert!(!found.contains("zebra"));
    }

    #[test]
    fn bulk_double_submit_keeps_one_occurrence() {
        let mut found = FoundWords::new();
        found.extend_filtered(["moth", "moth"], &alphabet());
        found.extend_filtered(["moth"], &alphabet());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn bulk_trims_and_skips_blanks() {
        let mut found = FoundWords::new();
        let added = found.extend_filtered(["  moth ", "", "   ", "rote"], &alphabet());
        assert_eq!(added, 2);
        assert_eq!(found.iter().collect::<Vec<_>>(), vec!["MOTH", "ROTE"]);
    }

    #[test]
    fn retain_spelled_purges_and_keeps_order() {
        let mut found = FoundWords::new();
        found.insert("moth");
        found.insert("zebra");
        found.insert("rote");

        assert_eq!(found.retain_spelled(&alphabet()), 1);
        assert_eq!(found.iter().collect::<Vec<_>>(), vec!["MOTH", "ROTE"]);
        assert!(!found.contains("zebra"));

        // Nothing left to purge on a second pass.
        assert_eq!(found.retain_spelled(&alphabet()), 0);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut found = FoundWords::new();
        found.insert("rote");
        found.insert("moth");
        found.insert("home");
        assert_eq!(
            found.iter().collect::<Vec<_>>(),
            vec!["ROTE", "MOTH", "HOME"]
        );
    }

    #[test]
    fn from_saved_round_trips() {
        let mut found = FoundWords::new();
        found.insert("moth");
        found.insert("home");
        let restored = FoundWords::from_saved(found.to_vec());
        assert_eq!(restored.iter().collect::<Vec<_>>(), vec!["MOTH", "HOME"]);
    }
}
