//! Puzzle alphabet
//!
//! The ordered set of letters a puzzle is built from (typically 7). All letters
//! are stored uppercase; every comparison in the crate goes through this type,
//! so casing is normalized exactly once.

use rustc_hash::FxHashSet;
use std::fmt;

/// The ordered uppercase letter set of a single puzzle
///
/// Order follows first appearance in the source text. Membership checks are
/// case-insensitive because the query character is uppercased before lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    index: FxHashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from whitespace-ish tokens
    ///
    /// Only tokens that are a single ASCII letter are kept; anything else is
    /// dropped. Duplicate letters collapse to their first appearance.
    ///
    /// # Examples
    /// ```
    /// use beesolver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::from_tokens("m o t h e r x".split_whitespace());
    /// assert_eq!(alphabet.len(), 7);
    /// assert!(alphabet.contains('M'));
    /// assert!(alphabet.contains('x'));
    /// ```
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut letters = Vec::new();
        let mut index = FxHashSet::default();

        for token in tokens {
            let mut chars = token.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            if !ch.is_ascii_alphabetic() {
                continue;
            }
            let ch = ch.to_ascii_uppercase();
            if index.insert(ch) {
                letters.push(ch);
            }
        }

        Self { letters, index }
    }

    /// The letters in appearance order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Case-insensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains(&ch.to_ascii_uppercase())
    }

    /// Whether every character of `word` belongs to the alphabet
    ///
    /// An empty alphabet spells nothing; an empty word is trivially spelled.
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    /// Whether `word` uses every alphabet letter at least once
    ///
    /// # Examples
    /// ```
    /// use beesolver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::from_tokens(["a", "b", "c"]);
    /// assert!(alphabet.is_pangram("CABBA"));
    /// assert!(!alphabet.is_pangram("ABBA"));
    /// ```
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let seen: FxHashSet<char> = word.chars().map(|ch| ch.to_ascii_uppercase()).collect();
        self.letters.iter().all(|ch| seen.contains(ch))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
