//! Pangram detection over the found set

use crate::core::{Alphabet, FoundWords};

/// Found words that use every alphabet letter at least once
///
/// Returns a subsequence of `found`: order is preserved, nothing is added.
#[must_use]
pub fn find_pangrams<'a>(found: &'a FoundWords, alphabet: &Alphabet) -> Vec<&'a str> {
    found
        .iter()
        .filter(|word| alphabet.is_pangram(word))
        .collect()
}
