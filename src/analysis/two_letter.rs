//! Found-word counts per two-letter goal prefix

use crate::core::FoundWords;
use crate::report::TwoLetterGoals;

/// Count found words starting with each goal prefix
///
/// The result carries exactly the goal prefixes, in goal order; prefixes the
/// report never mentioned are not invented even if a found word would match.
#[must_use]
pub fn find_two_letter_words(found: &FoundWords, goals: &TwoLetterGoals) -> TwoLetterGoals {
    let mut result = TwoLetterGoals::new();
    for (prefix, _) in goals.iter() {
        let count = found.iter().filter(|word| word.starts_with(prefix)).count() as u32;
        result.insert(prefix, count);
    }
    result
}
