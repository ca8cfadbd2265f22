//! Found-word counts shaped like the goal distribution grid

use crate::core::FoundWords;
use crate::report::Distribution;

/// Count found words per (starting letter, word length) cell
///
/// The result has the same rows and columns as `distribution`. A cell is
/// counted only when its goal is nonzero; zero-goal cells are reported as
/// zero without looking at the found words, since an absent goal means "not
/// applicable", not "nothing left to find". Word length is measured against
/// the header value for the cell's column.
#[must_use]
pub fn analyze_distribution(
    found: &FoundWords,
    distribution: &Distribution,
    header: &[usize],
) -> Distribution {
    let mut result = Distribution::new();
    for (letter, goals) in distribution.rows() {
        let counts = goals
            .iter()
            .enumerate()
            .map(|(column, &goal)| {
                if goal == 0 {
                    return 0;
                }
                let Some(&length) = header.get(column) else {
                    return 0;
                };
                found
                    .iter()
                    .filter(|word| word.starts_with(letter) && word.chars().count() == length)
                    .count() as u32
            })
            .collect();
        result.insert(letter, counts);
    }
    result
}
