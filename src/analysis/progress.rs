//! Goal-found-remaining rollup
//!
//! One snapshot of every table the hint helper shows, in the
//! `goal-found=remaining` shape the UI prints.

use crate::analysis::{analyze_distribution, find_pangrams, find_two_letter_words};
use crate::core::FoundWords;
use crate::report::HintReport;

/// One cell of any progress table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellProgress {
    pub goal: u32,
    pub found: u32,
}

impl CellProgress {
    #[must_use]
    pub const fn new(goal: u32, found: u32) -> Self {
        Self { goal, found }
    }

    /// Goal minus found, clamped at zero
    #[inline]
    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.goal.saturating_sub(self.found)
    }

    /// A cell counts as solved only when it had a goal to begin with
    #[inline]
    #[must_use]
    pub const fn solved(self) -> bool {
        self.goal > 0 && self.found >= self.goal
    }
}

/// Full found-vs-remaining snapshot for a session
#[derive(Debug, Clone, Default)]
pub struct Progress {
    pub words: CellProgress,
    pub pangrams: CellProgress,
    /// The pangrams actually found, in discovery order
    pub pangram_words: Vec<String>,
    /// Rows aligned with the report's distribution grid
    pub distribution: Vec<(char, Vec<CellProgress>)>,
    pub two_letter: Vec<(String, CellProgress)>,
}

impl Progress {
    /// Recompute everything from scratch
    ///
    /// Deterministic and idempotent; safe to call on every state change.
    #[must_use]
    pub fn compute(report: &HintReport, found: &FoundWords) -> Self {
        let pangram_words: Vec<String> = find_pangrams(found, &report.alphabet)
            .into_iter()
            .map(str::to_string)
            .collect();

        let found_distribution =
            analyze_distribution(found, &report.distribution, &report.distribution_header);
        let distribution = report
            .distribution
            .rows()
            .map(|(letter, goals)| {
                let row = found_distribution.get(letter).unwrap_or(&[]);
                let cells = goals
                    .iter()
                    .enumerate()
                    .map(|(idx, &goal)| CellProgress::new(goal, row.get(idx).copied().unwrap_or(0)))
                    .collect();
                (letter, cells)
            })
            .collect();

        let found_two_letter = find_two_letter_words(found, &report.two_letter);
        let two_letter = report
            .two_letter
            .iter()
            .map(|(prefix, goal)| {
                let cell = CellProgress::new(goal, found_two_letter.get(prefix).unwrap_or(0));
                (prefix.to_string(), cell)
            })
            .collect();

        Self {
            words: CellProgress::new(report.stats.words, found.len() as u32),
            pangrams: CellProgress::new(report.stats.pangrams, pangram_words.len() as u32),
            pangram_words,
            distribution,
            two_letter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::HintReport;

    const SAMPLE: &str = "\
M O T H E R X

WORDS: 4  POINTS: 20  PANGRAMS: 1

     4  5  6  7  Σ
M:   2  -  -  1  3
T:   1  -  -  -  1
Σ:   3  -  -  1  4

MO-2 TO-1
";

    #[test]
    fn cell_remaining_saturates() {
        let cell = CellProgress::new(1, 3);
        assert_eq!(cell.remaining(), 0);
        assert!(cell.solved());
    }

    #[test]
    fn zero_goal_cell_is_never_solved() {
        assert!(!CellProgress::new(0, 0).solved());
    }

    #[test]
    fn compute_covers_every_table() {
        let report = HintReport::parse(SAMPLE);
        let mut found = FoundWords::new();
        found.insert("moth");
        found.insert("mothrex"); // pangram, 7 letters

        let progress = Progress::compute(&report, &found);
        assert_eq!(progress.words, CellProgress::new(4, 2));
        assert_eq!(progress.pangrams, CellProgress::new(1, 1));
        assert_eq!(progress.pangram_words, vec!["MOTHREX"]);

        let (letter, cells) = &progress.distribution[0];
        assert_eq!(*letter, 'M');
        assert_eq!(cells[0], CellProgress::new(2, 1));
        assert_eq!(cells[3], CellProgress::new(1, 1));

        let (prefix, cell) = &progress.two_letter[0];
        assert_eq!(prefix, "MO");
        assert_eq!(*cell, CellProgress::new(2, 2));
    }

    #[test]
    fn compute_is_stable_across_calls() {
        let report = HintReport::parse(SAMPLE);
        let mut found = FoundWords::new();
        found.insert("tort");

        let first = Progress::compute(&report, &found);
        let second = Progress::compute(&report, &found);
        assert_eq!(first.words, second.words);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.two_letter, second.two_letter);
    }
}
