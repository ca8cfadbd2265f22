//! Structured goal data extracted from a hint report

use rustc_hash::FxHashMap;

/// Summary counters from the report's headline
///
/// Extracted once at parse time; immutable afterwards. Missing fields
/// default to zero (or false for the bingo marker).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalStats {
    pub words: u32,
    pub points: u32,
    pub pangrams: u32,
    pub perfect_pangrams: u32,
    pub bingo: bool,
}

/// Goal counts of words grouped by (first letter, word length)
///
/// Rows keep the order they appeared in the report. Each row's counts align
/// positionally with the distribution header (the word-length columns); a
/// zero means no word of that length starts with that letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    rows: Vec<(char, Vec<u32>)>,
    index: FxHashMap<char, usize>,
}

impl Distribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the row for `letter`
    pub fn insert(&mut self, letter: char, counts: Vec<u32>) {
        if let Some(&pos) = self.index.get(&letter) {
            self.rows[pos].1 = counts;
        } else {
            self.index.insert(letter, self.rows.len());
            self.rows.push((letter, counts));
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<&[u32]> {
        self.index
            .get(&letter)
            .map(|&pos| self.rows[pos].1.as_slice())
    }

    /// Rows in appearance order
    pub fn rows(&self) -> impl Iterator<Item = (char, &[u32])> {
        self.rows.iter().map(|(letter, counts)| (*letter, counts.as_slice()))
    }

    /// Sum of the goal counts in one letter's row
    #[must_use]
    pub fn letter_total(&self, letter: char) -> u32 {
        self.get(letter).map_or(0, |counts| counts.iter().sum())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Goal counts of words grouped by their first two letters
///
/// Prefixes keep appearance order from the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoLetterGoals {
    entries: Vec<(String, u32)>,
    index: FxHashMap<String, usize>,
}

impl TwoLetterGoals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the count for `prefix`
    pub fn insert(&mut self, prefix: &str, count: u32) {
        if let Some(&pos) = self.index.get(prefix) {
            self.entries[pos].1 = count;
        } else {
            self.index.insert(prefix.to_string(), self.entries.len());
            self.entries.push((prefix.to_string(), count));
        }
    }

    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<u32> {
        self.index.get(prefix).map(|&pos| self.entries[pos].1)
    }

    /// Entries in appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(prefix, count)| (prefix.as_str(), *count))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_preserves_row_order() {
        let mut dist = Distribution::new();
        dist.insert('T', vec![2, 0, 1]);
        dist.insert('A', vec![1, 1, 0]);
        let letters: Vec<char> = dist.rows().map(|(letter, _)| letter).collect();
        assert_eq!(letters, vec!['T', 'A']);
    }

    #[test]
    fn distribution_insert_replaces_in_place() {
        let mut dist = Distribution::new();
        dist.insert('A', vec![1]);
        dist.insert('B', vec![2]);
        dist.insert('A', vec![9]);
        assert_eq!(dist.get('A'), Some(&[9][..]));
        assert_eq!(dist.len(), 2);
        let letters: Vec<char> = dist.rows().map(|(letter, _)| letter).collect();
        assert_eq!(letters, vec!['A', 'B']);
    }

    #[test]
    fn distribution_letter_total_sums_row() {
        let mut dist = Distribution::new();
        dist.insert('A', vec![2, 0, 4, 1]);
        assert_eq!(dist.letter_total('A'), 7);
        assert_eq!(dist.letter_total('Z'), 0);
    }

    #[test]
    fn two_letter_preserves_order_and_replaces() {
        let mut goals = TwoLetterGoals::new();
        goals.insert("TA", 3);
        goals.insert("MO", 5);
        goals.insert("TA", 4);
        assert_eq!(goals.get("TA"), Some(4));
        let prefixes: Vec<&str> = goals.iter().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes, vec!["TA", "MO"]);
    }
}
