//! Per-date solving session
//!
//! Owns the raw hints text, its parsed report, and the found-word set for
//! one puzzle date, and keeps the store up to date. Each successful
//! ingestion overwrites the `{hintsInput, foundWords}` blob for the active
//! date; switching date reloads whatever was saved for the new one.

use crate::analysis::Progress;
use crate::core::FoundWords;
use crate::report::HintReport;
use crate::storage::{KeyValueStore, load_dated, save_dated};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io;

/// Store key holding every saved day, matching the original app's layout
pub const STORE_KEY: &str = "beeSolver";

/// Persisted shape of one day; field names mirror the on-disk format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDay {
    #[serde(rename = "hintsInput", default)]
    pub hints_input: String,
    #[serde(rename = "foundWords", default)]
    pub found_words: Vec<String>,
}

/// One date's worth of solving state
#[derive(Debug)]
pub struct Session {
    date: NaiveDate,
    hints_input: String,
    report: HintReport,
    found: FoundWords,
}

impl Session {
    /// Fresh session with no hints and no found words
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            hints_input: String::new(),
            report: HintReport::parse(""),
            found: FoundWords::new(),
        }
    }

    /// Load the saved state for `date`, or an empty session if none exists
    #[must_use]
    pub fn load(date: NaiveDate, store: &dyn KeyValueStore) -> Self {
        let mut session = Self::new(date);
        if let Some(saved) = load_dated::<SavedDay>(store, STORE_KEY, &date.to_string()) {
            session.set_hints(&saved.hints_input);
            session.found = FoundWords::from_saved(saved.found_words);
        }
        session
    }

    /// Replace the hints text and re-parse it in full
    ///
    /// No incremental update: the report is rebuilt from scratch every time.
    pub fn set_hints(&mut self, text: &str) {
        self.hints_input = text.to_string();
        self.report = HintReport::parse(text);
    }

    /// Bulk found-word entry
    ///
    /// Acts only when `text` ends with a newline (the paste-box convention:
    /// a trailing blank line means "take it"). Lines are trimmed, deduped
    /// against the existing set, and filtered to the puzzle alphabet;
    /// out-of-alphabet words vanish without an error. The filter runs over
    /// the union of the paste and the existing set, so a word force-added
    /// through [`Session::add_word`] is purged here if the alphabet cannot
    /// spell it. Persists on any trigger, returns how many words were added.
    ///
    /// # Errors
    /// Returns an I/O error when the store write fails.
    pub fn ingest_bulk(&mut self, text: &str, store: &mut dyn KeyValueStore) -> io::Result<usize> {
        if !text.ends_with('\n') {
            return Ok(0);
        }
        let added = self
            .found
            .extend_filtered(text.lines(), &self.report.alphabet);
        self.found.retain_spelled(&self.report.alphabet);
        self.save(store)?;
        Ok(added)
    }

    /// Single-word entry, NOT filtered against the alphabet
    ///
    /// This asymmetry with [`Session::ingest_bulk`] is deliberate: the single
    /// field is the manual override for words the alphabet filter would
    /// reject. Duplicates are still suppressed. Persists when the word was
    /// added; returns whether it was.
    ///
    /// # Errors
    /// Returns an I/O error when the store write fails.
    pub fn add_word(&mut self, word: &str, store: &mut dyn KeyValueStore) -> io::Result<bool> {
        if !self.found.insert(word) {
            return Ok(false);
        }
        self.save(store)?;
        Ok(true)
    }

    /// Switch to another date, dropping current state and loading its save
    pub fn switch_date(&mut self, date: NaiveDate, store: &dyn KeyValueStore) {
        *self = Self::load(date, store);
    }

    fn save(&self, store: &mut dyn KeyValueStore) -> io::Result<()> {
        let entry = SavedDay {
            hints_input: self.hints_input.clone(),
            found_words: self.found.to_vec(),
        };
        save_dated(store, STORE_KEY, &self.date.to_string(), &entry)
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub fn hints_input(&self) -> &str {
        &self.hints_input
    }

    #[inline]
    #[must_use]
    pub fn report(&self) -> &HintReport {
        &self.report
    }

    #[inline]
    #[must_use]
    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    /// Recompute the full goal-found-remaining snapshot
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::compute(&self.report, &self.found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const HINTS: &str = "\
M O T H E R X

WORDS: 4  POINTS: 20  PANGRAMS: 1

     4  5  6  7  Σ
M:   2  -  -  1  3
T:   1  -  -  -  1
Σ:   3  -  -  1  4

MO-2 TO-1
";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
    }

    #[test]
    fn bulk_requires_trailing_newline() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);

        assert_eq!(session.ingest_bulk("moth\ntort", &mut store).unwrap(), 0);
        assert!(session.found().is_empty());

        assert_eq!(session.ingest_bulk("moth\ntort\n", &mut store).unwrap(), 2);
        assert_eq!(session.found().len(), 2);
    }

    #[test]
    fn bulk_filters_against_the_alphabet() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);

        session.ingest_bulk("moth\nzebra\n", &mut store).unwrap();
        assert!(session.found().contains("moth"));
        assert!(!session.found().contains("zebra"));
    }

    #[test]
    fn add_word_skips_the_alphabet_filter() {
        // Manual override path: single-word entry is deliberately unfiltered.
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);

        assert!(session.add_word("zebra", &mut store).unwrap());
        assert!(session.found().contains("ZEBRA"));
        assert!(!session.add_word("zebra", &mut store).unwrap());
    }

    #[test]
    fn bulk_purges_force_added_out_of_alphabet_words() {
        // The manual override lasts only until the next bulk pass, which
        // re-filters the whole set, not just the pasted lines.
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);

        session.add_word("zebra", &mut store).unwrap();
        assert!(session.found().contains("zebra"));

        session.ingest_bulk("moth\n", &mut store).unwrap();
        assert!(!session.found().contains("zebra"));
        assert!(session.found().contains("moth"));

        // The purge is persisted, not just in memory.
        let restored = Session::load(date(), &store);
        assert!(!restored.found().contains("zebra"));
    }

    #[test]
    fn ingestion_persists_and_load_restores() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);
        session.ingest_bulk("moth\n", &mut store).unwrap();
        session.add_word("home", &mut store).unwrap();

        let restored = Session::load(date(), &store);
        assert_eq!(restored.hints_input(), HINTS);
        assert_eq!(
            restored.found().iter().collect::<Vec<_>>(),
            vec!["MOTH", "HOME"]
        );
        assert_eq!(restored.report().stats.words, 4);
    }

    #[test]
    fn switch_date_resets_then_loads_that_day() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);
        session.ingest_bulk("moth\n", &mut store).unwrap();

        let other = NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date");
        session.switch_date(other, &store);
        assert!(session.found().is_empty());
        assert!(session.hints_input().is_empty());

        session.switch_date(date(), &store);
        assert!(session.found().contains("moth"));
    }

    #[test]
    fn progress_reflects_current_state() {
        let mut store = MemoryStore::new();
        let mut session = Session::new(date());
        session.set_hints(HINTS);
        session.ingest_bulk("moth\nmothrex\n", &mut store).unwrap();

        let progress = session.progress();
        assert_eq!(progress.words.found, 2);
        assert_eq!(progress.pangrams.found, 1);
        assert_eq!(progress.words.remaining(), 2);
    }
}
