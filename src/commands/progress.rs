//! Progress command
//!
//! Builds the goal-found=remaining snapshot for a report plus a found-word
//! source: either a words file (one word per line, bulk-filter semantics) or
//! the words saved in the store for a given date.

use crate::analysis::Progress;
use crate::commands::load_report;
use crate::core::FoundWords;
use crate::session::{STORE_KEY, SavedDay};
use crate::storage::{KeyValueStore, load_dated};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Configuration for a progress report
pub struct ProgressConfig {
    pub report_path: PathBuf,
    /// Words file; bulk-filter semantics apply (out-of-alphabet lines drop)
    pub words_path: Option<PathBuf>,
    /// Fall back to the words saved for this date
    pub date: Option<NaiveDate>,
}

/// Compute the progress snapshot for the configured sources
///
/// With neither a words file nor a date, the snapshot shows pure goals
/// (everything remaining).
///
/// # Errors
///
/// Returns an error if the report or words file cannot be read.
pub fn run_progress(config: &ProgressConfig, store: &dyn KeyValueStore) -> Result<Progress> {
    let report = load_report(&config.report_path)
        .with_context(|| format!("reading report {}", config.report_path.display()))?;

    let mut found = FoundWords::new();
    if let Some(words_path) = &config.words_path {
        let text = fs::read_to_string(words_path)
            .with_context(|| format!("reading words {}", words_path.display()))?;
        found.extend_filtered(text.lines(), &report.alphabet);
    } else if let Some(date) = config.date
        && let Some(saved) = load_dated::<SavedDay>(store, STORE_KEY, &date.to_string())
    {
        found = FoundWords::from_saved(saved.found_words);
    }

    Ok(Progress::compute(&report, &found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::io::Write;

    const REPORT: &str = "\
M O T H E R X

WORDS: 4  POINTS: 20  PANGRAMS: 1

     4  5  6  7  Σ
M:   2  -  -  1  3
T:   1  -  -  -  1
Σ:   3  -  -  1  4

MO-2 TO-1
";

    fn report_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{REPORT}").unwrap();
        file
    }

    #[test]
    fn words_file_uses_bulk_filter_semantics() {
        let report = report_file();
        let mut words = tempfile::NamedTempFile::new().unwrap();
        write!(words, "moth\nzebra\ntort\n").unwrap();

        let config = ProgressConfig {
            report_path: report.path().to_path_buf(),
            words_path: Some(words.path().to_path_buf()),
            date: None,
        };
        let progress = run_progress(&config, &MemoryStore::new()).unwrap();
        // zebra is out of alphabet and silently dropped
        assert_eq!(progress.words.found, 2);
    }

    #[test]
    fn date_falls_back_to_saved_words() {
        use crate::storage::save_dated;

        let report = report_file();
        let mut store = MemoryStore::new();
        let saved = SavedDay {
            hints_input: String::new(),
            found_words: vec!["MOTH".to_string()],
        };
        save_dated(&mut store, STORE_KEY, "2026-08-30", &saved).unwrap();

        let config = ProgressConfig {
            report_path: report.path().to_path_buf(),
            words_path: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 30),
        };
        let progress = run_progress(&config, &store).unwrap();
        assert_eq!(progress.words.found, 1);
    }

    #[test]
    fn no_words_source_shows_pure_goals() {
        let report = report_file();
        let config = ProgressConfig {
            report_path: report.path().to_path_buf(),
            words_path: None,
            date: None,
        };
        let progress = run_progress(&config, &MemoryStore::new()).unwrap();
        assert_eq!(progress.words.found, 0);
        assert_eq!(progress.words.remaining(), 4);
    }
}
