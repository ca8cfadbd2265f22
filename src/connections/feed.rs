//! Static puzzle feed
//!
//! One JSON document per date: `{editor, categories: [{title, cards:
//! [{content, position}]}]}`. The HTTP transport is someone else's job;
//! this module consumes the bytes and knows how feed paths and puzzle
//! numbers are derived from dates.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One tile's feed entry; `position` doubles as a stable id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub content: String,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Puzzle {
    /// Deserialize a feed document
    ///
    /// # Errors
    /// Returns an error when the text is not a valid feed.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid puzzle feed")
    }

    /// Read and deserialize a feed file
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading puzzle feed {}", path.display()))?;
        Self::from_json(&text)
    }
}

/// Date of puzzle #1
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 12).expect("valid date")
}

/// Date-suffixed feed path for a puzzle date
#[must_use]
pub fn feed_path(date: NaiveDate) -> String {
    format!("puzzle/{date}.json")
}

/// 1-based puzzle number for a date (dates before the epoch go negative)
#[must_use]
pub fn puzzle_number(date: NaiveDate) -> i64 {
    (date - epoch()).num_days() + 1
}

/// Inverse of [`puzzle_number`]; `None` for numbers below 1
#[must_use]
pub fn date_for_number(number: i64) -> Option<NaiveDate> {
    if number < 1 {
        return None;
    }
    epoch().checked_add_days(Days::new((number - 1) as u64))
}
