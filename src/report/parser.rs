//! Best-effort scraper for the pasted hints report
//!
//! The report has a fixed line layout (offsets below). This is a scraper for
//! an externally owned format, not a validating parser: parsing is total,
//! and anything missing or unreadable degrades to zero/empty fields.

use crate::core::Alphabet;
use crate::report::{Distribution, GoalStats, TwoLetterGoals};
use regex::Regex;
use std::sync::LazyLock;

/// Line holding the space-separated puzzle letters
const LETTERS_LINE: usize = 0;
/// Line holding the WORDS/POINTS/PANGRAMS summary
const STATS_LINE: usize = 2;
/// Line holding the word-length column headers
const HEADER_LINE: usize = 4;
/// First distribution row
const DISTRIBUTION_START: usize = 5;
/// Marker of the distribution totals row; rows parse up to, not including, it
const SUM_MARKER: &str = "Σ:";
/// The two-letter section starts this many lines after the sum marker
const TWO_LETTER_OFFSET: usize = 2;

static WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WORDS: (\d+)").expect("valid regex"));
static POINTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"POINTS: (\d+)").expect("valid regex"));
static PANGRAMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PANGRAMS: (\d+)").expect("valid regex"));
static PERFECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+) Perfect\)").expect("valid regex"));

/// Everything a hint report tells us about the day's puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintReport {
    pub alphabet: Alphabet,
    pub stats: GoalStats,
    /// Word-length columns of the distribution grid, in report order
    pub distribution_header: Vec<usize>,
    pub distribution: Distribution,
    pub two_letter: TwoLetterGoals,
}

impl HintReport {
    /// Parse a pasted report
    ///
    /// Never fails: a malformed or empty report yields sparse, zero-filled
    /// structures. Parsing the same text twice yields identical output.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let lines: Vec<&str> = input.trim().lines().collect();

        let alphabet = Alphabet::from_tokens(
            lines
                .get(LETTERS_LINE)
                .map(|line| line.split_whitespace())
                .into_iter()
                .flatten(),
        );
        let stats = parse_stats(lines.get(STATS_LINE).copied().unwrap_or_default());
        let distribution_header =
            parse_header(lines.get(HEADER_LINE).copied().unwrap_or_default());

        let sum_line = lines.iter().position(|line| line.contains(SUM_MARKER));

        let mut distribution = Distribution::new();
        if let Some(sum_line) = sum_line {
            for line in &lines[DISTRIBUTION_START.min(sum_line)..sum_line] {
                if let Some((letter, counts)) = parse_distribution_row(line) {
                    distribution.insert(letter, counts);
                }
            }
        }

        let two_letter = match sum_line {
            Some(sum_line) => {
                let start = (sum_line + TWO_LETTER_OFFSET).min(lines.len());
                parse_two_letter(&lines[start..])
            }
            None => TwoLetterGoals::new(),
        };

        Self {
            alphabet,
            stats,
            distribution_header,
            distribution,
            two_letter,
        }
    }
}

fn parse_stats(line: &str) -> GoalStats {
    GoalStats {
        words: capture_number(&WORDS_RE, line),
        points: capture_number(&POINTS_RE, line),
        pangrams: capture_number(&PANGRAMS_RE, line),
        perfect_pangrams: capture_number(&PERFECT_RE, line),
        bingo: line.contains("BINGO"),
    }
}

fn capture_number(re: &Regex, line: &str) -> u32 {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Column headers: whitespace-separated integers with a trailing total label
fn parse_header(line: &str) -> Vec<usize> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((_, columns)) = tokens.split_last() else {
        return Vec::new();
    };
    columns
        .iter()
        .map(|token| token.parse().unwrap_or(0))
        .collect()
}

/// One row: `<Letter>: <count-or-dash> ... <trailing-total>`
fn parse_distribution_row(line: &str) -> Option<(char, Vec<u32>)> {
    let mut tokens = line.split_whitespace();
    let letter = tokens
        .next()?
        .trim_end_matches(':')
        .chars()
        .next()?
        .to_ascii_uppercase();

    let cells: Vec<&str> = tokens.collect();
    let (_, cells) = cells.split_last()?;
    let counts = cells
        .iter()
        .map(|cell| {
            if *cell == "-" {
                0
            } else {
                cell.parse().unwrap_or(0)
            }
        })
        .collect();
    Some((letter, counts))
}

/// Free-form two-letter section, tokenized on whitespace
///
/// Two layouts are recognized at each position: a single `<PREFIX>-<count>`
/// token, or the three tokens `<PREFIX>`, `-`, `<count>`. Prefixes must be
/// non-empty and alphabetic, which keeps the bare dash of the three-token
/// layout from minting an empty entry.
fn parse_two_letter(lines: &[&str]) -> TwoLetterGoals {
    let tokens: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect();

    let mut goals = TwoLetterGoals::new();
    for (idx, token) in tokens.iter().enumerate() {
        if let Some((prefix, count)) = token.split_once('-') {
            if is_prefix(prefix) {
                goals.insert(&prefix.to_ascii_uppercase(), count.parse().unwrap_or(0));
            }
        } else if is_prefix(token)
            && tokens.get(idx + 1) == Some(&"-")
            && tokens
                .get(idx + 2)
                .is_some_and(|next| !next.is_empty() && next.chars().all(|ch| ch.is_ascii_digit()))
        {
            goals.insert(
                &token.to_ascii_uppercase(),
                tokens[idx + 2].parse().unwrap_or(0),
            );
        }
    }
    goals
}

fn is_prefix(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_alphabetic())
}
