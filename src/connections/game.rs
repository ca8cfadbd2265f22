//! Board state for the tile-grouping game
//!
//! Flattens the feed into tiles, tracks selection (capped at four), guesses,
//! solved groups, mistake-gated hint reveals, and builds the share string.
//! The board persists its guesses and solved groups per date through the
//! injected store.

use crate::connections::Puzzle;
use crate::storage::{KeyValueStore, load_dated, save_dated};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Store key for per-date guess history
pub const GUESSES_KEY: &str = "guesses";
/// Store key for per-date solved groups
pub const SOLVED_KEY: &str = "solvedCategories";

/// A full group is always four tiles
pub const GROUP_SIZE: usize = 4;
/// Hints unlock after this many mistakes
pub const HINT_THRESHOLD: usize = 4;

/// Square emoji per category level, used in the share string
pub const CATEGORY_EMOJI: [&str; 4] = ["🟨", "🟩", "🟦", "🟪"];

/// One playable tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: u32,
    pub content: String,
    pub category: String,
    pub level: usize,
}

/// A correctly guessed group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedCategory {
    pub title: String,
    pub level: usize,
    pub tiles: Vec<Tile>,
}

/// What a submitted guess did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// All four tiles shared one category; it is now solved
    Solved(String),
    /// The tiles spanned more than one category
    Miss,
}

/// Injected clipboard-writer capability for the share string
pub trait ShareSink {
    /// # Errors
    /// Returns an I/O error when the sink cannot be written.
    fn write_share(&mut self, text: &str) -> io::Result<()>;
}

/// Captures the share text; the test and fallback sink
#[derive(Debug, Clone, Default)]
pub struct MemoryShare {
    pub last: Option<String>,
}

impl ShareSink for MemoryShare {
    fn write_share(&mut self, text: &str) -> io::Result<()> {
        self.last = Some(text.to_string());
        Ok(())
    }
}

/// Prints the share text for the user to copy
#[derive(Debug, Clone, Default)]
pub struct StdoutShare;

impl ShareSink for StdoutShare {
    fn write_share(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

/// Live state of one Connections board
#[derive(Debug, Clone, Default)]
pub struct Board {
    editor: Option<String>,
    /// Category titles in feed (difficulty) order, for hint reveals
    category_titles: Vec<String>,
    tiles: Vec<Tile>,
    selected: Vec<u32>,
    guesses: Vec<Vec<Tile>>,
    solved: Vec<SolvedCategory>,
    hints_revealed: usize,
}

impl Board {
    /// Flatten a feed into a playable board, tiles sorted by position
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        let mut tiles: Vec<Tile> = puzzle
            .categories
            .iter()
            .enumerate()
            .flat_map(|(level, category)| {
                category.cards.iter().map(move |card| Tile {
                    id: card.position,
                    content: card.content.clone(),
                    category: category.title.clone(),
                    level,
                })
            })
            .collect();
        tiles.sort_by_key(|tile| tile.id);

        Self {
            editor: puzzle.editor.clone(),
            category_titles: puzzle
                .categories
                .iter()
                .map(|category| category.title.clone())
                .collect(),
            tiles,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn editor(&self) -> Option<&str> {
        self.editor.as_deref()
    }

    /// Tiles not yet locked into a solved group, in board order
    #[must_use]
    pub fn active_tiles(&self) -> Vec<&Tile> {
        self.tiles
            .iter()
            .filter(|tile| !self.is_solved_tile(tile.id))
            .collect()
    }

    fn is_solved_tile(&self, id: u32) -> bool {
        self.solved
            .iter()
            .any(|category| category.tiles.iter().any(|tile| tile.id == id))
    }

    #[must_use]
    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    /// Toggle a tile's selection
    ///
    /// Deselects if already selected; otherwise selects, refusing when four
    /// tiles are already picked or the tile is locked/unknown. Returns
    /// whether anything changed.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.selected.iter().position(|&sel| sel == id) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() >= GROUP_SIZE {
            return false;
        }
        if self.is_solved_tile(id) || !self.tiles.iter().any(|tile| tile.id == id) {
            return false;
        }
        self.selected.push(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Reorder: remove the tile at `from` and reinsert it at `to`
    ///
    /// Index pair out of range is a no-op; the drag collaborator can hand us
    /// stale indices.
    pub fn move_tile(&mut self, from: usize, to: usize) {
        if from >= self.tiles.len() || to >= self.tiles.len() {
            return;
        }
        let tile = self.tiles.remove(from);
        self.tiles.insert(to, tile);
    }

    /// Submit the current four-tile selection as a guess
    ///
    /// Returns `None` unless exactly four tiles are selected. Records the
    /// guess either way; a single-category guess locks that group. Selection
    /// clears on submit. State is persisted for `date` through the store.
    ///
    /// # Errors
    /// Returns an I/O error when the store write fails.
    pub fn submit(
        &mut self,
        date: &str,
        store: &mut dyn KeyValueStore,
    ) -> io::Result<Option<GuessOutcome>> {
        if self.selected.len() != GROUP_SIZE {
            return Ok(None);
        }

        let guess: Vec<Tile> = self
            .tiles
            .iter()
            .filter(|tile| self.selected.contains(&tile.id))
            .cloned()
            .collect();
        self.guesses.push(guess.clone());
        save_dated(store, GUESSES_KEY, date, &self.guesses)?;

        let mut by_category: FxHashMap<&str, usize> = FxHashMap::default();
        for tile in &guess {
            *by_category.entry(tile.category.as_str()).or_insert(0) += 1;
        }

        let outcome = if by_category.len() == 1 {
            let title = guess[0].category.clone();
            let level = guess[0].level;
            self.solved.push(SolvedCategory {
                title: title.clone(),
                level,
                tiles: guess,
            });
            save_dated(store, SOLVED_KEY, date, &self.solved)?;
            GuessOutcome::Solved(title)
        } else {
            GuessOutcome::Miss
        };

        self.selected.clear();
        Ok(Some(outcome))
    }

    #[must_use]
    pub fn guesses(&self) -> &[Vec<Tile>] {
        &self.guesses
    }

    #[must_use]
    pub fn solved(&self) -> &[SolvedCategory] {
        &self.solved
    }

    /// Wrong guesses so far
    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.guesses.len().saturating_sub(self.solved.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.category_titles.is_empty() && self.solved.len() == self.category_titles.len()
    }

    /// Hints unlock only after enough mistakes
    #[must_use]
    pub fn hints_available(&self) -> bool {
        self.mistakes() > HINT_THRESHOLD
    }

    /// Unsolved category titles revealed so far, in difficulty order
    #[must_use]
    pub fn revealed_hints(&self) -> Vec<&str> {
        self.unsolved_titles()
            .into_iter()
            .take(self.hints_revealed)
            .collect()
    }

    /// Reveal one more unsolved category title
    ///
    /// Returns the newly revealed title, or `None` when hints are locked or
    /// everything left is already revealed.
    pub fn reveal_hint(&mut self) -> Option<&str> {
        if !self.hints_available() {
            return None;
        }
        if self.hints_revealed >= self.unsolved_titles().len() {
            return None;
        }
        self.hints_revealed += 1;
        self.unsolved_titles()
            .into_iter()
            .nth(self.hints_revealed - 1)
    }

    fn unsolved_titles(&self) -> Vec<&str> {
        self.category_titles
            .iter()
            .map(String::as_str)
            .filter(|title| !self.solved.iter().any(|cat| cat.title == *title))
            .collect()
    }

    /// Restore a previous day's guesses and solved groups
    pub fn load_saved(&mut self, date: &str, store: &dyn KeyValueStore) {
        self.guesses = load_dated(store, GUESSES_KEY, date).unwrap_or_default();
        self.solved = load_dated(store, SOLVED_KEY, date).unwrap_or_default();
    }

    /// The shareable result text: title, number/editor, emoji rows, link
    #[must_use]
    pub fn share_text(&self, number: i64, url: &str) -> String {
        let rows = self
            .guesses
            .iter()
            .map(|guess| {
                guess
                    .iter()
                    .map(|tile| CATEGORY_EMOJI.get(tile.level).copied().unwrap_or("⬜"))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        let editor = self.editor.as_deref().unwrap_or("unknown");
        format!("Connections\n#{number} by {editor}\n{rows}\n{url}?number={number}")
    }

    /// Send the share text through the injected sink
    ///
    /// # Errors
    /// Returns an I/O error when the sink cannot be written.
    pub fn share(&self, number: i64, url: &str, sink: &mut dyn ShareSink) -> io::Result<()> {
        sink.write_share(&self.share_text(number, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections::{Card, Category};
    use crate::storage::MemoryStore;

    fn puzzle() -> Puzzle {
        let categories = (0..4)
            .map(|level| Category {
                title: format!("group {level}"),
                cards: (0..4)
                    .map(|slot| Card {
                        content: format!("card {level}-{slot}"),
                        position: (level * 4 + slot) as u32,
                    })
                    .collect(),
            })
            .collect();
        Puzzle {
            editor: Some("Some Editor".to_string()),
            categories,
        }
    }

    fn shuffled_puzzle() -> Puzzle {
        // Same board, positions interleaved across categories.
        let mut puzzle = puzzle();
        let mut position = 0;
        for slot in 0..4 {
            for level in 0..4 {
                puzzle.categories[level].cards[slot].position = position;
                position += 1;
            }
        }
        puzzle
    }

    #[test]
    fn tiles_sort_by_position() {
        let board = Board::new(&shuffled_puzzle());
        let contents: Vec<&str> = board
            .active_tiles()
            .iter()
            .map(|tile| tile.content.as_str())
            .collect();
        assert_eq!(contents[0], "card 0-0");
        assert_eq!(contents[1], "card 1-0");
        assert_eq!(contents[2], "card 2-0");
    }

    #[test]
    fn selection_caps_at_four() {
        let mut board = Board::new(&puzzle());
        for id in 0..4 {
            assert!(board.toggle(id));
        }
        assert!(!board.toggle(4));
        assert_eq!(board.selected().len(), 4);

        // Deselecting still works at the cap.
        assert!(board.toggle(0));
        assert_eq!(board.selected().len(), 3);
    }

    #[test]
    fn toggle_rejects_unknown_tiles() {
        let mut board = Board::new(&puzzle());
        assert!(!board.toggle(99));
    }

    #[test]
    fn single_category_guess_solves_the_group() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        for id in 0..4 {
            board.toggle(id);
        }

        let outcome = board.submit("2026-08-30", &mut store).unwrap();
        assert_eq!(outcome, Some(GuessOutcome::Solved("group 0".to_string())));
        assert_eq!(board.solved().len(), 1);
        assert_eq!(board.mistakes(), 0);
        assert!(board.selected().is_empty());
        assert_eq!(board.active_tiles().len(), 12);
    }

    #[test]
    fn mixed_guess_is_a_miss() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        for id in [0, 1, 2, 4] {
            board.toggle(id);
        }

        let outcome = board.submit("2026-08-30", &mut store).unwrap();
        assert_eq!(outcome, Some(GuessOutcome::Miss));
        assert!(board.solved().is_empty());
        assert_eq!(board.mistakes(), 1);
    }

    #[test]
    fn submit_needs_a_full_selection() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        board.toggle(0);
        assert_eq!(board.submit("2026-08-30", &mut store).unwrap(), None);
        assert!(board.guesses().is_empty());
    }

    #[test]
    fn move_tile_reorders() {
        let mut board = Board::new(&puzzle());
        board.move_tile(0, 3);
        let tiles = board.active_tiles();
        assert_eq!(tiles[0].id, 1);
        assert_eq!(tiles[3].id, 0);

        // Out-of-range indices do nothing.
        board.move_tile(99, 0);
        assert_eq!(board.active_tiles()[0].id, 1);
    }

    #[test]
    fn hints_unlock_after_enough_mistakes() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());

        assert!(board.reveal_hint().is_none());

        // Five misses: same wrong shape each time.
        for _ in 0..5 {
            for id in [0, 1, 2, 4] {
                board.toggle(id);
            }
            board.submit("2026-08-30", &mut store).unwrap();
        }
        assert!(board.hints_available());
        assert_eq!(board.reveal_hint(), Some("group 0"));
        assert_eq!(board.reveal_hint(), Some("group 1"));
        assert_eq!(board.revealed_hints(), vec!["group 0", "group 1"]);
    }

    #[test]
    fn guesses_and_solved_persist_per_date() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        for id in 0..4 {
            board.toggle(id);
        }
        board.submit("2026-08-30", &mut store).unwrap();

        let mut restored = Board::new(&puzzle());
        restored.load_saved("2026-08-30", &store);
        assert_eq!(restored.guesses().len(), 1);
        assert_eq!(restored.solved().len(), 1);
        assert_eq!(restored.active_tiles().len(), 12);

        // A different date has nothing saved.
        let mut other = Board::new(&puzzle());
        other.load_saved("2026-08-31", &store);
        assert!(other.guesses().is_empty());
    }

    #[test]
    fn share_text_has_emoji_rows_and_link() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        for id in 0..4 {
            board.toggle(id);
        }
        board.submit("2026-08-30", &mut store).unwrap();
        for id in [4, 5, 6, 8] {
            board.toggle(id);
        }
        board.submit("2026-08-30", &mut store).unwrap();

        let text = board.share_text(42, "https://example.com/connections");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Connections");
        assert_eq!(lines[1], "#42 by Some Editor");
        assert_eq!(lines[2], "🟨🟨🟨🟨");
        assert_eq!(lines[3], "🟩🟩🟩🟦");
        assert_eq!(lines[4], "https://example.com/connections?number=42");
    }

    #[test]
    fn share_goes_through_the_sink() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        for id in 0..4 {
            board.toggle(id);
        }
        board.submit("2026-08-30", &mut store).unwrap();

        let mut sink = MemoryShare::default();
        board.share(7, "https://example.com", &mut sink).unwrap();
        assert!(sink.last.unwrap().starts_with("Connections\n#7"));
    }

    #[test]
    fn complete_after_four_groups() {
        let mut store = MemoryStore::new();
        let mut board = Board::new(&puzzle());
        for group in 0..4 {
            for slot in 0..4 {
                board.toggle(group * 4 + slot);
            }
            board.submit("2026-08-30", &mut store).unwrap();
        }
        assert!(board.is_complete());
        assert_eq!(board.mistakes(), 0);
        assert!(board.active_tiles().is_empty());
    }
}
