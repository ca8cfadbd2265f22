//! Connections puzzle model
//!
//! The state side of the tile-grouping game: the static JSON feed, the
//! board (selection, guesses, solved groups, hint reveals), puzzle
//! numbering, and the share string. Rendering and drag handling live with
//! external collaborators; this module only owns the data they act on.

mod feed;
mod game;

pub use feed::{Card, Category, Puzzle, date_for_number, epoch, feed_path, puzzle_number};
pub use game::{
    Board, GUESSES_KEY, GuessOutcome, MemoryShare, SOLVED_KEY, ShareSink, SolvedCategory,
    StdoutShare, Tile,
};
