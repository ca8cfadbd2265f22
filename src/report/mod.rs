//! Hint-report parsing
//!
//! Turns the plain-text report pasted from the game's hints screen into
//! structured goal data: the puzzle alphabet, the summary counters, the
//! letter-by-length distribution grid, and the two-letter prefix counts.

mod parser;
mod types;

pub use parser::HintReport;
pub use types::{Distribution, GoalStats, TwoLetterGoals};
