//! Derived statistics
//!
//! Pure functions over (found words, goal data). Everything here is
//! recomputed in full whenever the found set changes; inputs are tens of
//! entries, so there is nothing worth memoizing.

mod distribution;
mod pangrams;
mod progress;
mod two_letter;

pub use distribution::analyze_distribution;
pub use pangrams::find_pangrams;
pub use progress::{CellProgress, Progress};
pub use two_letter::find_two_letter_words;
