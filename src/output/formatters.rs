//! Formatting utilities for terminal output

use crate::analysis::CellProgress;

/// Format one progress cell as `goal-found=remaining`
///
/// Cells with no goal render as a bare dash, matching the report's own
/// notation for "no word here".
#[must_use]
pub fn cell(progress: CellProgress) -> String {
    if progress.goal == 0 {
        "-".to_string()
    } else {
        format!(
            "{}-{}={}",
            progress.goal,
            progress.found,
            progress.remaining()
        )
    }
}

/// Format a goal-only cell (the parse view, before any words are found)
#[must_use]
pub fn goal_cell(goal: u32) -> String {
    if goal == 0 {
        "-".to_string()
    } else {
        goal.to_string()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
