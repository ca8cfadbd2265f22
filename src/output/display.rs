//! Display functions for command results

use super::formatters::{cell, create_progress_bar, goal_cell};
use crate::analysis::Progress;
use crate::connections::Board;
use crate::report::HintReport;
use colored::Colorize;

/// Print the goal tables of a freshly parsed report
pub fn print_report(report: &HintReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", report.alphabet.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let stats = &report.stats;
    print!(
        "Words: {}  Points: {}  Pangrams: {}",
        stats.words, stats.points, stats.pangrams
    );
    if stats.perfect_pangrams > 0 {
        print!(" ({} perfect)", stats.perfect_pangrams);
    }
    if stats.bingo {
        print!("  {}", "BINGO".bright_magenta().bold());
    }
    println!("\n");

    if !report.distribution.is_empty() {
        print!("    ");
        for length in &report.distribution_header {
            print!("{}", format!("{length:>6}").bold());
        }
        println!();
        for (letter, counts) in report.distribution.rows() {
            print!("{}:", format!("{letter:>3}").bright_yellow());
            for &goal in counts {
                print!("{:>6}", goal_cell(goal));
            }
            println!();
        }
        println!();
    }

    if !report.two_letter.is_empty() {
        println!("Two-letter counts:");
        for (prefix, count) in report.two_letter.iter() {
            print!("  {prefix}-{count}");
        }
        println!();
    }
}

/// Print the goal-found=remaining snapshot
pub fn print_progress(progress: &Progress) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PROGRESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let words = progress.words;
    let words_line = format!(
        "Words: {}-{}={}",
        words.goal,
        words.found,
        words.remaining()
    );
    let bar = create_progress_bar(f64::from(words.found), f64::from(words.goal), 24);
    println!(
        "\n{} [{}]",
        if words.solved() {
            words_line.dimmed().strikethrough()
        } else {
            words_line.normal()
        },
        bar.yellow()
    );

    if progress.pangrams.goal > 0 {
        let pangrams = progress.pangrams;
        let line = format!(
            "Pangrams: {}-{}={}",
            pangrams.goal,
            pangrams.found,
            pangrams.remaining()
        );
        println!(
            "{}",
            if pangrams.solved() {
                line.dimmed().strikethrough()
            } else {
                line.normal()
            }
        );
        for word in &progress.pangram_words {
            println!("  {}", word.bright_yellow());
        }
    }

    if !progress.distribution.is_empty() {
        println!("\nDistribution (goal-found=remaining):");
        for (letter, cells) in &progress.distribution {
            print!("{}:", format!("{letter:>3}").bright_yellow());
            for &progress_cell in cells {
                let text = format!("{:>8}", cell(progress_cell));
                if progress_cell.solved() {
                    print!("{}", text.dimmed().strikethrough());
                } else {
                    print!("{text}");
                }
            }
            println!();
        }
    }

    if !progress.two_letter.is_empty() {
        println!("\nTwo-letter words:");
        for (prefix, progress_cell) in &progress.two_letter {
            let line = format!(
                "  {}: {}-{}={}",
                prefix,
                progress_cell.goal,
                progress_cell.found,
                progress_cell.remaining()
            );
            if progress_cell.solved() {
                println!("{}", line.dimmed().strikethrough());
            } else {
                println!("{line}");
            }
        }
    }
    println!();
}

/// Print the Connections board: solved groups, then the live grid
pub fn print_board(board: &Board, number: i64) {
    println!("\n{}", "─".repeat(60).cyan());
    match board.editor() {
        Some(editor) => println!("Connections #{number} by {}", editor.bold()),
        None => println!("Connections #{number}"),
    }
    println!("Mistakes: {}", board.mistakes());
    println!("{}", "─".repeat(60).cyan());

    for solved in board.solved() {
        let tiles = solved
            .tiles
            .iter()
            .map(|tile| tile.content.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} {}: {}",
            "✔".green().bold(),
            solved.title.to_uppercase().green().bold(),
            tiles
        );
    }

    let active = board.active_tiles();
    for row in active.chunks(4) {
        for tile in row {
            let selected = board.selected().contains(&tile.id);
            let label = format!("[{:>2}] {:<14}", tile.id, tile.content);
            if selected {
                print!("{}", label.bright_magenta().bold());
            } else {
                print!("{label}");
            }
        }
        println!();
    }

    for title in board.revealed_hints() {
        println!("{} {}", "Hint:".yellow().bold(), title);
    }
}
