//! Connections play loop
//!
//! Drives the board model from plain stdin: pick tiles by id, submit groups,
//! reveal hints once enough mistakes pile up, and share the result.

use crate::connections::{Board, GuessOutcome, Puzzle, ShareSink, puzzle_number};
use crate::output::print_board;
use crate::storage::KeyValueStore;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the Connections CLI loop against a feed file
///
/// `share_url` is the link placed at the end of the share string.
///
/// # Errors
///
/// Returns an error if the feed cannot be read/parsed, or on stdin/store/sink
/// I/O failures.
pub fn run_connections(
    feed_path: &Path,
    date: NaiveDate,
    share_url: &str,
    store: &mut dyn KeyValueStore,
    sink: &mut dyn ShareSink,
) -> Result<()> {
    let puzzle = Puzzle::from_path(feed_path)?;
    let mut board = Board::new(&puzzle);
    let date_key = date.to_string();
    board.load_saved(&date_key, store);

    let number = puzzle_number(date);
    println!("\nCommands: pick <id>, clear, submit, hint, share, quit\n");

    loop {
        print_board(&board, number);

        if board.is_complete() {
            println!("\n{}", "🎉 All groups found!".bright_green().bold());
        }

        let input = get_user_input("connections")?;
        let mut parts = input.splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().unwrap_or_default().trim();

        match command {
            "quit" | "q" | "exit" => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            "pick" | "p" => {
                let Ok(id) = argument.parse::<u32>() else {
                    println!("Usage: pick <tile id>");
                    continue;
                };
                if !board.toggle(id) {
                    println!("Can't pick {id} (four already selected, or not on the board).");
                }
            }
            "clear" | "c" => board.clear_selection(),
            "submit" | "s" => match board.submit(&date_key, store)? {
                Some(GuessOutcome::Solved(title)) => {
                    println!("\n{} {}", "✅ Solved:".green().bold(), title);
                }
                Some(GuessOutcome::Miss) => {
                    println!("\n{}", "❌ Not a group.".red());
                }
                None => println!("Pick exactly four tiles first."),
            },
            "hint" | "h" => {
                if let Some(title) = board.reveal_hint() {
                    let title = title.to_string();
                    println!("{} {title}", "Hint:".yellow().bold());
                } else if board.hints_available() {
                    println!("Every remaining group is already revealed.");
                } else {
                    println!("Hints unlock after more than four mistakes.");
                }
            }
            "share" => {
                if board.is_complete() {
                    board.share(number, share_url, sink)?;
                } else {
                    println!("Finish the puzzle before sharing.");
                }
            }
            "" => {}
            _ => println!("Unknown command '{command}'."),
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
