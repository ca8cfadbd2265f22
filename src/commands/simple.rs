//! Simple interactive CLI mode
//!
//! Text-based hint helper without TUI: paste the hints report, add found
//! words one at a time or in bulk, and print the progress tables.

use crate::output::{print_progress, print_report};
use crate::session::Session;
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// through the store.
#[allow(clippy::too_many_lines)] // Interactive loop requires detailed handling
pub fn run_simple(date: NaiveDate, store: &mut dyn KeyValueStore) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bee Solver - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Paste the hints report, then feed in the words you've found.");
    println!("Everything is saved per date; switching date loads that day.\n");
    println!("Commands:");
    println!("  hints          paste the report (finish with a single '.' line)");
    println!("  bulk           paste found words, one per line (finish with '.')");
    println!("  add <word>     add one word (not filtered against the letters)");
    println!("  show           print the progress tables");
    println!("  report         print the parsed goal tables");
    println!("  date <date>    switch to another day (YYYY-MM-DD)");
    println!("  quit           exit\n");

    let mut session = Session::load(date, store);
    if !session.hints_input().is_empty() {
        println!(
            "Loaded {}: {} found words.\n",
            session.date(),
            session.found().len()
        );
    }

    loop {
        let input = get_user_input(&format!("[{}]", session.date()))?;
        let mut parts = input.splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().unwrap_or_default().trim();

        match command {
            "quit" | "q" | "exit" => {
                println!("\n👋 Good luck with the rest!\n");
                return Ok(());
            }
            "hints" | "h" => {
                println!("Paste the report, then a line with only '.':");
                let text = read_block()?;
                session.set_hints(&text);
                if session.report().alphabet.is_empty() {
                    println!("⚠️  No letters found; is the report pasted correctly?\n");
                } else {
                    println!(
                        "✓ Parsed: letters {}, {} words to find.\n",
                        session.report().alphabet,
                        session.report().stats.words
                    );
                }
            }
            "bulk" | "b" => {
                println!("Paste found words (one per line), then a line with only '.':");
                let text = read_block()?;
                let added = session
                    .ingest_bulk(&text, store)
                    .map_err(|e| e.to_string())?;
                println!("✓ Added {added} words ({} total).\n", session.found().len());
            }
            "add" | "a" => {
                if argument.is_empty() {
                    println!("Usage: add <word>\n");
                    continue;
                }
                if session
                    .add_word(argument, store)
                    .map_err(|e| e.to_string())?
                {
                    println!("✓ Added {}.\n", argument.to_uppercase());
                } else {
                    println!("Already have {}.\n", argument.to_uppercase());
                }
            }
            "show" | "s" | "progress" => {
                print_progress(&session.progress());
            }
            "report" | "r" => {
                print_report(session.report());
            }
            "date" | "d" => {
                let Ok(new_date) = argument.parse::<NaiveDate>() else {
                    println!("Dates look like 2026-08-30.\n");
                    continue;
                };
                session.switch_date(new_date, store);
                println!(
                    "Switched to {}: {} found words.\n",
                    session.date(),
                    session.found().len()
                );
            }
            "" => {}
            _ => {
                println!(
                    "Unknown command '{command}'. Try: hints, bulk, add, show, report, date, quit.\n"
                );
            }
        }
    }
}

/// Read lines until a line containing only `.`
///
/// The result always ends with a newline, which is exactly the trigger the
/// bulk ingestion path looks for.
fn read_block() -> Result<String, String> {
    let mut block = String::new();
    loop {
        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 || line.trim() == "." {
            break;
        }
        block.push_str(&line);
    }
    if !block.ends_with('\n') {
        block.push('\n');
    }
    Ok(block)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
