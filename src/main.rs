//! Bee Solver - CLI
//!
//! Hint helper for a spelling-bee style puzzle with TUI and CLI modes, plus
//! a Connections play mode. State persists per date in a JSON store file.

use anyhow::Result;
use beesolver::{
    commands::{ProgressConfig, load_report, run_connections, run_progress, run_simple},
    connections::{StdoutShare, date_for_number, feed_path},
    output::{print_progress, print_report},
    storage::JsonFileStore,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "beesolver",
    about = "Spelling-bee hint-report analyzer and Connections helper",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date (defaults to today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Path of the JSON store file
    #[arg(long, global = true, default_value = "beesolver.json")]
    store: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive helper without TUI)
    Simple,

    /// Parse a hints report file and print the goal tables
    Parse {
        /// The report file to parse
        report: PathBuf,
    },

    /// Print goal-found=remaining tables for a report
    Progress {
        /// The report file to parse
        report: PathBuf,

        /// Found words, one per line (bulk-filter semantics)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },

    /// Play Connections from a puzzle feed file
    Connections {
        /// The feed JSON file (defaults to puzzle/<date>.json)
        feed: Option<PathBuf>,

        /// Puzzle number, as an alternative to --date
        #[arg(short, long, conflicts_with = "date")]
        number: Option<i64>,

        /// Link placed at the end of the share string
        #[arg(long, default_value = "https://example.com/connections")]
        url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let mut store = JsonFileStore::open(&cli.store);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use beesolver::interactive::{App, run_tui};

            let app = App::new(date, &mut store);
            run_tui(app)
        }
        Commands::Simple => run_simple(date, &mut store).map_err(|e| anyhow::anyhow!(e)),
        Commands::Parse { report } => {
            let parsed = load_report(&report)?;
            print_report(&parsed);
            Ok(())
        }
        Commands::Progress { report, words } => {
            let config = ProgressConfig {
                report_path: report,
                words_path: words,
                date: cli.date,
            };
            let progress = run_progress(&config, &store)?;
            print_progress(&progress);
            Ok(())
        }
        Commands::Connections { feed, number, url } => {
            let date = match number {
                Some(number) => date_for_number(number)
                    .ok_or_else(|| anyhow::anyhow!("puzzle numbers start at 1"))?,
                None => date,
            };
            let feed = feed.unwrap_or_else(|| PathBuf::from(feed_path(date)));
            let mut sink = StdoutShare;
            run_connections(&feed, date, &url, &mut store, &mut sink)
        }
    }
}
