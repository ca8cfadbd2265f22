//! Bee Solver
//!
//! Hint-report analyzer for a spelling-bee style puzzle, plus a state model
//! for a Connections-style tile game. Parses the pasted hints report into
//! goal tables, tracks found words per date, and derives found-vs-remaining
//! views of every table.
//!
//! # Quick Start
//!
//! ```rust
//! use beesolver::report::HintReport;
//! use beesolver::core::FoundWords;
//! use beesolver::analysis::Progress;
//!
//! let report = HintReport::parse("A B C\n\nWORDS: 2  POINTS: 9  PANGRAMS: 1\n");
//! let mut found = FoundWords::new();
//! found.insert("cab");
//!
//! let progress = Progress::compute(&report, &found);
//! assert_eq!(progress.words.remaining(), 1);
//! ```

// Core domain types
pub mod core;

// Hint-report parsing
pub mod report;

// Derived statistics
pub mod analysis;

// Per-date session state
pub mod session;

// Injected key-value persistence
pub mod storage;

// Connections board model
pub mod connections;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
