//! Command implementations

pub mod connections;
pub mod parse;
pub mod progress;
pub mod simple;

pub use connections::run_connections;
pub use parse::load_report;
pub use progress::{ProgressConfig, run_progress};
pub use simple::run_simple;
