//! Core domain types for the hint helper
//!
//! This module contains the fundamental domain types with zero external collaborators.
//! All types here are pure, testable, and normalize text to one casing policy.

mod alphabet;
mod found;

pub use alphabet::Alphabet;
pub use found::FoundWords;
