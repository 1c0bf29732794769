//! Command implementations

pub mod puzzle;
pub mod simple;
pub mod verify;

pub use puzzle::{PuzzleReport, describe_puzzle};
pub use simple::{SimpleOptions, play_lines, run_simple};
pub use verify::{SeedFailure, VerifyStatistics, run_verify};
