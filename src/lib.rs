//! Xordle
//!
//! A two-target word game: every guess is clued against two hidden words at
//! once and each cell shows the better of the two clues. The puzzle for a day
//! is derived from the day number, so every player gets the same targets and
//! the same opening guess.
//!
//! # Quick Start
//!
//! ```rust
//! use xordle::config::{GameConfig, GameMode};
//! use xordle::game::{MemoryStore, Session};
//! use xordle::wordlists::{Catalog, DEFAULT_CUTOFF};
//!
//! let catalog = Catalog::embedded(DEFAULT_CUTOFF).unwrap();
//! let config = GameConfig::default();
//! let mode = GameMode::Daily { day: 1 };
//!
//! let puzzle = config.generate(&catalog, mode).unwrap().puzzle;
//! let mut session = Session::open(puzzle, config.max_guesses, mode.round_id(), MemoryStore::new());
//!
//! // The opening guess is already on the board
//! assert_eq!(session.round().guesses().len(), 1);
//! let _ = session.submit("north", &catalog);
//! println!("{}", session.round().share_text(&mode.label(), false));
//! ```

// Core domain types
pub mod core;

// Round state and persistence
pub mod game;

// Word lists
pub mod wordlists;

// Game settings and puzzle modes
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
