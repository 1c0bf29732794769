//! Core domain types for Xordle
//!
//! Pure game logic: words, clues, the seeded sequence and puzzle generation.
//! Nothing here touches the terminal or the filesystem.

mod clue;
mod puzzle;
mod rng;
mod word;

pub use clue::{Clue, CluedLetter, Clues, LetterAggregate};
pub use puzzle::{
    DEFAULT_MAX_DRAWS, Generated, GenerationError, GenerationStage, Puzzle, PuzzleGenerator,
    is_good_initial_guess, is_valid_clue_pair,
};
pub use rng::SeededRng;
pub use word::{WILDCARD, WORD_LENGTH, Word, WordError};
