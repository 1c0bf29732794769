//! Show the puzzle for a mode without playing it

use crate::config::{GameConfig, GameMode};
use crate::core::{Clues, GenerationError};
use crate::wordlists::Catalog;

/// A generated puzzle prepared for printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleReport {
    pub label: String,
    pub seed: u32,
    pub targets: [String; 2],
    /// Opening guesses with their composite clue rows
    pub opening: Vec<(String, Clues)>,
    pub draws: usize,
}

/// Generate the puzzle for `mode`
///
/// # Errors
/// Returns `GenerationError` if the catalog cannot produce a puzzle.
pub fn describe_puzzle(
    config: &GameConfig,
    catalog: &Catalog,
    mode: GameMode,
) -> Result<PuzzleReport, GenerationError> {
    let generated = config.generate(catalog, mode)?;
    let puzzle = generated.puzzle;

    let opening = puzzle
        .initial_guesses
        .iter()
        .map(|guess| {
            (
                guess.text().to_string(),
                Clues::composite(guess, &puzzle.targets),
            )
        })
        .collect();

    Ok(PuzzleReport {
        label: mode.label(),
        seed: mode.seed(),
        targets: puzzle.targets.map(|target| target.text().to_string()),
        opening,
        draws: generated.draws,
    })
}
