//! Deterministic puzzle generation
//!
//! A puzzle is two targets sharing no letters plus one opening guess that leaves
//! both targets ambiguous. Everything is drawn from one [`SeededRng`] by
//! rejection sampling, so the seed alone fixes the puzzle.

use super::clue::{Clue, Clues};
use super::rng::SeededRng;
use super::word::Word;
use log::debug;
use std::fmt;
use thiserror::Error;

/// Default cap on draws per puzzle
pub const DEFAULT_MAX_DRAWS: usize = 1_000_000;

/// Immutable puzzle data for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub targets: [Word; 2],
    pub initial_guesses: Vec<Word>,
}

impl Puzzle {
    /// True if `word` is one of the two targets
    #[must_use]
    pub fn is_target(&self, word: &Word) -> bool {
        self.targets.contains(word)
    }
}

/// Which rejection loop ran out of draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Targets,
    OpeningGuess,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Targets => write!(f, "target pair"),
            Self::OpeningGuess => write!(f, "opening guess"),
        }
    }
}

/// Puzzle generation failure; a catalog configuration fault
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("eligible catalog is empty")]
    EmptyCatalog,
    #[error("no valid {stage} found after {draws} draws")]
    Exhausted {
        stage: GenerationStage,
        draws: usize,
    },
}

/// Check that two words can be a target pair
///
/// Rejects placeholder entries, unequal lengths, identical words, words with a
/// letter in the same position, and words sharing any letter at all.
///
/// # Examples
/// ```
/// use xordle::core::{Word, is_valid_clue_pair};
///
/// let north = Word::new("north").unwrap();
/// assert!(is_valid_clue_pair(&north, &Word::new("bleak").unwrap()));
/// assert!(!is_valid_clue_pair(&north, &Word::new("blank").unwrap())); // shares N
/// ```
#[must_use]
pub fn is_valid_clue_pair(first: &Word, second: &Word) -> bool {
    if first.has_wildcard() || second.has_wildcard() {
        return false;
    }
    if first.chars().len() != second.chars().len() || first == second {
        return false;
    }
    first
        .chars()
        .iter()
        .zip(second.chars())
        .all(|(&a, &b)| a != b && !second.has_letter(a))
}

/// Check that an opening guess does not resolve either target's letters
///
/// The guess is rejected if it carries the placeholder, or if Correct plus
/// Elsewhere reaches five against either target.
#[must_use]
pub fn is_good_initial_guess(targets: &[Word; 2], candidate: &Word) -> bool {
    if candidate.has_wildcard() {
        return false;
    }
    targets.iter().all(|target| {
        let clues = Clues::calculate(candidate, target);
        clues.count(Clue::Correct) + clues.count(Clue::Elsewhere) < 5
    })
}

/// A generated puzzle and the number of draws it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub puzzle: Puzzle,
    pub draws: usize,
}

/// Puzzle generator over the eligible slice of the catalog
pub struct PuzzleGenerator<'a> {
    eligible: &'a [Word],
    max_draws: usize,
}

impl<'a> PuzzleGenerator<'a> {
    #[must_use]
    pub const fn new(eligible: &'a [Word]) -> Self {
        Self {
            eligible,
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }

    /// Override the draw cap
    #[must_use]
    pub const fn with_max_draws(mut self, max_draws: usize) -> Self {
        self.max_draws = max_draws;
        self
    }

    /// Build the puzzle for a seed
    ///
    /// Draw order is fixed: a pair of targets per attempt until the pair is
    /// valid, then opening-guess candidates until one qualifies. Rejected draws
    /// still advance the sequence.
    ///
    /// # Errors
    /// Returns `GenerationError` if the catalog is empty or the draw cap is hit.
    ///
    /// # Examples
    /// ```
    /// use xordle::core::{PuzzleGenerator, Word};
    ///
    /// let eligible: Vec<Word> = ["north", "bleak", "crisp", "thumb", "gravy"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let generator = PuzzleGenerator::new(&eligible);
    ///
    /// let first = generator.make_puzzle(7).unwrap();
    /// assert_eq!(first, generator.make_puzzle(7).unwrap());
    /// ```
    pub fn make_puzzle(&self, seed: u32) -> Result<Puzzle, GenerationError> {
        self.generate(seed).map(|generated| generated.puzzle)
    }

    /// Like [`make_puzzle`](Self::make_puzzle) but also reports the draw count
    ///
    /// # Errors
    /// Returns `GenerationError` if the catalog is empty or the draw cap is hit.
    pub fn generate(&self, seed: u32) -> Result<Generated, GenerationError> {
        if self.eligible.is_empty() {
            return Err(GenerationError::EmptyCatalog);
        }

        let mut rng = SeededRng::new(seed);
        let mut draws = 0;

        let targets = self.random_targets(&mut rng, &mut draws)?;
        let opening = self.initial_guess(&targets, &mut rng, &mut draws)?;
        debug!(
            "seed {seed}: targets {} {}, opening {opening} after {draws} draws",
            targets[0], targets[1]
        );

        Ok(Generated {
            puzzle: Puzzle {
                targets,
                initial_guesses: vec![opening],
            },
            draws,
        })
    }

    fn draw(
        &self,
        rng: &mut SeededRng,
        draws: &mut usize,
        stage: GenerationStage,
    ) -> Result<&'a Word, GenerationError> {
        if *draws >= self.max_draws {
            return Err(GenerationError::Exhausted {
                stage,
                draws: *draws,
            });
        }
        *draws += 1;
        rng.pick(self.eligible).ok_or(GenerationError::EmptyCatalog)
    }

    fn random_targets(
        &self,
        rng: &mut SeededRng,
        draws: &mut usize,
    ) -> Result<[Word; 2], GenerationError> {
        loop {
            let first = self.draw(rng, draws, GenerationStage::Targets)?;
            let second = self.draw(rng, draws, GenerationStage::Targets)?;
            if is_valid_clue_pair(first, second) {
                return Ok([first.clone(), second.clone()]);
            }
        }
    }

    fn initial_guess(
        &self,
        targets: &[Word; 2],
        rng: &mut SeededRng,
        draws: &mut usize,
    ) -> Result<Word, GenerationError> {
        loop {
            let candidate = self.draw(rng, draws, GenerationStage::OpeningGuess)?;
            if is_good_initial_guess(targets, candidate) {
                return Ok(candidate.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn clue_pair_accepts_disjoint_words() {
        assert!(is_valid_clue_pair(&w("north"), &w("bleak")));
        assert!(is_valid_clue_pair(&w("crisp"), &w("thumb")));
    }

    #[test]
    fn clue_pair_rejects_shared_letters_anywhere() {
        assert!(!is_valid_clue_pair(&w("north"), &w("thumb"))); // T and H
        assert!(!is_valid_clue_pair(&w("crisp"), &w("scald"))); // S and C displaced
    }

    #[test]
    fn clue_pair_rejects_same_position_and_identical() {
        assert!(!is_valid_clue_pair(&w("north"), &w("north")));
        assert!(!is_valid_clue_pair(&w("bleak"), &w("brick"))); // B in position 0
    }

    #[test]
    fn clue_pair_rejects_placeholders() {
        assert!(!is_valid_clue_pair(&w("n*rth"), &w("bleak")));
        assert!(!is_valid_clue_pair(&w("north"), &w("bl**k")));
    }

    #[test]
    fn opening_guess_must_leave_ambiguity() {
        let targets = [w("north"), w("bleak")];
        // THORN resolves all five letters of NORTH
        assert!(!is_good_initial_guess(&targets, &w("thorn")));
        // The targets themselves are never good openings
        assert!(!is_good_initial_guess(&targets, &w("bleak")));
        // TRAIN: four of NORTH's letters at most
        assert!(is_good_initial_guess(&targets, &w("train")));
        assert!(!is_good_initial_guess(&targets, &w("tr*in")));
    }

    #[test]
    fn generation_is_deterministic() {
        let eligible = words(&[
            "north", "bleak", "crisp", "thumb", "gravy", "plumb", "fight", "sword", "train",
        ]);
        let generator = PuzzleGenerator::new(&eligible);
        for seed in 0..50 {
            assert_eq!(generator.generate(seed), generator.generate(seed));
        }
    }

    #[test]
    fn generated_puzzles_satisfy_invariants() {
        let eligible = words(&[
            "north", "bleak", "crisp", "thumb", "gravy", "plumb", "fight", "sword", "train",
            "quick", "jumpy", "dwelt", "fjord", "nymph",
        ]);
        let generator = PuzzleGenerator::new(&eligible);
        for seed in 0..200 {
            let puzzle = generator.make_puzzle(seed).unwrap();
            let [a, b] = &puzzle.targets;
            assert_ne!(a, b);
            assert!(a.chars().iter().all(|&letter| !b.has_letter(letter)));
            assert_eq!(puzzle.initial_guesses.len(), 1);
            assert!(is_good_initial_guess(&puzzle.targets, &puzzle.initial_guesses[0]));
        }
    }

    #[test]
    fn generation_follows_draw_order() {
        let eligible = words(&["north", "bleak", "crisp", "thumb", "gravy", "train"]);
        let generator = PuzzleGenerator::new(&eligible);
        let generated = generator.generate(11).unwrap();

        // Replay the same draws by hand
        let mut rng = SeededRng::new(11);
        let mut draws = 0;
        let targets = loop {
            let a = rng.pick(&eligible).unwrap();
            let b = rng.pick(&eligible).unwrap();
            draws += 2;
            if is_valid_clue_pair(a, b) {
                break [a.clone(), b.clone()];
            }
        };
        let opening = loop {
            let candidate = rng.pick(&eligible).unwrap();
            draws += 1;
            if is_good_initial_guess(&targets, candidate) {
                break candidate.clone();
            }
        };

        assert_eq!(generated.puzzle.targets, targets);
        assert_eq!(generated.puzzle.initial_guesses, vec![opening]);
        assert_eq!(generated.draws, draws);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let generator = PuzzleGenerator::new(&[]);
        assert_eq!(generator.make_puzzle(1), Err(GenerationError::EmptyCatalog));
    }

    #[test]
    fn unsatisfiable_catalog_hits_draw_cap() {
        // Every pair shares a letter
        let eligible = words(&["north", "thumb", "torch"]);
        let generator = PuzzleGenerator::new(&eligible).with_max_draws(500);
        assert_eq!(
            generator.make_puzzle(1),
            Err(GenerationError::Exhausted {
                stage: GenerationStage::Targets,
                draws: 500,
            })
        );
    }

    #[test]
    fn no_opening_guess_hits_draw_cap() {
        // The only valid pair leaves nothing but the targets to open with
        let eligible = words(&["north", "bleak"]);
        let generator = PuzzleGenerator::new(&eligible).with_max_draws(1_000);
        assert!(matches!(
            generator.make_puzzle(5),
            Err(GenerationError::Exhausted {
                stage: GenerationStage::OpeningGuess,
                ..
            })
        ));
    }

    #[test]
    fn is_target_checks_both_words() {
        let puzzle = Puzzle {
            targets: [w("north"), w("bleak")],
            initial_guesses: vec![w("train")],
        };
        assert!(puzzle.is_target(&w("bleak")));
        assert!(!puzzle.is_target(&w("train")));
    }
}
