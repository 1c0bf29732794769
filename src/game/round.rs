//! Round state machine
//!
//! A round starts with the puzzle's opening guesses already on the board. Each
//! submitted guess is validated, appended, and then the status is settled:
//! both targets found wins; running out of guesses loses, unless the guess that
//! used up the budget was a target, which earns one bonus guess.

use crate::core::{Clues, LetterAggregate, Puzzle, WORD_LENGTH, Word};
use crate::wordlists::Catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default guess budget, opening guess included
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Round status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Why a guess was turned away; the message is shown to the player as is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("type more letters")]
    WrongLength,
    #[error("letters only")]
    NotAlphabetic,
    #[error("you've already guessed that")]
    Duplicate,
    #[error("that's not in the word list")]
    NotInWordList,
    #[error("the game is over")]
    GameOver,
}

/// What an accepted guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Still playing, nothing notable
    Continue,
    /// One of the targets was just found
    FoundTarget(Word),
    /// Budget used up on a target; one more guess allowed
    BonusGuess,
    Won,
    Lost,
}

/// One round of play over a fixed puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    puzzle: Puzzle,
    guesses: Vec<Word>,
    status: RoundStatus,
    max_guesses: usize,
}

impl Round {
    /// Start a fresh round seeded with the puzzle's opening guesses
    #[must_use]
    pub fn new(puzzle: Puzzle, max_guesses: usize) -> Self {
        let guesses = puzzle.initial_guesses.clone();
        Self::restore(puzzle, max_guesses, guesses, RoundStatus::Playing)
    }

    /// Rebuild a round from saved history
    ///
    /// A saved `Playing` status is settled again against the history so an
    /// interrupted round resumes in the right state. Terminal statuses are kept.
    #[must_use]
    pub fn restore(
        puzzle: Puzzle,
        max_guesses: usize,
        guesses: Vec<Word>,
        status: RoundStatus,
    ) -> Self {
        let mut round = Self {
            puzzle,
            guesses,
            status,
            max_guesses,
        };
        if round.status == RoundStatus::Playing {
            round.settle();
        }
        round
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Playing
    }

    /// True while the round is waiting on a bonus guess
    #[must_use]
    pub fn bonus_guess_available(&self) -> bool {
        self.status == RoundStatus::Playing
            && self.guesses.len() == self.max_guesses
            && self.last_guess_is_target()
    }

    /// Guesses allowed right now, counting a pending bonus guess
    #[must_use]
    pub fn guess_limit(&self) -> usize {
        self.max_guesses + usize::from(self.bonus_guess_available())
    }

    /// Rows to show on the board: the budget, plus the bonus row when earned
    #[must_use]
    pub fn board_rows(&self) -> usize {
        let bonus_row = self.bonus_guess_available()
            || (self.is_over() && self.guesses.len() > self.max_guesses);
        let rows = if bonus_row {
            self.max_guesses + 1
        } else {
            self.max_guesses
        };
        rows.max(self.guesses.len())
    }

    /// Validate and play a guess
    ///
    /// Rejected guesses leave the round untouched.
    ///
    /// # Errors
    /// Returns `GuessError` describing why the guess was rejected.
    ///
    /// # Examples
    /// ```
    /// use xordle::core::{Puzzle, Word};
    /// use xordle::game::{GuessOutcome, Round};
    /// use xordle::wordlists::Catalog;
    ///
    /// let w = |s: &str| Word::new(s).unwrap();
    /// let puzzle = Puzzle { targets: [w("north"), w("bleak")], initial_guesses: vec![w("train")] };
    /// let catalog = Catalog::new(&["north", "bleak", "train"], &[""; 0], "train").unwrap();
    /// let mut round = Round::new(puzzle, 6);
    ///
    /// assert_eq!(round.submit("north", &catalog), Ok(GuessOutcome::FoundTarget(w("north"))));
    /// assert_eq!(round.submit("BLEAK", &catalog), Ok(GuessOutcome::Won));
    /// ```
    pub fn submit(&mut self, raw: &str, catalog: &Catalog) -> Result<GuessOutcome, GuessError> {
        if self.is_over() || self.guesses.len() >= self.guess_limit() {
            return Err(GuessError::GameOver);
        }

        let text = raw.trim().to_lowercase();
        if text.chars().count() != WORD_LENGTH {
            return Err(GuessError::WrongLength);
        }
        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GuessError::NotAlphabetic);
        }
        if self.guesses.iter().any(|guess| guess.text() == text) {
            return Err(GuessError::Duplicate);
        }
        if !catalog.accepts(&text) {
            return Err(GuessError::NotInWordList);
        }
        let guess = Word::new(text).map_err(|_| GuessError::NotAlphabetic)?;

        let is_target = self.puzzle.is_target(&guess);
        self.guesses.push(guess.clone());
        self.settle();

        Ok(match self.status {
            RoundStatus::Won => GuessOutcome::Won,
            RoundStatus::Lost => GuessOutcome::Lost,
            RoundStatus::Playing if self.bonus_guess_available() => GuessOutcome::BonusGuess,
            RoundStatus::Playing if is_target => GuessOutcome::FoundTarget(guess),
            RoundStatus::Playing => GuessOutcome::Continue,
        })
    }

    fn settle(&mut self) {
        if self.puzzle.targets.iter().all(|t| self.guesses.contains(t)) {
            self.status = RoundStatus::Won;
        } else if self.guesses.len() >= self.max_guesses && !self.bonus_guess_available() {
            self.status = RoundStatus::Lost;
        }
    }

    fn last_guess_is_target(&self) -> bool {
        self.guesses
            .last()
            .is_some_and(|last| self.puzzle.is_target(last))
    }

    /// The target found so far, while the round is still undecided
    #[must_use]
    pub fn found_target(&self) -> Option<&Word> {
        if self.status == RoundStatus::Won {
            return None;
        }
        self.puzzle
            .targets
            .iter()
            .find(|target| self.guesses.contains(target))
    }

    /// Composite clue row for every guess, in order
    #[must_use]
    pub fn clue_rows(&self) -> Vec<Clues> {
        self.guesses
            .iter()
            .map(|guess| Clues::composite(guess, &self.puzzle.targets))
            .collect()
    }

    /// Best clue per letter over the locked-in guesses
    #[must_use]
    pub fn letter_aggregate(&self) -> LetterAggregate {
        LetterAggregate::from_guesses(&self.guesses, &self.puzzle.targets)
    }

    /// Status line for the player
    #[must_use]
    pub fn hint(&self) -> String {
        let [first, second] = &self.puzzle.targets;
        match self.status {
            RoundStatus::Won | RoundStatus::Lost => {
                let verbed = if self.status == RoundStatus::Won {
                    "won"
                } else {
                    "lost"
                };
                format!(
                    "you {verbed}! the answers were {}, {}. play again tomorrow",
                    first.text().to_uppercase(),
                    second.text().to_uppercase()
                )
            }
            RoundStatus::Playing if self.bonus_guess_available() => {
                "last chance! do a bonus guess".to_string()
            }
            RoundStatus::Playing => match self.found_target() {
                Some(target) => {
                    format!("you got {}, one more to go", target.text().to_uppercase())
                }
                None if self.guesses.len() <= self.puzzle.initial_guesses.len() => {
                    "start guessin'".to_string()
                }
                None => String::new(),
            },
        }
    }

    /// Share block: one row of glyphs per guess, newline separated
    ///
    /// # Examples
    /// ```
    /// use xordle::core::{Puzzle, Word};
    /// use xordle::game::Round;
    ///
    /// let w = |s: &str| Word::new(s).unwrap();
    /// let puzzle = Puzzle { targets: [w("north"), w("bleak")], initial_guesses: vec![w("blank")] };
    /// let round = Round::new(puzzle, 6);
    /// assert_eq!(round.summary(false), "🟩🟩🟨🟨🟩");
    /// ```
    #[must_use]
    pub fn summary(&self, color_blind: bool) -> String {
        self.clue_rows()
            .iter()
            .map(|row| row.to_emoji(color_blind))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Share text: `<label> <score>/<max>` followed by the summary block
    #[must_use]
    pub fn share_text(&self, label: &str, color_blind: bool) -> String {
        let score = if self.status == RoundStatus::Lost {
            "X".to_string()
        } else {
            self.guesses.len().to_string()
        };
        format!(
            "{label} {score}/{}\n{}",
            self.max_guesses,
            self.summary(color_blind)
        )
    }
}
