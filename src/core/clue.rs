//! Per-letter clue calculation and the two-target merge
//!
//! A guess is clued against each target independently with Wordle's duplicate
//! letter rules, then the two clue rows are merged cell by cell keeping the
//! better clue:
//! - Absent (letter not accounted for in the target)
//! - Elsewhere (letter in the target, wrong position)
//! - Correct (letter in the right position)

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Feedback for a single cell, ordered from worst to best news
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Clue {
    Absent,
    Elsewhere,
    Correct,
}

impl Clue {
    /// Word used in the spoken description of a clue row
    #[must_use]
    pub const fn spoken(self) -> &'static str {
        match self {
            Self::Absent => "no",
            Self::Elsewhere => "elsewhere",
            Self::Correct => "correct",
        }
    }
}

/// Share glyphs indexed by clue: Absent, Elsewhere, Correct
const GLYPHS: [char; 3] = ['⬛', '🟨', '🟩'];
const COLOR_BLIND_GLYPHS: [char; 3] = ['⬛', '🟦', '🟧'];

/// A guess letter paired with its clue
///
/// `clue` is `None` for cells past the end of a partially typed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CluedLetter {
    pub letter: u8,
    pub clue: Option<Clue>,
}

impl CluedLetter {
    const EMPTY: Self = Self {
        letter: b' ',
        clue: None,
    };
}

/// One row of feedback, one cell per target position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clues([CluedLetter; WORD_LENGTH]);

impl Clues {
    /// Clue a complete guess against a single target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: mark Elsewhere while the pool still holds the letter
    ///
    /// # Examples
    /// ```
    /// use xordle::core::{Clue, Clues, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let clues = Clues::calculate(&guess, &target);
    ///
    /// assert_eq!(clues.count(Clue::Correct), 2);
    /// assert_eq!(clues.count(Clue::Elsewhere), 0);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self::compute(guess.chars(), target)
    }

    /// Clue a guess that may still be shorter than the target
    ///
    /// Cells past the typed letters keep an unset clue. Extra letters beyond the
    /// target length are ignored.
    #[must_use]
    pub fn partial(typed: &str, target: &Word) -> Self {
        let typed = typed.as_bytes();
        Self::compute(&typed[..typed.len().min(WORD_LENGTH)], target)
    }

    fn compute(guess: &[u8], target: &Word) -> Self {
        let mut cells = [CluedLetter::EMPTY; WORD_LENGTH];
        let mut remaining = target.letter_counts();

        // First pass: exact positions
        for (i, (&letter, cell)) in guess.iter().zip(cells.iter_mut()).enumerate() {
            cell.letter = letter;
            if target.chars()[i] == letter {
                cell.clue = Some(Clue::Correct);
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced letters
        for cell in cells.iter_mut().take(guess.len()) {
            if cell.clue.is_some() {
                continue;
            }
            cell.clue = match remaining.get_mut(&cell.letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Some(Clue::Elsewhere)
                }
                _ => Some(Clue::Absent),
            };
        }

        Self(cells)
    }

    /// Merge two rows for the same guess, keeping the better clue per cell
    ///
    /// # Examples
    /// ```
    /// use xordle::core::{Clue, Clues, Word};
    ///
    /// let guess = Word::new("blank").unwrap();
    /// let a = Clues::calculate(&guess, &Word::new("north").unwrap());
    /// let b = Clues::calculate(&guess, &Word::new("bleak").unwrap());
    /// let merged = a.xor(&b);
    ///
    /// assert_eq!(merged.count(Clue::Correct), 3); // B, L, K
    /// assert_eq!(merged.count(Clue::Elsewhere), 2); // A from BLEAK, N from NORTH
    /// ```
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let mut cells = self.0;
        for (cell, theirs) in cells.iter_mut().zip(other.0.iter()) {
            cell.clue = cell.clue.max(theirs.clue);
        }
        Self(cells)
    }

    /// Composite clue row for a guess against both targets
    #[must_use]
    pub fn composite(guess: &Word, targets: &[Word; 2]) -> Self {
        Self::calculate(guess, &targets[0]).xor(&Self::calculate(guess, &targets[1]))
    }

    /// Count cells carrying the given clue
    #[must_use]
    pub fn count(&self, clue: Clue) -> usize {
        self.0.iter().filter(|cell| cell.clue == Some(clue)).count()
    }

    /// Cells in position order
    pub fn iter(&self) -> impl Iterator<Item = &CluedLetter> {
        self.0.iter()
    }

    /// Render the row as share glyphs; unset cells render as Absent
    ///
    /// # Examples
    /// ```
    /// use xordle::core::{Clues, Word};
    ///
    /// let clues = Clues::calculate(&Word::new("blank").unwrap(), &Word::new("bleak").unwrap());
    /// assert_eq!(clues.to_emoji(false), "🟩🟩🟨⬛🟩");
    /// assert_eq!(clues.to_emoji(true), "🟧🟧🟦⬛🟧");
    /// ```
    #[must_use]
    pub fn to_emoji(&self, color_blind: bool) -> String {
        let glyphs = if color_blind {
            COLOR_BLIND_GLYPHS
        } else {
            GLYPHS
        };
        self.0
            .iter()
            .map(|cell| glyphs[cell.clue.map_or(0, |clue| clue as usize)])
            .collect()
    }

    /// Spoken form of the row, e.g. `"B correct, L correct, A elsewhere, ..."`
    ///
    /// Stops at the first unset cell.
    #[must_use]
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map_while(|cell| {
                cell.clue.map(|clue| {
                    format!(
                        "{} {}",
                        char::from(cell.letter).to_ascii_uppercase(),
                        clue.spoken()
                    )
                })
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Best clue seen for each letter across the locked-in guesses
///
/// Derived data: rebuild it from the guess list whenever the list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterAggregate(FxHashMap<u8, Clue>);

impl LetterAggregate {
    /// Fold the composite clues of every guess into a per-letter maximum
    #[must_use]
    pub fn from_guesses(guesses: &[Word], targets: &[Word; 2]) -> Self {
        let mut best: FxHashMap<u8, Clue> = FxHashMap::default();
        for guess in guesses {
            for cell in Clues::composite(guess, targets).iter() {
                let Some(clue) = cell.clue else { break };
                best.entry(cell.letter)
                    .and_modify(|old| *old = (*old).max(clue))
                    .or_insert(clue);
            }
        }
        Self(best)
    }

    /// Best clue for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Clue> {
        self.0.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn clues_of(guess: &str, target: &str) -> Vec<Clue> {
        Clues::calculate(&w(guess), &w(target))
            .iter()
            .map(|cell| cell.clue.unwrap())
            .collect()
    }

    use super::Clue::{Absent as A, Correct as C, Elsewhere as E};

    #[test]
    fn clue_ordering_is_total() {
        assert!(Clue::Absent < Clue::Elsewhere);
        assert!(Clue::Elsewhere < Clue::Correct);
        assert_eq!(Clue::Absent.max(Clue::Correct), Clue::Correct);
    }

    #[test]
    fn word_against_itself_is_all_correct() {
        for text in ["north", "bleak", "speed", "aaaaa", "murky"] {
            let word = w(text);
            assert_eq!(Clues::calculate(&word, &word).count(Clue::Correct), WORD_LENGTH);
        }
    }

    #[test]
    fn all_absent_when_no_letters_shared() {
        assert_eq!(clues_of("north", "bleak"), vec![A, A, A, A, A]);
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O elsewhere, second O correct
        assert_eq!(clues_of("robot", "floor"), vec![E, E, A, C, A]);
    }

    #[test]
    fn duplicate_guess_letters_limited_by_target_count() {
        // SPEED vs ABIDE: only one E in the target
        assert_eq!(clues_of("speed", "abide"), vec![A, A, E, A, E]);
        // EERIE vs THREE: the exact E leaves one E for the leading pair
        assert_eq!(clues_of("eerie", "three"), vec![E, A, C, A, C]);
    }

    #[test]
    fn letter_fairness_holds_for_catalog_sample() {
        let words = [
            "speed", "eerie", "three", "robot", "floor", "llama", "sassy", "north", "abide",
        ];
        for guess in words {
            for target in words {
                let (g, t) = (w(guess), w(target));
                let clues = Clues::calculate(&g, &t);
                for letter in b'a'..=b'z' {
                    let marked = clues
                        .iter()
                        .filter(|cell| {
                            cell.letter == letter
                                && matches!(cell.clue, Some(Clue::Correct | Clue::Elsewhere))
                        })
                        .count();
                    let available = t.chars().iter().filter(|&&c| c == letter).count();
                    assert!(marked <= available, "{guess} vs {target} overcounts {letter}");
                }
            }
        }
    }

    #[test]
    fn partial_guess_leaves_tail_unset() {
        let clues = Clues::partial("bl", &w("bleak"));
        let cells: Vec<_> = clues.iter().map(|cell| cell.clue).collect();
        assert_eq!(cells, vec![Some(C), Some(C), None, None, None]);
        assert_eq!(clues.describe(), "B correct, L correct");
    }

    #[test]
    fn partial_empty_guess_is_all_unset() {
        let clues = Clues::partial("", &w("bleak"));
        assert!(clues.iter().all(|cell| cell.clue.is_none()));
        assert_eq!(clues.describe(), "");
    }

    #[test]
    fn xor_takes_best_clue_per_cell() {
        let guess = w("thank");
        let a = Clues::calculate(&guess, &w("north"));
        let b = Clues::calculate(&guess, &w("bleak"));
        let merged: Vec<_> = a.xor(&b).iter().map(|cell| cell.clue.unwrap()).collect();
        // T, H and N are elsewhere in NORTH; A is elsewhere and K correct in BLEAK
        assert_eq!(merged, vec![E, E, E, E, C]);
    }

    #[test]
    fn xor_is_commutative_and_idempotent() {
        let targets = [w("north"), w("bleak")];
        for guess in ["thank", "robot", "speed", "blank", "earth"] {
            let g = w(guess);
            let a = Clues::calculate(&g, &targets[0]);
            let b = Clues::calculate(&g, &targets[1]);
            assert_eq!(a.xor(&b), b.xor(&a));
            assert_eq!(a.xor(&a), a);
        }
    }

    #[test]
    fn composite_matches_manual_merge() {
        let targets = [w("north"), w("bleak")];
        let guess = w("earth");
        let manual =
            Clues::calculate(&guess, &targets[0]).xor(&Clues::calculate(&guess, &targets[1]));
        assert_eq!(Clues::composite(&guess, &targets), manual);
    }

    #[test]
    fn describe_spells_out_every_cell() {
        let clues = Clues::calculate(&w("thank"), &w("bleak"));
        assert_eq!(
            clues.describe(),
            "T no, H no, A elsewhere, N no, K correct"
        );
    }

    #[test]
    fn emoji_row_has_one_glyph_per_cell() {
        let clues = Clues::partial("bl", &w("bleak"));
        assert_eq!(clues.to_emoji(false), "🟩🟩⬛⬛⬛");
        assert_eq!(clues.to_emoji(false).chars().count(), 5);
    }

    #[test]
    fn aggregate_keeps_best_clue_per_letter() {
        let targets = [w("north"), w("bleak")];
        let guesses = vec![w("train"), w("torch")];
        let aggregate = LetterAggregate::from_guesses(&guesses, &targets);

        // R is only elsewhere in TRAIN but correct in TORCH
        assert_eq!(aggregate.get(b'o'), Some(Clue::Correct));
        assert_eq!(aggregate.get(b'r'), Some(Clue::Correct));
        assert_eq!(aggregate.get(b'T'), Some(Clue::Elsewhere));
        assert_eq!(aggregate.get(b'i'), Some(Clue::Absent));
        assert_eq!(aggregate.get(b'z'), None);
    }

    #[test]
    fn aggregate_of_no_guesses_is_empty() {
        let targets = [w("north"), w("bleak")];
        let aggregate = LetterAggregate::from_guesses(&[], &targets);
        assert!(aggregate.is_empty());
    }
}
