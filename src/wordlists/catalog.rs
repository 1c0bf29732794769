//! Eligible targets and the guess acceptance set
//!
//! Built once at startup and shared read-only for the rest of the process.

use super::embedded::{DICTIONARY, TARGETS};
use super::loader::words_from_slice;
use crate::core::Word;
use log::info;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Rarest word still eligible as a target or opening guess
pub const DEFAULT_CUTOFF: &str = "murky";

/// Catalog configuration fault
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("cutoff word '{0}' is not in the target list")]
    MissingCutoff(String),
    #[error("no eligible five-letter targets up to '{0}'")]
    NoEligibleWords(String),
}

/// Word catalog: rank-limited target candidates plus the acceptance list
#[derive(Debug, Clone)]
pub struct Catalog {
    eligible: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl Catalog {
    /// Build a catalog from a rank-ordered target list and a dictionary
    ///
    /// The eligible set is every five-letter target up to and including
    /// `cutoff`. Targets are always accepted as guesses, placeholders never are.
    ///
    /// # Errors
    /// Returns `CatalogError` if `cutoff` is missing from `targets` or the
    /// eligible prefix is empty.
    ///
    /// # Examples
    /// ```
    /// use xordle::wordlists::Catalog;
    ///
    /// let catalog = Catalog::new(&["north", "bleak", "crisp"], &["train"], "bleak").unwrap();
    /// assert_eq!(catalog.eligible().len(), 2);
    /// assert!(catalog.accepts("crisp"));
    /// assert!(catalog.accepts("train"));
    /// ```
    pub fn new<T, D>(targets: &[T], dictionary: &[D], cutoff: &str) -> Result<Self, CatalogError>
    where
        T: AsRef<str>,
        D: AsRef<str>,
    {
        let end = targets
            .iter()
            .position(|word| word.as_ref() == cutoff)
            .ok_or_else(|| CatalogError::MissingCutoff(cutoff.to_string()))?;

        let eligible = words_from_slice(&targets[..=end]);
        if eligible.is_empty() {
            return Err(CatalogError::NoEligibleWords(cutoff.to_string()));
        }

        let accepted: FxHashSet<String> = dictionary
            .iter()
            .map(|word| word.as_ref())
            .chain(targets.iter().map(AsRef::as_ref))
            .filter(|word| !word.contains('*'))
            .map(str::to_lowercase)
            .collect();

        info!(
            "catalog: {} eligible words up to '{cutoff}', {} accepted guesses",
            eligible.len(),
            accepted.len()
        );

        Ok(Self { eligible, accepted })
    }

    /// Catalog over the lists compiled into the binary
    ///
    /// # Errors
    /// Returns `CatalogError` if `cutoff` is not in the embedded target list.
    pub fn embedded(cutoff: &str) -> Result<Self, CatalogError> {
        Self::new(TARGETS, DICTIONARY, cutoff)
    }

    /// Words puzzles are drawn from, in rank order
    #[must_use]
    pub fn eligible(&self) -> &[Word] {
        &self.eligible
    }

    /// True if `guess` may be played
    #[must_use]
    pub fn accepts(&self, guess: &str) -> bool {
        self.accepted.contains(guess)
    }
}
