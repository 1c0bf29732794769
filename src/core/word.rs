//! Catalog word representation
//!
//! A Word stores a 5-letter word along with its letter counts for clue calculation.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Length of every target and guess
pub const WORD_LENGTH: usize = 5;

/// Placeholder marker used in the catalog for entries that must never be drawn
pub const WILDCARD: u8 = b'*';

/// A 5-letter word drawn from the catalog
///
/// Stores the word as bytes and keeps a tally of each letter for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letter_counts: FxHashMap<u8, u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Upper-case input is folded to lower case. The catalog placeholder `*`
    /// is accepted so masked entries survive loading; see [`Word::has_wildcard`].
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or any character is
    /// neither an ASCII letter nor the placeholder.
    ///
    /// # Examples
    /// ```
    /// use xordle::core::Word;
    ///
    /// let word = Word::new("North").unwrap();
    /// assert_eq!(word.text(), "north");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("n0rth").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b == WILDCARD)
        {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        let mut letter_counts: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in &chars {
            *letter_counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            chars,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// True if the word carries the catalog placeholder marker
    #[inline]
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.has_letter(WILDCARD)
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        self.letter_counts.clone()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}
