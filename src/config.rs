//! Game configuration and puzzle modes

use crate::core::{DEFAULT_MAX_DRAWS, Generated, GenerationError, PuzzleGenerator};
use crate::game::DEFAULT_MAX_GUESSES;
use crate::wordlists::{Catalog, DEFAULT_CUTOFF};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name used in share text
pub const GAME_NAME: &str = "xordle";

/// Days from 1970-01-01 to 2022-01-01, the date of puzzle #1
const FIRST_DAY_OFFSET: u64 = 18_993;
const SECONDS_PER_DAY: u64 = 86_400;

/// Which puzzle to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// The shared puzzle of the day, numbered from 1
    Daily { day: u32 },
    /// A private puzzle keyed by a session number
    Practice { session: u32 },
}

impl GameMode {
    /// Today's daily puzzle
    #[must_use]
    pub fn today() -> Self {
        Self::Daily {
            day: today_day_number(),
        }
    }

    /// Seed fed to the puzzle generator
    #[must_use]
    pub const fn seed(self) -> u32 {
        match self {
            Self::Daily { day } => day,
            Self::Practice { session } => session,
        }
    }

    /// Identifier the round is saved under
    #[must_use]
    pub fn round_id(self) -> String {
        match self {
            Self::Daily { day } => day.to_string(),
            Self::Practice { session } => format!("practice-{session}"),
        }
    }

    /// Share header label, e.g. `xordle #42`
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Daily { day } => format!("{GAME_NAME} #{day}"),
            Self::Practice { session } => format!("{GAME_NAME} practice #{session}"),
        }
    }

    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::Daily { .. })
    }
}

/// Daily puzzle number for a Unix timestamp (UTC); 0 before the first day
#[must_use]
pub fn day_number_at(unix_seconds: u64) -> u32 {
    let days = unix_seconds / SECONDS_PER_DAY;
    u32::try_from((days + 1).saturating_sub(FIRST_DAY_OFFSET)).unwrap_or(u32::MAX)
}

/// Today's daily puzzle number from the system clock
#[must_use]
pub fn today_day_number() -> u32 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    day_number_at(seconds).max(1)
}

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guess budget, opening guess included
    pub max_guesses: usize,
    /// Rarest target word still eligible
    pub cutoff: String,
    /// Cap on generator draws before giving up
    pub max_draws: usize,
    /// Blue/orange share glyphs and tiles
    pub color_blind: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            cutoff: DEFAULT_CUTOFF.to_string(),
            max_draws: DEFAULT_MAX_DRAWS,
            color_blind: false,
        }
    }
}

impl GameConfig {
    /// Generator over the catalog's eligible words with this config's draw cap
    #[must_use]
    pub fn generator<'a>(&self, catalog: &'a Catalog) -> PuzzleGenerator<'a> {
        PuzzleGenerator::new(catalog.eligible()).with_max_draws(self.max_draws)
    }

    /// Generate the puzzle for a mode
    ///
    /// # Errors
    /// Returns `GenerationError` if the catalog cannot satisfy the generator.
    pub fn generate(
        &self,
        catalog: &Catalog,
        mode: GameMode,
    ) -> Result<Generated, GenerationError> {
        self.generator(catalog).generate(mode.seed())
    }
}
