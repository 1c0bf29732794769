//! Round play: the guess state machine and its persistence
//!
//! [`Round`] is pure state; [`Session`] binds a round to a [`RoundStore`].

mod round;
mod session;
pub mod store;

pub use round::{DEFAULT_MAX_GUESSES, GuessError, GuessOutcome, Round, RoundStatus};
pub use session::Session;
pub use store::{JsonFileStore, MemoryStore, RoundStore, StoreError};
