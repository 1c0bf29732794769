//! A round bound to its store
//!
//! The session restores a round on open, saves it after every accepted guess
//! and keeps the latest hint and spoken clue for the front end to show.

use super::round::{GuessError, GuessOutcome, Round, RoundStatus};
use super::store::{RoundStore, StoreError, guesses_key, status_key};
use crate::core::{Puzzle, Word};
use crate::wordlists::Catalog;
use log::{debug, warn};

/// An active round plus the store it is saved to
pub struct Session<S: RoundStore> {
    round: Round,
    store: S,
    round_id: String,
    hint: String,
    announcement: Option<String>,
}

impl<S: RoundStore> Session<S> {
    /// Resume the round saved under `round_id`, or start it fresh
    ///
    /// Saved history is ignored if it does not parse or does not begin with
    /// the puzzle's opening guesses. A saved status that no longer matches the
    /// history is corrected in the store.
    pub fn open(
        puzzle: Puzzle,
        max_guesses: usize,
        round_id: impl Into<String>,
        store: S,
    ) -> Self {
        let round_id = round_id.into();
        let (round, saved_status) = match load_history(&store, &round_id, &puzzle) {
            Some((guesses, status)) => {
                debug!(
                    "restored round {round_id}: {} guesses, {status:?}",
                    guesses.len()
                );
                let round = Round::restore(puzzle, max_guesses, guesses, status);
                (round, Some(status))
            }
            None => (Round::new(puzzle, max_guesses), None),
        };
        let hint = round.hint();

        let mut session = Self {
            round,
            store,
            round_id,
            hint,
            announcement: None,
        };
        if saved_status.is_some_and(|status| status != session.round.status()) {
            debug!(
                "round {} settled to {:?} on restore",
                session.round_id,
                session.round.status()
            );
            session.save();
        }
        session
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn round_id(&self) -> &str {
        &self.round_id
    }

    /// Latest message for the player
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Spoken description of the last accepted guess
    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Play a guess and save the result
    ///
    /// A rejected guess only updates the hint. Save failures are logged and
    /// do not undo the guess.
    ///
    /// # Errors
    /// Returns the `GuessError` from [`Round::submit`].
    pub fn submit(&mut self, raw: &str, catalog: &Catalog) -> Result<GuessOutcome, GuessError> {
        match self.round.submit(raw, catalog) {
            Ok(outcome) => {
                self.announcement = self.round.clue_rows().last().map(|row| row.describe());
                self.save();
                self.hint = self.round.hint();
                Ok(outcome)
            }
            Err(e) => {
                self.hint = e.to_string();
                Err(e)
            }
        }
    }

    fn save(&mut self) {
        if let Err(e) = self.try_save() {
            warn!("failed to save round {}: {e}", self.round_id);
        }
    }

    fn try_save(&mut self) -> Result<(), StoreError> {
        let guesses: Vec<&str> = self.round.guesses().iter().map(Word::text).collect();
        let guesses = serde_json::to_string(&guesses)?;
        let status = serde_json::to_string(&self.round.status())?;

        self.store.set(&status_key(&self.round_id), status)?;
        self.store.set(&guesses_key(&self.round_id), guesses)
    }
}

fn load_history<S: RoundStore>(
    store: &S,
    round_id: &str,
    puzzle: &Puzzle,
) -> Option<(Vec<Word>, RoundStatus)> {
    let raw_guesses = store.get(&guesses_key(round_id))?;

    let texts: Vec<String> = match serde_json::from_str(&raw_guesses) {
        Ok(texts) => texts,
        Err(e) => {
            warn!("discarding saved guesses for {round_id}: {e}");
            return None;
        }
    };
    let Ok(guesses) = texts.into_iter().map(Word::new).collect::<Result<Vec<_>, _>>() else {
        warn!("discarding saved guesses for {round_id}: invalid word");
        return None;
    };
    if !guesses.starts_with(&puzzle.initial_guesses) {
        warn!("discarding saved guesses for {round_id}: belongs to another puzzle");
        return None;
    }

    let status = store
        .get(&status_key(round_id))
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    Some((guesses, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::store::MemoryStore;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn puzzle() -> Puzzle {
        Puzzle {
            targets: [w("north"), w("bleak")],
            initial_guesses: vec![w("train")],
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(&["north", "bleak", "train", "crisp"], &["gravy"], "crisp").unwrap()
    }

    #[test]
    fn fresh_session_starts_new_round() {
        let session = Session::open(puzzle(), 6, "1", MemoryStore::new());
        assert_eq!(session.round().guesses(), &[w("train")]);
        assert_eq!(session.hint(), "start guessin'");
        assert_eq!(session.announcement(), None);
    }

    #[test]
    fn accepted_guess_is_saved() {
        let mut session = Session::open(puzzle(), 6, "7", MemoryStore::new());
        session.submit("crisp", &catalog()).unwrap();

        let store = session.store();
        assert_eq!(
            store.get("guesses-day-7").as_deref(),
            Some(r#"["train","crisp"]"#)
        );
        assert_eq!(store.get("game-day-7").as_deref(), Some(r#""Playing""#));
    }

    #[test]
    fn rejected_guess_updates_hint_only() {
        let mut session = Session::open(puzzle(), 6, "7", MemoryStore::new());
        assert_eq!(
            session.submit("zzzzz", &catalog()),
            Err(GuessError::NotInWordList)
        );
        assert_eq!(session.hint(), "that's not in the word list");
        assert_eq!(session.store().get("guesses-day-7"), None);
    }

    #[test]
    fn announcement_describes_last_guess() {
        let mut session = Session::open(puzzle(), 6, "7", MemoryStore::new());
        session.submit("bleak", &catalog()).unwrap();
        assert_eq!(
            session.announcement(),
            Some("B correct, L correct, E correct, A correct, K correct")
        );
        assert_eq!(session.hint(), "you got BLEAK, one more to go");
    }

    #[test]
    fn session_resumes_saved_round() {
        let catalog = catalog();
        let mut first = Session::open(puzzle(), 6, "9", MemoryStore::new());
        first.submit("north", &catalog).unwrap();
        first.submit("bleak", &catalog).unwrap();
        let store = first.store().clone();

        let resumed = Session::open(puzzle(), 6, "9", store);
        assert_eq!(resumed.round().status(), RoundStatus::Won);
        assert_eq!(resumed.round().guesses().len(), 3);
        assert!(resumed.hint().starts_with("you won!"));
    }

    #[test]
    fn history_from_another_puzzle_is_discarded() {
        let mut store = MemoryStore::new();
        store
            .set("guesses-day-2", r#"["crisp","north"]"#.to_string())
            .unwrap();

        let session = Session::open(puzzle(), 6, "2", store);
        assert_eq!(session.round().guesses(), &[w("train")]);
    }

    #[test]
    fn corrupt_history_is_discarded() {
        let mut store = MemoryStore::new();
        store.set("guesses-day-2", "[1, 2".to_string()).unwrap();
        store
            .set("guesses-day-3", r#"["train","x"]"#.to_string())
            .unwrap();

        assert_eq!(
            Session::open(puzzle(), 6, "2", store.clone()).round().guesses().len(),
            1
        );
        assert_eq!(
            Session::open(puzzle(), 6, "3", store).round().guesses().len(),
            1
        );
    }

    #[test]
    fn settled_status_is_written_back() {
        let mut store = MemoryStore::new();
        store
            .set("guesses-day-6", r#"["train","north","bleak"]"#.to_string())
            .unwrap();
        store
            .set("game-day-6", r#""Playing""#.to_string())
            .unwrap();

        let session = Session::open(puzzle(), 6, "6", store);
        assert_eq!(session.round().status(), RoundStatus::Won);
        assert_eq!(
            session.store().get("game-day-6").as_deref(),
            Some(r#""Won""#)
        );
    }

    #[test]
    fn unchanged_status_is_not_rewritten() {
        let mut store = MemoryStore::new();
        store
            .set("guesses-day-8", r#"["train","crisp"]"#.to_string())
            .unwrap();

        let session = Session::open(puzzle(), 6, "8", store);
        assert_eq!(session.round().status(), RoundStatus::Playing);
        assert_eq!(session.store().get("game-day-8"), None);
    }

    #[test]
    fn missing_status_defaults_to_playing() {
        let mut store = MemoryStore::new();
        store
            .set("guesses-day-4", r#"["train","crisp"]"#.to_string())
            .unwrap();

        let session = Session::open(puzzle(), 6, "4", store);
        assert_eq!(session.round().status(), RoundStatus::Playing);
        assert_eq!(session.round().guesses().len(), 2);
    }
}
