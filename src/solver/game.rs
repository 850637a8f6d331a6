//! The iterative resolution loop
//!
//! One game is a strictly sequential alternation: compile the accumulated
//! clues into a problem manifest, hand it to the resolver, surface the
//! selected word as the guess, translate the feedback into new clues,
//! repeat. The clue list is owned here, grows monotonically within a game,
//! and is discarded with the game.

use super::compile::problem_manifest;
use super::feedback::{Feedback, translate};
use super::resolver::{Resolution, Resolve};
use crate::core::{Clue, Word};
use crate::dictionary::Dictionary;
use anyhow::{Context, Result, anyhow};

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the next resolution
    InProgress,
    /// The answer was found
    Won,
    /// The resolver proved no dictionary word fits the clues
    GaveUp,
}

/// One game of Wordle driven by dependency resolution
pub struct Game<'a, R: Resolve> {
    resolver: &'a R,
    dictionary: &'a Dictionary,
    clues: Vec<Clue>,
    rounds: usize,
    status: GameStatus,
}

impl<'a, R: Resolve> Game<'a, R> {
    /// Start a fresh game, clearing any leftover resolver state
    ///
    /// # Errors
    /// Returns an error if stale resolver state cannot be cleared.
    pub fn new(resolver: &'a R, dictionary: &'a Dictionary) -> Result<Self> {
        resolver
            .clear_state()
            .context("Failed to clear resolver state")?;
        Ok(Self {
            resolver,
            dictionary,
            clues: Vec::new(),
            rounds: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Compile the clues, resolve, and produce the next guess
    ///
    /// `None` means the resolver proved the clue set unsatisfiable: no
    /// dictionary word is consistent with everything observed so far. That
    /// is a valid solve outcome, not an error, and it ends the game.
    ///
    /// # Errors
    /// Propagates resolver infrastructure failures; those abort the game
    /// rather than being retried, since re-running a deterministic resolver
    /// on unchanged inputs cannot change the outcome.
    pub fn next_guess(&mut self) -> Result<Option<&'a Word>> {
        let manifest = problem_manifest(&self.clues);

        match self.resolver.resolve(&manifest)? {
            Resolution::Unsatisfiable => {
                self.status = GameStatus::GaveUp;
                Ok(None)
            }
            Resolution::Word(index) => {
                let word = self.dictionary.word(index).ok_or_else(|| {
                    anyhow!(
                        "Resolver selected word index {index}, but the dictionary has {} words",
                        self.dictionary.len()
                    )
                })?;
                self.rounds += 1;
                Ok(Some(word))
            }
        }
    }

    /// Record the feedback for the last guess
    ///
    /// All-green feedback wins the game; anything else is translated into
    /// clues and appended to the accumulated set. Returns `true` on a win.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) -> bool {
        if feedback.is_win() {
            self.status = GameStatus::Won;
            return true;
        }
        self.clues.extend(translate(guess, feedback));
        false
    }

    /// Current game status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of guesses produced so far
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The accumulated clue list
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}
