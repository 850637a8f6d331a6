//! Atomic clues derived from round feedback
//!
//! A clue asserts that a letter does (or does not) occupy one of a set of
//! positions. Clues accumulate across rounds within one game and are never
//! retracted; Wordle feedback is monotonic.

use super::letter::Letter;
use super::mask::PositionSet;
use super::word::Word;
use std::fmt;

/// One deduction about the answer: (letter, position set, truth)
///
/// `truth == true` means the letter occupies at least one of the positions;
/// `truth == false` means it occupies none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    pub letter: Letter,
    pub positions: PositionSet,
    pub truth: bool,
}

impl Clue {
    /// Create a clue
    #[must_use]
    pub const fn new(letter: Letter, positions: PositionSet, truth: bool) -> Self {
        Self {
            letter,
            positions,
            truth,
        }
    }

    /// Whether `word` is consistent with this clue
    ///
    /// This is the word-level reading of the constraint the resolver sees:
    /// the word's actual positions for the letter must overlap the clue's
    /// position set exactly when `truth` is set.
    ///
    /// # Examples
    /// ```
    /// use wordle_depsolve::core::{Clue, Letter, PositionSet, Word};
    ///
    /// let word = Word::new("weird").unwrap();
    /// let w = Letter::from_byte(b'w').unwrap();
    /// let clue = Clue::new(w, PositionSet::encode([1]), true);
    /// assert!(clue.holds(&word));
    /// ```
    #[must_use]
    pub fn holds(&self, word: &Word) -> bool {
        word.positions_of(self.letter).overlaps(self.positions) == self.truth
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.truth {
            write!(f, "{} in one of {{{}}}", self.letter, self.positions)
        } else {
            write!(f, "{} in none of {{{}}}", self.letter, self.positions)
        }
    }
}
