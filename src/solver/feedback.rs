//! Round feedback parsing and clue translation
//!
//! Feedback is a 5-character string over `{G, Y, .}` (case-insensitive),
//! aligned positionally with the guess. Translation runs in precedence
//! order Green, Yellow, Blank, because later passes must see which
//! positions earlier passes already committed.

use crate::core::{Clue, PositionSet, WORD_LEN, Word};
use std::fmt;

/// One position's worth of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right letter, right position
    Green,
    /// Letter present, wrong position
    Yellow,
    /// Letter absent (from the uncovered positions)
    Blank,
}

/// A full round of feedback, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Mark; WORD_LEN as usize]);

/// Error type for malformed feedback strings
///
/// Always recoverable: the caller re-prompts without mutating any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly 5 characters, got {len}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "Feedback characters must be one of G, Y, . — got {c:?}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Parse a feedback string like `"GY..."`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly five characters
    /// over `{G, Y, .}` (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use wordle_depsolve::solver::feedback::Feedback;
    ///
    /// assert!(Feedback::parse("GY...").is_ok());
    /// assert!(Feedback::parse("gy...").is_ok());
    /// assert!(Feedback::parse("GYX..").is_err());
    /// assert!(Feedback::parse("GGGG").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LEN as usize {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Blank; WORD_LEN as usize];
        for (slot, c) in marks.iter_mut().zip(chars) {
            *slot = match c.to_ascii_uppercase() {
                'G' => Mark::Green,
                'Y' => Mark::Yellow,
                '.' => Mark::Blank,
                other => return Err(FeedbackError::InvalidSymbol(other)),
            };
        }
        Ok(Self(marks))
    }

    /// All five marks green
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Green)
    }

    /// (position, mark) pairs, positions `1..=5`
    pub fn indexed_marks(&self) -> impl Iterator<Item = (u8, Mark)> {
        self.0.iter().enumerate().map(|(i, &m)| (i as u8 + 1, m))
    }
}

/// Translate one round's feedback into atomic clues
///
/// Precedence order matters:
/// 1. Green at position *p*: the letter is exactly there.
/// 2. Yellow at *p*: the letter is not there, but is in one of the
///    positions not already pinned by a green.
/// 3. Blank at *p*: the letter is in none of the positions still uncovered
///    by greens and yellows. Restricting to uncovered positions is what
///    makes repeated letters work; a letter may be blank at one position
///    and green or yellow at another in the same word.
#[must_use]
pub fn translate(guess: &Word, feedback: &Feedback) -> Vec<Clue> {
    let mut clues = Vec::new();
    let mut green_covered = PositionSet::EMPTY;
    let mut yellow_covered = PositionSet::EMPTY;

    for (position, mark) in feedback.indexed_marks() {
        if mark == Mark::Green {
            let letter = guess.letter_at(position);
            clues.push(Clue::new(letter, PositionSet::encode([position]), true));
            green_covered.insert(position);
        }
    }

    for (position, mark) in feedback.indexed_marks() {
        if mark == Mark::Yellow {
            let letter = guess.letter_at(position);
            clues.push(Clue::new(letter, PositionSet::encode([position]), false));
            yellow_covered.insert(position);

            let here = PositionSet::encode([position]);
            let possible = PositionSet::ALL.without(green_covered).without(here);
            clues.push(Clue::new(letter, possible, true));
        }
    }

    for (position, mark) in feedback.indexed_marks() {
        if mark == Mark::Blank {
            let letter = guess.letter_at(position);
            let uncovered = PositionSet::ALL
                .without(green_covered)
                .without(yellow_covered);
            clues.push(Clue::new(letter, uncovered, false));
        }
    }

    clues
}
