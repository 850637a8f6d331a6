//! Wordle word representation
//!
//! A Word stores a validated 5-letter word and exposes its letters per
//! position (1-indexed, matching the position-mask convention).

use super::letter::Letter;
use super::mask::{PositionSet, WORD_LEN};
use std::fmt;

/// A 5-letter Wordle word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LEN as usize],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_depsolve::core::Word;
    ///
    /// let word = Word::new("weird").unwrap();
    /// assert_eq!(word.text(), "weird");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        // Validate length
        if text.len() != WORD_LEN as usize {
            return Err(WordError::InvalidLength(text.len()));
        }

        // Validate ASCII and alphabetic
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut letters = [Letter::from_byte(b'a').map_err(|_| WordError::InvalidCharacters)?;
            WORD_LEN as usize];
        for (slot, &byte) in letters.iter_mut().zip(text.as_bytes()) {
            *slot = Letter::from_byte(byte).map_err(|_| WordError::InvalidCharacters)?;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letter at a 1-indexed position
    ///
    /// # Panics
    /// Panics if `position` is outside `1..=5`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: u8) -> Letter {
        self.letters[position as usize - 1]
    }

    /// Iterate over (position, letter) pairs, positions `1..=5`
    pub fn indexed_letters(&self) -> impl Iterator<Item = (u8, Letter)> {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, &l)| (i as u8 + 1, l))
    }

    /// Positions occupied by `letter`, as a position set
    ///
    /// Returns the empty set if the letter doesn't appear.
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> PositionSet {
        PositionSet::encode(
            self.indexed_letters()
                .filter(|&(_, l)| l == letter)
                .map(|(p, _)| p),
        )
    }

    /// Whether the word contains `letter` anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        !self.positions_of(letter).is_empty()
    }

    /// Number of distinct letters in the word (1..=5)
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        let mut seen = [false; 26];
        for letter in self.letters {
            seen[letter.ordinal() as usize - 1] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// The word's letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LEN as usize] {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
