//! Alphabet letters with 1-indexed ordinals
//!
//! Package versions carry letters as ordinals (`a` = 1 .. `z` = 26), so the
//! letter ⇄ ordinal mapping must be bijective.

use std::fmt;

/// A lowercase ASCII letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for invalid letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic(c) => write!(f, "Not an ASCII letter: {c:?}"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: u8 = 26;

    /// Create a letter from an ASCII byte, normalizing case
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a..=z` /
    /// `A..=Z`.
    pub const fn from_byte(byte: u8) -> Result<Self, LetterError> {
        match byte {
            b'a'..=b'z' => Ok(Self(byte)),
            b'A'..=b'Z' => Ok(Self(byte + 32)),
            other => Err(LetterError::NotAlphabetic(other as char)),
        }
    }

    /// Create a letter from its 1-indexed ordinal
    ///
    /// Returns `None` unless `ordinal` is in `1..=26`.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal >= 1 && ordinal <= Self::COUNT {
            Some(Self(b'a' + ordinal - 1))
        } else {
            None
        }
    }

    /// The 1-indexed ordinal (`a` = 1, `z` = 26)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.0 - b'a' + 1
    }

    /// The letter as a lowercase byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// The letter as a lowercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Iterate over the whole alphabet in order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
