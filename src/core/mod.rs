//! Core domain types
//!
//! The fundamental vocabulary of the clue-to-manifest encoding: letters with
//! their ordinals, position sets with their bitmask codec, validated words,
//! and clues. Everything here is pure and independently testable.

mod clue;
mod letter;
mod mask;
mod word;

pub use clue::Clue;
pub use letter::{Letter, LetterError};
pub use mask::{MASK_COUNT, PositionSet, WORD_LEN};
pub use word::{Word, WordError};
