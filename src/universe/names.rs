//! Package naming and version conventions
//!
//! Every synthetic package name is derived here and nowhere else, so the
//! generator and the manifest compiler can never disagree. Versions are
//! always `"{major}.0.0"`; the major component carries the payload (a
//! position mask, a letter ordinal, a word index, or a truth bit).

use crate::core::{Letter, PositionSet};

/// Prefix shared by every generated package
pub const PREFIX: &str = "wordle_";

/// The word package family name
pub const WORD_PACKAGE: &str = "wordle_word";

/// Version of the word package for a dictionary index
#[must_use]
pub fn word_version(index: usize) -> String {
    format!("{index}.0.0")
}

/// Exact-letter package for one position, e.g. `wordle_pos_3`
#[must_use]
pub fn exact_position_package(position: u8) -> String {
    format!("{PREFIX}pos_{position}")
}

/// Version of an exact-position package carrying a letter ordinal
#[must_use]
pub fn exact_position_version(letter: Letter) -> String {
    format!("{}.0.0", letter.ordinal())
}

/// Possible-positions package for one letter, e.g. `wordle_e_poss`
#[must_use]
pub fn possible_position_package(letter: Letter) -> String {
    format!("{PREFIX}{letter}_poss")
}

/// Version of a possible-positions package carrying a position mask
#[must_use]
pub fn possible_position_version(positions: PositionSet) -> String {
    format!("{}.0.0", positions.mask())
}

/// Feedback package for a (letter, position set) pair, e.g. `wordle_e_in_345`
#[must_use]
pub fn feedback_package(letter: Letter, positions: PositionSet) -> String {
    format!("{PREFIX}{letter}_in_{positions}")
}

/// Version of a feedback package encoding the truth bit
#[must_use]
pub const fn feedback_version(truth: bool) -> &'static str {
    if truth { "1.0.0" } else { "0.0.0" }
}

/// Package name as it appears in the resolver's lockfile
///
/// uv normalizes underscores to hyphens when writing `uv.lock`.
#[must_use]
pub fn lockfile_name(name: &str) -> String {
    name.replace('_', "-")
}
