//! Clue-set to problem-manifest compilation
//!
//! Each round compiles the full accumulated clue list into one ephemeral
//! manifest: an unconstrained dependency on the word package plus one
//! pinned feedback-package version per clue. The manifest is rebuilt from
//! scratch every round and never persisted past the resolution call.

use crate::core::Clue;
use crate::universe::Manifest;
use crate::universe::manifest::pin;
use crate::universe::names;

/// Name of the ephemeral problem package
pub const PROBLEM_NAME: &str = "problem";

/// Compile the accumulated clues into a problem manifest
///
/// Compilation is a pure function of the clue list, so compiling the same
/// list twice yields the same manifest.
#[must_use]
pub fn problem_manifest(clues: &[Clue]) -> Manifest {
    let feedback_pins = clues.iter().map(|clue| {
        pin(
            &names::feedback_package(clue.letter, clue.positions),
            names::feedback_version(clue.truth),
        )
    });

    Manifest::ephemeral(PROBLEM_NAME, "0.1.0").with_dependencies(
        std::iter::once(names::WORD_PACKAGE.to_string()).chain(feedback_pins),
    )
}
