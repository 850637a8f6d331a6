//! Wordle via dependency resolution
//!
//! Turns the word-guessing puzzle into a constraint problem a general
//! purpose package resolver can solve: letters, positions and clues are
//! encoded as package names, versions and version-exclusion specs, and
//! `uv` does the actual constraint satisfaction.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_depsolve::core::{PositionSet, Word};
//! use wordle_depsolve::solver::{Feedback, translate};
//!
//! let guess = Word::new("weird").unwrap();
//! let feedback = Feedback::parse("GY...").unwrap();
//!
//! // W is pinned to position 1, everything else becomes exclusions
//! let clues = translate(&guess, &feedback);
//! assert_eq!(clues[0].positions, PositionSet::encode([1]));
//! ```

// Core domain types
pub mod core;

// The answer dictionary and its version ordering
pub mod dictionary;

// Package universe generation and publishing
pub mod universe;

// Feedback translation, manifest compilation, the resolution loop
pub mod solver;

// Command implementations
pub mod commands;
