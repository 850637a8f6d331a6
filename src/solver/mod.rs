//! Solving via external dependency resolution
//!
//! Feedback translation, clue-to-manifest compilation, the resolver seam,
//! and the round-by-round game loop that ties them together.

pub mod compile;
pub mod feedback;
pub mod game;
pub mod resolver;

pub use compile::problem_manifest;
pub use feedback::{Feedback, FeedbackError, translate};
pub use game::{Game, GameStatus};
pub use resolver::{Resolution, Resolve, UvResolver};
