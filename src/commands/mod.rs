//! Command implementations

pub mod generate;
pub mod publish;
pub mod solve;

pub use generate::run_generate;
pub use publish::run_publish;
pub use solve::run_solve;
