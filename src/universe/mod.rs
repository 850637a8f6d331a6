//! The synthetic package universe
//!
//! Naming conventions, manifest model, universe generation and artifact
//! publishing for the four package families the manifest compiler can
//! reference.

pub mod generator;
pub mod manifest;
pub mod names;
pub mod publish;

pub use generator::{build_package_dir, expected_package_count, verify_package_dir};
pub use manifest::Manifest;
pub use publish::{PublishReport, publish_packages};
