//! Universe generation command

use crate::dictionary::Dictionary;
use crate::universe::{build_package_dir, expected_package_count, verify_package_dir};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Generate the full package universe into `directory` and verify it
///
/// # Errors
/// Returns an error if any package cannot be written, or if the
/// post-generation consistency check finds a package missing.
pub fn run_generate(directory: &Path, dictionary: &Dictionary) -> Result<()> {
    println!(
        "Generating {} packages for {} words into {}",
        expected_package_count(dictionary),
        dictionary.len(),
        directory.display()
    );

    let written = build_package_dir(directory, dictionary)?;

    // A hole in the universe surfaces as an inscrutable resolver failure
    // mid-game, so fail here instead
    verify_package_dir(directory, dictionary)?;

    println!(
        "\n{} {} packages written and verified",
        "✅".green(),
        written.to_string().bright_yellow().bold()
    );
    Ok(())
}
