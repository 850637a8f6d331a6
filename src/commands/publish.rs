//! Wheel publishing command

use crate::universe::publish_packages;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Build installable wheels for every generated package
///
/// # Errors
/// Returns an error if the package directory cannot be read, or if any
/// individual package failed to build (after attempting all of them).
pub fn run_publish(directory: &Path) -> Result<()> {
    println!("Publishing wheels from {}", directory.display());

    let report = publish_packages(directory)?;

    if report.is_complete() {
        println!(
            "\n{} {} wheels built",
            "✅".green(),
            report.built.to_string().bright_yellow().bold()
        );
        Ok(())
    } else {
        for (package, diagnostic) in &report.failed {
            eprintln!(
                "{} {}: {}",
                "❌".red(),
                package.display(),
                diagnostic.lines().next().unwrap_or("build failed")
            );
        }
        anyhow::bail!(
            "{} of {} packages failed to build",
            report.failed.len(),
            report.built + report.failed.len()
        )
    }
}
