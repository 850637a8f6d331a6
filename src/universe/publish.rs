//! Wheel publishing for generated packages
//!
//! Builds one installable artifact per package directory by shelling out to
//! `uv build`. Every package directory is independent, so builds run in
//! parallel and one failure never blocks or corrupts the others.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

/// Name of the wheel directory created under the package root
pub const WHEELS_DIR: &str = "wheels";

/// Outcome of a publishing run
#[derive(Debug)]
pub struct PublishReport {
    /// Number of packages built successfully
    pub built: usize,
    /// Packages that failed, with the build diagnostic
    pub failed: Vec<(PathBuf, String)>,
}

impl PublishReport {
    /// Whether every package built
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Build a wheel for every package directory under `directory`
///
/// Removes any previous `wheels/` output first, then runs
/// `uv build -o ../wheels` in each package directory.
///
/// # Errors
/// Returns an error if the directory cannot be listed or the previous wheel
/// output cannot be removed. Individual build failures are collected in the
/// report instead.
pub fn publish_packages(directory: &Path) -> Result<PublishReport> {
    let wheels_dir = directory.join(WHEELS_DIR);
    match fs::remove_dir_all(&wheels_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to clear {}", wheels_dir.display()));
        }
    }

    let package_dirs: Vec<PathBuf> = fs::read_dir(directory)
        .with_context(|| format!("Failed to list {}", directory.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_dir() && path.file_name() != Some(std::ffi::OsStr::new(WHEELS_DIR))
        })
        .collect();

    let pb = ProgressBar::new(package_dirs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("building wheels");

    let failed = Mutex::new(Vec::new());
    package_dirs.par_iter().for_each(|package_dir| {
        if let Err(message) = build_wheel(package_dir) {
            failed.lock().unwrap().push((package_dir.clone(), message));
        }
        pb.inc(1);
    });
    pb.finish_with_message("done");

    let failed = failed.into_inner().unwrap();
    Ok(PublishReport {
        built: package_dirs.len() - failed.len(),
        failed,
    })
}

/// Build one package into `../wheels`, returning the diagnostic on failure
fn build_wheel(package_dir: &Path) -> Result<(), String> {
    let output = Command::new("uv")
        .args(["build", "-o", "../wheels"])
        .current_dir(package_dir)
        .output()
        .map_err(|e| format!("Failed to run `uv build`. Is uv installed? ({e})"))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_completeness() {
        let complete = PublishReport {
            built: 10,
            failed: Vec::new(),
        };
        assert!(complete.is_complete());

        let partial = PublishReport {
            built: 9,
            failed: vec![(PathBuf::from("pkg"), "boom".to_string())],
        };
        assert!(!partial.is_complete());
    }

    #[test]
    fn publish_on_missing_directory_fails() {
        assert!(publish_packages(Path::new("/nonexistent/universe")).is_err());
    }
}
