//! The external resolver seam
//!
//! Dependency resolution is not implemented here; it is delegated to an
//! external general-purpose resolver behind the narrow [`Resolve`] trait.
//! The concrete implementation shells out to `uv lock`, which either
//! selects one version of every package in the closure or proves that no
//! consistent assignment exists.

use crate::universe::{Manifest, names};
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Marker uv prints on stderr when the constraint set has no solution
const UNSATISFIABLE_MARKER: &str = "requirements are unsatisfiable";

/// Outcome of one resolution call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A consistent assignment exists; the selected word-package index
    Word(usize),
    /// The resolver proved no word satisfies the accumulated constraints
    Unsatisfiable,
}

/// A pluggable dependency resolver
///
/// Manifest in, assignment-or-infeasible out. Anything else — broken
/// install, corrupt universe, missing lockfile — is an error, and callers
/// must not conflate it with unsatisfiability.
pub trait Resolve {
    /// Remove any resolution state left over from a previous run
    ///
    /// # Errors
    /// Returns an error if stale state exists but cannot be removed.
    fn clear_state(&self) -> Result<()> {
        Ok(())
    }

    /// Resolve a problem manifest
    ///
    /// # Errors
    /// Returns an error on any failure other than provable
    /// unsatisfiability.
    fn resolve(&self, manifest: &Manifest) -> Result<Resolution>;
}

/// Resolver backed by the `uv` package manager
///
/// Writes the problem manifest as `pyproject.toml` in a scratch directory,
/// runs `uv lock --find-links <wheels>`, and reads the selected word
/// version back out of `uv.lock`.
pub struct UvResolver {
    work_dir: PathBuf,
    wheels_dir: PathBuf,
    verbose: bool,
}

impl UvResolver {
    /// Create a resolver working in `work_dir` against `wheels_dir`
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>, wheels_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            wheels_dir: wheels_dir.into(),
            verbose: false,
        }
    }

    /// Echo uv's output after each invocation
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Extract the selected word index from lockfile contents
    fn word_index_from_lockfile(lockfile: &str) -> Result<usize> {
        let value: toml::Value = toml::from_str(lockfile).context("Failed to parse uv.lock")?;

        let wanted = names::lockfile_name(names::WORD_PACKAGE);
        let packages = value
            .get("package")
            .and_then(toml::Value::as_array)
            .ok_or_else(|| anyhow!("No package list in lockfile"))?;

        let word_package = packages
            .iter()
            .find(|p| p.get("name").and_then(toml::Value::as_str) == Some(wanted.as_str()))
            .ok_or_else(|| anyhow!("No word package in lockfile, something went wrong!"))?;

        let version = word_package
            .get("version")
            .and_then(toml::Value::as_str)
            .ok_or_else(|| anyhow!("Word package has no version in lockfile"))?;

        version_major(version)
    }
}

impl Resolve for UvResolver {
    fn clear_state(&self) -> Result<()> {
        let lockfile = self.work_dir.join("uv.lock");
        match fs::remove_file(&lockfile) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove {}", lockfile.display()))
            }
        }
    }

    fn resolve(&self, manifest: &Manifest) -> Result<Resolution> {
        fs::create_dir_all(&self.work_dir)
            .with_context(|| format!("Failed to create {}", self.work_dir.display()))?;

        let toml = manifest.to_toml().context("Failed to serialize manifest")?;
        fs::write(self.work_dir.join("pyproject.toml"), &toml)
            .context("Failed to write problem manifest")?;

        let output = Command::new("uv")
            .args(["lock", "--find-links"])
            .arg(&self.wheels_dir)
            .current_dir(&self.work_dir)
            .output()
            .context("Failed to run `uv lock`. Is uv installed?")?;

        if self.verbose {
            print!("{}", String::from_utf8_lossy(&output.stdout));
            eprint!("{}", String::from_utf8_lossy(&output.stderr));
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains(UNSATISFIABLE_MARKER) {
                return Ok(Resolution::Unsatisfiable);
            }
            bail!("uv lock failed: {stderr}");
        }

        let lockfile_path = self.work_dir.join("uv.lock");
        let lockfile = fs::read_to_string(&lockfile_path)
            .with_context(|| format!("Missing lockfile {}", lockfile_path.display()))?;

        Self::word_index_from_lockfile(&lockfile).map(Resolution::Word)
    }
}

/// Parse the major component out of a `"{major}.0.0"` version string
fn version_major(version: &str) -> Result<usize> {
    let major = version
        .split('.')
        .next()
        .unwrap_or_default()
        .parse::<usize>()
        .with_context(|| format!("Malformed package version {version:?}"))?;
    Ok(major)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_major_parses_payload() {
        assert_eq!(version_major("0.0.0").unwrap(), 0);
        assert_eq!(version_major("17.0.0").unwrap(), 17);
        assert_eq!(version_major("2314.0.0").unwrap(), 2314);
        assert!(version_major("x.0.0").is_err());
        assert!(version_major("").is_err());
    }

    #[test]
    fn word_index_from_lockfile_finds_the_word() {
        let lockfile = r#"
            version = 1

            [[package]]
            name = "problem"
            version = "0.1.0"

            [[package]]
            name = "wordle-word"
            version = "42.0.0"

            [[package]]
            name = "wordle-pos-1"
            version = "23.0.0"
        "#;
        assert_eq!(UvResolver::word_index_from_lockfile(lockfile).unwrap(), 42);
    }

    #[test]
    fn word_index_missing_package_is_an_error() {
        let lockfile = r#"
            version = 1

            [[package]]
            name = "problem"
            version = "0.1.0"
        "#;
        let err = UvResolver::word_index_from_lockfile(lockfile).unwrap_err();
        assert!(err.to_string().contains("No word package"));
    }

    #[test]
    fn word_index_garbage_lockfile_is_an_error() {
        assert!(UvResolver::word_index_from_lockfile("not toml [").is_err());
    }

    #[test]
    fn clear_state_tolerates_missing_lockfile() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = UvResolver::new(dir.path(), dir.path().join("wheels"));
        resolver.clear_state().unwrap();

        std::fs::write(dir.path().join("uv.lock"), "stale").unwrap();
        resolver.clear_state().unwrap();
        assert!(!dir.path().join("uv.lock").exists());
    }
}
