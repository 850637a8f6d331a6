//! Package manifest model
//!
//! The resolver consumes `pyproject.toml`-shaped manifests: a project name,
//! a version, and dependency strings of the form
//! `"<name> <comma-separated predicates>"` where a predicate is `==X.0.0`
//! or `!=X.0.0`.

use serde::Serialize;

/// A package manifest as written to `pyproject.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub project: Project,
    #[serde(rename = "build-system", skip_serializing_if = "Option::is_none")]
    pub build_system: Option<BuildSystem>,
}

/// The `[project]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// The `[build-system]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSystem {
    pub requires: Vec<String>,
    #[serde(rename = "build-backend")]
    pub build_backend: String,
}

impl BuildSystem {
    /// The backend used for every generated package
    #[must_use]
    pub fn hatchling() -> Self {
        Self {
            requires: vec!["hatchling".to_string()],
            build_backend: "hatchling.build".to_string(),
        }
    }
}

impl Manifest {
    /// A buildable package manifest (carries the build backend)
    #[must_use]
    pub fn package(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            project: Project {
                name: name.into(),
                version: version.into(),
                dependencies: Vec::new(),
            },
            build_system: Some(BuildSystem::hatchling()),
        }
    }

    /// An ephemeral manifest that is only ever resolved, never built
    #[must_use]
    pub fn ephemeral(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            project: Project {
                name: name.into(),
                version: version.into(),
                dependencies: Vec::new(),
            },
            build_system: None,
        }
    }

    /// Add dependency spec strings
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = String>) -> Self {
        self.project.dependencies.extend(dependencies);
        self
    }

    /// Serialize to TOML
    ///
    /// # Errors
    /// Returns a serialization error if the manifest cannot be encoded,
    /// which cannot happen for manifests built by this crate.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// Dependency spec pinning one exact version: `"name ==3.0.0"`
#[must_use]
pub fn pin(name: &str, version: &str) -> String {
    format!("{name} =={version}")
}

/// Dependency spec forbidding a list of versions: `"name !=0.0.0,!=4.0.0"`
///
/// The resolver's predicate language has no OR, so "version in allowed set"
/// is expressed as the conjunction of not-equal predicates over the
/// complement.
#[must_use]
pub fn exclude(name: &str, versions: impl IntoIterator<Item = String>) -> String {
    let predicates: Vec<String> = versions.into_iter().map(|v| format!("!={v}")).collect();
    format!("{name} {}", predicates.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_manifest_toml_shape() {
        let manifest = Manifest::package("wordle_word", "3.0.0")
            .with_dependencies(vec![pin("wordle_pos_1", "23.0.0")]);
        let toml = manifest.to_toml().unwrap();

        assert!(toml.contains("name = \"wordle_word\""));
        assert!(toml.contains("version = \"3.0.0\""));
        assert!(toml.contains("dependencies = [\"wordle_pos_1 ==23.0.0\"]"));
        assert!(toml.contains("[build-system]"));
        assert!(toml.contains("build-backend = \"hatchling.build\""));
    }

    #[test]
    fn ephemeral_manifest_has_no_build_system() {
        let manifest = Manifest::ephemeral("problem", "0.1.0");
        let toml = manifest.to_toml().unwrap();
        assert!(!toml.contains("build-system"));
    }

    #[test]
    fn dependency_free_manifest_omits_dependencies_key() {
        let manifest = Manifest::package("wordle_a_poss", "7.0.0");
        let toml = manifest.to_toml().unwrap();
        assert!(!toml.contains("dependencies"));
    }

    #[test]
    fn pin_spec() {
        assert_eq!(pin("wordle_word", "12.0.0"), "wordle_word ==12.0.0");
    }

    #[test]
    fn exclude_spec() {
        let spec = exclude(
            "wordle_e_poss",
            ["0.0.0".to_string(), "4.0.0".to_string(), "8.0.0".to_string()],
        );
        assert_eq!(spec, "wordle_e_poss !=0.0.0,!=4.0.0,!=8.0.0");
    }
}
