//! Package universe generation
//!
//! Emits one manifest per (name, version) pair across the four package
//! families. The resolver needs the complete version universe to make a
//! selection, so every (letter, mask) pair exists even if no game ever
//! references it. Only feedback packages skip the empty position set;
//! feedback always names at least one position.

use super::manifest::{Manifest, exclude, pin};
use super::names;
use crate::core::{Letter, PositionSet, WORD_LEN, Word};
use crate::dictionary::Dictionary;
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Manifest for one dictionary word
///
/// Depends on the exact-position package for every position, pinned to the
/// word's letter at that position.
#[must_use]
pub fn word_manifest(word: &Word, index: usize) -> Manifest {
    Manifest::package(names::WORD_PACKAGE, names::word_version(index)).with_dependencies(
        word.indexed_letters().map(|(position, letter)| {
            pin(
                &names::exact_position_package(position),
                &names::exact_position_version(letter),
            )
        }),
    )
}

/// Manifest for one (position, letter) exact assignment
///
/// Forces the letter's own possible-position mask to include this position,
/// and every other letter's mask to exclude it. A position cannot hold two
/// letters at once.
#[must_use]
pub fn exact_position_manifest(letter: Letter, position: u8) -> Manifest {
    let own_forbidden = PositionSet::all_masks()
        .filter(|mask| !mask.contains(position))
        .map(names::possible_position_version);
    let own_spec = exclude(&names::possible_position_package(letter), own_forbidden);

    let other_specs = Letter::all().filter(|&other| other != letter).map(|other| {
        let forbidden = PositionSet::all_masks()
            .filter(|mask| mask.contains(position))
            .map(names::possible_position_version);
        exclude(&names::possible_position_package(other), forbidden)
    });

    Manifest::package(
        names::exact_position_package(position),
        names::exact_position_version(letter),
    )
    .with_dependencies(std::iter::once(own_spec).chain(other_specs))
}

/// Manifest for one (letter, mask) possible-position state
///
/// Pure state carrier; the version is the payload and there are no
/// dependencies.
#[must_use]
pub fn possible_position_manifest(letter: Letter, positions: PositionSet) -> Manifest {
    Manifest::package(
        names::possible_position_package(letter),
        names::possible_position_version(positions),
    )
}

/// Masks a feedback constraint must forbid
///
/// A mask is allowed exactly when its overlap with the clue's position set
/// agrees with the truth bit, so the forbidden set is the complement.
fn forbidden_masks(positions: PositionSet, truth: bool) -> impl Iterator<Item = PositionSet> {
    PositionSet::all_masks().filter(move |mask| mask.overlaps(positions) != truth)
}

/// Manifest for one (letter, position set, truth) feedback constraint
///
/// The two truth versions of a feedback package partition the 32-mask
/// universe: every mask satisfies exactly one of them.
#[must_use]
pub fn feedback_manifest(letter: Letter, positions: PositionSet, truth: bool) -> Manifest {
    let spec = exclude(
        &names::possible_position_package(letter),
        forbidden_masks(positions, truth).map(names::possible_position_version),
    );

    Manifest::package(
        names::feedback_package(letter, positions),
        names::feedback_version(truth),
    )
    .with_dependencies(std::iter::once(spec))
}

/// Every manifest in the universe for a given dictionary
#[must_use]
pub fn universe_manifests(dictionary: &Dictionary) -> Vec<Manifest> {
    let mut manifests = Vec::with_capacity(expected_package_count(dictionary));

    for (index, word) in dictionary.words().iter().enumerate() {
        manifests.push(word_manifest(word, index));
    }

    for letter in Letter::all() {
        for position in 1..=WORD_LEN {
            manifests.push(exact_position_manifest(letter, position));
        }
    }

    for letter in Letter::all() {
        for positions in PositionSet::all_masks() {
            manifests.push(possible_position_manifest(letter, positions));
        }
    }

    for letter in Letter::all() {
        for positions in PositionSet::all_masks().filter(|s| !s.is_empty()) {
            for truth in [true, false] {
                manifests.push(feedback_manifest(letter, positions, truth));
            }
        }
    }

    manifests
}

/// Number of packages a complete universe must contain
#[must_use]
pub fn expected_package_count(dictionary: &Dictionary) -> usize {
    let letters = Letter::COUNT as usize;
    let positions = WORD_LEN as usize;
    let masks = usize::from(crate::core::MASK_COUNT);
    dictionary.len() + letters * positions + letters * masks + letters * (masks - 1) * 2
}

/// Directory name for one package version: `{name}-{version}`
fn package_dir_name(manifest: &Manifest) -> String {
    format!("{}-{}", manifest.project.name, manifest.project.version)
}

/// Write one package directory: `pyproject.toml` plus an empty module
///
/// The empty `src/{name}/__init__.py` makes the package buildable into an
/// installable artifact.
fn write_package(directory: &Path, manifest: &Manifest) -> Result<()> {
    let package_dir = directory.join(package_dir_name(manifest));
    let module_dir = package_dir.join("src").join(&manifest.project.name);
    fs::create_dir_all(&module_dir)
        .with_context(|| format!("Failed to create {}", module_dir.display()))?;

    let toml = manifest
        .to_toml()
        .with_context(|| format!("Failed to serialize {}", manifest.project.name))?;
    fs::write(package_dir.join("pyproject.toml"), toml)
        .with_context(|| format!("Failed to write manifest in {}", package_dir.display()))?;
    fs::write(module_dir.join("__init__.py"), "")
        .with_context(|| format!("Failed to write module in {}", module_dir.display()))?;

    Ok(())
}

/// Materialize the whole package universe under `directory`
///
/// Each package gets its own directory, so writes are independent and run
/// in parallel. Returns the number of packages written.
///
/// # Errors
/// Returns an error if any package directory or file cannot be written.
pub fn build_package_dir(directory: &Path, dictionary: &Dictionary) -> Result<usize> {
    let manifests = universe_manifests(dictionary);

    let pb = ProgressBar::new(manifests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("writing packages");

    manifests.par_iter().try_for_each(|manifest| {
        let result = write_package(directory, manifest);
        pb.inc(1);
        result
    })?;

    pb.finish_with_message("done");
    Ok(manifests.len())
}

/// Check that every required package directory exists
///
/// A missing mask/letter/position package would surface much later as a
/// baffling resolver failure, so generation inconsistencies are caught here,
/// before the first round ever resolves.
///
/// # Errors
/// Returns an error naming the first missing package.
pub fn verify_package_dir(directory: &Path, dictionary: &Dictionary) -> Result<()> {
    for manifest in universe_manifests(dictionary) {
        let package_dir = directory.join(package_dir_name(&manifest));
        if !package_dir.join("pyproject.toml").is_file() {
            bail!(
                "Package universe is incomplete: missing {} {}",
                manifest.project.name,
                manifest.project.version
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: u8) -> Letter {
        Letter::from_byte(c).unwrap()
    }

    fn small_dictionary() -> Dictionary {
        Dictionary::new(vec![
            Word::new("abide").unwrap(),
            Word::new("weird").unwrap(),
            Word::new("crane").unwrap(),
        ])
    }

    #[test]
    fn word_manifest_pins_every_position() {
        let word = Word::new("weird").unwrap();
        let manifest = word_manifest(&word, 7);

        assert_eq!(manifest.project.name, "wordle_word");
        assert_eq!(manifest.project.version, "7.0.0");
        assert_eq!(
            manifest.project.dependencies,
            vec![
                "wordle_pos_1 ==23.0.0", // w
                "wordle_pos_2 ==5.0.0",  // e
                "wordle_pos_3 ==9.0.0",  // i
                "wordle_pos_4 ==18.0.0", // r
                "wordle_pos_5 ==4.0.0",  // d
            ]
        );
    }

    #[test]
    fn exact_position_manifest_constrains_all_letters() {
        let manifest = exact_position_manifest(letter(b'e'), 2);

        assert_eq!(manifest.project.name, "wordle_pos_2");
        assert_eq!(manifest.project.version, "5.0.0");
        // One spec for e itself plus one per other letter
        assert_eq!(manifest.project.dependencies.len(), 26);

        // Own letter: every mask without the position-2 bit is forbidden,
        // 16 of the 32 masks
        let own = &manifest.project.dependencies[0];
        assert!(own.starts_with("wordle_e_poss "));
        assert_eq!(own.matches("!=").count(), 16);
        assert!(own.contains("!=0.0.0"));

        // Other letters: masks with the bit set are forbidden instead
        let other = manifest
            .project
            .dependencies
            .iter()
            .find(|d| d.starts_with("wordle_a_poss "))
            .unwrap();
        assert_eq!(other.matches("!=").count(), 16);
        assert!(!other.contains("!=0.0.0"));
    }

    #[test]
    fn possible_position_manifest_is_a_pure_state_carrier() {
        let manifest = possible_position_manifest(letter(b'q'), PositionSet::from_mask(13));
        assert_eq!(manifest.project.name, "wordle_q_poss");
        assert_eq!(manifest.project.version, "13.0.0");
        assert!(manifest.project.dependencies.is_empty());
    }

    #[test]
    fn feedback_manifest_excludes_the_complement() {
        // "e in one of {3,4,5}": forbidden masks are those that miss 3, 4
        // and 5 entirely, i.e. subsets of {1,2} - there are 4 of them
        let positions = PositionSet::encode([3, 4, 5]);
        let manifest = feedback_manifest(letter(b'e'), positions, true);

        assert_eq!(manifest.project.name, "wordle_e_in_345");
        assert_eq!(manifest.project.version, "1.0.0");
        assert_eq!(manifest.project.dependencies.len(), 1);
        assert_eq!(manifest.project.dependencies[0].matches("!=").count(), 4);

        // The false version forbids the other 28
        let manifest = feedback_manifest(letter(b'e'), positions, false);
        assert_eq!(manifest.project.version, "0.0.0");
        assert_eq!(manifest.project.dependencies[0].matches("!=").count(), 28);
    }

    #[test]
    fn feedback_truth_versions_partition_the_mask_universe() {
        // Every mask satisfies exactly one of the two truth versions, for
        // every nonempty position set
        for positions in PositionSet::all_masks().filter(|s| !s.is_empty()) {
            let forbidden_true: Vec<PositionSet> = forbidden_masks(positions, true).collect();
            let forbidden_false: Vec<PositionSet> = forbidden_masks(positions, false).collect();

            for mask in PositionSet::all_masks() {
                let allowed_true = !forbidden_true.contains(&mask);
                let allowed_false = !forbidden_false.contains(&mask);
                assert_ne!(
                    allowed_true, allowed_false,
                    "mask {} under set {}",
                    mask.mask(),
                    positions.mask()
                );
            }
        }
    }

    #[test]
    fn universe_covers_all_families() {
        let dictionary = small_dictionary();
        let manifests = universe_manifests(&dictionary);

        // 3 words + 26*5 exact + 26*32 possible + 26*31*2 feedback
        assert_eq!(manifests.len(), 3 + 130 + 832 + 1612);
        assert_eq!(manifests.len(), expected_package_count(&dictionary));

        let words = manifests
            .iter()
            .filter(|m| m.project.name == "wordle_word")
            .count();
        assert_eq!(words, 3);

        // The empty position set exists as a possible-position version but
        // never as a feedback package
        assert!(
            manifests
                .iter()
                .any(|m| m.project.name == "wordle_a_poss" && m.project.version == "0.0.0")
        );
        assert!(
            !manifests
                .iter()
                .any(|m| m.project.name.starts_with("wordle_") && m.project.name.ends_with("_in_"))
        );
    }

    #[test]
    fn universe_names_and_versions_are_unique() {
        let dictionary = small_dictionary();
        let manifests = universe_manifests(&dictionary);

        let mut seen = std::collections::HashSet::new();
        for manifest in &manifests {
            assert!(
                seen.insert((manifest.project.name.clone(), manifest.project.version.clone())),
                "duplicate package {} {}",
                manifest.project.name,
                manifest.project.version
            );
        }
    }

    #[test]
    fn build_and_verify_roundtrip() {
        let dictionary = small_dictionary();
        let dir = tempfile::tempdir().unwrap();

        let written = build_package_dir(dir.path(), &dictionary).unwrap();
        assert_eq!(written, expected_package_count(&dictionary));

        verify_package_dir(dir.path(), &dictionary).unwrap();

        // A written package has the expected layout
        let package = dir.path().join("wordle_word-0.0.0");
        assert!(package.join("pyproject.toml").is_file());
        assert!(
            package
                .join("src")
                .join("wordle_word")
                .join("__init__.py")
                .is_file()
        );
    }

    #[test]
    fn verify_detects_missing_package() {
        let dictionary = small_dictionary();
        let dir = tempfile::tempdir().unwrap();

        build_package_dir(dir.path(), &dictionary).unwrap();
        fs::remove_dir_all(dir.path().join("wordle_q_poss-17.0.0")).unwrap();

        let err = verify_package_dir(dir.path(), &dictionary).unwrap_err();
        assert!(err.to_string().contains("wordle_q_poss"));
    }
}
