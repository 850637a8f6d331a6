//! Word list loading utilities

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Skips blank lines and entries that are not valid 5-letter words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_depsolve::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_depsolve::dictionary::loader::words_from_slice;
/// use wordle_depsolve::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["abide", "weird", "crane"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "abide");
        assert_eq!(words[1].text(), "weird");
        assert_eq!(words[2].text(), "crane");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["abide", "toolong", "abc", "weird"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "abide");
        assert_eq!(words[1].text(), "weird");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_skips_blanks_and_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "abide").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  weird  ").unwrap();
        writeln!(file, "nope!").unwrap();
        file.flush().unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "abide");
        assert_eq!(words[1].text(), "weird");
    }

    #[test]
    fn load_from_file_missing() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
