//! The answer dictionary and its version ordering
//!
//! Words double as package versions: word at index `i` becomes
//! `wordle_word == i.0.0`. The external resolver breaks ties by picking the
//! highest eligible version, so the dictionary sorts words in increasing
//! order of guess quality (distinct-letter count, then cumulative letter
//! frequency across the corpus). The resolver's default tie-break then acts
//! as a guess-quality heuristic for free.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashMap;

/// An ordered word list with a stable word ⇄ index mapping
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from a word list
    ///
    /// Deduplicates, then sorts by ascending guess quality so that better
    /// guesses get higher indices (and thus higher package versions).
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_by(|a, b| a.text().cmp(b.text()));
        words.dedup();

        let frequencies = letter_frequencies(&words);
        words.sort_by_key(|word| {
            let freq_score: u64 = word
                .letters()
                .iter()
                .map(|l| frequencies.get(&l.ordinal()).copied().unwrap_or(0))
                .sum();
            (word.distinct_letters(), freq_score, word.text().to_string())
        });

        Self { words }
    }

    /// The embedded answer dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(ANSWERS))
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a version index
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Version index of a word
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// All words in version order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Count letter occurrences across the whole corpus, keyed by ordinal
fn letter_frequencies(words: &[Word]) -> FxHashMap<u8, u64> {
    let mut frequencies = FxHashMap::default();
    for word in words {
        for letter in word.letters() {
            *frequencies.entry(letter.ordinal()).or_insert(0) += 1;
        }
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn embedded_dictionary_is_nonempty() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), ANSWERS_COUNT);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn word_index_roundtrip() {
        let dictionary = Dictionary::new(vec![word("abide"), word("weird"), word("crane")]);

        for i in 0..dictionary.len() {
            let w = dictionary.word(i).unwrap();
            assert_eq!(dictionary.index_of(w), Some(i));
        }
        assert!(dictionary.word(dictionary.len()).is_none());
        assert!(dictionary.index_of(&word("zebra")).is_none());
    }

    #[test]
    fn distinct_letters_outrank_frequency() {
        // "eerie" has 3 distinct letters, the others 5, so it must sort first
        let dictionary = Dictionary::new(vec![word("weird"), word("eerie"), word("abide")]);
        assert_eq!(dictionary.word(0).unwrap().text(), "eerie");
    }

    #[test]
    fn frequency_breaks_distinct_ties() {
        // Both have 5 distinct letters; "weird" shares e/i/d with "abide"
        // but w and r are rarer in this tiny corpus than a and b... the
        // point is only that the order is deterministic and stable.
        let d1 = Dictionary::new(vec![word("abide"), word("weird")]);
        let d2 = Dictionary::new(vec![word("weird"), word("abide")]);
        assert_eq!(
            d1.words().iter().map(Word::text).collect::<Vec<_>>(),
            d2.words().iter().map(Word::text).collect::<Vec<_>>()
        );
    }

    #[test]
    fn duplicates_are_removed() {
        let dictionary = Dictionary::new(vec![word("abide"), word("ABIDE"), word("weird")]);
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn letter_frequencies_counts_occurrences() {
        let words = vec![word("eerie"), word("abide")];
        let frequencies = letter_frequencies(&words);
        // 'e' appears 3 times in eerie and once in abide
        assert_eq!(frequencies.get(&5).copied(), Some(4));
        // 'z' never appears
        assert_eq!(frequencies.get(&26), None);
    }
}
