//! The lexicon of legal words and its letter frequency table

use crate::core::Word;
use std::collections::BTreeSet;

/// Number of words containing each letter at least once
///
/// Built once from a lexicon and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: [u32; 26],
}

impl LetterFrequency {
    /// Count, for every letter, how many words contain it
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut counts = [0u32; 26];
        for word in words {
            for letter in word.distinct_letters() {
                counts[usize::from(letter - b'a')] += 1;
            }
        }
        Self { counts }
    }

    /// Frequency of a lowercase ASCII letter; zero for anything else
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            self.counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }
}

/// Immutable set of legal words, sorted and de-duplicated
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    frequency: LetterFrequency,
}

impl Lexicon {
    /// Build a lexicon, collapsing duplicates
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    /// use wordlebot::lexicon::Lexicon;
    ///
    /// let words = ["slate", "crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let lexicon = Lexicon::new(words);
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.frequency().get(b'a'), 2);
    /// ```
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let words: Vec<Word> = words
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let frequency = LetterFrequency::from_words(&words);
        log::debug!("lexicon built with {} words", words.len());
        Self { words, frequency }
    }

    /// All words in lexicographic order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn frequency(&self) -> &LetterFrequency {
        &self.frequency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }
}
