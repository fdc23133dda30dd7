use crate::results::WordleError;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// The number of distinct letters a word may contain (`a` to `z`).
pub const NUM_LETTERS: usize = 26;

/// A five-letter word made only of the lowercase letters `a` to `z`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Validates and constructs a word.
    ///
    /// ```
    /// use wordle_entropy_solver::Word;
    /// use wordle_entropy_solver::WordleError;
    ///
    /// assert!(Word::new("crane").is_ok());
    /// assert!(matches!(Word::new("cranes"), Err(WordleError::WordLength(6))));
    /// assert!(matches!(Word::new("Crane"), Err(WordleError::UnsupportedCharacter('C'))));
    /// ```
    pub fn new(word: &str) -> Result<Word, WordleError> {
        let num_chars = word.chars().count();
        if num_chars != WORD_LENGTH {
            return Err(WordleError::WordLength(num_chars));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(word.chars()) {
            if !letter.is_ascii_lowercase() {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            *slot = letter as u8;
        }
        Ok(Word(letters))
    }

    /// The ASCII bytes of this word, one per position.
    #[inline]
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// The letter at the given zero-based position.
    #[inline]
    pub fn letter_at(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Returns `true` iff the letter occurs anywhere in this word.
    #[inline]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Iterates over the letters of this word, skipping any letter already seen earlier in the
    /// word.
    pub fn unique_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(index, letter)| !self.0[..*index].contains(letter))
            .map(|(_, letter)| *letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(\"{}\")", self)
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Word::new(word)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordleError;

    fn try_from(word: &str) -> Result<Self, Self::Error> {
        Word::new(word)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        Word::new(&word)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

/// Contains all the words a game may use, in the order they were given.
///
/// Cloning a `WordBank` is cheap: the words are shared, never copied, so one bank can back any
/// number of sessions, including sessions running on other threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    all_words: Arc<[Word]>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each line is trimmed and converted to lower
    /// case, blank lines are skipped, and repeated words are only kept the first time they
    /// appear.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        WordBank::from_iterator(lines)
    }

    /// Constructs a new `WordBank` from the given words, with the same cleanup as
    /// [`WordBank::from_reader`].
    pub fn from_iterator<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<Word> = HashSet::new();
        let mut all_words: Vec<Word> = Vec::new();
        for word in words {
            let cleaned = word.as_ref().trim().to_lowercase();
            if cleaned.is_empty() {
                continue;
            }
            let word = Word::new(&cleaned)?;
            if seen.insert(word) {
                all_words.push(word);
            }
        }
        debug!(num_words = all_words.len(), "loaded word bank");
        Ok(WordBank {
            all_words: Arc::from(all_words),
        })
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the bank has no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// The frequency of each letter across every letter slot of a set of words.
///
/// A letter that appears twice in one word is counted twice.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterFrequencies {
    frequencies: [f64; NUM_LETTERS],
}

impl LetterFrequencies {
    /// Computes the letter frequencies for the given words.
    ///
    /// Fails with [`WordleError::NoCandidates`] if `words` is empty, since there are no letter
    /// slots to divide by.
    pub fn compute(words: &[Word]) -> Result<LetterFrequencies, WordleError> {
        if words.is_empty() {
            return Err(WordleError::NoCandidates);
        }
        let mut counts = [0u32; NUM_LETTERS];
        for word in words {
            for letter in word.letters() {
                counts[(letter - b'a') as usize] += 1;
            }
        }
        let num_slots = (WORD_LENGTH * words.len()) as f64;
        let mut frequencies = [0.0; NUM_LETTERS];
        for (frequency, count) in frequencies.iter_mut().zip(counts) {
            *frequency = count as f64 / num_slots;
        }
        Ok(LetterFrequencies { frequencies })
    }

    /// Returns the frequency of the given ASCII letter, or 0 for anything outside `a` to `z`.
    #[inline]
    pub fn frequency(&self, letter: u8) -> f64 {
        if letter.is_ascii_lowercase() {
            self.frequencies[(letter - b'a') as usize]
        } else {
            0.0
        }
    }

    /// Iterates over every letter from `a` to `z` along with its frequency.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        (b'a'..=b'z')
            .zip(self.frequencies.iter().copied())
            .map(|(letter, frequency)| (letter as char, frequency))
    }
}

impl Default for LetterFrequencies {
    /// An all-zero table, used only when no word has ever been counted.
    fn default() -> Self {
        LetterFrequencies {
            frequencies: [0.0; NUM_LETTERS],
        }
    }
}
