use crate::data::{Word, NUM_LETTERS, WORD_LENGTH};
use std::fmt;
use std::result::Result;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in the objective word at this location.
    Exact,
    /// The letter is in the objective word, but somewhere else.
    Present,
    /// The letter is not in the objective word, or all of its occurrences have already been
    /// claimed by other locations in the guess.
    Absent,
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum WordleError {
    /// Indicates that a word or guess does not have [`WORD_LENGTH`] letters. Contains the length
    /// that was found.
    #[error("words must have {WORD_LENGTH} letters, but found {0}")]
    WordLength(usize),
    /// Indicates that a word contains a character other than `a` to `z`.
    #[error("unsupported character {0:?}, words may only use the letters 'a' to 'z'")]
    UnsupportedCharacter(char),
    /// Indicates that feedback does not have one symbol per letter. Contains the length found.
    #[error("feedback must have {WORD_LENGTH} symbols, but found {0}")]
    FeedbackLength(usize),
    /// Indicates that feedback contains a symbol the encoding does not define.
    #[error("unknown feedback symbol {0:?}")]
    UnknownFeedbackSymbol(char),
    /// Indicates that a feedback encoding does not use three distinct symbols.
    #[error("a feedback encoding needs exactly three distinct symbols")]
    InvalidEncoding,
    /// Indicates that no candidate words remain, so no guess can be made.
    #[error("no candidate words remain")]
    NoCandidates,
    /// Indicates that the session already reached a terminal state.
    #[error("the game is already over")]
    GameOver,
    /// An I/O error from reading words.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The result of a single word guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    /// The guess that was made.
    pub guess: Word,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: [LetterResult; WORD_LENGTH],
}

impl GuessResult {
    /// Builds a result for a guess from raw strings, validating both.
    ///
    /// ```
    /// use wordle_entropy_solver::FeedbackEncoding;
    /// use wordle_entropy_solver::GuessResult;
    /// use wordle_entropy_solver::LetterResult;
    ///
    /// let result = GuessResult::parse("crane", "gybbg", &FeedbackEncoding::default()).unwrap();
    ///
    /// assert_eq!(result.results[1], LetterResult::Present);
    /// ```
    pub fn parse(
        guess: &str,
        feedback: &str,
        encoding: &FeedbackEncoding,
    ) -> Result<GuessResult, WordleError> {
        Ok(GuessResult {
            guess: Word::new(guess)?,
            results: encoding.parse(feedback)?,
        })
    }

    /// Returns `true` iff every letter was [`LetterResult::Exact`].
    pub fn is_solved(&self) -> bool {
        self.results.iter().all(|result| *result == LetterResult::Exact)
    }
}

/// Maps each [`LetterResult`] to a single character, for reading and writing feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEncoding {
    exact: char,
    present: char,
    absent: char,
}

impl FeedbackEncoding {
    /// Creates an encoding from three distinct characters.
    pub fn new(exact: char, present: char, absent: char) -> Result<Self, WordleError> {
        if exact == present || exact == absent || present == absent {
            return Err(WordleError::InvalidEncoding);
        }
        Ok(FeedbackEncoding {
            exact,
            present,
            absent,
        })
    }

    fn decode(&self, symbol: char) -> Result<LetterResult, WordleError> {
        if symbol == self.exact {
            Ok(LetterResult::Exact)
        } else if symbol == self.present {
            Ok(LetterResult::Present)
        } else if symbol == self.absent {
            Ok(LetterResult::Absent)
        } else {
            Err(WordleError::UnknownFeedbackSymbol(symbol))
        }
    }

    fn encode(&self, result: LetterResult) -> char {
        match result {
            LetterResult::Exact => self.exact,
            LetterResult::Present => self.present,
            LetterResult::Absent => self.absent,
        }
    }

    /// Parses one symbol per letter into letter results.
    pub fn parse(&self, feedback: &str) -> Result<[LetterResult; WORD_LENGTH], WordleError> {
        let num_symbols = feedback.chars().count();
        if num_symbols != WORD_LENGTH {
            return Err(WordleError::FeedbackLength(num_symbols));
        }
        let mut results = [LetterResult::Absent; WORD_LENGTH];
        for (result, symbol) in results.iter_mut().zip(feedback.chars()) {
            *result = self.decode(symbol)?;
        }
        Ok(results)
    }

    /// Renders letter results using this encoding's symbols.
    pub fn render(&self, results: &[LetterResult]) -> String {
        results.iter().map(|result| self.encode(*result)).collect()
    }
}

impl Default for FeedbackEncoding {
    /// `g` for exact, `y` for present and `b` for absent.
    fn default() -> Self {
        FeedbackEncoding {
            exact: 'g',
            present: 'y',
            absent: 'b',
        }
    }
}

impl FromStr for FeedbackEncoding {
    type Err = WordleError;

    /// Parses the symbols for exact, present and absent, in that order, e.g. `"gy."`.
    fn from_str(symbols: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = symbols.chars().collect();
        match symbols[..] {
            [exact, present, absent] => FeedbackEncoding::new(exact, present, absent),
            _ => Err(WordleError::InvalidEncoding),
        }
    }
}

impl fmt::Display for FeedbackEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.exact, self.present, self.absent)
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are claimed first. The remaining letters then claim `Present` from left to
/// right, but only while the objective still has unclaimed occurrences of that letter.
pub fn compute_result(objective: &Word, guess: &Word) -> GuessResult {
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    let mut unclaimed = [0u8; NUM_LETTERS];
    for (index, letter) in objective.letters().iter().enumerate() {
        if guess.letter_at(index) == *letter {
            results[index] = LetterResult::Exact;
        } else {
            unclaimed[(letter - b'a') as usize] += 1;
        }
    }
    for (index, letter) in guess.letters().iter().enumerate() {
        if results[index] == LetterResult::Exact {
            continue;
        }
        let count = &mut unclaimed[(letter - b'a') as usize];
        if *count > 0 {
            *count -= 1;
            results[index] = LetterResult::Present;
        }
    }
    GuessResult {
        guess: *guess,
        results,
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`, validating
/// both words first.
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let objective = Word::new(objective)?;
    let guess = Word::new(guess)?;
    Ok(compute_result(&objective, &guess))
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Word>),
    /// Indicates that the guesser ran out of guesses, and provides the guesses that were given.
    Failure(Vec<Word>),
    /// Indicates that no candidates remained before the word was found, so the word was not in
    /// the word bank.
    UnknownWord,
}
