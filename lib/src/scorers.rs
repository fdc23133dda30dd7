use crate::data::{LetterFrequencies, Word};

/// Gives words a score, where the maximum score indicates the best guess.
///
/// A [`SolverSession`](crate::SolverSession) recomputes the [`LetterFrequencies`] of its
/// remaining candidates after every guess and hands them to the scorer, so scorers can stay
/// stateless. Any closure with the signature `Fn(&Word, &LetterFrequencies) -> f64` is also a
/// scorer:
///
/// ```
/// use wordle_entropy_solver::scorers::WordScorer;
/// use wordle_entropy_solver::{LetterFrequencies, Word};
///
/// let count_vowels = |word: &Word, _: &LetterFrequencies| {
///     word.letters().iter().filter(|letter| b"aeiou".contains(*letter)).count() as f64
/// };
/// let word = Word::new("audio").unwrap();
///
/// assert_eq!(count_vowels.score_word(&word, &LetterFrequencies::default()), 4.0);
/// ```
pub trait WordScorer {
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Word, frequencies: &LetterFrequencies) -> f64;
}

impl<F> WordScorer for F
where
    F: Fn(&Word, &LetterFrequencies) -> f64,
{
    fn score_word(&self, word: &Word, frequencies: &LetterFrequencies) -> f64 {
        self(word, frequencies)
    }
}

/// Scores words by the entropy contributed by each of their distinct letters.
///
/// Each unique letter with frequency *f* adds *-f* log<sub>2</sub> *f*, so letters that appear
/// in roughly half the letter slots add the most, and repeated letters are only counted once.
/// Letters that never appear add nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterEntropyScorer;

impl LetterEntropyScorer {
    pub fn new() -> LetterEntropyScorer {
        LetterEntropyScorer
    }
}

/// The information contributed by a letter with the given frequency.
#[inline]
fn letter_entropy(frequency: f64) -> f64 {
    if frequency <= 0.0 {
        return 0.0;
    }
    -frequency * frequency.log2()
}

impl WordScorer for LetterEntropyScorer {
    fn score_word(&self, word: &Word, frequencies: &LetterFrequencies) -> f64 {
        word.unique_letters()
            .map(|letter| letter_entropy(frequencies.frequency(letter)))
            .sum()
    }
}
