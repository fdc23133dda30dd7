use crate::data::{LetterFrequencies, Word, WordBank};
use crate::restrictions::{retain_satisfying, ConstraintSet};
use crate::results::{FeedbackEncoding, GuessResult, WordleError};
use crate::scorers::{LetterEntropyScorer, WordScorer};
use std::result::Result;
use tracing::{debug, trace};

/// Where a [`SolverSession`] is in its game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No feedback has been recorded yet.
    Initialized,
    /// Feedback has been recorded, and candidates remain.
    Guessing,
    /// The last recorded guess was fully correct.
    Solved,
    /// No candidates remain, so the objective is not in the word bank or the feedback was
    /// inconsistent.
    Exhausted,
}

impl SessionState {
    /// Returns `true` iff no more feedback can be recorded.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Solved | SessionState::Exhausted)
    }
}

/// A candidate word and the score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

/// Narrows down the possible words of one game and ranks them as guesses.
///
/// The session starts with every word in the bank as a candidate. Each call to
/// [`SolverSession::record_feedback`] appends rules to the session's [`ConstraintSet`], removes
/// candidates that break them, and recomputes the [`LetterFrequencies`] that the
/// [`WordScorer`] ranks guesses by.
///
/// ```
/// use wordle_entropy_solver::*;
///
/// let bank = WordBank::from_iterator(["about", "above", "abuse"]).unwrap();
/// let mut session = SolverSession::new(&bank);
///
/// let guess = session.best_guess().unwrap().word;
/// let result = get_result_for_guess("above", &guess.to_string()).unwrap();
/// session.record_feedback(&result).unwrap();
///
/// assert!(session.candidates().contains(&Word::new("above").unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct SolverSession<S = LetterEntropyScorer> {
    candidates: Vec<Word>,
    constraints: ConstraintSet,
    frequencies: LetterFrequencies,
    history: Vec<GuessResult>,
    state: SessionState,
    scorer: S,
}

impl SolverSession<LetterEntropyScorer> {
    /// Creates a session that ranks guesses with the [`LetterEntropyScorer`].
    pub fn new(bank: &WordBank) -> Self {
        SolverSession::with_scorer(bank, LetterEntropyScorer)
    }
}

impl<S: WordScorer> SolverSession<S> {
    /// Creates a session that ranks guesses with the given scorer.
    ///
    /// An empty word bank produces a session that is already
    /// [`Exhausted`](SessionState::Exhausted).
    pub fn with_scorer(bank: &WordBank, scorer: S) -> Self {
        let candidates = bank.to_vec();
        let (frequencies, state) = match LetterFrequencies::compute(&candidates) {
            Ok(frequencies) => (frequencies, SessionState::Initialized),
            Err(_) => (LetterFrequencies::default(), SessionState::Exhausted),
        };
        SolverSession {
            candidates,
            constraints: ConstraintSet::new(),
            frequencies,
            history: Vec::new(),
            state,
            scorer,
        }
    }

    /// Ranks the remaining candidates and returns up to `top_n` of them, best first.
    ///
    /// Candidates with equal scores keep their word bank order. Fails with
    /// [`WordleError::NoCandidates`] once the session is exhausted.
    pub fn guess(&self, top_n: usize) -> Result<Vec<ScoredGuess>, WordleError> {
        if self.candidates.is_empty() {
            return Err(WordleError::NoCandidates);
        }
        let mut ranked: Vec<ScoredGuess> = self
            .candidates
            .iter()
            .map(|word| ScoredGuess {
                word: *word,
                score: self.scorer.score_word(word, &self.frequencies),
            })
            .collect();
        // Stable, so ties stay in word bank order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(top_n);
        trace!(
            num_candidates = self.candidates.len(),
            top = ?ranked.first(),
            "ranked candidates"
        );
        Ok(ranked)
    }

    /// Returns the single highest-ranked candidate.
    pub fn best_guess(&self) -> Result<ScoredGuess, WordleError> {
        self.guess(1)?
            .into_iter()
            .next()
            .ok_or(WordleError::NoCandidates)
    }

    /// Folds the given feedback into the session and returns the resulting state.
    ///
    /// Fails with [`WordleError::GameOver`] if the session was already solved or exhausted.
    pub fn record_feedback(&mut self, result: &GuessResult) -> Result<SessionState, WordleError> {
        if self.state.is_terminal() {
            return Err(WordleError::GameOver);
        }
        // Existing candidates already satisfy the older rules.
        let new_rules = self.constraints.add_rules(result);
        retain_satisfying(&mut self.candidates, new_rules);
        if let Ok(frequencies) = LetterFrequencies::compute(&self.candidates) {
            self.frequencies = frequencies;
        }
        self.history.push(*result);
        self.state = if result.is_solved() {
            SessionState::Solved
        } else if self.candidates.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::Guessing
        };
        debug!(
            guess = %result.guess,
            feedback = %FeedbackEncoding::default().render(&result.results),
            remaining = self.candidates.len(),
            state = ?self.state,
            "recorded feedback"
        );
        Ok(self.state)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The words that are still possible, in word bank order.
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The letter frequencies of the current candidates. If the candidates ran out, this is the
    /// last table computed while some remained.
    pub fn frequencies(&self) -> &LetterFrequencies {
        &self.frequencies
    }

    /// Every recorded guess result, oldest first.
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// The number of guesses recorded so far.
    pub fn num_guesses(&self) -> usize {
        self.history.len()
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}
