use crate::data::{Word, WordBank};
use crate::engine::{SessionState, SolverSession};
use crate::results::{compute_result, GameResult, WordleError};
use crate::scorers::WordScorer;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::result::Result;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attempts to guess the given word within the maximum number of guesses, always playing the
/// session's best guess and answering it with the true feedback.
///
/// ```
/// use wordle_entropy_solver::*;
///
/// let bank = WordBank::from_iterator(["alpha", "allot", "begot", "below", "endow"]).unwrap();
/// let objective = Word::new("endow").unwrap();
///
/// let result = play_game(&objective, 6, SolverSession::new(&bank)).unwrap();
///
/// assert!(matches!(result, GameResult::Success(_)));
/// ```
pub fn play_game<S: WordScorer>(
    objective: &Word,
    max_num_guesses: u32,
    mut session: SolverSession<S>,
) -> Result<GameResult, WordleError> {
    let mut guesses: Vec<Word> = Vec::new();
    for _ in 0..max_num_guesses {
        let guess = match session.best_guess() {
            Ok(scored) => scored.word,
            Err(WordleError::NoCandidates) => {
                debug!(objective = %objective, guesses = guesses.len(), "ran out of candidates");
                return Ok(GameResult::UnknownWord);
            }
            Err(other) => return Err(other),
        };
        guesses.push(guess);
        let result = compute_result(objective, &guess);
        if session.record_feedback(&result)? == SessionState::Solved {
            debug!(objective = %objective, guesses = guesses.len(), "solved");
            return Ok(GameResult::Success(guesses));
        }
    }
    debug!(objective = %objective, guesses = guesses.len(), "out of guesses");
    Ok(GameResult::Failure(guesses))
}

/// Plays one game per objective, in parallel, each with its own session over the shared bank.
///
/// `make_scorer` is called once per game. Results are returned in the same order as
/// `objectives`.
pub fn play_games_in_parallel<S, F>(
    bank: &WordBank,
    objectives: &[Word],
    max_num_guesses: u32,
    make_scorer: F,
) -> Result<Vec<GameResult>, WordleError>
where
    S: WordScorer,
    F: Fn() -> S + Sync,
{
    objectives
        .par_iter()
        .map(|objective| {
            play_game(
                objective,
                max_num_guesses,
                SolverSession::with_scorer(bank, make_scorer()),
            )
        })
        .collect()
}

/// Summarises how many guesses a batch of games needed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStats {
    pub num_games: usize,
    pub num_solved: usize,
    pub num_failed: usize,
    pub num_unknown: usize,
    /// Maps a number of guesses to the number of solved games that needed exactly that many.
    pub num_games_per_num_guesses: BTreeMap<usize, usize>,
    /// Average guesses per solved game, or 0 if none were solved.
    pub average_guesses: f64,
    /// Standard deviation of the guesses per solved game.
    pub std_dev_guesses: f64,
}

impl GameStats {
    pub fn from_results<'a, I>(results: I) -> GameStats
    where
        I: IntoIterator<Item = &'a GameResult>,
    {
        let mut stats = GameStats {
            num_games: 0,
            num_solved: 0,
            num_failed: 0,
            num_unknown: 0,
            num_games_per_num_guesses: BTreeMap::new(),
            average_guesses: 0.0,
            std_dev_guesses: 0.0,
        };
        let mut num_guesses_per_game: Vec<usize> = Vec::new();
        for result in results {
            stats.num_games += 1;
            match result {
                GameResult::Success(guesses) => {
                    stats.num_solved += 1;
                    num_guesses_per_game.push(guesses.len());
                    *stats
                        .num_games_per_num_guesses
                        .entry(guesses.len())
                        .or_insert(0) += 1;
                }
                GameResult::Failure(_) => stats.num_failed += 1,
                GameResult::UnknownWord => stats.num_unknown += 1,
            }
        }
        if num_guesses_per_game.is_empty() {
            return stats;
        }
        let num_solved = num_guesses_per_game.len() as f64;
        stats.average_guesses = num_guesses_per_game.iter().sum::<usize>() as f64 / num_solved;
        stats.std_dev_guesses = (num_guesses_per_game
            .iter()
            .map(|num_guesses| (*num_guesses as f64 - stats.average_guesses).powi(2))
            .sum::<f64>()
            / num_solved)
            .sqrt();
        stats
    }
}
