//! Solves Wordle-style puzzles by narrowing down the words that are still possible after each
//! guess, and ranking those words by the entropy of their letters.
//!
//! Start with a [`WordBank`], create a [`SolverSession`] for each game, then alternate between
//! [`SolverSession::guess`] and [`SolverSession::record_feedback`]. [`play_game`] does this
//! automatically when the objective word is known.

mod data;
mod engine;
mod harness;
mod restrictions;
mod results;
pub mod scorers;

pub use data::LetterFrequencies;
pub use data::Word;
pub use data::WordBank;
pub use data::NUM_LETTERS;
pub use data::WORD_LENGTH;
pub use engine::*;
pub use harness::*;
pub use results::*;

/// Building blocks for the constraints a session accumulates.
pub mod details {
    pub use crate::restrictions::*;
}
