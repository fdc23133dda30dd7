#[macro_use]
extern crate assert_matches;

use wordle_entropy_solver::scorers::*;
use wordle_entropy_solver::*;

use std::result::Result;

macro_rules! test_scorer {
    ($construct_scorer_fn:ident) => {
        #[test]
        fn solve_wordle() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(vec![
                "alpha", "allot", "begot", "below", "endow", "ingot",
            ])?;
            let session = SolverSession::with_scorer(&bank, $construct_scorer_fn());

            let result = play_game(&Word::new("alpha")?, bank.len() as u32, session)?;

            assert_matches!(result, GameResult::Success(_guesses));
            Ok(())
        }

        #[test]
        fn try_solve_unknown_word() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(vec![
                "alpha", "allot", "begot", "below", "endow", "ingot",
            ])?;
            let session = SolverSession::with_scorer(&bank, $construct_scorer_fn());

            let result = play_game(&Word::new("other")?, bank.len() as u32 + 1, session)?;

            assert_matches!(result, GameResult::UnknownWord);
            Ok(())
        }
    };
}

mod letter_entropy_scorer {

    use super::*;

    fn create_scorer() -> LetterEntropyScorer {
        LetterEntropyScorer::new()
    }

    test_scorer!(create_scorer);

    #[test]
    fn score_word() -> Result<(), WordleError> {
        let bank =
            WordBank::from_iterator(vec!["alpha", "allot", "begot", "below", "endow", "ingot"])?;
        let frequencies = LetterFrequencies::compute(&bank)?;
        let scorer = LetterEntropyScorer::new();

        let entropy = |count: f64| -(count / 30.0) * (count / 30.0).log2();
        let expected_below =
            entropy(2.0) + entropy(3.0) + entropy(4.0) + entropy(5.0) + entropy(2.0);
        let score_below = scorer.score_word(&Word::new("below")?, &frequencies);
        assert!((score_below - expected_below).abs() < 1e-9);
        // The repeated 'a' only counts once.
        let expected_alpha = entropy(3.0) + entropy(4.0) + entropy(1.0) + entropy(1.0);
        let score_alpha = scorer.score_word(&Word::new("alpha")?, &frequencies);
        assert!((score_alpha - expected_alpha).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn select_best_guesses() -> Result<(), WordleError> {
        let bank =
            WordBank::from_iterator(vec!["alpha", "allot", "begot", "below", "endow", "ingot"])?;
        let session = SolverSession::with_scorer(&bank, create_scorer());

        let top: Vec<Word> = session.guess(2)?.iter().map(|guess| guess.word).collect();

        assert_eq!(top, vec![Word::new("below")?, Word::new("begot")?]);
        Ok(())
    }

    #[test]
    fn select_best_guess_after_update() -> Result<(), WordleError> {
        let bank =
            WordBank::from_iterator(vec!["alpha", "allot", "begot", "below", "endow", "ingot"])?;
        let mut session = SolverSession::with_scorer(&bank, create_scorer());

        session.record_feedback(&get_result_for_guess("endow", "below")?)?;
        // Remaining possible words: 'endow'

        assert_eq!(session.candidates(), &[Word::new("endow")?]);
        assert_eq!(session.best_guess()?.word, Word::new("endow")?);
        Ok(())
    }
}

mod closure_scorer {

    use super::*;

    fn create_scorer() -> impl Fn(&Word, &LetterFrequencies) -> f64 {
        |word: &Word, frequencies: &LetterFrequencies| {
            word.letters()
                .iter()
                .map(|letter| frequencies.frequency(*letter))
                .sum::<f64>()
        }
    }

    test_scorer!(create_scorer);
}
