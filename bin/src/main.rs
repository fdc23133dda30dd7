use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_entropy_solver::scorers::LetterEntropyScorer;
use wordle_entropy_solver::*;

/// Runs a Wordle game in reverse, where the computer guesses the word by ranking the remaining
/// words by letter entropy.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The maximum number of guesses the solver may make in each automatic game.
    #[clap(long, default_value_t = 128)]
    max_guesses: u32,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against the words in the given words file.
    Benchmark {
        /// Only play against this many randomly chosen words.
        #[clap(long)]
        sample: Option<usize>,
        /// Seed for choosing the sample, for repeatable runs.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Run a single game with the given word.
    Single { word: String },
    /// Run an interactive game against the solver.
    Interactive {
        /// How many ranked guesses to suggest each round.
        #[clap(long, default_value_t = 5)]
        top_n: usize,
        /// The symbols for exact, present and absent letters, in that order.
        #[clap(long, default_value_t = FeedbackEncoding::default())]
        encoding: FeedbackEncoding,
    },
}

fn main() -> Result<(), WordleError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let start_time = Instant::now();
    let args = Args::parse();
    info!(words_file = %args.words_file, "loading words");

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!("There are {} possible words.", word_bank.len());

    match args.command {
        Command::Benchmark { sample, seed } => {
            run_benchmark(&word_bank, args.max_guesses, sample, seed)?
        }
        Command::Single { word } => play_single_game(&word, &word_bank, args.max_guesses)?,
        Command::Interactive { top_n, encoding } => {
            play_interactive_game(&word_bank, top_n, &encoding)?
        }
    }

    info!(
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "command executed"
    );
    Ok(())
}

fn run_benchmark(
    word_bank: &WordBank,
    max_guesses: u32,
    sample: Option<usize>,
    seed: Option<u64>,
) -> Result<(), WordleError> {
    let objectives: Vec<Word> = match sample {
        Some(amount) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            word_bank
                .choose_multiple(&mut rng, amount)
                .copied()
                .collect()
        }
        None => word_bank.to_vec(),
    };
    info!(num_games = objectives.len(), "starting benchmark");

    let results =
        play_games_in_parallel(word_bank, &objectives, max_guesses, LetterEntropyScorer::new)?;
    let stats = GameStats::from_results(&results);

    println!("Solved {} of {} words. Results:", stats.num_solved, stats.num_games);
    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_guesses, num_games) in stats.num_games_per_num_guesses.iter() {
        println!("|{}|{}|", num_guesses, num_games);
    }
    if stats.num_failed > 0 || stats.num_unknown > 0 {
        println!(
            "\n{} games ran out of guesses, {} words were unknown.",
            stats.num_failed, stats.num_unknown
        );
    }

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        stats.average_guesses, stats.std_dev_guesses
    );
    Ok(())
}

fn play_single_game(
    word: &str,
    word_bank: &WordBank,
    max_guesses: u32,
) -> Result<(), WordleError> {
    let objective = Word::new(word)?;
    let result = play_game(&objective, max_guesses, SolverSession::new(word_bank))?;
    let encoding = FeedbackEncoding::default();
    match result {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            print_guesses(&objective, &guesses, &encoding);
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            print_guesses(&objective, &guesses, &encoding);
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_guesses(objective: &Word, guesses: &[Word], encoding: &FeedbackEncoding) {
    for guess in guesses.iter() {
        let result = compute_result(objective, guess);
        println!("\t{} {}", guess, encoding.render(&result.results));
    }
}

fn play_interactive_game(
    word_bank: &WordBank,
    top_n: usize,
    encoding: &FeedbackEncoding,
) -> Result<(), WordleError> {
    let mut session = SolverSession::new(word_bank);
    let mut lines = io::stdin().lock().lines();
    let symbol = |result: LetterResult| encoding.render(&[result]);

    println!("Choose a word from the word-list. Press enter once you've chosen.");
    if lines.next().transpose()?.is_none() {
        return Ok(());
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
         \x20 * '{}' = this letter is not in the word\n\
         \x20 * '{}' = this letter is in the word, but not in this location\n\
         \x20 * '{}' = this letter is in the word and in the right location.\n",
        symbol(LetterResult::Absent),
        symbol(LetterResult::Present),
        symbol(LetterResult::Exact),
    );

    while !session.state().is_terminal() {
        let ranked = session.guess(top_n.max(1))?;
        if ranked.len() > 1 {
            println!("My top guesses are:");
            for scored in ranked.iter() {
                println!("\t{} ({:.4})", scored.word, scored.score);
            }
        }
        let guess = ranked[0].word;
        print!("I'm guessing: {}. How did I do? ", guess);
        io::stdout().flush()?;

        let result = loop {
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            match GuessResult::parse(&guess.to_string(), line.trim(), encoding) {
                Ok(result) => break result,
                Err(error) => {
                    print!("{}. Try again: ", error);
                    io::stdout().flush()?;
                }
            }
        };

        match session.record_feedback(&result)? {
            SessionState::Solved => {
                println!("I did it! It took me {} guesses.", session.num_guesses());
            }
            SessionState::Exhausted => {
                println!("I've run out of words, so your word isn't in my word list :(");
            }
            SessionState::Initialized | SessionState::Guessing => {
                println!("There are {} words left.", session.candidates().len());
            }
        }
    }
    Ok(())
}
