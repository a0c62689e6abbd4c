//! Wordle Greedy CLI
//!
//! Command-line front end for the greedy Wordle solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use log::error;
use rayon::ThreadPoolBuilder;
use wordle_greedy::corpus::load_words;
use wordle_greedy::session::benchmark_guess_distribution;
use wordle_greedy::{
    FeedbackPattern, Outcome, SelectorConfig, Session, SolverError, Word, MAX_ROUNDS,
};

/// Solve Wordle by always guessing the word that leaves the fewest candidates
/// on average.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File with the possible answers, one per line.
    #[clap(short, long, parse(from_os_str))]
    answers: PathBuf,

    /// File with every allowed guess. Defaults to the answer list.
    #[clap(short, long, parse(from_os_str))]
    guesses: Option<PathBuf>,

    /// Opening guess.
    #[clap(short, long, default_value = "raise")]
    first: Word,

    /// Never widen the search to the full guess list.
    #[clap(long)]
    no_fallback: bool,

    /// Pools must be larger than this for the wide search.
    #[clap(long, default_value = "2")]
    fallback_min: usize,

    /// Pools must be at most this large for the wide search.
    #[clap(long, default_value = "20")]
    fallback_max: usize,

    /// Mean shared letters that triggers the wide search.
    #[clap(long, default_value = "3.0")]
    fallback_shared: f64,

    /// Score guesses on a single thread.
    #[clap(long)]
    sequential: bool,

    /// Sets the number of threads to use in thread pool.
    ///
    /// Specifying 0 uses the default number of threads for rayon.
    #[clap(short, long, default_value = "0")]
    threads: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a simulated game against a known answer.
    Solve { target: Word },
    /// Play a live game, typing in the feedback for each guess (e.g. gybbb or 21000).
    Play,
    /// Show the best opening guesses among the answers.
    Suggest {
        #[clap(default_value = "5")]
        top: usize,
    },
    /// Play every answer and print the guess distribution.
    Bench,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

impl Args {
    fn config(&self) -> SelectorConfig {
        SelectorConfig {
            fallback_min_pool: self.fallback_min,
            fallback_max_pool: self.fallback_max,
            fallback_shared_letters: self.fallback_shared,
            universe_fallback: !self.no_fallback,
            parallel: !self.sequential,
        }
    }
}

fn print_outcome(session: &Session, outcome: Outcome) {
    for (i, round) in session.history().iter().enumerate() {
        println!(
            "Guess {}: {} → {} ({} left)",
            i + 1,
            round.guess.as_str().to_uppercase(),
            round.pattern,
            round.remaining
        );
    }
    println!();
    match outcome {
        Outcome::Solved(rounds) => println!("Solved in {} guesses.", rounds),
        Outcome::Failed => println!("Failed to solve within {} guesses.", MAX_ROUNDS),
    }
}

/// Apply one line of typed feedback to the session.
///
/// Errors leave the session as it was, so the line can be typed again.
fn play_line(session: &mut Session, line: &str) -> Result<Option<Outcome>, SolverError> {
    let pattern: FeedbackPattern = line.parse()?;
    session.apply_feedback(pattern)
}

fn play(mut session: Session) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!(
            "Guess {}: {}  ({} candidates)",
            session.round(),
            session.guess().as_str().to_uppercase(),
            session.remaining_count()
        );
        print!("feedback> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return,
        };
        match play_line(&mut session, &line) {
            Ok(Some(outcome)) => {
                println!();
                print_outcome(&session, outcome);
                return;
            }
            Ok(None) => {}
            Err(e) => {
                println!("{}", e);
                continue;
            }
        }
        if session.remaining_count() <= 10 {
            let remaining: Vec<&str> = session
                .possible_answers()
                .iter()
                .map(Word::as_str)
                .collect();
            println!("Remaining words: {}", remaining.join(", "));
        }
    }
}

fn run(args: Args) -> Result<(), SolverError> {
    let answers = load_words(&args.answers)?;
    let universe = match &args.guesses {
        Some(path) => load_words(path)?,
        None => answers.clone(),
    };
    let config = args.config();
    let session =
        Session::new(args.first, answers.clone(), universe.clone()).with_config(config.clone());

    match args.command {
        Command::Solve { target } => {
            let mut session = session;
            println!("Solving for: {}", target.as_str().to_uppercase());
            println!();
            let outcome = session.solve_for_target(&target)?;
            print_outcome(&session, outcome);
        }
        Command::Play => play(session),
        Command::Suggest { top } => {
            println!("{:>4} {:>8} {:>12} Possible?", "#", "Word", "Exp. Remain");
            println!("{}", "-".repeat(40));
            for (i, analysis) in session.top_guesses(top).iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>12.3} {}",
                    i + 1,
                    analysis.word.as_str().to_uppercase(),
                    analysis.expected_remaining,
                    if analysis.is_possible_answer { "✓" } else { "" }
                );
            }
        }
        Command::Bench => {
            println!("Running benchmark on all {} words...", answers.len());
            let spinner = Spinner::new("Computing...");
            let start = Instant::now();
            let distribution =
                benchmark_guess_distribution(args.first, &answers, &universe, &config);
            let elapsed = start.elapsed();
            spinner.stop();
            let distribution = distribution?;

            let total = distribution.games().max(1);
            println!("Guess distribution:");
            for (guesses, &count) in distribution.solved.iter().enumerate().skip(1) {
                let pct = count as f64 / total as f64 * 100.0;
                let bar = "█".repeat(count * 40 / total);
                println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
            }
            println!();
            println!("Average guesses: {:.3}", distribution.average());
            println!("Total words: {}", distribution.games());
            println!("Time elapsed: {:.2?}", elapsed);
            if distribution.failed.is_empty() {
                println!("All words solved within {} guesses.", MAX_ROUNDS);
            } else {
                println!(
                    "Words not solved in {} guesses: {}",
                    MAX_ROUNDS,
                    distribution.failed.len()
                );
                for word in &distribution.failed {
                    println!("  {}", word);
                }
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        error!("could not configure thread pool: {}", e);
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
