//! Whole-puzzle solving sessions.
//!
//! A [`Session`] starts from a first guess and the full answer list. Each
//! round consumes the feedback for the current guess, narrows the pool and
//! picks the next guess, until the puzzle is solved or six rounds are spent.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::filter::compatible;
use crate::selector::{GuessAnalysis, GuessSelector, SelectorConfig};
use crate::word::Word;
use crate::MAX_ROUNDS;

/// Opening guess used when none is given.
pub const DEFAULT_FIRST_GUESS: &str = "raise";

/// One guess and what came back for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub pattern: FeedbackPattern,
    /// Candidates left after this feedback.
    pub remaining: usize,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved on this round (1-based).
    Solved(usize),
    /// Every round was used without finding the answer.
    Failed,
}

impl Outcome {
    pub fn rounds(self) -> Option<usize> {
        match self {
            Outcome::Solved(rounds) => Some(rounds),
            Outcome::Failed => None,
        }
    }
}

/// A single puzzle being solved
#[derive(Debug, Clone)]
pub struct Session {
    universe: Vec<Word>,
    answers: Vec<Word>,
    pool: Vec<Word>,
    first_guess: Word,
    guess: Word,
    history: Vec<Round>,
    outcome: Option<Outcome>,
    selector: GuessSelector,
}

impl Session {
    /// A session over `answers`, falling back on `universe` for wide searches.
    pub fn new(first_guess: Word, answers: Vec<Word>, universe: Vec<Word>) -> Self {
        Self {
            pool: answers.clone(),
            answers,
            universe,
            first_guess,
            guess: first_guess,
            history: Vec::new(),
            outcome: None,
            selector: GuessSelector::default(),
        }
    }

    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.selector = GuessSelector::new(config);
        self
    }

    /// The word to submit next.
    pub fn guess(&self) -> Word {
        self.guess
    }

    /// The 1-based round the current guess belongs to.
    pub fn round(&self) -> usize {
        self.history.len() + 1
    }

    pub fn remaining_count(&self) -> usize {
        self.pool.len()
    }

    pub fn possible_answers(&self) -> &[Word] {
        &self.pool
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn reset(&mut self) {
        self.pool = self.answers.clone();
        self.guess = self.first_guess;
        self.history.clear();
        self.outcome = None;
    }

    /// Record the feedback for the current guess.
    ///
    /// Returns the outcome once the session is over, `None` while it goes on.
    /// Feedback that no remaining candidate could have produced is an error
    /// and leaves the session untouched.
    pub fn apply_feedback(&mut self, pattern: FeedbackPattern) -> Result<Option<Outcome>> {
        if let Some(outcome) = self.outcome {
            return Ok(Some(outcome));
        }
        let round = self.round();

        if pattern.is_win() {
            self.history.push(Round {
                guess: self.guess,
                pattern,
                remaining: 1,
            });
            info!("solved {} in {} rounds", self.guess, round);
            return Ok(self.finish(Outcome::Solved(round)));
        }

        if round >= MAX_ROUNDS {
            let pool = compatible(&self.guess, pattern, &self.pool);
            if pool.is_empty() {
                warn!("no candidates are consistent with {} for {}", pattern, self.guess);
                return Err(SolverError::NoCandidates {
                    guess: self.guess,
                    pattern,
                });
            }
            self.history.push(Round {
                guess: self.guess,
                pattern,
                remaining: pool.len(),
            });
            self.pool = pool;
            info!("out of rounds with {} candidates left", self.pool.len());
            return Ok(self.finish(Outcome::Failed));
        }

        let selection = self
            .selector
            .select_next(&self.guess, pattern, &self.pool, &self.universe)?;
        debug!(
            "round {}: {} {} -> {} candidates, next {}",
            round,
            self.guess,
            pattern,
            selection.pool.len(),
            selection.guess()
        );
        self.history.push(Round {
            guess: self.guess,
            pattern,
            remaining: selection.pool.len(),
        });
        self.guess = selection.guess();
        self.pool = selection.pool;
        Ok(None)
    }

    fn finish(&mut self, outcome: Outcome) -> Option<Outcome> {
        self.outcome = Some(outcome);
        self.outcome
    }

    /// Solve a puzzle automatically, given a function that provides feedback
    /// for each submitted guess.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<Outcome>
    where
        F: FnMut(&Word) -> Result<FeedbackPattern>,
    {
        loop {
            let pattern = get_feedback(&self.guess)?;
            if let Some(outcome) = self.apply_feedback(pattern)? {
                return Ok(outcome);
            }
        }
    }

    /// Solve a puzzle knowing the answer (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Result<Outcome> {
        self.solve_with_feedback(|guess| Ok(FeedbackPattern::calculate(guess, target)))
    }

    /// The `n` best next guesses drawn from the remaining candidates.
    pub fn top_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        let mut ranked = self.selector.rank_guesses(&self.pool, &self.pool);
        ranked.truncate(n);
        ranked
    }
}

/// Play one simulated game against `answer`.
pub fn solve(
    first_guess: Word,
    answer: &Word,
    answers: &[Word],
    universe: &[Word],
    config: SelectorConfig,
) -> Result<Outcome> {
    Session::new(first_guess, answers.to_vec(), universe.to_vec())
        .with_config(config)
        .solve_for_target(answer)
}

/// Guess counts across a set of simulated games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    /// `solved[k]` is the number of games solved in `k` rounds.
    pub solved: Vec<usize>,
    /// Answers that were not found within the round limit.
    pub failed: Vec<Word>,
}

impl Distribution {
    pub fn games(&self) -> usize {
        self.solved.iter().sum::<usize>() + self.failed.len()
    }

    /// Mean rounds over the solved games.
    pub fn average(&self) -> f64 {
        let solved: usize = self.solved.iter().sum();
        if solved == 0 {
            return 0.0;
        }
        let rounds: usize = self.solved.iter().enumerate().map(|(r, c)| r * c).sum();
        rounds as f64 / solved as f64
    }
}

/// Play every word in `answers` and tally the results.
pub fn benchmark_guess_distribution(
    first_guess: Word,
    answers: &[Word],
    universe: &[Word],
    config: &SelectorConfig,
) -> Result<Distribution> {
    let session = Session::new(first_guess, answers.to_vec(), universe.to_vec())
        .with_config(config.clone());
    let outcomes: Vec<(Word, Outcome)> = answers
        .par_iter()
        .map(|answer| {
            let mut session = session.clone();
            session.solve_for_target(answer).map(|o| (*answer, o))
        })
        .collect::<Result<_>>()?;

    let mut distribution = Distribution {
        solved: vec![0; MAX_ROUNDS + 1],
        failed: Vec::new(),
    };
    for (answer, outcome) in outcomes {
        match outcome {
            Outcome::Solved(rounds) => distribution.solved[rounds] += 1,
            Outcome::Failed => distribution.failed.push(answer),
        }
    }
    Ok(distribution)
}
