//! Greedy guess selection.
//!
//! Every candidate guess is scored by simulating it against every answer
//! still possible and counting how many candidates would survive the
//! resulting feedback. The guess with the smallest average wins. When the
//! few remaining candidates are near-identical, the search is widened to the
//! full guess list so the next guess can split them instead of re-confirming
//! letters that are already known.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::filter::{compatible, count_compatible};
use crate::word::Word;

/// Tuning knobs for [`GuessSelector`].
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// The wide search is only considered for pools strictly larger than this.
    pub fallback_min_pool: usize,
    /// ...and no larger than this.
    pub fallback_max_pool: usize,
    /// Mean same-position matches between the chosen guess and the pool at or
    /// above which the pool counts as near-identical.
    pub fallback_shared_letters: f64,
    /// Allow searching the guess universe at all.
    pub universe_fallback: bool,
    /// Score candidate guesses on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            fallback_min_pool: 2,
            fallback_max_pool: 20,
            fallback_shared_letters: 3.0,
            universe_fallback: true,
            parallel: true,
        }
    }
}

/// Where a selected guess came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// The pool held a single word; nothing was scored.
    OnlyCandidate,
    /// Best scorer among the remaining candidates.
    Pool,
    /// Best scorer among the full guess universe.
    Universe,
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    /// Sum, over every possible answer, of the candidates left afterwards.
    pub total_remaining: usize,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
    pub source: GuessSource,
}

/// The outcome of one round of selection.
#[derive(Debug, Clone)]
pub struct Selection {
    pub analysis: GuessAnalysis,
    /// Candidates consistent with everything observed so far.
    pub pool: Vec<Word>,
}

impl Selection {
    pub fn guess(&self) -> Word {
        self.analysis.word
    }
}

/// Sum over `answers` of the candidates left after guessing `guess`.
pub fn total_remaining(guess: &Word, answers: &[Word]) -> usize {
    answers
        .iter()
        .map(|answer| {
            let pattern = FeedbackPattern::calculate(guess, answer);
            count_compatible(guess, pattern, answers)
        })
        .sum()
}

/// Mean number of positions at which `guess` agrees with each pool member.
pub fn shared_letters(guess: &Word, pool: &[Word]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }
    let shared: usize = pool.iter().map(|w| guess.shared_positions(w)).sum();
    shared as f64 / pool.len() as f64
}

#[derive(Debug, Clone, Default)]
pub struct GuessSelector {
    config: SelectorConfig,
}

impl GuessSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    fn analysis(
        &self,
        word: Word,
        total: usize,
        answers: &[Word],
        source: GuessSource,
    ) -> GuessAnalysis {
        GuessAnalysis {
            word,
            total_remaining: total,
            expected_remaining: total as f64 / answers.len() as f64,
            is_possible_answer: answers.contains(&word),
            source,
        }
    }

    /// `(total_remaining, index)` for each guess, in input order.
    fn scores(&self, guesses: &[Word], answers: &[Word]) -> Vec<(usize, usize)> {
        let score = |(i, guess): (usize, &Word)| (total_remaining(guess, answers), i);
        if self.config.parallel {
            guesses.par_iter().enumerate().map(score).collect()
        } else {
            guesses.iter().enumerate().map(score).collect()
        }
    }

    /// The guess with the lowest score, the earliest one on ties.
    fn minimize(
        &self,
        guesses: &[Word],
        answers: &[Word],
        source: GuessSource,
    ) -> Option<GuessAnalysis> {
        let best = self.scores(guesses, answers).into_iter().min();
        best.map(|(total, i)| self.analysis(guesses[i], total, answers, source))
    }

    /// Every guess scored against `answers`, best first.
    pub fn rank_guesses(&self, guesses: &[Word], answers: &[Word]) -> Vec<GuessAnalysis> {
        if answers.is_empty() {
            return vec![];
        }
        let mut scores = self.scores(guesses, answers);
        scores.sort_unstable();
        scores
            .into_iter()
            .map(|(total, i)| self.analysis(guesses[i], total, answers, GuessSource::Pool))
            .collect()
    }

    fn wants_universe(&self, guess: &Word, pool: &[Word]) -> bool {
        let config = &self.config;
        config.universe_fallback
            && pool.len() > config.fallback_min_pool
            && pool.len() <= config.fallback_max_pool
            && shared_letters(guess, pool) >= config.fallback_shared_letters
    }

    /// Pick the next guess for a pool of possible answers.
    ///
    /// Returns `None` only when the pool is empty.
    pub fn best_guess(&self, pool: &[Word], universe: &[Word]) -> Option<GuessAnalysis> {
        match pool {
            [] => return None,
            [only] => {
                return Some(self.analysis(*only, 1, pool, GuessSource::OnlyCandidate));
            }
            _ => {}
        }

        let narrow = self.minimize(pool, pool, GuessSource::Pool)?;
        debug!(
            "best of {} candidates: {} ({:.3} expected)",
            pool.len(),
            narrow.word,
            narrow.expected_remaining
        );
        if !self.wants_universe(&narrow.word, pool) {
            return Some(narrow);
        }

        info!(
            "{} candidates share {:.2} letters with {}; searching {} guesses",
            pool.len(),
            shared_letters(&narrow.word, pool),
            narrow.word,
            universe.len()
        );
        match self.minimize(universe, pool, GuessSource::Universe) {
            Some(wide) => {
                debug!("universe pick: {} ({:.3} expected)", wide.word, wide.expected_remaining);
                Some(wide)
            }
            None => Some(narrow),
        }
    }

    /// Narrow `pool` by the feedback `previous` received and choose the next guess.
    pub fn select_next(
        &self,
        previous: &Word,
        pattern: FeedbackPattern,
        pool: &[Word],
        universe: &[Word],
    ) -> Result<Selection> {
        let pool = compatible(previous, pattern, pool);
        debug!("{} {} leaves {} candidates", previous, pattern, pool.len());

        match self.best_guess(&pool, universe) {
            Some(analysis) => Ok(Selection { analysis, pool }),
            None => {
                warn!("no candidates are consistent with {} for {}", pattern, previous);
                Err(SolverError::NoCandidates {
                    guess: *previous,
                    pattern,
                })
            }
        }
    }
}
