//! Errors produced by the solver.

use std::path::PathBuf;

use thiserror::Error;

use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// The errors that `wordle_greedy` can produce.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The string is not five lowercase ascii letters.
    #[error("\"{0}\" is not a five-letter a-z word")]
    InvalidWord(String),

    /// The feedback is not five values from the three-color domain.
    #[error("\"{0}\" is not valid feedback; use five of 0/1/2 or b/y/g")]
    InvalidFeedback(String),

    /// No word in the pool is consistent with the feedback observed.
    #[error("no candidates are consistent with {pattern} for {guess}")]
    NoCandidates {
        guess: Word,
        pattern: FeedbackPattern,
    },

    /// A word list could not be read.
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = SolverError> = std::result::Result<T, E>;
