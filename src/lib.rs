//! # Wordle Greedy
//!
//! A multithreaded Wordle solver that keeps the set of answers consistent
//! with every piece of feedback seen so far and, each round, guesses the word
//! that minimizes the expected number of candidates left afterwards.

pub mod corpus;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod selector;
pub mod session;
pub mod word;

pub use error::{Result, SolverError};
pub use feedback::{Feedback, FeedbackPattern};
pub use filter::{compatible, count_compatible, Constraint};
pub use selector::{GuessAnalysis, GuessSelector, GuessSource, SelectorConfig, Selection};
pub use session::{Outcome, Session};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per puzzle
pub const MAX_ROUNDS: usize = 6;
