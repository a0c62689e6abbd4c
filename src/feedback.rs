//! Feedback calculation for Wordle guesses.
//!
//! This module is the feedback oracle: it computes the coloring
//! (absent/present/correct) a guess receives against a known answer.

use std::str::FromStr;

use crate::error::SolverError;
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in word, or all of its occurrences already accounted for (gray)
    Absent,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Correct letter in correct position (green)
    Correct,
}

impl Feedback {
    /// Numeric encoding used by external feedback channels.
    pub fn value(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Feedback::Absent),
            1 => Some(Feedback::Present),
            2 => Some(Feedback::Correct),
            _ => None,
        }
    }

    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242).
/// Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.value() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// The packed base-3 code.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Build a pattern from the numeric 0/1/2 encoding, one value per position.
    pub fn from_values(values: &[u8]) -> Result<Self, SolverError> {
        let invalid = || SolverError::InvalidFeedback(format!("{:?}", values));
        let feedbacks: [Feedback; WORD_LENGTH] = values
            .iter()
            .map(|&v| Feedback::from_value(v))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?
            .try_into()
            .map_err(|_| invalid())?;
        Ok(Self::new(feedbacks))
    }

    /// Calculate the feedback pattern for a guess against an answer.
    ///
    /// Greens are assigned first. Every remaining guess letter is then marked
    /// present, left to right, while unmatched copies of it are left in the
    /// answer; the surplus stays absent.
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_bytes = guess.letters();
        let answer_bytes = answer.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut answer_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == answer_bytes[i] {
                feedback[i] = Feedback::Correct;
            } else {
                let idx = (answer_bytes[i] - b'a') as usize;
                answer_remaining[idx] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = (guess_bytes[i] - b'a') as usize;
                if answer_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    answer_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// The numeric 0/1/2 encoding, one value per position.
    pub fn to_values(self) -> [u8; WORD_LENGTH] {
        self.to_feedbacks().map(Feedback::value)
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl TryFrom<u8> for FeedbackPattern {
    type Error = SolverError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if (code as usize) < Self::NUM_PATTERNS {
            Ok(Self(code))
        } else {
            Err(SolverError::InvalidFeedback(code.to_string()))
        }
    }
}

impl FromStr for FeedbackPattern {
    type Err = SolverError;

    /// Parse a pattern from a string like "gybbb" or "21000"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SolverError::InvalidFeedback(s.to_string());
        let feedbacks: [Feedback; WORD_LENGTH] = s
            .trim()
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?
            .try_into()
            .map_err(|_| invalid())?;
        Ok(Self::new(feedbacks))
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
