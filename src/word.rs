//! Fixed-length words.

use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;
use crate::WORD_LENGTH;

/// A five-letter lowercase word, stored as ascii bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Build a word from raw bytes, rejecting anything outside `a..=z`.
    pub fn from_bytes(bytes: [u8; WORD_LENGTH]) -> Result<Self, SolverError> {
        if bytes.iter().all(u8::is_ascii_lowercase) {
            Ok(Self(bytes))
        } else {
            Err(SolverError::InvalidWord(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        }
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Number of occurrences of `letter` in the word.
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }

    /// Number of positions at which both words hold the same letter.
    pub fn shared_positions(&self, other: &Word) -> usize {
        self.0.iter().zip(&other.0).filter(|(a, b)| a == b).count()
    }

    pub fn as_str(&self) -> &str {
        // Construction guarantees ascii.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bytes: [u8; WORD_LENGTH] = lower
            .as_bytes()
            .try_into()
            .map_err(|_| SolverError::InvalidWord(s.to_string()))?;
        Self::from_bytes(bytes).map_err(|_| SolverError::InvalidWord(s.to_string()))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_case() {
        let word: Word = "CrAnE".parse().unwrap();
        assert_eq!(word, "crane");
        assert_eq!(word.to_string(), "crane");
    }

    #[test]
    fn rejects_bad_input() {
        assert!("cran".parse::<Word>().is_err());
        assert!("cranes".parse::<Word>().is_err());
        assert!("cr4ne".parse::<Word>().is_err());
        assert!("crané".parse::<Word>().is_err());
    }

    #[test]
    fn counts_letters() {
        let word: Word = "speed".parse().unwrap();
        assert_eq!(word.count(b'e'), 2);
        assert_eq!(word.count(b'z'), 0);
    }

    #[test]
    fn shared_positions() {
        let a: Word = "fight".parse().unwrap();
        let b: Word = "light".parse().unwrap();
        assert_eq!(a.shared_positions(&b), 4);
        assert_eq!(a.shared_positions(&a), 5);
    }
}
