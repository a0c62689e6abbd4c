//! Word list loading.

use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::error::{Result, SolverError};
use crate::word::Word;

/// Parse one word per line, skipping blanks and keeping the first copy of
/// any duplicate.
pub fn parse_words(text: &str) -> Result<Vec<Word>> {
    let words: Vec<Word> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect::<Result<_>>()?;
    Ok(words.into_iter().unique().collect())
}

/// Load a word list from a file.
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_duplicates() {
        let words = parse_words("crane\n\n  slate \nCrane\nTRACE\n").unwrap();
        let words: Vec<String> = words.iter().map(Word::to_string).collect();
        assert_eq!(words, ["crane", "slate", "trace"]);
    }

    #[test]
    fn rejects_malformed_words() {
        assert!(matches!(
            parse_words("crane\ncranes\n"),
            Err(SolverError::InvalidWord(w)) if w == "cranes"
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_words("/definitely/not/here.txt"),
            Err(SolverError::Io { .. })
        ));
    }
}
