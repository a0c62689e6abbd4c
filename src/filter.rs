//! Candidate filtering.
//!
//! A guess and the feedback it received are compiled once into a
//! [`Constraint`], which can then be checked against any number of words
//! without recomputing feedback for each of them.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;
use crate::WORD_LENGTH;

/// How many copies of a letter a word may hold outside the green positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Count {
    /// The letter was grayed at least once, so the yellows reveal the exact number.
    Exactly(usize),
    /// Only yellows were seen; the answer may hold more.
    AtLeast(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterCount {
    letter: u8,
    count: Count,
}

/// Everything a single (guess, feedback) observation says about the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    greens: [Option<u8>; WORD_LENGTH],
    /// Bitset of letters that may not sit at each non-green position.
    excluded: [u32; WORD_LENGTH],
    counts: Vec<LetterCount>,
}

fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl Constraint {
    pub fn new(guess: &Word, pattern: FeedbackPattern) -> Self {
        let letters = guess.letters();
        let feedbacks = pattern.to_feedbacks();

        let mut greens = [None; WORD_LENGTH];
        for (i, fb) in feedbacks.iter().enumerate() {
            if *fb == Feedback::Correct {
                greens[i] = Some(letters[i]);
            }
        }

        let mut excluded = [0u32; WORD_LENGTH];
        let mut counts: Vec<LetterCount> = Vec::with_capacity(WORD_LENGTH);
        for i in 0..WORD_LENGTH {
            if feedbacks[i] == Feedback::Correct {
                continue;
            }
            let letter = letters[i];
            // A yellow or gray letter is never at the position it was guessed at.
            excluded[i] |= bit(letter);
            if counts.iter().any(|c| c.letter == letter) {
                continue;
            }

            let mut yellows = 0;
            let mut grayed = false;
            for (l, fb) in letters.iter().zip(&feedbacks) {
                if *l != letter {
                    continue;
                }
                match fb {
                    Feedback::Present => yellows += 1,
                    Feedback::Absent => grayed = true,
                    Feedback::Correct => {}
                }
            }
            let count = if grayed {
                Count::Exactly(yellows)
            } else {
                Count::AtLeast(yellows)
            };
            counts.push(LetterCount { letter, count });
        }

        Self {
            greens,
            excluded,
            counts,
        }
    }

    /// Whether `word` could be the answer given this observation.
    pub fn matches(&self, word: &Word) -> bool {
        let letters = word.letters();
        for i in 0..WORD_LENGTH {
            match self.greens[i] {
                Some(green) if letters[i] != green => return false,
                Some(_) => {}
                None if self.excluded[i] & bit(letters[i]) != 0 => return false,
                None => {}
            }
        }

        self.counts.iter().all(|rule| {
            let seen = letters
                .iter()
                .zip(&self.greens)
                .filter(|(l, g)| g.is_none() && **l == rule.letter)
                .count();
            match rule.count {
                Count::Exactly(n) => seen == n,
                Count::AtLeast(n) => seen >= n,
            }
        })
    }
}

/// The members of `pool` that would have produced `pattern` for `guess`,
/// in their original order.
pub fn compatible(guess: &Word, pattern: FeedbackPattern, pool: &[Word]) -> Vec<Word> {
    let constraint = Constraint::new(guess, pattern);
    pool.iter()
        .filter(|word| constraint.matches(word))
        .copied()
        .collect()
}

/// Like [`compatible`], without collecting the survivors.
pub fn count_compatible(guess: &Word, pattern: FeedbackPattern, pool: &[Word]) -> usize {
    let constraint = Constraint::new(guess, pattern);
    pool.iter().filter(|word| constraint.matches(word)).count()
}
