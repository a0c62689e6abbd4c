use wordle_greedy::session::{benchmark_guess_distribution, solve, DEFAULT_FIRST_GUESS};
use wordle_greedy::{FeedbackPattern, Outcome, SelectorConfig, Session, SolverError, Word};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| w.parse().unwrap()).collect()
}

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn get_test_words() -> Vec<Word> {
    words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

fn ight_words() -> Vec<Word> {
    words(&[
        "fight", "light", "might", "night", "right", "sight", "tight", "wight", "bight", "eight",
    ])
}

fn new_session() -> Session {
    let words = get_test_words();
    Session::new(word(DEFAULT_FIRST_GUESS), words.clone(), words)
}

#[test]
fn test_session_creation() {
    let session = new_session();
    assert_eq!(session.remaining_count(), 10);
    assert_eq!(session.guess(), "raise");
    assert_eq!(session.round(), 1);
    assert!(session.outcome().is_none());
}

#[test]
fn test_apply_feedback() {
    let mut session = new_session();
    let pattern = FeedbackPattern::calculate(&word("raise"), &word("crate"));

    assert_eq!(session.apply_feedback(pattern).unwrap(), None);
    assert!(session.remaining_count() < 10);
    assert!(session.possible_answers().contains(&word("crate")));
    assert_eq!(session.round(), 2);
    assert_eq!(session.history()[0].guess, "raise");
    assert_eq!(session.history()[0].remaining, session.remaining_count());
}

#[test]
fn test_solve_for_target() {
    let mut session = new_session();
    let outcome = session.solve_for_target(&word("crate")).unwrap();

    assert_eq!(outcome, Outcome::Solved(3));
    let guesses: Vec<String> = session.history().iter().map(|r| r.guess.to_string()).collect();
    assert_eq!(guesses, ["raise", "crane", "crate"]);
    assert!(session.history().last().unwrap().pattern.is_win());
}

#[test]
fn test_first_guess_is_the_answer() {
    let mut session = new_session();
    assert_eq!(session.solve_for_target(&word("raise")).unwrap(), Outcome::Solved(1));
}

#[test]
fn test_solve_various_targets() {
    let words = get_test_words();

    for target in &words {
        let outcome = solve(word("raise"), target, &words, &words, SelectorConfig::default())
            .unwrap();
        let rounds = outcome.rounds().unwrap();
        assert!((1..=6).contains(&rounds), "Too many guesses for target: {}", target);
    }
}

#[test]
fn test_sequential_matches_parallel() {
    let words = get_test_words();
    let sequential = SelectorConfig {
        parallel: false,
        ..SelectorConfig::default()
    };
    for target in &words {
        let mut par = new_session();
        let mut seq = new_session().with_config(sequential.clone());
        assert_eq!(
            par.solve_for_target(target).unwrap(),
            seq.solve_for_target(target).unwrap()
        );
        assert_eq!(par.history(), seq.history());
    }
}

#[test]
fn test_runs_out_of_rounds() {
    let words = ight_words();
    let config = SelectorConfig {
        universe_fallback: false,
        ..SelectorConfig::default()
    };
    let mut session = Session::new(word("fight"), words.clone(), words).with_config(config);

    let outcome = session.solve_for_target(&word("wight")).unwrap();

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(outcome.rounds(), None);
    let guesses: Vec<String> = session.history().iter().map(|r| r.guess.to_string()).collect();
    assert_eq!(guesses, ["fight", "light", "might", "night", "right", "sight"]);
    assert_eq!(session.remaining_count(), 4);

    // A finished session ignores further feedback.
    let again = session.apply_feedback(FeedbackPattern::ALL_CORRECT).unwrap();
    assert_eq!(again, Some(Outcome::Failed));
    assert_eq!(session.history().len(), 6);
}

#[test]
fn test_inconsistent_feedback() {
    let mut session = new_session();
    let all_gray: FeedbackPattern = "bbbbb".parse().unwrap();

    let result = session.apply_feedback(all_gray);
    assert!(matches!(result, Err(SolverError::NoCandidates { .. })));
    assert_eq!(session.round(), 1);
    assert_eq!(session.remaining_count(), 10);

    let mut session = new_session();
    let result = session.solve_with_feedback(|_| Ok(all_gray));
    assert!(matches!(result, Err(SolverError::NoCandidates { .. })));
}

#[test]
fn test_live_feedback_channel() {
    let mut session = new_session();
    let answer = word("toast");
    let mut submitted = Vec::new();

    let outcome = session
        .solve_with_feedback(|guess| {
            submitted.push(*guess);
            let values = FeedbackPattern::calculate(guess, &answer).to_values();
            FeedbackPattern::from_values(&values)
        })
        .unwrap();

    assert_eq!(outcome, Outcome::Solved(submitted.len()));
    assert_eq!(*submitted.last().unwrap(), answer);
}

#[test]
fn test_reset() {
    let mut session = new_session();
    session.solve_for_target(&word("toast")).unwrap();
    assert!(session.remaining_count() < 10);

    session.reset();
    assert_eq!(session.remaining_count(), 10);
    assert_eq!(session.round(), 1);
    assert_eq!(session.guess(), "raise");
    assert!(session.outcome().is_none());
}

#[test]
fn test_top_guesses() {
    let session = new_session();
    let top = session.top_guesses(3);
    assert_eq!(top.len(), 3);
    for i in 1..top.len() {
        assert!(top[i - 1].expected_remaining <= top[i].expected_remaining);
    }
}

#[test]
fn test_benchmark_distribution() {
    let words = get_test_words();
    let distribution =
        benchmark_guess_distribution(word("raise"), &words, &words, &SelectorConfig::default())
            .unwrap();

    assert_eq!(distribution.games(), 10);
    assert!(distribution.failed.is_empty());
    assert_eq!(distribution.solved[1], 1);
    assert_eq!(distribution.solved[2], 7);
    assert_eq!(distribution.solved[3], 2);
    assert!((distribution.average() - 2.1).abs() < 1e-9);
}
