use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_greedy::selector::total_remaining;
use wordle_greedy::{GuessSelector, SelectorConfig, Word};

const WORDS: &[&str] = &[
    "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    "fight", "light", "might", "night", "right", "sight", "tight", "wight", "bight", "eight",
    "speed", "erase", "creep", "geese", "those", "sores", "quick", "dream", "charm", "fable",
];

fn pool() -> Vec<Word> {
    WORDS.iter().filter_map(|w| w.parse().ok()).collect()
}

fn scoring(c: &mut Criterion) {
    let pool = pool();
    let guess = pool[0];

    c.bench_function("total_remaining", |b| {
        b.iter(|| total_remaining(black_box(&guess), black_box(&pool)))
    });

    for parallel in [false, true] {
        let selector = GuessSelector::new(SelectorConfig {
            parallel,
            ..SelectorConfig::default()
        });
        let name = if parallel { "best_guess/parallel" } else { "best_guess/sequential" };
        c.bench_function(name, |b| {
            b.iter(|| selector.best_guess(black_box(&pool), black_box(&pool)))
        });
    }
}

criterion_group!(benches, scoring);
criterion_main!(benches);
