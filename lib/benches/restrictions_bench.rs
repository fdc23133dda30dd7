use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_entropy_solver::details::*;
use wordle_entropy_solver::*;

fn bench_rule_from_result(c: &mut Criterion) {
    let mixed = get_result_for_guess("abide", "speed").unwrap();
    let not_present = get_result_for_guess("abide", "zywxv").unwrap();

    c.bench_function("rule_from_result_mixed", |b| {
        b.iter(|| Rule::from_result(black_box(&mixed)))
    });
    c.bench_function("rule_from_result_not_present", |b| {
        b.iter(|| Rule::from_result(black_box(&not_present)))
    });
}

fn bench_constraints_is_satisfied_by(c: &mut Criterion) {
    let constraints = ConstraintSet::from_result(&get_result_for_guess("abide", "speed").unwrap());
    let words: Vec<Word> = ["abide", "aside", "spade", "eerie", "zzzzz"]
        .iter()
        .map(|word| Word::new(word).unwrap())
        .collect();

    c.bench_function("constraints_is_satisfied_by_mixed", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|word| constraints.is_satisfied_by(black_box(word)))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_rule_from_result,
    bench_constraints_is_satisfied_by
);
criterion_main!(benches);
