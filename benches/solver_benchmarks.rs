use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridlock::board::Board;
use gridlock::solver::engine::{SolveOutcome, SolverConfig, SolverEngine};
use gridlock::solver::heuristics::value::ValueOrdering;
use gridlock::solver::heuristics::variable::VariableOrdering;
use gridlock::solver::propagation::ConsistencyPolicy;

const CLASSIC_9X9: [[i32; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

fn puzzle_board() -> Board {
    let rows: Vec<Vec<i32>> = CLASSIC_9X9.iter().map(|row| row.to_vec()).collect();
    Board::from_grid(3, 3, &rows).unwrap()
}

fn config(
    variable_ordering: VariableOrdering,
    value_ordering: ValueOrdering,
    consistency: ConsistencyPolicy,
) -> SolverConfig {
    SolverConfig {
        variable_ordering,
        value_ordering,
        consistency,
    }
}

fn variable_ordering_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("9x9 Variable Orderings");
    let board = puzzle_board();

    let cases = [
        (
            "FirstUnassigned + FC",
            config(
                VariableOrdering::FirstUnassigned,
                ValueOrdering::InOrder,
                ConsistencyPolicy::ForwardChecking,
            ),
        ),
        (
            "MRV + FC",
            config(
                VariableOrdering::MinimumRemainingValues,
                ValueOrdering::InOrder,
                ConsistencyPolicy::ForwardChecking,
            ),
        ),
        (
            "MRV+Degree + FC",
            config(
                VariableOrdering::MrvWithDegree,
                ValueOrdering::InOrder,
                ConsistencyPolicy::ForwardChecking,
            ),
        ),
    ];
    for (name, solver_config) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut solver = SolverEngine::new(black_box(&board), solver_config);
                assert_eq!(solver.solve(), SolveOutcome::Solved);
            })
        });
    }
    group.finish();
}

fn consistency_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("9x9 Consistency Checks");
    let board = puzzle_board();

    let cases = [
        (
            "MRV + ForwardChecking",
            config(
                VariableOrdering::MinimumRemainingValues,
                ValueOrdering::InOrder,
                ConsistencyPolicy::ForwardChecking,
            ),
        ),
        (
            "MRV + HiddenSingles",
            config(
                VariableOrdering::MinimumRemainingValues,
                ValueOrdering::InOrder,
                ConsistencyPolicy::HiddenSingles,
            ),
        ),
        (
            "MRV + LCV + HiddenSingles",
            config(
                VariableOrdering::MinimumRemainingValues,
                ValueOrdering::LeastConstraining,
                ConsistencyPolicy::HiddenSingles,
            ),
        ),
    ];
    for (name, solver_config) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut solver = SolverEngine::new(black_box(&board), solver_config);
                assert_eq!(solver.solve(), SolveOutcome::Solved);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, variable_ordering_benchmarks, consistency_benchmarks);
criterion_main!(benches);
