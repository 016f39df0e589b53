use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gridlock::board::Board;
use gridlock::solver::engine::{SolveOutcome, SolverConfig, SolverEngine};
use gridlock::solver::heuristics::value::ValueOrdering;
use gridlock::solver::heuristics::variable::VariableOrdering;
use gridlock::solver::propagation::ConsistencyPolicy;
use gridlock::solver::stats::render_stats_table;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VarOrderArg {
    First,
    Mrv,
    MrvDegree,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValOrderArg {
    InOrder,
    Lcv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CheckArg {
    Assignments,
    ForwardChecking,
    HiddenSingles,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a Sudoku-style puzzle", long_about = None)]
struct Args {
    /// JSON file holding the grid as rows of integers (0 = blank).
    #[arg(long)]
    puzzle: Option<PathBuf>,

    /// Rows per block (used with --puzzle).
    #[arg(long, default_value_t = 3)]
    p: usize,

    /// Columns per block (used with --puzzle).
    #[arg(long, default_value_t = 3)]
    q: usize,

    /// Without --puzzle: blank this many cells of a bundled solved grid.
    #[arg(long, default_value_t = 45)]
    holes: usize,

    /// Seed for the hole punching.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value = "mrv")]
    var_order: VarOrderArg,

    #[arg(long, value_enum, default_value = "in-order")]
    val_order: ValOrderArg,

    #[arg(long, value_enum, default_value = "forward-checking")]
    check: CheckArg,

    /// Wall-clock budget in seconds.
    #[arg(long, default_value_t = 600)]
    budget_secs: u64,
}

const SOLVED_9X9: [[i32; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

fn load_board(args: &Args) -> Board {
    match &args.puzzle {
        Some(path) => {
            let text = fs::read_to_string(path).expect("failed to read the puzzle file");
            let rows: Vec<Vec<i32>> =
                serde_json::from_str(&text).expect("puzzle file is not a JSON grid");
            Board::from_grid(args.p, args.q, &rows).expect("invalid puzzle grid")
        }
        None => {
            let mut rows: Vec<Vec<i32>> = SOLVED_9X9.iter().map(|row| row.to_vec()).collect();
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let mut punched = 0;
            while punched < args.holes.min(81) {
                let row = rng.gen_range(0..9);
                let col = rng.gen_range(0..9);
                if rows[row][col] != 0 {
                    rows[row][col] = 0;
                    punched += 1;
                }
            }
            Board::from_grid(3, 3, &rows).expect("bundled grid is valid")
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = SolverConfig {
        variable_ordering: match args.var_order {
            VarOrderArg::First => VariableOrdering::FirstUnassigned,
            VarOrderArg::Mrv => VariableOrdering::MinimumRemainingValues,
            VarOrderArg::MrvDegree => VariableOrdering::MrvWithDegree,
        },
        value_ordering: match args.val_order {
            ValOrderArg::InOrder => ValueOrdering::InOrder,
            ValOrderArg::Lcv => ValueOrdering::LeastConstraining,
        },
        consistency: match args.check {
            CheckArg::Assignments => ConsistencyPolicy::AssignmentsOnly,
            CheckArg::ForwardChecking => ConsistencyPolicy::ForwardChecking,
            CheckArg::HiddenSingles => ConsistencyPolicy::HiddenSingles,
        },
    };

    let board = load_board(&args);
    println!("Puzzle:\n{board}");

    let mut solver = SolverEngine::new(&board, config);
    let outcome = solver.solve_with_budget(Duration::from_secs(args.budget_secs));

    match outcome {
        SolveOutcome::Solved => {
            println!("Solution found!");
            println!("{}", solver.solution().expect("outcome was Solved"));
        }
        SolveOutcome::Unsolvable => println!("No solution exists for this puzzle."),
        SolveOutcome::Timeout => println!("Ran out of time before finishing the search."),
    }

    println!("{}", render_stats_table(solver.stats()));
}
