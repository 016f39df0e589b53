//! Gridlock is a trail-based backtracking solver for Sudoku-style
//! uniqueness puzzles.
//!
//! A puzzle is modeled as a constraint satisfaction problem: one variable per
//! cell, a domain of candidate digits, and an all-different constraint for
//! every row, column, and block. The search walks the grid with configurable
//! variable- and value-ordering heuristics, propagates after each trial
//! assignment, and rewinds failed branches through an explicit trail instead
//! of copying state.
//!
//! # Core Concepts
//!
//! - **[`board::Board`]**: the N×N grid (with P×Q blocks) handed in as the
//!   puzzle and handed back as the solution.
//! - **[`solver::network::ConstraintNetwork`]**: the constraint graph built
//!   once from the board; the only mutable state during search.
//! - **[`solver::trail::Trail`]**: the checkpointed undo log that makes
//!   backtracking exact.
//! - **[`solver::engine::SolverEngine`]**: the recursive driver, configured
//!   through [`solver::engine::SolverConfig`] and bounded by a wall-clock
//!   budget.
//!
//! # Example: Finishing a 4×4 Puzzle
//!
//! ```
//! use gridlock::board::Board;
//! use gridlock::solver::engine::{SolveOutcome, SolverConfig, SolverEngine};
//! use gridlock::solver::propagation::ConsistencyPolicy;
//!
//! let rows: Vec<Vec<i32>> = [
//!     [1, 3, 2, 4],
//!     [2, 4, 1, 3],
//!     [3, 1, 4, 2],
//!     [4, 2, 0, 1],
//! ]
//! .iter()
//! .map(|row| row.to_vec())
//! .collect();
//! let board = Board::from_grid(2, 2, &rows).unwrap();
//!
//! let config = SolverConfig {
//!     consistency: ConsistencyPolicy::ForwardChecking,
//!     ..SolverConfig::default()
//! };
//! let mut solver = SolverEngine::new(&board, config);
//! assert_eq!(solver.solve(), SolveOutcome::Solved);
//!
//! let solved = solver.solution().unwrap();
//! assert_eq!(solved.get(3, 2), 3);
//! ```

pub mod board;
pub mod error;
pub mod solver;
