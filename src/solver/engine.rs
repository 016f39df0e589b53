//! The backtracking search driver.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::solver::heuristics::value::ValueOrdering;
use crate::solver::heuristics::variable::VariableOrdering;
use crate::solver::network::ConstraintNetwork;
use crate::solver::propagation::{self, ConsistencyPolicy};
use crate::solver::trail::Trail;

/// Budget floor: a frame entered with this much (or less) time remaining
/// aborts with [`SolveOutcome::Timeout`] before doing any work.
pub const BUDGET_FLOOR: Duration = Duration::from_secs(60);

/// Budget used by [`SolverEngine::solve`].
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(600);

/// Aggregate counters for one solve run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Search frames entered.
    pub nodes_visited: u64,
    /// Trial assignments made by the driver (propagation-forced assignments
    /// not included).
    pub assignments: u64,
    /// Branches undone after a failed check or an exhausted subtree.
    pub backtracks: u64,
    /// Candidate values removed from domains by propagation.
    pub prunings: u64,
    /// Consistency checks invoked.
    pub propagation_calls: u64,
    /// Snapshots recorded on the trail.
    pub trail_pushes: u64,
    /// Checkpoints rewound.
    pub undo_count: u64,
    /// Total solve time.
    pub time_spent_micros: u64,
}

/// How one solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// A complete, consistent assignment was found.
    Solved,
    /// Every variable/value combination was exhausted: definitively no
    /// solution.
    Unsolvable,
    /// The wall-clock budget ran out; nothing is proven either way.
    Timeout,
}

/// The three independent strategy choices for a solve run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
    pub consistency: ConsistencyPolicy,
}

/// Outcome of one recursive frame. `Timeout` unwinds the entire stack;
/// `Finished` hands control back to the caller's value loop, which consults
/// the shared solution flag before deciding whether to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Finished,
    Timeout,
}

/// Recursive backtracking search over a [`ConstraintNetwork`].
///
/// The engine owns the network and the trail. Each frame selects a variable
/// via the configured ordering, tries its candidate values in the configured
/// order, and runs the configured consistency check after each trial
/// assignment; failed branches rewind through the trail, so the network is
/// the single mutable state shared across the whole search.
pub struct SolverEngine {
    network: ConstraintNetwork,
    trail: Trail,
    config: SolverConfig,
    has_solution: bool,
    stats: SearchStats,
}

impl SolverEngine {
    pub fn new(board: &Board, config: SolverConfig) -> Self {
        Self {
            network: ConstraintNetwork::new(board),
            trail: Trail::new(),
            config,
            has_solution: false,
            stats: SearchStats::default(),
        }
    }

    /// Runs the search with [`DEFAULT_BUDGET`].
    pub fn solve(&mut self) -> SolveOutcome {
        self.solve_with_budget(DEFAULT_BUDGET)
    }

    /// Runs the search within `budget` of wall-clock time.
    ///
    /// A budget at or below [`BUDGET_FLOOR`] returns
    /// [`SolveOutcome::Timeout`] without touching any variable. After a
    /// timeout the network contents are unspecified; after
    /// [`SolveOutcome::Solved`] the winning assignments are left in place
    /// and available through [`solution`](SolverEngine::solution).
    pub fn solve_with_budget(&mut self, budget: Duration) -> SolveOutcome {
        let started = Instant::now();
        let signal = self.search(budget);
        self.stats.trail_pushes = self.trail.pushes();
        self.stats.undo_count = self.trail.undo_count();
        self.stats.time_spent_micros += started.elapsed().as_micros() as u64;

        let outcome = match signal {
            Signal::Timeout => SolveOutcome::Timeout,
            Signal::Finished if self.has_solution => SolveOutcome::Solved,
            Signal::Finished => SolveOutcome::Unsolvable,
        };
        debug!(
            ?outcome,
            nodes = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            "search finished"
        );
        outcome
    }

    /// The solved board, once a solution has been found.
    pub fn solution(&self) -> Option<Board> {
        self.has_solution.then(|| self.network.to_board())
    }

    pub fn network(&self) -> &ConstraintNetwork {
        &self.network
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn search(&mut self, time_left: Duration) -> Signal {
        if time_left <= BUDGET_FLOOR {
            return Signal::Timeout;
        }
        let started = Instant::now();
        self.stats.nodes_visited += 1;

        if self.has_solution {
            return Signal::Finished;
        }

        let Some(variable) = self.config.variable_ordering.select(&self.network) else {
            // No unassigned variable left: the assignment is complete.
            self.has_solution = true;
            return Signal::Finished;
        };

        for value in self.config.value_ordering.order(&self.network, variable) {
            self.trail.place_marker();
            self.trail.push(&self.network.variables()[variable]);
            self.network.variable_mut(variable).assign(value);
            self.stats.assignments += 1;

            if self.check_consistency() {
                let remaining = time_left.saturating_sub(started.elapsed());
                if self.search(remaining) == Signal::Timeout {
                    // A timeout bypasses the remaining sibling values and
                    // unwinds every frame unchanged.
                    return Signal::Timeout;
                }
            }

            if self.has_solution {
                // The winning assignments live under this frame's marker;
                // undoing here would destroy them.
                return Signal::Finished;
            }

            self.trail.undo(self.network.variables_mut());
            self.stats.backtracks += 1;
        }

        Signal::Finished
    }

    fn check_consistency(&mut self) -> bool {
        self.stats.propagation_calls += 1;
        match self.config.consistency {
            ConsistencyPolicy::AssignmentsOnly => propagation::assignments_check(&self.network),
            ConsistencyPolicy::ForwardChecking => {
                propagation::forward_check(&mut self.network, &mut self.trail, &mut self.stats).1
            }
            ConsistencyPolicy::HiddenSingles => {
                propagation::hidden_single_check(&mut self.network, &mut self.trail, &mut self.stats)
                    .1
            }
        }
    }
}
