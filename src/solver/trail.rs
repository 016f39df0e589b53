//! The undo log that makes backtracking exact.

use crate::solver::domain::{Domain, Value};
use crate::solver::variable::{Variable, VariableId};

/// One recorded prior state: enough to put a variable back exactly as it was.
#[derive(Debug, Clone)]
struct Snapshot {
    variable: VariableId,
    domain: Domain,
    assignment: Option<Value>,
}

/// An explicit stack of checkpoints over variable-state snapshots.
///
/// Each search frame opens a checkpoint with [`place_marker`]; every mutation
/// of a variable's domain or assignment must be preceded by a [`push`] of
/// that variable's current state. [`undo`] closes the most recent checkpoint
/// and restores its snapshots in reverse push order, leaving the network
/// bit-for-bit as it was when the marker was placed. Checkpoints nest
/// strictly (LIFO), one per recursion level.
///
/// The trail also counts pushes and undos over its lifetime for reporting.
///
/// [`place_marker`]: Trail::place_marker
/// [`push`]: Trail::push
/// [`undo`]: Trail::undo
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<Snapshot>,
    markers: Vec<usize>,
    pushes: u64,
    undos: u64,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `variable`'s current domain and assignment. Call this
    /// immediately before mutating the variable; a push with no following
    /// mutation is harmless, a mutation with no preceding push corrupts
    /// every ancestor frame on backtrack.
    pub fn push(&mut self, variable: &Variable) {
        self.pushes += 1;
        self.entries.push(Snapshot {
            variable: variable.id(),
            domain: variable.domain().clone(),
            assignment: variable.assignment(),
        });
    }

    /// Opens a checkpoint; the next [`undo`](Trail::undo) rewinds to here.
    pub fn place_marker(&mut self) {
        self.markers.push(self.entries.len());
    }

    /// Rewinds to the most recent marker, restoring every snapshot recorded
    /// since, newest first.
    ///
    /// # Panics
    ///
    /// Panics when no marker is open: that is a bug in the caller's
    /// marker/undo pairing, not a recoverable condition.
    pub fn undo(&mut self, variables: &mut [Variable]) {
        let marker = self
            .markers
            .pop()
            .expect("Trail::undo called without an open marker");
        self.undos += 1;
        let unwound = self.entries.split_off(marker);
        for snapshot in unwound.into_iter().rev() {
            variables[snapshot.variable].restore(snapshot.domain, snapshot.assignment);
        }
    }

    /// Snapshots currently recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Open checkpoints; equals the search recursion depth.
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Total pushes over the trail's lifetime.
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    /// Total undos over the trail's lifetime.
    pub fn undo_count(&self) -> u64 {
        self.undos
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::board::Board;
    use crate::solver::network::ConstraintNetwork;

    fn empty_4x4() -> ConstraintNetwork {
        ConstraintNetwork::new(&Board::empty(2, 2).unwrap())
    }

    #[test]
    fn undo_restores_a_single_mutation() {
        let mut network = empty_4x4();
        let mut trail = Trail::new();
        let before = network.variables().to_vec();

        trail.place_marker();
        trail.push(network.variable(5));
        network.variable_mut(5).assign(3);
        assert_ne!(network.variables(), before.as_slice());

        trail.undo(network.variables_mut());
        assert_eq!(network.variables(), before.as_slice());
        assert!(trail.is_empty());
    }

    #[test]
    fn nested_checkpoints_unwind_in_lifo_order() {
        let mut network = empty_4x4();
        let mut trail = Trail::new();
        let initial = network.variables().to_vec();

        trail.place_marker();
        trail.push(network.variable(0));
        network.variable_mut(0).assign(1);
        let after_outer = network.variables().to_vec();

        trail.place_marker();
        trail.push(network.variable(1));
        network.variable_mut(1).remove_from_domain(1);
        trail.push(network.variable(2));
        network.variable_mut(2).remove_from_domain(1);
        assert_eq!(trail.depth(), 2);

        trail.undo(network.variables_mut());
        assert_eq!(network.variables(), after_outer.as_slice());

        trail.undo(network.variables_mut());
        assert_eq!(network.variables(), initial.as_slice());
        assert_eq!(trail.undo_count(), 2);
    }

    #[test]
    fn repeated_mutations_of_one_variable_restore_the_oldest_state() {
        let mut network = empty_4x4();
        let mut trail = Trail::new();
        let before = network.variables().to_vec();

        trail.place_marker();
        trail.push(network.variable(7));
        network.variable_mut(7).remove_from_domain(2);
        trail.push(network.variable(7));
        network.variable_mut(7).assign(4);

        trail.undo(network.variables_mut());
        assert_eq!(network.variables(), before.as_slice());
    }

    #[test]
    #[should_panic(expected = "without an open marker")]
    fn undo_without_a_marker_is_fatal() {
        let mut network = empty_4x4();
        let mut trail = Trail::new();
        trail.undo(network.variables_mut());
    }

    proptest! {
        #[test]
        fn round_trip_restores_every_touched_variable(
            ops in proptest::collection::vec((0usize..16, 1i32..=4, proptest::bool::ANY), 1..60)
        ) {
            let mut network = empty_4x4();
            let mut trail = Trail::new();
            let before = network.variables().to_vec();

            trail.place_marker();
            for (id, value, assign) in ops {
                trail.push(network.variable(id));
                if assign {
                    network.variable_mut(id).assign(value);
                } else {
                    network.variable_mut(id).remove_from_domain(value);
                }
            }
            trail.undo(network.variables_mut());

            prop_assert_eq!(network.variables(), before.as_slice());
            prop_assert!(trail.is_empty());
            prop_assert_eq!(trail.depth(), 0);
        }
    }
}
