//! Variable-selection heuristics: which unassigned cell to branch on next.

use serde::{Deserialize, Serialize};

use crate::solver::network::ConstraintNetwork;
use crate::solver::variable::VariableId;

/// Selects the strategy for picking the next variable to branch on.
///
/// A good choice here can shrink the search tree by orders of magnitude; all
/// three strategies honor the same contract, returning `None` once every
/// variable is assigned (which is how the driver detects completion).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableOrdering {
    /// First unassigned variable in id order.
    #[default]
    FirstUnassigned,
    /// Smallest remaining domain; first encountered wins ties.
    MinimumRemainingValues,
    /// Smallest remaining domain, ties broken by most unassigned neighbors.
    MrvWithDegree,
}

impl VariableOrdering {
    /// Picks the next variable to assign, or `None` when the assignment is
    /// complete.
    pub fn select(self, network: &ConstraintNetwork) -> Option<VariableId> {
        match self {
            VariableOrdering::FirstUnassigned => first_unassigned(network),
            VariableOrdering::MinimumRemainingValues => minimum_remaining_values(network),
            VariableOrdering::MrvWithDegree => mrv_with_degree(network).first().copied(),
        }
    }
}

/// Linear scan for the first variable with no assignment.
pub fn first_unassigned(network: &ConstraintNetwork) -> Option<VariableId> {
    network
        .variables()
        .iter()
        .find(|variable| !variable.is_assigned())
        .map(|variable| variable.id())
}

/// The unassigned variable with the fewest remaining candidates. Ties keep
/// the first variable encountered.
pub fn minimum_remaining_values(network: &ConstraintNetwork) -> Option<VariableId> {
    network
        .variables()
        .iter()
        .filter(|variable| !variable.is_assigned())
        .min_by_key(|variable| variable.domain().size())
        .map(|variable| variable.id())
}

/// All minimum-domain variables whose unassigned-neighbor count is maximal
/// within that minimum-domain set; empty once everything is assigned.
///
/// More than one variable can survive the tie-break; the caller picks one
/// (the engine takes the first).
pub fn mrv_with_degree(network: &ConstraintNetwork) -> Vec<VariableId> {
    let unassigned: Vec<VariableId> = network
        .variables()
        .iter()
        .filter(|variable| !variable.is_assigned())
        .map(|variable| variable.id())
        .collect();
    let Some(min_size) = unassigned
        .iter()
        .map(|&id| network.variable(id).domain().size())
        .min()
    else {
        return Vec::new();
    };

    let smallest: Vec<VariableId> = unassigned
        .into_iter()
        .filter(|&id| network.variable(id).domain().size() == min_size)
        .collect();

    let degree = |id: VariableId| {
        network
            .neighbors_of(id)
            .iter()
            .filter(|&&neighbor| !network.variable(neighbor).is_assigned())
            .count()
    };
    let max_degree = smallest.iter().map(|&id| degree(id)).max().unwrap_or(0);

    smallest
        .into_iter()
        .filter(|&id| degree(id) == max_degree)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::board::Board;

    fn empty_network() -> ConstraintNetwork {
        ConstraintNetwork::new(&Board::empty(2, 2).unwrap())
    }

    fn solved_network() -> ConstraintNetwork {
        let rows = vec![
            vec![1, 3, 2, 4],
            vec![2, 4, 1, 3],
            vec![3, 1, 4, 2],
            vec![4, 2, 3, 1],
        ];
        ConstraintNetwork::new(&Board::from_grid(2, 2, &rows).unwrap())
    }

    #[test]
    fn first_unassigned_scans_in_id_order() {
        let rows = vec![
            vec![1, 3, 0, 4],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let network = ConstraintNetwork::new(&Board::from_grid(2, 2, &rows).unwrap());
        assert_eq!(first_unassigned(&network), Some(2));
    }

    #[test]
    fn every_strategy_signals_completion_on_a_full_board() {
        let network = solved_network();
        assert_eq!(first_unassigned(&network), None);
        assert_eq!(minimum_remaining_values(&network), None);
        assert_eq!(mrv_with_degree(&network), Vec::<VariableId>::new());
        for ordering in [
            VariableOrdering::FirstUnassigned,
            VariableOrdering::MinimumRemainingValues,
            VariableOrdering::MrvWithDegree,
        ] {
            assert_eq!(ordering.select(&network), None);
        }
    }

    #[test]
    fn mrv_prefers_the_tightest_domain() {
        let mut network = empty_network();
        network.variable_mut(9).remove_from_domain(1);
        network.variable_mut(9).remove_from_domain(2);
        assert_eq!(minimum_remaining_values(&network), Some(9));
    }

    #[test]
    fn mrv_ties_go_to_the_first_variable() {
        let mut network = empty_network();
        for id in [5, 9] {
            network.variable_mut(id).remove_from_domain(1);
            network.variable_mut(id).remove_from_domain(2);
        }
        assert_eq!(minimum_remaining_values(&network), Some(5));
    }

    #[test]
    fn degree_tie_break_keeps_the_busiest_variables() {
        let mut network = empty_network();
        for id in [0, 15] {
            network.variable_mut(id).remove_from_domain(1);
            network.variable_mut(id).remove_from_domain(2);
        }
        // Same domain size, same degree: both survive.
        assert_eq!(mrv_with_degree(&network), vec![0, 15]);

        // Assigning a neighbor of 0 lowers its degree below 15's.
        network.variable_mut(1).assign(3);
        assert_eq!(mrv_with_degree(&network), vec![15]);
        assert_eq!(VariableOrdering::MrvWithDegree.select(&network), Some(15));
    }

    proptest! {
        #[test]
        fn mrv_returns_a_minimum_size_domain(
            removals in proptest::collection::vec((0usize..16, 1i32..=4), 0..48)
        ) {
            let mut network = empty_network();
            for (id, value) in removals {
                if network.variable(id).domain().size() > 1 {
                    network.variable_mut(id).remove_from_domain(value);
                }
            }
            let picked = minimum_remaining_values(&network).unwrap();
            let min = network
                .variables()
                .iter()
                .filter(|variable| !variable.is_assigned())
                .map(|variable| variable.domain().size())
                .min()
                .unwrap();
            prop_assert_eq!(network.variable(picked).domain().size(), min);
        }

        #[test]
        fn degree_tie_break_set_is_exactly_the_max_degree_subset(
            removals in proptest::collection::vec((0usize..16, 1i32..=4), 0..48),
            assignments in proptest::collection::vec(0usize..16, 0..8)
        ) {
            let mut network = empty_network();
            for (id, value) in removals {
                if network.variable(id).domain().size() > 1 {
                    network.variable_mut(id).remove_from_domain(value);
                }
            }
            for id in assignments {
                if !network.variable(id).is_assigned() {
                    let value = network.variable(id).domain().values()[0];
                    network.variable_mut(id).assign(value);
                }
            }

            let chosen = mrv_with_degree(&network);
            let unassigned: Vec<VariableId> = network
                .variables()
                .iter()
                .filter(|variable| !variable.is_assigned())
                .map(|variable| variable.id())
                .collect();
            if unassigned.is_empty() {
                prop_assert!(chosen.is_empty());
                return Ok(());
            }

            let min = unassigned
                .iter()
                .map(|&id| network.variable(id).domain().size())
                .min()
                .unwrap();
            let degree = |id: VariableId| {
                network
                    .neighbors_of(id)
                    .iter()
                    .filter(|&&neighbor| !network.variable(neighbor).is_assigned())
                    .count()
            };
            let max_degree = unassigned
                .iter()
                .filter(|&&id| network.variable(id).domain().size() == min)
                .map(|&id| degree(id))
                .max()
                .unwrap();

            prop_assert!(!chosen.is_empty());
            for &id in &chosen {
                prop_assert_eq!(network.variable(id).domain().size(), min);
                prop_assert_eq!(degree(id), max_degree);
            }
        }
    }
}
