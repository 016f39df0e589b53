//! Value-ordering heuristics: the order in which a variable's remaining
//! candidates are tried.

use serde::{Deserialize, Serialize};

use crate::solver::domain::Value;
use crate::solver::network::ConstraintNetwork;
use crate::solver::variable::VariableId;

/// Selects the order in which candidate values are attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueOrdering {
    /// Ascending value order.
    #[default]
    InOrder,
    /// Least-constraining value first.
    LeastConstraining,
}

impl ValueOrdering {
    pub fn order(self, network: &ConstraintNetwork, variable: VariableId) -> Vec<Value> {
        match self {
            ValueOrdering::InOrder => values_in_order(network, variable),
            ValueOrdering::LeastConstraining => least_constraining_values(network, variable),
        }
    }
}

/// Remaining candidates in ascending order.
pub fn values_in_order(network: &ConstraintNetwork, variable: VariableId) -> Vec<Value> {
    let mut values = network.variable(variable).domain().values().to_vec();
    values.sort_unstable();
    values
}

/// Remaining candidates ordered by how many of the variable's neighbors also
/// hold each one in their domain, least constraining first. The sort is
/// stable, so ties keep domain order.
pub fn least_constraining_values(network: &ConstraintNetwork, variable: VariableId) -> Vec<Value> {
    let mut weighted: Vec<(Value, usize)> = network
        .variable(variable)
        .domain()
        .iter()
        .map(|value| (value, 0))
        .collect();
    for &neighbor in network.neighbors_of(variable) {
        for value in network.variable(neighbor).domain().iter() {
            if let Some(entry) = weighted.iter_mut().find(|(candidate, _)| *candidate == value) {
                entry.1 += 1;
            }
        }
    }
    weighted.sort_by_key(|&(_, weight)| weight);
    weighted.into_iter().map(|(value, _)| value).collect()
}
