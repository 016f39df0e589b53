//! Consistency checks and constraint propagation.
//!
//! All mutation flows through the [`Trail`] so the search driver can rewind a
//! failed branch exactly. Each check returns the variables it touched
//! together with a consistency verdict; a `false` verdict is a branch-local
//! failure (an emptied domain or a violated constraint) that the caller
//! resolves by undoing to its marker. It never travels further than the
//! frame that made the triggering assignment.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::solver::domain::{Domain, Value};
use crate::solver::engine::SearchStats;
use crate::solver::network::ConstraintNetwork;
use crate::solver::trail::Trail;
use crate::solver::variable::VariableId;
use crate::solver::work_list::WorkList;

/// Which consistency check runs after each trial assignment.
///
/// [`arc_consistency`] is deliberately absent: it is a preprocessing service
/// invoked before search, not a per-assignment check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyPolicy {
    /// Check assigned values only; no pruning.
    #[default]
    AssignmentsOnly,
    /// Prune each assigned value from its neighbors' domains.
    ForwardChecking,
    /// Elimination that also assigns forced values, plus the hidden-single
    /// sweep over every constraint.
    HiddenSingles,
}

/// Global consistency with no propagation: every constraint's assigned
/// members are pairwise distinct.
pub fn assignments_check(network: &ConstraintNetwork) -> bool {
    network.is_consistent()
}

/// Forward checking: for every assigned variable, prune its value from the
/// domains of neighbors that still hold it.
///
/// Returns the modified variables mapped to their resulting domains, plus the
/// consistency verdict. Pruning a domain down to nothing fails the branch
/// immediately (the wiped variable is not in the map). This check never
/// creates assignments.
pub fn forward_check(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
    stats: &mut SearchStats,
) -> (HashMap<VariableId, Domain>, bool) {
    let mut modified = HashMap::new();
    for id in 0..network.variables().len() {
        let Some(value) = network.variable(id).assignment() else {
            continue;
        };
        for neighbor in network.neighbors_of(id).to_vec() {
            if !network.variable(neighbor).domain().contains(value) {
                continue;
            }
            trail.push(network.variable(neighbor));
            network.variable_mut(neighbor).remove_from_domain(value);
            stats.prunings += 1;
            let domain = network.variable(neighbor).domain().clone();
            if domain.is_empty() {
                debug!(variable = neighbor, "forward checking wiped out a domain");
                return (modified, false);
            }
            modified.insert(neighbor, domain);
        }
    }
    (modified, network.is_consistent())
}

/// Restricted arc propagation, used to tighten a network before search.
///
/// Pops assigned variables off a FIFO work list and prunes their values from
/// mutable, unassigned neighbors; a neighbor forced down to a single
/// candidate is assigned and enqueued so its own neighbors get pruned in
/// turn. Arcs are only revisited when an endpoint becomes assigned: a domain
/// that shrinks without collapsing does not re-trigger constraints handled
/// earlier in the same call, so this is not a full fixpoint. Callers judge
/// the result with [`assignments_check`].
pub fn arc_consistency(network: &mut ConstraintNetwork, trail: &mut Trail, stats: &mut SearchStats) {
    let mut work = WorkList::new();
    for variable in network.variables() {
        if variable.is_assigned() {
            work.push_back(variable.id());
        }
    }

    while let Some(id) = work.pop_front() {
        let Some(value) = network.variable(id).assignment() else {
            continue;
        };
        for neighbor in network.neighbors_of(id).to_vec() {
            let peer = network.variable(neighbor);
            if !peer.is_mutable() || peer.is_assigned() || !peer.domain().contains(value) {
                continue;
            }
            trail.push(peer);
            let peer = network.variable_mut(neighbor);
            peer.remove_from_domain(value);
            stats.prunings += 1;
            if peer.domain().is_singleton() {
                let forced = peer.domain().values()[0];
                peer.assign(forced);
                work.push_back(neighbor);
            }
        }
    }
}

/// Combined elimination and hidden-single check.
///
/// Phase one mirrors forward checking but *does* assign a neighbor whose
/// domain collapses to a single candidate. The scan visits variables in id
/// order and reads assignments at visit time, so an assignment created
/// mid-scan prunes its own neighbors only if its id comes later; no extra
/// passes run. Phase two tallies, per constraint, how many members could
/// still take each candidate value: fewer than N distinct candidates means
/// the constraint can never be completed, and a value with exactly one
/// possible home goes there.
///
/// Returns every variable assigned during the call mapped to its value, plus
/// the consistency verdict computed after both phases.
pub fn hidden_single_check(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
    stats: &mut SearchStats,
) -> (HashMap<VariableId, Value>, bool) {
    let mut assigned = HashMap::new();

    for id in 0..network.variables().len() {
        let Some(value) = network.variable(id).assignment() else {
            continue;
        };
        for neighbor in network.neighbors_of(id).to_vec() {
            if !network.variable(neighbor).domain().contains(value) {
                continue;
            }
            trail.push(network.variable(neighbor));
            let peer = network.variable_mut(neighbor);
            peer.remove_from_domain(value);
            stats.prunings += 1;
            if peer.domain().is_empty() {
                debug!(variable = neighbor, "elimination wiped out a domain");
                return (assigned, false);
            }
            if peer.domain().is_singleton() {
                let forced = peer.domain().values()[0];
                peer.assign(forced);
                assigned.insert(neighbor, forced);
            }
        }
    }

    let n = network.size();
    for index in 0..network.constraints().len() {
        let members = network.constraints()[index].variables().to_vec();
        let mut tally: BTreeMap<Value, (usize, VariableId)> = BTreeMap::new();
        for &member in &members {
            for value in network.variable(member).domain().iter() {
                tally
                    .entry(value)
                    .and_modify(|entry| entry.0 += 1)
                    .or_insert((1, member));
            }
        }

        // Fewer distinct candidates than cells to fill: the unit is dead.
        if tally.len() < n {
            return (assigned, false);
        }

        for (value, (count, home)) in tally {
            if count != 1 {
                continue;
            }
            let candidate = network.variable(home);
            if candidate.is_assigned() || !candidate.domain().contains(value) {
                continue;
            }
            trail.push(candidate);
            network.variable_mut(home).assign(value);
            assigned.insert(home, value);
        }
    }

    (assigned, network.is_consistent())
}
