use crate::solver::domain::{Domain, Value};

pub type VariableId = usize;

/// One puzzle cell: its identity, candidate domain, optional assignment, and
/// whether search may write to it.
///
/// Given cells are constructed assigned and non-mutable; they participate in
/// constraints but are never branched on. Assigning a value collapses the
/// domain to that single value, which lets constraint-wide candidate tallies
/// treat assigned and unassigned members uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    id: VariableId,
    row: usize,
    col: usize,
    mutable: bool,
    domain: Domain,
    assignment: Option<Value>,
}

impl Variable {
    /// An empty cell with the full `1..=n` domain.
    pub fn unassigned(id: VariableId, row: usize, col: usize, n: usize) -> Self {
        Self {
            id,
            row,
            col,
            mutable: true,
            domain: Domain::full(n),
            assignment: None,
        }
    }

    /// A given cell, fixed before search starts.
    pub fn given(id: VariableId, row: usize, col: usize, value: Value) -> Self {
        Self {
            id,
            row,
            col,
            mutable: false,
            domain: Domain::singleton(value),
            assignment: Some(value),
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    pub fn assignment(&self) -> Option<Value> {
        self.assignment
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Assigns `value`, collapsing the domain to the singleton `{value}`.
    pub fn assign(&mut self, value: Value) {
        self.assignment = Some(value);
        self.domain = Domain::singleton(value);
    }

    /// Removes a candidate from this variable's domain.
    pub fn remove_from_domain(&mut self, value: Value) -> bool {
        self.domain.remove(value)
    }

    /// Restores a snapshot taken before a mutation. Only the trail calls this.
    pub(crate) fn restore(&mut self, domain: Domain, assignment: Option<Value>) {
        self.domain = domain;
        self.assignment = assignment;
    }
}
