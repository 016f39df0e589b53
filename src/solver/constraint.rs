use crate::solver::domain::Value;
use crate::solver::variable::{Variable, VariableId};

pub type ConstraintId = usize;

/// A uniqueness group: a fixed, ordered set of variables whose assigned
/// values must be pairwise distinct (one row, column, or block).
#[derive(Debug, Clone)]
pub struct Constraint {
    vars: Vec<VariableId>,
}

impl Constraint {
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.vars.contains(&id)
    }

    /// True iff no two assigned members share a value.
    pub fn is_consistent(&self, variables: &[Variable]) -> bool {
        let mut seen: Vec<Value> = Vec::with_capacity(self.vars.len());
        for &id in &self.vars {
            if let Some(value) = variables[id].assignment() {
                if seen.contains(&value) {
                    return false;
                }
                seen.push(value);
            }
        }
        true
    }
}
