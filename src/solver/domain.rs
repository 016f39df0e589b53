use serde::{Deserialize, Serialize};

/// A candidate digit. Puzzle values run `1..=N`; `0` marks an empty cell on
/// an input board and never appears inside a domain.
pub type Value = i32;

/// The ordered set of candidate values one variable may still take.
///
/// Values are kept ascending and distinct, so enumeration order is
/// deterministic across runs. An emptied domain means the owning variable can
/// never be validly assigned; the checks in
/// [`propagation`](crate::solver::propagation) treat that as branch failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    values: Vec<Value>,
}

impl Domain {
    /// Creates a domain from arbitrary values; duplicates collapse and the
    /// result is sorted.
    pub fn new(mut values: Vec<Value>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// The full domain `1..=n` of an untouched cell.
    pub fn full(n: usize) -> Self {
        Self {
            values: (1..=n as Value).collect(),
        }
    }

    /// A domain holding exactly one value.
    pub fn singleton(value: Value) -> Self {
        Self {
            values: vec![value],
        }
    }

    pub fn contains(&self, value: Value) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Removes `value` if present. Returns whether the domain changed.
    pub fn remove(&mut self, value: Value) -> bool {
        match self.values.binary_search(&value) {
            Ok(index) => {
                self.values.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exactly one candidate left.
    pub fn is_singleton(&self) -> bool {
        self.values.len() == 1
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.values.iter().copied()
    }
}
