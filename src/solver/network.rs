use crate::board::Board;
use crate::solver::constraint::Constraint;
use crate::solver::variable::{Variable, VariableId};

/// The constraint graph for one puzzle instance.
///
/// Built once from the initial board and never restructured; only variable
/// domains and assignments mutate afterwards. Rows, columns, and P×Q blocks
/// each contribute one uniqueness constraint. The neighbor relation (two
/// variables co-occurring in at least one constraint) is precomputed here so
/// the propagation and heuristic routines pay nothing per lookup.
#[derive(Debug, Clone)]
pub struct ConstraintNetwork {
    n: usize,
    p: usize,
    q: usize,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    neighbors: Vec<Vec<VariableId>>,
}

impl ConstraintNetwork {
    pub fn new(board: &Board) -> Self {
        let n = board.size();
        let p = board.block_rows();
        let q = board.block_cols();

        let mut variables = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let id = row * n + col;
                let value = board.get(row, col);
                variables.push(if value == 0 {
                    Variable::unassigned(id, row, col, n)
                } else {
                    Variable::given(id, row, col, value)
                });
            }
        }

        let mut constraints = Vec::with_capacity(3 * n);
        for row in 0..n {
            constraints.push(Constraint::new((0..n).map(|col| row * n + col).collect()));
        }
        for col in 0..n {
            constraints.push(Constraint::new((0..n).map(|row| row * n + col).collect()));
        }
        for block_row in 0..(n / p) {
            for block_col in 0..(n / q) {
                let mut members = Vec::with_capacity(n);
                for dr in 0..p {
                    for dc in 0..q {
                        let row = block_row * p + dr;
                        let col = block_col * q + dc;
                        members.push(row * n + col);
                    }
                }
                constraints.push(Constraint::new(members));
            }
        }

        let mut neighbors: Vec<Vec<VariableId>> = vec![Vec::new(); variables.len()];
        for constraint in &constraints {
            for &a in constraint.variables() {
                for &b in constraint.variables() {
                    if a != b {
                        neighbors[a].push(b);
                    }
                }
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Self {
            n,
            p,
            q,
            variables,
            constraints,
            neighbors,
        }
    }

    /// The puzzle side length N.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut [Variable] {
        &mut self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Every variable sharing at least one constraint with `id`, excluding
    /// `id` itself.
    pub fn neighbors_of(&self, id: VariableId) -> &[VariableId] {
        &self.neighbors[id]
    }

    /// True iff every constraint's assigned members are pairwise distinct.
    pub fn is_consistent(&self) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_consistent(&self.variables))
    }

    /// True iff every variable carries an assignment.
    pub fn is_complete(&self) -> bool {
        self.variables.iter().all(Variable::is_assigned)
    }

    /// Exports current assignments as a board; unassigned cells stay `0`.
    pub fn to_board(&self) -> Board {
        let mut cells = vec![0; self.n * self.n];
        for variable in &self.variables {
            if let Some(value) = variable.assignment() {
                cells[variable.row() * self.n + variable.col()] = value;
            }
        }
        Board::from_parts(self.p, self.q, cells)
    }
}
