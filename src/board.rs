//! The externally visible puzzle grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An N×N puzzle grid with P×Q blocks (`P·Q = N`); `0` marks an empty cell.
///
/// The board is the interchange format at the solver's boundary: collaborators
/// hand one in to describe the initial puzzle and receive one back when a
/// solution is found. All constraint bookkeeping lives in
/// [`ConstraintNetwork`](crate::solver::network::ConstraintNetwork), which is
/// built from a board exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    p: usize,
    q: usize,
    cells: Vec<i32>,
}

impl Board {
    /// Creates an all-blank board with `p`-row by `q`-column blocks.
    pub fn empty(p: usize, q: usize) -> Result<Self> {
        if p == 0 || q == 0 {
            return Err(Error::BlockDimensions { p, q });
        }
        let n = p * q;
        Ok(Self {
            p,
            q,
            cells: vec![0; n * n],
        })
    }

    /// Builds a board from grid rows, validating shape and value ranges.
    pub fn from_grid(p: usize, q: usize, rows: &[Vec<i32>]) -> Result<Self> {
        let mut board = Self::empty(p, q)?;
        let n = board.size();
        if rows.len() != n {
            return Err(Error::GridShape {
                rows: rows.len(),
                n,
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(Error::RowLength {
                    row,
                    len: cells.len(),
                    n,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value < 0 || value > n as i32 {
                    return Err(Error::CellOutOfRange {
                        row,
                        col,
                        value,
                        n,
                    });
                }
                board.set(row, col, value);
            }
        }
        Ok(board)
    }

    pub(crate) fn from_parts(p: usize, q: usize, cells: Vec<i32>) -> Self {
        Self { p, q, cells }
    }

    /// The side length N (= P·Q).
    pub fn size(&self) -> usize {
        self.p * self.q
    }

    /// Rows per block.
    pub fn block_rows(&self) -> usize {
        self.p
    }

    /// Columns per block.
    pub fn block_cols(&self) -> usize {
        self.q
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.cells[row * self.size() + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        let n = self.size();
        self.cells[row * n + col] = value;
    }

    /// True when no cell is blank.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        let width = n.to_string().len();
        for row in 0..n {
            if row > 0 && row % self.p == 0 {
                let mut rule = String::new();
                for col in 0..n {
                    if col > 0 && col % self.q == 0 {
                        rule.push_str("+ ");
                    }
                    rule.push_str(&"-".repeat(width));
                    rule.push(' ');
                }
                writeln!(f, "{}", rule.trim_end())?;
            }
            let mut line = String::new();
            for col in 0..n {
                if col > 0 && col % self.q == 0 {
                    line.push_str("| ");
                }
                let value = self.get(row, col);
                if value == 0 {
                    line.push_str(&format!("{:>width$} ", "."));
                } else {
                    line.push_str(&format!("{value:>width$} "));
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
