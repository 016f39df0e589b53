pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported while building a puzzle board.
///
/// Search-time failures are not `Err` values: an emptied domain or a violated
/// constraint is a branch verdict consumed by backtracking, and an exhausted
/// time budget is reported through
/// [`SolveOutcome`](crate::solver::engine::SolveOutcome).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("block dimensions {p}x{q} must both be at least 1")]
    BlockDimensions { p: usize, q: usize },

    #[error("expected {n} rows, got {rows}")]
    GridShape { rows: usize, n: usize },

    #[error("row {row} has {len} cells, expected {n}")]
    RowLength { row: usize, len: usize, n: usize },

    #[error("cell ({row}, {col}) holds {value}, expected 0..={n}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        value: i32,
        n: usize,
    },
}
