use thiserror::Error;

/// Reasons a cost matrix is rejected before solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("cost matrix has no rows")]
    Empty,
    #[error("row {row} has no entries")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} entries, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("entry ({row}, {col}) is not a finite number")]
    NonFinite { row: usize, col: usize },
}

/// Errors returned by the assignment solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("invalid cost matrix: {0}")]
    Input(#[from] InputError),
    /// The padding value needed for a `rows x cols` matrix does not fit the
    /// cost type.
    #[error("padding a {rows}x{cols} cost matrix would overflow the cost type")]
    OverflowRisk { rows: usize, cols: usize },
    /// A fixed padding value was not strictly above every real cost.
    #[error("padding value {padding} does not exceed the largest cost {largest}")]
    PaddingTooSmall { padding: String, largest: String },
    /// Exhaustive search was asked to solve an instance beyond its limit.
    #[error("exhaustive search supports at most {max} rows, got {size}")]
    TooLarge { size: usize, max: usize },
}
