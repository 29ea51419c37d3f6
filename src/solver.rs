use nalgebra::{Dim, Matrix, RawStorage};

use crate::assignment::Assignment;
use crate::config::SolverConfig;
use crate::cost::Cost;
use crate::error::AssignmentError;
use crate::normalize::CostMatrix;

/// An algorithm computing a minimum-cost assignment.
///
/// All engines share the same contract: the returned assignment matches
/// `min(rows, cols)` pairs, uses each row and column at most once and has
/// minimal total cost. Ties between optimal matchings are broken in an
/// engine-specific way.
pub trait AssignmentSolver<T: Cost> {
    /// Returns the name of the engine.
    fn name(&self) -> &str;

    fn config(&self) -> &SolverConfig<T>;

    /// Solves an already validated and padded matrix.
    fn solve_normalized(&self, costs: &CostMatrix<T>) -> Result<Assignment, AssignmentError>;

    /// Validates, pads and solves an nalgebra matrix.
    fn solve_matrix<R, C, S>(&self, costs: &Matrix<T, R, C, S>) -> Result<Assignment, AssignmentError>
    where
        Self: Sized,
        R: Dim,
        C: Dim,
        S: RawStorage<T, R, C>,
    {
        let costs = CostMatrix::from_matrix(costs, self.config().padding)?;
        self.solve_normalized(&costs)
    }

    /// Validates, pads and solves a slice of rows.
    fn solve_rows<Row: AsRef<[T]>>(&self, rows: &[Row]) -> Result<Assignment, AssignmentError>
    where
        Self: Sized,
    {
        let costs = CostMatrix::from_rows(rows, self.config().padding)?;
        self.solve_normalized(&costs)
    }
}

impl<T: Cost> std::fmt::Debug for dyn AssignmentSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AssignmentSolver({})", self.name())
    }
}
