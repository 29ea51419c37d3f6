//! Minimum-cost assignment for dense cost matrices.
//!
//! The default engine is the Munkres (Hungarian) algorithm: reduce rows and
//! columns, greedily star independent zeros, then alternate between priming
//! uncovered zeros, flipping augmenting paths and dual updates until every
//! row holds a star. Rectangular inputs are padded to square first.
//!
//! ```
//! use nalgebra::Matrix3;
//!
//! #[rustfmt::skip]
//! let costs = Matrix3::from_row_slice(&[
//!     4, 1, 3,
//!     2, 0, 5,
//!     3, 2, 2,
//! ]);
//! let assignment = munkres::solve(&costs).unwrap();
//! assert_eq!(assignment.total_cost(&costs), 5);
//! ```
//!
//! Other engines with the same contract implement [`AssignmentSolver`]:
//! [`ShortestAugmentingPath`] for signed costs, and [`BruteForce`] as a
//! reference for tiny instances.

mod assignment;
mod config;
mod cost;
mod error;
mod mask;
mod munkres;
mod normalize;
mod oracle;
mod path;
mod reduce;
mod sap;
mod solver;
mod stats;
mod trace;

use nalgebra::{Dim, Matrix, RawStorage};

pub use assignment::Assignment;
pub use config::{Padding, SolverConfig};
pub use cost::Cost;
pub use error::{AssignmentError, InputError};
pub use mask::{Covers, Mark, Mask};
pub use munkres::{Munkres, MunkresState, Phase};
pub use normalize::CostMatrix;
pub use oracle::{BruteForce, MAX_BRUTE_FORCE_SIZE};
pub use path::Path;
pub use reduce::{adjust_dual, min_uncovered, reduce};
pub use sap::ShortestAugmentingPath;
pub use solver::AssignmentSolver;
pub use stats::SolveStatistics;
pub use trace::{LogTrace, NoOpTrace, RecordingTrace, TraceSink};

/// Solves `costs` with the default Munkres engine.
pub fn solve<T, R, C, S>(costs: &Matrix<T, R, C, S>) -> Result<Assignment, AssignmentError>
where
    T: Cost,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    Munkres::default().solve_matrix(costs)
}

/// Solves a slice of rows with the default Munkres engine.
pub fn solve_rows<T, Row>(rows: &[Row]) -> Result<Assignment, AssignmentError>
where
    T: Cost,
    Row: AsRef<[T]>,
{
    Munkres::default().solve_rows(rows)
}
