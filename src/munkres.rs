//! The Munkres phase machine.
//!
//! Solving runs through a fixed cycle of phases over a single
//! [`MunkresState`]:
//!
//! ```text
//! Reduce -> InitialStar -> TestCoverage -> FindAndPrime -> Augment -> TestCoverage ...
//!                                 |              ^   |
//!                                 v              |   v
//!                                Done        UpdateDual
//! ```
//!
//! Every augmentation grows the set of stars by one, so `Augment` runs at most
//! `n` times, and every dual update exposes a new uncovered zero, so
//! `FindAndPrime` always makes progress. Scans run in row-major order; when
//! several optimal matchings exist the scan order decides which one is
//! returned, and callers should treat that choice as unspecified.

use nalgebra::DMatrix;

use crate::assignment::Assignment;
use crate::config::SolverConfig;
use crate::cost::Cost;
use crate::error::AssignmentError;
use crate::mask::{Covers, Mark, Mask};
use crate::normalize::CostMatrix;
use crate::path::Path;
use crate::reduce::{adjust_dual, min_uncovered, reduce};
use crate::solver::AssignmentSolver;
use crate::stats::SolveStatistics;
use crate::trace::{LogTrace, NoOpTrace, TraceSink};

/// Phases of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Reduce,
    InitialStar,
    TestCoverage,
    FindAndPrime,
    Augment,
    UpdateDual,
    Done,
}

impl Phase {
    /// Classic step number of the phase, `Done` being 7.
    pub fn number(self) -> u8 {
        match self {
            Phase::Reduce => 1,
            Phase::InitialStar => 2,
            Phase::TestCoverage => 3,
            Phase::FindAndPrime => 4,
            Phase::Augment => 5,
            Phase::UpdateDual => 6,
            Phase::Done => 7,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Everything one solve owns: working costs, marks, covers, the path buffer
/// and the current phase.
#[derive(Debug, Clone)]
pub struct MunkresState<T: Cost> {
    costs: DMatrix<T>,
    mask: Mask,
    covers: Covers,
    path: Path,
    origin: Option<(usize, usize)>,
    phase: Phase,
    statistics: SolveStatistics,
}

impl<T: Cost> MunkresState<T> {
    pub fn new(costs: &CostMatrix<T>) -> Self {
        Self::from_square(costs.costs().clone())
    }

    fn from_square(costs: DMatrix<T>) -> Self {
        let n = costs.nrows();
        Self {
            costs,
            mask: Mask::new(n),
            covers: Covers::new(n),
            path: Path::with_capacity(n),
            origin: None,
            phase: Phase::Reduce,
            statistics: SolveStatistics::new(n),
        }
    }

    pub fn size(&self) -> usize {
        self.costs.nrows()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The working costs, as modified by reduction and dual updates so far.
    pub fn costs(&self) -> &DMatrix<T> {
        &self.costs
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn covers(&self) -> &Covers {
        &self.covers
    }

    /// The most recently flipped augmenting path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Runs the current phase and returns the phase that follows it. Fails
    /// with `OverflowRisk` if a dual update would grow past the cost type.
    pub fn step(&mut self) -> Result<Phase, AssignmentError> {
        if self.phase == Phase::Done {
            return Ok(Phase::Done);
        }

        self.statistics.on_step();
        self.phase = match self.phase {
            Phase::Reduce => self.reduce(),
            Phase::InitialStar => self.initial_star(),
            Phase::TestCoverage => self.test_coverage(),
            Phase::FindAndPrime => self.find_and_prime(),
            Phase::Augment => self.augment(),
            Phase::UpdateDual => self.update_dual()?,
            Phase::Done => Phase::Done,
        };
        Ok(self.phase)
    }

    /// Steps until `Done`, reporting every transition to `sink`.
    pub fn run(&mut self, sink: &mut dyn TraceSink<T>) -> Result<(), AssignmentError> {
        sink.on_start(&self.costs);
        while !self.is_done() {
            let completed = self.phase;
            let next = self.step()?;
            sink.on_phase(completed, next, self);
        }
        sink.on_finish(&self.statistics);
        Ok(())
    }

    /// Reads the matching off the stars, dropping padded rows and columns.
    pub fn assignment(&self, rows: usize, cols: usize) -> Assignment {
        Assignment::new(rows, cols, self.mask.starred_columns(rows, cols))
    }

    fn reduce(&mut self) -> Phase {
        reduce(&mut self.costs);
        Phase::InitialStar
    }

    fn initial_star(&mut self) -> Phase {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                if self.costs[(row, col)].is_zero() && self.covers.is_uncovered(row, col) {
                    self.mask.set(row, col, Mark::Star);
                    self.covers.cover_row(row);
                    self.covers.cover_col(col);
                    self.statistics.initial_stars += 1;
                }
            }
        }

        // covers mean something different from here on
        self.covers.clear();
        Phase::TestCoverage
    }

    fn test_coverage(&mut self) -> Phase {
        let n = self.size();
        for col in 0..n {
            if self.mask.star_in_col(col).is_some() {
                self.covers.cover_col(col);
            }
        }

        if self.covers.covered_cols() >= n {
            Phase::Done
        } else {
            Phase::FindAndPrime
        }
    }

    fn find_and_prime(&mut self) -> Phase {
        loop {
            let Some((row, col)) = self.find_uncovered_zero() else {
                return Phase::UpdateDual;
            };

            self.mask.set(row, col, Mark::Prime);
            self.statistics.on_prime();

            match self.mask.star_in_row(row) {
                Some(star_col) => {
                    self.covers.cover_row(row);
                    self.covers.uncover_col(star_col);
                }
                None => {
                    self.origin = Some((row, col));
                    return Phase::Augment;
                }
            }
        }
    }

    fn find_uncovered_zero(&self) -> Option<(usize, usize)> {
        let n = self.size();
        (0..n)
            .filter(|&row| !self.covers.row(row))
            .find_map(|row| {
                (0..n)
                    .find(|&col| !self.covers.col(col) && self.costs[(row, col)].is_zero())
                    .map(|col| (row, col))
            })
    }

    fn augment(&mut self) -> Phase {
        let Some(origin) = self.origin.take() else {
            // nothing to augment from; re-run the search
            return Phase::FindAndPrime;
        };

        self.path.build(origin, &self.mask);
        self.path.flip(&mut self.mask);
        self.statistics.on_augment();

        self.covers.clear();
        self.mask.erase_primes();
        Phase::TestCoverage
    }

    fn update_dual(&mut self) -> Result<Phase, AssignmentError> {
        if let Some(min) = min_uncovered(&self.costs, &self.covers) {
            adjust_dual(&mut self.costs, &self.covers, min)?;
            self.statistics.on_dual_update();
        }
        Ok(Phase::FindAndPrime)
    }
}

/// The covering-matrix Munkres engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Munkres<T> {
    config: SolverConfig<T>,
}

impl<T> Default for Munkres<T> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl<T: Cost> Munkres<T> {
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Solves with an injected trace sink, returning the statistics of the
    /// run alongside the assignment.
    pub fn solve_traced(
        &self,
        costs: &CostMatrix<T>,
        sink: &mut dyn TraceSink<T>,
    ) -> Result<(Assignment, SolveStatistics), AssignmentError> {
        let mut state = MunkresState::new(costs);
        state.run(sink)?;
        Ok((
            state.assignment(costs.rows(), costs.cols()),
            state.statistics,
        ))
    }
}

impl<T: Cost> AssignmentSolver<T> for Munkres<T> {
    fn name(&self) -> &str {
        "Munkres"
    }

    fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    fn solve_normalized(&self, costs: &CostMatrix<T>) -> Result<Assignment, AssignmentError> {
        let (assignment, _) = if self.config.verbose {
            self.solve_traced(costs, &mut LogTrace)?
        } else {
            self.solve_traced(costs, &mut NoOpTrace)?
        };
        Ok(assignment)
    }
}
