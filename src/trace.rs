//! Observers for the phase machine.
//!
//! A `TraceSink` is handed to the solver and sees every phase transition
//! together with the full solver state. The solver core never prints; a host
//! that wants diagnostics picks a sink:
//!
//! - `NoOpTrace` ignores everything and is what non-verbose solves use.
//! - `LogTrace` forwards transitions to the `log` crate under the `munkres`
//!   target, with matrix snapshots at `trace` level.
//! - `RecordingTrace` keeps the sequence of phases for later inspection.
//!
//! Sinks take `&mut self` and are driven from a single solve on a single
//! thread.

use nalgebra::DMatrix;

use crate::cost::Cost;
use crate::munkres::{MunkresState, Phase};
use crate::stats::SolveStatistics;

/// Receives callbacks while the Munkres phase machine runs.
pub trait TraceSink<T: Cost> {
    /// Returns the name of the sink.
    fn name(&self) -> &str;

    /// Called once with the square (padded) costs before the first phase.
    fn on_start(&mut self, _costs: &DMatrix<T>) {}

    /// Called after `completed` ran; `state` already points at `next`.
    fn on_phase(&mut self, completed: Phase, next: Phase, state: &MunkresState<T>);

    /// Called once after the matching is complete.
    fn on_finish(&mut self, _statistics: &SolveStatistics) {}
}

impl<T: Cost> std::fmt::Debug for dyn TraceSink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TraceSink({})", self.name())
    }
}

/// A sink that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpTrace;

impl<T: Cost> TraceSink<T> for NoOpTrace {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpTrace"
    }

    #[inline(always)]
    fn on_phase(&mut self, _completed: Phase, _next: Phase, _state: &MunkresState<T>) {}
}

/// Writes phase transitions to the `log` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogTrace;

impl<T: Cost> TraceSink<T> for LogTrace {
    fn name(&self) -> &str {
        "LogTrace"
    }

    fn on_start(&mut self, costs: &DMatrix<T>) {
        log::debug!(target: "munkres", "solving {}x{} assignment", costs.nrows(), costs.ncols());
        log::trace!(target: "munkres", "costs:{costs}");
    }

    fn on_phase(&mut self, completed: Phase, next: Phase, state: &MunkresState<T>) {
        log::debug!(
            target: "munkres",
            "phase {} ({completed:?}) -> {next:?}, {} stars",
            completed.number(),
            state.mask().star_count()
        );
        if log::log_enabled!(target: "munkres", log::Level::Trace) {
            log::trace!(target: "munkres", "costs:{}", state.costs());
            log::trace!(target: "munkres", "mask:\n{}", state.mask());
        }
    }

    fn on_finish(&mut self, statistics: &SolveStatistics) {
        log::debug!(target: "munkres", "done: {statistics}");
    }
}

/// Remembers every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingTrace {
    transitions: Vec<(Phase, Phase)>,
    statistics: Option<SolveStatistics>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transitions(&self) -> &[(Phase, Phase)] {
        &self.transitions
    }

    /// Number of times `phase` was executed.
    pub fn count(&self, phase: Phase) -> usize {
        self.transitions.iter().filter(|(p, _)| *p == phase).count()
    }

    pub fn statistics(&self) -> Option<&SolveStatistics> {
        self.statistics.as_ref()
    }
}

impl<T: Cost> TraceSink<T> for RecordingTrace {
    fn name(&self) -> &str {
        "RecordingTrace"
    }

    fn on_start(&mut self, _costs: &DMatrix<T>) {
        self.transitions.clear();
        self.statistics = None;
    }

    fn on_phase(&mut self, completed: Phase, next: Phase, _state: &MunkresState<T>) {
        self.transitions.push((completed, next));
    }

    fn on_finish(&mut self, statistics: &SolveStatistics) {
        self.statistics = Some(statistics.clone());
    }
}
