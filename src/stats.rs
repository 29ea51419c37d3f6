/// Counters collected while the phase machine runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Phases executed, including the final coverage test.
    pub steps: u64,
    /// Augmenting paths flipped.
    pub augmentations: u64,
    /// Dual updates applied.
    pub dual_updates: u64,
    /// Zeros primed during the search.
    pub primes: u64,
    /// Stars placed by the greedy initial pass.
    pub initial_stars: u64,
    /// Side length of the square matrix that was solved.
    pub size: usize,
}

impl SolveStatistics {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    pub fn on_augment(&mut self) {
        self.augmentations = self.augmentations.saturating_add(1);
    }

    #[inline]
    pub fn on_dual_update(&mut self) {
        self.dual_updates = self.dual_updates.saturating_add(1);
    }

    #[inline]
    pub fn on_prime(&mut self) {
        self.primes = self.primes.saturating_add(1);
    }
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} steps={} initial_stars={} augmentations={} dual_updates={} primes={}",
            self.size,
            self.steps,
            self.initial_stars,
            self.augmentations,
            self.dual_updates,
            self.primes
        )
    }
}
