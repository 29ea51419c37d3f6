/// How rectangular matrices are padded to square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding<T> {
    /// Derive the padding value from the range of the real costs.
    Derived,
    /// Use this value for every padded entry. It must be finite and strictly
    /// greater than every real cost.
    Fixed(T),
}

impl<T> Default for Padding<T> {
    fn default() -> Self {
        Padding::Derived
    }
}

/// Options shared by every engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig<T> {
    pub padding: Padding<T>,
    /// Emit phase-by-phase traces through the `log` crate.
    pub verbose: bool,
}

impl<T> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            padding: Padding::Derived,
            verbose: false,
        }
    }
}

impl<T> SolverConfig<T> {
    pub fn with_padding(mut self, padding: Padding<T>) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
