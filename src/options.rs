//! Configuration for the simplex driver.

/// Rule used to pick the leaving row once the pivot column is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioTest {
    /// `rhs / entry` for every constraint row, with a zero RHS always giving
    /// ratio 0 whatever the divisor. No sign check is made on the divisor, so a
    /// row with a zero or negative pivot-column entry can be chosen.
    #[default]
    ZeroRhs,

    /// Textbook minimum-ratio test: only rows with a strictly positive entry
    /// in the pivot column take part.
    PositiveDivisor,
}

/// Options for [`crate::simplex::Simplex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Maximum number of pivots before giving up.
    pub max_iterations: usize,

    /// Leaving row rule.
    pub ratio_test: RatioTest,

    /// Emit the whole tableau at `trace` level after every pivot.
    pub trace_tableau: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            ratio_test: RatioTest::default(),
            trace_tableau: false,
        }
    }
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_ratio_test(mut self, ratio_test: RatioTest) -> Self {
        self.ratio_test = ratio_test;
        self
    }

    pub fn with_trace_tableau(mut self, trace_tableau: bool) -> Self {
        self.trace_tableau = trace_tableau;
        self
    }
}
