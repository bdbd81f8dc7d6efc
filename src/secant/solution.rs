/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step or residual magnitude dropped below the tolerance.
    ///
    /// This is the only status that marks the estimate as verified.
    Converged,

    /// Reached the iteration limit without meeting the tolerance.
    MaxIters,

    /// The sign test found no side of the new estimate with a sign change,
    /// so the pair stopped enclosing the root. Residual products can flush
    /// to zero near convergence even when the signs still differ.
    BracketLost,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One recorded iteration of the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// The estimate computed this iteration.
    pub x: f64,

    /// Absolute step magnitude from the previous pair's left endpoint.
    pub step: f64,

    /// Absolute residual magnitude at the estimate.
    pub residual: f64,
}

/// The result of a secant solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at the reported estimate.
    pub residual: f64,

    /// Number of estimates computed when the solver finished.
    pub iters: usize,

    /// Per-iteration trace, empty unless recording was requested.
    pub trace: Vec<TracePoint>,
}

impl Solution {
    /// Constructs a solution for a terminal state.
    pub(super) fn new(
        status: Status,
        x: f64,
        residual: f64,
        iters: usize,
        trace: Vec<TracePoint>,
    ) -> Self {
        Self {
            status,
            x,
            residual,
            iters,
            trace,
        }
    }
}
