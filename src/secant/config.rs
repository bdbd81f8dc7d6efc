/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of refinement steps after the first estimate.
    ///
    /// The solver always computes at least one estimate, so a value of
    /// zero returns immediately after the first step.
    pub max_iters: usize,

    /// Convergence threshold applied to both the step magnitude and the
    /// residual magnitude; either dropping below it terminates the solve.
    pub tolerance: f64,

    /// Records a per-iteration trace on the returned solution when set.
    pub record_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-12,
            record_trace: false,
        }
    }
}

impl Config {
    /// Validates that the tolerance is usable as a stopping threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite, zero, or negative.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_unusable_tolerance() {
        for tolerance in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            let config = Config {
                tolerance,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "accepted {tolerance}");
        }
    }
}
