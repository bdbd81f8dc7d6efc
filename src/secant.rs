//! Bracketed secant iteration for scalar root finding.
//!
//! # Algorithm
//!
//! Each iteration draws the secant line through the two endpoints of the
//! current pair and takes its x-intercept as the next estimate. The pair is
//! then narrowed around whichever side of the estimate still shows a sign
//! change, so the root stays enclosed while the estimates improve much
//! faster than bisection on smooth functions.
//!
//! # When to Use
//!
//! The secant solver is appropriate when:
//! - A sign change `f(a) * f(b) < 0` is known up front
//! - Derivative information is unavailable or expensive
//! - The function is continuous on the pair
//!
//! # Limitations
//!
//! - **Single variable only**: the function is `f64 -> f64`
//! - **Sign change required**: construction fails without one
//! - **No global guarantees**: convergence near the root is superlinear,
//!   but a one-sided pair can slow it to the false-position rate
//!
//! # Termination
//!
//! Every terminal status carries the latest estimate; only
//! [`Status::Converged`] marks it as verified within tolerance:
//!
//! - [`Status::Converged`] — step or residual magnitude dropped below the
//!   tolerance (either criterion alone suffices)
//! - [`Status::MaxIters`] — iteration limit reached
//! - [`Status::BracketLost`] — the sign test found no enclosing side for
//!   the new estimate
//! - [`Status::StoppedByObserver`] — the observer requested a halt
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per computed estimate, carrying the
//! estimate, the pair it was computed from, and both error magnitudes.
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod bracket;
mod config;
mod error;
mod solution;


pub use config::Config;
pub use error::{BracketError, Error};
pub use solution::{Solution, Status, TracePoint};

use crate::observe::Observer;

use bracket::{Bounds, Bracket, Point};

/// Control actions supported by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    StopEarly,
}

/// Iteration event emitted by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the solve loop).
    pub iter: usize,
    /// The pair the estimate was computed from.
    pub bracket: [f64; 2],
    /// The new estimate.
    pub x: f64,
    /// Absolute step magnitude from the pair's left endpoint.
    pub step: f64,
    /// Absolute residual magnitude at the estimate.
    pub residual: f64,
}

/// Finds a root of `f` on a sign-changing pair using the secant method.
///
/// The pair must satisfy `f(a) * f(b) < 0`; this is checked once, with
/// exactly two function evaluations, before any iteration runs. Observers
/// see each iteration's estimate and pair state.
///
/// # Errors
///
/// Returns an error if the pair or config is invalid, if `f` produces a
/// non-finite residual, or if the endpoint residuals ever coincide and
/// leave the secant line without an x-intercept.
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [left, right] = Bounds::new(bracket)?.as_array();

    let left_point = Point::new(left, residual_at(&f, left)?);
    let right_point = Point::new(right, residual_at(&f, right)?);

    let mut pair = Bracket::new(left_point, right_point)?;

    let mut trace = Vec::new();
    let mut iter = 0;

    loop {
        iter += 1;

        let dx = match pair.secant_step() {
            Some(dx) => dx,
            None => {
                return Err(Error::FlatSecant {
                    left: pair.left().x,
                    right: pair.right().x,
                    residual: pair.left().residual,
                });
            }
        };

        let x = pair.left().x + dx;
        let fx = residual_at(&f, x)?;

        let step = dx.abs();
        let residual = fx.abs();

        if config.record_trace {
            trace.push(TracePoint { x, step, residual });
        }

        let event = Event {
            iter,
            bracket: pair.as_array(),
            x,
            step,
            residual,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, x, fx, iter, trace));
                }
            }
        }

        if step < config.tolerance || residual < config.tolerance {
            return Ok(Solution::new(Status::Converged, x, fx, iter, trace));
        }

        if iter > config.max_iters {
            return Ok(Solution::new(Status::MaxIters, x, fx, iter, trace));
        }

        if !pair.shrink(Point::new(x, fx)) {
            return Ok(Solution::new(Status::BracketLost, x, fx, iter, trace));
        }
    }
}

/// Runs the secant solver without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the pair or config is invalid, if `f` produces a
/// non-finite residual, or if the secant line is ever flat.
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, config, ())
}

/// Evaluates `f` at `x`, rejecting non-finite residuals.
fn residual_at<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}
