//! Derivative-free root finding for scalar equations.
//!
//! The crate provides one solver: [`secant`], a bracketed secant iteration
//! that locates a zero of a continuous `f: f64 -> f64` on an interval whose
//! endpoint residuals have opposite signs.
//!
//! ```
//! use chord::secant::{self, Config};
//!
//! let f = |x: f64| x * x - x - 1.0;
//!
//! let solution = secant::solve_unobserved(f, [1.0, 2.0], &Config::default()).unwrap();
//!
//! // The positive root of x² - x - 1 is the golden ratio.
//! assert!((solution.x - 1.618_033_988_749_895).abs() < 1e-9);
//! ```
//!
//! Solvers emit per-iteration events through the [`Observer`] seam, so
//! callers can log progress or stop a run early without the solver itself
//! performing any I/O.

mod observe;

pub mod secant;

pub use observe::Observer;
