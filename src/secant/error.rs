use thiserror::Error;

/// Errors that can occur when validating the initial pair.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("non-finite endpoint: {value}")]
    NonFinite { value: f64 },

    /// The endpoints are equal, giving a zero-width pair.
    #[error("zero-width pair: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// The endpoint residuals do not bracket a root.
    #[error("no sign change: f({left}) = {left_residual}, f({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// Errors that can occur during a secant solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid pair: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("flat secant line: f({left}) and f({right}) are both {residual}")]
    FlatSecant {
        left: f64,
        right: f64,
        residual: f64,
    },
}
