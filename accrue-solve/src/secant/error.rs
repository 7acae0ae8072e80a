use thiserror::Error;

/// Errors that can occur during secant solving.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason} must be finite and non-negative")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("secant step stalled at x = {x}: equal residuals {residual} away from a root")]
    Stalled { x: f64, residual: f64 },

    #[error("failed to converge after {iters} iterations: x = {x}, residual = {residual}")]
    NoConvergence { iters: usize, x: f64, residual: f64 },
}
