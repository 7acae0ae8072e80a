use super::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 1e-9,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending tolerance.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("x_abs_tol", self.x_abs_tol),
            ("x_rel_tol", self.x_rel_tol),
            ("residual_tol", self.residual_tol),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig { reason: name });
            }
        }
        Ok(())
    }
}
