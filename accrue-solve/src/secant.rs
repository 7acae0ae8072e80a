mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::Solution;

/// Relative and absolute perturbation used to seed the second iterate.
const SEED_OFFSET: f64 = 1e-4;

/// Finds a root of `f` near `guess` using the secant method.
///
/// The solver is derivative-free: it seeds a second iterate from a small
/// offset off the guess and then follows secant steps. Convergence is
/// declared when a step satisfies `|Δx| <= x_abs_tol + x_rel_tol * |x|` or
/// the residual magnitude drops below `residual_tol`.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, if `f` evaluates to
/// a non-finite value, if the secant denominator vanishes away from a root,
/// or if the iteration budget is exhausted without convergence.
pub fn solve<F>(f: F, guess: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    if !guess.is_finite() {
        return Err(Error::NonFiniteGuess { value: guess });
    }

    let mut x0 = guess;
    let mut f0 = eval(&f, x0)?;
    if f0.abs() <= config.residual_tol {
        return Ok(Solution {
            root: x0,
            residual: f0,
            iters: 0,
        });
    }

    let mut x1 = {
        let scaled = x0 * (1.0 + SEED_OFFSET);
        scaled + if scaled >= 0.0 { SEED_OFFSET } else { -SEED_OFFSET }
    };
    let mut f1 = eval(&f, x1)?;
    if f1.abs() <= config.residual_tol {
        return Ok(Solution {
            root: x1,
            residual: f1,
            iters: 0,
        });
    }

    for iter in 1..=config.max_iters {
        if f1 == f0 {
            return Err(Error::Stalled {
                x: x1,
                residual: f1,
            });
        }

        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        if !x2.is_finite() {
            // The denominator effectively vanished and the step overflowed.
            return Err(Error::Stalled {
                x: x1,
                residual: f1,
            });
        }

        let f2 = eval(&f, x2)?;

        let x_converged = (x2 - x1).abs() <= config.x_abs_tol + config.x_rel_tol * x2.abs();
        if x_converged || f2.abs() <= config.residual_tol {
            return Ok(Solution {
                root: x2,
                residual: f2,
                iters: iter,
            });
        }

        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
    }

    Err(Error::NoConvergence {
        iters: config.max_iters,
        x: x1,
        residual: f1,
    })
}

/// Evaluates `f`, rejecting non-finite residuals.
fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, Error> {
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}
