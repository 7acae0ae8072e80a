//! Special functions needed by the closed-form damage laws.

/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Iteration cap for the series and continued-fraction evaluations.
const MAX_TERMS: usize = 200;

/// Tiny value guarding the continued fraction against division by zero.
const FPMIN: f64 = 1e-300;

/// The exponential integral `E1(x) = ∫₁^∞ exp(-x t) / t dt` for `x > 0`.
///
/// Evaluated with the power series for `x <= 1` and a modified Lentz
/// continued fraction for `x > 1`, accurate to close to machine precision
/// on both sides of the split.
///
/// `E1` is not real-valued for `x <= 0`, so this returns NaN there; callers
/// feeding the result into the secant solver see the NaN surface as a
/// non-finite-residual error rather than a silently wrong root.
pub fn exp1(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x <= 1.0 { series(x) } else { continued_fraction(x) }
}

/// Power series: `E1(x) = -γ - ln x + Σ (-1)^(k+1) x^k / (k · k!)`.
fn series(x: f64) -> f64 {
    let mut sum = -EULER_GAMMA - x.ln();
    let mut factorial_term = 1.0;
    for k in 1..=MAX_TERMS {
        let k_f = k as f64;
        factorial_term *= -x / k_f;
        let term = -factorial_term / k_f;
        sum += term;
        if term.abs() < sum.abs() * f64::EPSILON {
            break;
        }
    }
    sum
}

/// Modified Lentz evaluation of the continued fraction
/// `E1(x) = exp(-x) / (x + 1 - 1/(x + 3 - 4/(x + 5 - ...)))`.
fn continued_fraction(x: f64) -> f64 {
    let mut b = x + 1.0;
    let mut c = 1.0 / FPMIN;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=MAX_TERMS {
        let a = -((i * i) as f64);
        b += 2.0;
        d = 1.0 / (a * d + b);
        c = b + a / c;
        let delta = c * d;
        h *= delta;
        if (delta - 1.0).abs() <= f64::EPSILON {
            break;
        }
    }
    h * (-x).exp()
}
