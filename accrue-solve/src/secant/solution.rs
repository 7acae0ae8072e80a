/// The result of a successful secant solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Best estimate of the root.
    pub root: f64,
    /// Residual at the reported root estimate.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}
