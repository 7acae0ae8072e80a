use accrue_solve::secant;
use once_cell::sync::OnceCell;
use uom::si::f64::Force;
use uom::si::force::{kilonewton, newton};

use super::{DamageModel, solve_uct};

/// The LiFFT cumulative damage model of Gallagher et al. (2017).
///
/// The Lifting Fatigue Failure Tool accrues damage at
/// `a exp(b P)` per cycle, where `P` is the applied force expressed as a
/// percentage of a reference ultimate tolerance supplied at construction.
/// The rate is independent of the current damage state, making this a
/// Miner-Palmgren rule with the implicit S-N curve
/// `N(F) = (1/a) exp(-b P)`.
pub struct LiFFT {
    a: f64,
    /// Sensitivity per percent of the reference tolerance.
    b: f64,
    ultimate_tolerance: Force,
    uct: OnceCell<Force>,
}

impl LiFFT {
    pub fn new(a: f64, b: f64, ultimate_tolerance: Force) -> Self {
        Self {
            a,
            b,
            ultimate_tolerance,
            uct: OnceCell::new(),
        }
    }

    /// The reference tolerance supplied at construction.
    ///
    /// This is not the computed [`DamageModel::uct`]: both describe a
    /// one-cycle failure load, but `uct` is solved from the fitted rate
    /// parameters and need not match the reference value numerically.
    pub fn ultimate_tolerance(&self) -> Force {
        self.ultimate_tolerance
    }

    /// Cycles to failure at a constant applied force, the reciprocal of
    /// the pristine-state damage rate.
    pub fn cycles_to_failure(&self, force: Force) -> f64 {
        1.0 / self.damage_rate(0.0, force)
    }
}

impl Default for LiFFT {
    /// Published calibration: `a = 1/902416`, `b = 0.162`, reference
    /// ultimate tolerance 10 kN.
    fn default() -> Self {
        Self::new(
            1.0 / 902_416.0,
            0.162,
            Force::new::<kilonewton>(10.0),
        )
    }
}

impl DamageModel for LiFFT {
    fn damage_rate(&self, _state: f64, force: Force) -> f64 {
        let percent_of_tolerance =
            100.0 * force.get::<newton>() / self.ultimate_tolerance.get::<newton>();
        self.a * (self.b * percent_of_tolerance).exp()
    }

    /// Solves `cycles_to_failure(F) = 1` from the fitted parameters,
    /// independently of the constructor-supplied reference tolerance.
    fn uct(&self) -> Result<Force, secant::Error> {
        self.uct
            .get_or_try_init(|| solve_uct(|force| self.cycles_to_failure(force) - 1.0))
            .copied()
    }
}
