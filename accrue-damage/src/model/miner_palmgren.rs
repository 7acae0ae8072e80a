use accrue_solve::secant;
use once_cell::sync::OnceCell;
use uom::si::f64::Force;

use super::{DamageModel, solve_uct};

/// The classical Miner-Palmgren linear damage rule.
///
/// Each cycle consumes `1 / N(F)` of total life, where `N` is a
/// caller-supplied S-N curve mapping applied force to cycles to failure.
/// The current damage state never influences the rate, so damage under a
/// constant load is a straight ramp.
///
/// The S-N curve is trusted as given: a curve returning zero or negative
/// cycles produces an infinite or negative rate that propagates unmodified
/// into the trajectory. Keeping the curve physically sensible is the
/// caller's contract.
pub struct MinerPalmgren<S>
where
    S: Fn(Force) -> f64,
{
    sn_curve: S,
    uct: OnceCell<Force>,
}

impl<S> MinerPalmgren<S>
where
    S: Fn(Force) -> f64,
{
    /// Creates the rule from an S-N curve (force to cycles to failure).
    pub fn new(sn_curve: S) -> Self {
        Self {
            sn_curve,
            uct: OnceCell::new(),
        }
    }
}

impl<S> DamageModel for MinerPalmgren<S>
where
    S: Fn(Force) -> f64,
{
    fn damage_rate(&self, _state: f64, force: Force) -> f64 {
        1.0 / (self.sn_curve)(force)
    }

    /// Solves `N(F) = 1`: the force at which the S-N curve itself predicts
    /// failure in a single cycle.
    fn uct(&self) -> Result<Force, secant::Error> {
        self.uct
            .get_or_try_init(|| solve_uct(|force| (self.sn_curve)(force) - 1.0))
            .copied()
    }
}
