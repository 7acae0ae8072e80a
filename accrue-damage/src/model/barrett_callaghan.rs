use accrue_solve::secant;
use once_cell::sync::OnceCell;
use uom::si::f64::Force;
use uom::si::force::newton;

use super::{DamageModel, integrate, solve_uct};
use crate::special::exp1;

/// The Barrett-Callaghan nonlinear damage-accumulation law.
///
/// The per-cycle rate `a (1 - D) exp(b F / (1 - D))` accelerates as the
/// damage state `D` approaches failure at 1.0, so trajectories converge
/// rapidly once damage is nearly complete. Damage is bounded by definition:
/// [`simulate_from`] clamps every output to `[0, 1]`, and the rate past
/// failure is zero.
///
/// The default parameters are calibrated with time measured in lift
/// durations, so one cycle corresponds to one lift.
///
/// [`simulate_from`]: DamageModel::simulate_from
pub struct BarrettCallaghan {
    a: f64,
    /// Exponential force sensitivity, per newton.
    b: f64,
    uct: OnceCell<Force>,
}

impl BarrettCallaghan {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            uct: OnceCell::new(),
        }
    }

    /// Closed-form cycles to failure at a constant applied force,
    /// `E1(b F) / a`, with `E1` the exponential integral.
    pub fn cycles_to_failure(&self, force: Force) -> f64 {
        exp1(self.b * force.get::<newton>()) / self.a
    }
}

impl Default for BarrettCallaghan {
    /// Calibrated defaults: `a = 2.47e-11`, `b = 2.03e-3` per newton.
    fn default() -> Self {
        Self::new(2.47e-11, 2.03e-3)
    }
}

impl DamageModel for BarrettCallaghan {
    fn damage_rate(&self, state: f64, force: Force) -> f64 {
        if state > 1.0 {
            return 0.0;
        }
        let remaining = 1.0 - state;
        if remaining <= 0.0 {
            // Fully failed. The formula would evaluate 0 * exp(inf) = NaN.
            return 0.0;
        }
        // An overflowing exponential saturates to +inf here; the clamp in
        // simulate_from then pins the state to 1.0 instead of letting a
        // NaN enter the trajectory.
        self.a * remaining * (self.b * force.get::<newton>() / remaining).exp()
    }

    /// Solves `cycles_to_failure(F) = 1` on the closed-form life curve.
    fn uct(&self) -> Result<Force, secant::Error> {
        self.uct
            .get_or_try_init(|| solve_uct(|force| self.cycles_to_failure(force) - 1.0))
            .copied()
    }

    /// Damage is bounded in this model; floating-point overshoot from the
    /// near-singular rate term is clamped back into `[0, 1]`.
    fn simulate_from(&self, forces: &[Force], initial_state: f64) -> Vec<f64> {
        let mut trajectory =
            integrate(|state, force| self.damage_rate(state, force), forces, initial_state);
        for damage in &mut trajectory {
            *damage = damage.clamp(0.0, 1.0);
        }
        trajectory
    }
}
