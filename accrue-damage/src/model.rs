//! The damage-model abstraction and its shared simulation engine.

mod barrett_callaghan;
mod lifft;
mod miner_palmgren;

pub use barrett_callaghan::BarrettCallaghan;
pub use lifft::LiFFT;
pub use miner_palmgren::MinerPalmgren;

use accrue_solve::secant;
use uom::si::f64::Force;
use uom::si::force::{kilonewton, newton};

/// A cumulative damage-accumulation law.
///
/// A model maps the current damage state and an instantaneous applied force
/// to a per-cycle damage increment. The trait supplies the forward
/// integration loop shared by all laws; each law provides its rate and its
/// ultimate-tolerance estimate.
///
/// Models are constructed once with fixed parameters. [`simulate`] is pure
/// and may be called repeatedly; [`uct`] is solved on first access and
/// memoized for the lifetime of the instance.
///
/// [`simulate`]: DamageModel::simulate
/// [`uct`]: DamageModel::uct
pub trait DamageModel {
    /// Per-cycle damage increment from the current state and applied force.
    fn damage_rate(&self, state: f64, force: Force) -> f64;

    /// The ultimate capacity tolerance: the force predicted to cause
    /// failure within a single loading cycle.
    ///
    /// Solved numerically on first access and cached; every later call
    /// returns the same value bit for bit. A solver failure propagates to
    /// the caller and leaves the cache empty.
    ///
    /// # Errors
    ///
    /// Returns a [`secant::Error`] if the root-finder fails to converge or
    /// encounters a non-finite residual.
    fn uct(&self) -> Result<Force, secant::Error>;

    /// Simulates the damage trajectory from a pristine (zero-damage) state.
    fn simulate(&self, forces: &[Force]) -> Vec<f64> {
        self.simulate_from(forces, 0.0)
    }

    /// Simulates the damage trajectory from an arbitrary initial state.
    ///
    /// Entry `i` of the output is the damage state after applying force
    /// `i`, so the output has the same length as the input and does not
    /// include the initial state.
    fn simulate_from(&self, forces: &[Force], initial_state: f64) -> Vec<f64> {
        integrate(|state, force| self.damage_rate(state, force), forces, initial_state)
    }
}

/// Accumulates damage one force sample at a time.
pub(crate) fn integrate<R>(rate: R, forces: &[Force], initial_state: f64) -> Vec<f64>
where
    R: Fn(f64, Force) -> f64,
{
    let mut trajectory = Vec::with_capacity(forces.len());
    let mut state = initial_state;
    for &force in forces {
        state += rate(state, force);
        trajectory.push(state);
    }
    trajectory
}

/// Solves a one-cycle failure criterion for the force that satisfies it.
///
/// `residual` should be zero at the ultimate tolerance, e.g.
/// `cycles_to_failure(force) - 1.0`. The search is seeded at 1 kN, the
/// scale of physiologically relevant loads.
pub(crate) fn solve_uct<G>(residual: G) -> Result<Force, secant::Error>
where
    G: Fn(Force) -> f64,
{
    let solution = secant::solve(
        |newtons| residual(Force::new::<newton>(newtons)),
        Force::new::<kilonewton>(1.0).get::<newton>(),
        &secant::Config::default(),
    )?;
    Ok(Force::new::<newton>(solution.root))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Rule that accrues a fixed amount of damage per cycle.
    struct ConstantRate(f64);

    impl DamageModel for ConstantRate {
        fn damage_rate(&self, _state: f64, _force: Force) -> f64 {
            self.0
        }

        fn uct(&self) -> Result<Force, secant::Error> {
            unreachable!("not exercised by these tests")
        }
    }

    fn newtons(values: &[f64]) -> Vec<Force> {
        values.iter().map(|&n| Force::new::<newton>(n)).collect()
    }

    #[test]
    fn empty_input_yields_empty_trajectory() {
        let model = ConstantRate(0.1);

        assert!(model.simulate(&[]).is_empty());
    }

    #[test]
    fn single_sample_yields_one_step() {
        let model = ConstantRate(0.1);
        let forces = newtons(&[500.0]);

        let damage = model.simulate_from(&forces, 0.25);

        assert_eq!(damage.len(), 1);
        assert_relative_eq!(damage[0], 0.35, epsilon = 1e-12);
    }

    #[test]
    fn output_excludes_initial_state() {
        let model = ConstantRate(0.5);
        let forces = newtons(&[100.0, 100.0, 100.0]);

        let damage = model.simulate_from(&forces, 1.0);

        assert_eq!(damage, vec![1.5, 2.0, 2.5]);
    }

    #[test]
    fn solve_uct_recovers_known_threshold() {
        // Failure criterion with its root at exactly 2 kN.
        let uct = solve_uct(|force| force.get::<newton>() - 2000.0).expect("should solve");

        assert_relative_eq!(uct.get::<newton>(), 2000.0, max_relative = 1e-9);
    }
}
