//! Cumulative fatigue-damage models for repetitive loading analysis.
//!
//! Given a series of applied forces, each model forward-integrates a scalar
//! damage state that accumulates toward failure at 1.0, using one of three
//! published damage-accumulation laws:
//!
//! - [`MinerPalmgren`]: the classical linear rule driven by a
//!   caller-supplied S-N curve.
//! - [`BarrettCallaghan`]: a nonlinear, state-dependent law with a
//!   closed-form cycles-to-failure solution.
//! - [`LiFFT`]: the Lifting Fatigue Failure Tool of Gallagher et al.
//!   (2017), an exponential law normalized by a reference ultimate
//!   tolerance.
//!
//! All models share the [`DamageModel`] trait, which provides the
//! simulation loop and a lazily computed ultimate capacity tolerance
//! ([`DamageModel::uct`]): the force at which the model predicts failure
//! within a single loading cycle, found numerically with the secant solver
//! from `accrue-solve`.
//!
//! Forces are `uom` quantities, so callers work in whatever unit is
//! convenient:
//!
//! ```
//! use accrue_damage::{DamageModel, LiFFT};
//! use uom::si::f64::Force;
//! use uom::si::force::kilonewton;
//!
//! let model = LiFFT::default();
//! let forces = vec![Force::new::<kilonewton>(5.0); 100];
//! let damage = model.simulate(&forces);
//!
//! assert_eq!(damage.len(), 100);
//! assert!(damage[99] < 1.0);
//! ```

pub mod model;
pub mod special;

pub use accrue_solve::secant::Error as SolveError;
pub use model::{BarrettCallaghan, DamageModel, LiFFT, MinerPalmgren};
