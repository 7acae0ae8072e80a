//! Scalar numerical solvers for the Accrue fatigue-damage toolkit.
//!
//! The crate currently provides a single solver: [`secant::solve`], a
//! derivative-free scalar root-finder seeded from one initial guess. It is
//! the workhorse behind ultimate-capacity-tolerance estimation in
//! `accrue-damage`, but has no damage-specific knowledge of its own.

pub mod secant;
