//! Cross-model scenarios exercising the public API end to end.

use accrue_damage::{BarrettCallaghan, DamageModel, LiFFT, MinerPalmgren};
use approx::assert_relative_eq;
use uom::si::f64::Force;
use uom::si::force::{kilonewton, newton};

/// Fifty lifts ramping linearly from zero up to 5 kN.
fn lift_ramp() -> Vec<Force> {
    (0..50)
        .map(|i| Force::new::<kilonewton>(5.0 * i as f64 / 49.0))
        .collect()
}

#[test]
fn lifft_accumulates_damage_over_a_lift_ramp() {
    let model = LiFFT::default();

    let damage = model.simulate(&lift_ramp());

    assert_eq!(damage.len(), 50);
    for window in damage.windows(2) {
        assert!(window[1] > window[0]);
    }
    assert!(damage[49] > 0.0);
    assert!(damage[49] < 1.0);
}

#[test]
fn lifft_is_miner_palmgren_with_an_exponential_sn_curve() {
    // LiFFT's rate is state-independent, so it is exactly the linear rule
    // driven by the S-N curve N(F) = (1/a) exp(-b * 100 * F / tolerance).
    let lifft = LiFFT::default();
    let miner = MinerPalmgren::new(|force: Force| {
        902_416.0 * (-0.162 * 100.0 * force.get::<newton>() / 10_000.0).exp()
    });

    let forces = lift_ramp();
    let from_lifft = lifft.simulate(&forces);
    let from_miner = miner.simulate(&forces);

    for (&a, &b) in from_lifft.iter().zip(from_miner.iter()) {
        assert_relative_eq!(a, b, max_relative = 1e-12);
    }
}

#[test]
fn barrett_callaghan_saturates_under_sustained_heavy_lifting() {
    let model = BarrettCallaghan::default();
    let forces = vec![Force::new::<kilonewton>(9.0); 60];

    let damage = model.simulate(&forces);

    for window in damage.windows(2) {
        assert!(window[1] >= window[0]);
    }
    for &value in &damage {
        assert!((0.0..=1.0).contains(&value));
    }
    // Roughly two dozen cycles to failure at 9 kN; well failed by 60.
    assert_eq!(damage[59], 1.0);
}

#[test]
fn all_models_agree_on_the_scale_of_the_ultimate_tolerance() {
    let miner = MinerPalmgren::new(|force: Force| {
        902_416.0 * (-0.162 * 100.0 * force.get::<newton>() / 10_000.0).exp()
    });
    let barrett = BarrettCallaghan::default();
    let lifft = LiFFT::default();

    for uct in [
        miner.uct().expect("miner should converge"),
        barrett.uct().expect("barrett should converge"),
        lifft.uct().expect("lifft should converge"),
    ] {
        let kn = uct.get::<kilonewton>();
        assert!((1.0..50.0).contains(&kn), "uct = {kn} kN");
    }
}
