// Tests for particle placement and per-frame animation math.

use landing_core::{ease_toward, in_sphere, pick_colors, BurstMotion, BURST_PALETTE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn in_sphere_respects_count_and_radius() {
    let mut rng = StdRng::seed_from_u64(5);
    let points = in_sphere(&mut rng, 1000, 5.0);
    assert_eq!(points.len(), 1000);
    for p in &points {
        let r2 = p[0] * p[0] + p[1] * p[1] + p[2] * p[2];
        assert!(r2 <= 5.0 * 5.0 + 1e-4, "point {p:?} lies outside the sphere");
    }
}

#[test]
fn in_sphere_is_deterministic_per_seed() {
    let a = in_sphere(&mut StdRng::seed_from_u64(11), 64, 2.0);
    let b = in_sphere(&mut StdRng::seed_from_u64(11), 64, 2.0);
    assert_eq!(a, b);
}

#[test]
fn pick_colors_draws_from_the_palette() {
    let mut rng = StdRng::seed_from_u64(3);
    let colors = pick_colors(&mut rng, 200, &BURST_PALETTE);
    assert_eq!(colors.len(), 200);
    for c in &colors {
        assert!(
            BURST_PALETTE.contains(c),
            "color {c:?} is not in the palette"
        );
    }
}

#[test]
fn ease_toward_converges_without_overshoot() {
    let mut v = 1.0f32;
    let target = 1.5f32;
    let mut prev_gap = (target - v).abs();
    for _ in 0..500 {
        v = ease_toward(v, target, 0.05);
        let gap = (target - v).abs();
        assert!(gap <= prev_gap, "gap grew from {prev_gap} to {gap}");
        assert!(v <= target + 1e-6, "overshot: {v} > {target}");
        prev_gap = gap;
    }
    assert!((target - v).abs() < 1e-3);
}

#[test]
fn ease_toward_works_downward() {
    let mut v = 1.0f32;
    for _ in 0..500 {
        v = ease_toward(v, 0.0, 0.02);
        assert!(v >= 0.0);
    }
    assert!(v < 1e-3);
}

#[test]
fn burst_scale_grows_linearly() {
    let mut motion = BurstMotion::new();
    assert_eq!(motion.scale, 1.0);
    motion.step(0.5, 2.0, 0.02);
    assert!((motion.scale - 2.0).abs() < 1e-6);
    motion.step(0.5, 2.0, 0.02);
    assert!((motion.scale - 3.0).abs() < 1e-6);
}

#[test]
fn burst_opacity_decays_toward_zero() {
    let mut motion = BurstMotion::new();
    assert_eq!(motion.opacity, 1.0);
    let mut prev = motion.opacity;
    for _ in 0..1000 {
        motion.step(1.0 / 60.0, 2.0, 0.02);
        assert!(motion.opacity >= 0.0);
        assert!(motion.opacity <= prev);
        prev = motion.opacity;
    }
    assert!(motion.opacity < 0.01, "opacity should have faded out");
}
