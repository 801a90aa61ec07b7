//! Particle cloud generation and the per-frame easing math the renderer uses.

use rand::prelude::*;

/// Points uniformly distributed inside a sphere of the given radius,
/// rejection-sampled from the enclosing cube. Generated once at mount; the
/// clouds are never regenerated while their stage lasts.
pub fn in_sphere(rng: &mut impl Rng, count: usize, radius: f32) -> Vec<[f32; 3]> {
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let x = rng.gen_range(-1.0f32..1.0);
        let y = rng.gen_range(-1.0f32..1.0);
        let z = rng.gen_range(-1.0f32..1.0);
        if x * x + y * y + z * z <= 1.0 {
            points.push([x * radius, y * radius, z * radius]);
        }
    }
    points
}

/// Per-instance colors picked uniformly from a fixed palette.
pub fn pick_colors(rng: &mut impl Rng, count: usize, palette: &[[f32; 3]]) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| palette[rng.gen_range(0..palette.len())])
        .collect()
}

/// One frame-bound exponential smoothing step toward `target`.
///
/// `factor` is applied per rendered frame, matching the feel of the original
/// effect rather than a time-constant formulation.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Motion state of the one-shot confetti burst: scale grows linearly with
/// elapsed time while opacity eases toward zero. Created fresh each time the
/// burst mounts and discarded when it unmounts.
#[derive(Clone, Copy, Debug)]
pub struct BurstMotion {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for BurstMotion {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl BurstMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, dt_sec: f32, growth_per_sec: f32, opacity_ease: f32) {
        self.scale += dt_sec * growth_per_sec;
        self.opacity = ease_toward(self.opacity, 0.0, opacity_ease).max(0.0);
    }
}
