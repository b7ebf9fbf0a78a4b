//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the vertices in increasing angle. Angular jitter
//!   is capped so consecutive angles stay less than π apart; the order is then
//!   counter-clockwise and the polygon is simple and star-shaped around the
//!   origin.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Used by benchmarks, property tests and the `random` CLI subcommand.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Polygon;
use crate::cfg::MIN_VERTICES;
use crate::error::{GeomError, Result};
use crate::point::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn validate(&self) -> Result<()> {
        let lo = match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => {
                if min > max {
                    return Err(GeomError::invalid("vertex count min <= max required"));
                }
                min
            }
        };
        if lo < MIN_VERTICES {
            return Err(GeomError::invalid(format!(
                "random polygons need at least {MIN_VERTICES} vertices"
            )));
        }
        Ok(())
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49]
    /// (triangles: [0, 0.24]).
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random counter-clockwise polygon.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon<f64>> {
    cfg.vertex_count.validate()?;
    if !(cfg.base_radius.is_finite() && cfg.base_radius > 0.0) {
        return Err(GeomError::invalid("base_radius must be finite and > 0"));
    }
    if !(cfg.angle_jitter_frac.is_finite() && cfg.radial_jitter.is_finite()) {
        return Err(GeomError::invalid("jitter parameters must be finite"));
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    // keep every angular gap below π so the origin stays in the kernel
    let gap_cap = ((n as f64 / 2.0 - 1.0) / 2.0 - 0.01).min(0.49);
    let aj = cfg.angle_jitter_frac.clamp(0.0, gap_cap);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let delta = TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    let vertices = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + k as f64 * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * cfg.base_radius;
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::from_vertices(vertices)
}
