//! Random point clouds in 2D (deterministic, replayable).
//!
//! Purpose
//! - Provide small, reproducible point-cloud samplers for tests, benches,
//!   and the cli `gen` subcommand. Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG.
//!
//! Layouts
//! - `draw_cloud`: uniform over the square `[-h, h]²`, optionally snapped to
//!   a grid (snapping produces duplicate and collinear configurations on
//!   purpose, which exercise the dedup and tie-break paths).
//! - `draw_cloud_on_circle`: jittered angles on a circle, so every drawn
//!   point is a vertex of the cloud's hull.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Uniform-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub point_count: PointCount,
    /// Half side length of the sampling square around the origin.
    pub half_extent: f64,
    /// If set, snap both coordinates to multiples of this step.
    pub snap_step: Option<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            point_count: PointCount::Fixed(64),
            half_extent: 1.0,
            snap_step: None,
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw a uniform point cloud per `cfg`. The result is unsorted and may
/// contain coincident points when snapping is on.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count.sample(&mut rng);
    let h = cfg.half_extent.max(1e-9);
    (0..n)
        .map(|_| {
            let mut x = (rng.gen::<f64>() * 2.0 - 1.0) * h;
            let mut y = (rng.gen::<f64>() * 2.0 - 1.0) * h;
            if let Some(step) = cfg.snap_step {
                let s = step.max(1e-9);
                x = (x / s).round() * s;
                y = (y / s).round() * s;
            }
            Vector2::new(x, y)
        })
        .collect()
}

/// Draw `count` points on a circle of `radius`, each perturbed within its
/// angular slot so no two coincide. Every point is extreme in the cloud.
pub fn draw_cloud_on_circle(count: usize, radius: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = count.max(1);
    let r = radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * 0.3 * delta;
            let th = phase + (k as f64) * delta + jitter;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            point_count: PointCount::Fixed(32),
            half_extent: 2.0,
            snap_step: None,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_cloud(cfg, tok);
        let b = draw_cloud(cfg, tok);
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b.iter()) {
            assert!((p - q).norm() < 1e-12);
        }
    }

    #[test]
    fn count_bounds_respected() {
        let cfg = CloudCfg {
            point_count: PointCount::Uniform { min: 5, max: 9 },
            ..CloudCfg::default()
        };
        for index in 0..20 {
            let pts = draw_cloud(cfg, ReplayToken { seed: 3, index });
            assert!((5..=9).contains(&pts.len()));
        }
    }

    #[test]
    fn snapping_lands_on_grid() {
        let cfg = CloudCfg {
            point_count: PointCount::Fixed(50),
            half_extent: 1.0,
            snap_step: Some(0.25),
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 11, index: 0 });
        for p in pts {
            assert!((p.x / 0.25 - (p.x / 0.25).round()).abs() < 1e-9);
            assert!((p.y / 0.25 - (p.y / 0.25).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn circle_cloud_has_requested_size() {
        let pts = draw_cloud_on_circle(16, 1.0, ReplayToken { seed: 1, index: 2 });
        assert_eq!(pts.len(), 16);
        for p in &pts {
            assert!((p.norm() - 1.0).abs() < 1e-9);
        }
    }
}
