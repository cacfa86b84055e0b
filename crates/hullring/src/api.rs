//! Curated re-export surface.
//!
//! Prefer these re-exports for clarity and consistency across binaries,
//! benches, and examples.

// Hull solver and ring data structure
pub use crate::hull::{
    convex_hull, convex_hull_with, merge, solve_sorted, Hull, HullCfg, HullError, HullObserver,
    NodeId, NoopObserver, Ring, Tangent, TangentTrace,
};
// Reproducible point clouds
pub use crate::hull::rand::{
    draw_cloud, draw_cloud_on_circle, CloudCfg, PointCount, ReplayToken,
};
