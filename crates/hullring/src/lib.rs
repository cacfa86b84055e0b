//! Divide-and-conquer convex hulls in the plane.
//!
//! The hull of a point set is kept as a circular doubly-linked ring of
//! boundary nodes inside an index arena (`hull::Ring`). Sorted input is
//! split recursively down to singleton rings, and neighboring rings are
//! merged bottom-up along their supporting tangents. Observers can tap the
//! tangent/merge checkpoints for visualization without touching the
//! algorithm's control flow.

pub mod api;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, convex_hull_with, Hull, HullCfg, HullError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{
        draw_cloud, draw_cloud_on_circle, CloudCfg, PointCount, ReplayToken,
    };
    pub use crate::hull::{
        convex_hull, convex_hull_with, solve_sorted, Hull, HullCfg, HullError, HullObserver,
        NodeId, NoopObserver, Ring, Tangent, TangentTrace,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
