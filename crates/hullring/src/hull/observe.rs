//! Merge observers for visualization and tracing collaborators.
//!
//! The solver notifies an observer at two fixed checkpoints per merge:
//! after the tangent pair is computed and after the splice. Notifications
//! carry no return value and must not influence the algorithm; a renderer
//! that wants the partial polygon can walk `ring.boundary(hull)` itself.

use super::ring::Ring;
use super::types::{Hull, Tangent};

/// Checkpoint sink invoked by `merge`. All methods default to no-ops so
/// implementors override only what they consume.
pub trait HullObserver {
    /// Called once per merge with the freshly computed tangent chords.
    fn on_tangents(&mut self, upper: Tangent, lower: Tangent) {
        let _ = (upper, lower);
    }

    /// Called once per merge after the splice, with the merged hull handle.
    fn on_merge(&mut self, ring: &Ring, hull: Hull) {
        let _ = (ring, hull);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl HullObserver for NoopObserver {}

/// Observer that records tangent pairs in merge order.
#[derive(Clone, Debug, Default)]
pub struct TangentTrace {
    pub upper: Vec<Tangent>,
    pub lower: Vec<Tangent>,
    pub merges: usize,
}

impl HullObserver for TangentTrace {
    fn on_tangents(&mut self, upper: Tangent, lower: Tangent) {
        self.upper.push(upper);
        self.lower.push(lower);
    }

    fn on_merge(&mut self, _ring: &Ring, _hull: Hull) {
        self.merges += 1;
    }
}
