//! Shared types and the error taxonomy of the hull solver.
//!
//! - `HullCfg`: input-preparation tolerances.
//! - `HullError`: conditions rejected at the entry point, before recursion.
//! - `NodeId`, `Hull`, `Tangent`: handles into the ring arena and the
//!   tangent chord reported to observers.

use nalgebra::Vector2;
use std::fmt;

/// Input-preparation tolerances.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Points closer than this collapse to one during deduplication.
    pub eps_dup: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps_dup: 1e-12 }
    }
}

/// Errors surfaced by hull construction. All are detected at the entry
/// point; the recursion itself has no failure modes.
#[derive(Debug, PartialEq, Eq)]
pub enum HullError {
    /// The input point sequence was empty.
    EmptyInput,
    /// A coordinate at `index` was NaN or infinite.
    NonFiniteCoordinate { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "cannot take the hull of an empty point set"),
            HullError::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a NaN or infinite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Identifier of a node inside a `Ring` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Handle to one hull: the extremal entry points into its ring.
///
/// Invariant: `leftmost`/`rightmost` hold the minimal/maximal `(x, y)`
/// points reachable in the ring, re-established by construction after
/// every merge (a merge can only keep the two outer extremes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hull {
    pub leftmost: NodeId,
    pub rightmost: NodeId,
}

/// A supporting tangent chord between a left and a right hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    pub left: Vector2<f64>,
    pub right: Vector2<f64>,
}
