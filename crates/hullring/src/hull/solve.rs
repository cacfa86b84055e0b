//! Divide-and-conquer driver, merge step, and the public entry points.
//!
//! The entry points validate the input once, sort it lexicographically by
//! `(x, y)` (stable), collapse coincident points, and allocate one arena for
//! the whole solve. The recursion splits at the midpoint down to singleton
//! rings and merges neighbors bottom-up; the root hull is walked once to
//! produce the boundary polygon in counter-clockwise order.
//!
//! The recursion is single-threaded on purpose: every merge mutates the
//! shared ring links of its two children, so within one merge tree the
//! merges must stay sequential.

use nalgebra::Vector2;

use super::observe::{HullObserver, NoopObserver};
use super::ring::Ring;
use super::tangent::{lower_tangent, upper_tangent};
use super::types::{Hull, HullCfg, HullError, Tangent};

/// Convex hull of `points`, returned as the boundary polygon in
/// counter-clockwise order (connect point `i` to `i + 1`, wrapping).
///
/// Coincident points (within the default `HullCfg` tolerance) are collapsed
/// before solving. Fails only on empty input or non-finite coordinates.
pub fn convex_hull(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>, HullError> {
    convex_hull_with(points, HullCfg::default(), &mut NoopObserver)
}

/// `convex_hull` with explicit tolerances and an observer receiving the
/// per-merge tangent and merge checkpoints.
pub fn convex_hull_with(
    points: &[Vector2<f64>],
    cfg: HullCfg,
    observer: &mut dyn HullObserver,
) -> Result<Vec<Vector2<f64>>, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFiniteCoordinate { index });
    }
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < cfg.eps_dup);

    let mut ring = Ring::with_capacity(pts.len());
    let hull = solve_sorted(&mut ring, &pts, observer);
    Ok(ring.boundary(hull))
}

/// Core driver on a prepared slice.
///
/// `pts` must be nonempty, sorted by `(x, y)`, and free of coincident
/// points; nodes are inserted into `ring` as the recursion bottoms out.
pub fn solve_sorted(
    ring: &mut Ring,
    pts: &[Vector2<f64>],
    observer: &mut dyn HullObserver,
) -> Hull {
    debug_assert!(!pts.is_empty(), "driver requires a nonempty slice");
    if let [p] = pts {
        let id = ring.singleton(*p);
        return Hull {
            leftmost: id,
            rightmost: id,
        };
    }
    let mid = pts.len() / 2;
    let left = solve_sorted(ring, &pts[..mid], observer);
    let right = solve_sorted(ring, &pts[mid..], observer);
    merge(ring, left, right, observer)
}

/// Splice `left` and `right` into one hull along their supporting tangents.
///
/// Rewrites exactly four directed links; every node that falls strictly
/// inside the merged boundary becomes unreachable by ring traversal and
/// drops out implicitly, with no inside/outside test. Both hulls must live
/// in `ring` with `left` entirely at or before `right` in `(x, y)` order.
pub fn merge(ring: &mut Ring, left: Hull, right: Hull, observer: &mut dyn HullObserver) -> Hull {
    let (ul, ur) = upper_tangent(ring, left, right);
    let (ll, lr) = lower_tangent(ring, left, right);
    observer.on_tangents(
        Tangent {
            left: ring.point(ul),
            right: ring.point(ur),
        },
        Tangent {
            left: ring.point(ll),
            right: ring.point(lr),
        },
    );
    ring.link_cw(ul, ur);
    ring.link_ccw(ll, lr);
    let merged = Hull {
        leftmost: left.leftmost,
        rightmost: right.rightmost,
    };
    observer.on_merge(ring, merged);
    merged
}
