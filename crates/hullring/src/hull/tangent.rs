//! Supporting tangents between two x-separated hull rings.
//!
//! Both tangent searches alternate two refinement walks until a full round
//! leaves both endpoints unchanged. A walk advances its endpoint around its
//! ring while the candidate node lies strictly on the outer side of the
//! current chord; sidedness is a signed parallelogram area, which stays
//! total when the chord is vertical. An exactly collinear candidate is
//! accepted only when it is strictly farther from the anchor, so a tangent
//! settles on the farthest collinear contact and points interior to a hull
//! edge are never chosen as endpoints.
//!
//! Each acceptance strictly improves the chord, so a search terminates in
//! O(|L| + |R|) steps per merge.

use crate::parallelogram_area;

use super::ring::Ring;
use super::types::{Hull, NodeId};

#[derive(Clone, Copy)]
enum Step {
    Cw,
    Ccw,
}

/// One refinement walk: advance `cur` in `step` direction while the
/// candidate improves the chord through `anchor`.
fn refine(
    ring: &Ring,
    mut cur: NodeId,
    anchor: NodeId,
    step: Step,
    outward: impl Fn(f64) -> bool,
) -> (NodeId, bool) {
    let a = ring.point(anchor);
    let mut moved = false;
    loop {
        let cand = match step {
            Step::Cw => ring.cw(cur),
            Step::Ccw => ring.ccw(cur),
        };
        if cand == cur {
            // 1-node ring
            break;
        }
        let area = parallelogram_area(ring.point(cur) - a, ring.point(cand) - a);
        let farther = (ring.point(cand) - a).norm_squared() > (ring.point(cur) - a).norm_squared();
        if !(outward(area) || (area == 0.0 && farther)) {
            break;
        }
        cur = cand;
        moved = true;
    }
    (cur, moved)
}

/// Upper tangent of `left` and `right`: the chord such that both rings lie
/// on or below it. Returns the endpoint nodes `(on left, on right)`.
pub(crate) fn upper_tangent(ring: &Ring, left: Hull, right: Hull) -> (NodeId, NodeId) {
    let mut l = left.rightmost;
    let mut r = right.leftmost;
    loop {
        let (nl, l_moved) = refine(ring, l, r, Step::Ccw, |area| area < 0.0);
        l = nl;
        let (nr, r_moved) = refine(ring, r, l, Step::Cw, |area| area > 0.0);
        r = nr;
        if !l_moved && !r_moved {
            break;
        }
    }
    (l, r)
}

/// Lower tangent: both rings on or above the chord. Walk directions and
/// sidedness flip relative to `upper_tangent`.
pub(crate) fn lower_tangent(ring: &Ring, left: Hull, right: Hull) -> (NodeId, NodeId) {
    let mut l = left.rightmost;
    let mut r = right.leftmost;
    loop {
        let (nl, l_moved) = refine(ring, l, r, Step::Cw, |area| area > 0.0);
        l = nl;
        let (nr, r_moved) = refine(ring, r, l, Step::Ccw, |area| area < 0.0);
        r = nr;
        if !l_moved && !r_moved {
            break;
        }
    }
    (l, r)
}
