//! Circular doubly-linked hull rings stored in an index arena.
//!
//! Nodes are addressed by `NodeId` and hold their rotational neighbors as
//! indices, so a ring has no owning cycles. Merges rewire links across two
//! rings in place; nodes cut out of a ring stay in the arena, unreachable,
//! until the whole arena drops.

use nalgebra::Vector2;

use super::types::{Hull, NodeId};

#[derive(Clone, Copy, Debug)]
struct Node {
    p: Vector2<f64>,
    cw: NodeId,
    ccw: NodeId,
}

/// Arena of ring nodes.
///
/// Invariants (for every node still reachable from a live `Hull`):
/// - following `ccw` repeatedly visits every node of that ring exactly once
///   and returns to the start;
/// - following `cw` reproduces the reverse order.
#[derive(Clone, Debug, Default)]
pub struct Ring {
    nodes: Vec<Node>,
}

impl Ring {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    /// Insert a new self-linked node: a 1-point ring.
    pub fn singleton(&mut self, p: Vector2<f64>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { p, cw: id, ccw: id });
        id
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> Vector2<f64> {
        self.nodes[id.0].p
    }

    #[inline]
    pub fn cw(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].cw
    }

    #[inline]
    pub fn ccw(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].ccw
    }

    /// Number of nodes ever inserted, including ones no longer reachable.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set `a.cw = b` and `b.ccw = a`.
    #[inline]
    pub(crate) fn link_cw(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a.0].cw = b;
        self.nodes[b.0].ccw = a;
    }

    /// Set `a.ccw = b` and `b.cw = a`.
    #[inline]
    pub(crate) fn link_ccw(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a.0].ccw = b;
        self.nodes[b.0].cw = a;
    }

    /// Walk the hull ring once counter-clockwise from `leftmost` and collect
    /// the boundary points in rotational order.
    ///
    /// Termination is by node identity, so coincident coordinates elsewhere
    /// in the arena cannot stall or shortcut the walk.
    pub fn boundary(&self, hull: Hull) -> Vec<Vector2<f64>> {
        let mut out = Vec::new();
        let mut cur = hull.leftmost;
        loop {
            out.push(self.point(cur));
            cur = self.ccw(cur);
            if cur == hull.leftmost {
                break;
            }
        }
        out
    }
}
