//! Divide-and-conquer convex hull over a circular ring arena.
//!
//! Purpose
//! - Provide one hull pipeline: validate → sort → dedup → recursive merge of
//!   ring hulls along supporting tangents → one boundary walk.
//! - Keep the ring cyclic structure in an index arena (`Ring` + `NodeId`)
//!   so splices are O(1) link rewrites and dropped nodes reclaim in bulk.
//!
//! Why this design
//! - Index handles avoid ownership cycles in the doubly-linked ring and make
//!   loop-closure detection a cheap identity check.
//! - Tangent refinement uses total orientation predicates (signed areas), so
//!   vertical point pairs need no special casing.
//!
//! Code cross-refs: `ring::Ring`, `tangent::{upper_tangent, lower_tangent}`,
//! `solve::{convex_hull, solve_sorted, merge}`, `observe::HullObserver`.

pub mod observe;
pub mod rand;
mod ring;
mod solve;
mod tangent;
mod types;

pub use observe::{HullObserver, NoopObserver, TangentTrace};
pub use ring::Ring;
pub use solve::{convex_hull, convex_hull_with, merge, solve_sorted};
pub use types::{Hull, HullCfg, HullError, NodeId, Tangent};
