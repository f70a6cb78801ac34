//! Shared fixture constructors for unit tests across `simplegraph-core`.
//!
//! Integration tests in `crates/simplegraph-core/tests/` define their own
//! local helpers because they link against the non-test library build where
//! this module is not available.
#![allow(clippy::expect_used)]

use crate::graph::{Edge, Graph};

/// Creates the edge `{a, b}`, panicking on a degenerate pair.
pub fn e(a: u32, b: u32) -> Edge<u32> {
    Edge::new(a, b).expect("distinct endpoints")
}

/// Builds a graph from vertex and endpoint-pair slices.
pub fn graph(vertices: &[u32], pairs: &[(u32, u32)]) -> Graph<u32> {
    Graph::new(vertices.iter().copied(), pairs.iter().map(|&(a, b)| e(a, b)))
}

/// The 4-cycle `1-2-3-4-1`.
pub fn square() -> Graph<u32> {
    graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)])
}

/// Two disjoint triangles: `1-2-3` and `4-5-6`.
pub fn two_triangles() -> Graph<u32> {
    graph(
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)],
    )
}

/// A triangle `1-2-3` with a pendant vertex `4` hanging off `1`. Vertex and
/// edge counts match, but `1` has degree three.
pub fn triangle_with_tail() -> Graph<u32> {
    graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 1), (1, 4)])
}
