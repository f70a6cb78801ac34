//! Cycle ordering: validating that a graph is one simple cycle and listing its
//! edges in traversal order.
//!
//! # Algorithm
//!
//! A disjoint union of simple cycles on `n` vertices has exactly `n` edges, so
//! a count mismatch is rejected before any search. Otherwise the first edge
//! `{p, q}` is set aside and [`find_path`] looks for a route from `p` back to
//! `q` over the remaining edges. The graph is a single cycle exactly when that
//! route visits every vertex: the route plus `{p, q}` then uses all `n` edges.
//!
//! Disjoint cycle unions fail because the route never leaves the component of
//! `p`. A vertex of degree three or more forces some other vertex to degree
//! one or less (the counts match), which leaves no closed walk through every
//! vertex.
use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::graph::{Graph, Vertex};
use crate::search::find_path;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Reasons a graph is rejected by [`cycle_sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotACycle {
    /// The graph has no edges, so there is no cycle to order.
    Empty,
    /// Vertex and edge counts differ.
    CountMismatch {
        /// Number of vertices in the graph.
        vertices: usize,
        /// Number of edges in the graph.
        edges: usize,
    },
    /// No route leads from one endpoint of the reference edge back to the
    /// other without it.
    NoClosingPath,
    /// The closing route misses some vertices: the graph is several cycles,
    /// or branches.
    NotHamiltonian {
        /// Vertices on the closed route.
        visited: usize,
        /// Vertices in the graph.
        vertices: usize,
    },
}

impl fmt::Display for NotACycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "not a cycle: graph has no edges"),
            Self::CountMismatch { vertices, edges } => {
                write!(f, "not a cycle: {vertices} vertices but {edges} edges")
            }
            Self::NoClosingPath => {
                write!(f, "not a cycle: reference edge does not close a cycle")
            }
            Self::NotHamiltonian { visited, vertices } => write!(
                f,
                "not a cycle: closed walk visits {visited} of {vertices} vertices"
            ),
        }
    }
}

impl std::error::Error for NotACycle {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reorders the edges of a single simple cycle into traversal order.
///
/// On success the vertex collection is unchanged and the edge collection
/// walks the cycle: consecutive edges share exactly one vertex and the last
/// edge leads back to where the first one started. The walk begins at the
/// smaller endpoint of the graph's first edge and ends with that edge.
///
/// # Errors
///
/// Returns [`NotACycle`] when the graph is empty, when its vertex and edge
/// counts differ, or when it is not one cycle through every vertex (disjoint
/// cycles, branching vertices).
pub fn cycle_sort<V: Vertex>(graph: &Graph<V>) -> Result<Graph<V>, NotACycle> {
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    if vertices != edges {
        debug!(vertices, edges, "cycle_sort: count mismatch");
        return Err(NotACycle::CountMismatch { vertices, edges });
    }
    let Some(reference) = graph.edges().first() else {
        return Err(NotACycle::Empty);
    };

    let (p, q) = reference.endpoints();
    let rest = Graph::from_unique(graph.vertices().to_vec(), graph.edges()[1..].to_vec());

    let Some(path) = find_path(&rest, p, q, |_| true) else {
        debug!(vertices, "cycle_sort: no closing path");
        return Err(NotACycle::NoClosingPath);
    };

    let known: HashSet<&V> = graph.vertices().iter().collect();
    let visited = path.vertices().len();
    if visited != vertices || !path.vertices().iter().all(|v| known.contains(v)) {
        debug!(visited, vertices, "cycle_sort: closing path misses vertices");
        return Err(NotACycle::NotHamiltonian { visited, vertices });
    }

    let mut ordered = path.into_edges();
    ordered.push(reference.clone());
    Ok(Graph::from_unique(graph.vertices().to_vec(), ordered))
}

/// Returns `true` if `graph` is a single simple cycle through all of its
/// vertices.
pub fn is_cycle<V: Vertex>(graph: &Graph<V>) -> bool {
    cycle_sort(graph).is_ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::{e, graph, square, triangle_with_tail, two_triangles};

    /// Asserts that consecutive edges share exactly one vertex and the last
    /// edge closes back onto the first.
    fn assert_closed_walk(edges: &[crate::Edge<u32>]) {
        let n = edges.len();
        for i in 0..n {
            let (a, b) = (&edges[i], &edges[(i + 1) % n]);
            let shared = [a.low(), a.high()]
                .into_iter()
                .filter(|v| b.contains(v))
                .count();
            assert_eq!(shared, 1, "edges {a:?} and {b:?} must share one vertex");
        }
    }

    #[test]
    fn triangle_sorts_into_walk() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);
        let sorted = cycle_sort(&g).expect("triangle is a cycle");
        assert_eq!(sorted.vertices(), g.vertices());
        assert_eq!(sorted.edges(), &[e(1, 3), e(2, 3), e(1, 2)]);
    }

    #[test]
    fn shuffled_hexagon_sorts_into_walk() {
        // 1-4-2-6-3-5-1 listed out of order.
        let g = graph(
            &[1, 2, 3, 4, 5, 6],
            &[(2, 6), (5, 1), (3, 5), (4, 2), (6, 3), (1, 4)],
        );
        let sorted = cycle_sort(&g).expect("hexagon is a cycle");
        assert_eq!(sorted.edge_count(), 6);
        assert!(sorted.set_eq(&g));
        assert_closed_walk(sorted.edges());
        assert_eq!(
            sorted.edges(),
            &[e(2, 4), e(1, 4), e(1, 5), e(3, 5), e(3, 6), e(2, 6)]
        );
    }

    #[test]
    fn square_ends_with_reference_edge() {
        let sorted = cycle_sort(&square()).expect("square is a cycle");
        assert_eq!(sorted.edges().last(), Some(&e(1, 2)));
        assert_closed_walk(sorted.edges());
    }

    #[test]
    fn sorting_a_sorted_cycle_keeps_it_a_walk() {
        let once = cycle_sort(&square()).expect("square is a cycle");
        let twice = cycle_sort(&once).expect("still a cycle");
        assert!(twice.set_eq(&once));
        assert_closed_walk(twice.edges());
    }

    #[test]
    fn disjoint_triangles_are_rejected() {
        let err = cycle_sort(&two_triangles()).expect_err("two components");
        assert_eq!(
            err,
            NotACycle::NotHamiltonian {
                visited: 3,
                vertices: 6
            }
        );
    }

    #[test]
    fn branching_vertex_is_rejected() {
        let err = cycle_sort(&triangle_with_tail()).expect_err("degree-3 vertex");
        assert_eq!(
            err,
            NotACycle::NotHamiltonian {
                visited: 3,
                vertices: 4
            }
        );
    }

    #[test]
    fn path_graph_is_rejected_on_counts() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        assert_eq!(
            cycle_sort(&g),
            Err(NotACycle::CountMismatch {
                vertices: 3,
                edges: 2
            })
        );
    }

    #[test]
    fn reference_edge_without_return_route_is_rejected() {
        // Counts match, but {1,2} is a bridge to the triangle 2-3-4.
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(cycle_sort(&g), Err(NotACycle::NoClosingPath));
    }

    #[test]
    fn closing_path_through_unlisted_vertex_is_rejected() {
        // Counts match, but the walk 1-4-2 passes through 4, which is not a
        // listed vertex, and never reaches 3.
        let g = Graph::new([1, 2, 3], [e(1, 2), e(2, 4), e(1, 4)]);
        assert_eq!(
            cycle_sort(&g),
            Err(NotACycle::NotHamiltonian {
                visited: 3,
                vertices: 3
            })
        );
    }

    #[test]
    fn empty_graph_is_rejected() {
        assert_eq!(cycle_sort(&Graph::<u32>::default()), Err(NotACycle::Empty));
    }

    #[test]
    fn is_cycle_mirrors_cycle_sort() {
        assert!(is_cycle(&square()));
        assert!(!is_cycle(&two_triangles()));
        assert!(!is_cycle(&triangle_with_tail()));
    }

    #[test]
    fn error_messages_name_the_reason() {
        let msg = NotACycle::CountMismatch {
            vertices: 3,
            edges: 2,
        }
        .to_string();
        assert_eq!(msg, "not a cycle: 3 vertices but 2 edges");
        assert!(NotACycle::NoClosingPath.to_string().starts_with("not a cycle"));
    }
}
