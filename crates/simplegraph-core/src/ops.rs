//! Set-level graph transformations: cliques, induced subgraphs, intersection
//! and edge subdivision.
//!
//! None of these operations can fail. Deleting an absent vertex, subdividing
//! an edge the graph does not have, or intersecting disjoint graphs are
//! no-ops or produce empty collections.
use std::collections::HashSet;

use crate::graph::{Edge, Graph, Vertex};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Builds the complete graph on `vertices`: one edge for every unordered pair
/// of distinct vertices.
///
/// Repeated input vertices collapse, so `n` distinct vertices always yield
/// `n * (n - 1) / 2` edges.
pub fn clique<V: Vertex>(vertices: impl IntoIterator<Item = V>) -> Graph<V> {
    let vertices = Graph::new(vertices, std::iter::empty()).into_parts().0;

    let mut edges = Vec::with_capacity(vertices.len() * vertices.len().saturating_sub(1) / 2);
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            if let Some(edge) = Edge::new(a.clone(), b.clone()) {
                edges.push(edge);
            }
        }
    }

    Graph::from_unique(vertices, edges)
}

// ---------------------------------------------------------------------------
// Induced subgraphs
// ---------------------------------------------------------------------------

/// Removes `v` and every edge touching it.
///
/// Returns the input unchanged (as a new value) when `v` is absent.
pub fn delete_vertex<V: Vertex>(graph: &Graph<V>, v: &V) -> Graph<V> {
    let vertices = graph
        .vertices()
        .iter()
        .filter(|u| *u != v)
        .cloned()
        .collect();
    let edges = graph
        .edges()
        .iter()
        .filter(|e| !e.contains(v))
        .cloned()
        .collect();
    Graph::from_unique(vertices, edges)
}

/// Removes every vertex of the vertex collection satisfying `predicate`,
/// returning the subgraph induced on the rest.
///
/// The result equals folding [`delete_vertex`] over the matching vertices in
/// any order. When nothing matches, the input is returned unchanged.
pub fn delete_vertices_by<V: Vertex>(
    graph: &Graph<V>,
    predicate: impl Fn(&V) -> bool,
) -> Graph<V> {
    let doomed: HashSet<&V> = graph.vertices().iter().filter(|&v| predicate(v)).collect();
    if doomed.is_empty() {
        return graph.clone();
    }

    let vertices = graph
        .vertices()
        .iter()
        .filter(|v| !doomed.contains(v))
        .cloned()
        .collect();
    let edges = graph
        .edges()
        .iter()
        .filter(|e| {
            let (a, b) = e.endpoints();
            !doomed.contains(a) && !doomed.contains(b)
        })
        .cloned()
        .collect();
    Graph::from_unique(vertices, edges)
}

/// Returns the vertices and edges present in both graphs.
///
/// Both collections are treated as sets; the result keeps `g1`'s order.
pub fn intersection<V: Vertex>(g1: &Graph<V>, g2: &Graph<V>) -> Graph<V> {
    let shared_vertices: HashSet<&V> = g2.vertices().iter().collect();
    let shared_edges: HashSet<&Edge<V>> = g2.edges().iter().collect();

    let vertices = g1
        .vertices()
        .iter()
        .filter(|v| shared_vertices.contains(v))
        .cloned()
        .collect();
    let edges = g1
        .edges()
        .iter()
        .filter(|e| shared_edges.contains(e))
        .cloned()
        .collect();
    Graph::from_unique(vertices, edges)
}

// ---------------------------------------------------------------------------
// Subdivision
// ---------------------------------------------------------------------------

/// Splits every listed edge `{a, b}` present in `graph` into `{a, new_vertex}`
/// and `{b, new_vertex}`.
///
/// Unlisted edges are kept in place. `new_vertex` joins the vertex collection
/// once, and only if at least one edge was split. When `new_vertex` is an
/// endpoint of a split edge, the collapsed half is dropped; repeated edges in
/// the output are merged.
pub fn subdivide<V: Vertex>(
    graph: &Graph<V>,
    edges_to_subdivide: &[Edge<V>],
    new_vertex: V,
) -> Graph<V> {
    let targets: HashSet<&Edge<V>> = edges_to_subdivide.iter().collect();
    let mut split_any = false;
    let mut edges: Vec<Edge<V>> = Vec::with_capacity(graph.edge_count() + targets.len());

    for edge in graph.edges() {
        if !targets.contains(edge) {
            edges.push(edge.clone());
            continue;
        }
        split_any = true;
        let (a, b) = edge.endpoints();
        edges.extend(Edge::new(a.clone(), new_vertex.clone()));
        edges.extend(Edge::new(b.clone(), new_vertex.clone()));
    }

    let mut vertices = graph.vertices().to_vec();
    if split_any && !graph.contains_vertex(&new_vertex) {
        vertices.push(new_vertex);
    }

    Graph::new(vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{e, graph, square};

    // -- clique ------------------------------------------------------------

    #[test]
    fn clique_has_every_pair_once() {
        let g = clique(1..=5);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 10);
        for a in 1..=5 {
            for b in (a + 1)..=5 {
                assert!(g.contains_edge(&e(a, b)), "missing edge {{{a},{b}}}");
            }
        }
    }

    #[test]
    fn clique_of_empty_and_singleton_has_no_edges() {
        let empty = clique(Vec::<u32>::new());
        assert!(empty.is_empty());

        let single = clique([7]);
        assert_eq!(single.vertices(), &[7]);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn clique_collapses_repeated_vertices() {
        let g = clique([1, 2, 2, 3, 1]);
        assert_eq!(g.vertices(), &[1, 2, 3]);
        assert_eq!(g.edges(), &[e(1, 2), e(1, 3), e(2, 3)]);
    }

    // -- delete_vertex -----------------------------------------------------

    #[test]
    fn delete_vertex_drops_incident_edges() {
        let g = delete_vertex(&square(), &2);
        assert_eq!(g.vertices(), &[1, 3, 4]);
        assert_eq!(g.edges(), &[e(3, 4), e(1, 4)]);
    }

    #[test]
    fn delete_absent_vertex_is_identity() {
        let g = square();
        assert_eq!(delete_vertex(&g, &99), g);
    }

    // -- delete_vertices_by ------------------------------------------------

    #[test]
    fn delete_vertices_by_removes_all_matches() {
        let g = delete_vertices_by(&clique(1..=6), |v| v % 2 == 0);
        assert_eq!(g.vertices(), &[1, 3, 5]);
        assert_eq!(g.edges(), &[e(1, 3), e(1, 5), e(3, 5)]);
    }

    #[test]
    fn delete_vertices_by_without_matches_returns_input() {
        let g = square();
        assert_eq!(delete_vertices_by(&g, |v| *v > 100), g);
    }

    #[test]
    fn delete_vertices_by_matches_folded_single_deletions() {
        let g = clique(1..=7);
        let pred = |v: &u32| v % 3 == 0;
        let folded = [6, 3].iter().fold(g.clone(), |acc, v| delete_vertex(&acc, v));
        assert!(delete_vertices_by(&g, pred).set_eq(&folded));
    }

    // -- intersection ------------------------------------------------------

    #[test]
    fn intersection_keeps_shared_vertices_and_edges() {
        let a = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
        let b = graph(&[2, 3, 4, 5], &[(3, 2), (4, 5), (3, 4)]);
        let both = intersection(&a, &b);
        assert_eq!(both.vertices(), &[2, 3, 4]);
        assert_eq!(both.edges(), &[e(2, 3), e(3, 4)]);
    }

    #[test]
    fn intersection_of_disjoint_graphs_is_empty() {
        let a = graph(&[1, 2], &[(1, 2)]);
        let b = graph(&[3, 4], &[(3, 4)]);
        assert!(intersection(&a, &b).is_empty());
    }

    #[test]
    fn intersection_is_symmetric_as_sets() {
        let a = clique(1..=5);
        let b = graph(&[5, 4, 3, 9], &[(5, 4), (3, 9), (4, 3)]);
        assert!(intersection(&a, &b).set_eq(&intersection(&b, &a)));
    }

    // -- subdivide ---------------------------------------------------------

    #[test]
    fn subdivide_replaces_edge_with_two_halves() {
        let g = subdivide(&square(), &[e(1, 2)], 5);
        assert_eq!(g.vertices(), &[1, 2, 3, 4, 5]);
        assert_eq!(g.edges(), &[e(1, 5), e(2, 5), e(2, 3), e(3, 4), e(1, 4)]);
    }

    #[test]
    fn subdivide_adds_new_vertex_once() {
        let g = subdivide(&square(), &[e(1, 2), e(3, 4)], 5);
        assert_eq!(g.vertices(), &[1, 2, 3, 4, 5]);
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn subdivide_onto_existing_endpoint_drops_degenerate_halves() {
        let g = subdivide(&square(), &[e(1, 2), e(3, 4)], 2);
        assert_eq!(g.vertices(), &[1, 2, 3, 4]);
        assert!(g.set_eq(&graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (2, 4), (4, 1)])));
    }

    #[test]
    fn subdivide_twice_is_noop_the_second_time() {
        let once = subdivide(&square(), &[e(1, 2), e(3, 4)], 9);
        let twice = subdivide(&once, &[e(1, 2), e(3, 4)], 9);
        assert_eq!(once, twice);
    }

    #[test]
    fn subdivide_missing_edge_leaves_graph_alone() {
        let g = square();
        assert_eq!(subdivide(&g, &[e(1, 3)], 5), g);
    }
}
