//! Conversions between [`Graph`] and `petgraph`'s [`UnGraph`].
//!
//! Useful for callers that need algorithms this crate does not provide
//! such as connected components or isomorphism. Node order follows the
//! vertex collection, so `NodeIndex::new(i)` is `graph.vertices()[i]`.
use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::{Edge, Graph, Vertex};

impl<V: Vertex> Graph<V> {
    /// Builds a petgraph [`UnGraph`] with one node per vertex and one edge per
    /// edge.
    ///
    /// Edges with an endpoint outside the vertex collection are skipped.
    pub fn to_petgraph(&self) -> UnGraph<V, ()> {
        let mut g = UnGraph::<V, ()>::with_capacity(self.vertex_count(), self.edge_count());
        let mut index: HashMap<&V, NodeIndex> = HashMap::with_capacity(self.vertex_count());

        for v in self.vertices() {
            index.insert(v, g.add_node(v.clone()));
        }

        for edge in self.edges() {
            let (a, b) = edge.endpoints();
            if let (Some(&ia), Some(&ib)) = (index.get(a), index.get(b)) {
                g.add_edge(ia, ib, ());
            }
        }

        g
    }
}

impl<V: Vertex, E> From<&UnGraph<V, E>> for Graph<V> {
    /// Collects node weights as vertices and edge endpoints as edges.
    ///
    /// Self-loops are dropped and parallel edges collapse into one.
    fn from(g: &UnGraph<V, E>) -> Self {
        let vertices = g.node_weights().cloned();
        let edges = g
            .edge_references()
            .filter_map(|e| Edge::new(g[e.source()].clone(), g[e.target()].clone()));
        Graph::new(vertices, edges)
    }
}
