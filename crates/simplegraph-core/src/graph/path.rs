//! Simple paths returned by the path search.

use super::{Edge, Vertex};

/// A simple path: a walk from a start vertex to a target vertex in which no
/// vertex repeats.
///
/// [`Path::vertices`] gives the vertex sequence and [`Path::edges`] the
/// equivalent edge sequence, where consecutive edges share exactly one
/// endpoint. A path from a vertex to itself has one vertex and no edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> Path<V> {
    /// Chains `vertices` into consecutive pairs.
    ///
    /// Callers pass a non-empty sequence without repeats, so every pair forms
    /// a valid edge.
    pub(crate) fn from_vertices(vertices: Vec<V>) -> Self {
        let edges = vertices
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Edge::new(a.clone(), b.clone()),
                _ => None,
            })
            .collect();
        Self { vertices, edges }
    }
}

impl<V> Path<V> {
    /// The first vertex.
    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// The last vertex.
    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Visited vertices in walk order, start and target included.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Edges in walk order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the zero-edge path from a vertex to itself.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consumes the path and returns its edges in walk order.
    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }
}
