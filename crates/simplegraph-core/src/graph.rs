//! The graph data model: canonical undirected edges, vertex/edge collections
//! and simple paths.
//!
//! # Canonical Edges
//!
//! An [`Edge`] stores its two endpoints in ascending order, so `{a, b}` and
//! `{b, a}` are the same value and hash identically. Construction rejects
//! a pair whose endpoints are equal; a degenerate edge cannot exist.
//!
//! # Collections
//!
//! A [`Graph`] keeps both collections in insertion order with duplicates
//! removed (first occurrence wins). The order is reproducible but carries no
//! meaning except where an operation says so; [`crate::cycle_sort`] returns
//! its edges in traversal order, for example. Use [`Graph::set_eq`] to compare
//! two graphs as sets.
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

mod interop;
mod path;

pub use path::Path;


/// Capabilities every vertex value must provide.
///
/// `Ord` gives edges their canonical form and the search its default
/// ascending candidate order; `Hash` backs set membership.
pub trait Vertex: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Vertex for T {}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// Error produced when both endpoints of an edge are the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateEdge;

impl fmt::Display for DegenerateEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge endpoints must be distinct vertices")
    }
}

impl std::error::Error for DegenerateEdge {}

/// An unordered pair of two distinct vertices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    low: V,
    high: V,
}

impl<V: Ord> Edge<V> {
    /// Creates the edge `{a, b}`.
    ///
    /// Returns `None` when `a == b`.
    pub fn new(a: V, b: V) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl<V: Ord> TryFrom<(V, V)> for Edge<V> {
    type Error = DegenerateEdge;

    fn try_from((a, b): (V, V)) -> Result<Self, Self::Error> {
        Self::new(a, b).ok_or(DegenerateEdge)
    }
}

impl<V> Edge<V> {
    /// The smaller endpoint.
    pub fn low(&self) -> &V {
        &self.low
    }

    /// The larger endpoint.
    pub fn high(&self) -> &V {
        &self.high
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.low, &self.high)
    }

    /// Consumes the edge and returns its endpoints, smaller first.
    pub fn into_endpoints(self) -> (V, V) {
        (self.low, self.high)
    }
}

impl<V: Eq> Edge<V> {
    /// Returns `true` if `v` is one of the two endpoints.
    pub fn contains(&self, v: &V) -> bool {
        self.low == *v || self.high == *v
    }

    /// Returns the endpoint opposite `v`, or `None` if the edge does not
    /// touch `v`.
    pub fn other(&self, v: &V) -> Option<&V> {
        if self.low == *v {
            Some(&self.high)
        } else if self.high == *v {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl<V: Serialize> Serialize for Edge<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.low, &self.high).serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de> + Ord> Deserialize<'de> for Edge<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pair = <(V, V)>::deserialize(deserializer)?;
        Self::try_from(pair).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A finite simple undirected graph.
///
/// Every edge endpoint is expected to be a member of the vertex collection.
/// Operations in this crate do not reject graphs that break this expectation;
/// they treat edges purely by their endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<V: Vertex> Graph<V> {
    /// Builds a graph, dropping repeated vertices and edges.
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Self {
        Self {
            vertices: dedup(vertices),
            edges: dedup(edges),
        }
    }

    /// Builds a graph from raw endpoint pairs. Pairs with equal endpoints are
    /// skipped.
    pub fn from_pairs(
        vertices: impl IntoIterator<Item = V>,
        pairs: impl IntoIterator<Item = (V, V)>,
    ) -> Self {
        Self::new(
            vertices,
            pairs.into_iter().filter_map(|(a, b)| Edge::new(a, b)),
        )
    }

    /// Wraps collections the caller already knows to be duplicate-free.
    pub(crate) fn from_unique(vertices: Vec<V>, edges: Vec<Edge<V>>) -> Self {
        debug_assert_eq!(dedup(vertices.iter().cloned()).len(), vertices.len());
        debug_assert_eq!(dedup(edges.iter().cloned()).len(), edges.len());
        Self { vertices, edges }
    }

    /// Returns `true` if `v` is in the vertex collection.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// Returns `true` if `edge` is in the edge collection.
    pub fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.edges.contains(edge)
    }

    /// Iterates over the edges touching `v`, in edge-collection order.
    pub fn incident_edges<'a>(&'a self, v: &'a V) -> impl Iterator<Item = &'a Edge<V>> + 'a {
        self.edges.iter().filter(move |e| e.contains(v))
    }

    /// Iterates over the vertices adjacent to `v`, in edge-collection order.
    pub fn neighbors<'a>(&'a self, v: &'a V) -> impl Iterator<Item = &'a V> + 'a {
        self.edges.iter().filter_map(move |e| e.other(v))
    }

    /// Number of edges touching `v`.
    pub fn degree(&self, v: &V) -> usize {
        self.incident_edges(v).count()
    }

    /// Compares both collections as sets, ignoring order.
    pub fn set_eq(&self, other: &Self) -> bool {
        let mine: HashSet<&V> = self.vertices.iter().collect();
        let theirs: HashSet<&V> = other.vertices.iter().collect();
        if mine != theirs {
            return false;
        }
        let mine: HashSet<&Edge<V>> = self.edges.iter().collect();
        let theirs: HashSet<&Edge<V>> = other.edges.iter().collect();
        mine == theirs
    }
}

impl<V> Graph<V> {
    /// The vertex collection, in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// The edge collection, in insertion order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Consumes the graph and returns its vertex and edge collections.
    pub fn into_parts(self) -> (Vec<V>, Vec<Edge<V>>) {
        (self.vertices, self.edges)
    }
}

/// Wire shape of a graph; deserialization funnels through [`Graph::new`] so
/// repeated entries in untrusted input are dropped.
#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de> + Ord"))]
struct RawGraph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<'de, V: Vertex + Deserialize<'de>> Deserialize<'de> for Graph<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGraph::<V>::deserialize(deserializer)?;
        Ok(Self::new(raw.vertices, raw.edges))
    }
}

/// Removes repeated items, keeping the first occurrence of each.
fn dedup<T: Clone + Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen: HashSet<T> = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
