//! Operations on finite, simple, undirected graphs.
//!
//! A [`Graph`] is an immutable pair of a vertex collection and an edge
//! collection. Every operation borrows its inputs and returns a new value:
//!
//! - [`ops`]: clique construction, vertex deletion, intersection and edge
//!   subdivision.
//! - [`search`]: depth-first path search with pluggable vertex admission and
//!   candidate ordering ([`find_path_by`], [`PathSearch`]).
//! - [`cycles`]: reordering the edges of a single simple cycle into traversal
//!   order ([`cycle_sort`]).
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod cycles;
pub mod graph;
pub mod ops;
pub mod search;

#[cfg(test)]
mod test_helpers;

pub use cycles::{NotACycle, cycle_sort, is_cycle};
pub use graph::{DegenerateEdge, Edge, Graph, Path, Vertex};
pub use ops::{clique, delete_vertex, delete_vertices_by, intersection, subdivide};
pub use search::{PathSearch, find_path, find_path_by};
