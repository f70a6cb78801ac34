//! Post-operation invariant checkers for correctness validation.

use std::collections::HashSet;
use std::fmt::Debug;

use simplegraph_core::{Edge, Graph, Path, Vertex};

/// Verifies that a graph has no repeated vertices or edges and that every
/// edge endpoint is a listed vertex.
pub fn check_graph_invariants<V: Vertex + Debug>(graph: &Graph<V>) -> Result<(), String> {
    let vertices: HashSet<&V> = graph.vertices().iter().collect();
    if vertices.len() != graph.vertex_count() {
        return Err("vertex collection contains duplicates".to_owned());
    }
    let edges: HashSet<&Edge<V>> = graph.edges().iter().collect();
    if edges.len() != graph.edge_count() {
        return Err("edge collection contains duplicates".to_owned());
    }
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        if !vertices.contains(a) || !vertices.contains(b) {
            return Err(format!("edge {edge:?} references an unknown vertex"));
        }
    }
    Ok(())
}

/// Verifies a search result:
/// - starts at `start`, ends at `target`
/// - never repeats a vertex
/// - each step is an edge of `graph`
pub fn check_simple_path<V: Vertex + Debug>(
    graph: &Graph<V>,
    path: &Path<V>,
    start: &V,
    target: &V,
) -> Result<(), String> {
    if path.start() != Some(start) {
        return Err(format!("path starts at {:?}, expected {start:?}", path.start()));
    }
    if path.target() != Some(target) {
        return Err(format!("path ends at {:?}, expected {target:?}", path.target()));
    }
    let unique: HashSet<&V> = path.vertices().iter().collect();
    if unique.len() != path.vertices().len() {
        return Err("path repeats a vertex".to_owned());
    }
    if path.edges().len() + 1 != path.vertices().len() {
        return Err(format!(
            "path has {} vertices but {} edges",
            path.vertices().len(),
            path.edges().len()
        ));
    }
    for edge in path.edges() {
        if !graph.contains_edge(edge) {
            return Err(format!("path uses edge {edge:?} not in the graph"));
        }
    }
    Ok(())
}

/// Verifies that every vertex strictly between the endpoints of `path` is
/// accepted by `admit`.
pub fn check_admitted<V: Vertex + Debug>(
    path: &Path<V>,
    admit: impl Fn(&V) -> bool,
) -> Result<(), String> {
    let vertices = path.vertices();
    let inner = vertices.len().saturating_sub(1);
    if let Some(v) = vertices.iter().take(inner).skip(1).find(|&v| !admit(v)) {
        return Err(format!("path enters rejected vertex {v:?}"));
    }
    Ok(())
}

/// Verifies a `cycle_sort` result against its input:
/// - the vertex collection is unchanged
/// - the edges are the same set, one per vertex
/// - consecutive edges (cyclically) share exactly one vertex
pub fn check_closed_walk<V: Vertex + Debug>(
    original: &Graph<V>,
    sorted: &Graph<V>,
) -> Result<(), String> {
    if sorted.vertices() != original.vertices() {
        return Err("vertex collection changed".to_owned());
    }
    if !sorted.set_eq(original) {
        return Err("edge set changed".to_owned());
    }
    let edges = sorted.edges();
    if edges.len() != sorted.vertex_count() {
        return Err(format!(
            "{} edges for {} vertices",
            edges.len(),
            sorted.vertex_count()
        ));
    }
    for (i, a) in edges.iter().enumerate() {
        let b = &edges[(i + 1) % edges.len()];
        let (p, q) = a.endpoints();
        let shared = usize::from(b.contains(p)) + usize::from(b.contains(q));
        if shared != 1 {
            return Err(format!("edges {a:?} and {b:?} share {shared} vertices"));
        }
    }
    Ok(())
}

/// Verifies that `result` is `original` with exactly the vertices matching
/// `doomed` removed, along with every edge touching them.
pub fn check_deletion<V: Vertex + Debug>(
    original: &Graph<V>,
    result: &Graph<V>,
    doomed: impl Fn(&V) -> bool,
) -> Result<(), String> {
    let expected_vertices: Vec<&V> = original
        .vertices()
        .iter()
        .filter(|&v| !doomed(v))
        .collect();
    if result.vertices().iter().collect::<Vec<_>>() != expected_vertices {
        return Err("surviving vertices differ from the undeleted ones".to_owned());
    }
    for edge in result.edges() {
        let (a, b) = edge.endpoints();
        if doomed(a) || doomed(b) {
            return Err(format!("edge {edge:?} touches a deleted vertex"));
        }
    }
    let kept = original
        .edges()
        .iter()
        .filter(|e| {
            let (a, b) = e.endpoints();
            !doomed(a) && !doomed(b)
        })
        .count();
    if kept != result.edge_count() {
        return Err(format!(
            "expected {kept} surviving edges, found {}",
            result.edge_count()
        ));
    }
    Ok(())
}

/// Verifies that `result` holds exactly the vertices and edges common to
/// `g1` and `g2`.
pub fn check_intersection<V: Vertex + Debug>(
    g1: &Graph<V>,
    g2: &Graph<V>,
    result: &Graph<V>,
) -> Result<(), String> {
    for v in g1.vertices() {
        if g2.contains_vertex(v) != result.contains_vertex(v) {
            return Err(format!("vertex {v:?} membership is wrong"));
        }
    }
    for edge in g1.edges() {
        if g2.contains_edge(edge) != result.contains_edge(edge) {
            return Err(format!("edge {edge:?} membership is wrong"));
        }
    }
    if result.vertices().iter().any(|v| !g1.contains_vertex(v)) {
        return Err("result has a vertex outside g1".to_owned());
    }
    if result.edges().iter().any(|e| !g1.contains_edge(e)) {
        return Err("result has an edge outside g1".to_owned());
    }
    Ok(())
}

/// Verifies that every listed edge present in `original` was replaced by the
/// two halves through `new_vertex`, and that no other edge disappeared.
pub fn check_subdivision<V: Vertex + Debug>(
    original: &Graph<V>,
    result: &Graph<V>,
    chosen: &[Edge<V>],
    new_vertex: &V,
) -> Result<(), String> {
    let chosen: HashSet<&Edge<V>> = chosen.iter().collect();
    for edge in original.edges() {
        if !chosen.contains(edge) {
            if !result.contains_edge(edge) {
                return Err(format!("unlisted edge {edge:?} disappeared"));
            }
            continue;
        }
        if edge.contains(new_vertex) {
            continue;
        }
        if result.contains_edge(edge) {
            return Err(format!("edge {edge:?} was not split"));
        }
        let (a, b) = edge.endpoints();
        for end in [a, b] {
            let half = Edge::new(end.clone(), new_vertex.clone())
                .ok_or_else(|| format!("degenerate half of {edge:?}"))?;
            if !result.contains_edge(&half) {
                return Err(format!("half {half:?} of {edge:?} is missing"));
            }
        }
    }
    if original.edges().iter().any(|e| chosen.contains(e)) && !result.contains_vertex(new_vertex)
    {
        return Err(format!("new vertex {new_vertex:?} was not added"));
    }
    Ok(())
}
