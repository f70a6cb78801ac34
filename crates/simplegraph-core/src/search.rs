//! Constrained path search: depth-first search with backtracking and
//! pluggable candidate policies.
//!
//! # Algorithm
//!
//! The search walks from `start` towards `target`, keeping the vertices
//! already on the current path in `used` (the frontier vertex `prev` is not
//! part of it). At every step:
//!
//! 1. Candidates are the neighbours of `prev` that are not in `used` and are
//!    either admitted by `admit` or equal to `target`. The target is always
//!    admitted, and `admit` is never consulted for `start`.
//! 2. The candidate that sorts first under `tie_break` wins. Equal candidates
//!    resolve to the one reached through the earlier edge.
//! 3. Reaching `target` ends the search with the path `used ++ [prev, target]`.
//! 4. With a winner, the search advances: `prev` joins `used` and the winner
//!    becomes the new frontier.
//! 5. Without one, `prev` is a dead end. It is deleted from the working graph
//!    together with its edges, and the search resumes from the last vertex of
//!    `used`. A dead end at `start` (empty `used`) means no path exists.
//!
//! # Termination
//!
//! Backtracking removes vertices from a private working copy, never from the
//! caller's graph. Every backtrack shrinks the working vertex set and every
//! advance extends a simple path, so the loop ends after at most
//! `O(|V|^2)` steps. A dead-end vertex is never revisited through another
//! route.
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::graph::{Graph, Path, Vertex};
use crate::ops::delete_vertex;


// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Finds a simple path from `start` to `target` entering only vertices
/// accepted by `admit`, preferring candidates that sort first under
/// `tie_break`.
///
/// Returns `None` when `start` and `target` are disconnected under the
/// admission constraint. A search from a vertex to itself yields the empty
/// path.
///
/// The result is deterministic for fixed inputs.
pub fn find_path_by<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    target: &V,
    admit: impl Fn(&V) -> bool,
    tie_break: impl Fn(&V, &V) -> Ordering,
) -> Option<Path<V>> {
    search(graph, start, target, &admit, &tie_break)
}

/// [`find_path_by`] with ascending candidate order.
pub fn find_path<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    target: &V,
    admit: impl Fn(&V) -> bool,
) -> Option<Path<V>> {
    search(graph, start, target, &admit, &V::cmp)
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// A reusable path-search configuration.
///
/// Bundles the admission predicate and the candidate order so that the same
/// policy can be run against many graphs or endpoint pairs.
///
/// # Defaults
///
/// - `admit`: every vertex.
/// - `tie_break`: ascending ([`Ord::cmp`]).
///
/// ```
/// use simplegraph_core::{PathSearch, clique};
///
/// let g = clique(1..=9);
/// let search = PathSearch::new().admit(|v: &i32| v % 2 == 0);
/// let path = search.run(&g, &1, &9).map(|p| p.vertices().to_vec());
/// assert_eq!(path, Some(vec![1, 2, 4, 6, 8, 9]));
/// ```
pub struct PathSearch<'a, V> {
    admit: Admit<'a, V>,
    tie_break: TieBreak<'a, V>,
}

type Admit<'a, V> = Box<dyn Fn(&V) -> bool + 'a>;
type TieBreak<'a, V> = Box<dyn Fn(&V, &V) -> Ordering + 'a>;

impl<'a, V: Vertex + 'a> Default for PathSearch<'a, V> {
    fn default() -> Self {
        Self {
            admit: Box::new(|_: &V| true),
            tie_break: Box::new(V::cmp),
        }
    }
}

impl<'a, V: Vertex + 'a> PathSearch<'a, V> {
    /// Creates a search that admits every vertex in ascending order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the admission predicate for intermediate vertices.
    #[must_use]
    pub fn admit(mut self, admit: impl Fn(&V) -> bool + 'a) -> Self {
        self.admit = Box::new(admit);
        self
    }

    /// Replaces the candidate order. The smallest candidate wins.
    #[must_use]
    pub fn tie_break(mut self, tie_break: impl Fn(&V, &V) -> Ordering + 'a) -> Self {
        self.tie_break = Box::new(tie_break);
        self
    }

    /// Prefers the largest candidate instead of the smallest.
    #[must_use]
    pub fn descending(self) -> Self {
        self.tie_break(|a: &V, b: &V| b.cmp(a))
    }

    /// Runs the search on `graph` from `start` to `target`.
    pub fn run(&self, graph: &Graph<V>, start: &V, target: &V) -> Option<Path<V>> {
        search(graph, start, target, &*self.admit, &*self.tie_break)
    }
}

impl<V> fmt::Debug for PathSearch<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathSearch").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Internal: the search loop
// ---------------------------------------------------------------------------

fn search<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    target: &V,
    admit: &dyn Fn(&V) -> bool,
    tie_break: &dyn Fn(&V, &V) -> Ordering,
) -> Option<Path<V>> {
    if start == target {
        return Some(Path::from_vertices(vec![start.clone()]));
    }

    let mut working = graph.clone();
    let mut used: Vec<V> = Vec::new();
    let mut on_path: HashSet<V> = HashSet::new();
    let mut prev = start.clone();
    let mut steps: usize = 0;
    let mut backtracks: usize = 0;

    loop {
        steps += 1;

        match best_candidate(&working, &prev, target, &on_path, admit, tie_break) {
            Some(next) if next == *target => {
                used.push(prev);
                used.push(next);
                debug!(steps, backtracks, edges = used.len() - 1, "path found");
                return Some(Path::from_vertices(used));
            }
            Some(next) => {
                trace!(depth = used.len() + 1, "advance");
                on_path.insert(prev.clone());
                used.push(prev);
                prev = next;
            }
            None => {
                let Some(back) = used.pop() else {
                    debug!(steps, backtracks, "no path");
                    return None;
                };
                trace!(depth = used.len(), "backtrack");
                backtracks += 1;
                working = delete_vertex(&working, &prev);
                on_path.remove(&back);
                prev = back;
            }
        }
    }
}

/// Picks the admissible neighbour of `prev` that sorts first under
/// `tie_break`, skipping vertices already on the path.
fn best_candidate<V: Vertex>(
    working: &Graph<V>,
    prev: &V,
    target: &V,
    on_path: &HashSet<V>,
    admit: &dyn Fn(&V) -> bool,
    tie_break: &dyn Fn(&V, &V) -> Ordering,
) -> Option<V> {
    working
        .neighbors(prev)
        .filter(|v| !on_path.contains(*v))
        .filter(|v| *v == target || admit(*v))
        .min_by(|a, b| tie_break(*a, *b))
        .cloned()
}
