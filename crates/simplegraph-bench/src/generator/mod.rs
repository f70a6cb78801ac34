//! Seeded graph generator.
//!
//! Produces [`Graph<u32>`] instances shaped to stress particular operations:
//! shuffled single cycles for `cycle_sort`, disjoint cycle unions for its
//! rejection path, dead-end-heavy trees for the backtracking search, and
//! random sparse graphs for the set operations.

pub mod topology;

use rand::SeedableRng;
use rand::rngs::StdRng;
use simplegraph_core::Graph;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices, labelled `0..num_vertices`.
    pub num_vertices: usize,
    /// Number of disjoint cycles in a cycle union (each gets at least three
    /// vertices).
    pub num_cycles: usize,
    /// Children per vertex in the branching tree.
    pub branching_factor: usize,
    /// Extra random edges per vertex on top of the branching tree.
    pub mesh_density: f64,
    /// Average degree of a random sparse graph.
    pub average_degree: f64,
    /// Whether edge and vertex collections are listed in random order.
    pub shuffle: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 vertices
    Small,
    /// 500 vertices
    Medium,
    /// 2000 vertices
    Large,
}

impl SizeTier {
    /// Returns a [`GeneratorConfig`] for this tier with the given seed.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_vertices: 50,
                num_cycles: 3,
                branching_factor: 3,
                mesh_density: 0.05,
                average_degree: 3.0,
                shuffle: true,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_vertices: 500,
                num_cycles: 8,
                branching_factor: 4,
                mesh_density: 0.1,
                average_degree: 4.0,
                shuffle: true,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_vertices: 2000,
                num_cycles: 20,
                branching_factor: 5,
                mesh_density: 0.1,
                average_degree: 4.0,
                shuffle: true,
            },
        }
    }
}

/// Generates a single simple cycle through every vertex.
pub fn generate_cycle(config: &GeneratorConfig) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    topology::build_cycle(config, &mut rng)
}

/// Generates `num_cycles` vertex-disjoint cycles covering every vertex.
///
/// Vertex and edge counts match, so `cycle_sort` has to search before it can
/// reject the graph.
pub fn generate_cycle_union(config: &GeneratorConfig) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    topology::build_cycle_union(config, &mut rng)
}

/// Generates a rooted tree with random cross edges. Vertex `0` is the root and
/// the highest-numbered vertex is a deep leaf, which makes ascending searches
/// from root to leaf wander into many dead ends first.
pub fn generate_branching(config: &GeneratorConfig) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    topology::build_branching(config, &mut rng)
}

/// Generates a random sparse graph with roughly `average_degree` edges per
/// vertex.
pub fn generate_sparse(config: &GeneratorConfig) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    topology::build_sparse(config, &mut rng)
}
