//! Topology builders: shuffled rings, disjoint ring unions, branching trees
//! with a mesh overlay, and uniform random sparse graphs.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use simplegraph_core::Graph;

use super::GeneratorConfig;

/// Builds one ring through `max(num_vertices, 3)` vertices, visiting them in
/// a random order.
pub fn build_cycle(config: &GeneratorConfig, rng: &mut StdRng) -> Graph<u32> {
    let n = label_count(config.num_vertices.max(3));
    let mut order: Vec<u32> = (0..n).collect();
    order.shuffle(rng);

    let pairs = ring(&order);
    finish(config, rng, (0..n).collect(), pairs)
}

/// Builds `num_cycles` vertex-disjoint rings. Every ring gets at least three
/// vertices; the last one absorbs the remainder.
pub fn build_cycle_union(config: &GeneratorConfig, rng: &mut StdRng) -> Graph<u32> {
    let total = config.num_vertices.max(3);
    let rings = config.num_cycles.clamp(1, total / 3);
    let per_ring = total / rings;

    let n = label_count(total);
    let mut order: Vec<u32> = (0..n).collect();
    order.shuffle(rng);

    let mut pairs = Vec::with_capacity(order.len());
    for i in 0..rings {
        let lo = i * per_ring;
        let hi = if i + 1 == rings { order.len() } else { lo + per_ring };
        pairs.extend(ring(&order[lo..hi]));
    }
    finish(config, rng, (0..n).collect(), pairs)
}

/// Builds a complete `branching_factor`-ary tree over `0..num_vertices`
/// rooted at `0`, then overlays `num_vertices * mesh_density` random edges.
pub fn build_branching(config: &GeneratorConfig, rng: &mut StdRng) -> Graph<u32> {
    let n = label_count(config.num_vertices.max(2));
    let b = label_count(config.branching_factor.max(1));

    let mut pairs: Vec<(u32, u32)> = (1..n).map(|child| ((child - 1) / b, child)).collect();
    let extra = (f64::from(n) * config.mesh_density).round() as usize;
    pairs.extend(random_pairs(rng, n, extra));
    finish(config, rng, (0..n).collect(), pairs)
}

/// Builds a graph with `num_vertices * average_degree / 2` uniformly drawn
/// edges. Self-loops and repeats are dropped, so the realised degree is
/// slightly lower.
pub fn build_sparse(config: &GeneratorConfig, rng: &mut StdRng) -> Graph<u32> {
    let n = label_count(config.num_vertices.max(1));
    let m = (f64::from(n) * config.average_degree / 2.0).round() as usize;
    let pairs = random_pairs(rng, n, m);
    finish(config, rng, (0..n).collect(), pairs)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn label_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Connects consecutive vertices of `order` and closes the loop.
fn ring(order: &[u32]) -> Vec<(u32, u32)> {
    order
        .iter()
        .zip(order.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
        .collect()
}

fn random_pairs(rng: &mut StdRng, n: u32, count: usize) -> Vec<(u32, u32)> {
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn finish(
    config: &GeneratorConfig,
    rng: &mut StdRng,
    mut vertices: Vec<u32>,
    mut pairs: Vec<(u32, u32)>,
) -> Graph<u32> {
    if config.shuffle {
        vertices.shuffle(rng);
        pairs.shuffle(rng);
    }
    Graph::from_pairs(vertices, pairs)
}
