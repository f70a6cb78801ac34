//! Graph generators and invariant checkers for benchmarking `simplegraph-core`.
//!
//! Every generator is deterministic for a given [`GeneratorConfig::seed`], so
//! benchmark runs and correctness tests see the same inputs across machines.

pub mod correctness;
pub mod generator;

pub use generator::{
    GeneratorConfig, SizeTier, generate_branching, generate_cycle, generate_cycle_union,
    generate_sparse,
};
