//! Seeded random connected graphs for benchmarking.
//!
//! Every graph starts from a random spanning path, so it is connected
//! regardless of density, and then gains extra edges pair by pair.

use prim_core::{Graph, MAX_EDGE_WEIGHT, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Configuration for [`generate_connected`].
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Chance, in percent, that each remaining vertex pair gains an edge.
    pub density_percent: u8,
    /// Largest generated weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed.
    pub seed: u64,
}

/// Generates a connected graph described by `config`.
///
/// The same configuration always yields the same graph.
///
/// # Errors
/// Returns [`BenchSetupError::InvalidDensity`] for densities above 100,
/// [`BenchSetupError::InvalidMaxWeight`] for an unusable weight bound and
/// [`BenchSetupError::Graph`] when `vertex_count` is zero.
///
/// # Examples
/// ```
/// use prim_benches::graphs::{RandomGraphConfig, generate_connected};
///
/// let graph = generate_connected(&RandomGraphConfig {
///     vertex_count: 16,
///     density_percent: 25,
///     max_weight: 100,
///     seed: 7,
/// })
/// .expect("configuration is valid");
/// assert!(graph.is_connected());
/// ```
pub fn generate_connected(config: &RandomGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.density_percent > 100 {
        return Err(BenchSetupError::InvalidDensity {
            density_percent: config.density_percent,
        });
    }
    if !(1..=MAX_EDGE_WEIGHT).contains(&config.max_weight) {
        return Err(BenchSetupError::InvalidMaxWeight {
            max_weight: config.max_weight,
            limit: MAX_EDGE_WEIGHT,
        });
    }

    let mut graph = Graph::new(config.vertex_count)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);
    for pair in order.windows(2) {
        if let [src, dest] = *pair {
            graph.add_edge(src, dest, rng.gen_range(1..=config.max_weight))?;
        }
    }

    let density = u32::from(config.density_percent);
    for src in 0..config.vertex_count {
        for dest in (src + 1)..config.vertex_count {
            if graph.weight(src, dest).is_none() && rng.gen_ratio(density, 100) {
                graph.add_edge(src, dest, rng.gen_range(1..=config.max_weight))?;
            }
        }
    }

    Ok(graph)
}
