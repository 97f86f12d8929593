//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator returns an [`MstFixture`]
//! with a start vertex drawn uniformly from the vertex set.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;
/// Upper bound (exclusive) for generated edge weights.
const MAX_WEIGHT: Weight = 1_000;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates only fixtures whose graphs are connected.
pub(super) fn connected_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    mst_fixture_strategy()
        .prop_filter("graph must be connected", |fixture| fixture.graph().is_connected())
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    let start = rng.gen_range(0..vertex_count);
    MstFixture {
        vertex_count,
        edges,
        distribution,
        start,
    }
}

type GeneratedGraph = (usize, Vec<(usize, usize, Weight)>);

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Adds each unordered vertex pair with a sampled probability, using a
/// caller-supplied weight generator.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    mut weight_generator: impl FnMut(&mut SmallRng) -> Weight,
) -> GeneratedGraph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for (src, dest) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            edges.push((src, dest, weight_generator(rng)));
        }
    }

    (vertex_count, edges)
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Every edge receives a distinct weight, so the MST is unique.
fn generate_unique_weights(rng: &mut SmallRng) -> GeneratedGraph {
    let mut next_weight: Weight = 0;
    generate_probabilistic_graph(rng, MAX_VERTICES, (0.2, 0.6), move |r| {
        next_weight += r.gen_range(1..=5);
        next_weight
    })
}

// ── Many identical weights ──────────────────────────────────────────────

/// Large groups of edges share the same weight, exercising the strict
/// relaxation tie-break in both variants.
fn generate_identical_weights(rng: &mut SmallRng) -> GeneratedGraph {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(0..=10)).collect();
    generate_probabilistic_graph(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
        pool[r.gen_range(0..pool.len())]
    })
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning path (guaranteeing connectivity) and adds a
/// small number of extra edges, some of which may overwrite path edges.
fn generate_sparse(rng: &mut SmallRng) -> GeneratedGraph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        if let [src, dest] = *pair {
            edges.push((src, dest, rng.gen_range(0..MAX_WEIGHT)));
        }
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let src = rng.gen_range(0..vertex_count);
        let dest = rng.gen_range(0..vertex_count);
        edges.push((src, dest, rng.gen_range(0..MAX_WEIGHT)));
    }

    (vertex_count, edges)
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a graph approaching the complete graph.
fn generate_dense(rng: &mut SmallRng) -> GeneratedGraph {
    generate_probabilistic_graph(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| {
        r.gen_range(0..MAX_WEIGHT)
    })
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates 2-5 components with random internal structure and no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> GeneratedGraph {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(1..=8)).collect();
    let vertex_count = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        for (src, dest) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push((src, dest, rng.gen_range(0..MAX_WEIGHT)));
            }
        }
        offset += size;
    }

    (vertex_count, edges)
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Manual `Arbitrary` so the tie-heavy distribution is sampled more often.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
