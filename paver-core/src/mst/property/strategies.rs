//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Every generator is driven by a seeded
//! [`SmallRng`] so failing cases replay exactly.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;
/// Largest graph the exhaustive oracle can afford.
pub(super) const EXHAUSTIVE_MAX_VERTICES: usize = 6;

/// Generates MST fixtures covering all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates small fixtures (at most [`EXHAUSTIVE_MAX_VERTICES`] vertices)
/// suitable for exhaustive minimality checks.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_small_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let vertex_count = match distribution {
        WeightDistribution::Dense => rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES),
        _ => rng.gen_range(MIN_VERTICES..=MAX_VERTICES),
    };
    build(distribution, vertex_count, rng)
}

/// Generates a fixture capped at [`EXHAUSTIVE_MAX_VERTICES`] vertices.
pub(super) fn generate_small_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> MstFixture {
    let vertex_count = rng.gen_range(1..=EXHAUSTIVE_MAX_VERTICES);
    build(distribution, vertex_count, rng)
}

fn build(distribution: WeightDistribution, vertex_count: usize, rng: &mut SmallRng) -> MstFixture {
    let mut builder = EdgeBuilder::default();
    match distribution {
        WeightDistribution::Spread => {
            builder.probabilistic(vertex_count, (0.2, 0.6), rng, |r| r.gen_range(0..10_000));
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            builder.probabilistic(vertex_count, (0.3, 0.7), rng, move |r| {
                pool[r.gen_range(0..pool.len())]
            });
        }
        WeightDistribution::Sparse => builder.sparse(vertex_count, rng),
        WeightDistribution::Dense => {
            builder.probabilistic(vertex_count, (0.7, 0.95), rng, |r| r.gen_range(1..=100));
        }
        WeightDistribution::Disconnected => builder.disconnected(vertex_count, rng),
        WeightDistribution::Multigraph => builder.multigraph(vertex_count, rng),
    }
    MstFixture {
        vertex_count,
        edges: builder.edges,
        distribution,
    }
}

/// Accumulates edges for a fixture.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<Edge>,
}

impl EdgeBuilder {
    fn push(&mut self, source: usize, destination: usize, weight: u64) {
        self.edges.push(Edge::new(source, destination, weight));
    }

    /// Adds each unordered pair with a probability sampled from `range`,
    /// orienting the stored edge at random.
    fn probabilistic(
        &mut self,
        vertex_count: usize,
        range: (f64, f64),
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> u64,
    ) {
        let probability: f64 = rng.gen_range(range.0..=range.1);
        for i in 0..vertex_count {
            for j in (i + 1)..vertex_count {
                if rng.gen_bool(probability) {
                    let w = weight(rng);
                    if rng.gen_bool(0.5) {
                        self.push(i, j, w);
                    } else {
                        self.push(j, i, w);
                    }
                }
            }
        }
    }

    /// Builds a random spanning path over a shuffled permutation, then adds
    /// roughly `n / 2` extra edges.
    fn sparse(&mut self, vertex_count: usize, rng: &mut SmallRng) {
        let mut order: Vec<usize> = (0..vertex_count).collect();
        shuffle(&mut order, rng);
        for pair in order.windows(2) {
            let w = rng.gen_range(1..=100);
            self.push(pair[0], pair[1], w);
        }
        for _ in 0..vertex_count / 2 {
            let i = rng.gen_range(0..vertex_count);
            let j = rng.gen_range(0..vertex_count);
            if i != j {
                let w = rng.gen_range(1..=100);
                self.push(i, j, w);
            }
        }
    }

    /// Splits the vertices into consecutive blocks with edges only inside
    /// each block.
    fn disconnected(&mut self, vertex_count: usize, rng: &mut SmallRng) {
        let mut start = 0;
        while start < vertex_count {
            let size = rng.gen_range(1..=4).min(vertex_count - start);
            for i in start..start + size {
                for j in (i + 1)..start + size {
                    if rng.gen_bool(0.7) {
                        let w = rng.gen_range(1..=20);
                        self.push(i, j, w);
                    }
                }
            }
            start += size;
        }
    }

    /// Produces a small multigraph with duplicate pairs and self-loops.
    fn multigraph(&mut self, vertex_count: usize, rng: &mut SmallRng) {
        let edge_count = rng.gen_range(0..=vertex_count * 2);
        for _ in 0..edge_count {
            let i = rng.gen_range(0..vertex_count);
            let j = rng.gen_range(0..vertex_count);
            let w = rng.gen_range(0..=5);
            self.push(i, j, w);
        }
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
