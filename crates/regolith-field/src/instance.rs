//! Per-instance random parameter draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::FieldParams;

/// The random parameters that make one asteroid instance unique.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceParams {
    /// Octave-noise persistence, drawn from `Normal(0.95, 0.04)`. Values
    /// near 1 keep the high-frequency octaves strong, giving craggier rocks.
    pub persistence: f64,
    /// Noise-domain offset along the fourth dimension, drawn uniformly from
    /// `[0, 10000)`. Each instance samples its own slice of the shared field.
    pub noise_offset: f64,
}

/// Mean of the persistence distribution.
pub const PERSISTENCE_MEAN: f64 = 0.95;
/// Standard deviation of the persistence distribution.
pub const PERSISTENCE_STD_DEV: f64 = 0.04;
/// Exclusive upper bound of the noise-offset distribution.
pub const NOISE_OFFSET_RANGE: f64 = 10_000.0;

/// Draw the per-instance parameters for a whole field.
///
/// All draws come from one `ChaCha8Rng` seeded with `params.seed`, in
/// instance order (persistence before offset within each instance), so the
/// sequence is a deterministic function of the seed and instance count
/// regardless of how generation is later threaded.
pub fn draw_instance_params(params: &FieldParams) -> Vec<InstanceParams> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let persistence = Normal::new(PERSISTENCE_MEAN, PERSISTENCE_STD_DEV)
        .expect("persistence distribution constants are valid");

    (0..params.instance_count)
        .map(|_| InstanceParams {
            persistence: persistence.sample(&mut rng),
            noise_offset: rng.random_range(0.0..NOISE_OFFSET_RANGE),
        })
        .collect()
}
