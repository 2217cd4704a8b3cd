//! Multi-octave 4D Perlin noise with per-evaluator persistence.
//!
//! The fourth input dimension acts as a noise-domain offset: evaluating many
//! shapes at different `w` values carves independent slices out of one
//! continuous field, which is how each asteroid instance gets its own
//! surface without its own noise lattice.

use glam::DVec4;
use noise::{NoiseFn, Perlin};

/// A 4D coherent-noise evaluator summing several octaves with amplitude
/// falloff controlled by `persistence`.
///
/// Output is normalized by the accumulated amplitude and remapped to
/// `[0, 1]`, so callers can apply affine radius transforms without worrying
/// about the octave count changing the value range.
pub struct OctaveNoise {
    perlin: Perlin,
    octaves: u32,
    persistence: f64,
}

impl OctaveNoise {
    /// Octave count used for asteroid displacement.
    pub const DEFAULT_OCTAVES: u32 = 4;

    /// Create a 4-octave evaluator.
    ///
    /// The same `(seed, persistence)` pair always yields the same field.
    ///
    /// # Panics
    ///
    /// Panics if `persistence` is not positive and finite.
    pub fn new(seed: u32, persistence: f64) -> Self {
        Self::with_octaves(seed, persistence, Self::DEFAULT_OCTAVES)
    }

    /// Create an evaluator with an explicit octave count.
    ///
    /// # Panics
    ///
    /// Panics if `persistence` is not positive and finite, or if `octaves`
    /// is zero.
    pub fn with_octaves(seed: u32, persistence: f64, octaves: u32) -> Self {
        assert!(
            persistence > 0.0 && persistence.is_finite(),
            "persistence must be positive and finite, got {persistence}"
        );
        assert!(octaves > 0, "at least one octave is required");
        Self {
            perlin: Perlin::new(seed),
            octaves,
            persistence,
        }
    }

    /// The amplitude falloff factor between successive octaves.
    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Sample the layered field at a 4D point, returning a value in `[0, 1]`.
    ///
    /// Each octave doubles the frequency of the last and scales its
    /// amplitude by `persistence`; the sum is divided by the total amplitude
    /// and shifted from the noise's native `[-1, 1]` range.
    pub fn sample(&self, p: DVec4) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut amplitude_sum = 0.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([
                p.x * frequency,
                p.y * frequency,
                p.z * frequency,
                p.w * frequency,
            ]) * amplitude;
            amplitude_sum += amplitude;

            frequency *= 2.0;
            amplitude *= self.persistence;
        }

        (total / amplitude_sum + 1.0) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        let a = OctaveNoise::new(42, 0.95);
        let b = OctaveNoise::new(42, 0.95);
        let p = DVec4::new(0.3, -1.2, 0.8, 4321.0);
        assert_eq!(a.sample(p), b.sample(p), "same seed must be bit-identical");
    }

    #[test]
    fn test_different_offsets_give_different_slices() {
        let noise = OctaveNoise::new(7, 0.95);
        let a = noise.sample(DVec4::new(0.5, 0.5, 0.5, 10.0));
        let b = noise.sample(DVec4::new(0.5, 0.5, 0.5, 6000.0));
        assert_ne!(a, b, "the w offset selects an independent field slice");
    }

    #[test]
    fn test_output_stays_in_unit_interval() {
        let noise = OctaveNoise::new(123, 0.95);
        for i in 0..500 {
            let t = i as f64 * 0.17;
            let v = noise.sample(DVec4::new(t.sin(), t.cos(), t * 0.1, t));
            assert!(
                (0.0..=1.0).contains(&v),
                "sample {v} escapes [0, 1] at step {i}"
            );
        }
    }

    #[test]
    fn test_field_is_continuous() {
        let noise = OctaveNoise::new(5, 0.9);
        let step = 1e-3;
        let mut prev = noise.sample(DVec4::new(0.0, 0.2, 0.4, 50.0));
        for i in 1..1000 {
            let v = noise.sample(DVec4::new(i as f64 * step, 0.2, 0.4, 50.0));
            assert!(
                (v - prev).abs() < 0.05,
                "discontinuity at step {i}: {prev} -> {v}"
            );
            prev = v;
        }
    }

    #[test]
    fn test_higher_persistence_keeps_more_high_frequency_detail() {
        let low = OctaveNoise::new(9, 0.2);
        let high = OctaveNoise::new(9, 0.99);
        let step = 0.05;
        let count = 2000;

        let roughness = |noise: &OctaveNoise| {
            let mut sum = 0.0;
            for i in 0..count {
                let a = noise.sample(DVec4::new(i as f64 * step, 0.0, 0.0, 0.0));
                let b = noise.sample(DVec4::new((i + 1) as f64 * step, 0.0, 0.0, 0.0));
                sum += (b - a).abs();
            }
            sum / count as f64
        };

        assert!(
            roughness(&high) > roughness(&low),
            "persistence near 1 should preserve fine detail"
        );
    }

    #[test]
    #[should_panic(expected = "persistence must be positive")]
    fn test_nonpositive_persistence_panics() {
        OctaveNoise::new(0, 0.0);
    }

    #[test]
    #[should_panic(expected = "at least one octave")]
    fn test_zero_octaves_panics() {
        OctaveNoise::with_octaves(0, 0.5, 0);
    }
}
