//! Field-level generation parameters.

/// Parameters describing an asteroid field to generate.
///
/// The reproducibility contract: the same `seed`, `instance_count`, and
/// `subdiv_level_count` always produce bit-identical buffers, regardless of
/// thread count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Number of asteroid instances to stamp out.
    pub instance_count: u32,
    /// Number of geosphere subdivision levels (the field carries
    /// `subdiv_level_count + 1` LOD variants, level 0 being the icosahedron).
    pub subdiv_level_count: u32,
    /// Seed for the instance-parameter RNG and the noise lattice.
    pub seed: u64,
    /// Scale applied to vertex positions before noise lookup. Controls the
    /// spatial frequency of the surface features.
    pub noise_scale: f64,
    /// Multiplier of the affine noise-to-radius transform.
    pub radius_scale: f64,
    /// Offset of the affine noise-to-radius transform. Keeps every radius
    /// strictly positive so displaced vertices never collapse to the origin.
    pub radius_bias: f64,
}

impl FieldParams {
    /// Create parameters with the canonical displacement constants.
    pub fn new(instance_count: u32, subdiv_level_count: u32, seed: u64) -> Self {
        Self {
            instance_count,
            subdiv_level_count,
            seed,
            noise_scale: 0.5,
            radius_scale: 0.9,
            radius_bias: 0.3,
        }
    }

    /// Assert the parameter invariants.
    ///
    /// # Panics
    ///
    /// Panics if any displacement constant is non-finite, or if the radius
    /// transform can reach zero (noise output lies in `[0, 1]`, so the
    /// minimum radius is `min(radius_bias, radius_scale + radius_bias)`).
    pub fn validate(&self) {
        assert!(
            self.noise_scale.is_finite()
                && self.radius_scale.is_finite()
                && self.radius_bias.is_finite(),
            "displacement constants must be finite: {self:?}"
        );
        let min_radius = self.radius_bias.min(self.radius_scale + self.radius_bias);
        assert!(
            min_radius > 0.0,
            "radius transform can collapse vertices to the origin: {self:?}"
        );
    }
}
