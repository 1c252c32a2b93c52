//! Layered fractal noise over a Perlin primitive.
//!
//! Pure field function: identical inputs always produce identical output,
//! which keeps regeneration reproducible and the sampler testable. The
//! primitive is seeded with a fixed crate constant; variation comes from the
//! domain offset in [`NoiseParameters`].

use glam::Vec3;
use noise::{NoiseFn, Perlin};

use crate::config::NoiseParameters;

/// Seed for the Perlin permutation table. Fixed so that equal parameters
/// yield bit-identical fields across runs and machines.
pub const NOISE_SEED: u32 = 1337;

/// Octave-summed noise sampler for one parameter set.
#[derive(Clone)]
pub struct FractalNoise {
  primitive: Perlin,
  params: NoiseParameters,
}

impl FractalNoise {
  pub fn new(params: NoiseParameters) -> Self {
    Self {
      primitive: Perlin::new(NOISE_SEED),
      params,
    }
  }

  pub fn params(&self) -> &NoiseParameters {
    &self.params
  }

  /// Sum `octaves` octaves at `position`.
  ///
  /// Octave `i` samples at
  /// `position * scalar.xyz * f0 * fs^i + offset.xyz`, weighted by
  /// `a0 * as^i`. Zero octaves returns exactly 0.0.
  pub fn sample(&self, position: Vec3) -> f32 {
    let domain = position * self.params.scalar.truncate();
    let offset = self.params.offset.truncate();

    let mut frequency = self.params.starting_frequency;
    let mut amplitude = self.params.starting_amplitude;
    let mut sum = 0.0f32;

    for _ in 0..self.params.octaves {
      let at = domain * frequency + offset;
      sum += self.primitive.get([at.x as f64, at.y as f64, at.z as f64]) as f32 * amplitude;
      frequency *= self.params.frequency_step;
      amplitude *= self.params.amplitude_step;
    }

    sum
  }
}

#[cfg(test)]
#[path = "fractal_test.rs"]
mod fractal_test;
