//! Generation parameters.
//!
//! These structs are the read-only payload handed in by the configuration
//! layer. The core never mutates them; the caller re-runs
//! [`crate::ChunkManager::generate`] after changing anything here.

use glam::{IVec3, UVec3, Vec3, Vec4};

use crate::error::ConfigError;
use crate::types::GridDims;

/// Layered fractal noise coefficients.
///
/// Octave `i` samples the noise primitive at
/// `position * scalar.xyz * starting_frequency * frequency_step^i + offset.xyz`
/// weighted by `starting_amplitude * amplitude_step^i`.
///
/// `offset` and `scalar` are four-component records; the `w` lane is layout
/// padding carried over from the GPU-facing parameter block and is ignored
/// by sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParameters {
  pub octaves: u32,
  pub starting_frequency: f32,
  pub frequency_step: f32,
  pub starting_amplitude: f32,
  pub amplitude_step: f32,
  pub offset: Vec4,
  pub scalar: Vec4,
}

impl Default for NoiseParameters {
  fn default() -> Self {
    Self {
      octaves: 4,
      starting_frequency: 0.02,
      frequency_step: 2.0,
      starting_amplitude: 6.0,
      amplitude_step: 0.5,
      offset: Vec4::ZERO,
      scalar: Vec4::ONE,
    }
  }
}

impl NoiseParameters {
  /// No octaves: the field function contributes exactly zero.
  pub fn silent() -> Self {
    Self {
      octaves: 0,
      ..Self::default()
    }
  }

  pub fn with_octaves(mut self, octaves: u32) -> Self {
    self.octaves = octaves;
    self
  }

  pub fn with_frequency(mut self, starting: f32, step: f32) -> Self {
    self.starting_frequency = starting;
    self.frequency_step = step;
    self
  }

  pub fn with_amplitude(mut self, starting: f32, step: f32) -> Self {
    self.starting_amplitude = starting;
    self.amplitude_step = step;
    self
  }

  pub fn with_domain(mut self, offset: Vec4, scalar: Vec4) -> Self {
    self.offset = offset;
    self.scalar = scalar;
    self
  }
}

/// Curvature-bent cone describing the island silhouette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParameters {
  /// Exponent bending the cone flank: 1 is a straight cone, higher values
  /// pull the flank inward toward the apex.
  pub curvature: f32,

  /// Cone radius at the waterline.
  pub cone_radius: f32,

  /// Apex height above the waterline.
  pub cone_height: f32,

  /// Exponent of the noise-influence curve over normalized height; noise
  /// fades toward the apex so cliffs erode at the base, not the peak.
  pub noise_influence_curve: f32,
}

impl Default for ShapeParameters {
  fn default() -> Self {
    Self {
      curvature: 1.0,
      cone_radius: 32.0,
      cone_height: 64.0,
      noise_influence_curve: 1.0,
    }
  }
}

/// Full parameter set for one island surface (top or bottom).
///
/// `base_noise` perturbs the waterline outline; `vertical_noise` shapes the
/// flanks. A two-sided island shares `base_noise` (and the cone radius)
/// between its halves so they meet at the waterline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IslandParameters {
  pub shape: ShapeParameters,
  pub vertical_noise: NoiseParameters,
  pub base_noise: NoiseParameters,
}

/// Grid and chunk geometry for the whole generation domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
  /// Chunks per axis. Zero on any axis is a valid, empty domain.
  pub num_chunks: UVec3,

  /// World-space size of one chunk.
  pub chunk_size: Vec3,

  /// Sample points per axis inside one chunk, each at least 2.
  /// Buffer sizes are fixed per value of this field; changing it forces a
  /// full buffer reallocation in the chunk manager.
  pub num_points: UVec3,

  /// World-space offset applied to every sample position.
  pub offset: Vec3,

  /// Density value separating inside from outside.
  pub field_threshold: f32,
}

impl Default for GenerationConfig {
  fn default() -> Self {
    Self {
      num_chunks: UVec3::ONE,
      chunk_size: Vec3::splat(64.0),
      num_points: UVec3::splat(2),
      offset: Vec3::ZERO,
      field_threshold: 0.0,
    }
  }
}

impl GenerationConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.num_points.min_element() < 2 {
      return Err(ConfigError::GridTooSmall {
        x: self.num_points.x,
        y: self.num_points.y,
        z: self.num_points.z,
      });
    }
    Ok(())
  }

  pub fn dims(&self) -> GridDims {
    GridDims::new(self.num_points.x, self.num_points.y, self.num_points.z)
  }

  /// Distance between adjacent sample points.
  pub fn point_spacing(&self) -> Vec3 {
    self.dims().spacing(self.chunk_size)
  }

  /// Extent of the full chunk grid in world units.
  pub fn world_bounds(&self) -> Vec3 {
    self.num_chunks.as_vec3() * self.chunk_size
  }

  /// World-space center of the chunk at `coord`.
  pub fn center_from_coord(&self, coord: IVec3) -> Vec3 {
    -self.world_bounds() * 0.5 + coord.as_vec3() * self.chunk_size + self.chunk_size * 0.5
  }

  pub fn with_num_chunks(mut self, num_chunks: UVec3) -> Self {
    self.num_chunks = num_chunks;
    self
  }

  pub fn with_chunk_size(mut self, chunk_size: Vec3) -> Self {
    self.chunk_size = chunk_size;
    self
  }

  pub fn with_num_points(mut self, num_points: UVec3) -> Self {
    self.num_points = num_points;
    self
  }

  pub fn with_offset(mut self, offset: Vec3) -> Self {
    self.offset = offset;
    self
  }

  pub fn with_threshold(mut self, field_threshold: f32) -> Self {
    self.field_threshold = field_threshold;
    self
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
