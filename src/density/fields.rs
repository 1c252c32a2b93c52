//! Simple analytic density fields for testing and debugging.
//!
//! Deterministic fields with surfaces that are easy to verify by hand. Use
//! them to exercise the extraction pipeline without noise in the picture.

use glam::Vec3;

use super::DensityField;

/// The same density everywhere. No surface anywhere.
#[derive(Clone, Copy, Debug)]
pub struct UniformField(pub f32);

impl DensityField for UniformField {
  fn density(&self, _position: Vec3) -> f32 {
    self.0
  }
}

/// Step field split by a horizontal plane: `above` at or over `height`,
/// `below` underneath.
#[derive(Clone, Copy, Debug)]
pub struct HalfSpaceField {
  pub height: f32,
  pub above: f32,
  pub below: f32,
}

impl HalfSpaceField {
  /// Solid-below-air-above step at `height`, densities 1 and 0.
  pub fn ground(height: f32) -> Self {
    Self {
      height,
      above: 0.0,
      below: 1.0,
    }
  }
}

impl DensityField for HalfSpaceField {
  fn density(&self, position: Vec3) -> f32 {
    if position.y >= self.height {
      self.above
    } else {
      self.below
    }
  }
}

/// Sphere with positive density inside.
#[derive(Clone, Copy, Debug)]
pub struct SphereField {
  pub center: Vec3,
  pub radius: f32,
}

impl SphereField {
  pub fn new(center: Vec3, radius: f32) -> Self {
    Self { center, radius }
  }
}

impl DensityField for SphereField {
  fn density(&self, position: Vec3) -> f32 {
    self.radius - position.distance(self.center)
  }
}
