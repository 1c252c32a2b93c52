//! Read-only 2D slice view over a sampled grid-point buffer.
//!
//! The debug visualizer renders one XY layer of the density field as a
//! texture, coloring by threshold side and by min-max normalized value.
//! This view hands it exactly that: raw points, the buffer-wide density
//! range, and the per-texel classification.

use crate::types::{GridDims, GridPoint};

/// One XY layer of a chunk's sampled field at a fixed Z level.
pub struct FieldSlice<'a> {
  points: &'a [GridPoint],
  dims: GridDims,
  level: u32,
  min_density: f32,
  max_density: f32,
}

impl<'a> FieldSlice<'a> {
  /// View layer `level` of `points`. Returns `None` when the level is out
  /// of range or the buffer does not match `dims`.
  ///
  /// The density range is taken over the whole buffer, not just the layer,
  /// so colors stay comparable across levels.
  pub fn new(points: &'a [GridPoint], dims: GridDims, level: u32) -> Option<Self> {
    if level >= dims.z || points.len() != dims.point_count() {
      return None;
    }

    let mut min_density = f32::MAX;
    let mut max_density = f32::MIN;
    for point in points {
      min_density = min_density.min(point.density);
      max_density = max_density.max(point.density);
    }

    Some(Self {
      points,
      dims,
      level,
      min_density,
      max_density,
    })
  }

  pub fn width(&self) -> u32 {
    self.dims.x
  }

  pub fn height(&self) -> u32 {
    self.dims.y
  }

  pub fn level(&self) -> u32 {
    self.level
  }

  pub fn min_density(&self) -> f32 {
    self.min_density
  }

  pub fn max_density(&self) -> f32 {
    self.max_density
  }

  pub fn point(&self, x: u32, y: u32) -> GridPoint {
    self.points[self.dims.point_index(x, y, self.level)]
  }

  pub fn density(&self, x: u32, y: u32) -> f32 {
    self.point(x, y).density
  }

  /// Density remapped into [0, 1] across the buffer's range. A flat field
  /// maps to 0.
  pub fn normalized(&self, x: u32, y: u32) -> f32 {
    let range = self.max_density - self.min_density;
    if range <= 0.0 {
      return 0.0;
    }
    (self.density(x, y) - self.min_density) / range
  }

  /// Threshold side of the texel.
  pub fn is_inside(&self, x: u32, y: u32, threshold: f32) -> bool {
    self.density(x, y) > threshold
  }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;
