//! Island density fields: a curvature-bent cone eroded by fractal noise.
//!
//! The silhouette is a cone standing on the waterline, flank bent by the
//! curvature exponent. Two noise sets contribute:
//!
//! - `base_noise`, sampled on the waterline plane, perturbs the outline
//!   radius. Height plays no part, so a top and a bottom half sharing this
//!   set agree on the perimeter where they meet.
//! - `vertical_noise`, sampled in full 3D, erodes the flanks. Its weight
//!   passes through the influence curve of normalized height, shrinking
//!   toward the apex.
//!
//! ```text
//!            apex (h = 1)          density(p) = radius(h) - |p.xz|
//!             ▲                                 + (1-h)^influence * vertical(p)
//!            ╱ ╲
//!           ╱   ╲   radius(h) = (cone_radius + base(x,0,z)) * (1-h)^curvature
//!          ╱     ╲
//!   ──────▉▉▉▉▉▉▉▉▉──────── waterline (h = 0)
//!          ╲     ╱
//!           ╲   ╱   bottom half: same formula with y negated
//!            ╲ ╱
//!             ▼
//! ```

use glam::{Vec2, Vec3};

use crate::config::IslandParameters;
use crate::fractal::FractalNoise;

use super::DensityField;

/// Which way a one-sided island surface grows from the waterline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
  /// Surface rises along +Y (island top).
  Up,
  /// Surface hangs along -Y (island underside).
  Down,
}

/// One-sided island density.
#[derive(Clone)]
pub struct IslandDensity {
  params: IslandParameters,
  orientation: Orientation,
  vertical: FractalNoise,
  base: FractalNoise,
}

impl IslandDensity {
  pub fn new(params: &IslandParameters, orientation: Orientation) -> Self {
    Self {
      params: *params,
      orientation,
      vertical: FractalNoise::new(params.vertical_noise),
      base: FractalNoise::new(params.base_noise),
    }
  }

  pub fn params(&self) -> &IslandParameters {
    &self.params
  }

  pub fn orientation(&self) -> Orientation {
    self.orientation
  }
}

impl DensityField for IslandDensity {
  fn density(&self, position: Vec3) -> f32 {
    let shape = &self.params.shape;

    let height = match self.orientation {
      Orientation::Up => position.y,
      Orientation::Down => -position.y,
    };
    let h = (height / shape.cone_height).clamp(0.0, 1.0);

    let outline =
      shape.cone_radius + self.base.sample(Vec3::new(position.x, 0.0, position.z));
    let radius = outline * (1.0 - h).powf(shape.curvature);
    let radial = Vec2::new(position.x, position.z).length();

    let influence = (1.0 - h).powf(shape.noise_influence_curve);

    radius - radial + influence * self.vertical.sample(position)
  }
}

/// Full island: independent top and bottom halves joined at the waterline.
///
/// The halves keep separate vertical noise sets for asymmetric silhouettes;
/// callers wanting a watertight join give both halves the same cone radius
/// and base noise set.
#[derive(Clone)]
pub struct TwoSidedIsland {
  top: IslandDensity,
  bottom: IslandDensity,
}

impl TwoSidedIsland {
  pub fn new(top: &IslandParameters, bottom: &IslandParameters) -> Self {
    Self {
      top: IslandDensity::new(top, Orientation::Up),
      bottom: IslandDensity::new(bottom, Orientation::Down),
    }
  }

  /// Mirror-symmetric island: the same parameter set on both sides.
  pub fn symmetric(params: &IslandParameters) -> Self {
    Self::new(params, params)
  }

  pub fn top(&self) -> &IslandDensity {
    &self.top
  }

  pub fn bottom(&self) -> &IslandDensity {
    &self.bottom
  }
}

impl DensityField for TwoSidedIsland {
  fn density(&self, position: Vec3) -> f32 {
    if position.y >= 0.0 {
      self.top.density(position)
    } else {
      self.bottom.density(position)
    }
  }
}

#[cfg(test)]
#[path = "island_test.rs"]
mod island_test;
