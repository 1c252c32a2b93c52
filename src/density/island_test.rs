use glam::{Vec2, Vec3, Vec4};

use crate::config::{IslandParameters, NoiseParameters, ShapeParameters};
use crate::fractal::FractalNoise;

use super::*;

fn noiseless_params() -> IslandParameters {
  IslandParameters {
    shape: ShapeParameters::default(),
    vertical_noise: NoiseParameters::silent(),
    base_noise: NoiseParameters::silent(),
  }
}

/// Closed-form cone density for silent noise sets.
fn bare_cone(shape: &ShapeParameters, position: Vec3) -> f32 {
  let h = (position.y / shape.cone_height).clamp(0.0, 1.0);
  shape.cone_radius * (1.0 - h).powf(shape.curvature) - Vec2::new(position.x, position.z).length()
}

/// A single-octave parameter set with zero frequency: the primitive is
/// always sampled at `offset`, making the noise a nonzero constant.
fn constant_noise() -> (NoiseParameters, f32) {
  for i in 0..32 {
    let offset = Vec4::new(0.37 + i as f32 * 1.91, 0.89, 0.12 - i as f32 * 0.73, 0.0);
    let params = NoiseParameters::default()
      .with_octaves(1)
      .with_frequency(0.0, 1.0)
      .with_amplitude(1.0, 1.0)
      .with_domain(offset, Vec4::ONE);
    let value = FractalNoise::new(params).sample(Vec3::ZERO);
    if value.abs() > 1e-3 {
      return (params, value);
    }
  }
  panic!("no probe offset produced a usable constant");
}

#[test]
fn zero_octaves_reduces_to_bare_shape() {
  let params = noiseless_params();
  let field = IslandDensity::new(&params, Orientation::Up);

  for position in [
    Vec3::ZERO,
    Vec3::new(10.0, 0.0, -7.0),
    Vec3::new(0.0, 32.0, 0.0),
    Vec3::new(20.0, 48.0, 5.0),
    Vec3::new(-3.0, 64.0, 1.0),
  ] {
    assert_eq!(field.density(position), bare_cone(&params.shape, position));
  }
}

#[test]
fn waterline_crossing_sits_at_cone_radius() {
  let params = noiseless_params();
  let field = IslandDensity::new(&params, Orientation::Up);
  let radius = params.shape.cone_radius;

  assert!(field.density(Vec3::new(radius - 1.0, 0.0, 0.0)) > 0.0);
  assert!(field.density(Vec3::new(radius + 1.0, 0.0, 0.0)) < 0.0);
  assert_eq!(field.density(Vec3::new(radius, 0.0, 0.0)), 0.0);
}

#[test]
fn above_apex_is_outside() {
  let params = noiseless_params();
  let field = IslandDensity::new(&params, Orientation::Up);

  let above = Vec3::new(5.0, params.shape.cone_height + 10.0, 0.0);
  assert!(field.density(above) < 0.0);
}

#[test]
fn down_orientation_mirrors_up() {
  let params = noiseless_params();
  let up = IslandDensity::new(&params, Orientation::Up);
  let down = IslandDensity::new(&params, Orientation::Down);

  for position in [
    Vec3::new(8.0, 20.0, -3.0),
    Vec3::new(-15.0, 50.0, 9.0),
    Vec3::new(0.0, 64.0, 0.0),
  ] {
    let mirrored = Vec3::new(position.x, -position.y, position.z);
    assert_eq!(up.density(position), down.density(mirrored));
  }
}

#[test]
fn curvature_bends_the_flank_inward() {
  let straight = IslandParameters {
    shape: ShapeParameters {
      curvature: 1.0,
      ..ShapeParameters::default()
    },
    ..noiseless_params()
  };
  let bent = IslandParameters {
    shape: ShapeParameters {
      curvature: 3.0,
      ..ShapeParameters::default()
    },
    ..noiseless_params()
  };

  // Mid-flank, higher curvature shrinks the radius, lowering density
  let mid = Vec3::new(10.0, 32.0, 0.0);
  let d_straight = IslandDensity::new(&straight, Orientation::Up).density(mid);
  let d_bent = IslandDensity::new(&bent, Orientation::Up).density(mid);
  assert!(d_bent < d_straight);
}

#[test]
fn vertical_noise_fades_toward_apex() {
  let (constant, value) = constant_noise();
  let params = IslandParameters {
    shape: ShapeParameters {
      noise_influence_curve: 2.0,
      ..ShapeParameters::default()
    },
    vertical_noise: constant,
    base_noise: NoiseParameters::silent(),
  };
  let field = IslandDensity::new(&params, Orientation::Up);
  let shape = &params.shape;

  // With constant vertical noise, density - cone = (1-h)^curve * value
  for frac in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
    let position = Vec3::new(4.0, frac * shape.cone_height, -2.0);
    let contribution = field.density(position) - bare_cone(shape, position);
    let expected = (1.0 - frac).powf(shape.noise_influence_curve) * value;
    assert!(
      (contribution - expected).abs() < 1e-4,
      "influence mismatch at h={}: {} vs {}",
      frac,
      contribution,
      expected
    );
  }
}

#[test]
fn base_noise_perturbs_outline_uniformly_over_height() {
  let (constant, value) = constant_noise();
  let params = IslandParameters {
    shape: ShapeParameters::default(),
    vertical_noise: NoiseParameters::silent(),
    base_noise: constant,
  };
  let field = IslandDensity::new(&params, Orientation::Up);
  let shape = &params.shape;

  // Constant base noise widens (or narrows) the outline by `value`,
  // tapered like the cone itself
  let position = Vec3::new(12.0, 16.0, 3.0);
  let h = position.y / shape.cone_height;
  let expected = bare_cone(shape, position) + value * (1.0 - h).powf(shape.curvature);
  assert!((field.density(position) - expected).abs() < 1e-4);
}

#[test]
fn shared_base_joins_halves_at_waterline() {
  let mut top = IslandParameters::default();
  top.vertical_noise = NoiseParameters::default().with_octaves(3);
  let mut bottom = top;
  bottom.vertical_noise = NoiseParameters::default()
    .with_octaves(5)
    .with_domain(Vec4::new(41.0, 7.0, -13.0, 0.0), Vec4::ONE);

  let island = TwoSidedIsland::new(&top, &bottom);

  // Base noise ignores height, so on the waterline the shape term (density
  // minus each half's own vertical contribution) must agree exactly.
  for (x, z) in [(10.0f32, 0.0f32), (-20.0, 14.0), (3.0, -31.0)] {
    let at = Vec3::new(x, 0.0, z);
    let top_shape =
      island.top().density(at) - FractalNoise::new(top.vertical_noise).sample(at);
    let bottom_shape =
      island.bottom().density(at) - FractalNoise::new(bottom.vertical_noise).sample(at);
    assert!((top_shape - bottom_shape).abs() < 1e-4);
  }
}

#[test]
fn symmetric_island_mirrors_across_waterline() {
  // Vertical noise is sampled in 3D and so differs across the mirror; use a
  // silent vertical set to compare the mirrored shape terms directly.
  let params = IslandParameters {
    vertical_noise: NoiseParameters::silent(),
    base_noise: NoiseParameters::default().with_octaves(3),
    ..IslandParameters::default()
  };
  let island = TwoSidedIsland::symmetric(&params);

  for position in [Vec3::new(9.0, 12.0, -4.0), Vec3::new(-2.0, 40.0, 17.0)] {
    let mirrored = Vec3::new(position.x, -position.y, position.z);
    assert_eq!(island.density(position), island.density(mirrored));
  }
}
