use glam::Vec3;

use crate::types::{GridDims, GridPoint};

use super::*;

fn sample_fresh<F: DensityField>(
  field: &F,
  dims: GridDims,
  chunk_size: Vec3,
  center: Vec3,
  offset: Vec3,
) -> Vec<GridPoint> {
  let mut points = vec![GridPoint::ZERO; dims.point_count()];
  sample_grid(field, dims, chunk_size, center, offset, &mut points);
  points
}

#[test]
fn grid_spans_chunk_bounds() {
  let dims = GridDims::new(3, 3, 3);
  let chunk_size = Vec3::splat(10.0);
  let points = sample_fresh(&UniformField(1.0), dims, chunk_size, Vec3::ZERO, Vec3::ZERO);

  // First and last grid points sit on opposite chunk corners
  assert_eq!(points[0].position, Vec3::splat(-5.0));
  assert_eq!(points[dims.point_index(2, 2, 2)].position, Vec3::splat(5.0));
  // Middle point is the chunk center
  assert_eq!(points[dims.point_index(1, 1, 1)].position, Vec3::ZERO);
}

#[test]
fn center_and_offset_shift_positions() {
  let dims = GridDims::new(2, 2, 2);
  let chunk_size = Vec3::splat(4.0);
  let center = Vec3::new(100.0, 0.0, 0.0);
  let offset = Vec3::new(0.0, 7.0, 0.0);
  let points = sample_fresh(&UniformField(0.0), dims, chunk_size, center, offset);

  assert_eq!(points[0].position, Vec3::new(98.0, 5.0, -2.0));
  assert_eq!(
    points[dims.point_index(1, 1, 1)].position,
    Vec3::new(102.0, 9.0, 2.0)
  );
}

#[test]
fn densities_match_field_at_positions() {
  let dims = GridDims::new(9, 5, 7);
  let field = SphereField::new(Vec3::ZERO, 8.0);
  let points = sample_fresh(&field, dims, Vec3::splat(20.0), Vec3::ZERO, Vec3::ZERO);

  for point in &points {
    assert_eq!(point.density, field.density(point.position));
  }
}

#[test]
fn non_group_aligned_dims_are_fully_written() {
  // 33 points per axis leaves partial dispatch groups on every axis
  let dims = GridDims::new(33, 9, 11);
  let mut points = vec![
    GridPoint {
      position: Vec3::splat(f32::NAN),
      density: f32::NAN,
    };
    dims.point_count()
  ];
  sample_grid(
    &UniformField(2.5),
    dims,
    Vec3::splat(16.0),
    Vec3::ZERO,
    Vec3::ZERO,
    &mut points,
  );

  for point in &points {
    assert!(point.position.is_finite());
    assert_eq!(point.density, 2.5);
  }
}

#[test]
fn resampling_overwrites_stale_content() {
  let dims = GridDims::new(5, 5, 5);
  let chunk_size = Vec3::splat(8.0);

  let fresh = sample_fresh(&UniformField(1.0), dims, chunk_size, Vec3::ZERO, Vec3::ZERO);

  // Pollute with a different field and chunk, then resample the original
  let mut points = sample_fresh(
    &SphereField::new(Vec3::ONE, 3.0),
    dims,
    chunk_size,
    Vec3::splat(50.0),
    Vec3::ZERO,
  );
  sample_grid(
    &UniformField(1.0),
    dims,
    chunk_size,
    Vec3::ZERO,
    Vec3::ZERO,
    &mut points,
  );

  assert_eq!(points, fresh);
}

#[test]
fn sampling_is_deterministic() {
  let field = IslandDensity::new(&crate::config::IslandParameters::default(), Orientation::Up);
  let dims = GridDims::new(17, 17, 17);

  let a = sample_fresh(&field, dims, Vec3::splat(64.0), Vec3::ZERO, Vec3::ZERO);
  let b = sample_fresh(&field, dims, Vec3::splat(64.0), Vec3::ZERO, Vec3::ZERO);

  assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "points buffer not sized for grid")]
fn wrong_buffer_size_is_rejected() {
  let mut points = vec![GridPoint::ZERO; 7];
  sample_grid(
    &UniformField(0.0),
    GridDims::new(2, 2, 2),
    Vec3::ONE,
    Vec3::ZERO,
    Vec3::ZERO,
    &mut points,
  );
}
