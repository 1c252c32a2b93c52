//! Marching cubes isosurface extraction.
//!
//! Classifies every voxel of a sampled chunk against the iso-threshold and
//! emits the crossing surface as raw triangles.
//!
//! # Per-Voxel Pipeline
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ 1. Corner mask: bit b set when density(corner b) > iso    │
//! │    mask 0 or 255 → homogeneous voxel, return immediately  │
//! ├───────────────────────────────────────────────────────────┤
//! │ 2. Edge vertices: for each crossed edge, lerp between the │
//! │    corner positions at t = (iso - dA) / (dB - dA)         │
//! ├───────────────────────────────────────────────────────────┤
//! │ 3. Triangles: TRI_TABLE[mask] edge triples → append to    │
//! │    the shared buffer (atomic slot reservation)            │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Voxels are dispatched in the same 8×8×8 group granularity as sampling.
//! A voxel reads only its own 8 grid samples; the append counter is the
//! only shared mutable state, so triangles come out in unspecified order
//! but none are lost or duplicated.

mod append;
pub use append::AppendBuffer;

use glam::{UVec3, Vec3};
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::dispatch::DispatchGrid;
use crate::tables::{CORNER_OFFSETS, EDGE_CONNECTIONS, EDGE_TABLE, TRI_TABLE};
use crate::types::{GridDims, GridPoint, Triangle};

/// Corner classification: bit `b` is set when corner `b` is inside.
#[inline]
pub fn corner_mask(densities: &[f32; 8], threshold: f32) -> u8 {
  let mut mask = 0u8;
  for (corner, &density) in densities.iter().enumerate() {
    if density > threshold {
      mask |= 1 << corner;
    }
  }
  mask
}

/// Crossing point on the edge between two corner samples.
///
/// Equal densities leave `t` undefined; the first corner stands in for the
/// crossing in that case.
#[inline]
fn interpolate_edge(
  position_a: Vec3,
  position_b: Vec3,
  density_a: f32,
  density_b: f32,
  threshold: f32,
) -> Vec3 {
  if density_a == density_b {
    return position_a;
  }
  let t = ((threshold - density_a) / (density_b - density_a)).clamp(0.0, 1.0);
  position_a + (position_b - position_a) * t
}

/// Extract the isosurface of one sampled chunk into `triangles`.
///
/// `points` is the sampler output for `dims`; any previous buffer content
/// is discarded first. Chunks with a homogeneous field produce an empty
/// buffer, not an error.
pub fn march_chunk(
  points: &[GridPoint],
  dims: GridDims,
  field_threshold: f32,
  triangles: &mut AppendBuffer<Triangle>,
) {
  assert_eq!(
    points.len(),
    dims.point_count(),
    "points buffer not sized for grid"
  );

  triangles.reset();
  if dims.voxel_count() == 0 {
    return;
  }

  let voxel_extent = UVec3::new(dims.x - 1, dims.y - 1, dims.z - 1);
  let dispatch = DispatchGrid::new(voxel_extent);
  let output = &*triangles;

  (0..dispatch.group_count()).into_par_iter().for_each(|group| {
    dispatch.for_each_lane(group, |voxel| {
      march_voxel(points, dims, voxel, field_threshold, output);
    });
  });
}

/// Classify one voxel and append its triangles.
#[inline]
fn march_voxel(
  points: &[GridPoint],
  dims: GridDims,
  voxel: UVec3,
  threshold: f32,
  output: &AppendBuffer<Triangle>,
) {
  let mut corner_positions = [Vec3::ZERO; 8];
  let mut corner_densities = [0.0f32; 8];
  for (corner, offset) in CORNER_OFFSETS.iter().enumerate() {
    let point = points[dims.point_index(
      voxel.x + offset[0],
      voxel.y + offset[1],
      voxel.z + offset[2],
    )];
    corner_positions[corner] = point.position;
    corner_densities[corner] = point.density;
  }

  let mask = corner_mask(&corner_densities, threshold);
  if mask == 0 || mask == 255 {
    return;
  }

  let crossed = EDGE_TABLE[mask as usize];
  let mut edge_vertices = [Vec3::ZERO; 12];
  for (edge, [c0, c1]) in EDGE_CONNECTIONS.iter().enumerate() {
    if crossed & (1 << edge) != 0 {
      edge_vertices[edge] = interpolate_edge(
        corner_positions[*c0],
        corner_positions[*c1],
        corner_densities[*c0],
        corner_densities[*c1],
        threshold,
      );
    }
  }

  let row = &TRI_TABLE[mask as usize];
  let mut emitted: SmallVec<[Triangle; 5]> = SmallVec::new();
  let mut at = 0;
  while row[at] >= 0 {
    emitted.push(Triangle::new(
      edge_vertices[row[at] as usize],
      edge_vertices[row[at + 1] as usize],
      edge_vertices[row[at + 2] as usize],
    ));
    at += 3;
  }

  if emitted.is_empty() {
    return;
  }

  let base = output.reserve(emitted.len());
  for (offset, triangle) in emitted.iter().enumerate() {
    // SAFETY: slots [base, base + emitted.len()) were reserved above and
    // belong to this voxel alone.
    unsafe { output.write(base + offset, *triangle) };
  }
}
