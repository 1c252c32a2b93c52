use glam::{IVec3, UVec3, Vec3};

use crate::config::IslandParameters;
use crate::density::{HalfSpaceField, SphereField, TwoSidedIsland, UniformField};

use super::*;

fn flat_plane_config() -> GenerationConfig {
  GenerationConfig::default()
    .with_num_points(UVec3::splat(2))
    .with_chunk_size(Vec3::splat(2.0))
    .with_threshold(0.5)
}

fn flat_plane_field() -> HalfSpaceField {
  HalfSpaceField {
    height: 0.0,
    above: 1.0,
    below: 0.0,
  }
}

fn sorted_vertices(mesh: &IslandMesh) -> Vec<[u32; 3]> {
  let mut keys: Vec<[u32; 3]> = mesh
    .vertices
    .iter()
    .map(|v| [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()])
    .collect();
  keys.sort_unstable();
  keys
}

#[test]
fn invalid_grid_is_rejected_at_construction() {
  let config = GenerationConfig::default().with_num_points(UVec3::new(2, 2, 1));
  assert!(matches!(
    ChunkManager::new(config),
    Err(ConfigError::GridTooSmall { .. })
  ));
}

#[test]
fn generate_without_field_fails() {
  let mut manager = ChunkManager::new(GenerationConfig::default()).unwrap();
  assert!(matches!(
    manager.generate(),
    Err(GenerateError::MissingField)
  ));
}

#[test]
fn configure_alone_does_not_regenerate() {
  let mut manager = ChunkManager::new(flat_plane_config()).unwrap();
  manager.configure(flat_plane_field());
  assert!(manager.chunks().iter().all(|c| c.mesh.is_empty()));
}

#[test]
fn flat_plane_pipeline_produces_one_quad() {
  let mut manager = ChunkManager::new(flat_plane_config()).unwrap();
  manager.configure(flat_plane_field());

  let stats = manager.generate().unwrap();
  assert_eq!(stats.chunk_count, 1);
  assert_eq!(stats.triangle_count, 2);

  let mesh = &manager.chunks()[0].mesh;
  assert_eq!(mesh.vertices.len(), 6);
  assert_eq!(mesh.normals.len(), mesh.vertices.len());
  assert_eq!(mesh.indices.len() % 3, 0);
  assert!(mesh.vertices.iter().all(|v| v.y == 0.0));
}

#[test]
fn fully_outside_field_produces_empty_meshes() {
  let config = GenerationConfig::default()
    .with_num_points(UVec3::splat(5))
    .with_num_chunks(UVec3::new(2, 1, 1));
  let mut manager = ChunkManager::new(config).unwrap();
  manager.configure(UniformField(-1.0));

  let stats = manager.generate().unwrap();
  assert_eq!(stats.chunk_count, 2);
  assert_eq!(stats.triangle_count, 0);
  for chunk in manager.chunks() {
    assert!(chunk.mesh.is_empty());
    assert!(chunk.mesh.normals.is_empty());
  }
}

#[test]
fn empty_chunk_grid_is_valid() {
  let config = GenerationConfig::default().with_num_chunks(UVec3::ZERO);
  let mut manager = ChunkManager::new(config).unwrap();
  manager.configure(UniformField(1.0));

  let stats = manager.generate().unwrap();
  assert_eq!(stats.chunk_count, 0);
  assert_eq!(stats.triangle_count, 0);
}

#[test]
fn regeneration_is_idempotent() {
  let config = GenerationConfig::default()
    .with_num_points(UVec3::splat(9))
    .with_chunk_size(Vec3::splat(16.0))
    .with_num_chunks(UVec3::new(2, 1, 2));
  let mut manager = ChunkManager::new(config).unwrap();
  manager.configure(SphereField::new(Vec3::new(1.0, 2.0, -3.0), 10.0));

  let first = manager.generate().unwrap();
  let meshes: Vec<Vec<[u32; 3]>> = manager.chunks().iter().map(|c| sorted_vertices(&c.mesh)).collect();

  let second = manager.generate().unwrap();
  assert_eq!(first.triangle_count, second.triangle_count);
  for (chunk, before) in manager.chunks().iter().zip(&meshes) {
    // Triangle order is unspecified across dispatches; the vertex set is not
    assert_eq!(&sorted_vertices(&chunk.mesh), before);
  }
}

#[test]
fn island_generation_end_to_end() {
  let config = GenerationConfig::default()
    .with_num_points(UVec3::splat(17))
    .with_chunk_size(Vec3::splat(48.0))
    .with_num_chunks(UVec3::new(2, 2, 2));
  let mut manager = ChunkManager::new(config).unwrap();
  manager.configure(TwoSidedIsland::symmetric(&IslandParameters::default()));

  let stats = manager.generate().unwrap();
  assert_eq!(stats.chunk_count, 8);
  assert!(stats.triangle_count > 0, "island surface should exist");

  let half = manager.config().world_bounds() * 0.5 + Vec3::splat(1e-3);
  for chunk in manager.chunks() {
    for vertex in &chunk.mesh.vertices {
      assert!(vertex.abs().cmple(half).all(), "vertex {:?} outside world", vertex);
    }
    for normal in &chunk.mesh.normals {
      assert!((normal.length() - 1.0).abs() < 1e-4);
    }
  }
}

#[test]
fn chunk_list_covers_the_grid_once() {
  let config = GenerationConfig::default().with_num_chunks(UVec3::new(3, 2, 1));
  let manager = ChunkManager::new(config).unwrap();

  let mut coords: Vec<IVec3> = manager.chunks().iter().map(|c| c.coord).collect();
  assert_eq!(coords.len(), 6);
  coords.sort_by_key(|c| (c.z, c.y, c.x));
  coords.dedup();
  assert_eq!(coords.len(), 6);
}

#[test]
fn chunk_bounds_tile_the_world() {
  let config = GenerationConfig::default()
    .with_num_chunks(UVec3::new(2, 1, 1))
    .with_chunk_size(Vec3::splat(10.0));
  let manager = ChunkManager::new(config).unwrap();

  let left = manager.chunk_bounds(IVec3::new(0, 0, 0));
  let right = manager.chunk_bounds(IVec3::new(1, 0, 0));
  assert_eq!(left.max.x, right.min.x);
  assert_eq!(left.min.x, -10.0);
  assert_eq!(right.max.x, 10.0);
}

#[test]
fn changing_points_reallocates_buffers() {
  let mut manager = ChunkManager::new(
    GenerationConfig::default().with_num_points(UVec3::splat(5)),
  )
  .unwrap();
  assert_eq!(manager.field_points().len(), 125);

  manager
    .set_config(GenerationConfig::default().with_num_points(UVec3::splat(9)))
    .unwrap();
  assert_eq!(manager.field_points().len(), 729);

  // Regeneration still works against the resized buffers
  manager.configure(UniformField(1.0));
  assert!(manager.generate().is_ok());
}

#[test]
fn changing_chunk_grid_rebuilds_chunk_list() {
  let mut manager = ChunkManager::new(GenerationConfig::default()).unwrap();
  assert_eq!(manager.chunks().len(), 1);

  manager
    .set_config(GenerationConfig::default().with_num_chunks(UVec3::new(2, 2, 1)))
    .unwrap();
  assert_eq!(manager.chunks().len(), 4);
}

#[test]
fn set_config_rejects_invalid_grid() {
  let mut manager = ChunkManager::new(GenerationConfig::default()).unwrap();
  let bad = GenerationConfig::default().with_num_points(UVec3::new(1, 5, 5));
  assert!(manager.set_config(bad).is_err());
  // Previous configuration stays in effect
  assert_eq!(manager.config().num_points, UVec3::splat(2));
}

#[test]
fn slice_readback_requires_a_field() {
  let mut manager = ChunkManager::new(GenerationConfig::default()).unwrap();
  assert!(matches!(
    manager.sample_slice(IVec3::ZERO, 0),
    Err(GenerateError::MissingField)
  ));
}

#[test]
fn slice_readback_exposes_the_sampled_layer() {
  let config = GenerationConfig::default()
    .with_num_points(UVec3::splat(5))
    .with_chunk_size(Vec3::splat(8.0));
  let mut manager = ChunkManager::new(config).unwrap();
  manager.configure(flat_plane_field());

  let slice = manager.sample_slice(IVec3::ZERO, 2).unwrap().unwrap();
  assert_eq!(slice.width(), 5);
  assert_eq!(slice.height(), 5);

  // The field is solid above the waterline: top rows classify inside
  assert!(slice.is_inside(2, 4, 0.5));
  assert!(!slice.is_inside(2, 0, 0.5));

  // Out-of-range layer is rejected, not an error
  assert!(manager.sample_slice(IVec3::ZERO, 5).unwrap().is_none());
}
