//! Chunk orchestration: grid of chunks, buffer ownership, regeneration.
//!
//! The manager owns every sized buffer in the pipeline and walks chunks
//! sequentially; within a chunk the sampler and extractor dispatch their
//! own fine-grained parallelism. Stage boundaries are plain function calls,
//! so the extractor never sees a half-sampled grid and readback never sees
//! a half-extracted buffer.
//!
//! ```text
//! for chunk in chunks:
//!   center = -world_bounds/2 + coord * chunk_size + chunk_size/2
//!   sample_grid(field, ..., &mut points)          barrier
//!   march_chunk(&points, ..., &mut triangles)     barrier
//!   assemble_into(&mut chunk.mesh, triangles)     readback
//! ```
//!
//! Buffers are reused across regenerations and reallocated only when the
//! grid dimensions change; release happens through ordinary ownership when
//! the manager (or a replaced buffer) is dropped.

use glam::IVec3;
use tracing::{debug, trace};
use web_time::Instant;

use crate::config::GenerationConfig;
use crate::constants::MAX_TRIANGLES_PER_VOXEL;
use crate::density::{sample_grid, DensityField, FieldSlice};
use crate::error::{ConfigError, GenerateError};
use crate::extract::{march_chunk, AppendBuffer};
use crate::mesh::assemble_into;
use crate::types::{Aabb, GridPoint, IslandMesh, Triangle};

/// One cell of the chunk grid with its owned mesh.
///
/// Created once at startup for every coordinate; the mesh is rebuilt in
/// place on each regeneration and lives until the manager is torn down.
#[derive(Debug)]
pub struct Chunk {
  pub coord: IVec3,
  pub mesh: IslandMesh,
}

impl Chunk {
  fn new(coord: IVec3) -> Self {
    Self {
      coord,
      mesh: IslandMesh::new(),
    }
  }
}

/// Result summary of one full regeneration pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenerationStats {
  /// Chunks processed.
  pub chunk_count: usize,
  /// Triangles across all chunk meshes.
  pub triangle_count: usize,
  /// Wall time for the whole pass in microseconds.
  pub total_us: u64,
}

/// Owner of the chunk grid and all pipeline buffers.
pub struct ChunkManager {
  config: GenerationConfig,
  field: Option<Box<dyn DensityField>>,
  chunks: Vec<Chunk>,
  points: Vec<GridPoint>,
  triangles: AppendBuffer<Triangle>,
}

impl ChunkManager {
  /// Build the chunk grid and size the shared buffers for `config`.
  pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let dims = config.dims();
    Ok(Self {
      chunks: init_chunks(&config),
      points: vec![GridPoint::ZERO; dims.point_count()],
      triangles: AppendBuffer::with_capacity(dims.voxel_count() * MAX_TRIANGLES_PER_VOXEL),
      field: None,
      config,
    })
  }

  /// Install or replace the density field.
  ///
  /// Nothing regenerates implicitly; call [`generate`](Self::generate)
  /// afterwards.
  pub fn configure(&mut self, field: impl DensityField + 'static) {
    self.field = Some(Box::new(field));
  }

  /// Replace the grid geometry.
  ///
  /// Sized buffers are released and recreated only when the point grid
  /// actually changed; the chunk list is rebuilt when the chunk grid
  /// changed. Existing meshes stay valid until the next regeneration.
  pub fn set_config(&mut self, config: GenerationConfig) -> Result<(), ConfigError> {
    config.validate()?;

    let dims_changed = config.dims() != self.config.dims();
    let chunks_changed = config.num_chunks != self.config.num_chunks;
    self.config = config;

    if dims_changed {
      let dims = self.config.dims();
      // Release the old storage before sizing the new.
      self.points.clear();
      self.points.shrink_to_fit();
      self.points.resize(dims.point_count(), GridPoint::ZERO);
      self.triangles = AppendBuffer::with_capacity(dims.voxel_count() * MAX_TRIANGLES_PER_VOXEL);
      debug!(points = dims.point_count(), voxels = dims.voxel_count(), "buffers reallocated");
    }
    if chunks_changed {
      self.chunks = init_chunks(&self.config);
    }
    Ok(())
  }

  pub fn config(&self) -> &GenerationConfig {
    &self.config
  }

  pub fn chunks(&self) -> &[Chunk] {
    &self.chunks
  }

  /// World bounds of the chunk at `coord`, for debug bounds drawing.
  pub fn chunk_bounds(&self, coord: IVec3) -> Aabb {
    Aabb::from_center_size(self.config.center_from_coord(coord), self.config.chunk_size)
  }

  /// Run the full pipeline for every chunk.
  ///
  /// Idempotent and safe to call repeatedly: with unchanged configuration
  /// and field, every chunk mesh is rebuilt to the same content. Fails only
  /// when no density field has been configured.
  pub fn generate(&mut self) -> Result<GenerationStats, GenerateError> {
    let field = self.field.as_deref().ok_or(GenerateError::MissingField)?;
    let start = Instant::now();
    let dims = self.config.dims();
    let mut triangle_count = 0usize;

    for chunk in &mut self.chunks {
      let center = self.config.center_from_coord(chunk.coord);

      sample_grid(
        field,
        dims,
        self.config.chunk_size,
        center,
        self.config.offset,
        &mut self.points,
      );
      march_chunk(
        &self.points,
        dims,
        self.config.field_threshold,
        &mut self.triangles,
      );
      assemble_into(&mut chunk.mesh, self.triangles.as_slice());

      triangle_count += chunk.mesh.triangle_count();
      trace!(
        coord = ?chunk.coord,
        triangles = chunk.mesh.triangle_count(),
        "chunk meshed"
      );
    }

    let stats = GenerationStats {
      chunk_count: self.chunks.len(),
      triangle_count,
      total_us: start.elapsed().as_micros() as u64,
    };
    debug!(
      chunks = stats.chunk_count,
      triangles = stats.triangle_count,
      total_us = stats.total_us,
      "island regenerated"
    );
    Ok(stats)
  }

  /// Raw grid-point buffer of the most recent sampling dispatch.
  pub fn field_points(&self) -> &[GridPoint] {
    &self.points
  }

  /// Resample the chunk at `coord` and expose layer `level` of its field.
  ///
  /// This reruns only the density stage, leaving meshes untouched; the
  /// excluded visualization layer renders the returned slice.
  pub fn sample_slice(
    &mut self,
    coord: IVec3,
    level: u32,
  ) -> Result<Option<FieldSlice<'_>>, GenerateError> {
    let field = self.field.as_deref().ok_or(GenerateError::MissingField)?;
    let dims = self.config.dims();
    let center = self.config.center_from_coord(coord);

    sample_grid(
      field,
      dims,
      self.config.chunk_size,
      center,
      self.config.offset,
      &mut self.points,
    );
    Ok(FieldSlice::new(&self.points, dims, level))
  }
}

fn init_chunks(config: &GenerationConfig) -> Vec<Chunk> {
  let n = config.num_chunks;
  let mut chunks = Vec::with_capacity((n.x * n.y * n.z) as usize);
  for x in 0..n.x as i32 {
    for y in 0..n.y as i32 {
      for z in 0..n.z as i32 {
        chunks.push(Chunk::new(IVec3::new(x, y, z)));
      }
    }
  }
  chunks
}

#[cfg(test)]
#[path = "chunks_test.rs"]
mod chunks_test;
