//! island_mesher - Framework/engine independent island terrain meshing
//!
//! This crate generates a floating-island terrain surface by sampling a
//! scalar density field over a voxel grid and extracting the iso-threshold
//! crossing as a triangle mesh, chunk by chunk.
//!
//! # Pipeline
//!
//! ```text
//! ┌───────────────┐     ┌─────────────────┐     ┌───────────────┐     ┌──────────┐
//! │ Chunk Manager ├────►│ Density Sampler ├────►│ Marching Cubes├────►│ Assembler│
//! └───────────────┘     └─────────────────┘     └───────────────┘     └──────────┘
//!   per-chunk loop        GridPoint buffer        Triangle buffer       IslandMesh
//!                         (pos + density)         (atomic append)       (v/i/n)
//! ```
//!
//! Both parallel stages dispatch in fixed 8×8×8 thread groups; the only
//! shared mutable state inside a dispatch is the triangle append counter.
//!
//! # Example
//!
//! ```ignore
//! use island_mesher::{ChunkManager, GenerationConfig, IslandParameters, TwoSidedIsland};
//! use glam::UVec3;
//!
//! let config = GenerationConfig::default().with_num_points(UVec3::splat(33));
//! let mut manager = ChunkManager::new(config)?;
//! manager.configure(TwoSidedIsland::symmetric(&IslandParameters::default()));
//!
//! let stats = manager.generate()?;
//! println!("{} triangles across {} chunks", stats.triangle_count, stats.chunk_count);
//! ```

pub mod constants;
pub mod tables;
pub mod types;

// Re-export commonly used items
pub use constants::{MAX_TRIANGLES_PER_VOXEL, THREAD_GROUP_SIZE};
pub use tables::{CORNER_OFFSETS, EDGE_CONNECTIONS, EDGE_TABLE, TRI_TABLE};
pub use types::{Aabb, GridDims, GridPoint, IslandMesh, Triangle};

// Configuration and error surfaces
pub mod config;
pub mod error;
pub use config::{GenerationConfig, IslandParameters, NoiseParameters, ShapeParameters};
pub use error::{ConfigError, GenerateError};

// Layered fractal noise (field function)
pub mod fractal;
pub use fractal::FractalNoise;

// Density field sampling
pub mod density;
pub use density::{sample_grid, DensityField, FieldSlice, IslandDensity, Orientation, TwoSidedIsland};

// Isosurface extraction
pub mod extract;
pub use extract::{march_chunk, AppendBuffer};

// Mesh assembly
pub mod mesh;
pub use mesh::{assemble, assemble_into};

// Chunk orchestration
pub mod chunks;
pub use chunks::{Chunk, ChunkManager, GenerationStats};

// Fixed-granularity dispatch helpers (shared by sampler and extractor)
mod dispatch;
