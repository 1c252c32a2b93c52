//! Dispatch granularity and capacity constants.
//!
//! # Thread Groups
//!
//! Both parallel stages (density sampling, isosurface extraction) run over
//! 3D grid domains in fixed 8×8×8 groups:
//!
//! ```text
//! groups_per_axis = ceil(extent / 8)
//!
//! extent = 33 points  →  5 groups  →  40 lanes, 7 masked out
//! extent = 32 voxels  →  4 groups  →  32 lanes, none masked
//! ```
//!
//! Lanes past the domain extent are masked out, mirroring the bounds check
//! a GPU kernel performs on its thread id.

/// Work items per axis in one dispatch group. Fixed dispatch granularity;
/// any backend must issue work in multiples of this.
pub const THREAD_GROUP_SIZE: u32 = 8;

/// Triangle capacity reserved per voxel.
///
/// Marching cubes emits at most 5 triangles per voxel; the output buffer is
/// sized with this larger bound so the append counter can never pass the end
/// of the allocation.
pub const MAX_TRIANGLES_PER_VOXEL: usize = 10;

/// Number of dispatch groups covering `extent` work items along one axis.
#[inline(always)]
pub const fn dispatch_groups(extent: u32) -> u32 {
  (extent + THREAD_GROUP_SIZE - 1) / THREAD_GROUP_SIZE
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
