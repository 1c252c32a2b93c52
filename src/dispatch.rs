//! Fixed-granularity parallel dispatch over 3D grid domains.
//!
//! Work is issued in 8×8×8 groups regardless of the domain extent; lanes
//! whose coordinate falls outside the domain are masked out, mirroring the
//! bounds check a GPU kernel performs on its thread id. One group is one
//! rayon work item, and every in-range lane owns exactly one slot of the
//! output buffer.

use glam::UVec3;

use crate::constants::{dispatch_groups, THREAD_GROUP_SIZE};

/// Decomposition of a 3D domain into dispatch groups.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DispatchGrid {
  extent: UVec3,
  groups: UVec3,
}

impl DispatchGrid {
  pub fn new(extent: UVec3) -> Self {
    Self {
      extent,
      groups: UVec3::new(
        dispatch_groups(extent.x),
        dispatch_groups(extent.y),
        dispatch_groups(extent.z),
      ),
    }
  }

  /// Total number of groups to dispatch.
  pub fn group_count(&self) -> usize {
    self.groups.element_product() as usize
  }

  /// Run `f` for every in-range lane of group `group`.
  pub fn for_each_lane(&self, group: usize, mut f: impl FnMut(UVec3)) {
    let group = group as u32;
    let per_slice = self.groups.x * self.groups.y;
    let gz = group / per_slice;
    let gy = (group % per_slice) / self.groups.x;
    let gx = group % self.groups.x;
    let base = UVec3::new(gx, gy, gz) * THREAD_GROUP_SIZE;

    for lz in 0..THREAD_GROUP_SIZE {
      for ly in 0..THREAD_GROUP_SIZE {
        for lx in 0..THREAD_GROUP_SIZE {
          let at = base + UVec3::new(lx, ly, lz);
          if at.cmplt(self.extent).all() {
            f(at);
          }
        }
      }
    }
  }
}

/// Shared write access to disjoint slots of a slice.
///
/// Used by parallel dispatches where every slot is written by exactly one
/// lane; the partition of the index space is the whole synchronization
/// argument, so no per-slot state is kept.
pub(crate) struct SlotWriter<'a, T> {
  ptr: *mut T,
  len: usize,
  _slice: std::marker::PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send> Send for SlotWriter<'_, T> {}
unsafe impl<T: Send> Sync for SlotWriter<'_, T> {}

impl<'a, T> SlotWriter<'a, T> {
  pub fn new(slice: &'a mut [T]) -> Self {
    Self {
      ptr: slice.as_mut_ptr(),
      len: slice.len(),
      _slice: std::marker::PhantomData,
    }
  }

  /// Write one slot.
  ///
  /// # Safety
  ///
  /// `index` must be in bounds and, for the duration of the dispatch, no
  /// other thread may write the same index.
  #[inline(always)]
  pub unsafe fn write(&self, index: usize, value: T) {
    debug_assert!(index < self.len);
    unsafe { self.ptr.add(index).write(value) };
  }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;
