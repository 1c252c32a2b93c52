//! Shared append buffer with an atomic reservation counter.
//!
//! The extraction dispatch runs voxels concurrently; each worker reserves a
//! contiguous run of output slots with one `fetch_add` on the shared
//! counter, then writes its triangles into the reserved run. The counter is
//! the single point of atomicity in the pipeline — every slot has exactly
//! one writer, so no triangle can be lost or overwritten, and the output
//! order across voxels is unspecified.
//!
//! Capacity is fixed at construction and sized by the caller from the
//! per-voxel bound; running past it means that bound was violated, which is
//! a programming error and panics rather than returning.

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed-capacity buffer filled by concurrent reserve-then-write appends.
pub struct AppendBuffer<T> {
  slots: Box<[UnsafeCell<MaybeUninit<T>>]>,
  len: AtomicUsize,
}

// SAFETY: concurrent access is limited to the atomic counter and to writes
// of disjoint reserved slots.
unsafe impl<T: Send> Sync for AppendBuffer<T> {}

impl<T> AppendBuffer<T> {
  pub fn with_capacity(capacity: usize) -> Self {
    let slots = (0..capacity)
      .map(|_| UnsafeCell::new(MaybeUninit::uninit()))
      .collect();
    Self {
      slots,
      len: AtomicUsize::new(0),
    }
  }

  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Forget all appended values, keeping the allocation.
  pub fn reset(&mut self) {
    *self.len.get_mut() = 0;
  }

  /// Reserve `count` slots, returning the base index of the run.
  ///
  /// Panics when the reservation would pass the end of the buffer; the
  /// caller's capacity bound is required to make that unreachable.
  #[inline]
  pub fn reserve(&self, count: usize) -> usize {
    let base = self.len.fetch_add(count, Ordering::Relaxed);
    assert!(
      base + count <= self.slots.len(),
      "append buffer overflow: {} + {} exceeds capacity {}",
      base,
      count,
      self.slots.len()
    );
    base
  }

  /// Write one reserved slot.
  ///
  /// # Safety
  ///
  /// `slot` must come from a [`reserve`](Self::reserve) run owned by the
  /// calling worker, and each slot must be written exactly once per
  /// dispatch.
  #[inline(always)]
  pub unsafe fn write(&self, slot: usize, value: T) {
    debug_assert!(slot < self.slots.len());
    unsafe { (*self.slots[slot].get()).write(value) };
  }

  /// Number of appended values.
  pub fn len(&self) -> usize {
    self.len.load(Ordering::Acquire).min(self.slots.len())
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// All appended values, in unspecified order.
  ///
  /// Requires `&mut self`, which proves the dispatch that reserved and
  /// wrote the slots has completed; every slot below `len` is initialized.
  pub fn as_slice(&mut self) -> &[T] {
    let len = (*self.len.get_mut()).min(self.slots.len());
    // SAFETY: every reserved slot below `len` was written before the
    // dispatch returned, and `UnsafeCell<MaybeUninit<T>>` has the layout
    // of `T`.
    unsafe { std::slice::from_raw_parts(self.slots.as_ptr() as *const T, len) }
  }
}

#[cfg(test)]
#[path = "append_test.rs"]
mod append_test;
