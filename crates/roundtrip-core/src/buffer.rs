// crates/roundtrip-core/src/buffer.rs
//
// Aligned, zero-initialised heap regions. Memory is released in Drop, so a
// buffer is freed exactly once whichever way the owning scope exits.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use tracing::debug;

use crate::error::{HarnessError, Result};

pub struct AlignedBuffer {
    ptr: NonNull<u8>,
    len: usize,
    layout: Layout,
}

impl AlignedBuffer {
    /// `alignment` must be a power of two. A zero `size` still reserves one
    /// byte so the pointer is real and aligned.
    pub fn allocate(alignment: usize, size: usize) -> Result<Self> {
        let err = || HarnessError::Allocation { size, alignment };

        let layout = Layout::from_size_align(size.max(1), alignment).map_err(|_| err())?;
        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or_else(err)?;

        debug!(size, alignment, "allocated buffer");
        Ok(Self {
            ptr,
            len: size,
            layout,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn alignment(&self) -> usize {
        self.layout.align()
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr is valid for len initialised bytes and uniquely owned.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as above; &mut self guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        // SAFETY: ptr was returned by alloc_zeroed with this exact layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) };
    }
}

impl std::fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("alignment", &self.layout.align())
            .finish()
    }
}
