//! The allocator plumbing the table's bucket array is built on.
//!
//! Stable Rust's [`core::alloc::Allocator`] is still unstable, and this
//! table needs allocation failure to be *observable* (construction returns
//! an error, growth failure sets a flag and leaves the table unchanged,
//! shrink failure is silently ignored) rather than aborting the process the
//! way [`alloc::alloc::handle_alloc_error`] does. So instead of adopting the
//! unstable trait we hand-roll a small one on top of
//! `alloc::alloc::{alloc, realloc, dealloc}`.

#[cfg(feature = "alloc")]
use alloc::alloc as sys;
use core::alloc::Layout;
use core::ptr::NonNull;

/// A per-instance allocator triple: allocate, grow-or-shrink (reallocate),
/// and release.
///
/// # Safety
///
/// Implementations must behave like a standard allocator: `allocate` must
/// return a pointer to a live allocation described by `layout`, or `None` on
/// failure. `deallocate` must accept exactly the pointer and layout that a
/// prior successful `allocate`/`reallocate` call on `self` produced, and a
/// no-op `deallocate` of a pointer obtained from a zero-sized layout (which
/// never actually allocates) must be safe.
pub unsafe trait RawAlloc {
    /// Allocate a block described by `layout`. Returns `None` on failure.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Grow or shrink a previous allocation from `old_layout` to
    /// `new_layout`, preserving the first `min(old_layout.size(),
    /// new_layout.size())` bytes. Returns `None` on failure, in which case
    /// `ptr`/`old_layout` are still valid and unchanged.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by a previous `allocate`/`reallocate`
    /// call on `self` with `old_layout`.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Option<NonNull<u8>>;

    /// Release a block previously returned by `allocate`/`reallocate`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by a previous `allocate`/`reallocate`
    /// call on `self` with `layout`, and must not be used again afterwards.
    /// A null-equivalent (zero-sized layout) release must be a no-op.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The default allocator: the process-global allocator registered with
/// `#[global_allocator]`, reached through `alloc::alloc`.
///
/// Failures here are reported instead of aborting the process, since the
/// table's fallible contract depends on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

#[cfg(feature = "alloc")]
// SAFETY: forwards directly to the global allocator with matching layouts.
unsafe impl RawAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return Some(NonNull::dangling());
        }

        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { sys::alloc(layout) };
        NonNull::new(ptr)
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Option<NonNull<u8>> {
        if old_layout.size() == 0 {
            return self.allocate(new_layout);
        }

        if new_layout.size() == 0 {
            // SAFETY: `ptr`/`old_layout` came from a matching allocation.
            unsafe { self.deallocate(ptr, old_layout) };
            return Some(NonNull::dangling());
        }

        if new_layout.align() != old_layout.align() {
            // `realloc` cannot change alignment; allocate fresh and copy.
            let fresh = self.allocate(new_layout)?;
            let copy_len = old_layout.size().min(new_layout.size());
            // SAFETY: both pointers describe at least `copy_len` bytes and
            // do not overlap (freshly allocated).
            unsafe {
                core::ptr::copy_nonoverlapping(ptr.as_ptr(), fresh.as_ptr(), copy_len);
                self.deallocate(ptr, old_layout);
            }
            return Some(fresh);
        }

        // SAFETY: `ptr` was allocated with `old_layout` and `new_layout` has
        // a matching alignment and non-zero size.
        let raw = unsafe { sys::realloc(ptr.as_ptr(), old_layout, new_layout.size()) };
        NonNull::new(raw)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }

        // SAFETY: caller guarantees `ptr`/`layout` match a prior allocation.
        unsafe { sys::dealloc(ptr.as_ptr(), layout) };
    }
}
