//! Bucket array allocation.
//!
//! This is deliberately small: unlike a byte buffer that grows in place,
//! Robin Hood resizing always moves every occupied bucket to a fresh array
//! sized for the new capacity (bucket home positions depend on `mask`,
//! which changes on every resize), so there is no in-place "reallocate and
//! keep the bytes" path for the table's own storage. Every resize instead
//! allocates a fresh block zeroed to `Bucket<T>`'s layout and casts it to a
//! typed pointer — a zeroed bucket already satisfies `dib == 0`, i.e.
//! "empty", so there is no separate initialization pass.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::alloc_raw::RawAlloc;
use crate::bucket::Bucket;
use crate::error::Error;

#[inline]
pub(crate) fn bucket_layout<T>(cap: usize) -> Result<Layout, Error> {
    Layout::array::<Bucket<T>>(cap).map_err(|_| Error::layout())
}

/// Allocate a zero-initialized array of `cap` buckets. A zeroed `Bucket<T>`
/// has `dib == 0`, which is exactly "empty" regardless of what `T` is.
pub(crate) fn alloc_zeroed_buckets<T, A: RawAlloc>(
    alloc: &A,
    cap: usize,
) -> Result<NonNull<Bucket<T>>, Error> {
    debug_assert!(cap > 0);
    let layout = bucket_layout::<T>(cap)?;

    let ptr = alloc
        .allocate(layout)
        .ok_or_else(|| Error::alloc_failed(layout.size()))?;

    // SAFETY: `ptr` describes at least `layout.size()` freshly allocated
    // bytes that nothing else references yet.
    unsafe {
        ptr.as_ptr().write_bytes(0, layout.size());
    }

    Ok(ptr.cast())
}

/// Release a bucket array previously returned by [`alloc_zeroed_buckets`]
/// with the same `cap`.
///
/// # Safety
///
/// `ptr` must have come from `alloc_zeroed_buckets::<T, A>(alloc, cap)` (or
/// a table holding such an array), and must not be used again afterwards.
pub(crate) unsafe fn dealloc_buckets<T, A: RawAlloc>(alloc: &A, ptr: NonNull<Bucket<T>>, cap: usize) {
    if cap == 0 {
        return;
    }

    // `bucket_layout` cannot fail here: it already succeeded once for this
    // same `cap` when the array was allocated.
    let layout = bucket_layout::<T>(cap).expect("previously valid bucket layout");

    // SAFETY: forwarded from the caller's obligations.
    unsafe {
        alloc.deallocate(ptr.cast(), layout);
    }
}
