use core::mem::MaybeUninit;

/// A single slot in the bucket array.
///
/// `dib` ("distance to initial bucket") is the probe-distance counter:
/// zero means the slot is empty, one means the stored record is
/// in its home bucket, two means one slot past home, and so on. `hash` is
/// the cached 64-bit digest computed at insertion time with its high bit
/// cleared, so lookups and inserts always compare against the same
/// normalized value.
///
/// Rust's ordinary struct layout already pads `value` to `T`'s alignment,
/// giving every bucket's payload the alignment `T` needs without any
/// manual packing.
pub(crate) struct Bucket<T> {
    pub(crate) dib: u32,
    pub(crate) hash: u64,
    pub(crate) value: MaybeUninit<T>,
}

impl<T> Bucket<T> {
    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.dib == 0
    }
}
