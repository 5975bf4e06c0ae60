//! Two bundled byte-string hash functions: SipHash-2-4
//! and MurmurHash3-x86-128 (low 64 bits). Both are exposed as pure
//! functions over a byte slice (independently test-vectorable, per the
//! spec) and as [`core::hash::BuildHasher`] implementations keyed by the
//! same `(seed0, seed1)` pair the table threads through every hash
//! invocation.

mod murmur3;
mod sip;

pub use self::murmur3::{murmur3_x86_128_low64, MurmurBuildHasher, MurmurHasher};
pub use self::sip::{sip24, SipBuildHasher, SipHasher24};
