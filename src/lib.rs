//! A generic, in-memory hash table using open addressing with Robin Hood
//! probe-length balancing and backward-shift deletion.
//!
//! This crate is a library component: there is no network, persistence, or
//! process lifecycle here, just the table itself. The hard engineering is
//! in [`RobinTable`]: correctness under probe displacement, tombstone-free
//! deletion, and predictable performance at high load factors.
//!
//! Records stored in the table are plain Rust values (`T`); key identity is
//! defined by the [`Keyed`] trait rather than by a raw comparator callback.
//! Two bundled [`core::hash::BuildHasher`] implementations are provided in
//! [`hash`]: [`hash::SipBuildHasher`] (SipHash-2-4) and
//! [`hash::MurmurBuildHasher`] (MurmurHash3-x86-128).
//!
//! # Non-goals
//!
//! * Concurrent access. The table assumes single-threaded use or external
//!   mutual exclusion.
//! * Stable references. Any mutating call invalidates previously returned
//!   references.
//! * Ordered iteration. Iteration order is unspecified and may change
//!   across mutations.
//! * Deep copying. Records are moved into and out of buckets; any indirect
//!   storage they reference remains caller-owned.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod bucket;
mod raw;

pub mod error;
pub use self::error::Error;

pub mod hash;

mod table;
pub use self::table::{Iter, Keyed, RobinTable};

pub mod alloc_raw;
pub use self::alloc_raw::{Global, RawAlloc};
