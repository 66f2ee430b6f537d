#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The error type of the fallible constructors.
pub mod error;

/// Growth triggers deciding when a table doubles its bucket count.
pub mod growth;

/// A map built on the chained `HashTable`.
///
/// This module provides `ChainedHashMap`, which wraps the `HashTable` and
/// provides upsert and lookup by key with a configurable hasher and growth
/// policy.
pub mod hash_map;

/// A hash set built on the chained `HashTable`.
///
/// This module provides `ChainedHashSet`, which wraps the `HashTable` and
/// provides a set interface that rejects duplicate elements.
pub mod hash_set;

/// The separate-chaining table underlying the map and set.
///
/// `HashTable` stores values in per-bucket chains and exposes a raw
/// hash-and-equality API.
pub mod hash_table;

pub use error::Error;
pub use growth::GrowthPolicy;
pub use hash_map::ChainedHashMap;
pub use hash_set::ChainedHashSet;
pub use hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is given.
        ///
        /// foldhash with a fixed seed, so a key lands in the same bucket on
        /// every run.
        pub type DefaultHashBuilder = foldhash::fast::FixedState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is given.
        ///
        /// The standard library's SipHash with zero keys, so a key lands in
        /// the same bucket on every run.
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<std::hash::DefaultHasher>;
    } else {
        /// Uninhabited placeholder; enable `foldhash` or `std` for a default
        /// hasher, or pass one explicitly.
        pub enum DefaultHashBuilder {}
    }
}
