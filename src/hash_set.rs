use alloc::string::String;
use alloc::string::ToString;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::growth::ChainLength;
use crate::growth::GrowthPolicy;
use crate::hash_table::Entry;
use crate::hash_table::HashTable;

/// A hash set implemented using the chained `HashTable` as the underlying
/// storage.
///
/// `ChainedHashSet<T, S, G>` stores elements where `T` implements
/// `Hash + Eq`, hashes them with the hasher builder `S`, and grows according
/// to the policy `G`. The default [`ChainLength`] policy doubles the bucket
/// count once a chain longer than two elements has been observed, so the set
/// grows on clustering rather than on element count.
#[derive(Clone)]
pub struct ChainedHashSet<T, S = DefaultHashBuilder, G = ChainLength> {
    table: HashTable<T, G>,
    hash_builder: S,
}

impl<T, S, G> Debug for ChainedHashSet<T, S, G>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.table.values()).finish()
    }
}

impl<T, S, G> ChainedHashSet<T, S, G>
where
    T: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
{
    /// Creates a new hash set with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "std")]
    /// # {
    /// use std::collections::hash_map::RandomState;
    ///
    /// use chain_hash::hash_set::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32, _> = ChainedHashSet::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// # }
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self
    where
        G: Default,
    {
        Self {
            table: HashTable::new(G::default()),
            hash_builder,
        }
    }

    /// Creates a new hash set with `bucket_count` buckets and the given
    /// hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bucket_count` is zero.
    pub fn with_bucket_count_and_hasher(bucket_count: usize, hash_builder: S) -> Result<Self, Error>
    where
        G: Default,
    {
        Self::with_policy_and_hasher(bucket_count, G::default(), hash_builder)
    }

    /// Creates a new hash set with `bucket_count` buckets, the given growth
    /// policy and the given hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bucket_count` is zero.
    pub fn with_policy_and_hasher(
        bucket_count: usize,
        policy: G,
        hash_builder: S,
    ) -> Result<Self, Error> {
        Ok(Self {
            table: HashTable::with_bucket_count(bucket_count, policy)?,
            hash_builder,
        })
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Returns the growth policy, including any state it tracks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<u32> = ChainedHashSet::new();
    /// set.add(1);
    /// assert_eq!(set.growth_policy().load(), 1);
    /// # }
    /// ```
    pub fn growth_policy(&self) -> &G {
        self.table.policy()
    }

    /// Adds an element to the set.
    ///
    /// Returns `false` without touching the set if an equal element is
    /// already present. Otherwise the element is appended to the tail of its
    /// bucket's chain, the set may grow, and `true` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert_eq!(set.add(37), true);
    /// assert_eq!(set.add(37), false);
    /// assert_eq!(set.len(), 1);
    /// # }
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        let hash = self.hash_builder.hash_one(&element);
        match self.table.entry(hash, |v| v == &element) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(element);
                true
            }
        }
    }

    /// Returns `true` if the set contains the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// # }
    /// ```
    pub fn contains(&self, element: &T) -> bool {
        let hash = self.hash_builder.hash_one(element);
        self.table.find(hash, |v| v == element).is_some()
    }

    /// Renders the set one bucket per line, for inspection.
    ///
    /// Each line reads `"<index>: "` followed by the bucket's elements in
    /// chain order, joined by `" -> "`. Every line ends with `'\n'`.
    pub fn to_display_string(&self) -> String
    where
        T: Display,
    {
        self.table
            .display_with(|element, f| write!(f, "{}", element))
            .to_string()
    }

    /// Returns chain-length statistics for the set.
    ///
    /// Only available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_stats(&self) -> crate::hash_table::ChainStats {
        self.table.chain_stats()
    }
}

impl<T, S, G> ChainedHashSet<T, S, G>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
    G: GrowthPolicy + Default,
{
    /// Creates a new hash set with 16 buckets using the default hasher
    /// builder and growth policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), 16);
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new hash set with `bucket_count` buckets using the default
    /// hasher builder and growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bucket_count` is zero.
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self, Error> {
        Self::with_bucket_count_and_hasher(bucket_count, S::default())
    }
}

impl<T, S, G> Default for ChainedHashSet<T, S, G>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
    G: GrowthPolicy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, G> Extend<T> for ChainedHashSet<T, S, G>
where
    T: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}
