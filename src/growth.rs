//! Growth triggers deciding when a [`HashTable`](crate::HashTable) doubles its
//! bucket count.
//!
//! The table reports every append to its policy, both for fresh insertions and
//! for entries moved during a rehash, and asks [`GrowthPolicy::should_grow`]
//! only after a fresh insertion.

/// Decides when a chained table must grow.
pub trait GrowthPolicy {
    /// Called after an entry was appended to a chain, with the chain's length
    /// including the new entry.
    fn record_append(&mut self, chain_len: usize);

    /// Called once at the start of every resize, before any entry is moved.
    fn begin_rehash(&mut self);

    /// Returns `true` if the table holding `len` entries in `bucket_count`
    /// buckets should double its bucket count.
    fn should_grow(&self, len: usize, bucket_count: usize) -> bool;
}

/// Grows once the number of entries reaches the number of buckets.
///
/// This is the default policy of [`ChainedHashMap`](crate::ChainedHashMap).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryCount;

impl GrowthPolicy for EntryCount {
    #[inline]
    fn record_append(&mut self, _chain_len: usize) {}

    #[inline]
    fn begin_rehash(&mut self) {}

    #[inline]
    fn should_grow(&self, len: usize, bucket_count: usize) -> bool {
        len >= bucket_count
    }
}

/// Grows once the longest chain observed since the last resize exceeds a
/// threshold.
///
/// The observed length is a high-water mark: it is raised by every append and
/// only reset when a resize starts, after which the appends performed by the
/// rehash itself set it again. It is not lowered by anything else, so it can
/// lag behind the true longest chain. This is the default policy of
/// [`ChainedHashSet`](crate::ChainedHashSet).
///
/// Elements whose full 64-bit hashes are equal share a bucket under every
/// bucket count. If more than `threshold` of them are present, every rehash
/// sets the load above the threshold again, so each later add doubles the
/// bucket count and memory grows without bound. Use [`EntryCount`] or a
/// higher threshold when such collisions are possible.
///
/// # Examples
///
/// ```rust
/// use chain_hash::GrowthPolicy;
/// use chain_hash::growth::ChainLength;
///
/// let mut policy = ChainLength::default();
/// policy.record_append(1);
/// policy.record_append(2);
/// assert!(!policy.should_grow(2, 16));
///
/// policy.record_append(3);
/// assert_eq!(policy.load(), 3);
/// assert!(policy.should_grow(3, 16));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainLength {
    threshold: usize,
    load: usize,
}

impl ChainLength {
    /// Longest chain tolerated by [`ChainLength::default`].
    pub const DEFAULT_THRESHOLD: usize = 2;

    /// Creates a policy which grows once a chain longer than `threshold` has
    /// been observed.
    pub const fn with_threshold(threshold: usize) -> Self {
        Self { threshold, load: 0 }
    }

    /// Returns the configured threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the longest chain length observed since the last resize
    /// started.
    pub fn load(&self) -> usize {
        self.load
    }
}

impl Default for ChainLength {
    fn default() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }
}

impl GrowthPolicy for ChainLength {
    #[inline]
    fn record_append(&mut self, chain_len: usize) {
        self.load = self.load.max(chain_len);
    }

    #[inline]
    fn begin_rehash(&mut self) {
        self.load = 0;
    }

    #[inline]
    fn should_grow(&self, _len: usize, _bucket_count: usize) -> bool {
        self.load > self.threshold
    }
}
