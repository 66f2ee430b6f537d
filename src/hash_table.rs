//! The separate-chaining table underlying the map and set.

use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;

use log::debug;
use log::trace;

use crate::error::Error;
use crate::growth::GrowthPolicy;

/// Number of buckets a table starts with unless told otherwise.
pub const INITIAL_BUCKET_COUNT: usize = 16;

/// Maps a hash onto one of `bucket_count` buckets.
///
/// The hash is treated as unsigned, so every value, including the bit pattern
/// of `i64::MIN`, lands on an index in `0..bucket_count` without negation.
///
/// `bucket_count` must be non-zero; tables never hold an empty bucket array.
///
/// # Examples
///
/// ```rust
/// use chain_hash::hash_table::bucket_index;
///
/// assert_eq!(bucket_index(35, 16), 3);
/// assert_eq!(bucket_index(i64::MIN as u64, 16), 0);
/// ```
#[inline(always)]
pub fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    (hash % bucket_count as u64) as usize
}

fn empty_buckets<V>(bucket_count: usize) -> Vec<Vec<Slot<V>>> {
    core::iter::repeat_with(Vec::new)
        .take(bucket_count)
        .collect()
}

#[derive(Clone)]
struct Slot<V> {
    hash: u64,
    value: V,
}

/// Chain-length statistics for a table.
///
/// Only available with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStats {
    /// Number of entries stored in the table
    pub entries: usize,
    /// Number of buckets in the table
    pub bucket_count: usize,
    /// Number of buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `chain_histogram[n]` is the number of buckets whose chain holds `n`
    /// entries
    pub chain_histogram: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ChainStats {
    /// Pretty-print the statistics, including a horizontal bar chart of the
    /// chain-length histogram.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Chained Table Statistics ===");
        println!(
            "Population: {} entries in {} buckets ({:.2} per bucket)",
            self.entries,
            self.bucket_count,
            if self.bucket_count == 0 {
                0.0
            } else {
                self.entries as f64 / self.bucket_count as f64
            }
        );
        println!(
            "Occupied buckets: {}/{}",
            self.occupied_buckets, self.bucket_count
        );
        println!("Longest chain: {}", self.longest_chain);

        let max = self.chain_histogram.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return;
        }

        let max_bar = 60usize;
        for (len, &count) in self.chain_histogram.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", len, "█".repeat(width), count);
        }
    }
}

/// A hash table resolving collisions by separate chaining.
///
/// `HashTable<V, G>` stores values of type `V` in a fixed number of buckets,
/// each bucket owning an ordered chain of the values whose hash maps onto it.
/// Like a raw table, it does not know how to hash or compare `V`: every
/// operation takes the hash of the key being looked up and an equality
/// predicate. New values are appended at the tail of their chain, so a chain
/// lists its values in insertion order.
///
/// When the growth policy `G` fires after an insertion the bucket count
/// doubles and every value is moved to the chain selected by its stored hash
/// under the new count. Values are never copied, and the table never shrinks.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::growth::EntryCount;
/// # use chain_hash::hash_table::Entry;
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_bucket_count(16, EntryCount).unwrap();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert_eq!(table.find(hash, |p| p.id == 123).unwrap().name, "Alice");
/// ```
#[derive(Clone)]
pub struct HashTable<V, G> {
    buckets: Vec<Vec<Slot<V>>>,
    populated: usize,
    policy: G,
}

impl<V, G> Debug for HashTable<V, G>
where
    G: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field(
                "chains",
                &self.buckets.iter().map(Vec::len).collect::<Vec<_>>(),
            )
            .field("populated", &self.populated)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<V, G> HashTable<V, G> {
    /// Walks every value, bucket by bucket and in chain order.
    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|slot| &slot.value))
    }
}

impl<V, G> HashTable<V, G>
where
    G: GrowthPolicy,
{
    /// Creates an empty table with [`INITIAL_BUCKET_COUNT`] buckets and the
    /// given growth policy.
    pub fn new(policy: G) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_BUCKET_COUNT),
            populated: 0,
            policy,
        }
    }

    /// Creates an empty table with `bucket_count` buckets and the given
    /// growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::Error;
    /// # use chain_hash::growth::EntryCount;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64, _> = HashTable::with_bucket_count(8, EntryCount).unwrap();
    /// assert_eq!(table.bucket_count(), 8);
    ///
    /// let err = HashTable::<u64, _>::with_bucket_count(0, EntryCount).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// ```
    pub fn with_bucket_count(bucket_count: usize, policy: G) -> Result<Self, Error> {
        if bucket_count == 0 {
            return Err(Error::InvalidArgument("bucket count must be positive"));
        }

        Ok(Self {
            buckets: empty_buckets(bucket_count),
            populated: 0,
            policy,
        })
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the growth policy, including any state it tracks.
    pub fn policy(&self) -> &G {
        &self.policy
    }

    /// Finds a value by hash and equality predicate.
    ///
    /// Only the chain selected by `hash` is scanned. Never resizes.
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        self.buckets[bucket_index(hash, self.buckets.len())]
            .iter()
            .find(|slot| slot.hash == hash && eq(&slot.value))
            .map(|slot| &slot.value)
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let bucket = bucket_index(hash, self.buckets.len());
        self.buckets[bucket]
            .iter_mut()
            .find(|slot| slot.hash == hash && eq(&slot.value))
            .map(|slot| &mut slot.value)
    }

    /// Gets the entry for the value matching `hash` and `eq`.
    ///
    /// An [`Entry::Occupied`] exposes the stored value for in-place
    /// replacement without touching the chain structure. An
    /// [`Entry::Vacant`] appends to the tail of the chain on insert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::growth::EntryCount;
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<(&str, i32), _> =
    ///     HashTable::with_bucket_count(16, EntryCount).unwrap();
    ///
    /// if let Entry::Vacant(entry) = table.entry(7, |&(k, _)| k == "seven") {
    ///     entry.insert(("seven", 1));
    /// }
    /// if let Entry::Occupied(mut entry) = table.entry(7, |&(k, _)| k == "seven") {
    ///     entry.get_mut().1 += 1;
    /// }
    ///
    /// assert_eq!(table.find(7, |&(k, _)| k == "seven"), Some(&("seven", 2)));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V, G> {
        let bucket = bucket_index(hash, self.buckets.len());
        let position = self.buckets[bucket]
            .iter()
            .position(|slot| slot.hash == hash && eq(&slot.value));

        match position {
            Some(position) => Entry::Occupied(OccupiedEntry {
                value: &mut self.buckets[bucket][position].value,
            }),
            None => Entry::Vacant(VacantEntry {
                table: self,
                hash,
                bucket,
            }),
        }
    }

    /// Returns an adapter rendering the table one bucket per line.
    ///
    /// Each line reads `"<index>: "` followed by the chain's values, written
    /// with `write_value` and joined by `" -> "`. Every line ends with `'\n'`.
    /// The output is meant for inspection, not as a stable format.
    pub fn display_with<F>(&self, write_value: F) -> Chains<'_, V, F>
    where
        F: Fn(&V, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        Chains {
            buckets: &self.buckets,
            write_value,
        }
    }

    #[inline]
    fn maybe_grow(&mut self) {
        let bucket_count = self.buckets.len();
        if self.policy.should_grow(self.populated, bucket_count) {
            trace!(
                "growth triggered with {} entries in {} buckets",
                self.populated, bucket_count
            );
            self.resize(bucket_count.saturating_mul(2));
        }
    }

    #[cold]
    fn resize(&mut self, bucket_count: usize) {
        debug!(
            "resizing chained table from {} to {} buckets ({} entries)",
            self.buckets.len(),
            bucket_count,
            self.populated
        );

        let mut buckets = empty_buckets(bucket_count);
        self.policy.begin_rehash();

        for chain in core::mem::take(&mut self.buckets) {
            for slot in chain {
                let target = &mut buckets[bucket_index(slot.hash, bucket_count)];
                target.push(slot);
                self.policy.record_append(target.len());
            }
        }

        self.buckets = buckets;
    }

    /// Returns chain-length statistics for the current table state.
    ///
    /// Only available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_stats(&self) -> ChainStats {
        let longest_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let mut chain_histogram = alloc::vec![0usize; longest_chain + 1];
        for chain in &self.buckets {
            chain_histogram[chain.len()] += 1;
        }

        ChainStats {
            entries: self.populated,
            bucket_count: self.buckets.len(),
            occupied_buckets: self.buckets.iter().filter(|c| !c.is_empty()).count(),
            longest_chain,
            chain_histogram,
        }
    }
}

/// Renders a table one bucket per line.
///
/// Created by [`HashTable::display_with`].
pub struct Chains<'a, V, F> {
    buckets: &'a [Vec<Slot<V>>],
    write_value: F,
}

impl<V, F> fmt::Display for Chains<'_, V, F>
where
    F: Fn(&V, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(f, "{}: ", index)?;
            for (position, slot) in chain.iter().enumerate() {
                if position > 0 {
                    f.write_str(" -> ")?;
                }
                (self.write_value)(&slot.value, f)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// A view into a single entry in the table, which may be vacant or occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V, G> {
    /// No value matching the lookup is present
    Vacant(VacantEntry<'a, V, G>),
    /// A matching value is present
    Occupied(OccupiedEntry<'a, V>),
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V, G> {
    table: &'a mut HashTable<V, G>,
    hash: u64,
    bucket: usize,
}

impl<V, G> VacantEntry<'_, V, G>
where
    G: GrowthPolicy,
{
    /// Appends `value` to the tail of its chain.
    ///
    /// The growth policy is consulted afterwards; if it fires, the table
    /// doubles its bucket count and rehashes before this call returns.
    pub fn insert(self, value: V) {
        let table = self.table;
        let chain = &mut table.buckets[self.bucket];
        chain.push(Slot {
            hash: self.hash,
            value,
        });
        let chain_len = chain.len();

        table.populated += 1;
        table.policy.record_append(chain_len);
        table.maybe_grow();
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    value: &'a mut V,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the stored value.
    pub fn get(&self) -> &V {
        self.value
    }

    /// Gets a mutable reference to the stored value.
    pub fn get_mut(&mut self) -> &mut V {
        self.value
    }

    /// Converts the entry into a mutable reference to the stored value.
    pub fn into_mut(self) -> &'a mut V {
        self.value
    }

    /// Replaces the stored value, returning the old one. The chain is left
    /// untouched.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.value, value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use core::hash::Hasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;
    use crate::growth::ChainLength;
    use crate::growth::EntryCount;

    struct HashState {
        k0: u64,
        k1: u64,
    }

    impl HashState {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k0: rng.try_next_u64().unwrap(),
                k1: rng.try_next_u64().unwrap(),
            }
        }

        fn build_hasher(&self) -> SipHasher {
            SipHasher::new_with_keys(self.k0, self.k1)
        }
    }

    #[derive(Debug, PartialEq, Eq, Clone)]
    struct Item {
        key: u64,
        value: i32,
    }

    fn hash_key(state: &HashState, key: u64) -> u64 {
        let mut h = state.build_hasher();
        h.write_u64(key);
        h.finish()
    }

    fn insert_item(table: &mut HashTable<Item, impl GrowthPolicy>, hash: u64, item: Item) {
        let key = item.key;
        match table.entry(hash, |v| v.key == key) {
            Entry::Vacant(entry) => entry.insert(item),
            Entry::Occupied(_) => panic!("unexpected occupied entry for {}", key),
        }
    }

    fn render(table: &HashTable<Item, impl GrowthPolicy>) -> String {
        table
            .display_with(|item, f| write!(f, "{}:{}", item.key, item.value))
            .to_string()
    }

    #[test]
    fn zero_buckets_is_rejected() {
        let result = HashTable::<Item, _>::with_bucket_count(0, EntryCount);
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidArgument("bucket count must be positive")
        );
    }

    #[test]
    fn insert_and_find() {
        let state = HashState::default();
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        for k in 0..100u64 {
            let hash = hash_key(&state, k);
            insert_item(
                &mut table,
                hash,
                Item {
                    key: k,
                    value: (k as i32) * 2,
                },
            );
            assert_eq!(
                table.find(hash, |v| v.key == k),
                Some(&Item {
                    key: k,
                    value: (k as i32) * 2
                }),
                "{:#?}",
                table
            );
        }
        assert_eq!(table.len(), 100);

        for k in 0..100u64 {
            let hash = hash_key(&state, k);
            assert_eq!(
                table.find(hash, |v| v.key == k).map(|v| v.value),
                Some(k as i32 * 2)
            );
        }

        let miss_hash = hash_key(&state, 999);
        assert!(table.find(miss_hash, |v| v.key == 999).is_none());
    }

    #[test]
    fn duplicate_entry_is_occupied() {
        let state = HashState::default();
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        let k = 42u64;
        let hash = hash_key(&state, k);

        insert_item(&mut table, hash, Item { key: k, value: 7 });

        match table.entry(hash, |v| v.key == k) {
            Entry::Occupied(mut occ) => {
                let prev = occ.insert(Item { key: k, value: 11 });
                assert_eq!(prev.value, 7);
                assert_eq!(occ.get().value, 11);
            }
            Entry::Vacant(_) => panic!("should be occupied: {}#{:02X}", k, hash),
        }

        assert_eq!(table.len(), 1);
        assert_eq!(table.find(hash, |v| v.key == k).unwrap().value, 11);
    }

    #[test]
    fn find_mut_and_modify() {
        let mut table = HashTable::with_bucket_count(4, EntryCount).unwrap();
        insert_item(&mut table, 1, Item { key: 1, value: 10 });

        if let Some(item) = table.find_mut(1, |v| v.key == 1) {
            item.value += 5;
        }
        assert_eq!(table.find(1, |v| v.key == 1).unwrap().value, 15);
        assert!(table.find_mut(2, |v| v.key == 2).is_none());
    }

    #[test]
    fn entry_into_mut() {
        let mut table = HashTable::with_bucket_count(4, EntryCount).unwrap();
        insert_item(&mut table, 9, Item { key: 9, value: 1 });

        let value = match table.entry(9, |v| v.key == 9) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(_) => panic!("should be occupied"),
        };
        value.value = 2;

        assert_eq!(table.find(9, |v| v.key == 9).unwrap().value, 2);
    }

    #[test]
    fn explicit_collision_keeps_insertion_order() {
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        for key in [3u64, 19, 35] {
            insert_item(&mut table, key, Item { key, value: 0 });
        }

        let rendered = render(&table);
        let line = rendered.lines().nth(3).unwrap();
        assert_eq!(line, "3: 3:0 -> 19:0 -> 35:0");
        assert_eq!(table.chain_stats().longest_chain, 3);
    }

    #[test]
    fn equal_hash_different_key_is_vacant() {
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        insert_item(&mut table, 5, Item { key: 1, value: 1 });

        assert!(matches!(table.entry(5, |v| v.key == 2), Entry::Vacant(_)));
        insert_item(&mut table, 5, Item { key: 2, value: 2 });

        assert_eq!(table.len(), 2);
        assert_eq!(table.find(5, |v| v.key == 1).unwrap().value, 1);
        assert_eq!(table.find(5, |v| v.key == 2).unwrap().value, 2);
    }

    #[test]
    fn entry_count_doubles_at_bucket_count() {
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        for key in 0..15u64 {
            insert_item(&mut table, key, Item { key, value: 0 });
        }
        assert_eq!(table.bucket_count(), 16);

        insert_item(&mut table, 15, Item { key: 15, value: 0 });
        assert_eq!(table.bucket_count(), 32);

        for key in 16..32u64 {
            insert_item(&mut table, key, Item { key, value: 0 });
        }
        assert_eq!(table.bucket_count(), 64);

        for key in 0..32u64 {
            assert!(table.find(key, |v| v.key == key).is_some());
        }
    }

    #[test]
    fn resize_places_entries_by_new_bucket_count() {
        let mut table = HashTable::with_bucket_count(2, EntryCount).unwrap();
        insert_item(&mut table, 1, Item { key: 1, value: 0 });
        insert_item(&mut table, 3, Item { key: 3, value: 0 });
        assert_eq!(table.bucket_count(), 4);

        assert_eq!(render(&table), "0: \n1: 1:0\n2: \n3: 3:0\n");
    }

    #[test]
    fn resize_preserves_chain_order() {
        let mut table = HashTable::with_bucket_count(4, EntryCount).unwrap();
        // All of these land in bucket 1 under 4 buckets and in bucket 1 or 5
        // under 8 buckets.
        for key in [1u64, 5, 9] {
            insert_item(&mut table, key, Item { key, value: 0 });
        }
        insert_item(&mut table, 13, Item { key: 13, value: 0 });
        assert_eq!(table.bucket_count(), 8);

        let rendered = render(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "1: 1:0 -> 9:0");
        assert_eq!(lines[5], "5: 5:0 -> 13:0");
    }

    #[test]
    fn chain_length_policy_grows_on_long_chain() {
        let mut table =
            HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, ChainLength::default()).unwrap();
        insert_item(&mut table, 0, Item { key: 0, value: 0 });
        insert_item(&mut table, 16, Item { key: 16, value: 0 });
        assert_eq!(table.bucket_count(), 16);
        assert_eq!(table.policy().load(), 2);

        insert_item(&mut table, 32, Item { key: 32, value: 0 });
        assert_eq!(table.bucket_count(), 32);
        // 0 and 32 share bucket 0 under 32 buckets; 16 sits alone.
        assert_eq!(table.policy().load(), 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn chain_length_policy_ignores_entry_count() {
        let mut table =
            HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, ChainLength::default()).unwrap();
        for key in 0..32u64 {
            insert_item(&mut table, key, Item { key, value: 0 });
        }
        // Two entries per bucket never exceed the threshold.
        assert_eq!(table.bucket_count(), 16);
        assert_eq!(table.len(), 32);
    }

    #[test]
    fn high_bit_hashes_map_to_valid_buckets() {
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        let hashes = [i64::MIN as u64, u64::MAX, i64::MAX as u64, 1u64 << 63 | 7];
        for (key, hash) in hashes.iter().copied().enumerate() {
            let key = key as u64;
            insert_item(&mut table, hash, Item { key, value: 0 });
        }
        for (key, hash) in hashes.iter().copied().enumerate() {
            let key = key as u64;
            assert!(table.find(hash, |v| v.key == key).is_some());
        }

        assert_eq!(bucket_index(i64::MIN as u64, 16), 0);
        assert_eq!(bucket_index(u64::MAX, 10), 5);
        assert_eq!(bucket_index(1u64 << 63 | 7, 16), 7);
    }

    #[test]
    fn display_renders_every_bucket() {
        let mut table = HashTable::with_bucket_count(4, EntryCount).unwrap();
        insert_item(&mut table, 2, Item { key: 2, value: 20 });

        assert_eq!(render(&table), "0: \n1: \n2: 2:20\n3: \n");
    }

    #[test]
    fn chain_stats_histogram() {
        let mut table =
            HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, ChainLength::default()).unwrap();
        for key in [0u64, 16, 1] {
            insert_item(&mut table, key, Item { key, value: 0 });
        }

        let stats = table.chain_stats();
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.bucket_count, 16);
        assert_eq!(stats.occupied_buckets, 2);
        assert_eq!(stats.longest_chain, 2);
        assert_eq!(stats.chain_histogram, vec![14, 1, 1]);
    }

    #[test]
    fn clone_is_independent() {
        let mut table = HashTable::with_bucket_count(INITIAL_BUCKET_COUNT, EntryCount).unwrap();
        insert_item(&mut table, 1, Item { key: 1, value: 1 });

        let mut cloned = table.clone();
        insert_item(&mut cloned, 2, Item { key: 2, value: 2 });

        assert_eq!(table.len(), 1);
        assert_eq!(cloned.len(), 2);
        assert!(table.find(2, |v| v.key == 2).is_none());
    }

    #[test]
    fn debug_lists_chain_lengths() {
        let mut table = HashTable::with_bucket_count(2, ChainLength::default()).unwrap();
        insert_item(&mut table, 1, Item { key: 1, value: 1 });

        let debug = format!("{:?}", table);
        assert!(debug.contains("chains: [0, 1]"), "{}", debug);
        assert!(debug.contains("populated: 1"), "{}", debug);
    }
}
