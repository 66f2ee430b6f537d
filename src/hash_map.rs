use alloc::string::String;
use alloc::string::ToString;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::growth::EntryCount;
use crate::growth::GrowthPolicy;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map implemented using the chained `HashTable` as the underlying
/// storage.
///
/// `ChainedHashMap<K, V, S, G>` stores key-value pairs where keys implement
/// `Hash + Eq`, hashes keys with the hasher builder `S`, and grows according
/// to the policy `G`. With the default [`EntryCount`] policy the bucket count
/// doubles as soon as the number of keys reaches it.
///
/// Putting an existing key replaces its value in place. Entries are never
/// removed.
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder, G = EntryCount> {
    table: HashTable<(K, V), G>,
    hash_builder: S,
}

impl<K, V, S, G> Debug for ChainedHashMap<K, V, S, G>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.table.values() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S, G> ChainedHashMap<K, V, S, G>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
{
    /// Creates a new map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: ChainedHashMap<i32, String, _> = ChainedHashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 16);
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

    /// Creates a new map with `bucket_count` buckets and the given hasher
    /// builder.
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

    /// Creates a new map with `bucket_count` buckets, the given growth policy
    /// and the given hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    /// use chain_hash::DefaultHashBuilder;
    /// use chain_hash::growth::ChainLength;
    ///
    /// let map: ChainedHashMap<&str, u32, _, _> = ChainedHashMap::with_policy_and_hasher(
    ///     4,
    ///     ChainLength::with_threshold(3),
    ///     DefaultHashBuilder::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(map.bucket_count(), 4);
    /// assert_eq!(map.growth_policy().threshold(), 3);
    /// # }
    /// ```
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

    /// Returns the number of keys in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    ///
    /// let mut map: ChainedHashMap<i32, &str> = ChainedHashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.put(1, "a");
    /// assert_eq!(map.len(), 1);
    /// # }
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Returns the growth policy, including any state it tracks.
    pub fn growth_policy(&self) -> &G {
        self.table.policy()
    }

    /// Puts a key-value pair into the map.
    ///
    /// If the key is absent, the pair is appended to the tail of its bucket's
    /// chain and `None` is returned; the map may then grow. If the key is
    /// present, its value is replaced in place and the old value is returned.
    /// A replacement never grows the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    ///
    /// let mut map: ChainedHashMap<i32, &str> = ChainedHashMap::new();
    /// assert_eq!(map.put(37, "a"), None);
    /// assert_eq!(map.put(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// # }
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    ///
    /// let mut map: ChainedHashMap<i32, &str> = ChainedHashMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// # }
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Renders the map one bucket per line, for inspection.
    ///
    /// Each line reads `"<index>: "` followed by the bucket's `key:value`
    /// pairs in chain order, joined by `" -> "`. Every line, including the
    /// last, ends with `'\n'`. The format is not meant to be parsed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    ///
    /// let mut map: ChainedHashMap<&str, u32> = ChainedHashMap::new();
    /// map.put("a", 1);
    ///
    /// let dump = map.to_display_string();
    /// assert_eq!(dump.lines().count(), 16);
    /// assert_eq!(dump.lines().filter(|line| line.ends_with(": a:1")).count(), 1);
    /// # }
    /// ```
    pub fn to_display_string(&self) -> String
    where
        K: Display,
        V: Display,
    {
        self.table
            .display_with(|(key, value), f| write!(f, "{}:{}", key, value))
            .to_string()
    }

    /// Returns chain-length statistics for the map.
    ///
    /// Only available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_stats(&self) -> crate::hash_table::ChainStats {
        self.table.chain_stats()
    }
}

impl<K, V, S, G> ChainedHashMap<K, V, S, G>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    G: GrowthPolicy + Default,
{
    /// Creates a new map with 16 buckets using the default hasher builder
    /// and growth policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<i32, String> = ChainedHashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 16);
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new map with `bucket_count` buckets using the default
    /// hasher builder and growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashMap;
    /// use chain_hash::Error;
    ///
    /// let map: ChainedHashMap<i32, String> = ChainedHashMap::with_bucket_count(64).unwrap();
    /// assert_eq!(map.bucket_count(), 64);
    ///
    /// let err = ChainedHashMap::<i32, String>::with_bucket_count(0).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// # }
    /// ```
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self, Error> {
        Self::with_bucket_count_and_hasher(bucket_count, S::default())
    }
}

impl<K, V, S, G> Default for ChainedHashMap<K, V, S, G>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    G: GrowthPolicy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S, G> Extend<(K, V)> for ChainedHashMap<K, V, S, G>
where
    K: Hash + Eq,
    S: BuildHasher,
    G: GrowthPolicy,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
