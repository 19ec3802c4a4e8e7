//! String keyed hash table with linked list buckets.
//!
//! Keys are hashed with [`hash`], a 32-bit polynomial string hash. Every
//! distinct hash value gets its own bucket, and each bucket is a
//! [`LinkedList`] of [`Entry`] records in insertion order. Keys that collide
//! share a bucket and are told apart by the key stored in each entry.
//!
//! # Examples
//!
//! ```
//! use chain_map::HashTable;
//!
//! let mut table = HashTable::new();
//! table.insert_node_into_map("Aa", 1);
//! table.insert_node_into_map("BB", 2);
//!
//! // "Aa" and "BB" hash to the same bucket.
//! let keys: Vec<_> = table.get_bucket("Aa").map(|e| e.key.as_str()).collect();
//! assert_eq!(keys, ["Aa", "BB"]);
//! assert_eq!(table.get("BB"), Some(&2));
//! ```

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map;
use log::debug;
use log::trace;
use log::warn;

use crate::error::Error;
use crate::error::Result;
use crate::linked_list::Iter;
use crate::linked_list::LinkedList;
use crate::linked_list::ListNode;

/// Hashes `key` to a signed 32-bit value.
///
/// Starting from zero, every UTF-16 code unit `c` of the key updates the hash
/// as `h = (h << 5) - h + c`, i.e. `h * 31 + c`, wrapping on overflow. The
/// empty string hashes to `0`.
///
/// # Examples
///
/// ```
/// use chain_map::hash;
///
/// assert_eq!(hash(""), 0);
/// assert_eq!(hash("a"), 97);
/// assert_eq!(hash("ab"), 97 * 31 + 98);
/// assert_eq!(hash("polygenelubricants"), i32::MIN);
/// ```
pub fn hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |h, unit| {
        (h << 5).wrapping_sub(h).wrapping_add(i32::from(unit))
    })
}

/// The record stored in each node of a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The key as it was inserted
    pub key: String,
    /// The bucket the entry lives in
    pub bucket: i32,
    /// The hash of `key`
    pub hash_code: i32,
    /// The stored value
    pub value: V,
}

/// A hash table mapping string keys to values through linked list buckets.
///
/// Buckets are created lazily on first insertion and are never removed or
/// rehashed. Inserting the same key twice stores two entries; lookups with
/// [`get`](Self::get) return the first one.
///
/// The table performs no internal synchronization. Concurrent use requires
/// an external lock around the whole table.
///
/// # Examples
///
/// ```
/// use chain_map::HashTable;
///
/// let mut table = HashTable::new();
/// for word in ["hello", "world", "w", "e", "go", "e"] {
///     table.insert_node_into_map(word, word.len());
/// }
/// assert_eq!(table.len(), 6);
/// assert_eq!(table.get_bucket("e").count(), 2);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: HashMap<i32, LinkedList<Entry<V>>>,
}

impl<V> HashTable<V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with room for at least `capacity` buckets.
    ///
    /// The capacity only affects allocation; the table has no load factor or
    /// rehash policy of its own.
    pub fn with_capacity(capacity: usize) -> Self {
        HashTable {
            buckets: HashMap::with_capacity(capacity),
        }
    }

    /// Wraps an existing bucket mapping.
    ///
    /// Entries are used as given; nothing checks that they hash to the bucket
    /// they are stored under.
    pub fn from_buckets(buckets: HashMap<i32, LinkedList<Entry<V>>>) -> Self {
        HashTable { buckets }
    }

    /// Hashes `key` with the table's hash function. See [`hash`].
    pub fn hash(key: &str) -> i32 {
        hash(key)
    }

    /// Returns the full mapping from hash code to bucket.
    pub fn get_hash_map(&self) -> &HashMap<i32, LinkedList<Entry<V>>> {
        &self.buckets
    }

    /// Returns the total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(LinkedList::len).sum()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(LinkedList::is_empty)
    }

    /// Returns the number of buckets that have been created.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Installs `list` as the whole bucket for `key`.
    ///
    /// Entries in `list` are used as given; nothing checks that they hash to
    /// `hash(key)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BucketOccupied`] if the bucket for `key` already holds
    /// a list, even an empty one. The existing bucket is left untouched and
    /// `list` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::Error;
    /// use chain_map::HashTable;
    /// use chain_map::LinkedList;
    ///
    /// let mut table: HashTable<u32> = HashTable::new();
    /// assert!(table.insert_list_into_map("k", LinkedList::new()).is_ok());
    /// assert_eq!(
    ///     table.insert_list_into_map("k", LinkedList::new()),
    ///     Err(Error::BucketOccupied { bucket: 107 })
    /// );
    /// ```
    pub fn insert_list_into_map(&mut self, key: &str, list: LinkedList<Entry<V>>) -> Result<()> {
        let bucket = hash(key);
        match self.buckets.entry(bucket) {
            hash_map::Entry::Occupied(_) => {
                warn!("refusing to replace existing bucket {bucket} for key {key:?}");
                Err(Error::BucketOccupied { bucket })
            }
            hash_map::Entry::Vacant(slot) => {
                debug!("installing list of {} entries as bucket {bucket}", list.len());
                slot.insert(list);
                Ok(())
            }
        }
    }

    /// Appends a new entry for `key` to the end of its bucket, creating the
    /// bucket if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert_node_into_map("a", "first");
    /// table.insert_node_into_map("a", "second");
    ///
    /// let entry = table.get_bucket("a").next().unwrap();
    /// assert_eq!(entry.bucket, 97);
    /// assert_eq!(entry.hash_code, 97);
    /// assert_eq!(entry.value, "first");
    /// assert_eq!(table.get_bucket("a").count(), 2);
    /// ```
    pub fn insert_node_into_map(&mut self, key: &str, value: V) {
        let hash_code = hash(key);
        let list = self.buckets.entry(hash_code).or_insert_with(|| {
            debug!("creating bucket {hash_code}");
            LinkedList::new()
        });
        list.append_to_tail(ListNode::new(Entry {
            key: String::from(key),
            bucket: hash_code,
            hash_code,
            value,
        }));
        trace!("inserted {key:?} into bucket {hash_code}, chain length {}", list.len());
    }

    /// Returns the entries of the bucket `key` hashes to, in insertion order.
    ///
    /// The bucket may contain entries for other keys that share the hash. If
    /// no bucket exists the iterator is empty.
    pub fn get_bucket(&self, key: &str) -> Iter<'_, Entry<V>> {
        self.get_bucket_list(key)
            .map_or_else(Iter::default, LinkedList::iter)
    }

    /// Returns the list backing the bucket `key` hashes to, if it exists.
    pub fn get_bucket_list(&self, key: &str) -> Option<&LinkedList<Entry<V>>> {
        self.buckets.get(&hash(key))
    }

    /// Mutable counterpart of [`get_bucket_list`](Self::get_bucket_list).
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert_node_into_map("dup", 1);
    /// table.insert_node_into_map("dup", 1);
    ///
    /// let bucket = table.get_bucket_list_mut("dup").unwrap();
    /// assert_eq!(bucket.find_delete_duplicate(), 1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn get_bucket_list_mut(&mut self, key: &str) -> Option<&mut LinkedList<Entry<V>>> {
        self.buckets.get_mut(&hash(key))
    }

    /// Returns the value of the first entry stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_bucket(key)
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Writes the hash code of every bucket on its own line.
    ///
    /// Buckets are written in the table's internal order, which is
    /// unspecified.
    pub fn print_map<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for bucket in self.buckets.keys() {
            writeln!(out, "{bucket}")?;
        }
        Ok(())
    }

    /// Writes the chain of the bucket `key` hashes to, one entry per line from
    /// head to tail, or `[]` if there is no such bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_map::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert_node_into_map("a", 1);
    ///
    /// let mut out = String::new();
    /// table.print_bucket("a", &mut out).unwrap();
    /// assert_eq!(
    ///     out,
    ///     "Entry { key: \"a\", bucket: 97, hash_code: 97, value: 1 }\n"
    /// );
    ///
    /// out.clear();
    /// table.print_bucket("missing", &mut out).unwrap();
    /// assert_eq!(out, "[]\n");
    /// ```
    pub fn print_bucket<W: fmt::Write>(&self, key: &str, out: &mut W) -> fmt::Result
    where
        V: fmt::Debug,
    {
        match self.get_bucket_list(key) {
            Some(list) => list.print_list(out),
            None => writeln!(out, "[]"),
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter()).finish()
    }
}

impl<V> From<HashMap<i32, LinkedList<Entry<V>>>> for HashTable<V> {
    fn from(buckets: HashMap<i32, LinkedList<Entry<V>>>) -> Self {
        Self::from_buckets(buckets)
    }
}
