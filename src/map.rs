//! The map facade of `spec.md` §4.2: insert/get/remove/contains_key/keys/
//! values/entries/clear/len/capacity over a [`RawTable`].

use crate::error::MapError;
use crate::hash::{hash_one, RandomState};
use crate::table::RawTable;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A hash map built on an open-addressed SwissTable-style core.
///
/// `S` is the [`std::hash::BuildHasher`] used to hash keys; it defaults to
/// this crate's own [`RandomState`], a per-table randomized seed (see
/// [`crate::hash`]). Supply your own with [`Map::with_hasher`] or
/// [`Map::with_capacity_and_hasher`].
pub struct Map<K, V, S = RandomState> {
    table: RawTable<K, V>,
    hash_builder: S,
}

impl<K, V> Map<K, V, RandomState> {
    /// Creates an empty map with the default capacity (16).
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty map with room for at least `capacity` entries
    /// before its first growth. `capacity` is rounded up to a power of two,
    /// with a floor of 16.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V> Default for Map<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Map<K, V, S> {
    /// Creates an empty map with the default capacity and a caller-supplied
    /// hasher. SPEC_FULL addition: lets a caller inject the external hash
    /// capability `spec.md` §4.4 assumes, the way
    /// `std::collections::HashMap::with_hasher` does.
    pub fn with_hasher(hash_builder: S) -> Self {
        Map {
            table: RawTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with room for `capacity` entries and a
    /// caller-supplied hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Map {
            table: RawTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// The number of live entries in the map, in O(1) time.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// `true` iff the map has no live entries.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// The number of slots backing the map (always a power of two).
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterates over `(&K, &V)` pairs in internal-array order. A borrowing,
    /// lazy counterpart to [`Map::entries`]; SPEC_FULL addition, see
    /// `SPEC_FULL.md` §4.2.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.raw_slots().iter(),
        }
    }

    /// Iterates over `(&K, &mut V)` pairs in internal-array order.
    /// SPEC_FULL addition.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.raw_slots_mut().iter_mut(),
        }
    }
}

impl<K, V, S> Map<K, V, S>
where
    S: BuildHasher,
{
    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        hash_one(&self.hash_builder, key)
    }
}

impl<K, V, S> Map<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts `(key, value)`, overwriting and returning any previous value
    /// for `key`. May grow the table; never fails in practice (panics only
    /// if doubling capacity would overflow `usize`, which requires more
    /// entries than fit in memory regardless). See [`Map::try_insert`] for
    /// a non-panicking variant.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value)
            .expect("swiss-map: hash table capacity overflow")
    }

    /// Same as [`Map::insert`], but surfaces [`MapError::CapacityOverflow`]
    /// instead of panicking. SPEC_FULL addition (`spec.md` §4.1.7/§7 name
    /// the failure mode but leave propagation to the host convention).
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        let hash = self.hash_of(&key);
        if let Some(idx) = self.table.find(hash, &key) {
            let (_, old) = self.table.replace_at(idx, key, value);
            return Ok(Some(old));
        }

        let hash_builder = &self.hash_builder;
        self.table.reserve_one(|k| hash_one(hash_builder, k))?;

        match self.table.find_or_insert_slot(hash, &key) {
            Err(idx) => {
                self.table.commit_insert(idx, hash, key, value);
                Ok(None)
            }
            Ok(_) => unreachable!("key appeared after reserve_one, which never inserts"),
        }
    }

    /// Takes a key, a closure, and a default value. If the key is present,
    /// applies the closure to its value in place; otherwise inserts
    /// `default`. Grounded in this crate's own (pre-existing)
    /// `probing_hash_table::HashMap::mut_val_or`.
    pub fn mut_val_or<F>(&mut self, key: K, f: F, default: V)
    where
        F: FnOnce(&mut V),
    {
        if let Some(value) = self.get_mut(&key) {
            f(value);
        } else {
            self.insert(key, default);
        }
    }

    /// Looks up `key`, returning its value if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        let idx = self.table.find(hash, key)?;
        self.table.raw_slots()[idx].as_ref().map(|(_, v)| v)
    }

    /// Looks up `key`, returning a mutable reference to its value if
    /// present. SPEC_FULL addition (`SPEC_FULL.md` §4.2).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        let idx = self.table.find(hash, key)?;
        self.table.raw_slots_mut()[idx].as_mut().map(|(_, v)| v)
    }

    /// `true` iff `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value if it was present. May leave a
    /// tombstone behind (`spec.md` §4.1.4).
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);
        self.table.remove(hash, key).map(|(_, v)| v)
    }

    /// A freshly allocated snapshot of every key, in internal-array order
    /// at call time. Unaffected by later mutations (`spec.md` §4.2, §5).
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// A freshly allocated snapshot of every value, in internal-array order
    /// at call time.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// A freshly allocated snapshot of every `(key, value)` pair, in
    /// internal-array order at call time.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, S> fmt::Debug for Map<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// A borrowing, lazy iterator over `(&K, &V)` pairs in internal-array order.
/// Constructed by [`Map::iter`]. Mirrors this crate's existing
/// `probing_hash_table::Iter`.
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, Option<(K, V)>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|slot| slot.as_ref().map(|(k, v)| (k, v)))
    }
}

/// A borrowing, lazy iterator over `(&K, &mut V)` pairs. Constructed by
/// [`Map::iter_mut`].
pub struct IterMut<'a, K, V> {
    inner: std::slice::IterMut<'a, Option<(K, V)>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find_map(|slot| slot.as_mut().map(|(k, v)| (&*k, v)))
    }
}

/// An owning, lazy iterator over `(K, V)` pairs. Constructed by
/// `IntoIterator::into_iter` on an owned [`Map`].
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Option<(K, V)>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|slot| slot)
    }
}

impl<K, V, S> IntoIterator for Map<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.table.into_raw_slots().into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a Map<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
