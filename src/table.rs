//! The SwissTable core: the control-byte array, the probe sequence, and the
//! tombstone discipline that binds it to the parallel slot array.
//!
//! Everything in this module is `pub(crate)`. The table core never hashes a
//! key itself — it is handed a precomputed 64-bit hash for every operation
//! and an equality comparison (`K: Borrow<Q>, Q: Eq`) — so it has no `Hash`
//! bound of its own. Hashing is the map facade's job; see [`crate::hash`].

use crate::error::MapError;
use std::borrow::Borrow;

/// A slot that has never held an entry, or was cleared by [`RawTable::clear`].
const EMPTY: u8 = 0xFF;
/// A slot whose entry was removed. Searches must skip past it, never stop.
const DELETED: u8 = 0x80;

/// The smallest capacity a table is ever allowed to have.
pub(crate) const DEFAULT_CAPACITY: usize = 16;

/// `Full` control bytes always have their high bit clear (the fingerprint is
/// 7 bits), so a single bitwise test tells `Full` apart from `Empty`/`Deleted`.
#[inline]
fn is_full(ctrl: u8) -> bool {
    ctrl & 0x80 == 0
}

#[inline]
fn h1(hash: u64) -> usize {
    (hash >> 7) as usize
}

#[inline]
fn h2(hash: u64) -> u8 {
    (hash & 0x7f) as u8
}

/// The open-addressed backing store: one `Vec<u8>` of control tags parallel
/// to one `Vec<Option<(K, V)>>` of slots. `capacity()` is always a power of
/// two; `len()` is always the number of `Full` control tags.
#[derive(Debug)]
pub(crate) struct RawTable<K, V> {
    ctrl: Vec<u8>,
    slots: Vec<Option<(K, V)>>,
    len: usize,
    tombstones: usize,
}

impl<K, V> RawTable<K, V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY).next_power_of_two();
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RawTable {
            ctrl: vec![EMPTY; capacity],
            slots,
            len: 0,
            tombstones: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.ctrl.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.capacity() - 1
    }

    /// The load-factor cap from `spec.md` §3: `floor(N * 7 / 8)`.
    pub(crate) fn load_cap(&self) -> usize {
        self.capacity() * 7 / 8
    }

    /// Linear probing: `p_k = (h1 + k) & mask`. Because capacity is a power
    /// of two this visits every index exactly once before repeating.
    fn probe_seq(&self, hash: u64) -> impl Iterator<Item = usize> + '_ {
        let mask = self.mask();
        let start = h1(hash) & mask;
        (0..self.capacity()).map(move |step| (start + step) & mask)
    }

    /// The find-slot protocol of `spec.md` §4.1.2. `Empty` is the only
    /// terminator; `Deleted` is always skipped.
    pub(crate) fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let fingerprint = h2(hash);
        for idx in self.probe_seq(hash) {
            let ctrl = self.ctrl[idx];
            if ctrl == EMPTY {
                return None;
            }
            if ctrl == fingerprint {
                if let Some((k, _)) = &self.slots[idx] {
                    if k.borrow() == key {
                        return Some(idx);
                    }
                }
            }
        }
        None
    }

    /// Walks the probe sequence for `insert`: `Ok(idx)` means `key` is
    /// already present at `idx`; `Err(idx)` means `idx` is the first
    /// `Deleted` or `Empty` slot encountered, reusable for a new entry.
    fn find_insert_slot<Q>(&self, hash: u64, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let fingerprint = h2(hash);
        let mut first_deleted = None;
        for idx in self.probe_seq(hash) {
            let ctrl = self.ctrl[idx];
            if ctrl == EMPTY {
                return Err(first_deleted.unwrap_or(idx));
            }
            if ctrl == DELETED {
                if first_deleted.is_none() {
                    first_deleted = Some(idx);
                }
                continue;
            }
            if ctrl == fingerprint {
                if let Some((k, _)) = &self.slots[idx] {
                    if k.borrow() == key {
                        return Ok(idx);
                    }
                }
            }
        }
        // Capacity is a power of two and the caller never lets `len` reach
        // `capacity`, so some slot along the probe sequence is never Full.
        unreachable!("probe sequence exhausted a table with no open slot")
    }

    /// Replaces the value at an already-occupied slot, returning the old
    /// (key, value) pair. Never touches `len`, `tombstones`, or capacity —
    /// a pure replace-in-place never triggers growth (`spec.md` §4.1.5).
    pub(crate) fn replace_at(&mut self, idx: usize, key: K, value: V) -> (K, V) {
        self.slots[idx]
            .replace((key, value))
            .expect("replace_at called on a non-Full slot")
    }

    /// Inserts a brand-new entry into a slot this table has already proven
    /// is free (via [`RawTable::find_insert_slot`] or a fresh probe). The
    /// caller must have already made room via [`RawTable::try_grow`] if
    /// `len() == load_cap()`.
    fn insert_new(&mut self, idx: usize, hash: u64, key: K, value: V) {
        if self.ctrl[idx] == DELETED {
            self.tombstones -= 1;
        }
        self.ctrl[idx] = h2(hash);
        self.slots[idx] = Some((key, value));
        self.len += 1;
    }

    /// Finds `key`'s slot (if present) or the slot a new entry belongs in
    /// (if absent), without yet deciding whether to grow. Mirrors
    /// `spec.md` §4.1.3's two-outcome protocol.
    pub(crate) fn find_or_insert_slot<Q>(&self, hash: u64, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find_insert_slot(hash, key)
    }

    /// Commits a new entry at a slot previously returned as `Err(idx)` by
    /// [`RawTable::find_or_insert_slot`].
    pub(crate) fn commit_insert(&mut self, idx: usize, hash: u64, key: K, value: V) {
        self.insert_new(idx, hash, key, value);
    }

    pub(crate) fn remove<Q>(&mut self, hash: u64, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let idx = self.find(hash, key)?;
        self.ctrl[idx] = DELETED;
        self.len -= 1;
        self.tombstones += 1;
        self.slots[idx].take()
    }

    pub(crate) fn clear(&mut self) {
        for c in self.ctrl.iter_mut() {
            *c = EMPTY;
        }
        for s in self.slots.iter_mut() {
            *s = None;
        }
        self.len = 0;
        self.tombstones = 0;
    }

    /// Borrows the raw slot array in internal-array order, the iteration
    /// order `spec.md` §4.2 specifies for `keys()`/`values()`/`entries()`.
    pub(crate) fn raw_slots(&self) -> &[Option<(K, V)>] {
        &self.slots
    }

    pub(crate) fn raw_slots_mut(&mut self) -> &mut [Option<(K, V)>] {
        &mut self.slots
    }

    pub(crate) fn into_raw_slots(self) -> Vec<Option<(K, V)>> {
        self.slots
    }

    /// Whether tombstone buildup has grown large enough relative to
    /// capacity that a same-size rehash is worth its `O(n)` cost purely to
    /// shorten future probe chains. This is independent of the `len() <=
    /// load_cap()` invariant: reclaiming tombstones never changes `len` or
    /// `capacity`, so it can never substitute for growth (`spec.md` §4.1.5).
    fn should_compact(&self) -> bool {
        self.tombstones > self.capacity() / 8
    }

    /// Ensures the table has room for one more live entry, growing or
    /// compacting first if needed. `hash_fn` recomputes each surviving
    /// key's hash against the rebuilt table.
    pub(crate) fn reserve_one<F>(&mut self, hash_fn: F) -> Result<(), MapError>
    where
        F: Fn(&K) -> u64,
    {
        if self.should_compact() {
            self.rehash_in_place(&hash_fn);
        }
        if self.len >= self.load_cap() {
            self.try_grow(self.capacity().checked_mul(2).ok_or(MapError::CapacityOverflow)?, &hash_fn)?;
        }
        Ok(())
    }

    /// Rebuilds both arrays at `new_capacity`, re-deriving each surviving
    /// entry's slot from a freshly computed hash. Erases all tombstones.
    /// Leaves `self` untouched unless both arrays were reserved successfully
    /// (the strong exception-safety guarantee of `spec.md` §4.1.7).
    fn try_grow<F>(&mut self, new_capacity: usize, hash_fn: &F) -> Result<(), MapError>
    where
        F: Fn(&K) -> u64,
    {
        let mut new_slots: Vec<Option<(K, V)>> = Vec::new();
        new_slots
            .try_reserve_exact(new_capacity)
            .map_err(|_| MapError::CapacityOverflow)?;
        let mut new_ctrl: Vec<u8> = Vec::new();
        new_ctrl
            .try_reserve_exact(new_capacity)
            .map_err(|_| MapError::CapacityOverflow)?;

        new_slots.resize_with(new_capacity, || None);
        new_ctrl.resize(new_capacity, EMPTY);

        log::debug!(
            "growing table from {} to {} slots ({} live entries)",
            self.capacity(),
            new_capacity,
            self.len
        );

        let old_slots = std::mem::replace(&mut self.slots, new_slots);
        self.ctrl = new_ctrl;
        self.tombstones = 0;
        rebuild_into(&mut self.ctrl, &mut self.slots, old_slots, hash_fn);
        Ok(())
    }

    /// Rebuilds the table at its current capacity, dropping every
    /// tombstone. `len` is unchanged; only `tombstones` resets to zero.
    fn rehash_in_place<F>(&mut self, hash_fn: &F)
    where
        F: Fn(&K) -> u64,
    {
        let capacity = self.capacity();
        log::debug!(
            "compacting table in place at {} slots ({} tombstones reclaimed)",
            capacity,
            self.tombstones
        );
        let old_slots = std::mem::replace(&mut self.slots, {
            let mut v = Vec::with_capacity(capacity);
            v.resize_with(capacity, || None);
            v
        });
        self.ctrl = vec![EMPTY; capacity];
        self.tombstones = 0;
        rebuild_into(&mut self.ctrl, &mut self.slots, old_slots, hash_fn);
    }
}

/// Shared by `try_grow` and `rehash_in_place`: reinsert every live entry of
/// `old_slots` into a freshly zeroed `(ctrl, slots)` pair. Every surviving
/// key is already known distinct, so placement only needs the first `Empty`
/// slot along its probe sequence, not an equality check.
fn rebuild_into<K, V, F>(
    ctrl: &mut [u8],
    slots: &mut [Option<(K, V)>],
    old_slots: Vec<Option<(K, V)>>,
    hash_fn: &F,
) where
    F: Fn(&K) -> u64,
{
    let mask = ctrl.len() - 1;
    for slot in old_slots.into_iter().flatten() {
        let (key, value) = slot;
        let hash = hash_fn(&key);
        let start = h1(hash) & mask;
        let mut idx = start;
        loop {
            if ctrl[idx] == EMPTY {
                break;
            }
            idx = (idx + 1) & mask;
        }
        ctrl[idx] = h2(hash);
        slots[idx] = Some((key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(key: &i32) -> u64 {
        *key as u64
    }

    #[test]
    fn default_capacity_is_sixteen() {
        let t: RawTable<i32, i32> = RawTable::new();
        assert_eq!(t.capacity(), DEFAULT_CAPACITY);
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn with_capacity_rounds_up_and_floors() {
        let t: RawTable<i32, i32> = RawTable::with_capacity(3);
        assert_eq!(t.capacity(), 16);
        let t: RawTable<i32, i32> = RawTable::with_capacity(100);
        assert_eq!(t.capacity(), 128);
    }

    #[test]
    fn insert_find_remove_roundtrip() {
        let mut t: RawTable<i32, &str> = RawTable::new();
        for k in 0..10 {
            let h = hash_of(&k);
            match t.find_or_insert_slot(h, &k) {
                Ok(_) => panic!("key should be new"),
                Err(idx) => t.commit_insert(idx, h, k, "v"),
            }
        }
        assert_eq!(t.len(), 10);
        for k in 0..10 {
            assert!(t.find(hash_of(&k), &k).is_some());
        }
        assert!(t.remove(hash_of(&3), &3).is_some());
        assert!(t.find(hash_of(&3), &3).is_none());
        assert_eq!(t.len(), 9);
        // tombstone transparency: key inserted before the tombstone and not
        // itself removed is still reachable.
        for k in [0, 1, 2, 4, 5, 6, 7, 8, 9] {
            assert!(t.find(hash_of(&k), &k).is_some());
        }
    }

    #[test]
    fn is_full_rejects_empty_and_deleted() {
        assert!(!is_full(EMPTY));
        assert!(!is_full(DELETED));
        for fp in 0u8..128 {
            assert!(is_full(fp));
        }
    }
}
