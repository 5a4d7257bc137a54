//! The set facade of `spec.md` §4.3: a thin projection of [`Map`] with a
//! unit value type and set-shaped method names.

use crate::hash::RandomState;
use crate::map::{self, Map};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A hash set built directly on [`Map<T, (), S>`].
///
/// All invariants of the underlying map apply (`spec.md` §4.3). `S`
/// defaults to this crate's [`RandomState`], same as [`Map`].
pub struct Set<T, S = RandomState> {
    map: Map<T, (), S>,
}

impl<T> Set<T, RandomState> {
    /// Creates an empty set with the default capacity (16).
    pub fn new() -> Self {
        Set { map: Map::new() }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Set {
            map: Map::with_capacity(capacity),
        }
    }
}

impl<T> Default for Set<T, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set with the default capacity and a caller-supplied
    /// hasher.
    pub fn with_hasher(hash_builder: S) -> Self {
        Set {
            map: Map::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with room for `capacity` elements and a
    /// caller-supplied hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Set {
            map: Map::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// The number of elements in the set, in O(1) time.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` iff the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The number of slots backing the set.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Removes every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates over elements in internal-array order. SPEC_FULL addition,
    /// mirroring [`Map::iter`].
    pub fn iter(&self) -> Keys<'_, T> {
        Keys {
            inner: self.map.iter(),
        }
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds `value` to the set. Returns `true` if it was newly inserted,
    /// `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Same as [`Set::insert`], but surfaces [`crate::MapError::CapacityOverflow`]
    /// instead of panicking. SPEC_FULL addition mirroring [`Map::try_insert`].
    pub fn try_insert(&mut self, value: T) -> Result<bool, crate::MapError> {
        self.map.try_insert(value, ()).map(|previous| previous.is_none())
    }

    /// Removes `value` from the set. Returns `true` if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(value).is_some()
    }

    /// `true` iff `value` is in the set.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// A freshly allocated snapshot of every element, in internal-array
    /// order at call time.
    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Elements that appear in either `self` or `other`. SPEC_FULL
    /// addition, grounded in this crate's own (pre-existing)
    /// `associative::hash_set::HashSet::union`.
    pub fn union<'a>(&'a self, other: &'a Self) -> Union<'a, T, S> {
        Union {
            lhs: self,
            lhs_iter: self.iter(),
            rhs_iter: other.iter(),
        }
    }

    /// Elements that appear in both `self` and `other`.
    pub fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, T, S> {
        Intersection {
            iter: self.iter(),
            other,
        }
    }

    /// Elements present in `self` but not `other`. Asymmetric: swapping
    /// `self`/`other` generally changes the result.
    pub fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, T, S> {
        Difference {
            iter: self.iter(),
            other,
        }
    }

    /// Elements present in exactly one of `self`/`other`. Symmetric:
    /// swapping `self`/`other` yields the same set.
    pub fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, T, S> {
        SymmetricDifference {
            lhs_iter: self.iter(),
            rhs_iter: other.iter(),
            lhs: self,
            rhs: other,
        }
    }
}

impl<T, S> fmt::Debug for Set<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Borrowing, lazy iterator over a set's elements. Constructed by
/// [`Set::iter`].
pub struct Keys<'a, T> {
    inner: map::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for Keys<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// Iterator over the union of two sets. Constructed by [`Set::union`].
pub struct Union<'a, T, S> {
    lhs: &'a Set<T, S>,
    lhs_iter: Keys<'a, T>,
    rhs_iter: Keys<'a, T>,
}

impl<'a, T, S> Iterator for Union<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some(v) = self.lhs_iter.next() {
            return Some(v);
        }
        self.rhs_iter.find(|&v| !self.lhs.contains(v))
    }
}

/// Iterator over the intersection of two sets. Constructed by
/// [`Set::intersection`].
pub struct Intersection<'a, T, S> {
    iter: Keys<'a, T>,
    other: &'a Set<T, S>,
}

impl<'a, T, S> Iterator for Intersection<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.find(|&v| self.other.contains(v))
    }
}

/// Iterator over `self`'s elements that are not in `other`. Constructed by
/// [`Set::difference`].
pub struct Difference<'a, T, S> {
    iter: Keys<'a, T>,
    other: &'a Set<T, S>,
}

impl<'a, T, S> Iterator for Difference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.find(|&v| !self.other.contains(v))
    }
}

/// Iterator over elements present in exactly one of two sets. Constructed
/// by [`Set::symmetric_difference`].
pub struct SymmetricDifference<'a, T, S> {
    lhs_iter: Keys<'a, T>,
    rhs_iter: Keys<'a, T>,
    lhs: &'a Set<T, S>,
    rhs: &'a Set<T, S>,
}

impl<'a, T, S> Iterator for SymmetricDifference<'a, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some(v) = self.rhs_iter.find(|&v| !self.lhs.contains(v)) {
            return Some(v);
        }
        self.lhs_iter.find(|&v| !self.rhs.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_6_basic_set_operations() {
        let mut s = Set::new();
        assert!(s.insert("x"));
        assert!(!s.insert("x"));
        assert!(s.contains("x"));
        assert!(s.remove("x"));
        assert!(!s.remove("x"));
    }

    #[test]
    fn try_insert_mirrors_insert() {
        let mut s = Set::new();
        assert_eq!(s.try_insert("x"), Ok(true));
        assert_eq!(s.try_insert("x"), Ok(false));
        assert!(s.contains("x"));
    }

    #[test]
    fn set_map_consistency() {
        let mut set: Set<i32> = Set::new();
        let mut map: Map<i32, ()> = Map::new();
        for i in 0..20 {
            set.insert(i);
            map.insert(i, ());
        }
        assert_eq!(set.len(), map.len());
        for i in 0..20 {
            assert_eq!(set.contains(&i), map.contains_key(&i));
        }
    }

    #[test]
    fn union_contains_every_element_of_both() {
        let mut a = Set::new();
        for n in 0..=3 {
            a.insert(n);
        }
        let mut b = Set::new();
        for n in 2..=5 {
            b.insert(n);
        }
        let mut union: Vec<i32> = a.union(&b).copied().collect();
        union.sort();
        assert_eq!(union, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn intersection_contains_only_shared_elements() {
        let mut a = Set::new();
        for n in 0..=3 {
            a.insert(n);
        }
        let mut b = Set::new();
        for n in 2..=5 {
            b.insert(n);
        }
        let mut intersection: Vec<i32> = a.intersection(&b).copied().collect();
        intersection.sort();
        assert_eq!(intersection, vec![2, 3]);
    }

    #[test]
    fn difference_is_asymmetric() {
        let mut a = Set::new();
        for n in 0..=3 {
            a.insert(n);
        }
        let mut b = Set::new();
        for n in 2..=5 {
            b.insert(n);
        }
        let mut a_minus_b: Vec<i32> = a.difference(&b).copied().collect();
        a_minus_b.sort();
        assert_eq!(a_minus_b, vec![0, 1]);

        let mut b_minus_a: Vec<i32> = b.difference(&a).copied().collect();
        b_minus_a.sort();
        assert_eq!(b_minus_a, vec![4, 5]);
    }

    #[test]
    fn symmetric_difference_is_symmetric() {
        let mut a = Set::new();
        for n in 0..=3 {
            a.insert(n);
        }
        let mut b = Set::new();
        for n in 2..=5 {
            b.insert(n);
        }
        let mut forward: Vec<i32> = a.symmetric_difference(&b).copied().collect();
        forward.sort();
        let mut backward: Vec<i32> = b.symmetric_difference(&a).copied().collect();
        backward.sort();
        assert_eq!(forward, vec![0, 1, 4, 5]);
        assert_eq!(forward, backward);
    }
}
