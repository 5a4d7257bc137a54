/*! # About
A SwissTable-style open-addressed hash map and set.

Keys and values live in a flat `Vec`-backed slot array alongside a
parallel control-byte array that packs, per slot, whether it's empty,
deleted (a tombstone left behind by `remove`), or full with a 7-bit
fingerprint of the key's hash. Probing walks the control array and
skips past tombstones transparently, so `remove` never breaks a probe
chain for a key inserted before it.

- [`Map`]: the keyed container. Built directly on the crate's internal
  raw table type.
- [`Set`]: a thin projection of `Map<T, ()>` with set-shaped method
  names (`insert`/`contains`/`remove`) and the usual set-algebra
  iterators (`union`, `intersection`, `difference`,
  `symmetric_difference`).
- [`RandomState`]: the default [`std::hash::BuildHasher`], seeded once
  per table from the OS RNG so a caller who doesn't supply their own
  hasher still gets some resistance to hand-picked collision chains.
- [`MapError`]: the crate's only error, `CapacityOverflow`, surfaced
  from `Map::try_insert`/`Set::try_insert` when doubling the table
  would overflow `usize`.
*/

mod error;
mod hash;
mod map;
mod set;
mod table;

pub use error::MapError;
pub use hash::RandomState;
pub use map::{IntoIter, Iter, IterMut, Map};
pub use set::{Difference, Intersection, Keys, Set, SymmetricDifference, Union};
