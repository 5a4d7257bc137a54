//! The hash capability `spec.md` §4.4 asks every key type to supply.
//!
//! Rust's own [`std::hash::Hash`] trait already *is* the generic hashing
//! interface `spec.md` §9 tells implementers to define for themselves, so
//! this module does not invent a parallel trait. It only supplies the
//! default [`BuildHasher`] — the zero-config seed a [`crate::Map`]/[`crate::Set`]
//! uses when the caller doesn't bring their own.

use std::hash::{BuildHasher, Hash, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// A per-table randomized [`BuildHasher`].
///
/// This is the systems-language analogue of the teaching library's MAD
/// `scale`/`shift` fields: both are generated once (here, from the OS RNG)
/// and held for the table's lifetime, so that an adversary who knows the
/// fixed hashing algorithm can't hand-pick a key sequence that collapses
/// every lookup into a full linear scan. The mixing itself is FNV-1a, the
/// byte-string default `spec.md` §4.4 names, generalized to any `Hash`
/// input via `std::hash::Hasher::write`.
#[derive(Clone, Debug)]
pub struct RandomState {
    seed: u64,
}

impl RandomState {
    pub fn new() -> Self {
        use rand::Rng;
        let seed = rand::rng().random();
        RandomState { seed }
    }
}

impl Default for RandomState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for RandomState {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> FnvHasher {
        FnvHasher {
            state: self.seed ^ FNV_OFFSET_BASIS,
        }
    }
}

/// An FNV-1a hasher seeded by [`RandomState`].
#[derive(Clone, Debug)]
pub struct FnvHasher {
    state: u64,
}

impl Hasher for FnvHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Hashes `key` with a fresh [`Hasher`] from `build_hasher`, the same
/// "build one hasher per call" pattern `std::collections::HashMap` uses
/// internally (stabilized directly on `BuildHasher` in later toolchains as
/// `hash_one`; spelled out here so this crate doesn't assume an MSRV that
/// has it).
pub(crate) fn hash_one<S, Q>(build_hasher: &S, key: &Q) -> u64
where
    S: BuildHasher,
    Q: Hash + ?Sized,
{
    let mut hasher = build_hasher.build_hasher();
    key.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_deterministic() {
        let hasher = RandomState { seed: 42 };
        assert_eq!(hash_one(&hasher, &"hello"), hash_one(&hasher, &"hello"));
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = RandomState { seed: 1 };
        let b = RandomState { seed: 2 };
        assert_ne!(hash_one(&a, &"hello"), hash_one(&b, &"hello"));
    }
}
