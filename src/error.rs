//! This crate's entire error surface.
//!
//! Every logical miss (`get`, `remove`, `contains_key` of an absent key) is
//! an `Option`, not an error — see `spec.md` §7. The only thing worth a
//! named error is the one failure mode growth can hit without the process
//! simply aborting: doubling capacity overflowing `usize`.

use thiserror::Error;

/// The one way this crate's public API can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Doubling the table's current capacity would overflow `usize`.
    #[error("hash table capacity overflow")]
    CapacityOverflow,
}
