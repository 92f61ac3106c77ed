//! Fixed-population integer hash map.
//!
//! This module provides [`IntegerMap`], a hash map from small non-negative
//! `u32` keys to `u32` values that is **built once from its complete key set
//! and immutable thereafter**. Archetype stores use it as the column lookup:
//! component identifier in, column index out.
//!
//! ## Design
//! - Open addressing with linear probing over a power-of-two slot array.
//! - Load factor is bounded at one half, so probe sequences always terminate
//!   at an empty slot.
//! - No insertion, removal, or rehashing after construction.
//!
//! ## Determinism
//! Construction is deterministic given the same input sequence, which keeps
//! query output reproducible across runs. Internal slot order is unrelated to
//! input order.
//!
//! ## Lookup discipline
//! Two accessors are provided, following the checked/unchecked split:
//! [`get`](IntegerMap::get) returns an explicit `Option` and is the default;
//! [`get_unchecked`](IntegerMap::get_unchecked) skips the presence check and
//! is reserved for paths already proven safe by a prior
//! [`contains`](IntegerMap::contains) call.

use crate::state::types::IntegerMapPair;

/// Key value reserved to mark an empty slot.
///
/// Keys passed at construction must be strictly below this value. Component
/// identifiers are far below it in practice.
const EMPTY_KEY: u32 = u32::MAX;

/// Immutable hash map from `u32` keys to `u32` values, built in one shot.
///
/// ## Invariants
/// - `contains(k)` is true iff `k` appeared in the construction input.
/// - For present keys, `get(k)` returns the value paired with `k` at
///   construction.
/// - The slot array length is a power of two and at least twice the
///   population, guaranteeing an empty slot terminates every probe.
pub struct IntegerMap {
    slots: Box<[IntegerMapPair]>,
    mask: u32,
    len: usize,
}

impl IntegerMap {
    /// Builds the map from its complete, final set of `(key, value)` pairs.
    ///
    /// ## Preconditions
    /// - All keys are distinct (checked in debug builds only).
    /// - All keys are strictly below `u32::MAX`.
    ///
    /// ## Panics
    /// Panics if a key equals the reserved empty-slot marker.
    pub fn new(pairs: &[IntegerMapPair]) -> Self {
        let capacity = (pairs.len() * 2).next_power_of_two().max(2);
        let mask = capacity as u32 - 1;

        let mut slots = vec![
            IntegerMapPair {
                key: EMPTY_KEY,
                value: 0,
            };
            capacity
        ]
        .into_boxed_slice();

        for pair in pairs {
            assert!(pair.key != EMPTY_KEY, "key {} is reserved", pair.key);

            let mut slot = hash(pair.key) & mask;
            loop {
                let occupant = &mut slots[slot as usize];
                if occupant.key == EMPTY_KEY {
                    *occupant = *pair;
                    break;
                }
                debug_assert!(
                    occupant.key != pair.key,
                    "duplicate key {} in construction input",
                    pair.key
                );
                slot = (slot + 1) & mask;
            }
        }

        Self {
            slots,
            mask,
            len: pairs.len(),
        }
    }

    /// Returns `true` if `key` was present in the construction input.
    #[inline]
    pub fn contains(&self, key: u32) -> bool {
        self.find(key).is_some()
    }

    /// Checked lookup: the value paired with `key`, or `None` if absent.
    #[inline]
    pub fn get(&self, key: u32) -> Option<u32> {
        self.find(key).map(|slot| self.slots[slot].value)
    }

    /// Unchecked lookup for keys already proven present.
    ///
    /// ## Behavior
    /// For a present `key`, returns its paired value. For an absent key the
    /// result is an arbitrary slot value; no memory unsafety occurs. Presence
    /// is asserted in debug builds.
    #[inline]
    pub fn get_unchecked(&self, key: u32) -> u32 {
        debug_assert!(self.contains(key), "key {key} not present");

        let mut slot = hash(key) & self.mask;
        loop {
            let occupant = &self.slots[slot as usize];
            if occupant.key == key || occupant.key == EMPTY_KEY {
                return occupant.value;
            }
            slot = (slot + 1) & self.mask;
        }
    }

    /// Number of keys in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map was built from an empty pair set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Probes for `key`, returning its slot index if present.
    #[inline]
    fn find(&self, key: u32) -> Option<usize> {
        let mut slot = hash(key) & self.mask;
        loop {
            let occupant = &self.slots[slot as usize];
            if occupant.key == key {
                return Some(slot as usize);
            }
            if occupant.key == EMPTY_KEY {
                return None;
            }
            slot = (slot + 1) & self.mask;
        }
    }
}

/// Multiplicative hash spreading small sequential keys across the table.
#[inline]
fn hash(key: u32) -> u32 {
    key.wrapping_mul(0x9E37_79B9)
}
