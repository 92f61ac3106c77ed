//! # Component Registry
//!
//! This module provides the registry mapping [`ComponentID`] values to their
//! [`TypeInfo`] memory layout metadata.
//!
//! ## Purpose
//! Archetype construction reads each member component's layout from this
//! registry to size and align the archetype's columnar table. The registry is
//! the single source of truth for "what does one value of component `c` look
//! like in memory".
//!
//! ## Design
//! - Storage is a dense array indexed by raw component identifier, grown
//!   eagerly to `id + 1` on registration.
//! - Identifier gaps (possible because identifiers are assigned by an
//!   external allocator that may serve several registries) are held as
//!   explicit absent slots rather than zero-valued defaults, so a lookup of a
//!   never-registered identifier reports absence instead of returning a
//!   bogus zero layout.
//!
//! ## Invariants
//! - `type_info(id)` returns `Some` iff `id` was registered.
//! - Re-registration overwrites the previous entry and logs a warning; no
//!   accumulation occurs.

use log::{debug, warn};

use crate::state::types::{ComponentID, TypeInfo};

/// Mapping from component identifier to memory layout metadata.
///
/// Grows as new identifiers are registered; never shrinks. Registration
/// happens during the setup phase, before any archetype that uses the
/// component is built.
#[derive(Default)]
pub struct ComponentRegistry {
    infos: Vec<Option<TypeInfo>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { infos: Vec::new() }
    }

    /// Registers layout metadata for `id`.
    ///
    /// ## Behavior
    /// - Grows the backing array to `id + 1`, filling any new gap slots with
    ///   explicit absent entries.
    /// - Overwrites any prior entry at `id` unconditionally; a warning is
    ///   logged when this happens.
    ///
    /// ## Preconditions
    /// `info.alignment` is expected to be a power of two; values are recorded
    /// verbatim.
    pub fn register(&mut self, id: ComponentID, info: TypeInfo) {
        let index = id.0 as usize;
        if index >= self.infos.len() {
            self.infos.resize(index + 1, None);
        }

        if self.infos[index].is_some() {
            warn!("component {id} re-registered; overwriting previous layout");
        } else {
            debug!(
                "registered component {id} (alignment {}, {} bytes)",
                info.alignment, info.num_bytes
            );
        }

        self.infos[index] = Some(info);
    }

    /// Returns the layout metadata registered for `id`, if any.
    #[inline]
    pub fn type_info(&self, id: ComponentID) -> Option<TypeInfo> {
        self.infos.get(id.0 as usize).copied().flatten()
    }

    /// Returns `true` if `id` has been registered.
    #[inline]
    pub fn is_registered(&self, id: ComponentID) -> bool {
        self.type_info(id).is_some()
    }

    /// Number of slots in the backing array, including gaps.
    ///
    /// ## Notes
    /// This is one past the highest registered identifier, not a count of
    /// registered components.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.infos.len()
    }
}
