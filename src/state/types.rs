//! Core identifier and layout types shared across the state layer.
//!
//! This module defines the **fundamental types and identifiers** used
//! throughout the schema registry and query compiler. These definitions form
//! the semantic backbone of the system and are shared across component
//! registration, archetype construction, and query compilation.
//!
//! ## Design Philosophy
//!
//! The state layer is designed around:
//!
//! - **Dense, integer-keyed registries**
//! - **Stable numeric identifiers**
//! - **Column-major archetype storage**
//! - **Index-based ownership instead of pointers**
//!
//! To support these goals, this module:
//!
//! - Wraps component and archetype identifiers in small `Copy` newtypes,
//! - Describes component memory layout with a plain `(alignment, size)` pair,
//! - Provides an explicitly owned monotonic identifier allocator, so that
//!   identifier assignment is threaded through setup code rather than hidden
//!   in process-wide static state.
//!
//! ## Identifier Assignment
//!
//! Identifiers, once handed out by an [`IdAllocator`], are never reused or
//! reassigned for the allocator's lifetime. Callers may also register entries
//! under explicitly chosen identifiers; registries tolerate the resulting
//! gaps by storing explicit absent slots.

use std::fmt;

/// Identifier for a registered component kind.
///
/// ## Notes
/// Values are assigned by an [`IdAllocator`] owned by the state manager, or
/// chosen explicitly by setup code. A given value is never reassigned to a
/// different component kind within a process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentID(pub u32);

impl fmt::Display for ComponentID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a registered archetype (one fixed, ordered component set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArchetypeID(pub u32);

impl fmt::Display for ArchetypeID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Memory layout contract for one component kind.
///
/// ## Fields
/// - `alignment`: required alignment in bytes; expected to be a power of two.
/// - `num_bytes`: storage footprint of one component value in bytes.
///
/// ## Notes
/// Layout values are recorded verbatim at registration time and consumed by
/// table construction when an archetype containing the component is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeInfo {
    /// Required alignment in bytes.
    pub alignment: u32,

    /// Size of one component value in bytes.
    pub num_bytes: u32,
}

impl TypeInfo {
    /// Creates a layout descriptor from explicit alignment and size.
    #[inline]
    pub fn new(alignment: u32, num_bytes: u32) -> Self {
        Self { alignment, num_bytes }
    }
}

/// One `(key, value)` construction input to an
/// [`IntegerMap`](crate::state::integer_map::IntegerMap).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerMapPair {
    /// Small non-negative integer key.
    pub key: u32,

    /// Value associated with `key`.
    pub value: u32,
}

/// Explicitly owned monotonic identifier allocator.
///
/// ## Purpose
/// Assigns sequential `u32` identifiers for component kinds or archetypes.
/// The state manager owns two independent allocators, replacing hidden
/// process-wide counters with state threaded through setup code.
///
/// ## Invariants
/// - Values are handed out in strictly ascending order starting from zero.
/// - A value, once returned by [`allocate`](IdAllocator::allocate), is never
///   returned again by the same allocator.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Creates an allocator whose first assigned identifier is `0`.
    #[inline]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the next identifier and advances the counter.
    ///
    /// ## Panics
    /// Panics if the `u32` identifier space is exhausted.
    #[inline]
    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next = self
            .next
            .checked_add(1)
            .expect("identifier space exhausted");
        id
    }

    /// Returns the identifier the next call to `allocate` would assign.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.next
    }
}
