//! # simstate
//!
//! Dynamic-schema, column-oriented entity-component storage and query
//! compilation — the data backbone of a simulation runtime.
//!
//! ## Design Goals
//! - Schema-on-write registration: components and archetypes are registered
//!   once during setup, then queried repeatedly during the run phase
//! - Columnar archetype tables for cache efficiency
//! - O(1) integer-keyed membership tests via one-shot hash maps
//! - Flat, offset-addressed query output a parallel execution engine can
//!   consume without touching registry internals
//!
//! ## Usage
//! ```
//! use simstate::prelude::*;
//!
//! let mut state = StateManager::new();
//!
//! let position = state.alloc_component_id();
//! let velocity = state.alloc_component_id();
//! state.register_component(position, 4, 8);
//! state.register_component(velocity, 4, 8);
//!
//! let moving = state.alloc_archetype_id();
//! state.register_archetype(moving, &[position, velocity]).unwrap();
//!
//! let query = state.make_query(&[velocity]).unwrap();
//! assert_eq!(query.num_matches, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod state;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use state::manager::StateManager;

pub use state::types::{
    ArchetypeID,
    ComponentID,
    IdAllocator,
    IntegerMapPair,
    TypeInfo,
};

pub use state::archetype::{
    ArchetypeRegistry,
    ArchetypeStore,
};

pub use state::component::ComponentRegistry;
pub use state::integer_map::IntegerMap;
pub use state::table::Table;

pub use state::query::{
    QueryBuffer,
    QueryMatch,
    QueryRef,
};

pub use state::error::{
    QueryError,
    RegistryError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude (Optional but recommended)
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used state-layer types.
///
/// Import with:
/// ```rust
/// use simstate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ArchetypeID,
        ComponentID,
        QueryRef,
        StateManager,
        TypeInfo,
    };
}
