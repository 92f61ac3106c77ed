//! Error types for schema registration and query compilation.
//!
//! This module declares focused error types used across the registration and
//! query pipeline. Each error carries enough context to make failures
//! actionable: the offending archetype and component identifiers are always
//! included.
//!
//! ## Policy
//! The original design favored permissive, allocation-driven growth over
//! validation; this implementation upgrades the silent failure modes to
//! checked errors, all raised during one-time setup work:
//!
//! * Referencing an unregistered component while registering an archetype or
//!   compiling a query is an error, not a silent zero-layout substitution.
//! * Duplicate components within one archetype's list are an error, not an
//!   undefined result.
//! * Re-registering an existing component or archetype identifier is **not**
//!   an error: the entry is overwritten and a warning is logged.
//!
//! Query requests are validated once up front, so a failed
//! [`make_query`](crate::state::manager::StateManager::make_query) call never
//! emits a partial run into the query buffer.

use thiserror::Error;

use crate::state::types::{ArchetypeID, ComponentID};

/// Errors raised while registering an archetype.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The archetype's component list references an identifier that was never
    /// registered with the component registry.
    #[error("archetype {archetype} references unregistered component {component}")]
    UnknownComponent {
        /// Archetype being registered.
        archetype: ArchetypeID,

        /// Offending component identifier.
        component: ComponentID,
    },

    /// The archetype's component list names the same component twice.
    #[error("archetype {archetype} lists component {component} more than once")]
    DuplicateComponent {
        /// Archetype being registered.
        archetype: ArchetypeID,

        /// Component that appeared more than once.
        component: ComponentID,
    },

    /// The archetype's component list is empty.
    #[error("archetype {archetype} has an empty component list")]
    EmptyArchetype {
        /// Archetype being registered.
        archetype: ArchetypeID,
    },
}

/// Errors raised while compiling a query.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The request listed no components.
    #[error("query requested no components")]
    EmptyRequest,

    /// The request references an identifier that was never registered.
    #[error("query references unregistered component {component}")]
    UnknownComponent {
        /// Offending component identifier.
        component: ComponentID,
    },
}
