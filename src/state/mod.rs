//! # State Module
//!
//! Internal schema-registry and query-compilation implementation.
//!
//! This module contains all core building blocks of the state layer:
//! - Component metadata registration
//! - Archetype stores and columnar tables
//! - Fixed-population integer maps
//! - Query compilation into flat index runs
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod types;
pub mod error;
pub mod integer_map;
pub mod component;
pub mod table;
pub mod archetype;
pub mod query;
pub mod manager;
