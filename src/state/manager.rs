//! State manager: the owning entry point of the state layer.
//!
//! [`StateManager`] ties the pieces together: it owns the component registry,
//! the archetype registry with its shared component arena, the query buffer,
//! and the two identifier allocators. Setup code registers components, then
//! archetypes, then issues queries; the execution engine later decodes query
//! runs out of the buffer by offset.
//!
//! ## Concurrency model
//!
//! The manager is single-threaded and synchronous: every operation runs to
//! completion on the calling thread with no internal locking. All mutation
//! goes through `&mut self`, so the setup-then-read-only discipline the
//! design assumes is enforced structurally by the borrow checker — downstream
//! parallel consumers can share `&StateManager` freely once registration and
//! query compilation are done.
//!
//! ## Lifecycle
//!
//! Two phases, in caller-enforced order:
//!
//! 1. **Registration** — components first, then archetypes that reference
//!    them. There is no removal or migration; schemas are fixed once
//!    registered.
//! 2. **Query** — any number of [`make_query`](StateManager::make_query)
//!    calls. Querying before any archetype is registered is legal and yields
//!    zero matches.

use crate::state::archetype::{ArchetypeRegistry, ArchetypeStore};
use crate::state::component::ComponentRegistry;
use crate::state::error::{QueryError, RegistryError};
use crate::state::query::{self, QueryBuffer, QueryMatch, QueryRef};
use crate::state::types::{ArchetypeID, ComponentID, IdAllocator, TypeInfo};

/// Owner of all schema-registry and query-compilation state.
#[derive(Default)]
pub struct StateManager {
    components: ComponentRegistry,
    archetypes: ArchetypeRegistry,
    query_buffer: QueryBuffer,
    component_ids: IdAllocator,
    archetype_ids: IdAllocator,
}

impl StateManager {
    /// Creates an empty manager with fresh identifier allocators.
    pub fn new() -> Self {
        Self {
            components: ComponentRegistry::new(),
            archetypes: ArchetypeRegistry::new(),
            query_buffer: QueryBuffer::new(),
            component_ids: IdAllocator::new(),
            archetype_ids: IdAllocator::new(),
        }
    }

    /// Allocates the next component identifier.
    #[inline]
    pub fn alloc_component_id(&mut self) -> ComponentID {
        ComponentID(self.component_ids.allocate())
    }

    /// Allocates the next archetype identifier.
    #[inline]
    pub fn alloc_archetype_id(&mut self) -> ArchetypeID {
        ArchetypeID(self.archetype_ids.allocate())
    }

    /// Registers layout metadata for component `id`.
    ///
    /// ## Behavior
    /// Re-registration overwrites the previous layout and logs a warning; it
    /// does not affect archetypes already built from the old layout.
    ///
    /// ## Preconditions
    /// `alignment` is a power of two.
    pub fn register_component(&mut self, id: ComponentID, alignment: u32, num_bytes: u32) {
        self.components
            .register(id, TypeInfo::new(alignment, num_bytes));
    }

    /// Registers archetype `id` with the given ordered component set.
    ///
    /// Component order defines column order in the archetype's table. Every
    /// member must already be registered.
    ///
    /// ## Errors
    /// Fails atomically, mutating nothing, if the component list is empty,
    /// contains duplicates, or references an unregistered component.
    pub fn register_archetype(
        &mut self,
        id: ArchetypeID,
        components: &[ComponentID],
    ) -> Result<(), RegistryError> {
        self.archetypes.register(id, components, &self.components)
    }

    /// Compiles a query for the given requested component set.
    ///
    /// The returned [`QueryRef`] locates a freshly emitted run in the query
    /// buffer: one record of stride `1 + components.len()` per matching
    /// archetype, in ascending archetype order. The run is a snapshot; it
    /// never reflects archetypes registered after this call.
    ///
    /// ## Errors
    /// Fails atomically, emitting nothing, if the request is empty or
    /// references an unregistered component.
    pub fn make_query(&mut self, components: &[ComponentID]) -> Result<QueryRef, QueryError> {
        query::compile(
            components,
            &self.archetypes,
            &self.components,
            &mut self.query_buffer,
        )
    }

    /// Raw query-buffer element at `offset`.
    ///
    /// ## Panics
    /// Panics if `offset` is past the end of the buffer.
    #[inline]
    pub fn query_buffer_at(&self, offset: u32) -> u32 {
        self.query_buffer.at(offset)
    }

    /// Slice view over one compiled run.
    #[inline]
    pub fn query_slice(&self, query: &QueryRef) -> &[u32] {
        self.query_buffer.slice(query)
    }

    /// Decoded iterator over one compiled run's match records.
    pub fn query_matches<'a>(&'a self, query: &QueryRef) -> impl Iterator<Item = QueryMatch<'a>> {
        self.query_buffer.matches(query)
    }

    /// Layout metadata registered for `id`, if any.
    #[inline]
    pub fn component_type_info(&self, id: ComponentID) -> Option<TypeInfo> {
        self.components.type_info(id)
    }

    /// The store registered at `id`, if any.
    #[inline]
    pub fn archetype(&self, id: ArchetypeID) -> Option<&ArchetypeStore> {
        self.archetypes.get(id)
    }

    /// Mutable access to the store registered at `id`, if any.
    ///
    /// ## Notes
    /// Used by the execution layer for entity insert/remove on the backing
    /// table; schema state is immutable once registered.
    #[inline]
    pub fn archetype_mut(&mut self, id: ArchetypeID) -> Option<&mut ArchetypeStore> {
        self.archetypes.get_mut(id)
    }

    /// Ordered component membership of archetype `id`, if registered.
    #[inline]
    pub fn archetype_components(&self, id: ArchetypeID) -> Option<&[ComponentID]> {
        self.archetypes.components_of(id)
    }

    /// Iterates registered archetypes in ascending identifier order.
    pub fn archetypes(&self) -> impl Iterator<Item = (ArchetypeID, &ArchetypeStore)> {
        self.archetypes.iter()
    }
}
