//! Archetype stores and the archetype registry.
//!
//! An archetype is one fixed, ordered set of component kinds; all entities
//! sharing that set live together in one columnar [`Table`]. This module
//! provides:
//!
//! * [`ArchetypeStore`] — per-archetype state: the component membership
//!   window, the column lookup map, and the backing table,
//! * [`ArchetypeRegistry`] — the growable mapping from [`ArchetypeID`] to
//!   store, plus the flat component arena shared by all stores.
//!
//! ## Arena layout
//! Rather than each store owning its own component list, every registered
//! `(archetype, component)` pair is appended to one shared, append-only arena
//! of [`ComponentID`]s. Each store records only its `(offset, count)` window
//! into that arena, so recovering "which components does archetype X have"
//! costs no per-archetype allocation.
//!
//! ## Invariants
//! - `column_lookup.contains(c)` is true iff `c` is a member of the
//!   archetype's component set; its value is then a column index in
//!   `[0, num_components)`, unique per component within the archetype.
//! - Component order in the registration call defines column order, and both
//!   are preserved for the lifetime of the store.
//! - Arena windows never overlap and are never reclaimed.

use log::{debug, warn};

use crate::state::component::ComponentRegistry;
use crate::state::error::RegistryError;
use crate::state::integer_map::IntegerMap;
use crate::state::table::Table;
use crate::state::types::{ArchetypeID, ComponentID, IntegerMapPair};

/// Per-archetype state: membership window, column lookup, and table.
pub struct ArchetypeStore {
    component_offset: u32,
    num_components: u32,
    table: Table,
    column_lookup: IntegerMap,
}

impl ArchetypeStore {
    /// Number of components (columns) in this archetype.
    #[inline]
    pub fn num_components(&self) -> u32 {
        self.num_components
    }

    /// `(offset, count)` window into the registry's shared component arena.
    #[inline]
    pub fn component_window(&self) -> (u32, u32) {
        (self.component_offset, self.num_components)
    }

    /// Returns `true` if `component` is a member of this archetype.
    #[inline]
    pub fn contains(&self, component: ComponentID) -> bool {
        self.column_lookup.contains(component.0)
    }

    /// Column index of `component` within this archetype's table, if it is a
    /// member.
    #[inline]
    pub fn column_of(&self, component: ComponentID) -> Option<u32> {
        self.column_lookup.get(component.0)
    }

    /// The component-to-column lookup map.
    #[inline]
    pub fn column_lookup(&self) -> &IntegerMap {
        &self.column_lookup
    }

    /// The archetype's backing columnar table.
    #[inline]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable access to the backing table for entity insert/remove, which is
    /// the execution layer's responsibility.
    #[inline]
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

/// Mapping from archetype identifier to [`ArchetypeStore`].
///
/// ## Design
/// - Storage is a dense array indexed by raw archetype identifier, grown
///   eagerly to `id + 1` on registration with explicit absent gap slots, the
///   same discipline as
///   [`ComponentRegistry`](crate::state::component::ComponentRegistry).
/// - Iteration visits stores in ascending identifier order, skipping gaps;
///   this order defines query scan order.
#[derive(Default)]
pub struct ArchetypeRegistry {
    component_arena: Vec<ComponentID>,
    stores: Vec<Option<ArchetypeStore>>,
}

impl ArchetypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            component_arena: Vec::new(),
            stores: Vec::new(),
        }
    }

    /// Registers archetype `id` with the given ordered component set.
    ///
    /// ## Behavior
    /// 1. Validates the component list: non-empty, no duplicates, and every
    ///    member already registered with `components_registry`.
    /// 2. Appends the members to the shared arena and records this store's
    ///    `(offset, count)` window.
    /// 3. Builds the column lookup map from `{component → column}` pairs in
    ///    the given order, one shot.
    /// 4. Creates the backing table from the members' gathered layout
    ///    metadata.
    /// 5. Stores the result at `id`, growing the registry with absent gap
    ///    slots as needed. Re-registration warns and overwrites; the previous
    ///    store's table is dropped.
    ///
    /// ## Errors
    /// Fails atomically, before any arena or registry mutation, if validation
    /// rejects the component list.
    pub fn register(
        &mut self,
        id: ArchetypeID,
        components: &[ComponentID],
        component_registry: &ComponentRegistry,
    ) -> Result<(), RegistryError> {
        if components.is_empty() {
            return Err(RegistryError::EmptyArchetype { archetype: id });
        }

        for (i, &component) in components.iter().enumerate() {
            if !component_registry.is_registered(component) {
                return Err(RegistryError::UnknownComponent {
                    archetype: id,
                    component,
                });
            }
            if components[..i].contains(&component) {
                return Err(RegistryError::DuplicateComponent {
                    archetype: id,
                    component,
                });
            }
        }

        let offset = self.component_arena.len() as u32;

        let mut type_infos = Vec::with_capacity(components.len());
        let mut lookup_input = Vec::with_capacity(components.len());

        for (column, &component) in components.iter().enumerate() {
            self.component_arena.push(component);

            // Presence was validated above.
            let info = component_registry
                .type_info(component)
                .unwrap_or_default();
            type_infos.push(info);

            lookup_input.push(IntegerMapPair {
                key: component.0,
                value: column as u32,
            });
        }

        let store = ArchetypeStore {
            component_offset: offset,
            num_components: components.len() as u32,
            table: Table::new(&type_infos, id),
            column_lookup: IntegerMap::new(&lookup_input),
        };

        let index = id.0 as usize;
        if index >= self.stores.len() {
            self.stores.resize_with(index + 1, || None);
        }

        if self.stores[index].is_some() {
            warn!("archetype {id} re-registered; replacing previous store");
        } else {
            debug!("registered archetype {id} with {} components", components.len());
        }

        self.stores[index] = Some(store);
        Ok(())
    }

    /// Returns the store registered at `id`, if any.
    #[inline]
    pub fn get(&self, id: ArchetypeID) -> Option<&ArchetypeStore> {
        self.stores.get(id.0 as usize).and_then(|slot| slot.as_ref())
    }

    /// Mutable access to the store registered at `id`, if any.
    #[inline]
    pub fn get_mut(&mut self, id: ArchetypeID) -> Option<&mut ArchetypeStore> {
        self.stores
            .get_mut(id.0 as usize)
            .and_then(|slot| slot.as_mut())
    }

    /// Ordered component membership of `id`, resolved through the shared
    /// arena, if the archetype is registered.
    pub fn components_of(&self, id: ArchetypeID) -> Option<&[ComponentID]> {
        let store = self.get(id)?;
        let (offset, count) = store.component_window();
        Some(&self.component_arena[offset as usize..(offset + count) as usize])
    }

    /// Iterates registered stores in ascending identifier order, skipping
    /// identifier gaps.
    pub fn iter(&self) -> impl Iterator<Item = (ArchetypeID, &ArchetypeStore)> {
        self.stores.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|store| (ArchetypeID(index as u32), store))
        })
    }

    /// Number of slots in the backing array, including gaps.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.stores.len()
    }
}
