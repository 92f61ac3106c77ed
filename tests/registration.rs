use simstate::{ArchetypeID, ComponentID, RegistryError, StateManager, TypeInfo};

#[test]
fn component_metadata_roundtrips_after_registration() {
    let mut state = StateManager::new();

    state.register_component(ComponentID(0), 4, 16);
    state.register_component(ComponentID(1), 8, 24);

    assert_eq!(
        state.component_type_info(ComponentID(0)),
        Some(TypeInfo::new(4, 16))
    );
    assert_eq!(
        state.component_type_info(ComponentID(1)),
        Some(TypeInfo::new(8, 24))
    );
}

#[test]
fn component_reregistration_overwrites_without_accumulation() {
    let mut state = StateManager::new();

    state.register_component(ComponentID(2), 4, 4);
    state.register_component(ComponentID(2), 16, 64);

    assert_eq!(
        state.component_type_info(ComponentID(2)),
        Some(TypeInfo::new(16, 64))
    );
}

#[test]
fn unregistered_component_reports_absent_not_zero_layout() {
    let mut state = StateManager::new();

    // Registering id 5 grows the backing array past ids 0..5; those gap
    // slots must read as absent, not as a default zero layout.
    state.register_component(ComponentID(5), 4, 4);

    for gap in 0..5 {
        assert_eq!(state.component_type_info(ComponentID(gap)), None);
    }
    assert_eq!(state.component_type_info(ComponentID(1_000)), None);
}

#[test]
fn id_allocators_are_monotonic_and_independent() {
    let mut state = StateManager::new();

    assert_eq!(state.alloc_component_id(), ComponentID(0));
    assert_eq!(state.alloc_component_id(), ComponentID(1));
    assert_eq!(state.alloc_archetype_id(), ArchetypeID(0));
    assert_eq!(state.alloc_component_id(), ComponentID(2));
    assert_eq!(state.alloc_archetype_id(), ArchetypeID(1));
}

fn setup_components(state: &mut StateManager, count: u32) -> Vec<ComponentID> {
    (0..count)
        .map(|_| {
            let id = state.alloc_component_id();
            state.register_component(id, 4, 4);
            id
        })
        .collect()
}

#[test]
fn column_order_follows_registration_order() {
    let mut state = StateManager::new();
    let components = setup_components(&mut state, 5);

    // Register in an order unrelated to identifier order.
    let shuffled = [
        components[3],
        components[0],
        components[4],
        components[1],
        components[2],
    ];

    let id = state.alloc_archetype_id();
    state.register_archetype(id, &shuffled).unwrap();

    let store = state.archetype(id).unwrap();
    assert_eq!(store.num_components(), 5);

    for (column, &component) in shuffled.iter().enumerate() {
        assert_eq!(store.column_of(component), Some(column as u32));
    }
}

#[test]
fn column_lookup_membership_matches_component_set() {
    let mut state = StateManager::new();
    let components = setup_components(&mut state, 6);

    let members = &components[..3];
    let id = state.alloc_archetype_id();
    state.register_archetype(id, members).unwrap();

    let store = state.archetype(id).unwrap();
    for &component in members {
        assert!(store.contains(component));
    }
    for &component in &components[3..] {
        assert!(!store.contains(component));
    }

    // Column indices form a permutation of [0, len).
    let mut columns: Vec<u32> = members
        .iter()
        .map(|&c| store.column_of(c).unwrap())
        .collect();
    columns.sort_unstable();
    assert_eq!(columns, vec![0, 1, 2]);
}

#[test]
fn archetype_components_resolve_through_shared_arena() {
    let mut state = StateManager::new();
    let components = setup_components(&mut state, 4);

    let first = state.alloc_archetype_id();
    let second = state.alloc_archetype_id();
    state.register_archetype(first, &components[..2]).unwrap();
    state
        .register_archetype(second, &[components[2], components[0], components[3]])
        .unwrap();

    assert_eq!(state.archetype_components(first).unwrap(), &components[..2]);
    assert_eq!(
        state.archetype_components(second).unwrap(),
        &[components[2], components[0], components[3]]
    );
}

#[test]
fn archetype_table_has_one_column_per_component() {
    let mut state = StateManager::new();

    let a = state.alloc_component_id();
    let b = state.alloc_component_id();
    state.register_component(a, 4, 12);
    state.register_component(b, 8, 10);

    let id = state.alloc_archetype_id();
    state.register_archetype(id, &[a, b]).unwrap();

    let table = state.archetype(id).unwrap().table();
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.num_rows(), 0);

    // Row stride is the component size rounded up to its alignment.
    assert_eq!(table.column_stride(0), 12);
    assert_eq!(table.column_stride(1), 16);
}

#[test]
fn table_rows_insert_and_swap_remove() {
    let mut state = StateManager::new();

    let a = state.alloc_component_id();
    state.register_component(a, 4, 4);

    let id = state.alloc_archetype_id();
    state.register_archetype(id, &[a]).unwrap();

    let table = state.archetype_mut(id).unwrap().table_mut();
    for i in 0..4u8 {
        let row = table.add_row();
        assert_eq!(row, i as u32);
        table.column_bytes_mut(0)[row as usize * 4] = i + 1;
    }
    assert_eq!(table.num_rows(), 4);

    // Removing row 1 swaps the last row (marker 4) into its slot.
    assert_eq!(table.remove_row(1), Some(3));
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.column_bytes(0)[4], 4);

    // Removing the final row moves nothing.
    assert_eq!(table.remove_row(2), None);
    assert_eq!(table.num_rows(), 2);
}

#[test]
fn registering_archetype_with_unknown_component_fails() {
    let mut state = StateManager::new();
    let known = state.alloc_component_id();
    state.register_component(known, 4, 4);

    let id = state.alloc_archetype_id();
    let unknown = ComponentID(42);

    assert_eq!(
        state.register_archetype(id, &[known, unknown]),
        Err(RegistryError::UnknownComponent {
            archetype: id,
            component: unknown,
        })
    );
    assert!(state.archetype(id).is_none());
}

#[test]
fn registering_archetype_with_duplicate_component_fails() {
    let mut state = StateManager::new();
    let components = setup_components(&mut state, 2);

    let id = state.alloc_archetype_id();
    assert_eq!(
        state.register_archetype(id, &[components[0], components[1], components[0]]),
        Err(RegistryError::DuplicateComponent {
            archetype: id,
            component: components[0],
        })
    );
    assert!(state.archetype(id).is_none());
}

#[test]
fn registering_empty_archetype_fails() {
    let mut state = StateManager::new();

    let id = state.alloc_archetype_id();
    assert_eq!(
        state.register_archetype(id, &[]),
        Err(RegistryError::EmptyArchetype { archetype: id })
    );
}

#[test]
fn archetype_reregistration_replaces_previous_store() {
    let mut state = StateManager::new();
    let components = setup_components(&mut state, 3);

    let id = state.alloc_archetype_id();
    state.register_archetype(id, &components[..2]).unwrap();
    state.register_archetype(id, &[components[2]]).unwrap();

    let store = state.archetype(id).unwrap();
    assert_eq!(store.num_components(), 1);
    assert!(store.contains(components[2]));
    assert!(!store.contains(components[0]));
    assert_eq!(state.archetype_components(id).unwrap(), &[components[2]]);
}

#[test]
fn archetype_id_gaps_are_absent_slots() {
    let mut state = StateManager::new();
    let components = setup_components(&mut state, 1);

    // Explicit identifier leaves gaps at 0..7.
    state
        .register_archetype(ArchetypeID(7), &components)
        .unwrap();

    for gap in 0..7 {
        assert!(state.archetype(ArchetypeID(gap)).is_none());
    }
    assert!(state.archetype(ArchetypeID(7)).is_some());
}
