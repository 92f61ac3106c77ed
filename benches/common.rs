#![allow(dead_code)]

use simstate::{ComponentID, StateManager};

pub const COMPONENTS: u32 = 64;
pub const ARCHETYPES_SMALL: u32 = 100;
pub const ARCHETYPES_LARGE: u32 = 2_000;

/// Registers `COMPONENTS` components with small fixed layouts.
pub fn register_components(state: &mut StateManager) -> Vec<ComponentID> {
    (0..COMPONENTS)
        .map(|_| {
            let id = state.alloc_component_id();
            state.register_component(id, 4, 16);
            id
        })
        .collect()
}

/// Builds a state with `num_archetypes` archetypes of `width` components
/// each, membership rotating through the component set so archetypes overlap
/// but differ.
pub fn setup_state(num_archetypes: u32, width: usize) -> (StateManager, Vec<ComponentID>) {
    let mut state = StateManager::new();
    let components = register_components(&mut state);

    for i in 0..num_archetypes {
        let members: Vec<ComponentID> = (0..width)
            .map(|k| components[(i as usize + k) % components.len()])
            .collect();

        let id = state.alloc_archetype_id();
        state.register_archetype(id, &members).unwrap();
    }

    (state, components)
}
