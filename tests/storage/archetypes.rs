//! Integration tests for archetypes and the archetype directory.

use tessera_foundation::{ComponentId, Entity, Mask256};
use tessera_storage::{ArchetypeDirectory, ArchetypeId};

fn ids(indices: &[u32]) -> Vec<ComponentId> {
    indices.iter().map(|i| ComponentId::new(*i)).collect()
}

// =============================================================================
// Swap-Remove Semantics
// =============================================================================

#[test]
fn removing_the_last_row_reports_no_swap() {
    let mut directory = ArchetypeDirectory::default();
    let archetype = directory.get_mut(ArchetypeId::EMPTY);
    archetype.add(Entity::new(1, 0));
    archetype.add(Entity::new(2, 0));

    assert!(!archetype.remove(1));
    assert_eq!(archetype.count(), 1);
}

#[test]
fn removing_an_inner_row_swaps_the_last_entity_in() {
    let mut directory = ArchetypeDirectory::default();
    let archetype = directory.get_mut(ArchetypeId::EMPTY);
    for id in 1..=4 {
        archetype.add(Entity::new(id, 0));
    }

    assert!(archetype.remove(1));

    // The formerly-last entity took over the vacated row.
    assert_eq!(archetype.entity(1), Entity::new(4, 0));
    assert_eq!(archetype.count(), 3);
}

// =============================================================================
// Directory Resolution
// =============================================================================

#[test]
fn the_empty_archetype_exists_up_front() {
    let directory = ArchetypeDirectory::default();
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.lookup(&Mask256::new()), Some(ArchetypeId::EMPTY));
}

#[test]
fn equal_masks_resolve_to_one_archetype() {
    let mut directory = ArchetypeDirectory::default();
    let layout = ids(&[3, 7]);
    let mask = Mask256::from_ids(&layout);

    let a = directory.resolve(mask, &layout);
    let b = directory.resolve(mask, &layout);

    assert_eq!(a, b);
    assert_eq!(directory.len(), 2);
}

#[test]
fn different_masks_resolve_to_different_archetypes() {
    let mut directory = ArchetypeDirectory::default();

    let a = directory.resolve(Mask256::from_ids(&ids(&[1])), &ids(&[1]));
    let b = directory.resolve(Mask256::from_ids(&ids(&[1, 2])), &ids(&[1, 2]));

    assert_ne!(a, b);
    assert_eq!(directory.len(), 3);
}

#[test]
fn archetypes_keep_their_layout_for_diagnostics() {
    let mut directory = ArchetypeDirectory::default();
    let layout = ids(&[2, 5, 9]);
    let id = directory.resolve(Mask256::from_ids(&layout), &layout);

    let archetype = directory.get(id);
    assert_eq!(archetype.layout(), layout.as_slice());
    assert_eq!(archetype.mask(), &Mask256::from_ids(&layout));
    assert!(archetype.is_empty());
}
