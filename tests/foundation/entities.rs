//! Integration tests for entity handles and component descriptors.

use tessera_foundation::{ComponentId, ComponentInfo, Entity};

// =============================================================================
// Entity Handles
// =============================================================================

#[test]
fn handle_identity_is_id_plus_generation() {
    let original = Entity::new(7, 0);
    let recycled = Entity::new(7, 1);

    // Same id, different generation: never confusable.
    assert_ne!(original, recycled);
    assert_eq!(original.id, recycled.id);
}

#[test]
fn sentinel_id_is_zero() {
    assert!(Entity::new(0, 0).is_sentinel());
    assert!(!Entity::new(1, 0).is_sentinel());
}

#[test]
fn handles_format_for_diagnostics() {
    let e = Entity::new(3, 14);
    assert_eq!(format!("{e:?}"), "Entity(3v14)");
    assert_eq!(format!("{e}"), "Entity(3)");
}

// =============================================================================
// Component Descriptors
// =============================================================================

struct Health;

#[test]
fn descriptor_identity_is_structural() {
    assert_eq!(ComponentInfo::of::<Health>(), ComponentInfo::of::<Health>());
    assert_ne!(
        ComponentInfo::named::<Health>("hp"),
        ComponentInfo::of::<Health>()
    );
}

#[test]
fn component_ids_are_plain_indices() {
    let id = ComponentId::new(12);
    assert_eq!(id.index(), 12);
}
