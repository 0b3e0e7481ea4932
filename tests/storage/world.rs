//! End-to-end integration tests for the world.
//!
//! Exercises the full lifecycle: registration, creation, destruction with
//! swap fix-up, archetype migration, callbacks, config, and stats.

use std::cell::RefCell;
use std::rc::Rc;

use tessera_foundation::{ComponentInfo, ErrorKind, Mask256};
use tessera_storage::{ArchetypeId, World, WorldConfig};

struct Position;
struct Velocity;
struct Health;

// =============================================================================
// Lifecycle End-to-End
// =============================================================================

#[test]
fn create_destroy_with_swap_fix_up() {
    let mut world = World::new();

    let a = world.create_entity(&[]).unwrap();
    assert!(world.alive(a));
    assert_eq!(world.archetype(ArchetypeId::EMPTY).count(), 1);

    let b = world.create_entity(&[]).unwrap();
    assert_eq!(world.archetype(ArchetypeId::EMPTY).count(), 2);

    world.remove_entity(a).unwrap();

    assert_eq!(world.archetype(ArchetypeId::EMPTY).count(), 1);
    assert!(!world.alive(a));
    // B was swapped into A's old row; its recorded location followed.
    assert_eq!(world.locate(b).unwrap().row, 0);
}

#[test]
fn handles_stay_dead_across_id_reuse() {
    let mut world = World::new();
    let first = world.create_entity(&[]).unwrap();
    world.remove_entity(first).unwrap();

    let second = world.create_entity(&[]).unwrap();

    // Same id, new generation: the old handle is permanently dead.
    assert_eq!(second.id, first.id);
    assert!(world.alive(second));
    assert!(!world.alive(first));
    assert!(matches!(
        world.remove_entity(first).unwrap_err().kind,
        ErrorKind::DeadEntity(_)
    ));
}

#[test]
fn component_sets_group_entities_into_archetypes() {
    let mut world = World::new();
    let position = world.register_component::<Position>().unwrap();
    let velocity = world.register_component::<Velocity>().unwrap();
    let health = world.register_component::<Health>().unwrap();

    let _walker = world.create_entity(&[position]).unwrap();
    let runner = world.create_entity(&[position, velocity]).unwrap();
    let sprinter = world.create_entity(&[velocity, position]).unwrap();
    let _tank = world.create_entity(&[position, health]).unwrap();

    // [position], [position, velocity], [position, health], plus empty.
    assert_eq!(world.archetype_count(), 4);
    assert_eq!(
        world.locate(runner).unwrap().archetype,
        world.locate(sprinter).unwrap().archetype
    );

    // The shared archetype is reachable by its layout mask.
    let mask = Mask256::from_ids(&[position, velocity]);
    assert_eq!(
        world.archetype_by_mask(&mask),
        Some(world.locate(runner).unwrap().archetype)
    );
}

#[test]
fn registering_through_the_world_dedups() {
    let mut world = World::new();
    let first = world.register_component::<Position>().unwrap();
    let second = world.register_component::<Position>().unwrap();
    let by_descriptor = world.register(ComponentInfo::of::<Position>()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, by_descriptor);
    assert_eq!(world.component_count(), 1);
    assert!(
        world
            .component_info(first)
            .unwrap()
            .name()
            .ends_with("Position")
    );
}

// =============================================================================
// Migration
// =============================================================================

#[test]
fn migration_walks_an_entity_across_archetypes() {
    let mut world = World::new();
    let position = world.register_component::<Position>().unwrap();
    let velocity = world.register_component::<Velocity>().unwrap();

    let entity = world.create_entity(&[]).unwrap();
    world.add_components(entity, &[position]).unwrap();
    world.add_components(entity, &[velocity]).unwrap();
    world.remove_components(entity, &[position]).unwrap();

    let location = world.locate(entity).unwrap();
    assert_eq!(world.archetype(location.archetype).layout(), &[velocity]);
    assert!(world.alive(entity));
    assert_eq!(world.entity_count(), 1);
}

#[test]
fn migration_repairs_rows_in_the_archetype_left_behind() {
    let mut world = World::new();
    let position = world.register_component::<Position>().unwrap();
    let velocity = world.register_component::<Velocity>().unwrap();

    let a = world.create_entity(&[position]).unwrap();
    let b = world.create_entity(&[position]).unwrap();
    let c = world.create_entity(&[position]).unwrap();

    // Migrate the first row away; the last entity is swapped into row 0.
    world.add_components(a, &[velocity]).unwrap();

    for entity in [a, b, c] {
        let location = world.locate(entity).unwrap();
        assert_eq!(world.archetype(location.archetype).entity(location.row), entity);
    }
}

// =============================================================================
// Callbacks
// =============================================================================

#[test]
fn callbacks_fire_on_create_and_remove_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut world = World::new();

    let created = Rc::clone(&log);
    world.push_on_create(move |_, e| created.borrow_mut().push(format!("create {}", e.id)));
    let removed = Rc::clone(&log);
    world.push_on_remove(move |_, e| removed.borrow_mut().push(format!("remove {}", e.id)));

    let entity = world.create_entity(&[]).unwrap();
    world.remove_entity(entity).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![format!("create {}", entity.id), format!("remove {}", entity.id)]
    );
}

#[test]
fn callbacks_can_cascade_destruction() {
    // A remove callback that destroys a companion entity.
    let mut world = World::new();
    let companion = Rc::new(RefCell::new(None));

    let shared = Rc::clone(&companion);
    world.push_on_remove(move |world, entity| {
        // Release the borrow before the nested removal re-enters this
        // callback.
        let other = shared.borrow_mut().take();
        if let Some(other) = other {
            if other != entity && world.alive(other) {
                world.remove_entity(other).unwrap();
            }
        }
    });

    let a = world.create_entity(&[]).unwrap();
    let b = world.create_entity(&[]).unwrap();
    *companion.borrow_mut() = Some(b);

    world.remove_entity(a).unwrap();

    assert!(!world.alive(a));
    assert!(!world.alive(b));
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn remove_callback_reshuffling_rows_does_not_corrupt_survivors() {
    // A nested removal inside the callback swap-moves the dying entity to
    // a new row before its own teardown finishes.
    let mut world = World::new();
    let victim = Rc::new(RefCell::new(None));

    let shared = Rc::clone(&victim);
    world.push_on_remove(move |world, _| {
        let target = shared.borrow_mut().take();
        if let Some(target) = target {
            world.remove_entity(target).unwrap();
        }
    });

    let a = world.create_entity(&[]).unwrap();
    let b = world.create_entity(&[]).unwrap();
    let c = world.create_entity(&[]).unwrap();
    *victim.borrow_mut() = Some(b);

    // C is the last row; removing B from under it swaps C into B's row.
    world.remove_entity(c).unwrap();

    assert!(world.alive(a));
    assert!(!world.alive(b));
    assert!(!world.alive(c));
    assert_eq!(world.entity_count(), 1);
    assert_eq!(world.archetype(ArchetypeId::EMPTY).count(), 1);

    let loc_a = world.locate(a).unwrap();
    assert_eq!(world.archetype(loc_a.archetype).entity(loc_a.row), a);
}

// =============================================================================
// Config and Stats
// =============================================================================

#[test]
fn config_controls_the_registry_ceiling() {
    let config = WorldConfig::new().with_max_components(1);
    let mut world = World::with_config(&config);

    world.register_component::<Position>().unwrap();
    let result = world.register_component::<Velocity>();

    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::RegistryFull { capacity: 1 }
    ));
}

#[test]
fn stats_snapshot_the_pool() {
    let config = WorldConfig::new().with_entity_pool_capacity(8);
    let mut world = World::with_config(&config);

    let a = world.create_entity(&[]).unwrap();
    let _b = world.create_entity(&[]).unwrap();
    let _c = world.create_entity(&[]).unwrap();
    world.remove_entity(a).unwrap();

    let stats = world.stats();
    assert_eq!(stats.entities.used, 2);
    assert_eq!(stats.entities.total, 3);
    assert_eq!(stats.entities.recycled, 1);
    assert!(stats.entities.capacity >= 8);
}
