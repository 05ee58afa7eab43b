//! Combat resolution integration tests
//!
//! Covers the damage formula, death permanence, and leveling through the
//! GameWorld command surface the input layer drives.

use glam::Vec3;
use rift_arena::core::types::TeamId;
use rift_arena::simulation::events::SimulationEvent;
use rift_arena::simulation::tick::run_simulation_tick;
use rift_arena::simulation::world::GameWorld;

fn duel() -> (GameWorld, rift_arena::core::types::EntityId, rift_arena::core::types::EntityId) {
    let mut world = GameWorld::default();
    let blue = world.spawn_hero("aria", TeamId::Blue, Vec3::ZERO).unwrap();
    let red = world
        .spawn_hero("brom", TeamId::Red, Vec3::new(2.0, 0.0, 0.0))
        .unwrap();
    (world, blue, red)
}

fn health_of(world: &GameWorld, id: rift_arena::core::types::EntityId) -> f32 {
    world.registry.get(id).unwrap().character().unwrap().stats.health
}

#[test]
fn test_attack_mitigated_by_defense() {
    let (mut world, blue, red) = duel();
    {
        let chr = world.registry.get_mut(blue).unwrap().character_mut().unwrap();
        chr.stats.attack = 10.0;
    }
    {
        let chr = world.registry.get_mut(red).unwrap().character_mut().unwrap();
        chr.stats.defense = 3.0;
    }

    let damage = world.attack(blue, red);

    assert_eq!(damage, Some(7.0));
    assert_eq!(health_of(&world, red), 93.0);
}

#[test]
fn test_attack_damage_never_below_one() {
    let (mut world, blue, red) = duel();
    {
        let chr = world.registry.get_mut(blue).unwrap().character_mut().unwrap();
        chr.stats.attack = 2.0;
    }
    {
        let chr = world.registry.get_mut(red).unwrap().character_mut().unwrap();
        chr.stats.defense = 10.0;
    }

    let damage = world.attack(blue, red);

    assert_eq!(damage, Some(1.0));
    assert_eq!(health_of(&world, red), 99.0);
}

#[test]
fn test_kill_emits_hit_then_death_events() {
    let (mut world, blue, red) = duel();
    {
        let chr = world.registry.get_mut(red).unwrap().character_mut().unwrap();
        chr.stats.health = 5.0;
        chr.stats.defense = 0.0;
    }

    world.attack(blue, red);
    let events = run_simulation_tick(&mut world, 1.0 / 60.0);

    let hit = events.iter().position(|e| matches!(e, SimulationEvent::CombatHit { target, .. } if *target == red));
    let died = events.iter().position(|e| matches!(e, SimulationEvent::UnitDied { entity } if *entity == red));
    assert!(hit.is_some());
    assert!(died.is_some());
    assert!(hit < died);
}

#[test]
fn test_dead_attacker_is_refused() {
    let (mut world, blue, red) = duel();
    {
        let chr = world.registry.get_mut(blue).unwrap().character_mut().unwrap();
        chr.take_damage(10_000.0);
    }

    assert_eq!(world.attack(blue, red), None);
    assert_eq!(health_of(&world, red), 100.0);
}

#[test]
fn test_dead_target_absorbs_nothing() {
    let (mut world, blue, red) = duel();
    {
        let chr = world.registry.get_mut(red).unwrap().character_mut().unwrap();
        chr.take_damage(10_000.0);
    }

    world.attack(blue, red);

    // Health stays clamped at zero and no death event repeats
    assert_eq!(health_of(&world, red), 0.0);
    let events = run_simulation_tick(&mut world, 1.0 / 60.0);
    assert!(!events.iter().any(|e| matches!(e, SimulationEvent::UnitDied { .. })));
}

#[test]
fn test_experience_gain_levels_up_with_overflow() {
    let (mut world, blue, _) = duel();
    {
        let chr = world.registry.get_mut(blue).unwrap().character_mut().unwrap();
        chr.stats.experience = 95;
        chr.stats.health = 40.0;
    }

    let levels = world.grant_experience(blue, 10);
    assert_eq!(levels, 1);

    let chr = world.registry.get(blue).unwrap().character().unwrap();
    assert_eq!(chr.stats.level, 2);
    assert_eq!(chr.stats.experience, 5);
    assert_eq!(chr.stats.max_health, 120.0);
    assert_eq!(chr.stats.health, 120.0);

    let events = run_simulation_tick(&mut world, 1.0 / 60.0);
    assert!(events.contains(&SimulationEvent::LevelUp { entity: blue, level: 2 }));
}

#[test]
fn test_single_gain_crossing_two_thresholds() {
    let (mut world, blue, _) = duel();

    let levels = world.grant_experience(blue, 300);
    assert_eq!(levels, 2);

    let chr = world.registry.get(blue).unwrap().character().unwrap();
    assert_eq!(chr.stats.level, 3);
    assert_eq!(chr.stats.experience, 0);

    let events = run_simulation_tick(&mut world, 1.0 / 60.0);
    assert!(events.contains(&SimulationEvent::LevelUp { entity: blue, level: 2 }));
    assert!(events.contains(&SimulationEvent::LevelUp { entity: blue, level: 3 }));
}

#[test]
fn test_dead_hero_gains_no_experience() {
    let (mut world, blue, _) = duel();
    {
        let chr = world.registry.get_mut(blue).unwrap().character_mut().unwrap();
        chr.take_damage(10_000.0);
    }

    assert_eq!(world.grant_experience(blue, 500), 0);
    let chr = world.registry.get(blue).unwrap().character().unwrap();
    assert_eq!(chr.stats.level, 1);
}
