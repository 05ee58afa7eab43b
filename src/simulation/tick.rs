//! Frame driver - advances the whole arena by one delta time
//!
//! One tick per rendered frame, fully synchronous. The tick snapshots
//! combatant positions first, fans out to every entity's components
//! through the registry, then resolves queued damage and expires
//! transient effects. Damage is queued rather than applied mid-fanout so
//! resolution order is the registry's deterministic insertion order, not
//! whatever entity happened to update first.

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, TeamId};
use crate::simulation::events::SimulationEvent;
use crate::simulation::world::GameWorld;
use glam::Vec3;

/// Read-only view of one living-or-dead character, snapshotted at the
/// start of the tick for targeting scans
#[derive(Debug, Clone, Copy)]
pub struct CombatantView {
    pub id: EntityId,
    pub team: TeamId,
    pub position: Vec3,
    pub alive: bool,
}

/// Damage decided during the fan-out, applied after it
#[derive(Debug, Clone, Copy)]
pub struct PendingDamage {
    pub source: EntityId,
    pub target: EntityId,
    pub amount: f32,
}

/// Per-tick shared state handed to every component update
pub struct TickContext<'a> {
    pub config: &'a SimulationConfig,
    /// Game clock in seconds, already advanced to this tick
    pub game_time: f64,
    pub combatants: &'a [CombatantView],
    pub damage_queue: Vec<PendingDamage>,
    pub events: Vec<SimulationEvent>,
}

/// Advance the world by `dt` seconds and return everything that happened
pub fn run_simulation_tick(world: &mut GameWorld, dt: f32) -> Vec<SimulationEvent> {
    world.clock += f64::from(dt);

    let combatants: Vec<CombatantView> = world
        .registry
        .iter()
        .filter_map(|entity| {
            entity.character().map(|chr| CombatantView {
                id: entity.id(),
                team: chr.team,
                position: chr.position,
                alive: !chr.is_dead(),
            })
        })
        .collect();

    let mut ctx = TickContext {
        config: &world.config,
        game_time: world.clock,
        combatants: &combatants,
        damage_queue: Vec::new(),
        // Events emitted by command wrappers since the last tick come first
        events: std::mem::take(&mut world.outbox),
    };

    world.registry.update(dt, &mut ctx);

    let pending = std::mem::take(&mut ctx.damage_queue);
    for damage in pending {
        crate::simulation::world::apply_damage(
            &mut world.registry,
            &mut ctx.events,
            damage.source,
            damage.target,
            damage.amount,
        );
    }

    if dt > 0.0 {
        for effect in &mut world.transients {
            effect.remaining -= dt;
        }
        let mut expired = Vec::new();
        world.transients.retain(|effect| {
            if effect.remaining <= 0.0 {
                expired.push(effect.position);
                false
            } else {
                true
            }
        });
        for position in expired {
            ctx.events.push(SimulationEvent::EffectExpired { position });
        }
    }

    ctx.events
}
