//! Events generated during simulation ticks
//!
//! Returned by `run_simulation_tick` so the presentation layer (HUD,
//! floating combat text, VFX) can react without polling every entity.

use crate::core::types::EntityId;
use glam::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// Damage landed on a character or tower
    CombatHit {
        attacker: EntityId,
        target: EntityId,
        amount: f32,
    },
    /// A character's health reached zero this frame
    UnitDied { entity: EntityId },
    /// A character leveled up (once per level gained)
    LevelUp { entity: EntityId, level: u32 },
    /// An ability cast was accepted
    AbilityCast { caster: EntityId, ability: String },
    /// A tower's health reached zero this frame
    TowerDestroyed { entity: EntityId },
    /// A transient world effect (e.g. a deployed turret marker) appeared
    EffectPlaced { position: Vec3, duration: f32 },
    /// A transient world effect ran out its lifetime
    EffectExpired { position: Vec3 },
}
