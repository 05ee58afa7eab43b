//! Immutable ability descriptors
//!
//! An `AbilityData` is pure data: it can be serialized, loaded from JSON,
//! and shared between UI tooltips and the simulation. The runtime state
//! (cooldown, active flag) lives in `ability::runtime`.

use crate::core::types::DamageKind;
use serde::{Deserialize, Serialize};

/// How an ability is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Cast once, effect resolves immediately (or runs for a duration)
    Active,
    /// Never cast; always on
    Passive,
    /// Flipped on/off by the player, effect runs while on
    Toggle,
}

/// What a cast must supply as its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRequirement {
    None,
    SingleTarget,
    Area,
    Direction,
}

/// Immutable descriptor for one ability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityData {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Cooldown in seconds
    pub cooldown: f32,
    pub mana_cost: f32,
    pub kind: AbilityKind,
    pub target: TargetRequirement,
    /// Maximum cast range in world units
    pub range: f32,
    pub damage: Option<f32>,
    pub damage_kind: Option<DamageKind>,
    /// Effect duration in seconds, for timed buffs and placements
    pub duration: Option<f32>,
}

/// Built-in hero kit descriptors
pub mod catalog {
    use super::*;

    pub fn fireball() -> AbilityData {
        AbilityData {
            id: "fireball".into(),
            name: "Fireball".into(),
            description: "Hurl a bolt of flame at a single enemy".into(),
            cooldown: 3.0,
            mana_cost: 15.0,
            kind: AbilityKind::Active,
            target: TargetRequirement::SingleTarget,
            range: 12.0,
            damage: Some(25.0),
            damage_kind: Some(DamageKind::Magical),
            duration: None,
        }
    }

    pub fn deploy_turret() -> AbilityData {
        AbilityData {
            id: "deploy_turret".into(),
            name: "Deploy Turret".into(),
            description: "Place a temporary turret at a target point".into(),
            cooldown: 12.0,
            mana_cost: 30.0,
            kind: AbilityKind::Active,
            target: TargetRequirement::Area,
            range: 8.0,
            damage: None,
            damage_kind: None,
            duration: Some(10.0),
        }
    }

    pub fn iron_skin() -> AbilityData {
        AbilityData {
            id: "iron_skin".into(),
            name: "Iron Skin".into(),
            description: "Harden your skin, boosting defense for a short time".into(),
            cooldown: 15.0,
            mana_cost: 20.0,
            kind: AbilityKind::Active,
            target: TargetRequirement::None,
            range: 0.0,
            damage: None,
            damage_kind: None,
            duration: Some(6.0),
        }
    }

    pub fn guardian_stance() -> AbilityData {
        AbilityData {
            id: "guardian_stance".into(),
            name: "Guardian Stance".into(),
            description: "Defensive stance that drains mana while held".into(),
            cooldown: 1.0,
            mana_cost: 5.0,
            kind: AbilityKind::Toggle,
            target: TargetRequirement::None,
            range: 0.0,
            damage: None,
            damage_kind: None,
            duration: None,
        }
    }
}
