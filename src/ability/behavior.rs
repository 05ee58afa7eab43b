//! Ability effect behaviors - the precondition / effect / ongoing contract
//!
//! Each ability binds its descriptor to one behavior variant. The three
//! hooks replace the deep inheritance the original design would invite:
//! `precondition` gates a cast, `effect` resolves it, and `ongoing` runs
//! once per tick while the ability stays active.
//!
//! Effects never reach into the registry themselves. Anything that touches
//! another entity is returned as a `CastOutcome` for the frame driver to
//! apply, which keeps casts free of double-borrow gymnastics and makes the
//! resolution order explicit.

use crate::ability::data::AbilityData;
use crate::character::Character;
use crate::core::types::{DamageKind, EntityId};
use glam::Vec3;

/// Immutable snapshot of a cast target, taken by the driver before the
/// owner is borrowed mutably
#[derive(Debug, Clone, Copy)]
pub struct TargetView {
    pub id: EntityId,
    pub position: Vec3,
    pub alive: bool,
}

/// Resolved target handed to a cast
#[derive(Debug, Clone, Copy)]
pub enum CastTarget {
    None,
    Unit(TargetView),
    Point(Vec3),
}

/// What a successful cast asks the frame driver to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastOutcome {
    /// Effect fully resolved against the owner; nothing left to apply
    SelfEffect,
    /// Apply damage to another entity
    Damage {
        target: EntityId,
        amount: f32,
        kind: DamageKind,
    },
    /// Spawn a transient world marker that expires after `duration`
    Placement { position: Vec3, duration: f32 },
    /// Toggle flipped; new active state
    Toggled(bool),
}

/// Result of one ongoing-effect step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OngoingStatus {
    Continue,
    Finished,
}

/// Planar distance, matching how movement ignores the vertical axis
fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    let mut d = b - a;
    d.y = 0.0;
    d.length()
}

/// Closed set of effect behaviors
#[derive(Debug, Clone)]
pub enum AbilityBehavior {
    /// Apply the descriptor's damage to a living target within range
    DirectDamage,
    /// Drop a transient object at a supplied point
    Placement,
    /// Multiply the owner's defense for the descriptor's duration, then
    /// restore the recorded original value
    DefenseBuff {
        multiplier: f32,
        remaining: f32,
        original: Option<f32>,
    },
    /// Toggle stance: flat defense bonus while held, paid for with a
    /// per-second mana drain
    GuardianStance {
        defense_bonus: f32,
        mana_drain_per_sec: f32,
        applied: bool,
    },
}

impl AbilityBehavior {
    pub fn defense_buff(multiplier: f32) -> Self {
        AbilityBehavior::DefenseBuff {
            multiplier,
            remaining: 0.0,
            original: None,
        }
    }

    pub fn guardian_stance(defense_bonus: f32, mana_drain_per_sec: f32) -> Self {
        AbilityBehavior::GuardianStance {
            defense_bonus,
            mana_drain_per_sec,
            applied: false,
        }
    }

    /// May this cast proceed against the supplied target?
    pub fn precondition(&self, data: &AbilityData, owner: &Character, target: &CastTarget) -> bool {
        match self {
            AbilityBehavior::DirectDamage => match target {
                CastTarget::Unit(view) => {
                    view.alive && ground_distance(owner.position, view.position) <= data.range
                }
                _ => false,
            },
            AbilityBehavior::Placement => matches!(target, CastTarget::Point(_)),
            AbilityBehavior::DefenseBuff { .. } | AbilityBehavior::GuardianStance { .. } => true,
        }
    }

    /// Resolve the instantaneous part of a cast
    pub fn effect(
        &mut self,
        data: &AbilityData,
        owner: &mut Character,
        target: &CastTarget,
    ) -> CastOutcome {
        match self {
            AbilityBehavior::DirectDamage => {
                let CastTarget::Unit(view) = target else {
                    // Precondition already verified the target shape
                    return CastOutcome::SelfEffect;
                };
                CastOutcome::Damage {
                    target: view.id,
                    amount: data.damage.unwrap_or(0.0),
                    kind: data.damage_kind.unwrap_or(DamageKind::Magical),
                }
            }
            AbilityBehavior::Placement => {
                let CastTarget::Point(point) = target else {
                    return CastOutcome::SelfEffect;
                };
                CastOutcome::Placement {
                    position: *point,
                    duration: data.duration.unwrap_or(0.0),
                }
            }
            AbilityBehavior::DefenseBuff {
                multiplier,
                remaining,
                original,
            } => {
                *original = Some(owner.stats.defense);
                owner.stats.defense *= *multiplier;
                *remaining = data.duration.unwrap_or(0.0);
                CastOutcome::SelfEffect
            }
            AbilityBehavior::GuardianStance { .. } => {
                // Toggles skip the effect hook; everything happens in
                // `ongoing` while active.
                CastOutcome::SelfEffect
            }
        }
    }

    /// One tick of an active duration/toggle effect
    pub fn ongoing(&mut self, dt: f32, owner: &mut Character) -> OngoingStatus {
        match self {
            AbilityBehavior::DefenseBuff {
                remaining, original, ..
            } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    if let Some(value) = original.take() {
                        owner.stats.defense = value;
                    }
                    OngoingStatus::Finished
                } else {
                    OngoingStatus::Continue
                }
            }
            AbilityBehavior::GuardianStance {
                defense_bonus,
                mana_drain_per_sec,
                applied,
            } => {
                if !*applied {
                    owner.stats.defense += *defense_bonus;
                    *applied = true;
                }
                if owner.stats.spend_mana(*mana_drain_per_sec * dt) {
                    OngoingStatus::Continue
                } else {
                    // Out of mana: the stance drops itself
                    owner.stats.defense -= *defense_bonus;
                    *applied = false;
                    OngoingStatus::Finished
                }
            }
            AbilityBehavior::DirectDamage | AbilityBehavior::Placement => OngoingStatus::Finished,
        }
    }

    /// Does this behavior keep the ability active after the cast resolves?
    pub fn holds_active(&self, data: &AbilityData) -> bool {
        matches!(self, AbilityBehavior::DefenseBuff { .. }) && data.duration.is_some()
    }

    /// Undo any state the behavior applied, for forced toggle deactivation
    pub fn on_deactivate(&mut self, owner: &mut Character) {
        match self {
            AbilityBehavior::GuardianStance {
                defense_bonus,
                applied,
                ..
            } => {
                if *applied {
                    owner.stats.defense -= *defense_bonus;
                    *applied = false;
                }
            }
            AbilityBehavior::DefenseBuff { original, .. } => {
                if let Some(value) = original.take() {
                    owner.stats.defense = value;
                }
            }
            AbilityBehavior::DirectDamage | AbilityBehavior::Placement => {}
        }
    }
}
