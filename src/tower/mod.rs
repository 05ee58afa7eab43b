//! Tower simulation - passive defensive structures
//!
//! Towers never move. Each tick they rescan the combatant snapshot for
//! living enemies inside attack range, keep their candidate list in
//! registration order, and fire at the first live candidate on a cadence
//! of 1/attack_speed seconds of game time. A destroyed tower stays in the
//! registry as an inert wreck; the renderer switches to the destroyed
//! model off the visual state.

use crate::core::types::{EntityId, LaneId, TeamId};
use crate::simulation::tick::{PendingDamage, TickContext};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Visual state hint for the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerVisual {
    Intact,
    Destroyed,
}

/// Tower stat block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerStats {
    pub health: f32,
    pub max_health: f32,
    pub attack: f32,
    pub defense: f32,
    /// Targeting radius in world units
    pub attack_range: f32,
    /// Attacks per second
    pub attack_speed: f32,
    /// Game-clock timestamp of the last shot, in seconds
    pub last_attack_time: f64,
}

impl Default for TowerStats {
    fn default() -> Self {
        Self {
            health: 500.0,
            max_health: 500.0,
            attack: 20.0,
            defense: 10.0,
            attack_range: 10.0,
            attack_speed: 1.0,
            last_attack_time: 0.0,
        }
    }
}

/// A lane tower
#[derive(Debug, Clone)]
pub struct Tower {
    pub stats: TowerStats,
    pub team: TeamId,
    pub lane: LaneId,
    pub position: Vec3,
    /// Candidate targets in registration order
    targets: Vec<EntityId>,
    current_target: Option<EntityId>,
    destroyed: bool,
    visual: TowerVisual,
}

impl Tower {
    pub fn new(stats: TowerStats, team: TeamId, lane: LaneId, position: Vec3) -> Self {
        Self {
            stats,
            team,
            lane,
            position,
            targets: Vec::new(),
            current_target: None,
            destroyed: false,
            visual: TowerVisual::Intact,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn visual(&self) -> TowerVisual {
        self.visual
    }

    pub fn current_target(&self) -> Option<EntityId> {
        self.current_target
    }

    pub fn targets(&self) -> &[EntityId] {
        &self.targets
    }

    /// Add a candidate target. The first registration also becomes the
    /// current target.
    pub fn register_target(&mut self, target: EntityId) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
        if self.current_target.is_none() {
            self.current_target = Some(target);
        }
    }

    /// Drop a candidate. When the current target is removed, the first
    /// remaining candidate is promoted; an empty list leaves no target.
    pub fn unregister_target(&mut self, target: EntityId) {
        self.targets.retain(|t| *t != target);
        if self.current_target == Some(target) {
            self.current_target = self.targets.first().copied();
        }
    }

    fn in_range(&self, position: Vec3) -> bool {
        let mut d = position - self.position;
        d.y = 0.0;
        d.length() <= self.stats.attack_range
    }

    /// Advance the tower by one tick: rescan targets, fire on cadence
    pub fn update(&mut self, self_id: EntityId, dt: f32, ctx: &mut TickContext<'_>) {
        if self.destroyed || dt <= 0.0 {
            return;
        }

        // Drop candidates that died or left range since the last tick
        let eligible = |id: EntityId| {
            ctx.combatants
                .iter()
                .any(|v| v.id == id && v.alive && v.team != self.team && self.in_range(v.position))
        };
        let dropped: Vec<EntityId> = self
            .targets
            .iter()
            .copied()
            .filter(|id| !eligible(*id))
            .collect();
        for id in dropped {
            self.unregister_target(id);
        }

        // Register new enemies that walked into range
        for view in ctx.combatants {
            if view.alive && view.team != self.team && self.in_range(view.position) {
                self.register_target(view.id);
            }
        }

        let Some(target) = self.current_target else {
            return;
        };

        let cadence = 1.0 / f64::from(self.stats.attack_speed);
        if ctx.game_time - self.stats.last_attack_time >= cadence {
            ctx.damage_queue.push(PendingDamage {
                source: self_id,
                target,
                amount: self.stats.attack,
            });
            self.stats.last_attack_time = ctx.game_time;
            tracing::debug!(tower = %self_id, %target, "tower fired");
        }
    }

    /// Apply raw damage. Reaching zero health marks the tower destroyed;
    /// the instance persists inertly.
    pub fn take_damage(&mut self, amount: f32) {
        if self.destroyed {
            return;
        }
        self.stats.health = (self.stats.health - amount).max(0.0);
        if self.stats.health == 0.0 {
            self.destroyed = true;
            self.visual = TowerVisual::Destroyed;
            self.targets.clear();
            self.current_target = None;
        }
    }
}
