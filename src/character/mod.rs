//! Character simulation - movement intent, combat resolution, leveling
//!
//! The authoritative gameplay state is the movement intent and the death
//! flag. The animation state is a display hint for the rendering layer
//! and never drives gameplay decisions.

pub mod stats;

pub use stats::CharacterStats;

use crate::core::config::SimulationConfig;
use crate::core::types::{AnimationState, TeamId};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Authoritative record of whether/where a character is trying to move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementIntent {
    None,
    MovingTo(Vec3),
}

/// A player-driven hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub team: TeamId,
    pub stats: CharacterStats,
    pub position: Vec3,
    /// Unit direction the renderer should face the model toward
    pub facing: Vec3,
    movement: MovementIntent,
    animation: AnimationState,
    /// Game-time countdown holding the Attacking hint before it returns
    /// to Idle
    attack_anim_left: f32,
    dead: bool,
}

impl Character {
    pub fn new(name: impl Into<String>, team: TeamId, position: Vec3) -> Self {
        Self {
            name: name.into(),
            team,
            stats: CharacterStats::default(),
            position,
            facing: Vec3::Z,
            movement: MovementIntent::None,
            animation: AnimationState::Idle,
            attack_anim_left: 0.0,
            dead: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn movement(&self) -> MovementIntent {
        self.movement
    }

    /// Current animation hint for the rendering layer
    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    fn request_animation(&mut self, state: AnimationState) {
        // The renderer deduplicates; we just keep the latest request
        self.animation = state;
    }

    /// Set the movement intent toward a world point. No-op when dead.
    pub fn move_to(&mut self, point: Vec3) {
        if self.dead {
            return;
        }
        self.movement = MovementIntent::MovingTo(point);
        self.request_animation(AnimationState::Walking);
    }

    /// Clear the movement intent without forcing an animation change,
    /// so an external movement source can keep driving the hint.
    pub fn stop_movement(&mut self) {
        self.movement = MovementIntent::None;
    }

    /// Accept the terrain collaborator's vertical placement. Movement
    /// itself is planar; the supplied height is authoritative.
    pub fn set_terrain_height(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Advance this character by `dt` seconds of game time
    pub fn update(&mut self, dt: f32, config: &SimulationConfig) {
        if self.dead || dt <= 0.0 {
            return;
        }

        match self.movement {
            MovementIntent::MovingTo(target) => {
                // Planar movement; vertical placement is owned by the
                // terrain-snapping collaborator.
                let mut direction = target - self.position;
                direction.y = 0.0;
                let distance = direction.length();

                if distance < config.move_stop_epsilon {
                    self.movement = MovementIntent::None;
                    self.request_animation(AnimationState::Idle);
                } else {
                    let direction = direction / distance;
                    self.position += direction * self.stats.speed * dt;
                    self.facing = direction;
                    if self.animation != AnimationState::Walking {
                        self.request_animation(AnimationState::Walking);
                    }
                }
            }
            MovementIntent::None => {
                if self.attack_anim_left <= 0.0 && self.animation != AnimationState::Idle {
                    self.request_animation(AnimationState::Idle);
                }
            }
        }

        if self.attack_anim_left > 0.0 {
            self.attack_anim_left -= dt;
            if self.attack_anim_left <= 0.0 {
                self.attack_anim_left = 0.0;
                self.request_animation(AnimationState::Idle);
            }
        }

        self.stats
            .restore_mana(self.stats.max_mana * config.mana_regen_fraction * dt);
    }

    /// Damage this character deals against the given defense: attack
    /// minus defense, floored at 1 so armor never grants full immunity
    pub fn attack_damage_against(&self, defense: f32) -> f32 {
        (self.stats.attack - defense).max(1.0)
    }

    /// Hold the Attacking hint for the configured presentation window
    pub fn play_attack_animation(&mut self, config: &SimulationConfig) {
        self.request_animation(AnimationState::Attacking);
        self.attack_anim_left = config.attack_anim_seconds;
    }

    /// Melee/basic attack against another character. Returns the damage
    /// dealt, or None when the attacker is dead.
    pub fn attack(&mut self, target: &mut Character, config: &SimulationConfig) -> Option<f32> {
        if self.dead {
            return None;
        }

        self.play_attack_animation(config);
        let damage = self.attack_damage_against(target.stats.defense);
        target.take_damage(damage);
        Some(damage)
    }

    /// Apply raw damage. No-op when already dead; reaching zero health
    /// sets the death flag permanently.
    pub fn take_damage(&mut self, amount: f32) {
        if self.dead {
            return;
        }
        if self.stats.take_damage(amount) {
            self.dead = true;
            self.movement = MovementIntent::None;
            self.request_animation(AnimationState::Dying);
            tracing::debug!(name = %self.name, "character died");
        }
    }

    /// Clamp-add health. No-op when dead.
    pub fn heal(&mut self, amount: f32) {
        if self.dead {
            return;
        }
        self.stats.heal(amount);
    }

    /// Clamp-add mana. No-op when dead.
    pub fn restore_mana(&mut self, amount: f32) {
        if self.dead {
            return;
        }
        self.stats.restore_mana(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(name: &str) -> Character {
        Character::new(name, TeamId::Blue, Vec3::ZERO)
    }

    #[test]
    fn test_move_to_sets_intent_and_walking_hint() {
        let mut chr = hero("aria");
        chr.move_to(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(chr.movement(), MovementIntent::MovingTo(Vec3::new(10.0, 0.0, 0.0)));
        assert_eq!(chr.animation(), AnimationState::Walking);
    }

    #[test]
    fn test_update_advances_toward_target() {
        let config = SimulationConfig::default();
        let mut chr = hero("aria");
        chr.move_to(Vec3::new(10.0, 0.0, 0.0));

        chr.update(1.0, &config);

        // Default speed is 5.0 units/sec
        assert!((chr.position.x - 5.0).abs() < 1e-5);
        assert_eq!(chr.movement(), MovementIntent::MovingTo(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_movement_ignores_vertical_axis() {
        let config = SimulationConfig::default();
        let mut chr = hero("aria");
        chr.move_to(Vec3::new(0.0, 50.0, 10.0));

        chr.update(1.0, &config);

        assert_eq!(chr.position.y, 0.0);
        assert!(chr.position.z > 0.0);
    }

    #[test]
    fn test_arrival_inside_epsilon_clears_intent_without_moving() {
        let config = SimulationConfig::default();
        let mut chr = hero("aria");
        chr.move_to(Vec3::new(0.05, 0.0, 0.0));

        chr.update(0.016, &config);

        assert_eq!(chr.movement(), MovementIntent::None);
        assert_eq!(chr.position.x, 0.0);
        assert_eq!(chr.animation(), AnimationState::Idle);
    }

    #[test]
    fn test_stop_movement_leaves_animation_alone() {
        let mut chr = hero("aria");
        chr.move_to(Vec3::new(10.0, 0.0, 0.0));
        chr.stop_movement();
        assert_eq!(chr.movement(), MovementIntent::None);
        assert_eq!(chr.animation(), AnimationState::Walking);
    }

    #[test]
    fn test_update_zero_dt_changes_nothing() {
        let config = SimulationConfig::default();
        let mut chr = hero("aria");
        chr.stats.mana = 10.0;
        chr.move_to(Vec3::new(0.05, 0.0, 0.0));

        chr.update(0.0, &config);

        // Even an intent inside the stop epsilon stays put at dt == 0
        assert_eq!(chr.movement(), MovementIntent::MovingTo(Vec3::new(0.05, 0.0, 0.0)));
        assert_eq!(chr.stats.mana, 10.0);
    }

    #[test]
    fn test_mana_regen_clamped_to_max() {
        let config = SimulationConfig::default();
        let mut chr = hero("aria");
        chr.stats.mana = chr.stats.max_mana - 0.1;

        chr.update(10.0, &config);

        assert_eq!(chr.stats.mana, chr.stats.max_mana);
    }

    #[test]
    fn test_attack_applies_mitigated_damage() {
        let config = SimulationConfig::default();
        let mut attacker = hero("aria");
        let mut target = Character::new("brom", TeamId::Red, Vec3::ZERO);
        attacker.stats.attack = 10.0;
        target.stats.defense = 3.0;

        let dealt = attacker.attack(&mut target, &config);

        assert_eq!(dealt, Some(7.0));
        assert_eq!(target.stats.health, 93.0);
        assert_eq!(attacker.animation(), AnimationState::Attacking);
    }

    #[test]
    fn test_attack_damage_floored_at_one() {
        let config = SimulationConfig::default();
        let mut attacker = hero("aria");
        let mut target = Character::new("brom", TeamId::Red, Vec3::ZERO);
        attacker.stats.attack = 2.0;
        target.stats.defense = 10.0;

        let dealt = attacker.attack(&mut target, &config);

        assert_eq!(dealt, Some(1.0));
        assert_eq!(target.stats.health, 99.0);
    }

    #[test]
    fn test_attack_hint_returns_to_idle_after_countdown() {
        let config = SimulationConfig::default();
        let mut attacker = hero("aria");
        let mut target = Character::new("brom", TeamId::Red, Vec3::ZERO);

        attacker.attack(&mut target, &config);
        assert_eq!(attacker.animation(), AnimationState::Attacking);

        attacker.update(config.attack_anim_seconds + 0.01, &config);
        assert_eq!(attacker.animation(), AnimationState::Idle);
    }

    #[test]
    fn test_death_is_permanent_and_inert() {
        let config = SimulationConfig::default();
        let mut chr = hero("aria");
        chr.take_damage(1000.0);

        assert!(chr.is_dead());
        assert_eq!(chr.animation(), AnimationState::Dying);

        chr.heal(50.0);
        chr.restore_mana(50.0);
        chr.move_to(Vec3::new(5.0, 0.0, 0.0));
        chr.update(1.0, &config);
        let mana_before = chr.stats.mana;
        chr.update(1.0, &config);

        assert_eq!(chr.stats.health, 0.0);
        assert_eq!(chr.stats.mana, mana_before);
        assert_eq!(chr.movement(), MovementIntent::None);
        assert_eq!(chr.position, Vec3::ZERO);
        assert!(chr.attack(&mut hero("other"), &config).is_none());
    }
}
