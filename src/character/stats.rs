//! Character stat block and stat mutation rules
//!
//! Health and mana are clamped to their maxima at all times. Experience
//! thresholds and level-up bonuses come from `SimulationConfig`.

use crate::core::config::SimulationConfig;
use serde::{Deserialize, Serialize};

/// Stat block shared by every hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterStats {
    pub health: f32,
    pub max_health: f32,
    pub mana: f32,
    pub max_mana: f32,
    pub attack: f32,
    pub defense: f32,
    /// Movement speed in world units per second
    pub speed: f32,
    pub level: u32,
    pub experience: u32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        // Baseline hero at level 1
        Self {
            health: 100.0,
            max_health: 100.0,
            mana: 50.0,
            max_mana: 50.0,
            attack: 10.0,
            defense: 5.0,
            speed: 5.0,
            level: 1,
            experience: 0,
        }
    }
}

impl CharacterStats {
    /// Subtract damage, clamped at zero. Returns true if this reduced
    /// health to zero.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health = (self.health - amount).max(0.0);
        self.health == 0.0
    }

    /// Clamp-add health
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Clamp-add mana
    pub fn restore_mana(&mut self, amount: f32) {
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    /// Deduct mana if there is enough. No mutation on failure.
    pub fn spend_mana(&mut self, amount: f32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            true
        } else {
            false
        }
    }

    /// Experience needed to reach the next level
    pub fn xp_threshold(&self, config: &SimulationConfig) -> u32 {
        self.level * config.xp_per_level
    }

    /// Add experience and resolve level-ups. Returns the number of levels
    /// gained.
    ///
    /// A single gain that crosses several thresholds levels up repeatedly;
    /// overflow experience carries into the next level.
    pub fn gain_experience(&mut self, amount: u32, config: &SimulationConfig) -> u32 {
        self.experience += amount;

        let mut levels = 0;
        while self.experience >= self.xp_threshold(config) {
            self.experience -= self.xp_threshold(config);
            self.level += 1;
            levels += 1;

            self.max_health += config.level_health_bonus;
            self.health = self.max_health;
            self.max_mana += config.level_mana_bonus;
            self.mana = self.max_mana;
            self.attack += config.level_attack_bonus;
            self.defense += config.level_defense_bonus;
        }

        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut stats = CharacterStats::default();
        assert!(!stats.take_damage(60.0));
        assert_eq!(stats.health, 40.0);
        assert!(stats.take_damage(500.0));
        assert_eq!(stats.health, 0.0);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut stats = CharacterStats::default();
        stats.take_damage(30.0);
        stats.heal(1000.0);
        assert_eq!(stats.health, stats.max_health);
    }

    #[test]
    fn test_spend_mana_exact_and_insufficient() {
        let mut stats = CharacterStats::default();
        assert!(stats.spend_mana(50.0));
        assert_eq!(stats.mana, 0.0);
        assert!(!stats.spend_mana(0.1));
        assert_eq!(stats.mana, 0.0);
    }

    #[test]
    fn test_level_up_at_threshold() {
        let config = SimulationConfig::default();
        let mut stats = CharacterStats::default();
        stats.experience = 95;

        let gained = stats.gain_experience(10, &config);

        assert_eq!(gained, 1);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.experience, 5);
        assert_eq!(stats.max_health, 120.0);
        assert_eq!(stats.health, 120.0);
        assert_eq!(stats.max_mana, 60.0);
        assert_eq!(stats.attack, 12.0);
        assert_eq!(stats.defense, 6.0);
    }

    #[test]
    fn test_multi_level_gain_loops() {
        let config = SimulationConfig::default();
        let mut stats = CharacterStats::default();

        // 100 (level 1->2) + 200 (level 2->3) + 50 left over
        let gained = stats.gain_experience(350, &config);

        assert_eq!(gained, 2);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.experience, 50);
        assert_eq!(stats.max_health, 140.0);
    }

    #[test]
    fn test_exact_threshold_resets_to_zero() {
        let config = SimulationConfig::default();
        let mut stats = CharacterStats::default();
        stats.gain_experience(100, &config);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.experience, 0);
    }
}
