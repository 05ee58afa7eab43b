//! Simulation configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose.
//! The config is owned by the `GameWorld` session and passed down through
//! the tick, never stored in a process-wide global.

use crate::core::error::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the arena simulation
///
/// Defaults match the shipped balance pass. Changing them affects pacing
/// and feel, not correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === MOVEMENT ===
    /// Distance below which a moving character snaps to its destination
    /// and clears its movement intent (world units)
    ///
    /// Too small and characters oscillate around the click point; too
    /// large and clicks visibly undershoot.
    pub move_stop_epsilon: f32,

    // === RESOURCES ===
    /// Passive mana regeneration per second, as a fraction of max mana
    ///
    /// At 0.02, an idle hero refills an empty mana pool in 50 seconds.
    pub mana_regen_fraction: f32,

    // === LEVELING ===
    /// Experience required per level = current level x this factor
    ///
    /// At 100, reaching level 2 takes 100 xp, level 3 another 200.
    pub xp_per_level: u32,

    /// Max health gained per level (health fully restored on level-up)
    pub level_health_bonus: f32,
    /// Max mana gained per level (mana fully restored on level-up)
    pub level_mana_bonus: f32,
    /// Attack gained per level
    pub level_attack_bonus: f32,
    /// Defense gained per level
    pub level_defense_bonus: f32,

    // === PRESENTATION TIMING ===
    /// Seconds the Attacking animation hint is held before the hint
    /// returns to Idle
    ///
    /// Purely presentational; combat itself resolves instantly. Counted
    /// down in game time so ticks stay deterministic.
    pub attack_anim_seconds: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            move_stop_epsilon: 0.1,
            mana_regen_fraction: 0.02,
            xp_per_level: 100,
            level_health_bonus: 20.0,
            level_mana_bonus: 10.0,
            level_attack_bonus: 2.0,
            level_defense_bonus: 1.0,
            attack_anim_seconds: 0.8,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.move_stop_epsilon <= 0.0 {
            return Err(ArenaError::InvalidConfig(
                "move_stop_epsilon must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mana_regen_fraction) {
            return Err(ArenaError::InvalidConfig(format!(
                "mana_regen_fraction ({}) must be in [0, 1]",
                self.mana_regen_fraction
            )));
        }
        if self.xp_per_level == 0 {
            return Err(ArenaError::InvalidConfig(
                "xp_per_level must be positive".into(),
            ));
        }
        if self.attack_anim_seconds < 0.0 {
            return Err(ArenaError::InvalidConfig(
                "attack_anim_seconds must not be negative".into(),
            ));
        }
        Ok(())
    }
}
