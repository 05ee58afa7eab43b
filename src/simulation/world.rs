//! Game world - the explicitly constructed session context
//!
//! Owns the entity registry, the game clock, transient effect markers,
//! and the simulation config. One `GameWorld` per match; there is no
//! process-wide state. Input adapters call the command wrappers here
//! (`move_hero`, `attack`, `cast`, ...) between ticks; the frame driver
//! calls `run_simulation_tick`.

use crate::ability::behavior::{CastOutcome, CastTarget, TargetView};
use crate::ability::AbilityBook;
use crate::character::Character;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{EntityId, LaneId, TeamId};
use crate::ecs::component::Component;
use crate::ecs::registry::EntityRegistry;
use crate::simulation::events::SimulationEvent;
use crate::tower::{Tower, TowerStats};
use glam::Vec3;

/// A purely presentational world object with a tick-counted lifetime,
/// e.g. the marker left by a deployed turret
#[derive(Debug, Clone, Copy)]
pub struct TransientEffect {
    pub position: Vec3,
    pub remaining: f32,
}

/// Target supplied with a cast request, as resolved by the input layer
#[derive(Debug, Clone, Copy)]
pub enum CastSpec {
    None,
    Unit(EntityId),
    Point(Vec3),
}

/// One match's worth of simulation state
pub struct GameWorld {
    pub registry: EntityRegistry,
    pub config: SimulationConfig,
    pub(crate) clock: f64,
    pub(crate) transients: Vec<TransientEffect>,
    pub(crate) outbox: Vec<SimulationEvent>,
}

impl GameWorld {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: EntityRegistry::new(),
            config,
            clock: 0.0,
            transients: Vec::new(),
            outbox: Vec::new(),
        })
    }

    /// Seconds of game time elapsed since the match started
    pub fn game_time(&self) -> f64 {
        self.clock
    }

    /// Live transient effect markers, for the rendering layer
    pub fn transients(&self) -> &[TransientEffect] {
        &self.transients
    }

    /// Spawn a hero with the starter ability kit
    pub fn spawn_hero(
        &mut self,
        name: impl Into<String>,
        team: TeamId,
        position: Vec3,
    ) -> Result<EntityId> {
        let id = self.registry.create();
        let entity = self
            .registry
            .get_mut(id)
            .expect("entity just created");
        entity.attach(Component::Character(Character::new(name, team, position)))?;
        entity.attach(Component::Abilities(AbilityBook::starter()))?;
        self.registry.add_tag(id, "hero");
        self.registry.add_tag(id, team.tag());
        tracing::info!(%id, ?team, "hero spawned");
        Ok(id)
    }

    /// Spawn a lane tower
    pub fn spawn_tower(
        &mut self,
        team: TeamId,
        lane: LaneId,
        position: Vec3,
    ) -> Result<EntityId> {
        let id = self.registry.create();
        let entity = self
            .registry
            .get_mut(id)
            .expect("entity just created");
        entity.attach(Component::Tower(Tower::new(
            TowerStats::default(),
            team,
            lane,
            position,
        )))?;
        self.registry.add_tag(id, "tower");
        self.registry.add_tag(id, team.tag());
        tracing::info!(%id, ?team, ?lane, "tower spawned");
        Ok(id)
    }

    /// Set a hero's movement intent. Returns false for unknown or dead
    /// heroes.
    pub fn move_hero(&mut self, id: EntityId, point: Vec3) -> bool {
        match self.registry.get_mut(id).and_then(|e| e.character_mut()) {
            Some(chr) if !chr.is_dead() => {
                chr.move_to(point);
                true
            }
            _ => false,
        }
    }

    /// Clear a hero's movement intent
    pub fn stop_hero(&mut self, id: EntityId) -> bool {
        match self.registry.get_mut(id).and_then(|e| e.character_mut()) {
            Some(chr) => {
                chr.stop_movement();
                true
            }
            None => false,
        }
    }

    /// Basic attack from one character onto another. Returns the damage
    /// dealt, or None when either end is missing or the attacker is dead.
    pub fn attack(&mut self, attacker: EntityId, target: EntityId) -> Option<f32> {
        if attacker == target {
            return None;
        }

        let target_defense = {
            let entity = self.registry.get(target)?;
            if let Some(chr) = entity.character() {
                chr.stats.defense
            } else if let Some(tower) = entity.tower() {
                tower.stats.defense
            } else {
                return None;
            }
        };

        let damage = {
            let chr = self
                .registry
                .get_mut(attacker)
                .and_then(|e| e.character_mut())?;
            if chr.is_dead() {
                return None;
            }
            chr.play_attack_animation(&self.config);
            chr.attack_damage_against(target_defense)
        };

        apply_damage(&mut self.registry, &mut self.outbox, attacker, target, damage);
        Some(damage)
    }

    /// Cast an ability by id. Returns false on any refusal; a refused
    /// cast mutates nothing.
    pub fn cast(&mut self, caster: EntityId, ability: &str, spec: CastSpec) -> bool {
        let target = match spec {
            CastSpec::None => CastTarget::None,
            CastSpec::Point(point) => CastTarget::Point(point),
            CastSpec::Unit(id) => {
                let Some(view) = self
                    .registry
                    .get(id)
                    .and_then(|e| e.character())
                    .map(|c| TargetView {
                        id,
                        position: c.position,
                        alive: !c.is_dead(),
                    })
                else {
                    return false;
                };
                CastTarget::Unit(view)
            }
        };

        let outcome = {
            let Some(entity) = self.registry.get_mut(caster) else {
                return false;
            };
            let Some((chr, book)) = entity.character_with_abilities() else {
                return false;
            };
            match book.activate(ability, chr, &target) {
                Some(outcome) => outcome,
                None => return false,
            }
        };

        self.outbox.push(SimulationEvent::AbilityCast {
            caster,
            ability: ability.to_string(),
        });

        match outcome {
            CastOutcome::Damage { target, amount, .. } => {
                apply_damage(&mut self.registry, &mut self.outbox, caster, target, amount);
            }
            CastOutcome::Placement { position, duration } => {
                self.transients.push(TransientEffect {
                    position,
                    remaining: duration,
                });
                self.outbox
                    .push(SimulationEvent::EffectPlaced { position, duration });
            }
            CastOutcome::SelfEffect | CastOutcome::Toggled(_) => {}
        }
        true
    }

    /// Force a toggle ability off
    pub fn deactivate(&mut self, caster: EntityId, ability: &str) -> bool {
        let Some(entity) = self.registry.get_mut(caster) else {
            return false;
        };
        let Some((chr, book)) = entity.character_with_abilities() else {
            return false;
        };
        match book.get_mut(ability) {
            Some(a) => {
                a.deactivate(chr);
                true
            }
            None => false,
        }
    }

    /// Award experience to a hero, emitting one LevelUp event per level
    /// gained. Dead heroes gain nothing.
    pub fn grant_experience(&mut self, id: EntityId, amount: u32) -> u32 {
        let Some(chr) = self.registry.get_mut(id).and_then(|e| e.character_mut()) else {
            return 0;
        };
        if chr.is_dead() {
            return 0;
        }
        let levels = chr.stats.gain_experience(amount, &self.config);
        let reached = chr.stats.level;
        for step in 0..levels {
            self.outbox.push(SimulationEvent::LevelUp {
                entity: id,
                level: reached - levels + step + 1,
            });
        }
        levels
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new(SimulationConfig::default()).expect("default config is valid")
    }
}

/// Apply damage to whichever damageable component the target has, and
/// record the hit plus any resulting death
pub(crate) fn apply_damage(
    registry: &mut EntityRegistry,
    events: &mut Vec<SimulationEvent>,
    source: EntityId,
    target: EntityId,
    amount: f32,
) {
    let Some(entity) = registry.get_mut(target) else {
        return;
    };

    if let Some(chr) = entity.character_mut() {
        if chr.is_dead() {
            return;
        }
        chr.take_damage(amount);
        events.push(SimulationEvent::CombatHit {
            attacker: source,
            target,
            amount,
        });
        if chr.is_dead() {
            events.push(SimulationEvent::UnitDied { entity: target });
        }
    } else if let Some(tower) = entity.tower_mut() {
        if tower.is_destroyed() {
            return;
        }
        tower.take_damage(amount);
        events.push(SimulationEvent::CombatHit {
            attacker: source,
            target,
            amount,
        });
        if tower.is_destroyed() {
            events.push(SimulationEvent::TowerDestroyed { entity: target });
        }
    }
}
