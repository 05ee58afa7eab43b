//! Runtime ability state - cooldown and activation protocol
//!
//! An `Ability` binds one descriptor to one behavior and to one owner's
//! lifetime: the book is built at hero setup and lives as long as the
//! character. Activation is all-or-nothing: any refused cast leaves
//! cooldown and mana untouched.

use crate::ability::behavior::{AbilityBehavior, CastOutcome, CastTarget, OngoingStatus};
use crate::ability::data::{catalog, AbilityData, AbilityKind};
use crate::character::Character;

/// One ability instance owned by a hero
#[derive(Debug, Clone)]
pub struct Ability {
    pub data: AbilityData,
    behavior: AbilityBehavior,
    cooldown_left: f32,
    active: bool,
}

impl Ability {
    pub fn new(data: AbilityData, behavior: AbilityBehavior) -> Self {
        Self {
            data,
            behavior,
            cooldown_left: 0.0,
            active: false,
        }
    }

    /// Seconds until this ability can be cast again (0 = ready)
    pub fn remaining_cooldown(&self) -> f32 {
        self.cooldown_left
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_left == 0.0
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance cooldown and any live duration/toggle effect
    pub fn update(&mut self, dt: f32, owner: &mut Character) {
        if dt <= 0.0 {
            return;
        }

        if self.cooldown_left > 0.0 {
            self.cooldown_left = (self.cooldown_left - dt).max(0.0);
        }

        if self.active && self.data.kind != AbilityKind::Passive {
            if self.behavior.ongoing(dt, owner) == OngoingStatus::Finished {
                self.active = false;
            }
        }
    }

    /// Attempt a cast. Returns the outcome for the frame driver, or None
    /// when the cast is refused (on cooldown, not enough mana, bad target,
    /// dead owner, or a passive ability). Refusal mutates nothing.
    pub fn activate(&mut self, owner: &mut Character, target: &CastTarget) -> Option<CastOutcome> {
        if self.data.kind == AbilityKind::Passive {
            return None;
        }
        if owner.is_dead() {
            return None;
        }
        if self.cooldown_left > 0.0 {
            return None;
        }
        if !self.behavior.precondition(&self.data, owner, target) {
            return None;
        }
        if !owner.stats.spend_mana(self.data.mana_cost) {
            return None;
        }

        self.cooldown_left = self.data.cooldown;
        tracing::debug!(ability = %self.data.id, owner = %owner.name, "ability cast");

        match self.data.kind {
            AbilityKind::Toggle => {
                self.active = !self.active;
                if !self.active {
                    self.behavior.on_deactivate(owner);
                }
                Some(CastOutcome::Toggled(self.active))
            }
            AbilityKind::Active => {
                self.active = true;
                let outcome = self.behavior.effect(&self.data, owner, target);
                if !self.behavior.holds_active(&self.data) {
                    // One-shot: callers never observe active == true
                    self.active = false;
                }
                Some(outcome)
            }
            AbilityKind::Passive => unreachable!("passive gated above"),
        }
    }

    /// Force a toggle off. No-op for non-toggle kinds.
    pub fn deactivate(&mut self, owner: &mut Character) {
        if self.data.kind == AbilityKind::Toggle && self.active {
            self.active = false;
            self.behavior.on_deactivate(owner);
        }
    }

    /// End any live effect immediately, undoing whatever it applied to
    /// the owner. Unlike `deactivate` this also drops held duration
    /// buffs; the owner's death is the one caller.
    pub(crate) fn release(&mut self, owner: &mut Character) {
        if self.active {
            self.active = false;
            self.behavior.on_deactivate(owner);
        }
    }
}

/// The set of abilities a hero owns, looked up by descriptor id
#[derive(Debug, Clone, Default)]
pub struct AbilityBook {
    abilities: Vec<Ability>,
}

impl AbilityBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard hero kit
    pub fn starter() -> Self {
        let mut book = Self::new();
        book.insert(Ability::new(catalog::fireball(), AbilityBehavior::DirectDamage));
        book.insert(Ability::new(catalog::deploy_turret(), AbilityBehavior::Placement));
        book.insert(Ability::new(
            catalog::iron_skin(),
            AbilityBehavior::defense_buff(1.5),
        ));
        book.insert(Ability::new(
            catalog::guardian_stance(),
            AbilityBehavior::guardian_stance(5.0, 4.0),
        ));
        book
    }

    /// Add an ability; a duplicate id is ignored
    pub fn insert(&mut self, ability: Ability) {
        if self.get(&ability.data.id).is_none() {
            self.abilities.push(ability);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.data.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Ability> {
        self.abilities.iter_mut().find(|a| a.data.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Advance every ability by `dt`
    pub fn update(&mut self, dt: f32, owner: &mut Character) {
        for ability in &mut self.abilities {
            ability.update(dt, owner);
        }
    }

    /// Drop every live effect at once, restoring buffed stats. Run when
    /// the owner dies so no ongoing hook touches the corpse afterwards.
    pub fn release_all(&mut self, owner: &mut Character) {
        for ability in &mut self.abilities {
            ability.release(owner);
        }
    }

    /// Cast by id; unknown ids are a quiet refusal
    pub fn activate(
        &mut self,
        id: &str,
        owner: &mut Character,
        target: &CastTarget,
    ) -> Option<CastOutcome> {
        self.get_mut(id)?.activate(owner, target)
    }
}
