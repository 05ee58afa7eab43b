//! Entity - identity plus a typed component table and a tag set

use crate::ability::AbilityBook;
use crate::character::Character;
use crate::core::error::{ArenaError, Result};
use crate::core::types::EntityId;
use crate::ecs::component::{Component, ComponentKind};
use crate::simulation::tick::TickContext;
use crate::tower::Tower;

/// An identity with attached components and tags
///
/// Entities are created and destroyed through the `EntityRegistry`; the
/// registry also keeps the tag index consistent with the tag set here.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    tags: Vec<String>,
    character: Option<Character>,
    abilities: Option<AbilityBook>,
    tower: Option<Tower>,
}

impl Entity {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            tags: Vec::new(),
            character: None,
            abilities: None,
            tower: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Tags in the order they were added
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns true if the tag was newly added
    pub(crate) fn add_tag(&mut self, tag: &str) -> bool {
        if self.has_tag(tag) {
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    /// Returns true if the tag was present
    pub(crate) fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Character => self.character.is_some(),
            ComponentKind::Abilities => self.abilities.is_some(),
            ComponentKind::Tower => self.tower.is_some(),
        }
    }

    /// Attach a component. Its init hook runs synchronously before this
    /// returns. A second component of the same kind is an error.
    pub fn attach(&mut self, mut component: Component) -> Result<()> {
        let kind = component.kind();
        if self.has_component(kind) {
            return Err(ArenaError::ComponentAlreadyAttached {
                entity: self.id,
                kind,
            });
        }
        component.on_attach(self.id);
        match component {
            Component::Character(c) => self.character = Some(c),
            Component::Abilities(b) => self.abilities = Some(b),
            Component::Tower(t) => self.tower = Some(t),
        }
        Ok(())
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn character_mut(&mut self) -> Option<&mut Character> {
        self.character.as_mut()
    }

    pub fn abilities(&self) -> Option<&AbilityBook> {
        self.abilities.as_ref()
    }

    pub fn abilities_mut(&mut self) -> Option<&mut AbilityBook> {
        self.abilities.as_mut()
    }

    pub fn tower(&self) -> Option<&Tower> {
        self.tower.as_ref()
    }

    pub fn tower_mut(&mut self) -> Option<&mut Tower> {
        self.tower.as_mut()
    }

    /// Split borrow for casting: the ability book needs its owner
    pub fn character_with_abilities(&mut self) -> Option<(&mut Character, &mut AbilityBook)> {
        match (&mut self.character, &mut self.abilities) {
            (Some(chr), Some(book)) => Some((chr, book)),
            _ => None,
        }
    }

    /// Advance every attached component by one tick
    pub(crate) fn update(&mut self, dt: f32, ctx: &mut TickContext<'_>) {
        if let Some(chr) = &mut self.character {
            chr.update(dt, ctx.config);
        }
        if let (Some(book), Some(chr)) = (&mut self.abilities, &mut self.character) {
            if chr.is_dead() {
                // Death drops every held effect; a corpse never runs
                // another ongoing hook
                book.release_all(chr);
            } else {
                book.update(dt, chr);
            }
        }
        if let Some(tower) = &mut self.tower {
            tower.update(self.id, dt, ctx);
        }
    }

    /// Run every component's teardown and clear components and tags
    pub(crate) fn destroy(&mut self) {
        let id = self.id;
        if let Some(c) = self.character.take() {
            Component::Character(c).on_destroy(id);
        }
        if let Some(b) = self.abilities.take() {
            Component::Abilities(b).on_destroy(id);
        }
        if let Some(t) = self.tower.take() {
            Component::Tower(t).on_destroy(id);
        }
        self.tags.clear();
    }
}
