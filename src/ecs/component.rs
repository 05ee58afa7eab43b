//! Closed component union and the lifecycle contract
//!
//! Components are a closed set of kinds rather than a string-keyed bag:
//! each entity holds at most one component per kind, and lookups are
//! typed. Every component satisfies the same lifecycle contract:
//! `on_attach` runs synchronously inside the attach call, the per-tick
//! update is driven through `Entity::update`, and `on_destroy` runs when
//! the owning entity is torn down.

use crate::ability::AbilityBook;
use crate::character::Character;
use crate::core::types::EntityId;
use crate::tower::Tower;

/// Enumerated component-kind identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Character,
    Abilities,
    Tower,
}

/// One attached component instance, exclusively owned by its entity
#[derive(Debug, Clone)]
pub enum Component {
    Character(Character),
    Abilities(AbilityBook),
    Tower(Tower),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Character(_) => ComponentKind::Character,
            Component::Abilities(_) => ComponentKind::Abilities,
            Component::Tower(_) => ComponentKind::Tower,
        }
    }

    /// Init hook, invoked exactly once inside `Entity::attach`
    pub(crate) fn on_attach(&mut self, owner: EntityId) {
        tracing::trace!(%owner, kind = ?self.kind(), "component attached");
    }

    /// Teardown hook, invoked when the owning entity is destroyed
    pub(crate) fn on_destroy(&mut self, owner: EntityId) {
        tracing::trace!(%owner, kind = ?self.kind(), "component destroyed");
    }
}
