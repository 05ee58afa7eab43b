//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form for logs and the command loop
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Team affiliation for heroes and towers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    Blue,
    Red,
}

impl TeamId {
    /// Registry tag used for team group queries
    pub fn tag(&self) -> &'static str {
        match self {
            TeamId::Blue => "team-blue",
            TeamId::Red => "team-red",
        }
    }

    pub fn rival(&self) -> TeamId {
        match self {
            TeamId::Blue => TeamId::Red,
            TeamId::Red => TeamId::Blue,
        }
    }
}

/// Lane assignment for towers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneId {
    Top,
    Mid,
    Bot,
}

/// Animation hint emitted by the simulation for the rendering layer
///
/// This is a display request, not authoritative gameplay state. The
/// renderer maps it to an animation clip and may ignore duplicate
/// consecutive requests for the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationState {
    Idle,
    Walking,
    Running,
    Attacking,
    Dying,
}

/// Damage classification carried by abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    Physical,
    Magical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_unique() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_entity_id_hash() {
        use std::collections::HashMap;
        let id = EntityId::new();
        let mut map: HashMap<EntityId, &str> = HashMap::new();
        map.insert(id, "hero");
        assert_eq!(map.get(&id), Some(&"hero"));
    }

    #[test]
    fn test_team_rival_is_symmetric() {
        assert_eq!(TeamId::Blue.rival(), TeamId::Red);
        assert_eq!(TeamId::Red.rival(), TeamId::Blue);
        assert_eq!(TeamId::Blue.rival().rival(), TeamId::Blue);
    }

    #[test]
    fn test_team_tags_distinct() {
        assert_ne!(TeamId::Blue.tag(), TeamId::Red.tag());
    }
}
