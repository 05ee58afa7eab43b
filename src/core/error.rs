use crate::core::types::EntityId;
use crate::ecs::component::ComponentKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Entity already exists: {0}")]
    DuplicateEntity(EntityId),

    #[error("Component {kind:?} already attached to entity {entity}")]
    ComponentAlreadyAttached { entity: EntityId, kind: ComponentKind },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
