pub mod component;
pub mod entity;
pub mod registry;

pub use component::{Component, ComponentKind};
pub use entity::Entity;
pub use registry::EntityRegistry;
