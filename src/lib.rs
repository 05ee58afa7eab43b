//! Rift Arena - simulation core for a real-time arena game
//!
//! Heroes and towers live in an entity registry, abilities are gated by
//! cooldowns and mana, and a frame driver advances everything by a delta
//! time once per rendered frame. Rendering, input capture, and VFX are
//! external collaborators: they read positions, stats, and animation
//! hints out of this core and feed back movement and cast requests.

pub mod ability;
pub mod character;
pub mod core;
pub mod ecs;
pub mod simulation;
pub mod tower;
