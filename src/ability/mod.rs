//! Ability simulation - descriptors, effect behaviors, runtime state

pub mod behavior;
pub mod data;
pub mod runtime;

pub use behavior::{AbilityBehavior, CastOutcome, CastTarget, TargetView};
pub use data::{AbilityData, AbilityKind, TargetRequirement};
pub use runtime::{Ability, AbilityBook};
