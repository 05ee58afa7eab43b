pub mod events;
pub mod tick;
pub mod world;

pub use events::SimulationEvent;
pub use tick::{run_simulation_tick, CombatantView, PendingDamage, TickContext};
pub use world::{CastSpec, GameWorld, TransientEffect};
