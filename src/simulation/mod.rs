pub mod collision;
pub mod engine;

pub use collision::{CollisionResolver, ForageEvent};
pub use engine::{SimulationEngine, TickReport};
