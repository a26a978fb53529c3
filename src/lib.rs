//! # Ant Forage
//!
//! A colony of foraging ants that find scattered food clusters, carry the
//! food home and coordinate through a decaying pheromone field.
//!
//! This library provides the foraging core: agent perception and steering,
//! the search/pursue/return decision, the pheromone field, food clusters,
//! the colony, and a headless tick engine that drives them.

pub mod ant;
pub mod cli;
pub mod colony;
pub mod config;
pub mod error;
pub mod food;
pub mod pheromone;
pub mod simulation;
pub mod vector;
pub mod world;

pub use ant::{Ant, Behavior};
pub use cli::Args;
pub use colony::{Colony, ColonyStats};
pub use config::{AntParams, PheromoneParams, SimConfig};
pub use error::{ConfigError, ParseError, Result};
pub use food::FoodCluster;
pub use pheromone::{Marker, PheromoneField, PheromoneKind};
pub use simulation::{CollisionResolver, ForageEvent, SimulationEngine, TickReport};
pub use vector::{Steering, Vec2};
pub use world::{Bounds, Scenario, World};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Behavior, Colony, ConfigError, FoodCluster, ParseError, PheromoneField, PheromoneKind, Result,
        Scenario, SimConfig, SimulationEngine, Steering, Vec2, World,
    };
}
