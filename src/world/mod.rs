pub mod bounds;
pub mod parser;
pub mod scenario;
pub mod world;

pub use bounds::Bounds;
pub use parser::{parse_scenario, parse_scenario_from_str};
pub use scenario::{ClusterSpec, ColonySpec, Scenario};
pub use world::World;
