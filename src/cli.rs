use crate::config::{self, SimConfig};
use clap::Parser;

/// CLI arguments for the foraging simulation
#[derive(Parser, Debug)]
#[command(name = "ant_forage", about = "🐜 Headless ant foraging simulator")]
pub struct Args {
    /// Number of ants
    #[arg(short = 'n', long = "ants", default_value_t = config::ANT_COUNT)]
    pub ants: usize,

    /// Scenario file (world/colony/cluster lines); four quadrant clusters if omitted
    #[arg(short = 'm', long = "map")]
    pub map: Option<String>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 3600)]
    pub ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Arena width
    #[arg(long, default_value_t = config::WORLD_WIDTH)]
    pub width: f32,

    /// Arena height
    #[arg(long, default_value_t = config::WORLD_HEIGHT)]
    pub height: f32,

    /// Food items for the built-in layout, split over four clusters
    #[arg(long, default_value_t = 100)]
    pub food: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance per tick that a searching ant tries to follow a trail
    #[arg(long, default_value_t = config::FOLLOW_PROBABILITY)]
    pub follow_probability: f32,

    /// Pheromone strength lost per second
    #[arg(long, default_value_t = config::DECAY_RATE)]
    pub decay_rate: f32,

    /// Also lay SEARCH markers while exploring
    #[arg(long, default_value_t = false)]
    pub search_trails: bool,

    /// Suppress pickup/delivery logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Simulation parameters selected by these arguments
    pub fn config(&self) -> SimConfig {
        let mut config = SimConfig {
            ants: self.ants,
            width: self.width,
            height: self.height,
            ..SimConfig::default()
        };
        config.ant.follow_probability = self.follow_probability;
        if self.search_trails {
            config.ant.search_strength = Some(config::SEARCH_STRENGTH);
        }
        config.pheromone.decay_rate = self.decay_rate;
        config
    }
}
