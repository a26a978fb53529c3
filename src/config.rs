use crate::error::ConfigError;
use std::f32::consts::{FRAC_PI_2, TAU};

// Agent defaults
pub const MAX_SPEED: f32 = 7.0;
pub const STEER_STRENGTH: f32 = 20.0;
pub const WANDER_STRENGTH: f32 = 1.0;
pub const VIEW_DISTANCE: f32 = 35.0;
pub const VIEW_ANGLE: f32 = FRAC_PI_2; // full cone, ±45° around the heading
pub const FOLLOW_PROBABILITY: f32 = 0.85;
pub const MIN_FOLLOW_DISTANCE: f32 = 60.0;
pub const DEPOSIT_INTERVAL: f32 = 0.1;
pub const MIN_DEPOSIT_DISTANCE: f32 = 40.0;
pub const RETURN_STRENGTH: f32 = 3.0;
pub const SEARCH_STRENGTH: f32 = 1.0;
pub const TRAIL_MIN_DISTANCE: f32 = 50.0;
pub const TRAIL_SPACING: f32 = 10.0;
pub const TRAIL_CAPACITY: usize = 200;

// Pheromone defaults
pub const DECAY_RATE: f32 = 0.3;
pub const INFLUENCE_RADIUS: f32 = 50.0;

// World defaults
pub const WORLD_WIDTH: f32 = 1000.0;
pub const WORLD_HEIGHT: f32 = 1000.0;
pub const WORLD_MARGIN: f32 = 10.0;
pub const COLONY_RADIUS: f32 = 40.0;
pub const PICKUP_RADIUS: f32 = 10.0;
pub const MIN_PICKUP_RADIUS: f32 = 5.0;
pub const MAX_PICKUP_RADIUS: f32 = 15.0;
pub const ARRIVAL_RADIUS: f32 = 50.0;
pub const ANT_COUNT: usize = 100;
/// Largest item count a single scenario cluster may ask for
pub const MAX_CLUSTER_ITEMS: usize = 100_000;

/// Per-agent movement, perception and trail parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntParams {
    pub max_speed: f32,
    pub steer_strength: f32,
    pub wander_strength: f32,
    pub view_distance: f32,
    /// Full width of the view cone in radians
    pub view_angle: f32,
    /// Chance per tick that a searching agent tries to follow a trail
    pub follow_probability: f32,
    /// Distance from the colony below which trails are ignored
    pub min_follow_distance: f32,
    pub deposit_interval: f32,
    /// Distance from the colony below which no marker is laid
    pub min_deposit_distance: f32,
    pub return_strength: f32,
    /// SEARCH markers are only laid when this is set
    pub search_strength: Option<f32>,
    pub trail_min_distance: f32,
    pub trail_spacing: f32,
    pub trail_capacity: usize,
}

impl Default for AntParams {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            steer_strength: STEER_STRENGTH,
            wander_strength: WANDER_STRENGTH,
            view_distance: VIEW_DISTANCE,
            view_angle: VIEW_ANGLE,
            follow_probability: FOLLOW_PROBABILITY,
            min_follow_distance: MIN_FOLLOW_DISTANCE,
            deposit_interval: DEPOSIT_INTERVAL,
            min_deposit_distance: MIN_DEPOSIT_DISTANCE,
            return_strength: RETURN_STRENGTH,
            search_strength: None,
            trail_min_distance: TRAIL_MIN_DISTANCE,
            trail_spacing: TRAIL_SPACING,
            trail_capacity: TRAIL_CAPACITY,
        }
    }
}

impl AntParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("max_speed", self.max_speed)?;
        ConfigError::require_positive("steer_strength", self.steer_strength)?;
        ConfigError::require_non_negative("wander_strength", self.wander_strength)?;
        ConfigError::require_non_negative("view_distance", self.view_distance)?;
        if !(self.view_angle > 0.0 && self.view_angle <= TAU) {
            return Err(ConfigError::OutOfRange {
                name: "view_angle",
                value: self.view_angle,
                min: 0.0,
                max: TAU,
            });
        }
        ConfigError::require_within("follow_probability", self.follow_probability, 0.0, 1.0)?;
        ConfigError::require_non_negative("min_follow_distance", self.min_follow_distance)?;
        ConfigError::require_positive("deposit_interval", self.deposit_interval)?;
        ConfigError::require_non_negative("min_deposit_distance", self.min_deposit_distance)?;
        ConfigError::require_non_negative("return_strength", self.return_strength)?;
        if let Some(strength) = self.search_strength {
            ConfigError::require_non_negative("search_strength", strength)?;
        }
        ConfigError::require_non_negative("trail_min_distance", self.trail_min_distance)?;
        ConfigError::require_positive("trail_spacing", self.trail_spacing)?;
        if self.trail_capacity == 0 {
            return Err(ConfigError::Empty { name: "trail_capacity" });
        }
        Ok(())
    }
}

/// Pheromone field parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PheromoneParams {
    /// Strength lost per second by every marker
    pub decay_rate: f32,
    /// Radius used by trail following and influence queries
    pub influence_radius: f32,
}

impl Default for PheromoneParams {
    fn default() -> Self {
        Self {
            decay_rate: DECAY_RATE,
            influence_radius: INFLUENCE_RADIUS,
        }
    }
}

impl PheromoneParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("decay_rate", self.decay_rate)?;
        ConfigError::require_non_negative("influence_radius", self.influence_radius)
    }
}

/// Everything needed to build and run a simulation
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub ants: usize,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// How close a perceived item must be before it is picked up
    pub pickup_radius: f32,
    /// How close a carrier must be to the colony to unload
    pub arrival_radius: f32,
    pub ant: AntParams,
    pub pheromone: PheromoneParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ants: ANT_COUNT,
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            margin: WORLD_MARGIN,
            pickup_radius: PICKUP_RADIUS,
            arrival_radius: ARRIVAL_RADIUS,
            ant: AntParams::default(),
            pheromone: PheromoneParams::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("width", self.width)?;
        ConfigError::require_positive("height", self.height)?;
        ConfigError::require_non_negative("margin", self.margin)?;
        ConfigError::require_within("pickup_radius", self.pickup_radius, MIN_PICKUP_RADIUS, MAX_PICKUP_RADIUS)?;
        ConfigError::require_non_negative("arrival_radius", self.arrival_radius)?;
        self.ant.validate()?;
        self.pheromone.validate()
    }

    /// Fail unless a carrier can reach the arrival threshold without being
    /// bounced off a colony of `colony_radius`
    pub fn check_arrival(&self, colony_radius: f32) -> Result<(), ConfigError> {
        if self.arrival_radius > colony_radius {
            Ok(())
        } else {
            Err(ConfigError::ArrivalInsideColony {
                arrival: self.arrival_radius,
                colony: colony_radius,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert_eq!(AntParams::default().search_strength, None);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let params = AntParams { max_speed: 0.0, ..AntParams::default() };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositive { name: "max_speed", value: 0.0 })
        );
    }

    #[test]
    fn test_rejects_bad_decay_rate() {
        let params = PheromoneParams { decay_rate: -1.0, ..PheromoneParams::default() };
        assert!(params.validate().is_err());

        let config = SimConfig {
            pheromone: PheromoneParams { decay_rate: 0.0, ..PheromoneParams::default() },
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let params = AntParams { follow_probability: 1.2, ..AntParams::default() };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::OutOfRange { name: "follow_probability", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_trail_capacity() {
        let params = AntParams { trail_capacity: 0, ..AntParams::default() };
        assert_eq!(params.validate(), Err(ConfigError::Empty { name: "trail_capacity" }));
    }

    #[test]
    fn test_pickup_radius_range() {
        let config = SimConfig { pickup_radius: 4.0, ..SimConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "pickup_radius", .. })
        ));
        let config = SimConfig { pickup_radius: 15.0, ..SimConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_arrival_must_exceed_colony() {
        let config = SimConfig::default();
        assert!(config.check_arrival(COLONY_RADIUS).is_ok());
        assert_eq!(
            config.check_arrival(60.0),
            Err(ConfigError::ArrivalInsideColony { arrival: 50.0, colony: 60.0 })
        );
        assert!(config.check_arrival(ARRIVAL_RADIUS).is_err());
    }

    #[test]
    fn test_rejects_negative_radius() {
        let config = SimConfig { arrival_radius: -5.0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }
}
