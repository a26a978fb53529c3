use crate::colony::Colony;
use crate::config::AntParams;
use crate::error::ConfigError;
use crate::pheromone::{PheromoneField, PheromoneKind};
use crate::vector::{Steering, Vec2};
use std::collections::VecDeque;
use std::f32::consts::TAU;

// Trail scoring weights
const AWAY_WEIGHT: f32 = 2.0;
const STRENGTH_WEIGHT: f32 = 0.3;
const MOMENTUM_WEIGHT: f32 = 0.5;
/// Markers closer than this give no usable direction
const MIN_MARKER_DISTANCE: f32 = 5.0;

/// What an ant decided to do on its last tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Carrying food, heading straight home
    Returning,
    /// Walking to a perceived food item
    Pursuing,
    /// Steering along a RETURN trail, away from the colony
    Following,
    /// Random walk
    Wandering,
}

impl Behavior {
    pub const fn as_str(self) -> &'static str {
        match self {
            Behavior::Returning => "returning",
            Behavior::Pursuing => "pursuing",
            Behavior::Following => "following",
            Behavior::Wandering => "wandering",
        }
    }
}

/// Score of a candidate trail direction. RETURN markers are laid by
/// carriers walking home, so a marker lying away from the colony points
/// back towards the food they came from.
#[inline]
fn trail_score(to_marker: Vec2, to_colony: Vec2, strength: f32, last_followed: Option<Vec2>) -> f32 {
    let away = -to_marker.dot(to_colony);
    let momentum = last_followed.map_or(0.0, |dir| to_marker.dot(dir) * MOMENTUM_WEIGHT);
    away * AWAY_WEIGHT + strength * STRENGTH_WEIGHT + momentum
}

/// A single forager
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians, follows the velocity while moving
    pub facing: f32,
    params: AntParams,
    desired_direction: Vec2,
    carrying: bool,
    cargo: Option<u32>,
    perceived_food: Option<Vec2>,
    last_followed: Option<Vec2>,
    behavior: Behavior,
    deposit_timer: f32,
    distance_travelled: f32,
    steps_since_food: u32,
    trail: VecDeque<Vec2>,
}

impl Ant {
    /// Create an ant at `position` facing `heading` radians, moving at unit
    /// speed (or `max_speed` if that is lower)
    pub fn new(id: u32, position: Vec2, heading: f32, params: AntParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let direction = Vec2::from_angle(heading);
        Ok(Self {
            id,
            position,
            velocity: direction * params.max_speed.min(1.0),
            facing: heading,
            desired_direction: direction,
            carrying: false,
            cargo: None,
            perceived_food: None,
            last_followed: None,
            behavior: Behavior::Wandering,
            deposit_timer: 0.0,
            distance_travelled: 0.0,
            steps_since_food: 0,
            trail: VecDeque::with_capacity(params.trail_capacity.min(1024)),
            params,
        })
    }

    #[inline]
    pub fn params(&self) -> &AntParams {
        &self.params
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    /// Cluster the carried item came from
    #[inline]
    pub fn carried_cluster(&self) -> Option<u32> {
        self.cargo
    }

    #[inline]
    pub fn perceived_food(&self) -> Option<Vec2> {
        self.perceived_food
    }

    #[inline]
    pub fn last_followed_direction(&self) -> Option<Vec2> {
        self.last_followed
    }

    #[inline]
    pub fn desired_direction(&self) -> Vec2 {
        self.desired_direction
    }

    /// Behavior picked by the most recent decision
    #[inline]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[inline]
    pub fn steps_since_food(&self) -> u32 {
        self.steps_since_food
    }

    /// Distance walked since the last delivery
    #[inline]
    pub fn distance_travelled(&self) -> f32 {
        self.distance_travelled
    }

    /// Recent search positions, oldest first
    #[inline]
    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    /// Unit heading: the velocity direction, or the facing angle when still
    pub fn heading(&self) -> Vec2 {
        if self.velocity.is_zero() {
            Vec2::from_angle(self.facing)
        } else {
            self.velocity.normalize_or_zero()
        }
    }

    /// Update the perceived food item from the candidate positions.
    ///
    /// The first candidate inside the view cone wins, not the nearest one.
    pub fn perceive(&mut self, food: &[Vec2]) {
        if self.carrying {
            self.perceived_food = None;
            return;
        }
        if let Some(seen) = self.perceived_food {
            if !food.contains(&seen) {
                self.perceived_food = None;
            }
        }

        let heading = self.heading();
        let half_angle = self.params.view_angle / 2.0;
        for &item in food {
            let to_food = item - self.position;
            if to_food.length() > self.params.view_distance {
                continue;
            }
            if to_food.is_zero() || heading.bearing_to(to_food).abs() < half_angle {
                self.perceived_food = Some(item);
                return;
            }
        }
    }

    /// Pick this tick's desired direction. Computed fresh from the current
    /// flags and perception every call.
    pub fn decide(&mut self, colony: &Colony, field: &PheromoneField, rng: &mut fastrand::Rng) -> Behavior {
        let behavior = if self.carrying {
            self.desired_direction = self.position.direction_to(colony.position);
            Behavior::Returning
        } else if let Some(food) = self.perceived_food {
            self.desired_direction = self.position.direction_to(food);
            Behavior::Pursuing
        } else if let Some(direction) = self.follow_trail(colony, field, rng) {
            self.desired_direction = direction;
            self.last_followed = Some(direction);
            Behavior::Following
        } else {
            self.last_followed = None;
            self.wander(rng);
            Behavior::Wandering
        };

        self.desired_direction = self.desired_direction.normalize_or_zero();
        self.behavior = behavior;
        behavior
    }

    /// Best-scoring RETURN marker direction, if any scores above zero
    fn follow_trail(&self, colony: &Colony, field: &PheromoneField, rng: &mut fastrand::Rng) -> Option<Vec2> {
        if self.position.distance(colony.position) <= self.params.min_follow_distance {
            return None;
        }
        if rng.f32() >= self.params.follow_probability {
            return None;
        }

        let to_colony = self.position.direction_to(colony.position);
        let mut best: Option<(f32, Vec2)> = None;
        for marker in field.query_nearby(self.position, PheromoneKind::Return, field.influence_radius()) {
            let offset = marker.position - self.position;
            if offset.length() < MIN_MARKER_DISTANCE {
                continue;
            }
            let to_marker = offset.normalize_or_zero();
            let score = trail_score(to_marker, to_colony, marker.strength, self.last_followed);
            // strict: the first of equal maxima stays
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, to_marker));
            }
        }

        best.filter(|&(score, _)| score > 0.0).map(|(_, direction)| direction)
    }

    fn wander(&mut self, rng: &mut fastrand::Rng) {
        let angle = rng.f32() * TAU;
        let radius = rng.f32();
        let jitter = Vec2::from_angle(angle) * radius;
        self.desired_direction =
            (self.desired_direction + jitter * self.params.wander_strength).normalize_or_zero();
    }

    /// Advance the deposit timer and lay a marker when it fires.
    /// Returns the kind laid, if any.
    pub fn lay_pheromone(&mut self, dt: f32, colony: &Colony, field: &mut PheromoneField) -> Option<PheromoneKind> {
        self.deposit_timer += dt;
        if self.deposit_timer < self.params.deposit_interval {
            return None;
        }
        self.deposit_timer = 0.0;

        if self.position.distance(colony.position) <= self.params.min_deposit_distance {
            return None;
        }
        if self.carrying {
            field.deposit(self.position, PheromoneKind::Return, self.params.return_strength);
            Some(PheromoneKind::Return)
        } else if let Some(strength) = self.params.search_strength {
            field.deposit(self.position, PheromoneKind::Search, strength);
            Some(PheromoneKind::Search)
        } else {
            None
        }
    }

    fn remember_path(&mut self, colony: &Colony) {
        if self.carrying || self.position.distance(colony.position) <= self.params.trail_min_distance {
            return;
        }
        let spaced = self
            .trail
            .back()
            .map_or(true, |last| last.distance(self.position) > self.params.trail_spacing);
        if spaced {
            self.trail.push_back(self.position);
            if self.trail.len() > self.params.trail_capacity {
                self.trail.pop_front();
            }
        }
    }

    /// Apply the desired direction to velocity and position.
    ///
    /// Velocity is a per-tick displacement: it is added to the position
    /// as-is, so effective speed scales with the tick rate.
    pub fn integrate(&mut self, dt: f32, colony: &Colony) {
        let max_speed = self.params.max_speed;
        if self.carrying {
            self.velocity = self.position.direction_to(colony.position) * max_speed;
        } else {
            let desired_velocity = self.desired_direction * max_speed;
            let steering = (desired_velocity - self.velocity).clamp_length_max(self.params.steer_strength);
            self.velocity += steering * dt;
            self.velocity = self.velocity.clamp_length_max(max_speed);
        }

        self.position += self.velocity;
        self.distance_travelled += self.velocity.length();
        if !self.velocity.is_zero() {
            self.facing = self.velocity.heading_angle();
        }
    }

    /// One full tick of the agent itself: decide, mark, remember, move
    pub fn decide_and_move(
        &mut self,
        dt: f32,
        colony: &Colony,
        field: &mut PheromoneField,
        rng: &mut fastrand::Rng,
    ) -> Behavior {
        let behavior = self.decide(colony, field, rng);
        self.lay_pheromone(dt, colony, field);
        self.remember_path(colony);
        self.integrate(dt, colony);
        self.steps_since_food = self.steps_since_food.saturating_add(1);
        behavior
    }

    /// Take an item from `cluster_id`. Returns false if already carrying.
    pub fn pickup_food(&mut self, cluster_id: u32) -> bool {
        if self.carrying {
            return false;
        }
        self.carrying = true;
        self.cargo = Some(cluster_id);
        self.perceived_food = None;
        self.steps_since_food = 0;
        true
    }

    /// Hand the carried item to the colony. Returns false, touching
    /// nothing, if not carrying.
    pub fn deposit_food(&mut self, colony: &mut Colony) -> bool {
        if !self.carrying {
            return false;
        }
        colony.deposit_food(self.cargo);
        self.carrying = false;
        self.cargo = None;
        self.trail.clear();
        self.last_followed = None;
        self.distance_travelled = 0.0;
        true
    }
}
