use crate::ant::Ant;
use crate::colony::Colony;
use crate::config::{AntParams, SimConfig};
use crate::error::ConfigError;
use crate::food::FoodCluster;
use crate::pheromone::PheromoneField;
use crate::vector::Vec2;
use crate::world::bounds::Bounds;
use crate::world::scenario::Scenario;
use std::f32::consts::TAU;

/// Shared environment every ant reads and writes: one colony, one
/// pheromone field, the food clusters and the arena bounds
#[derive(Clone, Debug)]
pub struct World {
    pub bounds: Bounds,
    pub colony: Colony,
    pub clusters: Vec<FoodCluster>,
    pub pheromones: PheromoneField,
}

impl World {
    pub fn new(bounds: Bounds, colony: Colony, clusters: Vec<FoodCluster>, pheromones: PheromoneField) -> Self {
        Self {
            bounds,
            colony,
            clusters,
            pheromones,
        }
    }

    /// Build the world described by `scenario`, scattering food with `rng`.
    /// Cluster ids follow scenario order.
    pub fn from_scenario(
        scenario: &Scenario,
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, ConfigError> {
        let bounds = Bounds::new(scenario.width, scenario.height, config.margin)?;
        let colony = Colony::new(scenario.colony.position, scenario.colony.radius)?;
        config.check_arrival(colony.radius)?;
        let clusters = scenario
            .clusters
            .iter()
            .enumerate()
            .map(|(id, spec)| FoodCluster::scatter(id as u32, spec.center, spec.count, spec.spread, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let pheromones = PheromoneField::from_params(&config.pheromone)?;
        Ok(Self::new(bounds, colony, clusters, pheromones))
    }

    /// Spawn `count` ants on the colony with random headings
    pub fn create_ants(
        &self,
        count: usize,
        params: AntParams,
        rng: &mut fastrand::Rng,
    ) -> Result<Vec<Ant>, ConfigError> {
        (0..count)
            .map(|i| Ant::new(i as u32, self.colony.position, rng.f32() * TAU, params))
            .collect()
    }

    /// Every remaining food position, cluster by cluster
    pub fn food_positions(&self) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(self.remaining_food());
        for cluster in &self.clusters {
            out.extend_from_slice(cluster.positions());
        }
        out
    }

    pub fn remaining_food(&self) -> usize {
        self.clusters.iter().map(FoodCluster::remaining_count).sum()
    }

    /// All clusters are empty
    pub fn is_harvested(&self) -> bool {
        self.clusters.iter().all(FoodCluster::is_empty)
    }

    pub fn cluster(&self, id: u32) -> Option<&FoodCluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    /// Remove the item at `position` from whichever cluster holds it.
    /// Returns that cluster's id.
    pub fn take_food(&mut self, position: Vec2) -> Option<u32> {
        self.clusters
            .iter_mut()
            .filter(|c| c.contains(position))
            .find_map(|c| c.remove(position).then_some(c.id))
    }
}
