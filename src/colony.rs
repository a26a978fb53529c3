use crate::error::ConfigError;
use crate::vector::Vec2;
use std::collections::BTreeMap;

/// Home base: where ants spawn and unload food
#[derive(Clone, Debug)]
pub struct Colony {
    pub position: Vec2,
    pub radius: f32,
    total: u32,
    by_cluster: BTreeMap<u32, u32>,
}

/// Snapshot of delivered food, for statistics display
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColonyStats {
    pub total: u32,
    /// Deliveries per cluster id, sorted by id
    pub by_cluster: Vec<(u32, u32)>,
}

impl Colony {
    pub fn new(position: Vec2, radius: f32) -> Result<Self, ConfigError> {
        ConfigError::require_non_negative("colony radius", radius)?;
        Ok(Self {
            position,
            radius,
            total: 0,
            by_cluster: BTreeMap::new(),
        })
    }

    /// Whether `position` is closer than `threshold` (default: the radius)
    #[inline]
    pub fn contains(&self, position: Vec2, threshold: Option<f32>) -> bool {
        let threshold = threshold.unwrap_or(self.radius);
        self.position.distance(position) < threshold
    }

    /// Count one delivered item, attributed to its cluster when known
    pub fn deposit_food(&mut self, cluster_id: Option<u32>) {
        self.total += 1;
        if let Some(id) = cluster_id {
            *self.by_cluster.entry(id).or_insert(0) += 1;
        }
    }

    #[inline]
    pub fn total_deposited(&self) -> u32 {
        self.total
    }

    pub fn delivered_from(&self, cluster_id: u32) -> u32 {
        self.by_cluster.get(&cluster_id).copied().unwrap_or(0)
    }

    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            total: self.total,
            by_cluster: self.by_cluster.iter().map(|(&id, &n)| (id, n)).collect(),
        }
    }
}
