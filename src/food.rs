use crate::error::ConfigError;
use crate::vector::Vec2;
use std::f32::consts::TAU;

/// Items closer than this to a requested position count as the same item
pub const REMOVE_EPSILON: f32 = 1.0;

/// Display colors, picked by `id % 4`
pub const PALETTE: [[u8; 3]; 4] = [
    [50, 255, 50],
    [255, 50, 50],
    [50, 50, 255],
    [255, 255, 50],
];

/// A group of food items scattered around a shared center
#[derive(Clone, Debug)]
pub struct FoodCluster {
    pub id: u32,
    pub center: Vec2,
    pub spread: f32,
    pub color: [u8; 3],
    items: Vec<Vec2>,
}

impl FoodCluster {
    /// Create a cluster from explicit item positions
    pub fn new(id: u32, center: Vec2, spread: f32, items: Vec<Vec2>) -> Result<Self, ConfigError> {
        ConfigError::require_non_negative("cluster spread", spread)?;
        Ok(Self {
            id,
            center,
            spread,
            color: PALETTE[id as usize % PALETTE.len()],
            items,
        })
    }

    /// Scatter `count` items uniformly in angle and distance around `center`
    pub fn scatter(
        id: u32,
        center: Vec2,
        count: usize,
        spread: f32,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, ConfigError> {
        ConfigError::require_non_negative("cluster spread", spread)?;
        let items = (0..count)
            .map(|_| {
                let angle = rng.f32() * TAU;
                let distance = rng.f32() * spread;
                center + Vec2::from_angle(angle) * distance
            })
            .collect();
        Self::new(id, center, spread, items)
    }

    /// Closest remaining item, optionally limited to `max_distance`.
    /// On equal distances the item stored first wins.
    pub fn nearest_to(&self, position: Vec2, max_distance: Option<f32>) -> Option<Vec2> {
        let mut nearest = None;
        let mut best = f32::INFINITY;
        for &item in &self.items {
            let distance = item.distance(position);
            if distance < best && max_distance.map_or(true, |max| distance <= max) {
                best = distance;
                nearest = Some(item);
            }
        }
        nearest
    }

    /// Remove the first item within `REMOVE_EPSILON` of `position`
    pub fn remove(&mut self, position: Vec2) -> bool {
        match self
            .items
            .iter()
            .position(|item| item.distance(position) < REMOVE_EPSILON)
        {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether an item sits exactly at `position`
    #[inline]
    pub fn contains(&self, position: Vec2) -> bool {
        self.items.contains(&position)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.items.len()
    }

    /// Remaining item positions, for perception and rendering
    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_cluster() -> FoodCluster {
        let items = vec![
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(-10.0, 0.0),
        ];
        FoodCluster::new(1, Vec2::ZERO, 20.0, items).unwrap()
    }

    #[test]
    fn test_scatter_within_spread() {
        let mut rng = fastrand::Rng::with_seed(9);
        let center = Vec2::new(250.0, 250.0);
        let cluster = FoodCluster::scatter(2, center, 50, 80.0, &mut rng).unwrap();

        assert_eq!(cluster.remaining_count(), 50);
        assert_eq!(cluster.color, PALETTE[2]);
        for item in cluster.positions() {
            assert!(item.distance(center) <= 80.0 + 1e-3);
        }
    }

    #[test]
    fn test_rejects_negative_spread() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(FoodCluster::scatter(0, Vec2::ZERO, 5, -1.0, &mut rng).is_err());
    }

    #[test]
    fn test_nearest_to() {
        let cluster = line_cluster();
        assert_eq!(cluster.nearest_to(Vec2::new(18.0, 0.0), None), Some(Vec2::new(20.0, 0.0)));
        assert_eq!(cluster.nearest_to(Vec2::new(100.0, 0.0), Some(50.0)), None);
        assert_eq!(
            cluster.nearest_to(Vec2::new(100.0, 0.0), Some(80.0)),
            Some(Vec2::new(20.0, 0.0))
        );
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        // (10,0) and (-10,0) are equally far from the origin
        let cluster = line_cluster();
        assert_eq!(cluster.nearest_to(Vec2::ZERO, None), Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_remove_single_item() {
        let items = vec![Vec2::new(0.0, 0.0), Vec2::new(0.2, 0.0), Vec2::new(50.0, 0.0)];
        let mut cluster = FoodCluster::new(0, Vec2::ZERO, 60.0, items).unwrap();

        // Two items are within epsilon, only one goes
        assert!(cluster.remove(Vec2::new(0.1, 0.0)));
        assert_eq!(cluster.remaining_count(), 2);
        assert_eq!(cluster.positions()[0], Vec2::new(0.2, 0.0));

        // Nothing within epsilon
        assert!(!cluster.remove(Vec2::new(25.0, 0.0)));
        assert_eq!(cluster.remaining_count(), 2);
    }

    #[test]
    fn test_empty_cluster_persists() {
        let mut cluster = FoodCluster::new(3, Vec2::ZERO, 5.0, vec![Vec2::new(1.0, 1.0)]).unwrap();
        assert!(!cluster.is_empty());
        assert!(cluster.remove(Vec2::new(1.0, 1.0)));
        assert!(cluster.is_empty());
        assert_eq!(cluster.remaining_count(), 0);
        assert_eq!(cluster.nearest_to(Vec2::ZERO, None), None);
        assert!(!cluster.remove(Vec2::new(1.0, 1.0)));
    }
}
