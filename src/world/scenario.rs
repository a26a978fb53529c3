use crate::config::COLONY_RADIUS;
use crate::vector::Vec2;

/// Spread used by the built-in quadrant layout
pub const QUADRANT_SPREAD: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColonySpec {
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterSpec {
    pub center: Vec2,
    pub count: usize,
    pub spread: f32,
}

/// Static layout of a run: arena size, colony and food clusters
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub width: f32,
    pub height: f32,
    pub colony: ColonySpec,
    pub clusters: Vec<ClusterSpec>,
}

impl Scenario {
    /// Empty arena with the colony at its center
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            colony: ColonySpec {
                position: Vec2::new(width / 2.0, height / 2.0),
                radius: COLONY_RADIUS,
            },
            clusters: Vec::new(),
        }
    }

    /// Colony in the middle, `food / 4` items at each quarter point
    pub fn quadrants(width: f32, height: f32, food: usize) -> Self {
        let mut scenario = Self::new(width, height);
        let per_cluster = food / 4;
        for (fx, fy) in [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)] {
            scenario.clusters.push(ClusterSpec {
                center: Vec2::new(width * fx, height * fy),
                count: per_cluster,
                spread: QUADRANT_SPREAD,
            });
        }
        scenario
    }

    pub fn total_food(&self) -> usize {
        self.clusters.iter().map(|c| c.count).sum()
    }
}
