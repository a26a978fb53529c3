use crate::ant::Ant;
use crate::colony::Colony;
use crate::config::SimConfig;
use crate::vector::{Steering, Vec2};
use crate::world::{Bounds, World};

/// Outcome of a pickup or delivery during collision resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForageEvent {
    PickedUp { ant: u32, cluster: u32 },
    Delivered { ant: u32, cluster: Option<u32>, total: u32 },
}

/// Post-move resolution: arena walls, colony body, pickup and delivery
#[derive(Clone, Copy, Debug)]
pub struct CollisionResolver {
    /// Max distance between an ant and its perceived item for a pickup
    pub pickup_radius: f32,
    /// Max distance between a carrier and the colony center for a delivery
    pub arrival_radius: f32,
}

impl CollisionResolver {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pickup_radius: config.pickup_radius,
            arrival_radius: config.arrival_radius,
        }
    }

    /// Run every check for one ant after it moved. Returns the pickup or
    /// delivery that happened, if any.
    pub fn resolve(&self, ant: &mut Ant, world: &mut World, food: &mut Vec<Vec2>) -> Option<ForageEvent> {
        Self::confine(ant, &world.bounds);

        // A delivering ant is not bounced off the colony
        if let Some(event) = self.try_deliver(ant, &mut world.colony) {
            return Some(event);
        }
        Self::bounce_off_colony(ant, &world.colony);
        self.try_pickup(ant, world, food)
    }

    /// Clamp into the margin, reflecting the velocity on each clamped axis.
    /// Returns whether any axis was clamped.
    pub fn confine(ant: &mut Ant, bounds: &Bounds) -> bool {
        let (min, max) = (bounds.min(), bounds.max());
        let mut hit = false;

        if ant.position.x < min.x {
            ant.position.x = min.x;
            ant.velocity.x = ant.velocity.x.abs();
            hit = true;
        } else if ant.position.x > max.x {
            ant.position.x = max.x;
            ant.velocity.x = -ant.velocity.x.abs();
            hit = true;
        }

        if ant.position.y < min.y {
            ant.position.y = min.y;
            ant.velocity.y = ant.velocity.y.abs();
            hit = true;
        } else if ant.position.y > max.y {
            ant.position.y = max.y;
            ant.velocity.y = -ant.velocity.y.abs();
            hit = true;
        }

        hit
    }

    /// Push an ant standing inside the colony body out to its rim, moving
    /// outward at half speed
    pub fn bounce_off_colony(ant: &mut Ant, colony: &Colony) -> bool {
        if !colony.contains(ant.position, None) {
            return false;
        }
        let mut outward = colony.position.direction_to(ant.position);
        if outward.is_zero() {
            outward = ant.heading();
        }
        ant.position = colony.position + outward * colony.radius;
        ant.velocity = outward * (ant.params().max_speed * 0.5);
        ant.facing = outward.heading_angle();
        true
    }

    /// Unload a carrier that reached the colony
    pub fn try_deliver(&self, ant: &mut Ant, colony: &mut Colony) -> Option<ForageEvent> {
        if !ant.is_carrying() || !colony.contains(ant.position, Some(self.arrival_radius)) {
            return None;
        }
        let cluster = ant.carried_cluster();
        ant.deposit_food(colony).then(|| ForageEvent::Delivered {
            ant: ant.id,
            cluster,
            total: colony.total_deposited(),
        })
    }

    /// Pick up the perceived item once the ant is close enough. The item
    /// leaves both its cluster and this tick's candidate list.
    pub fn try_pickup(&self, ant: &mut Ant, world: &mut World, food: &mut Vec<Vec2>) -> Option<ForageEvent> {
        if ant.is_carrying() {
            return None;
        }
        let target = ant.perceived_food()?;
        if ant.position.distance(target) >= self.pickup_radius {
            return None;
        }
        let cluster = world.take_food(target)?;
        if let Some(idx) = food.iter().position(|p| *p == target) {
            food.remove(idx);
        }
        ant.pickup_food(cluster);
        Some(ForageEvent::PickedUp { ant: ant.id, cluster })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AntParams;
    use crate::food::FoodCluster;
    use crate::pheromone::PheromoneField;

    const EPS: f32 = 1e-4;

    fn world_with(items: Vec<Vec2>) -> World {
        World::new(
            Bounds::new(400.0, 400.0, 10.0).unwrap(),
            Colony::new(Vec2::new(200.0, 200.0), 40.0).unwrap(),
            vec![FoodCluster::new(0, Vec2::new(300.0, 200.0), 20.0, items).unwrap()],
            PheromoneField::new(1.0, 50.0).unwrap(),
        )
    }

    fn resolver() -> CollisionResolver {
        CollisionResolver::new(&SimConfig::default())
    }

    fn ant_at(x: f32, y: f32) -> Ant {
        Ant::new(7, Vec2::new(x, y), 0.0, AntParams::default()).unwrap()
    }

    #[test]
    fn test_confine_reflects_velocity() {
        let bounds = Bounds::new(400.0, 400.0, 10.0).unwrap();
        let mut ant = ant_at(0.0, 200.0);
        ant.velocity = Vec2::new(-3.0, 1.0);

        assert!(CollisionResolver::confine(&mut ant, &bounds));
        assert_eq!(ant.position, Vec2::new(10.0, 200.0));
        assert_eq!(ant.velocity, Vec2::new(3.0, 1.0));

        let mut corner = ant_at(405.0, 398.0);
        corner.velocity = Vec2::new(2.0, 4.0);
        assert!(CollisionResolver::confine(&mut corner, &bounds));
        assert_eq!(corner.position, Vec2::new(390.0, 390.0));
        assert_eq!(corner.velocity, Vec2::new(-2.0, -4.0));
    }

    #[test]
    fn test_confine_inside_untouched() {
        let bounds = Bounds::new(400.0, 400.0, 10.0).unwrap();
        let mut ant = ant_at(100.0, 100.0);
        ant.velocity = Vec2::new(-3.0, 1.0);
        assert!(!CollisionResolver::confine(&mut ant, &bounds));
        assert_eq!(ant.velocity, Vec2::new(-3.0, 1.0));
    }

    #[test]
    fn test_bounce_off_colony() {
        let colony = Colony::new(Vec2::new(200.0, 200.0), 40.0).unwrap();
        let mut ant = ant_at(210.0, 200.0);

        assert!(CollisionResolver::bounce_off_colony(&mut ant, &colony));
        assert!((ant.position.x - 240.0).abs() < EPS);
        assert!((ant.velocity.x - 3.5).abs() < EPS);
        assert!(ant.velocity.length() <= ant.params().max_speed);

        // Already outside
        assert!(!CollisionResolver::bounce_off_colony(&mut ant, &colony));
    }

    #[test]
    fn test_bounce_from_center_uses_heading() {
        let colony = Colony::new(Vec2::new(200.0, 200.0), 40.0).unwrap();
        let mut ant = ant_at(200.0, 200.0);
        ant.velocity = Vec2::new(0.0, 2.0);

        assert!(CollisionResolver::bounce_off_colony(&mut ant, &colony));
        assert!((ant.position.y - 240.0).abs() < EPS);
        assert!((ant.velocity.y - 3.5).abs() < EPS);
    }

    #[test]
    fn test_delivery_skips_bounce() {
        let mut world = world_with(vec![]);
        let mut food = Vec::new();
        let mut ant = ant_at(210.0, 200.0);
        ant.pickup_food(0);

        let event = resolver().resolve(&mut ant, &mut world, &mut food);
        assert_eq!(
            event,
            Some(ForageEvent::Delivered { ant: 7, cluster: Some(0), total: 1 })
        );
        assert_eq!(ant.position, Vec2::new(210.0, 200.0));
        assert!(!ant.is_carrying());
    }

    #[test]
    fn test_no_delivery_outside_arrival_radius() {
        let mut colony = Colony::new(Vec2::new(200.0, 200.0), 40.0).unwrap();
        let mut ant = ant_at(260.0, 200.0);
        ant.pickup_food(0);
        assert_eq!(resolver().try_deliver(&mut ant, &mut colony), None);
        assert!(ant.is_carrying());
        assert_eq!(colony.total_deposited(), 0);
    }

    #[test]
    fn test_pickup_removes_item() {
        let item = Vec2::new(305.0, 200.0);
        let other = Vec2::new(320.0, 200.0);
        let mut world = world_with(vec![item, other]);
        let mut food = world.food_positions();
        let mut ant = ant_at(300.0, 200.0);
        ant.perceive(&food);
        assert_eq!(ant.perceived_food(), Some(item));

        let event = resolver().resolve(&mut ant, &mut world, &mut food);
        assert_eq!(event, Some(ForageEvent::PickedUp { ant: 7, cluster: 0 }));
        assert!(ant.is_carrying());
        assert_eq!(world.remaining_food(), 1);
        assert_eq!(food, vec![other]);
    }

    #[test]
    fn test_no_pickup_when_far() {
        let item = Vec2::new(330.0, 200.0);
        let mut world = world_with(vec![item]);
        let mut food = world.food_positions();
        let mut ant = ant_at(300.0, 200.0);
        ant.perceive(&food);
        assert_eq!(ant.perceived_food(), Some(item));

        assert_eq!(resolver().resolve(&mut ant, &mut world, &mut food), None);
        assert!(!ant.is_carrying());
        assert_eq!(world.remaining_food(), 1);
    }
}
