use crate::ant::Ant;
use crate::config::SimConfig;
use crate::pheromone::PheromoneKind;
use crate::simulation::collision::{CollisionResolver, ForageEvent};
use crate::world::World;
use colored::Colorize;
use std::time::{Duration, Instant};

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub pickups: u32,
    pub deliveries: u32,
    /// Live markers after the tick
    pub markers: usize,
}

/// Drives the world one tick at a time.
///
/// Each tick decays the pheromone field once, then runs every ant in order:
/// perceive, decide and move, then collision resolution. Ants share the
/// world and see each other's writes from earlier in the same tick.
pub struct SimulationEngine {
    pub resolver: CollisionResolver,
    suppress_events: bool,
    ticks: u64,
    pickups: u64,
    deliveries: u64,
}

impl SimulationEngine {
    pub fn new(config: &SimConfig, suppress_events: bool) -> Self {
        Self {
            resolver: CollisionResolver::new(config),
            suppress_events,
            ticks: 0,
            pickups: 0,
            deliveries: 0,
        }
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn total_pickups(&self) -> u64 {
        self.pickups
    }

    pub fn total_deliveries(&self) -> u64 {
        self.deliveries
    }

    /// Advance the simulation by one tick of `dt` seconds
    pub fn step(&mut self, world: &mut World, ants: &mut [Ant], dt: f32, rng: &mut fastrand::Rng) -> TickReport {
        world.pheromones.advance(dt);

        let mut report = TickReport::default();
        let mut food = world.food_positions();

        for ant in ants.iter_mut() {
            ant.perceive(&food);
            ant.decide_and_move(dt, &world.colony, &mut world.pheromones, rng);

            if let Some(event) = self.resolver.resolve(ant, world, &mut food) {
                match event {
                    ForageEvent::PickedUp { .. } => report.pickups += 1,
                    ForageEvent::Delivered { .. } => report.deliveries += 1,
                }
                self.log_event(&event);
            }
        }

        self.ticks += 1;
        self.pickups += report.pickups as u64;
        self.deliveries += report.deliveries as u64;
        report.markers = world.pheromones.len();
        report
    }

    /// Run up to `ticks` ticks, stopping early once every item is home.
    /// Returns wall-clock time spent.
    pub fn run_simulation(
        &mut self,
        world: &mut World,
        ants: &mut [Ant],
        ticks: u64,
        dt: f32,
        rng: &mut fastrand::Rng,
    ) -> Duration {
        let sim_start = Instant::now();

        for _ in 0..ticks {
            self.step(world, ants, dt, rng);

            if world.is_harvested() && !ants.iter().any(Ant::is_carrying) {
                tracing::debug!(tick = self.ticks, "all food delivered, stopping early");
                break;
            }
        }

        sim_start.elapsed()
    }

    fn log_event(&self, event: &ForageEvent) {
        match *event {
            ForageEvent::PickedUp { ant, cluster } => {
                tracing::debug!(tick = self.ticks, ant, cluster, "food picked up");
            }
            ForageEvent::Delivered { ant, cluster, total } => {
                tracing::debug!(tick = self.ticks, ant, ?cluster, total, "food delivered");
            }
        }
        if self.suppress_events {
            return;
        }
        match *event {
            ForageEvent::PickedUp { ant, cluster } => println!(
                "{} {} {}",
                "🍃".green(),
                format!("ant {}", ant).yellow(),
                format!("picked up food from cluster {}", cluster).green(),
            ),
            ForageEvent::Delivered { ant, cluster, total } => println!(
                "{} {} {} {}",
                "🏠".bright_blue(),
                format!("ant {}", ant).yellow(),
                match cluster {
                    Some(id) => format!("delivered food from cluster {}", id),
                    None => "delivered food".to_string(),
                }
                .bright_blue(),
                format!("(total {})", total).dimmed(),
            ),
        }
    }

    /// Print simulation summary
    pub fn print_summary(&self, world: &World, ants: &[Ant], simulation_time: Duration) {
        let stats = world.colony.stats();
        let carrying = ants.iter().filter(|a| a.is_carrying()).count();

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "(headless)".dimmed(),
            "|".dimmed(),
            format!("ants={}", ants.len()).cyan(),
            format!("ticks={}", self.ticks).cyan(),
            format!("collected={}", stats.total).cyan(),
            format!("carrying={}", carrying).cyan(),
            format!("remaining={}", world.remaining_food()).cyan(),
        );

        for cluster in &world.clusters {
            println!(
                "  {} {} {}",
                format!("cluster {}:", cluster.id).bold(),
                format!("delivered={}", world.colony.delivered_from(cluster.id)).green(),
                format!("left={}", cluster.remaining_count()).dimmed(),
            );
        }

        let markers: Vec<String> = PheromoneKind::ALL
            .iter()
            .map(|&kind| format!("{}={}", kind.as_str(), world.pheromones.count(kind)))
            .collect();
        println!("  {} {}", "markers:".bold(), markers.join(" ").magenta());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colony::Colony;
    use crate::config::AntParams;
    use crate::food::FoodCluster;
    use crate::pheromone::PheromoneField;
    use crate::vector::Vec2;
    use crate::world::Bounds;

    fn lone_item_world(item: Vec2) -> World {
        World::new(
            Bounds::new(400.0, 400.0, 10.0).unwrap(),
            Colony::new(Vec2::new(200.0, 200.0), 40.0).unwrap(),
            vec![FoodCluster::new(0, item, 10.0, vec![item]).unwrap()],
            PheromoneField::new(0.3, 50.0).unwrap(),
        )
    }

    #[test]
    fn test_step_decays_field_first() {
        let mut world = lone_item_world(Vec2::new(300.0, 300.0));
        world.pheromones.deposit(Vec2::new(50.0, 50.0), PheromoneKind::Return, 0.06);
        let mut ants: Vec<Ant> = Vec::new();
        let mut engine = SimulationEngine::new(&SimConfig::default(), true);
        let mut rng = fastrand::Rng::with_seed(1);

        let report = engine.step(&mut world, &mut ants, 0.1, &mut rng);
        assert_eq!(report, TickReport::default());
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_forage_round_trip() {
        let item = Vec2::new(260.0, 200.0);
        let mut world = lone_item_world(item);
        let mut ants = vec![Ant::new(0, Vec2::new(245.0, 200.0), 0.0, AntParams::default()).unwrap()];
        let mut engine = SimulationEngine::new(&SimConfig::default(), true);
        let mut rng = fastrand::Rng::with_seed(42);

        let mut picked_at = None;
        for tick in 0..200 {
            let report = engine.step(&mut world, &mut ants, 1.0 / 60.0, &mut rng);
            if report.pickups > 0 {
                picked_at = Some(tick);
            }
            if report.deliveries > 0 {
                break;
            }
        }

        assert!(picked_at.is_some());
        assert!(world.is_harvested());
        assert_eq!(world.colony.total_deposited(), 1);
        assert_eq!(world.colony.delivered_from(0), 1);
        assert!(!ants[0].is_carrying());
        assert_eq!(engine.total_pickups(), 1);
        assert_eq!(engine.total_deliveries(), 1);
    }

    #[test]
    fn test_run_stops_when_harvested() {
        let item = Vec2::new(260.0, 200.0);
        let mut world = lone_item_world(item);
        let mut ants = vec![Ant::new(0, Vec2::new(245.0, 200.0), 0.0, AntParams::default()).unwrap()];
        let mut engine = SimulationEngine::new(&SimConfig::default(), true);
        let mut rng = fastrand::Rng::with_seed(42);

        engine.run_simulation(&mut world, &mut ants, 10_000, 1.0 / 60.0, &mut rng);
        assert!(engine.ticks() < 10_000);
        assert_eq!(world.colony.total_deposited(), 1);
    }

    #[test]
    fn test_carrier_reaches_wide_colony() {
        // Colony body just inside the arrival threshold
        let mut world = World::new(
            Bounds::new(400.0, 400.0, 10.0).unwrap(),
            Colony::new(Vec2::new(200.0, 200.0), 49.0).unwrap(),
            Vec::new(),
            PheromoneField::new(0.3, 50.0).unwrap(),
        );
        let mut carrier = Ant::new(0, Vec2::new(300.0, 200.0), 0.0, AntParams::default()).unwrap();
        carrier.pickup_food(0);
        let mut ants = vec![carrier];
        let mut engine = SimulationEngine::new(&SimConfig::default(), true);
        let mut rng = fastrand::Rng::with_seed(5);

        engine.run_simulation(&mut world, &mut ants, 2000, 1.0 / 60.0, &mut rng);
        assert_eq!(world.colony.total_deposited(), 1);
        assert!(!ants[0].is_carrying());
    }
}
