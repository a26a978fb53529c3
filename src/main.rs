use ant_forage::prelude::*;
use ant_forage::world::parse_scenario;
use clap::Parser;
use colored::Colorize;

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let config = args.config();
    config.validate()?;
    ConfigError::require_positive("dt", args.dt)?;

    // Build world and spawn ants on the colony
    let scenario = match &args.map {
        Some(path) => parse_scenario(path, config.width, config.height)?,
        None => Scenario::quadrants(config.width, config.height, args.food),
    };
    let mut world = World::from_scenario(&scenario, &config, &mut rng)?;
    let mut ants = world.create_ants(config.ants, config.ant, &mut rng)?;
    tracing::info!(
        ants = ants.len(),
        food = world.remaining_food(),
        clusters = world.clusters.len(),
        "world ready"
    );

    // Run simulation
    let mut engine = SimulationEngine::new(&config, args.suppress_events);
    let simulation_time = engine.run_simulation(&mut world, &mut ants, args.ticks, args.dt, &mut rng);

    // Print results
    engine.print_summary(&world, &ants, simulation_time);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
