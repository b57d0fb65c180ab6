use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use nasch::montecarlo;
use nasch::simulation::{
    fundamental_diagram_points, mean_velocity, run_density_sweep, time_seed,
    total_distance_travelled, vehicle_counts, InitMode, Simulation, SimulationConfig, SimRng,
};

#[derive(Parser)]
#[command(name = "nasch")]
#[command(about = "Nagel-Schreckenberg traffic and small Monte-Carlo experiments")]
struct Cli {
    /// Seed for the random source, defaults to the current time
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Single-lane traffic on a circular road
    Traffic(TrafficArgs),

    /// Estimate pi by throwing darts
    Pi {
        /// Number of darts
        #[arg(long, default_value = "1000000")]
        samples: usize,
    },

    /// Travel times with a circular expressway
    Expressway {
        /// "1" for the fixed trips, "2" for 20 random trips
        scenario: Option<String>,
    },

    /// Coin toss statistics for increasing batch sizes
    Coin {
        /// Largest batch (exclusive)
        #[arg(long, default_value = "1000")]
        max_tosses: usize,
    },
}

#[derive(Args)]
struct TrafficArgs {
    /// "1" small run, "2" density sweep, anything else the default run
    scenario: Option<String>,

    #[arg(long)]
    vehicles: Option<usize>,

    #[arg(long)]
    road_length: Option<usize>,

    #[arg(long)]
    v_max: Option<usize>,

    #[arg(long)]
    slowing_chance: Option<f64>,

    #[arg(long)]
    burn_in: Option<usize>,

    #[arg(long)]
    iterations: Option<usize>,

    #[arg(long, value_enum)]
    init: Option<InitArg>,

    /// Print the recorded ticks as a space-time diagram
    #[arg(long)]
    draw: bool,

    /// Spacing between vehicle counts in the density sweep
    #[arg(long, default_value = "5")]
    sweep_step: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum InitArg {
    Random,
    Equidistant,
    FirstK,
}

impl From<InitArg> for InitMode {
    fn from(arg: InitArg) -> Self {
        match arg {
            InitArg::Random => InitMode::Random,
            InitArg::Equidistant => InitMode::Equidistant,
            InitArg::FirstK => InitMode::FirstK,
        }
    }
}

impl TrafficArgs {
    /// Apply command-line overrides on top of a preset
    fn apply(&self, base: SimulationConfig) -> SimulationConfig {
        SimulationConfig {
            vehicle_count: self.vehicles.unwrap_or(base.vehicle_count),
            road_length: self.road_length.unwrap_or(base.road_length),
            v_max: self.v_max.unwrap_or(base.v_max),
            slowing_chance: self.slowing_chance.unwrap_or(base.slowing_chance),
            burn_in_iters: self.burn_in.unwrap_or(base.burn_in_iters),
            iterations: self.iterations.unwrap_or(base.iterations),
            init_mode: self.init.map(InitMode::from).unwrap_or(base.init_mode),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,nasch=info"))
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(time_seed);
    info!("Using seed {}", seed);
    let mut rng = SimRng::from_seed(seed);

    match cli.command {
        Command::Traffic(args) => run_traffic(&args, &mut rng),
        Command::Pi { samples } => run_pi(samples, &mut rng),
        Command::Expressway { scenario } => {
            run_expressway(scenario.as_deref(), &mut rng);
            Ok(())
        }
        Command::Coin { max_tosses } => {
            run_coin(max_tosses, &mut rng);
            Ok(())
        }
    }
}

fn run_traffic(args: &TrafficArgs, rng: &mut SimRng) -> Result<()> {
    match args.scenario.as_deref() {
        Some("1") => run_single(args.apply(SimulationConfig::small()), args.draw, rng),
        Some("2") => {
            let base = args.apply(SimulationConfig {
                burn_in_iters: 100,
                iterations: 100,
                ..SimulationConfig::small()
            });
            run_sweep(&base, args.sweep_step, rng)
        }
        _ => run_single(args.apply(SimulationConfig::default()), args.draw, rng),
    }
}

fn run_single(config: SimulationConfig, draw: bool, rng: &mut SimRng) -> Result<()> {
    println!("Running traffic simulation...");
    println!(
        "Vehicles: {}, Zones: {}, v_max: {}, slowing chance: {:.3}",
        config.vehicle_count, config.road_length, config.v_max, config.slowing_chance
    );
    println!(
        "Burn-in: {} ticks, recorded: {} ticks",
        config.burn_in_iters, config.iterations
    );

    let outcome = Simulation::new(config)
        .context("Failed to set up traffic simulation")?
        .run(rng)
        .context("Traffic simulation failed")?;

    if draw {
        println!("{}", outcome.trajectory.draw());
    }

    println!("=== Final State ===");
    println!(
        "Total distance travelled: {}",
        total_distance_travelled(&outcome.trajectory)
    );
    println!("Mean velocity: {:.3}", mean_velocity(&outcome.trajectory));
    println!("Final velocities: {:?}", outcome.final_state.velocities());
    Ok(())
}

fn run_sweep(base: &SimulationConfig, step: usize, rng: &mut SimRng) -> Result<()> {
    let counts = vehicle_counts(base.road_length, step);
    println!(
        "Sweeping {} vehicle counts on {} zones...",
        counts.len(),
        base.road_length
    );

    let points = run_density_sweep(base, &counts, rng).context("Density sweep failed")?;
    let distances: Vec<u64> = points.iter().map(|p| p.total_distance).collect();

    println!("=== Fundamental Diagram ===");
    println!("vehicles,total_distance");
    for (vehicles, distance) in fundamental_diagram_points(&counts, &distances) {
        println!("{},{}", vehicles, distance);
    }
    Ok(())
}

fn run_pi(samples: usize, rng: &mut SimRng) -> Result<()> {
    let estimate = montecarlo::estimate_pi(samples, rng).context("Pi estimation failed")?;
    println!(
        "Pi estimate: {:.6} ({} of {} darts inside, error {:.6})",
        estimate.value,
        estimate.inside,
        estimate.throws,
        estimate.error()
    );
    Ok(())
}

fn run_expressway(scenario: Option<&str>, rng: &mut SimRng) {
    let trips = match scenario {
        Some("1") => montecarlo::fixed_trips(),
        _ => montecarlo::random_trips(20, rng),
    };
    let times = montecarlo::simulate_trips(&trips);
    if scenario == Some("1") {
        for (trip, time) in trips.iter().zip(&times) {
            println!(
                "({:.2}, {:.2}) -> ({:.2}, {:.2}): {:.4} via {:?}",
                trip.from.x, trip.from.y, trip.to.x, trip.to.y, time.time, time.route
            );
        }
    }
    println!("Average distance: {:.6}", montecarlo::average_time(&times));
}

fn run_coin(max_tosses: usize, rng: &mut SimRng) {
    println!("tosses,heads,tails");
    for (n, stats) in montecarlo::toss_sweep(max_tosses, rng).iter().enumerate() {
        println!("{},{},{}", n, stats.heads, stats.tails);
    }
}
