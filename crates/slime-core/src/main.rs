//! Slime Trail Simulation
//!
//! Headless runner: builds a simulation from `slime.toml` (or defaults), applies
//! command-line overrides and runs it for a fixed number of frames.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use slime_core::config::{SimConfig, DEFAULT_CONFIG_PATH};
use slime_core::output::ReportWriter;
use slime_core::presenter::{self, FixedClock, FrameClock, HeadlessPresenter, Viewport, WallClock};
use slime_core::setup::SwarmSummary;
use slime_core::Simulation;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "slime_sim")]
#[command(about = "A slime-mould style trail simulation")]
struct Args {
    /// TOML config file (defaults to slime.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u64>,

    /// Fixed frame delta in seconds
    #[arg(long)]
    dt: Option<f32>,

    /// Measure frame deltas from the wall clock
    #[arg(long)]
    realtime: bool,

    /// Number of agents
    #[arg(long)]
    agents: Option<usize>,

    /// Agent speed in pixels per second
    #[arg(long)]
    speed: Option<f32>,

    /// Field width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Field height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Write every frame report to stdout as a JSON line
    #[arg(long)]
    jsonl: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn load_config(&self) -> Result<SimConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::load_or_default(DEFAULT_CONFIG_PATH),
        };

        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(frames) = self.frames {
            config.simulation.frames = frames;
        }
        if let Some(dt) = self.dt {
            config.simulation.fixed_dt = dt;
        }
        if self.realtime {
            config.simulation.realtime = true;
        }
        if let Some(agents) = self.agents {
            config.swarm.agent_count = agents;
        }
        if let Some(speed) = self.speed {
            config.swarm.speed = speed;
        }
        if let Some(width) = self.width {
            config.field.width = width;
        }
        if let Some(height) = self.height {
            config.field.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slime_core=info,slime_sim=info"));
    // Logs go to stderr so --jsonl output on stdout stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();
    let config = args.load_config()?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let sim_config = &config.simulation;
    tracing::info!("Slime Trail Simulation");
    tracing::info!("Seed: {}", sim_config.seed);
    tracing::info!("Frames: {}", sim_config.frames);
    tracing::info!("Field: {}x{}", config.field.width, config.field.height);
    tracing::info!(
        "Trails: fade {} /s, diffuse {}",
        config.trail.fade_rate,
        config.trail.diffuse_rate
    );

    let mut sim = Simulation::new(&config)?;
    let bounds = config.field.bounds()?;
    tracing::info!("Spawned {}", SwarmSummary::new(&config.swarm, bounds));

    let reports = if args.jsonl {
        ReportWriter::stdout()
    } else {
        ReportWriter::null()
    };
    let mut presenter = HeadlessPresenter::new(
        sim_config.frames,
        Viewport::new(config.field.width, config.field.height),
    )
    .with_report_interval(sim_config.report_interval)
    .with_reports(reports);

    let mut clock: Box<dyn FrameClock> = if sim_config.realtime {
        Box::new(WallClock::new())
    } else {
        Box::new(FixedClock(sim_config.fixed_dt))
    };

    let summary = presenter::run(&mut sim, clock.as_mut(), &mut presenter)?;
    presenter.finish(&summary);

    tracing::info!(
        "Simulation complete. Ran {} frames ({:.2}s simulated, mean dt {:.4}s), {} pixels lit at the end.",
        summary.frames,
        summary.simulated_seconds,
        summary.mean_dt(),
        summary.final_field.lit_pixels
    );

    Ok(())
}
