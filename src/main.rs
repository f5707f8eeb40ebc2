mod cli;
mod config;
mod error;
mod logic;
mod models;
mod output;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logic::calculations::monthly_summaries;
use logic::{JitterSource, RngJitter, SimulationRun, Simulator, ZeroJitter};
use models::{Dataset, Metadata};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level())),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(output) = cli.output {
        config.simulation.output = output;
    }
    if cli.seed.is_some() {
        config.simulation.seed = cli.seed;
    }
    if cli.no_jitter {
        config.simulation.jitter = false;
    }

    if let Some(Commands::ShowConfig) = cli.command {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    generate(&config)
}

fn generate(config: &Config) -> anyhow::Result<()> {
    let sim = &config.simulation;

    println!("{}", report::banner());
    print!("{}", report::monthly_plan());

    let run = match (sim.jitter, sim.seed) {
        (false, _) => {
            tracing::info!("Jitter disabled");
            simulate(config, ZeroJitter)
        }
        (true, Some(seed)) => {
            tracing::info!("Using fixed jitter seed {}", seed);
            simulate(config, RngJitter::seeded(seed))
        }
        (true, None) => simulate(config, RngJitter::from_entropy()),
    }
    .context("simulating moisture series")?;

    for progress in &run.progress {
        println!("{}", report::progress_line(progress));
    }

    let summaries = monthly_summaries(&run.ticks);
    let tick_count = run.ticks.len();

    let dataset = Dataset {
        metadata: Metadata::new(
            &config.device.device_id,
            &config.device.sensor_type,
            config.calibration.clone(),
        ),
        data: run.ticks,
    };
    output::write_dataset(&dataset, &sim.output)
        .with_context(|| format!("writing {}", sim.output.display()))?;

    println!("{}", report::completion(tick_count, sim.year, &sim.output));
    print!("{}", report::analysis(&summaries));
    println!("{}", report::checklist());

    Ok(())
}

fn simulate<J: JitterSource>(config: &Config, jitter: J) -> error::Result<SimulationRun> {
    Simulator::new(config.simulation.year, config.calibration.clone(), jitter)
        .with_initial_moisture(config.simulation.initial_moisture)
        .run()
}
