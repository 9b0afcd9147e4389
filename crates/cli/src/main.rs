#![deny(unsafe_code)]
//! CLI binary for the toroidal Game of Life.
//!
//! Subcommands:
//! - `run` — run a timed simulation until it dies out, stabilizes, hits its
//!   generation cap or is interrupted with Ctrl-C
//! - `config` — print the effective configuration and the fixed constants

mod error;
mod logging;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use life_core::config::{
    SimConfig, DEFAULT_GRID_SIZE, LIVING_CELL_DENSITY, MIN_GRID_SIZE, STEP_INTERVAL_MS,
};
use life_engine::StepResult;
use life_sim::driver::drive;
use life_sim::{FrameBuffer, Simulation};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "life", about = "Toroidal Game of Life simulator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Configuration layers: defaults, then `--params`, then explicit flags.
#[derive(Args)]
struct ConfigArgs {
    /// Grid side length (values below 10 are raised to 10).
    #[arg(short, long)]
    size: Option<usize>,

    /// Probability that a cell starts alive, in [0, 1].
    #[arg(short, long)]
    density: Option<f64>,

    /// Milliseconds between generations.
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// PRNG seed for a reproducible initial grid.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations.
    #[arg(short, long)]
    max_generations: Option<u64>,

    /// Configuration overrides as a JSON object.
    #[arg(long, default_value = "{}")]
    params: String,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<SimConfig, CliError> {
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        let mut config = SimConfig::from_json(&params)?;
        if let Some(size) = self.size {
            config.grid_size = size;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.max_generations.is_some() {
            config.max_generations = self.max_generations;
        }
        Ok(config.normalized())
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run a timed simulation from a random initial grid.
    Run {
        #[command(flatten)]
        config: ConfigArgs,

        /// Redraw the whole board after every generation.
        #[arg(long)]
        draw: bool,

        /// Write the final generation as a PNG before the board is cleared.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixel size of one cell in the PNG snapshot.
        #[arg(long, default_value_t = 4)]
        cell_px: usize,
    },
    /// Print the effective configuration and the fixed constants.
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn report_step(sim: &Simulation<FrameBuffer>, result: &StepResult, json: bool, draw: bool) {
    if json {
        let line = serde_json::json!({
            "generation": result.generation,
            "deaths": result.deaths,
            "born": result.born(),
            "died": result.died,
            "status": sim.status(),
        });
        println!("{line}");
        return;
    }
    if draw {
        // Clear the terminal and home the cursor before each frame.
        print!("\x1b[2J\x1b[H{}", sim.renderer().to_text());
        println!(
            "generation {} | deaths {} | {}",
            result.generation,
            result.deaths,
            sim.status()
        );
    } else {
        eprintln!(
            "generation {}: +{} -{} (deaths {}) {}",
            result.generation,
            result.born(),
            result.died,
            result.deaths,
            sim.status()
        );
    }
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Config { config } => {
            let config = config.resolve()?;
            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "constants": {
                        "default_grid_size": DEFAULT_GRID_SIZE,
                        "min_grid_size": MIN_GRID_SIZE,
                        "step_interval_ms": STEP_INTERVAL_MS,
                        "living_cell_density": LIVING_CELL_DENSITY,
                    },
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Configuration:");
                println!("  grid_size        {}", config.grid_size);
                println!("  density          {}", config.density);
                println!("  interval_ms      {}", config.interval_ms);
                println!("  seed             {}", config.seed);
                match config.max_generations {
                    Some(cap) => println!("  max_generations  {cap}"),
                    None => println!("  max_generations  none"),
                }
                println!("Constants:");
                println!("  default grid size  {DEFAULT_GRID_SIZE}");
                println!("  min grid size      {MIN_GRID_SIZE}");
                println!("  step interval      {STEP_INTERVAL_MS} ms");
                println!("  initial density    {LIVING_CELL_DENSITY}");
            }
        }
        Command::Run {
            config,
            draw,
            output,
            cell_px,
        } => {
            let config = config.resolve()?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            let mut sim = Simulation::new(config, FrameBuffer::new());
            sim.start()?;
            if !cli.json {
                let grid_size = sim.config().grid_size;
                eprintln!(
                    "{} ({grid_size}x{grid_size}, seed {}, every {} ms)",
                    sim.status(),
                    sim.config().seed,
                    sim.config().interval_ms
                );
            }

            let json = cli.json;
            let status = runtime.block_on(drive(&mut sim, interrupted(), |s, r| {
                report_step(s, r, json, draw)
            }));
            log::debug!("run ended with status {status:?}");

            if let (Some(path), Some(grid)) = (&output, sim.grid()) {
                life_sim::snapshot::write_png(grid, path, cell_px)?;
            }

            let summary = sim.stop();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                eprintln!(
                    "{}: {} generations, {} deaths",
                    summary.status, summary.generation, summary.deaths
                );
                if let Some(path) = &output {
                    eprintln!("snapshot -> {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
