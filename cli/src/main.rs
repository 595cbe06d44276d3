//! Command-line entry point: ranks two rosters read from a JSON request.
mod config;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use config::CliConfig;
use elepoke_battle::{FitResponse, MatchupEngine, Variance};
use elepoke_dex::load_species_csv;
use elepoke_protocol::{GREETING, parse_fit_request};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Rank two rosters by expected same-type damage
///
/// Reads `{"mypoke": [...], "oppoke": [...]}` and prints the ranked rosters.
#[derive(Parser, Debug)]
#[command(name = "elepoke", version)]
struct Args {
    /// Request JSON file (stdin when omitted or "-")
    request: Option<PathBuf>,

    /// Species CSV file
    #[arg(long)]
    data: Option<PathBuf>,

    /// Seed for the damage variance RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Use the mean of the discrete damage rolls instead of a random draw
    #[arg(long)]
    expected: bool,

    /// Scoring algorithm
    #[arg(long)]
    algorithm: Option<u8>,

    /// Power of the same-type move
    #[arg(long)]
    power: Option<u32>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Print the greeting and exit
    #[arg(long)]
    ping: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    setup_logging();

    if args.ping {
        println!("{GREETING}");
        return Ok(());
    }

    let config = apply_args(CliConfig::from_env(), &args);
    let table = load_species_csv(&config.data_path).with_context(|| {
        format!(
            "Failed to load species data from {}",
            config.data_path.display()
        )
    })?;

    let body = read_request(args.request.as_deref())?;
    let request = parse_fit_request(&body).context("Invalid matchup request")?;

    let mut engine = MatchupEngine::new(&table)
        .with_damage_model(config.damage_model())
        .with_power(config.power);
    engine.append(request.mypoke, request.oppoke, true);

    let result = engine
        .run(config.algorithm)
        .context("Matchup evaluation failed")?;
    let response = FitResponse::from(result);

    let json = if args.compact {
        serde_json::to_string(&response)
    } else {
        serde_json::to_string_pretty(&response)
    }
    .context("Failed to encode response")?;
    println!("{json}");

    Ok(())
}

/// Command-line flags take precedence over the environment
fn apply_args(mut config: CliConfig, args: &Args) -> CliConfig {
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.expected {
        config.variance = Variance::Expected;
    }
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(power) = args.power {
        config.power = power;
    }
    config
}

fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {}", path.display())),
        _ => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request from stdin")?;
            Ok(body)
        }
    }
}

/// Log to stderr so stdout carries only the response
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
