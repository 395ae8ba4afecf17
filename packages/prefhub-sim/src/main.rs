//! PrefHub simulator: plays random three-player matches against the engine.

mod simulator;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use prefhub::adapters::{BuiltinRulesCatalog, InMemoryGameRepository, InMemorySessions};
use prefhub::{EngineConfig, GameFlowService};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use simulator::{Simulator, Tally};

#[derive(Parser, Debug)]
#[command(name = "prefhub-sim")]
#[command(about = "Run seeded Preferans self-play matches", long_about = None)]
struct Args {
    /// Number of matches to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Scored rounds per match
    #[arg(short, long, default_value = "6")]
    rounds: u32,

    /// Seed for dealing and player choices (random if not provided)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rules variant id (catalog default if not provided)
    #[arg(long)]
    variant: Option<String>,

    /// Chance a bidder passes instead of picking a random legal bid
    #[arg(long, default_value = "0.6")]
    pass_bias: f64,

    /// Print one JSON summary per match to stdout
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines, filtered by RUST_LOG
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        prefhub::telemetry::init_tracing();
    } else {
        let filter = if args.verbose { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if !(0.0..=1.0).contains(&args.pass_bias) {
        return Err(format!("--pass-bias must be within 0..=1, got {}", args.pass_bias).into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = EngineConfig::from_env()?.with_seed(seed);
    let rules = BuiltinRulesCatalog::from_config(&config)?;
    let service = GameFlowService::new(
        Arc::new(InMemoryGameRepository::new()),
        Arc::new(rules),
        Arc::new(InMemorySessions::new()),
        config,
    );
    info!(seed, games = args.games, rounds = args.rounds, "Starting simulation");

    let mut simulator = Simulator::new(&service, ChaCha8Rng::seed_from_u64(seed), args.pass_bias);
    let mut tally = Tally::default();
    let mut errors = 0;
    let start = Instant::now();

    for game_num in 1..=args.games {
        let game_id = format!("sim-{seed}-{game_num}");
        match simulator.play_match(&game_id, args.variant.as_deref(), args.rounds) {
            Ok(summary) => {
                tally.record(&summary);
                if args.json {
                    println!("{}", serde_json::to_string(&summary)?);
                }
                info!(
                    game_id = %summary.game_id,
                    redeals = summary.redeals,
                    pool_closed = summary.pool_closed,
                    "Match completed"
                );
            }
            Err(e) => {
                errors += 1;
                warn!(game_id, code = %e.code(), error = %e, "Match failed");
            }
        }
    }

    info!(
        matches = tally.matches,
        rounds = tally.rounds,
        made = tally.made,
        redeals = tally.redeals,
        errors,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Simulation finished"
    );
    for (contract, count) in &tally.contracts {
        info!(%contract, count, "Contract frequency");
    }

    Ok(())
}
