//! Wiezen AI simulator: plays whole games between AI tiers in memory and
//! records per-round contracts and scores.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};
use wiezen_engine::ai::AiConfig;
use wiezen_engine::telemetry::{self, LogFormat};
use wiezen_engine::{Difficulty, SeatConfig};

use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "In-memory Wiezen simulator for comparing AI tiers")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Rounds played per game
    #[arg(short, long, default_value = "16")]
    rounds: u32,

    /// AI tier for all seats
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// Per-seat tiers; unset seats use the config's difficulty
    #[arg(long)]
    seat0: Option<AiType>,

    #[arg(long)]
    seat1: Option<AiType>,

    #[arg(long)]
    seat2: Option<AiType>,

    #[arg(long)]
    seat3: Option<AiType>,

    /// JSON file with an AI configuration (difficulty, mc_trials, heuristics)
    #[arg(long)]
    ai_config: Option<String>,

    /// Base seed; game N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Monte-Carlo trials for the hard tier
    #[arg(long)]
    mc_trials: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    telemetry::init(format, filter);

    let mut config = match &args.ai_config {
        Some(path) => {
            let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            AiConfig::from_json(Some(&json))
        }
        None => AiConfig::default(),
    };
    if let Some(trials) = args.mc_trials {
        config.mc_trials = trials;
    }

    let tiers: [Difficulty; 4] = match args.seats {
        Some(t) => [t.difficulty(); 4],
        None => [args.seat0, args.seat1, args.seat2, args.seat3]
            .map(|t| t.map_or(config.difficulty, AiType::difficulty)),
    };
    let ai_types = tiers.map(|d| d.name().to_string());
    info!(games = args.games, rounds = args.rounds, ?ai_types, "starting simulator");

    let simulator = Simulator::new(tiers.map(SeatConfig::Ai), config, args.rounds);

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let base_seed = args.seed.unwrap_or_else(rand::random);
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = base_seed.wrapping_add(u64::from(game_num - 1));

        match simulator.simulate_game(seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    ai_types.clone(),
                    args.games,
                    args.rounds,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                info!(game = game_num, seed, scores = ?result.final_scores, "game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &ai_types, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    ai_types: &[String; 4],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let mut wins = [0u32; 4];
    let mut total_scores = [0i64; 4];
    let mut max_scores = [i32::MIN; 4];
    let mut min_scores = [i32::MAX; 4];
    let mut declared = [0u32; 4];
    let mut made = [0u32; 4];

    for result in results {
        for seat in metrics::winners(&result.final_scores) {
            wins[seat as usize] += 1;
        }
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        for round in &result.rounds {
            if let Some(contract) = round.contract {
                let d = contract.declarer as usize;
                declared[d] += 1;
                if round.made {
                    made[d] += 1;
                }
            }
        }
    }

    println!("\n=== Results by Seat ===");
    let n = results.len() as f64;
    for seat in 0..4 {
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%), contracts made {}/{}",
            seat,
            ai_types[seat],
            total_scores[seat] as f64 / n,
            min_scores[seat],
            max_scores[seat],
            wins[seat],
            wins[seat] as f64 / n * 100.0,
            made[seat],
            declared[seat],
        );
    }
}
