//! Derby CLI.
//!
//! Commands:
//! - run: run a single race with the live track display
//! - batch: run many silent races and aggregate win statistics

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use derby::render_term::{SilentRenderer, TerminalRenderer};
use derby::report::{RaceReport, format_duration};
use derby::roster::default_roster;
use derby::stats::BatchResults;
use race_kernel::{RaceConfig, RaceRunner, RaceTiming};

/// Generate a timestamped output path from the given path.
/// e.g., "results.json" -> "results-20260108-010530.json"
fn timestamped_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("results");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    let parent = path.parent().unwrap_or(std::path::Path::new("."));
    parent.join(format!("{}-{}.{}", stem, timestamp, ext))
}

#[derive(Parser)]
#[command(name = "derby")]
#[command(version)]
#[command(about = "Concurrent animal race simulator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single race
    Run {
        /// Finish line distance
        #[arg(long, default_value = "100")]
        finish_line: u32,

        /// Actor pacing interval in milliseconds
        #[arg(long, default_value = "300")]
        pacing_ms: u64,

        /// Display refresh interval in milliseconds
        #[arg(long, default_value = "200")]
        refresh_ms: u64,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Disable the live display
        #[arg(short, long)]
        quiet: bool,

        /// Write a JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run repeated races and aggregate win statistics
    Batch {
        /// Number of races to run
        #[arg(long, default_value = "100")]
        races: usize,

        /// Finish line distance
        #[arg(long, default_value = "100")]
        finish_line: u32,

        /// Actor pacing interval in milliseconds (zero for throughput)
        #[arg(long, default_value = "0")]
        pacing_ms: u64,

        /// Base random seed; race i uses seed + i
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON file (timestamped)
        #[arg(long, default_value = "derby-batch.json")]
        output: PathBuf,
    },
}

async fn run_single(
    finish_line: u32,
    pacing_ms: u64,
    refresh_ms: u64,
    seed: Option<u64>,
    quiet: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = RaceConfig {
        finish_line,
        timing: RaceTiming {
            pacing_ms,
            refresh_ms,
        },
        seed,
        roster: default_roster(),
    };
    let runner = RaceRunner::new(config);

    let started_at = Utc::now();
    let summary = if quiet {
        let summary = runner.run(SilentRenderer::new()).await;
        println!("{}", summary.outcome.summary_line());
        summary
    } else {
        runner.run(TerminalRenderer::new()).await
    };
    let ended_at = Utc::now();

    let report = RaceReport::from_summary(runner.config(), &summary, started_at, ended_at);
    info!(
        race_id = %report.race_id,
        duration = %format_duration(report.duration_ms),
        total_ticks = report.total_ticks,
        "race complete"
    );

    if let Some(path) = output {
        report.save(&path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

async fn run_batch(
    races: usize,
    finish_line: u32,
    pacing_ms: u64,
    seed: Option<u64>,
    output: PathBuf,
) -> Result<()> {
    info!(races, finish_line, seed = ?seed, "starting batch");

    let mut batch = BatchResults::new();
    for i in 0..races {
        let config = RaceConfig {
            finish_line,
            timing: RaceTiming {
                pacing_ms,
                refresh_ms: pacing_ms,
            },
            seed: seed.map(|s| s + i as u64),
            roster: default_roster(),
        };
        let runner = RaceRunner::new(config);

        let started_at = Utc::now();
        let summary = runner.run(SilentRenderer::new()).await;
        let ended_at = Utc::now();

        batch.add(RaceReport::from_summary(
            runner.config(),
            &summary,
            started_at,
            ended_at,
        ));
    }
    batch.compute_summary();

    println!("\n=== Batch Summary ({} races) ===", races);
    println!(
        "  {:>10} {:>6} {:>6} {:>9} {:>8} {:>6}",
        "Name", "Wins", "Ties", "WinRate", "AvgPos", "Speed"
    );
    let mut records: Vec<_> = batch.summary.values().collect();
    records.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.name.cmp(&b.name)));
    for record in records {
        println!(
            "  {:>10} {:>6} {:>6} {:>8.1}% {:>8.1} {:>6.1}",
            record.name,
            record.wins,
            record.ties,
            record.win_rate * 100.0,
            record.avg_position,
            record.avg_base_speed
        );
    }

    let path = timestamped_path(&output);
    batch.save(&path)?;
    println!("\nResults saved to {}", path.display());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Run {
            finish_line,
            pacing_ms,
            refresh_ms,
            seed,
            quiet,
            output,
        } => run_single(finish_line, pacing_ms, refresh_ms, seed, quiet, output).await?,

        Commands::Batch {
            races,
            finish_line,
            pacing_ms,
            seed,
            output,
        } => run_batch(races, finish_line, pacing_ms, seed, output).await?,
    }

    Ok(())
}
