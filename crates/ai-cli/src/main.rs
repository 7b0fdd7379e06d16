//! wave-ai: command line front end for the AI crates.
//!
//! - `wave-ai path` - shortest route over a graph file
//! - `wave-ai simulate` - headless evader/pursuer run

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod document;
mod graph;
mod simulate;

#[derive(Parser)]
#[command(name = "wave-ai")]
#[command(about = "Behavior trees, path finding and steering from the command line", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shortest route between two nodes
    Path {
        /// Graph file (.yaml, .yml or .json) with an `edges` list
        #[arg(long)]
        graph: PathBuf,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },

    /// Run an evader against a pursuer and print a summary
    Simulate {
        /// Simulation config (.yaml, .yml or .json); defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, default_value_t = 600)]
        ticks: u32,

        /// Milliseconds per tick
        #[arg(long, default_value_t = 16)]
        dt_ms: u64,

        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Path { graph, from, to } => find_path(&graph, &from, &to),
        Commands::Simulate {
            config,
            ticks,
            dt_ms,
            seed,
        } => run_simulation(config, ticks, Duration::from_millis(dt_ms), seed),
    }
}

fn find_path(graph_path: &Path, from: &str, to: &str) -> Result<()> {
    let matrix = graph::load(graph_path)?;
    tracing::info!(
        graph = %graph_path.display(),
        nodes = matrix.nodes_count(),
        edges = matrix.edge_count(),
        "Loaded graph"
    );

    let route = graph::route(matrix, from, to)?;
    if from == to {
        println!("{from}");
    } else if route.is_empty() {
        println!("no path");
    } else {
        println!("{from} -> {}", route.join(" -> "));
    }
    Ok(())
}

fn run_simulation(config: Option<PathBuf>, ticks: u32, dt: Duration, seed: u64) -> Result<()> {
    let config = match &config {
        Some(path) => document::load(path)?,
        None => simulate::SimulationConfig::default(),
    };
    tracing::info!(ticks, dt_ms = dt.as_millis() as u64, seed, "Starting simulation");

    let report = simulate::run(&config, ticks, dt, seed)?;
    println!("{report}");
    Ok(())
}
