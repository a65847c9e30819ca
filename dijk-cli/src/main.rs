//! dijk CLI - interactive editor and step-animator for Dijkstra's
//! single-source shortest-path algorithm.
//!
//! Build a weighted graph with a small command language, watch the
//! algorithm settle one node per animation frame, and print the analysis
//! report as a table, JSON, or the classic banner text.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use config::{clamp_delay, DijkConfig};
use output::{OutputConfig, OutputFormat};

/// Interactive Dijkstra editor and animator.
#[derive(Parser)]
#[command(name = "dijk")]
#[command(author, version)]
#[command(about = "Interactive editor and animator for Dijkstra's shortest paths")]
#[command(propagate_version = true)]
#[command(after_help = "Quick Start:
  dijk edit                Open the interactive editor
  dijk solve graph.dijk    Run a saved command script and print the report

Editor commands (also the script language):
  node 100 200             add a node
  edge A B 2.5             connect A to B with weight 2.5
  source A                 choose the start node
  run                      animate the algorithm
  report                   print the analysis report")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive graph editor
    #[command(visible_alias = "e")]
    Edit {
        /// Milliseconds between animated algorithm steps (clamped to 100-1000)
        #[arg(short, long)]
        delay: Option<u64>,
    },

    /// Execute editor commands from a script and print the report
    Solve {
        /// Script file (reads stdin when omitted)
        script: Option<String>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .dijkrc.toml
    let config = DijkConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let output_config = OutputConfig::auto_detect(format, config.use_color());

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Edit { delay } => {
            let delay_ms = delay.map(clamp_delay).unwrap_or_else(|| config.delay_ms());
            commands::edit::run(delay_ms, output_config).await
        }
        Commands::Solve { script } => {
            let script = script.map(std::path::PathBuf::from);
            commands::solve::run(script.as_deref(), output_config)
        }
    }
}
