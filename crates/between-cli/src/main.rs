#![forbid(unsafe_code)]

mod cmd;
mod load;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "between: exact betweenness centrality for undirected graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (pretty, text, json).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags and environment.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Compute betweenness centrality",
        long_about = "Compute betweenness centrality for every vertex of a graph document.",
        after_help = "EXAMPLES:\n    # Scores in [0, 1], sorted by name\n    between compute LesMiserables.gexf\n\n    # JSON node-link input\n    between compute graph.json\n\n    # Ten most central vertices, geodesic counts\n    between compute graph.json --sort score --top 10 --normalization corrected\n\n    # Emit machine-readable output\n    between compute graph.json --format json"
    )]
    Compute(cmd::compute::ComputeArgs),

    #[command(
        about = "Show graph statistics",
        long_about = "Show vertex/edge counts, density and connectivity of a graph document.",
        after_help = "EXAMPLES:\n    between stats graph.json\n    between stats graph.json --format json"
    )]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BETWEEN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "between=debug,info"
        } else {
            "between=info,warn"
        })
    });

    let format = env::var("BETWEEN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    debug!(?output, "output mode resolved");

    let result = match cli.command {
        Commands::Compute(ref args) => cmd::compute::run_compute(args, output),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output),
    };

    // Command handlers render their own errors; only the exit status is left.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %format!("{err:#}"), "command failed");
            ExitCode::FAILURE
        }
    }
}
