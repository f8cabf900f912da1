//! `between stats` — structural summary of a graph document.

use std::io::{self, Write};
use std::path::PathBuf;

use between_core::GraphStats;
use clap::Args;
use serde::Serialize;

use crate::cmd::report;
use crate::load::{InputFormat, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `between stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Graph document (GEXF or JSON node-link).
    pub file: PathBuf,

    /// Document format; guessed from the file extension when omitted.
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

/// Report payload for `between stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub graph_hash: String,
    #[serde(flatten)]
    pub stats: GraphStats,
}

/// Execute `between stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let result = load_graph(&args.file, args.input_format).and_then(|graph| {
        let payload = StatsReport {
            graph_hash: graph.content_hash().to_string(),
            stats: GraphStats::from_graph(&graph),
        };
        render_mode(output, &payload, render_text, render_pretty)
    });
    result.map_err(|err| report(output, err))
}

fn render_text(report: &StatsReport, w: &mut dyn Write) -> io::Result<()> {
    let s = &report.stats;
    writeln!(w, "vertices={}", s.vertex_count)?;
    writeln!(w, "edges={}", s.edge_count)?;
    writeln!(w, "density={:.4}", s.density)?;
    writeln!(w, "components={}", s.component_count)?;
    writeln!(w, "isolated={}", s.isolated_vertex_count)?;
    writeln!(w, "max_degree={}", s.max_degree)
}

fn render_pretty(report: &StatsReport, w: &mut dyn Write) -> io::Result<()> {
    let s = &report.stats;
    pretty_section(w, "Graph")?;
    pretty_kv(w, "hash", &report.graph_hash)?;
    pretty_kv(w, "vertices", s.vertex_count.to_string())?;
    pretty_kv(w, "edges", s.edge_count.to_string())?;
    pretty_kv(w, "density", format!("{:.4}", s.density))?;
    pretty_kv(w, "components", s.component_count.to_string())?;
    pretty_kv(w, "isolated vertices", s.isolated_vertex_count.to_string())?;
    pretty_kv(w, "max degree", s.max_degree.to_string())
}
