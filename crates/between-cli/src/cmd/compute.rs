//! `between compute` — betweenness centrality for every vertex.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use between_core::{
    CentralityEngine, CentralityScores, EngineConfig, Normalization, Vertex, load_engine_config,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::cmd::report;
use crate::load::{InputFormat, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Score scale selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NormalizationArg {
    /// Divide by the maximum pair count; scores fall in [0, 1].
    Rescaled,
    /// Number of geodesics through the vertex.
    Corrected,
}

impl From<NormalizationArg> for Normalization {
    fn from(arg: NormalizationArg) -> Self {
        match arg {
            NormalizationArg::Rescaled => Self::Rescaled,
            NormalizationArg::Corrected => Self::Corrected,
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Lexicographic by vertex name.
    #[default]
    Name,
    /// Highest score first.
    Score,
}

/// Arguments for `between compute`.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Graph document (GEXF or JSON node-link).
    pub file: PathBuf,

    /// Document format; guessed from the file extension when omitted.
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Engine config file (TOML). Missing file means defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Score scale; overrides the config file.
    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationArg>,

    /// Process sources in parallel; overrides the config file.
    #[arg(long)]
    pub parallel: bool,

    /// Sources per parallel task; overrides the config file.
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Only print the first N vertices after sorting.
    #[arg(long)]
    pub top: Option<usize>,

    /// Result ordering.
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,
}

/// One output row.
#[derive(Debug, Serialize)]
pub struct ScoreRow {
    pub id: String,
    pub name: String,
    pub score: f64,
}

/// Report payload for `between compute`.
#[derive(Debug, Serialize)]
pub struct ComputeReport {
    pub graph_hash: String,
    pub vertex_count: usize,
    pub normalization: String,
    pub scores: Vec<ScoreRow>,
}

impl ComputeReport {
    fn from_scores(scores: &CentralityScores<'_>, sort: SortKey, top: Option<usize>) -> Self {
        let ordered: Vec<(&Vertex, f64)> = match sort {
            SortKey::Name => scores.by_name(),
            SortKey::Score => scores.ranked(),
        };
        let limit = top.unwrap_or(ordered.len());

        Self {
            graph_hash: scores.graph().content_hash().to_string(),
            vertex_count: scores.len(),
            normalization: scores.normalization().to_string(),
            scores: ordered
                .into_iter()
                .take(limit)
                .map(|(vertex, score)| ScoreRow {
                    id: vertex.id().to_string(),
                    name: vertex.name().to_string(),
                    score,
                })
                .collect(),
        }
    }
}

/// Execute `between compute`.
pub fn run_compute(args: &ComputeArgs, output: OutputMode) -> anyhow::Result<()> {
    execute(args, output).map_err(|err| report(output, err))
}

fn execute(args: &ComputeArgs, output: OutputMode) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let graph = load_graph(&args.file, args.input_format)?;

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        normalization = %config.normalization,
        parallel = config.parallel,
        parallel_available = between_core::PARALLEL_AVAILABLE,
        "computing betweenness centrality"
    );

    let scores = CentralityEngine::new(config)
        .compute(&graph)
        .with_context(|| format!("Failed to compute centrality for {}", args.file.display()))?;

    let payload = ComputeReport::from_scores(&scores, args.sort, args.top);
    render_mode(output, &payload, render_text, render_pretty)
}

fn resolve_config(args: &ComputeArgs) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => load_engine_config(path)?,
        None => EngineConfig::default(),
    };

    if let Some(normalization) = args.normalization {
        config.normalization = normalization.into();
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
    Ok(config)
}

fn render_text(report: &ComputeReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Betweenness Centrality:")?;
    for row in &report.scores {
        writeln!(w, "BC({}) = {:.4}", row.name, row.score)?;
    }
    Ok(())
}

fn render_pretty(report: &ComputeReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Betweenness Centrality")?;
    pretty_kv(w, "vertices", report.vertex_count.to_string())?;
    pretty_kv(w, "normalization", &report.normalization)?;
    pretty_kv(w, "graph", &report.graph_hash)?;
    writeln!(w)?;
    for row in &report.scores {
        writeln!(w, "BC({}) = {:.4}", row.name, row.score)?;
    }
    Ok(())
}
