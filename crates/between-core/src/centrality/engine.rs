//! Betweenness centrality engine.
//!
//! # Algorithm
//!
//! Brandes' algorithm (2001) for undirected, unweighted graphs:
//!
//! 1. Every vertex serves as BFS source exactly once
//!    ([`ShortestPathExplorer`]).
//! 2. Each source's dependencies are folded into running totals in reverse
//!    BFS order ([`CentralityAccumulator`]).
//! 3. The totals are normalized once at the end.
//!
//! Complexity: O(V · E) time, O(V + E) memory per in-flight source.
//!
//! # Normalization
//!
//! Each unordered pair `{s, t}` is explored from both `s` and `t`, so the
//! accumulated value counts every pair twice.
//!
//! - `n <= 2`: every score is 0.
//! - [`Normalization::Corrected`]: `accumulated / 2`.
//! - [`Normalization::Rescaled`]: `(accumulated / 2) / ((n-1)(n-2)/2)`.
//!
//! # Parallelism
//!
//! With the `parallel` feature and [`EngineConfig::parallel`] set, sources
//! are split into fixed-size chunks processed on the rayon pool. Each chunk
//! accumulates sequentially into its own [`CentralityAccumulator`], and
//! partials are merged in chunk order, so results do not depend on thread
//! scheduling.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::centrality::accumulator::CentralityAccumulator;
use crate::centrality::explorer::ShortestPathExplorer;
use crate::centrality::scores::CentralityScores;
use crate::config::{EngineConfig, Normalization};
use crate::error::CentralityError;
use crate::graph::{Graph, VertexIndex};

/// Computes betweenness centrality for every vertex of a [`Graph`].
///
/// The engine holds only configuration; [`compute`](Self::compute) has no
/// side effects and can be called repeatedly on the same graph.
#[derive(Debug, Clone, Default)]
pub struct CentralityEngine {
    config: EngineConfig,
}

impl CentralityEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute one score per vertex.
    ///
    /// # Errors
    ///
    /// Returns [`CentralityError::PathCountOverflow`] if some vertex has more
    /// than `u64::MAX` shortest paths from a source.
    #[instrument(
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count(), parallel = self.config.parallel)
    )]
    pub fn compute<'g>(&self, graph: &'g Graph) -> Result<CentralityScores<'g>, CentralityError> {
        let started = Instant::now();

        let accumulator = if self.config.parallel {
            self.accumulate_parallel(graph)?
        } else {
            let sources: Vec<VertexIndex> = graph.indices().collect();
            accumulate_sources(graph, &sources)?
        };

        let sources = accumulator.sources_processed();
        let raw = accumulator.into_totals();
        let scores = normalize(&raw, self.config.normalization);

        debug!(
            sources,
            normalization = %self.config.normalization,
            elapsed_ms = started.elapsed().as_millis(),
            "betweenness computed"
        );

        Ok(CentralityScores::new(
            graph,
            raw,
            scores,
            self.config.normalization,
        ))
    }

    #[cfg(feature = "parallel")]
    fn accumulate_parallel(&self, graph: &Graph) -> Result<CentralityAccumulator, CentralityError> {
        let sources: Vec<VertexIndex> = graph.indices().collect();
        let chunk_size = self.config.chunk_size.max(1);

        let partials = sources
            .par_chunks(chunk_size)
            .map(|chunk| accumulate_sources(graph, chunk))
            .collect::<Result<Vec<_>, _>>()?;

        let mut total = CentralityAccumulator::new(graph.vertex_count());
        for partial in &partials {
            total.merge(partial);
        }
        Ok(total)
    }

    #[cfg(not(feature = "parallel"))]
    fn accumulate_parallel(&self, graph: &Graph) -> Result<CentralityAccumulator, CentralityError> {
        tracing::warn!("built without the `parallel` feature; running sources sequentially");
        let sources: Vec<VertexIndex> = graph.indices().collect();
        accumulate_sources(graph, &sources)
    }
}

/// Run explorer + accumulator for each source in order.
fn accumulate_sources(
    graph: &Graph,
    sources: &[VertexIndex],
) -> Result<CentralityAccumulator, CentralityError> {
    let explorer = ShortestPathExplorer::new(graph);
    let mut accumulator = CentralityAccumulator::new(graph.vertex_count());

    for &source in sources {
        let tree = explorer.explore(source)?;
        trace!(%source, reached = tree.reached_count(), "source explored");
        accumulator.accumulate(&tree);
    }

    Ok(accumulator)
}

/// Apply the pair double-count correction and the chosen scale.
#[allow(clippy::cast_precision_loss)]
fn normalize(raw: &[f64], normalization: Normalization) -> Vec<f64> {
    let n = raw.len();
    if n <= 2 {
        return vec![0.0; n];
    }

    let max_pairs = ((n - 1) * (n - 2) / 2) as f64;
    raw.iter()
        .map(|&value| {
            let corrected = value / 2.0;
            match normalization {
                Normalization::Corrected => corrected,
                Normalization::Rescaled => corrected / max_pairs,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
