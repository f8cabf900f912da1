//! Final per-vertex centrality scores.

use crate::config::Normalization;
use crate::graph::{Graph, Vertex, VertexIndex};

/// One score per vertex of the graph it was computed from, in index order.
///
/// Vertices that never act as an intermediary are present with `0.0`.
/// Ordering for presentation is left to the caller; [`Self::by_name`] and
/// [`Self::ranked`] cover the common cases.
#[derive(Debug, Clone)]
pub struct CentralityScores<'g> {
    graph: &'g Graph,
    raw: Vec<f64>,
    scores: Vec<f64>,
    normalization: Normalization,
}

impl<'g> CentralityScores<'g> {
    pub(crate) fn new(
        graph: &'g Graph,
        raw: Vec<f64>,
        scores: Vec<f64>,
        normalization: Normalization,
    ) -> Self {
        debug_assert_eq!(raw.len(), graph.vertex_count());
        debug_assert_eq!(scores.len(), graph.vertex_count());
        Self {
            graph,
            raw,
            scores,
            normalization,
        }
    }

    #[must_use]
    pub const fn graph(&self) -> &'g Graph {
        self.graph
    }

    #[must_use]
    pub const fn normalization(&self) -> Normalization {
        self.normalization
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Final score of the vertex at `idx`.
    #[must_use]
    pub fn score(&self, idx: VertexIndex) -> f64 {
        self.scores[idx.index()]
    }

    /// Final score of the vertex with id `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.graph.index_of(id).map(|idx| self.score(idx))
    }

    /// Accumulated betweenness before the pair double-count is halved.
    #[must_use]
    pub fn raw(&self, idx: VertexIndex) -> f64 {
        self.raw[idx.index()]
    }

    /// Sum of [`Self::raw`] over all vertices.
    #[must_use]
    pub fn raw_total(&self) -> f64 {
        self.raw.iter().sum()
    }

    /// Final scores in vertex index order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// `(vertex, score)` pairs in vertex index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'g Vertex, f64)> + '_ {
        self.graph.vertices().iter().zip(self.scores.iter().copied())
    }

    /// Pairs sorted by vertex name, then id.
    #[must_use]
    pub fn by_name(&self) -> Vec<(&'g Vertex, f64)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        out
    }

    /// Pairs sorted by descending score; ties by name, then id.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&'g Vertex, f64)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|(va, sa), (vb, sb)| {
            sb.total_cmp(sa)
                .then_with(|| va.name().cmp(vb.name()))
                .then_with(|| va.id().cmp(vb.id()))
        });
        out
    }
}
