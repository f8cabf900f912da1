//! Brandes dependency accumulation.
//!
//! Given one source's [`ShortestPathTree`], vertices are popped from the end
//! of the visit order (farthest first). Each popped `w` pushes
//!
//! ```text
//! δ(v) += σ(v) / σ(w) · (1 + δ(w))
//! ```
//!
//! to every predecessor `v`, and then, unless `w` is the source, its own
//! finished `δ(w)` is added to the running betweenness total. Farthest-first
//! order guarantees `δ(w)` is complete before it is propagated.

use crate::centrality::explorer::ShortestPathTree;

/// Running betweenness totals across sources.
///
/// The dependency buffer is scratch space reused between sources; only the
/// entries of reached vertices are reset, which is every entry the next
/// accumulation reads.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralityAccumulator {
    betweenness: Vec<f64>,
    dependency: Vec<f64>,
    sources: usize,
}

impl CentralityAccumulator {
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            betweenness: vec![0.0; vertex_count],
            dependency: vec![0.0; vertex_count],
            sources: 0,
        }
    }

    /// Fold one source's dependencies into the running totals.
    #[allow(clippy::cast_precision_loss)]
    pub fn accumulate(&mut self, tree: &ShortestPathTree) {
        for &v in tree.visit_order() {
            self.dependency[v.index()] = 0.0;
        }

        for &w in tree.visit_order().iter().rev() {
            let wi = w.index();
            // Any w with a predecessor was reached, so σ(w) >= 1.
            let sigma_w = tree.sigma(w) as f64;
            let coeff = 1.0 + self.dependency[wi];

            for &v in tree.predecessors(w) {
                let ratio = tree.sigma(v) as f64 / sigma_w;
                self.dependency[v.index()] += ratio * coeff;
            }

            if w != tree.source() {
                self.betweenness[wi] += self.dependency[wi];
            }
        }

        self.sources += 1;
    }

    /// Add another accumulator's totals into this one.
    ///
    /// # Panics
    ///
    /// Panics if the two accumulators were sized for different graphs.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(
            self.betweenness.len(),
            other.betweenness.len(),
            "accumulators sized for different graphs"
        );
        for (total, partial) in self.betweenness.iter_mut().zip(&other.betweenness) {
            *total += partial;
        }
        self.sources += other.sources;
    }

    /// Number of sources folded in so far.
    #[must_use]
    pub const fn sources_processed(&self) -> usize {
        self.sources
    }

    /// Accumulated (pre-normalization) betweenness per vertex index.
    #[must_use]
    pub fn totals(&self) -> &[f64] {
        &self.betweenness
    }

    #[must_use]
    pub fn into_totals(self) -> Vec<f64> {
        self.betweenness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::explorer::ShortestPathExplorer;
    use crate::graph::{EdgeDecl, Graph, NodeDecl};

    fn build(ids: &[&str], pairs: &[(&str, &str)]) -> Graph {
        let nodes: Vec<NodeDecl> = ids.iter().map(|id| NodeDecl::new(*id, *id)).collect();
        let edges: Vec<EdgeDecl> = pairs.iter().copied().map(EdgeDecl::from).collect();
        Graph::from_declarations(&nodes, &edges).expect("build graph")
    }

    #[test]
    fn single_source_chain_dependencies() {
        // A - B - C - D from source A: B lies on A→C and A→D, C on A→D.
        let g = build(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
        let explorer = ShortestPathExplorer::new(&g);
        let mut acc = CentralityAccumulator::new(g.vertex_count());

        acc.accumulate(&explorer.explore(g.index_of("A").expect("A")).expect("explore"));

        assert_eq!(acc.totals(), &[0.0, 2.0, 1.0, 0.0]);
        assert_eq!(acc.sources_processed(), 1);
    }

    #[test]
    fn diamond_splits_dependency_evenly() {
        let g = build(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let explorer = ShortestPathExplorer::new(&g);
        let mut acc = CentralityAccumulator::new(g.vertex_count());

        acc.accumulate(&explorer.explore(g.index_of("A").expect("A")).expect("explore"));

        let totals = acc.totals();
        assert!((totals[1] - 0.5).abs() < 1e-12, "B got {}", totals[1]);
        assert!((totals[2] - 0.5).abs() < 1e-12, "C got {}", totals[2]);
        assert!(totals[0].abs() < 1e-12, "source never scores");
    }

    #[test]
    fn dependency_scratch_is_reset_between_sources() {
        let g = build(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let explorer = ShortestPathExplorer::new(&g);

        let mut twice = CentralityAccumulator::new(g.vertex_count());
        let a = explorer.explore(g.index_of("A").expect("A")).expect("explore");
        twice.accumulate(&a);
        twice.accumulate(&a);

        let mut once = CentralityAccumulator::new(g.vertex_count());
        once.accumulate(&a);

        for (t, o) in twice.totals().iter().zip(once.totals()) {
            assert!((t - 2.0 * o).abs() < 1e-12);
        }
    }

    #[test]
    fn merge_adds_partials() {
        let g = build(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let explorer = ShortestPathExplorer::new(&g);

        let mut left = CentralityAccumulator::new(3);
        left.accumulate(&explorer.explore(g.index_of("A").expect("A")).expect("explore"));
        let mut right = CentralityAccumulator::new(3);
        right.accumulate(&explorer.explore(g.index_of("C").expect("C")).expect("explore"));

        left.merge(&right);
        assert_eq!(left.totals(), &[0.0, 2.0, 0.0]);
        assert_eq!(left.sources_processed(), 2);
    }
}
