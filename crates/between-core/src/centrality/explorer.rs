//! Single-source shortest paths by breadth-first search.
//!
//! For one source `s`, [`ShortestPathExplorer::explore`] returns a
//! [`ShortestPathTree`] holding, for every vertex reachable from `s`:
//!
//! - its hop distance from `s`,
//! - `σ(s, v)`, the number of distinct shortest paths from `s`,
//! - its predecessors on some shortest path,
//!
//! plus the order in which the BFS finalized vertices (non-decreasing
//! distance). Unreached vertices have no distance and no path count.
//!
//! Path counts are exact `u64` values; an addition that would overflow is
//! reported as [`CentralityError::PathCountOverflow`].

use std::collections::VecDeque;

use crate::error::CentralityError;
use crate::graph::{Graph, VertexIndex};

/// BFS output for one source. Discarded once its dependencies are folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexIndex,
    distance: Vec<Option<u32>>,
    path_count: Vec<u64>,
    predecessors: Vec<Vec<VertexIndex>>,
    visit_order: Vec<VertexIndex>,
}

impl ShortestPathTree {
    #[must_use]
    pub const fn source(&self) -> VertexIndex {
        self.source
    }

    /// Hop count from the source, or `None` if `v` is unreachable.
    #[must_use]
    pub fn distance(&self, v: VertexIndex) -> Option<u32> {
        self.distance[v.index()]
    }

    /// Number of shortest paths from the source, or `None` if unreachable.
    #[must_use]
    pub fn path_count(&self, v: VertexIndex) -> Option<u64> {
        self.distance[v.index()].map(|_| self.path_count[v.index()])
    }

    /// Vertices immediately preceding `v` on some shortest path.
    #[must_use]
    pub fn predecessors(&self, v: VertexIndex) -> &[VertexIndex] {
        &self.predecessors[v.index()]
    }

    /// Reached vertices in the order the BFS finalized them.
    #[must_use]
    pub fn visit_order(&self) -> &[VertexIndex] {
        &self.visit_order
    }

    /// Number of vertices reachable from the source, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.visit_order.len()
    }

    #[must_use]
    pub fn is_reached(&self, v: VertexIndex) -> bool {
        self.distance[v.index()].is_some()
    }

    /// Raw σ lookup for the accumulator. Zero for unreached vertices.
    pub(crate) fn sigma(&self, v: VertexIndex) -> u64 {
        self.path_count[v.index()]
    }
}

/// Runs breadth-first searches over a shared, read-only [`Graph`].
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathExplorer<'g> {
    graph: &'g Graph,
}

impl<'g> ShortestPathExplorer<'g> {
    #[must_use]
    pub const fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Explore every vertex reachable from `source`.
    ///
    /// Each vertex is enqueued only on first discovery, so it enters the
    /// visit order exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CentralityError::PathCountOverflow`] if a shortest-path
    /// count exceeds `u64::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `source` does not belong to the explorer's graph.
    pub fn explore(&self, source: VertexIndex) -> Result<ShortestPathTree, CentralityError> {
        let n = self.graph.vertex_count();

        let mut distance: Vec<Option<u32>> = vec![None; n];
        let mut path_count: Vec<u64> = vec![0; n];
        let mut predecessors: Vec<Vec<VertexIndex>> = vec![Vec::new(); n];
        let mut visit_order: Vec<VertexIndex> = Vec::with_capacity(n);

        distance[source.index()] = Some(0);
        path_count[source.index()] = 1;

        let mut queue: VecDeque<(VertexIndex, u32)> = VecDeque::new();
        queue.push_back((source, 0));

        while let Some((v, dist_v)) = queue.pop_front() {
            visit_order.push(v);
            let next = dist_v + 1;

            for &w in self.graph.neighbors(v) {
                let wi = w.index();

                // First visit to w?
                if distance[wi].is_none() {
                    distance[wi] = Some(next);
                    queue.push_back((w, next));
                }

                // Shortest path to w via v?
                if distance[wi] == Some(next) {
                    path_count[wi] = path_count[wi]
                        .checked_add(path_count[v.index()])
                        .ok_or_else(|| CentralityError::PathCountOverflow {
                            vertex: self.graph.vertex(w).id().to_string(),
                        })?;
                    predecessors[wi].push(v);
                }
            }
        }

        Ok(ShortestPathTree {
            source,
            distance,
            path_count,
            predecessors,
            visit_order,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
