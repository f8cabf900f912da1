//! Basic statistics for an undirected graph.
//!
//! # Statistics Provided
//!
//! - **vertex_count**: Number of vertices.
//! - **edge_count**: Number of logical undirected edges (half the adjacency
//!   entries).
//! - **density**: `2E / (n(n-1))`. A complete graph has density 1.0; an
//!   empty or single-vertex graph has density 0.0.
//! - **component_count**: Number of connected components. A value greater
//!   than 1 means some vertex pairs have no geodesic and contribute nothing
//!   to betweenness.
//! - **isolated_vertex_count**: Vertices with no incident edges.
//! - **max_degree**: Largest neighbor-list length.

use petgraph::algo::connected_components;
use serde::Serialize;
use tracing::instrument;

use crate::graph::build::Graph;
use crate::graph::vertex::Vertex;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// `2E / (n(n-1))`, zero for graphs with fewer than two vertices.
    pub density: f64,
    pub component_count: usize,
    pub isolated_vertex_count: usize,
    pub max_degree: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    #[instrument(skip_all, fields(vertices = graph.vertex_count()))]
    pub fn from_graph(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let edge_count = graph.edge_count();

        let component_count = connected_components(&graph.to_petgraph());

        let isolated_vertex_count = graph
            .vertices()
            .iter()
            .filter(|v| v.degree() == 0)
            .count();

        let max_degree = graph
            .vertices()
            .iter()
            .map(Vertex::degree)
            .max()
            .unwrap_or(0);

        Self {
            vertex_count,
            edge_count,
            density: compute_density(vertex_count, edge_count),
            component_count,
            isolated_vertex_count,
            max_degree,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(vertex_count: usize, edge_count: usize) -> f64 {
    if vertex_count < 2 {
        return 0.0;
    }
    let possible = vertex_count as f64 * (vertex_count - 1) as f64;
    2.0 * edge_count as f64 / possible
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
