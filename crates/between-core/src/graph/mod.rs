//! Graph model for centrality computation.
//!
//! # Overview
//!
//! The graph is an arena of [`Vertex`] values addressed by dense
//! [`VertexIndex`]es. It is built once from declarations and never mutated
//! afterwards, so the centrality engine can share it read-only across
//! sources (and threads).
//!
//! ## Pipeline
//!
//! ```text
//! NodeDecl / EdgeDecl lists
//!        ↓  build::Graph::from_declarations()
//! Graph (vertex arena, adjacency stored in both directions)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, component count, …)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use between_core::graph::{EdgeDecl, Graph, GraphStats, NodeDecl};
//!
//! let nodes = [NodeDecl::new("a", "Alpha"), NodeDecl::new("b", "Beta")];
//! let edges = [EdgeDecl::new("a", "b")];
//! let graph = Graph::from_declarations(&nodes, &edges)?;
//! let stats = GraphStats::from_graph(&graph);
//! assert_eq!(stats.edge_count, 1);
//! # Ok::<(), between_core::error::GraphError>(())
//! ```

pub mod build;
pub mod stats;
pub mod vertex;

pub use build::{EdgeDecl, Graph, NodeDecl};
pub use stats::GraphStats;
pub use vertex::{Vertex, VertexIndex};
