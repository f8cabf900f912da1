//! Betweenness centrality.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a vertex lies on shortest paths
//! between other pairs of vertices. High-betweenness vertices are bridges:
//! removing them lengthens or breaks many geodesics.
//!
//! The computation is split along Brandes' two phases:
//!
//! - [`explorer`]: one BFS per source, producing distances, path counts,
//!   predecessors and the visit order.
//! - [`accumulator`]: reverse-order dependency accumulation into running
//!   totals.
//! - [`engine`]: runs both phases for every source and normalizes.
//!
//! ```rust
//! use between_core::centrality::CentralityEngine;
//! use between_core::graph::{EdgeDecl, Graph, NodeDecl};
//!
//! let nodes: Vec<NodeDecl> = ["a", "b", "c"].iter().map(|id| NodeDecl::new(*id, *id)).collect();
//! let edges = [EdgeDecl::new("a", "b"), EdgeDecl::new("b", "c")];
//! let graph = Graph::from_declarations(&nodes, &edges)?;
//!
//! let scores = CentralityEngine::default().compute(&graph)?;
//! assert_eq!(scores.get("b"), Some(1.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod accumulator;
pub mod engine;
pub mod explorer;
pub mod scores;

pub use accumulator::CentralityAccumulator;
pub use engine::CentralityEngine;
pub use explorer::{ShortestPathExplorer, ShortestPathTree};
pub use scores::CentralityScores;
