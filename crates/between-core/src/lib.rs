#![forbid(unsafe_code)]
//! between-core library.
//!
//! Exact betweenness centrality for undirected, unweighted graphs.
//!
//! # Conventions
//!
//! - **Errors**: Typed `thiserror` enums in [`error`]; `anyhow::Result` only
//!   at the config-file boundary.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod centrality;
pub mod config;
pub mod error;
pub mod graph;

pub use centrality::{CentralityEngine, CentralityScores};
pub use config::{EngineConfig, Normalization, load_engine_config};
pub use error::{CentralityError, ErrorCode, GraphError};
pub use graph::{EdgeDecl, Graph, GraphStats, NodeDecl, Vertex, VertexIndex};

/// Whether this build can process sources on the rayon pool. Without it,
/// [`EngineConfig::parallel`] falls back to sequential processing.
pub const PARALLEL_AVAILABLE: bool = cfg!(feature = "parallel");
