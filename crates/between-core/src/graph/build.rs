//! Graph construction from node and edge declarations.
//!
//! # Overview
//!
//! A [`Graph`] is built once from an ordered list of [`NodeDecl`]s and an
//! ordered list of [`EdgeDecl`]s and is read-only afterwards. Every vertex
//! gets a dense [`VertexIndex`] in declaration order.
//!
//! ## Undirected Storage
//!
//! Each declared edge `(a, b)` is appended to `a`'s neighbor list **and** to
//! `b`'s, so the adjacency lists hold two entries per logical edge. The
//! logical edge list is kept as well, in declaration order, for statistics
//! and the petgraph view.
//!
//! ## Failure Atomicity
//!
//! Construction works on local buffers and only returns a [`Graph`] once
//! every edge has resolved. An edge naming an undeclared id fails the whole
//! build with [`GraphError::MissingVertex`].
//!
//! ## Content Hash
//!
//! [`Graph::content_hash`] is a BLAKE3 hash of the declarations, so callers
//! can tell which input a centrality result was computed from.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use petgraph::graph::UnGraph;
use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::graph::vertex::{Vertex, VertexIndex};

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// A node declaration: `(id, label)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    pub id: String,
    pub label: String,
}

impl NodeDecl {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl From<(&str, &str)> for NodeDecl {
    fn from((id, label): (&str, &str)) -> Self {
        Self::new(id, label)
    }
}

/// An undirected edge declaration: `(source_id, target_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    pub source: String,
    pub target: String,
}

impl EdgeDecl {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<(&str, &str)> for EdgeDecl {
    fn from((source, target): (&str, &str)) -> Self {
        Self::new(source, target)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected, unweighted graph that owns all of its vertices.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index_by_id: HashMap<String, VertexIndex>,
    edges: Vec<(VertexIndex, VertexIndex)>,
    content_hash: String,
}

impl Graph {
    /// Build a graph from node and edge declarations.
    ///
    /// Vertices are indexed in node declaration order. Edges are stored in
    /// both directions in edge declaration order. Self-loops and repeated
    /// edges are stored as declared.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateVertex`] if two nodes share an id.
    /// - [`GraphError::MissingVertex`] if an edge names an undeclared id.
    #[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn from_declarations(nodes: &[NodeDecl], edges: &[EdgeDecl]) -> Result<Self, GraphError> {
        let mut vertices: Vec<Vertex> = Vec::with_capacity(nodes.len());
        let mut index_by_id: HashMap<String, VertexIndex> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let idx = VertexIndex::new(vertices.len());
            match index_by_id.entry(node.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(GraphError::DuplicateVertex {
                        id: node.id.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }
            vertices.push(Vertex::new(idx, node.id.clone(), node.label.clone()));
        }

        // Resolve every endpoint before touching adjacency.
        let resolved = edges
            .iter()
            .enumerate()
            .map(|(edge_index, edge)| -> Result<_, GraphError> {
                let lookup = |id: &str| {
                    index_by_id
                        .get(id)
                        .copied()
                        .ok_or_else(|| GraphError::MissingVertex {
                            edge_index,
                            id: id.to_string(),
                        })
                };
                Ok((lookup(&edge.source)?, lookup(&edge.target)?))
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        for &(a, b) in &resolved {
            vertices[a.index()].push_neighbor(b);
            vertices[b.index()].push_neighbor(a);
        }

        let content_hash = compute_content_hash(nodes, edges);

        debug!(
            vertices = vertices.len(),
            edges = resolved.len(),
            %content_hash,
            "graph built"
        );

        Ok(Self {
            vertices,
            index_by_id,
            edges: resolved,
            content_hash,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical (undirected) edges. Adjacency lists hold twice this.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in index order. Stable across calls.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All vertex indices in order.
    pub fn indices(&self) -> impl ExactSizeIterator<Item = VertexIndex> + '_ {
        self.vertices.iter().map(Vertex::index)
    }

    /// Logical edges in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[(VertexIndex, VertexIndex)] {
        &self.edges
    }

    /// The vertex at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this graph.
    #[must_use]
    pub fn vertex(&self, idx: VertexIndex) -> &Vertex {
        &self.vertices[idx.index()]
    }

    /// Neighbor list of the vertex at `idx`.
    #[must_use]
    pub fn neighbors(&self, idx: VertexIndex) -> &[VertexIndex] {
        self.vertex(idx).neighbors()
    }

    /// Look up a vertex index by id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<VertexIndex> {
        self.index_by_id.get(id).copied()
    }

    /// Look up a vertex by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Vertex> {
        self.index_of(id).map(|idx| self.vertex(idx))
    }

    /// BLAKE3 hash of the declarations this graph was built from.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// An undirected petgraph view. Node weights are the [`VertexIndex`] of
    /// the corresponding vertex, and petgraph node `i` is vertex `i`.
    #[must_use]
    pub fn to_petgraph(&self) -> UnGraph<VertexIndex, ()> {
        let mut graph = UnGraph::with_capacity(self.vertices.len(), self.edges.len());
        for vertex in &self.vertices {
            graph.add_node(vertex.index());
        }
        for &(a, b) in &self.edges {
            graph.add_edge(
                petgraph::graph::NodeIndex::new(a.index()),
                petgraph::graph::NodeIndex::new(b.index()),
                (),
            );
        }
        graph
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Feed one field as `len (u64 LE) || bytes`, so field boundaries are
/// unambiguous whatever bytes the ids and labels contain.
fn hash_field(hasher: &mut blake3::Hasher, field: &str) {
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

fn compute_content_hash(nodes: &[NodeDecl], edges: &[EdgeDecl]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(nodes.len() as u64).to_le_bytes());
    for node in nodes {
        hash_field(&mut hasher, &node.id);
        hash_field(&mut hasher, &node.label);
    }
    hasher.update(&(edges.len() as u64).to_le_bytes());
    for edge in edges {
        hash_field(&mut hasher, &edge.source);
        hash_field(&mut hasher, &edge.target);
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
