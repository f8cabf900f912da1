//! Vertex identity and adjacency.

use std::fmt;

/// Dense, stable position of a vertex inside its owning
/// [`Graph`](crate::graph::Graph).
///
/// Indices are assigned in declaration order at build time and key every
/// per-source array in the centrality engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(usize);

impl VertexIndex {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A graph vertex: an immutable `id`/`name` pair plus its neighbor list.
///
/// Neighbors are kept in the order edges were declared. Each undirected edge
/// appears once in each endpoint's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    index: VertexIndex,
    id: String,
    name: String,
    neighbors: Vec<VertexIndex>,
}

impl Vertex {
    pub(crate) const fn new(index: VertexIndex, id: String, name: String) -> Self {
        Self {
            index,
            id,
            name,
            neighbors: Vec::new(),
        }
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: VertexIndex) {
        self.neighbors.push(neighbor);
    }

    #[must_use]
    pub const fn index(&self) -> VertexIndex {
        self.index
    }

    /// Unique identifier within the owning graph.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label. Not guaranteed unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn neighbors(&self) -> &[VertexIndex] {
        &self.neighbors
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
