//! Graph document loading.
//!
//! Two formats are understood, picked by [`InputFormat`]:
//!
//! - **GEXF** (`.gexf`, `.xml`): every `<node id label>` and
//!   `<edge source target>` element anywhere in the document, namespaces
//!   ignored. `label` defaults to the id.
//! - **JSON node-link** (anything else):
//!
//! ```json
//! {
//!   "nodes": [ {"id": "0", "label": "Myriel"}, {"id": "1", "label": "Napoleon"} ],
//!   "edges": [ {"source": "1", "target": "0"} ]
//! }
//! ```
//!
//! In JSON, `links` is accepted as an alias for `edges`, ids may be strings
//! or integers (`7` and `"7"` name the same vertex), `label` defaults to the
//! id, and unknown fields are ignored.

use std::path::Path;

use anyhow::{Context, Result};
use between_core::graph::{EdgeDecl, Graph, NodeDecl};
use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// On-disk graph document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON node-link document.
    Json,
    /// GEXF (Gephi XML) document.
    Gexf,
}

impl InputFormat {
    /// Guess the format from the file extension; JSON unless `.gexf`/`.xml`.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gexf") || ext.eq_ignore_ascii_case("xml") => {
                Self::Gexf
            }
            _ => Self::Json,
        }
    }
}

/// A graph document that could not be turned into declarations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid graph document")]
    Json(#[from] serde_json::Error),

    #[error("invalid graph document")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid graph document: <{element}> #{position} has no `{attribute}` attribute")]
    MissingAttribute {
        element: &'static str,
        position: usize,
        attribute: &'static str,
    },

    #[error("invalid graph document: id {value} is neither a string nor an integer")]
    NonIntegerId { value: String },
}

type Declarations = (Vec<NodeDecl>, Vec<EdgeDecl>);

// ---------------------------------------------------------------------------
// JSON node-link
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default, alias = "links")]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: RecordId,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: RecordId,
    target: RecordId,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl RecordId {
    /// Integers map to their decimal text; fractional numbers are rejected
    /// since `1.0` and `1` would otherwise name different vertices.
    fn into_id(self) -> Result<String, DocumentError> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            Self::Number(n) => Err(DocumentError::NonIntegerId {
                value: n.to_string(),
            }),
        }
    }
}

fn parse_json(text: &str) -> Result<Declarations, DocumentError> {
    let doc: GraphDocument = serde_json::from_str(text)?;

    let nodes = doc
        .nodes
        .into_iter()
        .map(|record| {
            let id = record.id.into_id()?;
            let label = record.label.unwrap_or_else(|| id.clone());
            Ok(NodeDecl::new(id, label))
        })
        .collect::<Result<Vec<_>, DocumentError>>()?;

    let edges = doc
        .edges
        .into_iter()
        .map(|record| Ok(EdgeDecl::new(record.source.into_id()?, record.target.into_id()?)))
        .collect::<Result<Vec<_>, DocumentError>>()?;

    Ok((nodes, edges))
}

// ---------------------------------------------------------------------------
// GEXF
// ---------------------------------------------------------------------------

fn required_attribute(
    element: roxmltree::Node<'_, '_>,
    name: &'static str,
    position: usize,
    attribute: &'static str,
) -> Result<String, DocumentError> {
    element
        .attribute(attribute)
        .map(str::to_owned)
        .ok_or(DocumentError::MissingAttribute {
            element: name,
            position,
            attribute,
        })
}

fn parse_gexf(text: &str) -> Result<Declarations, DocumentError> {
    let doc = roxmltree::Document::parse(text)?;
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for element in doc.descendants().filter(roxmltree::Node::is_element) {
        if element.has_tag_name("node") {
            let id = required_attribute(element, "node", nodes.len(), "id")?;
            let label = element.attribute("label").map_or_else(|| id.clone(), str::to_owned);
            nodes.push(NodeDecl::new(id, label));
        } else if element.has_tag_name("edge") {
            let source = required_attribute(element, "edge", edges.len(), "source")?;
            let target = required_attribute(element, "edge", edges.len(), "target")?;
            edges.push(EdgeDecl::new(source, target));
        }
    }

    Ok((nodes, edges))
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse a graph document and build the graph.
///
/// # Errors
///
/// Returns an error if the text is not a valid document (a
/// [`DocumentError`]) or if graph construction fails (the
/// [`between_core::GraphError`] stays in the chain).
pub fn parse_graph(text: &str, format: InputFormat) -> Result<Graph> {
    let (nodes, edges) = match format {
        InputFormat::Json => parse_json(text)?,
        InputFormat::Gexf => parse_gexf(text)?,
    };
    Ok(Graph::from_declarations(&nodes, &edges)?)
}

/// Read and parse the graph document at `path`. Without an explicit
/// `format` the file extension decides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_graph`] fails.
#[instrument]
pub fn load_graph(path: &Path, format: Option<InputFormat>) -> Result<Graph> {
    let format = format.unwrap_or_else(|| InputFormat::detect(path));
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let graph = parse_graph(&text, format)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(
        ?format,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
