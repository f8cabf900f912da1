use std::fmt;

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingVertex,
    DuplicateVertex,
    PathCountOverflow,
    InvalidGraphDocument,
    ConfigParseError,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingVertex => "E2001",
            Self::DuplicateVertex => "E2002",
            Self::PathCountOverflow => "E3001",
            Self::InvalidGraphDocument => "E4001",
            Self::ConfigParseError => "E1002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingVertex => "Edge references an undeclared vertex",
            Self::DuplicateVertex => "Vertex id declared more than once",
            Self::PathCountOverflow => "Shortest-path count overflowed",
            Self::InvalidGraphDocument => "Graph document could not be parsed",
            Self::ConfigParseError => "Config file parse error",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint surfaced next to the error.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::MissingVertex => Some("Declare every edge endpoint in the node list."),
            Self::DuplicateVertex => Some("Give each node a unique id."),
            Self::PathCountOverflow => {
                Some("The graph has more than 2^64 geodesics between one pair; split it up.")
            }
            Self::InvalidGraphDocument => {
                Some("Expected a JSON object with `nodes` and `edges` arrays.")
            }
            Self::ConfigParseError => Some("Fix the TOML syntax in the config file and retry."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure while building a [`Graph`](crate::graph::Graph) from declarations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint names an id that is not in the node list.
    #[error("edge #{edge_index} references unknown vertex id `{id}`")]
    MissingVertex { edge_index: usize, id: String },

    /// The same node id was declared twice.
    #[error("vertex id `{id}` is declared more than once")]
    DuplicateVertex { id: String },
}

impl GraphError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingVertex { .. } => ErrorCode::MissingVertex,
            Self::DuplicateVertex { .. } => ErrorCode::DuplicateVertex,
        }
    }
}

/// Failure while computing centrality over an already-built graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CentralityError {
    /// The number of shortest paths to `vertex` does not fit in a `u64`.
    #[error("shortest-path count to vertex `{vertex}` overflowed u64")]
    PathCountOverflow { vertex: String },
}

impl CentralityError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::PathCountOverflow { .. } => ErrorCode::PathCountOverflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::MissingVertex,
            ErrorCode::DuplicateVertex,
            ErrorCode::PathCountOverflow,
            ErrorCode::InvalidGraphDocument,
            ErrorCode::ConfigParseError,
            ErrorCode::InternalUnexpected,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::MissingVertex.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn missing_vertex_message_names_id_and_edge() {
        let err = GraphError::MissingVertex {
            edge_index: 3,
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "edge #3 references unknown vertex id `42`");
        assert_eq!(err.code(), ErrorCode::MissingVertex);
    }
}
