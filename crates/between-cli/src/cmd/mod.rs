pub mod compute;
pub mod stats;

use between_core::{CentralityError, ErrorCode, GraphError};

use crate::load::DocumentError;
use crate::output::{CliError, OutputMode, render_error};

/// Map a command failure to its stable error code.
pub fn classify(err: &anyhow::Error) -> ErrorCode {
    for cause in err.chain() {
        if let Some(graph_err) = cause.downcast_ref::<GraphError>() {
            return graph_err.code();
        }
        if let Some(centrality_err) = cause.downcast_ref::<CentralityError>() {
            return centrality_err.code();
        }
        if cause.downcast_ref::<DocumentError>().is_some()
            || cause.downcast_ref::<serde_json::Error>().is_some()
        {
            return ErrorCode::InvalidGraphDocument;
        }
        if cause.downcast_ref::<toml::de::Error>().is_some() {
            return ErrorCode::ConfigParseError;
        }
    }
    ErrorCode::InternalUnexpected
}

/// Render `err` to stderr in the active output mode and hand it back for
/// propagation.
pub fn report(output: OutputMode, err: anyhow::Error) -> anyhow::Error {
    let code = classify(&err);
    let cli_error = CliError::new(format!("{err:#}"), code);
    if let Err(render_err) = render_error(output, &cli_error) {
        tracing::warn!(error = %render_err, "failed to render error");
    }
    err
}
