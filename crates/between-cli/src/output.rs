//! How `between` prints results and failures.
//!
//! Every command builds one serializable report and hands it to
//! [`render_mode`] together with a text and a pretty renderer; JSON comes
//! for free from the report's `Serialize` impl. Failures go to stderr via
//! [`render_error`], as a single `{"error": {...}}` document in JSON mode.
//!
//! The mode is picked, first match wins, from `--format` (or the hidden
//! `--json`), then the `FORMAT` env var, then whether stdout is a terminal
//! (pretty) or a pipe (text).

use std::io::{self, IsTerminal, Write};

use between_core::ErrorCode;
use clap::ValueEnum;
use serde::Serialize;

const PRETTY_KEY_WIDTH: usize = 22;
const PRETTY_RULE: &str = "------------------------------------------------";

/// Heading plus rule, used at the top of pretty reports.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    writeln!(w, "{PRETTY_RULE}")
}

pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(
        w,
        "{:<width$} {}",
        format!("{key}:"),
        value.as_ref(),
        width = PRETTY_KEY_WIDTH
    )
}

/// How a command prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Headed sections for a terminal.
    Pretty,
    /// Plain text in the classic `BC(name) = score` layout.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Parse a `FORMAT` env value; unrecognized values yield `None`.
    fn from_env_value(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }

    fn pick(flag: Option<Self>, json: bool, env: Option<&str>, stdout_is_tty: bool) -> Self {
        flag.or(json.then_some(Self::Json))
            .or_else(|| env.and_then(Self::from_env_value))
            .unwrap_or(if stdout_is_tty { Self::Pretty } else { Self::Text })
    }
}

/// Resolve the mode for this process from flags, `FORMAT` and the terminal.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let env = std::env::var("FORMAT").ok();
    OutputMode::pick(
        format_flag,
        json_flag,
        env.as_deref(),
        io::stdout().is_terminal(),
    )
}

/// Print `value` to stdout in `mode`.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, &mut out)?,
        OutputMode::Pretty => pretty_fn(value, &mut out)?,
    }
    Ok(())
}

/// A failed command, as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'static str>,
    pub error_code: &'static str,
}

impl CliError {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            suggestion: code.hint(),
            error_code: code.code(),
        }
    }
}

#[derive(Serialize)]
struct ErrorDocument<'a> {
    error: &'a CliError,
}

fn write_error(mode: OutputMode, error: &CliError, w: &mut dyn Write) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *w, &ErrorDocument { error })?;
            writeln!(w)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(w, "error: {}", error.message)?;
            if let Some(suggestion) = error.suggestion {
                writeln!(w, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

/// Print `error` to stderr in `mode`.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    write_error(mode, error, &mut io::stderr().lock())
}
