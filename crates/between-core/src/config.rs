//! Engine configuration.
//!
//! Loaded from an optional TOML file; every field has a default so a missing
//! file or an empty table yields [`EngineConfig::default`].
//!
//! ```toml
//! normalization = "corrected"
//! parallel = true
//! chunk_size = 128
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Scale applied to accumulated betweenness after all sources are processed.
///
/// Both scales first halve the accumulated value, since every unordered pair
/// is explored once from each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `accumulated / 2`: the number of geodesics (fractionally) passing
    /// through the vertex.
    Corrected,
    /// `(accumulated / 2) / ((n-1)(n-2)/2)`, in `[0, 1]`.
    #[default]
    Rescaled,
}

impl Normalization {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Corrected => "corrected",
            Self::Rescaled => "rescaled",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Normalization {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "corrected" | "raw" => Ok(Self::Corrected),
            "rescaled" | "normalized" => Ok(Self::Rescaled),
            other => anyhow::bail!("unknown normalization `{other}`"),
        }
    }
}

/// Knobs for [`CentralityEngine`](crate::centrality::CentralityEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub normalization: Normalization,
    /// Run sources on the rayon pool. Ignored without the `parallel` feature.
    #[serde(default)]
    pub parallel: bool,
    /// Sources accumulated per parallel task before partials are merged.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            parallel: false,
            chunk_size: default_chunk_size(),
        }
    }
}

/// Load an [`EngineConfig`] from a TOML file, falling back to defaults when
/// the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_engine_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<EngineConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_chunk_size() -> usize {
    64
}
