//! Override file loading.
//!
//! Override files hold a possibly partial [`NoiseAnalysisOverrides`] set in
//! TOML or JSON. Validation of the values happens later, when the overrides
//! are turned into a [`crate::NoiseAnalysisConfig`].

use std::path::Path;

use dtn_common::{Error, Result};
use tracing::{debug, warn};

use crate::noise::NoiseAnalysisOverrides;

/// Serialization format of an override file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }

    /// Guess the format of extensionless content.
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            FileFormat::Json
        } else {
            FileFormat::Toml
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
        }
    }
}

/// Parse overrides from a string in the given format.
pub fn parse_overrides(content: &str, format: FileFormat) -> Result<NoiseAnalysisOverrides> {
    match format {
        FileFormat::Json => serde_json::from_str(content).map_err(|e| Error::Parse {
            format: "json",
            message: e.to_string(),
        }),
        FileFormat::Toml => toml::from_str(content).map_err(|e| Error::Parse {
            format: "toml",
            message: e.to_string(),
        }),
    }
}

/// Load overrides from a file.
///
/// The format follows the extension. For any other extension, content that
/// opens with `{` is parsed as JSON and everything else as TOML.
pub fn load_overrides(path: &Path) -> Result<NoiseAnalysisOverrides> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read override file");
            return Err(e.into());
        }
    };

    let format = match FileFormat::from_path(path) {
        Some(format) => format,
        None => FileFormat::sniff(&content),
    };
    let overrides = parse_overrides(&content, format)?;
    debug!(path = %path.display(), format = format.name(), ?overrides, "loaded override file");
    Ok(overrides)
}
