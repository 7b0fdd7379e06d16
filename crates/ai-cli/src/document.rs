//! YAML/JSON input files, picked by extension.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "unsupported file extension for {} (expected .yaml, .yml or .json)",
                path.display()
            ),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T> {
        match self {
            Self::Yaml => serde_yaml::from_str(text).context("invalid YAML"),
            Self::Json => serde_json::from_str(text).context("invalid JSON"),
        }
    }
}

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    format
        .parse(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}
