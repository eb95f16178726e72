use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::{FormDefinition, parse_form_definition};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse a form definition written in `format`.
pub fn form_definition_from_str(contents: &str, format: DocumentFormat) -> Result<FormDefinition> {
    let value = parse_document_str(contents, format)?;
    parse_form_definition(&value)
}

/// Read a form definition file, detecting its format from the extension
/// unless `format` is given.
pub fn load_form_definition(
    path: impl AsRef<Path>,
    format: Option<DocumentFormat>,
) -> Result<FormDefinition> {
    let path = path.as_ref();
    let format = format
        .or_else(|| DocumentFormat::from_path(path))
        .unwrap_or_default();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read form definition {}", path.display()))?;
    tracing::debug!(path = %path.display(), %format, "loading form definition");
    form_definition_from_str(&contents, format)
        .with_context(|| format!("invalid form definition {}", path.display()))
}
