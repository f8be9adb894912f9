//! Loading input documents and vCard text.

use clap::ValueEnum;
use serde_json::{Map, Number, Value};
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Document encodings accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file extension; anything unknown reads as YAML.
    pub fn detect(path: Option<&str>) -> Self {
        let extension = path
            .and_then(|path| Path::new(path).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        error: io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported YAML value: {0}")]
    Unsupported(&'static str),
}

/// Reads a file, or stdin when no path is given.
pub fn read_text(path: Option<&str>) -> Result<String, InputError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|error| InputError::Read {
            source_name: path.to_string(),
            error,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|error| InputError::Read {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            Ok(buffer)
        }
    }
}

/// Reads and decodes a raw people document.
pub fn read_document(path: Option<&str>, format: Option<Format>) -> Result<Value, InputError> {
    let text = read_text(path)?;
    let format = format.unwrap_or_else(|| Format::detect(path));
    debug!(?format, bytes = text.len(), "decoding input document");
    match format {
        Format::Json => Ok(serde_json::from_str(&text)?),
        Format::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&text)?;
            yaml_to_json(&yaml)
        }
    }
}

/// Converts a YAML tree into the JSON value model the normalizer reads.
///
/// Non-string mapping keys (`1: x`, `true: y`) become their YAML text.
fn yaml_to_json(value: &serde_yaml::Value) -> Result<Value, InputError> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or(InputError::Unsupported("non-finite number"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, item) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => serde_yaml::to_string(other)?.trim().to_string(),
                };
                map.insert(key, yaml_to_json(item)?);
            }
            Ok(Value::Object(map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
