//! Output formatting utilities.

use orgcard_canonical::{DiagnosticWarning, ValidationError};
use serde_json::{json, Value};

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a document as YAML.
pub fn format_yaml(value: &Value) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}

/// JSON form of a validation error.
pub fn error_json(error: &ValidationError) -> Value {
    json!({
        "kind": error.kind().to_string(),
        "path": error.path(),
        "message": error.to_string(),
    })
}

/// Formats a validation error as a table row.
pub fn format_error_row(error: &ValidationError) -> String {
    format!("{:<22} {:<32} {}", error.kind(), error.path(), error)
}

/// Formats a diagnostic warning as a table row.
pub fn format_warning_row(warning: &DiagnosticWarning) -> String {
    format!(
        "{:<22} {:<32} {}",
        warning.code,
        truncate(&warning.uid, 32),
        warning.message
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<22} {:<32} {}", "KIND", "WHERE", "DETAIL");
    println!("{}", "-".repeat(80));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
