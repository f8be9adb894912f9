//! To-vcard command implementation.

use orgcard_core::document_to_vcard;

use crate::input::{read_document, Format};
use crate::output::format_error_row;

pub fn run(
    input: Option<String>,
    output: Option<String>,
    format: Option<Format>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(input.as_deref(), format)?;

    let text = document_to_vcard(&document).map_err(|errors| {
        for error in &errors {
            eprintln!("{}", format_error_row(error));
        }
        format!("Document has {} validation error(s)", errors.len())
    })?;

    match output {
        Some(path) => std::fs::write(&path, text)
            .map_err(|e| format!("Failed to write file {}: {}", path, e))?,
        None => print!("{}", text),
    }
    Ok(())
}
