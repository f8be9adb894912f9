//! Check command implementation.

use orgcard_canonical::{diagnose, normalize_document, DiagnosticStatus};
use serde_json::json;

use crate::input::{read_document, Format};
use crate::output::{error_json, format_error_row, format_warning_row, print_table_header};

pub fn run(
    input: Option<String>,
    json_output: bool,
    strict: bool,
    format: Option<Format>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(input.as_deref(), format)?;

    let people = match normalize_document(&document) {
        Ok(people) => people,
        Err(errors) => {
            if json_output {
                let errors: Vec<_> = errors.iter().map(error_json).collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "valid": false,
                        "errors": errors,
                    }))?
                );
            } else {
                print_table_header();
                for error in &errors {
                    println!("{}", format_error_row(error));
                }
            }
            return Err(format!("Document has {} validation error(s)", errors.len()).into());
        }
    };

    let report = diagnose(&people);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "valid": true,
                "people": people.len(),
                "diagnostics": report,
            }))?
        );
    } else if report.warnings.is_empty() {
        println!("OK: {} people", people.len());
    } else {
        print_table_header();
        for warning in &report.warnings {
            println!("{}", format_warning_row(warning));
        }
    }

    if strict && report.status == DiagnosticStatus::Warnings {
        return Err(format!("{} diagnostic warning(s)", report.warnings.len()).into());
    }
    Ok(())
}
