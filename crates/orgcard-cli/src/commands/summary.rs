//! Summary command implementation.

use orgcard_canonical::normalize_document;
use orgcard_core::summarize;

use crate::input::{read_document, Format};

pub fn run(
    input: Option<String>,
    json_output: bool,
    format: Option<Format>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(input.as_deref(), format)?;
    let people = normalize_document(&document).map_err(|errors| {
        format!(
            "Document has {} validation error(s); run `orgcard check` for details",
            errors.len()
        )
    })?;
    let summary = summarize(&people);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("People:          {}", summary.people);
    println!("vCard records:   {}", summary.wire_records);
    println!("Multi-hat:       {}", summary.multi_hat);
    println!("Total FTE:       {:.2}", summary.total_fte);
    print_counts("Org units", &summary.by_org_unit);
    print_counts("Direct reports", &summary.direct_reports);
    print_counts("Dotted-line reports", &summary.dotted_reports);
    Ok(())
}

fn print_counts(heading: &str, counts: &std::collections::BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    println!();
    println!("{}:", heading);
    for (key, count) in counts {
        println!("  {:<30} {}", key, count);
    }
}
