//! From-vcard command implementation.

use orgcard_core::{vcard_to_document, ConvertOptions};
use orgcard_vcard::ReadMode;

use crate::input::read_text;
use crate::output::{format_json, format_yaml};

pub fn run(
    input: Option<String>,
    json_output: bool,
    permissive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text(input.as_deref())?;

    // Skipped records are reported through the warn-level log.
    let options = ConvertOptions {
        read_mode: if permissive {
            ReadMode::Permissive
        } else {
            ReadMode::Strict
        },
    };
    let document = vcard_to_document(&text, &options)?;

    if json_output {
        println!("{}", format_json(&document));
    } else {
        print!("{}", format_yaml(&document)?);
    }
    Ok(())
}
