use orgcard_canonical::{normalize_document, Person, ValidationError};
use orgcard_vcard::{parse, serialize, ReadMode};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ConversionError;
use crate::expansion::{contract, expand_all};

/// Options for the vCard → document direction.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Handling of malformed records (default: strict).
    pub read_mode: ReadMode,
}

/// Serializes already-normalized people as vCard text.
pub fn people_to_vcard(people: &[Person]) -> String {
    let records = expand_all(people);
    debug!(
        people = people.len(),
        records = records.len(),
        "expanded people into wire records"
    );
    serialize(&records)
}

/// Normalizes a raw document and serializes it as vCard text.
///
/// Serialization cannot fail, so the only errors are normalization
/// failures; they convert into [`ConversionError::Validation`] with `?`.
///
/// # Errors
///
/// Returns every normalization failure of the document.
pub fn document_to_vcard(document: &Value) -> Result<String, Vec<ValidationError>> {
    let people = normalize_document(document)?;
    Ok(people_to_vcard(&people))
}

/// Parses vCard text into people, one per record.
///
/// # Errors
///
/// Returns [`ConversionError::Codec`] for malformed text in strict mode.
pub fn vcard_to_people(text: &str, options: &ConvertOptions) -> Result<Vec<Person>, ConversionError> {
    let records = parse(text, options.read_mode)?;
    Ok(contract(&records))
}

/// Wraps people in the canonical document shape, `{"people": [...]}`.
pub fn people_to_document(people: &[Person]) -> Value {
    json!({ "people": people })
}

/// Parses vCard text into a canonical document.
///
/// # Errors
///
/// Same as [`vcard_to_people`].
pub fn vcard_to_document(text: &str, options: &ConvertOptions) -> Result<Value, ConversionError> {
    let people = vcard_to_people(text, options)?;
    Ok(people_to_document(&people))
}
