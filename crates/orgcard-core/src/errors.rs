use orgcard_canonical::ValidationError;
use orgcard_vcard::CodecError;
use thiserror::Error;

/// Errors returned by the conversion entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The document failed normalization; every failure is listed.
    #[error("document failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    /// The vCard text holds malformed records.
    #[error("vCard text is malformed: {0}")]
    Codec(#[from] CodecError),
}

impl From<Vec<ValidationError>> for ConversionError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ConversionError::Validation(errors)
    }
}
