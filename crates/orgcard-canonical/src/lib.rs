//! Canonical people model for orgcard documents.
//!
//! Raw documents spell the same attribute many ways (`name`, `nombre`,
//! `givenName`, ...). This crate collapses those spellings into one canonical
//! [`Person`] through fixed priority tables, enforces the structural and range
//! checks of the model, and runs the optional diagnostic passes that never
//! block an otherwise valid document.
//!
//! Everything here is pure: identical input always yields identical output.

#![deny(missing_docs)]

/// Alias priority tables, one per canonical field.
pub mod aliases;
/// Optional diagnostic passes (duplicate uids, language codes).
pub mod diagnostics;
/// Canonical data model (Person, Job, Address, Phone, WireRecord).
pub mod model;
/// Alias resolution from raw documents into canonical people.
pub mod normalizer;
/// Validation errors and range/shape checks.
pub mod validation;

pub use diagnostics::{diagnose, DiagnosticReport, DiagnosticStatus, DiagnosticWarning};
pub use model::{
    Address, AdrValue, Email, I18n, Job, Person, Phone, StructuredName, Typed, WireRecord,
    WIRE_VERSION,
};
pub use normalizer::{normalize_document, normalize_person};
pub use validation::{validate_person, ErrorKind, FieldPath, ValidationError};
