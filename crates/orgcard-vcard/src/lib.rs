//! vCard 4.0 codec for orgcard wire records.
//!
//! This crate provides:
//! - A line-oriented parser from vCard text into [`WireRecord`] values
//! - A deterministic serializer back to CRLF-terminated vCard text
//! - Per-component escaping shared by both directions
//!
//! Only the recognized property set ([`RECOGNIZED_PROPERTIES`]) survives a
//! parse; any other property is dropped. For records built from recognized
//! properties, `parse(serialize(records))` reproduces the records exactly.
//!
//! ```rust
//! use orgcard_vcard::{parse, serialize, ReadMode};
//! use orgcard_canonical::WireRecord;
//!
//! let record = WireRecord {
//!     uid: Some("jordan".into()),
//!     note: Some("likes commas, and\nnewlines".into()),
//!     ..WireRecord::default()
//! };
//! let text = serialize(std::slice::from_ref(&record));
//! assert_eq!(parse(&text, ReadMode::Strict)?, vec![record]);
//! # Ok::<(), orgcard_vcard::CodecError>(())
//! ```
//!
//! [`WireRecord`]: orgcard_canonical::WireRecord

#![deny(missing_docs)]

/// Codec error types.
pub mod errors;
/// Backslash escaping and escape-aware splitting.
pub mod escape;
/// vCard text to wire records.
pub mod parser;
/// Wire records to vCard text.
pub mod serializer;

pub use errors::CodecError;
pub use parser::{parse, parse_report, ParseReport, ReadMode, RECOGNIZED_PROPERTIES};
pub use serializer::{serialize, serialize_record, LINE_TERMINATOR};
