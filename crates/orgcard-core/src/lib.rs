//! Conversion between orgcard documents and vCard text.
//!
//! This crate provides:
//! - Multi-hat expansion of one [`Person`] into one or more wire records
//! - Contraction of wire records back into people (one person per record)
//! - The two public conversion directions, document to vCard and back
//! - Summary statistics over a normalized people list
//!
//! Core invariants:
//! - Secondary record uids are `{uid}-job-{index}`, with `index` the job's
//!   position in [`Person::jobs`]
//! - Contraction never merges records; multi-hat structure does not survive
//!   document → vCard → document
//! - Every operation is pure and synchronous
//!
//! ```rust
//! use orgcard_core::{document_to_vcard, vcard_to_people, ConvertOptions};
//! use serde_json::json;
//!
//! let doc = json!({"people": [{"uid": "jordan", "nombre": "Jordan", "title": "Lead",
//!                              "jobs": [{"role": "Mentor", "fte": 0.2}]}]});
//! let text = document_to_vcard(&doc)?;
//! let people = vcard_to_people(&text, &ConvertOptions::default())?;
//! assert_eq!(people.len(), 2);
//! assert_eq!(people[1].uid, "jordan-job-0");
//! # Ok::<(), orgcard_core::ConversionError>(())
//! ```
//!
//! [`Person`]: orgcard_canonical::Person
//! [`Person::jobs`]: orgcard_canonical::Person::jobs

#![deny(missing_docs)]

/// Document ⇄ vCard conversion.
pub mod convert;
/// Error types for conversion.
pub mod errors;
/// Person ⇄ wire record mapping, including multi-hat expansion.
pub mod expansion;
/// Summary statistics over people.
pub mod summary;

pub use convert::{
    document_to_vcard, people_to_document, people_to_vcard, vcard_to_document, vcard_to_people,
    ConvertOptions,
};
pub use errors::ConversionError;
pub use expansion::{contract, contract_record, expand, expand_all, secondary_uid};
pub use summary::{summarize, OrgSummary};
