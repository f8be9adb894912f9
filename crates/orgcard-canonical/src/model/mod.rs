//! Data definitions only; behavior lives in the normalizer and codec crates.

mod person;
mod wire;

pub use person::{Address, Email, I18n, Job, Person, Phone, DEFAULT_FTE, DEFAULT_PHONE_TYPE};
pub use wire::{AdrValue, StructuredName, Typed, WireRecord, WIRE_VERSION};
