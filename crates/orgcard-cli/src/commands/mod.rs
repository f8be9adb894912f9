//! Command implementations.

pub mod check;
pub mod from_vcard;
pub mod summary;
pub mod to_vcard;
