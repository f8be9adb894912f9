//! Field priority tables.
//!
//! Each constant lists the accepted input keys for one canonical field, in
//! resolution order: the canonical key first, then Spanish, French/German,
//! directory (LDAP) and informal spellings. The first key holding a non-null
//! value wins and every other key for that field is ignored, regardless of
//! where it appears in the source text.
//!
//! Adding an alias is a one-line change to the relevant table.

use serde_json::{Map, Value};

/// Keys of a document holding the list of people.
pub const PEOPLE: &[&str] = &["people", "persons", "personas", "personnes"];

/// Person-level fields.
pub mod person {
    /// `uid` accepts a single alias.
    pub const UID: &[&str] = &["uid", "id"];
    /// Given name.
    pub const NAME: &[&str] = &["name", "nombre", "prenom", "vorname", "givenName", "first_name"];
    /// Family name.
    pub const SURNAME: &[&str] = &["surname", "apellido", "nom", "nachname", "sn", "last_name"];
    /// Job title.
    pub const TITLE: &[&str] = &["title", "titulo", "titre", "position", "job_title"];
    /// Email address(es).
    pub const EMAIL: &[&str] = &["email", "correo", "courriel", "mail", "e_mail"];
    /// Organization.
    pub const ORG: &[&str] = &["org", "organizacion", "organisation", "o", "company"];
    /// Organizational unit.
    pub const ORG_UNIT: &[&str] = &[
        "org_unit",
        "departamento",
        "departement",
        "abteilung",
        "ou",
        "department",
    ];
    /// Line manager uid.
    pub const MANAGER: &[&str] = &["manager", "jefe", "responsable", "reportsTo", "boss"];
    /// Phone numbers.
    pub const PHONE: &[&str] = &["phone", "telefono", "telephone", "telephoneNumber", "tel"];
    /// Postal address.
    pub const ADDRESS: &[&str] = &["address", "direccion", "adresse", "postalAddress", "addr"];
    /// Concurrent roles.
    pub const JOBS: &[&str] = &["jobs", "puestos", "postes", "roles"];
    /// Translations.
    pub const I18N: &[&str] = &["i18n", "translations", "traducciones"];
}

/// Job-level fields.
pub mod job {
    /// Role title; a job's `title` is an alias for `role`.
    pub const ROLE: &[&str] = &["role", "title"];
    /// Allocation.
    pub const FTE: &[&str] = &["fte"];
    /// Line manager uid for the role.
    pub const MANAGER: &[&str] = &["manager", "jefe"];
    /// Dotted-line manager uids.
    pub const DOTTED: &[&str] = &["dotted", "dotted_line"];
    /// Organizational unit.
    pub const ORG_UNIT: &[&str] = &["org_unit", "ou"];
    /// Organization.
    pub const ORG: &[&str] = &["org", "o"];
    /// Primary-role flag.
    pub const PRIMARY: &[&str] = &["primary"];
}

/// Address components.
pub mod address {
    /// Street.
    pub const STREET: &[&str] = &["street", "calle", "rue", "strasse", "street_address"];
    /// City.
    pub const CITY: &[&str] = &["city", "ciudad", "ville", "l", "locality"];
    /// State or region.
    pub const STATE: &[&str] = &["state", "provincia", "region", "st"];
    /// Postal code.
    pub const POSTAL_CODE: &[&str] = &["postal_code", "codigo_postal", "code_postal", "postalCode", "zip"];
    /// Country.
    pub const COUNTRY: &[&str] = &["country", "pais", "pays", "c"];
}

/// Structured phone mapping.
pub mod phone {
    /// Number.
    pub const NUMBER: &[&str] = &["number", "numero", "value"];
    /// Phone type.
    pub const TYPE: &[&str] = &["type", "tipo"];
}

/// A resolved field: the key that won and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    /// Input key the value was taken from.
    pub key: &'static str,
    /// The value.
    pub value: &'a Value,
}

/// Resolves one field by walking `keys` in priority order.
///
/// Null values are treated as absent so that a lower-priority key can win.
pub fn resolve<'a>(raw: &'a Map<String, Value>, keys: &[&'static str]) -> Option<Resolved<'a>> {
    keys.iter().find_map(|&key| match raw.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(Resolved { key, value }),
    })
}
