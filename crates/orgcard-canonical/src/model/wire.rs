use serde::{Deserialize, Serialize};

/// vCard version emitted for every record.
pub const WIRE_VERSION: &str = "4.0";

/// A value with an optional `TYPE` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typed<T> {
    /// Property value.
    pub value: T,
    /// `TYPE` parameter, when present.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl<T> Typed<T> {
    /// Value without a `TYPE` parameter.
    pub fn plain(value: T) -> Self {
        Self { value, kind: None }
    }

    /// Value with a `TYPE` parameter.
    pub fn with_kind(value: T, kind: impl Into<String>) -> Self {
        Self {
            value,
            kind: Some(kind.into()),
        }
    }
}

/// The five positional `N` components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredName {
    /// Family name.
    pub family: String,
    /// Given name.
    pub given: String,
    /// Additional names.
    pub additional: String,
    /// Honorific prefixes.
    pub prefixes: String,
    /// Honorific suffixes.
    pub suffixes: String,
}

impl StructuredName {
    /// Number of positional components.
    pub const COMPONENTS: usize = 5;

    /// Components in wire order.
    pub fn components(&self) -> [&str; Self::COMPONENTS] {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
    }

    /// Builds from components in wire order; missing trailing components are empty.
    pub fn from_components(components: Vec<String>) -> Self {
        let mut parts = components.into_iter();
        let mut next = || parts.next().unwrap_or_default();
        Self {
            family: next(),
            given: next(),
            additional: next(),
            prefixes: next(),
            suffixes: next(),
        }
    }
}

/// The seven positional `ADR` components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrValue {
    /// Post-office box.
    pub po_box: String,
    /// Extended address (suite, floor).
    pub extended: String,
    /// Street address.
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state, province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl AdrValue {
    /// Number of positional components.
    pub const COMPONENTS: usize = 7;

    /// Components in wire order.
    pub fn components(&self) -> [&str; Self::COMPONENTS] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Builds from components in wire order; missing trailing components are empty.
    pub fn from_components(components: Vec<String>) -> Self {
        let mut parts = components.into_iter();
        let mut next = || parts.next().unwrap_or_default();
        Self {
            po_box: next(),
            extended: next(),
            street: next(),
            locality: next(),
            region: next(),
            postal_code: next(),
            country: next(),
        }
    }
}

/// One contact record in the wire format.
///
/// Only the recognized property set is represented; anything else is
/// dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    /// `VERSION` value.
    pub version: String,
    /// `UID`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// `FN` (formatted full name).
    #[serde(rename = "fn", default, skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    /// `N`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<StructuredName>,
    /// `TITLE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `ORG` components, e.g. `[organization, unit]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub org: Vec<String>,
    /// `EMAIL` occurrences in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<Typed<String>>,
    /// `TEL` occurrences in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tel: Vec<Typed<String>>,
    /// `ADR` occurrences in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adr: Vec<Typed<AdrValue>>,
    /// `URL` occurrences in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
    /// `NOTE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// `CATEGORIES`, accumulated across lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

impl Default for WireRecord {
    fn default() -> Self {
        Self {
            version: WIRE_VERSION.to_string(),
            uid: None,
            formatted_name: None,
            n: None,
            title: None,
            org: Vec::new(),
            email: Vec::new(),
            tel: Vec::new(),
            adr: Vec::new(),
            url: Vec::new(),
            note: None,
            categories: Vec::new(),
        }
    }
}

impl WireRecord {
    /// True when nothing but the version is set.
    pub fn is_version_only(&self) -> bool {
        *self
            == Self {
                version: self.version.clone(),
                ..Self::default()
            }
    }
}
