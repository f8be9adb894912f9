use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Translations keyed by field name, then by language code.
pub type I18n = BTreeMap<String, BTreeMap<String, String>>;

/// Default allocation for a job without an explicit `fte`.
pub const DEFAULT_FTE: f64 = 1.0;

/// Default phone type for structured phones without a `type`.
pub const DEFAULT_PHONE_TYPE: &str = "work";

/// One or more email addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Email {
    /// A single address.
    Single(String),
    /// An ordered list of addresses.
    Many(Vec<String>),
}

impl Email {
    /// Returns the addresses in declaration order.
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            Email::Single(address) => vec![address.as_str()],
            Email::Many(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }

    /// Builds the narrowest variant for the given addresses.
    ///
    /// Returns `None` for an empty list.
    pub fn from_addresses(mut addresses: Vec<String>) -> Option<Self> {
        match addresses.len() {
            0 => None,
            1 => addresses.pop().map(Email::Single),
            _ => Some(Email::Many(addresses)),
        }
    }
}

/// A phone number, bare or typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Phone {
    /// Number without a type.
    Bare(String),
    /// Number with a type such as `work` or `cell`.
    Typed {
        /// Phone type (defaults to `work`).
        #[serde(rename = "type")]
        kind: String,
        /// The number as written.
        number: String,
    },
}

impl Phone {
    /// Returns the number regardless of variant.
    pub fn number(&self) -> &str {
        match self {
            Phone::Bare(number) => number,
            Phone::Typed { number, .. } => number,
        }
    }

    /// Returns the type of a structured phone.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Phone::Bare(_) => None,
            Phone::Typed { kind, .. } => Some(kind),
        }
    }
}

/// Postal address; every component is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City or locality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, province or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// True when no component is set.
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

fn default_fte() -> f64 {
    DEFAULT_FTE
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One concurrent role held by a person.
///
/// Jobs carry no uid of their own; they are addressed by position within
/// [`Person::jobs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Role title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Full-time-equivalent allocation in `[0, 1]`.
    #[serde(default = "default_fte")]
    pub fte: f64,
    /// Uid of the line manager for this role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Uids of dotted-line managers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dotted: Vec<String>,
    /// Organizational unit of this role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_unit: Option<String>,
    /// Organization of this role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Whether this is the person's primary role.
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            role: None,
            fte: DEFAULT_FTE,
            manager: None,
            dotted: Vec::new(),
            org_unit: None,
            org: None,
            primary: false,
        }
    }
}

/// Canonical person record.
///
/// Only canonical field names exist here; aliases are resolved by
/// [`normalize_person`](crate::normalize_person).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within a document (non-empty).
    pub uid: String,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Top-level job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Email address(es).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Organizational unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_unit: Option<String>,
    /// Uid of the line manager; existence is not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Phone numbers in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone: Vec<Phone>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Address::is_empty")]
    pub address: Address,
    /// Concurrent roles, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    /// Field translations.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub i18n: I18n,
}

impl Person {
    /// Creates a person with only a uid set.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Display name: name and surname joined by a space, if either is set.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// True when the person has a non-blank top-level title.
    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| !title.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_narrows_to_single() {
        assert_eq!(
            Email::from_addresses(vec!["a@x.org".into()]),
            Some(Email::Single("a@x.org".into()))
        );
        assert_eq!(Email::from_addresses(vec![]), None);
    }

    #[test]
    fn person_serializes_only_present_fields() {
        let mut person = Person::new("jordan");
        person.name = Some("Jordan".into());
        person.phone = vec![
            Phone::Bare("555-0100".into()),
            Phone::Typed {
                kind: "cell".into(),
                number: "555-0101".into(),
            },
        ];

        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(
            value,
            json!({
                "uid": "jordan",
                "name": "Jordan",
                "phone": ["555-0100", {"type": "cell", "number": "555-0101"}]
            })
        );
    }

    #[test]
    fn job_defaults_apply_on_deserialize() {
        let job: Job = serde_json::from_value(json!({"role": "Lead"})).unwrap();
        assert_eq!(job.fte, 1.0);
        assert!(job.dotted.is_empty());
        assert!(!job.primary);
    }

    #[test]
    fn full_name_skips_blank_parts() {
        let mut person = Person::new("x");
        assert_eq!(person.full_name(), None);
        person.surname = Some("Lee".into());
        person.name = Some("  ".into());
        assert_eq!(person.full_name(), Some("Lee".into()));
    }
}
