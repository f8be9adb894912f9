//! Alias resolution: raw structured documents into canonical [`Person`] values.
//!
//! Every canonical field is looked up through its table in
//! [`aliases`](crate::aliases); the first present key wins. Shape, range and
//! required-field failures are accumulated for the whole document rather than
//! stopping at the first one. Unknown keys are ignored.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::aliases::{self, Resolved};
use crate::model::{Address, Email, I18n, Job, Person, Phone, DEFAULT_FTE, DEFAULT_PHONE_TYPE};
use crate::validation::{check_fte, check_uid, FieldPath, ValidationError};

const TEXT: &str = "a string";
const EMAIL_SHAPE: &str = "a string or a sequence of strings";
const PHONE_SHAPE: &str = "a string or a {type, number} mapping";
const MAPPING: &str = "a mapping";
const SEQUENCE: &str = "a sequence";

/// Normalizes a single person mapping.
///
/// # Errors
///
/// Returns every [`ValidationError`] found in the mapping.
pub fn normalize_person(raw: &Value) -> Result<Person, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let person = person_at(raw, &FieldPath::root(), &mut errors);
    match person {
        Some(person) if errors.is_empty() => Ok(person),
        _ => Err(errors),
    }
}

/// Normalizes a whole document into zero or more people.
///
/// Accepted shapes: a sequence of person mappings, a mapping whose people
/// key (see [`aliases::PEOPLE`]) holds such a sequence, a single person
/// mapping, or an empty document (null, or a people key holding null).
///
/// # Errors
///
/// Returns the failures of every person in the document, each with an
/// indexed path such as `people[1].jobs[0].fte`.
pub fn normalize_document(raw: &Value) -> Result<Vec<Person>, Vec<ValidationError>> {
    let root = FieldPath::root();
    let mut errors = Vec::new();

    let people = match raw {
        Value::Null => Vec::new(),
        Value::Array(items) => people_at(items, &root, &mut errors),
        Value::Object(map) => match aliases::resolve(map, aliases::PEOPLE) {
            Some(Resolved {
                key,
                value: Value::Array(items),
            }) => people_at(items, &root.push_field(key), &mut errors),
            Some(Resolved { key, .. }) => {
                errors.push(ValidationError::mismatch(
                    &root.push_field(key),
                    "people",
                    SEQUENCE,
                ));
                Vec::new()
            }
            // A bare `people:` key in YAML loads as null: no people.
            None if has_empty_people_key(map) => Vec::new(),
            None => person_at(raw, &root, &mut errors).into_iter().collect(),
        },
        _ => {
            errors.push(ValidationError::mismatch(
                &root,
                "people",
                "a mapping or a sequence",
            ));
            Vec::new()
        }
    };

    if errors.is_empty() {
        debug!(people = people.len(), "normalized document");
        Ok(people)
    } else {
        debug!(errors = errors.len(), "document failed validation");
        Err(errors)
    }
}

fn has_empty_people_key(map: &Map<String, Value>) -> bool {
    aliases::PEOPLE
        .iter()
        .any(|key| map.get(*key).is_some_and(Value::is_null))
}

fn people_at(items: &[Value], path: &FieldPath, errors: &mut Vec<ValidationError>) -> Vec<Person> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| person_at(item, &path.push_index(index), errors))
        .collect()
}

fn person_at(raw: &Value, path: &FieldPath, errors: &mut Vec<ValidationError>) -> Option<Person> {
    let Value::Object(map) = raw else {
        errors.push(ValidationError::mismatch(path, "person", MAPPING));
        return None;
    };

    let uid = match aliases::resolve(map, aliases::person::UID) {
        None => {
            errors.push(ValidationError::missing(path, "uid"));
            String::new()
        }
        Some(resolved) => match scalar_text(resolved.value) {
            Some(uid) => {
                if let Err(err) = check_uid(&uid, path) {
                    errors.push(err);
                }
                uid
            }
            None => {
                errors.push(ValidationError::mismatch(
                    &path.push_field(resolved.key),
                    "uid",
                    TEXT,
                ));
                String::new()
            }
        },
    };

    let person = Person {
        uid,
        name: text_field(map, aliases::person::NAME, "name", path, errors),
        surname: text_field(map, aliases::person::SURNAME, "surname", path, errors),
        title: text_field(map, aliases::person::TITLE, "title", path, errors),
        email: email_field(map, path, errors),
        org: text_field(map, aliases::person::ORG, "org", path, errors),
        org_unit: text_field(map, aliases::person::ORG_UNIT, "org_unit", path, errors),
        manager: text_field(map, aliases::person::MANAGER, "manager", path, errors),
        phone: phone_field(map, path, errors),
        address: address_field(map, path, errors),
        jobs: jobs_field(map, path, errors),
        i18n: i18n_field(map, path, errors),
    };
    trace!(uid = %person.uid, jobs = person.jobs.len(), "normalized person");
    Some(person)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn lookup<'a>(
    map: &'a Map<String, Value>,
    keys: &[&'static str],
    field: &'static str,
) -> Option<Resolved<'a>> {
    let resolved = aliases::resolve(map, keys)?;
    if resolved.key != keys[0] {
        trace!(field, alias = resolved.key, "resolved field through alias");
    }
    Some(resolved)
}

fn text_field(
    map: &Map<String, Value>,
    keys: &[&'static str],
    field: &'static str,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let resolved = lookup(map, keys, field)?;
    let text = scalar_text(resolved.value);
    if text.is_none() {
        errors.push(ValidationError::mismatch(
            &path.push_field(resolved.key),
            field,
            TEXT,
        ));
    }
    text
}

fn email_field(
    map: &Map<String, Value>,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Option<Email> {
    let resolved = lookup(map, aliases::person::EMAIL, "email")?;
    let at = path.push_field(resolved.key);
    match resolved.value {
        Value::String(address) => Some(Email::Single(address.clone())),
        Value::Array(items) => {
            let mut addresses = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(address) => addresses.push(address.clone()),
                    _ => errors.push(ValidationError::mismatch(
                        &at.push_index(index),
                        "email",
                        EMAIL_SHAPE,
                    )),
                }
            }
            Some(Email::Many(addresses))
        }
        _ => {
            errors.push(ValidationError::mismatch(&at, "email", EMAIL_SHAPE));
            None
        }
    }
}

fn phone_field(
    map: &Map<String, Value>,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Vec<Phone> {
    let Some(resolved) = lookup(map, aliases::person::PHONE, "phone") else {
        return Vec::new();
    };
    let at = path.push_field(resolved.key);
    match resolved.value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| phone_entry(item, &at.push_index(index), errors))
            .collect(),
        single => phone_entry(single, &at, errors).into_iter().collect(),
    }
}

fn phone_entry(value: &Value, path: &FieldPath, errors: &mut Vec<ValidationError>) -> Option<Phone> {
    match value {
        Value::String(number) => Some(Phone::Bare(number.clone())),
        Value::Number(number) => Some(Phone::Bare(number.to_string())),
        Value::Object(map) => {
            let number = aliases::resolve(map, aliases::phone::NUMBER)
                .and_then(|resolved| scalar_text(resolved.value));
            let kind = match aliases::resolve(map, aliases::phone::TYPE) {
                None => Some(DEFAULT_PHONE_TYPE.to_string()),
                Some(resolved) => match resolved.value {
                    Value::String(kind) => Some(kind.clone()),
                    _ => None,
                },
            };
            match (kind, number) {
                (Some(kind), Some(number)) => Some(Phone::Typed { kind, number }),
                _ => {
                    errors.push(ValidationError::mismatch(path, "phone", PHONE_SHAPE));
                    None
                }
            }
        }
        _ => {
            errors.push(ValidationError::mismatch(path, "phone", PHONE_SHAPE));
            None
        }
    }
}

fn address_field(
    map: &Map<String, Value>,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Address {
    let Some(resolved) = lookup(map, aliases::person::ADDRESS, "address") else {
        return Address::default();
    };
    let at = path.push_field(resolved.key);
    let Value::Object(raw) = resolved.value else {
        errors.push(ValidationError::mismatch(&at, "address", MAPPING));
        return Address::default();
    };
    Address {
        street: text_field(raw, aliases::address::STREET, "street", &at, errors),
        city: text_field(raw, aliases::address::CITY, "city", &at, errors),
        state: text_field(raw, aliases::address::STATE, "state", &at, errors),
        postal_code: text_field(raw, aliases::address::POSTAL_CODE, "postal_code", &at, errors),
        country: text_field(raw, aliases::address::COUNTRY, "country", &at, errors),
    }
}

fn jobs_field(
    map: &Map<String, Value>,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> Vec<Job> {
    let Some(resolved) = lookup(map, aliases::person::JOBS, "jobs") else {
        return Vec::new();
    };
    let at = path.push_field(resolved.key);
    let Value::Array(items) = resolved.value else {
        errors.push(ValidationError::mismatch(&at, "jobs", SEQUENCE));
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| job_at(item, &at.push_index(index), errors))
        .collect()
}

fn job_at(raw: &Value, path: &FieldPath, errors: &mut Vec<ValidationError>) -> Option<Job> {
    let Value::Object(map) = raw else {
        errors.push(ValidationError::mismatch(path, "job", MAPPING));
        return None;
    };

    let fte = match lookup(map, aliases::job::FTE, "fte") {
        None => DEFAULT_FTE,
        Some(resolved) => {
            let at = path.push_field(resolved.key);
            match resolved.value.as_f64() {
                Some(fte) => {
                    if let Err(err) = check_fte(fte, &at) {
                        errors.push(err);
                    }
                    fte
                }
                None => {
                    errors.push(ValidationError::mismatch(&at, "fte", "a number"));
                    DEFAULT_FTE
                }
            }
        }
    };

    let dotted = match lookup(map, aliases::job::DOTTED, "dotted") {
        None => Vec::new(),
        Some(resolved) => {
            let at = path.push_field(resolved.key);
            match resolved.value {
                Value::Array(items) => items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        let uid = scalar_text(item);
                        if uid.is_none() {
                            errors.push(ValidationError::mismatch(
                                &at.push_index(index),
                                "dotted",
                                TEXT,
                            ));
                        }
                        uid
                    })
                    .collect(),
                single => match scalar_text(single) {
                    Some(uid) => vec![uid],
                    None => {
                        errors.push(ValidationError::mismatch(
                            &at,
                            "dotted",
                            "a string or a sequence of strings",
                        ));
                        Vec::new()
                    }
                },
            }
        }
    };

    let primary = match lookup(map, aliases::job::PRIMARY, "primary") {
        None => false,
        Some(resolved) => match resolved.value {
            Value::Bool(flag) => *flag,
            _ => {
                errors.push(ValidationError::mismatch(
                    &path.push_field(resolved.key),
                    "primary",
                    "a boolean",
                ));
                false
            }
        },
    };

    Some(Job {
        role: text_field(map, aliases::job::ROLE, "role", path, errors),
        fte,
        manager: text_field(map, aliases::job::MANAGER, "manager", path, errors),
        dotted,
        org_unit: text_field(map, aliases::job::ORG_UNIT, "org_unit", path, errors),
        org: text_field(map, aliases::job::ORG, "org", path, errors),
        primary,
    })
}

fn i18n_field(
    map: &Map<String, Value>,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) -> I18n {
    let mut i18n = I18n::new();
    let Some(resolved) = lookup(map, aliases::person::I18N, "i18n") else {
        return i18n;
    };
    let at = path.push_field(resolved.key);
    let Value::Object(fields) = resolved.value else {
        errors.push(ValidationError::mismatch(&at, "i18n", MAPPING));
        return i18n;
    };

    for (field, translations) in fields {
        let field_path = at.push_field(field);
        let Value::Object(translations) = translations else {
            errors.push(ValidationError::mismatch(
                &field_path,
                "i18n",
                "a mapping of language code to string",
            ));
            continue;
        };
        let mut by_language = BTreeMap::new();
        for (language, text) in translations {
            match text {
                Value::String(text) => {
                    by_language.insert(language.clone(), text.clone());
                }
                _ => errors.push(ValidationError::mismatch(
                    &field_path.push_field(language),
                    "i18n",
                    TEXT,
                )),
            }
        }
        i18n.insert(field.clone(), by_language);
    }
    i18n
}
