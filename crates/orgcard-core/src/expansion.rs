//! Person ⇄ wire record mapping.
//!
//! Expansion derives a primary record from a person's top-level fields and a
//! secondary record per additional job. Contraction is not its
//! inverse: nothing in the wire format marks a record as synthetic, so every
//! record becomes its own person and `jobs` stays empty.

use orgcard_canonical::{
    Address, AdrValue, Email, Person, Phone, StructuredName, Typed, WireRecord,
};
use tracing::trace;

const ADDRESS_TYPE: &str = "work";
const MANAGER_PREFIX: &str = "Manager: ";

/// Uid of the secondary record for the job at `index`.
pub fn secondary_uid(base_uid: &str, index: usize) -> String {
    format!("{}-job-{}", base_uid, index)
}

/// Fields that differ between a person's records.
struct Hat<'a> {
    uid: String,
    title: Option<&'a str>,
    org: Option<&'a str>,
    org_unit: Option<&'a str>,
    manager: Option<&'a str>,
}

/// Expands a person into its primary record plus one secondary record per
/// additional job.
///
/// Job 0 is skipped only when the person has no top-level title: it is then
/// taken to be the role the primary record already stands for.
pub fn expand(person: &Person) -> Vec<WireRecord> {
    let primary = Hat {
        uid: person.uid.clone(),
        title: person.title.as_deref(),
        org: person.org.as_deref(),
        org_unit: person.org_unit.as_deref(),
        manager: person.manager.as_deref(),
    };
    let mut records = vec![record_for(person, primary)];

    for (index, job) in person.jobs.iter().enumerate() {
        if index == 0 {
            if person.has_title() {
                trace!(uid = %person.uid, "top-level title present; job 0 gets its own record");
            } else {
                trace!(uid = %person.uid, "job 0 represented by the primary record");
                continue;
            }
        }

        let hat = Hat {
            uid: secondary_uid(&person.uid, index),
            title: job.role.as_deref(),
            org: job.org.as_deref(),
            org_unit: job.org_unit.as_deref(),
            manager: job.manager.as_deref(),
        };
        trace!(uid = %hat.uid, "synthesized secondary record");
        records.push(record_for(person, hat));
    }
    records
}

/// Expands every person, preserving order.
pub fn expand_all(people: &[Person]) -> Vec<WireRecord> {
    people.iter().flat_map(expand).collect()
}

fn record_for(person: &Person, hat: Hat<'_>) -> WireRecord {
    let n = if person.name.is_some() || person.surname.is_some() {
        Some(StructuredName {
            family: person.surname.clone().unwrap_or_default(),
            given: person.name.clone().unwrap_or_default(),
            ..StructuredName::default()
        })
    } else {
        None
    };

    let org = match (hat.org, hat.org_unit) {
        (Some(org), Some(unit)) => vec![org.to_string(), unit.to_string()],
        (Some(org), None) => vec![org.to_string()],
        (None, Some(unit)) => vec![String::new(), unit.to_string()],
        (None, None) => Vec::new(),
    };

    let email = person
        .email
        .as_ref()
        .map(|email| {
            email
                .addresses()
                .into_iter()
                .map(|address| Typed::plain(address.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let tel = person
        .phone
        .iter()
        .map(|phone| match phone.kind() {
            Some(kind) => Typed::with_kind(phone.number().to_string(), kind),
            None => Typed::plain(phone.number().to_string()),
        })
        .collect();

    let adr = if person.address.is_empty() {
        Vec::new()
    } else {
        vec![Typed::with_kind(adr_value(&person.address), ADDRESS_TYPE)]
    };

    WireRecord {
        formatted_name: Some(person.full_name().unwrap_or_else(|| hat.uid.clone())),
        uid: Some(hat.uid),
        n,
        title: hat.title.map(str::to_string),
        org,
        email,
        tel,
        adr,
        note: hat.manager.map(|manager| format!("{}{}", MANAGER_PREFIX, manager)),
        ..WireRecord::default()
    }
}

fn adr_value(address: &Address) -> AdrValue {
    let text = |component: &Option<String>| component.clone().unwrap_or_default();
    AdrValue {
        street: text(&address.street),
        locality: text(&address.city),
        region: text(&address.state),
        postal_code: text(&address.postal_code),
        country: text(&address.country),
        ..AdrValue::default()
    }
}

/// Contracts records into people, one person per record, in order.
pub fn contract(records: &[WireRecord]) -> Vec<Person> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| contract_record(record, index))
        .collect()
}

/// Builds a person from one record; `index` names records without a usable uid.
///
/// The person's `jobs` is always empty, even for `-job-N` uids.
pub fn contract_record(record: &WireRecord, index: usize) -> Person {
    let uid = record
        .uid
        .as_deref()
        .map(str::trim)
        .filter(|uid| !uid.is_empty())
        .map(str::to_string)
        .or_else(|| record.formatted_name.as_deref().and_then(slug))
        .unwrap_or_else(|| format!("card-{}", index));

    let (name, surname) = match &record.n {
        Some(n) => (non_empty(&n.given), non_empty(&n.family)),
        None => (record.formatted_name.as_deref().and_then(non_empty), None),
    };

    let mut org = record.org.iter().map(String::as_str);
    let (org, org_unit) = (
        org.next().and_then(non_empty),
        org.next().and_then(non_empty),
    );

    let manager = record.note.as_deref().and_then(|note| {
        note.lines()
            .find_map(|line| line.strip_prefix(MANAGER_PREFIX))
            .and_then(non_empty)
    });

    let phone = record
        .tel
        .iter()
        .map(|tel| match &tel.kind {
            Some(kind) => Phone::Typed {
                kind: kind.clone(),
                number: tel.value.clone(),
            },
            None => Phone::Bare(tel.value.clone()),
        })
        .collect();

    let address = record
        .adr
        .first()
        .map(|adr| Address {
            street: non_empty(&adr.value.street),
            city: non_empty(&adr.value.locality),
            state: non_empty(&adr.value.region),
            postal_code: non_empty(&adr.value.postal_code),
            country: non_empty(&adr.value.country),
        })
        .unwrap_or_default();

    Person {
        uid,
        name,
        surname,
        title: record.title.as_deref().and_then(non_empty),
        email: Email::from_addresses(record.email.iter().map(|e| e.value.clone()).collect()),
        org,
        org_unit,
        manager,
        phone,
        address,
        ..Person::default()
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Lowercase ASCII slug of a display name, e.g. `Ann O'Neil` → `ann-o-neil`.
fn slug(name: &str) -> Option<String> {
    let slug = name
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
