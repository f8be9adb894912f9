//! Wire records to vCard text.

use orgcard_canonical::{Typed, WireRecord};

use crate::escape::{escape, join_components};

/// Line terminator for every content line.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Serializes records, separating them with a blank line.
pub fn serialize(records: &[WireRecord]) -> String {
    records
        .iter()
        .map(serialize_record)
        .collect::<Vec<_>>()
        .join(LINE_TERMINATOR)
}

/// Serializes one record in fixed property order.
pub fn serialize_record(record: &WireRecord) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCARD");
    push_line(&mut out, &format!("VERSION:{}", escape(&record.version)));
    if let Some(uid) = &record.uid {
        push_line(&mut out, &format!("UID:{}", escape(uid)));
    }
    if let Some(formatted_name) = &record.formatted_name {
        push_line(&mut out, &format!("FN:{}", escape(formatted_name)));
    }
    if let Some(n) = &record.n {
        push_line(&mut out, &format!("N:{}", join_components(n.components(), ';')));
    }
    if let Some(title) = &record.title {
        push_line(&mut out, &format!("TITLE:{}", escape(title)));
    }
    if !record.org.is_empty() {
        let org = join_components(record.org.iter().map(String::as_str), ';');
        push_line(&mut out, &format!("ORG:{}", org));
    }
    for email in &record.email {
        push_typed(&mut out, "EMAIL", email, escape(&email.value));
    }
    for tel in &record.tel {
        push_typed(&mut out, "TEL", tel, escape(&tel.value));
    }
    for adr in &record.adr {
        push_typed(&mut out, "ADR", adr, join_components(adr.value.components(), ';'));
    }
    for url in &record.url {
        push_line(&mut out, &format!("URL:{}", escape(url)));
    }
    if let Some(note) = &record.note {
        push_line(&mut out, &format!("NOTE:{}", escape(note)));
    }
    if !record.categories.is_empty() {
        let categories = join_components(record.categories.iter().map(String::as_str), ',');
        push_line(&mut out, &format!("CATEGORIES:{}", categories));
    }
    push_line(&mut out, "END:VCARD");
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(LINE_TERMINATOR);
}

fn push_typed<T>(out: &mut String, name: &str, typed: &Typed<T>, value: String) {
    match &typed.kind {
        Some(kind) => push_line(out, &format!("{};TYPE={}:{}", name, type_param(kind), value)),
        None => push_line(out, &format!("{}:{}", name, value)),
    }
}

/// Quotes a `TYPE` value holding `:` or `;`.
///
/// Parameter values have no escape syntax: double quotes are dropped and
/// control characters (line breaks included) become spaces, so a type can
/// never end the content line early.
fn type_param(kind: &str) -> String {
    let kind: String = kind
        .chars()
        .filter(|ch| *ch != '"')
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    if kind.contains([':', ';']) {
        format!("\"{}\"", kind)
    } else {
        kind
    }
}
