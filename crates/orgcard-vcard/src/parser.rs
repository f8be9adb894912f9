//! vCard text to wire records.
//!
//! Parsing runs in three passes: line endings are normalized, folded lines
//! are joined into logical lines, and logical lines are grouped into
//! `BEGIN:VCARD`/`END:VCARD` blocks. A broken block yields one
//! [`CodecError::MalformedDocument`] and nothing else; parsing resumes with
//! the next block.

use orgcard_canonical::{AdrValue, StructuredName, Typed, WireRecord};
use tracing::{debug, trace, warn};

use crate::errors::CodecError;
use crate::escape::{split_components, unescape};

/// Properties kept by the parser; every other property is dropped.
pub const RECOGNIZED_PROPERTIES: &[&str] = &[
    "VERSION",
    "UID",
    "FN",
    "N",
    "TITLE",
    "ORG",
    "EMAIL",
    "TEL",
    "ADR",
    "URL",
    "NOTE",
    "CATEGORIES",
];

/// How [`parse`] treats malformed records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// The first malformed record fails the whole parse.
    #[default]
    Strict,
    /// Malformed records are skipped with a warning.
    Permissive,
}

/// Well-formed records plus one error per malformed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records in file order.
    pub records: Vec<WireRecord>,
    /// Errors in file order.
    pub errors: Vec<CodecError>,
}

/// Parses vCard text, applying `mode` to malformed records.
///
/// # Errors
///
/// In [`ReadMode::Strict`], returns the first [`CodecError`] found.
pub fn parse(text: &str, mode: ReadMode) -> Result<Vec<WireRecord>, CodecError> {
    let report = parse_report(text);
    match mode {
        ReadMode::Strict => match report.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(report.records),
        },
        ReadMode::Permissive => {
            for err in &report.errors {
                warn!(error = %err, "skipping malformed vCard record");
            }
            Ok(report.records)
        }
    }
}

/// Parses vCard text, keeping every well-formed record and reporting the rest.
pub fn parse_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut current: Option<OpenRecord> = None;

    for (line_no, line) in logical_lines(text) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_marker(trimmed, "BEGIN") {
            if let Some(open) = current.take() {
                report.errors.push(CodecError::malformed(
                    open.start,
                    "BEGIN:VCARD without matching END:VCARD",
                ));
            }
            current = Some(OpenRecord::new(line_no));
            continue;
        }

        if is_marker(trimmed, "END") {
            match current.take() {
                Some(open) => open.close(&mut report),
                None => report.errors.push(CodecError::malformed(
                    line_no,
                    "END:VCARD without matching BEGIN:VCARD",
                )),
            }
            continue;
        }

        match current.as_mut() {
            Some(open) => open.apply(line_no, &line),
            None => report.errors.push(CodecError::malformed(
                line_no,
                "content line outside BEGIN:VCARD/END:VCARD",
            )),
        }
    }

    if let Some(open) = current {
        report.errors.push(CodecError::malformed(
            open.start,
            "BEGIN:VCARD without matching END:VCARD",
        ));
    }

    debug!(
        records = report.records.len(),
        errors = report.errors.len(),
        "parsed vCard text"
    );
    report
}

/// A record between `BEGIN` and `END`.
struct OpenRecord {
    start: usize,
    record: WireRecord,
    error: Option<CodecError>,
}

impl OpenRecord {
    fn new(start: usize) -> Self {
        Self {
            start,
            record: WireRecord::default(),
            error: None,
        }
    }

    fn apply(&mut self, line_no: usize, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(reason) = apply_property(&mut self.record, line) {
            self.error = Some(CodecError::malformed(line_no, reason));
        }
    }

    fn close(self, report: &mut ParseReport) {
        if let Some(err) = self.error {
            report.errors.push(err);
        } else if self.record.is_version_only() {
            debug!(line = self.start, "discarding version-only record");
        } else {
            report.records.push(self.record);
        }
    }
}

/// Normalizes line endings and joins folded lines.
///
/// Returns each logical line with the 1-based number of its first physical line.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<(usize, String)> = Vec::new();
    for (index, physical) in normalized.split('\n').enumerate() {
        let continuation = physical
            .strip_prefix(' ')
            .or_else(|| physical.strip_prefix('\t'));
        if let (Some(rest), Some((_, last))) = (continuation, lines.last_mut()) {
            last.push_str(rest);
            continue;
        }
        lines.push((index + 1, physical.to_string()));
    }
    lines
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.split_once(':').is_some_and(|(name, value)| {
        name.trim().eq_ignore_ascii_case(marker) && value.trim().eq_ignore_ascii_case("VCARD")
    })
}

/// Byte offset of the first `target` outside double quotes.
fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut quoted = false;
    for (index, ch) in s.char_indices() {
        if ch == '"' {
            quoted = !quoted;
        } else if ch == target && !quoted {
            return Some(index);
        }
    }
    None
}

fn split_unquoted(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some(index) = find_unquoted(rest, delimiter) {
        parts.push(&rest[..index]);
        rest = &rest[index + delimiter.len_utf8()..];
    }
    parts.push(rest);
    parts
}

/// Property name (upper-cased, group prefix removed), `TYPE` and raw value.
struct ContentLine<'a> {
    name: String,
    kind: Option<String>,
    value: &'a str,
}

fn content_line(line: &str) -> Result<ContentLine<'_>, String> {
    let colon = find_unquoted(line, ':').ok_or_else(|| "content line has no `:`".to_string())?;
    let (head, value) = (&line[..colon], &line[colon + 1..]);

    let mut tokens = split_unquoted(head, ';').into_iter();
    let name = tokens.next().unwrap_or_default().trim();
    let name = name.rsplit_once('.').map_or(name, |(_, name)| name);
    if name.is_empty() {
        return Err("content line has no property name".to_string());
    }

    let kinds: Vec<&str> = tokens
        .filter_map(|param| param.split_once('='))
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case("TYPE"))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .collect();

    Ok(ContentLine {
        name: name.to_ascii_uppercase(),
        kind: if kinds.is_empty() {
            None
        } else {
            Some(kinds.join(","))
        },
        value,
    })
}

fn apply_property(record: &mut WireRecord, line: &str) -> Result<(), String> {
    let ContentLine { name, kind, value } = content_line(line)?;
    if !RECOGNIZED_PROPERTIES.contains(&name.as_str()) {
        trace!(property = %name, "dropping unrecognized property");
        return Ok(());
    }

    match name.as_str() {
        "VERSION" => record.version = unescape(value),
        "UID" => record.uid = Some(unescape(value)),
        "FN" => record.formatted_name = Some(unescape(value)),
        "N" => record.n = Some(StructuredName::from_components(split_components(value, ';'))),
        "TITLE" => record.title = Some(unescape(value)),
        "ORG" => record.org = split_components(value, ';'),
        "EMAIL" => record.email.push(Typed {
            value: unescape(value),
            kind,
        }),
        "TEL" => record.tel.push(Typed {
            value: unescape(value),
            kind,
        }),
        "ADR" => record.adr.push(Typed {
            value: AdrValue::from_components(split_components(value, ';')),
            kind,
        }),
        "URL" => record.url.push(unescape(value)),
        "NOTE" => record.note = Some(unescape(value)),
        "CATEGORIES" => record.categories.extend(split_components(value, ',')),
        _ => {}
    }
    Ok(())
}
