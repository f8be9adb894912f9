use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::model::Person;

/// Coarse language-code pattern for i18n keys.
const LANGUAGE_CODE: &str = r"^[a-z]{2,3}$";

/// Overall outcome of the diagnostic passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticStatus {
    /// Nothing to report.
    Ok,
    /// At least one warning was raised.
    Warnings,
}

/// One diagnostic finding with a stable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticWarning {
    /// Stable code, e.g. `DuplicateUid`.
    pub code: String,
    /// Uid of the person the warning refers to.
    pub uid: String,
    /// Human-readable detail.
    pub message: String,
}

impl DiagnosticWarning {
    fn new(code: &str, uid: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            uid: uid.to_string(),
            message,
        }
    }
}

/// Warnings and counters produced by [`diagnose`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Overall status.
    pub status: DiagnosticStatus,
    /// Findings in document order.
    pub warnings: Vec<DiagnosticWarning>,
    /// Counters keyed by warning code.
    pub metrics: BTreeMap<String, u64>,
}

/// Reports uids that occur more than once, once per repeated occurrence.
pub fn duplicate_uids(people: &[Person]) -> Vec<DiagnosticWarning> {
    let mut seen = BTreeSet::new();
    people
        .iter()
        .filter(|person| !seen.insert(person.uid.as_str()))
        .map(|person| {
            DiagnosticWarning::new(
                "DuplicateUid",
                &person.uid,
                format!("uid `{}` is used by more than one person", person.uid),
            )
        })
        .collect()
}

/// Reports i18n language codes that are not 2-3 lowercase letters.
pub fn language_codes(people: &[Person]) -> Vec<DiagnosticWarning> {
    let pattern = Regex::new(LANGUAGE_CODE).expect("invalid regex");
    let mut warnings = Vec::new();
    for person in people {
        for (field, translations) in &person.i18n {
            for language in translations.keys() {
                if !pattern.is_match(language) {
                    warnings.push(DiagnosticWarning::new(
                        "InvalidLanguageCode",
                        &person.uid,
                        format!("i18n.{}: `{}` is not a language code", field, language),
                    ));
                }
            }
        }
    }
    warnings
}

/// Reports authored uids that collide with uids expansion would synthesize
/// (`{uid}-job-{index}`) for another person.
pub fn synthetic_uid_collisions(people: &[Person]) -> Vec<DiagnosticWarning> {
    let synthetic: BTreeMap<String, &str> = people
        .iter()
        .flat_map(|person| {
            (0..person.jobs.len())
                .map(move |index| (format!("{}-job-{}", person.uid, index), person.uid.as_str()))
        })
        .collect();

    people
        .iter()
        .filter_map(|person| {
            synthetic.get(&person.uid).map(|owner| {
                DiagnosticWarning::new(
                    "SyntheticUidCollision",
                    &person.uid,
                    format!(
                        "uid `{}` collides with a job record derived from `{}`",
                        person.uid, owner
                    ),
                )
            })
        })
        .collect()
}

/// Runs every diagnostic pass. Never fails; warnings do not affect validity.
pub fn diagnose(people: &[Person]) -> DiagnosticReport {
    let mut warnings = duplicate_uids(people);
    warnings.extend(language_codes(people));
    warnings.extend(synthetic_uid_collisions(people));

    let mut metrics = BTreeMap::new();
    for warning in &warnings {
        metrics
            .entry(warning.code.clone())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    let status = if warnings.is_empty() {
        DiagnosticStatus::Ok
    } else {
        DiagnosticStatus::Warnings
    };
    DiagnosticReport {
        status,
        warnings,
        metrics,
    }
}
