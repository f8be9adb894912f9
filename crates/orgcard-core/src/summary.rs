use orgcard_canonical::Person;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::expansion::expand;

/// Aggregate figures for a people list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrgSummary {
    /// Number of people.
    pub people: usize,
    /// Number of wire records the people expand to.
    pub wire_records: usize,
    /// People holding more than one job.
    pub multi_hat: usize,
    /// Head count per org unit (top-level and job units, once per person).
    pub by_org_unit: BTreeMap<String, usize>,
    /// Sum of job allocations; a person without jobs counts as one FTE.
    pub total_fte: f64,
    /// Direct reports per manager uid (top-level and job managers).
    pub direct_reports: BTreeMap<String, usize>,
    /// Dotted-line reports per manager uid.
    pub dotted_reports: BTreeMap<String, usize>,
}

/// Summarizes people. Never fails; absent fields are skipped.
pub fn summarize(people: &[Person]) -> OrgSummary {
    let mut summary = OrgSummary {
        people: people.len(),
        ..OrgSummary::default()
    };

    for person in people {
        summary.wire_records += expand(person).len();
        if person.jobs.len() > 1 {
            summary.multi_hat += 1;
        }
        summary.total_fte += if person.jobs.is_empty() {
            1.0
        } else {
            person.jobs.iter().map(|job| job.fte).sum()
        };

        let mut units: Vec<&str> = person.org_unit.iter().map(String::as_str).collect();
        units.extend(person.jobs.iter().filter_map(|job| job.org_unit.as_deref()));
        units.sort_unstable();
        units.dedup();
        for unit in units {
            *summary.by_org_unit.entry(unit.to_string()).or_default() += 1;
        }

        let mut managers: Vec<&str> = person.manager.iter().map(String::as_str).collect();
        managers.extend(person.jobs.iter().filter_map(|job| job.manager.as_deref()));
        managers.sort_unstable();
        managers.dedup();
        for manager in managers {
            *summary.direct_reports.entry(manager.to_string()).or_default() += 1;
        }

        for dotted in person.jobs.iter().flat_map(|job| &job.dotted) {
            *summary.dotted_reports.entry(dotted.clone()).or_default() += 1;
        }
    }
    summary
}
