//! Filter Stage
//!
//! Narrows a record set to those matching the supplied criteria. All supplied
//! constraints combine with logical AND; relative order is preserved.

use crate::models::{FilterCriteria, ProjectRecord};

/// Returns the subsequence of `records` satisfying every non-empty constraint
/// in `criteria`. Unconstrained criteria return the input unchanged; criteria
/// matching nothing return an empty vector. Never fails.
pub fn filter(records: &[ProjectRecord], criteria: &FilterCriteria) -> Vec<ProjectRecord> {
    if criteria.is_unconstrained() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

fn matches(record: &ProjectRecord, criteria: &FilterCriteria) -> bool {
    if let Some(text) = criteria.search() {
        let needle = text.to_lowercase();
        let in_name = record.name.to_lowercase().contains(&needle);
        let in_donor = record.donor.to_lowercase().contains(&needle);
        if !in_name && !in_donor {
            return false;
        }
    }

    if let Some(donor) = criteria.donor() {
        if record.donor != donor {
            return false;
        }
    }

    if let Some(donor_type) = criteria.donor_type() {
        if record.donor_type.as_str() != donor_type {
            return false;
        }
    }

    if let Some(year) = criteria.year() {
        // Year criteria arrive as text; compare numerically. An unparseable
        // year is an unsatisfiable constraint, not a request failure.
        match year.parse::<u16>() {
            Ok(year) => {
                if record.year != year {
                    return false;
                }
            }
            Err(_) => return false,
        }
    }

    if let Some(stage) = criteria.stage() {
        if record.stage.as_str() != stage {
            return false;
        }
    }

    true
}
