//! Stats Stage
//!
//! Consumes a (possibly filtered) record set and produces the fixed-shape
//! dashboard summary: counts, budget sums, distinct-donor counts split by
//! type, per-stage counts/sums, and a per-year breakdown.

use crate::models::{DonorType, ProjectRecord, Stage, Summary};
use std::collections::HashSet;

/// Computes a `Summary` purely from the input. Empty input yields all counts
/// and sums at zero and an empty per-year map, never an error.
///
/// Distinct-donor counts use set semantics on the donor name with exact,
/// case-sensitive equality: two donor names differing only in casing count
/// as distinct donors.
pub fn summarize(records: &[ProjectRecord]) -> Summary {
    let mut summary = Summary::default();

    let mut donors: HashSet<&str> = HashSet::new();
    let mut international_donors: HashSet<&str> = HashSet::new();
    let mut national_donors: HashSet<&str> = HashSet::new();

    for record in records {
        summary.total_projects += 1;
        summary.total_budget += record.budget;

        donors.insert(&record.donor);
        match record.donor_type {
            DonorType::International => {
                international_donors.insert(&record.donor);
            }
            DonorType::National => {
                national_donors.insert(&record.donor);
            }
        }

        match record.stage {
            Stage::Stage1 => {
                summary.stage1_projects += 1;
                summary.stage1_budget += record.budget;
            }
            Stage::Stage2 => {
                summary.stage2_projects += 1;
                summary.stage2_budget += record.budget;
            }
        }

        let year = summary.year_stats.entry(record.year).or_default();
        year.count += 1;
        year.budget += record.budget;
    }

    summary.unique_donors = donors.len();
    summary.international_donors = international_donors.len();
    summary.national_donors = national_donors.len();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::filter;
    use crate::models::FilterCriteria;
    use crate::source::seed_projects;

    #[test]
    fn test_empty_input_yields_zeroed_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.total_budget, 0);
        assert_eq!(summary.unique_donors, 0);
        assert!(summary.year_stats.is_empty());
    }

    #[test]
    fn test_seed_totals() {
        let summary = summarize(&seed_projects());

        assert_eq!(summary.total_projects, 5);
        assert_eq!(summary.total_budget, 10_000_000);
        assert_eq!(summary.unique_donors, 5);
        assert_eq!(summary.international_donors, 4);
        assert_eq!(summary.national_donors, 1);
    }

    #[test]
    fn test_stage_split() {
        let summary = summarize(&seed_projects());

        assert_eq!(summary.stage1_projects, 3);
        assert_eq!(summary.stage2_projects, 2);
        assert_eq!(summary.stage1_budget, 5_200_000);
        assert_eq!(summary.stage2_budget, 4_800_000);
        assert_eq!(
            summary.stage1_budget + summary.stage2_budget,
            summary.total_budget
        );
    }

    #[test]
    fn test_per_year_breakdown() {
        let summary = summarize(&seed_projects());

        assert_eq!(summary.year_stats.len(), 2);
        let y2022 = summary.year_stats[&2022];
        let y2023 = summary.year_stats[&2023];
        assert_eq!(y2022.count, 2);
        assert_eq!(y2022.budget, 4_500_000);
        assert_eq!(y2023.count, 3);
        assert_eq!(y2023.budget, 5_500_000);
    }

    #[test]
    fn test_total_matches_filtered_length() {
        let records = seed_projects();
        let criteria = FilterCriteria {
            donor_type: Some("International".to_string()),
            ..Default::default()
        };

        let filtered = filter(&records, &criteria);
        let summary = summarize(&filtered);
        assert_eq!(summary.total_projects, filtered.len());
        assert_eq!(summary.unique_donors, 4);
        assert_eq!(summary.national_donors, 0);
    }

    #[test]
    fn test_donor_names_compare_case_sensitively() {
        let mut records = seed_projects();
        let mut shadow = records[0].clone();
        shadow.id = 6;
        shadow.donor = "unicef".to_string();
        records.push(shadow);

        let summary = summarize(&records);
        assert_eq!(summary.unique_donors, 6);
    }
}
