//! Chart series derivation
//!
//! Derives the stage-comparison and year-over-year series the dashboard
//! charts render. The first point of each series is the baseline; later
//! points carry their budget growth relative to the previous point.

use crate::engine::growth::{format_growth, growth_percent};
use crate::models::Summary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StagePoint {
    pub name: &'static str,
    pub projects: usize,
    pub budget: u64,
    pub growth: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct YearPoint {
    pub year: u16,
    pub projects: usize,
    pub budget: u64,
    pub growth: String,
}

/// Stage 1 vs Stage 2 comparison. Stage 1 is the baseline.
pub fn stage_series(summary: &Summary) -> Vec<StagePoint> {
    vec![
        StagePoint {
            name: "Stage 1",
            projects: summary.stage1_projects,
            budget: summary.stage1_budget,
            growth: "Baseline".to_string(),
        },
        StagePoint {
            name: "Stage 2",
            projects: summary.stage2_projects,
            budget: summary.stage2_budget,
            growth: format_growth(growth_percent(summary.stage1_budget, summary.stage2_budget)),
        },
    ]
}

/// Per-year series in ascending year order; the earliest year is the
/// baseline, later years carry budget growth versus the previous year.
pub fn year_series(summary: &Summary) -> Vec<YearPoint> {
    let mut prev_budget: Option<u64> = None;

    summary
        .year_stats
        .iter()
        .map(|(year, stats)| {
            let growth = match prev_budget {
                None => "Baseline".to_string(),
                Some(prev) => format_growth(growth_percent(prev, stats.budget)),
            };
            prev_budget = Some(stats.budget);

            YearPoint {
                year: *year,
                projects: stats.count,
                budget: stats.budget,
                growth,
            }
        })
        .collect()
}
