//! Core data models for the funds dashboard

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DonorType {
    International,
    National,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stage {
    Stage1,
    Stage2,
}

impl DonorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorType::International => "International",
            DonorType::National => "National",
        }
    }
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Stage1 => "Stage1",
            Stage::Stage2 => "Stage2",
        }
    }
}

//
// ================= Project Record =================
//

/// One funded-project entry. Loaded once per session and held read-only;
/// `id` is unique across the full record set, all other fields may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub name: String,
    pub donor: String,
    #[serde(rename = "type")]
    pub donor_type: DonorType,
    pub year: u16,
    pub budget: u64,
    pub stage: Stage,
}

//
// ================= Filter Criteria =================
//

/// Optional match constraints narrowing a record set. Fields are kept as raw
/// text because criteria arrive from query strings; a malformed value must
/// never fail the whole request, it just matches nothing. Empty or
/// whitespace-only text means "no constraint on this field".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub donor: Option<String>,
    #[serde(rename = "type")]
    pub donor_type: Option<String>,
    pub year: Option<String>,
    pub stage: Option<String>,
}

impl FilterCriteria {
    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn donor(&self) -> Option<&str> {
        non_empty(&self.donor)
    }

    pub fn donor_type(&self) -> Option<&str> {
        non_empty(&self.donor_type)
    }

    pub fn year(&self) -> Option<&str> {
        non_empty(&self.year)
    }

    pub fn stage(&self) -> Option<&str> {
        non_empty(&self.stage)
    }

    /// True when no constraint is supplied at all.
    pub fn is_unconstrained(&self) -> bool {
        self.search().is_none()
            && self.donor().is_none()
            && self.donor_type().is_none()
            && self.year().is_none()
            && self.stage().is_none()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

//
// ================= Summary =================
//

/// Aggregate statistics derived from a record set. Recomputed from scratch on
/// every request, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_projects: usize,
    pub total_budget: u64,
    pub unique_donors: usize,
    pub international_donors: usize,
    pub national_donors: usize,
    pub stage1_projects: usize,
    pub stage2_projects: usize,
    pub stage1_budget: u64,
    pub stage2_budget: u64,
    pub year_stats: BTreeMap<u16, YearStats>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearStats {
    pub count: usize,
    pub budget: u64,
}

impl fmt::Display for DonorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
