//! Dashboard view state
//!
//! The UI state (filters, sort key, active tab) as an explicit immutable
//! value. Transitions are reducer-style: `reduce` takes the current state and
//! an action and returns the next state; `query` is the pure projection of a
//! record set through that state.

use crate::engine::filter;
use crate::models::{FilterCriteria, ProjectRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

//
// ================= Sort =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Donor,
    Type,
    Year,
    Budget,
    Stage,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "name" | "project" => Some(SortKey::Name),
            "donor" => Some(SortKey::Donor),
            "type" => Some(SortKey::Type),
            "year" => Some(SortKey::Year),
            "budget" => Some(SortKey::Budget),
            "stage" => Some(SortKey::Stage),
            _ => None,
        }
    }
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        // Initial dashboard view: newest years first
        Self {
            key: SortKey::Year,
            direction: SortDirection::Desc,
        }
    }
}

//
// ================= Tabs =================
//

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Projects,
    Charts,
    Insights,
}

//
// ================= View State =================
//

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub sort: SortConfig,
    pub active_tab: Tab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetSearch(String),
    SetDonor(String),
    SetType(String),
    SetYear(String),
    SetStage(String),
    ClearFilters,
    ToggleSort(SortKey),
    SelectTab(Tab),
}

/// Pure state transition: returns the next view state, leaving the current
/// one untouched. Setting a criterion to empty text clears that constraint.
pub fn reduce(state: &ViewState, action: ViewAction) -> ViewState {
    let mut next = state.clone();

    match action {
        ViewAction::SetSearch(value) => next.criteria.search = Some(value),
        ViewAction::SetDonor(value) => next.criteria.donor = Some(value),
        ViewAction::SetType(value) => next.criteria.donor_type = Some(value),
        ViewAction::SetYear(value) => next.criteria.year = Some(value),
        ViewAction::SetStage(value) => next.criteria.stage = Some(value),
        ViewAction::ClearFilters => next.criteria = FilterCriteria::default(),
        ViewAction::ToggleSort(key) => {
            // Re-selecting the ascending key flips it; any other key starts
            // ascending.
            let direction =
                if next.sort.key == key && next.sort.direction == SortDirection::Asc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
            next.sort = SortConfig { key, direction };
        }
        ViewAction::SelectTab(tab) => next.active_tab = tab,
    }

    next
}

/// Pure projection: Filter Stage, then a stable sort by the configured key
/// and direction.
pub fn query(records: &[ProjectRecord], state: &ViewState) -> Vec<ProjectRecord> {
    let mut rows = filter(records, &state.criteria);

    rows.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, state.sort.key);
        match state.sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    rows
}

fn compare_by_key(a: &ProjectRecord, b: &ProjectRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Donor => a.donor.cmp(&b.donor),
        SortKey::Type => a.donor_type.as_str().cmp(b.donor_type.as_str()),
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Budget => a.budget.cmp(&b.budget),
        SortKey::Stage => a.stage.as_str().cmp(b.stage.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::seed_projects;

    #[test]
    fn test_default_view_sorts_year_descending() {
        let records = seed_projects();
        let rows = query(&records, &ViewState::default());

        let years: Vec<u16> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2023, 2023, 2022, 2022]);
    }

    #[test]
    fn test_reduce_does_not_mutate_current_state() {
        let state = ViewState::default();
        let next = reduce(&state, ViewAction::SetDonor("WHO".to_string()));

        assert!(state.criteria.donor.is_none());
        assert_eq!(next.criteria.donor(), Some("WHO"));
    }

    #[test]
    fn test_toggle_sort_flips_direction_on_same_key() {
        let state = ViewState::default();

        let ascending = reduce(&state, ViewAction::ToggleSort(SortKey::Budget));
        assert_eq!(ascending.sort.key, SortKey::Budget);
        assert_eq!(ascending.sort.direction, SortDirection::Asc);

        let descending = reduce(&ascending, ViewAction::ToggleSort(SortKey::Budget));
        assert_eq!(descending.sort.direction, SortDirection::Desc);

        let switched = reduce(&descending, ViewAction::ToggleSort(SortKey::Donor));
        assert_eq!(switched.sort.key, SortKey::Donor);
        assert_eq!(switched.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_clear_filters_resets_criteria_only() {
        let mut state = ViewState::default();
        state = reduce(&state, ViewAction::SetStage("Stage1".to_string()));
        state = reduce(&state, ViewAction::ToggleSort(SortKey::Budget));
        state = reduce(&state, ViewAction::SelectTab(Tab::Charts));

        let cleared = reduce(&state, ViewAction::ClearFilters);
        assert!(cleared.criteria.is_unconstrained());
        assert_eq!(cleared.sort.key, SortKey::Budget);
        assert_eq!(cleared.active_tab, Tab::Charts);
    }

    #[test]
    fn test_query_sorts_budget_numerically() {
        let records = seed_projects();
        let mut state = ViewState::default();
        state = reduce(&state, ViewAction::ToggleSort(SortKey::Budget));

        let rows = query(&records, &state);
        let budgets: Vec<u64> = rows.iter().map(|r| r.budget).collect();
        assert_eq!(
            budgets,
            vec![1_200_000, 1_500_000, 1_800_000, 2_500_000, 3_000_000]
        );
    }

    #[test]
    fn test_query_applies_criteria_before_sorting() {
        let records = seed_projects();
        let mut state = ViewState::default();
        state = reduce(&state, ViewAction::SetType("International".to_string()));

        let rows = query(&records, &state);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.donor != "Egyptian Ministry"));
    }
}
