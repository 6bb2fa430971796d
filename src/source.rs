//! Project data source
//!
//! Supplies the ordered record set the engine aggregates over. Currently a
//! static in-memory list; can be replaced with a database-backed provider.

use crate::models::{DonorType, ProjectRecord, Stage};
use crate::Result;

/// Trait for record providers
#[async_trait::async_trait]
pub trait ProjectSource: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>>;
}

lazy_static::lazy_static! {
    static ref SEED_PROJECTS: Vec<ProjectRecord> = vec![
        record(1, "Education Enhancement Program", "UNICEF", DonorType::International, 2023, 2_500_000, Stage::Stage1),
        record(2, "Healthcare Initiative", "WHO", DonorType::International, 2023, 1_800_000, Stage::Stage2),
        record(3, "Youth Development", "Egyptian Ministry", DonorType::National, 2023, 1_200_000, Stage::Stage1),
        record(4, "Women Empowerment", "USAID", DonorType::International, 2022, 3_000_000, Stage::Stage2),
        record(5, "Environmental Protection", "Green Fund", DonorType::International, 2022, 1_500_000, Stage::Stage1),
    ];
}

fn record(
    id: u32,
    name: &str,
    donor: &str,
    donor_type: DonorType,
    year: u16,
    budget: u64,
    stage: Stage,
) -> ProjectRecord {
    ProjectRecord {
        id,
        name: name.to_string(),
        donor: donor.to_string(),
        donor_type,
        year,
        budget,
        stage,
    }
}

/// The demonstration record set served by the static source.
pub fn seed_projects() -> Vec<ProjectRecord> {
    SEED_PROJECTS.clone()
}

/// In-memory source holding a fixed record set
pub struct StaticProjectSource {
    records: Vec<ProjectRecord>,
}

impl StaticProjectSource {
    pub fn new() -> Self {
        Self {
            records: seed_projects(),
        }
    }

    pub fn with_records(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }
}

impl Default for StaticProjectSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProjectSource for StaticProjectSource {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let records = seed_projects();
        let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[tokio::test]
    async fn test_static_source_serves_seed_records() {
        let source = StaticProjectSource::new();
        let records = source.list_projects().await.unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records, seed_projects());
    }

    #[tokio::test]
    async fn test_custom_record_set() {
        let source = StaticProjectSource::with_records(Vec::new());
        assert!(source.list_projects().await.unwrap().is_empty());
    }
}
