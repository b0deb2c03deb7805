// Benchmark Aggregator - decoded directory names plus loaded timings

pub mod decoder;

pub use decoder::decode;

use crate::domain::{RecordSet, RunRecord, Stage};
use crate::port::{RepositoryError, ResultRepository};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Builds the sorted record set for one results root
pub struct Aggregator {
    repository: Arc<dyn ResultRepository>,
}

impl Aggregator {
    pub fn new(repository: Arc<dyn ResultRepository>) -> Self {
        Self { repository }
    }

    /// One record per subdirectory whose name decodes, in report order.
    ///
    /// Directories that do not follow the naming convention are skipped.
    /// An empty set means there is nothing to report.
    ///
    /// # Errors
    /// - RepositoryError::RootMissing if the results root does not exist
    pub async fn aggregate(&self) -> Result<RecordSet, RepositoryError> {
        let dirs = self.repository.list_run_dirs().await?;
        let mut records = Vec::new();

        for dir in &dirs {
            let Some(name) = decode(dir) else {
                trace!(dir = %dir, "Not a benchmark result directory");
                continue;
            };

            let primary = self.repository.load_measurement(dir, Stage::Primary).await;
            let secondary = self.repository.load_measurement(dir, Stage::Secondary).await;
            debug!(dir = %dir, ?primary, ?secondary, "Loaded benchmark run");

            records.push(RunRecord::new(name, primary, secondary));
        }

        info!(
            root = %self.repository.root().display(),
            directories = dirs.len(),
            records = records.len(),
            "Benchmark results aggregated"
        );

        Ok(RecordSet::sorted(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::result_repository::mocks::MockResultRepository;

    #[tokio::test]
    async fn test_skips_undecodable_directories() {
        let repo = MockResultRepository::new("/results")
            .with_dir("notes", Some(1.0), Some(1.0))
            .with_dir("30d_1000_gageA", Some(12.3456), Some(3.0));
        let set = Aggregator::new(Arc::new(repo)).aggregate().await.unwrap();

        assert_eq!(set.len(), 1);
        let record = set.iter().next().unwrap();
        assert_eq!(record.gage, "gageA");
        assert_eq!(record.primary, Some(12.3456));
        assert_eq!(record.to_row()[3], "12.346");
    }

    #[tokio::test]
    async fn test_sorted_by_operations_then_duration_string() {
        let repo = MockResultRepository::new("/results")
            .with_dir("10d_500_a", None, None)
            .with_dir("5d_1000_b", None, None)
            .with_dir("30d_500_c", None, None);
        let set = Aggregator::new(Arc::new(repo)).aggregate().await.unwrap();

        let order: Vec<(u64, &str)> = set
            .iter()
            .map(|r| (r.operations, r.duration.as_str()))
            .collect();
        assert_eq!(order, vec![(500, "10d"), (500, "30d"), (1000, "5d")]);
    }

    #[tokio::test]
    async fn test_partial_measurements_still_produce_record() {
        let repo = MockResultRepository::new("/results").with_dir("1y_10_g", Some(12.3), None);
        let set = Aggregator::new(Arc::new(repo)).aggregate().await.unwrap();

        let record = set.iter().next().unwrap();
        assert_eq!(record.secondary, None);
        assert_eq!(record.total(), None);
    }

    #[tokio::test]
    async fn test_empty_root() {
        let repo = MockResultRepository::new("/results").with_dir("logs", None, None);
        let set = Aggregator::new(Arc::new(repo)).aggregate().await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_missing_root() {
        let repo = MockResultRepository::missing("/nope");
        let err = Aggregator::new(Arc::new(repo)).aggregate().await.unwrap_err();
        assert!(matches!(err, RepositoryError::RootMissing(_)));
        assert_eq!(err.to_string(), "Benchmark directory '/nope' does not exist");
    }
}
