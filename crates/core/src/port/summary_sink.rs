// Summary Sink Port (Interface)

use crate::domain::{FactTable, RecordSet};
use async_trait::async_trait;
use std::path::PathBuf;

/// Persists the combined fingerprint + results summary
#[async_trait]
pub trait SummarySink: Send + Sync {
    /// Write the summary, replacing any previous one
    ///
    /// Returns the location written.
    ///
    /// # Errors
    /// - AppError::Io / AppError::Report if the summary cannot be written
    async fn write(&self, facts: &FactTable, records: &RecordSet) -> crate::Result<PathBuf>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Counts writes instead of touching the filesystem
    pub struct MockSummarySink {
        path: PathBuf,
        writes: Arc<Mutex<Vec<usize>>>,
    }

    impl MockSummarySink {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                writes: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Record count of each write, in order
        pub fn writes(&self) -> Vec<usize> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SummarySink for MockSummarySink {
        async fn write(&self, _facts: &FactTable, records: &RecordSet) -> crate::Result<PathBuf> {
            self.writes.lock().unwrap().push(records.len());
            Ok(self.path.clone())
        }
    }
}
