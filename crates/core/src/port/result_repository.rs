// Result Repository Port (Interface)

use crate::domain::Stage;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Benchmark directory '{}' does not exist", .0.display())]
    RootMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(String),
}

/// Read access to a benchmark results root
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Root directory the results live under
    fn root(&self) -> &Path;

    /// Names of the immediate subdirectories of the root, sorted by name
    ///
    /// # Errors
    /// - RepositoryError::RootMissing if the root does not exist
    /// - RepositoryError::Io if the root cannot be listed
    async fn list_run_dirs(&self) -> Result<Vec<String>, RepositoryError>;

    /// Mean runtime in seconds recorded for `stage` in `dir`
    ///
    /// Missing or unreadable measurements are None, never an error.
    async fn load_measurement(&self, dir: &str, stage: Stage) -> Option<f64>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// In-memory results root
    pub struct MockResultRepository {
        root: PathBuf,
        dirs: Option<Vec<(String, Option<f64>, Option<f64>)>>,
        listing_error: Option<String>,
    }

    impl MockResultRepository {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                dirs: Some(Vec::new()),
                listing_error: None,
            }
        }

        /// Root that does not exist
        pub fn missing(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                dirs: None,
                listing_error: None,
            }
        }

        /// Root that exists but cannot be listed
        pub fn unreadable(root: impl Into<PathBuf>, error: impl Into<String>) -> Self {
            Self {
                root: root.into(),
                dirs: Some(Vec::new()),
                listing_error: Some(error.into()),
            }
        }

        pub fn with_dir(
            mut self,
            name: impl Into<String>,
            primary: Option<f64>,
            secondary: Option<f64>,
        ) -> Self {
            if let Some(dirs) = self.dirs.as_mut() {
                dirs.push((name.into(), primary, secondary));
            }
            self
        }
    }

    #[async_trait]
    impl ResultRepository for MockResultRepository {
        fn root(&self) -> &Path {
            &self.root
        }

        async fn list_run_dirs(&self) -> Result<Vec<String>, RepositoryError> {
            if let Some(error) = &self.listing_error {
                return Err(RepositoryError::Io(error.clone()));
            }
            let dirs = self
                .dirs
                .as_ref()
                .ok_or_else(|| RepositoryError::RootMissing(self.root.clone()))?;
            let mut names: Vec<String> = dirs.iter().map(|(name, _, _)| name.clone()).collect();
            names.sort();
            Ok(names)
        }

        async fn load_measurement(&self, dir: &str, stage: Stage) -> Option<f64> {
            let (_, primary, secondary) = self.dirs.as_ref()?.iter().find(|(name, _, _)| name == dir)?;
            match stage {
                Stage::Primary => *primary,
                Stage::Secondary => *secondary,
            }
        }
    }
}
