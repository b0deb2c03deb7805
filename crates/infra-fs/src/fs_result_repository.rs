// Filesystem ResultRepository implementation

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use benchsum_core::domain::Stage;
use benchsum_core::port::{RepositoryError, ResultRepository};

use crate::hyperfine::load_mean;

/// Results root on local disk: one subdirectory per benchmark run
pub struct FsResultRepository {
    root: PathBuf,
}

impl FsResultRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResultRepository for FsResultRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn list_run_dirs(&self) -> Result<Vec<String>, RepositoryError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RepositoryError::RootMissing(self.root.clone()));
            }
            Err(e) => return Err(RepositoryError::Io(e.to_string())),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?
        {
            // follows symlinks, like a plain is-dir check
            let is_dir = tokio::fs::metadata(entry.path())
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if !is_dir {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(name = ?raw, "Skipping non UTF-8 directory name"),
            }
        }

        names.sort();
        debug!(root = %self.root.display(), count = names.len(), "Listed run directories");
        Ok(names)
    }

    async fn load_measurement(&self, dir: &str, stage: Stage) -> Option<f64> {
        load_mean(&self.root.join(dir).join(stage.file_name())).await
    }
}
