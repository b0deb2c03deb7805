// Report use case: aggregate the runs, fingerprint the machine, persist the summary

use crate::application::{Aggregator, Fingerprinter};
use crate::domain::{FactTable, RecordSet};
use crate::port::{RepositoryError, SummarySink};
use crate::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Result of a run over the results root
#[derive(Debug)]
pub enum ReportOutcome<T> {
    /// The results root does not exist. Nothing was fingerprinted or written.
    RootMissing(PathBuf),
    /// The root holds no decodable run directory. Nothing was fingerprinted or written.
    NoResults,
    Ready(T),
}

/// Everything the report shows
#[derive(Debug)]
pub struct Report {
    pub facts: FactTable,
    pub records: RecordSet,
    /// Where the summary was written; None when no sink is configured
    pub summary_path: Option<PathBuf>,
}

/// Runs the aggregation first and only fingerprints when there is
/// something to report.
pub struct ReportService {
    aggregator: Aggregator,
    fingerprinter: Fingerprinter,
    sink: Option<Arc<dyn SummarySink>>,
}

impl ReportService {
    pub fn new(aggregator: Aggregator, fingerprinter: Fingerprinter) -> Self {
        Self {
            aggregator,
            fingerprinter,
            sink: None,
        }
    }

    /// Persist each completed report through `sink`
    pub fn with_sink(mut self, sink: Arc<dyn SummarySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub async fn facts(&self) -> FactTable {
        self.fingerprinter.collect().await
    }

    /// Sorted runs, or the reason there are none
    ///
    /// # Errors
    /// - AppError::Repository if an existing root cannot be listed
    pub async fn runs(&self) -> Result<ReportOutcome<RecordSet>> {
        match self.aggregator.aggregate().await {
            Ok(records) if records.is_empty() => Ok(ReportOutcome::NoResults),
            Ok(records) => Ok(ReportOutcome::Ready(records)),
            Err(RepositoryError::RootMissing(root)) => Ok(ReportOutcome::RootMissing(root)),
            Err(e) => Err(e.into()),
        }
    }

    /// Full pipeline: runs, then facts, then the summary
    ///
    /// # Errors
    /// - AppError::Repository if an existing root cannot be listed
    /// - AppError::Io / AppError::Report if the summary cannot be written
    pub async fn report(&self) -> Result<ReportOutcome<Report>> {
        let records = match self.runs().await? {
            ReportOutcome::Ready(records) => records,
            ReportOutcome::RootMissing(root) => return Ok(ReportOutcome::RootMissing(root)),
            ReportOutcome::NoResults => return Ok(ReportOutcome::NoResults),
        };

        let facts = self.fingerprinter.collect().await;

        let summary_path = match &self.sink {
            Some(sink) => Some(sink.write(&facts, &records).await?),
            None => None,
        };

        info!(
            runs = records.len(),
            facts = facts.len(),
            summary = ?summary_path,
            "Report complete"
        );

        Ok(ReportOutcome::Ready(Report {
            facts,
            records,
            summary_path,
        }))
    }
}
