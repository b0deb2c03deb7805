// CSV summary: system facts as comment lines, then the run table

use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use benchsum_core::application::constants::SUMMARY_FILE_NAME;
use benchsum_core::domain::{FactTable, RecordSet, RUN_COLUMNS};
use benchsum_core::port::SummarySink;
use benchsum_core::{AppError, Result};

fn report_error(e: impl std::fmt::Display) -> AppError {
    AppError::Report(e.to_string())
}

/// Render the summary file contents
pub fn render_summary(facts: &FactTable, records: &RecordSet) -> Result<String> {
    let mut out = String::from("# System Information\n");
    for (key, value) in facts.iter() {
        writeln!(out, "# {}: {}", key, value).map_err(report_error)?;
    }
    out.push_str("#\n");

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(RUN_COLUMNS).map_err(report_error)?;
    for record in records.iter() {
        writer.write_record(record.to_row()).map_err(report_error)?;
    }
    let table = writer.into_inner().map_err(report_error)?;
    out.push_str(&String::from_utf8(table).map_err(report_error)?);

    Ok(out)
}

/// Render and write the summary to `path`, replacing any previous file
pub async fn write_summary(path: &Path, facts: &FactTable, records: &RecordSet) -> Result<()> {
    let contents = render_summary(facts, records)?;
    tokio::fs::write(path, contents).await?;

    info!(path = %path.display(), rows = records.len(), "Summary CSV written");
    Ok(())
}

/// Writes `benchmark_summary.csv` into the results root
pub struct CsvSummarySink {
    path: PathBuf,
}

impl CsvSummarySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            path: root.into().join(SUMMARY_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SummarySink for CsvSummarySink {
    async fn write(&self, facts: &FactTable, records: &RecordSet) -> Result<PathBuf> {
        write_summary(&self.path, facts, records).await?;
        Ok(self.path.clone())
    }
}
