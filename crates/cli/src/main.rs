//! benchsum CLI - Benchmark environment fingerprint and results summary

mod logging;
mod presentation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use benchsum_core::application::constants::DEFAULT_PROBE_TIMEOUT;
use benchsum_core::application::{Aggregator, Fingerprinter, ReportOutcome, ReportService};
use benchsum_core::domain::ExecutionContext;
use benchsum_core::port::RepositoryError;
use benchsum_core::VERSION;
use benchsum_infra_fs::{resolve_results_root, CsvSummarySink, FsResultRepository};
use benchsum_infra_system::{detect_execution_context, HostInfoImpl, SubprocessRunner};

#[derive(Parser)]
#[command(name = "benchsum")]
#[command(about = "Summarise benchmark runs together with the machine they ran on", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Results root (default: /ngen/bench/results in a container, ~/.ngiab/bench/results otherwise)
    #[arg(long, global = true, env = "BENCHSUM_RESULTS_DIR")]
    results_dir: Option<String>,

    /// Upper bound on each inspection tool invocation, in seconds
    #[arg(
        long,
        global = true,
        env = "BENCHSUM_PROBE_TIMEOUT_SECS",
        default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs()
    )]
    probe_timeout_secs: u64,

    /// Do not write benchmark_summary.csv
    #[arg(long, global = true)]
    no_csv: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// System information, results table and CSV summary (default)
    Report,

    /// System information only
    Facts,

    /// Results table only
    Runs,
}

/// Wired-up adapters for one invocation
struct App {
    context: ExecutionContext,
    root: PathBuf,
    probe_timeout: Duration,
}

impl App {
    fn service(&self, write_csv: bool) -> ReportService {
        let service = ReportService::new(
            Aggregator::new(Arc::new(FsResultRepository::new(self.root.clone()))),
            Fingerprinter::new(
                Arc::new(SubprocessRunner::new(self.probe_timeout)),
                Arc::new(HostInfoImpl::new()),
                self.context,
                self.root.clone(),
            ),
        );
        if write_csv {
            service.with_sink(Arc::new(CsvSummarySink::new(self.root.clone())))
        } else {
            service
        }
    }
}

/// Print why there is nothing to show, or hand back the payload
fn ready<T>(outcome: ReportOutcome<T>) -> Option<T> {
    match outcome {
        ReportOutcome::Ready(value) => Some(value),
        ReportOutcome::RootMissing(root) => {
            println!("Error: {}", RepositoryError::RootMissing(root));
            None
        }
        ReportOutcome::NoResults => {
            println!("No benchmark results found");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging()?;

    let context = detect_execution_context();
    let root = resolve_results_root(context, cli.results_dir.as_deref())?;
    info!(
        version = VERSION,
        context = %context,
        root = %root.display(),
        "benchsum starting"
    );

    let app = App {
        context,
        root,
        probe_timeout: Duration::from_secs(cli.probe_timeout_secs),
    };
    let service = app.service(!cli.no_csv);
    let failed = || format!("Failed to summarise {}", app.root.display());

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => {
            if let Some(report) = ready(service.report().await.with_context(failed)?) {
                presentation::print_system_info(&report.facts);
                presentation::print_results(&report.records);
                if let Some(path) = report.summary_path {
                    println!("\nCSV saved to: {}", path.display());
                }
            }
        }
        Commands::Facts => {
            let facts = service.facts().await;
            presentation::print_system_info(&facts);
        }
        Commands::Runs => {
            if let Some(records) = ready(service.runs().await.with_context(failed)?) {
                presentation::print_results(&records);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_ready_passes_payload_through() {
        assert_eq!(ready(ReportOutcome::Ready(3)), Some(3));
        assert_eq!(ready::<u8>(ReportOutcome::NoResults), None);
        assert_eq!(ready::<u8>(ReportOutcome::RootMissing(PathBuf::from("/nope"))), None);
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_report() {
        let cli = Cli::try_parse_from(["benchsum"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_csv);
    }

    #[test]
    fn test_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["benchsum", "--no-csv", "--probe-timeout-secs", "5"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.no_csv);
        assert_eq!(cli.probe_timeout_secs, 5);
    }

    #[test]
    fn test_report_flags() {
        let cli = Cli::try_parse_from([
            "benchsum",
            "report",
            "--no-csv",
            "--results-dir",
            "/tmp/runs",
            "--probe-timeout-secs",
            "3",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Report)));
        assert!(cli.no_csv);
        assert_eq!(cli.results_dir.as_deref(), Some("/tmp/runs"));
        assert_eq!(cli.probe_timeout_secs, 3);
    }
}
