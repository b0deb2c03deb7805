// benchsum Infrastructure - Filesystem Adapters
// Implements: ResultRepository, results-root resolution, CSV summary

mod csv_report;
mod fs_result_repository;
mod hyperfine;
mod paths;

pub use csv_report::{render_summary, write_summary, CsvSummarySink};
pub use fs_result_repository::FsResultRepository;
pub use hyperfine::load_mean;
pub use paths::{default_results_root, resolve_results_root};
