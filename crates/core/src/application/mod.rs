// Application Layer - Use Cases

pub mod aggregate;
pub mod constants;
pub mod fingerprint;
pub mod report;

// Re-exports
pub use aggregate::{decode, Aggregator};
pub use fingerprint::Fingerprinter;
pub use report::{Report, ReportOutcome, ReportService};
