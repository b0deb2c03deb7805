// Domain Layer - Pure entities describing the machine and the runs on it

pub mod context;
pub mod fact_table;
pub mod run_record;

// Re-exports
pub use context::ExecutionContext;
pub use fact_table::{keys, FactTable};
pub use run_record::{round3, DecodedRunName, RecordSet, RunRecord, Stage, RUN_COLUMNS};
