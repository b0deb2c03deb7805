// Port Layer - Interfaces for external dependencies

pub mod command_runner;
pub mod host_info;
pub mod result_repository;
pub mod summary_sink;

// Re-exports
pub use command_runner::{CommandOutput, CommandRunner, ExecutionError};
pub use host_info::{HostInfo, HostSnapshot};
pub use result_repository::{RepositoryError, ResultRepository};
pub use summary_sink::SummarySink;
