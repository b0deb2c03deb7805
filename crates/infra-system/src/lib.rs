// benchsum Infrastructure - System Adapters
// Implements: CommandRunner, HostInfo, execution context detection

pub mod context;
pub mod host_info_impl;
pub mod subprocess_runner;

pub use context::{detect_execution_context, detect_execution_context_from};
pub use host_info_impl::HostInfoImpl;
pub use subprocess_runner::SubprocessRunner;
