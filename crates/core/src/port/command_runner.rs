// Command Runner Port
// Abstraction over spawning one external inspection tool and capturing its output

use async_trait::async_trait;
use thiserror::Error;

/// Captured output of a command that exited successfully
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

/// Execution errors
///
/// Probes never surface these; they degrade to "no data".
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Process timeout after {0}ms")]
    Timeout(u64),

    #[error("Process exited with {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Command Runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns the tool with a bounded wait
/// - MockCommandRunner: scripted outputs for tests
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return its output
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the tool is missing or not executable
    /// - ExecutionError::Timeout if the tool does not finish in time
    /// - ExecutionError::NonZeroExit if the tool reports failure
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecutionError>;
}

/// Render a command line the way it is keyed in logs and mocks
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Scripted response for one command line
    #[derive(Debug, Clone)]
    pub enum MockResponse {
        /// Exit 0 with this stdout
        Stdout(String),
        /// Exit non-zero with this stderr
        Fail(String),
        /// Exceed the deadline
        Timeout,
    }

    /// Mock Command Runner for testing
    ///
    /// Commands without a scripted response behave like a missing binary.
    #[derive(Default)]
    pub struct MockCommandRunner {
        responses: HashMap<String, MockResponse>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockCommandRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script a successful run, keyed by the full command line
        pub fn with_stdout(mut self, line: impl Into<String>, stdout: impl Into<String>) -> Self {
            self.responses
                .insert(line.into(), MockResponse::Stdout(stdout.into()));
            self
        }

        pub fn with_failure(mut self, line: impl Into<String>, stderr: impl Into<String>) -> Self {
            self.responses
                .insert(line.into(), MockResponse::Fail(stderr.into()));
            self
        }

        pub fn with_timeout(mut self, line: impl Into<String>) -> Self {
            self.responses.insert(line.into(), MockResponse::Timeout);
            self
        }

        /// Command lines in invocation order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn was_called(&self, line: &str) -> bool {
            self.calls.lock().unwrap().iter().any(|c| c == line)
        }
    }

    #[async_trait]
    impl CommandRunner for MockCommandRunner {
        async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecutionError> {
            let line = command_line(program, args);
            self.calls.lock().unwrap().push(line.clone());

            match self.responses.get(&line) {
                Some(MockResponse::Stdout(stdout)) => Ok(CommandOutput {
                    stdout: stdout.clone(),
                    stderr: String::new(),
                    duration_ms: 1,
                }),
                Some(MockResponse::Fail(stderr)) => Err(ExecutionError::NonZeroExit {
                    code: Some(1),
                    stderr: stderr.clone(),
                }),
                Some(MockResponse::Timeout) => Err(ExecutionError::Timeout(10_000)),
                None => Err(ExecutionError::SpawnFailed(format!(
                    "{}: No such file or directory",
                    program
                ))),
            }
        }
    }
}
