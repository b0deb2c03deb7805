// Subprocess runner implementation
// reason: tokio::process with a per-invocation timeout
use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use benchsum_core::application::constants::DEFAULT_PROBE_TIMEOUT;
use benchsum_core::port::command_runner::command_line;
use benchsum_core::port::{CommandOutput, CommandRunner, ExecutionError};

/// Runs inspection tools as child processes with a bounded wait.
///
/// The child is killed if the deadline passes; stdin is closed so a tool
/// waiting for input fails instead of hanging.
pub struct SubprocessRunner {
    timeout: Duration,
}

impl SubprocessRunner {
    /// Create a new subprocess runner
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessRunner::new(Duration::from_secs(10));
    /// let out = runner.run("lscpu", &[]).await?;
    /// ```
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build execution result from process output
    fn build_output(
        output: std::process::Output,
        duration_ms: u64,
    ) -> Result<CommandOutput, ExecutionError> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            duration_ms,
        })
    }
}

impl Default for SubprocessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecutionError> {
        let line = command_line(program, args);
        let start = Instant::now();

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed(format!("{}: {}", program, e)))?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ExecutionError::IoError(e.to_string())),
            Err(_) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!(command = %line, timeout_ms, "Command timed out; killed");
                return Err(ExecutionError::Timeout(timeout_ms));
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            command = %line,
            duration_ms,
            exit_code = ?output.status.code(),
            "Command finished"
        );

        Self::build_output(output, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout() {
        let runner = SubprocessRunner::default();
        let out = runner.run("echo", &["hello", "world"]).await.unwrap();
        assert_eq!(out.stdout.trim(), "hello world");
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_failure() {
        let runner = SubprocessRunner::default();
        let err = runner
            .run("definitely_not_a_real_command_12345", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::SpawnFailed(_)));
    }

    #[tokio::test]
    async fn test_non_zero_exit() {
        let runner = SubprocessRunner::default();
        let err = runner.run("sh", &["-c", "echo oops >&2; exit 3"]).await.unwrap_err();
        match err {
            ExecutionError::NonZeroExit { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_kills_child() {
        let runner = SubprocessRunner::new(Duration::from_millis(200));
        let start = Instant::now();
        let err = runner.run("sleep", &["5"]).await.unwrap_err();

        assert!(matches!(err, ExecutionError::Timeout(200)));
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
