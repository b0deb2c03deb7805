// Probe contract: one tool or OS query, yielding partial facts or nothing

use crate::domain::ExecutionContext;
use crate::port::command_runner::command_line;
use crate::port::{CommandRunner, HostSnapshot};
use async_trait::async_trait;
use tracing::{debug, trace};

/// Everything a probe may consult while running
pub struct ProbeContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub host: &'a HostSnapshot,
    pub execution: ExecutionContext,
}

/// Result of running one probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// At least one fact, in emission order
    Facts(Vec<(&'static str, String)>),
    /// Tool missing, failed, timed out, or printed nothing recognisable
    NoData,
}

impl ProbeOutcome {
    pub fn from_facts(facts: Vec<(&'static str, String)>) -> Self {
        if facts.is_empty() {
            ProbeOutcome::NoData
        } else {
            ProbeOutcome::Facts(facts)
        }
    }

    /// Keep only the fields that were found
    pub fn from_optional<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<String>)>,
    {
        Self::from_facts(
            fields
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        )
    }
}

/// Probe trait
///
/// A probe never fails past its own boundary: every failure mode of the
/// underlying tool becomes `ProbeOutcome::NoData`.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Needs privileged tools that are not reachable from inside a container
    fn host_only(&self) -> bool {
        false
    }

    /// Run only while this key is still missing from the table
    fn gate_key(&self) -> Option<&'static str> {
        None
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome;
}

/// Stdout of a successful command, or None with the failure logged
pub(crate) async fn capture(
    ctx: &ProbeContext<'_>,
    probe: &str,
    program: &str,
    args: &[&str],
) -> Option<String> {
    match ctx.runner.run(program, args).await {
        Ok(output) => {
            trace!(
                probe = %probe,
                command = %command_line(program, args),
                duration_ms = output.duration_ms,
                stderr = %output.stderr.trim(),
                "Probe command finished"
            );
            Some(output.stdout)
        }
        Err(e) => {
            debug!(
                probe = %probe,
                command = %command_line(program, args),
                error = %e,
                "Probe command unavailable"
            );
            None
        }
    }
}
