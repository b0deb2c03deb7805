// OS identity probe

use crate::application::fingerprint::probe::{Probe, ProbeContext, ProbeOutcome};
use crate::domain::keys;
use async_trait::async_trait;

/// Kernel name and release, e.g. "Linux 6.8.0-45-generic"
pub struct HostOsProbe;

#[async_trait]
impl Probe for HostOsProbe {
    fn name(&self) -> &'static str {
        "host-os"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let os = format!("{} {}", ctx.host.os_name, ctx.host.os_release);
        ProbeOutcome::from_facts(vec![(keys::OS, os.trim().to_string())])
    }
}
