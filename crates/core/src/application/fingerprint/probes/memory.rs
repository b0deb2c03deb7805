// Memory domain probes

use crate::application::fingerprint::parsers::dmidecode;
use crate::application::fingerprint::probe::{capture, Probe, ProbeContext, ProbeOutcome};
use crate::domain::keys;
use async_trait::async_trait;

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Installed memory from the OS, in GiB with one decimal
pub struct HostMemoryProbe;

#[async_trait]
impl Probe for HostMemoryProbe {
    fn name(&self) -> &'static str {
        "host-memory"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let total = ctx.host.memory_total_bytes as f64 / BYTES_PER_GIB;
        ProbeOutcome::from_facts(vec![(keys::MEMORY_TOTAL, format!("{:.1} GB", total))])
    }
}

/// Module type, speed and layout from `sudo dmidecode -t memory`
pub struct DmidecodeProbe;

#[async_trait]
impl Probe for DmidecodeProbe {
    fn name(&self) -> &'static str {
        "dmidecode"
    }

    fn host_only(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let Some(output) =
            capture(ctx, self.name(), "sudo", &["dmidecode", "-t", "memory"]).await
        else {
            return ProbeOutcome::NoData;
        };
        let Some(layout) = dmidecode::parse(&output) else {
            return ProbeOutcome::NoData;
        };
        ProbeOutcome::from_optional([
            (keys::MEMORY_TYPE, Some(layout.memory_type)),
            (keys::MEMORY_SPEED, Some(layout.speed)),
            (keys::MEMORY_CONFIG, layout.config),
        ])
    }
}
