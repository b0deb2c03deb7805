// CPU domain probes

use crate::application::fingerprint::parsers::lscpu;
use crate::application::fingerprint::probe::{capture, Probe, ProbeContext, ProbeOutcome};
use crate::domain::keys;
use async_trait::async_trait;

/// Model, clock and cache sizes from `lscpu`
pub struct LscpuProbe;

#[async_trait]
impl Probe for LscpuProbe {
    fn name(&self) -> &'static str {
        "lscpu"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let Some(output) = capture(ctx, self.name(), "lscpu", &[]).await else {
            return ProbeOutcome::NoData;
        };
        let cpu = lscpu::parse(&output);
        ProbeOutcome::from_optional([
            (keys::CPU_MODEL, cpu.model),
            (keys::CPU_CLOCK, cpu.clock),
            (keys::L1D_CACHE, cpu.l1d),
            (keys::L1I_CACHE, cpu.l1i),
            (keys::L2_CACHE, cpu.l2),
            (keys::L3_CACHE, cpu.l3),
        ])
    }
}

/// Model name from the OS when lscpu could not provide one
pub struct HostCpuModelProbe;

#[async_trait]
impl Probe for HostCpuModelProbe {
    fn name(&self) -> &'static str {
        "host-cpu-model"
    }

    fn gate_key(&self) -> Option<&'static str> {
        Some(keys::CPU_MODEL)
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let brand = ctx
            .host
            .cpu_brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        ProbeOutcome::from_optional([(keys::CPU_MODEL, brand)])
    }
}

/// Physical core and logical CPU counts
pub struct HostCpuCountProbe;

#[async_trait]
impl Probe for HostCpuCountProbe {
    fn name(&self) -> &'static str {
        "host-cpu-count"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        ProbeOutcome::from_optional([
            (keys::CPU_CORES, ctx.host.physical_cores.map(|n| n.to_string())),
            (keys::CPU_THREADS, Some(ctx.host.logical_cpus.to_string())),
        ])
    }
}
