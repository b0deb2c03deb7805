//! Environment Fingerprinter
//!
//! Runs the probe chains for each fact domain in a fixed order and merges
//! their output into one `FactTable`:
//! - CPU: lscpu, then the OS brand string for the model only
//! - Memory: OS total, then dmidecode (host only)
//! - OS identity
//! - Storage: df lookup for the results root, then nvme / smartctl / lshw / lsblk
//! - Container runtime
//!
//! No probe failure is fatal. The only placeholder value is `Drive: Unknown`,
//! written when the results root cannot be mapped to a mount.

pub mod chain;
pub mod parsers;
pub mod probe;
pub mod probes;

pub use chain::ProbeChain;
pub use probe::{Probe, ProbeContext, ProbeOutcome};

use crate::domain::{keys, ExecutionContext, FactTable};
use crate::port::{CommandRunner, HostInfo};
use parsers::df;
use probes::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Sentinel for a results root whose mount could not be determined
pub const DRIVE_UNKNOWN: &str = "Unknown";

/// Collects the fact table describing this machine
pub struct Fingerprinter {
    runner: Arc<dyn CommandRunner>,
    host: Arc<dyn HostInfo>,
    context: ExecutionContext,
    results_root: PathBuf,
}

impl Fingerprinter {
    /// Create a new fingerprinter
    ///
    /// # Arguments
    /// * `runner` - Runs the external inspection tools
    /// * `host` - OS-level CPU/memory/kernel queries
    /// * `context` - Host or container; gates the privileged probes
    /// * `results_root` - Path whose backing drive is described
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        host: Arc<dyn HostInfo>,
        context: ExecutionContext,
        results_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            host,
            context,
            results_root: results_root.into(),
        }
    }

    /// Run every chain once, in order, and return the finished table
    pub async fn collect(&self) -> FactTable {
        let snapshot = self.host.snapshot().await;
        let ctx = ProbeContext {
            runner: self.runner.as_ref(),
            host: &snapshot,
            execution: self.context,
        };
        let mut table = FactTable::new();

        for chain in system_chains() {
            let added = chain.run(&ctx, &mut table).await;
            debug!(domain = chain.domain(), added, "Chain finished");
        }

        self.collect_storage(&ctx, &mut table).await;

        ProbeChain::new("runtime")
            .then(ContainerRuntimeProbe)
            .run(&ctx, &mut table)
            .await;

        info!(
            facts = table.len(),
            context = %self.context,
            "Environment fingerprint collected"
        );
        table
    }

    async fn collect_storage(&self, ctx: &ProbeContext<'_>, table: &mut FactTable) {
        let Some(mount) = locate_mount(ctx, &self.results_root).await else {
            debug!(root = %self.results_root.display(), "Mount lookup failed");
            table.insert_if_absent(keys::DRIVE, DRIVE_UNKNOWN);
            return;
        };

        table.insert_if_absent(keys::FILESYSTEM, mount.fs_type);

        if !mount.device.contains("/dev/") {
            debug!(device = %mount.device, "Not a block device; drive probes skipped");
            return;
        }

        let chain = drive_chain(&mount.device);
        debug!(device = %mount.device, probes = ?chain.probe_names(), "Probing drive");
        chain.run(ctx, table).await;
    }
}

/// CPU, memory and OS chains, in report order
fn system_chains() -> [ProbeChain; 4] {
    [
        ProbeChain::new("cpu")
            .then(LscpuProbe)
            .then(HostCpuModelProbe),
        ProbeChain::new("cpu-count").then(HostCpuCountProbe),
        ProbeChain::new("memory")
            .then(HostMemoryProbe)
            .then(DmidecodeProbe),
        ProbeChain::new("os").then(HostOsProbe),
    ]
}

/// Drive identity chain for a partition path such as `/dev/nvme0n1p2`.
///
/// The NVMe lister only runs for NVMe devices; the rest fall back in order
/// while `Drive Model` is still missing.
pub fn drive_chain(device: &str) -> ProbeChain {
    let base = df::base_device(device);

    let mut chain = ProbeChain::new("drive");
    if base.contains("nvme") {
        chain = chain.then(NvmeListProbe::new(base.as_str()));
    }
    chain
        .then(SmartctlProbe::new(base.as_str()))
        .then(LshwProbe::new(base.as_str()))
        .then(LsblkProbe::new(base.as_str()))
}
