// Probe Chain - ordered fallback sequence for one fact domain

use super::probe::{Probe, ProbeContext, ProbeOutcome};
use crate::domain::FactTable;
use tracing::{debug, trace};

/// Runs probes in priority order, merging facts without overwriting.
///
/// Chain order is the only tie-break between probes reporting the same key:
/// the first probe to produce a key keeps it.
pub struct ProbeChain {
    domain: &'static str,
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeChain {
    pub fn new(domain: &'static str) -> Self {
        Self {
            domain,
            probes: Vec::new(),
        }
    }

    /// Append a lower-priority probe
    pub fn then(mut self, probe: impl Probe + 'static) -> Self {
        self.probes.push(Box::new(probe));
        self
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    /// Probe names in execution order
    pub fn probe_names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Execute the chain against `table`, returning the number of facts added
    pub async fn run(&self, ctx: &ProbeContext<'_>, table: &mut FactTable) -> usize {
        let mut added = 0;

        for probe in &self.probes {
            if probe.host_only() && ctx.execution.is_container() {
                debug!(domain = self.domain, probe = probe.name(), "Skipped: host-only probe");
                continue;
            }
            if let Some(key) = probe.gate_key() {
                if table.contains(key) {
                    trace!(domain = self.domain, probe = probe.name(), key, "Skipped: already known");
                    continue;
                }
            }

            match probe.run(ctx).await {
                ProbeOutcome::Facts(facts) => {
                    for (key, value) in facts {
                        if table.insert_if_absent(key, value) {
                            added += 1;
                        } else {
                            trace!(domain = self.domain, probe = probe.name(), key, "Kept earlier value");
                        }
                    }
                }
                ProbeOutcome::NoData => {
                    debug!(domain = self.domain, probe = probe.name(), "No data");
                }
            }
        }

        added
    }
}
