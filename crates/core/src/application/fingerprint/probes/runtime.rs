// Container runtime identity probe

use crate::application::fingerprint::probe::{capture, Probe, ProbeContext, ProbeOutcome};
use crate::domain::keys;
use async_trait::async_trait;

/// Docker version plus where this process itself is running.
///
/// Always produces facts: a missing runtime is reported as "Not detected".
pub struct ContainerRuntimeProbe;

#[async_trait]
impl Probe for ContainerRuntimeProbe {
    fn name(&self) -> &'static str {
        "container-runtime"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let in_container = ctx.execution.is_container();
        let version = capture(ctx, self.name(), "docker", &["--version"])
            .await
            .map(|out| out.trim().to_string());

        let Some(version) = version else {
            let environment = if in_container {
                "Docker Container"
            } else {
                "Host System"
            };
            return ProbeOutcome::from_facts(vec![
                (keys::DOCKER, "Not detected".to_string()),
                (keys::ENVIRONMENT, environment.to_string()),
            ]);
        };

        let mut facts = vec![(keys::DOCKER, version)];
        if in_container {
            facts.push((keys::ENVIRONMENT, "Inside Docker Container".to_string()));
            if let Some(hostname) = capture(ctx, self.name(), "hostname", &[]).await {
                facts.push((keys::CONTAINER_HOSTNAME, hostname.trim().to_string()));
            }
        } else {
            facts.push((keys::ENVIRONMENT, "Host System".to_string()));
        }
        ProbeOutcome::from_facts(facts)
    }
}
