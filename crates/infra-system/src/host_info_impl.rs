// Host info implementation
// reason: sysinfo for CPU/memory, uname(2) for the kernel identity
use async_trait::async_trait;
use sysinfo::System;
use tracing::debug;

use benchsum_core::port::{HostInfo, HostSnapshot};

/// HostInfo backed by sysinfo and uname
#[derive(Default)]
pub struct HostInfoImpl;

impl HostInfoImpl {
    pub fn new() -> Self {
        Self
    }
}

/// Kernel name and release ("Linux", "6.8.0-45-generic")
#[cfg(unix)]
fn kernel_identity() -> (String, String) {
    match nix::sys::utsname::uname() {
        Ok(uts) => (
            uts.sysname().to_string_lossy().into_owned(),
            uts.release().to_string_lossy().into_owned(),
        ),
        Err(e) => {
            debug!(error = %e, "uname failed; using sysinfo");
            sysinfo_kernel_identity()
        }
    }
}

#[cfg(not(unix))]
fn kernel_identity() -> (String, String) {
    sysinfo_kernel_identity()
}

fn sysinfo_kernel_identity() -> (String, String) {
    (
        System::name().unwrap_or_default(),
        System::kernel_version().unwrap_or_default(),
    )
}

#[async_trait]
impl HostInfo for HostInfoImpl {
    async fn snapshot(&self) -> HostSnapshot {
        let mut sys = System::new();
        sys.refresh_cpu();
        sys.refresh_memory();

        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());
        let (os_name, os_release) = kernel_identity();

        let snapshot = HostSnapshot {
            cpu_brand,
            physical_cores: sys.physical_core_count(),
            logical_cpus: sys.cpus().len(),
            memory_total_bytes: sys.total_memory(),
            os_name,
            os_release,
        };

        debug!(
            cpu = ?snapshot.cpu_brand,
            cores = ?snapshot.physical_cores,
            threads = snapshot.logical_cpus,
            mem_total_bytes = snapshot.memory_total_bytes,
            "Host snapshot collected"
        );

        snapshot
    }
}
