// Host information port (OS-level APIs, no external tools)
use async_trait::async_trait;

/// Facts the OS reports directly
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    /// CPU brand string; None when the OS does not report one
    pub cpu_brand: Option<String>,
    pub physical_cores: Option<usize>,
    pub logical_cpus: usize,
    pub memory_total_bytes: u64,
    /// Kernel name, e.g. "Linux"
    pub os_name: String,
    /// Kernel release, e.g. "6.8.0-45-generic"
    pub os_release: String,
}

/// Host info port
///
/// Always available: unlike the command probes these queries do not fail.
#[async_trait]
pub trait HostInfo: Send + Sync {
    /// Take a snapshot of CPU, memory and OS identity
    async fn snapshot(&self) -> HostSnapshot;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Mock HostInfo returning a fixed snapshot
    pub struct MockHostInfo {
        snapshot: HostSnapshot,
    }

    impl MockHostInfo {
        pub fn new(snapshot: HostSnapshot) -> Self {
            Self { snapshot }
        }

        /// 8 cores / 16 threads, 32 GiB, Linux 6.8.0
        pub fn workstation() -> Self {
            Self::new(HostSnapshot {
                cpu_brand: Some("AMD Ryzen 7 7700X 8-Core Processor".to_string()),
                physical_cores: Some(8),
                logical_cpus: 16,
                memory_total_bytes: 32 * 1024 * 1024 * 1024,
                os_name: "Linux".to_string(),
                os_release: "6.8.0-45-generic".to_string(),
            })
        }
    }

    #[async_trait]
    impl HostInfo for MockHostInfo {
        async fn snapshot(&self) -> HostSnapshot {
            self.snapshot.clone()
        }
    }
}
