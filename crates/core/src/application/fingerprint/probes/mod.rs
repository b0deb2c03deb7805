// Concrete probes, grouped by fact domain

pub mod cpu;
pub mod memory;
pub mod os;
pub mod runtime;
pub mod storage;

pub use cpu::{HostCpuCountProbe, HostCpuModelProbe, LscpuProbe};
pub use memory::{DmidecodeProbe, HostMemoryProbe};
pub use os::HostOsProbe;
pub use runtime::ContainerRuntimeProbe;
pub use storage::{locate_mount, LsblkProbe, LshwProbe, MountInfo, NvmeListProbe, SmartctlProbe};
