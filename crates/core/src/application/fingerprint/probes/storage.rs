// Storage domain: mount lookup for the results root, then drive identity

use crate::application::fingerprint::parsers::{df, lsblk, lshw, nvme, smartctl};
use crate::application::fingerprint::probe::{capture, Probe, ProbeContext, ProbeOutcome};
use crate::domain::keys;
use async_trait::async_trait;
use std::path::Path;

/// Block device and filesystem type backing a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountInfo {
    pub device: String,
    pub fs_type: String,
}

/// Run `df` then `df -T` for `path`. None if either fails or is unparsable.
pub async fn locate_mount(ctx: &ProbeContext<'_>, path: &Path) -> Option<MountInfo> {
    let path = path.to_string_lossy().into_owned();

    let output = capture(ctx, "df", "df", &[path.as_str()]).await?;
    let device = df::parse_device(&output)?;

    let output = capture(ctx, "df", "df", &["-T", path.as_str()]).await?;
    let fs_type = df::parse_fs_type(&output)?;

    Some(MountInfo { device, fs_type })
}

/// Model and capacity from `nvme list`
pub struct NvmeListProbe {
    base_device: String,
}

impl NvmeListProbe {
    pub fn new(base_device: impl Into<String>) -> Self {
        Self {
            base_device: base_device.into(),
        }
    }
}

#[async_trait]
impl Probe for NvmeListProbe {
    fn name(&self) -> &'static str {
        "nvme-list"
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let Some(output) = capture(ctx, self.name(), "nvme", &["list"]).await else {
            return ProbeOutcome::NoData;
        };
        let Some(drive) = nvme::parse(&output, df::device_name(&self.base_device)) else {
            return ProbeOutcome::NoData;
        };
        ProbeOutcome::from_optional([
            (keys::DRIVE_MODEL, Some(drive.model)),
            (keys::DRIVE_TYPE, Some("NVMe SSD".to_string())),
            (keys::DRIVE_INTERFACE, Some("NVMe".to_string())),
            (keys::DRIVE_CAPACITY, drive.capacity),
        ])
    }
}

/// Model and rotation from `sudo smartctl -i`
pub struct SmartctlProbe {
    base_device: String,
}

impl SmartctlProbe {
    pub fn new(base_device: impl Into<String>) -> Self {
        Self {
            base_device: base_device.into(),
        }
    }
}

#[async_trait]
impl Probe for SmartctlProbe {
    fn name(&self) -> &'static str {
        "smartctl"
    }

    fn host_only(&self) -> bool {
        true
    }

    fn gate_key(&self) -> Option<&'static str> {
        Some(keys::DRIVE_MODEL)
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let args = ["smartctl", "-i", self.base_device.as_str()];
        let Some(output) = capture(ctx, self.name(), "sudo", &args).await else {
            return ProbeOutcome::NoData;
        };
        let identity = smartctl::parse(&output);
        ProbeOutcome::from_optional([
            (keys::DRIVE_MODEL, identity.model),
            (keys::DRIVE_TYPE, identity.drive_type),
        ])
    }
}

/// Product, vendor and size from `sudo lshw -class disk -class storage`
pub struct LshwProbe {
    base_device: String,
}

impl LshwProbe {
    pub fn new(base_device: impl Into<String>) -> Self {
        Self {
            base_device: base_device.into(),
        }
    }
}

#[async_trait]
impl Probe for LshwProbe {
    fn name(&self) -> &'static str {
        "lshw"
    }

    fn host_only(&self) -> bool {
        true
    }

    fn gate_key(&self) -> Option<&'static str> {
        Some(keys::DRIVE_MODEL)
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let args = ["lshw", "-class", "disk", "-class", "storage"];
        let Some(output) = capture(ctx, self.name(), "sudo", &args).await else {
            return ProbeOutcome::NoData;
        };
        let Some(disk) = lshw::parse(&output, df::device_name(&self.base_device)) else {
            return ProbeOutcome::NoData;
        };
        ProbeOutcome::from_optional([
            (keys::DRIVE_MODEL, Some(disk.model)),
            (keys::DRIVE_VENDOR, disk.vendor),
            (keys::DRIVE_SIZE, disk.size),
        ])
    }
}

/// Model, rotation and size from `lsblk`; works without privileges
pub struct LsblkProbe {
    base_device: String,
}

impl LsblkProbe {
    pub fn new(base_device: impl Into<String>) -> Self {
        Self {
            base_device: base_device.into(),
        }
    }
}

#[async_trait]
impl Probe for LsblkProbe {
    fn name(&self) -> &'static str {
        "lsblk"
    }

    fn gate_key(&self) -> Option<&'static str> {
        Some(keys::DRIVE_MODEL)
    }

    async fn run(&self, ctx: &ProbeContext<'_>) -> ProbeOutcome {
        let args = ["-o", "NAME,MODEL,ROTA,SIZE", "-n", self.base_device.as_str()];
        let Some(output) = capture(ctx, self.name(), "lsblk", &args).await else {
            return ProbeOutcome::NoData;
        };
        let Some(dev) = lsblk::parse(&output) else {
            return ProbeOutcome::NoData;
        };
        ProbeOutcome::from_facts(vec![
            (keys::DRIVE_MODEL, dev.model),
            (keys::DRIVE_TYPE, dev.drive_type),
            (keys::DRIVE_CAPACITY, dev.capacity),
        ])
    }
}
