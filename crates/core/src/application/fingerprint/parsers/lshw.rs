// lshw -class disk -class storage output parser

use super::value_after_colon;

/// Disk entry from `lshw`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LshwDisk {
    pub model: String,
    pub vendor: Option<String>,
    pub size: Option<String>,
}

/// Parse `lshw` text for the disk whose logical name contains `device_name`.
///
/// NVMe controllers carry `product:` on the `*-nvme` node while the
/// `logical name:` sits on the nested `*-namespace` node, so the candidate
/// product is tracked while streaming. Once the logical name matches, the
/// next section header that is not a namespace ends the scan. Without a
/// match the last product seen is reported.
pub fn parse(output: &str, device_name: &str) -> Option<LshwDisk> {
    let mut model: Option<String> = None;
    let mut vendor = None;
    let mut size = None;
    let mut matched = false;

    for line in output.lines() {
        if line.contains("product:") {
            model = value_after_colon(line).map(str::to_string);
        } else if line.contains("vendor:") && model.is_some() {
            vendor = value_after_colon(line).map(str::to_string);
        } else if line.contains("size:") && model.is_some() {
            size = value_after_colon(line).map(str::to_string);
        }

        if matched && line.contains("*-") && !line.contains("namespace") {
            break;
        } else if line.contains("logical name:") && line.contains(device_name) {
            matched = true;
        }
    }

    let model = model.filter(|m| !m.is_empty())?;
    Some(LshwDisk {
        model,
        vendor,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSHW: &str = "\
  *-nvme
       description: NVMe device
       product: Samsung SSD 980 PRO 1TB
       vendor: Samsung Electronics Co Ltd
       physical id: 0
       logical name: /dev/nvme0
     *-namespace:0
          description: NVMe disk
          logical name: /dev/nvme0n1
          size: 931GiB (1TB)
  *-sata
       description: SATA controller
       product: 500 Series Chipset SATA Controller
       vendor: Advanced Micro Devices, Inc. [AMD]
";

    #[test]
    fn test_nvme_section_match() {
        let disk = parse(LSHW, "nvme0").unwrap();
        assert_eq!(disk.model, "Samsung SSD 980 PRO 1TB");
        assert_eq!(disk.vendor.as_deref(), Some("Samsung Electronics Co Ltd"));
        assert_eq!(disk.size.as_deref(), Some("931GiB (1TB)"));
    }

    #[test]
    fn test_without_match_reports_last_product() {
        let disk = parse(LSHW, "sdz").unwrap();
        assert_eq!(disk.model, "500 Series Chipset SATA Controller");
        assert_eq!(disk.vendor.as_deref(), Some("Advanced Micro Devices, Inc. [AMD]"));
    }

    #[test]
    fn test_no_product() {
        assert_eq!(parse("  *-disk\n       description: ATA Disk\n", "sda"), None);
    }
}
