// smartctl -i output parser

use super::value_after_colon;

/// Identity section of `smartctl -i`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmartIdentity {
    pub model: Option<String>,
    /// "SSD", or "HDD (<rotation rate>)"
    pub drive_type: Option<String>,
}

/// Parse `smartctl -i` text. ATA drives report "Device Model", NVMe drives
/// "Model Number".
pub fn parse(output: &str) -> SmartIdentity {
    let mut identity = SmartIdentity::default();

    for line in output.lines() {
        let Some(value) = value_after_colon(line) else {
            continue;
        };

        if line.contains("Device Model:") || line.contains("Model Number:") {
            if identity.model.is_none() && !value.is_empty() {
                identity.model = Some(value.to_string());
            }
        } else if line.contains("Rotation Rate:") && identity.drive_type.is_none() {
            identity.drive_type = Some(if line.contains("Solid State") {
                "SSD".to_string()
            } else {
                format!("HDD ({})", value)
            });
        }
    }

    identity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ata_ssd() {
        let output = "\
=== START OF INFORMATION SECTION ===
Model Family:     Samsung based SSDs
Device Model:     Samsung SSD 870 EVO 1TB
Serial Number:    S6PUNX0T123456
Rotation Rate:    Solid State Device
";
        let identity = parse(output);
        assert_eq!(identity.model.as_deref(), Some("Samsung SSD 870 EVO 1TB"));
        assert_eq!(identity.drive_type.as_deref(), Some("SSD"));
    }

    #[test]
    fn test_spinning_disk() {
        let output = "Device Model:     ST4000DM004-2CV104\nRotation Rate:    5425 rpm\n";
        let identity = parse(output);
        assert_eq!(identity.model.as_deref(), Some("ST4000DM004-2CV104"));
        assert_eq!(identity.drive_type.as_deref(), Some("HDD (5425 rpm)"));
    }

    #[test]
    fn test_nvme_model_number() {
        let identity = parse("Model Number:                       WD_BLACK SN850X 2000GB\n");
        assert_eq!(identity.model.as_deref(), Some("WD_BLACK SN850X 2000GB"));
        assert_eq!(identity.drive_type, None);
    }

    #[test]
    fn test_unrecognised_output() {
        assert_eq!(parse("Smartctl open device: /dev/sda failed\n"), SmartIdentity::default());
    }
}
