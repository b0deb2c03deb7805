// lsblk -o NAME,MODEL,ROTA,SIZE -n output parser

/// Whole-disk row from `lsblk`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDevice {
    pub model: String,
    /// "HDD" for rotational media, otherwise "SSD"
    pub drive_type: String,
    pub capacity: String,
}

/// Parse the first `lsblk` row (the disk itself; partition rows follow it).
///
/// The model column may contain spaces, so it is everything between the
/// name and the last two columns. Rows without a model have only three
/// fields and yield None.
pub fn parse(output: &str) -> Option<BlockDevice> {
    let fields: Vec<&str> = output.lines().next()?.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }

    let (rota, size) = (fields[fields.len() - 2], fields[fields.len() - 1]);
    Some(BlockDevice {
        model: fields[1..fields.len() - 2].join(" "),
        drive_type: if rota == "1" { "HDD" } else { "SSD" }.to_string(),
        capacity: size.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_model() {
        let output = "sda    Samsung SSD 870 EVO 1TB    0 931.5G\n├─sda1                        0   512M\n└─sda2                        0   931G\n";
        let dev = parse(output).unwrap();
        assert_eq!(dev.model, "Samsung SSD 870 EVO 1TB");
        assert_eq!(dev.drive_type, "SSD");
        assert_eq!(dev.capacity, "931.5G");
    }

    #[test]
    fn test_rotational_disk() {
        let dev = parse("sdb ST4000DM004-2CV104 1 3.6T\n").unwrap();
        assert_eq!(dev.model, "ST4000DM004-2CV104");
        assert_eq!(dev.drive_type, "HDD");
        assert_eq!(dev.capacity, "3.6T");
    }

    #[test]
    fn test_missing_model_column() {
        // Virtual disks often report no model
        assert_eq!(parse("vda      1   50G\n"), None);
        assert_eq!(parse(""), None);
    }
}
