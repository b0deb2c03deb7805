// Fact Table - ordered environment key/value pairs describing the host

use indexmap::map::Entry;
use indexmap::IndexMap;

/// Fact names, in the order the fingerprinter normally emits them.
///
/// Probes in different domains never share a key.
pub mod keys {
    pub const CPU_MODEL: &str = "CPU Model";
    pub const CPU_CLOCK: &str = "CPU Clock";
    pub const L1D_CACHE: &str = "L1d Cache";
    pub const L1I_CACHE: &str = "L1i Cache";
    pub const L2_CACHE: &str = "L2 Cache";
    pub const L3_CACHE: &str = "L3 Cache";
    pub const CPU_CORES: &str = "CPU Cores";
    pub const CPU_THREADS: &str = "CPU Threads";

    pub const MEMORY_TOTAL: &str = "Memory Total";
    pub const MEMORY_TYPE: &str = "Memory Type";
    pub const MEMORY_SPEED: &str = "Memory Speed";
    pub const MEMORY_CONFIG: &str = "Memory Config";

    pub const OS: &str = "OS";

    pub const FILESYSTEM: &str = "Filesystem";
    pub const DRIVE: &str = "Drive";
    pub const DRIVE_MODEL: &str = "Drive Model";
    pub const DRIVE_TYPE: &str = "Drive Type";
    pub const DRIVE_INTERFACE: &str = "Drive Interface";
    pub const DRIVE_CAPACITY: &str = "Drive Capacity";
    pub const DRIVE_VENDOR: &str = "Drive Vendor";
    pub const DRIVE_SIZE: &str = "Drive Size";

    pub const DOCKER: &str = "Docker";
    pub const ENVIRONMENT: &str = "Environment";
    pub const CONTAINER_HOSTNAME: &str = "Container Hostname";
}

/// Ordered mapping from fact name to a human-readable value.
///
/// Insertion order is significant (it is the report and CSV order) and a key,
/// once set, keeps its first value. Only the fingerprinter inserts; callers
/// get read access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTable {
    entries: IndexMap<String, String>,
}

impl FactTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the key is already present.
    ///
    /// Returns true if the value was stored.
    pub(crate) fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.entries.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a table with the same first-wins rule the fingerprinter uses.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FactTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = FactTable::new();
        for (key, value) in iter {
            table.insert_if_absent(key, value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let table: FactTable = [
            (keys::OS, "Linux 6.8.0"),
            (keys::CPU_MODEL, "AMD EPYC 7763"),
            (keys::MEMORY_TOTAL, "62.7 GB"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["OS", "CPU Model", "Memory Total"]);
    }

    #[test]
    fn test_first_value_wins() {
        let mut table = FactTable::new();
        assert!(table.insert_if_absent(keys::DRIVE_MODEL, "Samsung SSD 980 PRO 1TB"));
        assert!(!table.insert_if_absent(keys::DRIVE_MODEL, "QEMU HARDDISK"));

        assert_eq!(table.get(keys::DRIVE_MODEL), Some("Samsung SSD 980 PRO 1TB"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rejected_duplicate_keeps_position() {
        let table: FactTable = [
            (keys::CPU_MODEL, "first"),
            (keys::OS, "Linux"),
            (keys::CPU_MODEL, "second"),
        ]
        .into_iter()
        .collect();

        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(entries, vec![("CPU Model", "first"), ("OS", "Linux")]);
    }

    #[test]
    fn test_get_missing_key() {
        let table = FactTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(keys::DRIVE), None);
        assert!(!table.contains(keys::DRIVE));
    }
}
