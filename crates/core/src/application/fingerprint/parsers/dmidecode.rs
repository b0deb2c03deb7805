// dmidecode -t memory output parser

use super::{push_distinct, value_after_colon};

/// Installed memory layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLayout {
    pub memory_type: String,
    pub speed: String,
    /// "<count>x<size>" when all modules match, otherwise the sizes listed
    pub config: Option<String>,
}

/// Parse `dmidecode -t memory` text.
///
/// Returns None unless at least one DDR type and one MT/s speed were found.
pub fn parse(output: &str) -> Option<MemoryLayout> {
    let mut types = Vec::new();
    let mut speeds = Vec::new();
    let mut sizes: Vec<String> = Vec::new();

    for line in output.lines() {
        let Some(value) = value_after_colon(line) else {
            continue;
        };

        if line.contains("Type:") && line.contains("DDR") {
            push_distinct(&mut types, value);
        } else if line.contains("Speed:") && line.contains("MT/s") {
            push_distinct(&mut speeds, value);
        } else if line.contains("Size:")
            && (line.contains("GB") || line.contains("MB"))
            && !line.contains("Volatile")
        {
            sizes.push(value.to_string());
        }
    }

    if types.is_empty() || speeds.is_empty() {
        return None;
    }

    let config = sizes.first().map(|first| {
        if sizes.iter().all(|s| s == first) {
            format!("{}x{}", sizes.len(), first)
        } else {
            sizes.join(", ")
        }
    });

    Some(MemoryLayout {
        memory_type: types.join(", "),
        speed: speeds.join(", "),
        config,
    })
}
