// Tool output parsers
//
// One module per inspection tool. Parsers are total: unrecognised lines are
// skipped and unrecognised output yields an empty result.

pub mod df;
pub mod dmidecode;
pub mod lsblk;
pub mod lscpu;
pub mod lshw;
pub mod nvme;
pub mod smartctl;

/// Value after the first ':' on a line, trimmed
pub(crate) fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, v)| v.trim())
}

/// Push `value` unless an equal value was already collected
pub(crate) fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
