// nvme list output parser

use regex::Regex;
use std::sync::LazyLock;

static LEADING_COLUMNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+\s+\S+\s+\S+\s+").expect("valid leading column pattern"));
static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid column gap pattern"));
static CAPACITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[0-9.]+\s+[MTG]B").expect("valid capacity pattern"));

/// Drive row from `nvme list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NvmeDrive {
    pub model: String,
    /// Total from the usage column, e.g. "1.00  TB"
    pub capacity: Option<String>,
}

/// Find the row for `device_name` (e.g. "nvme0") in `nvme list` text.
///
/// Node, generic node and serial are fixed single-token columns; the model
/// is the first field after them, and fields are separated by two or more
/// spaces because the model itself contains single spaces.
pub fn parse(output: &str, device_name: &str) -> Option<NvmeDrive> {
    output
        .lines()
        .filter(|line| line.contains(device_name))
        .find_map(parse_row)
}

fn parse_row(line: &str) -> Option<NvmeDrive> {
    let line = LEADING_COLUMNS.replace(line, "x  x  x  ");
    let fields: Vec<&str> = COLUMN_GAP.split(line.trim()).collect();
    let model = fields.get(3)?.trim();
    if model.is_empty() {
        return None;
    }

    let capacity = CAPACITY
        .find_iter(&line)
        .last()
        .map(|m| m.as_str().trim().to_string());

    Some(NvmeDrive {
        model: model.to_string(),
        capacity,
    })
}
