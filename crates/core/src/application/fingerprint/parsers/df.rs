// df / df -T output parser and block device normalisation

use regex::Regex;
use std::sync::LazyLock;

static NVME_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"n\d+$").expect("valid namespace pattern"));

/// Field `index` of the first data row (the line after the header)
fn first_row_field(output: &str, index: usize) -> Option<String> {
    output
        .lines()
        .nth(1)?
        .split_whitespace()
        .nth(index)
        .map(str::to_string)
}

/// Device backing the mount, from plain `df <path>`
pub fn parse_device(output: &str) -> Option<String> {
    first_row_field(output, 0)
}

/// Filesystem type, from `df -T <path>`
pub fn parse_fs_type(output: &str) -> Option<String> {
    first_row_field(output, 1)
}

/// Whole-disk device for a partition path.
///
/// Strips trailing digits, then a trailing "p", then a trailing NVMe
/// namespace ("n1"): `/dev/sda2` -> `/dev/sda`, `/dev/nvme0n1p2` -> `/dev/nvme0`.
pub fn base_device(device: &str) -> String {
    let without_digits = device.trim_end_matches(|c: char| c.is_ascii_digit());
    let without_p = without_digits.strip_suffix('p').unwrap_or(without_digits);
    NVME_NAMESPACE.replace(without_p, "").into_owned()
}

/// Last path component of a device, used to match tool output rows
pub fn device_name(device: &str) -> &str {
    device.rsplit('/').next().unwrap_or(device)
}
