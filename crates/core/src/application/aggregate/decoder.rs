// Result Directory Decoder

use crate::domain::DecodedRunName;
use regex::Regex;
use std::sync::LazyLock;

/// `<digits><d|m|y>_<digits>_<gage>`; the gage may itself contain underscores
static RUN_DIR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+[dmy])_(\d+)_(.+)$").expect("valid run directory pattern"));

/// Decode a results directory name such as `30d_1000_gageA`.
///
/// Total: any name that does not follow the convention (including an
/// operation count too large for u64) is None.
pub fn decode(name: &str) -> Option<DecodedRunName> {
    let caps = RUN_DIR_NAME.captures(name)?;
    let operations = caps[2].parse::<u64>().ok()?;

    Some(DecodedRunName {
        duration: caps[1].to_string(),
        operations,
        gage: caps[3].to_string(),
    })
}
