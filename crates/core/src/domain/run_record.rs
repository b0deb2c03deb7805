// Benchmark Run Record - one results directory, decoded and measured

use crate::application::constants::{NOT_AVAILABLE, PRIMARY_MEASUREMENT_FILE, SECONDARY_MEASUREMENT_FILE};
use std::cmp::Ordering;

/// Report/CSV column headers, in row order
pub const RUN_COLUMNS: [&str; 6] = [
    "Duration",
    "Operations",
    "Gage",
    "MPI Runtime (s)",
    "Troute Runtime (s)",
    "Total Runtime (s)",
];

/// Measurement stage within one benchmark directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// MPI model run
    Primary,
    /// Routing run
    Secondary,
}

impl Stage {
    /// File holding this stage's hyperfine output
    pub fn file_name(self) -> &'static str {
        match self {
            Stage::Primary => PRIMARY_MEASUREMENT_FILE,
            Stage::Secondary => SECONDARY_MEASUREMENT_FILE,
        }
    }
}

/// Fields encoded in a results directory name (`30d_1000_gageA`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRunName {
    pub duration: String,
    pub operations: u64,
    pub gage: String,
}

/// One benchmark execution: decoded name plus loaded timings in seconds.
///
/// Timings keep full precision; rounding happens only when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub duration: String,
    pub operations: u64,
    pub gage: String,
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
}

impl RunRecord {
    pub fn new(name: DecodedRunName, primary: Option<f64>, secondary: Option<f64>) -> Self {
        Self {
            duration: name.duration,
            operations: name.operations,
            gage: name.gage,
            primary,
            secondary,
        }
    }

    /// Sum of both stages; absent unless both were measured
    pub fn total(&self) -> Option<f64> {
        Some(self.primary? + self.secondary?)
    }

    /// Rendered cells in `RUN_COLUMNS` order
    pub fn to_row(&self) -> [String; 6] {
        [
            self.duration.clone(),
            self.operations.to_string(),
            self.gage.clone(),
            format_seconds(self.primary),
            format_seconds(self.secondary),
            format_seconds(self.total()),
        ]
    }

    /// Report order: operations numerically, then duration tag as a plain
    /// string ("10d" sorts before "5d").
    fn report_order(&self, other: &Self) -> Ordering {
        self.operations
            .cmp(&other.operations)
            .then_with(|| self.duration.cmp(&other.duration))
    }
}

/// Round to 3 decimal places.
///
/// Rounds the exact binary value with ties to even, so 1.0005 (stored just
/// below the midpoint) gives 1.0 and 0.0625 gives 0.062.
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}

fn format_seconds(value: Option<f64>) -> String {
    match value {
        // Debug keeps a trailing ".0" on whole numbers (12.0, not 12)
        Some(v) => format!("{:?}", round3(v)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Record set sorted once into report order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<RunRecord>,
}

impl RecordSet {
    /// Stable sort, so ties keep their collection order
    pub fn sorted(mut records: Vec<RunRecord>) -> Self {
        records.sort_by(RunRecord::report_order);
        Self { records }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
