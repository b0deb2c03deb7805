// Shared constants (no magic values)
use std::time::Duration;

/// Results root inside the benchmark container
pub const CONTAINER_RESULTS_DIR: &str = "/ngen/bench/results";

/// Results root on the host (tilde-expanded at start-up)
pub const HOST_RESULTS_DIR: &str = "~/.ngiab/bench/results";

/// Files whose presence means this process runs inside a container
pub const CONTAINER_MARKER_FILES: [&str; 2] = ["/.dockerenv", "/run/.containerenv"];

/// hyperfine output of the MPI model run
pub const PRIMARY_MEASUREMENT_FILE: &str = "mpirun_benchmark.json";

/// hyperfine output of the routing run
pub const SECONDARY_MEASUREMENT_FILE: &str = "troute_benchmark.json";

/// Summary written into the results root
pub const SUMMARY_FILE_NAME: &str = "benchmark_summary.csv";

/// Cell value for a missing measurement
pub const NOT_AVAILABLE: &str = "N/A";

/// Upper bound on a single inspection tool invocation.
/// The tools are read-only and normally answer in well under a second.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
