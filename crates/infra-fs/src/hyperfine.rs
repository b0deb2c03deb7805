// hyperfine JSON export reader

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct HyperfineExport {
    results: Vec<HyperfineResult>,
}

#[derive(Debug, Deserialize)]
struct HyperfineResult {
    mean: f64,
}

/// Mean of the first result in a hyperfine export, in seconds
///
/// Absent, unreadable or malformed files (including an empty `results`
/// array) yield None.
pub async fn load_mean(path: &Path) -> Option<f64> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Measurement file unreadable");
            return None;
        }
    };

    parse_mean(&raw).or_else(|| {
        debug!(path = %path.display(), "Measurement file has no usable mean");
        None
    })
}

fn parse_mean(raw: &str) -> Option<f64> {
    let export: HyperfineExport = serde_json::from_str(raw).ok()?;
    export.results.first().map(|result| result.mean)
}
