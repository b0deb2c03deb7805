// Execution context detection from container marker files

use std::path::Path;
use tracing::debug;

use benchsum_core::application::constants::CONTAINER_MARKER_FILES;
use benchsum_core::domain::ExecutionContext;

/// Container if any of `markers` exists, otherwise host
pub fn detect_execution_context_from<P: AsRef<Path>>(markers: &[P]) -> ExecutionContext {
    let mut present = false;
    for marker in markers {
        let marker = marker.as_ref();
        if marker.exists() {
            debug!(marker = %marker.display(), "Container marker found");
            present = true;
            break;
        }
    }
    ExecutionContext::from_container_marker(present)
}

/// Check the standard Docker / Podman marker files
pub fn detect_execution_context() -> ExecutionContext {
    detect_execution_context_from(&CONTAINER_MARKER_FILES)
}
