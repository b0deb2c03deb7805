// Results root resolution

use std::path::PathBuf;

use benchsum_core::application::constants::{CONTAINER_RESULTS_DIR, HOST_RESULTS_DIR};
use benchsum_core::domain::ExecutionContext;
use benchsum_core::{AppError, Result};

/// Default root for the given execution context, `~` expanded
pub fn default_results_root(context: ExecutionContext) -> PathBuf {
    match context {
        ExecutionContext::Container => PathBuf::from(CONTAINER_RESULTS_DIR),
        ExecutionContext::Host => PathBuf::from(shellexpand::tilde(HOST_RESULTS_DIR).as_ref()),
    }
}

/// Root to read from: an explicit override (with `~` and `$VAR` expansion)
/// or the context default.
///
/// # Errors
/// AppError::Config if the override references an undefined variable.
pub fn resolve_results_root(
    context: ExecutionContext,
    override_dir: Option<&str>,
) -> Result<PathBuf> {
    match override_dir {
        Some(raw) => {
            let expanded = shellexpand::full(raw)
                .map_err(|e| AppError::Config(format!("results dir '{}': {}", raw, e)))?;
            Ok(PathBuf::from(expanded.as_ref()))
        }
        None => Ok(default_results_root(context)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_default() {
        assert_eq!(
            resolve_results_root(ExecutionContext::Container, None).unwrap(),
            PathBuf::from("/ngen/bench/results")
        );
    }

    #[test]
    fn test_host_default_is_expanded() {
        let root = resolve_results_root(ExecutionContext::Host, None).unwrap();
        let rendered = root.to_string_lossy();

        assert!(!rendered.starts_with('~'));
        assert!(rendered.ends_with(".ngiab/bench/results"));
    }

    #[test]
    fn test_override_wins() {
        let root = resolve_results_root(ExecutionContext::Container, Some("/tmp/runs")).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/runs"));
    }

    #[test]
    fn test_override_with_undefined_variable() {
        let err = resolve_results_root(
            ExecutionContext::Host,
            Some("$BENCHSUM_SURELY_UNDEFINED_VAR/results"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
