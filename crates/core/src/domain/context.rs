// Execution Context - where the fingerprinting process itself runs

use std::fmt;

/// Whether the process runs directly on the host or inside a container.
///
/// Determined once at start-up and handed to the fingerprinter; probes that
/// need privileged tools (dmidecode, smartctl, lshw) consult this value
/// instead of re-detecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    Host,
    Container,
}

impl ExecutionContext {
    /// Context from the result of a container marker check
    pub fn from_container_marker(present: bool) -> Self {
        if present {
            ExecutionContext::Container
        } else {
            ExecutionContext::Host
        }
    }

    pub fn is_container(self) -> bool {
        self == ExecutionContext::Container
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionContext::Host => write!(f, "host"),
            ExecutionContext::Container => write!(f, "container"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_container_marker() {
        assert_eq!(
            ExecutionContext::from_container_marker(true),
            ExecutionContext::Container
        );
        assert_eq!(
            ExecutionContext::from_container_marker(false),
            ExecutionContext::Host
        );
        assert!(ExecutionContext::Container.is_container());
        assert!(!ExecutionContext::Host.is_container());
    }
}
