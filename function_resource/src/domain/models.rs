//! Records produced while reconciling declared and observed state

use models_function::{FunctionConfig, RemoteFunction};

#[cfg(test)]
mod tests;

/// Which parts of a function diverge between the declared configuration and
/// the last observed remote state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionDrift {
    /// a configuration field (description, handler, memory, role, runtime,
    /// timeout) differs
    pub configuration: bool,
    /// the local archive digest differs from the deployed code digest
    pub code: bool,
}

impl FunctionDrift {
    /// Compares the declared configuration and the local archive digest
    /// against the observed remote record.
    ///
    /// Declared values are resolved through their platform defaults first, so
    /// an unset `memory_size` does not drift against a remote value of 128.
    /// A declared description of `None` and an empty remote description are
    /// the same thing.
    pub fn detect(
        desired: &FunctionConfig,
        observed: &RemoteFunction,
        local_code_sha256: &str,
    ) -> Self {
        let configuration = desired.handler != observed.handler
            || desired.role != observed.role
            || desired.memory_size() != observed.memory_size
            || desired.timeout() != observed.timeout
            || desired.runtime() != observed.runtime
            || desired.description.as_deref().unwrap_or_default()
                != observed.description.as_deref().unwrap_or_default();

        FunctionDrift {
            configuration,
            code: local_code_sha256 != observed.code_sha256,
        }
    }

    /// true when nothing diverges and no remote mutation is needed
    pub fn is_converged(&self) -> bool {
        !self.configuration && !self.code
    }
}
