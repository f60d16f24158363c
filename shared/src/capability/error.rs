use thiserror::Error;

/// Errors that can occur while locating the stamina capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// No entry point is registered under the configured name
    #[error("No stamina entry point registered under {name:?}. Is the stamina subsystem installed?")]
    EntryPointMissing {
        name: String,
    },

    /// The entry point exists but exposes no accessor with the role's name
    #[error("Stamina entry point {entry_point:?} has no accessor named {accessor:?}")]
    AccessorMissing {
        entry_point: String,
        accessor: String,
    },

    /// The accessor exists but currently holds no value
    #[error("Accessor {accessor:?} on stamina entry point {entry_point:?} holds no value yet")]
    AccessorEmpty {
        entry_point: String,
        accessor: String,
    },

    /// The lookup machinery itself failed
    #[error("Stamina capability lookup failed: {detail}")]
    LookupFailed {
        detail: String,
    },
}

impl DiscoveryError {
    /// "Not found" conditions are expected while the optional subsystem is
    /// still starting up, so they log as warnings. Everything else is an error.
    pub fn is_expected(&self) -> bool {
        !matches!(self, DiscoveryError::LookupFailed { .. })
    }
}

/// Errors raised by a call into a resolved stamina capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The capability reported a failure
    #[error("{0}")]
    Failed(String),

    /// The capability panicked while handling the call
    #[error("capability panicked: {0}")]
    Panicked(String),
}

impl CapabilityError {
    pub fn failed(detail: impl Into<String>) -> Self {
        CapabilityError::Failed(detail.into())
    }
}
