use thiserror::Error;

/// Errors that can occur during protocol operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Protocol is locked and cannot be modified
    #[error("Protocol is already locked and cannot be modified. Protocol.lock() has been called and no further changes are allowed")]
    AlreadyLocked,

    /// The peer registered a different channel or message set
    #[error("Protocol mismatch: local fingerprint {local:#018x} differs from remote {remote:#018x}. Both sides must register identical channels & messages")]
    Mismatch {
        local: u64,
        remote: u64,
    },
}
