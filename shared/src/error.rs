use thiserror::Error;

use crate::{
    capability::error::{CapabilityError, DiscoveryError},
    messages::error::MessageError,
    protocol::ProtocolError,
    transport::error::TransportError,
};

/// Top-level error for everything that can go wrong moving stamina traffic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaminaError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),
}

impl From<crate::transport::error::SendError> for StaminaError {
    fn from(err: crate::transport::error::SendError) -> Self {
        StaminaError::Transport(err.into())
    }
}

impl From<crate::transport::error::RecvError> for StaminaError {
    fn from(err: crate::transport::error::RecvError) -> Self {
        StaminaError::Transport(err.into())
    }
}
