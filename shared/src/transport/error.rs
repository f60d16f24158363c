use std::net::SocketAddr;

use thiserror::Error;

/// A packet could not be handed to the transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to send packet to {address}. The transport is closed")]
pub struct SendError {
    pub address: SocketAddr,
}

/// The transport can no longer deliver packets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to receive packet. The transport is closed")]
pub struct RecvError;

/// Errors that can occur during transport operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Send error: {0}")]
    Send(#[from] SendError),

    #[error("Receive error: {0}")]
    Recv(#[from] RecvError),
}
