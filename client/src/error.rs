use std::net::SocketAddr;

use stamina_shared::StaminaError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaminaClientError {
    /// A packet arrived from somewhere other than the server
    #[error("Received a packet from {address}, which is not the server")]
    UnknownAddress {
        address: SocketAddr,
    },

    /// The server sent a message only clients may send
    #[error("Server sent a {message} message, which only clients may send")]
    UnexpectedMessage {
        message: &'static str,
    },

    #[error("Failed to receive packets. The transport is closed")]
    RecvError,

    #[error("{0}")]
    Wrapped(#[from] StaminaError),
}
