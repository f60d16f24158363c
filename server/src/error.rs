use std::net::SocketAddr;

use stamina_shared::StaminaError;
use thiserror::Error;

use crate::UserKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaminaServerError {
    /// A packet arrived from an address with no connected user
    #[error("Received a packet from {address}, which belongs to no connected user")]
    UnknownAddress {
        address: SocketAddr,
    },

    /// A client sent a message only the server may send
    #[error("User {user_key:?} sent a {message} message, which only the server may send")]
    UnexpectedMessage {
        user_key: UserKey,
        message: &'static str,
    },

    #[error("Failed to receive packets. The transport is closed")]
    RecvError,

    #[error("{0}")]
    Wrapped(#[from] StaminaError),
}
