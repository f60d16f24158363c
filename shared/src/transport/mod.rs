use std::net::SocketAddr;

mod channel;
pub mod error;

pub use channel::PacketChannel;
pub use error::{RecvError, SendError, TransportError};

/// Sends raw packets to a remote address
pub trait PacketSender: Send + Sync {
    fn send(&self, address: &SocketAddr, payload: &[u8]) -> Result<(), SendError>;
}

/// Receives raw packets, tagged with the address they came from.
/// Packets from one address must come out in the order they went in.
pub trait PacketReceiver: Send + Sync {
    fn receive(&mut self) -> Result<Option<(SocketAddr, &[u8])>, RecvError>;
}
