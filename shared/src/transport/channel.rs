use std::net::SocketAddr;

use smol::channel::{unbounded, Receiver, Sender, TryRecvError};

use super::{PacketReceiver, PacketSender, RecvError, SendError};

type Datagram = (SocketAddr, Box<[u8]>);

/// In-memory FIFO packet queue for hosts that move packets themselves.
/// The receiver reports the address given to `send`.
pub struct PacketChannel;

impl PacketChannel {
    pub fn unbounded() -> (Box<dyn PacketSender>, Box<dyn PacketReceiver>) {
        let (sender, receiver) = unbounded();
        let sender = ChannelSender { sender };
        let receiver = ChannelReceiver {
            receiver,
            held: None,
        };
        (Box::new(sender), Box::new(receiver))
    }
}

struct ChannelSender {
    sender: Sender<Datagram>,
}

impl PacketSender for ChannelSender {
    fn send(&self, address: &SocketAddr, payload: &[u8]) -> Result<(), SendError> {
        // unbounded, so this never actually blocks
        self.sender
            .send_blocking((*address, payload.into()))
            .map_err(|_| SendError { address: *address })
    }
}

struct ChannelReceiver {
    receiver: Receiver<Datagram>,
    // keeps the last payload alive for the borrow handed out by `receive`
    held: Option<Box<[u8]>>,
}

impl PacketReceiver for ChannelReceiver {
    fn receive(&mut self) -> Result<Option<(SocketAddr, &[u8])>, RecvError> {
        let (address, payload) = match self.receiver.try_recv() {
            Ok(datagram) => datagram,
            Err(TryRecvError::Empty) => return Ok(None),
            Err(TryRecvError::Closed) => return Err(RecvError),
        };
        let payload = self.held.insert(payload);
        Ok(Some((address, &payload[..])))
    }
}
