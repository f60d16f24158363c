//! In-memory socket implementation for end-to-end testing.
//! Routes packets between one server and one client without network I/O.

use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use stamina_shared::{PacketReceiver, PacketSender, RecvError, SendError};

pub const CLIENT_ADDR: &str = "127.0.0.1:12345";
pub const SERVER_ADDR: &str = "127.0.0.1:14191";

type PacketQueue = Arc<Mutex<VecDeque<(SocketAddr, Box<[u8]>)>>>;

/// Pair of connected packet queues, one per direction
pub struct LocalSocketPair {
    client_addr: SocketAddr,
    server_addr: SocketAddr,
    server_to_client: PacketQueue,
    client_to_server: PacketQueue,
}

impl LocalSocketPair {
    pub fn new() -> Self {
        Self {
            client_addr: CLIENT_ADDR.parse().unwrap(),
            server_addr: SERVER_ADDR.parse().unwrap(),
            server_to_client: Arc::new(Mutex::new(VecDeque::new())),
            client_to_server: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn client_addr(&self) -> SocketAddr {
        self.client_addr
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn server_socket(&self) -> (Box<dyn PacketSender>, Box<dyn PacketReceiver>) {
        let sender = LocalSender {
            queue: self.server_to_client.clone(),
            local_addr: self.server_addr,
            peer_addr: self.client_addr,
        };
        let receiver = LocalReceiver::new(self.client_to_server.clone());
        (Box::new(sender), Box::new(receiver))
    }

    pub fn client_socket(&self) -> (Box<dyn PacketSender>, Box<dyn PacketReceiver>) {
        let sender = LocalSender {
            queue: self.client_to_server.clone(),
            local_addr: self.client_addr,
            peer_addr: self.server_addr,
        };
        let receiver = LocalReceiver::new(self.server_to_client.clone());
        (Box::new(sender), Box::new(receiver))
    }

    /// Queues a packet for the server as if it came from `from`
    pub fn inject_to_server(&self, from: SocketAddr, payload: &[u8]) {
        self.client_to_server
            .lock()
            .unwrap()
            .push_back((from, payload.into()));
    }

    /// Queues a packet for the client as if it came from `from`
    pub fn inject_to_client(&self, from: SocketAddr, payload: &[u8]) {
        self.server_to_client
            .lock()
            .unwrap()
            .push_back((from, payload.into()));
    }

    /// Packets sent by the client that the server has not read yet
    pub fn pending_for_server(&self) -> Vec<Box<[u8]>> {
        Self::pending(&self.client_to_server)
    }

    /// Packets sent by the server that the client has not read yet
    pub fn pending_for_client(&self) -> Vec<Box<[u8]>> {
        Self::pending(&self.server_to_client)
    }

    fn pending(queue: &PacketQueue) -> Vec<Box<[u8]>> {
        queue
            .lock()
            .unwrap()
            .iter()
            .map(|(_, payload)| payload.clone())
            .collect()
    }
}

impl Default for LocalSocketPair {
    fn default() -> Self {
        Self::new()
    }
}

// Socket Components

struct LocalSender {
    queue: PacketQueue,
    local_addr: SocketAddr,
    peer_addr: SocketAddr,
}

impl PacketSender for LocalSender {
    fn send(&self, address: &SocketAddr, payload: &[u8]) -> Result<(), SendError> {
        if *address != self.peer_addr {
            // Nothing listens there
            return Err(SendError { address: *address });
        }
        self.queue
            .lock()
            .map_err(|_| SendError { address: *address })?
            .push_back((self.local_addr, payload.into()));
        Ok(())
    }
}

struct LocalReceiver {
    queue: PacketQueue,
    last_payload: Option<Box<[u8]>>,
}

impl LocalReceiver {
    fn new(queue: PacketQueue) -> Self {
        Self {
            queue,
            last_payload: None,
        }
    }
}

impl PacketReceiver for LocalReceiver {
    fn receive(&mut self) -> Result<Option<(SocketAddr, &[u8])>, RecvError> {
        let next = self.queue.lock().map_err(|_| RecvError)?.pop_front();
        match next {
            Some((address, payload)) => {
                let payload = self.last_payload.insert(payload);
                Ok(Some((address, &payload[..])))
            }
            None => Ok(None),
        }
    }
}
