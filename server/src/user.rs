use std::net::SocketAddr;

// UserKey
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct UserKey(u64);

impl UserKey {
    pub fn to_u64(&self) -> u64 {
        self.0
    }

    pub fn from_u64(value: u64) -> Self {
        UserKey(value)
    }
}

/// A connected client
#[derive(Clone, Debug)]
pub struct User {
    address: SocketAddr,
}

impl User {
    pub(crate) fn new(address: SocketAddr) -> Self {
        Self { address }
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }
}

/// Maps a connected user onto the live player entity the stamina capability
/// understands. `None` means the player is gone (e.g. disconnected while a
/// message was in flight).
pub trait PlayerResolver<E>: Send + Sync {
    fn player_entity(&self, user_key: &UserKey) -> Option<E>;
}

impl<E, F> PlayerResolver<E> for F
where
    F: Fn(&UserKey) -> Option<E> + Send + Sync,
{
    fn player_entity(&self, user_key: &UserKey) -> Option<E> {
        self(user_key)
    }
}
