use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use log::warn;

use stamina_shared::{
    ConsumptionAck, PacketReceiver, PacketSender, ProcessRole, Protocol, StaminaError,
    StaminaMessage,
};

use crate::{
    authority::ServerAuthority,
    events::Events,
    facade::ServerFacade,
    user::{User, UserKey},
    ServerConfig, StaminaServerError,
};

/// Receives stamina traffic from connected clients and hands it to the
/// [`ServerAuthority`]
pub struct Server<E> {
    config: ServerConfig,
    protocol: Protocol,
    authority: Arc<ServerAuthority<E>>,
    io: Option<(Box<dyn PacketSender>, Box<dyn PacketReceiver>)>,
    // Users
    users: HashMap<UserKey, User>,
    user_connections: HashMap<SocketAddr, UserKey>,
    next_user_key: u64,
    // Events
    incoming_events: Events,
}

impl<E> Server<E> {
    /// Create a new Server. The protocol is locked if it is not already.
    pub fn new(config: ServerConfig, protocol: Protocol, authority: Arc<ServerAuthority<E>>) -> Self {
        let mut protocol = protocol;
        if !protocol.is_locked() {
            protocol.lock();
        }

        Self {
            config,
            protocol,
            authority,
            io: None,
            users: HashMap::new(),
            user_connections: HashMap::new(),
            next_user_key: 0,
            incoming_events: Events::new(),
        }
    }

    /// Attach the packet transport
    pub fn listen(&mut self, sender: Box<dyn PacketSender>, receiver: Box<dyn PacketReceiver>) {
        self.io = Some((sender, receiver));
    }

    pub fn is_listening(&self) -> bool {
        self.io.is_some()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn authority(&self) -> &Arc<ServerAuthority<E>> {
        &self.authority
    }

    /// Facade for game code running inside this server
    pub fn facade(&self) -> ServerFacade<E> {
        ServerFacade::new(self.authority.clone(), &self.config.action_namespace)
    }

    // Users

    /// Registers the client at `address`. Connecting an address twice yields
    /// the same key.
    pub fn connect_user(&mut self, address: SocketAddr) -> UserKey {
        if let Some(user_key) = self.user_connections.get(&address) {
            return *user_key;
        }
        let user_key = UserKey::from_u64(self.next_user_key);
        self.next_user_key += 1;
        self.users.insert(user_key, User::new(address));
        self.user_connections.insert(address, user_key);
        user_key
    }

    pub fn disconnect_user(&mut self, user_key: &UserKey) -> Option<User> {
        let user = self.users.remove(user_key)?;
        self.user_connections.remove(&user.address());
        Some(user)
    }

    pub fn user(&self, user_key: &UserKey) -> Option<&User> {
        self.users.get(user_key)
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    // Packets

    /// Drains the transport, applies every inbound message, and returns what
    /// happened
    pub fn receive(&mut self) -> Events {
        let mut packets = Vec::new();
        if let Some((_, receiver)) = self.io.as_mut() {
            loop {
                match receiver.receive() {
                    Ok(Some((address, payload))) => {
                        packets.push((address, payload.to_vec()));
                    }
                    Ok(None) => {
                        // No more packets, break loop
                        break;
                    }
                    Err(_) => {
                        self.incoming_events.push_error(StaminaServerError::RecvError);
                        break;
                    }
                }
            }
        }

        for (address, payload) in packets {
            self.process_packet(address, &payload);
        }

        std::mem::replace(&mut self.incoming_events, Events::new())
    }

    fn process_packet(&mut self, address: SocketAddr, payload: &[u8]) {
        let Some(user_key) = self.user_connections.get(&address).copied() else {
            warn!("Server Error: packet from unknown address {}", address);
            self.incoming_events
                .push_error(StaminaServerError::UnknownAddress { address });
            return;
        };

        let message = match StaminaMessage::decode(&self.protocol, ProcessRole::Server, payload) {
            Ok(message) => message,
            Err(error) => {
                warn!("Server Error: cannot read packet from {:?}: {}", user_key, error);
                self.incoming_events
                    .push_error(StaminaError::from(error).into());
                return;
            }
        };

        match message {
            StaminaMessage::ConsumptionRequest(request) => {
                let verdict = self.authority.on_consumption_request(&user_key, &request);
                if self.config.acknowledge_consumption {
                    if let Some(allowed) = verdict {
                        let ack = ConsumptionAck {
                            amount: request.amount,
                            allowed,
                        };
                        self.send_ack(address, ack);
                    }
                }
                self.incoming_events
                    .push_consumption(&user_key, request, verdict);
            }
            StaminaMessage::DrainDirective(directive) => {
                let outcome = self.authority.on_drain_directive(&user_key, &directive);
                self.incoming_events.push_drain(&user_key, directive, outcome);
            }
            StaminaMessage::ConsumptionAck(_) => {
                self.incoming_events
                    .push_error(StaminaServerError::UnexpectedMessage {
                        user_key,
                        message: "ConsumptionAck",
                    });
            }
        }
    }

    fn send_ack(&mut self, address: SocketAddr, ack: ConsumptionAck) {
        let Some((sender, _)) = self.io.as_ref() else {
            return;
        };
        let result = StaminaMessage::from(ack)
            .encode(&self.protocol, ProcessRole::Server)
            .map_err(StaminaError::from)
            .and_then(|bytes| sender.send(&address, &bytes).map_err(StaminaError::from));
        if let Err(error) = result {
            warn!("Server Error: cannot send acknowledgement to {}: {}", address, error);
            self.incoming_events.push_error(error.into());
        }
    }
}
