use std::sync::Arc;

use log::warn;

use stamina_shared::{
    CapabilityResolver, PacketReceiver, PacketSender, ProcessRole, Protocol, StaminaError,
    StaminaMessage,
};

use crate::{
    events::Events, facade::ClientFacade, proxy::ClientRequestProxy, ClientConfig,
    StaminaClientError,
};

/// Client end of stamina-bridge: owns the outbound request proxy and reads
/// the optional acknowledgements the server may send back
pub struct Client<E> {
    config: ClientConfig,
    protocol: Arc<Protocol>,
    proxy: Arc<ClientRequestProxy<E>>,
    receiver: Option<Box<dyn PacketReceiver>>,
    incoming_events: Events,
}

impl<E> Client<E> {
    /// Create a new Client. The protocol is locked if it is not already.
    pub fn new(
        config: ClientConfig,
        protocol: Protocol,
        resolver: Arc<CapabilityResolver<E>>,
        sender: Box<dyn PacketSender>,
    ) -> Self {
        let mut protocol = protocol;
        if !protocol.is_locked() {
            protocol.lock();
        }
        let protocol = Arc::new(protocol);
        let proxy = Arc::new(ClientRequestProxy::new(
            resolver,
            protocol.clone(),
            sender,
            config.server_address,
        ));

        Self {
            config,
            protocol,
            proxy,
            receiver: None,
            incoming_events: Events::new(),
        }
    }

    /// Attach a receiver for server acknowledgements
    pub fn listen(&mut self, receiver: Box<dyn PacketReceiver>) {
        self.receiver = Some(receiver);
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn proxy(&self) -> &Arc<ClientRequestProxy<E>> {
        &self.proxy
    }

    /// Facade for game code running in this client
    pub fn facade(&self) -> ClientFacade<E> {
        ClientFacade::new(self.proxy.clone(), &self.config.action_namespace)
    }

    /// Reads every pending packet from the server
    pub fn receive(&mut self) -> Events {
        if let Some(receiver) = self.receiver.as_mut() {
            loop {
                match receiver.receive() {
                    Ok(Some((address, payload))) => {
                        if address != self.config.server_address {
                            warn!("Client Error: packet from unknown address {}", address);
                            self.incoming_events
                                .push_error(StaminaClientError::UnknownAddress { address });
                            continue;
                        }
                        match StaminaMessage::decode(&self.protocol, ProcessRole::Client, payload) {
                            Ok(StaminaMessage::ConsumptionAck(ack)) => {
                                self.incoming_events.push_ack(ack);
                            }
                            Ok(StaminaMessage::ConsumptionRequest(_)) => {
                                self.incoming_events
                                    .push_error(StaminaClientError::UnexpectedMessage {
                                        message: "ConsumptionRequest",
                                    });
                            }
                            Ok(StaminaMessage::DrainDirective(_)) => {
                                self.incoming_events
                                    .push_error(StaminaClientError::UnexpectedMessage {
                                        message: "DrainDirective",
                                    });
                            }
                            Err(error) => {
                                warn!("Client Error: cannot read packet from server: {}", error);
                                self.incoming_events
                                    .push_error(StaminaError::from(error).into());
                            }
                        }
                    }
                    Ok(None) => {
                        // No more packets, break loop
                        break;
                    }
                    Err(_) => {
                        self.incoming_events.push_error(StaminaClientError::RecvError);
                        break;
                    }
                }
            }
        }

        std::mem::replace(&mut self.incoming_events, Events::new())
    }
}
