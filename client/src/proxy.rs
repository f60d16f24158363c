use std::{net::SocketAddr, sync::Arc};

use log::{debug, warn};

use stamina_shared::{
    namespace_action_id, CapabilityResolver, ConsumptionRequest, DrainDirective, PacketSender,
    ProcessRole, Protocol, StaminaError, StaminaMessage,
};

/// Turns local stamina calls into fire-and-forget messages for the server.
///
/// Every request reports `true`: the real decision happens on the server and
/// is never waited for. When no stamina capability is bound on this client,
/// nothing is sent at all.
pub struct ClientRequestProxy<E> {
    resolver: Arc<CapabilityResolver<E>>,
    protocol: Arc<Protocol>,
    sender: Box<dyn PacketSender>,
    server_address: SocketAddr,
}

impl<E> ClientRequestProxy<E> {
    pub fn new(
        resolver: Arc<CapabilityResolver<E>>,
        protocol: Arc<Protocol>,
        sender: Box<dyn PacketSender>,
        server_address: SocketAddr,
    ) -> Self {
        Self {
            resolver,
            protocol,
            sender,
            server_address,
        }
    }

    pub fn resolver(&self) -> &Arc<CapabilityResolver<E>> {
        &self.resolver
    }

    pub fn server_address(&self) -> SocketAddr {
        self.server_address
    }

    /// The server identifies the player by connection, so `_player` is not
    /// sent
    pub fn request_consumption(&self, _player: &E, amount: f32) -> bool {
        if !self.capability_present() {
            return true;
        }
        self.send(ConsumptionRequest::new(amount).into());
        true
    }

    pub fn request_drain_start(
        &self,
        _player: &E,
        namespace: &str,
        action_id: &str,
        amount_per_second: f32,
    ) -> bool {
        if !self.capability_present() {
            return true;
        }
        let action_id = namespace_action_id(namespace, action_id);
        self.send(DrainDirective::start(action_id, amount_per_second).into());
        true
    }

    pub fn request_drain_stop(&self, _player: &E, namespace: &str, action_id: &str) {
        if !self.capability_present() {
            return;
        }
        let action_id = namespace_action_id(namespace, action_id);
        self.send(DrainDirective::stop(action_id).into());
    }

    fn capability_present(&self) -> bool {
        self.resolver.resolve(ProcessRole::Client).is_some()
    }

    fn send(&self, message: StaminaMessage) {
        if let Err(error) = self.try_send(&message) {
            warn!("Client Error: stamina request not sent, assuming allowed: {}", error);
        } else {
            debug!("Sent {:?} to {}", message, self.server_address);
        }
    }

    fn try_send(&self, message: &StaminaMessage) -> Result<(), StaminaError> {
        let bytes = message.encode(&self.protocol, ProcessRole::Client)?;
        self.sender.send(&self.server_address, &bytes)?;
        Ok(())
    }
}
