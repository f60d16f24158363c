use std::any::TypeId;

use crate::ProcessRole;

/// A named lane that messages travel over
pub trait Channel: 'static {
    fn name() -> &'static str;
}

/// Which sides are allowed to send on a channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelDirection {
    ClientToServer,
    ServerToClient,
    Bidirectional,
}

impl ChannelDirection {
    pub fn can_send_to_server(&self) -> bool {
        matches!(
            self,
            ChannelDirection::ClientToServer | ChannelDirection::Bidirectional
        )
    }

    pub fn can_send_to_client(&self) -> bool {
        matches!(
            self,
            ChannelDirection::ServerToClient | ChannelDirection::Bidirectional
        )
    }

    /// Whether a process acting as `role` may send on this channel
    pub fn can_send_from(&self, role: ProcessRole) -> bool {
        match role {
            ProcessRole::Client => self.can_send_to_server(),
            ProcessRole::Server => self.can_send_to_client(),
            ProcessRole::Unknown => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelKind {
    type_id: TypeId,
    name: &'static str,
}

impl ChannelKind {
    pub fn of<C: Channel>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: C::name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The single channel all stamina traffic uses
pub struct StaminaChannel;

impl Channel for StaminaChannel {
    fn name() -> &'static str {
        "stamina_bridge"
    }
}
