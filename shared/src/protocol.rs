use stamina_serde::{BitReader, BitWriter, Serde};

use crate::{
    messages::{
        channel::{Channel, ChannelDirection, ChannelKind, StaminaChannel},
        channel_kinds::ChannelKinds,
        consumption_ack::ConsumptionAck,
        consumption_request::ConsumptionRequest,
        drain_directive::DrainDirective,
        error::{ChannelError, MessageError},
        message::{Message, MessageKind},
        message_kinds::MessageKinds,
    },
    ProcessRole,
};

pub mod error;
pub use error::ProtocolError;

// Protocol Plugin
pub trait ProtocolPlugin {
    fn build(&self, protocol: &mut Protocol);
}

/// Registers the stamina channel and its three messages.
/// Client and server must both build their protocol with this plugin.
pub struct StaminaProtocolPlugin;

impl ProtocolPlugin for StaminaProtocolPlugin {
    fn build(&self, protocol: &mut Protocol) {
        protocol
            .add_channel::<StaminaChannel>(ChannelDirection::Bidirectional)
            .add_message::<ConsumptionRequest>()
            .add_message::<DrainDirective>()
            .add_message::<ConsumptionAck>();
    }
}

/// The protocol every stamina-bridge process registers during shared startup
pub fn stamina_protocol() -> Protocol {
    Protocol::builder().add_plugin(StaminaProtocolPlugin).build()
}

// Protocol
#[derive(Default)]
pub struct Protocol {
    pub channel_kinds: ChannelKinds,
    pub message_kinds: MessageKinds,
    locked: bool,
}

impl Protocol {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> &mut Self {
        self.check_lock();
        plugin.build(self);
        self
    }

    pub fn add_channel<C: Channel>(&mut self, direction: ChannelDirection) -> &mut Self {
        self.check_lock();
        self.channel_kinds.add_channel::<C>(direction);
        self
    }

    pub fn add_message<M: Message>(&mut self) -> &mut Self {
        self.check_lock();
        self.message_kinds.add_message::<M>();
        self
    }

    // Non-panicking builder methods

    pub fn try_add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        plugin.build(self);
        Ok(self)
    }

    pub fn try_add_channel<C: Channel>(
        &mut self,
        direction: ChannelDirection,
    ) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.channel_kinds.add_channel::<C>(direction);
        Ok(self)
    }

    pub fn try_add_message<M: Message>(&mut self) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.message_kinds.add_message::<M>();
        Ok(self)
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.locked = true;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Checks if protocol is locked without panicking
    /// Returns Err if protocol is locked
    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Checks if protocol is locked, panics if it is
    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Summarizes every registered channel & message, in registration order.
    /// Two processes can only talk if their fingerprints match.
    pub fn fingerprint(&self) -> u64 {
        // FNV-1a, stable across builds
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut summary = String::new();
        for (kind, direction) in self.channel_kinds.channels() {
            summary.push_str(&format!("c:{}:{:?};", kind.name(), direction));
        }
        for kind in self.message_kinds.kinds() {
            summary.push_str(&format!("m:{};", kind.name()));
        }

        summary.bytes().fold(OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(PRIME)
        })
    }

    /// Ensures a peer registered the same channel & message set
    pub fn verify_peer(&self, peer_fingerprint: u64) -> Result<(), ProtocolError> {
        let local = self.fingerprint();
        if local == peer_fingerprint {
            Ok(())
        } else {
            Err(ProtocolError::Mismatch {
                local,
                remote: peer_fingerprint,
            })
        }
    }

    /// Frames `message` as `[channel id][message id][body]` for channel `C`
    pub fn write_message<C: Channel, M: Message>(
        &self,
        sender: ProcessRole,
        message: &M,
    ) -> Result<Vec<u8>, MessageError> {
        let channel_kind = ChannelKind::of::<C>();
        let direction = self.channel_kinds.direction(&channel_kind)?;
        if !direction.can_send_from(sender) {
            return Err(ChannelError::NotConfiguredForSending {
                channel: channel_kind.name().to_string(),
                role: sender.to_string(),
            }
            .into());
        }

        let channel_id = self.channel_kinds.net_id(&channel_kind)?;
        let message_id = self.message_kinds.net_id(&MessageKind::of::<M>())?;

        let mut writer = BitWriter::new();
        channel_id.ser(&mut writer)?;
        message_id.ser(&mut writer)?;
        message.ser(&mut writer)?;
        Ok(writer.to_bytes())
    }

    /// Reads a frame header, leaving `reader` positioned at the message body
    pub fn read_header(
        &self,
        receiver: ProcessRole,
        reader: &mut BitReader,
    ) -> Result<(ChannelKind, MessageKind), MessageError> {
        let channel_id = u16::de(reader)?;
        let channel_kind = self.channel_kinds.kind(channel_id)?;
        let direction = self.channel_kinds.direction(&channel_kind)?;
        if !direction.can_send_from(receiver.invert()) {
            return Err(ChannelError::NotConfiguredForReceiving {
                channel: channel_kind.name().to_string(),
                role: receiver.to_string(),
            }
            .into());
        }

        let message_id = u16::de(reader)?;
        let message_kind = self.message_kinds.kind(message_id)?;
        Ok((channel_kind, message_kind))
    }
}
