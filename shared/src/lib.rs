//! # Stamina Shared
//! Common functionality shared between stamina-server & stamina-client crates:
//! the optional stamina capability and its resolver, the wire protocol, and
//! the packet transport seam.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use stamina_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr, MAX_STRING_BYTES};

mod capability;
mod error;
mod facade;
mod fatigue;
mod messages;
mod protocol;
mod transport;
mod types;

pub use capability::{
    capability::{CapabilityBinding, StaminaCapability},
    error::{CapabilityError, DiscoveryError},
    host::{CapabilityHost, EntryPoint},
    invoke::guarded_call,
    registry::{CapabilityRegistry, StaminaEntryPoint},
    resolver::{CapabilityResolver, ResolutionState, ResolutionStatus, ResolverConfig},
};
pub use error::StaminaError;
pub use facade::{namespace_action_id, StaminaFacade, StaminaQueries, UNKNOWN_STAMINA};
pub use fatigue::FatigueSource;
pub use messages::{
    channel::{Channel, ChannelDirection, ChannelKind, StaminaChannel},
    channel_kinds::ChannelKinds,
    consumption_ack::ConsumptionAck,
    consumption_request::{sanitize_amount, ConsumptionRequest},
    drain_directive::DrainDirective,
    error::{ChannelError, MessageError, MessageKindsError},
    message::{Message, MessageKind},
    message_kinds::MessageKinds,
    stamina_message::StaminaMessage,
};
pub use protocol::{stamina_protocol, Protocol, ProtocolError, ProtocolPlugin, StaminaProtocolPlugin};
pub use transport::{
    PacketChannel, PacketReceiver, PacketSender, RecvError, SendError, TransportError,
};
pub use types::ProcessRole;
