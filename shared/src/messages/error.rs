use stamina_serde::SerdeErr;
use thiserror::Error;

/// Errors that can occur during message kind operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageKindsError {
    /// Network ID not found in registry
    #[error("Network ID {net_id} not found in message registry. Message type must be registered with Protocol via add_message()")]
    NetIdNotFound {
        net_id: u16,
    },

    /// Message kind not found in registry
    #[error("Message {message:?} not found in registry. Message type must be registered with Protocol via add_message()")]
    MessageKindNotFound {
        message: String,
    },
}

/// Errors that can occur during channel operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// Channel kind not found in registry
    #[error("Channel {channel:?} not found in registry. Channel type must be registered with Protocol via add_channel()")]
    ChannelKindNotFound {
        channel: String,
    },

    /// Network ID not found in channel registry
    #[error("Network ID {net_id} not found in channel registry. Channel type must be registered with Protocol via add_channel()")]
    NetIdNotFound {
        net_id: u16,
    },

    /// Channel not configured for sending from this side
    #[error("Channel {channel:?} not configured for sending from the {role} side. Check the ChannelDirection passed to add_channel()")]
    NotConfiguredForSending {
        channel: String,
        role: String,
    },

    /// Channel not configured for receiving on this side
    #[error("Channel {channel:?} not configured for receiving on the {role} side. Check the ChannelDirection passed to add_channel()")]
    NotConfiguredForReceiving {
        channel: String,
        role: String,
    },
}

/// General message-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Message kinds error
    #[error("Message kinds error: {0}")]
    MessageKinds(#[from] MessageKindsError),

    /// Channel error
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Payload could not be read
    #[error("Serde error: {0}")]
    Serde(#[from] SerdeErr),

    /// Message is registered but has no place in the stamina message set
    #[error("Message {message:?} is registered with the Protocol but is not a stamina message")]
    UnexpectedMessage {
        message: String,
    },
}
