pub mod channel;
pub mod channel_kinds;
pub mod consumption_ack;
pub mod consumption_request;
pub mod drain_directive;
pub mod error;
pub mod message;
pub mod message_kinds;
pub mod stamina_message;
