use stamina_serde::{BitReader, Serde};

use crate::{Protocol, ProcessRole};

use super::{
    channel::StaminaChannel, consumption_ack::ConsumptionAck,
    consumption_request::ConsumptionRequest, drain_directive::DrainDirective,
    error::MessageError,
};

/// Every message that travels over the [`StaminaChannel`]
#[derive(Clone, Debug, PartialEq)]
pub enum StaminaMessage {
    ConsumptionRequest(ConsumptionRequest),
    DrainDirective(DrainDirective),
    ConsumptionAck(ConsumptionAck),
}

impl StaminaMessage {
    pub fn encode(&self, protocol: &Protocol, sender: ProcessRole) -> Result<Vec<u8>, MessageError> {
        match self {
            StaminaMessage::ConsumptionRequest(message) => {
                protocol.write_message::<StaminaChannel, _>(sender, message)
            }
            StaminaMessage::DrainDirective(message) => {
                protocol.write_message::<StaminaChannel, _>(sender, message)
            }
            StaminaMessage::ConsumptionAck(message) => {
                protocol.write_message::<StaminaChannel, _>(sender, message)
            }
        }
    }

    pub fn decode(
        protocol: &Protocol,
        receiver: ProcessRole,
        payload: &[u8],
    ) -> Result<Self, MessageError> {
        let mut reader = BitReader::new(payload);
        let (_, message_kind) = protocol.read_header(receiver, &mut reader)?;

        if message_kind.is::<ConsumptionRequest>() {
            Ok(ConsumptionRequest::de(&mut reader)?.into())
        } else if message_kind.is::<DrainDirective>() {
            Ok(DrainDirective::de(&mut reader)?.into())
        } else if message_kind.is::<ConsumptionAck>() {
            Ok(ConsumptionAck::de(&mut reader)?.into())
        } else {
            Err(MessageError::UnexpectedMessage {
                message: message_kind.name().to_string(),
            })
        }
    }
}

impl From<ConsumptionRequest> for StaminaMessage {
    fn from(message: ConsumptionRequest) -> Self {
        StaminaMessage::ConsumptionRequest(message)
    }
}

impl From<DrainDirective> for StaminaMessage {
    fn from(message: DrainDirective) -> Self {
        StaminaMessage::DrainDirective(message)
    }
}

impl From<ConsumptionAck> for StaminaMessage {
    fn from(message: ConsumptionAck) -> Self {
        StaminaMessage::ConsumptionAck(message)
    }
}
