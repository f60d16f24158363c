use stamina_serde::{BitReader, BitWrite, Serde, SerdeErr};

use super::message::Message;

/// Optional server reply reporting the authoritative outcome of a
/// [`ConsumptionRequest`](super::consumption_request::ConsumptionRequest).
/// Only sent when the server is configured to acknowledge consumption.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsumptionAck {
    pub amount: f32,
    pub allowed: bool,
}

impl Message for ConsumptionAck {
    fn name() -> &'static str {
        "ConsumptionAck"
    }
}

impl Serde for ConsumptionAck {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        self.allowed.ser(writer)?;
        self.amount.ser(writer)
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let allowed = bool::de(reader)?;
        let amount = f32::de(reader)?;
        Ok(Self { amount, allowed })
    }
}
