use stamina_serde::{BitReader, BitWrite, Serde, SerdeErr};

use super::message::Message;

/// Client asks the server to deduct a one-shot amount of stamina
#[derive(Clone, Debug, PartialEq)]
pub struct ConsumptionRequest {
    /// Never negative
    pub amount: f32,
}

impl ConsumptionRequest {
    pub fn new(amount: f32) -> Self {
        Self {
            amount: sanitize_amount(amount),
        }
    }
}

/// Clamps an amount into the non-negative range. NaN becomes zero.
pub fn sanitize_amount(amount: f32) -> f32 {
    if amount.is_nan() {
        0.0
    } else {
        amount.max(0.0)
    }
}

impl Message for ConsumptionRequest {
    fn name() -> &'static str {
        "ConsumptionRequest"
    }
}

impl Serde for ConsumptionRequest {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        self.amount.ser(writer)
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self::new(f32::de(reader)?))
    }
}
