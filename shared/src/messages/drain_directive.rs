use stamina_serde::{BitReader, BitWrite, Serde, SerdeErr};

use super::message::Message;

/// Starts or stops a continuous drain session on the server.
///
/// `action_id` is already namespaced by the issuing subsystem.
/// `amount_per_second` is meaningless when `starting` is false.
#[derive(Clone, Debug, PartialEq)]
pub struct DrainDirective {
    pub action_id: String,
    pub amount_per_second: f32,
    pub starting: bool,
}

impl DrainDirective {
    pub fn start(action_id: impl Into<String>, amount_per_second: f32) -> Self {
        Self {
            action_id: action_id.into(),
            amount_per_second,
            starting: true,
        }
    }

    pub fn stop(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            amount_per_second: 0.0,
            starting: false,
        }
    }
}

impl Message for DrainDirective {
    fn name() -> &'static str {
        "DrainDirective"
    }
}

impl Serde for DrainDirective {
    fn ser(&self, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        self.starting.ser(writer)?;
        self.action_id.ser(writer)?;
        if self.starting {
            self.amount_per_second.ser(writer)?;
        }
        Ok(())
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let starting = bool::de(reader)?;
        let action_id = String::de(reader)?;
        if starting {
            let amount_per_second = f32::de(reader)?;
            Ok(Self::start(action_id, amount_per_second))
        } else {
            Ok(Self::stop(action_id))
        }
    }
}
