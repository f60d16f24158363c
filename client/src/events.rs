use std::{mem, vec::IntoIter};

use stamina_shared::ConsumptionAck;

use crate::StaminaClientError;

/// Everything that happened during one [`Client::receive`](crate::Client::receive)
pub struct Events {
    acks: Vec<ConsumptionAck>,
    errors: Vec<StaminaClientError>,
    empty: bool,
}

impl Events {
    pub(crate) fn new() -> Self {
        Self {
            acks: Vec::new(),
            errors: Vec::new(),
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: Event>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: Event>(&self) -> bool {
        V::has(self)
    }

    pub(crate) fn push_ack(&mut self, ack: ConsumptionAck) {
        self.acks.push(ack);
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: StaminaClientError) {
        self.errors.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait Event {
    type Iter;

    fn iter(events: &mut Events) -> Self::Iter;

    fn has(events: &Events) -> bool;
}

// ConsumptionAckEvent
pub struct ConsumptionAckEvent;
impl Event for ConsumptionAckEvent {
    type Iter = IntoIter<ConsumptionAck>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = mem::take(&mut events.acks);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.acks.is_empty()
    }
}

// ErrorEvent
pub struct ErrorEvent;
impl Event for ErrorEvent {
    type Iter = IntoIter<StaminaClientError>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.errors.is_empty()
    }
}
