use std::{mem, vec::IntoIter};

use stamina_shared::{ConsumptionRequest, DrainDirective};

use crate::{authority::DirectiveOutcome, user::UserKey, StaminaServerError};

/// Everything that happened during one [`Server::receive`](crate::Server::receive)
pub struct Events {
    consumptions: Vec<(UserKey, ConsumptionRequest, Option<bool>)>,
    drains: Vec<(UserKey, DrainDirective, DirectiveOutcome)>,
    errors: Vec<StaminaServerError>,
    empty: bool,
}

impl Events {
    pub(crate) fn new() -> Self {
        Self {
            consumptions: Vec::new(),
            drains: Vec::new(),
            errors: Vec::new(),
            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: Event>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: Event>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_consumption(
        &mut self,
        user_key: &UserKey,
        request: ConsumptionRequest,
        verdict: Option<bool>,
    ) {
        self.consumptions.push((*user_key, request, verdict));
        self.empty = false;
    }

    pub(crate) fn push_drain(
        &mut self,
        user_key: &UserKey,
        directive: DrainDirective,
        outcome: DirectiveOutcome,
    ) {
        self.drains.push((*user_key, directive, outcome));
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: StaminaServerError) {
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

// ConsumptionEvent
/// Yields `(user, request, verdict)`. The verdict is `None` when the request
/// was dropped because the user had no live player.
pub struct ConsumptionEvent;
impl Event for ConsumptionEvent {
    type Iter = IntoIter<(UserKey, ConsumptionRequest, Option<bool>)>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = mem::take(&mut events.consumptions);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.consumptions.is_empty()
    }
}

// DrainEvent
pub struct DrainEvent;
impl Event for DrainEvent {
    type Iter = IntoIter<(UserKey, DrainDirective, DirectiveOutcome)>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = mem::take(&mut events.drains);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.drains.is_empty()
    }
}

// ErrorEvent
pub struct ErrorEvent;
impl Event for ErrorEvent {
    type Iter = IntoIter<StaminaServerError>;

    fn iter(events: &mut Events) -> Self::Iter {
        let list = mem::take(&mut events.errors);
        IntoIterator::into_iter(list)
    }

    fn has(events: &Events) -> bool {
        !events.errors.is_empty()
    }
}
