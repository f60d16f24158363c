use std::any::TypeId;

use stamina_serde::Serde;

/// A type that can be registered with the [`Protocol`](crate::Protocol) and
/// sent over a channel
pub trait Message: Serde + Send + Sync + 'static {
    /// Stable name used when comparing protocols between processes
    fn name() -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageKind {
    type_id: TypeId,
    name: &'static str,
}

impl MessageKind {
    pub fn of<M: Message>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            name: M::name(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<M: Message>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }
}
