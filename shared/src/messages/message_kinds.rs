use std::collections::HashMap;

use super::{
    error::MessageKindsError,
    message::{Message, MessageKind},
};

/// Registry of messages, assigning network ids in registration order
pub struct MessageKinds {
    current_net_id: u16,
    kind_map: HashMap<MessageKind, u16>,
    net_id_map: HashMap<u16, MessageKind>,
}

impl MessageKinds {
    pub fn new() -> Self {
        Self {
            current_net_id: 0,
            kind_map: HashMap::new(),
            net_id_map: HashMap::new(),
        }
    }

    pub fn add_message<M: Message>(&mut self) {
        let kind = MessageKind::of::<M>();
        if self.kind_map.contains_key(&kind) {
            return;
        }
        let net_id = self.current_net_id;
        self.kind_map.insert(kind, net_id);
        self.net_id_map.insert(net_id, kind);
        self.current_net_id += 1;
    }

    pub fn net_id(&self, kind: &MessageKind) -> Result<u16, MessageKindsError> {
        self.kind_map
            .get(kind)
            .copied()
            .ok_or(MessageKindsError::MessageKindNotFound {
                message: kind.name().to_string(),
            })
    }

    pub fn kind(&self, net_id: u16) -> Result<MessageKind, MessageKindsError> {
        self.net_id_map
            .get(&net_id)
            .copied()
            .ok_or(MessageKindsError::NetIdNotFound { net_id })
    }

    /// Registered messages ordered by network id
    pub fn kinds(&self) -> Vec<MessageKind> {
        (0..self.current_net_id)
            .filter_map(|net_id| self.net_id_map.get(&net_id).copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.kind_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kind_map.is_empty()
    }
}

impl Default for MessageKinds {
    fn default() -> Self {
        Self::new()
    }
}
